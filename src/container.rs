//! Contenedor generico de ingredientes. Es el unico tipo de ingredientes que se puede modificar.
use std::{collections::HashMap, fmt};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{errors::KitchenError, ingredients::Ingredients};

/// Mapea el nombre de cada ingrediente a la cantidad disponible.
/// Nunca guarda cantidades nulas o negativas: al llegar a 0 el ingrediente se elimina.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HashMap<String, f64>", into = "HashMap<String, f64>")]
pub struct IngredientContainer {
    ingredients: HashMap<String, f64>,
}

impl IngredientContainer {
    pub fn new() -> IngredientContainer {
        IngredientContainer {
            ingredients: HashMap::new(),
        }
    }

    /// Copia de los ingredientes de `other`, sin compartir estado con el original
    pub fn from_ingredients(other: &dyn Ingredients) -> IngredientContainer {
        let mut container = IngredientContainer::new();
        container.merge_from(other);
        container
    }

    /// Agrega `amount` de `ingredient`, sumandolo a lo que ya habia.
    /// Falla sin modificar nada si el total deja de ser finito.
    pub fn add(&mut self, ingredient: &str, amount: f64) -> Result<(), KitchenError> {
        let total = self.amount_of(ingredient) + amount;
        if !(amount > 0.0) || !amount.is_finite() || !total.is_finite() {
            return Err(KitchenError::InvalidAmount {
                ingredient: ingredient.to_string(),
                amount,
            });
        }
        self.insert_positive(ingredient, amount);
        Ok(())
    }

    /// Quita `amount` de `ingredient`. Si el resultado no es positivo, el ingrediente se elimina.
    pub fn remove(&mut self, ingredient: &str, amount: f64) -> Result<(), KitchenError> {
        if !amount.is_finite() {
            return Err(KitchenError::InvalidAmount {
                ingredient: ingredient.to_string(),
                amount,
            });
        }
        let existing = self
            .ingredients
            .get_mut(ingredient)
            .ok_or_else(|| KitchenError::UnknownIngredient(ingredient.to_string()))?;
        *existing = (*existing - amount).min(f64::MAX);
        if !(*existing > 0.0) {
            self.ingredients.remove(ingredient);
            debug!("[CONTAINER] {} used up", ingredient);
        }
        Ok(())
    }

    /// Suma todos los ingredientes de `other` a este contenedor.
    /// Un total que no entra en un `f64` queda en `f64::MAX`.
    pub fn merge_from(&mut self, other: &dyn Ingredients) {
        for name in other.ingredient_names() {
            self.insert_positive(name, other.amount_of(name));
        }
    }

    /// Quita todos los ingredientes de `other`. Si falta alguno no se modifica nada.
    pub fn remove_all(&mut self, other: &dyn Ingredients) -> Result<(), KitchenError> {
        if !self.contains_all(other) {
            return Err(KitchenError::InsufficientIngredients {
                missing: other.missing_relative_to(&*self),
            });
        }
        for name in other.ingredient_names() {
            let amount = other.amount_of(name);
            if let Some(existing) = self.ingredients.get_mut(name) {
                *existing -= amount;
                if !(*existing > 0.0) {
                    self.ingredients.remove(name);
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Suma sin validar, saturando en `f64::MAX`. Ignora cantidades que no son positivas.
    pub(crate) fn insert_positive(&mut self, ingredient: &str, amount: f64) {
        if !(amount > 0.0) {
            return;
        }
        let existing = self
            .ingredients
            .entry(ingredient.to_string())
            .or_insert(0.0);
        let total = *existing + amount;
        *existing = if total.is_finite() { total } else { f64::MAX };
    }
}

impl Ingredients for IngredientContainer {
    fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients.keys().map(String::as_str).collect()
    }

    fn amount_of(&self, ingredient: &str) -> f64 {
        self.ingredients.get(ingredient).copied().unwrap_or(0.0)
    }
}

impl fmt::Display for IngredientContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(&String, &f64)> = self.ingredients.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        let lines: Vec<String> = entries
            .into_iter()
            .map(|(name, amount)| format!("{}: {:?}", name, amount))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

impl TryFrom<HashMap<String, f64>> for IngredientContainer {
    type Error = KitchenError;

    fn try_from(ingredients: HashMap<String, f64>) -> Result<Self, Self::Error> {
        let mut container = IngredientContainer::new();
        for (name, amount) in ingredients {
            container.add(&name, amount)?;
        }
        Ok(container)
    }
}

impl From<IngredientContainer> for HashMap<String, f64> {
    fn from(container: IngredientContainer) -> Self {
        container.ingredients
    }
}
