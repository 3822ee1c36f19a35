//! Vista de solo lectura de unos ingredientes escalados por un factor
use std::fmt;

use crate::{container::IngredientContainer, errors::KitchenError, ingredients::Ingredients};

/// Copia escalada tomada al momento de crearse: cambios posteriores en el origen no la afectan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledIngredients {
    ingredients: IngredientContainer,
    factor: f64,
}

impl ScaledIngredients {
    pub fn new<I: Ingredients + ?Sized>(
        source: &I,
        factor: f64,
    ) -> Result<ScaledIngredients, KitchenError> {
        if !(factor > 0.0) || !factor.is_finite() {
            return Err(KitchenError::InvalidScale(factor));
        }
        let mut ingredients = IngredientContainer::new();
        for name in source.ingredient_names() {
            let amount = source.amount_of(name) * factor;
            if !amount.is_finite() {
                return Err(KitchenError::InvalidAmount {
                    ingredient: name.to_string(),
                    amount,
                });
            }
            ingredients.insert_positive(name, amount);
        }
        Ok(ScaledIngredients {
            ingredients,
            factor,
        })
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl Ingredients for ScaledIngredients {
    fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients.ingredient_names()
    }

    fn amount_of(&self, ingredient: &str) -> f64 {
        self.ingredients.amount_of(ingredient)
    }

    fn scale(&self, factor: f64) -> Result<ScaledIngredients, KitchenError> {
        let mut scaled = ScaledIngredients::new(&self.ingredients, factor)?;
        scaled.factor *= self.factor;
        Ok(scaled)
    }
}

impl From<ScaledIngredients> for IngredientContainer {
    fn from(scaled: ScaledIngredients) -> Self {
        scaled.ingredients
    }
}

impl fmt::Display for ScaledIngredients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ingredients, f)
    }
}
