//! Representacion de una receta
use std::fmt;

use log::debug;

use crate::{container::IngredientContainer, errors::KitchenError, ingredients::Ingredients};

/// Receta con nombre, categoria, cantidad de porciones y los ingredientes que necesita.
/// No se modifica una vez creada; escalarla genera una receta nueva.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    name: String,
    category: String,
    portions: u32,
    ingredients: IngredientContainer,
}

impl Recipe {
    pub fn new(
        name: &str,
        category: &str,
        portions: u32,
        ingredients: IngredientContainer,
    ) -> Result<Recipe, KitchenError> {
        if portions == 0 {
            return Err(KitchenError::InvalidPortionCount(portions));
        }
        Ok(Recipe {
            name: name.to_string(),
            category: category.to_string(),
            portions,
            ingredients,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn portions(&self) -> u32 {
        self.portions
    }

    pub fn ingredients(&self) -> &IngredientContainer {
        &self.ingredients
    }

    pub fn uses_ingredient(&self, ingredient: &str) -> bool {
        self.ingredients.contains_ingredient(ingredient)
    }

    /// Misma receta para `portions` porciones, con los ingredientes escalados en proporcion.
    pub fn create_n_portions(&self, portions: u32) -> Result<Recipe, KitchenError> {
        if portions == 0 {
            return Err(KitchenError::InvalidPortionCount(portions));
        }
        let factor = f64::from(portions) / f64::from(self.portions);
        let ingredients = self.ingredients.scale(factor)?;
        debug!(
            "[RECIPE] Scaled {} from {} to {} portions",
            self.name, self.portions, portions
        );
        Ok(Recipe {
            name: self.name.clone(),
            category: self.category.clone(),
            portions,
            ingredients: ingredients.into(),
        })
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} portions)",
            self.name, self.category, self.portions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pancakes() -> Recipe {
        let mut ingredients = IngredientContainer::new();
        ingredients.add("egg", 4.0).unwrap();
        ingredients.add("milk", 5.0).unwrap();
        ingredients.add("flour", 3.0).unwrap();
        ingredients.add("salt", 1.0).unwrap();
        Recipe::new("pancakes", "almost_dinner", 4, ingredients).unwrap()
    }

    #[test]
    fn should_reject_a_recipe_without_portions() {
        let result = Recipe::new("nothing", "none", 0, IngredientContainer::new());
        assert!(matches!(result, Err(KitchenError::InvalidPortionCount(0))));
    }

    #[test]
    fn should_scale_ingredients_to_the_new_portion_count() {
        let recipe = pancakes();
        let bigger = recipe.create_n_portions(20).unwrap();
        assert_eq!(20, bigger.portions());
        assert_eq!(20.0, bigger.ingredients().amount_of("egg"));
        assert_eq!(25.0, bigger.ingredients().amount_of("milk"));
        assert_eq!(5.0, bigger.ingredients().amount_of("salt"));
        assert_eq!("pancakes", bigger.name());
    }

    #[test]
    fn should_not_modify_the_original_when_scaling() {
        let recipe = pancakes();
        let _smaller = recipe.create_n_portions(2).unwrap();
        assert_eq!(4, recipe.portions());
        assert_eq!(4.0, recipe.ingredients().amount_of("egg"));
    }

    #[test]
    fn should_reject_scaling_to_zero_portions() {
        assert!(matches!(
            pancakes().create_n_portions(0),
            Err(KitchenError::InvalidPortionCount(0))
        ));
    }

    #[test]
    fn should_fail_to_scale_past_the_largest_amount() {
        let mut ingredients = IngredientContainer::new();
        ingredients.add("flour", f64::MAX / 2.0).unwrap();
        let recipe = Recipe::new("huge", "test", 1, ingredients).unwrap();
        assert!(matches!(
            recipe.create_n_portions(4),
            Err(KitchenError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn should_know_which_ingredients_it_uses() {
        let recipe = pancakes();
        assert_eq!(true, recipe.uses_ingredient("egg"));
        assert_eq!(false, recipe.uses_ingredient("vanilla"));
    }

    #[test]
    fn should_display_name_category_and_portions() {
        assert_eq!("pancakes (almost_dinner, 4 portions)", pancakes().to_string());
    }
}
