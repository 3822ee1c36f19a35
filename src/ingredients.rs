//! Capacidades comunes a todo lo que guarda ingredientes con sus cantidades.
//!
//! Lo implementan el contenedor mutable (`IngredientContainer`) y la vista
//! escalada de solo lectura (`ScaledIngredients`).
use crate::{container::IngredientContainer, errors::KitchenError, scaled::ScaledIngredients};

pub trait Ingredients {
    /// Nombres de los ingredientes presentes, sin orden garantizado
    fn ingredient_names(&self) -> Vec<&str>;

    /// Cantidad del ingrediente, o 0 si no esta presente
    fn amount_of(&self, ingredient: &str) -> f64;

    fn contains_ingredient(&self, ingredient: &str) -> bool {
        self.amount_of(ingredient) > 0.0
    }

    /// Indica si hay por lo menos la misma cantidad de cada ingrediente de `other`.
    /// Los ingredientes que no estan en `other` no se tienen en cuenta.
    fn contains_all(&self, other: &dyn Ingredients) -> bool {
        other
            .ingredient_names()
            .into_iter()
            .all(|name| self.amount_of(name) >= other.amount_of(name))
    }

    /// Lo que habria que agregarle a `other` para que contenga a `self`.
    fn missing_relative_to(&self, other: &dyn Ingredients) -> IngredientContainer {
        let mut missing = IngredientContainer::new();
        for name in self.ingredient_names() {
            let deficit = self.amount_of(name) - other.amount_of(name);
            if deficit > 0.0 {
                missing.insert_positive(name, deficit);
            }
        }
        missing
    }

    /// Devuelve una copia nueva con todas las cantidades multiplicadas por `factor`.
    fn scale(&self, factor: f64) -> Result<ScaledIngredients, KitchenError> {
        ScaledIngredients::new(self, factor)
    }
}
