//! Cocina: recetario, despensa y plan semanal.
//!
//! No es thread-safe. Todo se ejecuta en el hilo de quien llama, incluidas las
//! notificaciones a los observadores.
use std::rc::Rc;

use log::{debug, info, warn};

use crate::{
    container::IngredientContainer, errors::KitchenError, ingredients::Ingredients,
    observer::KitchenObserver, recipe::Recipe,
};

pub struct Kitchen {
    recipes: Vec<Rc<Recipe>>,
    weekly_plan: Vec<Rc<Recipe>>,
    storage: IngredientContainer,
    observers: Vec<Rc<dyn KitchenObserver>>,
}

impl Kitchen {
    /// Crea una cocina con la despensa vacia que conoce las recetas dadas
    pub fn new<I>(recipes: I) -> Kitchen
    where
        I: IntoIterator<Item = Recipe>,
    {
        Kitchen {
            recipes: recipes.into_iter().map(Rc::new).collect(),
            weekly_plan: Vec::new(),
            storage: IngredientContainer::new(),
            observers: Vec::new(),
        }
    }

    pub fn with_storage(mut self, storage: IngredientContainer) -> Kitchen {
        self.storage = storage;
        self
    }

    pub fn storage(&self) -> &IngredientContainer {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut IngredientContainer {
        &mut self.storage
    }

    /// Busca una receta por nombre exacto
    pub fn recipe(&self, name: &str) -> Option<Rc<Recipe>> {
        self.recipes
            .iter()
            .find(|recipe| recipe.name() == name)
            .cloned()
    }

    pub fn all_recipes(&self) -> &[Rc<Recipe>] {
        &self.recipes
    }

    pub fn weekly_plan(&self) -> &[Rc<Recipe>] {
        &self.weekly_plan
    }

    pub fn register_observer(&mut self, observer: Rc<dyn KitchenObserver>) {
        self.observers.push(observer);
    }

    pub fn add_to_weekly_plan<R: Into<Rc<Recipe>>>(&mut self, recipe: R) {
        let recipe = recipe.into();
        debug!("[KITCHEN] Adding {} to the weekly plan", recipe.name());
        self.weekly_plan.push(Rc::clone(&recipe));
        for observer in &self.observers {
            observer.weekly_recipe_added(&recipe);
        }
    }

    /// Quita la primera aparicion de la receta del plan semanal.
    /// Solo se notifica a los observadores si habia algo para quitar: una receta
    /// que no estaba en el plan no genera ninguna notificacion.
    pub fn remove_from_weekly_plan(&mut self, recipe: &Recipe) -> bool {
        let position = match self.weekly_plan.iter().position(|planned| **planned == *recipe) {
            Some(position) => position,
            None => {
                warn!(
                    "[KITCHEN] {} is not in the weekly plan, nothing to remove",
                    recipe.name()
                );
                return false;
            }
        };
        let removed = self.weekly_plan.remove(position);
        for observer in &self.observers {
            observer.weekly_recipe_removed(&removed);
        }
        true
    }

    /// Vacia el plan semanal para armar el de la semana siguiente. No notifica a los observadores.
    pub fn clear_weekly_plan(&mut self) {
        self.weekly_plan.clear();
    }

    /// Avisa a los observadores que el plan de la semana esta terminado.
    pub fn finalize_weekly_plan(&self) {
        info!(
            "[KITCHEN] Weekly plan finalized with {} recipes",
            self.weekly_plan.len()
        );
        for observer in &self.observers {
            observer.weekly_plan_finalized(&self.weekly_plan);
        }
    }

    pub fn can_create(&self, recipe: &Recipe) -> bool {
        self.storage.contains_all(recipe.ingredients())
    }

    /// Descuenta de la despensa los ingredientes de la receta. Si falta algo, la despensa no cambia.
    pub fn cook(&mut self, recipe: &Recipe) -> Result<(), KitchenError> {
        self.storage.remove_all(recipe.ingredients())?;
        info!("[KITCHEN] Cooked {}", recipe);
        Ok(())
    }

    pub fn filter_recipes<P>(&self, predicate: P) -> Vec<Rc<Recipe>>
    where
        P: Fn(&Recipe) -> bool,
    {
        self.recipes
            .iter()
            .filter(|recipe| predicate(recipe))
            .cloned()
            .collect()
    }

    pub fn cookable_recipes(&self) -> Vec<Rc<Recipe>> {
        self.filter_recipes(|recipe| self.can_create(recipe))
    }

    pub fn recipes_containing_ingredient(&self, ingredient: &str) -> Vec<Rc<Recipe>> {
        self.filter_recipes(|recipe| recipe.uses_ingredient(ingredient))
    }

    /// Todos los ingredientes que necesita el plan semanal
    pub fn weekly_requirements(&self) -> IngredientContainer {
        let mut requirements = IngredientContainer::new();
        for recipe in &self.weekly_plan {
            requirements.merge_from(recipe.ingredients());
        }
        requirements
    }

    /// Lo que hay que comprar para poder cocinar todo el plan semanal
    pub fn shopping_list(&self) -> IngredientContainer {
        self.weekly_requirements().missing_relative_to(&self.storage)
    }
}
