//! Observadores del plan semanal de la cocina
use std::rc::Rc;

use log::info;

use crate::{recipe::Recipe, stuff::joiner::join};

/// Recibe las notificaciones de la cocina cuando cambia el plan semanal.
/// Se llama de forma sincronica, en el orden en que se registraron los observadores.
pub trait KitchenObserver {
    fn weekly_recipe_added(&self, recipe: &Recipe);

    fn weekly_recipe_removed(&self, recipe: &Recipe);

    /// El plan de la semana esta listo
    fn weekly_plan_finalized(&self, recipes: &[Rc<Recipe>]);
}

/// Deja un registro de cada cambio del plan semanal
pub struct LoggingObserver;

impl KitchenObserver for LoggingObserver {
    fn weekly_recipe_added(&self, recipe: &Recipe) {
        info!("[OBSERVER] Added {} to the weekly plan", recipe);
    }

    fn weekly_recipe_removed(&self, recipe: &Recipe) {
        info!("[OBSERVER] Removed {} from the weekly plan", recipe);
    }

    fn weekly_plan_finalized(&self, recipes: &[Rc<Recipe>]) {
        let names = recipes.iter().map(|recipe| recipe.name());
        info!(
            "[OBSERVER] Weekly plan finalized with {} recipes: {}",
            recipes.len(),
            join(names, ", ", Some(" and "))
        );
    }
}
