//! Parametros de configuracion de la cocina

/// Archivo con el recetario, si no se indica otro por linea de comandos
pub const RECIPES_FILE: &str = "recipes.txt";

/// Archivo JSON con el contenido inicial de la despensa, si no se indica otro por linea de comandos
pub const STORAGE_FILE: &str = "storage.json";

/// Cantidad maxima de recetas que se eligen para el plan semanal
pub const WEEKLY_PLAN_SIZE: usize = 5;
