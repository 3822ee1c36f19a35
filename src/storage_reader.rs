//! Carga inicial de la despensa desde un archivo JSON
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::{container::IngredientContainer, errors::KitchenError};

#[derive(Deserialize)]
struct StorageConfiguration {
    ingredients: IngredientContainer,
}

pub fn read_storage_from_file<P: AsRef<Path>>(path: P) -> Result<IngredientContainer, KitchenError> {
    let file = File::open(path)?;
    read_storage(BufReader::new(file))
}

/// Lee `{"ingredients": {"nombre": cantidad, ...}}`. Todas las cantidades tienen que ser positivas.
pub fn read_storage<R: Read>(reader: R) -> Result<IngredientContainer, KitchenError> {
    let configuration: StorageConfiguration = serde_json::from_reader(reader)?;
    info!(
        "[STORAGE] Loaded {} ingredients",
        configuration.ingredients.len()
    );
    Ok(configuration.ingredients)
}
