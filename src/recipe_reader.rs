//! Lector del recetario en texto.
//!
//! Formato: una linea de encabezado que se ignora y despues una receta por linea,
//! `nombre$categoria$porciones$ingrediente1;ingrediente2;...$cantidad1;cantidad2;...`.
//! Las lineas mal formadas se saltean sin cortar la lectura.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::{container::IngredientContainer, errors::KitchenError, recipe::Recipe};

const COLUMN_SEPARATOR: char = '$';
const ELEMENT_SEPARATOR: char = ';';
const COLUMNS: usize = 5;

pub fn read_recipes_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>, KitchenError> {
    let file = File::open(path)?;
    read_recipes(BufReader::new(file))
}

pub fn read_recipes<R: BufRead>(reader: R) -> Result<Vec<Recipe>, KitchenError> {
    let mut recipes = Vec::new();
    // El encabezado es la linea 1
    for (index, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_recipe_line(index + 1, &line) {
            Ok(recipe) => {
                debug!("[READER] Read recipe {}", recipe.name());
                recipes.push(recipe);
            }
            Err(err) => warn!("[READER] Skipping line: {}", err),
        }
    }
    info!("[READER] Read {} recipes", recipes.len());
    Ok(recipes)
}

pub fn parse_recipe_line(line_number: usize, line: &str) -> Result<Recipe, KitchenError> {
    let malformed = |reason: String| KitchenError::MalformedRecipeLine {
        line: line_number,
        reason,
    };

    let columns: Vec<&str> = line.split(COLUMN_SEPARATOR).collect();
    if columns.len() != COLUMNS {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            COLUMNS,
            columns.len()
        )));
    }

    let name = columns[0];
    let category = columns[1];
    let portions: u32 = columns[2]
        .trim()
        .parse()
        .map_err(|_| malformed(format!("invalid portion count {:?}", columns[2])))?;

    let names: Vec<&str> = columns[3].split(ELEMENT_SEPARATOR).collect();
    let amounts = columns[4]
        .split(ELEMENT_SEPARATOR)
        .map(|amount| {
            amount
                .trim()
                .parse::<f64>()
                .map_err(|_| malformed(format!("invalid amount {:?}", amount)))
        })
        .collect::<Result<Vec<f64>, KitchenError>>()?;
    if names.len() != amounts.len() {
        return Err(malformed(format!(
            "{} ingredients but {} amounts",
            names.len(),
            amounts.len()
        )));
    }

    let mut ingredients = IngredientContainer::new();
    for (ingredient, amount) in names.into_iter().zip(amounts) {
        ingredients
            .add(ingredient, amount)
            .map_err(|err| malformed(err.to_string()))?;
    }

    Recipe::new(name, category, portions, ingredients).map_err(|err| malformed(err.to_string()))
}
