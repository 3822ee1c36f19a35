//! Errores de la cocina y de sus lectores de archivos
use thiserror::Error;

use crate::container::IngredientContainer;

#[derive(Debug, Error)]
pub enum KitchenError {
    #[error("amount of {ingredient} must be positive, got {amount}")]
    InvalidAmount { ingredient: String, amount: f64 },
    #[error("ingredient {0} is not in the container")]
    UnknownIngredient(String),
    #[error("not enough ingredients, missing:\n{missing}")]
    InsufficientIngredients { missing: IngredientContainer },
    #[error("portion count must be positive, got {0}")]
    InvalidPortionCount(u32),
    #[error("scale factor must be positive, got {0}")]
    InvalidScale(f64),
    #[error("malformed recipe at line {line}: {reason}")]
    MalformedRecipeLine { line: usize, reason: String },
    #[error("error while reading file: {0}")]
    FileReaderError(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    ConfigurationError(#[from] serde_json::Error),
    #[error("the sequence is empty")]
    EmptySequence,
    #[error("the result does not fit in an i64")]
    Overflow,
}
