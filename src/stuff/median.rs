//! Mediana de una secuencia de numeros
use crate::errors::KitchenError;

/// Mediana de `values`. No hace falta que vengan ordenados.
pub fn compute(values: &[f64]) -> Result<f64, KitchenError> {
    if values.is_empty() {
        return Err(KitchenError::EmptySequence);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let size = sorted.len();
    if size % 2 == 0 {
        let index = size / 2 - 1;
        Ok((sorted[index] + sorted[index + 1]) / 2.0)
    } else {
        Ok(sorted[size / 2])
    }
}
