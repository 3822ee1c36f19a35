//! Suma y diferencia de una secuencia de enteros
use crate::errors::KitchenError;

/// Suma de todos los valores. La suma vacia es 0.
pub fn sum(values: &[i64]) -> Result<i64, KitchenError> {
    values
        .iter()
        .try_fold(0i64, |total, value| total.checked_add(*value))
        .ok_or(KitchenError::Overflow)
}

/// El primer valor menos la suma de todos los demas
pub fn difference(values: &[i64]) -> Result<i64, KitchenError> {
    let (first, rest) = values.split_first().ok_or(KitchenError::EmptySequence)?;
    first.checked_sub(sum(rest)?).ok_or(KitchenError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_sum_all_values() {
        assert_eq!(6, sum(&[1, 2, 3]).unwrap());
    }

    #[test]
    fn should_sum_nothing_to_zero() {
        assert_eq!(0, sum(&[]).unwrap());
    }

    #[test]
    fn should_subtract_the_rest_from_the_first() {
        assert_eq!(0, difference(&[6, 1, 2, 3]).unwrap());
        assert_eq!(-4, difference(&[1, 2, 3]).unwrap());
        assert_eq!(5, difference(&[5]).unwrap());
    }

    #[test]
    fn should_fail_on_an_empty_sequence() {
        assert!(matches!(difference(&[]), Err(KitchenError::EmptySequence)));
    }

    #[test]
    fn should_report_overflow_instead_of_panicking() {
        assert!(matches!(sum(&[i64::MAX, 1]), Err(KitchenError::Overflow)));
        assert!(matches!(difference(&[i64::MIN, 1]), Err(KitchenError::Overflow)));
        assert!(matches!(difference(&[0, i64::MAX, 1]), Err(KitchenError::Overflow)));
    }

    #[test]
    fn should_allow_intermediate_values_at_the_limits() {
        assert_eq!(i64::MAX, sum(&[i64::MAX, 0]).unwrap());
        assert_eq!(i64::MIN, difference(&[-1, i64::MAX]).unwrap());
    }
}
