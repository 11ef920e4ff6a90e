use crate::errors::ModelError;

/// Accept only strictly positive values for the named field.
pub fn ensure_positive(field: &str, value: i64) -> Result<i64, ModelError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(ModelError::validation(format!("{field} must be greater than 0")))
    }
}

/// Path ids arrive signed so that `0` and negatives get a validation error
/// instead of a generic parse failure.
pub fn record_id(value: i64) -> Result<u64, ModelError> {
    let v = ensure_positive("id", value)?;
    Ok(v as u64)
}
