/// Errors raised around fixture generation.
///
/// Building a record never fails; these cover inputs that arrive from outside
/// the type system (CLI flags, signed counts from config).
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("batch size cannot be negative, got {0}")]
    NegativeBatchSize(i64),
}

/// Convert a signed count into a batch size.
///
/// Zero is a valid (empty) batch.
///
/// # Errors
///
/// Returns [`FixtureError::NegativeBatchSize`] if `count` is below zero.
pub fn batch_size(count: i64) -> Result<usize, FixtureError> {
    usize::try_from(count).map_err(|_| FixtureError::NegativeBatchSize(count))
}
