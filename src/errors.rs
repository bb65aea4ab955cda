use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinalgError {
    #[error("shape mismatch in {op}: left operand has {left} elements, right operand has {right}")]
    ShapeMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },

    #[error("invalid range [{start}, {end}]")]
    InvalidRange { start: String, end: String },
}

pub type Result<T, E = LinalgError> = std::result::Result<T, E>;

/// Fails with [`LinalgError::ShapeMismatch`] unless `left == right`.
pub(crate) fn check_len(op: &'static str, left: usize, right: usize) -> Result<()> {
    if left != right {
        log::debug!("rejecting {}: lengths {} and {} differ", op, left, right);
        return Err(LinalgError::ShapeMismatch { op, left, right });
    }

    Ok(())
}
