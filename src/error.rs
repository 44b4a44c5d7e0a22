use thiserror::Error;

/// Top-level error type for geoprim.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoprimError {
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl GeoprimError {
    /// Returns `true` for initializer-length and dimension-restricted accessor failures.
    #[must_use]
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::Dimension(_))
    }

    /// Returns `true` for component or vertex accesses outside valid bounds.
    #[must_use]
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::Access(AccessError::IndexOutOfRange { .. }))
    }

    /// Returns `true` for operations that are undefined on degenerate input.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Geometry(_))
    }
}

/// Errors caused by a mismatch between a value's dimension and what an operation needs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DimensionError {
    #[error("expected {expected} components, got {found}")]
    InitializerLength { expected: usize, found: usize },

    #[error("{operation} requires {required}, got dimension {actual}")]
    Unsupported {
        operation: &'static str,
        required: &'static str,
        actual: usize,
    },
}

/// Errors related to indexed access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors related to geometric computations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`GeoprimError`].
pub type Result<T> = std::result::Result<T, GeoprimError>;

/// Fails with [`AccessError::IndexOutOfRange`] unless `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(AccessError::IndexOutOfRange { index, len }.into())
    }
}

/// Fails with [`DimensionError::Unsupported`] unless `actual >= min`.
pub(crate) fn require_dimension(
    operation: &'static str,
    required: &'static str,
    actual: usize,
    min: usize,
) -> Result<()> {
    if actual >= min {
        Ok(())
    } else {
        Err(DimensionError::Unsupported {
            operation,
            required,
            actual,
        }
        .into())
    }
}
