use thiserror::Error;

pub type Result<T> = std::result::Result<T, GreenError>;

///Everything that can go wrong while building an orthonormal polynomial basis
///or evaluating a Green approximant. All of these are deterministic usage or
///degeneracy errors, so none of them is worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GreenError {
    #[error("Wrong vector dimension! Space dim: {expected}, Input dim: {found}")]
    DimensionMismatch { expected : usize, found : usize },

    #[error("Cannot project onto zero vector")]
    ZeroVectorProjection,

    ///Gram-Schmidt produced a vector of zero norm at the given index.
    #[error("Degenerate basis: vector {index} has zero norm after orthogonalization")]
    DegenerateBasis { index : usize },

    #[error("Inner product space must have positive dimension")]
    InvalidDimension,

    #[error("Polynomial degree must be positive")]
    InvalidDegree,

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Sample set contains no points")]
    EmptySampleSet,
}

pub fn invalid_region(message : &str) -> GreenError {
    GreenError::InvalidRegion(message.to_string())
}
