//! Copyright 2024 Gareth Cross

/// Ways a construction or query can be mathematically undefined for its input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("a zero-length vector has no direction")]
    ZeroVector,
    #[error("parallel directions do not span a plane")]
    ParallelDirections,
    #[error("a zero radius leaves the angular coordinates undefined")]
    ZeroRadius,
    #[error("a zero-norm quaternion cannot be normalized")]
    ZeroNorm,
    #[error("re-parenting a frame beneath its own descendant would create a cycle")]
    Cycle,
}
