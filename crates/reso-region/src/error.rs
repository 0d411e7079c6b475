//! Error types for reso-region

use thiserror::Error;

/// Errors that can occur during region mapping
#[derive(Debug, Error)]
pub enum RegionError {
    /// A caller-supplied neighbourhood table is unusable
    #[error("invalid neighbourhood: {0}")]
    InvalidNeighborhood(String),

    /// A region id outside the mapped range
    #[error("unknown region id: {id} (have {count} regions)")]
    UnknownRegion { id: usize, count: usize },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
