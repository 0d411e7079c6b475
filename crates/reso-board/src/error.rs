//! Error types for reso-board

use reso_core::Resel;
use thiserror::Error;

/// Errors that can occur while compiling a board
#[derive(Debug, Error)]
pub enum BoardError {
    /// Region mapping error
    #[error("region error: {0}")]
    Region(#[from] reso_region::RegionError),

    /// A region carries a class no descriptor exists for. The compiler's
    /// class table folds wire tones before mapping, so this indicates a
    /// bug upstream; compilation aborts.
    #[error("region has unassignable class {class:?}")]
    UnknownRegionClass { class: Resel },
}

/// Result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;
