//! reso-region - Region mapping for the Reso graphical logic simulator
//!
//! This crate turns a classified resel grid into the symbolic region graph
//! the board compiler works on:
//!
//! - **Region labelling** - Flood-fill connected components with a
//!   per-class contiguity neighbourhood (wires grow eight-way, everything
//!   else four-way)
//! - **Class folding** - A class table folds several codes into one region
//!   class (a wire's on and off tones form a single wire region)
//! - **Adjacency** - A directional region-touches-region relation over a
//!   per-class adjacency neighbourhood
//! - **Toroidal wrap** - Optional modulo-arithmetic neighbours for boards
//!   that tile

pub mod error;
pub mod mapper;

// Re-export core types
pub use reso_core;

pub use error::{RegionError, RegionResult};
pub use mapper::{DIAG, MapperOptions, ORTHO, ORTHO_DIAG, Region, RegionMap, map_regions};
