//! Core library for greedy one-dimensional bin packing.
//!
//! - Strategies: Next Fit, First Fit, Best Fit, all behind the `Packer` trait
//! - Pipeline: `pack_items` feeds a list of item sizes through one strategy; `pack_all` / `pack_auto` compare them
//! - Every bin shares one capacity (default 10); items larger than that fail with `ItemTooLarge`
//! - Data model is serde-serializable; JSON export lives in `export`.
//!
//! Quick example:
//! ```
//! use bin_packer_core::{PackerConfig, Strategy, pack_items};
//! # fn main() -> bin_packer_core::Result<()> {
//! let cfg = PackerConfig::builder().strategy(Strategy::NextFit).build();
//! let packing = pack_items(&[4, 3, 5, 4, 1], &cfg)?;
//! assert_eq!(packing.to_string(), "Bin 0: 4 3\nBin 1: 5 4 1\n");
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `bin_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{
        DEFAULT_CAPACITY, PackerConfig, PackerConfigBuilder, SortOrder, Strategy,
    };
    pub use crate::error::{BinPackError, Result};
    pub use crate::model::{Bin, PackStats, Packing};
    pub use crate::packer::{
        BestFitPacker, FirstFitPacker, NextFitPacker, Packer, Placement, new_packer,
    };
    pub use crate::{pack_all, pack_auto, pack_items, pack_with};
}
