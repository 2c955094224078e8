//! Chart catalog data model.
//!
//! This module contains the output-side types of the conversion pipeline:
//! - `ChartKind` - the three chart families (SD, DX, UTAGE)
//! - `ChartEntry`, `SubChart`, `BasicInfo` - one catalog entry per
//!   (song, kind) pair, in the on-disk JSON schema

mod entry;
mod kind;

pub use entry::*;
pub use kind::*;
