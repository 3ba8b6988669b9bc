//! # Modstat Graphs
//!
//! Histogram binning and rendering for the modstat bot.
//!
//! Samples are binned into fixed-width buckets, scaled to counts or to a
//! fraction of all samples, and drawn as step outlines with plotters.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod daily;
pub mod histogram;
pub mod hourly;
pub mod renderer;
pub mod types;

pub use histogram::*;
pub use renderer::*;
pub use types::*;
