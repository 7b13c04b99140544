//! TSketch Render Library
//!
//! Surface implementations for the TSketch editor core.
//! The default implementation records into a Vello scene for GPU rendering.

#[cfg(feature = "vello-renderer")]
mod vello_impl;

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloSurface;
