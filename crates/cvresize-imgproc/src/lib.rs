#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallelization utilities.
pub mod parallel;

/// utility functions for resizing images.
pub mod resize;
