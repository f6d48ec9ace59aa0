//! Pixel interpolation methods for image resampling.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: Fastest, uses nearest pixel value (no interpolation)
//! - **Bilinear**: Smooth linear interpolation between adjacent pixels

mod bilinear;

/// Sampling grids mapping destination pixels to source coordinates.
pub mod grid;

pub(crate) mod interpolate;
mod nearest;

pub use interpolate::interpolate_pixel;
pub use interpolate::InterpolationMode;
