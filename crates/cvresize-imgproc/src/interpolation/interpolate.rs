use super::bilinear::bilinear_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use cvresize_image::{Image, ImageDtype, ImageError};

/// Interpolation mode for the resize operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

impl std::str::FromStr for InterpolationMode {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bilinear" | "linear" => Ok(InterpolationMode::Bilinear),
            "nearest" => Ok(InterpolationMode::Nearest),
            _ => Err(ImageError::InvalidInterpolation(s.to_string())),
        }
    }
}

impl std::fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            InterpolationMode::Bilinear => write!(f, "bilinear"),
            InterpolationMode::Nearest => write!(f, "nearest"),
        }
    }
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width, C).
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated pixel values, one per channel. An empty image yields zeros.
pub fn interpolate_pixel<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
    interpolation: InterpolationMode,
) -> [f32; C] {
    if image.size().is_empty() {
        return [0.0; C];
    }

    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v),
    }
}
