use super::InterpolationMode;

/// Compute the source coordinate of every destination index along one axis.
///
/// The mapping follows `cv::resize`:
///
/// * bilinear aligns pixel centers, `s = (d + 0.5) * src_len / dst_len - 0.5`,
///   clamped to `[0, src_len - 1]`.
/// * nearest takes `s = floor(d * src_len / dst_len)`.
///
/// # Arguments
///
/// * `src_len` - The length of the source axis in pixels.
/// * `dst_len` - The length of the destination axis in pixels.
/// * `interpolation` - The interpolation mode the map is built for.
///
/// # Returns
///
/// A vector of `dst_len` source coordinates.
///
/// # Example
///
/// ```
/// use cvresize_imgproc::interpolation::{grid::resize_map, InterpolationMode};
///
/// let map = resize_map(2, 4, InterpolationMode::Bilinear);
/// assert_eq!(map, vec![0.0, 0.25, 0.75, 1.0]);
/// ```
pub fn resize_map(src_len: usize, dst_len: usize, interpolation: InterpolationMode) -> Vec<f32> {
    if src_len == 0 || dst_len == 0 {
        return Vec::new();
    }

    let max_coord = (src_len - 1) as f64;

    match interpolation {
        InterpolationMode::Bilinear => (0..dst_len)
            .map(|d| {
                // (d + 0.5) * src / dst with a single rounding step
                let center = ((2 * d + 1) * src_len) as f64 / (2 * dst_len) as f64;
                (center - 0.5).clamp(0.0, max_coord) as f32
            })
            .collect(),
        InterpolationMode::Nearest => (0..dst_len)
            .map(|d| ((d * src_len) / dst_len).min(src_len - 1) as f32)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::resize_map;
    use crate::interpolation::InterpolationMode;

    #[test]
    fn bilinear_upscale() {
        let map = resize_map(2, 4, InterpolationMode::Bilinear);
        assert_eq!(map, vec![0.0, 0.25, 0.75, 1.0]);
    }

    #[test]
    fn bilinear_downscale() {
        let map = resize_map(4, 2, InterpolationMode::Bilinear);
        assert_eq!(map, vec![0.5, 2.5]);
    }

    #[test]
    fn bilinear_identity() {
        let map = resize_map(5, 5, InterpolationMode::Bilinear);
        assert_eq!(map, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn nearest_maps() {
        assert_eq!(
            resize_map(2, 4, InterpolationMode::Nearest),
            vec![0.0, 0.0, 1.0, 1.0]
        );
        assert_eq!(
            resize_map(4, 2, InterpolationMode::Nearest),
            vec![0.0, 2.0]
        );
        assert_eq!(
            resize_map(3, 2, InterpolationMode::Nearest),
            vec![0.0, 1.0]
        );
    }

    #[test]
    fn empty_axis() {
        assert!(resize_map(0, 4, InterpolationMode::Bilinear).is_empty());
        assert!(resize_map(4, 0, InterpolationMode::Nearest).is_empty());
    }
}
