use crate::interpolation::{grid::resize_map, interpolate_pixel, InterpolationMode};
use crate::parallel;
use cvresize_image::{Image, ImageDtype, ImageError, ImageSize};
use fast_image_resize as fr;

fn check_sizes(src: ImageSize, dst: ImageSize) -> Result<(), ImageError> {
    if src.is_empty() || dst.is_empty() {
        return Err(ImageError::InvalidImageSize(
            src.width, src.height, dst.width, dst.height,
        ));
    }
    Ok(())
}

/// Resize an image to a new size.
///
/// The function resizes an image to the size of `dst` using the specified interpolation mode.
/// It supports any number of channels and data types. Source coordinates are
/// computed the way `cv::resize` does, so bilinear results match OpenCV's
/// `INTER_LINEAR` and nearest results match `INTER_NEAREST`.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if either image is empty.
///
/// # Example
///
/// ```
/// use cvresize_image::{Image, ImageSize};
/// use cvresize_imgproc::resize::resize_native;
/// use cvresize_imgproc::interpolation::InterpolationMode;
///
/// let image = Image::<_, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0f32; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0.0).unwrap();
///
/// resize_native(
///     &image,
///     &mut image_resized,
///     InterpolationMode::Nearest,
/// )
/// .unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
pub fn resize_native<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError>
where
    T: ImageDtype,
{
    check_sizes(src.size(), dst.size())?;

    if src.size() == dst.size() {
        dst.as_slice_mut().copy_from_slice(src.as_slice());
        return Ok(());
    }

    log::debug!(
        "resize_native: {} -> {} ({interpolation})",
        src.size(),
        dst.size()
    );

    let map_x = resize_map(src.width(), dst.width(), interpolation);
    let map_y = resize_map(src.height(), dst.height(), interpolation);

    parallel::par_iter_rows_resample(dst, &map_x, &map_y, |x, y, dst_pixel| {
        let pixel = interpolate_pixel(src, x, y, interpolation);
        for (out, val) in dst_pixel.iter_mut().zip(pixel) {
            *out = T::from_f32(val);
        }
    });

    Ok(())
}

/// Resize an image into a newly allocated image of `new_size`.
///
/// Convenience wrapper around [`resize_native`].
///
/// # Example
///
/// ```
/// use cvresize_image::{Image, ImageSize};
/// use cvresize_imgproc::{interpolation::InterpolationMode, resize::resize};
///
/// let image = Image::<u8, 1>::new([2, 1].into(), vec![0, 100]).unwrap();
/// let resized = resize(&image, [4, 1].into(), InterpolationMode::Bilinear).unwrap();
///
/// assert_eq!(resized.as_slice(), &[0, 25, 75, 100]);
/// ```
pub fn resize<T, const C: usize>(
    src: &Image<T, C>,
    new_size: ImageSize,
    interpolation: InterpolationMode,
) -> Result<Image<T, C>, ImageError>
where
    T: ImageDtype,
{
    let mut dst = Image::from_size_val(new_size, T::default())?;
    resize_native(src, &mut dst, interpolation)?;
    Ok(dst)
}

/// Resize an image to a new size using the [fast_image_resize](https://crates.io/crates/fast_image_resize) crate.
///
/// The function resizes an image to the size of `dst` using the specified interpolation mode.
/// It supports `u8` images with 1 to 4 channels.
///
/// NOTE: when downscaling, the bilinear filter of `fast_image_resize` widens its
/// support with the scale factor, so results differ from [`resize_native`].
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container.
/// * `interpolation` - The interpolation mode to use.
///
/// # Example
///
/// ```
/// use cvresize_image::{Image, ImageSize};
/// use cvresize_imgproc::resize::resize_fast;
/// use cvresize_imgproc::interpolation::InterpolationMode;
///
/// let image = Image::<_, 3>::new(
///    ImageSize {
///       width: 4,
///      height: 5,
/// },
/// vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///   width: 2,
///   height: 3,
/// };
///
/// let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0).unwrap();
///
/// resize_fast(
///   &image,
///   &mut image_resized,
///   InterpolationMode::Nearest,
/// )
/// .unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
///
/// # Errors
///
/// The function returns an error if the image cannot be resized.
pub fn resize_fast<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    check_sizes(src.size(), dst.size())?;

    let pixel_type = match C {
        1 => fr::PixelType::U8,
        2 => fr::PixelType::U8x2,
        3 => fr::PixelType::U8x3,
        4 => fr::PixelType::U8x4,
        _ => return Err(ImageError::UnsupportedChannels(C)),
    };

    log::debug!(
        "resize_fast: {} -> {} ({interpolation})",
        src.size(),
        dst.size()
    );

    // prepare the input image for the fast_image_resize crate
    let src_width = u32::try_from(src.width()).map_err(|_| ImageError::CastError)?;
    let src_height = u32::try_from(src.height()).map_err(|_| ImageError::CastError)?;

    let src_image = fr::images::ImageRef::new(src_width, src_height, src.as_slice(), pixel_type)
        .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    // prepare the output image for the fast_image_resize crate
    let dst_width = u32::try_from(dst.width()).map_err(|_| ImageError::CastError)?;
    let dst_height = u32::try_from(dst.height()).map_err(|_| ImageError::CastError)?;

    let mut dst_image =
        fr::images::Image::from_slice_u8(dst_width, dst_height, dst.as_slice_mut(), pixel_type)
            .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    let options = fr::ResizeOptions::new().resize_alg(match interpolation {
        InterpolationMode::Bilinear => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
        InterpolationMode::Nearest => fr::ResizeAlg::Nearest,
    });

    fr::Resizer::new()
        .resize(&src_image, &mut dst_image, &options)
        .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    Ok(())
}

/// Compute the output size for scale factors the way `cv::resize` does when
/// no explicit size is given.
///
/// # Arguments
///
/// * `size` - The size of the source image.
/// * `fx` - The horizontal scale factor.
/// * `fy` - The vertical scale factor.
///
/// # Errors
///
/// Returns [`ImageError::InvalidScaleFactor`] if a factor is not a positive
/// finite number, or the resulting size is empty or does not fit in an `i32`
/// (OpenCV's `dsize` type).
///
/// Products are rounded half to even, as `cvRound` does.
///
/// # Example
///
/// ```
/// use cvresize_image::ImageSize;
/// use cvresize_imgproc::resize::size_from_scale;
///
/// let size = size_from_scale(ImageSize { width: 640, height: 480 }, 0.5, 0.25).unwrap();
/// assert_eq!(size, ImageSize { width: 320, height: 120 });
/// ```
pub fn size_from_scale(size: ImageSize, fx: f64, fy: f64) -> Result<ImageSize, ImageError> {
    let valid = |f: f64| f.is_finite() && f > 0.0;
    if !valid(fx) || !valid(fy) {
        return Err(ImageError::InvalidScaleFactor(fx, fy));
    }

    // saturate_cast<int> in OpenCV: round half to even
    let scaled = |len: usize, f: f64| {
        let len = (len as f64 * f).round_ties_even();
        (1.0..=i32::MAX as f64).contains(&len).then_some(len as usize)
    };

    let (Some(width), Some(height)) = (scaled(size.width, fx), scaled(size.height, fy)) else {
        return Err(ImageError::InvalidScaleFactor(fx, fy));
    };

    Ok(ImageSize { width, height })
}
