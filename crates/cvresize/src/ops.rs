use cvresize_image::{Image, ImageDtype, ImageError, ImageSize};
use cvresize_imgproc::{interpolation::InterpolationMode, resize as F};
use cvresize_io::GenericImage;

/// Resize an image with bilinear interpolation.
///
/// `new_shape` follows the OpenCV convention: tuples and arrays are read as
/// `(width, height)`, not as `(rows, cols)`. The sampling matches
/// `cv::resize(img, dsize, interpolation=INTER_LINEAR)`.
///
/// # Arguments
///
/// * `img` - The input image.
/// * `new_shape` - The size of the output image as `(width, height)`.
///
/// # Returns
///
/// A new image of exactly `new_shape`, with the channels and pixel type of `img`.
///
/// # Errors
///
/// Errors raised by the underlying resize are returned unchanged, e.g.
/// [`ImageError::InvalidImageSize`] for an empty source or target.
///
/// # Example
///
/// ```
/// use cvresize::image::Image;
///
/// let image = Image::<f32, 3>::from_size_val([640, 480].into(), 0.5).unwrap();
/// let resized = cvresize::resize(&image, (320, 200)).unwrap();
///
/// assert_eq!(resized.width(), 320);
/// assert_eq!(resized.height(), 200);
/// ```
pub fn resize<T, const C: usize>(
    img: &Image<T, C>,
    new_shape: impl Into<ImageSize>,
) -> Result<Image<T, C>, ImageError>
where
    T: ImageDtype,
{
    F::resize(img, new_shape.into(), InterpolationMode::Bilinear)
}

fn resize_u8<const C: usize>(
    img: &Image<u8, C>,
    new_size: ImageSize,
    interpolation: InterpolationMode,
    fast: bool,
) -> Result<Image<u8, C>, ImageError> {
    if !fast {
        return F::resize(img, new_size, interpolation);
    }
    let mut dst = Image::from_size_val(new_size, 0u8)?;
    F::resize_fast(img, &mut dst, interpolation)?;
    Ok(dst)
}

/// Resize a decoded image of any supported pixel format.
///
/// The pixel format is preserved. With `fast` set, `u8` images go through
/// [`resize_fast`](cvresize_imgproc::resize::resize_fast); all other formats,
/// and all images when `fast` is unset, use
/// [`resize_native`](cvresize_imgproc::resize::resize_native).
///
/// # Arguments
///
/// * `img` - The decoded image.
/// * `new_size` - The size of the output image.
/// * `interpolation` - The interpolation mode to use.
/// * `fast` - Whether to use the `fast_image_resize` backend for `u8` images.
pub fn resize_generic(
    img: &GenericImage,
    new_size: ImageSize,
    interpolation: InterpolationMode,
    fast: bool,
) -> Result<GenericImage, ImageError> {
    log::debug!(
        "resize_generic: {} -> {new_size} ({interpolation}, fast: {fast})",
        img.size()
    );

    let resized = match img {
        GenericImage::L8(img) => {
            GenericImage::L8(resize_u8(img, new_size, interpolation, fast)?)
        }
        GenericImage::La8(img) => {
            GenericImage::La8(resize_u8(img, new_size, interpolation, fast)?)
        }
        GenericImage::Rgb8(img) => {
            GenericImage::Rgb8(resize_u8(img, new_size, interpolation, fast)?)
        }
        GenericImage::Rgba8(img) => {
            GenericImage::Rgba8(resize_u8(img, new_size, interpolation, fast)?)
        }
        GenericImage::L16(img) => GenericImage::L16(F::resize(img, new_size, interpolation)?),
        GenericImage::La16(img) => GenericImage::La16(F::resize(img, new_size, interpolation)?),
        GenericImage::Rgb16(img) => {
            GenericImage::Rgb16(F::resize(img, new_size, interpolation)?)
        }
        GenericImage::Rgba16(img) => {
            GenericImage::Rgba16(F::resize(img, new_size, interpolation)?)
        }
        GenericImage::Rgb32F(img) => {
            GenericImage::Rgb32F(F::resize(img, new_size, interpolation)?)
        }
        GenericImage::Rgba32F(img) => {
            GenericImage::Rgba32F(F::resize(img, new_size, interpolation)?)
        }
    };

    Ok(resized)
}

#[cfg(test)]
mod tests {
    use cvresize_image::{Image, ImageError, ImageSize};
    use cvresize_imgproc::interpolation::InterpolationMode;
    use cvresize_io::GenericImage;

    #[test]
    fn resize_width_first() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 6,
                height: 4,
            },
            9,
        )?;
        let resized = super::resize(&image, (3, 8))?;
        assert_eq!(resized.width(), 3);
        assert_eq!(resized.height(), 8);
        assert_eq!(resized.num_channels(), 3);
        Ok(())
    }

    #[test]
    fn resize_propagates_errors() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::from_size_val([2, 2].into(), 1.0)?;
        assert_eq!(
            super::resize(&image, (0, 2)),
            Err(ImageError::InvalidImageSize(2, 2, 0, 2))
        );
        Ok(())
    }

    #[test]
    fn resize_generic_keeps_format() -> Result<(), ImageError> {
        let image = GenericImage::Rgba16(Image::from_size_val([4, 4].into(), 1000)?);
        let resized = super::resize_generic(
            &image,
            [2, 3].into(),
            InterpolationMode::Bilinear,
            true,
        )?;
        assert_eq!(resized.size(), ImageSize::from([2, 3]));
        assert_eq!(resized.num_channels(), 4);
        match resized {
            GenericImage::Rgba16(img) => assert!(img.as_slice().iter().all(|&v| v == 1000)),
            _ => panic!("pixel format changed"),
        }
        Ok(())
    }

    #[test]
    fn resize_generic_fast_u8() -> Result<(), ImageError> {
        let image = GenericImage::L8(Image::from_size_val([8, 6].into(), 77)?);
        let resized = super::resize_generic(
            &image,
            [4, 3].into(),
            InterpolationMode::Nearest,
            true,
        )?;
        assert_eq!(
            resized,
            GenericImage::L8(Image::from_size_val([4, 3].into(), 77)?)
        );
        Ok(())
    }
}
