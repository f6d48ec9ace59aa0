use std::path::Path;

use cvresize_image::{Image, ImageSize};

use crate::error::IoError;

/// A generic image type that can be any of the supported image formats.
#[derive(Clone, Debug, PartialEq)]
pub enum GenericImage {
    /// 8-bit grayscale image
    L8(Image<u8, 1>),
    /// 8-bit grayscale image with alpha channel
    La8(Image<u8, 2>),
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
    /// 8-bit RGB image with alpha channel
    Rgba8(Image<u8, 4>),
    /// 16-bit grayscale image
    L16(Image<u16, 1>),
    /// 16-bit grayscale image with alpha channel
    La16(Image<u16, 2>),
    /// 16-bit RGB image
    Rgb16(Image<u16, 3>),
    /// 16-bit RGB image with alpha channel
    Rgba16(Image<u16, 4>),
    /// 32-bit float RGB image
    Rgb32F(Image<f32, 3>),
    /// 32-bit float RGB image with alpha channel
    Rgba32F(Image<f32, 4>),
}

impl GenericImage {
    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            GenericImage::L8(img) => img.size(),
            GenericImage::La8(img) => img.size(),
            GenericImage::Rgb8(img) => img.size(),
            GenericImage::Rgba8(img) => img.size(),
            GenericImage::L16(img) => img.size(),
            GenericImage::La16(img) => img.size(),
            GenericImage::Rgb16(img) => img.size(),
            GenericImage::Rgba16(img) => img.size(),
            GenericImage::Rgb32F(img) => img.size(),
            GenericImage::Rgba32F(img) => img.size(),
        }
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        match self {
            GenericImage::L8(_) | GenericImage::L16(_) => 1,
            GenericImage::La8(_) | GenericImage::La16(_) => 2,
            GenericImage::Rgb8(_) | GenericImage::Rgb16(_) | GenericImage::Rgb32F(_) => 3,
            GenericImage::Rgba8(_) | GenericImage::Rgba16(_) | GenericImage::Rgba32F(_) => 4,
        }
    }
}

fn decode_image(file_path: &Path) -> Result<image::DynamicImage, IoError> {
    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // open the file and map it to memory
    let file = std::fs::File::open(file_path)?;
    let mmap = unsafe { memmap2::Mmap::map(&file)? };

    // decode the data directly from memory
    let img = image::ImageReader::new(std::io::Cursor::new(&mmap[..]))
        .with_guessed_format()?
        .decode()?;

    log::debug!(
        "decoded {} ({}x{}, {:?})",
        file_path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img)
}

/// Reads an image from the given file path.
///
/// The method tries to read from any image format supported by the image crate
/// and keeps the pixel format of the file.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image containing the image data.
///
/// # Errors
///
/// Returns [`IoError::FileDoesNotExist`] if the path does not exist and
/// [`IoError::UnsupportedImageFormat`] for pixel formats with no
/// [`GenericImage`] counterpart.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    let img = decode_image(file_path.as_ref())?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let image = match img {
        image::DynamicImage::ImageLuma8(buf) => {
            GenericImage::L8(Image::new(size, buf.into_raw())?)
        }
        image::DynamicImage::ImageLumaA8(buf) => {
            GenericImage::La8(Image::new(size, buf.into_raw())?)
        }
        image::DynamicImage::ImageRgb8(buf) => {
            GenericImage::Rgb8(Image::new(size, buf.into_raw())?)
        }
        image::DynamicImage::ImageRgba8(buf) => {
            GenericImage::Rgba8(Image::new(size, buf.into_raw())?)
        }
        image::DynamicImage::ImageLuma16(buf) => {
            GenericImage::L16(Image::new(size, buf.into_raw())?)
        }
        image::DynamicImage::ImageLumaA16(buf) => {
            GenericImage::La16(Image::new(size, buf.into_raw())?)
        }
        image::DynamicImage::ImageRgb16(buf) => {
            GenericImage::Rgb16(Image::new(size, buf.into_raw())?)
        }
        image::DynamicImage::ImageRgba16(buf) => {
            GenericImage::Rgba16(Image::new(size, buf.into_raw())?)
        }
        image::DynamicImage::ImageRgb32F(buf) => {
            GenericImage::Rgb32F(Image::new(size, buf.into_raw())?)
        }
        image::DynamicImage::ImageRgba32F(buf) => {
            GenericImage::Rgba32F(Image::new(size, buf.into_raw())?)
        }
        _ => return Err(IoError::UnsupportedImageFormat),
    };

    Ok(image)
}

/// Reads an image from the given file path and converts it to RGB8.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A 3-channel `u8` image.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let img = decode_image(file_path.as_ref())?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Image::new(size, img.into_rgb8().into_raw())?)
}

fn to_buffer<P, const C: usize>(
    image: &Image<P::Subpixel, C>,
) -> Result<image::ImageBuffer<P, Vec<P::Subpixel>>, IoError>
where
    P: image::Pixel,
{
    let size = image.size();
    image::ImageBuffer::from_raw(
        size.width as u32,
        size.height as u32,
        image.as_slice().to_vec(),
    )
    .ok_or_else(|| {
        IoError::ImageCreationError(cvresize_image::ImageError::InvalidChannelShape(
            image.as_slice().len(),
            size.area().saturating_mul(P::CHANNEL_COUNT as usize),
        ))
    })
}

/// Writes an image to the given file path.
///
/// The encoder is chosen from the file extension by the image crate.
///
/// # Arguments
///
/// * `file_path` - The path to the output file.
/// * `image` - The image to encode.
///
/// # Errors
///
/// Returns an error if the format cannot encode the pixel type or the file cannot be written.
pub fn write_image_any(file_path: impl AsRef<Path>, image: &GenericImage) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let dynamic = match image {
        GenericImage::L8(img) => image::DynamicImage::ImageLuma8(to_buffer(img)?),
        GenericImage::La8(img) => image::DynamicImage::ImageLumaA8(to_buffer(img)?),
        GenericImage::Rgb8(img) => image::DynamicImage::ImageRgb8(to_buffer(img)?),
        GenericImage::Rgba8(img) => image::DynamicImage::ImageRgba8(to_buffer(img)?),
        GenericImage::L16(img) => image::DynamicImage::ImageLuma16(to_buffer(img)?),
        GenericImage::La16(img) => image::DynamicImage::ImageLumaA16(to_buffer(img)?),
        GenericImage::Rgb16(img) => image::DynamicImage::ImageRgb16(to_buffer(img)?),
        GenericImage::Rgba16(img) => image::DynamicImage::ImageRgba16(to_buffer(img)?),
        GenericImage::Rgb32F(img) => image::DynamicImage::ImageRgb32F(to_buffer(img)?),
        GenericImage::Rgba32F(img) => image::DynamicImage::ImageRgba32F(to_buffer(img)?),
    };

    dynamic.save(file_path)?;

    log::debug!("wrote {} ({})", file_path.display(), image.size());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{read_image_any, read_image_any_rgb8, write_image_any, GenericImage};
    use crate::error::IoError;
    use cvresize_image::{Image, ImageSize};

    #[test]
    fn read_missing_file() {
        let res = read_image_any("does/not/exist.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_write_png_rgb8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("rgb.png");

        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 10, 20, 30],
        )?;
        write_image_any(&file_path, &GenericImage::Rgb8(image.clone()))?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        let image_back = read_image_any(&file_path)?;
        assert_eq!(image_back.size(), image.size());
        assert_eq!(image_back.num_channels(), 3);
        assert_eq!(image_back, GenericImage::Rgb8(image));

        Ok(())
    }

    #[test]
    fn read_write_png_gray16() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gray16.png");

        let image = Image::<u16, 1>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![0, 1000, 65535],
        )?;
        write_image_any(&file_path, &GenericImage::L16(image.clone()))?;

        let image_back = read_image_any(&file_path)?;
        assert_eq!(image_back, GenericImage::L16(image));

        Ok(())
    }

    #[test]
    fn write_unknown_extension_errors() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("image.unknownext");

        let image = Image::<f32, 3>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0.5,
        )?;
        let res = write_image_any(&file_path, &GenericImage::Rgb32F(image));
        assert!(matches!(res, Err(IoError::ImageDecodeError(_))));
        assert!(!file_path.exists());

        Ok(())
    }

    #[test]
    fn read_gray_as_rgb8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gray.png");

        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![7, 200],
        )?;
        write_image_any(&file_path, &GenericImage::L8(image))?;

        let rgb = read_image_any_rgb8(&file_path)?;
        assert_eq!(rgb.num_channels(), 3);
        assert_eq!(rgb.as_slice(), &[7, 7, 7, 200, 200, 200]);

        Ok(())
    }
}
