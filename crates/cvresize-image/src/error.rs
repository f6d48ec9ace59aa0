/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the pixel data cannot be cast to the target type.
    #[error("Failed to cast image data")]
    CastError,

    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the source and destination sizes cannot be resized into each other.
    #[error("Invalid image size: source ({0}x{1}), destination ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the number of elements of an image overflows `usize`.
    #[error("Image size {0}x{1} with {2} channels is too large")]
    SizeOverflow(usize, usize, usize),

    /// Error when a pixel index is out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}x{3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when a channel index is out of bounds.
    #[error("Channel index {0} is out of bounds ({1} channels)")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when an operation does not support the number of channels.
    #[error("Unsupported number of channels: {0}")]
    UnsupportedChannels(usize),

    /// Error when the scale factors do not produce a valid size.
    #[error("Invalid scale factors: fx={0}, fy={1}")]
    InvalidScaleFactor(f64, f64),

    /// Error when an interpolation mode name is not recognized.
    #[error("Invalid interpolation mode: {0}")]
    InvalidInterpolation(String),

    /// Error raised by the underlying resize backend.
    #[error("Failed to resize the image. {0}")]
    ResizeError(String),
}
