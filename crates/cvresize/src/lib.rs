#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use cvresize_image as image;

#[doc(inline)]
pub use cvresize_imgproc as imgproc;

#[doc(inline)]
pub use cvresize_io as io;

mod ops;

pub use ops::{resize, resize_generic};
