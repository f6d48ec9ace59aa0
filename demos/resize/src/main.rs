use argh::FromArgs;
use std::path::PathBuf;

use cvresize::image::ImageSize;
use cvresize::imgproc::{interpolation::InterpolationMode, resize::size_from_scale};
use cvresize::io::functional as F;

#[derive(FromArgs)]
/// Resize an image file, with the same sampling as cv::resize
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to the output image, the extension selects the format
    #[argh(option, short = 'o')]
    output_path: PathBuf,

    /// width of the output image
    #[argh(option)]
    width: Option<usize>,

    /// height of the output image
    #[argh(option)]
    height: Option<usize>,

    /// horizontal scale factor, used when no explicit size is given
    #[argh(option)]
    fx: Option<f64>,

    /// vertical scale factor, defaults to fx
    #[argh(option)]
    fy: Option<f64>,

    /// interpolation mode: bilinear or nearest
    #[argh(option, default = "InterpolationMode::Bilinear")]
    interpolation: InterpolationMode,

    /// use the fast_image_resize backend for 8-bit images
    #[argh(switch)]
    fast: bool,
}

fn target_size(args: &Args, size: ImageSize) -> Result<ImageSize, Box<dyn std::error::Error>> {
    match (args.width, args.height, args.fx, args.fy) {
        (Some(width), Some(height), None, None) => Ok(ImageSize { width, height }),
        (None, None, Some(fx), fy) => Ok(size_from_scale(size, fx, fy.unwrap_or(fx))?),
        _ => Err("expected either --width and --height, or --fx [--fy]".into()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    // read the image
    let image = F::read_image_any(&args.image_path)?;
    let new_size = target_size(&args, image.size())?;

    log::info!(
        "resizing {} from {} to {} ({})",
        args.image_path.display(),
        image.size(),
        new_size,
        args.interpolation
    );

    let start = std::time::Instant::now();
    let resized = cvresize::resize_generic(&image, new_size, args.interpolation, args.fast)?;
    log::debug!("resize took {:?}", start.elapsed());

    F::write_image_any(&args.output_path, &resized)?;
    log::info!("wrote {}", args.output_path.display());

    Ok(())
}
