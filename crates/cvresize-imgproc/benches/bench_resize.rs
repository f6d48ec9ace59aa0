use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use cvresize_image::{Image, ImageSize};
use cvresize_imgproc::{interpolation::InterpolationMode, resize};

fn resize_image_crate(image: &Image<u8, 3>, new_size: ImageSize) -> Image<u8, 3> {
    let rgb = image::RgbImage::from_raw(
        image.width() as u32,
        image.height() as u32,
        image.as_slice().to_vec(),
    )
    .unwrap();
    let image_crate = image::DynamicImage::ImageRgb8(rgb);

    let image_resized = image_crate.resize_exact(
        new_size.width as u32,
        new_size.height as u32,
        image::imageops::FilterType::Triangle,
    );
    let data = image_resized.into_rgb8().into_raw();
    Image::new(new_size, data).unwrap()
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    let image_sizes = vec![(256, 224), (512, 448), (1024, 896)];

    for (width, height) in image_sizes {
        let image_size = ImageSize { width, height };
        let id = format!("{width}x{height}");
        let image = Image::<u8, 3>::new(image_size, vec![0u8; width * height * 3]).unwrap();
        let image_f32 = image.cast::<f32>().unwrap();
        let new_size = ImageSize {
            width: width / 2,
            height: height / 2,
        };

        let mut out_f32 = Image::<f32, 3>::from_size_val(new_size, 0.0).unwrap();
        group.bench_with_input(BenchmarkId::new("native_f32", &id), &image_f32, |b, i| {
            b.iter(|| {
                resize::resize_native(
                    black_box(i),
                    black_box(&mut out_f32),
                    InterpolationMode::Bilinear,
                )
            })
        });

        let mut out_u8 = Image::<u8, 3>::from_size_val(new_size, 0).unwrap();
        group.bench_with_input(BenchmarkId::new("native_u8", &id), &image, |b, i| {
            b.iter(|| {
                resize::resize_native(
                    black_box(i),
                    black_box(&mut out_u8),
                    InterpolationMode::Bilinear,
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("image_rs", &id), &image, |b, i| {
            b.iter(|| resize_image_crate(black_box(i), new_size))
        });

        group.bench_with_input(BenchmarkId::new("fast", &id), &image, |b, i| {
            b.iter(|| {
                resize::resize_fast(
                    black_box(i),
                    black_box(&mut out_u8),
                    InterpolationMode::Bilinear,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resize);
criterion_main!(benches);
