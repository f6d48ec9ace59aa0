use rayon::prelude::*;

use cvresize_image::Image;

/// Apply a function to each pixel for separable grid sampling in parallel.
///
/// Rows of `dst` are distributed over the rayon pool. For the pixel at
/// `(row, col)` the function receives `map_x[col]`, `map_y[row]` and the
/// mutable channels of that pixel.
///
/// # Arguments
///
/// * `dst` - The output image container.
/// * `map_x` - The source x coordinate of every destination column.
/// * `map_y` - The source y coordinate of every destination row.
/// * `f` - The function computing a destination pixel.
pub fn par_iter_rows_resample<T, const C: usize>(
    dst: &mut Image<T, C>,
    map_x: &[f32],
    map_y: &[f32],
    f: impl Fn(f32, f32, &mut [T]) + Send + Sync,
) where
    T: Send + Sync,
{
    let cols = dst.cols();
    if cols == 0 || C == 0 {
        return;
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .zip(map_y.par_iter())
        .for_each(|(dst_row, &y)| {
            dst_row
                .chunks_exact_mut(C)
                .zip(map_x.iter())
                .for_each(|(dst_pixel, &x)| f(x, y, dst_pixel));
        });
}
