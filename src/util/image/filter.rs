use std::ops::{DerefMut, Range};

use rayon::{prelude::*, ThreadPool};
use thiserror::Error;

use crate::detector::ImageDimensionError;

use super::{ImageBuffer, ImageY8};

/// Images below this many pixels are always convolved on the calling thread
pub(crate) const PARALLEL_CONVOLVE_MIN_PIXELS: usize = 65536;

/// Error building a Gaussian kernel
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum KernelError {
    #[error("Kernel size must be non-zero")]
    ZeroSize,
    #[error("Kernel size must be odd (actual: {0})")]
    EvenSize(usize),
    #[error("Gaussian sigma must be finite and non-zero (actual: {0})")]
    BadSigma(f64),
}

/// Build an 8-bit fixed-point Gaussian kernel (coefficients sum to ~255).
///
/// For a kernel of length 5, `k[0] = f(-2)`, `k[2] = f(0)`, `k[4] = f(2)`.
pub fn gaussian_kernel(sigma: f64, kernel_size: usize) -> Result<Vec<u8>, KernelError> {
    if kernel_size == 0 {
        return Err(KernelError::ZeroSize);
    }
    if kernel_size % 2 == 0 {
        return Err(KernelError::EvenSize(kernel_size));
    }
    if sigma == 0. || !sigma.is_finite() {
        return Err(KernelError::BadSigma(sigma));
    }

    let half = (kernel_size / 2) as f64;
    let dk = (0..kernel_size)
        .map(|i| {
            let x_sig = (i as f64 - half) / sigma;
            f64::exp(-0.5 * x_sig * x_sig)
        })
        .collect::<Vec<_>>();

    let acc = dk.iter().sum::<f64>();

    Ok(dk.into_iter()
        .map(|v| ((v / acc) * 255.) as u8)
        .collect())
}

/// 1-d convolution of `x` into `y`.
///
/// The `k.len()/2` samples at either end are copied unfiltered.
fn convolve(x: &[u8], y: &mut [u8], k: &[u8]) {
    debug_assert_eq!(k.len() % 2, 1, "Kernel size must be odd");
    debug_assert_eq!(x.len(), y.len());
    let half = k.len() / 2;
    let sz = x.len();

    if sz < k.len() {
        y.copy_from_slice(x);
        return;
    }

    y[..half].copy_from_slice(&x[..half]);

    for i in 0..(sz - k.len() + 1) {
        let acc = k.iter()
            .zip(&x[i..i + k.len()])
            .map(|(k, v)| (*k as u32) * (*v as u32))
            .sum::<u32>();
        y[half + i] = (acc >> 8).min(255) as u8;
    }

    y[sz - half..].copy_from_slice(&x[sz - half..]);
}

/// Split `0..len` into `n` contiguous ranges, giving the remainder one-each to the first ranges
fn partition(len: usize, n: usize) -> Vec<Range<usize>> {
    let n = n.max(1);
    let inc = len / n;
    let rem = len % n;
    let mut last = 0;
    (0..n)
        .map(|idx| {
            let start = last;
            last += inc;
            if idx < rem {
                last += 1;
            }
            start..last
        })
        .filter(|r| !r.is_empty())
        .collect()
}

impl<C: DerefMut<Target = [u8]>> ImageBuffer<C> {
    /// Separable 2d convolution (rows, then columns) with an odd-length kernel
    pub fn convolve2d_mut(&mut self, kernel: &[u8]) {
        let width = self.width();
        let height = self.height();

        let mut row_buf = vec![0u8; width];
        for y in 0..height {
            let row = self.row_mut(y);
            row_buf.copy_from_slice(row);
            convolve(&row_buf, row, kernel);
        }

        let mut xb = vec![0u8; height];
        let mut yb = vec![0u8; height];
        for x in 0..width {
            for y in 0..height {
                xb[y] = self[(x, y)];
            }

            convolve(&xb, &mut yb, kernel);

            for y in 0..height {
                self[(x, y)] = yb[y];
            }
        }
    }

    /// Same result as [convolve2d_mut](Self::convolve2d_mut), with row bands and
    /// column bands split across `pool`.
    pub fn convolve2d_parallel(&mut self, pool: &ThreadPool, kernel: &[u8]) where C: Send {
        let width = self.width();
        let height = self.height();
        if width * height < PARALLEL_CONVOLVE_MIN_PIXELS || pool.current_num_threads() <= 1 {
            self.convolve2d_mut(kernel);
            return;
        }
        let nthreads = pool.current_num_threads();
        let stride = self.stride();

        pool.install(|| {
            // Horizontal pass: every band owns a disjoint run of rows
            {
                let mut bands = Vec::new();
                let mut rest: &mut [u8] = self.data_mut();
                for rows in partition(height, nthreads) {
                    let band_len = (rows.len() * stride).min(rest.len());
                    let (band, tail) = rest.split_at_mut(band_len);
                    bands.push(band);
                    rest = tail;
                }

                bands.into_par_iter().for_each(|band| {
                    let mut row_buf = vec![0u8; width];
                    for row in band.chunks_mut(stride) {
                        let row = &mut row[..width];
                        row_buf.copy_from_slice(row);
                        convolve(&row_buf, row, kernel);
                    }
                });
            }

            // Vertical pass: each band of columns is written to its own buffer, then copied back
            let column_bands = {
                let src = self.as_view();
                partition(width, nthreads)
                    .into_par_iter()
                    .map(|cols| {
                        let mut out = vec![0u8; cols.len() * height];
                        let mut xb = vec![0u8; height];
                        for (i, x) in cols.clone().enumerate() {
                            for y in 0..height {
                                xb[y] = src[(x, y)];
                            }
                            convolve(&xb, &mut out[i * height..(i + 1) * height], kernel);
                        }
                        (cols, out)
                    })
                    .collect::<Vec<_>>()
            };

            for (cols, out) in column_bands {
                for (i, x) in cols.enumerate() {
                    for y in 0..height {
                        self[(x, y)] = out[i * height + y];
                    }
                }
            }
        });
    }

    /// Gaussian blur with standard deviation `sigma` and an odd kernel size.
    ///
    /// A `sigma` of zero is a no-op.
    pub fn gaussian_blur(&mut self, sigma: f64, kernel_size: usize) -> Result<(), KernelError> {
        if sigma == 0. {
            return Ok(());
        }
        let kernel = gaussian_kernel(sigma, kernel_size)?;
        self.convolve2d_mut(&kernel);
        Ok(())
    }

    /// Gaussian blur, splitting the work across `pool` for large images
    pub fn gaussian_blur_parallel(&mut self, pool: &ThreadPool, sigma: f64, kernel_size: usize) -> Result<(), KernelError> where C: Send {
        if sigma == 0. {
            return Ok(());
        }
        let kernel = gaussian_kernel(sigma, kernel_size)?;
        self.convolve2d_parallel(pool, &kernel);
        Ok(())
    }
}

impl<C: std::ops::Deref<Target = [u8]>> ImageBuffer<C> {
    /// Downsample the image by a factor of exactly 1.5
    pub fn decimate_three_halves(&self) -> Result<ImageY8, ImageDimensionError> {
        let swidth = self.width() / 3 * 2;
        let sheight = self.height() / 3 * 2;
        check_decimated(swidth, sheight)?;

        let mut dst = ImageY8::zeroed(swidth, sheight);

        let mut y = 0;
        for sy in (0..sheight).step_by(2) {
            let mut x = 0;
            for sx in (0..swidth).step_by(2) {
                // a b c
                // d e f
                // g h i
                let px = |dx: usize, dy: usize| self[(x + dx, y + dy)] as u32;
                let (a, b, c) = (px(0, 0), px(1, 0), px(2, 0));
                let (d, e, f) = (px(0, 1), px(1, 1), px(2, 1));
                let (g, h, i) = (px(0, 2), px(1, 2), px(2, 2));

                dst[(sx, sy)] = ((4 * a + 2 * b + 2 * d + e) / 9) as u8;
                dst[(sx + 1, sy)] = ((4 * c + 2 * b + 2 * f + e) / 9) as u8;
                dst[(sx, sy + 1)] = ((4 * g + 2 * d + 2 * h + e) / 9) as u8;
                dst[(sx + 1, sy + 1)] = ((4 * i + 2 * f + 2 * h + e) / 9) as u8;

                x += 3;
            }
            y += 3;
        }
        Ok(dst)
    }

    /// Downsample by `factor`. A factor of exactly 1.5 uses a dedicated filter;
    /// anything else is rounded to an integer subsampling step.
    ///
    /// Fails if the result would be less than 3 pixels in either dimension.
    pub fn decimate(&self, factor: f32) -> Result<ImageY8, ImageDimensionError> {
        if factor == 1.5 {
            return self.decimate_three_halves();
        }

        let factor = (factor.round() as usize).max(1);
        let width = self.width();
        let height = self.height();
        if width == 0 || height == 0 {
            return Err(ImageDimensionError::WidthTooSmall { actual: width, minimum: 3 });
        }

        let swidth = 1 + (width - 1) / factor;
        let sheight = 1 + (height - 1) / factor;
        check_decimated(swidth, sheight)?;

        let mut decim = ImageY8::zeroed(swidth, sheight);
        for (dy, y) in (0..height).step_by(factor).enumerate() {
            let src = self.row(y);
            let dst = decim.row_mut(dy);
            for (d, s) in dst.iter_mut().zip(src.iter().step_by(factor)) {
                *d = *s;
            }
        }
        Ok(decim)
    }
}

fn check_decimated(width: usize, height: usize) -> Result<(), ImageDimensionError> {
    if width < 3 {
        return Err(ImageDimensionError::WidthTooSmall { actual: width, minimum: 3 });
    }
    if height < 3 {
        return Err(ImageDimensionError::HeightTooSmall { actual: height, minimum: 3 });
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::{detector::ImageDimensionError, util::image::ImageY8};

    use super::{convolve, gaussian_kernel, partition, KernelError};

    #[test]
    fn kernel_validation() {
        assert_eq!(gaussian_kernel(1., 0), Err(KernelError::ZeroSize));
        assert_eq!(gaussian_kernel(1., 4), Err(KernelError::EvenSize(4)));
        let k = gaussian_kernel(0.8, 3).unwrap();
        assert_eq!(k.len(), 3);
        assert_eq!(k[0], k[2]);
        assert!(k[1] > k[0]);
        let sum = k.iter().map(|v| *v as u32).sum::<u32>();
        assert!(sum <= 255 && sum >= 250, "sum={sum}");
    }

    #[test]
    fn convolve_copies_edges() {
        let x = [10u8, 200, 30, 40, 250, 60, 70];
        let mut y = [0u8; 7];
        convolve(&x, &mut y, &[0, 255, 0]);
        assert_eq!(y[0], 10);
        assert_eq!(y[6], 70);
        // identity-ish kernel loses one level to the >>8
        assert_eq!(y[1], 199);
        assert_eq!(y[5], 59);
    }

    #[test]
    fn partition_spreads_remainder() {
        assert_eq!(partition(10, 3), vec![0..4, 4..7, 7..10]);
        assert_eq!(partition(2, 4), vec![0..1, 1..2]);
    }

    #[test]
    fn parallel_blur_matches_serial() {
        let mut rng = StdRng::seed_from_u64(7);
        let img = ImageY8::from_fn(300, 250, |_, _| rng.gen());
        let pool = rayon::ThreadPoolBuilder::new().num_threads(3).build().unwrap();

        let mut serial = img.clone();
        serial.gaussian_blur(0.8, 3).unwrap();
        let mut parallel = img.clone();
        parallel.gaussian_blur_parallel(&pool, 0.8, 3).unwrap();

        for y in 0..img.height() {
            assert_eq!(serial.row(y), parallel.row(y), "row {y}");
        }
    }

    #[test]
    fn decimate_dims() {
        let img = ImageY8::from_fn(11, 7, |x, y| (x + 10 * y) as u8);
        let d = img.decimate(2.).unwrap();
        assert_eq!((d.width(), d.height()), (6, 4));
        assert_eq!(d[(1, 1)], img[(2, 2)]);
        assert_eq!(d[(5, 3)], img[(10, 6)]);

        let d = img.decimate(1.5).unwrap();
        assert_eq!((d.width(), d.height()), (6, 4));

        assert_eq!(
            img.decimate(4.).unwrap_err(),
            ImageDimensionError::HeightTooSmall { actual: 2, minimum: 3 }
        );
    }

    #[test]
    fn three_halves_preserves_flat() {
        let img = ImageY8::from_fn(9, 9, |_, _| 90);
        let d = img.decimate_three_halves().unwrap();
        for y in 0..d.height() {
            assert!(d.row(y).iter().all(|v| *v == 90));
        }
    }
}
