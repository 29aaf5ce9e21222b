mod filter;
mod draw;
pub mod pnm;

use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::detector::ImageDimensionError;

pub use filter::{gaussian_kernel, KernelError};

/// Least common multiple of 64 (cache line) and 24 (stride needed for
/// 8-wide RGB vector processing)
pub const DEFAULT_ALIGNMENT: usize = 96;

/// Width/height/stride of a row-major image
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageDimensions {
    pub width: usize,
    pub height: usize,
    /// Distance (in bytes) between the starts of consecutive rows
    pub stride: usize,
}

impl ImageDimensions {
    /// Number of bytes a buffer must hold for these dimensions
    pub const fn min_buffer_len(&self) -> usize {
        if self.height == 0 {
            0
        } else {
            (self.height - 1) * self.stride + self.width
        }
    }

    #[inline(always)]
    pub(crate) const fn offset(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check that a buffer of `len` bytes satisfies the stride contract
    pub fn check(&self, len: usize) -> Result<(), ImageDimensionError> {
        if self.stride < self.width {
            return Err(ImageDimensionError::StrideTooSmall { stride: self.stride, width: self.width });
        }
        let minimum = self.min_buffer_len();
        if len < minimum {
            return Err(ImageDimensionError::BufferTooSmall { actual: len, minimum });
        }
        Ok(())
    }
}

/// Grayscale 8-bit image over some byte container
#[derive(Clone)]
pub struct ImageBuffer<C> {
    dims: ImageDimensions,
    buf: C,
}

/// Owned grayscale image
pub type ImageY8 = ImageBuffer<Box<[u8]>>;

/// Borrowed grayscale image (zero-copy input header)
pub type ImageRefY8<'a> = ImageBuffer<&'a [u8]>;

impl std::fmt::Debug for ImageY8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageY8")
            .field("dims", &self.dims)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for ImageRefY8<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageRefY8")
            .field("dims", &self.dims)
            .finish_non_exhaustive()
    }
}

impl ImageY8 {
    /// Create a zero-filled image with the default row alignment
    pub fn zeroed(width: usize, height: usize) -> Self {
        Self::zeroed_with_alignment(width, height, DEFAULT_ALIGNMENT)
    }

    /// Create a zero-filled image whose stride is a multiple of `alignment`
    pub fn zeroed_with_alignment(width: usize, height: usize, alignment: usize) -> Self {
        let alignment = alignment.max(1);
        let mut stride = width;
        if (stride % alignment) != 0 {
            stride += alignment - (stride % alignment);
        }
        Self::zeroed_with_stride(width, height, stride)
    }

    /// Create a zero-filled image with an explicit stride (`stride >= width`)
    pub fn zeroed_with_stride(width: usize, height: usize, stride: usize) -> Self {
        let stride = stride.max(width);
        let buf = vec![0u8; height * stride].into_boxed_slice();
        Self {
            dims: ImageDimensions { width, height, stride },
            buf,
        }
    }

    /// Wrap an owned buffer, validating the stride contract
    pub fn from_buffer(width: usize, height: usize, stride: usize, buf: impl Into<Box<[u8]>>) -> Result<Self, ImageDimensionError> {
        let buf = buf.into();
        let dims = ImageDimensions { width, height, stride };
        dims.check(buf.len())?;
        Ok(Self { dims, buf })
    }

    /// Build an image from a function of `(x, y)`
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let mut img = Self::zeroed(width, height);
        for y in 0..height {
            for (x, dst) in img.row_mut(y).iter_mut().enumerate() {
                *dst = f(x, y);
            }
        }
        img
    }
}

impl<'a> ImageRefY8<'a> {
    /// Borrow an externally-owned pixel buffer without copying
    pub fn new(buf: &'a [u8], width: usize, height: usize, stride: usize) -> Result<Self, ImageDimensionError> {
        let dims = ImageDimensions { width, height, stride };
        dims.check(buf.len())?;
        Ok(Self { dims, buf })
    }
}

impl<C: Deref<Target = [u8]>> ImageBuffer<C> {
    #[inline(always)]
    pub const fn dimensions(&self) -> &ImageDimensions {
        &self.dims
    }

    #[inline(always)]
    pub const fn width(&self) -> usize {
        self.dims.width
    }

    #[inline(always)]
    pub const fn height(&self) -> usize {
        self.dims.height
    }

    #[inline(always)]
    pub const fn stride(&self) -> usize {
        self.dims.stride
    }

    /// Raw backing buffer, including row padding
    pub fn data(&self) -> &[u8] {
        &self.buf
    }

    /// Pixels of row `y` (without padding)
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.dims.stride;
        &self.buf[start..start + self.dims.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = (usize, &[u8])> + '_ {
        (0..self.dims.height).map(move |y| (y, self.row(y)))
    }

    /// Pixel at `(x, y)`, or `None` if out of bounds
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.dims.width && y < self.dims.height {
            Some(self.buf[self.dims.offset(x, y)])
        } else {
            None
        }
    }

    /// Zero-copy view of this image
    pub fn as_view(&self) -> ImageRefY8<'_> {
        ImageBuffer {
            dims: self.dims,
            buf: &self.buf,
        }
    }

    /// Copy into a freshly-allocated image with the default alignment
    pub fn to_owned_image(&self) -> ImageY8 {
        let mut dst = ImageY8::zeroed(self.width(), self.height());
        for (y, src) in self.rows() {
            dst.row_mut(y).copy_from_slice(src);
        }
        dst
    }
}

impl<C: DerefMut<Target = [u8]>> ImageBuffer<C> {
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.dims.stride;
        let width = self.dims.width;
        &mut self.buf[start..start + width]
    }

    /// Apply `f` to every pixel
    pub fn apply(&mut self, mut f: impl FnMut(&mut u8)) {
        for y in 0..self.dims.height {
            self.row_mut(y).iter_mut().for_each(&mut f);
        }
    }

    /// Halve all pixel intensities
    pub fn darken(&mut self) {
        self.apply(|v| *v /= 2);
    }
}

impl<C: Deref<Target = [u8]>> Index<(usize, usize)> for ImageBuffer<C> {
    type Output = u8;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        assert!(x < self.dims.width, "x={x} out of bounds (width {})", self.dims.width);
        assert!(y < self.dims.height, "y={y} out of bounds (height {})", self.dims.height);
        &self.buf[self.dims.offset(x, y)]
    }
}

impl<C: DerefMut<Target = [u8]>> IndexMut<(usize, usize)> for ImageBuffer<C> {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        assert!(x < self.dims.width, "x={x} out of bounds (width {})", self.dims.width);
        assert!(y < self.dims.height, "y={y} out of bounds (height {})", self.dims.height);
        let offset = self.dims.offset(x, y);
        &mut self.buf[offset]
    }
}

#[cfg(test)]
mod test {
    use crate::detector::ImageDimensionError;

    use super::{ImageRefY8, ImageY8};

    #[test]
    fn stride_is_aligned() {
        let img = ImageY8::zeroed(100, 3);
        assert_eq!(img.stride(), 192);
        assert_eq!(img.data().len(), 3 * 192);
        assert!(img.data().iter().all(|v| *v == 0));

        let img = ImageY8::zeroed_with_alignment(10, 2, 1);
        assert_eq!(img.stride(), 10);
    }

    #[test]
    fn borrowed_header_checks_stride() {
        let buf = [0u8; 20];
        assert!(ImageRefY8::new(&buf, 4, 5, 4).is_ok());
        // last row does not need padding
        assert!(ImageRefY8::new(&buf, 4, 4, 5).is_ok());
        assert_eq!(
            ImageRefY8::new(&buf, 5, 2, 4).unwrap_err(),
            ImageDimensionError::StrideTooSmall { stride: 4, width: 5 }
        );
        assert_eq!(
            ImageRefY8::new(&buf, 4, 6, 4).unwrap_err(),
            ImageDimensionError::BufferTooSmall { actual: 20, minimum: 24 }
        );
    }

    #[test]
    fn index_uses_stride() {
        let buf: Vec<u8> = (0..12).collect();
        let img = ImageRefY8::new(&buf, 3, 3, 4).unwrap();
        assert_eq!(img[(0, 1)], 4);
        assert_eq!(img[(2, 2)], 10);
        assert_eq!(img.row(1), &[4, 5, 6]);
        assert_eq!(img.get(3, 0), None);

        let owned = img.to_owned_image();
        assert_eq!(owned[(2, 2)], 10);
        assert_eq!(owned.stride(), 96);
    }

    #[test]
    fn darken_halves() {
        let mut img = ImageY8::from_fn(2, 2, |x, y| (100 * (x + y)) as u8 + 1);
        img.darken();
        assert_eq!(img[(0, 0)], 0);
        assert_eq!(img[(1, 0)], 50);
        assert_eq!(img[(1, 1)], 100);
    }
}
