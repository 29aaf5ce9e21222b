/// Square grid of per-cell samples (value minus local threshold)
#[derive(Clone, Debug, PartialEq)]
pub(super) struct BitGrid {
    size: usize,
    values: Vec<f64>,
}

impl BitGrid {
    pub(super) fn new(size: usize) -> Self {
        Self {
            size,
            values: vec![0.; size * size],
        }
    }

    #[inline]
    pub(super) fn get(&self, x: usize, y: usize) -> f64 {
        self.values[y * self.size + x]
    }

    #[inline]
    pub(super) fn set(&mut self, x: usize, y: usize, v: f64) {
        self.values[y * self.size + x] = v;
    }

    /// Add `sharpening` times the Laplacian of the grid.
    ///
    /// Cells outside the grid count as zero.
    pub(super) fn sharpen(&mut self, sharpening: f64) {
        if sharpening == 0. {
            return;
        }

        const KERNEL: [[f64; 3]; 3] = [
            [ 0., -1.,  0.],
            [-1.,  4., -1.],
            [ 0., -1.,  0.],
        ];

        let size = self.size;
        let mut sharpened = vec![0f64; size * size];
        for y in 0..size {
            for x in 0..size {
                let mut acc = 0.;
                for (i, krow) in KERNEL.iter().enumerate() {
                    let Some(cy) = (y + i).checked_sub(1) else { continue };
                    if cy >= size {
                        continue;
                    }
                    for (j, k) in krow.iter().enumerate() {
                        let Some(cx) = (x + j).checked_sub(1) else { continue };
                        if cx >= size {
                            continue;
                        }
                        acc += self.get(cx, cy) * k;
                    }
                }
                sharpened[y * size + x] = acc;
            }
        }

        for (dst, s) in self.values.iter_mut().zip(sharpened) {
            *dst += sharpening * s;
        }
    }
}
