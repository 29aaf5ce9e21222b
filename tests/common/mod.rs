//! Synthetic scenes for the integration tests
#![allow(dead_code)]

use std::sync::Arc;

use apriltag_detector::{
    util::{math::Vec2, ImageY8},
    AprilTagDetection, AprilTagDetector, AprilTagFamily, DetectorBuilder, DetectorConfig,
};
use nalgebra::{Matrix3, SMatrix, SVector};

pub const WHITE: u8 = 255;

pub fn family(name: &str) -> Arc<AprilTagFamily> {
    AprilTagFamily::for_name(name).unwrap()
}

pub fn detector(family: &Arc<AprilTagFamily>, hamming: usize, config: DetectorConfig) -> AprilTagDetector {
    let mut builder = DetectorBuilder::new(config);
    builder.add_family_bits(family.clone(), hamming).unwrap();
    builder.build().unwrap()
}

/// The tag's cell grid (one pixel per cell), with data bits `flips` inverted
pub fn tag_cells(family: &AprilTagFamily, id: usize, flips: &[usize]) -> ImageY8 {
    let mut cells = family.to_image(id).unwrap();
    let border_start = (family.total_width - family.width_at_border) as i32 / 2;
    for &bit in flips {
        let (bx, by) = family.bits[bit];
        let (x, y) = ((bx + border_start) as usize, (by + border_start) as usize);
        cells[(x, y)] = WHITE - cells[(x, y)];
    }
    cells
}

pub fn blank(width: usize, height: usize) -> ImageY8 {
    ImageY8::from_fn(width, height, |_, _| WHITE)
}

/// Draw `cells` with each cell `scale` pixels wide, top-left at `(x0, y0)`
pub fn paste(canvas: &mut ImageY8, cells: &ImageY8, scale: usize, x0: usize, y0: usize) {
    for y in 0..cells.height() * scale {
        for x in 0..cells.width() * scale {
            canvas[(x0 + x, y0 + y)] = cells[(x / scale, y / scale)];
        }
    }
}

/// Corners of the black border of a pasted tag, in detection order
/// (bottom-left, bottom-right, top-right, top-left)
pub fn pasted_corners(family: &AprilTagFamily, scale: usize, x0: usize, y0: usize) -> [Vec2; 4] {
    let border_start = (family.total_width - family.width_at_border) as usize / 2;
    let lo = (border_start * scale) as f64;
    let hi = ((border_start + family.width_at_border as usize) * scale) as f64;
    let (x0, y0) = (x0 as f64, y0 as f64);
    [
        Vec2::of(x0 + lo, y0 + hi),
        Vec2::of(x0 + hi, y0 + hi),
        Vec2::of(x0 + hi, y0 + lo),
        Vec2::of(x0 + lo, y0 + lo),
    ]
}

/// Perspective transform taking `src[i]` to `dst[i]`
pub fn homography(src: [Vec2; 4], dst: [Vec2; 4]) -> Matrix3<f64> {
    let mut a = SMatrix::<f64, 8, 8>::zeros();
    let mut b = SVector::<f64, 8>::zeros();
    for i in 0..4 {
        let (x, y) = (src[i].x(), src[i].y());
        let (u, v) = (dst[i].x(), dst[i].y());
        let r = 2 * i;
        a[(r, 0)] = x;
        a[(r, 1)] = y;
        a[(r, 2)] = 1.;
        a[(r, 6)] = -u * x;
        a[(r, 7)] = -u * y;
        b[r] = u;
        a[(r + 1, 3)] = x;
        a[(r + 1, 4)] = y;
        a[(r + 1, 5)] = 1.;
        a[(r + 1, 6)] = -v * x;
        a[(r + 1, 7)] = -v * y;
        b[r + 1] = v;
    }
    let h = a.lu().solve(&b).unwrap();
    Matrix3::new(
        h[0], h[1], h[2],
        h[3], h[4], h[5],
        h[6], h[7], 1.,
    )
}

pub fn apply(h: &Matrix3<f64>, p: Vec2) -> Vec2 {
    let q = h * nalgebra::Vector3::new(p.x(), p.y(), 1.);
    Vec2::of(q.x / q.z, q.y / q.z)
}

/// Render `cells` into `canvas` so that the grid's outer corners (top-left,
/// top-right, bottom-right, bottom-left) land on `dst`. Pixels are 4x4
/// supersampled.
///
/// Returns the grid-to-image homography.
pub fn warp(canvas: &mut ImageY8, cells: &ImageY8, dst: [Vec2; 4]) -> Matrix3<f64> {
    let tw = cells.width() as f64;
    let src = [Vec2::of(0., 0.), Vec2::of(tw, 0.), Vec2::of(tw, tw), Vec2::of(0., tw)];
    let h = homography(src, dst);
    let h_inv = h.try_inverse().unwrap();

    const SS: usize = 4;
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let mut acc = 0u32;
            let mut inside = false;
            for sy in 0..SS {
                for sx in 0..SS {
                    let p = Vec2::of(
                        x as f64 + (sx as f64 + 0.5) / SS as f64,
                        y as f64 + (sy as f64 + 0.5) / SS as f64,
                    );
                    let g = apply(&h_inv, p);
                    let value = if g.x() >= 0. && g.y() >= 0. && g.x() < tw && g.y() < tw {
                        inside = true;
                        cells[(g.x() as usize, g.y() as usize)]
                    } else {
                        canvas[(x, y)]
                    };
                    acc += value as u32;
                }
            }
            if inside {
                canvas[(x, y)] = (acc / (SS * SS) as u32) as u8;
            }
        }
    }
    h
}

/// Where the black-border corners of a warped tag land, in detection order
pub fn warped_corners(family: &AprilTagFamily, h: &Matrix3<f64>) -> [Vec2; 4] {
    let border_start = (family.total_width - family.width_at_border) as f64 / 2.;
    let lo = border_start;
    let hi = border_start + family.width_at_border as f64;
    [
        apply(h, Vec2::of(lo, hi)),
        apply(h, Vec2::of(hi, hi)),
        apply(h, Vec2::of(hi, lo)),
        apply(h, Vec2::of(lo, lo)),
    ]
}

pub fn assert_corners_close(det: &AprilTagDetection, expected: &[Vec2; 4], tolerance: f64) {
    for (i, (actual, expected)) in det.corners.iter().zip(expected.iter()).enumerate() {
        let d = actual.distance_to(*expected);
        assert!(d <= tolerance, "corner {i}: {actual:?} vs {expected:?} (off by {d:.3}px)");
    }
}
