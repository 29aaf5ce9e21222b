use crate::util::{image::{ImageRefY8, ImageY8}, TimeProfile};

use super::AprilTagQuadThreshParams;

/// XXX Tunable. Generally, small tile sizes -- so long as they're
/// large enough to span a single tag edge -- seem to be a winner.
const TILESZ: usize = 4;

/// Per-tile `[min, max]` statistics
struct TileMinMax {
    tw: usize,
    th: usize,
    data: Vec<[u8; 2]>,
}

impl TileMinMax {
    #[inline]
    fn get(&self, tx: usize, ty: usize) -> [u8; 2] {
        self.data[ty * self.tw + tx]
    }

    /// Midpoint threshold of a tile
    #[inline]
    fn thresh(&self, tx: usize, ty: usize) -> f32 {
        let [min, max] = self.get(tx, ty);
        (min as f32 + max as f32) / 2.
    }
}

fn tile_minmax(im: &ImageRefY8) -> TileMinMax {
    // the last (possibly partial) tiles along each row and column will
    // just use the min/max value from the last full tile.
    let tw = im.width() / TILESZ;
    let th = im.height() / TILESZ;

    let mut data = Vec::with_capacity(tw * th);
    for ty in 0..th {
        for tx in 0..tw {
            let mut min = u8::MAX;
            let mut max = u8::MIN;
            for dy in 0..TILESZ {
                let row = im.row(ty * TILESZ + dy);
                for &v in &row[tx * TILESZ..(tx + 1) * TILESZ] {
                    min = min.min(v);
                    max = max.max(v);
                }
            }
            data.push([min, max]);
        }
    }
    TileMinMax { tw, th, data }
}

/// 3x3 min/max dilation over the tile grid
fn blur(tiles: &TileMinMax) -> TileMinMax {
    let TileMinMax { tw, th, .. } = *tiles;
    let mut data = Vec::with_capacity(tw * th);
    for ty in 0..th {
        for tx in 0..tw {
            let mut min = u8::MAX;
            let mut max = u8::MIN;
            for y in ty.saturating_sub(1)..(ty + 2).min(th) {
                for x in tx.saturating_sub(1)..(tx + 2).min(tw) {
                    let [v_min, v_max] = tiles.get(x, y);
                    min = min.min(v_min);
                    max = max.max(v_max);
                }
            }
            data.push([min, max]);
        }
    }
    TileMinMax { tw, th, data }
}

/// Lower tile index and blend weight of the upper one, for tile centres at
/// `t * TILESZ + (TILESZ - 1) / 2`
#[inline]
fn interp_axis(p: usize, n_tiles: usize) -> (usize, usize, f32) {
    let center0 = (TILESZ as f32 - 1.) / 2.;
    let f = (p as f32 - center0) / TILESZ as f32;
    if f <= 0. {
        return (0, 0, 0.);
    }
    let t0 = f.floor() as usize;
    if t0 + 1 >= n_tiles {
        return (n_tiles - 1, n_tiles - 1, 0.);
    }
    (t0, t0 + 1, f - t0 as f32)
}

fn build_threshim(im: &ImageRefY8, tiles: &TileMinMax, qtp: &AprilTagQuadThreshParams) -> ImageY8 {
    let mut threshim = ImageY8::zeroed(im.width(), im.height());

    for y in 0..im.height() {
        let ty = (y / TILESZ).min(tiles.th - 1);
        let (ty0, ty1, ay) = interp_axis(y, tiles.th);
        let src = im.row(y);
        let dst = threshim.row_mut(y);

        for (x, (&v, dst)) in src.iter().zip(dst.iter_mut()).enumerate() {
            let tx = (x / TILESZ).min(tiles.tw - 1);

            // low contrast region? (no edges)
            let [min, max] = tiles.get(tx, ty);
            if max - min < qtp.min_white_black_diff {
                *dst = 127;
                continue;
            }

            // blend between the four nearest tile centres to avoid
            // steps in the threshold at tile boundaries
            let (tx0, tx1, ax) = interp_axis(x, tiles.tw);
            let top = tiles.thresh(tx0, ty0) * (1. - ax) + tiles.thresh(tx1, ty0) * ax;
            let bottom = tiles.thresh(tx0, ty1) * (1. - ax) + tiles.thresh(tx1, ty1) * ax;
            let thresh = top * (1. - ay) + bottom * ay;

            *dst = if v as f32 > thresh { 255 } else { 0 };
        }
    }

    threshim
}

/// Dilate then erode (3x3), ignoring the outermost pixels
fn deglitch(threshim: &mut ImageY8) {
    let w = threshim.width();
    let h = threshim.height();
    if w < 3 || h < 3 {
        return;
    }

    let mut tmp = ImageY8::zeroed(w, h);
    for y in 1..(h - 1) {
        for x in 1..(w - 1) {
            let mut max = 0;
            for yy in (y - 1)..=(y + 1) {
                for &v in &threshim.row(yy)[(x - 1)..=(x + 1)] {
                    max = max.max(v);
                }
            }
            tmp[(x, y)] = max;
        }
    }

    for y in 1..(h - 1) {
        for x in 1..(w - 1) {
            let mut min = 255;
            for yy in (y - 1)..=(y + 1) {
                for &v in &tmp.row(yy)[(x - 1)..=(x + 1)] {
                    min = min.min(v);
                }
            }
            threshim[(x, y)] = min;
        }
    }
}

/// The idea is to find the maximum and minimum values in a
/// window around each pixel. If it's a contrast-free region
/// (max-min is small), don't try to binarize. Otherwise,
/// threshold according to (max+min)/2.
///
/// Mark low-contrast regions with value 127 so that we can skip
/// future work on these areas too.
///
/// However, computing max/min around every pixel is needlessly
/// expensive. We compute max/min for tiles. To avoid artifacts
/// that arise when high-contrast features appear near a tile
/// edge, the max/min values used for any pixel are computed from
/// all 3x3 surrounding tiles, and the threshold itself is blended
/// bilinearly between neighbouring tiles.
///
/// Images too small to hold one tile come back entirely 127.
pub(super) fn threshold(qtp: &AprilTagQuadThreshParams, tp: &mut TimeProfile, im: &ImageRefY8) -> ImageY8 {
    let w = im.width();
    let h = im.height();

    if w < TILESZ || h < TILESZ {
        let mut threshim = ImageY8::zeroed(w, h);
        threshim.apply(|v| *v = 127);
        tp.stamp("threshold");
        return threshim;
    }

    // first, collect min/max statistics for each tile
    let im_minmax = tile_minmax(im);

    // second, apply 3x3 max/min convolution to "blur" these values
    // over larger areas. This reduces artifacts due to abrupt changes
    // in the threshold value.
    let im_minmax = blur(&im_minmax);

    let mut threshim = build_threshim(im, &im_minmax, qtp);
    drop(im_minmax);

    if qtp.deglitch {
        deglitch(&mut threshim);
    }

    tp.stamp("threshold");

    threshim
}
