/// Number of quarter turns applied to a codeword
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
	Identity,
	Deg90,
	Deg180,
	Deg270,
}

impl Rotation {
	pub const fn values() -> [Rotation; 4] {
		[Self::Identity, Self::Deg90, Self::Deg180, Self::Deg270]
	}

	pub const fn from_count(count: usize) -> Self {
		match count % 4 {
			0 => Self::Identity,
			1 => Self::Deg90,
			2 => Self::Deg180,
			_ => Self::Deg270,
		}
	}

	/// Quarter turns, in `[0, 3]`
	#[inline(always)]
	pub const fn count(&self) -> usize {
		*self as usize
	}

	#[inline]
	pub fn theta(&self) -> f64 {
		self.count() as f64 * core::f64::consts::FRAC_PI_2
	}
}

/// Rotate a codeword by 90 degrees.
///
/// Codeword bits are laid out one quadrant at a time, so a quarter turn is a
/// rotation of the bit string by a quarter of its length. When the bit count
/// is `1 (mod 4)` the lowest bit is the center cell and stays put.
///
/// ```text
///  8 7 6       2 5 8      0 1 2
///  5 4 3  ==>  1 4 7 ==>  3 4 5    (rotate90 applied twice)
///  2 1 0       0 3 6      6 7 8
/// ```
pub const fn rotate90(w: u64, num_bits: u32) -> u64 {
	let (p, l) = if num_bits % 4 == 1 {
		(num_bits - 1, 1)
	} else {
		(num_bits, 0)
	};

	let w = ((w >> l) << (p / 4 + l)) | (w >> (3 * p / 4 + l) << l) | (w & l as u64);
	if num_bits >= 64 {
		w
	} else {
		w & ((1u64 << num_bits) - 1)
	}
}

/// A codeword and its three quarter-turn rotations
pub const fn rotations(code: u64, num_bits: u32) -> [u64; 4] {
	let r1 = rotate90(code, num_bits);
	let r2 = rotate90(r1, num_bits);
	let r3 = rotate90(r2, num_bits);
	[code, r1, r2, r3]
}
