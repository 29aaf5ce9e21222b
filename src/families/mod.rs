use std::{borrow::Cow, sync::Arc};

use thiserror::Error;

use crate::util::image::ImageY8;

mod rotation;
mod tag16h5;
mod tag25h9;
mod tag36h11;
mod tag_circle21h7;
mod tag_standard32h10;
mod tag_standard41h12;

pub use rotation::{rotate90, rotations, Rotation};

pub use tag16h5::tag16h5_create;
pub use tag25h9::tag25h9_create;
pub use tag36h11::tag36h11_create;
pub use tag_circle21h7::tag_circle21h7_create;
pub use tag_standard32h10::tag_standard32h10_create;
pub use tag_standard41h12::tag_standard41h12_create;

/// Families whose dictionaries ship with this crate
const BUNDLED: [&str; 6] = [
	"tag16h5",
	"tag25h9",
	"tag36h11",
	"tagCircle21h7",
	"tagStandard32h10",
	"tagStandard41h12",
];

/// Well-known family names whose dictionaries are not bundled
const KNOWN_UNBUNDLED: [&str; 4] = [
	"tag36h10",
	"tagCircle49h12",
	"tagCustom48h12",
	"tagStandard52h13",
];

/// Reasons an [AprilTagFamily] description is rejected
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FamilyError {
	#[error("Family has no codes")]
	NoCodes,
	#[error("Family has too many bits (actual: {0}, maximum: 64)")]
	TooManyBits(usize),
	#[error("Family has no bits")]
	NoBits,
	#[error("Border width {width_at_border} does not fit in total width {total_width}")]
	BadWidths {
		width_at_border: u32,
		total_width: u32,
	},
	#[error("Code {index} has bits set beyond bit {nbits}")]
	CodeOutOfRange {
		index: usize,
		nbits: usize,
	},
	#[error("Bit {index} at ({x}, {y}) lies outside the tag")]
	BitOutOfRange {
		index: usize,
		x: i32,
		y: i32,
	},
}

/// A dictionary of tag codes and the layout of their bits
#[derive(Debug, PartialEq, Clone, Eq, Hash)]
pub struct AprilTagFamily {
	/// The codes in the family.
	pub codes: Vec<u64>,

	/// Cell coordinates of each bit, most significant first.
	///
	/// Coordinates are relative to the outer corner of the border and may be
	/// negative for families with data outside the border.
	pub bits: Vec<(i32, i32)>,

	/// Width (in cells) measured at the black/white border transition
	pub width_at_border: u32,

	/// Width (in cells) of the whole tag, including any data outside the border
	pub total_width: u32,

	/// If true, the border is white inside and black outside
	pub reversed_border: bool,

	/// minimum hamming distance between any two codes. (e.g. 36h11 => 11)
	pub min_hamming: u32,

	/// A human-readable name, e.g., "tag36h11"
	pub name: Cow<'static, str>,
}

impl AprilTagFamily {
	/// Build a custom family, checking that the layout is self-consistent
	pub fn new(
		name: impl Into<Cow<'static, str>>,
		codes: Vec<u64>,
		bits: Vec<(i32, i32)>,
		width_at_border: u32,
		total_width: u32,
		reversed_border: bool,
		min_hamming: u32,
	) -> Result<Self, FamilyError> {
		let family = Self {
			codes,
			bits,
			width_at_border,
			total_width,
			reversed_border,
			min_hamming,
			name: name.into(),
		};
		family.validate()?;
		Ok(family)
	}

	fn validate(&self) -> Result<(), FamilyError> {
		if self.codes.is_empty() {
			return Err(FamilyError::NoCodes);
		}
		let nbits = self.bits.len();
		if nbits == 0 {
			return Err(FamilyError::NoBits);
		}
		if nbits > 64 {
			return Err(FamilyError::TooManyBits(nbits));
		}
		if self.width_at_border == 0 || self.total_width < self.width_at_border {
			return Err(FamilyError::BadWidths {
				width_at_border: self.width_at_border,
				total_width: self.total_width,
			});
		}
		if nbits < 64 {
			if let Some(index) = self.codes.iter().position(|code| code >> nbits != 0) {
				return Err(FamilyError::CodeOutOfRange { index, nbits });
			}
		}
		let min_coord = self.min_coord();
		let max_coord = min_coord + self.total_width as i32;
		for (index, &(x, y)) in self.bits.iter().enumerate() {
			if x < min_coord || x >= max_coord || y < min_coord || y >= max_coord {
				return Err(FamilyError::BitOutOfRange { index, x, y });
			}
		}
		Ok(())
	}

	/// Look up one of the well-known families by name.
	///
	/// Returns `None` (with a warning) for unknown names and for well-known
	/// families whose dictionaries are not bundled.
	pub fn for_name(name: &str) -> Option<Arc<AprilTagFamily>> {
		let res = match name {
			"tag16h5" => tag16h5_create(),
			"tag25h9" => tag25h9_create(),
			"tag36h11" => tag36h11_create(),
			"tagCircle21h7" => tag_circle21h7_create(),
			"tagStandard32h10" => tag_standard32h10_create(),
			"tagStandard41h12" => tag_standard41h12_create(),
			name if KNOWN_UNBUNDLED.contains(&name) => {
				log::warn!("No dictionary data bundled for tag family {name}");
				return None;
			}
			name => {
				log::warn!("Unrecognized tag family name: {name}");
				return None;
			}
		};
		Some(Arc::new(res))
	}

	/// Names accepted by [for_name](Self::for_name)
	pub fn names() -> impl IntoIterator<Item = &'static str> {
		BUNDLED
	}

	/// Number of data bits per code
	#[inline]
	pub fn nbits(&self) -> usize {
		self.bits.len()
	}

	/// Smallest cell coordinate of the full `total_width` grid
	#[inline]
	pub(crate) fn min_coord(&self) -> i32 {
		(self.width_at_border as i32 - self.total_width as i32) / 2
	}

	/// Render code `idx` as a `total_width`x`total_width` image, one pixel per cell
	pub fn to_image(&self, idx: usize) -> Option<ImageY8> {
		let code = *self.codes.get(idx)?;
		let tw = self.total_width as usize;

		let mut im = ImageY8::zeroed(tw, tw);

		let white_border_width = self.width_at_border as usize + if self.reversed_border { 0 } else { 2 };
		let white_border_start = (tw - white_border_width.min(tw)) / 2;
		// 1px white border
		for i in 0..white_border_width.saturating_sub(1) {
			im[(white_border_start + i, white_border_start)] = 255;
			im[(tw - 1 - white_border_start, white_border_start + i)] = 255;
			im[(white_border_start + i + 1, tw - 1 - white_border_start)] = 255;
			im[(white_border_start, white_border_start + 1 + i)] = 255;
		}

		let border_start = (self.total_width - self.width_at_border) as i32 / 2;
		let nbits = self.bits.len();
		for (i, &(bit_x, bit_y)) in self.bits.iter().enumerate() {
			if code & (1u64 << (nbits - i - 1)) != 0 {
				let x = (bit_x + border_start) as usize;
				let y = (bit_y + border_start) as usize;
				im[(x, y)] = 255;
			}
		}
		Some(im)
	}
}

#[cfg(test)]
mod test {
	use super::{AprilTagFamily, FamilyError};

	#[test]
	fn bundled_families_are_valid() {
		for name in AprilTagFamily::names() {
			let family = AprilTagFamily::for_name(name).unwrap();
			assert_eq!(family.name, name);
			family.validate().unwrap();
		}
	}

	#[test]
	fn family_parameters() {
		let f = AprilTagFamily::for_name("tag16h5").unwrap();
		assert_eq!((f.codes.len(), f.nbits(), f.min_hamming), (30, 16, 5));
		let f = AprilTagFamily::for_name("tagCircle21h7").unwrap();
		assert_eq!((f.codes.len(), f.nbits(), f.min_hamming), (38, 21, 7));
		assert!(f.reversed_border);
		assert_eq!(f.min_coord(), -2);
		let f = AprilTagFamily::for_name("tag36h11").unwrap();
		assert_eq!((f.codes.len(), f.nbits(), f.min_hamming), (587, 36, 11));
		assert_eq!((f.width_at_border, f.total_width), (8, 10));
		let f = AprilTagFamily::for_name("tagStandard41h12").unwrap();
		assert_eq!((f.codes.len(), f.nbits(), f.min_hamming), (2115, 41, 12));
		assert_eq!(f.codes[0], 0x1bd8a64ad10);
		assert!(f.reversed_border);
	}

	#[test]
	fn tag36h11_first_tag() {
		// id 0, row by row from the top-left data cell (1 = white)
		const ROWS: [u8; 6] = [0b110101, 0b011101, 0b011000, 0b101000, 0b010110, 0b000100];
		let f = AprilTagFamily::for_name("tag36h11").unwrap();
		let im = f.to_image(0).unwrap();
		for (y, row) in ROWS.iter().enumerate() {
			for x in 0..6 {
				let white = row & (1 << (5 - x)) != 0;
				assert_eq!(im[(x + 2, y + 2)] == 255, white, "cell ({x}, {y})");
			}
		}
	}

	#[test]
	fn unbundled_and_unknown() {
		assert!(AprilTagFamily::for_name("tag36h10").is_none());
		assert!(AprilTagFamily::for_name("tag99h99").is_none());
	}

	#[test]
	fn custom_family_validation() {
		let bits = vec![(1, 1), (2, 1), (1, 2), (2, 2)];
		assert!(AprilTagFamily::new("t", vec![0b1010], bits.clone(), 4, 6, false, 1).is_ok());
		assert_eq!(
			AprilTagFamily::new("t", vec![], bits.clone(), 4, 6, false, 1).unwrap_err(),
			FamilyError::NoCodes
		);
		assert_eq!(
			AprilTagFamily::new("t", vec![0b1_0000], bits.clone(), 4, 6, false, 1).unwrap_err(),
			FamilyError::CodeOutOfRange { index: 0, nbits: 4 }
		);
		assert_eq!(
			AprilTagFamily::new("t", vec![0], vec![(1, 5)], 4, 6, false, 1).unwrap_err(),
			FamilyError::BitOutOfRange { index: 0, x: 1, y: 5 }
		);
	}

	#[test]
	fn render_tag16h5() {
		let f = AprilTagFamily::for_name("tag16h5").unwrap();
		let im = f.to_image(0).unwrap();
		assert_eq!((im.width(), im.height()), (8, 8));
		// outer ring white, black border inside it
		for i in 0..8 {
			assert_eq!(im[(i, 0)], 255);
			assert_eq!(im[(0, i)], 255);
			assert_eq!(im[(i, 7)], 255);
			assert_eq!(im[(7, i)], 255);
		}
		for i in 1..7 {
			assert_eq!(im[(i, 1)], 0);
			assert_eq!(im[(1, i)], 0);
			assert_eq!(im[(i, 6)], 0);
			assert_eq!(im[(6, i)], 0);
		}
		// code 0x27c8: MSB is bit (1, 1) -> pixel (2, 2)
		let code = f.codes[0];
		for (i, &(bx, by)) in f.bits.iter().enumerate() {
			let set = code & (1 << (15 - i)) != 0;
			let px = im[((bx + 1) as usize, (by + 1) as usize)];
			assert_eq!(px == 255, set, "bit {i}");
		}
		assert!(f.to_image(30).is_none());
	}
}
