use std::sync::Arc;

use hashbrown::{hash_map::Entry, HashMap};
use thiserror::Error;

use crate::families::{rotate90, AprilTagFamily, Rotation};

#[derive(Copy, Clone, Debug)]
struct QuickDecodeValue {
	/// Tag ID
	id: u16,
	/// How many errors were corrected?
	hamming: u8,
	/// Another code reaches this word with the same number of errors
	ambiguous: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct QuickDecodeResult {
	/// Tag ID
	pub id: u16,
	/// How many errors were corrected?
	pub hamming: u8,
	/// Rotation that maps the observed word onto the dictionary code
	pub rotation: Rotation,
}

/// Error building the decode table for a family
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddFamilyError {
	/// Too many codes in an AprilTag family
	#[error("Too many codes in AprilTag family to create QuickDecode (actual: {0}, max: {max})", max = QuickDecode::NUM_CODES_MAX)]
	TooManyCodes(usize),
	/// Hamming value was too big
	#[error("Hamming too big for QuickDecode: (actual: {0}, max: {max})", max = QuickDecode::HAMMING_MAX)]
	BigHamming(usize),
	/// Codes don't fit in a u64
	#[error("Too many bits in AprilTag family (actual: {0}, max: 64)")]
	TooManyBits(usize),
}

/// Lookup table from every codeword within `max_hamming` bit errors of a
/// dictionary code to that code's id.
pub(crate) struct QuickDecode {
	pub family: Arc<AprilTagFamily>,
	pub max_hamming: usize,
	table: HashMap<u64, QuickDecodeValue>,
}

impl std::fmt::Debug for QuickDecode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("QuickDecode")
			.field("family", &self.family.name)
			.field("max_hamming", &self.max_hamming)
			.field("entries", &self.table.len())
			.finish()
	}
}

impl QuickDecode {
	/// Maximum number of codes allowed in a family
	pub const NUM_CODES_MAX: usize = u16::MAX as usize;
	/// Maximum hamming
	pub const HAMMING_MAX: usize = 3;

	/// Create new QuickDecode for some AprilTag family
	pub fn new(family: Arc<AprilTagFamily>, max_hamming: usize) -> Result<Self, AddFamilyError> {
		if family.codes.len() >= Self::NUM_CODES_MAX {
			return Err(AddFamilyError::TooManyCodes(family.codes.len()));
		}
		if max_hamming > Self::HAMMING_MAX {
			return Err(AddFamilyError::BigHamming(max_hamming));
		}
		let nbits = family.bits.len();
		if nbits > 64 {
			return Err(AddFamilyError::TooManyBits(nbits));
		}

		let capacity = {
			let ncodes = family.codes.len();
			let mut per_code = 1;
			let mut choose = 1;
			for k in 1..=max_hamming.min(nbits) {
				choose = choose * (nbits + 1 - k) / k;
				per_code += choose;
			}
			ncodes * per_code
		};

		let mut qd = Self {
			family: family.clone(),
			max_hamming,
			table: HashMap::with_capacity(capacity),
		};

		for (i, code) in family.codes.iter().copied().enumerate() {
			let id = i as u16;
			qd.add(code, id, 0);

			if max_hamming >= 1 {
				for j in 0..nbits {
					let code_dist1 = code ^ (1u64 << j);
					qd.add(code_dist1, id, 1);
					if max_hamming >= 2 {
						for k in 0..j {
							let code_dist2 = code_dist1 ^ (1u64 << k);
							qd.add(code_dist2, id, 2);
							if max_hamming >= 3 {
								for m in 0..k {
									let code_dist3 = code_dist2 ^ (1u64 << m);
									qd.add(code_dist3, id, 3);
								}
							}
						}
					}
				}
			}
		}

		let before = qd.table.len();
		qd.table.retain(|_, v| !v.ambiguous);
		let dropped = before - qd.table.len();
		if dropped > 0 {
			log::debug!("quick decode {}: dropped {dropped} ambiguous words", family.name);
		}
		log::debug!("quick decode {}: {} entries (max hamming {max_hamming})", family.name, qd.table.len());

		Ok(qd)
	}

	fn add(&mut self, code: u64, id: u16, hamming: u8) {
		match self.table.entry(code) {
			Entry::Vacant(e) => {
				e.insert(QuickDecodeValue { id, hamming, ambiguous: false });
			},
			Entry::Occupied(mut e) => {
				let current = e.get_mut();
				if hamming < current.hamming {
					*current = QuickDecodeValue { id, hamming, ambiguous: false };
				} else if hamming == current.hamming && id != current.id {
					current.ambiguous = true;
				}
			}
		}
	}

	/// Number of words in the table
	#[cfg(test)]
	pub(crate) fn len(&self) -> usize {
		self.table.len()
	}

	/// Look up a word and its rotations, preferring the one with the fewest errors
	pub fn decode_codeword(&self, rcode: u64) -> Option<QuickDecodeResult> {
		let nbits = self.family.bits.len() as u32;

		let mut best: Option<QuickDecodeResult> = None;
		let mut rcode = rcode;
		for rotation in Rotation::values() {
			if let Some(entry) = self.table.get(&rcode) {
				if best.map_or(true, |b| entry.hamming < b.hamming) {
					best = Some(QuickDecodeResult {
						id: entry.id,
						hamming: entry.hamming,
						rotation,
					});
				}
			}
			rcode = rotate90(rcode, nbits);
		}
		best
	}
}
