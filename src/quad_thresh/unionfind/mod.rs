use crate::util::image::ImageY8;

use super::Connectivity;

pub(super) type UnionFindId = u32;

pub(crate) trait UnionFind<I> {
	type Id;

	/// Get set representative and cardinality
	fn get_set(&mut self, index: I) -> (Self::Id, u32);

	fn index_to_id(&self, idx: I) -> Self::Id;

	fn connect(&mut self, a: I, b: I) -> bool {
		let id_a = self.index_to_id(a);
		let id_b = self.index_to_id(b);
		self.connect_ids(id_a, id_b)
	}

	fn connect_ids(&mut self, a: Self::Id, b: Self::Id) -> bool;
}

/// Single-element node in UnionFind
#[derive(Debug, Clone, Copy)]
struct Entry {
	/// the parent of this node. If a node's parent is its own index,
	/// then it is a root.
	parent: u32,
	/// for the root of a connected component, the number of components
	/// connected to it. For intermediate values, it's not meaningful.
	size: u32,
}

/// Disjoint-set forest over the pixels of a `width`x`height` image, indexed
/// by `y * width + x`
pub(crate) struct UnionFind2D {
	width: usize,
	data: Box<[Entry]>,
}

impl UnionFind2D {
	pub fn new(width: usize, height: usize) -> Self {
		let len = width * height;
		assert!(len <= u32::MAX as usize, "image too large for union-find ({width}x{height})");
		let data = (0..len as u32)
			.map(|parent| Entry { parent, size: 1 })
			.collect::<Box<[_]>>();
		Self { width, data }
	}

	#[cfg(test)]
	pub(crate) fn len(&self) -> usize {
		self.data.len()
	}

	/// Root of `id`'s tree, compressing the path walked
	fn get_representative(&mut self, id: UnionFindId) -> UnionFindId {
		let mut root = id;
		while self.data[root as usize].parent != root {
			root = self.data[root as usize].parent;
		}

		let mut id = id;
		while self.data[id as usize].parent != root {
			let next = self.data[id as usize].parent;
			self.data[id as usize].parent = root;
			id = next;
		}
		root
	}

	/// Representative and size of the set containing pixel id `id`
	pub(crate) fn get_set_by_id(&mut self, id: UnionFindId) -> (UnionFindId, u32) {
		let rep = self.get_representative(id);
		(rep, self.data[rep as usize].size)
	}
}

impl UnionFind<(u32, u32)> for UnionFind2D {
	type Id = UnionFindId;

	fn get_set(&mut self, (x, y): (u32, u32)) -> (UnionFindId, u32) {
		let id = self.index_to_id((x, y));
		self.get_set_by_id(id)
	}

	#[inline(always)]
	fn index_to_id(&self, (x, y): (u32, u32)) -> UnionFindId {
		(y as usize * self.width + x as usize) as UnionFindId
	}

	fn connect_ids(&mut self, a: UnionFindId, b: UnionFindId) -> bool {
		let a = self.get_representative(a);
		let b = self.get_representative(b);
		if a == b {
			return false;
		}

		// union by size
		let a_size = self.data[a as usize].size;
		let b_size = self.data[b as usize].size;
		if a_size > b_size {
			self.data[b as usize].parent = a;
			self.data[a as usize].size += b_size;
		} else {
			self.data[a as usize].parent = b;
			self.data[b as usize].size += a_size;
		}
		true
	}
}

fn do_unionfind_first_line(uf: &mut UnionFind2D, im: &ImageY8) {
	let row = im.row(0);
	for x in 1..(im.width() - 1) {
		let v0 = row[x];
		if v0 == 127 {
			continue;
		}
		if v0 == row[x - 1] {
			uf.connect((x as u32, 0), (x as u32 - 1, 0));
		}
	}
}

fn do_unionfind_line(uf: &mut UnionFind2D, im: &ImageY8, y: usize, connectivity: Connectivity) {
	debug_assert!(y > 0);
	let w = im.width();

	let row = im.row(y);
	let row_up = im.row(y - 1);

	let mut v_0_m1 = row_up[0];
	let mut v_1_m1 = row_up[1];
	let mut v = row[0];

	for x in 1..(w - 1) {
		let v_m1_m1 = v_0_m1;
		v_0_m1 = v_1_m1;
		v_1_m1 = row_up[x + 1];
		let v_m1_0 = v;
		v = row[x];

		if v == 127 {
			continue;
		}

		let idx_xy = uf.index_to_id((x as u32, y as u32));
		let idx_up = idx_xy - w as u32;

		// (dx,dy) pairs for 8 connectivity:
		// (-1, -1)    (0, -1)    (1, -1)
		// (-1, 0)    (REFERENCE)
		if row[x - 1] == v {
			uf.connect_ids(idx_xy, idx_xy - 1);
		}

		// skip the up link when left and up are already joined through up-left
		if (x == 1 || !(v_m1_0 == v_m1_m1 && v_m1_m1 == v_0_m1)) && row_up[x] == v {
			uf.connect_ids(idx_xy, idx_up);
		}

		if connectivity == Connectivity::Eight && v == 255 {
			if (x == 1 || !(v_m1_0 == v_m1_m1 || v_0_m1 == v_m1_m1)) && row_up[x - 1] == v {
				uf.connect_ids(idx_xy, idx_up - 1);
			}
			if v_0_m1 != v_1_m1 && row_up[x + 1] == v {
				uf.connect_ids(idx_xy, idx_up + 1);
			}
		}
	}
}

/// Join same-valued neighbouring pixels of a thresholded image.
///
/// Pixels valued 127 are never joined. Diagonal links are only made between
/// white pixels, so black and white regions can't cross each other.
pub(crate) fn connected_components(threshim: &ImageY8, connectivity: Connectivity) -> UnionFind2D {
	let mut uf = UnionFind2D::new(threshim.width(), threshim.height());
	if threshim.width() < 3 || threshim.height() == 0 {
		return uf;
	}

	do_unionfind_first_line(&mut uf, threshim);
	for y in 1..threshim.height() {
		do_unionfind_line(&mut uf, threshim, y, connectivity);
	}
	uf
}

#[cfg(test)]
mod test {
	use crate::{quad_thresh::Connectivity, util::image::ImageY8};

	use super::{connected_components, UnionFind, UnionFind2D};

	#[test]
	fn union_by_size() {
		let mut uf = UnionFind2D::new(10, 1);
		assert!(uf.connect_ids(0, 1));
		assert!(uf.connect_ids(2, 1));
		assert!(!uf.connect_ids(0, 2));
		let (rep, size) = uf.get_set_by_id(2);
		assert_eq!(size, 3);
		assert_eq!(uf.get_set((0, 0)).0, rep);
		assert_eq!(uf.get_set((5, 0)), (5, 1));
		assert_eq!(uf.len(), 10);
	}

	#[test]
	fn chain_stays_flat() {
		let n = 10_000u32;
		let mut uf = UnionFind2D::new(n as usize, 1);
		for i in 1..n {
			uf.connect_ids(i - 1, i);
		}
		let (rep, size) = uf.get_set_by_id(0);
		assert_eq!(size, n);
		for i in 0..n {
			assert_eq!(uf.data[i as usize].parent, rep);
		}
	}

	/// White ring around a black square, on a 127 background
	fn ring_image() -> ImageY8 {
		ImageY8::from_fn(12, 12, |x, y| {
			match (x, y) {
				(3..=8, 3..=8) => 0,
				(1..=10, 1..=10) => 255,
				_ => 127,
			}
		})
	}

	#[test]
	fn components_of_ring() {
		let im = ring_image();
		let mut uf = connected_components(&im, Connectivity::Eight);

		let (black, black_size) = uf.get_set((4, 4));
		assert_eq!(black_size, 36);
		let (white, white_size) = uf.get_set((1, 1));
		assert_ne!(white, black);
		assert_eq!(white_size, 100 - 36);

		// 127 pixels stay singletons
		assert_eq!(uf.get_set((0, 0)).1, 1);
	}

	#[test]
	fn diagonal_white_pixels() {
		// two white pixels touching at a corner
		let im = ImageY8::from_fn(4, 3, |x, y| match (x, y) {
			(1, 1) | (2, 2) => 255,
			_ => 0,
		});
		let mut eight = connected_components(&im, Connectivity::Eight);
		assert_eq!(eight.get_set((1, 1)).0, eight.get_set((2, 2)).0);

		let mut four = connected_components(&im, Connectivity::Four);
		assert_ne!(four.get_set((1, 1)).0, four.get_set((2, 2)).0);
	}
}
