use std::borrow::Cow;

use super::AprilTagFamily;

pub fn tag_standard32h10_create() -> AprilTagFamily {
	AprilTagFamily {
		codes: vec![
			0x000000003f784a6a,
			0x000000007a07502f,
			0x00000000b49655f4,
			0x00000000ef255bb9,
			0x0000000029b4617e,
			0x000000009ed26d08,
			0x00000000d96172cd,
			0x00000000890e841c,
			0x0000000038bb956b,
			0x00000000734a9b30,
			0x00000000e868a6ba,
			0x0000000022f7ac7f,
			0x000000005d86b244,
			0x00000000d2a4bdce,
			0x000000000d33c393,
			0x000000008251cf1d,
			0x000000006c8de631,
			0x00000000a71cebf6,
			0x000000009159030a,
			0x0000000006770e94,
			0x00000000f0b325a8,
			0x000000002b422b6d,
			0x00000000157e4281,
			0x00000000c52b53d0,
			0x000000003a495f5a,
			0x0000000074d8651f,
		],
		bits: vec![
			(-2, -2),
			(-1, -2),
			(0, -2),
			(1, -2),
			(2, -2),
			(3, -2),
			(4, -2),
			(1, 1),
			(5, -2),
			(5, -1),
			(5, 0),
			(5, 1),
			(5, 2),
			(5, 3),
			(5, 4),
			(2, 1),
			(5, 5),
			(4, 5),
			(3, 5),
			(2, 5),
			(1, 5),
			(0, 5),
			(-1, 5),
			(2, 2),
			(-2, 5),
			(-2, 4),
			(-2, 3),
			(-2, 2),
			(-2, 1),
			(-2, 0),
			(-2, -1),
			(1, 2),
		],
		width_at_border: 4,
		total_width: 8,
		reversed_border: false,
		min_hamming: 10,
		name: Cow::Borrowed("tagStandard32h10"),
	}
}
