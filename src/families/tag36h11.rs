use std::borrow::Cow;

use super::AprilTagFamily;

pub fn tag36h11_create() -> AprilTagFamily {
	AprilTagFamily {
		codes: vec![
			0x0000000cde18b051,
			0x0000000cbade508f,
			0x0000000ca4d19805,
			0x0000000e276c28f5,
			0x0000000fe9ad0581,
			0x0000000fb234bd47,
			0x00000000ad4aaa09,
			0x00000000105cf661,
			0x000000034366af9f,
			0x000000032f294138,
			0x000000027e79b88a,
			0x00000003e7dee4f0,
			0x00000005c9412c2e,
			0x00000005ad0fcca4,
			0x0000000576867346,
			0x000000051819b38c,
			0x00000004dbb41b7c,
			0x000000062ae4c6dc,
			0x00000007d0ea0e62,
			0x0000000707d5619f,
			0x00000008eb0ba915,
			0x00000008cc04c9eb,
			0x00000008568df53d,
			0x0000000985f7e223,
			0x0000000b6828a2ed,
			0x0000000ad4af7b85,
			0x0000000ab9583bfb,
			0x0000000a419917af,
			0x0000000d3b3ab86e,
			0x0000000d1d3559c0,
			0x0000000e6c65cd60,
			0x00000002ff897467,
			0x00000005d2084337,
			0x000000050472566b,
			0x00000006550acfcb,
			0x0000000631cd014c,
			0x000000061f83f154,
			0x00000007ffc4b1aa,
			0x000000089da0fcac,
			0x000000098ebeab32,
			0x0000000adfce7694,
			0x0000000a6e96e035,
			0x0000000d42335577,
			0x0000000cc8fa9c03,
			0x0000000e770cc239,
			0x0000000f4bb9677b,
			0x000000002ab11834,
			0x000000037f418594,
			0x0000000306803d76,
			0x00000004332a2a38,
			0x000000078d3894e7,
			0x00000008dc680363,
			0x00000008a6e133b5,
			0x00000009d49726eb,
			0x0000000c3e22c450,
			0x0000000da784bc78,
			0x000000004d571523,
			0x00000002e97b5a25,
			0x0000000627ef359c,
			0x00000007e83e9de8,
			0x00000008c18f7aaa,
			0x00000008adc83624,
			0x000000088a16d67e,
			0x0000000ba52371ad,
			0x0000000b2eaab859,
			0x0000000a92bce433,
			0x0000000ad9952da2,
			0x0000000d7d3966a4,
			0x000000009c33e3cf,
			0x00000005f1e9552c,
			0x00000005d7a79536,
			0x00000006ed06f2e4,
			0x0000000bb54bbd21,
			0x0000000e5ec9d8f2,
			0x000000006d93c6aa,
			0x0000000325712967,
			0x0000000583596341,
			0x000000052cde0b6b,
			0x0000000621b4aea3,
			0x0000000ebbebd5d5,
			0x0000000552d94604,
			0x000000064e32a18d,
			0x0000000ea6ad123a,
			0x000000057cbaffc5,
			0x000000061e9284e8,
			0x0000000cc040b931,
			0x0000000ec9cb1b1d,
			0x0000000318de0a34,
			0x0000000a0ac7914c,
			0x0000000455cc6078,
			0x000000047912a0e2,
			0x0000000997481748,
			0x0000000a11ea9855,
			0x0000000f11afef91,
			0x00000000ea987316,
			0x00000002572b9ba8,
			0x000000071ca722bd,
			0x00000008cbfbf860,
			0x00000003e952011c,
			0x00000004fba7e45a,
			0x00000004437e4c2a,
			0x000000075d4feb5c,
			0x000000097555fc46,
			0x000000091b9b3ca8,
			0x0000000a4cc4cb16,
			0x0000000d62211ec4,
			0x00000009d1cacc37,
			0x0000000c25fb5c5c,
			0x000000015f7f386d,
			0x00000004fe898781,
			0x0000000ca53bbcb5,
			0x0000000e082de39f,
			0x0000000eec959eb9,
			0x000000070e1b5daf,
			0x0000000c89d55a5a,
			0x0000000d43c48a55,
			0x00000007b0315bb9,
			0x0000000aeea57cc0,
			0x0000000a903bbc9a,
			0x000000054357963c,
			0x00000000129aa995,
			0x00000007fc52a257,
			0x00000008567eaf71,
			0x000000010aa6d4f9,
			0x00000006e94afc16,
			0x0000000a084179c9,
			0x000000022a46762a,
			0x00000007eaf18e15,
			0x00000008f672831c,
			0x00000004c0285a6e,
			0x00000009778222d1,
			0x0000000157c44933,
			0x00000008ccf650e2,
			0x0000000c0af23752,
			0x0000000c5698ab6c,
			0x0000000541c17eb9,
			0x00000006582dcc5d,
			0x0000000592e4dd85,
			0x000000010e6ad88b,
			0x0000000ae0b97d3d,
			0x0000000692ed63c7,
			0x0000000763616fee,
			0x000000039b1bf26b,
			0x0000000b409c58e9,
			0x0000000acf01035f,
			0x000000044794a753,
			0x000000033d22fc33,
			0x00000002dae53cfd,
			0x000000080a519b92,
			0x0000000b0ec8af40,
			0x00000002bdf3bb00,
			0x0000000969489b0a,
			0x00000000d9738d58,
			0x0000000045f5d330,
			0x0000000a3423e986,
			0x0000000af7b81b33,
			0x0000000105cd8a7e,
			0x000000094e179e8e,
			0x00000007de6cd902,
			0x00000006a005b4ba,
			0x0000000b1238ffbd,
			0x00000001546f45c7,
			0x0000000b551a1b6e,
			0x0000000ca44ac6ce,
			0x000000083c0b7b4c,
			0x000000051d2cb16b,
			0x00000000a0a2e170,
			0x00000007869e6c14,
			0x0000000b54cd7ede,
			0x000000054f912935,
			0x0000000c143ce1a0,
			0x000000025aab5d11,
			0x000000004f0b5c1e,
			0x00000003c18adbd2,
			0x00000009761886cf,
			0x00000005a9e386a9,
			0x00000001cd2d1a59,
			0x0000000fa46babdc,
			0x000000018558d39f,
			0x0000000019d4e992,
			0x000000075100d1e4,
			0x0000000753743cd3,
			0x00000003366706f2,
			0x0000000f5092adb9,
			0x0000000715be41d5,
			0x00000006b6603992,
			0x000000060c3c4bfa,
			0x000000010a8ae3ee,
			0x00000006175dce47,
			0x00000000be790f4d,
			0x00000009794e17a4,
			0x000000085208c142,
			0x0000000379e82cbe,
			0x0000000a41746b3d,
			0x0000000a8d1f0cf3,
			0x00000007abdf1d25,
			0x0000000064db6a33,
			0x00000001443ac326,
			0x0000000f178ae626,
			0x000000019fd9e294,
			0x000000082fdd22b9,
			0x0000000fa04c6dac,
			0x00000004af9a26f2,
			0x00000004338e54d6,
			0x0000000f6448a8bb,
			0x0000000acb5ea1b2,
			0x00000000c2ad6199,
			0x0000000d1c178f38,
			0x00000000da20d15d,
			0x0000000e5852bf0a,
			0x000000014139e8d2,
			0x000000076243fa55,
			0x0000000a9787c301,
			0x0000000d1fc501e9,
			0x00000007a980cdc9,
			0x000000041ee8a632,
			0x000000042338ff4f,
			0x0000000ccc5b078b,
			0x00000009d6f9ef56,
			0x00000008e6be0824,
			0x00000001f1d51a07,
			0x0000000d04266833,
			0x00000009965058cf,
			0x000000005ddc3d04,
			0x00000005e451f420,
			0x0000000eeabde953,
			0x00000009c960c3f6,
			0x0000000954e43a02,
			0x0000000bb4c8d613,
			0x00000009af0f3dce,
			0x0000000d13f21481,
			0x0000000363c7f55e,
			0x0000000dfa1538e6,
			0x0000000902a38f5c,
			0x00000005e59535bc,
			0x0000000e6b9829ea,
			0x0000000d3a2dbabb,
			0x000000016668baf0,
			0x0000000e3d410cf6,
			0x0000000bd41318b5,
			0x0000000688d2e8e7,
			0x0000000578bec231,
			0x00000003cca835a9,
			0x0000000f218b5566,
			0x0000000a611c3151,
			0x000000015b9fc083,
			0x00000001d342e86a,
			0x0000000f4a1017b8,
			0x00000008f5c64ad6,
			0x0000000131e2f0ec,
			0x00000001ba8dee18,
			0x0000000ebd0f5e1a,
			0x0000000af99c53bc,
			0x0000000502c524c5,
			0x00000003ee6153c9,
			0x0000000a20fa1e28,
			0x0000000f7b5d9261,
			0x0000000919453c95,
			0x000000098c11ca6c,
			0x00000005531a76f1,
			0x0000000432981f3d,
			0x0000000af69f4092,
			0x00000004c633ee7c,
			0x00000007521382a6,
			0x000000068e41d035,
			0x0000000dd239d6e8,
			0x0000000749dc92fa,
			0x00000002afc980d2,
			0x00000002b339d8af,
			0x0000000e9ef0a3de,
			0x0000000efb1f075c,
			0x00000004ee1d9f52,
			0x0000000997a60cf5,
			0x00000008b8f61331,
			0x000000077a2844c2,
			0x0000000949132bdc,
			0x00000006c98a2df4,
			0x0000000b9769a2a7,
			0x000000032c4d9844,
			0x0000000192b033e7,
			0x00000007282f1437,
			0x000000000ebf430c,
			0x0000000259332a2e,
			0x000000008325cb1f,
			0x00000008719fad64,
			0x00000009f284febf,
			0x000000074b73f748,
			0x0000000967bf171e,
			0x00000009753f7938,
			0x0000000799689410,
			0x0000000665e51f3f,
			0x0000000a19686728,
			0x0000000fd462e0ef,
			0x00000009114bf356,
			0x0000000b23863c9b,
			0x0000000932f4c04b,
			0x00000000b00d5bd7,
			0x0000000188cfb770,
			0x0000000384874bb3,
			0x00000009dd5db2c8,
			0x000000026d220fdd,
			0x0000000f9bbe12b9,
			0x00000001ab82667d,
			0x00000005eacacb65,
			0x00000004557dbab3,
			0x0000000417a5a890,
			0x0000000cf781d940,
			0x00000004caa51186,
			0x000000040c161095,
			0x0000000989efc75f,
			0x0000000c2ba1dc67,
			0x000000097e48dcb5,
			0x0000000d14e10194,
			0x000000014af0479b,
			0x00000008212a84ab,
			0x0000000dfafa15fc,
			0x000000053678b01d,
			0x00000003b9e8b33d,
			0x00000002236922cb,
			0x0000000af5e12506,
			0x0000000a90f25696,
			0x00000004eb78db80,
			0x00000006bba00750,
			0x0000000f2e56174d,
			0x00000002fbd15779,
			0x0000000d31f0c7f0,
			0x00000002780cceae,
			0x0000000f17add9cf,
			0x0000000fd195955a,
			0x0000000b4938561d,
			0x0000000d60e522fb,
			0x0000000b46a735b0,
			0x000000065f727ae2,
			0x00000001aa5fab46,
			0x00000004da7a2680,
			0x0000000d0f7906d8,
			0x00000006850ce790,
			0x0000000e90ba83c9,
			0x0000000e0bc20ecd,
			0x000000075c565efd,
			0x0000000ff634a3f0,
			0x00000008bc7f30a4,
			0x00000007ba9cd674,
			0x0000000c285da918,
			0x0000000c215c42eb,
			0x00000003cc2fb03a,
			0x0000000a05fd3be1,
			0x0000000c0fa33a2d,
			0x0000000fa2c8919d,
			0x00000000b9e566b5,
			0x00000008fbaa239a,
			0x00000002ac488da3,
			0x0000000b56338713,
			0x000000015ef8c868,
			0x0000000926452951,
			0x0000000ecdc4a149,
			0x00000002f8da94f7,
			0x0000000c95c6f6d9,
			0x00000002f7850dd1,
			0x000000013216cd7d,
			0x00000003cc5aafcd,
			0x00000000fa15e9f8,
			0x000000025fa612de,
			0x0000000c8c307dd3,
			0x000000007253c3eb,
			0x00000005da1fe90d,
			0x00000008493da742,
			0x000000077eb2cf7b,
			0x00000009f7327462,
			0x00000003c76a6985,
			0x0000000f6bce44b7,
			0x000000065df6a76f,
			0x000000004731e5a1,
			0x000000088855317f,
			0x0000000bf3502ccc,
			0x0000000365d2974b,
			0x0000000460a1271c,
			0x0000000a22222537,
			0x0000000ca6c1c35b,
			0x000000040822f52f,
			0x0000000ec008c4b5,
			0x00000002d9f9d5ce,
			0x0000000d1dd90f13,
			0x0000000ea2ec7f54,
			0x000000062ddcc385,
			0x0000000ea49e4761,
			0x00000009eec41a6c,
			0x000000045263b1e0,
			0x0000000bc4a16a7f,
			0x00000006407a1558,
			0x00000003b78b32b8,
			0x00000003ac9ae8a8,
			0x00000000c0ae3937,
			0x00000001df04a7de,
			0x00000000288f90a2,
			0x0000000352b59ac5,
			0x00000002518ea220,
			0x00000002d39a8e98,
			0x000000071af449ae,
			0x0000000b9add8707,
			0x000000094890ddd5,
			0x0000000650e2f9de,
			0x0000000af64f1fe6,
			0x0000000026e65bae,
			0x0000000c823e7bbb,
			0x000000093fea5667,
			0x0000000cb6e22b60,
			0x0000000bae773c33,
			0x00000005f47348d0,
			0x0000000e1dc3cb2a,
			0x000000062a9b3361,
			0x00000006c55148ed,
			0x0000000a4642578f,
			0x0000000ae803d80a,
			0x0000000dba9721d1,
			0x00000009bf6a8d92,
			0x00000002da58336c,
			0x00000001887cccc6,
			0x00000001b62d3da5,
			0x0000000741da294f,
			0x0000000a2ac24872,
			0x00000007a5b2b9fb,
			0x00000000b5a23f4e,
			0x0000000a313db285,
			0x0000000f37186d6d,
			0x00000006f62d2e77,
			0x0000000266ef217b,
			0x000000006d1e899a,
			0x0000000e44135ee6,
			0x000000014d8b26c7,
			0x000000046f60ca7d,
			0x0000000ab150e249,
			0x00000008ff353899,
			0x0000000db6694e2e,
			0x0000000448c14b51,
			0x00000009e3214161,
			0x0000000e64a5f05c,
			0x0000000ba0da6a55,
			0x0000000ee543eb67,
			0x00000002fc149920,
			0x000000089f29ebb9,
			0x00000007a7096d13,
			0x00000000807bb22e,
			0x0000000020a9d105,
			0x0000000b42edc4d0,
			0x0000000e22ffe885,
			0x00000009fbc3e72b,
			0x000000003b335743,
			0x00000006b987d963,
			0x0000000ef6766cbc,
			0x0000000d55e1f5a2,
			0x000000088639965b,
			0x000000022e8c41cb,
			0x0000000f8443dc58,
			0x00000004262a015e,
			0x0000000f74a65699,
			0x0000000d625d51b9,
			0x00000006729b78fb,
			0x000000090b01ed72,
			0x00000006063baf42,
			0x0000000c4769ee11,
			0x000000032f7efa95,
			0x0000000ce929e0d9,
			0x0000000bd66e917d,
			0x000000088f9f3045,
			0x00000005ba183520,
			0x0000000bec6dae26,
			0x0000000529425ec6,
			0x000000097a31a588,
			0x0000000460e8f6d7,
			0x0000000ae1849dec,
			0x0000000566d1db2f,
			0x000000014493b173,
			0x000000021e5f1a81,
			0x000000037cec1716,
			0x0000000499d1a3f1,
			0x0000000082224dcb,
			0x00000000f6dfe155,
			0x00000004164b18fd,
			0x0000000f7c9a3635,
			0x00000009a1371c5a,
			0x000000081b4afa25,
			0x00000002be54271b,
			0x000000023680f49c,
			0x0000000cca0bfca9,
			0x00000004bf699374,
			0x0000000d3c7c5e51,
			0x000000044c05463b,
			0x0000000dd6a8448d,
			0x000000098b331328,
			0x00000003a595fb4f,
			0x000000087ea157ff,
			0x0000000afa8028d7,
			0x000000017ea48d47,
			0x0000000516eb6f35,
			0x0000000e7fa82246,
			0x0000000bf9887e29,
			0x0000000c3d44d157,
			0x0000000756982592,
			0x0000000ed40b6242,
			0x0000000ccf71bd04,
			0x0000000221c9fdc2,
			0x000000011510b2b0,
			0x00000005bd95a00d,
			0x0000000b37c51386,
			0x00000009b79a1a0d,
			0x00000009628fe87a,
			0x000000020c70c549,
			0x00000003f4cdd8b8,
			0x0000000b5df08cd2,
			0x000000004640e9d7,
			0x00000006fdea8f38,
			0x00000003a730d725,
			0x00000004d5157f59,
			0x000000036fa95f82,
			0x00000000338d1271,
			0x0000000d6c3b8097,
			0x00000003baca4f9d,
			0x0000000b67270abc,
			0x0000000e2b39ee3c,
			0x0000000457eedd5d,
			0x0000000595767152,
			0x00000007427de427,
			0x0000000075da041e,
			0x000000040b8c8534,
			0x000000028c6653d4,
			0x00000002c43e6069,
			0x0000000a5e0fadc8,
			0x00000000c6e50e61,
			0x0000000f2e22d23e,
			0x00000000fe0e3cb2,
			0x00000009fc532764,
			0x000000035a1bffd6,
			0x0000000b05397e4a,
			0x00000004c465f2c1,
			0x0000000708c27590,
			0x00000005cf3d7570,
			0x0000000561f5c9cd,
			0x000000006589389d,
			0x0000000ff14823d5,
			0x00000004655db70d,
			0x0000000424699e82,
			0x000000069f11ad6e,
			0x000000021ab6e3e1,
			0x000000031df0b80f,
			0x0000000b40a6836b,
			0x0000000da7d302ef,
			0x00000001aec17d6b,
			0x0000000a7f57c973,
			0x0000000b04e6e784,
			0x00000008c16eb4bc,
			0x0000000a6164d445,
			0x000000097cca3957,
			0x00000005852a5034,
			0x0000000e43c789a0,
			0x0000000a25ee81e6,
			0x00000009669a7549,
			0x000000056f9f6a9e,
			0x0000000196422e93,
			0x000000047a3fa37f,
			0x00000005a6892a4c,
			0x0000000dbaa4afec,
			0x0000000411679795,
			0x00000002a2dcf78f,
			0x00000005f85a61e9,
			0x00000006b4db1d91,
			0x00000009e075bbbe,
			0x00000009018de4ec,
			0x00000003dccf4621,
			0x0000000bb2e5037c,
			0x00000001917a9ac3,
			0x00000005df61e6f3,
			0x00000001585e149b,
			0x000000057a7fbc10,
			0x0000000313947afc,
			0x00000003ecf8dd50,
			0x0000000f798fb1cb,
			0x000000000ae8697d,
			0x0000000d71b53f89,
			0x0000000960d711d4,
			0x0000000196d597b1,
			0x0000000051f78077,
			0x0000000216e770c9,
			0x00000003983d2255,
			0x000000078df58146,
			0x00000002260f67a4,
			0x0000000e2be753e2,
		],
		bits: vec![
			(1, 1),
			(2, 1),
			(3, 1),
			(1, 2),
			(2, 2),
			(3, 2),
			(1, 3),
			(2, 3),
			(3, 3),
			(6, 1),
			(6, 2),
			(6, 3),
			(5, 1),
			(5, 2),
			(5, 3),
			(4, 1),
			(4, 2),
			(4, 3),
			(6, 6),
			(5, 6),
			(4, 6),
			(6, 5),
			(5, 5),
			(4, 5),
			(6, 4),
			(5, 4),
			(4, 4),
			(1, 6),
			(1, 5),
			(1, 4),
			(2, 6),
			(2, 5),
			(2, 4),
			(3, 6),
			(3, 5),
			(3, 4),
		],
		width_at_border: 8,
		total_width: 10,
		reversed_border: false,
		min_hamming: 11,
		name: Cow::Borrowed("tag36h11"),
	}
}
