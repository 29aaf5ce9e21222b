use std::borrow::Cow;

use super::AprilTagFamily;

pub fn tag_standard41h12_create() -> AprilTagFamily {
	AprilTagFamily {
		codes: vec![
			0x000001bd8a64ad10,
			0x000001bdc4f3b2d5,
			0x000001bdff82b89a,
			0x000001be3a11be5f,
			0x000001be74a0c424,
			0x000001beaf2fc9e9,
			0x000001bee9becfae,
			0x000001bf244dd573,
			0x000001bf5edcdb38,
			0x000001bf996be0fd,
			0x000001bfd3fae6c2,
			0x000001c00e89ec87,
			0x000001c04918f24c,
			0x000001c0be36fdd6,
			0x000001c0f8c6039b,
			0x000001c133550960,
			0x000001c16de40f25,
			0x000001c21d912074,
			0x000001c258202639,
			0x000001c292af2bfe,
			0x000001c307cd3788,
			0x000001c37ceb4312,
			0x000001c3b77a48d7,
			0x000001c3f2094e9c,
			0x000001c42c985461,
			0x000001c4a1b65feb,
			0x000001c4dc4565b0,
			0x000001c516d46b75,
			0x000001c55163713a,
			0x000001c63b9f884e,
			0x000001c6762e8e13,
			0x000001c6eb4c999d,
			0x000001c725db9f62,
			0x000001c7606aa527,
			0x000001c7d588b0b1,
			0x000001c81017b676,
			0x000001c84aa6bc3b,
			0x000001c88535c200,
			0x000001c8bfc4c7c5,
			0x000001c96f71d914,
			0x000001c9e48fe49e,
			0x000001ca1f1eea63,
			0x000001ca59adf028,
			0x000001cb095b0177,
			0x000001cb43ea073c,
			0x000001cbb90812c6,
			0x000001cc68b52415,
			0x000001cca34429da,
			0x000001ccddd32f9f,
			0x000001cd18623564,
			0x000001cd8d8040ee,
			0x000001cdc80f46b3,
			0x000001ce029e4c78,
			0x000001ce77bc5802,
			0x000001ceb24b5dc7,
			0x000001ceecda638c,
			0x000001cf27696951,
			0x000001cf9c8774db,
			0x000001d086c38bef,
			0x000001d136709d3e,
			0x000001d1ab8ea8c8,
			0x000001d25b3bba17,
			0x000001d295cabfdc,
			0x000001d30ae8cb66,
			0x000001d3f524e27a,
			0x000001d42fb3e83f,
			0x000001d46a42ee04,
			0x000001d4a4d1f3c9,
			0x000001d519efff53,
			0x000001d5547f0518,
			0x000001d5c99d10a2,
			0x000001d6042c1667,
			0x000001d6794a21f1,
			0x000001d6ee682d7b,
			0x000001d763863905,
			0x000001d7d8a4448f,
			0x000001d813334a54,
			0x000001d84dc25019,
			0x000001d8885155de,
			0x000001d8c2e05ba3,
			0x000001d8fd6f6168,
			0x000001d9e7ab787c,
			0x000001da5cc98406,
			0x000001da975889cb,
			0x000001db0c769555,
			0x000001db47059b1a,
			0x000001dbbc23a6a4,
			0x000001dbf6b2ac69,
			0x000001dca65fbdb8,
			0x000001dce0eec37d,
			0x000001ddcb2ada91,
			0x000001df651402f4,
			0x000001df9fa308b9,
			0x000001e014c11443,
			0x000001e223c84830,
			0x000001e25e574df5,
			0x000001e383226ace,
			0x000001e3bdb17093,
			0x000001e4a7ed87a7,
			0x000001e4e27c8d6c,
			0x000001e51d0b9331,
			0x000001e592299ebb,
			0x000001e60747aa45,
			0x000001e67c65b5cf,
			0x000001e6b6f4bb94,
			0x000001e766a1cce3,
			0x000001e9008af546,
			0x000001e9eac70c5a,
			0x000001ea2556121f,
			0x000001ead503236e,
			0x000001eb84b034bd,
			0x000001edce466e6f,
			0x000001eeb8828583,
			0x000001eef3118b48,
			0x000001ef2da0910d,
			0x000001f0526bade6,
			0x000001f10218bf35,
			0x000001f1b1c5d084,
			0x000001f226e3dc0e,
			0x000001f34baef8e7,
			0x000001f3c0cd0471,
			0x000001f435eb0ffb,
			0x000001f55ab62cd4,
			0x000001f5cfd4385e,
			0x000001f67f8149ad,
			0x000001f7dedb6c4b,
			0x000001f88e887d9a,
			0x000001f8c917835f,
			0x000001f903a68924,
			0x000001f9b3539a73,
			0x000001fa9d8fb187,
			0x000001fd21b4f0fe,
			0x000001fd5c43f6c3,
			0x000001fe0bf10812,
			0x00000000558741c4,
			0x00000000caa54d4e,
			0x000000013fc358d8,
			0x00000002d9ac813b,
			0x000000034eca8cc5,
			0x000000038959928a,
			0x000000043906a3d9,
			0x00000004ae24af63,
			0x00000004e8b3b528,
			0x000000052342baed,
			0x0000000857150bb3,
			0x00000009b66f2e51,
			0x0000000adb3a4b2a,
			0x0000000b8ae75c79,
			0x0000000e499ba1b5,
			0x0000000f6e66be8e,
			0x00000010cdc0e12c,
			0x0000001142deecb6,
			0x0000001351e620a3,
			0x000000143c2237b7,
			0x00000017356582b8,
			0x00000017aa838e42,
			0x000000181fa199cc,
			0x00000018cf4eab1b,
			0x00000019446cb6a5,
			0x0000001aa3c6d943,
			0x0000001b8e02f057,
			0x0000001bc891f61c,
			0x0000001e4cb73593,
			0x00000022303697a8,
			0x000000231a72aebc,
			0x00000023ca1fc00b,
			0x0000002688d40547,
			0x00000026c3630b0c,
			0x0000002738811696,
			0x00000027e82e27e5,
			0x000000290cf944be,
			0x0000002b568f7e70,
			0x0000002b911e8435,
			0x0000002c063c8fbf,
			0x0000002cb5e9a10e,
			0x0000002d2b07ac98,
			0x0000002e1543c3ac,
			0x0000002e4fd2c971,
			0x0000002f3a0ee085,
			0x00000031f8c325c1,
			0x000000326de1314b,
			0x00000035a1b38211,
			0x0000003651609360,
			0x000000368bef9925,
			0x000000373b9caa74,
			0x00000037b0bab5fe,
			0x0000003b1f1c0c89,
			0x0000003b59ab124e,
			0x0000003bcec91dd8,
			0x0000003c0958239d,
			0x0000003d68b2463b,
			0x0000003e185f578a,
			0x0000003e52ee5d4f,
			0x00000042366dbf64,
			0x0000004320a9d678,
			0x000000435b38dc3d,
			0x0000004395c7e202,
			0x000000444574f351,
			0x000000452fb10a65,
			0x00000045a4cf15ef,
			0x0000004aad1994dd,
			0x0000004e5609f12d,
			0x000000506511251a,
			0x00000052e9366491,
			0x000000535e54701b,
			0x00000053d3727ba5,
			0x00000054831f8cf4,
			0x000000565797bb1c,
			0x0000005bd5004594,
			0x0000005c0f8f4b59,
			0x0000005de4077981,
			0x0000005f08d2965a,
			0x000000602d9db333,
			0x00000064c0ca2697,
			0x0000006535e83221,
			0x00000065e5954370,
			0x000000665ab34efa,
			0x00000066cfd15a84,
			0x00000067ba0d7198,
			0x000000682f2b7d22,
			0x0000006953f699fb,
			0x00000069c914a585,
			0x0000006a03a3ab4a,
			0x0000006b286ec823,
			0x0000006c87c8eac1,
			0x0000006d720501d5,
			0x0000006f810c35c2,
			0x0000006fbb9b3b87,
			0x00000071caa26f74,
			0x00000073648b97d7,
			0x000000741438a926,
			0x000000757392cbc4,
			0x0000007dea3ea13d,
			0x0000007ed47ab851,
			0x000000827d6b14a1,
			0x00000082f289202b,
			0x000000832d1825f0,
			0x0000008367a72bb5,
			0x00000083dcc5373f,
			0x000000886ff1aaa3,
			0x0000008a09dad306,
			0x0000008a4469d8cb,
			0x0000008cc88f1842,
			0x0000008d3dad23cc,
			0x0000008ded5a351b,
			0x0000008f87435d7e,
			0x00000090717f7492,
			0x000000915bbb8ba6,
			0x00000092f5a4b409,
			0x000000974e4221a8,
			0x0000009997d85b5a,
			0x0000009a47856ca9,
			0x0000009e2b04cebe,
			0x000000a0e9b913fa,
			0x000000a36dde5371,
			0x000000a8b0b7d824,
			0x000000a8eb46dde9,
			0x000000aa1011fac2,
			0x000000ac59a83474,
			0x000000afc8098aff,
			0x000000b24c2eca76,
			0x000000b2fbdbdbc5,
			0x000000b3e617f2d9,
			0x000000b545721577,
			0x000000ba132d8ea0,
			0x000000c005b424a2,
			0x000000c3e93386b7,
			0x000000c5488da955,
			0x000000c5f83abaa4,
			0x000000c9669c112f,
			0x000000cdbf397ece,
			0x000000ce34578a58,
			0x000000cea97595e2,
			0x000000d426de205a,
			0x000000dbeddce484,
			0x000000ddc25512ac,
			0x000000e75dcc04fe,
			0x000000ebb669729d,
			0x000000ef99e8d4b2,
			0x000000f0f942f750,
			0x000000f342d93102,
			0x000000f6ebc98d52,
			0x000000fa1f9bde18,
			0x000000fb09d7f52c,
			0x000000fbf4140c40,
			0x000000feed575741,
			0x0000010345f4c4e0,
			0x000001051a6cf308,
			0x000001084e3f43ce,
			0x00000109387b5ae2,
			0x00000109e8286c31,
			0x0000010a5d4677bb,
			0x0000010b0cf3890a,
			0x0000010c31bea5e3,
			0x0000010d5689c2bc,
			0x0000010e0636d40b,
			0x000001129963476f,
			0x00000113839f5e83,
			0x0000011a25d305d4,
			0x0000011b4a9e22ad,
			0x0000011bbfbc2e37,
			0x0000011dcec36224,
			0x0000011ef38e7efd,
			0x0000011f68ac8a87,
			0x0000011fddca9611,
			0x0000012018599bd6,
			0x0000012052e8a19b,
			0x0000012a9e0ca53c,
			0x0000013056043579,
			0x0000013523bfaea2,
			0x00000140ce3dd4e1,
			0x00000142dd4508ce,
			0x0000014a2f25c16e,
			0x0000014aded2d2bd,
			0x0000014e12a52383,
			0x00000152a5d196e7,
			0x00000153557ea836,
			0x00000154052bb985,
			0x00000154b4d8cad4,
			0x00000154ef67d099,
			0x00000157ae1c15d5,
			0x00000157e8ab1b9a,
			0x0000015b1c7d6c60,
			0x00000162e37c308a,
			0x00000169c03edda0,
			0x0000016ec8895c8e,
			0x0000016f3da76818,
			0x00000171121f9640,
			0x00000182af245281,
			0x0000018aeb412235,
			0x0000018b9aee3384,
			0x000001920292d510,
			0x00000195e6123725,
			0x0000019ab3cdb04e,
			0x0000019bd898cd27,
			0x0000019d37f2efc5,
			0x000001a2b55b7a3d,
			0x000001a6d369e217,
			0x000001adeabb94f2,
			0x000001b3dd422af4,
			0x000001ba7f75d245,
			0x000001bb2f22e394,
			0x000001c15c387f5b,
			0x000001c6d9a109d3,
			0x000001cc91989a10,
			0x000001d83c16c04f,
			0x000001e127e0a152,
			0x000001e42123ec53,
			0x000001e6dfd8318f,
			0x000001e879c159f2,
			0x000001f75811d0f7,
			0x000001f87cdcedd0,
			0x000001f8f1faf95a,
			0x0000000168a6ced3,
			0x0000000a19e1aa11,
			0x0000000b3eacc6ea,
			0x0000000e37f011eb,
			0x0000001081864b9d,
			0x000000188314158c,
			0x0000001f5fd6c2a2,
			0x000000216eddf68f,
			0x00000038fe6948d2,
			0x0000003fa09cf023,
			0x00000041ea3329d5,
			0x0000004caa753900,
			0x0000004dcf4055d9,
			0x00000052d78ad4c7,
			0x00000056807b3117,
			0x00000058ca116ac9,
			0x0000005ebc9800cb,
			0x0000006265885d1b,
			0x00000070942bc2d1,
			0x000000738d6f0dd2,
			0x0000007adf4fc672,
			0x00000085da20db62,
			0x0000008a6d4d4ec6,
			0x0000008ae26b5a50,
			0x0000008b92186b9f,
			0x0000008ec5eabc65,
			0x00000096525a7aca,
			0x000000a0d80d8430,
			0x000000a5a5c8fd59,
			0x000000a9142a53e4,
			0x000000b48419745e,
			0x000000b86798d673,
			0x000000c6963c3c29,
			0x000000ca3f2c9879,
			0x000000f0e7976786,
			0x000000f41b69b84c,
			0x000000fe668dbbed,
			0x000000ff163acd3c,
			0x000001015fd106ee,
			0x0000010fc9037269,
			0x0000011e6cc4e3a9,
			0x00000136716e4176,
			0x0000013f97c7283e,
			0x00000142567b6d7a,
			0x00000148f8af14cb,
			0x0000014a92983d2e,
			0x0000014ca19f711b,
			0x0000014d16bd7ca5,
			0x00000157d6ff8bd0,
			0x0000015eee513eab,
			0x0000016ca7d698d7,
			0x00000174a96462c6,
			0x0000017593a079da,
			0x00000177a2a7adc7,
			0x000001808e718eca,
			0x00000181038f9a54,
			0x00000190918d22a8,
			0x0000019e1083770f,
			0x000001ac3f26dcc5,
			0x000001b47b43ac79,
			0x000001b8d3e11a18,
			0x000001bbcd246519,
			0x000001efb9f682c8,
			0x00000005af98aca8,
			0x00000026a00beb78,
			0x0000005808b8c9b0,
			0x000000654d201852,
			0x0000007c2cfe5946,
			0x0000008d1a560438,
			0x000000a4e4705c40,
			0x000000a81842ad06,
			0x000000bce919ba0d,
			0x000000c5253689c1,
			0x000000d4edc317da,
			0x000000eaa8d63bf5,
			0x0000010fb757e29f,
			0x00000119c7ece07b,
			0x00000137bf1cd44a,
			0x00000141cfb1d226,
			0x0000015c58806f6a,
			0x00000165444a506d,
			0x0000016babeef1f9,
			0x0000016d0b491497,
			0x000001875988ac16,
			0x00000190f4ff9e68,
			0x00000198f68d6857,
			0x000001a60065b134,
			0x000001ad17b7640f,
			0x000001af26be97fc,
			0x000001b22001e2fd,
			0x000001b469981caf,
			0x000001b84d177ec4,
			0x000001b9ac71a162,
			0x000001ba5c1eb2b1,
			0x000001ce42b9a8a4,
			0x000001d13bfcf3a5,
			0x000001dad773e5f7,
			0x000001dcabec141f,
			0x000001e01a4d6aaa,
			0x000001e1048981be,
			0x000001e388aec135,
			0x000001e97b355737,
			0x000001fe4c0c643e,
			0x00000015db97b681,
			0x00000042eba7271a,
			0x000000444b0149b8,
			0x0000004bd771081d,
			0x0000007fc44325cc,
			0x000000992846a637,
			0x0000009b71dcdfe9,
			0x000000b71f769a06,
			0x000000c254d6b4bb,
			0x000000e5c96f3302,
			0x000000f8c5ce11e1,
			0x000000fe08a79694,
			0x000001090378ab84,
			0x000001093e07b149,
			0x0000010bc22cf0c0,
			0x0000010ef5ff4186,
			0x0000011b502a7914,
			0x00000126858a93c9,
			0x0000012b53460cf2,
			0x00000142a8425970,
			0x0000015f7aa73066,
			0x000001a0e66fa27c,
			0x000001d5bd7dd73f,
			0x000001ddf99aa6f3,
			0x00000010c1a1a7c9,
			0x0000001b81e3b6f4,
			0x00000021e9885880,
			0x000000259278b4d0,
			0x0000003ad86dcd61,
			0x0000003ef67c353b,
			0x00000099169b166d,
			0x000000a2eca10e84,
			0x000000b4fec3d64f,
			0x000000b70dcb0a3c,
			0x000000b832962715,
			0x000000cbdea21743,
			0x000000ced7e56244,
			0x000000de65e2ea98,
			0x000000f002e7a6d9,
			0x0000012589a2eceb,
			0x00000149e8778246,
			0x000001672ffa64c6,
			0x000001be56d5faf7,
			0x000001ec8bb08869,
			0x000001f5777a696c,
			0x00000017c747cada,
			0x000000454c7546fd,
			0x0000007d91e4d24b,
			0x000000bb1a2de24c,
			0x000001070ba95dc8,
			0x000001274c6f8b49,
			0x0000012920e7b971,
			0x0000014a4be9fe06,
			0x0000015003e18e43,
			0x0000017f22f832c9,
			0x000001f3cbe5b13f,
			0x000001fd2ccd9dcc,
			0x0000001cbde6b9fe,
			0x0000001ff1b90ac4,
			0x0000002cfb9153a1,
			0x000000302f63a467,
			0x0000004e61229dfb,
			0x000000a00a95a9b4,
			0x000000b21cb8717f,
			0x000000dd584fb3f0,
			0x0000012615f8dea6,
			0x0000012f76e0cb33,
			0x0000013fb48b64d6,
			0x0000016e5e83fdd2,
			0x00000170a81a3784,
			0x0000019506eeccdf,
			0x000001aa4ce3e570,
			0x00000058257d0648,
			0x000000640a8a324c,
			0x0000007e9358cf90,
			0x0000008b28130ce3,
			0x000000c4ccdcbacf,
			0x000000c71672f481,
			0x000000d45ada4323,
			0x000001181038eeeb,
			0x0000014dd1833ac2,
			0x00000163c72564a2,
			0x0000017ec5120d70,
			0x0000002dfd0550e6,
			0x000000484b44e865,
			0x00000079b3f1c69d,
			0x000000c6551a5368,
			0x000000ee976e4ad8,
			0x0000011f506e17c1,
			0x0000015636838071,
			0x0000017eedf5836b,
			0x000001a55bd14cb3,
			0x000001f8d9bc8694,
			0x00000033a3515159,
			0x000000580225e6b4,
			0x000000637215072e,
			0x000000c0c6063926,
			0x000001565f66f66c,
			0x0000015db147af0c,
			0x0000018cd05e5392,
			0x000001b2c91c1150,
			0x0000008cc7888bad,
			0x00000136821344ab,
			0x000001631d04a9ba,
			0x000001b91f152312,
			0x000001cd403f1eca,
			0x000001d1d36b922e,
			0x000001f129f5a89b,
			0x0000002bb8fb6d9b,
			0x0000006bc569bd13,
			0x00000113ab7c47e9,
			0x000001166a308d25,
			0x00000131a2ac3bb8,
			0x00000170c4de741c,
			0x000001cf7829c8b2,
			0x000001e39953c46a,
			0x0000000db01fea02,
			0x00000082ce2b7402,
			0x000000aa60d25a23,
			0x000000b645df8627,
			0x000000b6806e8bec,
			0x000000cdd56ad86a,
			0x0000012954e3dc3a,
			0x0000013fbfa411a4,
			0x00000182c555ac1d,
			0x0000019e72ef663a,
			0x000001a4a0050201,
			0x000001af25b80b67,
			0x000001b552cda72e,
			0x000001bb0ac5376b,
			0x000001d43439b211,
			0x0000000e88b0714c,
			0x00000027ecb3f1b7,
			0x0000005cc3c2267a,
			0x000000bbec2b869a,
			0x000000fa993fb374,
			0x00000111ee3bfff2,
			0x0000016c0e5ae124,
			0x0000018e23993ccd,
			0x00000017d7ecce0f,
			0x00000072a7b8c090,
			0x0000007cf2dcc431,
			0x000000a9533f237b,
			0x000000e039548c2b,
			0x00000101d974dc4a,
			0x00000143f4ea5faf,
			0x00000147634bb63a,
			0x0000015f2d660e42,
			0x0000016386037be1,
			0x00000180cd865e61,
			0x000001b2e5e04de8,
			0x000001b4ba587c10,
			0x0000002127292ad2,
			0x00000071abd119b2,
			0x0000007220ef253c,
			0x0000008d93f9d994,
			0x000000c59eda5f1d,
			0x000000d7b0fd26e8,
			0x0000017dfd26895b,
			0x000001c177f62f5e,
			0x000001c854b8dc74,
			0x000001f6899369e6,
			0x000001035006e519,
			0x0000012b925adc89,
			0x0000015b9bad9823,
			0x000001a927123c02,
			0x000000155953e4ff,
			0x0000006ae64652cd,
			0x000000d4cef1c218,
			0x000000e3ad42391d,
			0x0000015c39af19a8,
			0x00000192aaa676ce,
			0x000001bb621879c8,
			0x000000a52911823e,
			0x000000ac05d42f54,
			0x000000dda9101351,
			0x000001842fc87b89,
			0x0000001f4691c347,
			0x000000bce1804a7c,
			0x0000010c06ce16be,
			0x0000014b638f54e7,
			0x000001f6b8033648,
			0x0000000f31ca9f9f,
			0x0000002c042f7695,
			0x000000f4659734b1,
			0x000000ff25d943dc,
			0x000001ade8ae7bc8,
			0x000001c836ee1347,
			0x0000002a1e0bb8a3,
			0x0000003eb453bfe5,
			0x000000fdb4d39174,
			0x000001843554d1f0,
			0x000001c68b595b1a,
			0x00000051d99614bf,
			0x0000018dbf203478,
			0x000001f76d3c9dfe,
			0x0000007f1288fb53,
			0x000000aa139137ff,
			0x000000b5be0f5e3e,
			0x0000015c7f56cc3b,
			0x000001a11ef18f17,
			0x000001cfc8ea2813,
			0x000000eba83d2010,
			0x00000181f14aeea5,
			0x00000000aacd6af7,
			0x0000004bec9bd524,
			0x00000054d865b627,
			0x000001758574274d,
			0x0000006e654cac8d,
			0x000001156123204f,
			0x00000122a58a6ef1,
			0x000001d07e238fc9,
			0x000001f3b82d084b,
			0x0000007f0669c1f0,
			0x0000009a3ee57083,
			0x0000011cdbe74eea,
			0x000001717e9da5a4,
			0x00000174b26ff66a,
			0x000000158130ce65,
			0x000000acef09b9d3,
			0x00000178f961d43f,
			0x000001a6097144d8,
			0x000001d145088749,
			0x0000001b620bd49d,
			0x0000016d77c723fb,
			0x000000f046824042,
			0x0000013d5cc8d897,
			0x0000006d5d45cc4c,
			0x000001407eef9993,
			0x0000016552e23a78,
			0x000001d18523e375,
			0x0000000d38f4c54e,
			0x000001996897ce22,
			0x0000019bdb117dcf,
			0x000001d19c5bc9a6,
			0x000001d6df354e59,
			0x0000007898323d68,
			0x0000010545c919ab,
			0x0000015938d25f16,
			0x00000194b2143b2a,
			0x000000387a185e26,
			0x000000d4408eb733,
			0x0000011ed2b01011,
			0x000001436c13ab31,
			0x0000016840064c16,
			0x000001d81b385163,
			0x00000097cb653441,
			0x000001c791532231,
			0x000001e8f6e46c8b,
			0x0000007654285a1d,
			0x000000fe6e92c2fc,
			0x0000019dddf97859,
			0x0000008d225b0b47,
			0x0000010623e5f75c,
			0x000001bdd285104b,
			0x0000004ffd847706,
			0x000001bc617f5de3,
			0x0000004e1760b914,
			0x00000157aa01e381,
			0x000000a9fa4c38a4,
			0x0000010617c6bdf9,
			0x0000010826cdf1e6,
			0x000001386aafb345,
			0x000000f3329fc54b,
			0x000001caace70031,
			0x000000032ce59144,
			0x0000000f11f2bd48,
			0x0000009557e4f7ff,
			0x00000106cd0025af,
			0x0000007f8b26441a,
			0x000000a499a7eac4,
			0x00000151b0e86a83,
			0x000000354acbd732,
			0x000000a7aa231bf6,
			0x0000003748277b55,
			0x0000005ccbc72d89,
			0x00000139c376f2e7,
			0x00000008b566c88a,
			0x000000ba36f045b2,
			0x0000017be478ccb3,
			0x000001f7930c6e3a,
			0x0000005b4ea241be,
			0x0000002abe85ead0,
			0x0000010aaf78fb2f,
			0x00000079227b15f9,
			0x0000015e1bb8a546,
			0x00000194c73f0831,
			0x000001e1686794fc,
			0x000001e252a3ac10,
			0x000000a86a75307a,
			0x000001701c2fdd47,
			0x000001728ea98cf4,
			0x000001aca891466a,
			0x00000107e4a57c90,
			0x000001409f331368,
			0x0000019666b486fb,
			0x00000042304673e6,
			0x000001873c297a67,
			0x0000007645fc0790,
			0x00000148084bb239,
			0x00000160bca22155,
			0x0000002d01894186,
			0x0000009c2d0e3584,
			0x00000152b6e2319a,
			0x000001f818cf7cf9,
			0x0000000891091c61,
			0x0000002095b27a2e,
			0x0000004912957763,
			0x000000a027c57dca,
			0x000001d68fe7130b,
			0x00000047f356b0f1,
			0x00000176f7ebfdc8,
			0x000001a8d5b6e78a,
			0x000000fe0d98f7e4,
			0x0000006c0b7d0724,
			0x000001b6f83b13dd,
			0x0000019b38f5c9f6,
			0x000001d886afd432,
			0x000001f93c940d3d,
			0x0000001fe4fedc4a,
			0x0000006ecfbda2c7,
			0x0000019f4558a206,
			0x00000004d566a3b2,
			0x000001071627157f,
			0x000001e81a39b2ed,
			0x0000010f0b95a60b,
			0x0000013db58e3f07,
			0x000001c3fb8079be,
			0x000001294829adc0,
			0x000000fe3575e14a,
			0x0000018a6deeb203,
			0x00000095fdeb8093,
			0x0000019d75663db0,
			0x000000053d5ee944,
			0x0000018f236bb866,
			0x000001fb1b1e5b9e,
			0x0000008f7e086c41,
			0x000000a782b1ca0e,
			0x0000009d9b00422d,
			0x000000bfeacda39b,
			0x00000031cc3114f0,
			0x000000f9b87ac782,
			0x000001c80c691ba0,
			0x000000067eee42b5,
			0x000000d2a07e4352,
			0x00000134c22aee73,
			0x0000013bd97ca14e,
			0x0000006fbd78f718,
			0x000000e6004f9df1,
			0x0000018c755c765f,
			0x0000010f441792a6,
			0x0000016359716b10,
			0x000001f2dcf472c0,
			0x0000002c0ca01522,
			0x00000199f8d89498,
			0x0000016843f120d1,
			0x00000075ba11ad53,
			0x000001df24c9492f,
			0x00000019ee5e13f4,
			0x000000566913ed4d,
			0x00000064c09ac8fe,
			0x000001be511a46f7,
			0x000000be48447f12,
			0x000001061bb192b4,
			0x000000b0b7a29ae1,
			0x000001473b3f6f3b,
			0x00000016044bcee3,
			0x000001c065add14b,
			0x000001d068c96529,
			0x0000008ad61cc354,
			0x00000045b544bb8b,
			0x0000011c9716cb53,
			0x0000004a136e7f91,
			0x00000104a9a553b7,
			0x00000049f0175ffd,
			0x000000114cc1af56,
			0x00000103b34a0340,
			0x0000015ed4dce1b7,
			0x0000014f86fab58f,
			0x000001e6f4d3a0fd,
			0x000000109681bb0b,
			0x0000014a95e81cd2,
			0x000001320a7523b1,
			0x000000306d4289d0,
			0x000000d429277369,
			0x00000015ba89e9fc,
			0x000001900679f767,
			0x00000185113538de,
			0x000001b6b4711cdb,
			0x000001f6fb6e7218,
			0x000001221c845cda,
			0x000001dde29efaa7,
			0x0000003633d20418,
			0x000001dcf1d00097,
			0x000000eefb1d007d,
			0x00000077bc5eb2c6,
			0x000000c1529864c6,
			0x00000026f10884be,
			0x000000b18f982d14,
			0x0000005d7937c815,
			0x0000002b89c14e89,
			0x0000000d80e5caf0,
			0x00000163101b1da7,
			0x0000018c3cab2c2b,
			0x000000eee1d80122,
			0x000001ea45d5c5d9,
			0x000000cfdd14d6ab,
			0x00000090a9370e7d,
			0x000000c8dcfb0a01,
			0x000001024735b228,
			0x000001c2cff31c50,
			0x000001156058cd9f,
			0x000000dc5990a138,
			0x000001e21fea4fc1,
			0x0000008b5937c3d2,
			0x00000145b4df9233,
			0x0000014fcb00e676,
			0x0000009d4170890d,
			0x0000006a2d2ef2a8,
			0x0000003e59228519,
			0x0000004a1ad89189,
			0x00000062abd7e111,
			0x0000019c3bac8db5,
			0x0000018abb6c0e0c,
			0x000001d959f03efa,
			0x000000a3cfeb876a,
			0x000001e8b8776e57,
			0x000001787f5f43b1,
			0x000001ec5ad4e7ab,
			0x000000c2b05105b8,
			0x00000096a1b59264,
			0x0000012999264706,
			0x00000081ca4ba261,
			0x0000009134f20b21,
			0x00000179d71ff6be,
			0x000001243881f926,
			0x000000c8f9245182,
			0x000000cba62d06f4,
			0x000000176b7b9af7,
			0x000001108b6f7c63,
			0x000001880a492646,
			0x000001e3fee035a0,
			0x000001668160bc58,
			0x0000002733019c7b,
			0x000000b9de37bb8e,
			0x0000012ed8ec25fa,
			0x0000004f62a3778c,
			0x0000017360487610,
			0x0000014e33fc0639,
			0x000000a0a10a97f4,
			0x000001763aba6b4f,
			0x000001dc7a757e4a,
			0x0000017abc3b4ee9,
			0x000001eaaea53a67,
			0x00000145007d5979,
			0x000001dce3745071,
			0x000001f1b44b5d78,
			0x0000003b73688573,
			0x0000005cd8f9cfcd,
			0x000001785a66a271,
			0x0000008f0e17fbec,
			0x000000f9488a572d,
			0x000000e860bf02a2,
			0x000001fdd86d5913,
			0x0000006a3eab24d9,
			0x000001f45f46f9c0,
			0x0000001f1414a0dd,
			0x000000922e31a3be,
			0x00000106c46d05d5,
			0x00000079a744746f,
			0x00000005ffcaf33e,
			0x000000b44162e63d,
			0x000000eaf2759f8f,
			0x0000006a28e562bb,
			0x000001746a2d11e2,
			0x000000edae163f0c,
			0x00000031890eef51,
			0x000000837829ad9d,
			0x00000082698fea60,
			0x000000dac5dba09f,
			0x000001b83dc21e55,
			0x000000fdad17a096,
			0x000001042bf42853,
			0x000000379ad27293,
			0x0000008ade2ea6af,
			0x0000002492545a51,
			0x00000128bcb7c74d,
			0x0000016f9336a77c,
			0x0000011c2c8353cc,
			0x00000110643a6460,
			0x000001dd0b8d73bc,
			0x0000008650fa2130,
			0x0000018ba7c21a96,
			0x00000028c1735cde,
			0x00000126fb5d4d02,
			0x0000018a939c00f2,
			0x0000003717f3abfa,
			0x0000004f797ca28b,
			0x00000054875377e0,
			0x000001dda46e3658,
			0x000001f4fef6d93d,
			0x000000ef43b5d782,
			0x00000154eafbbf5f,
			0x00000185512e13bd,
			0x00000085bd765762,
			0x000001638db6a40a,
			0x0000007070ee5bd5,
			0x0000018ba62098ea,
			0x000001a300a93bcf,
			0x0000018db9ad96a9,
			0x000000095c21fecd,
			0x0000003df20e4acf,
			0x0000007b05394f46,
			0x00000072b0de0ccc,
			0x000000f8c759ee8c,
			0x000000a12fe616a3,
			0x000001ad5de466b8,
			0x0000001bd329666b,
			0x000000cc98e698e1,
			0x000001593a5e3bc1,
			0x000001b09bc8d7b7,
			0x000000d7d95f6064,
			0x00000146d56dfb6b,
			0x00000151ace7f0c7,
			0x0000005235f47104,
			0x00000160552f2bd9,
			0x000000b85d711139,
			0x000001b9909e4c5e,
			0x000001e9fd6383b8,
			0x00000013aa2a4a94,
			0x000001cd28f19398,
			0x000001328cd2adcb,
			0x00000036f95e901d,
			0x000001ff1761808f,
			0x000001bf5cba1d0d,
			0x00000152fb021b19,
			0x000000f9ecfc3a61,
			0x000000ac948d2cb6,
			0x0000000b7e1788fe,
			0x00000121f739dcb4,
			0x000001c85a9b2558,
			0x0000005e91fd6423,
			0x000001986779c35a,
			0x000000146247fa70,
			0x0000019160cd13b4,
			0x000000e990ebe27a,
			0x00000121ff3ee3c3,
			0x00000103173ff5e4,
			0x000000999d1faf27,
			0x000001bed034cdb9,
			0x00000129c2237599,
			0x000000b73e6e84ac,
			0x0000014fedd6c98b,
			0x00000032fddcf527,
			0x00000112f9e8b254,
			0x000001c2b79f0489,
			0x000000c92da5c461,
			0x000001eb749d5dea,
			0x00000146d88e7d76,
			0x0000012775e52da6,
			0x0000019c87d17e43,
			0x0000007c8ffc74d3,
			0x00000015f7e792e6,
			0x00000028d0ef5231,
			0x000000748148e4ec,
			0x0000009fd9a463f5,
			0x00000159974ab0d1,
			0x0000007b2e95390b,
			0x000001ff14f5ac33,
			0x0000001f655a5054,
			0x000000acf593d41a,
			0x000000898c1402a1,
			0x00000093b3e0e6ae,
			0x0000018d45df2de5,
			0x0000011ee6cb87ce,
			0x0000010936d11081,
			0x000001cae4599782,
			0x00000188e5a850b5,
			0x000000cd074f4022,
			0x000001dfca5b7190,
			0x000000b68e62b82b,
			0x0000016e8dc2307b,
			0x0000017c57ec8ddc,
			0x0000002826044499,
			0x00000106bc22fc2c,
			0x000000c14f105ed4,
			0x0000015af4d3f42a,
			0x00000137e93a480a,
			0x000001849474f50e,
			0x0000016dba230a81,
			0x0000001739183125,
			0x00000135fefc57c4,
			0x000000b3f2d634ea,
			0x00000029710ac92c,
			0x00000148cf641ae9,
			0x0000006708f24fcd,
			0x000000f94815f6fa,
			0x00000121607febda,
			0x000000805bb5d7ec,
			0x000001c39320b045,
			0x00000062000cdbc8,
			0x0000014ac177b4a5,
			0x000000063a51304e,
			0x0000012443627fa6,
			0x000001acd66a314c,
			0x000000f3b5bed960,
			0x000001517dc78a4d,
			0x0000016839481f18,
			0x0000007aa6079abe,
			0x000001f6e9c6f5e5,
			0x000000942c5bae28,
			0x000000458cd0f0a5,
			0x000001432717dd98,
			0x000000e39ebb3ef5,
			0x000001f0115ab508,
			0x000001662d90cacf,
			0x0000004d1177e1e0,
			0x00000092137e93e7,
			0x000000bf5c0ff11b,
			0x000001a81e81568d,
			0x0000011aaf91d931,
			0x0000018922c9bfba,
			0x000001d68ad74405,
			0x000000a78bce4d95,
			0x0000010edea8ed9f,
			0x0000002f6bdf7c6e,
			0x000001460858efb8,
			0x000000628b39bfa1,
			0x000001c3215f60ab,
			0x0000018ea1a46e45,
			0x00000019bf64425e,
			0x000000d310f81754,
			0x000001710d4c011f,
			0x0000018a69b611f9,
			0x000000debbe1d511,
			0x0000002fbfefbb73,
			0x00000097f0e7392e,
			0x000000ea0d6b3747,
			0x000000ee85459226,
			0x0000019f66c0749f,
			0x000001db94352bd4,
			0x00000171dd78c628,
			0x000000cbba32d9b0,
			0x000000d5e371e1d0,
			0x00000137c3fca430,
			0x0000006ad97a92e9,
			0x0000012f79b381ef,
			0x00000059b998e941,
			0x000000b2e255ed67,
			0x00000013354c8c86,
			0x000001aa40ef5488,
			0x000000b95adbcc0d,
			0x000001d4897b2626,
			0x000001166b9dfc1a,
			0x000001784c28be7a,
			0x0000001015dab617,
			0x0000005ecb96cd36,
			0x00000081600554a2,
			0x000001f48f1758cb,
			0x000001102cad72f0,
			0x0000010f94a3df50,
			0x000000db38400c7e,
			0x000001d29e72e330,
			0x00000059698d378f,
			0x00000167078aad77,
			0x00000048a99ecc6a,
			0x0000014c574abe4b,
			0x0000006fe03d48c3,
			0x000001baf5decb77,
			0x0000012fdb9e349b,
			0x00000103664d422f,
			0x0000007599779f7a,
			0x000001ee922cc3aa,
			0x0000016276782f89,
			0x00000037c979c3bc,
			0x000000cdba2dc35f,
			0x00000052f84ee994,
			0x000001efe6aa735f,
			0x0000015a1639ed91,
			0x0000009e3a598da6,
			0x00000019a86ca9a9,
			0x000000970dadb02b,
			0x000000d2d2239539,
			0x000001b5a9a7d43a,
			0x000001a28d711304,
			0x00000073027dc257,
			0x0000008697226ebb,
			0x00000091ab09256d,
			0x000000be79f6ad45,
			0x0000001f077c5229,
			0x0000007854970278,
			0x000000d39af32496,
			0x00000195054ca9ac,
			0x000001c1a949a25f,
			0x00000199873924c4,
			0x000001847acc8563,
			0x0000004acd98a710,
			0x0000000f04020319,
			0x0000014de092f710,
			0x000000305e1be573,
			0x0000015bd8fdc33a,
			0x0000015d07db004c,
			0x000000abd7e91181,
			0x0000008f5bd0f053,
			0x000000cbe19f767a,
			0x0000010be8ed0709,
			0x00000134b8d9b6ae,
			0x00000190e4ec260e,
			0x0000003bdcbca890,
			0x00000112372a27ed,
			0x0000001feb58f771,
			0x000001c4cfbe06df,
			0x000000dee5b17d82,
			0x000001871a774e8f,
			0x000000fd5def58a5,
			0x0000012ec074eb5f,
			0x0000006b55ac1c67,
			0x000000c5ffe47891,
			0x00000073b6ce69a7,
			0x00000066b0e0f585,
			0x00000100248623a3,
			0x00000016392f6f04,
			0x0000007d50747cb4,
			0x000001e19f28f0ae,
			0x0000014f8084fd3b,
			0x0000018f1b547e66,
			0x000000d28e258b80,
			0x00000174de911918,
			0x000000cf50acb1ff,
			0x000000c8ee9466da,
			0x000000d633674cfa,
			0x000000323c586885,
			0x000001285f5a641a,
			0x000001f6d00cf4d0,
			0x00000106da5ccee7,
			0x0000008020beacb9,
			0x000001af2bb77ef3,
			0x00000007a2f69285,
			0x000000eab509d74b,
			0x00000170b3474645,
			0x0000005a4dae3dea,
			0x0000002c433626d2,
			0x0000019d15ffd4ea,
			0x000001147744815f,
			0x0000015ddaf434a9,
			0x0000009025076210,
			0x000000939368b89b,
			0x000001859a3a07e7,
			0x00000159db2909c6,
			0x0000016d8f3a0103,
			0x000001905ea325b2,
			0x0000019381a115aa,
			0x000001f9ea104107,
			0x0000001e79cd536c,
			0x000000a9a3ac60e8,
			0x00000070d66cadb1,
			0x000000bc17a022c7,
			0x00000116da464f50,
			0x000000d83ca13b7d,
			0x0000009dcfec097c,
			0x000001a3240bf4a1,
			0x0000011426b7932e,
			0x000001acdf2b6bb1,
			0x000000c10683210d,
			0x0000007d7a7382be,
			0x0000005a6740670d,
			0x0000015b4c25f379,
			0x000000f3cb471e8b,
			0x000001714233b4d7,
			0x000000b328dc549d,
			0x00000123e124ab06,
			0x000000c8d2af806c,
			0x0000019b6c8925ca,
			0x00000064f327983d,
			0x000000dc5a2e66d8,
			0x000001df61d3d025,
			0x00000070fac19125,
			0x0000006617ff9162,
			0x000001da1d9503ab,
			0x000001ee6af25502,
			0x000000329c6d86ce,
			0x00000157e5f038e1,
			0x000000cc6dc97cac,
			0x00000024778a626b,
			0x00000138894bb342,
			0x0000007d6f002e55,
			0x0000004b9b4764cc,
			0x000000a0cbc5d154,
			0x0000012aff498e59,
			0x00000001653b5202,
			0x00000149b66cdb7a,
			0x0000004cffaca152,
			0x0000002f69b2b280,
			0x000000aed4bffbb2,
			0x000001dcf40a92c5,
			0x000001d5606cfc4d,
			0x000001d288445a1d,
			0x000000a9a40a7a93,
			0x0000016c34dd7a7a,
			0x000000e30c44e5dc,
			0x000000e7596aeb7b,
			0x000000d8ec1e4dac,
			0x0000019acb07c581,
			0x000001c59956a5de,
			0x0000005eb32fe0f7,
			0x000000d4f39ab374,
			0x00000041c0946c78,
			0x000001a8ca1f2d3f,
			0x0000001aebd3c67f,
			0x000000ed6dda9095,
			0x0000000d4eb3edb9,
			0x0000007819d2a6ee,
			0x00000045b8f998fa,
			0x0000003c0201308a,
			0x000001e0ffab3f53,
			0x000001e6cc32a780,
			0x000001045e550c09,
			0x00000083c4a6bfaa,
			0x00000022b798a1f7,
			0x000000f42f1fdb24,
			0x000001bbfc9837f4,
			0x000000ce03a8c117,
			0x00000066b8746cea,
			0x000000534be8e3d1,
			0x00000037c5258685,
			0x000000ed86dea0ed,
			0x0000015ecb7ce911,
			0x000001245834d414,
			0x000000c6ec052f56,
			0x0000009df26ab706,
			0x000001e5d6eed381,
			0x000000675416f65f,
			0x0000007ee172ae2b,
			0x00000053bff79a11,
			0x000001bfa2b53c01,
			0x000001169abbdc78,
			0x000001127893424a,
			0x00000128bd3ea4de,
			0x00000147e8cf6371,
			0x000000444d0b3b3f,
			0x0000005d2e9b8c8f,
			0x0000014ec21faf96,
			0x0000002a021b8364,
			0x00000188855bf812,
			0x00000168438f3dfc,
			0x000001b3a7ea750d,
			0x000001ff1a134379,
			0x0000010c8c199da7,
			0x000000ec9a724ddb,
			0x00000011f6a71c4d,
			0x000000ad5318169e,
			0x000001b156466b97,
			0x000001846159b5ea,
			0x0000006d0af1b37f,
			0x000000b7d5659b5f,
			0x00000163fadd70c5,
			0x000001287c7ad5c8,
			0x000000f6df36dfb0,
			0x00000188bbbf3a19,
			0x0000014162619351,
			0x00000186af9c4e52,
			0x0000000958ca4268,
			0x0000008044bb1794,
			0x00000071113e2ff4,
			0x000001fc66211707,
			0x000001827c740954,
			0x000001ff95d06cc4,
			0x000001b54ff685c1,
			0x0000006d88de7741,
			0x000001c927e3eca8,
			0x00000042c6d5652b,
			0x000001c28d92cb19,
			0x000001b5779b48d9,
			0x000001344e24a9ce,
			0x00000031b6b8c707,
			0x0000011c4a8eb4e2,
			0x000001995b6d9d79,
			0x000001193ac8315f,
			0x0000017f611bc3b2,
			0x0000009902c85dc7,
			0x0000010ca1728539,
			0x00000009a5bcf7b6,
			0x000000c875bfe3b9,
			0x000001c80ee1752e,
			0x0000000b61b1b07e,
			0x000001e4f7552473,
			0x00000141ae812d3a,
			0x000000992bdf44f2,
			0x00000177cb8203f3,
			0x0000000cc54c9a54,
			0x0000012b5f0a47a0,
			0x00000117884a0232,
			0x000000bf7d50d7b6,
			0x0000004c6c3f6879,
			0x00000037a66b633f,
			0x0000010fd1a275ee,
			0x0000011e5790554c,
			0x0000015c168a72a3,
			0x0000013c7537eaba,
			0x000000ca23dd9aea,
			0x0000012dbb51fc2a,
			0x0000014ae352eed0,
			0x00000020e166257f,
			0x0000011ce40d3d1e,
			0x0000010f4929db1b,
			0x0000019fd90a2f45,
			0x0000004ee5bb04b0,
			0x00000060b378e062,
			0x000001c86c08e115,
			0x0000000849e4e2de,
			0x000001161e70e4cf,
			0x00000087d52000e4,
			0x000001c0acc158ab,
			0x00000136f7d2d252,
			0x00000158c0d6986c,
			0x000001174bd33519,
			0x0000005a72318656,
			0x000000d6e9d0f11f,
			0x00000188b6005e76,
			0x000000ecbb0ca621,
			0x000001131eb3cde3,
			0x000001de6369b749,
			0x00000153d9ccb5ac,
			0x0000006022a8be13,
			0x000000368ec83b60,
			0x000001345506440d,
			0x000000ae9863319e,
			0x000000d963623257,
			0x00000097fe23da88,
			0x000001cb23403fe1,
			0x00000190a0c54bc2,
			0x000000585f248208,
			0x000001be4b974e1f,
			0x000000571a78ba23,
			0x00000113f244d483,
			0x000000f8780c4818,
			0x000000db51a82200,
			0x0000016c49ec533a,
			0x000001585317f190,
			0x000001fc70105ed9,
			0x000001ae4053905e,
			0x000001dda20b1e04,
			0x0000014e06567fda,
			0x000001fcf73cc8f6,
			0x000000ab374cf2e1,
			0x000000752720033a,
			0x0000004a6432e5dc,
			0x000001c0f08cdd28,
			0x0000005eb87043f7,
			0x000001ec38067d90,
			0x000001fef4cf5059,
			0x000001700dac4882,
			0x0000000cdd792496,
			0x0000001994ef8c66,
			0x000001669a978fac,
			0x00000093695c2811,
			0x0000008c84651653,
			0x000001305144f59e,
			0x000001e5597b1863,
			0x00000154d2615543,
			0x000001e5a8c08afc,
			0x000000841f1b18ec,
			0x000001476b7e29a0,
			0x0000010731c052f3,
			0x0000008744107d0d,
			0x000000c61901934d,
			0x000000ec347b7b88,
			0x000000e7476d701e,
			0x00000006e867aafb,
			0x000000e1d03044bb,
			0x000000658319e530,
			0x0000014336373a0e,
			0x0000016cb93a933e,
			0x000001b8b6d95bb4,
			0x00000004a5413171,
			0x00000010ff862197,
			0x000001115f3202f1,
			0x000001d6f7ed1430,
			0x000001b373d7ff0f,
			0x00000025cfa73de1,
			0x000000cc6b38943a,
			0x000000759f924c6c,
			0x0000014862200a2c,
			0x000001b74c7a4cb4,
			0x0000012d44b5851b,
			0x000000ca97f5aeb9,
			0x0000004d36701f59,
			0x000001de88f2493c,
			0x000000420abaa0f6,
			0x000000d892babdd5,
			0x00000062fe9b8b99,
			0x0000006a1c54d76e,
			0x000000b87dde2e3b,
			0x000000c77657afe3,
			0x0000006b72f09030,
			0x00000184b68bbaea,
			0x00000022a6cd479e,
			0x000000166f0c5ba7,
			0x000001809f47bad3,
			0x0000018ed0cf68af,
			0x000001ae1368afda,
			0x000000ca2d646634,
			0x000001320f49e286,
			0x000000d56c0385bd,
			0x0000006b6f80ffc8,
			0x000000b0615b2264,
			0x00000125287f0185,
			0x000000110b2bee8f,
			0x000001e9004a8e70,
			0x0000015dde15e068,
			0x0000010438693ad9,
			0x0000015baa26fb1e,
			0x00000183bfc66070,
			0x000000804a41b38f,
			0x0000005dbd4a1a67,
			0x000000b10be90245,
			0x00000050b250494f,
			0x0000001dac323cc2,
			0x00000175a189df75,
			0x0000012ddf98fe04,
			0x0000010862cc7c48,
			0x0000001dc90b7cd4,
			0x0000011dbf851ad7,
			0x000001a87ae5dc11,
			0x0000017f7fa9e215,
			0x0000013038ead8fe,
			0x000001181bd7be69,
			0x00000119086a04d8,
			0x000001589d569b98,
			0x000001e9b00424f1,
			0x00000080ff1896e9,
			0x00000090d4c22245,
			0x0000001eaf9672f6,
			0x0000004afcdf31fa,
			0x00000145d412a4c3,
			0x000000ab19785bb1,
			0x000001d96d082bbe,
			0x0000014286dce6ec,
			0x00000160fd92f8fb,
			0x0000012fdcb8b2af,
			0x000001a01a3425da,
			0x00000133162849bf,
			0x0000017f312a577b,
			0x000000a28b92bb72,
			0x0000018e5fbd6372,
			0x000001df71ceacee,
			0x0000012c5bdf9515,
			0x000000e6c1acce21,
			0x0000009d25699cd2,
			0x0000015270b91c81,
			0x00000126e0bb0707,
			0x000000fdfae613f7,
			0x0000016e8679d842,
			0x000001d2c9b489ad,
			0x000001abd33e45cc,
			0x00000192f2c15d5d,
			0x000001713ce8276c,
			0x0000010e56516b04,
			0x0000013739a4e4b7,
			0x00000076c27d6558,
			0x000001eee4c41ee2,
			0x00000064d3c6c09b,
			0x0000015d2944dbe0,
			0x000000c61d6ba698,
			0x00000180dffc6541,
			0x0000015061fb4932,
			0x000000df6e885666,
			0x00000127eec246c8,
			0x0000019b51fd70c4,
			0x000001187e4df717,
			0x0000006a8b0a8f1d,
			0x0000011942390170,
			0x000000a421965912,
			0x000001f726d51351,
			0x000000317c4daa03,
			0x000001acdc1ece78,
			0x0000003fd243f3eb,
			0x000000fdc16c4efb,
			0x0000002f12371b10,
			0x00000039b6e20f1c,
			0x00000169ab733a9e,
			0x000000fb398f0a72,
			0x0000002761cbddc4,
			0x000000d6a06bbcce,
			0x00000056f4927d58,
			0x000000c5a4372537,
			0x000001b90381e8d6,
			0x00000091b9fae2d8,
			0x0000016ee910633b,
			0x000000a7bc7dd016,
			0x000000e725ab716a,
			0x0000018227cf3c37,
			0x000000dba6f91ce3,
			0x000001fedfb8bf3e,
			0x0000015de02922d1,
			0x000000d11529aaa3,
			0x000001a162d5f7f1,
			0x0000004b0b4d9d3e,
			0x0000006f50397572,
			0x000001348ebcfc2e,
			0x0000009df43157d4,
			0x000001999827f76a,
			0x000001467f2570f3,
			0x000001eba5dff8c1,
			0x0000010ee96b1e22,
			0x00000107be5eddbe,
			0x000001411df497c3,
			0x000000d226a166c0,
			0x000000f3d092e815,
			0x00000058e2ed63ce,
			0x0000013bd7ba8df6,
			0x000001298e4f35ce,
			0x0000011be9845c0d,
			0x000000b53afc8ffa,
			0x00000067af688e82,
			0x0000010a41cd33d7,
			0x000000f6838baeab,
			0x0000000777ac0858,
			0x000001dfcd3f233b,
			0x00000034944e7100,
			0x0000012487a3b270,
			0x000000ec12b9190d,
			0x000001bbc01a91c7,
			0x000000656b8c243b,
			0x0000004dbb62b088,
			0x0000013ab915c3fa,
			0x000001f8a3d62167,
			0x000000009a46896a,
			0x000000fb5f4d2fea,
			0x000001116bc7e342,
			0x00000183e9fd5a14,
			0x000001d0c98a1c5e,
			0x0000015d459676d3,
			0x000000f760f6f9a3,
			0x0000012c66e40456,
			0x00000173ddc771b1,
			0x00000007db0a1578,
			0x000001f3ce6f5029,
			0x00000077d9f5679b,
			0x0000001ac5f85b64,
			0x00000004c672cd5d,
			0x0000015680655ee8,
			0x00000186876a1255,
			0x000000774469842e,
			0x0000013271af9a24,
			0x0000006e89c9fb2c,
			0x0000006c1d9e2be1,
			0x000000f0741acf5a,
			0x0000002aa8d88fee,
			0x000000038b16ed82,
			0x000000e9cba39dd7,
			0x000000912e6005cb,
			0x000001251d6608a9,
			0x000000e0b6ff59fb,
			0x000000e08ea95b44,
			0x0000014573ade1a2,
			0x0000015b7c8a4880,
			0x00000030578d9c9a,
			0x000001fd9016e391,
			0x000000a0f6219300,
			0x000000d6556f9ac1,
			0x0000001c1012de94,
			0x000000b971893af5,
			0x0000011ca283b57b,
			0x0000010c64cb9e05,
			0x000001aa714b75b4,
			0x0000014aca141713,
			0x00000125c7fabffd,
			0x000000a981632be8,
			0x00000113c56a7e7a,
			0x000000d2ba1957ef,
			0x00000160d918b563,
			0x000000fb8ce18705,
			0x0000007127d3be2c,
			0x0000012a325812ac,
			0x000000a0ae4e4033,
			0x0000007a50e36769,
			0x0000000c0f50d2c7,
			0x0000000890ba241c,
			0x0000010b3a091b74,
			0x0000001dfa797966,
			0x000001952caa9bad,
			0x0000009d825284d7,
			0x0000004ba9437737,
			0x000001f33933c933,
			0x0000006d53c810e2,
			0x000000e4a1f020fb,
			0x00000152a41fc39d,
			0x000001e6f1b3bd37,
			0x00000091ea70722f,
			0x00000028924a2a6d,
			0x000001ec4fbfa9ab,
			0x000000a989d49062,
			0x00000079387b2a25,
			0x00000054b2e53b73,
			0x0000014dc3868cf9,
			0x0000014b9d290525,
			0x000000b777ff6c35,
			0x0000009774746651,
			0x0000014c55cb6390,
			0x000000571a4688bf,
			0x000000312aa0996a,
			0x000001532efa1a5c,
			0x000000dfec4adedf,
			0x0000009681870c1a,
			0x000000c30efd0321,
			0x0000001e872eec40,
			0x00000010aee5189e,
			0x000001b54c11e3b0,
			0x000001054076b18b,
			0x0000012009bab10f,
			0x000001f5de648026,
			0x000001fec2d089f6,
			0x000001ae79a3d351,
			0x0000016055846033,
			0x0000014a18cf43cd,
			0x0000002b4868b059,
			0x000000f39d118add,
			0x00000184fa8a563b,
			0x0000005dcd75adef,
			0x000001f867bca4ca,
			0x000000722f8230e0,
			0x000001c7739a0b92,
			0x0000014d27afcac6,
			0x000001ff4483a337,
			0x000001ee3e7ec65e,
			0x0000015bdf9cf572,
			0x000000ac55b183d8,
			0x000001bd7ba5eb7e,
			0x0000013d6f28d36d,
			0x00000094483a59c7,
			0x000001971a6811fc,
			0x000001d01f6dc8e5,
			0x000001d7041a8164,
			0x000000cd4bb66307,
			0x0000003cc8bae5d2,
			0x00000040a28f0a0e,
			0x00000028ff942508,
			0x0000010f7db14df0,
			0x000000970a05aa25,
			0x0000004a714b291e,
			0x000000c701e4e2e9,
			0x0000000c3311c809,
			0x00000085c5af52eb,
			0x000000d2a0ddcc3b,
			0x000001b86f410788,
			0x000001ede3484ca6,
			0x0000004074091b8a,
			0x000000cdace8c340,
			0x000000964a817ec7,
			0x00000053c4b1e08a,
			0x00000071f3cfaffd,
			0x000001c847b0f581,
			0x000001f95bfc003b,
			0x0000001c86666096,
			0x000000448e6a5caf,
			0x0000017d9562fe30,
			0x0000014b11e2c939,
			0x00000146ba94fe60,
			0x0000013917b4bc7c,
			0x000001bfab5951e7,
			0x0000019279b20f95,
			0x000000216bd36a1b,
			0x0000017888e39bb5,
			0x000000ae80792a03,
			0x0000008298ab4acb,
			0x0000010dfed49850,
			0x000000cb166c8a85,
			0x00000101beba4048,
			0x000000855cff4fc0,
			0x000001849168c1c5,
			0x0000010a38f62987,
			0x00000049cf1f189b,
			0x0000016a2876af49,
			0x00000087fa6e2a56,
			0x00000062c7b015c2,
			0x000000d5c29bc4a1,
			0x00000062091756ed,
			0x000000518e01968d,
			0x0000003d09d83c3a,
			0x00000054f111c2e2,
			0x000001555bb741cd,
			0x0000009dbccd3073,
			0x000001ec92ece825,
			0x0000000112998bc8,
			0x000000e02379d7c8,
			0x00000149f696fd0f,
			0x000001b7137d7768,
			0x000001a3b030519c,
			0x000001e1d806bfcd,
			0x0000000bc65b06e8,
			0x000001983059408a,
			0x000001e9fe1feca9,
			0x000000132c0a95aa,
			0x000000a6dc5119e7,
			0x000000fd58b2db10,
			0x00000137e20c98e5,
			0x000000968688531c,
			0x000000a81dc892a8,
			0x000000f861cd9997,
			0x000001b0d2b12efb,
			0x00000000bea34e27,
			0x000000db665c24f9,
			0x000000e90e722940,
			0x000000106d989a38,
			0x0000002e84aac68e,
			0x000000f3e4a70319,
			0x000001d9d002369b,
			0x0000001c31c31105,
			0x00000091514c5856,
			0x000001c49b1c053b,
			0x000001ebef82c4a5,
			0x000001ec86920675,
			0x000001253eb1b8cf,
			0x0000019c293afdd8,
			0x000001e6a30fc496,
			0x0000001cf75469e1,
			0x000001216b1b956c,
			0x0000006dc53cf47c,
			0x0000016b338cb908,
			0x0000007bc89831bb,
			0x0000012bfceaee52,
			0x000000602827afa6,
			0x00000129bef4e086,
			0x0000019ade8a837b,
			0x0000008f365a39dc,
			0x0000013331a3ed5d,
			0x00000167bf567e12,
			0x000001817eb5403d,
			0x00000116a0ac445b,
			0x00000151f5a1ae96,
			0x000000355fbafed3,
			0x000001721a856f18,
			0x000000398c5fb690,
			0x0000018fde252209,
			0x0000009bc1effd8d,
			0x0000015e058368cb,
			0x000001ef19f8672d,
			0x000000efeb28bcb5,
			0x0000008597fe8243,
			0x000001e3558b7241,
			0x000001f06d2b5a4d,
			0x0000006753166ca7,
			0x0000019d05252f87,
			0x0000007ece8719c7,
			0x000000abada7be10,
			0x0000003b7bae0915,
			0x000000b920dbfa1e,
			0x00000077c3d750ef,
			0x000000c8a77b91e5,
			0x0000013c12511766,
			0x000001bd655e970d,
			0x000000d5f0a10e67,
			0x0000005c151f0386,
			0x000000f36c123216,
			0x000000733590bd56,
			0x000000134800baf0,
			0x00000166cf1de51f,
			0x00000117dd06e881,
			0x00000129a0921efb,
			0x000000a6ff0ca5c4,
			0x0000008ea200b050,
			0x00000034f9387b94,
			0x000001d3723ad2de,
			0x0000018e5af2b62e,
			0x0000010bd979c6df,
			0x0000014d339607a4,
			0x000001b88544514a,
			0x0000003a4450d2d8,
			0x000001a61117a18f,
			0x000001e21725e539,
			0x00000123cf7364fd,
			0x00000179908b5b01,
			0x00000069ec91a349,
			0x000000945679ec02,
			0x000000e6a4ca1b53,
			0x0000007e2c612da0,
			0x000001f568f32763,
			0x000001b564f98a0f,
			0x00000020e11f4d89,
			0x00000090c3ea1433,
			0x0000014c7e71acd3,
			0x000000dc4e4b061f,
			0x000001c813886671,
			0x000000998741f58b,
			0x000000fe30e80a8f,
			0x000000607de6a503,
			0x000001484657259d,
			0x000000e53c335255,
			0x00000174d9bd2dc8,
			0x0000007d39cfa317,
			0x000001c0992c6850,
			0x00000112351c0a60,
			0x000001e0d5e6cd44,
			0x000000667998400c,
			0x00000042dfaef259,
			0x0000019abbd3ed08,
			0x0000014ad9c7ab72,
			0x00000056389ff426,
			0x0000019427c1236c,
			0x000001a4063a9d61,
			0x000000af87f97b4d,
			0x000001666612b513,
			0x000001f23ac539e4,
			0x000001e873a1cf84,
			0x000001701f1aeddc,
			0x0000018b22a98565,
			0x000001ddc760ab43,
			0x00000022da169d55,
			0x000000f1416893de,
			0x000000ee14c0e6db,
			0x0000019252aae1f5,
			0x0000000b4fb6141d,
			0x000000c2b99da72c,
			0x0000019ec587f23a,
			0x000001f44dc5cd77,
			0x00000101573c5f0c,
			0x000000c8590ac48f,
			0x000001f1d4b1d98d,
			0x0000012ae39c0c1e,
			0x0000016e46996bb3,
			0x000000d907071ae1,
			0x000000ee89247a5b,
			0x0000012753bfdbce,
			0x0000007906c2f180,
			0x0000006632db9a04,
			0x0000006dd60d443f,
			0x0000006b859327f2,
			0x0000018f08bb0ad5,
			0x00000100dd9d760a,
			0x0000001e8c644d0d,
			0x000001e8edb740dc,
			0x0000016ba7ffa32e,
			0x000000bfbda5d84c,
			0x0000017fdf137ad8,
			0x000000777ffe01db,
			0x0000013b9a93d0a6,
			0x00000032bde748a4,
			0x00000104f87c4ba8,
			0x000001102e5438a0,
			0x000001790599f8b8,
			0x0000006e0e97a55c,
			0x000000980d898e6b,
			0x0000014035825c86,
			0x00000199ded7a4bf,
			0x00000138ab0050f4,
			0x000000f8c1940dda,
			0x00000129ad4d2a65,
			0x00000076a9aca541,
			0x000001332c5d323c,
			0x000001dba5113a26,
			0x000001c66d9f5293,
			0x0000017e232d0d9a,
			0x0000009976915862,
			0x000001913b2a7244,
			0x000000b2ba534e99,
			0x00000160d1bf0cf7,
			0x0000000eb9922d30,
			0x0000002e3f788035,
			0x000001d158a6dfbe,
			0x0000014e9413f1fe,
			0x00000132d8c19753,
			0x0000014b4f73c0c3,
			0x0000001f33b28cfd,
			0x00000072a8fad428,
			0x000001514364455c,
			0x0000002d98ab517f,
			0x00000167cedc2d26,
			0x000001bb3c039f02,
			0x00000144f9f06518,
			0x00000086d324dd1c,
			0x0000012c4eb26f57,
			0x00000078ea843219,
			0x0000006a55f7e6b6,
			0x0000006d7b34c6e0,
			0x000001016cfeb2ec,
			0x0000004215676871,
			0x00000156b12b4c31,
			0x000000586fdbe5d9,
			0x00000030212d8b7b,
			0x000001cc7382e8cd,
			0x0000006ca5a2d1ec,
			0x000000875c7a96f2,
			0x000001710b90c031,
			0x00000010d1d8c47a,
			0x000001bf01e51bb9,
			0x000000c1793e8778,
			0x000001b326c2d7e2,
			0x000000c5310a5aab,
			0x0000011cd7b3c8e5,
			0x0000018d5912ebaa,
			0x0000017450d723c4,
			0x000000ab2fa34dcd,
			0x0000012c7246a7bc,
			0x000001b365296a34,
			0x000000c47f954743,
			0x00000050467ba354,
			0x0000002cc0b816e1,
			0x0000017598c4f17d,
			0x000001af4283647b,
			0x0000005a5d5379ec,
			0x000001aaecddc00d,
			0x000001325e99894f,
			0x0000003935af6226,
			0x0000018450e1eebe,
			0x0000009adfe3a3d0,
			0x00000079383c9291,
			0x0000002212102d63,
			0x00000153d2be7427,
			0x000000fb53f1bb55,
			0x000000918bed2982,
			0x0000010f53f0d799,
			0x000000526ff4d1b3,
			0x000000bc90635acd,
			0x000001453b55ba1d,
			0x000001079d69bec4,
			0x000001af3934bd83,
			0x000000b29697fc3f,
			0x00000108533de8dd,
			0x0000012968f67594,
			0x0000011cbe9cb3ed,
			0x0000000bac4e20c3,
			0x00000134251aba54,
			0x0000014eaaa20df5,
			0x000001528aec9718,
			0x00000170983cc1ec,
			0x0000002f097e68c8,
			0x0000005f746b9d5c,
			0x000001ca56b310f3,
			0x0000003972530948,
			0x0000009ba80f3bce,
			0x0000016c5f86f30d,
			0x00000119664abd83,
			0x0000016fdda25a23,
			0x0000017631d1a1d3,
			0x0000003d72d2b20d,
			0x0000011f52f5697b,
			0x0000001d6b6d864f,
			0x00000043d6422f0a,
			0x0000016ef1aa2e0c,
			0x000000e1a3790b11,
			0x000000f1667a531d,
			0x0000011cc7bbbcda,
			0x000001ace1b03f19,
			0x0000018bd83b1d52,
			0x0000008a5de68db4,
			0x0000018fbf08cfef,
			0x00000082019639cc,
			0x000000ab6b9a8d3b,
			0x000001fc4a838fba,
			0x00000104f0d67db1,
			0x000001e4bd144895,
			0x0000010493faac76,
			0x0000006f1ac45d00,
			0x0000001b845ac503,
			0x000001a071baaaef,
			0x0000017ce5822109,
			0x000001a7b9992deb,
			0x000001641ad2afd1,
			0x000001983f74b6ee,
			0x0000011dd4491184,
			0x000001597809c70c,
			0x000001c9ee207a02,
			0x000001fb967dbcce,
			0x00000013dd5d0740,
			0x000001f04a7cf90a,
			0x000000bda526f2c0,
			0x0000000a290afad5,
			0x000001f74ef5e0ed,
			0x000000ad155bc8de,
			0x00000008a74e0d64,
			0x000001e26d6d2095,
			0x000001efe9d3f3fe,
			0x000000b7bb790080,
			0x000000e83eb7940b,
			0x000000195a6721de,
			0x000001697162ecc6,
			0x000001a822424ecc,
			0x000000bb9409ef14,
			0x00000088dc8af7de,
			0x0000001a109fbdf8,
			0x000001263a6224e1,
			0x0000019762451a46,
			0x00000123f8087a5d,
			0x000001ee61da2ff8,
			0x000001050f8b67b3,
			0x0000005bd05e0ad3,
			0x0000017f3054510b,
			0x000001f0a65cbe49,
			0x000000c38f39ecfb,
			0x000001b186adf1ca,
			0x00000003c9d6cb25,
			0x000000b0d33343b8,
			0x0000008cb15b5077,
			0x00000083960895dd,
			0x000000a4f544f26c,
			0x0000014637fba5b5,
			0x000000c8a7c5184d,
			0x00000109ef503b91,
			0x00000110cc27f58c,
			0x000001dd15e9f124,
			0x000001eddb2ca0d9,
			0x000000aafbfcea5b,
			0x0000003f14f93014,
			0x000001c8249b99d9,
			0x0000007c3667f5b3,
			0x000001a62b640f70,
			0x000001eec6a22d2a,
			0x000000855be93f97,
			0x000000c7af091027,
			0x0000010a7ffe2790,
			0x000001042e09ea4c,
			0x00000076db25a8e1,
			0x000001654d706d3f,
			0x000000260b3a5e33,
			0x00000088f9419e9e,
			0x000001d68917df54,
			0x000001188549820d,
			0x00000158d48169b9,
			0x0000019e93fcdd73,
			0x0000016b91a47690,
			0x000001fba468bd65,
			0x000000bb64a6d60f,
			0x00000157432e4097,
			0x00000088a4f70f06,
			0x000000f091d83cf0,
			0x000001c4a6fbc192,
			0x000000ada88c3e7d,
			0x000000e531e141b5,
			0x000001237b66171c,
			0x0000012749c7c2f4,
			0x000000e2cee269f9,
			0x000000260340689f,
			0x0000019500504a28,
			0x0000014432099794,
			0x00000047cbdd04d3,
			0x0000001af023fdbe,
			0x000001eee99e354e,
			0x00000012649e3aff,
			0x000001a7f7a49cbf,
			0x000000e43793e465,
			0x0000006209ca0402,
			0x000001eadfe92cff,
			0x0000003dacced0bc,
			0x00000097a15758c0,
			0x000001fcd58aeaae,
			0x000000ff774c923f,
			0x0000007a5654482c,
			0x000001b492028846,
			0x0000015c12bf403f,
			0x000001e7575219b9,
			0x000000342bb31b5c,
			0x000001a8052db35e,
			0x000000e8274ad0db,
			0x0000000f1a937c8a,
			0x00000094b5e48ed7,
			0x000000352cb6ab16,
			0x0000015cff6a6f12,
			0x000001ee40155a64,
		],
		bits: vec![
			(-2, -2),
			(-1, -2),
			(0, -2),
			(1, -2),
			(2, -2),
			(3, -2),
			(4, -2),
			(5, -2),
			(1, 1),
			(2, 1),
			(6, -2),
			(6, -1),
			(6, 0),
			(6, 1),
			(6, 2),
			(6, 3),
			(6, 4),
			(6, 5),
			(3, 1),
			(3, 2),
			(6, 6),
			(5, 6),
			(4, 6),
			(3, 6),
			(2, 6),
			(1, 6),
			(0, 6),
			(-1, 6),
			(3, 3),
			(2, 3),
			(-2, 6),
			(-2, 5),
			(-2, 4),
			(-2, 3),
			(-2, 2),
			(-2, 1),
			(-2, 0),
			(-2, -1),
			(1, 3),
			(1, 2),
			(2, 2),
		],
		width_at_border: 5,
		total_width: 9,
		reversed_border: true,
		min_hamming: 12,
		name: Cow::Borrowed("tagStandard41h12"),
	}
}
