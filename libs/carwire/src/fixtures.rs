//! Reference archives shared by the unit tests

use cid::Cid;
use cid::multihash::Multihash;
use sha2::{Digest, Sha256};

/// Length of the header frame of [CARV1_BASIC]
pub const CARV1_BASIC_HEADER_LEN: u64 = 100;

pub const CARV1_BASIC_ROOTS: [&str; 2] = [
    "01711220f88bc853804cf294fe417e4fa83028689fcdb1b1592c5102e1474dbc200fab8b",
    "0171122069ea0740f9807a28f4d932c62e7c1c83be055e55072c90266ab3e79df63a365b",
];

/// Blocks of [CARV1_BASIC]: (binary CID, frame offset, payload offset, payload length)
pub const CARV1_BASIC_BLOCKS: [(&str, u64, u64, u64); 8] = [
    ("01711220f88bc853804cf294fe417e4fa83028689fcdb1b1592c5102e1474dbc200fab8b", 100, 137, 55),
    ("122002acecc5de2438ea4126a3010ecb1f8a599c8eff22fff1a1dcffe999b27fd3de", 192, 228, 97),
    ("01551220b6fbd675f98e2abd22d4ed29fdc83150fedc48597e92dd1a7a24381d44a27451", 325, 362, 4),
    ("122079a982de3c9907953d4d323cee1d0fb1ed8f45f8ef02870c0cb9e09246bd530a", 366, 402, 94),
    ("0155122081cc5b17018674b401b42f35ba07bb79e211239c23bffe658da1577e3e646877", 496, 533, 4),
    ("1220e7dc486e97e6ebe5cdabab3e392bdad128b6e09acc94bb4e2aa2af7b986d24d0", 537, 572, 47),
    ("0155122061be55a8e2f6b4e172338bddf184d6dbee29c98853e0a0485ecee7f27b9af0b4", 619, 656, 4),
    ("0171122069ea0740f9807a28f4d932c62e7c1c83be055e55072c90266ab3e79df63a365b", 660, 697, 18),
];

pub const CARV2_BASIC_ROOT: &str =
    "1220fb16f5083412ef1371d031ed4aa239903d84efdadf1ba3cd678e6475b1a232f8";

/// Blocks of [CARV2_BASIC]: (binary CID, frame offset, payload offset, payload length)
pub const CARV2_BASIC_BLOCKS: [(&str, u64, u64, u64); 5] = [
    ("1220fb16f5083412ef1371d031ed4aa239903d84efdadf1ba3cd678e6475b1a232f8", 108, 143, 47),
    ("1220d9c0d5376d26f1931f7ad52d7acc00fc1090d2edb0808bf61eeb0a152826f626", 190, 226, 99),
    ("1220d745b7757f5b4593eeab7820306c7bc64eb496a7410a0d07df7a34ffec4b97f1", 325, 360, 54),
    ("01551220b474a99a2705e23cf905a484ec6d14ef58b56bbe62e9292783466ec363b5072d", 414, 451, 4),
    ("01551220a2e1c40da1ae335d4dffe729eb4d5ca23b74b9e51fc535f4a804a261080c294d", 455, 492, 7),
];

/// Parses a binary CID given in hexadecimal
pub fn raw_cid(hex_cid: &str) -> Cid {
    Cid::try_from(hex::decode(hex_cid).unwrap().as_slice()).unwrap()
}

/// CIDv1 of `data` with a sha2-256 multihash
pub fn sha256_cid(codec: u64, data: &[u8]) -> Cid {
    let digest = Sha256::digest(data);
    Cid::new_v1(codec, Multihash::<64>::wrap(0x12, &digest).unwrap())
}

/// Does `data` hash to the sha2-256 digest carried by `cid`?
pub fn digest_matches(cid: &Cid, data: &[u8]) -> bool {
    cid.hash().code() == 0x12 && cid.hash().digest() == Sha256::digest(data).as_slice()
}

pub const CARV1_BASIC: [u8; 715] = [
    0x63, 0xa2, 0x65, 0x72, 0x6f, 0x6f, 0x74, 0x73, 0x82, 0xd8, 0x2a, 0x58, 0x25, 0x00, 0x01,
    0x71, 0x12, 0x20, 0xf8, 0x8b, 0xc8, 0x53, 0x80, 0x4c, 0xf2, 0x94, 0xfe, 0x41, 0x7e, 0x4f,
    0xa8, 0x30, 0x28, 0x68, 0x9f, 0xcd, 0xb1, 0xb1, 0x59, 0x2c, 0x51, 0x02, 0xe1, 0x47, 0x4d,
    0xbc, 0x20, 0x0f, 0xab, 0x8b, 0xd8, 0x2a, 0x58, 0x25, 0x00, 0x01, 0x71, 0x12, 0x20, 0x69,
    0xea, 0x07, 0x40, 0xf9, 0x80, 0x7a, 0x28, 0xf4, 0xd9, 0x32, 0xc6, 0x2e, 0x7c, 0x1c, 0x83,
    0xbe, 0x05, 0x5e, 0x55, 0x07, 0x2c, 0x90, 0x26, 0x6a, 0xb3, 0xe7, 0x9d, 0xf6, 0x3a, 0x36,
    0x5b, 0x67, 0x76, 0x65, 0x72, 0x73, 0x69, 0x6f, 0x6e, 0x01, 0x5b, 0x01, 0x71, 0x12, 0x20,
    0xf8, 0x8b, 0xc8, 0x53, 0x80, 0x4c, 0xf2, 0x94, 0xfe, 0x41, 0x7e, 0x4f, 0xa8, 0x30, 0x28,
    0x68, 0x9f, 0xcd, 0xb1, 0xb1, 0x59, 0x2c, 0x51, 0x02, 0xe1, 0x47, 0x4d, 0xbc, 0x20, 0x0f,
    0xab, 0x8b, 0xa2, 0x64, 0x6c, 0x69, 0x6e, 0x6b, 0xd8, 0x2a, 0x58, 0x23, 0x00, 0x12, 0x20,
    0x02, 0xac, 0xec, 0xc5, 0xde, 0x24, 0x38, 0xea, 0x41, 0x26, 0xa3, 0x01, 0x0e, 0xcb, 0x1f,
    0x8a, 0x59, 0x9c, 0x8e, 0xff, 0x22, 0xff, 0xf1, 0xa1, 0xdc, 0xff, 0xe9, 0x99, 0xb2, 0x7f,
    0xd3, 0xde, 0x64, 0x6e, 0x61, 0x6d, 0x65, 0x64, 0x62, 0x6c, 0x69, 0x70, 0x83, 0x01, 0x12,
    0x20, 0x02, 0xac, 0xec, 0xc5, 0xde, 0x24, 0x38, 0xea, 0x41, 0x26, 0xa3, 0x01, 0x0e, 0xcb,
    0x1f, 0x8a, 0x59, 0x9c, 0x8e, 0xff, 0x22, 0xff, 0xf1, 0xa1, 0xdc, 0xff, 0xe9, 0x99, 0xb2,
    0x7f, 0xd3, 0xde, 0x12, 0x2e, 0x0a, 0x24, 0x01, 0x55, 0x12, 0x20, 0xb6, 0xfb, 0xd6, 0x75,
    0xf9, 0x8e, 0x2a, 0xbd, 0x22, 0xd4, 0xed, 0x29, 0xfd, 0xc8, 0x31, 0x50, 0xfe, 0xdc, 0x48,
    0x59, 0x7e, 0x92, 0xdd, 0x1a, 0x7a, 0x24, 0x38, 0x1d, 0x44, 0xa2, 0x74, 0x51, 0x12, 0x04,
    0x62, 0x65, 0x61, 0x72, 0x18, 0x04, 0x12, 0x2f, 0x0a, 0x22, 0x12, 0x20, 0x79, 0xa9, 0x82,
    0xde, 0x3c, 0x99, 0x07, 0x95, 0x3d, 0x4d, 0x32, 0x3c, 0xee, 0x1d, 0x0f, 0xb1, 0xed, 0x8f,
    0x45, 0xf8, 0xef, 0x02, 0x87, 0x0c, 0x0c, 0xb9, 0xe0, 0x92, 0x46, 0xbd, 0x53, 0x0a, 0x12,
    0x06, 0x73, 0x65, 0x63, 0x6f, 0x6e, 0x64, 0x18, 0x95, 0x01, 0x28, 0x01, 0x55, 0x12, 0x20,
    0xb6, 0xfb, 0xd6, 0x75, 0xf9, 0x8e, 0x2a, 0xbd, 0x22, 0xd4, 0xed, 0x29, 0xfd, 0xc8, 0x31,
    0x50, 0xfe, 0xdc, 0x48, 0x59, 0x7e, 0x92, 0xdd, 0x1a, 0x7a, 0x24, 0x38, 0x1d, 0x44, 0xa2,
    0x74, 0x51, 0x63, 0x63, 0x63, 0x63, 0x80, 0x01, 0x12, 0x20, 0x79, 0xa9, 0x82, 0xde, 0x3c,
    0x99, 0x07, 0x95, 0x3d, 0x4d, 0x32, 0x3c, 0xee, 0x1d, 0x0f, 0xb1, 0xed, 0x8f, 0x45, 0xf8,
    0xef, 0x02, 0x87, 0x0c, 0x0c, 0xb9, 0xe0, 0x92, 0x46, 0xbd, 0x53, 0x0a, 0x12, 0x2d, 0x0a,
    0x24, 0x01, 0x55, 0x12, 0x20, 0x81, 0xcc, 0x5b, 0x17, 0x01, 0x86, 0x74, 0xb4, 0x01, 0xb4,
    0x2f, 0x35, 0xba, 0x07, 0xbb, 0x79, 0xe2, 0x11, 0x23, 0x9c, 0x23, 0xbf, 0xfe, 0x65, 0x8d,
    0xa1, 0x57, 0x7e, 0x3e, 0x64, 0x68, 0x77, 0x12, 0x03, 0x64, 0x6f, 0x67, 0x18, 0x04, 0x12,
    0x2d, 0x0a, 0x22, 0x12, 0x20, 0xe7, 0xdc, 0x48, 0x6e, 0x97, 0xe6, 0xeb, 0xe5, 0xcd, 0xab,
    0xab, 0x3e, 0x39, 0x2b, 0xda, 0xd1, 0x28, 0xb6, 0xe0, 0x9a, 0xcc, 0x94, 0xbb, 0x4e, 0x2a,
    0xa2, 0xaf, 0x7b, 0x98, 0x6d, 0x24, 0xd0, 0x12, 0x05, 0x66, 0x69, 0x72, 0x73, 0x74, 0x18,
    0x33, 0x28, 0x01, 0x55, 0x12, 0x20, 0x81, 0xcc, 0x5b, 0x17, 0x01, 0x86, 0x74, 0xb4, 0x01,
    0xb4, 0x2f, 0x35, 0xba, 0x07, 0xbb, 0x79, 0xe2, 0x11, 0x23, 0x9c, 0x23, 0xbf, 0xfe, 0x65,
    0x8d, 0xa1, 0x57, 0x7e, 0x3e, 0x64, 0x68, 0x77, 0x62, 0x62, 0x62, 0x62, 0x51, 0x12, 0x20,
    0xe7, 0xdc, 0x48, 0x6e, 0x97, 0xe6, 0xeb, 0xe5, 0xcd, 0xab, 0xab, 0x3e, 0x39, 0x2b, 0xda,
    0xd1, 0x28, 0xb6, 0xe0, 0x9a, 0xcc, 0x94, 0xbb, 0x4e, 0x2a, 0xa2, 0xaf, 0x7b, 0x98, 0x6d,
    0x24, 0xd0, 0x12, 0x2d, 0x0a, 0x24, 0x01, 0x55, 0x12, 0x20, 0x61, 0xbe, 0x55, 0xa8, 0xe2,
    0xf6, 0xb4, 0xe1, 0x72, 0x33, 0x8b, 0xdd, 0xf1, 0x84, 0xd6, 0xdb, 0xee, 0x29, 0xc9, 0x88,
    0x53, 0xe0, 0xa0, 0x48, 0x5e, 0xce, 0xe7, 0xf2, 0x7b, 0x9a, 0xf0, 0xb4, 0x12, 0x03, 0x63,
    0x61, 0x74, 0x18, 0x04, 0x28, 0x01, 0x55, 0x12, 0x20, 0x61, 0xbe, 0x55, 0xa8, 0xe2, 0xf6,
    0xb4, 0xe1, 0x72, 0x33, 0x8b, 0xdd, 0xf1, 0x84, 0xd6, 0xdb, 0xee, 0x29, 0xc9, 0x88, 0x53,
    0xe0, 0xa0, 0x48, 0x5e, 0xce, 0xe7, 0xf2, 0x7b, 0x9a, 0xf0, 0xb4, 0x61, 0x61, 0x61, 0x61,
    0x36, 0x01, 0x71, 0x12, 0x20, 0x69, 0xea, 0x07, 0x40, 0xf9, 0x80, 0x7a, 0x28, 0xf4, 0xd9,
    0x32, 0xc6, 0x2e, 0x7c, 0x1c, 0x83, 0xbe, 0x05, 0x5e, 0x55, 0x07, 0x2c, 0x90, 0x26, 0x6a,
    0xb3, 0xe7, 0x9d, 0xf6, 0x3a, 0x36, 0x5b, 0xa2, 0x64, 0x6c, 0x69, 0x6e, 0x6b, 0xf6, 0x64,
    0x6e, 0x61, 0x6d, 0x65, 0x65, 0x6c, 0x69, 0x6d, 0x62, 0x6f,
];

pub const CARV2_BASIC: [u8; 715] = [
    0x0a, 0xa1, 0x67, 0x76, 0x65, 0x72, 0x73, 0x69, 0x6f, 0x6e, 0x02, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x33, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf3, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x38, 0xa2, 0x65, 0x72, 0x6f, 0x6f, 0x74, 0x73, 0x81,
    0xd8, 0x2a, 0x58, 0x23, 0x00, 0x12, 0x20, 0xfb, 0x16, 0xf5, 0x08, 0x34, 0x12, 0xef, 0x13,
    0x71, 0xd0, 0x31, 0xed, 0x4a, 0xa2, 0x39, 0x90, 0x3d, 0x84, 0xef, 0xda, 0xdf, 0x1b, 0xa3,
    0xcd, 0x67, 0x8e, 0x64, 0x75, 0xb1, 0xa2, 0x32, 0xf8, 0x67, 0x76, 0x65, 0x72, 0x73, 0x69,
    0x6f, 0x6e, 0x01, 0x51, 0x12, 0x20, 0xfb, 0x16, 0xf5, 0x08, 0x34, 0x12, 0xef, 0x13, 0x71,
    0xd0, 0x31, 0xed, 0x4a, 0xa2, 0x39, 0x90, 0x3d, 0x84, 0xef, 0xda, 0xdf, 0x1b, 0xa3, 0xcd,
    0x67, 0x8e, 0x64, 0x75, 0xb1, 0xa2, 0x32, 0xf8, 0x12, 0x2d, 0x0a, 0x22, 0x12, 0x20, 0xd9,
    0xc0, 0xd5, 0x37, 0x6d, 0x26, 0xf1, 0x93, 0x1f, 0x7a, 0xd5, 0x2d, 0x7a, 0xcc, 0x00, 0xfc,
    0x10, 0x90, 0xd2, 0xed, 0xb0, 0x80, 0x8b, 0xf6, 0x1e, 0xeb, 0x0a, 0x15, 0x28, 0x26, 0xf6,
    0x26, 0x12, 0x04, 0xf0, 0x9f, 0x8d, 0xa4, 0x18, 0xa4, 0x01, 0x85, 0x01, 0x12, 0x20, 0xd9,
    0xc0, 0xd5, 0x37, 0x6d, 0x26, 0xf1, 0x93, 0x1f, 0x7a, 0xd5, 0x2d, 0x7a, 0xcc, 0x00, 0xfc,
    0x10, 0x90, 0xd2, 0xed, 0xb0, 0x80, 0x8b, 0xf6, 0x1e, 0xeb, 0x0a, 0x15, 0x28, 0x26, 0xf6,
    0x26, 0x12, 0x31, 0x0a, 0x22, 0x12, 0x20, 0xd7, 0x45, 0xb7, 0x75, 0x7f, 0x5b, 0x45, 0x93,
    0xee, 0xab, 0x78, 0x20, 0x30, 0x6c, 0x7b, 0xc6, 0x4e, 0xb4, 0x96, 0xa7, 0x41, 0x0a, 0x0d,
    0x07, 0xdf, 0x7a, 0x34, 0xff, 0xec, 0x4b, 0x97, 0xf1, 0x12, 0x09, 0x62, 0x61, 0x72, 0x72,
    0x65, 0x6c, 0x65, 0x79, 0x65, 0x18, 0x3a, 0x12, 0x2e, 0x0a, 0x24, 0x01, 0x55, 0x12, 0x20,
    0xa2, 0xe1, 0xc4, 0x0d, 0xa1, 0xae, 0x33, 0x5d, 0x4d, 0xff, 0xe7, 0x29, 0xeb, 0x4d, 0x5c,
    0xa2, 0x3b, 0x74, 0xb9, 0xe5, 0x1f, 0xc5, 0x35, 0xf4, 0xa8, 0x04, 0xa2, 0x61, 0x08, 0x0c,
    0x29, 0x4d, 0x12, 0x04, 0xf0, 0x9f, 0x90, 0xa1, 0x18, 0x07, 0x58, 0x12, 0x20, 0xd7, 0x45,
    0xb7, 0x75, 0x7f, 0x5b, 0x45, 0x93, 0xee, 0xab, 0x78, 0x20, 0x30, 0x6c, 0x7b, 0xc6, 0x4e,
    0xb4, 0x96, 0xa7, 0x41, 0x0a, 0x0d, 0x07, 0xdf, 0x7a, 0x34, 0xff, 0xec, 0x4b, 0x97, 0xf1,
    0x12, 0x34, 0x0a, 0x24, 0x01, 0x55, 0x12, 0x20, 0xb4, 0x74, 0xa9, 0x9a, 0x27, 0x05, 0xe2,
    0x3c, 0xf9, 0x05, 0xa4, 0x84, 0xec, 0x6d, 0x14, 0xef, 0x58, 0xb5, 0x6b, 0xbe, 0x62, 0xe9,
    0x29, 0x27, 0x83, 0x46, 0x6e, 0xc3, 0x63, 0xb5, 0x07, 0x2d, 0x12, 0x0a, 0x66, 0x69, 0x73,
    0x68, 0x6d, 0x6f, 0x6e, 0x67, 0x65, 0x72, 0x18, 0x04, 0x28, 0x01, 0x55, 0x12, 0x20, 0xb4,
    0x74, 0xa9, 0x9a, 0x27, 0x05, 0xe2, 0x3c, 0xf9, 0x05, 0xa4, 0x84, 0xec, 0x6d, 0x14, 0xef,
    0x58, 0xb5, 0x6b, 0xbe, 0x62, 0xe9, 0x29, 0x27, 0x83, 0x46, 0x6e, 0xc3, 0x63, 0xb5, 0x07,
    0x2d, 0x66, 0x69, 0x73, 0x68, 0x2b, 0x01, 0x55, 0x12, 0x20, 0xa2, 0xe1, 0xc4, 0x0d, 0xa1,
    0xae, 0x33, 0x5d, 0x4d, 0xff, 0xe7, 0x29, 0xeb, 0x4d, 0x5c, 0xa2, 0x3b, 0x74, 0xb9, 0xe5,
    0x1f, 0xc5, 0x35, 0xf4, 0xa8, 0x04, 0xa2, 0x61, 0x08, 0x0c, 0x29, 0x4d, 0x6c, 0x6f, 0x62,
    0x73, 0x74, 0x65, 0x72, 0x01, 0x00, 0x00, 0x00, 0x28, 0x00, 0x00, 0x00, 0xc8, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0xa2, 0xe1, 0xc4, 0x0d, 0xa1, 0xae, 0x33, 0x5d, 0x4d, 0xff,
    0xe7, 0x29, 0xeb, 0x4d, 0x5c, 0xa2, 0x3b, 0x74, 0xb9, 0xe5, 0x1f, 0xc5, 0x35, 0xf4, 0xa8,
    0x04, 0xa2, 0x61, 0x08, 0x0c, 0x29, 0x4d, 0x94, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xb4, 0x74, 0xa9, 0x9a, 0x27, 0x05, 0xe2, 0x3c, 0xf9, 0x05, 0xa4, 0x84, 0xec, 0x6d, 0x14,
    0xef, 0x58, 0xb5, 0x6b, 0xbe, 0x62, 0xe9, 0x29, 0x27, 0x83, 0x46, 0x6e, 0xc3, 0x63, 0xb5,
    0x07, 0x2d, 0x6b, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xd7, 0x45, 0xb7, 0x75, 0x7f,
    0x5b, 0x45, 0x93, 0xee, 0xab, 0x78, 0x20, 0x30, 0x6c, 0x7b, 0xc6, 0x4e, 0xb4, 0x96, 0xa7,
    0x41, 0x0a, 0x0d, 0x07, 0xdf, 0x7a, 0x34, 0xff, 0xec, 0x4b, 0x97, 0xf1, 0x12, 0x01, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0xd9, 0xc0, 0xd5, 0x37, 0x6d, 0x26, 0xf1, 0x93, 0x1f, 0x7a,
    0xd5, 0x2d, 0x7a, 0xcc, 0x00, 0xfc, 0x10, 0x90, 0xd2, 0xed, 0xb0, 0x80, 0x8b, 0xf6, 0x1e,
    0xeb, 0x0a, 0x15, 0x28, 0x26, 0xf6, 0x26, 0x8b, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xfb, 0x16, 0xf5, 0x08, 0x34, 0x12, 0xef, 0x13, 0x71, 0xd0, 0x31, 0xed, 0x4a, 0xa2, 0x39,
    0x90, 0x3d, 0x84, 0xef, 0xda, 0xdf, 0x1b, 0xa3, 0xcd, 0x67, 0x8e, 0x64, 0x75, 0xb1, 0xa2,
    0x32, 0xf8, 0x39, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];
