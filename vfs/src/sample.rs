//! Generated asset table: `name → gzip bytes`.
//!
//! Produced by the asset compiler. Do not edit by hand.

const A_JS: &[u8] = &[
    0x1f, 0x8b, 0x08, 0x00, 0x00, 0x09, 0x6e, 0x88, 0x00, 0xff, 0x4a, 0x2b,
    0xcd, 0x4b, 0x2e, 0xc9, 0xcc, 0xcf, 0x53, 0xc8, 0x48, 0xcd, 0xc9, 0xc9,
    0x0f, 0xcf, 0x2f, 0xca, 0x49, 0xd1, 0xd0, 0x54, 0xa8, 0xe6, 0xe2, 0x4c,
    0xce, 0xcf, 0x2b, 0xce, 0xcf, 0x49, 0xd5, 0xcb, 0xc9, 0x4f, 0xd7, 0x50,
    0x02, 0x4b, 0x2a, 0x94, 0x83, 0x64, 0x95, 0x34, 0xad, 0xb9, 0x6a, 0xb9,
    0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x01, 0x00, 0x00, 0xff, 0xff, 0x21,
    0xd3, 0x9d, 0xf9, 0x37, 0x00, 0x00, 0x00,
];

const LAYOUT_HTML: &[u8] = &[
    0x1f, 0x8b, 0x08, 0x00, 0x00, 0x09, 0x6e, 0x88, 0x00, 0xff, 0x54, 0x8f,
    0x31, 0x8f, 0xc2, 0x30, 0x0c, 0x85, 0xf7, 0xfe, 0x0a, 0x9f, 0xf7, 0xbb,
    0xa8, 0xdb, 0x0d, 0x49, 0x97, 0x3b, 0x36, 0x24, 0x18, 0xba, 0x30, 0xa1,
    0xd0, 0xb8, 0x4a, 0x84, 0x4b, 0x51, 0xe3, 0x4a, 0xe4, 0xdf, 0x93, 0x26,
    0x30, 0x90, 0xe5, 0x29, 0x7e, 0xcf, 0xf6, 0x67, 0xfd, 0xf5, 0x7f, 0xf8,
    0xeb, 0x4f, 0xc7, 0x1d, 0x78, 0x99, 0xb8, 0x6b, 0xf4, 0x5b, 0xc8, 0xba,
    0xae, 0x81, 0xfc, 0xb4, 0x04, 0x61, 0xea, 0xf6, 0x36, 0xcd, 0xab, 0x40,
    0x4f, 0x51, 0xb4, 0xaa, 0xa5, 0x6a, 0x4f, 0x24, 0x16, 0x06, 0x6f, 0x97,
    0x48, 0x62, 0x70, 0x95, 0xf1, 0xfb, 0x17, 0x41, 0xbd, 0x4c, 0x0e, 0xb7,
    0x2b, 0xf8, 0x85, 0x46, 0x83, 0x2a, 0x8a, 0x95, 0x30, 0x64, 0x49, 0x4c,
    0x3f, 0x43, 0x8c, 0x08, 0x13, 0xb9, 0x60, 0x0d, 0x5a, 0x66, 0x84, 0x85,
    0xd8, 0x60, 0xf1, 0xa2, 0x27, 0x12, 0x04, 0x49, 0x77, 0x32, 0x28, 0xf4,
    0x10, 0x55, 0xc2, 0x79, 0xa4, 0x56, 0x15, 0x4b, 0x5f, 0x66, 0x97, 0xb6,
    0x0d, 0xda, 0xb7, 0x10, 0x9c, 0x41, 0x2e, 0x70, 0x67, 0xc9, 0x70, 0xf8,
    0x49, 0xea, 0xdb, 0xad, 0xad, 0xe6, 0xf3, 0xaf, 0x1c, 0xf7, 0x04, 0x00,
    0x00, 0xff, 0xff, 0x01, 0x00, 0x00, 0xff, 0xff, 0x9b, 0xe3, 0x63, 0x01,
    0xf4, 0x00, 0x00, 0x00,
];

const STYLE_CSS: &[u8] = &[
    0x1f, 0x8b, 0x08, 0x00, 0x00, 0x09, 0x6e, 0x88, 0x00, 0xff, 0x4a, 0xca,
    0x4f, 0xa9, 0x54, 0xa8, 0xe6, 0xe2, 0x4c, 0x4a, 0x4c, 0xce, 0x4e, 0x2f,
    0xca, 0x2f, 0xcd, 0x4b, 0xd1, 0x4d, 0xce, 0xcf, 0xc9, 0x2f, 0xb2, 0x52,
    0x48, 0x49, 0x2c, 0xca, 0x2e, 0x4a, 0x4d, 0xb1, 0xe6, 0xe2, 0x84, 0x0a,
    0x94, 0x67, 0x64, 0x96, 0xa4, 0x02, 0xb9, 0x69, 0xf9, 0x79, 0x25, 0xba,
    0x69, 0x89, 0xb9, 0x99, 0x39, 0x95, 0x56, 0x0a, 0x89, 0x45, 0x99, 0x89,
    0x39, 0xd6, 0x5c, 0xb5, 0x5c, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x01,
    0x00, 0x00, 0xff, 0xff, 0xf7, 0x31, 0x38, 0x22, 0x49, 0x00, 0x00, 0x00,
];

pub static SAMPLE_ASSETS: &[(&str, &[u8])] = &[
    ("a.js", A_JS),
    ("layout.html", LAYOUT_HTML),
    ("style.css", STYLE_CSS),
];
