use crate::utils_modules::color_utils::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Viridis,
    Coolwarm,
    Mako,
    Rocket,
    YlOrRd,
}

const VIRIDIS: [Rgb; 10] = [
    (0x44, 0x01, 0x54),
    (0x48, 0x28, 0x78),
    (0x3e, 0x49, 0x89),
    (0x31, 0x68, 0x8e),
    (0x26, 0x82, 0x8e),
    (0x1f, 0x9e, 0x89),
    (0x35, 0xb7, 0x79),
    (0x6d, 0xcd, 0x59),
    (0xb4, 0xde, 0x2c),
    (0xfd, 0xe7, 0x25),
];

const COOLWARM: [Rgb; 7] = [
    (0x3b, 0x4c, 0xc0),
    (0x6f, 0x92, 0xf3),
    (0xaa, 0xc7, 0xfd),
    (0xdd, 0xdd, 0xdd),
    (0xf7, 0xb8, 0x9c),
    (0xe7, 0x74, 0x5b),
    (0xb4, 0x04, 0x26),
];

const MAKO: [Rgb; 8] = [
    (0x0b, 0x04, 0x05),
    (0x2e, 0x1e, 0x3c),
    (0x41, 0x3d, 0x7b),
    (0x37, 0x65, 0x9e),
    (0x34, 0x8f, 0xa7),
    (0x40, 0xb7, 0xad),
    (0x8a, 0xd9, 0xb1),
    (0xde, 0xf5, 0xe5),
];

const ROCKET: [Rgb; 8] = [
    (0x03, 0x05, 0x1a),
    (0x36, 0x19, 0x3e),
    (0x70, 0x1f, 0x57),
    (0xae, 0x17, 0x59),
    (0xe1, 0x33, 0x42),
    (0xf3, 0x76, 0x51),
    (0xf6, 0xb4, 0x8e),
    (0xfa, 0xeb, 0xdd),
];

const YLORRD: [Rgb; 9] = [
    (0xff, 0xff, 0xcc),
    (0xff, 0xed, 0xa0),
    (0xfe, 0xd9, 0x76),
    (0xfe, 0xb2, 0x4c),
    (0xfd, 0x8d, 0x3c),
    (0xfc, 0x4e, 0x2a),
    (0xe3, 0x1a, 0x1c),
    (0xbd, 0x00, 0x26),
    (0x80, 0x00, 0x26),
];

impl Palette {
    #[doc = "Evenly spaced colour stops, low end first"]
    pub fn stops(&self) -> &'static [Rgb] {
        match self {
            Palette::Viridis => &VIRIDIS,
            Palette::Coolwarm => &COOLWARM,
            Palette::Mako => &MAKO,
            Palette::Rocket => &ROCKET,
            Palette::YlOrRd => &YLORRD,
        }
    }
}
