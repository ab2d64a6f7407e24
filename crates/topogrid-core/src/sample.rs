/// One resampled grid cell colour. Channels are 0–255 by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbSample {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for RgbSample {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<image::Rgb<u8>> for RgbSample {
    fn from(px: image::Rgb<u8>) -> Self {
        Self::from(px.0)
    }
}
