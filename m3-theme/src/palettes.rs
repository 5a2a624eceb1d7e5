//! Tonal palettes: one hue and chroma, every tone from black to white.

use material_color_utilities::{hct::Hct, palettes::TonalPalette as ToneSource};

use crate::{color::Argb, error::ColorError};

const TONE_COUNT: usize = TonalPalette::MAX_TONE as usize + 1;

/// Colors sharing a hue and chroma, addressed by tone.
///
/// Every tone from 0 to 100 is resolved once at construction, so a palette
/// is plain data afterwards and can be shared across threads.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TonalPalette {
    hue: f64,
    chroma: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    tones: [Argb; TONE_COUNT],
}

impl TonalPalette {
    pub const MIN_TONE: i32 = 0;
    pub const MAX_TONE: i32 = 100;

    pub fn from_hue_and_chroma(hue: f64, chroma: f64) -> Self {
        let source = ToneSource::from_hue_and_chroma(hue, chroma);
        let tones = std::array::from_fn(|tone| Argb(source.tone(tone as u8)));
        Self { hue, chroma, tones }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Color of this palette at `tone`, which must lie in `0..=100`.
    pub fn tone(&self, tone: i32) -> Result<Argb, ColorError> {
        if !(Self::MIN_TONE..=Self::MAX_TONE).contains(&tone) {
            return Err(ColorError::ToneOutOfRange(tone));
        }
        Ok(self.tones[tone as usize])
    }

    /// Infallible lookup for fixed scheme tones; anything above 100 reads as 100.
    pub(crate) fn at(&self, tone: u8) -> Argb {
        self.tones[usize::from(tone).min(TONE_COUNT - 1)]
    }
}

/// Names accepted by [`CorePalette::get`].
pub const PALETTE_NAMES: &[&str] = &[
    "primary",
    "secondary",
    "tertiary",
    "neutral",
    "neutralVariant",
    "error",
];

/// The six palettes a Material color scheme draws from.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CorePalette {
    pub primary: TonalPalette,
    pub secondary: TonalPalette,
    pub tertiary: TonalPalette,
    pub neutral: TonalPalette,
    pub neutral_variant: TonalPalette,
    pub error: TonalPalette,
}

impl CorePalette {
    /// Derives the key palettes from a source color.
    ///
    /// Primary keeps the source hue with at least chroma 48; tertiary is
    /// rotated by 60°; the neutrals are nearly gray tints of the source hue.
    pub fn of(argb: Argb) -> Self {
        let hct = Hct::from_int(argb.0);
        let hue = hct.hue();
        let chroma = hct.chroma();
        Self {
            primary: TonalPalette::from_hue_and_chroma(hue, chroma.max(48.0)),
            secondary: TonalPalette::from_hue_and_chroma(hue, 16.0),
            tertiary: TonalPalette::from_hue_and_chroma(hue + 60.0, 24.0),
            neutral: TonalPalette::from_hue_and_chroma(hue, 4.0),
            neutral_variant: TonalPalette::from_hue_and_chroma(hue, 8.0),
            error: TonalPalette::from_hue_and_chroma(25.0, 84.0),
        }
    }

    /// Looks up a palette by its camelCase name.
    pub fn get(&self, name: &str) -> Option<&TonalPalette> {
        match name {
            "primary" => Some(&self.primary),
            "secondary" => Some(&self.secondary),
            "tertiary" => Some(&self.tertiary),
            "neutral" => Some(&self.neutral),
            "neutralVariant" => Some(&self.neutral_variant),
            "error" => Some(&self.error),
            _ => None,
        }
    }

    /// `(name, palette)` pairs in [`PALETTE_NAMES`] order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &TonalPalette)> {
        PALETTE_NAMES
            .iter()
            .filter_map(|name| self.get(name).map(|palette| (*name, palette)))
    }
}
