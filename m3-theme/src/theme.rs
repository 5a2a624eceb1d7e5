//! A complete theme: both schemes plus the palettes behind them.

use crate::{color::Argb, palettes::CorePalette, scheme::Scheme};

/// Everything derived from one source color: both schemes and the palettes
/// they were drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Theme {
    pub source: Argb,
    pub light: Scheme,
    pub dark: Scheme,
    pub palettes: CorePalette,
}

impl Theme {
    pub fn scheme(&self, is_dark: bool) -> &Scheme {
        if is_dark { &self.dark } else { &self.light }
    }
}

/// Derives the light scheme, the dark scheme and the key palettes from a
/// source color. The same source always yields the same theme.
pub fn theme_from_color_code(source: Argb) -> Theme {
    let palettes = CorePalette::of(source);
    Theme {
        source,
        light: Scheme::light_from_core_palette(&palettes),
        dark: Scheme::dark_from_core_palette(&palettes),
        palettes,
    }
}
