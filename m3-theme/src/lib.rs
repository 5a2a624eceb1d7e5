//! Material Design 3 theme generation.
//!
//! A single seed color is expanded into tonal palettes in the HCT color
//! space, resolved into light and dark color schemes, and finally written out
//! as `light-dark()` CSS custom properties.
//!
//! ```
//! let css = m3_theme::generate_theme_css("#6750A4").unwrap();
//! assert!(css.contains("--md-sys-color-primary: light-dark("));
//! ```

pub mod color;
pub mod css;
pub mod error;
pub mod palettes;
pub mod scheme;
pub mod theme;

pub use color::Argb;
pub use css::{
    ColorProperty, DEFAULT_SEED, generate_default_theme_css, generate_theme_css, theme_css,
};
pub use error::ColorError;
pub use palettes::{CorePalette, TonalPalette};
pub use scheme::Scheme;
pub use theme::{Theme, theme_from_color_code};

/// Parses a `#rrggbb` (or `#rgb`) seed into an opaque color code.
pub fn hex_to_color_code(hex: &str) -> Result<Argb, ColorError> {
    Argb::from_hex(hex)
}

/// Formats a color code as lowercase `#rrggbb`; alpha is dropped.
pub fn color_code_to_hex(argb: Argb) -> String {
    argb.to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        for hex in ["#6750a4", "#000000", "#ffffff", "#0a0b0c"] {
            let code = hex_to_color_code(hex).unwrap();
            assert_eq!(color_code_to_hex(code), hex);
            assert_eq!(hex_to_color_code(&color_code_to_hex(code)), Ok(code));
        }
    }

    #[test]
    fn public_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Theme>();
        assert_send_sync::<TonalPalette>();
        assert_send_sync::<ColorProperty>();
        assert_send_sync::<ColorError>();
    }
}
