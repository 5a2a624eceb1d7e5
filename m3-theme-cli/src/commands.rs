pub mod generate;
pub mod palette;
pub mod scheme;

use anyhow::{Context, Result};
use m3_theme::{Theme, hex_to_color_code, theme_from_color_code};

/// Parses the seed and derives its theme, naming the seed on failure.
pub fn load_theme(seed: &str) -> Result<Theme> {
    let source =
        hex_to_color_code(seed).with_context(|| format!("Invalid seed color '{seed}'"))?;
    Ok(theme_from_color_code(source))
}
