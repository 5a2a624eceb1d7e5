use anyhow::Result;
use m3_theme::Scheme;

use super::load_theme;
use crate::output;

pub fn execute(seed: &str, dark: bool, json: bool) -> Result<()> {
    let theme = load_theme(seed)?;
    let scheme = theme.scheme(dark);

    if json {
        println!("{}", serde_json::to_string_pretty(scheme)?);
        return Ok(());
    }

    let mode = if dark { "dark" } else { "light" };
    output::status("Scheme", format!("{mode}, seed {}", theme.source));
    for line in render_listing(scheme) {
        println!("{line}");
    }
    Ok(())
}

/// One line per role: the padded role name, then its swatch.
pub fn render_listing(scheme: &Scheme) -> Vec<String> {
    let width = scheme.roles().map(|(role, _)| role.len()).max().unwrap_or(0);
    scheme
        .roles()
        .map(|(role, argb)| format!("{role:<width$} {}", output::swatch(argb)))
        .collect()
}
