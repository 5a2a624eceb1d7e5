use std::{fs, path::PathBuf, time::Instant};

use anyhow::{Context, Result, bail};
use handlebars::Handlebars;
use serde_json::json;
use tracing::debug;

use crate::output;

static THEME_TEMPLATE: &str = include_str!("../../templates/theme.css.hbs");

pub struct GenerateOptions {
    pub seed: String,
    pub output: PathBuf,
    pub marker: String,
    pub stdout: bool,
}

pub fn execute(options: &GenerateOptions) -> Result<()> {
    let started = Instant::now();
    let css = m3_theme::generate_theme_css(&options.seed)
        .with_context(|| format!("Failed to generate a theme from seed '{}'", options.seed))?;
    let property_count = css.lines().count();
    if property_count == 0 {
        output::warn("no color properties were generated; writing an empty :root block");
    }
    let contents = render_root_block(&options.marker, &css)?;

    if options.stdout {
        print!("{contents}");
        return Ok(());
    }

    if options.output.exists() {
        output::note(format!("overwriting {}", options.output.display()));
    }
    if let Some(parent) = options
        .output
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&options.output, contents)
        .with_context(|| format!("Failed to write {}", options.output.display()))?;
    debug!(path = %options.output.display(), property_count, "wrote theme");

    output::status(
        "Generated",
        format!(
            "{} ({property_count} properties, seed {})",
            options.output.display(),
            options.seed
        ),
    );
    output::status(
        "Finished",
        format!("in {}", output::elapsed(started)),
    );
    Ok(())
}

/// Wraps generated properties in a `:root` block headed by a marker comment.
pub fn render_root_block(marker: &str, properties: &str) -> Result<String> {
    if marker.contains("*/") {
        bail!("Marker comment must not contain '*/'");
    }

    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);

    let data = json!({
        "marker": marker,
        "properties": properties,
    });
    handlebars
        .render_template(THEME_TEMPLATE, &data)
        .context("Failed to render theme.css template")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_properties_in_root_block() {
        let rendered = render_root_block(
            "generated",
            "  --md-sys-color-primary: light-dark(#6750a4, #d0bcff);",
        )
        .unwrap();
        assert_eq!(
            rendered,
            ":root {\n  /* generated */\n  --md-sys-color-primary: light-dark(#6750a4, #d0bcff);\n}\n"
        );
    }

    #[test]
    fn empty_properties_still_render_the_block() {
        let rendered = render_root_block("generated", "").unwrap();
        assert!(rendered.starts_with(":root {\n  /* generated */\n"));
        assert!(rendered.ends_with("}\n"));
    }

    #[test]
    fn html_characters_are_not_escaped() {
        let rendered = render_root_block("a <b> & 'c'", "").unwrap();
        assert!(rendered.contains("/* a <b> & 'c' */"));
    }

    #[test]
    fn rejects_comment_terminator_in_marker() {
        assert!(render_root_block("oops */", "").is_err());
    }

    #[test]
    fn writes_theme_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("styles").join("theme.css");
        execute(&GenerateOptions {
            seed: "#6750A4".to_string(),
            output: output.clone(),
            marker: "generated".to_string(),
            stdout: false,
        })
        .unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with(":root {\n  /* generated */\n"));
        assert!(written.contains("  --md-sys-color-primary: light-dark("));
        assert!(written.contains("  --md-sys-color-surface-container-highest: light-dark("));
    }

    #[test]
    fn invalid_seed_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("theme.css");
        let result = execute(&GenerateOptions {
            seed: "not-a-color".to_string(),
            output: output.clone(),
            marker: "generated".to_string(),
            stdout: false,
        });
        assert!(result.is_err());
        assert!(!output.exists());
    }
}
