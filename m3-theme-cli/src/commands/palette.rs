use std::collections::BTreeMap;

use anyhow::Result;
use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, modifiers::UTF8_ROUND_CORNERS as RoundCorners,
    presets::UTF8_FULL,
};
use m3_theme::{Argb, Theme};
use serde::Serialize;

use super::load_theme;
use crate::output;

/// Tones shown for each palette: the scheme tones plus the surface steps.
pub const TONES: &[i32] = &[
    0, 4, 6, 10, 12, 17, 20, 22, 24, 30, 40, 50, 60, 70, 80, 87, 90, 92, 94, 95, 96, 98, 99, 100,
];

#[derive(Debug, Serialize)]
pub struct PaletteReport {
    pub name: &'static str,
    pub hue: f64,
    pub chroma: f64,
    pub tones: BTreeMap<i32, Argb>,
}

pub fn execute(seed: &str, json: bool) -> Result<()> {
    let theme = load_theme(seed)?;
    let reports = palette_reports(&theme)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    output::status("Palettes", format!("seed {}", theme.source));
    println!("{}", palette_table(&reports));
    Ok(())
}

pub fn palette_reports(theme: &Theme) -> Result<Vec<PaletteReport>> {
    theme
        .palettes
        .iter()
        .map(|(name, palette)| -> Result<PaletteReport> {
            let tones = TONES
                .iter()
                .map(|&tone| -> Result<(i32, Argb)> { Ok((tone, palette.tone(tone)?)) })
                .collect::<Result<BTreeMap<_, _>>>()?;
            Ok(PaletteReport {
                name,
                hue: palette.hue(),
                chroma: palette.chroma(),
                tones,
            })
        })
        .collect()
}

fn palette_table(reports: &[PaletteReport]) -> Table {
    let mut table = Table::new();
    let mut header = vec![Cell::new("Tone").add_attribute(Attribute::Bold)];
    header.extend(
        reports
            .iter()
            .map(|report| Cell::new(report.name).add_attribute(Attribute::Bold)),
    );
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(RoundCorners)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for tone in TONES {
        let mut row = vec![Cell::new(tone)];
        row.extend(reports.iter().filter_map(|report| {
            report.tones.get(tone).map(|argb| {
                Cell::new(format!("██ {argb}")).fg(Color::Rgb {
                    r: argb.red(),
                    g: argb.green(),
                    b: argb.blue(),
                })
            })
        }));
        table.add_row(row);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_every_palette_and_tone() {
        let theme = load_theme("#6750A4").unwrap();
        let reports = palette_reports(&theme).unwrap();
        let names: Vec<&str> = reports.iter().map(|report| report.name).collect();
        assert_eq!(
            names,
            ["primary", "secondary", "tertiary", "neutral", "neutralVariant", "error"]
        );
        for report in &reports {
            assert_eq!(report.tones.len(), TONES.len());
            assert_eq!(report.tones[&0], Argb::BLACK);
            assert_eq!(report.tones[&100], Argb::WHITE);
        }
    }

    #[test]
    fn json_uses_hex_strings() {
        let theme = load_theme("#6750A4").unwrap();
        let reports = palette_reports(&theme).unwrap();
        let json = serde_json::to_value(&reports).unwrap();
        assert_eq!(json[0]["name"], "primary");
        assert_eq!(json[0]["tones"]["100"], "#ffffff");
    }

    #[test]
    fn table_has_a_row_per_tone() {
        let theme = load_theme("#131313").unwrap();
        let reports = palette_reports(&theme).unwrap();
        let table = palette_table(&reports);
        assert_eq!(table.row_iter().count(), TONES.len());
    }

    #[test]
    fn invalid_seed_is_reported() {
        let error = execute("#12", false).unwrap_err();
        assert!(error.to_string().contains("#12"));
    }
}
