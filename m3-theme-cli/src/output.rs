use std::{fmt::Display, time::Instant};

use console::style;
use indicatif::HumanDuration;
use m3_theme::Argb;
use owo_colors::OwoColorize;

const LABEL_WIDTH: usize = 12;

/// Cargo-style status line on stderr: a right-aligned green label, then the message.
pub fn status(label: &str, message: impl Display) {
    eprintln!(
        "{:>width$} {message}",
        style(label).green().bold(),
        width = LABEL_WIDTH
    );
}

pub fn warn(message: impl Display) {
    eprintln!("{}: {message}", style("warning").yellow().bold());
}

pub fn note(message: impl Display) {
    eprintln!("{}: {message}", style("note").blue().bold());
}

/// A two-cell block painted in `argb`, followed by its hex code.
pub fn swatch(argb: Argb) -> String {
    let block = "██".truecolor(argb.red(), argb.green(), argb.blue());
    format!("{block} {argb}")
}

pub fn elapsed(started: Instant) -> String {
    HumanDuration(started.elapsed()).to_string()
}
