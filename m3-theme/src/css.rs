//! `light-dark()` CSS custom properties for a Material theme.
//!
//! Output is one declaration per line, shaped for the body of a
//! `:root { ... }` block:
//!
//! ```text
//!   --md-sys-color-on-primary: light-dark(#ffffff, #381e72);
//! ```
//!
//! Lines are sorted by their full text so regenerated files diff cleanly.

use std::{collections::HashSet, fmt};

use tracing::{debug, instrument, trace};

use crate::{
    color::Argb,
    error::ColorError,
    theme::{Theme, theme_from_color_code},
};

/// Seed used when the caller does not supply one: the Material baseline
/// purple, `#6750A4`.
pub const DEFAULT_SEED: Argb = Argb(0xFF67_50A4);

pub const PROPERTY_PREFIX: &str = "--md-sys-color-";

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Scheme roles emitted directly, by camelCase name. `surfaceTint` is not
/// here; it comes from the tone tables.
pub const BASE_ROLES: &[&str] = &[
    "primary",
    "onPrimary",
    "primaryContainer",
    "onPrimaryContainer",
    "secondary",
    "onSecondary",
    "secondaryContainer",
    "onSecondaryContainer",
    "tertiary",
    "onTertiary",
    "tertiaryContainer",
    "onTertiaryContainer",
    "error",
    "onError",
    "errorContainer",
    "onErrorContainer",
    "background",
    "onBackground",
    "surface",
    "onSurface",
    "surfaceVariant",
    "onSurfaceVariant",
    "outline",
    "outlineVariant",
    "shadow",
    "scrim",
    "inverseSurface",
    "inverseOnSurface",
    "inversePrimary",
];

/// A role read straight from a palette at a fixed tone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleTone {
    /// Kebab-case role name, used verbatim in the property name.
    pub role: &'static str,
    pub palette: &'static str,
    pub tone: i32,
}

const fn role_tone(role: &'static str, palette: &'static str, tone: i32) -> RoleTone {
    RoleTone {
        role,
        palette,
        tone,
    }
}

/// Fixed, dim/bright surface and tint roles in light mode.
pub const LIGHT_ROLE_TONES: &[RoleTone] = &[
    role_tone("primary-fixed", "primary", 90),
    role_tone("primary-fixed-dim", "primary", 80),
    role_tone("on-primary-fixed", "primary", 10),
    role_tone("on-primary-fixed-variant", "primary", 30),
    role_tone("secondary-fixed", "secondary", 90),
    role_tone("secondary-fixed-dim", "secondary", 80),
    role_tone("on-secondary-fixed", "secondary", 10),
    role_tone("on-secondary-fixed-variant", "secondary", 30),
    role_tone("tertiary-fixed", "tertiary", 90),
    role_tone("tertiary-fixed-dim", "tertiary", 80),
    role_tone("on-tertiary-fixed", "tertiary", 10),
    role_tone("on-tertiary-fixed-variant", "tertiary", 30),
    role_tone("surface-dim", "neutral", 87),
    role_tone("surface-bright", "neutral", 98),
    role_tone("surface-container-lowest", "neutral", 100),
    role_tone("surface-container-low", "neutral", 96),
    role_tone("surface-container", "neutral", 94),
    role_tone("surface-container-high", "neutral", 92),
    role_tone("surface-container-highest", "neutral", 90),
    role_tone("surface-tint", "primary", 40),
];

/// Dark-mode counterpart of [`LIGHT_ROLE_TONES`]. Fixed roles keep their
/// tones in both modes.
pub const DARK_ROLE_TONES: &[RoleTone] = &[
    role_tone("primary-fixed", "primary", 90),
    role_tone("primary-fixed-dim", "primary", 80),
    role_tone("on-primary-fixed", "primary", 10),
    role_tone("on-primary-fixed-variant", "primary", 30),
    role_tone("secondary-fixed", "secondary", 90),
    role_tone("secondary-fixed-dim", "secondary", 80),
    role_tone("on-secondary-fixed", "secondary", 10),
    role_tone("on-secondary-fixed-variant", "secondary", 30),
    role_tone("tertiary-fixed", "tertiary", 90),
    role_tone("tertiary-fixed-dim", "tertiary", 80),
    role_tone("on-tertiary-fixed", "tertiary", 10),
    role_tone("on-tertiary-fixed-variant", "tertiary", 30),
    role_tone("surface-dim", "neutral", 6),
    role_tone("surface-bright", "neutral", 24),
    role_tone("surface-container-lowest", "neutral", 4),
    role_tone("surface-container-low", "neutral", 10),
    role_tone("surface-container", "neutral", 12),
    role_tone("surface-container-high", "neutral", 17),
    role_tone("surface-container-highest", "neutral", 22),
    role_tone("surface-tint", "primary", 80),
];

/// One `--md-sys-color-*` declaration with its light and dark values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorProperty {
    name: String,
    light: Argb,
    dark: Argb,
}

impl ColorProperty {
    /// `role` must already be kebab-case.
    pub fn new(role: &str, light: Argb, dark: Argb) -> Self {
        Self {
            name: format!("{PROPERTY_PREFIX}{role}"),
            light,
            dark,
        }
    }
}

impl fmt::Display for ColorProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  {}: light-dark({}, {});",
            self.name, self.light, self.dark
        )
    }
}

/// Properties collected so far; a name is emitted at most once.
#[derive(Debug, Default)]
struct ColorProperties {
    properties: Vec<ColorProperty>,
    names: HashSet<String>,
}

impl ColorProperties {
    fn push(&mut self, property: ColorProperty) {
        if self.names.insert(property.name.clone()) {
            trace!(
                name = %property.name,
                light = %property.light,
                dark = %property.dark,
                "color property"
            );
            self.properties.push(property);
        }
    }

    fn len(&self) -> usize {
        self.properties.len()
    }

    fn into_css(self) -> String {
        let mut lines: Vec<String> = self.properties.iter().map(ToString::to_string).collect();
        lines.sort();
        lines.join(LINE_SEPARATOR)
    }
}

/// `onPrimaryContainer` becomes `on-primary-container`.
pub fn kebab_case(role: &str) -> String {
    let mut kebab = String::with_capacity(role.len() + 4);
    for c in role.chars() {
        if c.is_ascii_uppercase() {
            kebab.push('-');
            kebab.push(c.to_ascii_lowercase());
        } else {
            kebab.push(c);
        }
    }
    kebab
}

/// Generates the sorted, newline-joined CSS custom properties for a seed
/// color such as `"#6750A4"`.
///
/// A malformed seed is an error. Individual roles that cannot be resolved
/// are left out; the result is empty only if no role resolved at all.
#[instrument(level = "debug")]
pub fn generate_theme_css(seed_hex: &str) -> Result<String, ColorError> {
    let source = Argb::from_hex(seed_hex)?;
    Ok(theme_css(&theme_from_color_code(source)))
}

/// [`generate_theme_css`] for [`DEFAULT_SEED`].
pub fn generate_default_theme_css() -> String {
    theme_css(&theme_from_color_code(DEFAULT_SEED))
}

/// CSS custom properties for an already derived theme.
pub fn theme_css(theme: &Theme) -> String {
    let mut properties = ColorProperties::default();
    emit_base_roles(theme, BASE_ROLES, &mut properties);
    let base = properties.len();
    emit_role_tones(theme, LIGHT_ROLE_TONES, DARK_ROLE_TONES, &mut properties);
    debug!(
        source = %theme.source,
        base,
        extended = properties.len() - base,
        "collected color properties"
    );
    properties.into_css()
}

fn emit_base_roles(theme: &Theme, roles: &[&str], properties: &mut ColorProperties) {
    for role in roles {
        let (Some(light), Some(dark)) = (theme.light.get(role), theme.dark.get(role)) else {
            continue;
        };
        properties.push(ColorProperty::new(&kebab_case(role), light, dark));
    }
}

fn emit_role_tones(
    theme: &Theme,
    light_tones: &[RoleTone],
    dark_tones: &[RoleTone],
    properties: &mut ColorProperties,
) {
    for light in light_tones {
        let Some(dark) = dark_tones.iter().find(|dark| dark.role == light.role) else {
            continue;
        };
        let (Some(light_palette), Some(dark_palette)) = (
            theme.palettes.get(light.palette),
            theme.palettes.get(dark.palette),
        ) else {
            continue;
        };
        // A failed lookup drops this role only; it is not reported.
        let (Ok(light_argb), Ok(dark_argb)) =
            (light_palette.tone(light.tone), dark_palette.tone(dark.tone))
        else {
            continue;
        };
        properties.push(ColorProperty::new(light.role, light_argb, dark_argb));
    }
}
