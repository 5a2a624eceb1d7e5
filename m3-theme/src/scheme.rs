//! Material color schemes: semantic roles resolved to concrete colors.

use crate::{color::Argb, palettes::CorePalette};

macro_rules! scheme_roles {
    ($($(#[$doc:meta])* $field:ident => $role:literal,)+) => {
        /// A light or dark Material color scheme.
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
        pub struct Scheme {
            $($(#[$doc])* pub $field: Argb,)+
        }

        /// Every role of [`Scheme`], by camelCase name, in declaration order.
        pub const SCHEME_ROLES: &[&str] = &[$($role,)+];

        impl Scheme {
            /// Looks up a role by its camelCase name.
            pub fn get(&self, role: &str) -> Option<Argb> {
                match role {
                    $($role => Some(self.$field),)+
                    _ => None,
                }
            }

            /// `(role, color)` pairs in declaration order.
            pub fn roles(&self) -> impl Iterator<Item = (&'static str, Argb)> + '_ {
                SCHEME_ROLES
                    .iter()
                    .filter_map(|role| self.get(role).map(|argb| (*role, argb)))
            }
        }
    };
}

scheme_roles! {
    /// Key color of the scheme.
    primary => "primary",
    /// Content on top of `primary`.
    on_primary => "onPrimary",
    /// Less prominent fill paired with `primary`.
    primary_container => "primaryContainer",
    on_primary_container => "onPrimaryContainer",
    secondary => "secondary",
    on_secondary => "onSecondary",
    secondary_container => "secondaryContainer",
    on_secondary_container => "onSecondaryContainer",
    /// Contrasting accent, hue rotated from primary.
    tertiary => "tertiary",
    on_tertiary => "onTertiary",
    tertiary_container => "tertiaryContainer",
    on_tertiary_container => "onTertiaryContainer",
    error => "error",
    on_error => "onError",
    error_container => "errorContainer",
    on_error_container => "onErrorContainer",
    background => "background",
    on_background => "onBackground",
    surface => "surface",
    on_surface => "onSurface",
    surface_variant => "surfaceVariant",
    on_surface_variant => "onSurfaceVariant",
    /// Borders and dividers.
    outline => "outline",
    outline_variant => "outlineVariant",
    shadow => "shadow",
    scrim => "scrim",
    inverse_surface => "inverseSurface",
    inverse_on_surface => "inverseOnSurface",
    /// Primary shown on `inverse_surface`.
    inverse_primary => "inversePrimary",
}

impl Scheme {
    pub fn light_from_core_palette(core: &CorePalette) -> Self {
        Self {
            primary: core.primary.at(40),
            on_primary: core.primary.at(100),
            primary_container: core.primary.at(90),
            on_primary_container: core.primary.at(10),
            secondary: core.secondary.at(40),
            on_secondary: core.secondary.at(100),
            secondary_container: core.secondary.at(90),
            on_secondary_container: core.secondary.at(10),
            tertiary: core.tertiary.at(40),
            on_tertiary: core.tertiary.at(100),
            tertiary_container: core.tertiary.at(90),
            on_tertiary_container: core.tertiary.at(10),
            error: core.error.at(40),
            on_error: core.error.at(100),
            error_container: core.error.at(90),
            on_error_container: core.error.at(10),
            background: core.neutral.at(99),
            on_background: core.neutral.at(10),
            surface: core.neutral.at(99),
            on_surface: core.neutral.at(10),
            surface_variant: core.neutral_variant.at(90),
            on_surface_variant: core.neutral_variant.at(30),
            outline: core.neutral_variant.at(50),
            outline_variant: core.neutral_variant.at(80),
            shadow: core.neutral.at(0),
            scrim: core.neutral.at(0),
            inverse_surface: core.neutral.at(20),
            inverse_on_surface: core.neutral.at(95),
            inverse_primary: core.primary.at(80),
        }
    }

    pub fn dark_from_core_palette(core: &CorePalette) -> Self {
        Self {
            primary: core.primary.at(80),
            on_primary: core.primary.at(20),
            primary_container: core.primary.at(30),
            on_primary_container: core.primary.at(90),
            secondary: core.secondary.at(80),
            on_secondary: core.secondary.at(20),
            secondary_container: core.secondary.at(30),
            on_secondary_container: core.secondary.at(90),
            tertiary: core.tertiary.at(80),
            on_tertiary: core.tertiary.at(20),
            tertiary_container: core.tertiary.at(30),
            on_tertiary_container: core.tertiary.at(90),
            error: core.error.at(80),
            on_error: core.error.at(20),
            error_container: core.error.at(30),
            on_error_container: core.error.at(80),
            background: core.neutral.at(10),
            on_background: core.neutral.at(90),
            surface: core.neutral.at(10),
            on_surface: core.neutral.at(90),
            surface_variant: core.neutral_variant.at(30),
            on_surface_variant: core.neutral_variant.at(80),
            outline: core.neutral_variant.at(60),
            outline_variant: core.neutral_variant.at(30),
            shadow: core.neutral.at(0),
            scrim: core.neutral.at(0),
            inverse_surface: core.neutral.at(90),
            inverse_on_surface: core.neutral.at(20),
            inverse_primary: core.primary.at(40),
        }
    }
}
