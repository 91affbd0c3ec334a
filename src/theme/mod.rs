//! Colour palettes and component defaults.
//!
//! Built once at startup by [`ThemeConfig::create`] and shared read-only
//! through the context. The palettes are published to the page as CSS custom
//! properties by [`ThemeConfig::stylesheet`].


pub mod color;

use std::fmt::Write as _;

use derive_more::Display;
use dioxus::logger::tracing;

use crate::auth::storage;
use color::Color;

const THEME_KEY: &str = "theme";

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    #[default]
    #[display("light")]
    Light,
    #[display("dark")]
    Dark,
}

impl ThemeName {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn class(self) -> String {
        format!("theme-{self}")
    }

    /// Last theme picked by the user, light when nothing usable is stored.
    pub fn retrieve(storage_type: storage::StorageType) -> Self {
        match storage::get_item(storage_type, THEME_KEY) {
            Ok(value) => value.as_deref().and_then(Self::parse).unwrap_or_default(),
            Err(error) => {
                tracing::debug!("{error:?}");
                Self::default()
            }
        }
    }

    pub fn persist(self, storage_type: storage::StorageType) -> anyhow::Result<()> {
        storage::set_item(storage_type, THEME_KEY, &self.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub accent: Option<Color>,
}

impl ThemeColors {
    pub fn roles(&self) -> impl Iterator<Item = (&'static str, Color)> {
        [
            ("primary", Some(self.primary)),
            ("secondary", Some(self.secondary)),
            ("background", Some(self.background)),
            ("accent", self.accent),
        ]
        .into_iter()
        .filter_map(|(role, color)| color.map(|c| (role, c)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: ThemeName,
    pub colors: ThemeColors,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTableDefaults {
    pub fixed_header: bool,
    pub no_data_text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDefaults {
    pub data_table: DataTableDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub default_theme: ThemeName,
    pub themes: [Palette; 2],
    pub defaults: ComponentDefaults,
}

impl ThemeConfig {
    pub fn create() -> Self {
        Self {
            default_theme: ThemeName::Light,
            themes: [
                Palette {
                    name: ThemeName::Light,
                    colors: ThemeColors {
                        primary: Color::hex("#217dbb"),
                        secondary: Color::hex("#5CBBF6"),
                        background: Color::hex("#D8F2FA"),
                        accent: Some(Color::hex("#FFFFFF")),
                    },
                },
                Palette {
                    name: ThemeName::Dark,
                    colors: ThemeColors {
                        primary: Color::hex("#217dbb"),
                        secondary: Color::hex("#5CBBF6"),
                        background: Color::hex("#333"),
                        accent: None,
                    },
                },
            ],
            defaults: ComponentDefaults {
                data_table: DataTableDefaults {
                    fixed_header: true,
                    no_data_text: "Results not found",
                },
            },
        }
    }

    pub fn palette(&self, name: ThemeName) -> &Palette {
        // both names are always present
        self.themes.iter().find(|p| p.name == name).unwrap_or(&self.themes[0])
    }

    pub fn stylesheet(&self) -> String {
        let mut css = String::new();

        for palette in &self.themes {
            let selector = if palette.name == self.default_theme {
                format!(":root, .{}", palette.name.class())
            } else {
                format!(".{}", palette.name.class())
            };

            let _ = writeln!(css, "{selector} {{");
            for (role, color) in palette.colors.roles() {
                let _ = writeln!(css, "  --theme-{role}: {color};");
            }
            let _ = writeln!(css, "}}");
        }

        css
    }
}
