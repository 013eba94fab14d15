//! Country record model
//!
//! A country as returned by the REST Countries `name` endpoint, restricted to
//! the fields the widget asks for (`name,capital,population,flags,languages`).

use serde::Deserialize;

/// Flag asset references of a country
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Flags {
    /// URL of the SVG flag image
    #[serde(default)]
    pub svg: String,
}

/// A language spoken in a country
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Language {
    /// Display name, e.g. "Polish"
    pub name: String,
}

/// One country record
///
/// Records are immutable and carry no identity beyond structural equality.
/// Some territories have no capital or languages; those fields fall back to
/// empty values instead of failing the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Country {
    pub name: String,
    #[serde(default)]
    pub capital: String,
    #[serde(default)]
    pub population: u64,
    pub flags: Flags,
    #[serde(default)]
    pub languages: Vec<Language>,
}

impl Country {
    /// Build a record by hand (used by stub sources and tests)
    pub fn new(
        name: impl Into<String>,
        capital: impl Into<String>,
        population: u64,
        flag_svg: impl Into<String>,
        languages: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            capital: capital.into(),
            population,
            flags: Flags {
                svg: flag_svg.into(),
            },
            languages: languages
                .iter()
                .map(|name| Language {
                    name: (*name).to_string(),
                })
                .collect(),
        }
    }

    /// Alt text of the flag image
    pub fn flag_alt(&self) -> String {
        format!("Flag of {}", self.name)
    }
}
