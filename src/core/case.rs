//! Case conversion for entry names.

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    #[default]
    None,
    Upper,
    Lower,
    /// Title-case each `_`-separated part: `left_upper_arm` → `Left_Upper_Arm`.
    Title,
    Snake,
    Camel,
    Pascal,
    Kebab,
}

impl CaseMode {
    pub const ALL: &'static [CaseMode] = &[
        CaseMode::None,
        CaseMode::Upper,
        CaseMode::Lower,
        CaseMode::Title,
        CaseMode::Snake,
        CaseMode::Camel,
        CaseMode::Pascal,
        CaseMode::Kebab,
    ];

    pub fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| {
                Error::validation_invalid_argument(
                    "case",
                    format!("Unknown case mode '{}'", s),
                    None,
                    Some(Self::ALL.iter().map(|m| m.as_str().to_string()).collect()),
                )
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseMode::None => "none",
            CaseMode::Upper => "upper",
            CaseMode::Lower => "lower",
            CaseMode::Title => "title",
            CaseMode::Snake => "snake",
            CaseMode::Camel => "camel",
            CaseMode::Pascal => "pascal",
            CaseMode::Kebab => "kebab",
        }
    }
}

pub fn apply_case(name: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::None => name.to_string(),
        CaseMode::Upper => name.to_uppercase(),
        CaseMode::Lower => name.to_lowercase(),
        CaseMode::Title => name.split('_').map(title_part).collect::<Vec<_>>().join("_"),
        CaseMode::Snake => name.to_snake_case(),
        CaseMode::Camel => name.to_lower_camel_case(),
        CaseMode::Pascal => name.to_upper_camel_case(),
        CaseMode::Kebab => name.to_kebab_case(),
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
fn title_part(part: &str) -> String {
    let mut out = String::with_capacity(part.len());
    let mut prev_alpha = false;
    for c in part.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
