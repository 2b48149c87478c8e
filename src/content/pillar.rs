//! Pillar tags: the three thematic top-level labels and their badge styles.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PillarTag {
    Ia,
    Engineering,
    Ux,
}

impl PillarTag {
    pub const ALL: [PillarTag; 3] = [PillarTag::Ia, PillarTag::Engineering, PillarTag::Ux];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ia => "IA",
            Self::Engineering => "Engineering",
            Self::Ux => "UX",
        }
    }

    /// Parse a pillar name. Accents are folded, so `Ingénierie` and
    /// `Ingenierie` both name the engineering pillar.
    pub fn parse(name: &str) -> Option<Self> {
        match deunicode::deunicode(name.trim()).as_str() {
            "IA" | "AI" => Some(Self::Ia),
            "Ingenierie" | "Engineering" => Some(Self::Engineering),
            "UX" => Some(Self::Ux),
            _ => None,
        }
    }

    /// Badge css classes.
    pub const fn style_class(self) -> &'static str {
        match self {
            Self::Ia => "bg-purple-500/15 border-purple-500/30 text-purple-400",
            Self::Engineering => "bg-teal/15 border-teal/30 text-teal-bright",
            Self::Ux => "bg-amber-500/15 border-amber-500/30 text-amber-400",
        }
    }
}

impl fmt::Display for PillarTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PillarTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PillarTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::parse(&name).ok_or_else(|| {
            let expected: Vec<_> = Self::ALL.iter().map(|tag| tag.as_str()).collect();
            D::Error::custom(format!(
                "unknown pillar tag `{name}`, expected one of: {}",
                expected.join(", ")
            ))
        })
    }
}
