//! JSON Schema draft versions
//!
//! A draft decides how a handful of keywords are read: the identifier
//! keyword, boolean vs numeric exclusive bounds, tuple items and the
//! split dependency keywords. Everything after loading is draft-agnostic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SchemaError;

/// Supported JSON Schema drafts
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DraftVersion {
    Draft4,
    Draft6,
    /// Used when a document does not declare `$schema`
    #[default]
    Draft7,
    #[serde(rename = "2019-09")]
    Draft201909,
    #[serde(rename = "2020-12")]
    Draft202012,
}

impl DraftVersion {
    pub const ALL: [DraftVersion; 5] = [
        DraftVersion::Draft4,
        DraftVersion::Draft6,
        DraftVersion::Draft7,
        DraftVersion::Draft201909,
        DraftVersion::Draft202012,
    ];

    /// Meta-schema URLs that identify this draft in `$schema`
    pub fn schema_urls(&self) -> [&'static str; 4] {
        match self {
            DraftVersion::Draft4 => [
                "http://json-schema.org/draft-04/schema",
                "https://json-schema.org/draft-04/schema",
                "http://json-schema.org/draft-04/schema#",
                "https://json-schema.org/draft-04/schema#",
            ],
            DraftVersion::Draft6 => [
                "http://json-schema.org/draft-06/schema",
                "https://json-schema.org/draft-06/schema",
                "http://json-schema.org/draft-06/schema#",
                "https://json-schema.org/draft-06/schema#",
            ],
            DraftVersion::Draft7 => [
                "http://json-schema.org/draft-07/schema",
                "https://json-schema.org/draft-07/schema",
                "http://json-schema.org/draft-07/schema#",
                "https://json-schema.org/draft-07/schema#",
            ],
            DraftVersion::Draft201909 => [
                "http://json-schema.org/draft/2019-09/schema",
                "https://json-schema.org/draft/2019-09/schema",
                "http://json-schema.org/draft/2019-09/schema#",
                "https://json-schema.org/draft/2019-09/schema#",
            ],
            DraftVersion::Draft202012 => [
                "http://json-schema.org/draft/2020-12/schema",
                "https://json-schema.org/draft/2020-12/schema",
                "http://json-schema.org/draft/2020-12/schema#",
                "https://json-schema.org/draft/2020-12/schema#",
            ],
        }
    }

    /// Detect the draft from a `$schema` URL; a trailing `#` is ignored.
    pub fn from_schema_url(url: &str) -> Option<DraftVersion> {
        let normalized = url.strip_suffix('#').unwrap_or(url);
        Self::ALL
            .into_iter()
            .find(|version| version.schema_urls().iter().any(|known| *known == normalized))
    }

    /// `id` for Draft 4, `$id` afterwards
    pub fn id_keyword(&self) -> &'static str {
        match self {
            DraftVersion::Draft4 => "id",
            _ => "$id",
        }
    }

    /// Draft 4 `exclusiveMaximum`/`exclusiveMinimum` are booleans modifying
    /// `maximum`/`minimum`; later drafts use standalone numeric limits.
    pub fn uses_numeric_exclusive_bounds(&self) -> bool {
        *self != DraftVersion::Draft4
    }

    pub fn uses_prefix_items(&self) -> bool {
        *self == DraftVersion::Draft202012
    }

    /// `dependentRequired`/`dependentSchemas` instead of `dependencies`
    pub fn uses_dependent_keywords(&self) -> bool {
        matches!(self, DraftVersion::Draft201909 | DraftVersion::Draft202012)
    }

    pub fn supports_const(&self) -> bool {
        *self != DraftVersion::Draft4
    }

    /// Short name, as accepted by `FromStr`
    pub fn name(&self) -> &'static str {
        match self {
            DraftVersion::Draft4 => "draft-04",
            DraftVersion::Draft6 => "draft-06",
            DraftVersion::Draft7 => "draft-07",
            DraftVersion::Draft201909 => "2019-09",
            DraftVersion::Draft202012 => "2020-12",
        }
    }
}

impl fmt::Display for DraftVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DraftVersion {
    type Err = SchemaError;

    /// Accepts short names (`draft4`, `draft-07`, `7`, `2019-09`, `draft2020-12`)
    /// as well as meta-schema URLs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(version) = Self::from_schema_url(s) {
            return Ok(version);
        }
        let lowered = s.trim().to_ascii_lowercase();
        let short = lowered
            .strip_prefix("draft")
            .unwrap_or(&lowered)
            .trim_start_matches(['-', '_', '/']);
        match short {
            "4" | "04" => Ok(DraftVersion::Draft4),
            "6" | "06" => Ok(DraftVersion::Draft6),
            "7" | "07" => Ok(DraftVersion::Draft7),
            "2019-09" | "201909" => Ok(DraftVersion::Draft201909),
            "2020-12" | "202012" => Ok(DraftVersion::Draft202012),
            _ => Err(SchemaError::UnknownDraftVersion {
                name: s.to_string(),
            }),
        }
    }
}
