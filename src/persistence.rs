//! Save/load of seating configurations.
//!
//! A configuration is stored as a pretty-printed JSON envelope
//! ([`ConfigPackage`]). Loading is two-staged so callers can reject a
//! package without an error path:
//!
//! 1. [`load_package`] parses the text and fills absent optional fields
//!    (`pre_assigned`, `disabled_seats`, `distanced_names`, `version`).
//!    Malformed JSON is reported as [`PersistenceError::Parse`].
//! 2. [`validate_package`] returns `false` when `people` is not an array,
//!    `layout` is missing, or `rows`/`cols` are not integers in
//!    `1..=MAX_LAYOUT_DIMENSION`.
//!
//! Keys written by earlier releases (`students`, `layout_type`,
//! `pre_assigned_seats`, `distanced_students`) are accepted on load.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{PersistenceError, Result};
use crate::models::{LayoutKind, SeatingConfig};

/// Envelope version written by this crate.
pub const PACKAGE_VERSION: &str = "1.0";

/// Upper bound accepted for `rows` and `cols` in a loaded package.
///
/// Keeps the seat count of any accepted package far from `usize` overflow.
pub const MAX_LAYOUT_DIMENSION: u64 = 1_000;

/// Legacy key → current key.
const LEGACY_KEYS: [(&str, &str); 4] = [
    ("students", "people"),
    ("layout_type", "layout"),
    ("pre_assigned_seats", "pre_assigned"),
    ("distanced_students", "distanced_names"),
];

/// Serialized form of a [`SeatingConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigPackage {
    /// Group display name.
    #[serde(default)]
    pub group_name: String,
    /// Roster.
    #[serde(alias = "students")]
    pub people: Vec<String>,
    /// Layout topology.
    #[serde(alias = "layout_type")]
    pub layout: LayoutKind,
    /// Rows or sections.
    pub rows: usize,
    /// Columns or rows per section.
    pub cols: usize,
    /// Pinned seats. JSON object keys are seat indices as strings.
    #[serde(default, alias = "pre_assigned_seats")]
    pub pre_assigned: BTreeMap<usize, String>,
    /// Disabled seats.
    #[serde(default)]
    pub disabled_seats: BTreeSet<usize>,
    /// Distanced names.
    #[serde(default, alias = "distanced_students")]
    pub distanced_names: Vec<String>,
    /// Envelope version.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    PACKAGE_VERSION.to_string()
}

impl ConfigPackage {
    /// Packages a configuration at the current version.
    pub fn from_config(config: &SeatingConfig) -> Self {
        Self {
            group_name: config.group_name.clone(),
            people: config.people.clone(),
            layout: config.layout,
            rows: config.rows,
            cols: config.cols,
            pre_assigned: config.pre_assigned.clone(),
            disabled_seats: config.disabled_seats.clone(),
            distanced_names: config.distanced_names.clone(),
            version: default_version(),
        }
    }

    /// Unpacks into a configuration.
    pub fn into_config(self) -> SeatingConfig {
        SeatingConfig {
            group_name: self.group_name,
            people: self.people,
            layout: self.layout,
            rows: self.rows,
            cols: self.cols,
            pre_assigned: self.pre_assigned,
            disabled_seats: self.disabled_seats,
            distanced_names: self.distanced_names,
        }
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        save_package(self)
    }

    /// Loads, validates and decodes a package.
    ///
    /// # Example
    ///
    /// ```
    /// use u_seating::persistence::ConfigPackage;
    ///
    /// let text = r#"{"people": ["A"], "layout": "grid", "rows": 1, "cols": 2}"#;
    /// let pkg = ConfigPackage::from_json(text).unwrap();
    /// assert_eq!(pkg.version, "1.0");
    /// assert!(pkg.pre_assigned.is_empty());
    ///
    /// let zero_rows = r#"{"people": ["A"], "layout": "grid", "rows": 0, "cols": 2}"#;
    /// assert!(ConfigPackage::from_json(zero_rows).is_err());
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        let doc = load_package(text)?;
        if !validate_package(&doc) {
            return Err(PersistenceError::InvalidPackage(
                format!(
                    "expected `people` array, `layout`, and integer `rows`/`cols` in 1..={MAX_LAYOUT_DIMENSION}"
                ),
            ));
        }
        doc.into_package()
    }
}

impl From<&SeatingConfig> for ConfigPackage {
    fn from(config: &SeatingConfig) -> Self {
        Self::from_config(config)
    }
}

impl SeatingConfig {
    /// Loads a configuration from package text.
    pub fn from_json(text: &str) -> Result<Self> {
        ConfigPackage::from_json(text).map(ConfigPackage::into_config)
    }

    /// Saves this configuration as package text.
    pub fn to_json(&self) -> Result<String> {
        ConfigPackage::from_config(self).to_json()
    }
}

/// A parsed package whose optional fields have been filled.
///
/// Not yet validated; see [`validate_package`].
#[derive(Debug, Clone, PartialEq)]
pub struct PackageDocument {
    fields: Map<String, Value>,
}

impl PackageDocument {
    /// Raw field value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Borrows the field map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Decodes into a typed package.
    ///
    /// Fails with [`PersistenceError::Schema`] when a field has the wrong
    /// shape (e.g. an unknown layout name).
    pub fn into_package(self) -> Result<ConfigPackage> {
        serde_json::from_value(Value::Object(self.fields)).map_err(PersistenceError::Schema)
    }
}

/// Serializes a package to pretty-printed JSON.
pub fn save_package(package: &ConfigPackage) -> Result<String> {
    serde_json::to_string_pretty(package).map_err(PersistenceError::Serialize)
}

/// Parses package text and fills absent optional fields.
pub fn load_package(text: &str) -> Result<PackageDocument> {
    let value: Value = serde_json::from_str(text).map_err(PersistenceError::Parse)?;
    let Value::Object(mut fields) = value else {
        return Err(PersistenceError::NotAnObject);
    };

    for (legacy, current) in LEGACY_KEYS {
        if let Some(v) = fields.remove(legacy) {
            if !fields.contains_key(current) {
                fields.insert(current.to_string(), v);
            }
        }
    }

    let defaults = [
        ("pre_assigned", Value::Object(Map::new())),
        ("disabled_seats", Value::Array(Vec::new())),
        ("distanced_names", Value::Array(Vec::new())),
        ("version", Value::String(PACKAGE_VERSION.to_string())),
    ];
    for (key, default) in defaults {
        if !fields.contains_key(key) {
            debug!("package field `{key}` absent, using default");
            fields.insert(key.to_string(), default);
        }
    }

    Ok(PackageDocument { fields })
}

/// Whether a loaded package carries the required fields with usable types.
pub fn validate_package(doc: &PackageDocument) -> bool {
    let dimension = |key: &str| {
        matches!(
            doc.get(key).and_then(Value::as_u64),
            Some(n) if (1..=MAX_LAYOUT_DIMENSION).contains(&n)
        )
    };

    matches!(doc.get("people"), Some(Value::Array(_)))
        && doc.get("layout").is_some()
        && dimension("rows")
        && dimension("cols")
}
