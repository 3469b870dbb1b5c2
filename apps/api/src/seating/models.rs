use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ORGANIZATION_COLUMN: &str = "Organization";
pub const DEFAULT_NAME_COLUMN: &str = "Name";
pub const DEFAULT_MIN_SPACING: usize = 2;

/// Grouping key used for records whose organization field is absent or empty.
pub const UNKNOWN_ORGANIZATION: &str = "Unknown";

/// One candidate row: field name to field value, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Value of `field`, or `""` when the record has no such field.
    pub fn value_or_empty(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }
}

#[cfg(test)]
impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parsed tabular input: the header row plus one record per data row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }
}

/// A same-organization pair seated within the minimum spacing.
/// Positions are 1-based seat numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub position_a: usize,
    pub position_b: usize,
    pub organization: String,
    pub observed_spacing: usize,
}

/// Options controlling parsing, arrangement and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingOptions {
    pub organization_column: String,
    /// Only used for presentation and export.
    pub name_column: String,
    pub min_spacing: usize,
    pub randomize_order: bool,
    pub has_header_row: bool,
    pub preserve_other_columns: bool,
    /// Makes `randomize_order` reproducible when set.
    pub shuffle_seed: Option<u64>,
}

impl Default for SeatingOptions {
    fn default() -> Self {
        Self {
            organization_column: DEFAULT_ORGANIZATION_COLUMN.to_string(),
            name_column: DEFAULT_NAME_COLUMN.to_string(),
            min_spacing: DEFAULT_MIN_SPACING,
            randomize_order: false,
            has_header_row: true,
            preserve_other_columns: true,
            shuffle_seed: None,
        }
    }
}

/// Per-request overrides merged over the server defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeatingOverrides {
    pub organization_column: Option<String>,
    pub name_column: Option<String>,
    pub min_spacing: Option<usize>,
    pub randomize_order: Option<bool>,
    pub has_header_row: Option<bool>,
    pub preserve_other_columns: Option<bool>,
    pub shuffle_seed: Option<u64>,
}

impl SeatingOverrides {
    pub fn apply(&self, base: &SeatingOptions) -> SeatingOptions {
        SeatingOptions {
            organization_column: self
                .organization_column
                .as_deref()
                .map(str::trim)
                .unwrap_or(&base.organization_column)
                .to_string(),
            name_column: self
                .name_column
                .as_deref()
                .map(str::trim)
                .unwrap_or(&base.name_column)
                .to_string(),
            min_spacing: self.min_spacing.unwrap_or(base.min_spacing),
            randomize_order: self.randomize_order.unwrap_or(base.randomize_order),
            has_header_row: self.has_header_row.unwrap_or(base.has_header_row),
            preserve_other_columns: self
                .preserve_other_columns
                .unwrap_or(base.preserve_other_columns),
            shuffle_seed: self.shuffle_seed.or(base.shuffle_seed),
        }
    }
}
