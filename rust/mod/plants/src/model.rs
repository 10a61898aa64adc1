use serde::Serialize;
use serde_json::{Map, Value};

use crate::slug::AssetUrls;

/// Column holding the plant's display name.
pub const NAME_COLUMN: &str = "Name";
/// Column holding the plant's region label.
pub const CITY_COLUMN: &str = "City";

/// One row of the plant table: column name → value, in source order.
///
/// Columns other than `Name` and `City` are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PlantRecord {
    fields: Map<String, Value>,
}

impl PlantRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    /// String value of a column; `None` when missing, null or non-string.
    pub fn get_str(&self, column: &str) -> Option<&str> {
        self.fields.get(column).and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.get_str(NAME_COLUMN)
    }

    pub fn city(&self) -> Option<&str> {
        self.get_str(CITY_COLUMN)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Set the derived asset URL columns, replacing source columns of the same name.
    pub fn attach_asset_urls(&mut self, urls: AssetUrls) {
        self.fields.insert("model_url".into(), Value::String(urls.model_url));
        self.fields.insert("ios_model_url".into(), Value::String(urls.ios_model_url));
        self.fields.insert("image_url".into(), Value::String(urls.image_url));
    }
}

/// Value type of one CSV column, decided from all of its non-empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    /// Integer if every non-empty cell is an integer, Float if every one is
    /// a finite float, otherwise Text. An all-empty column is Text.
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a str>) -> Self {
        let mut kind = None;
        for raw in cells.into_iter().filter(|c| !c.is_empty()) {
            let cell = if raw.parse::<i64>().is_ok() {
                ColumnKind::Integer
            } else if raw.parse::<f64>().is_ok_and(f64::is_finite) {
                ColumnKind::Float
            } else {
                return ColumnKind::Text;
            };
            kind = Some(match (kind, cell) {
                (None, k) => k,
                (Some(ColumnKind::Integer), ColumnKind::Integer) => ColumnKind::Integer,
                _ => ColumnKind::Float,
            });
        }
        kind.unwrap_or(ColumnKind::Text)
    }

    /// Convert one raw cell; empty cells are always null.
    pub fn value(self, raw: &str) -> Value {
        if raw.is_empty() {
            return Value::Null;
        }
        match self {
            ColumnKind::Integer => raw.parse::<i64>().map(Value::from).unwrap_or_else(|_| text(raw)),
            ColumnKind::Float => raw.parse::<f64>().map(Value::from).unwrap_or_else(|_| text(raw)),
            ColumnKind::Text => text(raw),
        }
    }
}

fn text(raw: &str) -> Value {
    Value::String(raw.to_string())
}

/// Response payload for a single-plant lookup.
///
/// A miss is reported in the body, not through the status code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlantLookup {
    Found(PlantRecord),
    Missing { error: &'static str },
}

impl PlantLookup {
    pub const NOT_FOUND: &'static str = "Plant not found";

    pub fn missing() -> Self {
        PlantLookup::Missing {
            error: Self::NOT_FOUND,
        }
    }
}

impl From<Option<PlantRecord>> for PlantLookup {
    fn from(record: Option<PlantRecord>) -> Self {
        record.map(PlantLookup::Found).unwrap_or_else(PlantLookup::missing)
    }
}
