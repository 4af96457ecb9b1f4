use std::collections::HashMap;

use serde::Serialize;

use crate::model::metrics::serialize_ratio;

static MISSING: CellValue = CellValue::Missing;

/// A source cell as received from the table loader.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Missing,
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Missing => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// One source record keyed by column name. Columns that were not supplied read as missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    fields: HashMap<String, CellValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.fields.insert(column.into(), value.into());
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn get(&self, column: &str) -> &CellValue {
        self.fields.get(column).unwrap_or(&MISSING)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, CellValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// A derived and classified search-term row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub campaign: String,
    pub ad_group: String,
    pub match_type: String,
    pub term: String,
    pub impressions: f64,
    pub clicks: f64,
    pub cost: f64,
    pub sales: f64,
    pub orders: f64,
    pub ctr: f64,
    pub cvr: f64,
    #[serde(serialize_with = "serialize_ratio")]
    pub acos: f64,
    pub is_good: bool,
    pub is_bad: bool,
}
