use crate::utils::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the listings API. Key order follows the response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobRecord {
    pub fields: Map<String, Value>,
}

impl JobRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// 將 `jobs` 陣列中的第 `index` 個元素轉為記錄，非物件則回傳錯誤
    pub fn from_value(index: usize, value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(EtlError::InvalidRecordError {
                index,
                found: json_kind(&other).to_string(),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }
}

/// Rectangular view of a batch of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl JobTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row).map(|r| r[col].as_str())
    }
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub records: usize,
    pub columns: usize,
    pub output_path: Option<String>,
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
