use crate::domain::model::{JobRecord, JobTable};
use serde_json::Value;
use std::collections::HashMap;

/// Builds a table whose columns are the union of all record keys, in the
/// order they are first seen.
pub fn flatten(records: &[JobRecord]) -> JobTable {
    let mut columns: Vec<String> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for record in records {
        for key in record.keys() {
            if !positions.contains_key(key.as_str()) {
                positions.insert(key.as_str(), columns.len());
                columns.push(key.clone());
            }
        }
    }

    let rows = records
        .iter()
        .map(|record| {
            let mut row = vec![String::new(); columns.len()];
            for (key, value) in &record.fields {
                row[positions[key.as_str()]] = render_cell(value);
            }
            row
        })
        .collect();

    JobTable { columns, rows }
}

/// 將 JSON 值轉為 CSV 儲存格文字
pub fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        nested @ (Value::Array(_) | Value::Object(_)) => nested.to_string(),
    }
}
