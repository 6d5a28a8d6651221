use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// CellValue – a single cell of an uploaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common dataframe dtypes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, ""),
        }
    }
}

impl CellValue {
    /// Interpret the value as an `f64`. Only integer and float cells coerce.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete uploaded table
// ---------------------------------------------------------------------------

/// One parsed upload: ordered columns and rows of cells aligned to them.
///
/// Every row has exactly `column_names.len()` cells; the loader pads short
/// rows with [`CellValue::Null`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    column_names: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    /// Build a dataset from column names and row cells.
    ///
    /// Rows shorter than the header are padded with nulls and longer rows
    /// are truncated, so that the column alignment invariant always holds.
    pub fn new(column_names: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = column_names.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Null);
                row
            })
            .collect();
        Dataset { column_names, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in file order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Position of a column by exact (case-sensitive) name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|c| c == name)
    }

    /// Iterate the cells of the column at `idx`.
    pub fn column_at(&self, idx: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().filter_map(move |row| row.get(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(
            vec!["Name".into(), "GPA".into()],
            vec![
                vec![CellValue::String("Ana".into()), CellValue::Float(3.5)],
                vec![CellValue::String("Ben".into())],
            ],
        )
    }

    #[test]
    fn short_rows_are_padded_with_null() {
        let ds = sample();
        assert_eq!(ds.rows()[1], vec![CellValue::String("Ben".into()), CellValue::Null]);
    }

    #[test]
    fn column_lookup_is_exact_and_absent_is_none() {
        let ds = sample();
        assert_eq!(ds.column_index("GPA"), Some(1));
        assert_eq!(ds.column_index("gpa"), None);
        assert_eq!(ds.column_index("Rank"), None);
        let gpa: Vec<_> = ds.column_at(1).collect();
        assert_eq!(gpa, [&CellValue::Float(3.5), &CellValue::Null]);
    }

    #[test]
    fn equality_is_by_variant_and_value() {
        assert_eq!(CellValue::Integer(3), CellValue::Integer(3));
        assert_ne!(CellValue::Integer(3), CellValue::Float(3.0));
        assert_ne!(CellValue::Null, CellValue::String(String::new()));
    }

    #[test]
    fn only_numbers_coerce_to_f64() {
        assert_eq!(CellValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(CellValue::Bool(true).as_f64(), None);
        assert_eq!(CellValue::String("3".into()).as_f64(), None);
        assert_eq!(CellValue::Null.as_f64(), None);
    }

    #[test]
    fn cells_serialize_as_plain_json_values() {
        let row = vec![
            CellValue::String("Essay".into()),
            CellValue::Integer(88),
            CellValue::Null,
        ];
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"["Essay",88,null]"#);
    }
}
