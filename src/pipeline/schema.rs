use serde::Serialize;

use crate::data::model::Dataset;
use crate::models::FeatureMatrix;

// ---------------------------------------------------------------------------
// Column classification
// ---------------------------------------------------------------------------

/// Column names with a fixed meaning on the dashboard. Matched
/// case-insensitively and never treated as subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReservedColumn {
    Gpa,
    Attendance,
    Rank,
}

impl ReservedColumn {
    pub const ALL: [ReservedColumn; 3] = [
        ReservedColumn::Gpa,
        ReservedColumn::Attendance,
        ReservedColumn::Rank,
    ];

    /// Canonical column name.
    pub fn label(self) -> &'static str {
        match self {
            ReservedColumn::Gpa => "GPA",
            ReservedColumn::Attendance => "Attendance",
            ReservedColumn::Rank => "Rank",
        }
    }

    /// Recognise a column name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numeric,
    NonNumeric,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub kind: ColumnKind,
    pub reserved: Option<ReservedColumn>,
}

/// Column names in file order with their type tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SchemaReport {
    pub columns: Vec<ColumnInfo>,
}

impl SchemaReport {
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn numeric_names(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|c| c.kind == ColumnKind::Numeric)
            .map(|c| c.name.as_str())
    }
}

// ---------------------------------------------------------------------------
// Numeric column subset
// ---------------------------------------------------------------------------

/// The uniformly numeric columns of a dataset, stored column-major.
/// Missing cells are `NaN`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericSubset {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
    n_rows: usize,
}

impl NumericSubset {
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.names.len()
    }

    /// True when there is nothing to average or predict on.
    pub fn is_empty(&self) -> bool {
        self.n_cols() == 0 || self.n_rows == 0
    }

    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// `(name, values)` pairs in column order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter().map(Vec::as_slice))
    }

    /// Values of a numeric column by exact name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        let idx = self.names.iter().position(|n| n == name)?;
        Some(&self.columns[idx])
    }

    /// Values of the first numeric column carrying a reserved name.
    pub fn reserved(&self, which: ReservedColumn) -> Option<&[f64]> {
        self.columns()
            .find(|(name, _)| ReservedColumn::from_name(name) == Some(which))
            .map(|(_, values)| values)
    }

    /// Row-major feature matrix (rows × numeric columns, column order kept).
    pub fn to_matrix(&self) -> FeatureMatrix {
        let mut values = Vec::with_capacity(self.n_rows * self.n_cols());
        for row in 0..self.n_rows {
            values.extend(self.columns.iter().map(|col| col[row]));
        }
        FeatureMatrix::new(self.names.clone(), self.n_rows, values)
    }
}

// ---------------------------------------------------------------------------
// Probe
// ---------------------------------------------------------------------------

/// Result of inspecting a dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Probe {
    pub schema: SchemaReport,
    pub numeric: NumericSubset,
}

/// Classify every column and derive the numeric subset.
///
/// A column is numeric when the dataset has rows and every non-null cell is
/// an integer or float; nulls are missing values and never fail coercion.
/// A header-only dataset therefore has no numeric columns.
pub fn probe(dataset: &Dataset) -> Probe {
    let mut columns = Vec::with_capacity(dataset.column_names().len());
    let mut names = Vec::new();
    let mut numeric_columns = Vec::new();

    for (idx, name) in dataset.column_names().iter().enumerate() {
        let numeric = !dataset.is_empty()
            && dataset
                .column_at(idx)
                .all(|cell| cell.is_null() || cell.as_f64().is_some());

        if numeric {
            names.push(name.clone());
            numeric_columns.push(
                dataset
                    .column_at(idx)
                    .map(|cell| cell.as_f64().unwrap_or(f64::NAN))
                    .collect(),
            );
        }

        columns.push(ColumnInfo {
            name: name.clone(),
            kind: if numeric {
                ColumnKind::Numeric
            } else {
                ColumnKind::NonNumeric
            },
            reserved: ReservedColumn::from_name(name),
        });
    }

    log::debug!("numeric columns: {names:?}");

    Probe {
        schema: SchemaReport { columns },
        numeric: NumericSubset {
            names,
            columns: numeric_columns,
            n_rows: dataset.len(),
        },
    }
}

/// Convenience for callers that only need the numeric view.
pub fn numeric_subset(dataset: &Dataset) -> NumericSubset {
    probe(dataset).numeric
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::data::loader::load_csv_reader;

    fn csv(text: &str) -> Dataset {
        load_csv_reader(text.as_bytes()).unwrap()
    }

    #[test]
    fn classifies_columns_in_order() {
        let ds = csv("Name,GPA,Math,Notes\nAna,3.5,90,ok\nBen,3.9,71,\n");
        let probe = probe(&ds);
        let kinds: Vec<_> = probe.schema.columns.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ColumnKind::NonNumeric,
                ColumnKind::Numeric,
                ColumnKind::Numeric,
                ColumnKind::NonNumeric,
            ]
        );
        assert_eq!(probe.numeric.column_names(), ["GPA", "Math"]);
        assert_eq!(probe.schema.columns[1].reserved, Some(ReservedColumn::Gpa));
    }

    #[test]
    fn one_bad_cell_makes_column_non_numeric() {
        let ds = csv("Score\n90\n85\nabsent\n");
        let probe = probe(&ds);
        assert_eq!(probe.schema.columns[0].kind, ColumnKind::NonNumeric);
        assert_eq!(probe.numeric.n_cols(), 0);
        assert_eq!(probe.numeric.n_rows(), 3);
    }

    #[test]
    fn mixed_int_and_float_is_numeric_and_nulls_become_nan() {
        let ds = csv("Score\n90\n85.5\n7\n");
        let subset = numeric_subset(&ds);
        let values = subset.column("Score").unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0], 90.0);
        assert_eq!(values[1], 85.5);

        let ds = csv("A,B\n1,\n2,3\n");
        let values = numeric_subset(&ds).column("B").unwrap().to_vec();
        assert!(values[0].is_nan());
        assert_eq!(values[1], 3.0);
    }

    #[test]
    fn zero_row_dataset_is_not_an_error() {
        let ds = csv("GPA,Math\n");
        let probe = probe(&ds);
        assert_eq!(probe.schema.columns.len(), 2);
        assert_eq!(probe.numeric.n_rows(), 0);
        assert!(probe.numeric.is_empty());
    }

    #[test]
    fn matrix_is_row_major_in_column_order() {
        let ds = csv("Name,A,B\nx,1,2\ny,3,4\n");
        let m = numeric_subset(&ds).to_matrix();
        assert_eq!(m.n_rows(), 2);
        assert_eq!(m.n_cols(), 2);
        assert_eq!(m.row(0), [1.0, 2.0]);
        assert_eq!(m.row(1), [3.0, 4.0]);
    }

    #[test_case("GPA", Some(ReservedColumn::Gpa))]
    #[test_case("gpa", Some(ReservedColumn::Gpa))]
    #[test_case("ATTENDANCE", Some(ReservedColumn::Attendance))]
    #[test_case("rAnK", Some(ReservedColumn::Rank))]
    #[test_case("Math", None)]
    #[test_case("GPA2", None)]
    fn reserved_names_ignore_case(name: &str, expected: Option<ReservedColumn>) {
        assert_eq!(ReservedColumn::from_name(name), expected);
    }

    #[test]
    fn reserved_lookup_is_case_insensitive() {
        let ds = csv("gpa,Rank\n3.0,4\n4.0,6\n");
        let subset = numeric_subset(&ds);
        assert_eq!(subset.reserved(ReservedColumn::Gpa), Some(&[3.0, 4.0][..]));
        assert_eq!(subset.reserved(ReservedColumn::Attendance), None);
    }
}
