use serde::Serialize;

use super::schema::{NumericSubset, ReservedColumn};

/// The three headline statistics of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MetricSnapshot {
    pub overall_gpa: f64,
    pub class_rank: i64,
    pub attendance_rate: f64,
}

impl MetricSnapshot {
    /// Aggregate the reserved columns of the numeric subset.
    ///
    /// Absent columns and an empty subset contribute `0`.
    pub fn from_numeric(numeric: &NumericSubset) -> Self {
        let column_mean = |which| mean_or_zero(numeric.reserved(which).unwrap_or(&[]));

        MetricSnapshot {
            overall_gpa: column_mean(ReservedColumn::Gpa),
            // `as` truncates toward zero (and maps NaN to 0).
            class_rank: column_mean(ReservedColumn::Rank) as i64,
            attendance_rate: column_mean(ReservedColumn::Attendance),
        }
    }

    /// GPA with two decimals, e.g. `3.85`.
    pub fn gpa_label(&self) -> String {
        format!("{:.2}", self.overall_gpa)
    }

    /// Rank as an ordinal, e.g. `8th`.
    pub fn rank_label(&self) -> String {
        ordinal(self.class_rank)
    }

    /// Attendance rounded to a whole percentage, e.g. `98%`.
    pub fn attendance_label(&self) -> String {
        format!("{:.0}%", self.attendance_rate)
    }
}

/// Arithmetic mean ignoring missing (`NaN`) cells. With nothing to
/// average, the mean of `[0]` is returned.
pub fn mean_or_zero(values: &[f64]) -> f64 {
    let (sum, count) = values
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn ordinal(n: i64) -> String {
    let suffix = match (n.rem_euclid(100), n.rem_euclid(10)) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::data::loader::load_csv_reader;
    use crate::pipeline::schema::numeric_subset;

    fn snapshot(csv: &str) -> MetricSnapshot {
        let ds = load_csv_reader(csv.as_bytes()).unwrap();
        MetricSnapshot::from_numeric(&numeric_subset(&ds))
    }

    #[test]
    fn empty_subset_is_all_zero() {
        assert_eq!(snapshot("Name\nAna\n"), MetricSnapshot::default());
        assert_eq!(snapshot("GPA,Rank\n"), MetricSnapshot::default());
    }

    #[test]
    fn means_of_reserved_columns() {
        let m = snapshot("GPA,Attendance,Rank\n3.5,97,7.1\n3.9,99,7.2\n");
        assert!((m.overall_gpa - 3.7).abs() < 1e-9);
        assert!((m.attendance_rate - 98.0).abs() < 1e-9);
        assert_eq!(m.class_rank, 7);
    }

    #[test]
    fn rank_truncates_rather_than_rounds() {
        assert_eq!(snapshot("Rank\n7.9\n8.9\n").class_rank, 8);
        assert_eq!(snapshot("Rank\n7.6\n7.8\n").class_rank, 7);
    }

    #[test]
    fn missing_cells_are_skipped() {
        let m = snapshot("GPA,Math\n3.0,1\n,2\n4.0,3\n");
        assert!((m.overall_gpa - 3.5).abs() < 1e-9);
    }

    #[test]
    fn lowercase_reserved_names_still_count() {
        let m = snapshot("gpa,attendance\n3.0,90\n");
        assert_eq!(m.overall_gpa, 3.0);
        assert_eq!(m.attendance_rate, 90.0);
    }

    #[test]
    fn non_numeric_gpa_column_falls_back_to_zero() {
        let m = snapshot("GPA,Math\nA,90\nB,80\n");
        assert_eq!(m.overall_gpa, 0.0);
    }

    #[test]
    fn labels() {
        let m = MetricSnapshot {
            overall_gpa: 3.849,
            class_rank: 8,
            attendance_rate: 97.6,
        };
        assert_eq!(m.gpa_label(), "3.85");
        assert_eq!(m.rank_label(), "8th");
        assert_eq!(m.attendance_label(), "98%");
    }

    #[test_case(0, "0th")]
    #[test_case(1, "1st")]
    #[test_case(2, "2nd")]
    #[test_case(3, "3rd")]
    #[test_case(11, "11th")]
    #[test_case(12, "12th")]
    #[test_case(13, "13th")]
    #[test_case(21, "21st")]
    #[test_case(102, "102nd")]
    #[test_case(111, "111th")]
    fn ordinal_suffixes(n: i64, expected: &str) {
        assert_eq!(ordinal(n), expected);
    }
}
