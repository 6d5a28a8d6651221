use serde::Serialize;

use super::metrics::mean_or_zero;
use super::schema::{NumericSubset, ReservedColumn};

/// Mean score of one subject column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectScore {
    pub name: String,
    /// Unclamped column mean.
    pub mean: f64,
}

impl SubjectScore {
    /// Whole percentage clamped to `0..=100` for a progress indicator.
    pub fn progress_percent(&self) -> u8 {
        if self.mean.is_nan() {
            return 0;
        }
        self.mean.clamp(0.0, 100.0) as u8
    }

    /// Progress bar fill, `0.0..=1.0`.
    pub fn progress_fraction(&self) -> f32 {
        f32::from(self.progress_percent()) / 100.0
    }
}

/// Every non-reserved numeric column with its mean, in column order.
pub fn subject_scores(numeric: &NumericSubset) -> Vec<SubjectScore> {
    numeric
        .columns()
        .filter(|(name, _)| ReservedColumn::from_name(name).is_none())
        .map(|(name, values)| SubjectScore {
            name: name.to_string(),
            mean: mean_or_zero(values),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data::loader::load_csv_reader;
    use crate::pipeline::schema::numeric_subset;

    fn scores(csv: &str) -> Vec<SubjectScore> {
        let ds = load_csv_reader(csv.as_bytes()).unwrap();
        subject_scores(&numeric_subset(&ds))
    }

    #[test]
    fn reserved_columns_are_excluded_and_order_kept() {
        let s = scores("GPA,Math,Attendance,Art\n3.5,90,95,70\n3.7,80,97,90\n");
        let names: Vec<_> = s.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Math", "Art"]);
        assert_eq!(s[0].mean, 85.0);
        assert_eq!(s[1].mean, 80.0);
    }

    #[test]
    fn reserved_match_ignores_case() {
        let s = scores("gpa,RANK,attendance,Science\n3,1,90,77\n");
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].name, "Science");
    }

    #[test]
    fn non_numeric_columns_are_not_subjects() {
        let s = scores("Name,History\nAna,88\n");
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].name, "History");
    }

    #[test]
    fn mean_is_stored_unclamped_and_clamped_for_display() {
        let s = scores("Bonus,Penalty\n150,-10\n130,-30\n");
        assert_eq!(s[0].mean, 140.0);
        assert_eq!(s[0].progress_percent(), 100);
        assert_eq!(s[1].mean, -20.0);
        assert_eq!(s[1].progress_percent(), 0);
        assert_eq!(s[1].progress_fraction(), 0.0);
    }

    #[test]
    fn fractional_mean_truncates_for_display() {
        let score = SubjectScore {
            name: "Math".into(),
            mean: 92.7,
        };
        assert_eq!(score.progress_percent(), 92);
        assert!((score.progress_fraction() - 0.92).abs() < 1e-6);
    }
}
