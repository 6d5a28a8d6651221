use std::sync::Arc;

use pretty_assertions::assert_eq;

use edutrack::models::{FeatureMatrix, LinearRegressor, ModelError, Predictor};
use edutrack::pipeline::metrics::MetricSnapshot;
use edutrack::pipeline::predict::{
    GpaSeriesPreference, GpaSeriesSource, PredictionFailure, PredictorPair,
};
use edutrack::pipeline::projection::{self, ProjectionGroup};
use edutrack::{load_csv_reader, CellValue, Dataset, Pipeline};

struct Fixed(Vec<f64>);

impl Predictor for Fixed {
    fn name(&self) -> &str {
        "fixed"
    }
    fn predict(&self, _: &FeatureMatrix) -> Result<Vec<f64>, ModelError> {
        Ok(self.0.clone())
    }
}

struct Raising;

impl Predictor for Raising {
    fn name(&self) -> &str {
        "raising"
    }
    fn predict(&self, features: &FeatureMatrix) -> Result<Vec<f64>, ModelError> {
        Err(ModelError::FeatureCount {
            expected: 12,
            found: features.n_cols(),
        })
    }
}

fn dataset(csv: &str) -> Dataset {
    load_csv_reader(csv.as_bytes()).unwrap()
}

fn pipeline(a: impl Predictor + 'static, b: impl Predictor + 'static) -> Pipeline {
    Pipeline::new(PredictorPair::new(Some(Arc::new(a)), Some(Arc::new(b))))
}

const RECORDS: &str = "\
Name,GPA,Math,Attendance,Art,Rank
Ana,3.5,90,97,70,7.1
Ben,3.9,80,99,90,7.2
";

#[test]
fn empty_numeric_subset_gives_zero_snapshot() {
    let report = Pipeline::default().run(&dataset("Name,Status\nAna,ok\n"));
    assert_eq!(report.metrics, MetricSnapshot::default());
    assert_eq!(report.metrics.attendance_label(), "0%");
    assert!(report.subjects.is_empty());
    assert_eq!(
        report.prediction_failure,
        Some(PredictionFailure::EmptyFeatures { rows: 1, cols: 0 })
    );
}

#[test]
fn full_report_for_typical_upload() {
    let report = pipeline(Fixed(vec![3.0, 4.0]), Fixed(vec![3.5, 3.5])).run(&dataset(RECORDS));

    assert_eq!(report.row_count, 2);
    assert!((report.metrics.overall_gpa - 3.7).abs() < 1e-9);
    assert!((report.metrics.attendance_rate - 98.0).abs() < 1e-9);
    assert_eq!(report.metrics.class_rank, 7);

    let names: Vec<_> = report.subjects.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Math", "Art"]);

    assert_eq!(report.prediction, Some(vec![3.25, 3.75]));
    assert_eq!(report.prediction_failure, None);
    assert_eq!(report.recorded_gpa, Some(vec![3.5, 3.9]));
}

#[test]
fn raising_predictor_does_not_hide_other_outputs() {
    let report = pipeline(Raising, Fixed(vec![3.5, 3.5])).run(&dataset(RECORDS));

    assert_eq!(report.prediction, None);
    let failure = report.prediction_failure.clone().unwrap();
    assert!(matches!(failure, PredictionFailure::ShapeMismatch { expected: 12, found: 5, .. }));
    assert!(failure.to_string().contains("raising"));

    assert!((report.metrics.overall_gpa - 3.7).abs() < 1e-9);
    assert_eq!(report.subjects.len(), 2);
}

#[test]
fn prediction_length_matches_rows_with_real_models() {
    let ds = dataset(RECORDS);
    let a = LinearRegressor::new("a", vec![1.0, 0.0, 0.0, 0.0, 0.0], 0.0);
    let b = LinearRegressor::new("b", vec![0.0; 5], 1.0);
    let report = pipeline(a, b).run(&ds);
    let prediction = report.prediction.unwrap();
    assert_eq!(prediction.len(), ds.len());
    assert!((prediction[0] - (3.5 + 1.0) / 2.0).abs() < 1e-9);
}

#[test]
fn gpa_series_choice_is_left_to_caller() {
    let report = pipeline(Fixed(vec![3.0, 4.0]), Fixed(vec![3.5, 3.5])).run(&dataset(RECORDS));
    let auto = report.gpa_series(GpaSeriesPreference::RecordedFirst).unwrap();
    assert_eq!(auto.source, GpaSeriesSource::Recorded);
    let predicted = report.gpa_series(GpaSeriesPreference::Predicted).unwrap();
    assert_eq!(predicted.values, vec![3.25, 3.75]);

    let no_gpa = pipeline(Fixed(vec![3.0]), Fixed(vec![4.0])).run(&dataset("Math\n90\n"));
    let fallback = no_gpa.gpa_series(GpaSeriesPreference::RecordedFirst).unwrap();
    assert_eq!(fallback.source, GpaSeriesSource::Predicted);
    assert_eq!(fallback.values, vec![3.5]);
}

#[test]
fn assignment_projection_needs_all_five_columns() {
    let four = dataset("Assignment,Subject,Due Date,Score\nEssay,English,May 18,88\n");
    assert!(Pipeline::default().run(&four).assignments.is_none());

    let five =
        dataset("Assignment,Subject,Due Date,Score,Status\nEssay,English,May 18,88,Graded\n");
    let report = Pipeline::default().run(&five);
    assert!(report.assignments.is_some());
    assert!(report.calendar.is_none());
    assert!(report.messages.is_none());
}

#[test]
fn projected_rows_match_source_columns() {
    let ds = dataset(
        "Score,Assignment,Subject,Due Date,Status,GPA\n\
         95/100,Algebra Test,Mathematics,\"May 20, 2024\",Graded,3.9\n\
         --/--,Sketch,Art,\"May 28, 2024\",Upcoming,3.1\n",
    );
    let p = projection::project(&ds, ProjectionGroup::Assignments).unwrap();

    for (i, row) in ds.rows().iter().enumerate() {
        for (j, col) in p.columns.iter().enumerate() {
            let src = ds.column_index(col).unwrap();
            assert_eq!(p.rows[i][j], row[src]);
        }
    }
    assert_eq!(p.rows[1][0], CellValue::String("Sketch".into()));
}

#[test]
fn report_serializes_to_plain_json() {
    let report = Pipeline::default().run(&dataset(RECORDS));
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["metrics"]["class_rank"], 7);
    assert_eq!(json["subjects"][0]["name"], "Math");
    assert_eq!(json["prediction"], serde_json::Value::Null);
    assert_eq!(json["prediction_failure"]["kind"], "model_unavailable");
    assert_eq!(json["schema"]["columns"][0]["kind"], "non_numeric");
    assert_eq!(json["assignments"], serde_json::Value::Null);
}
