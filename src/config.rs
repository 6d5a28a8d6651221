use std::path::PathBuf;

use clap::Parser;

/// Command-line / environment configuration.
#[derive(Debug, Parser)]
#[command(name = "edutrack", version, about = "EduTrack – academic performance dashboard")]
pub struct Config {
    /// Records file to open on startup (.csv, .json or .parquet).
    #[arg(long, env = "EDUTRACK_DATA")]
    pub data: Option<PathBuf>,

    /// First pre-trained GPA model.
    #[arg(long, env = "EDUTRACK_MODEL_A", default_value = "models/model_a.json")]
    pub model_a: PathBuf,

    /// Second pre-trained GPA model.
    #[arg(long, env = "EDUTRACK_MODEL_B", default_value = "models/model_b.json")]
    pub model_b: PathBuf,

    /// Print the report for `--data` as JSON and exit instead of opening a window.
    #[arg(long, requires = "data")]
    pub json: bool,
}
