mod app;
mod color;
mod config;
mod state;
mod ui;

use anyhow::Context;
use clap::Parser;
use eframe::egui;

use app::EduTrackApp;
use config::Config;
use edutrack::pipeline::predict::PredictorPair;
use edutrack::Pipeline;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::parse();

    // Models are loaded once; a missing file leaves that model absent.
    let pipeline = Pipeline::new(PredictorPair::load(&config.model_a, &config.model_b));

    if config.json {
        let path = config.data.as_deref().context("--json needs --data")?;
        let dataset = edutrack::load_file(path)
            .with_context(|| format!("loading {}", path.display()))?;
        let report = pipeline.run(&dataset);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut app = EduTrackApp::new(pipeline);
    if let Some(path) = &config.data {
        app.state.open_path(path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "EduTrack – Academic Performance",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard window: {e}"))
}
