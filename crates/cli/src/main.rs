use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cutquote::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

mod scene;

#[derive(Parser)]
#[command(name = "quote")]
#[command(about = "Manufacturing quote estimator for 2D cut profiles")]
struct Cmd {
    /// Scene description files (JSON)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Arc discretization resolution
    #[arg(long, default_value_t = 100)]
    resolution: usize,

    /// Override the default material padding (inches)
    #[arg(long)]
    padding: Option<f64>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();

    let mut cfg = MachineCfg::default();
    if let Some(padding) = cmd.padding {
        cfg.padding = padding;
    }

    for file in &cmd.files {
        let profile = scene::load(file)?.into_profile();
        tracing::info!(
            file = %file.display(),
            vertices = profile.points().len(),
            curves = profile.curves().len(),
            "loaded scene"
        );
        let secs = seconds(&profile, &cfg);
        let dollars = cost(&profile, &cfg, cmd.resolution);
        println!(
            "{}: {:.1} s machine time, estimated cost ${:.2}",
            file.display(),
            secs,
            dollars
        );
    }
    Ok(())
}
