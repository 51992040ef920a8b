use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use body_measure_rs::logger;
use body_measure_rs::measurement_pipeline::{
    CANONICAL_WIDTH, EmptyContourPolicy, Foreground, MeasurementConfig, MeasurementPipeline,
};

use tracing::info;

/// Estimate body measurements from a front and a side photograph
#[derive(Parser, Debug)]
#[command(name = "body-measure")]
#[command(about = "Estimate body measurements from two photos", long_about = None)]
struct Args {
    /// Front-facing photo
    #[arg(long)]
    front: PathBuf,

    /// Side-facing photo
    #[arg(long)]
    side: PathBuf,

    /// Known height in centimeters (a placeholder is reported when omitted)
    #[arg(long)]
    height: Option<f64>,

    /// Width both photos are rescaled to
    #[arg(long, default_value_t = CANONICAL_WIDTH)]
    width: u32,

    /// Subject is brighter than the backdrop
    #[arg(long)]
    light_subject: bool,

    /// Fail when the front photo has no contours for arm length
    #[arg(long)]
    strict_empty: bool,

    /// Print per-stage timings to stderr
    #[arg(long)]
    timings: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init();

    let config = MeasurementConfig::builder()
        .canonical_width(args.width)
        .foreground(if args.light_subject {
            Foreground::Light
        } else {
            Foreground::Dark
        })
        .empty_contours(if args.strict_empty {
            EmptyContourPolicy::Reference
        } else {
            EmptyContourPolicy::Zero
        })
        .build();
    let pipeline = MeasurementPipeline::new(config);

    info!(width = pipeline.config().canonical_width, "Measurement pipeline initialized");

    let (measurements, timings) = pipeline
        .measure_files(&args.front, &args.side, args.height)
        .with_context(|| {
            format!(
                "measuring {} and {}",
                args.front.display(),
                args.side.display()
            )
        })?;

    if args.timings {
        eprintln!("{timings}");
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&measurements)?
    } else {
        serde_json::to_string(&measurements)?
    };
    println!("{json}");

    Ok(())
}
