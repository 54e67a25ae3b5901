mod loader;
mod parameters;
mod processing;

use anyhow::{Context, Result};
use clap::Parser;
use parameters::{CalibrationParameters, CfdParameters};
use processing::{FeatureRow, process_trace_file};
use rayon::prelude::*;
use std::{
    fs::File,
    io::{BufWriter, Write, stdout},
    path::PathBuf,
};
use tracing::info;
use wfd_feature_extraction::{FeatureExtractor, Real};

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Trace files to process, one digitized pulse per file.
    #[clap(required = true)]
    trace_files: Vec<PathBuf>,

    /// Digitizer sampling frequency in GHz.
    #[clap(long, default_value = "1.0")]
    sampling_frequency_ghz: Real,

    /// Write the feature table to this file instead of stdout.
    #[clap(long)]
    save_file: Option<PathBuf>,

    #[clap(flatten)]
    calibration: CalibrationParameters,

    #[clap(flatten)]
    cfd: CfdParameters,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();
    let extractor = FeatureExtractor::new(args.sampling_frequency_ghz)?;

    info!("processing {} trace file(s)", args.trace_files.len());
    let rows: Vec<FeatureRow> = args
        .trace_files
        .par_iter()
        .map(|path| process_trace_file(path, &extractor, &args.calibration, &args.cfd))
        .collect();

    let mut sink: BufWriter<Box<dyn Write>> = match &args.save_file {
        Some(path) => BufWriter::new(Box::new(
            File::create(path)
                .with_context(|| format!("cannot create save file {}", path.display()))?,
        )),
        None => BufWriter::new(Box::new(stdout())),
    };
    writeln!(sink, "{}", FeatureRow::HEADER)?;
    for row in rows {
        writeln!(sink, "{row}")?;
    }
    Ok(())
}
