mod config;
mod noise;
mod pulse;
mod trace;

use anyhow::{Context, Result};
use clap::Parser;
use config::TraceTemplate;
use rand::{SeedableRng, rngs::StdRng};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::PathBuf,
};
use trace::render_trace;
use tracing::info;

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Cli {
    /// JSON file describing the traces to simulate.
    #[clap(long)]
    template: PathBuf,

    /// Directory the trace files are written into.
    #[clap(long, default_value = "traces")]
    output_dir: PathBuf,

    /// Number of traces to generate.
    #[clap(long, default_value = "1")]
    num_traces: usize,

    /// Seed for the random number generator, for reproducible runs.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();
    let template: TraceTemplate = serde_json::from_str(
        &fs::read_to_string(&args.template)
            .with_context(|| format!("cannot read template {}", args.template.display()))?,
    )
    .with_context(|| format!("cannot parse template {}", args.template.display()))?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    fs::create_dir_all(&args.output_dir)?;
    for index in 0..args.num_traces {
        let trace = render_trace(&template, &mut rng);
        let path = args.output_dir.join(format!("trace_{index:04}.csv"));
        let mut file = BufWriter::new(File::create(&path)?);
        for sample in &trace {
            writeln!(file, "{sample}")?;
        }
        info!("wrote {}", path.display());
    }
    Ok(())
}
