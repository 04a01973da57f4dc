use clap::Parser;
use level_splitter::split;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about, version, author)]
struct Args {
    /// The level collection, levels separated by a `;` line and a blank line.
    input: PathBuf,

    /// The directory to create and fill with 1.txt, 2.txt, ... Must not exist yet.
    output_dir: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match split(&args.input, &args.output_dir) {
        Ok(report) => {
            info!(
                output_dir = %report.output_dir.display(),
                segments = report.segments,
                written = ?report.written,
                skipped = ?report.skipped,
                "split complete"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
