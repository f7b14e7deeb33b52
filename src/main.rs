use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use jsonxml::convert_file;
use std::process::ExitCode;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert a JSON file into type-tagged XML", long_about = None)]
struct Cli {
    /// JSON input file (object or array at the top level)
    #[arg(value_name = "INPUT_JSON")]
    input: Utf8PathBuf,
    /// XML output file, overwritten if it exists
    #[arg(value_name = "OUTPUT_XML")]
    output: Utf8PathBuf,
}

fn run(cli: &Cli) -> Result<()> {
    let report = convert_file(&cli.input, &cli.output)?;
    if !report.warnings.is_empty() {
        tracing::warn!("{} values were skipped", report.warnings.len());
    }
    tracing::info!("{} elements written", report.elements);
    Ok(())
}

fn main() -> ExitCode {
    let _ = SubscriberBuilder::default()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("conversion of {} failed, no output written: {:#}", cli.input, e);
            ExitCode::FAILURE
        }
    }
}
