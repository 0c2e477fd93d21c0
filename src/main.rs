use anyhow::Result;
use env_logger::Env;
use src_catalog::{CatalogError, cli::parse_args, run_catalog};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(missing) = err.downcast_ref::<CatalogError>() {
                eprintln!("Warning: {missing}");
            } else {
                eprintln!("Error: {err:?}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = parse_args()?;
    init_logging(config.verbosity);

    let summary = run_catalog(&config).await?;
    println!(
        "Wrote {} ({} files)",
        summary.output_path.display(),
        summary.file_count
    );
    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}
