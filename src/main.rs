use clap::Parser;
use portfolio_lib::{bootstrap, cli};
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments first to get verbose flag
    let args = cli::Args::parse();

    if let Err(e) = bootstrap::init_tracing_subscriber(args.verbose) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    if args.interactive {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        return match cli::run_interactive(&args, stdin, &mut std::io::stdout()).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{:#}", e);
                ExitCode::FAILURE
            }
        };
    }

    match cli::run(&args).await {
        Ok(output) => {
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
