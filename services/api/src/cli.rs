use crate::commands::{run_check, run_rules, CheckArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fraud_detector::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Mini Fraud Detector",
    about = "Score payment transactions for fraud risk over HTTP or from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single transaction JSON document with the configured rules
    Check(CheckArgs),
    /// Print the active scoring rules as JSON
    Rules,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_check(args),
        Command::Rules => run_rules(),
    }
}
