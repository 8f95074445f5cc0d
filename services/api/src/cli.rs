use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use outturn::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Outturn Standings Service",
    about = "Record construction project outturns and serve the delivery standings",
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
    /// Rate a sample portfolio and print the standings
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Bind host for the HTTP listener, overriding `APP_HOST`
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Bind port for the HTTP listener, overriding `APP_PORT`
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    // Bare invocation serves with default binding.
    match Cli::parse().command {
        Some(Command::Serve(args)) => server::run(args).await,
        Some(Command::Demo(args)) => run_demo(args),
        None => server::run(ServeArgs::default()).await,
    }
}
