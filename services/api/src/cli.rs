use crate::demo::{run_categories, run_demo, run_resolve, DemoArgs, ResolveArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use vo_rates::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "VO Rate Desk",
    about = "Quote voice-over talent rates from the command line or serve them over HTTP",
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
    /// Browse the rate catalog and resolve one-off quotes
    Rates {
        #[command(subcommand)]
        command: RatesCommand,
    },
    /// Run an end-to-end CLI demo covering resolution and the quote cart
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum RatesCommand {
    /// List categories and their quotable sub-types
    Categories,
    /// Resolve a single selection to a rate
    Resolve(ResolveArgs),
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
        Command::Rates {
            command: RatesCommand::Categories,
        } => run_categories(),
        Command::Rates {
            command: RatesCommand::Resolve(args),
        } => run_resolve(args),
        Command::Demo(args) => run_demo(args),
    }
}
