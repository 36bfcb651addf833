use crate::demo::{run_demo, run_score_preview, DemoArgs, ScorePreviewArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use scorecard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Business Scorecard Service",
    about = "Run the scorecard API or exercise the scoring engine from the command line",
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
    /// Work with the scoring engine directly
    Score {
        #[command(subcommand)]
        command: ScoreCommand,
    },
    /// Run an end-to-end demo: several businesses, two periods, portfolio rollup
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ScoreCommand {
    /// Score a set of inputs and print the breakdown without persisting
    Preview(ScorePreviewArgs),
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
        Command::Score {
            command: ScoreCommand::Preview(args),
        } => run_score_preview(args),
        Command::Demo(args) => run_demo(args),
    }
}
