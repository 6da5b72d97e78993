use crate::dashboard::{run_dashboard, DashboardArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use teamsfit::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "teamsfit",
    about = "Run the TeamsFit recruiting dashboard or walk through interview scheduling",
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
    /// Print pipeline metrics and the seeded jobs, candidates, and interviews
    Dashboard(DashboardArgs),
    /// Schedule the reference interview through the wizard and print every record it creates
    Demo(DemoArgs),
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
        Command::Dashboard(args) => run_dashboard(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["teamsfit"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_demo_overrides() {
        let cli = Cli::try_parse_from([
            "teamsfit",
            "demo",
            "--offset",
            "+02:00",
            "--at",
            "2025-10-05T16:00",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Demo(args)) => {
                assert_eq!(args.offset.as_deref(), Some("+02:00"));
                assert_eq!(args.at.as_deref(), Some("2025-10-05T16:00"));
            }
            other => panic!("expected demo command, got {other:?}"),
        }
    }
}
