use crate::report::{run_score, ScoreArgs};
use crate::server;
use aura_meter::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Aura Meter",
    about = "Score vision-analysis results and serve the aura scoring API",
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
    /// Score a vision document read from a file or stdin
    Score(ScoreArgs),
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
        Command::Score(args) => run_score(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["aura-meter-api"]).expect("no arguments parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_accepts_input_and_compact_flags() {
        let cli = Cli::try_parse_from([
            "aura-meter-api",
            "score",
            "--input",
            "vision.json",
            "--compact",
        ])
        .expect("score arguments parse");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(
                    args.input.as_deref(),
                    Some(std::path::Path::new("vision.json"))
                );
                assert!(args.compact);
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn serve_overrides_parse() {
        let cli = Cli::try_parse_from(["aura-meter-api", "serve", "--port", "8080"])
            .expect("serve arguments parse");

        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(8080));
                assert!(args.host.is_none());
            }
            other => panic!("expected serve command, got {other:?}"),
        }
    }
}
