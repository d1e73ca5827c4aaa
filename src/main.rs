use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use quizgen::{Config, logging};
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about = "Generate and take multiple-choice quizzes in the terminal", long_about = None)]
struct Args {
    /// Base URL of the quiz generation service
    #[arg(long, env = "QUIZGEN_BACKEND_URL")]
    backend_url: Option<String>,

    /// Never contact the service; build quizzes from the local question bank
    #[arg(long)]
    offline: bool,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON question bank merged over the built-in one
    #[arg(short, long)]
    bank: Option<PathBuf>,

    /// Pause before serving a quiz from the local bank, in milliseconds
    #[arg(long)]
    fallback_delay_ms: Option<u64>,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(url) = self.backend_url {
            config.backend_url = url;
        }
        if self.offline {
            config.offline = true;
        }
        if let Some(bank) = self.bank {
            config.question_bank = Some(bank);
        }
        if let Some(delay) = self.fallback_delay_ms {
            config.fallback_delay_ms = delay;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    args.apply(&mut config);

    logging::init(&config.log_file, &config.log_level)
        .with_context(|| format!("failed to open log file {}", config.log_file.display()))?;
    info!(
        backend = %config.backend_url,
        offline = config.offline,
        bank = ?config.question_bank,
        "starting quizgen"
    );

    let generator = quizgen::build_generator(&config)?;
    quizgen::run(generator)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config() -> Config {
        Config {
            backend_url: "http://file.example:9000".to_string(),
            offline: false,
            question_bank: Some(PathBuf::from("file-bank.json")),
            fallback_delay_ms: 250,
            log_level: "debug".to_string(),
            ..Config::default()
        }
    }

    fn apply(args: &[&str]) -> Config {
        let mut config = file_config();
        Args::try_parse_from(std::iter::once("quizgen").chain(args.iter().copied()))
            .unwrap()
            .apply(&mut config);
        config
    }

    #[test]
    fn test_flags_override_file_values() {
        let config = apply(&[
            "--backend-url",
            "http://cli.example:7000",
            "--offline",
            "--bank",
            "cli-bank.json",
            "--fallback-delay-ms",
            "0",
        ]);
        assert_eq!(config.backend_url, "http://cli.example:7000");
        assert!(config.offline);
        assert_eq!(config.question_bank, Some(PathBuf::from("cli-bank.json")));
        assert_eq!(config.fallback_delay_ms, 0);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unset_flags_keep_file_values() {
        let config = apply(&["--offline"]);
        assert!(config.offline);
        assert_eq!(config.question_bank, Some(PathBuf::from("file-bank.json")));
        assert_eq!(config.fallback_delay_ms, 250);
        if std::env::var_os("QUIZGEN_BACKEND_URL").is_none() {
            assert_eq!(config.backend_url, "http://file.example:9000");
        }
    }

    #[test]
    fn test_no_flags_leave_config_unchanged() {
        if std::env::var_os("QUIZGEN_BACKEND_URL").is_none() {
            assert_eq!(apply(&[]), file_config());
        }
    }
}
