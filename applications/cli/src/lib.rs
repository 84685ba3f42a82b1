/// Soundcheck command-line front end
use clap::{Parser, ValueEnum};
use serde::Serialize;
use soundcheck::Verdict;

#[derive(Debug, Parser)]
#[command(name = "soundcheck")]
#[command(
    about = "Check whether the default audio output device is playing",
    long_about = "Check whether the default audio output device is playing.\n\n\
                  Exits with status 0 when audio is audible and 1 otherwise."
)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, env = "SOUNDCHECK_FORMAT")]
    pub format: OutputFormat,

    /// Print nothing; only set the exit status
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log each platform query failure to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "soundcheck=debug,soundcheck_cli=debug"
        } else {
            "soundcheck=warn,soundcheck_cli=warn"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `playing` / `silent` followed by the reason
    Text,
    /// The full verdict as a JSON object
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    playing: bool,
    #[serde(flatten)]
    verdict: &'a Verdict,
}

/// Render a verdict in the requested format
pub fn render(verdict: &Verdict, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let answer = if verdict.is_playing() {
                "playing"
            } else {
                "silent"
            };
            Ok(format!("{answer}\n{verdict}"))
        }
        OutputFormat::Json => {
            let report = Report {
                playing: verdict.is_playing(),
                verdict,
            };
            Ok(serde_json::to_string(&report)?)
        }
    }
}

/// Exit status for a verdict: 0 when playing, 1 otherwise
pub fn exit_status(verdict: &Verdict) -> u8 {
    u8::from(!verdict.is_playing())
}
