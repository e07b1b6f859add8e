use clap::{ArgAction, Parser};
use ihya_assets::Format;
use ihya_config::Overrides;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ihya")]
#[command(version, about = "Build the Ihya app's JSON assets", long_about = None)]
#[command(after_help = "EXAMPLES:
    ihya                              Build v5 assets with the default configuration
    ihya --format v1 -o build         Build legacy v1 assets into ./build
    ihya --print-config               Show the resolved configuration")]
pub struct Cli {
    /// Configuration file (defaults to config.toml in the user configuration directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Asset format to generate
    #[arg(short, long, value_parser = parse_format)]
    pub format: Option<Format>,

    /// Directory holding the SQLite databases
    #[arg(long, value_name = "DIR")]
    pub database_dir: Option<PathBuf>,

    /// Directory the JSON assets are written to
    #[arg(short, long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Commentary JSONL file
    #[arg(long, value_name = "PATH")]
    pub commentary: Option<PathBuf>,

    /// Indent the generated JSON
    #[arg(long)]
    pub pretty: bool,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,

    /// More output (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_format(value: &str) -> Result<Format, String> {
    value.parse().map_err(|e: ihya_assets::error::Error| (*e).to_string())
}

impl Cli {
    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "warn",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            format: self.format,
            database_dir: self.database_dir.clone(),
            output_dir: self.output_dir.clone(),
            commentary: self.commentary.clone(),
            pretty: self.pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["ihya"], "info")]
    #[case(&["ihya", "-v"], "debug")]
    #[case(&["ihya", "-vv"], "trace")]
    #[case(&["ihya", "-vvv"], "trace")]
    #[case(&["ihya", "-q"], "warn")]
    fn test_log_filter(#[case] args: &[&str], #[case] expected: &str) {
        assert_eq!(Cli::parse_from(args.iter().copied()).log_filter(), expected);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "ihya",
            "--format",
            "v1",
            "--database-dir",
            "db",
            "-o",
            "out",
            "--commentary",
            "tafsir.jsonl",
            "--pretty",
        ]);
        let overrides = cli.overrides();
        assert_eq!(overrides.format, Some(Format::V1));
        assert_eq!(overrides.database_dir, Some(PathBuf::from("db")));
        assert_eq!(overrides.output_dir, Some(PathBuf::from("out")));
        assert_eq!(overrides.commentary, Some(PathBuf::from("tafsir.jsonl")));
        assert!(overrides.pretty);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["ihya", "--format", "v3"]).is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["ihya", "-v", "-q"]).is_err());
    }
}
