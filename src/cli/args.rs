//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Lectern theme engine CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: lectern.toml)
    #[arg(short = 'C', long, default_value = "lectern.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Show per-file debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Rewrite absolute-rooted references in a built site to relative paths
    #[command(visible_alias = "rw")]
    Rewrite {
        /// Site output directory (default: _site)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,
    },

    /// Expand theme tags in a markdown source and print the HTML fragment
    #[command(visible_alias = "r")]
    Render {
        /// Markdown source file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Also relativize references as if published at this directory
        #[arg(long, value_name = "DIR")]
        page_dir: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_args() {
        let cli = Cli::try_parse_from(["lectern", "rewrite", "public"]).unwrap();
        match cli.command {
            Commands::Rewrite { dir } => assert_eq!(dir, Some(PathBuf::from("public"))),
            _ => panic!("expected rewrite"),
        }
    }

    #[test]
    fn test_render_args() {
        let cli =
            Cli::try_parse_from(["lectern", "render", "week1.md", "--page-dir", "weeks/1"])
                .unwrap();
        match cli.command {
            Commands::Render { file, page_dir } => {
                assert_eq!(file, PathBuf::from("week1.md"));
                assert_eq!(page_dir.as_deref(), Some("weeks/1"));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_config_default() {
        let cli = Cli::try_parse_from(["lectern", "rewrite"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("lectern.toml"));
        assert!(!cli.verbose);
    }
}
