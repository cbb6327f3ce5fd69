pub use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::convert::DATASET_NAME;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert the Armenian SemEval 2017 Task 4 corpus to a tokenized dataset
    Convert {
        /// Directory holding the raw sentiment corpora
        #[arg(long, env = "SENTIMENT_BASE")]
        input_root: PathBuf,

        /// Directory that receives processed datasets
        #[arg(long, env = "SENTIMENT_DATA_DIR")]
        output_root: PathBuf,

        /// Prefix of the written dataset files
        #[arg(long, default_value = DATASET_NAME)]
        dataset_name: String,
    },

    /// List previous conversions found in the output directory
    Stats {
        /// Directory that receives processed datasets
        #[arg(long, env = "SENTIMENT_DATA_DIR")]
        output_root: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_args() {
        let cli = Cli::try_parse_from([
            "hy-sentiment",
            "convert",
            "--input-root",
            "/raw",
            "--output-root",
            "/processed",
        ])
        .unwrap();

        match cli.command {
            Commands::Convert {
                input_root,
                output_root,
                dataset_name,
            } => {
                assert_eq!(input_root, PathBuf::from("/raw"));
                assert_eq!(output_root, PathBuf::from("/processed"));
                assert_eq!(dataset_name, DATASET_NAME);
            }
            Commands::Stats { .. } => panic!("expected convert"),
        }
    }

    #[test]
    fn test_stats_args() {
        let cli =
            Cli::try_parse_from(["hy-sentiment", "stats", "--output-root", "/processed"]).unwrap();
        assert!(matches!(cli.command, Commands::Stats { output_root } if output_root == PathBuf::from("/processed")));
    }
}
