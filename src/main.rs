#[macro_use]
extern crate derive_new;

pub mod cli;
pub mod convert;
pub mod data;
pub mod error;
pub mod report;

use cli::*;
use convert::{convert_semeval_2017, ConvertConfig};
use data::{JsonDatasetWriter, PipelineConfig, Split, TokenizePipeline};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("hy_sentiment=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input_root,
            output_root,
            dataset_name,
        } => {
            let config = ConvertConfig::new(input_root, output_root, dataset_name);
            let pipeline = TokenizePipeline::new(PipelineConfig::armenian())?;

            let report = convert_semeval_2017(&config, &pipeline, &JsonDatasetWriter)?;
            let report_path = report.save(&config.output_root)?;

            println!("\nConversion completed!");
            println!("  Dataset: {}", report.get_dataset_name());
            println!("  Output:  {}", config.output_root.display());
            println!("  Report:  {}", report_path.display());
            println!("  Time:    {}", report.get_duration().as_deref().unwrap_or(""));
        }

        Commands::Stats { output_root } => {
            let reports = report::list_reports(&output_root)?;
            println!("\nConversions in {}:", output_root.display());
            if reports.is_empty() {
                println!("No conversion reports found.");
                return Ok(());
            }

            println!(
                "{:<36} {:<16} {:<10} {:<18} {:<18} {:<18}",
                "Dataset", "Timestamp", "Duration", "Train (neg/pos)", "Dev (neg/pos)", "Test (neg/pos)"
            );
            println!("{}", "-".repeat(120));
            for entry in reports {
                let [train, dev, test] = [Split::Train, Split::Dev, Split::Test].map(|split| {
                    let s = entry.summary(split);
                    format!("{} ({}/{})", s.total, s.negative, s.positive)
                });
                println!(
                    "{:<36} {:<16} {:<10} {:<18} {:<18} {:<18}",
                    entry.get_dataset_name(),
                    entry.get_timestamp(),
                    entry.get_duration().as_deref().unwrap_or(""),
                    train,
                    dev,
                    test,
                );
            }
        }
    }
    Ok(())
}
