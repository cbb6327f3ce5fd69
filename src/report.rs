use crate::data::{label, DatasetSplits, Split, TokenizedExample};
use crate::error::{ConvertError, Result};
use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const REPORT_SUFFIX: &str = ".report.json";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSummary {
    pub total: usize,
    pub negative: usize,
    pub positive: usize,
}

impl SplitSummary {
    pub fn from_examples(data: &[TokenizedExample]) -> Self {
        let negative = data
            .iter()
            .filter(|x| x.sentiment == label::NEGATIVE)
            .count();
        Self {
            total: data.len(),
            negative,
            positive: data.len() - negative,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConversionReport {
    timestamp: String,
    dataset_name: String,
    input_dir: PathBuf,
    output_dir: PathBuf,
    duration: Option<String>,
    train: SplitSummary,
    dev: SplitSummary,
    test: SplitSummary,
}

impl ConversionReport {
    pub fn new(
        dataset_name: &str,
        input_dir: &Path,
        output_dir: &Path,
        splits: &DatasetSplits,
    ) -> Self {
        Self {
            timestamp: Local::now().format("%Y%m%d_%H%M%S").to_string(),
            dataset_name: dataset_name.to_string(),
            input_dir: input_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            duration: None,
            train: SplitSummary::from_examples(&splits.train),
            dev: SplitSummary::from_examples(&splits.dev),
            test: SplitSummary::from_examples(&splits.test),
        }
    }

    pub fn report_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!(
            "{}.{}{}",
            self.dataset_name, self.timestamp, REPORT_SUFFIX
        ))
    }

    pub fn save(&self, output_dir: &Path) -> Result<PathBuf> {
        let path = self.report_path(output_dir);
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConvertError::json(&path, e))?;
        fs::write(&path, content).map_err(|e| ConvertError::io(&path, e))?;
        Ok(path)
    }

    pub fn get_timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn get_dataset_name(&self) -> &str {
        &self.dataset_name
    }

    pub fn get_duration(&self) -> &Option<String> {
        &self.duration
    }

    pub fn set_duration(&mut self, duration: String) {
        self.duration = Some(duration);
    }

    pub fn summary(&self, split: Split) -> SplitSummary {
        match split {
            Split::Train => self.train,
            Split::Dev => self.dev,
            Split::Test => self.test,
        }
    }
}

/// Reports found in `output_dir`, newest first. Files that do not parse as a
/// report are skipped.
pub fn list_reports(output_dir: &Path) -> Result<Vec<ConversionReport>> {
    let mut reports = Vec::new();

    let entries = fs::read_dir(output_dir).map_err(|e| ConvertError::io(output_dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| ConvertError::io(output_dir, e))?.path();
        let is_report = path
            .file_name()
            .and_then(|n| n.to_str())
            .map_or(false, |n| n.ends_with(REPORT_SUFFIX));
        if !path.is_file() || !is_report {
            continue;
        }
        match fs::read_to_string(&path).map(|c| serde_json::from_str::<ConversionReport>(&c)) {
            Ok(Ok(report)) => reports.push(report),
            _ => tracing::warn!("Skipping unreadable report {}", path.display()),
        }
    }

    reports.sort_by(|a: &ConversionReport, b| b.timestamp.cmp(&a.timestamp));
    Ok(reports)
}
