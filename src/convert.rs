use crate::data::reader::read_file;
use crate::data::tokenizer::tokenize;
use crate::data::{DatasetSplits, DatasetWriter, Split, TokenizedExample, Tokenizer};
use crate::error::{ConvertError, Result};
use crate::report::ConversionReport;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const DATASET_NAME: &str = "hy_SemEval2017Task4translated";

#[derive(new, Clone, Debug)]
pub struct ConvertConfig {
    /// Root of the raw sentiment corpora.
    pub input_root: PathBuf,
    /// Root that receives the processed datasets.
    pub output_root: PathBuf,
    pub dataset_name: String,
}

impl ConvertConfig {
    pub fn corpus_dir(&self) -> PathBuf {
        self.input_root
            .join("armenian")
            .join("SemEval2017Task4translated")
    }

    pub fn split_file(&self, split: Split) -> PathBuf {
        self.corpus_dir().join(split.source_file())
    }
}

/// Read and tokenize one split file.
pub fn read_split(path: &Path, tokenizer: &dyn Tokenizer) -> Result<Vec<TokenizedExample>> {
    let examples = read_file(path)?;
    tokenize(examples, tokenizer).map_err(|source| ConvertError::Tokenize {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert the test, dev and train files (in that order) and hand all three
/// splits to `writer`.
pub fn convert_semeval_2017(
    config: &ConvertConfig,
    tokenizer: &dyn Tokenizer,
    writer: &dyn DatasetWriter,
) -> Result<ConversionReport> {
    let start_time = Instant::now();
    tracing::info!("Converting {}", config.corpus_dir().display());

    let mut splits = DatasetSplits::default();
    for split in Split::PROCESSING_ORDER {
        let data = read_split(&config.split_file(split), tokenizer)?;
        splits.set(split, data);
    }

    println!("Total train items: {:8}", splits.train.len());
    println!("Total dev items:   {:8}", splits.dev.len());
    println!("Total test items:  {:8}", splits.test.len());

    writer.write_dataset(&splits, &config.output_root, &config.dataset_name)?;

    let mut report = ConversionReport::new(
        &config.dataset_name,
        &config.corpus_dir(),
        &config.output_root,
        &splits,
    );
    report.set_duration(format!("{:.2?}", start_time.elapsed()));
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tokenizer::tests::WhitespaceTokenizer;
    use crate::data::{JsonDatasetWriter, PipelineConfig, TokenizePipeline, TokenizedDocument};
    use crate::error::{FormatError, TokenizeError};
    use std::cell::RefCell;
    use std::fs;

    const HEADER: &str = "id,topic,user,label,text\n";

    #[derive(Default)]
    struct RecordingWriter {
        calls: RefCell<Vec<(usize, usize, usize, PathBuf, String)>>,
    }

    impl DatasetWriter for RecordingWriter {
        fn write_dataset(
            &self,
            splits: &DatasetSplits,
            out_dir: &Path,
            dataset_name: &str,
        ) -> Result<Vec<PathBuf>> {
            self.calls.borrow_mut().push((
                splits.train.len(),
                splits.dev.len(),
                splits.test.len(),
                out_dir.to_path_buf(),
                dataset_name.to_string(),
            ));
            Ok(Vec::new())
        }
    }

    /// Remembers the first document of every batch it sees.
    #[derive(Default)]
    struct RecordingTokenizer {
        batches: RefCell<Vec<String>>,
    }

    impl Tokenizer for RecordingTokenizer {
        fn tokenize_batch(
            &self,
            documents: &[String],
        ) -> std::result::Result<Vec<TokenizedDocument>, TokenizeError> {
            if let Some(first) = documents.first() {
                self.batches.borrow_mut().push(first.clone());
            }
            WhitespaceTokenizer.tokenize_batch(documents)
        }
    }

    fn setup(test: &str, dev: &str, train: &str) -> (tempfile::TempDir, ConvertConfig) {
        let dir = tempfile::tempdir().unwrap();
        let config = ConvertConfig::new(
            dir.path().join("sentiment"),
            dir.path().join("processed"),
            DATASET_NAME.to_string(),
        );
        fs::create_dir_all(config.corpus_dir()).unwrap();
        for (split, body) in [(Split::Test, test), (Split::Dev, dev), (Split::Train, train)] {
            fs::write(config.split_file(split), format!("{HEADER}{body}")).unwrap();
        }
        (dir, config)
    }

    #[test]
    fn test_split_paths() {
        let config = ConvertConfig::new("/data/sentiment".into(), "/out".into(), DATASET_NAME.into());
        assert_eq!(
            config.split_file(Split::Dev),
            PathBuf::from("/data/sentiment/armenian/SemEval2017Task4translated/SentimentDev_B.csv")
        );
    }

    #[test]
    fn test_empty_files_still_written() {
        let (_dir, config) = setup("", "", "");
        let writer = RecordingWriter::default();

        let report = convert_semeval_2017(&config, &WhitespaceTokenizer, &writer).unwrap();

        let calls = writer.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (train, dev, test, out_dir, name) = &calls[0];
        assert_eq!((*train, *dev, *test), (0, 0, 0));
        assert_eq!(out_dir, &config.output_root);
        assert_eq!(name, DATASET_NAME);
        assert_eq!(report.summary(Split::Train).total, 0);
        assert!(report.get_duration().is_some());
    }

    #[test]
    fn test_files_read_test_dev_train() {
        let (_dir, config) = setup(
            "1,x,y,positive,\"from test\"\n",
            "1,x,y,negative,\"from dev\"\n2,x,y,positive,\"dev again\"\n",
            "1,x,y,negative,\"from train\"\n",
        );
        let tokenizer = RecordingTokenizer::default();
        let writer = RecordingWriter::default();

        let report = convert_semeval_2017(&config, &tokenizer, &writer).unwrap();

        assert_eq!(
            *tokenizer.batches.borrow(),
            vec!["from test", "from dev", "from train"]
        );
        assert_eq!(writer.calls.borrow()[0].0, 1);
        assert_eq!(writer.calls.borrow()[0].1, 2);
        assert_eq!(writer.calls.borrow()[0].2, 1);
        assert_eq!(report.summary(Split::Dev).positive, 1);
        assert_eq!(report.summary(Split::Dev).negative, 1);
    }

    #[test]
    fn test_bad_label_aborts_before_writing() {
        let (_dir, config) = setup("", "1,x,y,neutral,\"meh\"\n", "");
        let writer = RecordingWriter::default();

        let err = convert_semeval_2017(&config, &WhitespaceTokenizer, &writer).unwrap_err();

        match &err {
            ConvertError::Format { path, source } => {
                assert!(path.ends_with("SentimentDev_B.csv"));
                assert!(matches!(source, FormatError::Label { line_idx: 1, .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(writer.calls.borrow().is_empty());
    }

    #[test]
    fn test_blank_text_aborts_before_writing() {
        let (_dir, config) = setup(
            "1,x,y,positive,\"\"\n2,x,y,negative,\"   \"\n",
            "",
            "",
        );
        let pipeline = TokenizePipeline::new(PipelineConfig::armenian()).unwrap();

        let err = convert_semeval_2017(&config, &pipeline, &JsonDatasetWriter).unwrap_err();

        match &err {
            ConvertError::Tokenize { path, source } => {
                assert!(path.ends_with("SentimentTest_B.csv"));
                assert!(matches!(source, TokenizeError::EmptyDocument { index: 0 }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("line 1"));
        assert!(!config.output_root.exists());
    }

    #[test]
    fn test_missing_split_file() {
        let (_dir, config) = setup("", "", "");
        fs::remove_file(config.split_file(Split::Train)).unwrap();

        let err = convert_semeval_2017(&config, &WhitespaceTokenizer, &RecordingWriter::default())
            .unwrap_err();
        assert!(matches!(err, ConvertError::Io { ref path, .. } if path.ends_with("SentimentTrain_B.csv")));
    }

    #[test]
    fn test_end_to_end_json() {
        let (_dir, config) = setup(
            "1,x,y,positive,\"I love this\"\n",
            "",
            "1,x,y,negative,\"not, good\"\n",
        );

        convert_semeval_2017(&config, &WhitespaceTokenizer, &JsonDatasetWriter).unwrap();

        let train = fs::read_to_string(
            config
                .output_root
                .join("hy_SemEval2017Task4translated.train.json"),
        )
        .unwrap();
        let train: Vec<TokenizedExample> = serde_json::from_str(&train).unwrap();
        assert_eq!(train, vec![TokenizedExample::new(0, vec!["not,".into(), "good".into()])]);

        let test = fs::read_to_string(
            config
                .output_root
                .join("hy_SemEval2017Task4translated.test.json"),
        )
        .unwrap();
        let test: Vec<TokenizedExample> = serde_json::from_str(&test).unwrap();
        assert_eq!(test[0].sentiment, 1);
        assert_eq!(test[0].text, vec!["I", "love", "this"]);
    }
}
