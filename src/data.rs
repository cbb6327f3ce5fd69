mod dataset;
pub mod label;
pub mod reader;
pub mod tokenizer;
pub mod writer;

pub use dataset::{DatasetSplits, RawExample, SentimentDatum, Split, TokenizedExample};
pub use tokenizer::{PipelineConfig, TokenizePipeline, TokenizedDocument, Tokenizer};
pub use writer::{DatasetWriter, JsonDatasetWriter};
