use super::{TokenizedDocument, Tokenizer};
use crate::error::TokenizeError;
use tokenizers::pre_tokenizers::bert::BertPreTokenizer;
use tokenizers::{OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer};

const TOKENIZE_PROCESSOR: &str = "tokenize";

// Tokens that close a sentence when sentence splitting is on.
// U+0589 is the Armenian full stop.
const SENTENCE_TERMINATORS: &[&str] = &[".", "!", "?", "…", "\u{0589}"];

#[derive(new, Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    pub lang: String,
    /// Comma separated processor names.
    pub processors: String,
    /// Treat every document as a single sentence.
    pub tokenize_no_ssplit: bool,
}

impl PipelineConfig {
    /// Tokenization only, no sentence splitting, Armenian.
    pub fn armenian() -> Self {
        Self::new("hy".to_string(), TOKENIZE_PROCESSOR.to_string(), true)
    }
}

/// Word-level tokenizer built on the BERT pre-tokenizer: text is split on
/// whitespace and every punctuation character becomes a token of its own.
pub struct TokenizePipeline {
    config: PipelineConfig,
    pre_tokenizer: BertPreTokenizer,
}

impl TokenizePipeline {
    pub fn new(config: PipelineConfig) -> Result<Self, TokenizeError> {
        for processor in config.processors.split(',').map(str::trim) {
            if processor != TOKENIZE_PROCESSOR {
                return Err(TokenizeError::UnsupportedProcessor(processor.to_string()));
            }
        }

        tracing::debug!(
            "Tokenize pipeline for {} (sentence splitting {})",
            config.lang,
            if config.tokenize_no_ssplit { "off" } else { "on" }
        );

        Ok(Self {
            config,
            pre_tokenizer: BertPreTokenizer,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn words(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        let mut pretokenized = PreTokenizedString::from(text);
        self.pre_tokenizer
            .pre_tokenize(&mut pretokenized)
            .map_err(|e| TokenizeError::Pipeline(e.to_string()))?;

        Ok(pretokenized
            .get_splits(OffsetReferential::Original, OffsetType::Byte)
            .into_iter()
            .map(|(word, _, _)| word.to_string())
            .collect())
    }

    pub fn tokenize_document(&self, text: &str) -> Result<TokenizedDocument, TokenizeError> {
        let words = self.words(text)?;
        if words.is_empty() {
            return Ok(TokenizedDocument::default());
        }
        if self.config.tokenize_no_ssplit {
            return Ok(TokenizedDocument::new(vec![words]));
        }

        let mut sentences = Vec::new();
        let mut current = Vec::new();
        for word in words {
            let ends_sentence = SENTENCE_TERMINATORS.contains(&word.as_str());
            current.push(word);
            if ends_sentence {
                sentences.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            sentences.push(current);
        }

        Ok(TokenizedDocument::new(sentences))
    }
}

impl Tokenizer for TokenizePipeline {
    fn tokenize_batch(
        &self,
        documents: &[String],
    ) -> Result<Vec<TokenizedDocument>, TokenizeError> {
        documents
            .iter()
            .map(|doc| self.tokenize_document(doc))
            .collect()
    }
}
