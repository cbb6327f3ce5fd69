mod pipeline;

pub use pipeline::{PipelineConfig, TokenizePipeline};

use super::dataset::{RawExample, TokenizedExample};
use crate::error::TokenizeError;

/// Tokens of one input document, grouped by sentence.
#[derive(new, Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenizedDocument {
    pub sentences: Vec<Vec<String>>,
}

impl TokenizedDocument {
    /// Tokens of the first sentence, `None` if the document had none.
    pub fn into_first_sentence(self) -> Option<Vec<String>> {
        self.sentences.into_iter().next()
    }
}

pub trait Tokenizer {
    /// Tokenize every document independently. Implementations return one
    /// `TokenizedDocument` per input, in input order.
    fn tokenize_batch(&self, documents: &[String])
        -> Result<Vec<TokenizedDocument>, TokenizeError>;
}

/// Replace the text of each example with its tokens.
///
/// Only the first sentence of each document is kept, so `tokenizer` should
/// have sentence splitting turned off. Documents are matched to examples by
/// position; a count mismatch is an error rather than a silent truncation.
/// A document without any sentence (blank text) is an error as well.
pub fn tokenize(
    examples: Vec<RawExample>,
    tokenizer: &dyn Tokenizer,
) -> Result<Vec<TokenizedExample>, TokenizeError> {
    let docs: Vec<String> = examples.iter().map(|x| x.text.clone()).collect();
    let out_docs = tokenizer.tokenize_batch(&docs)?;

    if out_docs.len() != examples.len() {
        return Err(TokenizeError::Alignment {
            expected: examples.len(),
            found: out_docs.len(),
        });
    }

    examples
        .into_iter()
        .zip(out_docs)
        .enumerate()
        .map(|(index, (datum, doc))| {
            let tokens = doc
                .into_first_sentence()
                .ok_or(TokenizeError::EmptyDocument { index })?;
            Ok(datum.with_tokens(tokens))
        })
        .collect()
}
