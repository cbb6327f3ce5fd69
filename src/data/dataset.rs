use serde::{Deserialize, Serialize};
use std::fmt;

// One labeled example. `T` is the raw text before tokenization and the
// token list after it.
#[derive(new, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDatum<T> {
    pub sentiment: u8,
    pub text: T,
}

pub type RawExample = SentimentDatum<String>;
pub type TokenizedExample = SentimentDatum<Vec<String>>;

impl RawExample {
    pub fn with_tokens(self, tokens: Vec<String>) -> TokenizedExample {
        SentimentDatum::new(self.sentiment, tokens)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Split {
    Train,
    Dev,
    Test,
}

impl Split {
    /// Order in which the source files are read.
    pub const PROCESSING_ORDER: [Split; 3] = [Split::Test, Split::Dev, Split::Train];

    pub fn name(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Dev => "dev",
            Split::Test => "test",
        }
    }

    /// Source file of this split inside the corpus directory.
    pub fn source_file(&self) -> &'static str {
        match self {
            Split::Train => "SentimentTrain_B.csv",
            Split::Dev => "SentimentDev_B.csv",
            Split::Test => "SentimentTest_B.csv",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// The three tokenized splits handed to a dataset writer together
#[derive(new, Clone, Debug, Default)]
pub struct DatasetSplits {
    pub train: Vec<TokenizedExample>,
    pub dev: Vec<TokenizedExample>,
    pub test: Vec<TokenizedExample>,
}

impl DatasetSplits {
    pub fn get(&self, split: Split) -> &[TokenizedExample] {
        match split {
            Split::Train => &self.train,
            Split::Dev => &self.dev,
            Split::Test => &self.test,
        }
    }

    pub fn set(&mut self, split: Split, data: Vec<TokenizedExample>) {
        match split {
            Split::Train => self.train = data,
            Split::Dev => self.dev = data,
            Split::Test => self.test = data,
        }
    }

    /// Splits in on-disk order: train, dev, test.
    pub fn iter(&self) -> impl Iterator<Item = (Split, &[TokenizedExample])> {
        [Split::Train, Split::Dev, Split::Test]
            .into_iter()
            .map(move |split| (split, self.get(split)))
    }
}
