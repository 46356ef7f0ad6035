pub mod crack;
pub mod decode;
pub mod encode;
pub mod stats;

use clap::Args;
use coltrans::error::{TrResult, TranspositionError};
use coltrans::key::Key;
use coltrans::padded::{GridFill, DEFAULT_FILLER};

#[derive(Args, Debug, Clone)]
#[group(multiple = false)]
pub struct KeySource {
    /// Numeric ranks, e.g. "3,1,2". Non-numeric entries are ignored.
    #[arg(short, long)]
    pub key: Option<String>,

    /// Keyword whose letters rank the columns alphabetically.
    #[arg(long)]
    pub keyword: Option<String>,
}

impl KeySource {
    pub fn resolve(&self) -> TrResult<Key> {
        match (&self.key, &self.keyword) {
            (Some(ranks), _) => Key::parse(ranks),
            (None, Some(word)) => Key::from_keyword(word),
            (None, None) => Err(TranspositionError::InvalidKey(
                "pass --key or --keyword".to_string(),
            )),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct FillArgs {
    /// ragged (no filler) or padded.
    #[arg(long, default_value = "ragged")]
    pub fill: GridFill,

    /// Filler character for --fill padded.
    #[arg(long, default_value_t = DEFAULT_FILLER)]
    pub filler: char,
}
