use crate::error::TrResult;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Longest key length brute force will accept (9! = 362,880 keys).
    /// Values above 12 act as 12.
    #[arg(long, default_value_t = 9)]
    pub max_key_length: usize,

    /// Permutations decoded between cancellation checks.
    #[arg(long, default_value_t = 5040)]
    pub chunk_size: usize,

    /// Ranked candidates shown by the CLI.
    #[arg(long, default_value_t = 20)]
    pub top: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_key_length: 9,
            chunk_size: 5040,
            top: 20,
        }
    }
}

impl Config {
    /// Reads a JSON config. Missing fields take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TrResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl SearchParams {
    /// Overrides fields with values given explicitly on the command line.
    pub fn merge_from_cli(&mut self, cli_params: &SearchParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_params.$field;
                }
            };
        }

        update_if_present!(max_key_length, "max_key_length");
        update_if_present!(chunk_size, "chunk_size");
        update_if_present!(top, "top");
    }
}
