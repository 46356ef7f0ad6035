use super::{FillArgs, KeySource};
use clap::Args;
use coltrans::cipher;
use coltrans::error::TrResult;
use coltrans::padded::{GridFill, PaddedCipher};
use serde_json::json;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct DecodeArgs {
    /// Ciphertext, used exactly as given.
    pub text: String,

    #[command(flatten)]
    pub key: KeySource,

    #[command(flatten)]
    pub fill: FillArgs,
}

pub fn run(args: DecodeArgs, json: bool) -> TrResult<()> {
    let key = args.key.resolve()?;

    info!("🔓 Decoding with key [{}] ({})", key, args.fill.fill);
    let decoded = match args.fill.fill {
        GridFill::Ragged => cipher::decode(&args.text, &key),
        GridFill::Padded => PaddedCipher::new(args.fill.filler)?.decode(&args.text, &key),
    };

    if json {
        let output = json!({ "key": key, "decoded": decoded });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Plaintext: {}", decoded);
    }
    Ok(())
}
