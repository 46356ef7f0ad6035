use super::{FillArgs, KeySource};
use crate::reports;
use clap::Args;
use coltrans::cipher::{self, Encoding};
use coltrans::error::TrResult;
use coltrans::key::Key;
use coltrans::padded::{GridFill, PaddedCipher};
use serde::Serialize;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EncodeArgs {
    /// Plaintext; whitespace is removed before encoding.
    pub text: String,

    #[command(flatten)]
    pub key: KeySource,

    /// Encode with a random key of this length.
    #[arg(long, value_name = "N", conflicts_with_all = ["key", "keyword"])]
    pub random_key: Option<usize>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub fill: FillArgs,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EncodeOutput<'a> {
    key: &'a Key,
    #[serde(flatten)]
    encoding: &'a Encoding,
}

pub fn run(args: EncodeArgs, json: bool) -> TrResult<()> {
    let key = match args.random_key {
        Some(n) => {
            let mut rng = match args.seed {
                Some(s) => fastrand::Rng::with_seed(s),
                None => fastrand::Rng::new(),
            };
            Key::random(&mut rng, n)?
        }
        None => args.key.resolve()?,
    };

    info!("🔐 Encoding with key [{}] ({})", key, args.fill.fill);
    let encoding = match args.fill.fill {
        GridFill::Ragged => cipher::encode(&args.text, &key),
        GridFill::Padded => PaddedCipher::new(args.fill.filler)?.encode(&args.text, &key)?,
    };

    if json {
        let output = EncodeOutput {
            key: &key,
            encoding: &encoding,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Key: {}", key);
    println!("Ciphertext: {}", encoding.cipher_text);
    reports::print_plaintext_grid(&encoding.plaintext_grid);
    reports::print_cipher_grid(&encoding, &key);
    Ok(())
}
