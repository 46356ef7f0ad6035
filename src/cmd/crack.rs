use crate::reports;
use clap::Args;
use coltrans::config::Config;
use coltrans::error::TrResult;
use coltrans::search::{BruteForce, KeyLengthRange, ProgressCallback};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CrackArgs {
    /// Ciphertext to attack.
    pub text: String,

    /// Try only keys of exactly this length.
    #[arg(short = 'n', long, conflicts_with_all = ["min", "max"])]
    pub length: Option<usize>,

    #[arg(long, default_value_t = 1)]
    pub min: usize,

    #[arg(long, required_unless_present = "length")]
    pub max: Option<usize>,

    /// Also write every ranked candidate to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    #[command(flatten)]
    pub config: Config,
}

/// Logs progress at most once per second.
struct LogProgress {
    last_print: Mutex<Instant>,
}

impl ProgressCallback for LogProgress {
    fn on_progress(&self, done: usize, total: usize) -> bool {
        if let Ok(mut last) = self.last_print.lock() {
            if last.elapsed().as_secs_f32() >= 1.0 {
                let pct = done as f32 / total.max(1) as f32 * 100.0;
                info!("  {}/{} keys ({:.1}%)", done, total, pct);
                *last = Instant::now();
            }
        }
        true
    }
}

pub fn run(args: CrackArgs, config: Config, json: bool) -> TrResult<()> {
    let range = match args.length {
        Some(n) => KeyLengthRange::single(n)?,
        None => KeyLengthRange::new(args.min, args.max.unwrap_or(args.min))?,
    };

    let search = BruteForce::from(&config);
    let total = search.candidate_count(range)?;
    info!(
        "🔥 Trying {} keys of length {}..={}",
        total, range.min, range.max
    );

    let start = Instant::now();
    let progress = LogProgress {
        last_print: Mutex::new(Instant::now()),
    };
    let results = search.run_with(&args.text, range, progress)?;
    info!("Finished in {:.2?}", start.elapsed());

    if let Some(path) = &args.csv {
        reports::write_candidates_csv(path, &results)?;
        info!("💾 Wrote {} candidates to {}", results.len(), path.display());
    }

    let shown = &results[..results.len().min(config.search.top)];
    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
    } else {
        reports::print_candidates(shown, results.len());
    }
    Ok(())
}
