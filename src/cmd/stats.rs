use crate::reports;
use clap::Args;
use coltrans::analysis::char_frequencies;
use coltrans::error::TrResult;

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Text to analyze; whitespace is ignored.
    pub text: String,
}

pub fn run(args: StatsArgs, json: bool) -> TrResult<()> {
    let freqs = char_frequencies(&args.text);

    if json {
        println!("{}", serde_json::to_string_pretty(&freqs)?);
    } else {
        reports::print_frequencies(&freqs);
    }
    Ok(())
}
