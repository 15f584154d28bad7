//! Alphabet preview CLI.
//!
//! This binary delegates to `alphabet_affirmations::cli` for parsing and
//! generation, keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;
use std::thread;

use alphabet_affirmations::cli::{
    AffirmationsSettings, CliError, ParseOutcome, build_preview, format_preview, parse_args,
};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

const PROGRAM: &str = "affirmations";

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let settings = AffirmationsSettings::load(PROGRAM)?;
            let preview = build_preview(&options, &settings)?;
            thread::sleep(settings.preview_delay());
            write_preview(&format_preview(&preview));
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: affirmations --name <name> [options]\n",
        "\n",
        "Options:\n",
        "  --name <name>        Child's name (required)\n",
        "  --fid <id>           Signed-in identity for a personalised seed\n",
        "  --session <token>    Session token for anonymous seeds\n",
        "  --attempt <n>        Reroll counter (defaults to 0)\n",
        "  --random             Draw every word at random instead of seeding\n",
        "  --word-bank <path>   Word bank JSON file (defaults to the built-in bank)\n",
        "  -h, --help           Print this help output\n",
        "\n",
        "Environment:\n",
        "  AFFIRMATIONS_WORD_BANK_PATH, AFFIRMATIONS_PREVIEW_DELAY_MS,\n",
        "  AFFIRMATIONS_SESSION_TOKEN, RUST_LOG\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_preview(preview: &str) {
    if let Err(err) = io::stdout().lock().write_all(preview.as_bytes()) {
        drop(err);
    }
}
