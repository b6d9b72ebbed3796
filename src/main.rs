use std::env;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

mod cli;

use clap::Parser;
use cli::Cli;
use log::info;

use featprobe::{feature, select, write_report, BuildInfo, NativeArith};

// Startup failures (bad config, bad overrides) exit with 2 so the runner can
// tell them apart from both variant codes.
const EXIT_STARTUP_FAILURE: i32 = 2;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        // --verbose pins debug level even when RUST_LOG asks for less.
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_STARTUP_FAILURE);
        }
    }
}

fn run(cli: &Cli) -> Result<i32, Box<dyn Error>> {
    let config_path = cli
        .config
        .clone()
        .or_else(|| env::var_os("FEATPROBE_CONFIG").map(PathBuf::from));

    let info = BuildInfo::load(config_path.as_deref())?;
    let flags = feature::resolve_flags(cli.force_modern, cli.force_fallback, info.std_version)?;
    let variant = select(flags);
    info!("selected {} variant (tag {})", variant, variant.tag());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &info, variant, &NativeArith)?;
    out.flush()?;

    Ok(variant.exit_code())
}
