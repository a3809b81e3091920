use std::error::Error;

use sarge::prelude::*;
use stanzaio::cli::ModeArgs;
use stanzaio::{ConsoleSink, Exercise, ExerciseConfig, logging};

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  stanzaio_sarge --modes <a,b,...> [--config <path>] [--plain]");
    eprintln!();
    eprint!("{}", stanzaio::cli::usage("stanzaio_sarge"));
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -m, --modes        Comma-separated mode letters");
    eprintln!("  -c, --config       YAML or JSON config file");
    eprintln!("  -p, --plain        Disable colours");
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut reader = ArgumentReader::new();

    let modes_ref = reader.add::<ModeArgs>(tag::both('m', "modes"));
    let config_ref = reader.add::<String>(tag::both('c', "config"));
    let plain_ref = reader.add::<bool>(tag::both('p', "plain"));

    let args = reader.parse()?;

    let modes = match modes_ref.get(&args) {
        Some(Ok(v)) => v,
        Some(Err(_)) => unreachable!("ModeArgs parsing is infallible"),
        None => ModeArgs::default(),
    };

    if modes.is_empty() {
        return Err("missing --modes".into());
    }

    let config = match config_ref.get(&args).and_then(Result::ok) {
        Some(path) => ExerciseConfig::from_path(path)?,
        None => ExerciseConfig::default(),
    };
    let plain = plain_ref.get(&args).and_then(Result::ok).unwrap_or(false);

    let exercise = Exercise::from_config(config);
    let sink = ConsoleSink::stdout().with_colors(!plain);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(exercise.run_all(modes.as_slice(), &sink))?;

    Ok(())
}

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("stanzaio_sarge: logging disabled: {e}");
    }

    if let Err(e) = run() {
        eprintln!("stanzaio_sarge error: {e}");
        print_usage();
        std::process::exit(1);
    }
}
