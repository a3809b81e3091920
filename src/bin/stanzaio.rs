use std::env;

use stanzaio::cli::{self, ModeArgs};
use stanzaio::{ConsoleSink, Exercise, ExerciseConfig, logging};

async fn run(modes: ModeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = ExerciseConfig::from_env()?;
    let exercise = Exercise::from_config(config);
    let sink = ConsoleSink::stdout();

    exercise.run_all(modes.as_slice(), &sink).await?;
    Ok(())
}

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("stanzaio: logging disabled: {e}");
    }

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprint!("{}", cli::usage("stanzaio"));
        return;
    }

    let modes = ModeArgs::from_tokens(&args);
    if let Err(e) = run_blocking(modes) {
        eprintln!("stanzaio error: {e}");
        std::process::exit(1);
    }
}

fn run_blocking(modes: ModeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(run(modes))
}
