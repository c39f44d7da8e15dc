// SPDX-License-Identifier: MPL-2.0
use snapback::config;
use snapback::onboarding::{FileFlagStore, FlagStore, MemoryFlagStore, OnboardingFlow, SoundCue};
use snapback::paths;
use snapback::pinch::ZoomPanController;
use snapback::replay;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Layout width of a common phone screen, in logical units.
const DEFAULT_LAYOUT_WIDTH: f32 = 390.0;

const USAGE: &str = "\
Replay gesture events against the interaction controllers.

USAGE:
  snapback zoom [OPTIONS] <EVENT>...
  snapback onboarding [OPTIONS] [--layout-width W] [--ephemeral] <EVENT>...

EVENTS:
  zoom:        double-tap  drag:X,Y  drag-end  step-up  step-down  reset
  onboarding:  drag:X  drag-end  restart

OPTIONS:
  --config-dir DIR   Directory holding settings.toml
  --data-dir DIR     Directory holding the flag store
  -h, --help         Print this help
";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let command = args.subcommand()?;
    let config_dir: Option<PathBuf> = args.opt_value_from_str("--config-dir")?;
    let data_dir: Option<PathBuf> = args.opt_value_from_str("--data-dir")?;
    let layout_width: f32 = args
        .opt_value_from_str("--layout-width")?
        .unwrap_or(DEFAULT_LAYOUT_WIDTH);
    let ephemeral = args.contains("--ephemeral");
    let events: Vec<String> = args
        .finish()
        .into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    paths::init_cli_overrides(data_dir, config_dir);
    let settings = config::load()?;

    let lines = match command.as_deref() {
        Some("zoom") => {
            let mut zoom = ZoomPanController::new(settings.zoom_config()?);
            replay::replay_zoom(&mut zoom, &events)?
        }
        Some("onboarding") => {
            if ephemeral {
                run_onboarding(MemoryFlagStore::new(), layout_width, &settings, &events)?
            } else {
                run_onboarding(FileFlagStore::open(None)?, layout_width, &settings, &events)?
            }
        }
        _ => {
            eprint!("{USAGE}");
            return Err("expected `zoom` or `onboarding`".into());
        }
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn run_onboarding<S: FlagStore>(
    store: S,
    layout_width: f32,
    settings: &config::Config,
    events: &[String],
) -> snapback::Result<Vec<String>> {
    let player = |cue: SoundCue| tracing::info!(cue = cue.asset_name(), "play sound");
    let mut host = OnboardingFlow::new(store, player, layout_width, settings.slide_config()?)?;
    replay::replay_onboarding(&mut host, events)
}
