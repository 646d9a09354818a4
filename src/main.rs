use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use asciify::ascii::{self, RenderError};
use asciify::cli::{handle_config_action, Args, Command};
use asciify::config::{Config, ConfigError, RenderConfig, Settings};
use asciify::pixels::{decode, DecodeError, PixelError};
use asciify::terminal::terminal_size;

/// Anything that can abort a run.
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("Failed to resize image: {0}")]
    Resize(#[from] PixelError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::load(args.config.as_deref())?;

    let terminal = terminal_size();
    match terminal {
        Some((cols, rows)) => log::info!("Terminal size: {}x{}", cols, rows),
        None => log::info!("No terminal size detected"),
    }

    if let Some(Command::Config { action }) = &args.command {
        let settings = Settings::resolve(&RenderConfig::default(), &config.render, terminal)?;
        handle_config_action(action.clone(), args.config.as_deref(), &settings)?;
        return Ok(());
    }

    let settings = Settings::resolve(&args.overrides(), &config.render, terminal)?;
    log::debug!("Effective settings: {:?}", settings);

    let Some(path) = args.image.as_deref() else {
        // clap requires the image whenever no subcommand is given
        return Ok(());
    };

    let original = decode::load(path)?;
    log::info!(
        "Loaded {} ({}x{}, {} channel(s))",
        path.display(),
        original.width(),
        original.height(),
        original.channels()
    );

    let resized = ascii::resize(
        &original,
        settings.max_width,
        settings.max_height,
        settings.character_ratio,
    )?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    ascii::render(&resized, &settings.render_options(), &mut out)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
