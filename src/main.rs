mod cli;

use clap::Parser;
use cli::{Args, Command};
use scanframe::config::Config;

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match args.command {
        Command::PreviewSize {
            screen,
            candidates,
            fallback,
        } => cli::preview_size(&config, screen, &candidates, fallback),
        Command::Framing {
            screen,
            camera,
            rotation,
            manual,
        } => cli::framing(&config, screen, camera, rotation, manual),
        Command::Transform {
            input,
            size,
            op,
            output,
        } => cli::transform(&input, size, op, &output),
        Command::Adapt {
            input,
            screen,
            size,
            rotation,
            facing,
            output,
        } => cli::adapt(
            &config,
            cli::AdaptRequest {
                input: &input,
                screen,
                size,
                rotation,
                facing,
                output: output.as_deref(),
            },
        ),
        Command::Config { action } => {
            cli::handle_config_action(&config, action);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
