//! Subcommand handlers.

use std::error::Error;
use std::path::Path;

use scanframe::config::{default_path as get_config_path, Config};
use scanframe::{
    FrameAdapter, FrameContext, FramingCalculator, Nv21Image, Resolution, Rotation,
};

use super::args::ConfigAction;
use super::enums::{FacingArg, TransformOp};

type CommandResult = Result<(), Box<dyn Error>>;

pub fn preview_size(
    config: &Config,
    screen: Resolution,
    candidates: &[Resolution],
    fallback: Option<Resolution>,
) -> CommandResult {
    let chosen = config
        .selector()
        .select_or_default(candidates, screen, fallback)?;
    println!("{}", chosen);
    Ok(())
}

pub fn framing(
    config: &Config,
    screen: Resolution,
    camera: Option<Resolution>,
    rotation: i32,
    manual: Option<Resolution>,
) -> CommandResult {
    let rotation = Rotation::try_from(rotation)?;
    let calc = FramingCalculator::new(Some(screen), camera, rotation)
        .with_bounds(config.framing_bounds());

    let rect = match manual {
        Some(size) => calc.manual_rect(size.width, size.height),
        None => calc.framing_rect(),
    };
    let Some(rect) = rect else {
        return Err("screen resolution is not set".into());
    };
    println!("screen:  {} ({}x{})", rect, rect.width(), rect.height());

    match calc.to_preview(rect) {
        Some(preview) => println!(
            "preview: {} ({}x{})",
            preview,
            preview.width(),
            preview.height()
        ),
        None => println!("preview: unavailable (no camera resolution)"),
    }
    Ok(())
}

pub fn transform(input: &Path, size: Resolution, op: TransformOp, output: &Path) -> CommandResult {
    let image = read_frame(input, size)?;
    let result = op.apply(&image);
    std::fs::write(output, result.data())?;
    println!(
        "Wrote {} frame ({} bytes) to {}",
        result.resolution(),
        result.data().len(),
        output.display()
    );
    Ok(())
}

pub struct AdaptRequest<'a> {
    pub input: &'a Path,
    pub screen: Resolution,
    pub size: Resolution,
    pub rotation: i32,
    pub facing: FacingArg,
    pub output: Option<&'a Path>,
}

pub fn adapt(config: &Config, request: AdaptRequest<'_>) -> CommandResult {
    let frame = read_frame(request.input, request.size)?;
    let context = FrameContext {
        screen: request.screen.to_landscape(),
        camera: request.size,
        rotation: Rotation::try_from(request.rotation)?,
        facing: request.facing.into(),
    };

    let mut adapter = FrameAdapter::new(config.framing_bounds());
    let Some(adapted) = adapter.adapt(frame, &context) else {
        return Err("no framing rectangle available".into());
    };
    let luminance = adapted.luminance()?;

    println!("frame:   {}", adapted.image.resolution());
    match adapted.turn {
        Some(turn) => println!("turn:    {:?}", turn),
        None => println!("turn:    none"),
    }
    println!(
        "region:  origin ({}, {}) size {}x{}",
        luminance.left(),
        luminance.top(),
        luminance.width(),
        luminance.height()
    );
    println!("sensor:  {}", adapted.sensor_region());

    if let Some(output) = request.output {
        std::fs::write(output, adapted.image.data())?;
        println!("Wrote {}", output.display());
    }
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(config: &Config, action: ConfigAction) {
    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            println!("  Preview min pixels: {}", config.preview.min_pixels);
            println!("  Preview max pixels: {}", config.preview.max_pixels);
            let bounds = config.framing_bounds();
            println!(
                "  Framing width:  {}..={}",
                bounds.min_width, bounds.max_width
            );
            println!(
                "  Framing height: {}..={}",
                bounds.min_height, bounds.max_height
            );
            println!();

            let config_path = get_config_path();
            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Path => {
            println!("{}", get_config_path().display());
        }
    }
}

fn read_frame(path: &Path, size: Resolution) -> Result<Nv21Image, Box<dyn Error>> {
    let data = std::fs::read(path)
        .map_err(|e| format!("Failed to read frame '{}': {}", path.display(), e))?;
    Ok(Nv21Image::new(data, size.width, size.height)?)
}
