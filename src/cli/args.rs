//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use scanframe::Resolution;

use super::enums::{FacingArg, TransformOp};

/// Inspect preview sizing, framing rectangles and NV21 frame transforms
#[derive(Parser, Debug)]
#[command(name = "scanframe")]
#[command(version, about = "Barcode scanner camera geometry tools", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick the preview size closest to the screen's aspect ratio
    PreviewSize {
        /// Screen resolution (WIDTHxHEIGHT)
        #[arg(long)]
        screen: Resolution,
        /// Supported preview sizes, comma separated (e.g. 1920x1080,1280x720)
        #[arg(long, value_delimiter = ',', required = true)]
        candidates: Vec<Resolution>,
        /// Size reported as the camera default
        #[arg(long)]
        fallback: Option<Resolution>,
    },
    /// Compute the framing rectangle on screen and in the preview buffer
    Framing {
        /// Screen resolution (WIDTHxHEIGHT)
        #[arg(long)]
        screen: Resolution,
        /// Camera preview resolution (WIDTHxHEIGHT)
        #[arg(long)]
        camera: Option<Resolution>,
        /// Device rotation in degrees (0, 90, 180, 270)
        #[arg(long, default_value = "90", allow_hyphen_values = true)]
        rotation: i32,
        /// Fixed framing size instead of the automatic one (WIDTHxHEIGHT)
        #[arg(long)]
        manual: Option<Resolution>,
    },
    /// Rotate or mirror a raw NV21 frame
    Transform {
        /// Raw frame to read
        #[arg(long, short)]
        input: PathBuf,
        /// Frame resolution (WIDTHxHEIGHT)
        #[arg(long)]
        size: Resolution,
        /// Transform to apply
        #[arg(long, value_enum)]
        op: TransformOp,
        /// Where to write the transformed frame
        #[arg(long, short)]
        output: PathBuf,
    },
    /// Adapt a raw NV21 frame for decoding and print the decode region
    Adapt {
        /// Raw frame to read
        #[arg(long, short)]
        input: PathBuf,
        /// Screen resolution (WIDTHxHEIGHT)
        #[arg(long)]
        screen: Resolution,
        /// Frame resolution (WIDTHxHEIGHT)
        #[arg(long)]
        size: Resolution,
        /// Device rotation in degrees (0, 90, 180, 270)
        #[arg(long, default_value = "90", allow_hyphen_values = true)]
        rotation: i32,
        /// Camera facing
        #[arg(long, value_enum, default_value = "back")]
        facing: FacingArg,
        /// Write the decoder-ready frame here
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the default config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_size_args() {
        let args = Args::parse_from([
            "scanframe",
            "preview-size",
            "--screen",
            "1280x800",
            "--candidates",
            "1920x1080,1280x720",
        ]);
        match args.command {
            Command::PreviewSize {
                screen,
                candidates,
                fallback,
            } => {
                assert_eq!(screen, Resolution::new(1280, 800));
                assert_eq!(
                    candidates,
                    vec![Resolution::new(1920, 1080), Resolution::new(1280, 720)]
                );
                assert!(fallback.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_framing_defaults() {
        let args = Args::parse_from(["scanframe", "framing", "--screen", "1280x800"]);
        match args.command {
            Command::Framing {
                rotation,
                camera,
                manual,
                ..
            } => {
                assert_eq!(rotation, 90);
                assert!(camera.is_none());
                assert!(manual.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(!args.verbose);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_transform_op_values() {
        let args = Args::parse_from([
            "scanframe",
            "transform",
            "-i",
            "in.nv21",
            "--size",
            "640x480",
            "--op",
            "rotate-ccw",
            "-o",
            "out.nv21",
        ]);
        match args.command {
            Command::Transform { op, size, .. } => {
                assert_eq!(op, TransformOp::RotateCcw);
                assert_eq!(size, Resolution::new(640, 480));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::parse_from(["scanframe", "config", "show", "--verbose"]);
        assert!(args.verbose);
    }

    #[test]
    fn test_invalid_resolution_rejected() {
        let result = Args::try_parse_from(["scanframe", "framing", "--screen", "1280"]);
        assert!(result.is_err());
    }
}
