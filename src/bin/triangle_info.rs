//! Triangle Profile Tool
//!
//! Computes the full metric profile of a triangle from its three side
//! lengths and three interior angles (in degrees) and prints it as JSON:
//! area, perimeter, side/angle classification, medians, bisectors, heights,
//! circle areas, and, for right triangles, legs, hypotenuse, and
//! trigonometric ratios.
//!
//! Usage:
//!   cargo run --bin triangle_info -- --side-ab 3 --side-bc 5 --side-ac 4 \
//!       --angle-a 90 --angle-b 53.13 --angle-c 36.87

use clap::{ArgAction, Parser};

use trigon::{compute_profile, TriangleInput};

/// Triangle Profile Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Computes the metric profile of a triangle from its sides and angles",
    long_about = None
)]
struct Args {
    /// Length of side AB
    #[arg(long)]
    side_ab: f64,

    /// Length of side BC
    #[arg(long)]
    side_bc: f64,

    /// Length of side AC
    #[arg(long)]
    side_ac: f64,

    /// Magnitude of angle A in degrees
    #[arg(long)]
    angle_a: f64,

    /// Magnitude of angle B in degrees
    #[arg(long)]
    angle_b: f64,

    /// Magnitude of angle C in degrees
    #[arg(long)]
    angle_c: f64,

    /// Print compact JSON on a single line
    #[arg(short, long, action = ArgAction::SetTrue)]
    compact: bool,
}

const SIDE_MESSAGE: &str = "side length must be greater than 0";
const ANGLE_MESSAGE: &str = "angle magnitude must be greater than 0";

/// Per-field positivity pre-filter over the raw values. Geometric checks
/// belong to the library validator; this only rejects input-shape errors
/// before the engine is invoked.
fn field_errors(args: &Args) -> Vec<(&'static str, &'static str)> {
    let fields = [
        ("side_ab", args.side_ab, SIDE_MESSAGE),
        ("side_bc", args.side_bc, SIDE_MESSAGE),
        ("side_ac", args.side_ac, SIDE_MESSAGE),
        ("angle_a", args.angle_a, ANGLE_MESSAGE),
        ("angle_b", args.angle_b, ANGLE_MESSAGE),
        ("angle_c", args.angle_c, ANGLE_MESSAGE),
    ];

    fields
        .into_iter()
        .filter(|(_, value, _)| !(*value > 0.0))
        .map(|(name, _, message)| (name, message))
        .collect()
}

fn main() {
    let args = Args::parse();

    let shape_errors = field_errors(&args);
    if !shape_errors.is_empty() {
        let payload: serde_json::Map<String, serde_json::Value> = shape_errors
            .into_iter()
            .map(|(name, message)| (name.to_string(), message.into()))
            .collect();
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("error payload serialization")
        );
        std::process::exit(1);
    }

    let input = TriangleInput::new(
        args.side_ab,
        args.side_bc,
        args.side_ac,
        args.angle_a,
        args.angle_b,
        args.angle_c,
    );

    match compute_profile(&input) {
        Ok(profile) => {
            let text = if args.compact {
                serde_json::to_string(&profile)
            } else {
                serde_json::to_string_pretty(&profile)
            }
            .expect("profile serialization");
            println!("{}", text);
        }
        Err(err) => {
            eprintln!(
                "{}",
                serde_json::json!({ "errors": err.reasons() })
            );
            std::process::exit(1);
        }
    }
}
