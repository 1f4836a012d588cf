//! # Staircalc CLI
//!
//! Interactive command-line front end for the stair BOM engine. Prompts for
//! the customer dimensions, runs one calculation against the default
//! configuration, and prints a fabrication summary followed by the JSON
//! form of the result for machine use.

use std::io::{self, BufRead, Write};

use stair_core::bom::calculate;
use stair_core::config::EngineConfig;
use stair_core::materials::{FrameColor, StepMaterial};
use stair_core::spec::{default_reinforcement_count, StairSpecification};

fn read_line() -> Option<String> {
    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return None;
    }
    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }
    read_line()
        .and_then(|line| line.parse().ok())
        .unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }
    read_line()
        .and_then(|line| line.parse().ok())
        .unwrap_or(default)
}

fn prompt_str(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }
    match read_line() {
        Some(line) if !line.is_empty() => line,
        _ => default.to_string(),
    }
}

fn prompt_bool(prompt: &str, default: bool) -> bool {
    let answer = prompt_str(prompt, if default { "y" } else { "n" });
    matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")
}

fn main() {
    println!("Staircalc CLI - Stair Frame BOM Calculator");
    println!("==========================================");
    println!();

    let width_mm = prompt_f64("Stair width (mm) [800]: ", 800.0);
    let height_mm = prompt_f64("Stair height (mm) [2000]: ", 2000.0);
    let step_count = prompt_u32("Number of steps [10]: ", 10);

    let material_code = prompt_str(
        "Step material (composite/corrugated/mixed) [composite]: ",
        "composite",
    );
    let material = match StepMaterial::from_code(&material_code) {
        Ok(material) => material,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    };

    let has_platform = prompt_bool("Landing platform? (y/n) [n]: ", false);
    let platform_depth_mm = if has_platform {
        prompt_f64("Platform depth (mm) [600]: ", 600.0)
    } else {
        0.0
    };

    let reinforcement_count = prompt_u32(
        &format!(
            "Reinforcement count [{}]: ",
            default_reinforcement_count(width_mm)
        ),
        default_reinforcement_count(width_mm),
    );
    let paint_consumption_g_per_m2 = prompt_f64("Paint consumption (g/m²) [180]: ", 180.0);
    let frame_color = FrameColor::from_code(&prompt_str(
        "Frame color (RAL9005/RAL8017/RAL7024) [RAL9005]: ",
        "RAL9005",
    ));

    let spec = StairSpecification {
        width_mm,
        height_mm,
        step_count,
        material,
        has_platform,
        platform_depth_mm,
        reinforcement_count,
        paint_consumption_g_per_m2,
        frame_color,
    };

    println!();
    match calculate(&spec, &EngineConfig::default()) {
        Ok(bom) => {
            println!("═══════════════════════════════════════");
            println!("  STAIR FRAME BILL OF MATERIALS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Width:     {:.0} mm", spec.width_mm);
            println!("  Height:    {:.0} mm", spec.height_mm);
            println!("  Steps:     {}", spec.step_count);
            println!("  Material:  {}", spec.material);
            println!("  Color:     {}", spec.frame_color);
            println!();
            println!("Metal frame:");
            println!("  Base frame:      {:>8.0} mm ({:.2} m)", bom.base_frame.mm, bom.base_frame.m);
            println!("  Step frames:     {:>8.0} mm ({:.2} m)", bom.steps_total.mm, bom.steps_total.m);
            println!("  Vertical stands: {:>8.0} mm ({:.2} m)", bom.vertical_stands.mm, bom.vertical_stands.m);
            println!("  Reinforcements:  {:>8.0} mm ({:.2} m)", bom.reinforcements.total.mm, bom.reinforcements.total.m);
            println!("  Mounting strips: {:>8.0} mm ({:.2} m)", bom.mounting_strips.mm, bom.mounting_strips.m);
            println!("  TOTAL:           {:>8.0} mm ({:.2} m)", bom.total_length.mm, bom.total_length.m);
            println!();
            println!("Paint:");
            println!("  Area: {:.2} m²", bom.paint.area_m2);
            println!("  Mass: {:.0} g", bom.paint.mass_g);
            if bom.decking.board_count > 0 {
                println!();
                println!("Decking:");
                println!("  Boards: {} x {} ({:.2} m total)",
                    bom.decking.board_count,
                    bom.decking.color,
                    bom.decking.board_length.m
                );
                println!("  Bolts:  {} (nuts: {})", bom.fasteners.bolts, bom.fasteners.nuts);
            }
            println!();
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for machine use):");
            if let Ok(json) = serde_json::to_string_pretty(&bom) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}
