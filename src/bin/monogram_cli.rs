//! Monogram CLI - Bridge interface for the storefront
//!
//! Commands: palette, validate, compose
//! Outputs JSON to stdout, logs to stderr
//! Returns 2 on validation failure

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

use monogram_core::{
    catalog::{color_entries, font_entries, shadow_entries},
    contrast::pick_text_color,
    Compositor, DesignInput, GarmentColor, GarmentProfile, RenderRequest,
};

#[derive(Parser)]
#[command(name = "monogram-cli")]
#[command(about = "Monogram CLI - Garment Preview Composition Engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Garment profile JSON (defaults to the reference profile)
    #[arg(short, long)]
    profile: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List colors, fonts and shadow options
    Palette,

    /// Validate name and number
    Validate {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        number: String,
    },

    /// Compose a preview
    Compose {
        /// JSON payload (DesignInput)
        #[arg(short, long)]
        payload: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            println!("{}", s);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "failed to serialize output");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let profile = match &cli.profile {
        Some(path) => match GarmentProfile::load(path) {
            Ok(p) => p,
            Err(e) => {
                println!("{}", serde_json::json!({ "error": e.to_string() }));
                return ExitCode::FAILURE;
            }
        },
        None => GarmentProfile::reference(),
    };

    match cli.command {
        Commands::Palette => {
            let colors: Vec<_> = GarmentColor::ALL
                .iter()
                .zip(color_entries())
                .map(|(color, entry)| serde_json::json!({
                    "value": entry.value,
                    "label": entry.label,
                    "textColor": pick_text_color(*color),
                    "shadowAvailable": !color.disables_shadow(),
                }))
                .collect();

            print_json(&serde_json::json!({
                "colors": colors,
                "fonts": font_entries(),
                "shadows": shadow_entries(),
            }))
        }

        Commands::Validate { name, number } => {
            let result = monogram_core::validate(&name, &number);
            let code = print_json(&result);
            if result.is_valid() {
                code
            } else {
                ExitCode::from(2)
            }
        }

        Commands::Compose { payload } => {
            let input: DesignInput = match serde_json::from_str(&payload) {
                Ok(i) => i,
                Err(e) => {
                    println!("{}", serde_json::json!({ "success": false, "error": format!("Invalid payload: {}", e) }));
                    return ExitCode::FAILURE;
                }
            };

            let input = input.normalized(&profile);
            let compositor = Compositor::new(profile);

            let Some(spec) = compositor.compose(&input) else {
                let output = serde_json::json!({
                    "success": false,
                    "validation": input.validate(),
                    "error": "Please enter valid details to generate T-shirt preview.",
                });
                println!("{}", output);
                return ExitCode::from(2);
            };

            match RenderRequest::new(compositor.profile(), &spec) {
                Ok(request) => print_json(&serde_json::json!({
                    "success": true,
                    "input": input,
                    "spec": spec,
                    "request": request,
                })),
                Err(e) => {
                    println!("{}", serde_json::json!({ "success": false, "error": e.to_string() }));
                    ExitCode::FAILURE
                }
            }
        }
    }
}
