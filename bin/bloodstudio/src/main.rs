//! BloodStudio - A Rust GUI authoring environment for the BloodCode language
//!
//! This application provides an editor with live syntax highlighting and an
//! interactive execution console backed by the remote BloodCode compiler
//! service.

mod app;
// Core modules come from the bloodstudio library

use std::env;
use std::path::PathBuf;
use std::process;

use eframe::egui;
use tracing::{debug, error, info, warn};

use bloodstudio::config::{Config, ConfigLoader};
use bloodstudio::error::Result;

use app::BloodStudioApp;

/// Application configuration from the command line
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Enable debug mode
    debug: bool,
    /// Window width
    width: Option<f32>,
    /// Window height
    height: Option<f32>,
    /// Remote service base URL override
    server_url: Option<String>,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    if i + 1 < args.len() {
                        app_args.config_path = Some(PathBuf::from(&args[i + 1]));
                        i += 1;
                    } else {
                        return Err("Missing config file path".into());
                    }
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--width" | "-w" => {
                    if i + 1 < args.len() {
                        app_args.width = args[i + 1].parse().ok();
                        i += 1;
                    }
                }
                "--height" | "-h" => {
                    if i + 1 < args.len() {
                        app_args.height = args[i + 1].parse().ok();
                        i += 1;
                    }
                }
                "--server" | "-s" => {
                    if i + 1 < args.len() {
                        app_args.server_url = Some(args[i + 1].clone());
                        i += 1;
                    } else {
                        return Err("Missing server URL".into());
                    }
                }
                "--help" | "-?" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("BloodStudio v{}", env!("CARGO_PKG_VERSION"));
                    process::exit(0);
                }
                arg if arg.starts_with('-') => {
                    return Err(format!("Unknown option: {}", arg).into());
                }
                _ => {
                    warn!("Ignoring positional argument: {}", args[i]);
                }
            }
            i += 1;
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("BloodStudio - A GUI authoring environment for the BloodCode language");
    println!();
    println!("USAGE:");
    println!("    bloodstudio [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("    -d, --debug            Enable debug mode");
    println!("    -w, --width <WIDTH>    Initial window width");
    println!("    -h, --height <HEIGHT>  Initial window height");
    println!("    -s, --server <URL>     Remote compiler service base URL");
    println!("    -?, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    BloodStudio looks for configuration files in the following order:");
    println!("    1. Path specified with --config");
    println!("    2. $XDG_CONFIG_HOME/bloodstudio/config.toml");
    println!("    3. ~/.bloodstudio/config.toml");
    println!("    4. ./bloodstudio.toml");
    println!("    5. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    BLOODSTUDIO_DEBUG      Enable debug mode (1 or true)");
    println!("    RUST_LOG               Set logging level (error, warn, info, debug, trace)");
}

fn main() -> Result<()> {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("Failed to parse arguments: {}", e);
        print_help();
        process::exit(1);
    });

    // Initialize logging based on debug flag
    let log_level = if args.debug
        || env::var("BLOODSTUDIO_DEBUG").is_ok_and(|v| v == "1" || v.to_lowercase() == "true")
    {
        "debug"
    } else {
        "info"
    };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    info!("🚀 Starting BloodStudio v{}", env!("CARGO_PKG_VERSION"));

    let config = load_configuration(&args)?;
    let native_options = create_native_options(&args, &config);

    let app = BloodStudioApp::new(config)?;

    info!("🎨 Initializing GUI...");
    if let Err(e) = eframe::run_native(
        "BloodStudio",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    ) {
        error!("💥 Application failed: {}", e);
        process::exit(1);
    }

    info!("👋 BloodStudio shutdown complete");
    Ok(())
}

/// Load configuration from file or use defaults
fn load_configuration(args: &AppArgs) -> Result<Config> {
    info!("⚙️  Loading configuration...");

    let mut config = if let Some(path) = &args.config_path {
        debug!("Loading config from: {}", path.display());
        match ConfigLoader::load_from_file(path) {
            Ok(config) => {
                info!("✅ Configuration loaded from: {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to load config from {}: {}", path.display(), e);
                info!("🔄 Falling back to default configuration");
                Config::default()
            }
        }
    } else {
        match ConfigLoader::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load configuration: {}. Using defaults", e);
                Config::default()
            }
        }
    };

    // Apply command-line server override
    if let Some(url) = &args.server_url {
        debug!("Applying server override: {}", url);
        config.server.base_url = url.clone();
        config.server.validate()?;
    }

    debug!("Configuration loaded successfully");
    Ok(config)
}

/// Create native options for the application window
fn create_native_options(args: &AppArgs, config: &Config) -> eframe::NativeOptions {
    let width = args.width.unwrap_or(config.ui.window_width as f32);
    let height = args.height.unwrap_or(config.ui.window_height as f32);

    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("BloodStudio")
            .with_app_id("bloodstudio")
            .with_icon(std::sync::Arc::new(create_window_icon()))
            .with_inner_size([width, height])
            .with_min_inner_size([400.0, 300.0])
            .with_resizable(true),
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    }
}

/// Create a simple generated window icon
fn create_window_icon() -> egui::IconData {
    // 32x32, a dark editor pane with a red accent bar
    let mut rgba = Vec::with_capacity(32 * 32 * 4);

    let bg_color = [24, 24, 36, 255]; // Dark background
    let accent_color = [170, 40, 50, 255]; // Blood red accent
    let text_color = [200, 200, 210, 255]; // Light "code" lines

    for y in 0..32 {
        for x in 0..32 {
            let pixel = if !(3..29).contains(&x) || !(3..29).contains(&y) {
                bg_color
            } else if y < 8 {
                accent_color
            } else if x >= 6 && x < 26 && y % 4 == 1 {
                text_color
            } else {
                bg_color
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    egui::IconData {
        rgba,
        width: 32,
        height: 32,
    }
}
