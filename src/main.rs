#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::{Parser, ValueEnum};
use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::Element;
use folio_core::ColorMode;
use tracing_subscriber::EnvFilter;

use crate::context::LaunchOptions;

/// Options parsed from the command line, set once before launch
static LAUNCH: OnceLock<LaunchOptions> = OnceLock::new();

/// Get the launch options (set from command line or default)
pub fn launch_options() -> LaunchOptions {
    LAUNCH.get().copied().unwrap_or_default()
}

/// Which lab app to open
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Demo {
    /// Résumé/portfolio with bottom tabs
    Resume,
    /// Story row and post feed with a light/dark switch
    Stories,
    /// Button and touchable sampler
    Sampler,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SchemeArg {
    Light,
    Dark,
}

impl From<SchemeArg> for ColorMode {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Light => ColorMode::Light,
            SchemeArg::Dark => ColorMode::Dark,
        }
    }
}

/// Folio - portfolio screens and UI lab demos
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - portfolio screens and UI lab demos")]
struct Args {
    /// App to launch
    #[arg(short, long, value_enum, default_value = "resume")]
    demo: Demo,

    /// Color scheme to report as the system setting (story feed)
    #[arg(long, value_enum)]
    system_theme: Option<SchemeArg>,

    /// Print every fixture as JSON and exit
    #[arg(long)]
    dump_fixtures: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.dump_fixtures {
        match folio_core::fixtures::to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!("Failed to serialize fixtures: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = folio_core::fixtures::validate() {
        tracing::error!("Fixture check failed: {}", e);
    }

    let options = LaunchOptions {
        system_theme: args.system_theme.map(ColorMode::from),
    };
    let _ = LAUNCH.set(options);

    let (title, root): (&str, fn() -> Element) = match args.demo {
        Demo::Resume => ("Folio", app::ResumeApp),
        Demo::Stories => ("Folio - Stories", app::StoriesApp),
        Demo::Sampler => ("Folio - Sampler", app::SamplerApp),
    };

    // Phone-sized window
    let window_width = 430.0;
    let window_height = 900.0;

    tracing::info!(demo = ?args.demo, system_theme = ?options.system_theme, "Starting '{}'", title);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(root);
}
