//! Newton's cradle configurator.
//!
//! Example:
//!   cargo run -- --balls 7 --spacing 4 --rope 240
//!   cargo run -- --config my_setup.ron --auto-close 10

use std::path::PathBuf;

use anyhow::{bail, Result};
use bevy::prelude::*;
use clap::Parser;

use cradle_lab::core::config::SimConfig;
use cradle_lab::cradle::params::{CradleParams, ParamField};
use cradle_lab::interaction::session::ConfigReloadSettings;
use cradle_lab::rendering::palette;
use cradle_lab::CradleAppPlugin;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive Newton's cradle on Bevy + Rapier", long_about = None)]
struct Args {
    /// Extra config file layered over assets/config/cradle.ron.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Starting ball count, as raw text (validated like any other input).
    #[arg(long)]
    balls: Option<String>,
    /// Starting spacing in pixels.
    #[arg(long)]
    spacing: Option<String>,
    /// Starting rope length in pixels.
    #[arg(long)]
    rope: Option<String>,
    /// Exit after this many seconds (overrides window.autoClose).
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut paths = vec![
        PathBuf::from("assets/config/cradle.ron"),
        PathBuf::from("assets/config/cradle.local.ron"),
    ];
    if let Some(extra) = &args.config {
        paths.push(extra.clone());
    }

    let (mut cfg, _used, load_errors) = SimConfig::load_layered(paths.iter());
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }
    // Logged once the app's log plugin is up.
    let startup_warnings: Vec<String> = load_errors
        .into_iter()
        .chain(cfg.validate())
        .collect();

    // Config supplies the starting parameters, CLI overrides them field by
    // field. A bad config value degrades to defaults with a warning; a bad
    // CLI value is an explicit request we cannot honor, so it is fatal.
    let mut params = cfg.initial.to_params().unwrap_or_default();
    for (field, raw) in [
        (ParamField::BallCount, &args.balls),
        (ParamField::Spacing, &args.spacing),
        (ParamField::RopeLength, &args.rope),
    ] {
        if let Some(raw) = raw {
            params = match params.with_field(field, raw) {
                Ok(p) => p,
                Err(e) => bail!("{e}"),
            };
        }
    }

    App::new()
        .insert_resource(ClearColor(palette::BACKGROUND))
        .insert_resource(cfg.clone())
        .insert_resource(params)
        .insert_resource(ConfigReloadSettings {
            paths,
            ..Default::default()
        })
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.window.title.clone(),
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins(CradleAppPlugin)
        .add_systems(Startup, move || {
            for w in &startup_warnings {
                warn!("Config: {w}");
            }
        })
        .run();

    Ok(())
}
