use bevy::prelude::*;
use std::{collections::HashMap, path::PathBuf, time::SystemTime};

use crate::core::config::SimConfig;
use crate::cradle::spawn::RebuildCradle;

/// Files polled for changes, lowest precedence first. `main` extends the
/// list with any `--config` override so edits to it reload too.
#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    pub interval_secs: f32,
}
impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: vec![
                PathBuf::from("assets/config/cradle.ron"),
                PathBuf::from("assets/config/cradle.local.ron"),
            ],
            interval_secs: 0.5,
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}
impl FromWorld for ConfigReloadState {
    fn from_world(_world: &mut World) -> Self {
        Self {
            last_mod: HashMap::new(),
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
        }
    }
}

pub struct ConfigHotReloadPlugin;
impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.init_resource::<ConfigReloadSettings>()
                .init_resource::<ConfigReloadState>()
                .add_systems(Update, poll_and_reload_config);
        }
    }
}

/// Re-reads the layered config when any file's mtime moves forward. Window
/// size and title apply here, a changed initial cradle section requests one
/// rebuild through the normal pipeline, and everything else is picked up by
/// the systems that read [`SimConfig`] live.
fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<SimConfig>,
    mut rebuilds: EventWriter<RebuildCradle>,
    mut windows: Query<&mut Window>,
) {
    if (state.timer.duration().as_secs_f32() - settings.interval_secs).abs() > f32::EPSILON {
        state
            .timer
            .set_duration(std::time::Duration::from_secs_f32(settings.interval_secs.max(0.05)));
    }
    if !state.timer.tick(time.delta()).finished() {
        return;
    }
    use std::fs;
    use std::time::UNIX_EPOCH;
    let mut dirty = false;
    for path in &settings.paths {
        if let Ok(meta) = fs::metadata(path) {
            if let Ok(mod_time) = meta.modified() {
                let entry = state.last_mod.entry(path.clone()).or_insert(UNIX_EPOCH);
                if mod_time > *entry {
                    *entry = mod_time;
                    dirty = true;
                }
            }
        }
    }
    if !dirty {
        return;
    }
    let (new_cfg, _used, errors) = SimConfig::load_layered(settings.paths.iter());
    if !errors.is_empty() {
        for e in errors {
            warn!("Config hot-reload issue: {e}");
        }
    }
    if *cfg_res == new_cfg {
        return;
    }
    for warning in new_cfg.validate() {
        warn!("Config hot-reload: {warning}");
    }
    info!("Config hot-reload applied");
    let initial_changed = cfg_res.initial != new_cfg.initial;
    *cfg_res = new_cfg.clone();
    if initial_changed {
        match new_cfg.initial.to_params() {
            Ok(params) => {
                info!("Config hot-reload: initial cradle changed, rebuilding");
                rebuilds.write(RebuildCradle(params));
            }
            Err(e) => warn!("Config hot-reload: initial cradle rejected: {e}"),
        }
    }
    if let Ok(mut window) = windows.single_mut() {
        if window.width() != new_cfg.window.width || window.height() != new_cfg.window.height {
            window
                .resolution
                .set(new_cfg.window.width, new_cfg.window.height);
        }
        if window.title != new_cfg.window.title {
            window.title = new_cfg.window.title.clone();
        }
    }
}
