use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::cradle::params::{CradleParams, InvalidParameter};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Newton's Cradle Lab".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -980.0 }
    }
}

/// Parameters the first scene is built from; afterwards the live controls own
/// them. Values go through the same checks as interactive input.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InitialCradleConfig {
    pub ball_count: u32,
    pub spacing: f32,
    pub rope_length: f32,
}
impl Default for InitialCradleConfig {
    fn default() -> Self {
        Self {
            ball_count: 5,
            spacing: 10.0,
            rope_length: 200.0,
        }
    }
}
impl InitialCradleConfig {
    pub fn to_params(&self) -> Result<CradleParams, InvalidParameter> {
        CradleParams::checked(self.ball_count, self.spacing, self.rope_length)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DragConfig {
    pub enabled: bool,
    pub grab_radius: f32,
    pub stiffness: f32,
    pub damping_ratio: f32,
}
impl Default for DragConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            grab_radius: 35.0,
            stiffness: 0.2,
            damping_ratio: 0.7,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub initial: InitialCradleConfig,
    pub drag: DragConfig,
    pub draw_ropes: bool,
    pub rapier_debug: bool,
}
impl Default for SimConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            gravity: Default::default(),
            initial: Default::default(),
            drag: Default::default(),
            draw_ropes: true,
            rapier_debug: false,
        }
    }
}

impl SimConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        let mut replaced = false;
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                let val = incoming.take().unwrap();
                                merge_value(ev, val);
                                replaced = true;
                                break;
                            }
                        }
                        if !replaced {
                            bm.insert(k, incoming.unwrap());
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        if let Some(val) = merged {
            match val.clone().into_rust::<SimConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => (SimConfig::default(), used, {
                    let mut evec = errors;
                    evec.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    evec
                }),
            }
        } else {
            (SimConfig::default(), used, errors)
        }
    }
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if self.gravity.y.abs() < 1e-4 {
            w.push("gravity.y magnitude near zero; bobs will not settle".into());
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); Y-up world? typical configs use negative for downward",
                self.gravity.y
            ));
        }
        if self.gravity.y < -4000.0 {
            w.push(format!(
                "gravity.y very large magnitude ({}); integration instability possible",
                self.gravity.y
            ));
        }
        if let Err(e) = self.initial.to_params() {
            w.push(format!("initial cradle rejected, using defaults: {e}"));
        }
        if self.initial.ball_count > 200 {
            w.push(format!(
                "initial.ball_count {} very high; rebuilds will be slow",
                self.initial.ball_count
            ));
        }
        if self.drag.enabled {
            if self.drag.grab_radius <= 0.0 {
                w.push("drag.grab_radius must be > 0".into());
            }
            if !(0.0..=1.0).contains(&self.drag.stiffness) || self.drag.stiffness == 0.0 {
                w.push(format!(
                    "drag.stiffness {} outside (0..1]; pointer spring tuned for that range",
                    self.drag.stiffness
                ));
            }
            if !(0.0..=2.0).contains(&self.drag.damping_ratio) {
                w.push(format!(
                    "drag.damping_ratio {} outside 0..2",
                    self.drag.damping_ratio
                ));
            }
        }
        w
    }
}
