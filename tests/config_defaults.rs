use std::fs;

use cradle_lab::core::config::config::SimConfig;

#[test]
fn shipped_config_matches_built_in_defaults() {
    // The file under assets/ documents every knob; drifting from the compiled
    // defaults would make the docs lie.
    let cfg = SimConfig::load_from_file("assets/config/cradle.ron").expect("shipped config parses");
    assert_eq!(cfg, SimConfig::default());
    assert_eq!(cfg.window.auto_close, 0.0, "auto close ships disabled");
    assert!(cfg.drag.enabled, "pointer dragging ships enabled");
}

#[test]
fn empty_document_is_all_defaults() {
    let mut path = std::env::temp_dir();
    path.push("cradle_lab_empty_config.ron");
    fs::write(&path, "()").expect("write temp ron");
    let cfg = SimConfig::load_from_file(&path).expect("empty tuple parses");
    assert_eq!(cfg, SimConfig::default());
}

#[test]
fn unknown_keys_are_ignored() {
    // Solver-level knobs from other engines have no meaning here and must not
    // break loading.
    let mut path = std::env::temp_dir();
    path.push("cradle_lab_unknown_keys.ron");
    let ron = r#"
        (
            initial: (ball_count: 6),
            drag: (enabled: true, slop: 1.0),
            solver: (iterations: 8),
        )
    "#;
    fs::write(&path, ron).expect("write temp ron");
    let (cfg, used, errors) = SimConfig::load_layered([&path]);
    assert_eq!(used.len(), 1);
    assert!(errors.is_empty(), "unknown keys must not error: {errors:?}");
    assert_eq!(cfg.initial.ball_count, 6);
    assert!(cfg.drag.enabled);
}

#[test]
fn local_overlay_wins_per_field() {
    let mut base = std::env::temp_dir();
    base.push("cradle_lab_layer_base.ron");
    let mut local = std::env::temp_dir();
    local.push("cradle_lab_layer_local.ron");
    fs::write(
        &base,
        r#"(
            window: (width: 1024.0, height: 768.0),
            initial: (ball_count: 7, spacing: 4.0),
        )"#,
    )
    .expect("write base ron");
    fs::write(
        &local,
        r#"(
            window: (title: "Bench rig"),
            drag: (enabled: false),
        )"#,
    )
    .expect("write local ron");

    let (cfg, used, errors) = SimConfig::load_layered([&base, &local]);
    assert_eq!(used.len(), 2);
    assert!(errors.is_empty(), "{errors:?}");
    // Overlay fields win, untouched base fields survive, the rest defaults.
    assert_eq!(cfg.window.title, "Bench rig");
    assert_eq!(cfg.window.width, 1024.0);
    assert_eq!(cfg.initial.ball_count, 7);
    assert_eq!(cfg.initial.spacing, 4.0);
    assert!(!cfg.drag.enabled);
    assert_eq!(cfg.gravity.y, -980.0);
}

#[test]
fn broken_file_reports_and_falls_back() {
    let mut path = std::env::temp_dir();
    path.push("cradle_lab_broken_config.ron");
    fs::write(&path, "(window: (width: ").expect("write temp ron");
    let (cfg, _used, errors) = SimConfig::load_layered([&path]);
    assert_eq!(cfg, SimConfig::default());
    assert!(
        errors.iter().any(|e| e.contains("parse error")),
        "expected a parse error, got: {errors:?}"
    );
}

#[test]
fn invalid_initial_cradle_warns_but_loads() {
    let mut path = std::env::temp_dir();
    path.push("cradle_lab_bad_initial.ron");
    fs::write(&path, "(initial: (ball_count: 0))").expect("write temp ron");
    let (cfg, _used, errors) = SimConfig::load_layered([&path]);
    assert!(errors.is_empty(), "zero count is a validation warning, not a load error");
    assert!(cfg.initial.to_params().is_err());
    let warnings = cfg.validate();
    assert!(
        warnings.iter().any(|w| w.contains("initial cradle")),
        "expected initial cradle warning, got: {warnings:?}"
    );
}
