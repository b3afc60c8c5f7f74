use bevy::prelude::*;

use crate::core::config::SimConfig;

#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

/// Exits the app after `window.autoClose` seconds. Zero (the shipped
/// default) leaves the timer unarmed; useful for demo recordings and for
/// bounding headless runs.
pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_auto_close).add_systems(
            Update,
            tick_auto_close.run_if(resource_exists::<AutoCloseTimer>),
        );
    }
}

fn arm_auto_close(mut commands: Commands, cfg: Res<SimConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!("AutoClose: will exit after {secs} seconds");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn tick_auto_close(
    time: Res<Time>,
    mut timer: ResMut<AutoCloseTimer>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if timer.tick(time.delta()).just_finished() {
        info!("AutoClose: timer finished, requesting app exit");
        ev_exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(auto_close: f32) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        let mut cfg = SimConfig::default();
        cfg.window.auto_close = auto_close;
        app.insert_resource(cfg);
        app.add_plugins(AutoClosePlugin);
        app.update();
        app
    }

    #[test]
    fn zero_means_disabled() {
        let app = app_with(0.0);
        assert!(app.world().get_resource::<AutoCloseTimer>().is_none());
    }

    #[test]
    fn positive_value_arms_the_timer() {
        let app = app_with(2.5);
        let timer = app.world().get_resource::<AutoCloseTimer>().unwrap();
        assert_eq!(timer.duration().as_secs_f32(), 2.5);
    }
}
