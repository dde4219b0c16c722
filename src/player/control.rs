//! Player input systems.
//!
//! ## Pipeline (runs in order every `Update` frame while `Playing`)
//!
//! 1. [`player_intent_clear_system`]: resets `ShipIntent`.
//! 2. [`keyboard_to_intent_system`]: arrows / WASD into `ShipIntent`.
//! 3. [`boost_trigger_system`]: Space press charges a boost, release arms the launch.
//! 4. [`pause_toggle_system`]: T flips the pause flag.
//!
//! The simulation only ever reads `ShipIntent`, so tests populate the resource
//! directly and never need a keyboard.

use super::state::ShipIntent;
use crate::config::PhysicsConfig;
use crate::simulation::SimulationState;
use bevy::prelude::*;

/// Key that charges a boost near a planet.
pub const BOOST_KEY: KeyCode = KeyCode::Space;
/// Key that pauses and resumes the simulation.
pub const PAUSE_KEY: KeyCode = KeyCode::KeyT;

// ── Step 1: Clear ─────────────────────────────────────────────────────────────

/// Reset [`ShipIntent`] at the start of every frame.
pub fn player_intent_clear_system(mut intent: ResMut<ShipIntent>) {
    *intent = ShipIntent::default();
}

// ── Step 2: Keyboard → Intent ─────────────────────────────────────────────────

/// Translate movement keys into [`ShipIntent`].
///
/// Arrow keys and WASD are interchangeable; opposite keys held together
/// cancel in [`ShipIntent::direction`].
pub fn keyboard_to_intent_system(keys: Res<ButtonInput<KeyCode>>, mut intent: ResMut<ShipIntent>) {
    intent.up = keys.any_pressed([KeyCode::ArrowUp, KeyCode::KeyW]);
    intent.down = keys.any_pressed([KeyCode::ArrowDown, KeyCode::KeyS]);
    intent.left = keys.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]);
    intent.right = keys.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]);
}

// ── Step 3: Boost trigger ─────────────────────────────────────────────────────

/// Press edge: try to charge a boost from a nearby planet.  Release: arm the
/// launch.  Both edges are handled while paused too.
pub fn boost_trigger_system(
    keys: Res<ButtonInput<KeyCode>>,
    intent: Res<ShipIntent>,
    mut sim: ResMut<SimulationState>,
    config: Res<PhysicsConfig>,
) {
    if keys.just_pressed(BOOST_KEY) {
        if let Some(index) = sim.press_boost(&intent, &config) {
            debug!("Boost charged from planet #{index}: {:.0}", sim.ship.boost);
        }
    }
    if keys.just_released(BOOST_KEY) {
        sim.release_boost();
    }
}

// ── Step 4: Pause ─────────────────────────────────────────────────────────────

/// Toggle pause on the T key.
pub fn pause_toggle_system(keys: Res<ButtonInput<KeyCode>>, mut sim: ResMut<SimulationState>) {
    if keys.just_pressed(PAUSE_KEY) {
        let paused = sim.toggle_pause();
        info!("Simulation {}", if paused { "paused" } else { "resumed" });
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── helpers ───────────────────────────────────────────────────────────────

    /// Minimal app with keyboard input inserted by hand (no window, no input plugin).
    fn build_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        let config = PhysicsConfig {
            star_count: 0,
            ..PhysicsConfig::default()
        };
        app.insert_resource(SimulationState::with_seed(&config, 3));
        app.insert_resource(config);
        app.insert_resource(ShipIntent::default());
        app.insert_resource(ButtonInput::<KeyCode>::default());
        app.add_systems(
            Update,
            (
                player_intent_clear_system,
                keyboard_to_intent_system,
                boost_trigger_system,
                pause_toggle_system,
            )
                .chain(),
        );
        app
    }

    fn press(app: &mut App, key: KeyCode) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    fn release(app: &mut App, key: KeyCode) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(key);
    }

    /// Drop the just-pressed / just-released edges, as the input plugin does
    /// between frames.
    fn end_frame(app: &mut App) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear();
    }

    fn intent(app: &App) -> ShipIntent {
        *app.world().resource::<ShipIntent>()
    }

    // ── keyboard_to_intent_system ─────────────────────────────────────────────

    #[test]
    fn arrow_and_wasd_map_to_same_intent() {
        let mut app = build_test_app();
        press(&mut app, KeyCode::ArrowUp);
        press(&mut app, KeyCode::KeyD);
        app.update();

        let i = intent(&app);
        assert!(i.up && i.right);
        assert!(!i.down && !i.left);
    }

    #[test]
    fn released_keys_clear_intent() {
        let mut app = build_test_app();
        press(&mut app, KeyCode::KeyA);
        app.update();
        assert!(intent(&app).left);

        release(&mut app, KeyCode::KeyA);
        end_frame(&mut app);
        app.update();
        assert_eq!(intent(&app), ShipIntent::default());
    }

    // ── pause_toggle_system ───────────────────────────────────────────────────

    #[test]
    fn pause_key_toggles_on_press_edge_only() {
        let mut app = build_test_app();
        press(&mut app, PAUSE_KEY);
        app.update();
        assert!(app.world().resource::<SimulationState>().paused);

        // Still held: no second toggle.
        end_frame(&mut app);
        app.update();
        assert!(app.world().resource::<SimulationState>().paused);

        release(&mut app, PAUSE_KEY);
        end_frame(&mut app);
        app.update();
        press(&mut app, PAUSE_KEY);
        app.update();
        assert!(!app.world().resource::<SimulationState>().paused);
    }

    // ── boost_trigger_system ──────────────────────────────────────────────────

    fn park_near_first_planet(app: &mut App) {
        // 307 units above the centre of the (1500, 1300) planet: inside 1.1 × size.
        app.world_mut().resource_mut::<SimulationState>().ship.position =
            Vec2::new(1500.0, 1300.0 - 307.0);
    }

    #[test]
    fn boost_press_charges_and_release_arms() {
        let mut app = build_test_app();
        park_near_first_planet(&mut app);

        press(&mut app, KeyCode::ArrowUp);
        press(&mut app, BOOST_KEY);
        app.update();
        {
            let sim = app.world().resource::<SimulationState>();
            assert_eq!(sim.ship.boost, 9810.0);
            assert!(!sim.boost_trigger.is_ready());
        }

        end_frame(&mut app);
        release(&mut app, BOOST_KEY);
        app.update();
        assert!(app
            .world()
            .resource::<SimulationState>()
            .boost_trigger
            .is_ready());
    }

    #[test]
    fn boost_press_without_movement_key_does_nothing() {
        let mut app = build_test_app();
        park_near_first_planet(&mut app);

        press(&mut app, BOOST_KEY);
        app.update();

        assert_eq!(app.world().resource::<SimulationState>().ship.boost, 0.0);
    }

    #[test]
    fn boost_press_charges_while_paused() {
        let mut app = build_test_app();
        park_near_first_planet(&mut app);
        app.world_mut().resource_mut::<SimulationState>().paused = true;

        press(&mut app, KeyCode::ArrowUp);
        press(&mut app, BOOST_KEY);
        app.update();

        let sim = app.world().resource::<SimulationState>();
        assert!(sim.paused);
        assert_eq!(sim.ship.boost, 9810.0);
        assert!(!sim.boost_trigger.is_ready());
        // Frozen: the charge waits for the next unpaused tick.
        assert_eq!(sim.ship.position, Vec2::new(1500.0, 1300.0 - 307.0));
    }
}
