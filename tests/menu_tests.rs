//! Headless unit tests for the [`GameState`] state machine.
//!
//! These tests use [`MinimalPlugins`] (no window or rendering)
//! so they run fast and deterministically in CI.
//!
//! Covered scenarios:
//! 1. Default initial state is `MainMenu`.
//! 2. A `NextState` request transitions from `MainMenu` → `Playing`.
//! 3. `Playing` state persists across frames with no new transition request.
//! 4. `insert_state` can force-start directly in `Playing`.
//! 5. Enter on the title screen starts a game with a freshly reset simulation.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use orbit_hopper::config::PhysicsConfig;
use orbit_hopper::menu::{GameState, MainMenuPlugin, START_KEY};
use orbit_hopper::simulation::{SimulationPlugin, SimulationState};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a minimal headless app with just the state registered via `init_state`.
///
/// `MinimalPlugins` provides the required scheduling infrastructure.
/// `StatesPlugin` adds the `StateTransition` schedule needed by `init_state`.
/// No window or rendering is created.
fn app_with_default_state() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    app
}

/// Build a minimal headless app with the state forced into `Playing` from the
/// start.
fn app_with_playing_state() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_state(GameState::Playing);
    app
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// The default variant of `GameState` is `MainMenu`.
#[test]
fn default_state_is_main_menu() {
    let mut app = app_with_default_state();
    app.update(); // run one frame so StateTransition fires
    let state = app.world().resource::<State<GameState>>();
    assert_eq!(
        *state.get(),
        GameState::MainMenu,
        "initial state must be MainMenu"
    );
}

/// Requesting `Playing` via `NextState` transitions the state on the next
/// `StateTransition` pass (which Bevy runs before each `Update`).
#[test]
fn transition_main_menu_to_playing() {
    let mut app = app_with_default_state();
    app.update(); // settle into MainMenu

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Playing);

    app.update(); // StateTransition fires; state becomes Playing

    let state = app.world().resource::<State<GameState>>();
    assert_eq!(
        *state.get(),
        GameState::Playing,
        "state must be Playing after explicit transition"
    );
}

/// `Playing` state persists across additional frames.
#[test]
fn playing_state_persists_across_frames() {
    let mut app = app_with_default_state();
    app.update();

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Playing);
    app.update();

    // Run several more frames without another transition request.
    for _ in 0..5 {
        app.update();
    }

    let state = app.world().resource::<State<GameState>>();
    assert_eq!(
        *state.get(),
        GameState::Playing,
        "Playing must remain stable without a new transition"
    );
}

/// `insert_state` can force the initial state to `Playing` directly.
#[test]
fn insert_state_starts_in_playing() {
    let mut app = app_with_playing_state();
    app.update();

    let state = app.world().resource::<State<GameState>>();
    assert_eq!(
        *state.get(),
        GameState::Playing,
        "insert_state(Playing) must start directly in Playing"
    );
}

/// Requesting `Playing` when already in `Playing` is a no-op.
#[test]
fn redundant_transition_to_playing_is_stable() {
    let mut app = app_with_playing_state();
    app.update();

    // Request Playing again while already in Playing.
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Playing);
    app.update();

    let state = app.world().resource::<State<GameState>>();
    assert_eq!(
        *state.get(),
        GameState::Playing,
        "redundant Playing → Playing transition must leave state unchanged"
    );
}

/// The full menu + simulation wiring: Enter on the title screen moves to
/// `Playing`, and entering `Playing` resets the session.
#[test]
fn enter_key_starts_fresh_game() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    let config = PhysicsConfig {
        star_count: 0,
        ..PhysicsConfig::default()
    };
    let mut sim = SimulationState::with_seed(&config, 21);
    sim.score = 7;
    sim.ship.position = Vec2::new(-400.0, 900.0);
    app.insert_resource(sim);
    app.insert_resource(config);
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.add_plugins((MainMenuPlugin, SimulationPlugin));

    app.update(); // settle into MainMenu
    assert_eq!(app.world().resource::<SimulationState>().score, 7);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(START_KEY);
    app.update(); // menu requests Playing
    app.update(); // StateTransition fires; OnEnter(Playing) resets

    let state = app.world().resource::<State<GameState>>();
    assert_eq!(*state.get(), GameState::Playing);

    let sim = app.world().resource::<SimulationState>();
    assert_eq!(sim.score, 0);
    assert!(
        sim.ship.position.length() < 1.0,
        "ship must restart near the origin, got {:?}",
        sim.ship.position
    );
}
