//! Title screen: `GameState` definition and `MainMenuPlugin`.
//!
//! ## States
//!
//! | State              | Description                            |
//! |--------------------|----------------------------------------|
//! | `MainMenu`         | Initial state; title screen shown      |
//! | `Playing`          | Simulation running; all game systems active |
//!
//! ## Systems (registered by `MainMenuPlugin`)
//!
//! | System                  | Schedule                     | Purpose                     |
//! |-------------------------|------------------------------|-----------------------------|
//! | `setup_main_menu`       | `OnEnter(MainMenu)`          | Spawn full-screen menu UI   |
//! | `cleanup_main_menu`     | `OnExit(MainMenu)`           | Despawn menu UI entities    |
//! | `menu_button_system`    | `Update / in MainMenu`       | PLAY click or Enter starts  |

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

// ── Game state ────────────────────────────────────────────────────────────────

/// Top-level application state machine.
///
/// Every simulation system in [`crate::simulation::SimulationPlugin`] runs
/// under `.run_if(in_state(GameState::Playing))`, so they are fully inactive
/// while the menu is displayed.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Title screen; shown on startup.
    #[default]
    MainMenu,
    /// Active game.
    Playing,
}

// ── Component markers ─────────────────────────────────────────────────────────

/// Root node of the main-menu UI; entire tree is despawned on `OnExit(MainMenu)`.
#[derive(Component)]
pub struct MainMenuRoot;

/// Tags the "PLAY" button.
#[derive(Component)]
pub struct MenuStartButton;

/// Keyboard shortcut for the PLAY button.
pub const START_KEY: KeyCode = KeyCode::Enter;

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers `GameState`, the menu UI setup/teardown, and the start handler.
///
/// This plugin must be added to the app **before** any plugin that calls
/// `.run_if(in_state(GameState::Playing))`, so the state is always registered
/// first.
pub struct MainMenuPlugin;

impl Plugin for MainMenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(OnEnter(GameState::MainMenu), setup_main_menu)
            .add_systems(OnExit(GameState::MainMenu), cleanup_main_menu)
            .add_systems(
                Update,
                menu_button_system.run_if(in_state(GameState::MainMenu)),
            );
    }
}

// ── Colour helpers ────────────────────────────────────────────────────────────

fn start_bg() -> Color {
    Color::srgb(0.06, 0.18, 0.36)
}
fn start_border() -> Color {
    Color::srgb(0.30, 0.55, 0.95)
}
fn start_text() -> Color {
    Color::srgb(0.80, 0.90, 1.0)
}
fn title_color() -> Color {
    Color::srgb(0.95, 0.88, 0.45)
}
fn hint_color() -> Color {
    Color::srgb(0.45, 0.45, 0.55)
}

// ── OnEnter(MainMenu): spawn UI ───────────────────────────────────────────────

/// Spawn the full-screen title overlay.
///
/// Layout:
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │               ORBIT HOPPER                  │
/// │                                             │
/// │                 [ PLAY ]                    │
/// │                                             │
/// │   Arrows/WASD steer · Space boost · T pause │
/// └─────────────────────────────────────────────┘
/// ```
pub fn setup_main_menu(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::BLACK),
            MainMenuRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("ORBIT HOPPER"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(root, 52.0);

            root.spawn((
                Button,
                Node {
                    width: Val::Px(220.0),
                    height: Val::Px(50.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(start_bg()),
                BorderColor::all(start_border()),
                MenuStartButton,
            ))
            .with_children(|btn| {
                btn.spawn((
                    Text::new("PLAY"),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(start_text()),
                ));
            });

            spacer(root, 52.0);

            root.spawn((
                Text::new("Arrows/WASD steer  ·  Space boost  ·  T pause"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(hint_color()),
            ));
        });
}

/// Spawn a fixed-height invisible spacer node.
fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}

// ── OnExit(MainMenu): despawn UI ──────────────────────────────────────────────

/// Recursively despawn all main-menu entities.
pub fn cleanup_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

// ── Update (MainMenu only): start ─────────────────────────────────────────────

/// Start the game on a PLAY click or the Enter key.
///
/// The transition triggers `OnEnter(Playing)`, which resets the simulation.
#[allow(clippy::type_complexity)]
pub fn menu_button_system(
    start_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<MenuStartButton>)>,
    mut btn_text: Query<&mut TextColor>,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.is_some_and(|k| k.just_pressed(START_KEY)) {
        next_state.set(GameState::Playing);
        return;
    }

    for (interaction, children) in start_query.iter() {
        // Tint button text on hover; trigger on press
        let tint = match interaction {
            Interaction::Pressed => {
                next_state.set(GameState::Playing);
                continue;
            }
            Interaction::Hovered => Color::WHITE,
            Interaction::None => start_text(),
        };
        for child in children.iter() {
            if let Ok(mut color) = btn_text.get_mut(child) {
                *color = TextColor(tint);
            }
        }
    }
}
