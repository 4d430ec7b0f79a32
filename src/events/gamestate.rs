//! Game state transition event and observer.
//!
//! Systems request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and invokes the exit/enter systems stored in
//! [`crate::resources::systemsstore::SystemsStore`].
//!
//! This decouples the intent to change state from the mechanics of running
//! setup/teardown systems and avoids borrowing conflicts.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
///
/// Emitting this event causes [`observe_gamestate_change_event`] to read
/// [`NextGameState`]. If it contains [`Pending`], the observer updates the
/// authoritative [`GameState`], runs exit/enter hooks, and clears the pending
/// value; if it is [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], then:
///   - runs the exit hook of the previous state
///   - runs the enter hook of the new state
///   - resets [`NextGameState`] to [`Unchanged`]
/// - If any required resource is missing, logs a diagnostic and returns.
///
/// Hooks are looked up in [`SystemsStore`] under the names given by
/// [`GameStates::exit_hook`] and [`GameStates::enter_hook`]. States without
/// a registered hook are skipped.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Option<Res<SystemsStore>>,
) {
    debug!("GameStateChangedEvent triggered");

    let (Some(next_game_state), Some(game_state), Some(systems_store)) = (
        next_game_state.as_deref_mut(),
        game_state.as_deref_mut(),
        systems_store.as_deref(),
    ) else {
        warn!("One or more resources missing in observe_gamestate_change_event");
        return;
    };

    // Clone the next state value first so we don't keep an immutable borrow while mutating.
    let next_state_value = next_game_state.get().clone();
    match next_state_value {
        Pending(new_state) => {
            let old_state = game_state.get();
            info!("Transitioning from {:?} to {:?}", old_state, new_state);
            game_state.set(new_state);
            next_game_state.reset();
            run_hook(old_state.exit_hook(), &mut commands, systems_store);
            run_hook(new_state.enter_hook(), &mut commands, systems_store);
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

/// Queue the system registered under `name`, if any.
fn run_hook(name: &str, commands: &mut Commands, systems_store: &SystemsStore) {
    match systems_store.get(name) {
        Some(id) => {
            debug!("Running scene hook {}", name);
            commands.run_system(*id);
        }
        None => debug!("No scene hook registered for {}", name),
    }
}

/// Request a transition to `state` and apply it right away.
///
/// Used by the driver to enter the first scene.
pub fn request_transition(world: &mut World, state: GameStates) {
    world.resource_mut::<NextGameState>().set(state);
    world.trigger(GameStateChangedEvent {});
    world.flush();
}
