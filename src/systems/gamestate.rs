//! Scene flow systems.
//!
//! [`scene_input_system`] turns the confirm/quit keys into a transition
//! request, [`check_pending_state`] fires the change event when one is
//! pending, and [`state_is_game`] gates the gameplay systems.
use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates, SceneInput};
use crate::resources::input::InputState;
use bevy_ecs::prelude::*;

/// Request a scene change when confirm or quit was pressed this frame.
///
/// Quit wins when both are pressed together.
pub fn scene_input_system(
    input: Res<InputState>,
    state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
) {
    let scene_input = if input.quit.just_pressed {
        SceneInput::Quit
    } else if input.confirm.just_pressed {
        SceneInput::Confirm
    } else {
        return;
    };
    let current = state.get();
    let target = current.transition(scene_input);
    if target != current {
        next_state.set(target);
    }
}

pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    if let NextGameStates::Pending(_new_state) = next_state.get() {
        commands.trigger(GameStateChangedEvent {});
    }
}

pub fn state_is_game(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Game)
}
