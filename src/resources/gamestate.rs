//! High-level scene state resources.
//!
//! These resources track the authoritative current scene and any pending
//! transition requested by systems. See
//! `crate::events::gamestate::observe_gamestate_change_event` for how a
//! transition is applied and hooks are invoked.
//!
//! The scene graph is a small finite-state machine:
//!
//! ```text
//!   None ──boot──▶ Start ──Confirm──▶ Game ◀──Confirm──▶ Pause
//!                    │                 │                  │
//!                    └──────Quit───────┴───────Quit───────┴──▶ Exit
//! ```
//!
//! `Exit` is terminal; the driver stops the loop once it is reached.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    /// Before the first scene is entered.
    #[default]
    None,
    Start,
    Game,
    Pause,
    Exit,
}

/// Scene-level input that can cause a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneInput {
    Confirm,
    Quit,
}

impl GameStates {
    /// Transition function of the scene state machine.
    ///
    /// Returns `self` when the input does not cause a transition.
    pub fn transition(self, input: SceneInput) -> GameStates {
        match (self, input) {
            (GameStates::None | GameStates::Exit, _) => self,
            (_, SceneInput::Quit) => GameStates::Exit,
            (GameStates::Start, SceneInput::Confirm) => GameStates::Game,
            (GameStates::Game, SceneInput::Confirm) => GameStates::Pause,
            (GameStates::Pause, SceneInput::Confirm) => GameStates::Game,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == GameStates::Exit
    }

    /// Name of the system run when this state is entered, as registered in
    /// [`crate::resources::systemsstore::SystemsStore`].
    pub fn enter_hook(self) -> &'static str {
        match self {
            GameStates::None => "enter_none",
            GameStates::Start => "enter_start",
            GameStates::Game => "enter_game",
            GameStates::Pause => "enter_pause",
            GameStates::Exit => "enter_exit",
        }
    }

    /// Name of the system run when this state is left.
    pub fn exit_hook(self) -> &'static str {
        match self {
            GameStates::None => "exit_none",
            GameStates::Start => "exit_start",
            GameStates::Game => "exit_game",
            GameStates::Pause => "exit_pause",
            GameStates::Exit => "exit_exit",
        }
    }
}

/// Representation of a requested next state.
///
/// Use [`NextGameState::set`] to mark a transition as pending; an observer
/// will later apply it and reset the value to [`NextGameStates::Unchanged`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::None`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::None,
        }
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> GameStates {
        self.current
    }
    /// Update the current state immediately.
    ///
    /// Prefer requesting transitions via [`NextGameState`] and the event
    /// observer when enter/exit hooks must be triggered.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Intent to change to a new game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    /// Create a new value initialized to [`NextGameStates::Unchanged`].
    pub fn new() -> Self {
        NextGameState {
            next: NextGameStates::Unchanged,
        }
    }

    /// Get the current transition request.
    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    /// Request a transition to `next` by marking it as pending.
    ///
    /// The system `check_pending_state` will emit the change event.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    /// Reset to [`NextGameStates::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}
