//! Event types and observers used by the game.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events let systems report
//! what happened without knowing who listens.
//!
//! Submodules:
//! - [`combat`] – player damage, player death and enemy elimination reports
//! - [`gamestate`] – state transition notifications for the scene flow
//! - [`switchdebug`] – toggle debug rendering and diagnostics on/off
//!
//! See each submodule for concrete event data and semantics.
pub mod combat;
pub mod gamestate;
pub mod switchdebug;
