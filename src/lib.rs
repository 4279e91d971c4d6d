//! # Labyrinth Agent
//!
//! Turn-based decision agent for a sliding-tile labyrinth game. Each turn the
//! referee sends the whole board; the agent answers with one push, move or
//! pass.
//!
//! ## Modules
//!
//! - [`game`] — Tiles, grid, game state and the push transform
//! - [`ai`] — Agent trait, connectivity search, turn policy, random agent
//! - [`protocol`] — Turn parsing and action output
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod protocol;
