//! # Core Application Logic
//!
//! This module contains Kalkulator's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Calculator           │
//!                    │  • Converter            │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calculator`]: the single pending-operation evaluator and its history
//! - [`converter`]: categories, units and the conversion tables
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: `~/.kalkulator/config.toml` and the override hierarchy
//! - [`format`]: number display rules shared by both screens

pub mod action;
pub mod calculator;
pub mod config;
pub mod converter;
pub mod format;
pub mod state;

pub use action::{Action, Effect, update};
pub use state::App;
