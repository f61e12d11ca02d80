//! # Stocklist Architecture
//!
//! Stocklist is a console inventory manager built as a **UI-agnostic library**
//! with a thin CLI client on top.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses options, runs the menu loop, renders output       │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the current Store value, keeps undo history         │
//! │  - Dispatches to the query/mutation functions               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model.rs, queries.rs, mutations.rs, aggregates.rs)   │
//! │  - Pure functions over plain values                         │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Mutations Return Fresh Stores
//!
//! A [`model::Store`] is an immutable-in-practice value. Every mutation in
//! [`mutations`] takes `&Store` and returns a new `Store`; the argument is
//! never modified. That makes every operation checkable by structural
//! equality, rules out aliasing between calls, and gives the API layer undo
//! for free (keep the old value, pop it back).
//!
//! ## Key Principle: No I/O in the Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<...>`)
//! - **Never** touches stdin/stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! ## Module Overview
//!
//! - [`api`]: The facade the CLI dispatches through
//! - [`model`]: Core data types (`Product`, `Store`) and the demo seed
//! - [`queries`]: Read-only operations (list, find, threshold filters)
//! - [`mutations`]: Functional add/remove/update
//! - [`aggregates`]: Standalone collection summaries, independent of the store
//! - [`error`]: Error types

pub mod aggregates;
pub mod api;
pub mod error;
pub mod model;
pub mod mutations;
pub mod queries;
