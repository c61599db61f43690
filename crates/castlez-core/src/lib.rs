//! Core types and definitions for the castlez grid world.
//!
//! This crate defines the vocabulary shared across the other crates:
//! grid types, components, commands, snapshots, events, errors and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
