//! Inspecta - quality inspection record management.
//!
//! This crate provides both a CLI application and a library for browsing
//! and mutating inspection records through an injectable store backend.
//! The bundled in-memory backend serves a deterministic seed dataset; the
//! trait surface matches the production contract so a network-backed store
//! can replace it without changing callers.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod seed;
pub mod store;

// Public CLI module (needed by binary)
pub mod cli;

// Output formatting for CLI commands
pub mod output;
