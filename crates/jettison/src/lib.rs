//! Jettison - Carthage artifact cleanup for Xcode projects.
//!
//! This crate provides both a CLI application and a library for rewriting
//! an Xcode project's object graph: pruning Carthage copy-script build
//! phases, scrubbing framework search paths, retargeting file references at
//! the build products directory, and embedding linked frameworks.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod app;
pub mod domain;
pub mod error;
pub mod id_generation;
pub mod passes;
pub mod project;
pub mod store;

// Public CLI module (needed by binary)
pub mod cli;

// Console output helpers
pub mod output;
