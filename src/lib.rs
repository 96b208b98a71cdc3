//! Motorsort - sorts motorsport broadcast recordings into a media library
//!
//! This library crate exposes the application layers for integration testing.

pub mod config;
pub mod library;
pub mod processor;
pub mod scanner;
