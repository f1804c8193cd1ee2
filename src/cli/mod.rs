//! Command line interface for kusari.

pub mod args;
pub mod commands;
