//! Command implementations behind the `translit` binary.

pub mod commands;
