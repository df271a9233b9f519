//! Business logic behind the CLI commands

pub mod add;
