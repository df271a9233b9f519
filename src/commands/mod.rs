//! Command implementations for lexicon CLI

pub mod add;
