//!
//! The Lox Lexical Analyser
//! ========================
//!
//! This crate serves as the lexical analyser for the Lox scripting language.
//!

mod scanner;

pub use crate::scanner::Scanner;
