//!
//! This crate contains common types that are useful to be shared across multiple tools when manipulating Lox-related things.
//!

/// The Lox expression tree definitions.
pub mod ast;
/// The error-reporting types shared by every pipeline stage.
pub mod error;
/// The Lox lexical token definitions.
pub mod token;
