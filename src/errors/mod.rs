//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - Error structures with optional source position information
//! - Specific error variants for the front-end and the lowering engine
//! - Error names and suggestions used by the diagnostic renderer

pub mod errors;
