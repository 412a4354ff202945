//! Error types and error handling for the front end.
//!
//! This module defines the error types used throughout syntactic analysis.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for scanning, reduction driving and root publication
//! - Helpful error messages and suggestions

pub mod errors;
