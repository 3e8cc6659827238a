//! File I/O for YAML sources.
//!
//! This module provides functionality to read YAML text from disk or stdin,
//! including gzip-compressed input.

pub mod loader;
