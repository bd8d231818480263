//! CLI utilities for Ecrist search tools
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Product and duration formatting

#![warn(missing_docs)]

pub mod output;
