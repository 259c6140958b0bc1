//! Cssdig - design token discovery for CSS codebases
//!
//! Cssdig is a CLI tool and library that scans CSS source text and extracts
//! recurring stylistic values (custom properties, colors, spacing values,
//! font families, border radii, box shadows) into a structured JSON summary.
//! It is a best-effort pattern scan, not a CSS parser: approximate by design,
//! so it stays robust on malformed or unusual input.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, dispatch, reporting)
//! - `config`: Configuration file loading and parsing
//! - `document`: Output document shape and serialization
//! - `scanner`: Recursive CSS file discovery
//! - `tokens`: The extraction engine

pub mod cli;
pub mod config;
pub mod document;
pub mod scanner;
pub mod tokens;
