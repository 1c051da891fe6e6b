//! # incroot - Include-root discovery for C/C++ editor tooling
//!
//! incroot scans a project tree for `#include` directives, infers the
//! include search-path roots those headers resolve against, and generates a
//! code-completion config carrying the discovered `-I` flags.
//!
//! ## Quick Start
//!
//! ```bash
//! # Scan the current project and write .ycm_extra_conf.py
//! incroot
//!
//! # Inspect without writing anything
//! incroot --dry-run -v
//! ```
//!
//! ## Module Organization
//!
//! - [`walk`] - Source/header file discovery
//! - [`scan`] - Per-file `#include` extraction into the occurrence map
//! - [`resolve`] - Header-to-directory resolution heuristic
//! - [`flags`] - `-I` flag rendering (v1/v2 layouts)
//! - [`template`] - Completion-template fetch and placeholder substitution

/// Project configuration (`incroot.toml`).
pub mod config;

/// Include-directive lexing.
pub mod extract;

/// Compiler-flag rendering.
pub mod flags;

/// VSCode IntelliSense config generator.
pub mod ide;

/// Include-root resolution heuristic.
pub mod resolve;

/// Per-file include scanning.
pub mod scan;

/// Completion-template materialization.
pub mod template;

/// Terminal UI utilities (tables).
pub mod ui;

/// Source-file discovery.
pub mod walk;
