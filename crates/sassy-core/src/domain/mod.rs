// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Sassy.
//!
//! This module contains pure logic with no I/O. Discovery, file access and
//! process spawning are handled via ports (traits) defined in the
//! application layer.
//!
//! - **No I/O**: the preamble rule works on strings, compile requests are
//!   plain argument lists
//! - **Validated values**: a built [`StyleLayout`] is always usable
//! - **Immutable entities**: all domain objects are Clone + PartialEq

pub mod common;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    compile_request::{LOAD_PATH_FLAG, NO_SOURCE_MAP_FLAG, STYLE_FLAG, WATCH_FLAG},
    layout::{
        DEFAULT_COMPILER, DEFAULT_CSS_DIR, DEFAULT_LOAD_PATH, DEFAULT_SCSS_DIRS,
        DEFAULT_SCSS_FILES,
    },
    CompileOutput, CompileRequest, StyleLayout, StyleLayoutBuilder,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{CompileMode, GlobPattern, PathKind, Preamble, PreambleOutcome};

pub use common::join_normalized;
