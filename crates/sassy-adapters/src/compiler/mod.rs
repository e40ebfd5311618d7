//! Compiler adapters.

mod sass;
mod scripted;

pub use sass::{SassCompiler, SassWatch};
pub use scripted::{Script, ScriptedCompiler, ScriptedWatch};
