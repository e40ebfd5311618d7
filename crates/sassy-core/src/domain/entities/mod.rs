pub mod compile_request;
pub mod layout;

pub use compile_request::{CompileOutput, CompileRequest};
pub use layout::{StyleLayout, StyleLayoutBuilder};
