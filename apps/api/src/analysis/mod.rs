//! The resume analysis pipeline: prompt construction, model invocation,
//! reply parsing, and the HTTP handler that drives them.

pub mod handlers;
pub mod parser;
pub mod prompts;
