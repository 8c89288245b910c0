//! Seesaw (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, integration
//! tests and benchmarks can use `seesaw::{core, input, term, types}`.

pub use seesaw_core as core;
pub use seesaw_input as input;
pub use seesaw_term as term;
pub use seesaw_types as types;
