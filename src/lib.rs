pub mod config;
pub mod diagnostics;
pub mod error;
pub mod frequency;
pub mod keys;
pub mod layouts;
pub mod loader;
pub mod penalties;
pub mod scorer;
// cmd and reports are modules of the binary crate (main.rs).

pub use error::{GradeError, GradeResult};
pub use scorer::{Grader, GraderBuilder};
