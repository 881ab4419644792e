//! Known-answer ECDH vectors
//!
//! Vector files live under `src/vectors/json`. Each case either derives
//! the expected public key and shared x-coordinate, or fails with the
//! expected error category.

pub mod loader;
pub mod model;
pub mod runner;

pub use error::{Result, VectorError};
pub use loader::{load_suite, vector_dir};
pub use model::{ExpectedResult, TestCase, TestGroup, TestSuite};
pub use runner::{run_case, run_suite, CaseReport};
