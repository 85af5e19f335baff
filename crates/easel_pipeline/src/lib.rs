//! Structured-generation request pipeline.
//!
//! A request flows through five stages, each of which fails fast:
//!
//! 1. [`validator`] checks the untyped request body and resolves defaults
//! 2. [`prompt`] renders the system and user instructions
//! 3. [`invoker`] performs exactly one bounded model call
//! 4. [`normalizer`] strips code-fence wrappers from the answer
//! 5. [`result`] checks the answer against the expected output shape
//!
//! [`GenerationPipeline`] wires the stages together.

pub mod invoker;
pub mod normalizer;
mod pipeline;
pub mod prompt;
pub mod result;
pub mod validator;

pub use invoker::ModelInvoker;
pub use pipeline::{GenerationPipeline, ModelChoice};
