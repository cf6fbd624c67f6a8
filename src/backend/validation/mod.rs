//! Request Validation Module
//!
//! Structured input validation that runs before any state mutation.
//!
//! - **`validator`** - `Validator` trait, `Evaluator` and the predicate library
//! - **`pipeline`** - decode + validate, and the `ValidatedJson` extractor

pub mod validator;

pub mod pipeline;

pub use pipeline::{decode_valid, PipelineError, ValidatedJson};
pub use validator::{
    matches, max_bytes, max_chars, min_chars, not_blank, Evaluator, Problems, ValidationContext,
    Validator, EMAIL_RX,
};
