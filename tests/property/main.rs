//! Property-based tests
//!
//! Credential and token round trips, and independence of validation checks.

#[path = "../common/mod.rs"]
mod common;

mod credential_proptest;
mod token_proptest;
mod validator_proptest;
