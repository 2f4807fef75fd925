//! # grader-core
//!
//! Core record types, answer grading, and tutoring prompt seeding.
//!
//! This crate provides the foundational types shared across all grader crates:
//! - Draft records produced by the response parser (no ids, no counts)
//! - Persisted `Test` and `Problem` records returned by the store
//! - The answer comparator and aggregate scoring
//! - The initial tutoring message built from a stored problem
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod grading;
pub mod responses;
pub mod tutor;
