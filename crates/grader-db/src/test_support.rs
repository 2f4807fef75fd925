//! Shared test utilities for grader-db unit tests.
