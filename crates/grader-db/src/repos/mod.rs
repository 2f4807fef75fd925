//! Repository methods, one module per record family.

mod conversation;
mod problem;
