//! Shared traversal over formdeck forms

pub mod visitor;

pub use visitor::*;
