//! Per-corpus adapters.
//!
//! Each submodule configures the generic extraction machinery for one
//! Russian-language annotated corpus: its label vocabulary, its on-disk
//! release layout, and (for SentiNEREL) the four-way pipeline factory.

pub mod nerel_bio;
pub mod sentinerel;
