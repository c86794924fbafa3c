//! ordered-forest-util - Random operation traces for ordered-forest
//!
//! Seeded generators used by the ordered-forest test suites to drive the
//! trees through reproducible insert / delete / search sequences.

pub mod fuzzer;

pub use fuzzer::{Fuzzer, TraceOp};
