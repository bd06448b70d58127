// src/emit/mod.rs

//! Emission of initializer text in engine order.
//!
//! - [`Emitter`] is the seam the [`OrderEngine`](crate::dag::OrderEngine)
//!   writes through.
//! - [`LineEmitter`] writes one line per node to any `io::Write`.
//! - [`CollectingEmitter`] keeps emitted pairs in memory (dry runs, tests).

use std::io;

pub mod collect;
pub mod writer;

pub use collect::CollectingEmitter;
pub use writer::LineEmitter;

/// Sink for `(node, text)` pairs, called once per registered node at the
/// moment it becomes ready.
pub trait Emitter {
    fn emit(&mut self, node: &str, text: &str) -> io::Result<()>;

    /// Called once when the engine stops, whether it succeeded or not.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
