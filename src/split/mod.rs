//! String splitting primitives used by the proposition parser.
//!
//! Neither splitter knows anything about the proposition grammar. The
//! [`DelimitedSplitter`] cuts a string at top-level separators while keeping
//! quoted or bracketed regions opaque, and the [`TupleSplitter`] peels a fixed
//! number of parts off a string by alternately anchoring on its front and back.

mod delimited;
mod error;
mod tuple;

pub use delimited::DelimitedSplitter;
pub use error::SplitError;
pub use tuple::{Direction, TupleSplitter};
