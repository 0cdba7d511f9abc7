//! Unindented and folded block text.
//!
//! Multi-line text embedded in source code reads best indented along with
//! the surrounding code. [`unindent`] strips the shared indentation back
//! out; [`fold`] additionally joins lines into paragraphs. [`Snippet`]
//! holds a transformed block as an immutable value.

mod char;
mod error;
mod format;
mod snippet;
mod string;
mod transform;

#[cfg(feature = "serde")]
mod serialization;

pub use char::*;
pub use error::*;
pub use format::*;
pub use snippet::*;
pub use string::*;
pub use transform::*;
