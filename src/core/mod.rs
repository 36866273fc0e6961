// src/core/mod.rs
//
// The algorithmic core: pure, synchronous traversals over a parsed
// document. Nothing in here does I/O, mutates the tree, or holds state
// between calls; highlighting and other presentation concerns live outside
// and are driven purely by the selectors these functions return.

pub mod boundary;
pub mod fields;
pub mod locator;
pub mod replay;
pub mod value;

pub use boundary::{RecordSelection, detect_record};
pub use fields::propose_fields;
pub use locator::build_locator;
pub use replay::extract;
pub use value::resolve_value;
