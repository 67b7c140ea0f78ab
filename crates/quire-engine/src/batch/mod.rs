//! Draw-command batching.
//!
//! Responsibilities:
//! - accumulate textured quads into per-layer command lists ([`LayeredCmds`])
//! - keep indices local to each [`CmdList`] until the final flatten
//! - flatten many layered lists into one contiguous payload ([`DrawData`])
//!   in ascending layer order, insertion order within a layer

mod cmd;
mod flatten;
mod layer;
mod list;
mod vertex;

pub use cmd::CmdList;
pub use flatten::{DrawBatch, DrawData};
pub use layer::ZLayer;
pub use list::LayeredCmds;
pub use vertex::{Mesh, Vertex};
