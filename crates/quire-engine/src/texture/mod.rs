//! Texture handles and atlas sub-regions.
//!
//! The core never owns GPU textures. It only carries opaque handles plus
//! normalized UV rectangles; loading and binding belong to the host renderer.

mod pack;

pub use pack::{TextureChunk, TextureId, TexturePack, UvRect};
