//! Asset loading/parsers (meshes, textures).
//! OBJ text -> flat interleaved triangle list; images -> RGB8/RGBA8 pixels.

pub mod error;
pub mod mesh;
pub mod obj;
pub mod texture;

pub use error::{MeshError, TextureError};
pub use mesh::{Bounds, FLOATS_PER_VERTEX, InterleavedBuffer, MeshVertex};
pub use obj::{
    FacePolicy, LoadOptions, LoadWarning, NormalMode, ObjMesh, load_obj_from_path,
    load_obj_from_reader, load_obj_from_str,
};
pub use texture::{TextureData, TextureFormat};
