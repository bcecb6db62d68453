//! Scene loading (TOML) and mesh export (OBJ).
#![forbid(unsafe_code)]

pub mod obj;
pub mod scene;

pub use obj::{save_obj, write_obj};
pub use scene::{
    BlockerDef, SceneConfig, SceneError, load_scene_from_path, scene_from_toml_str,
};
