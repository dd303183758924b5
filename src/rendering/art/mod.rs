pub mod art;

pub use art::{
    contain_size, paths, resolve_art_slots, spawn_art_slot, ArtFallback, ArtPlugin, ArtSlot, ArtSprite, ArtStatus,
    ShapeMeshes,
};
