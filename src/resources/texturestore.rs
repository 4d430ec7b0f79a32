//! Loaded textures keyed by image path.
//!
//! Sprites refer to textures by key (the normalized image path). Textures are
//! uploaded the first time a sprite needs them and kept for the rest of the
//! process.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use log::info;
use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D};
use rustc_hash::FxHashMap;

use crate::components::sprite::Sprite;
use crate::error::AssetError;

/// Non-send registry of GPU textures.
#[derive(Default)]
pub struct TextureStore {
    pub map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(key.as_ref())
    }

    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.map.contains_key(key.as_ref())
    }

    /// Load `path` unless it is already present.
    pub fn ensure(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &str,
    ) -> Result<(), AssetError> {
        if self.contains(path) {
            return Ok(());
        }
        let texture = rl
            .load_texture(thread, path)
            .map_err(|e| AssetError::Texture {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        info!("Loaded texture {}", path);
        self.map.insert(path.to_string(), texture);
        Ok(())
    }
}

/// Load every texture referenced by a [`Sprite`] that is not loaded yet.
///
/// Called by the driver after each update so newly spawned sprites can be
/// drawn in the same frame. Expects the Raylib handle, thread and
/// [`TextureStore`] as non-send resources.
pub fn load_pending_textures(world: &mut World) -> Result<(), AssetError> {
    let mut state: SystemState<(
        Query<&Sprite>,
        NonSendMut<TextureStore>,
        NonSendMut<RaylibHandle>,
        NonSend<RaylibThread>,
    )> = SystemState::new(world);
    let (sprites, mut store, mut rl, thread) = state.get_mut(world);

    let mut missing: Vec<&str> = sprites
        .iter()
        .map(|s| s.tex_key.as_str())
        .filter(|key| !store.contains(key))
        .collect();
    missing.sort_unstable();
    missing.dedup();

    for path in missing {
        store.ensure(&mut rl, &thread, path)?;
    }
    Ok(())
}
