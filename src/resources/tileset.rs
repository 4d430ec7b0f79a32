//! Tileset loading and tile id resolution.
//!
//! A [`Tileset`] turns a global tile id into a [`TileRegion`]: the texture to
//! draw from and the source rectangle inside it. Two layouts exist:
//!
//! - **Uniform**: one atlas image cut into a fixed grid of equally sized
//!   tiles.
//! - **Dynamic**: a list of separate images, one per tile, possibly of
//!   different sizes.
//!
//! The layout is chosen from the file's schema: a top-level `image` makes a
//! uniform tileset, otherwise its `tiles` list makes a dynamic one.

use std::path::Path;

use serde::Deserialize;

use crate::error::AssetError;
use crate::geometry::Rect;
use crate::resources::tilemap::{TilesetRef, resolve_relative};

/// Atlas width in tiles used when a uniform tileset file gives neither
/// `columns` nor enough size information to derive it.
pub const FALLBACK_COLUMNS: u32 = 22;

/// One entry of a dynamic tileset's `tiles` list.
#[derive(Debug, Clone, Deserialize)]
struct TileFile {
    #[serde(default)]
    id: u32,
    image: String,
    #[serde(default)]
    imagewidth: u32,
    #[serde(default)]
    imageheight: u32,
}

/// Raw tileset file; which fields are present decides the layout.
#[derive(Debug, Clone, Deserialize)]
struct TilesetFile {
    image: Option<String>,
    columns: Option<u32>,
    imagewidth: Option<u32>,
    tilewidth: Option<u32>,
    tileheight: Option<u32>,
    #[serde(default)]
    tiles: Vec<TileFile>,
}

/// Drawable area for one tile.
#[derive(Debug, Clone, PartialEq)]
pub struct TileRegion {
    /// Texture key (normalized image path).
    pub tex_key: String,
    /// Source rectangle inside the texture.
    pub src: Rect,
}

/// A single image of a dynamic tileset.
#[derive(Debug, Clone, PartialEq)]
pub struct TileImage {
    pub image: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Tileset {
    Uniform {
        firstgid: u32,
        image: String,
        columns: u32,
        tile_width: u32,
        tile_height: u32,
    },
    Dynamic {
        firstgid: u32,
        tiles: Vec<TileImage>,
    },
}

impl Tileset {
    /// Load the tileset referenced by a map located at `map_path`.
    pub fn load(map_path: &Path, reference: &TilesetRef, tile_size: u32) -> Result<Self, AssetError> {
        let path = resolve_relative(map_path, &reference.source);
        let contents = std::fs::read_to_string(&path).map_err(|source| AssetError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_json(&path, &contents, reference.firstgid, tile_size)
    }

    /// Parse tileset JSON. Image paths are resolved relative to `path`.
    pub fn from_json(
        path: &Path,
        contents: &str,
        firstgid: u32,
        tile_size: u32,
    ) -> Result<Self, AssetError> {
        let file: TilesetFile =
            serde_json::from_str(contents).map_err(|source| AssetError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(image) = file.image {
            let tile_width = file.tilewidth.unwrap_or(tile_size).max(1);
            let tile_height = file.tileheight.unwrap_or(tile_size).max(1);
            let columns = file
                .columns
                .filter(|c| *c > 0)
                .or_else(|| file.imagewidth.map(|w| w / tile_width).filter(|c| *c > 0))
                .unwrap_or(FALLBACK_COLUMNS);
            return Ok(Tileset::Uniform {
                firstgid,
                image: key_for(path, &image),
                columns,
                tile_width,
                tile_height,
            });
        }

        if file.tiles.is_empty() {
            return Err(AssetError::EmptyTileset(path.to_path_buf()));
        }

        let mut tiles = file.tiles;
        tiles.sort_by_key(|t| t.id);
        let tiles = tiles
            .into_iter()
            .map(|t| TileImage {
                image: key_for(path, &t.image),
                width: t.imagewidth,
                height: t.imageheight,
            })
            .collect();
        Ok(Tileset::Dynamic { firstgid, tiles })
    }

    pub fn firstgid(&self) -> u32 {
        match self {
            Tileset::Uniform { firstgid, .. } | Tileset::Dynamic { firstgid, .. } => *firstgid,
        }
    }

    /// Resolve a global tile id to its drawable region.
    ///
    /// Returns `None` when the id falls outside this tileset.
    pub fn region(&self, gid: u32) -> Option<TileRegion> {
        let local = gid.checked_sub(self.firstgid())?;
        match self {
            Tileset::Uniform {
                image,
                columns,
                tile_width,
                tile_height,
                ..
            } => {
                let col = local % columns;
                let row = local / columns;
                Some(TileRegion {
                    tex_key: image.clone(),
                    src: Rect::new(
                        (col * tile_width) as f32,
                        (row * tile_height) as f32,
                        *tile_width as f32,
                        *tile_height as f32,
                    ),
                })
            }
            Tileset::Dynamic { tiles, .. } => {
                let tile = tiles.get(local as usize)?;
                Some(TileRegion {
                    tex_key: tile.image.clone(),
                    src: Rect::new(0.0, 0.0, tile.width as f32, tile.height as f32),
                })
            }
        }
    }

    /// Every texture this tileset draws from.
    pub fn images(&self) -> Vec<&str> {
        match self {
            Tileset::Uniform { image, .. } => vec![image.as_str()],
            Tileset::Dynamic { tiles, .. } => tiles.iter().map(|t| t.image.as_str()).collect(),
        }
    }
}

/// Find the tileset covering `gid`: the one with the largest `firstgid` not
/// above it.
pub fn tileset_for(tilesets: &[Tileset], gid: u32) -> Option<&Tileset> {
    tilesets
        .iter()
        .filter(|t| t.firstgid() <= gid)
        .max_by_key(|t| t.firstgid())
}

fn key_for(tileset_path: &Path, image: &str) -> String {
    resolve_relative(tileset_path, image)
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform() -> Tileset {
        Tileset::from_json(
            Path::new("assets/maps/TilesetFloor.json"),
            r#"{"image": "../images/TilesetFloor.png", "columns": 22, "tilewidth": 16, "tileheight": 16}"#,
            1,
            16,
        )
        .unwrap()
    }

    fn dynamic() -> Tileset {
        Tileset::from_json(
            Path::new("assets/maps/TilesetBuilding.json"),
            r#"{"tiles": [
                {"id": 1, "image": "..\\images\\house.png", "imagewidth": 64, "imageheight": 80},
                {"id": 0, "image": "../images/well.png", "imagewidth": 32, "imageheight": 32}
            ]}"#,
            100,
            16,
        )
        .unwrap()
    }

    #[test]
    fn test_uniform_detected_from_image_field() {
        match uniform() {
            Tileset::Uniform { image, columns, .. } => {
                assert_eq!(image, "assets/images/TilesetFloor.png");
                assert_eq!(columns, 22);
            }
            other => panic!("expected uniform tileset, got {other:?}"),
        }
    }

    #[test]
    fn test_uniform_region_grid_arithmetic() {
        let ts = uniform();
        let first = ts.region(1).unwrap();
        assert_eq!(first.src, Rect::new(0.0, 0.0, 16.0, 16.0));
        let second = ts.region(2).unwrap();
        assert_eq!(second.src, Rect::new(16.0, 0.0, 16.0, 16.0));
        // local 22 -> second row, first column
        let wrapped = ts.region(23).unwrap();
        assert_eq!(wrapped.src, Rect::new(0.0, 16.0, 16.0, 16.0));
    }

    #[test]
    fn test_uniform_columns_derived_from_image_width() {
        let ts = Tileset::from_json(
            Path::new("maps/a.json"),
            r#"{"image": "a.png", "imagewidth": 128, "tilewidth": 16}"#,
            1,
            16,
        )
        .unwrap();
        assert!(matches!(ts, Tileset::Uniform { columns: 8, .. }));
    }

    #[test]
    fn test_uniform_columns_fallback() {
        let ts = Tileset::from_json(Path::new("a.json"), r#"{"image": "a.png"}"#, 1, 16).unwrap();
        assert!(matches!(ts, Tileset::Uniform { columns: FALLBACK_COLUMNS, .. }));
    }

    #[test]
    fn test_dynamic_orders_tiles_by_id() {
        let ts = dynamic();
        let well = ts.region(100).unwrap();
        assert_eq!(well.tex_key, "assets/images/well.png");
        assert_eq!(well.src, Rect::new(0.0, 0.0, 32.0, 32.0));
        let house = ts.region(101).unwrap();
        assert_eq!(house.tex_key, "assets/images/house.png");
        assert_eq!(house.src.h, 80.0);
        assert!(ts.region(102).is_none());
        assert!(ts.region(99).is_none());
    }

    #[test]
    fn test_empty_tileset_is_an_error() {
        let err = Tileset::from_json(Path::new("x.json"), r#"{"tiles": []}"#, 1, 16).unwrap_err();
        assert!(matches!(err, AssetError::EmptyTileset(_)));
    }

    #[test]
    fn test_tileset_for_picks_largest_firstgid() {
        let sets = vec![uniform(), dynamic()];
        assert_eq!(tileset_for(&sets, 5).map(Tileset::firstgid), Some(1));
        assert_eq!(tileset_for(&sets, 100).map(Tileset::firstgid), Some(100));
        assert_eq!(tileset_for(&sets, 0), None);
    }

    #[test]
    fn test_images_lists_every_texture() {
        assert_eq!(dynamic().images().len(), 2);
        assert_eq!(uniform().images(), vec!["assets/images/TilesetFloor.png"]);
    }
}
