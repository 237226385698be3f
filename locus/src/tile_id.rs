use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::LocusError;

/// Default width and height of a tile in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Deepest zoom level that can be addressed by a quadkey.
pub const MAX_ZOOM: u8 = 23;

/// Identifier of a tile in a quadtree tile pyramid.
///
/// At zoom level `z` the pyramid has `2^z` tiles along each axis, `x` growing eastwards and `y` growing
/// southwards from the north-west corner.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TileFields"))]
pub struct PyramidTileId {
    x: u32,
    y: u32,
    zoom: u8,
    pixel_width: u32,
    pixel_height: u32,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct TileFields {
    x: u32,
    y: u32,
    zoom: u8,
    pixel_width: u32,
    pixel_height: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<TileFields> for PyramidTileId {
    type Error = LocusError;

    fn try_from(value: TileFields) -> Result<Self, Self::Error> {
        Ok(Self::new(value.x, value.y, value.zoom)?.with_size(value.pixel_width, value.pixel_height))
    }
}

impl PyramidTileId {
    /// Creates a tile id of the default size of 256x256 pixels.
    ///
    /// Fails if the zoom level is above [`MAX_ZOOM`] or the coordinates are outside of the pyramid.
    pub fn new(x: u32, y: u32, zoom: u8) -> Result<Self, LocusError> {
        if zoom > MAX_ZOOM || x >= 1 << zoom || y >= 1 << zoom {
            return Err(LocusError::InvalidTile { x, y, zoom });
        }

        Ok(Self {
            x,
            y,
            zoom,
            pixel_width: DEFAULT_TILE_SIZE,
            pixel_height: DEFAULT_TILE_SIZE,
        })
    }

    /// Returns a copy of the tile id with the given pixel size.
    pub fn with_size(self, pixel_width: u32, pixel_height: u32) -> Self {
        Self {
            pixel_width,
            pixel_height,
            ..self
        }
    }

    /// Restores the tile id from a quadkey. Every character of the key is one zoom level.
    ///
    /// ```
    /// use locus::PyramidTileId;
    ///
    /// let tile = PyramidTileId::from_quad_key("213", 256, 256).unwrap();
    /// assert_eq!((tile.x(), tile.y(), tile.zoom()), (3, 5, 3));
    /// ```
    pub fn from_quad_key(
        quadkey: &str,
        pixel_width: u32,
        pixel_height: u32,
    ) -> Result<Self, LocusError> {
        if quadkey.len() > MAX_ZOOM as usize {
            log::debug!("Quadkey '{quadkey}' is deeper than {MAX_ZOOM} levels");
            return Err(LocusError::InvalidQuadkey(quadkey.to_string()));
        }

        let mut x = 0;
        let mut y = 0;
        for (level, digit) in quadkey.chars().enumerate() {
            let mask = 1 << (quadkey.len() - level - 1);
            match digit {
                '0' => {}
                '1' => x |= mask,
                '2' => y |= mask,
                '3' => {
                    x |= mask;
                    y |= mask;
                }
                _ => return Err(LocusError::InvalidQuadkey(quadkey.to_string())),
            }
        }

        Ok(Self {
            x,
            y,
            zoom: quadkey.len() as u8,
            pixel_width,
            pixel_height,
        })
    }

    /// Quadkey of the tile. Empty for the root tile at zoom level `0`.
    pub fn quadkey(&self) -> String {
        (1..=self.zoom)
            .rev()
            .map(|level| {
                let mask = 1 << (level - 1);
                let mut digit = b'0';
                if self.x & mask != 0 {
                    digit += 1;
                }
                if self.y & mask != 0 {
                    digit += 2;
                }
                digit as char
            })
            .collect()
    }

    /// X coordinate of the tile.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Y coordinate of the tile.
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Zoom level of the tile.
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Width of the tile in pixels.
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    /// Height of the tile in pixels.
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }
}

impl Display for PyramidTileId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn quadkey() {
        let tile = PyramidTileId::new(3, 5, 3).unwrap();
        assert_eq!(tile.quadkey(), "213");
        assert_eq!(tile.pixel_width(), 256);
        assert_eq!(tile.pixel_height(), 256);
        assert_eq!(tile.to_string(), "3/3/5");

        assert_eq!(PyramidTileId::new(0, 0, 0).unwrap().quadkey(), "");
        assert_eq!(PyramidTileId::new(1, 1, 1).unwrap().quadkey(), "3");
        assert_eq!(
            PyramidTileId::new((1 << 23) - 1, 0, 23).unwrap().quadkey(),
            "1".repeat(23)
        );
    }

    #[test]
    fn from_quad_key() {
        let tile = PyramidTileId::from_quad_key("213", 512, 256).unwrap();
        assert_eq!(tile.x(), 3);
        assert_eq!(tile.y(), 5);
        assert_eq!(tile.zoom(), 3);
        assert_eq!(tile, PyramidTileId::new(3, 5, 3).unwrap().with_size(512, 256));
        assert_eq!(tile.quadkey(), "213");

        let root = PyramidTileId::from_quad_key("", 256, 256).unwrap();
        assert_eq!(root, PyramidTileId::new(0, 0, 0).unwrap());
    }

    #[test]
    fn from_invalid_quad_key() {
        for value in ["4", "0120a", "01 2", "-1"] {
            assert_matches!(
                PyramidTileId::from_quad_key(value, 256, 256),
                Err(LocusError::InvalidQuadkey(_))
            );
        }

        let too_deep = "0".repeat(24);
        assert_matches!(
            PyramidTileId::from_quad_key(&too_deep, 256, 256),
            Err(LocusError::InvalidQuadkey(_))
        );
        assert!(PyramidTileId::from_quad_key(&too_deep[1..], 256, 256).is_ok());
    }

    #[test]
    fn invalid_tiles() {
        assert_matches!(
            PyramidTileId::new(0, 0, 24),
            Err(LocusError::InvalidTile { zoom: 24, .. })
        );
        assert_matches!(
            PyramidTileId::new(8, 0, 3),
            Err(LocusError::InvalidTile { x: 8, .. })
        );
        assert_matches!(PyramidTileId::new(0, 2, 1), Err(LocusError::InvalidTile { .. }));
    }

    #[test]
    fn equality() {
        let tile = PyramidTileId::new(1, 2, 3).unwrap();
        assert_eq!(tile, PyramidTileId::new(1, 2, 3).unwrap());
        assert_ne!(tile, PyramidTileId::new(2, 1, 3).unwrap());
        assert_ne!(tile, tile.with_size(512, 512));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialization() {
        let tile = PyramidTileId::new(3, 5, 3).unwrap().with_size(512, 256);
        let json = serde_json::to_string(&tile).unwrap();
        assert_eq!(
            json,
            r#"{"x":3,"y":5,"zoom":3,"pixel_width":512,"pixel_height":256}"#
        );
        assert_eq!(serde_json::from_str::<PyramidTileId>(&json).unwrap(), tile);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates_tile() {
        let too_deep = r#"{"x":4000000000,"y":0,"zoom":40,"pixel_width":256,"pixel_height":256}"#;
        let error = serde_json::from_str::<PyramidTileId>(too_deep).unwrap_err();
        assert!(error.to_string().contains("zoom level 40"), "{error}");

        let outside = r#"{"x":8,"y":0,"zoom":3,"pixel_width":256,"pixel_height":256}"#;
        assert!(serde_json::from_str::<PyramidTileId>(outside).is_err());
    }
}
