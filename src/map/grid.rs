//! Static per-tile walkability lookup.

use glam::{IVec2, UVec2, Vec2};
use tracing::trace;

use crate::error::{MapError, ParseError};
use crate::map::parser::ParsedMap;

/// Returns the tile containing a continuous position.
pub fn tile_of(position: Vec2, tile_size: f32) -> IVec2 {
    (position / tile_size).floor().as_ivec2()
}

/// Returns the pixel position of a tile's center.
pub fn tile_center(tile: IVec2, tile_size: f32) -> Vec2 {
    tile.as_vec2() * tile_size + Vec2::splat(tile_size / 2.0)
}

/// Immutable map of blocked tiles, built once per session.
///
/// Coordinates outside the grid are always blocked. Movement code that needs the
/// horizontal tunnel goes through [`CollisionGrid::is_blocked_wrapping`], which folds
/// the column back into range but never the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionGrid {
    width: u32,
    height: u32,
    /// Row-major blocked flags.
    blocked: Vec<bool>,
}

impl CollisionGrid {
    /// Creates a grid from row-major blocked flags.
    pub fn new(width: u32, height: u32, blocked: Vec<bool>) -> Result<Self, MapError> {
        if width == 0 || height == 0 || blocked.len() != (width as usize) * (height as usize) {
            return Err(MapError::InvalidDimensions {
                width,
                height,
                cells: blocked.len(),
            });
        }

        Ok(Self { width, height, blocked })
    }

    /// Rasterizes the walls of a parsed board.
    pub fn from_parsed(parsed: &ParsedMap) -> Self {
        Self {
            width: parsed.width,
            height: parsed.height,
            blocked: parsed.tiles.iter().map(|tile| tile.is_blocked()).collect(),
        }
    }

    /// Builds a grid from rows of characters where `'#'` is a wall and anything else is open.
    ///
    /// Unlike [`MapTileParser::parse_board`](crate::map::parser::MapTileParser::parse_board),
    /// this neither requires spawn markers nor rejects unknown characters.
    pub fn from_walls(rows: &[&str]) -> Result<Self, ParseError> {
        let first = rows.first().ok_or(ParseError::EmptyBoard)?;
        let width = first.chars().count();
        if width == 0 {
            return Err(ParseError::EmptyBoard);
        }

        let mut blocked = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            blocked.extend(line.chars().map(|c| c == '#'));
        }

        Ok(Self {
            width: width as u32,
            height: rows.len() as u32,
            blocked,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The grid size, in tiles.
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    /// Returns `true` if the tile lies inside the grid.
    pub fn contains(&self, tile: IVec2) -> bool {
        tile.x >= 0 && tile.y >= 0 && (tile.x as u32) < self.width && (tile.y as u32) < self.height
    }

    /// Returns `true` if actors may not enter the tile. Out-of-range tiles are blocked.
    pub fn is_blocked(&self, tile: IVec2) -> bool {
        if !self.contains(tile) {
            trace!(tile = %tile, "Out-of-bounds tile lookup treated as blocked");
            return true;
        }
        self.blocked[(tile.y as u32 * self.width + tile.x as u32) as usize]
    }

    /// Folds the column into range so that the left and right edges meet.
    pub fn wrap_column(&self, tile: IVec2) -> IVec2 {
        IVec2::new(tile.x.rem_euclid(self.width as i32), tile.y)
    }

    /// Like [`CollisionGrid::is_blocked`], but with the horizontal tunnel applied.
    pub fn is_blocked_wrapping(&self, tile: IVec2) -> bool {
        self.is_blocked(self.wrap_column(tile))
    }

    /// Counts the open tiles.
    pub fn open_tiles(&self) -> usize {
        self.blocked.iter().filter(|blocked| !**blocked).count()
    }
}
