//! Map parsing functionality for converting raw board layouts into structured data.

use glam::IVec2;

use crate::constants::MapTile;
use crate::entity::targeting::PursuerKind;
use crate::error::ParseError;

/// Spawn marker used for the player.
pub const PLAYER_MARKER: u8 = 0;

/// The starting tiles of every actor in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnTiles {
    pub player: IVec2,
    /// Pursuer spawns, indexed by [`PursuerKind::index`].
    pub pursuers: [IVec2; 4],
}

impl SpawnTiles {
    /// Returns the spawn tile of the given pursuer.
    pub fn pursuer(&self, kind: PursuerKind) -> IVec2 {
        self.pursuers[kind.index()]
    }
}

/// Represents the parsed data from a raw board layout.
#[derive(Debug)]
pub struct ParsedMap {
    pub width: u32,
    pub height: u32,
    /// The parsed tile layout, row-major.
    pub tiles: Vec<MapTile>,
    pub spawns: SpawnTiles,
    /// Every tile that starts with a pellet on it.
    pub pellets: Vec<IVec2>,
    /// The positions of the tunnel mouths.
    pub tunnel_ends: Vec<IVec2>,
}

impl ParsedMap {
    /// Returns the tile at the given coordinates, or `None` outside the board.
    pub fn tile(&self, position: IVec2) -> Option<MapTile> {
        if position.x < 0 || position.y < 0 || position.x >= self.width as i32 || position.y >= self.height as i32 {
            return None;
        }
        self.tiles.get((position.y as u32 * self.width + position.x as u32) as usize).copied()
    }
}

/// Parser for converting raw board layouts into structured map data.
pub struct MapTileParser;

impl MapTileParser {
    /// Parses a single character into a map tile.
    ///
    /// # Arguments
    ///
    /// * `c` - The character to parse
    ///
    /// # Returns
    ///
    /// The parsed map tile, or an error if the character is unknown.
    pub fn parse_character(c: char) -> Result<MapTile, ParseError> {
        match c {
            '#' => Ok(MapTile::Wall),
            '.' => Ok(MapTile::Pellet),
            ' ' => Ok(MapTile::Empty),
            'T' => Ok(MapTile::Tunnel),
            '0'..='4' => Ok(MapTile::StartingPosition(c as u8 - b'0')),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw board layout into structured map data.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is empty, if its rows differ in width, if it contains
    /// unknown characters, or if any of the five spawn markers is missing or repeated.
    pub fn parse_board(raw_board: &[&str]) -> Result<ParsedMap, ParseError> {
        let first = raw_board.first().ok_or(ParseError::EmptyBoard)?;
        let width = first.chars().count();
        if width == 0 {
            return Err(ParseError::EmptyBoard);
        }

        let mut tiles = Vec::with_capacity(width * raw_board.len());
        let mut spawns: [Option<IVec2>; 5] = [None; 5];
        let mut pellets = Vec::new();
        let mut tunnel_ends = Vec::new();

        for (y, line) in raw_board.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, character) in line.chars().enumerate() {
                let tile = Self::parse_character(character)?;
                let position = IVec2::new(x as i32, y as i32);

                match tile {
                    MapTile::Pellet => pellets.push(position),
                    MapTile::Tunnel => tunnel_ends.push(position),
                    MapTile::StartingPosition(marker) => {
                        let slot = &mut spawns[marker as usize];
                        if slot.is_some() {
                            return Err(ParseError::DuplicateSpawn(marker));
                        }
                        *slot = Some(position);
                    }
                    MapTile::Empty | MapTile::Wall => {}
                }

                tiles.push(tile);
            }
        }

        let mut resolved = [IVec2::ZERO; 5];
        for (marker, spawn) in spawns.iter().enumerate() {
            resolved[marker] = spawn.ok_or(ParseError::MissingSpawn(marker as u8))?;
        }

        Ok(ParsedMap {
            width: width as u32,
            height: raw_board.len() as u32,
            tiles,
            spawns: SpawnTiles {
                player: resolved[PLAYER_MARKER as usize],
                pursuers: [resolved[1], resolved[2], resolved[3], resolved[4]],
            },
            pellets,
            tunnel_ends,
        })
    }
}
