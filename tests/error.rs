use glam::IVec2;
use maze_chase::entity::targeting::PursuerKind;
use maze_chase::error::{ConfigError, EntityError, GameError, MapError, ParseError};
use maze_chase::game::registry::{ActorId, Role};
use pretty_assertions::assert_eq;

#[test]
fn test_game_error_from_parse_error() {
    let error: GameError = ParseError::UnknownCharacter('Z').into();

    assert!(matches!(error, GameError::MapParse(ParseError::UnknownCharacter('Z'))));
    assert_eq!(error.to_string(), "Map parsing error: Unknown character in board: Z");
}

#[test]
fn test_game_error_from_map_error() {
    let error: GameError = MapError::SpawnBlocked {
        role: Role::Pursuer(PursuerKind::Pincer),
        tile: IVec2::new(3, 4),
    }
    .into();

    assert!(matches!(error, GameError::Map(MapError::SpawnBlocked { .. })));
    assert_eq!(error.to_string(), "Map error: Spawn tile [3, 4] for pincer pursuer is blocked");
}

#[test]
fn test_game_error_from_config_and_entity_errors() {
    let config: GameError = ConfigError::NonPositive {
        field: "tile_size",
        value: 0.0,
    }
    .into();
    assert_eq!(
        config.to_string(),
        "Configuration error: tile_size must be finite and positive, got 0"
    );

    let entity: GameError = EntityError::UnknownActor(ActorId(7)).into();
    assert_eq!(entity.to_string(), "Entity error: Unknown actor: #7");
}

#[test]
fn test_parse_error_messages() {
    assert_eq!(ParseError::EmptyBoard.to_string(), "Board has no rows");
    assert_eq!(
        ParseError::RaggedRow {
            row: 2,
            expected: 20,
            found: 19
        }
        .to_string(),
        "Row 2 has width 19, expected 20"
    );
    assert_eq!(ParseError::MissingSpawn(3).to_string(), "Spawn marker '3' is missing");
}
