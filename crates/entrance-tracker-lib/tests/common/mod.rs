#![allow(dead_code)]

use std::path::PathBuf;

use entrance_tracker_lib::{load_catalog, Area, Entrance, Game, LocationCatalog};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Forest (E1), Village (E2 "Village Gate", village-well), Market, Clock Town.
pub fn fixture_catalog() -> LocationCatalog {
    load_catalog(&fixtures_dir().join("minimal_locations.json")).expect("fixture catalog loads")
}

pub fn entrance(id: &str, name: &str) -> Entrance {
    Entrance {
        id: id.to_string(),
        name: name.to_string(),
        default_destination: None,
    }
}

pub fn area(id: &str, name: &str, entrances: Vec<Entrance>) -> Area {
    Area {
        id: id.to_string(),
        name: name.to_string(),
        game: Game::Oot,
        color: None,
        entrances,
    }
}

/// Areas A, B and C, each with two entrances named after their neighbours.
pub fn chain_catalog() -> LocationCatalog {
    LocationCatalog::from_areas(vec![
        area(
            "a",
            "Area A",
            vec![entrance("a-to-b", "A to B"), entrance("a-shop", "A Shop")],
        ),
        area(
            "b",
            "Area B",
            vec![entrance("b-to-a", "B to A"), entrance("b-to-c", "B to C")],
        ),
        area(
            "c",
            "Area C",
            vec![entrance("c-to-b", "C to B"), entrance("c-house", "C House")],
        ),
    ])
}
