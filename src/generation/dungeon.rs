//! # Dungeon Generation
//!
//! Rooms-and-corridors floor generation.
//!
//! The generator:
//! 1. Places up to `max_rooms` random rectangles, discarding any that overlap
//! 2. Joins each new room to the previous one with an L-shaped tunnel
//! 3. Stocks every room except the first with monsters and items
//! 4. Puts the down stairs in the centre of the last room

use crate::generation::{choose_items, choose_monsters, item_count, monster_count};
use crate::{
    bresenham_line, DelverError, DelverResult, Entity, EntityId, GameMap, GenerationConfig,
    Generator, Position, RectangularRoom, Tile,
};
use log::debug;
use rand::{rngs::StdRng, Rng};
use std::collections::VecDeque;

/// Primary dungeon generator using the room-and-corridor algorithm.
#[derive(Debug, Clone, Default)]
pub struct RoomCorridorGenerator;

impl RoomCorridorGenerator {
    /// Creates a new dungeon generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use delver::{GenerationConfig, Generator, RoomCorridorGenerator};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let generator = RoomCorridorGenerator::new();
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let map = generator.generate(&GenerationConfig::for_testing(1), &mut rng).unwrap();
    /// assert!(map.is_walkable(map.downstairs_location));
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Generates a floor and also returns the rooms that were accepted.
    pub fn generate_with_rooms(
        &self,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> DelverResult<(GameMap, Vec<RectangularRoom>)> {
        let mut map =
            GameMap::with_first_entity_id(config.map_width, config.map_height, config.first_entity_id);
        let mut rooms: Vec<RectangularRoom> = Vec::new();

        for _ in 0..config.max_rooms {
            let Some(room) = self.room_candidate(config, rng) else {
                continue;
            };
            if rooms.iter().any(|other| room.intersects(other)) {
                continue;
            }

            carve_room(&mut map, &room);
            match rooms.last() {
                None => map.spawn_location = room.center(),
                Some(previous) => {
                    carve_tunnel(&mut map, previous.center(), room.center(), rng);
                    place_entities(&mut map, &room, config.current_floor, rng);
                }
            }
            rooms.push(room);
        }

        let Some(last) = rooms.last() else {
            return Err(DelverError::GenerationFailed(format!(
                "no room fit on a {}x{} map after {} attempts",
                config.map_width, config.map_height, config.max_rooms
            )));
        };
        map.downstairs_location = last.center();
        map.set_tile(last.center(), Tile::down_stairs());

        debug!(
            "Floor {}: {} rooms, {} entities, stairs at {}",
            config.current_floor,
            rooms.len(),
            map.entities().count(),
            map.downstairs_location
        );
        Ok((map, rooms))
    }

    /// Random room that fits on the map, or `None` when the size roll leaves
    /// no room for it.
    fn room_candidate(&self, config: &GenerationConfig, rng: &mut StdRng) -> Option<RectangularRoom> {
        let width = rng.gen_range(config.room_min_size..=config.room_max_size);
        let height = rng.gen_range(config.room_min_size..=config.room_max_size);
        let max_x = config.map_width - width - 1;
        let max_y = config.map_height - height - 1;
        if max_x < 0 || max_y < 0 {
            return None;
        }
        let x = rng.gen_range(0..=max_x);
        let y = rng.gen_range(0..=max_y);
        Some(RectangularRoom::new(x, y, width, height))
    }
}

fn carve_room(map: &mut GameMap, room: &RectangularRoom) {
    for pos in room.inner() {
        map.set_tile(pos, Tile::floor());
    }
}

/// Carves an L-shaped tunnel, going horizontal-first or vertical-first at random.
fn carve_tunnel(map: &mut GameMap, start: Position, end: Position, rng: &mut StdRng) {
    let corner = if rng.gen_bool(0.5) {
        Position::new(end.x, start.y)
    } else {
        Position::new(start.x, end.y)
    };
    for pos in bresenham_line(start, corner)
        .into_iter()
        .chain(bresenham_line(corner, end))
    {
        map.set_tile(pos, Tile::floor());
    }
}

fn place_entities(map: &mut GameMap, room: &RectangularRoom, floor: u32, rng: &mut StdRng) {
    let monsters = monster_count(floor, rng);
    let items = item_count(floor, rng);

    let mut templates: Vec<Entity> = choose_monsters(floor, monsters, rng)
        .into_iter()
        .map(|kind| kind.spawn(EntityId(0), room.center()))
        .collect();
    templates.extend(
        choose_items(floor, items, rng)
            .into_iter()
            .map(|kind| kind.spawn(EntityId(0), room.center())),
    );

    for template in templates {
        let pos = Position::new(
            rng.gen_range(room.x1 + 1..room.x2),
            rng.gen_range(room.y1 + 1..room.y2),
        );
        if map.entities_at(pos).next().is_none() {
            map.spawn(&template, pos);
        }
    }
}

/// Walkable cells reachable from `start` over 8-connected steps.
fn reachable_cells(map: &GameMap, start: Position) -> usize {
    let mut seen = vec![false; (map.width * map.height) as usize];
    let mut queue = VecDeque::from([start]);
    let mut count = 0;
    let index = |p: Position| (p.y * map.width + p.x) as usize;
    if !map.is_walkable(start) {
        return 0;
    }
    seen[index(start)] = true;

    while let Some(pos) = queue.pop_front() {
        count += 1;
        for next in pos.adjacent_positions() {
            if map.is_walkable(next) && !seen[index(next)] {
                seen[index(next)] = true;
                queue.push_back(next);
            }
        }
    }
    count
}

impl Generator<GameMap> for RoomCorridorGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> DelverResult<GameMap> {
        self.generate_with_rooms(config, rng).map(|(map, _)| map)
    }

    fn validate(&self, map: &GameMap, _config: &GenerationConfig) -> DelverResult<()> {
        if !map.is_walkable(map.spawn_location) {
            return Err(DelverError::GenerationFailed(format!(
                "spawn location {} is not walkable",
                map.spawn_location
            )));
        }
        if !map.is_walkable(map.downstairs_location) {
            return Err(DelverError::GenerationFailed(format!(
                "stairs at {} are not walkable",
                map.downstairs_location
            )));
        }
        let walkable = map.floor_positions().count();
        let reachable = reachable_cells(map, map.spawn_location);
        if reachable != walkable {
            return Err(DelverError::GenerationFailed(format!(
                "only {reachable} of {walkable} walkable cells are connected"
            )));
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "RoomCorridorGenerator"
    }
}
