//! # World Representation
//!
//! Tiles and the [`GameMap`] that owns one dungeon floor: its tile grid, the
//! visibility and exploration masks, and every entity standing on it.

use crate::{
    color, CostGrid, DelverError, DelverResult, Entity, EntityId, Position, Rgb, ViewGrid,
    CROWD_PENALTY,
};
use serde::{Deserialize, Serialize};

/// How a tile looks in one lighting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

/// The three tile templates a floor is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    Floor,
    DownStairs,
}

/// One grid cell. Cells hold copies of the templates below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub walkable: bool,
    pub transparent: bool,
    /// Appearance when explored but out of sight
    pub dark: Glyph,
    /// Appearance when in sight
    pub light: Glyph,
}

impl Tile {
    pub fn wall() -> Self {
        Self {
            kind: TileKind::Wall,
            walkable: false,
            transparent: false,
            dark: Glyph {
                ch: '#',
                fg: color::DIM_GREY,
                bg: color::WALL_DARK,
            },
            light: Glyph {
                ch: '#',
                fg: color::WHITE,
                bg: color::WALL_LIGHT,
            },
        }
    }

    pub fn floor() -> Self {
        Self {
            kind: TileKind::Floor,
            walkable: true,
            transparent: true,
            dark: Glyph {
                ch: '.',
                fg: color::DIM_GREY,
                bg: color::FLOOR_DARK,
            },
            light: Glyph {
                ch: '.',
                fg: color::WHITE,
                bg: color::FLOOR_LIGHT,
            },
        }
    }

    pub fn down_stairs() -> Self {
        Self {
            kind: TileKind::DownStairs,
            walkable: true,
            transparent: true,
            dark: Glyph {
                ch: '>',
                fg: Rgb(0, 0, 100),
                bg: color::FLOOR_DARK,
            },
            light: Glyph {
                ch: '>',
                fg: color::WHITE,
                bg: color::FLOOR_LIGHT,
            },
        }
    }
}

/// What a renderer should draw for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileAppearance {
    /// In sight
    Light(Glyph),
    /// Explored, out of sight
    Dark(Glyph),
    /// Never seen
    Unseen,
}

/// One dungeon floor.
///
/// # Examples
///
/// ```
/// use delver::{GameMap, Position, Tile};
///
/// let mut map = GameMap::new(10, 5);
/// assert!(!map.is_walkable(Position::new(3, 3)));
/// map.set_tile(Position::new(3, 3), Tile::floor());
/// assert!(map.is_walkable(Position::new(3, 3)));
/// assert!(!map.is_walkable(Position::new(30, 3)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameMap {
    pub width: i32,
    pub height: i32,
    tiles: Vec<Tile>,
    visible: Vec<bool>,
    explored: Vec<bool>,
    entities: Vec<Entity>,
    pub downstairs_location: Position,
    /// Where the player arrives on this floor
    pub spawn_location: Position,
    next_entity_id: u64,
}

impl GameMap {
    /// Creates an all-wall floor whose entity ids start at 0.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_first_entity_id(width, height, 0)
    }

    /// Creates an all-wall floor whose entity ids start at `first_entity_id`.
    pub fn with_first_entity_id(width: i32, height: i32, first_entity_id: u64) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let cells = (width * height) as usize;
        Self {
            width,
            height,
            tiles: vec![Tile::wall(); cells],
            visible: vec![false; cells],
            explored: vec![false; cells],
            entities: Vec::new(),
            downstairs_location: Position::new(0, 0),
            spawn_location: Position::new(0, 0),
            next_entity_id: first_entity_id,
        }
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| (pos.y * self.width + pos.x) as usize)
    }

    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.index(pos).map(|i| &self.tiles[i])
    }

    /// Replaces a cell. Returns `false` when `pos` is off the map.
    pub fn set_tile(&mut self, pos: Position, tile: Tile) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.tile(pos).map_or(false, |t| t.walkable)
    }

    pub fn is_transparent(&self, pos: Position) -> bool {
        self.tile(pos).map_or(false, |t| t.transparent)
    }

    pub fn is_visible(&self, pos: Position) -> bool {
        self.index(pos).map_or(false, |i| self.visible[i])
    }

    pub fn is_explored(&self, pos: Position) -> bool {
        self.index(pos).map_or(false, |i| self.explored[i])
    }

    /// Replaces the visibility mask and marks every visible cell explored.
    ///
    /// Masks of the wrong size are ignored.
    pub fn apply_visibility(&mut self, visible: Vec<bool>) {
        if visible.len() != self.tiles.len() {
            log::warn!(
                "Ignoring visibility mask of {} cells for a {}x{} map",
                visible.len(),
                self.width,
                self.height
            );
            return;
        }
        for (explored, &seen) in self.explored.iter_mut().zip(&visible) {
            *explored |= seen;
        }
        self.visible = visible;
    }

    /// Read-only view of a cell for renderers.
    pub fn tile_appearance(&self, pos: Position) -> TileAppearance {
        match self.tile(pos) {
            Some(tile) if self.is_visible(pos) => TileAppearance::Light(tile.light),
            Some(tile) if self.is_explored(pos) => TileAppearance::Dark(tile.dark),
            _ => TileAppearance::Unseen,
        }
    }

    pub fn floor_positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
            .filter(|&pos| self.is_walkable(pos))
    }

    pub fn explored_count(&self) -> usize {
        self.explored.iter().filter(|&&e| e).count()
    }

    /// Hands out the next unused entity id for this floor.
    pub fn allocate_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        id
    }

    pub fn next_entity_id(&self) -> u64 {
        self.next_entity_id
    }

    /// Copies `template` onto the floor at `pos` under a fresh id.
    pub fn spawn(&mut self, template: &Entity, pos: Position) -> EntityId {
        let id = self.allocate_entity_id();
        self.place_entity(template.spawn_copy(id, pos));
        id
    }

    /// Puts an existing entity on the floor at its own position.
    pub fn place_entity(&mut self, entity: Entity) {
        if entity.id.0 >= self.next_entity_id {
            self.next_entity_id = entity.id.0 + 1;
        }
        self.entities.push(entity);
    }

    pub fn remove_entity(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(index))
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// All entities in placement order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn entities_at(&self, pos: Position) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.position == pos)
    }

    pub fn blocking_entity_at(&self, pos: Position) -> Option<&Entity> {
        self.entities_at(pos).find(|e| e.blocks_movement)
    }

    /// The living actor standing on `pos`, if any.
    pub fn actor_at(&self, pos: Position) -> Option<&Entity> {
        self.entities_at(pos).find(|e| e.is_alive())
    }

    pub fn items_at(&self, pos: Position) -> impl Iterator<Item = &Entity> {
        self.entities_at(pos).filter(|e| e.item().is_some())
    }

    /// Living actors in placement order.
    pub fn living_actors(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_alive())
    }

    /// Entities on visible cells, lowest render order first.
    pub fn renderable_entities(&self) -> Vec<&Entity> {
        let mut visible: Vec<&Entity> = self
            .entities
            .iter()
            .filter(|e| self.is_visible(e.position))
            .collect();
        visible.sort_by_key(|e| e.render_order);
        visible
    }

    /// Movement costs for path queries: walkable cells cost 1, walls 0, and
    /// cells holding a blocking entity carry the crowd penalty.
    pub fn cost_grid(&self) -> CostGrid {
        let mut grid = CostGrid::from_fn(self.width, self.height, |pos| {
            u32::from(self.is_walkable(pos))
        });
        for entity in self.entities.iter().filter(|e| e.blocks_movement) {
            grid.add_penalty(entity.position, CROWD_PENALTY);
        }
        grid
    }

    /// Checks that the grids match the dimensions and that every position the
    /// map refers to lies on it. Deserialized maps must pass this before use.
    pub fn check_layout(&self) -> DelverResult<()> {
        let cells = self
            .width
            .checked_mul(self.height)
            .filter(|_| self.width > 0 && self.height > 0)
            .ok_or_else(|| {
                DelverError::InvalidState(format!(
                    "invalid map dimensions {}x{}",
                    self.width, self.height
                ))
            })? as usize;

        for (name, len) in [
            ("tiles", self.tiles.len()),
            ("visible", self.visible.len()),
            ("explored", self.explored.len()),
        ] {
            if len != cells {
                return Err(DelverError::InvalidState(format!(
                    "{name} grid has {len} cells, expected {cells}"
                )));
            }
        }

        if let Some(entity) = self.entities.iter().find(|e| !self.in_bounds(e.position)) {
            return Err(DelverError::InvalidState(format!(
                "{} {} stands off the map at {}",
                entity.name, entity.id, entity.position
            )));
        }
        for (name, pos) in [
            ("spawn", self.spawn_location),
            ("stairs", self.downstairs_location),
        ] {
            if !self.in_bounds(pos) {
                return Err(DelverError::InvalidState(format!(
                    "{name} location {pos} is off the map"
                )));
            }
        }
        Ok(())
    }
}

impl ViewGrid for GameMap {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn is_opaque(&self, pos: Position) -> bool {
        !self.is_transparent(pos)
    }
}
