//! Coarse timing checks for the hot paths: floor generation, field of view
//! and path queries. Bounds are loose enough for unoptimised builds.

use delver::{
    compute_fov, DelverResult, GameConfig, GameState, GenerationConfig, Generator, Position,
    RoomCorridorGenerator,
};
use rand::{rngs::StdRng, SeedableRng};
use std::time::{Duration, Instant};

#[test]
fn test_floor_generation_performance() -> DelverResult<()> {
    let generator = RoomCorridorGenerator::new();
    let mut rng = StdRng::seed_from_u64(12345);
    let start = Instant::now();
    let iterations = 50;

    for floor in 1..=iterations {
        let map = generator.generate(&GenerationConfig::new(floor), &mut rng)?;
        assert!(map.is_walkable(map.downstairs_location));
    }

    let elapsed = start.elapsed();
    println!("Average generation time: {:?}", elapsed / iterations);
    assert!(elapsed < Duration::from_secs(10));
    Ok(())
}

#[test]
fn test_fov_performance() -> DelverResult<()> {
    let game = GameState::new(&GameConfig::default(), 777)?;
    let origin = game.player_position().unwrap_or(Position::new(0, 0));
    let start = Instant::now();
    let iterations = 200;

    for _ in 0..iterations {
        let visible = compute_fov(&game.game_map, origin, 8);
        assert!(visible.iter().any(|&v| v));
    }

    let elapsed = start.elapsed();
    println!("Average FOV time: {:?}", elapsed / iterations);
    assert!(elapsed < Duration::from_secs(10));
    Ok(())
}

#[test]
fn test_path_query_performance() -> DelverResult<()> {
    let game = GameState::new(&GameConfig::default(), 4242)?;
    let grid = game.game_map.cost_grid();
    let from = game.game_map.spawn_location;
    let to = game.game_map.downstairs_location;
    let start = Instant::now();

    for _ in 0..100 {
        let path = grid.find_path(from, to);
        if from != to {
            assert_eq!(path.last(), Some(&to));
        }
    }

    assert!(start.elapsed() < Duration::from_secs(10));
    Ok(())
}
