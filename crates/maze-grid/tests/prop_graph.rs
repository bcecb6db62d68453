use std::collections::HashSet;

use maze_geom::{Vec3, Vec3i};
use maze_grid::graph::asymmetric_links;
use maze_grid::{CellArena, Direction, rebuild};
use proptest::prelude::*;

const SIZE: f32 = 2.0;

fn arb_coords() -> impl Strategy<Value = Vec<(i32, i32, i32)>> {
    prop::collection::vec((-4i32..4, -2i32..2, -4i32..4), 0..60)
}

fn jittered(coords: &[(i32, i32, i32)], jitter: f32) -> CellArena {
    coords
        .iter()
        .enumerate()
        .map(|(i, &(x, y, z))| {
            let j = if i % 2 == 0 { jitter } else { -jitter };
            Vec3::new(x as f32 + j, y as f32 - j, z as f32 + j) * SIZE
        })
        .collect()
}

proptest! {
    // neighbor(A, D) = B implies neighbor(B, reverse(D)) = A, duplicates included
    #[test]
    fn links_are_symmetric(coords in arb_coords(), jitter in 0.0f32..0.4) {
        let mut cells = jittered(&coords, jitter);
        rebuild(&mut cells, SIZE);
        prop_assert!(asymmetric_links(&cells).is_empty());
    }

    // Rebuilding an unchanged arena yields identical links and stats
    #[test]
    fn rebuild_idempotent(coords in arb_coords()) {
        let mut cells = jittered(&coords, 0.1);
        let s1 = rebuild(&mut cells, SIZE);
        let first: Vec<_> = cells.iter().map(|(_, c)| *c.neighbors()).collect();
        let s2 = rebuild(&mut cells, SIZE);
        let second: Vec<_> = cells.iter().map(|(_, c)| *c.neighbors()).collect();
        prop_assert_eq!(s1, s2);
        prop_assert_eq!(first, second);
    }

    // Link count equals the number of occupied coordinate pairs one step apart
    #[test]
    fn link_count_matches_adjacency(coords in arb_coords()) {
        let mut cells = jittered(&coords, 0.0);
        let stats = rebuild(&mut cells, SIZE);
        let occupied: HashSet<Vec3i> = coords.iter().map(|&(x, y, z)| Vec3i::new(x, y, z)).collect();
        let expected: usize = occupied
            .iter()
            .map(|&c| Direction::ALL.iter().filter(|d| occupied.contains(&(c + d.offset()))).count())
            .sum();
        prop_assert_eq!(stats.links, expected);
        prop_assert_eq!(stats.collisions.len(), coords.len() - occupied.len());
    }

    // Every link points one grid step away in its own direction
    #[test]
    fn links_follow_offsets(coords in arb_coords()) {
        let mut cells = jittered(&coords, 0.2);
        rebuild(&mut cells, SIZE);
        for (_, cell) in cells.iter() {
            for d in Direction::ALL {
                if let Some(n) = cell.neighbor(d) {
                    let other = cells.get(n).unwrap();
                    prop_assert_eq!(other.grid_coord(SIZE) - cell.grid_coord(SIZE), d.offset());
                }
            }
        }
    }
}
