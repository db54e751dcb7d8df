use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rolling_block_core::{BlockState, CellCoord, Direction};
use rolling_block_system_search::{
    rules, CycleSuppression, Outcome, SearchConfig, Solution, Solver,
};
use rolling_block_world::{Grid, Tile};

const RANDOM_SEED: u64 = 0x5eed_b10c_2b0c_0001;

#[test]
fn bfs_matches_brute_force_on_random_grids() {
    let mut rng = ChaCha8Rng::seed_from_u64(RANDOM_SEED);
    let mut solver = Solver::default();
    let mut solved = 0;
    let mut unreachable = 0;

    for _ in 0..300 {
        let case = RandomCase::generate(&mut rng, 5);
        let expected = brute_force_distance(&case.grid, case.start, case.goal);
        let report = solver
            .solve(&case.grid, case.start, case.goal)
            .expect("random endpoints are open cells");

        match (expected, report.outcome()) {
            (Some(distance), Outcome::Solved(solution)) => {
                assert_eq!(
                    solution.move_count(),
                    distance,
                    "bfs found a longer path than brute force on {case:?}"
                );
                assert_path_is_legal(&case, solution);
                solved += 1;
            }
            (None, Outcome::Unreachable) => unreachable += 1,
            (expected, outcome) => {
                panic!("bfs disagreed with brute force on {case:?}: {expected:?} vs {outcome:?}")
            }
        }
    }

    assert!(solved > 0, "random cases should include solvable grids");
    assert!(unreachable > 0, "random cases should include unsolvable grids");
}

#[test]
fn parent_only_suppression_agrees_with_visited_set() {
    let mut rng = ChaCha8Rng::seed_from_u64(RANDOM_SEED ^ 0xff);
    let mut visited = Solver::default();
    let mut parent_only = Solver::new(SearchConfig {
        cycle_suppression: CycleSuppression::ParentOnly,
    });
    let mut unreachable = 0;

    for _ in 0..200 {
        let case = RandomCase::generate(&mut rng, 6);
        let fast = visited
            .solve(&case.grid, case.start, case.goal)
            .expect("valid endpoints");
        let faithful = parent_only
            .solve(&case.grid, case.start, case.goal)
            .expect("valid endpoints");

        assert_eq!(
            fast.solution().map(Solution::move_count),
            faithful.solution().map(Solution::move_count),
            "suppression strategies disagree on {case:?}"
        );
        assert!(
            faithful.stats().discovered <= 4 * placement_count(&case.grid),
            "parent-only search recorded too many nodes on {case:?}"
        );
        if faithful.solution().is_none() {
            unreachable += 1;
        }
    }

    assert!(unreachable > 0, "expected at least one unreachable case");
}

#[test]
fn repeated_runs_return_the_same_answer() {
    let mut rng = ChaCha8Rng::seed_from_u64(RANDOM_SEED.rotate_left(17));
    let mut reused = Solver::default();

    for _ in 0..50 {
        let case = RandomCase::generate(&mut rng, 6);
        let first = reused
            .solve(&case.grid, case.start, case.goal)
            .expect("valid endpoints");
        let second = reused
            .solve(&case.grid, case.start, case.goal)
            .expect("valid endpoints");
        let fresh = Solver::default()
            .solve(&case.grid, case.start, case.goal)
            .expect("valid endpoints");

        assert_eq!(first, second, "reused solver diverged on {case:?}");
        assert_eq!(first, fresh, "fresh solver diverged on {case:?}");
    }
}

#[derive(Debug)]
struct RandomCase {
    grid: Grid,
    start: BlockState,
    goal: BlockState,
}

impl RandomCase {
    fn generate(rng: &mut ChaCha8Rng, max_dimension: u32) -> Self {
        let rows = rng.gen_range(1..=max_dimension);
        let columns = rng.gen_range(1..=max_dimension);
        let mut tiles: Vec<Tile> = (0..rows * columns)
            .map(|_| {
                if rng.gen_bool(0.25) {
                    Tile::Blocked
                } else {
                    Tile::Open
                }
            })
            .collect();

        let start = random_cell(rng, rows, columns);
        let goal = random_cell(rng, rows, columns);
        for cell in [start, goal] {
            let index = cell.row() as usize * columns as usize + cell.column() as usize;
            tiles[index] = Tile::Open;
        }

        Self {
            grid: Grid::new(rows, columns, tiles).expect("generated dimensions are valid"),
            start: BlockState::standing(start),
            goal: BlockState::standing(goal),
        }
    }
}

fn random_cell(rng: &mut ChaCha8Rng, rows: u32, columns: u32) -> CellCoord {
    CellCoord::new(
        rng.gen_range(0..rows) as i32,
        rng.gen_range(0..columns) as i32,
    )
}

fn placement_count(grid: &Grid) -> usize {
    let rows = grid.rows() as usize;
    let columns = grid.columns() as usize;
    rows * columns + rows * (columns - 1) + (rows - 1) * columns
}

/// Shortest distances by repeated edge relaxation over every placement.
fn brute_force_distance(grid: &Grid, start: BlockState, goal: BlockState) -> Option<usize> {
    let placements: Vec<BlockState> = grid
        .cells()
        .flat_map(|cell| {
            [
                BlockState::standing(cell),
                BlockState::lying(cell, cell.offset(0, 1)),
                BlockState::lying(cell, cell.offset(1, 0)),
            ]
        })
        .filter(|state| rules::is_valid(*state, grid))
        .collect();

    let mut distance = HashMap::from([(start, 0_usize)]);
    loop {
        let mut changed = false;
        for &state in &placements {
            let Some(&current) = distance.get(&state) else {
                continue;
            };
            for direction in Direction::ALL {
                let next = rules::roll(state, direction);
                if !rules::is_valid(next, grid) {
                    continue;
                }
                let candidate = current + 1;
                if distance.get(&next).map_or(true, |&known| candidate < known) {
                    let _ = distance.insert(next, candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    distance.get(&goal).copied()
}

fn assert_path_is_legal(case: &RandomCase, solution: &Solution) {
    let states = solution.states();
    assert_eq!(states.first(), Some(&case.start));
    assert_eq!(states.last(), Some(&case.goal));
    assert_eq!(states.len(), solution.move_count() + 1);

    for (pair, step) in states.windows(2).zip(solution.moves()) {
        assert!(rules::is_valid(pair[1], &case.grid), "path left the board");
        assert_eq!(rules::roll(pair[0], step.direction()), pair[1]);
        assert_eq!(step.result(), pair[1]);
    }
}
