//! The propagation engine proper.

use gridnine_core::{Cell, Grid, Position};
use log::debug;

use crate::house::House;

/// Statistics collected while solving.
///
/// # Examples
///
/// ```
/// use gridnine_core::Grid;
/// use gridnine_solver::solve_with_stats;
///
/// let mut grid = Grid::new();
/// let (solved, stats) = solve_with_stats(&mut grid);
/// assert!(!solved); // nothing to propagate from
/// assert_eq!(stats.passes, 0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    /// Number of sweeps that removed at least one candidate. The final
    /// no-change sweep that detects the fixpoint is not counted.
    pub passes: usize,
    /// Total number of candidates removed, including the last
    /// candidate of each cell that became fixed.
    pub candidates_removed: usize,
    /// Number of open cells that became fixed.
    pub cells_fixed: usize,
}

/// Applies one elimination scope to the open cell at `pos`.
///
/// Every peer in the scope that holds a fixed value has that value
/// removed from the cell's candidate set. Returns `true` if any
/// candidate was actually removed; removing an already-absent
/// candidate is a no-op and does not count.
///
/// If the call removed something and exactly one candidate remains,
/// the cell is fixed to that digit on the spot. This makes the new
/// value visible to eliminations later in the same sweep.
///
/// Returns `false` without touching anything if the cell is already
/// fixed.
pub fn eliminate(grid: &mut Grid, pos: Position, house: House) -> bool {
    let Some(mut candidates) = grid[pos].candidates() else {
        return false;
    };

    let mut reduced = false;
    for peer in house.positions(pos) {
        if let Some(value) = grid[peer].value() {
            reduced |= candidates.remove(value);
        }
    }

    if reduced {
        grid[pos] = match candidates.as_single() {
            Some(digit) => Cell::Fixed(digit),
            None => Cell::Open(candidates),
        };
    }

    reduced
}

/// Runs one full sweep over all 81 cells.
///
/// Cells are visited in row-major order, and each open cell gets row,
/// column, then block elimination against the live grid state. A cell
/// fixed earlier in the sweep is therefore already visible to the
/// cells after it; this same-pass visibility is deliberate.
///
/// Returns `true` if any candidate set shrank during the sweep.
pub fn reduce_pass(grid: &mut Grid) -> bool {
    let mut reduced = false;
    for pos in Position::all() {
        if !grid[pos].is_open() {
            continue;
        }
        for house in House::ALL {
            reduced |= eliminate(grid, pos, house);
        }
    }
    reduced
}

/// Runs [`reduce_pass`] to a fixpoint and reports whether the grid is
/// solved, along with [`SolveStats`].
///
/// Termination is guaranteed: each productive sweep removes at least
/// one of the finitely many candidates, and candidate sets only ever
/// shrink.
pub fn solve_with_stats(grid: &mut Grid) -> (bool, SolveStats) {
    let mut stats = SolveStats::default();

    loop {
        let open_before = grid.open_count();
        let candidates_before = candidate_count(grid);
        if !reduce_pass(grid) {
            break;
        }
        stats.passes += 1;
        stats.candidates_removed += candidates_before - candidate_count(grid);
        stats.cells_fixed += open_before - grid.open_count();
        debug!(
            "pass {}: {} open cells, {} candidates left",
            stats.passes,
            grid.open_count(),
            candidate_count(grid)
        );
    }

    (grid.is_solved(), stats)
}

/// Runs propagation to a fixpoint and reports whether every cell ended
/// up with a value.
///
/// This never fails: a puzzle that direct elimination cannot finish is
/// reported as `false` with the grid left in its partially reduced
/// state.
///
/// # Examples
///
/// ```
/// use gridnine_core::Grid;
/// use gridnine_solver::solve;
///
/// // A grid with no givens has nothing to eliminate from.
/// let mut grid = Grid::new();
/// assert!(!solve(&mut grid));
/// ```
pub fn solve(grid: &mut Grid) -> bool {
    solve_with_stats(grid).0
}

fn candidate_count(grid: &Grid) -> usize {
    grid.cells()
        .filter_map(|(_, cell)| cell.candidates())
        .map(gridnine_core::DigitSet::len)
        .sum()
}

#[cfg(test)]
mod tests {
    use gridnine_core::{Digit, DigitSet};
    use proptest::prelude::*;

    use super::*;

    /// A solved grid built from shifted rows; handy for carving test
    /// puzzles with known solutions.
    const SOLVED: &str = "\
        1,2,3,4,5,6,7,8,9\n\
        4,5,6,7,8,9,1,2,3\n\
        7,8,9,1,2,3,4,5,6\n\
        2,3,4,5,6,7,8,9,1\n\
        5,6,7,8,9,1,2,3,4\n\
        8,9,1,2,3,4,5,6,7\n\
        3,4,5,6,7,8,9,1,2\n\
        6,7,8,9,1,2,3,4,5\n\
        9,1,2,3,4,5,6,7,8";

    /// Project Euler problem 96, grid 01. Falls to direct elimination
    /// alone.
    const EASY: &str = "\
        x,x,3,x,2,x,6,x,x\n\
        9,x,x,3,x,5,x,x,1\n\
        x,x,1,8,x,6,4,x,x\n\
        x,x,8,1,x,2,9,x,x\n\
        7,x,x,x,x,x,x,x,8\n\
        x,x,6,7,x,8,2,x,x\n\
        x,x,2,6,x,9,5,x,x\n\
        8,x,x,2,x,3,x,x,9\n\
        x,x,5,x,1,x,3,x,x";

    /// Arto Inkala's "Everest" puzzle. Valid with a unique solution,
    /// but far beyond direct elimination.
    const HARD: &str = "\
        8,x,x,x,x,x,x,x,x\n\
        x,x,3,6,x,x,x,x,x\n\
        x,7,x,x,9,x,2,x,x\n\
        x,5,x,x,x,7,x,x,x\n\
        x,x,x,x,4,5,7,x,x\n\
        x,x,x,1,x,x,x,3,x\n\
        x,x,1,x,x,x,x,6,8\n\
        x,x,8,5,x,x,x,1,x\n\
        x,9,x,x,x,x,4,x,x";

    fn candidate_sets(grid: &Grid) -> Vec<Option<DigitSet>> {
        grid.cells().map(|(_, cell)| cell.candidates()).collect()
    }

    fn values(grid: &Grid) -> Vec<Option<Digit>> {
        grid.cells().map(|(_, cell)| cell.value()).collect()
    }

    #[test]
    fn test_eight_fixed_column_peers_fix_the_ninth() {
        let mut grid = Grid::new();
        for row in 0..8 {
            grid[Position::new(row, 0)] = Cell::Fixed(Digit::from_value(row + 1));
        }

        let reduced = eliminate(&mut grid, Position::new(8, 0), House::Column);
        assert!(reduced);
        assert_eq!(grid[Position::new(8, 0)].value(), Some(Digit::D9));
    }

    #[test]
    fn test_elimination_is_idempotent() {
        let mut grid = Grid::new();
        grid[Position::new(0, 0)] = Cell::Fixed(Digit::D5);

        let pos = Position::new(0, 8);
        assert!(eliminate(&mut grid, pos, House::Row));
        // Second scan finds nothing left to remove.
        assert!(!eliminate(&mut grid, pos, House::Row));
        assert_eq!(
            grid[pos].candidates().unwrap().len(),
            8,
            "only the fixed peer's digit is gone"
        );
    }

    #[test]
    fn test_eliminate_skips_fixed_cells() {
        let mut grid: Grid = SOLVED.parse().unwrap();
        let before = grid.clone();
        for house in House::ALL {
            assert!(!eliminate(&mut grid, Position::new(4, 4), house));
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn test_solved_grid_needs_zero_passes() {
        let mut grid: Grid = SOLVED.parse().unwrap();
        assert_eq!(grid.open_count(), 0);

        let (solved, stats) = solve_with_stats(&mut grid);
        assert!(solved);
        assert_eq!(stats.passes, 0);
        assert_eq!(stats.candidates_removed, 0);
    }

    #[test]
    fn test_all_open_grid_never_progresses() {
        let mut grid = Grid::new();
        assert!(!solve(&mut grid));
        for (_, cell) in grid.cells() {
            assert_eq!(cell.candidates(), Some(DigitSet::FULL));
        }
    }

    #[test]
    fn test_single_open_block_solves_in_one_pass() {
        let mut grid: Grid = SOLVED.parse().unwrap();
        let expected = grid.clone();
        for row in 0..3 {
            for col in 0..3 {
                grid[Position::new(row, col)] = Cell::open();
            }
        }

        let (solved, stats) = solve_with_stats(&mut grid);
        assert!(solved);
        assert_eq!(stats.passes, 1);
        assert_eq!(stats.cells_fixed, 9);
        assert_eq!(grid, expected);
    }

    #[test]
    fn test_easy_puzzle_solves() {
        let mut grid: Grid = EASY.parse().unwrap();
        assert!(solve(&mut grid));
        assert!(grid.is_solved());
        // Spot-check the known solution corners.
        assert_eq!(grid[Position::new(0, 0)].value(), Some(Digit::D4));
        assert_eq!(grid[Position::new(0, 8)].value(), Some(Digit::D7));
        assert_eq!(grid[Position::new(8, 0)].value(), Some(Digit::D6));
        assert_eq!(grid[Position::new(8, 8)].value(), Some(Digit::D2));
    }

    #[test]
    fn test_hard_puzzle_reports_unsolved() {
        let mut grid: Grid = HARD.parse().unwrap();
        let givens: Vec<(Position, Digit)> = grid
            .cells()
            .filter_map(|(pos, cell)| cell.value().map(|value| (pos, value)))
            .collect();

        assert!(!solve(&mut grid));
        assert!(!grid.is_solved());
        // The givens themselves survive, digit for digit.
        for (pos, value) in givens {
            assert_eq!(grid[pos].value(), Some(value), "given at {pos} changed");
        }
    }

    #[test]
    fn test_candidates_shrink_monotonically() {
        let mut grid: Grid = EASY.parse().unwrap();

        loop {
            let sets_before = candidate_sets(&grid);
            let values_before = values(&grid);
            if !reduce_pass(&mut grid) {
                break;
            }
            for (i, (before, after)) in
                sets_before.iter().zip(candidate_sets(&grid)).enumerate()
            {
                match (before, after) {
                    // Still open: candidates may only shrink.
                    (Some(b), Some(a)) => assert!(a.is_subset(*b), "cell {i} grew"),
                    // Newly fixed this pass.
                    (Some(_), None) => {}
                    // Was fixed: must stay fixed with the same value.
                    (None, None) => {}
                    (None, Some(_)) => panic!("cell {i} reopened"),
                }
            }
            for (i, (before, after)) in values_before.iter().zip(values(&grid)).enumerate() {
                if let Some(value) = before {
                    assert_eq!(Some(*value), after, "cell {i} was reassigned");
                }
            }
        }
    }

    #[test]
    fn test_fixpoint_is_idempotent() {
        let mut grid: Grid = HARD.parse().unwrap();
        while reduce_pass(&mut grid) {}

        let settled = grid.clone();
        assert!(!reduce_pass(&mut grid));
        assert_eq!(grid, settled);
    }

    #[test]
    fn test_pass_is_sound_against_pre_pass_values() {
        let mut grid: Grid = EASY.parse().unwrap();
        let fixed_before: Vec<(Position, Digit)> = grid
            .cells()
            .filter_map(|(pos, cell)| cell.value().map(|value| (pos, value)))
            .collect();

        reduce_pass(&mut grid);

        for &(peer, value) in &fixed_before {
            for house in House::ALL {
                for pos in house.positions(peer) {
                    if let Some(candidates) = grid[pos].candidates() {
                        assert!(
                            !candidates.contains(value),
                            "open cell {pos} kept {value}, fixed at {peer} before the pass"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_solve_stats_add_up() {
        let mut grid: Grid = EASY.parse().unwrap();
        let open_before = grid.open_count();

        let (solved, stats) = solve_with_stats(&mut grid);
        assert!(solved);
        assert!(stats.passes > 0);
        assert_eq!(stats.cells_fixed, open_before);
        // Every cell that became fixed shed its full candidate set,
        // one digit at a time.
        assert!(stats.candidates_removed >= stats.cells_fixed);
    }

    proptest! {
        /// Arbitrary given sets, consistent or not: the solver always
        /// reaches a fixpoint, never reassigns a given, and never
        /// regrows a candidate set.
        #[test]
        fn prop_arbitrary_givens_terminate_and_survive(
            givens in prop::collection::btree_map(0u8..81, 1u8..=9, 0..30),
        ) {
            let mut grid = Grid::new();
            for (&index, &value) in &givens {
                let pos = Position::new(index / 9, index % 9);
                grid[pos] = Cell::Fixed(Digit::from_value(value));
            }
            let loaded = grid.clone();

            let _ = solve(&mut grid);

            for (&index, &value) in &givens {
                let pos = Position::new(index / 9, index % 9);
                prop_assert_eq!(grid[pos].value(), Some(Digit::from_value(value)));
            }
            for pos in Position::all() {
                if let Some(after) = grid[pos].candidates() {
                    let before = loaded[pos].candidates().unwrap();
                    prop_assert!(after.is_subset(before));
                }
            }
            // Fixpoint means another sweep is a no-op.
            prop_assert!(!reduce_pass(&mut grid));
        }
    }
}
