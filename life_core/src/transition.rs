//! The transition engine: neighbor counting and the generation step.
//!
//! Every cell of the next generation is a function of the previous
//! generation only. `advance` reads the source grid and writes a freshly
//! allocated one, so no cell ever observes a half-written generation.

use crate::error::LifeError;
use crate::grid::Grid;
use std::fmt;

/// Moore neighborhood offsets, row by row.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Maps a cell's neighborhood to its next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rule {
    /// Live iff 2 or 3 neighbors are live, whatever the cell's own state.
    ///
    /// A dead cell with exactly 2 live neighbors is born, which classic Life
    /// does not do. This is the simulator's default rule.
    #[default]
    TwoOrThree,

    /// Classic B3/S23: birth on 3, survival on 2 or 3.
    Conway,
}

impl Rule {
    /// Next state of a cell that is currently `alive` with `neighbors` live neighbors.
    pub fn next_state(self, alive: bool, neighbors: u8) -> bool {
        match self {
            Rule::TwoOrThree => match neighbors {
                // birth / survival
                2 | 3 => true,
                // depopulation
                0 | 1 => false,
                // overcrowding
                4..=u8::MAX => false,
            },
            Rule::Conway => matches!((alive, neighbors), (_, 3) | (true, 2)),
        }
    }

    /// Short identifier used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::TwoOrThree => "B23/S23",
            Rule::Conway => "B3/S23",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Counts live cells among the eight neighbors of `(x, y)`.
///
/// Neighbors off the grid count as dead; there is no wraparound.
pub fn count_live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let (x, y) = (x as isize, y as isize);
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| {
            let (nx, ny) = (x + dx, y + dy);
            grid.is_in_bounds(nx, ny) && grid.is_alive(nx as usize, ny as usize)
        })
        .count() as u8
}

/// Applies a [`Rule`] to whole grids.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionEngine {
    rule: Rule,
}

impl TransitionEngine {
    /// Creates an engine for `rule`.
    pub fn new(rule: Rule) -> Self {
        Self { rule }
    }

    /// The rule in use.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// State of `(x, y)` in the next generation.
    pub fn next_cell_state(&self, grid: &Grid, x: usize, y: usize) -> bool {
        let neighbors = count_live_neighbors(grid, x, y);
        self.rule.next_state(grid.is_alive(x, y), neighbors)
    }

    /// Computes the next generation into a new grid of the same shape.
    ///
    /// The only failure is the grid allocation, which cannot reject
    /// dimensions copied from an existing grid.
    pub fn advance(&self, grid: &Grid) -> Result<Grid, LifeError> {
        let mut next = Grid::new(grid.cols(), grid.rows())?;

        for y in 0..grid.rows() {
            for x in 0..grid.cols() {
                next.set(x, y, self.next_cell_state(grid, x, y));
            }
        }

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;
    use proptest::collection::vec;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn live_set(grid: &Grid) -> BTreeSet<(usize, usize)> {
        grid.live_cells().collect()
    }

    fn filled(cols: usize, rows: usize) -> Grid {
        let mut grid = Grid::new(cols, rows).unwrap();
        for y in 0..rows {
            for x in 0..cols {
                grid.set(x, y, true);
            }
        }
        grid
    }

    #[test]
    fn test_dead_grid_has_no_neighbors() {
        let grid = Grid::new(7, 4).unwrap();
        for y in 0..4 {
            for x in 0..7 {
                assert_eq!(count_live_neighbors(&grid, x, y), 0);
            }
        }
    }

    #[test]
    fn test_boundary_excludes_off_grid_neighbors() {
        let grid = filled(5, 5);

        // corners
        assert_eq!(count_live_neighbors(&grid, 0, 0), 3);
        assert_eq!(count_live_neighbors(&grid, 4, 0), 3);
        assert_eq!(count_live_neighbors(&grid, 0, 4), 3);
        assert_eq!(count_live_neighbors(&grid, 4, 4), 3);

        // edges
        assert_eq!(count_live_neighbors(&grid, 2, 0), 5);
        assert_eq!(count_live_neighbors(&grid, 0, 2), 5);
        assert_eq!(count_live_neighbors(&grid, 4, 2), 5);
        assert_eq!(count_live_neighbors(&grid, 2, 4), 5);

        // interior
        assert_eq!(count_live_neighbors(&grid, 2, 2), 8);
        assert_eq!(count_live_neighbors(&grid, 1, 3), 8);
    }

    #[test]
    fn test_count_excludes_self() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, true);
        assert_eq!(count_live_neighbors(&grid, 1, 1), 0);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 1);
    }

    #[test]
    fn test_single_cell_grid() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.set(0, 0, true);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 0);

        let next = TransitionEngine::default().advance(&grid).unwrap();
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_two_or_three_rule_table() {
        for alive in [false, true] {
            let states: Vec<bool> = (0..=8)
                .map(|n| Rule::TwoOrThree.next_state(alive, n))
                .collect();
            assert_eq!(
                states,
                vec![false, false, true, true, false, false, false, false, false]
            );
        }
    }

    #[test]
    fn test_conway_rule_table() {
        let dead: Vec<bool> = (0..=8).map(|n| Rule::Conway.next_state(false, n)).collect();
        let live: Vec<bool> = (0..=8).map(|n| Rule::Conway.next_state(true, n)).collect();
        assert_eq!(dead, vec![false, false, false, true, false, false, false, false, false]);
        assert_eq!(live, vec![false, false, true, true, false, false, false, false, false]);
    }

    #[test]
    fn test_two_or_three_rule_births_on_two() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(1, 2, true);
        grid.set(3, 2, true);

        let default_engine = TransitionEngine::default();
        assert_eq!(default_engine.rule(), Rule::TwoOrThree);
        assert!(default_engine.next_cell_state(&grid, 2, 2));

        let conway = TransitionEngine::new(Rule::Conway);
        assert!(!conway.next_cell_state(&grid, 2, 2));
    }

    #[test]
    fn test_two_or_three_rule_block_grows() {
        let block = Pattern::from_static(&[&[true, true], &[true, true]]);
        let grid = Grid::new(12, 12).unwrap().with_pattern(&block, 5, 5).unwrap();

        let next = TransitionEngine::default().advance(&grid).unwrap();

        let expected: BTreeSet<(usize, usize)> = [
            (4, 5), (4, 6),
            (5, 4), (5, 5), (5, 6), (5, 7),
            (6, 4), (6, 5), (6, 6), (6, 7),
            (7, 5), (7, 6),
        ]
        .into_iter()
        .collect();
        assert_eq!(live_set(&next), expected);
    }

    #[test]
    fn test_block_is_still_life() {
        let engine = TransitionEngine::new(Rule::Conway);
        let block = Pattern::from_static(&[&[true, true], &[true, true]]);

        for (ox, oy) in [(1, 1), (4, 7), (8, 8), (5, 2)] {
            let grid = Grid::new(10, 10).unwrap().with_pattern(&block, ox, oy).unwrap();
            let next = engine.advance(&grid).unwrap();
            assert_eq!(next, grid, "block at ({}, {}) changed", ox, oy);
        }
    }

    #[test]
    fn test_glider_translates_after_four_generations() {
        let engine = TransitionEngine::new(Rule::Conway);
        let glider = Pattern::from_static(&[
            &[true, true, true],
            &[true, false, false],
            &[false, true, false],
        ]);
        let start = Grid::new(40, 25).unwrap().with_pattern(&glider, 10, 10).unwrap();

        let mut grid = start.clone();
        for _ in 0..4 {
            grid = engine.advance(&grid).unwrap();
        }

        // This orientation travels up and to the left.
        let expected: BTreeSet<(usize, usize)> =
            start.live_cells().map(|(x, y)| (x - 1, y - 1)).collect();
        assert_eq!(grid.population(), 5);
        assert_eq!(live_set(&grid), expected);
    }

    #[test]
    fn test_blinker_period_two() {
        let engine = TransitionEngine::new(Rule::Conway);
        let start = Grid::new(5, 5)
            .unwrap()
            .with_pattern(&Pattern::from_static(&[&[true, true, true]]), 1, 2)
            .unwrap();

        let once = engine.advance(&start).unwrap();
        let twice = engine.advance(&once).unwrap();

        let vertical: BTreeSet<(usize, usize)> = [(2, 1), (2, 2), (2, 3)].into_iter().collect();
        assert_eq!(live_set(&once), vertical);
        assert_eq!(twice, start);
    }

    #[test]
    fn test_edge_cells_die_without_wraparound() {
        // A vertical blinker on the left edge would wrap on a torus; here it
        // only rotates into the visible part.
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(0, 0, true);
        grid.set(0, 1, true);
        grid.set(0, 2, true);

        let next = TransitionEngine::new(Rule::Conway).advance(&grid).unwrap();
        let expected: BTreeSet<(usize, usize)> = [(0, 1), (1, 1)].into_iter().collect();
        assert_eq!(live_set(&next), expected);
        assert!(!next.is_alive(3, 1));
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..12, 1usize..12).prop_flat_map(|(cols, rows)| {
            vec(any::<bool>(), cols * rows).prop_map(move |cells| {
                let mut grid = Grid::new(cols, rows).unwrap();
                for (i, alive) in cells.into_iter().enumerate() {
                    grid.set(i % cols, i / cols, alive);
                }
                grid
            })
        })
    }

    proptest! {
        #[test]
        fn prop_advance_never_mutates_input(grid in arb_grid()) {
            let before = grid.clone();
            for rule in [Rule::TwoOrThree, Rule::Conway] {
                let next = TransitionEngine::new(rule).advance(&grid).unwrap();
                prop_assert_eq!(next.cols(), grid.cols());
                prop_assert_eq!(next.rows(), grid.rows());
            }
            prop_assert_eq!(grid, before);
        }

        #[test]
        fn prop_neighbor_count_in_range(grid in arb_grid()) {
            for y in 0..grid.rows() {
                for x in 0..grid.cols() {
                    let n = count_live_neighbors(&grid, x, y);
                    let on_x_edge = x == 0 || x + 1 == grid.cols();
                    let on_y_edge = y == 0 || y + 1 == grid.rows();
                    let limit = match (on_x_edge, on_y_edge) {
                        (true, true) => 3,
                        (true, false) | (false, true) => 5,
                        (false, false) => 8,
                    };
                    prop_assert!(n <= limit);
                }
            }
        }

        #[test]
        fn prop_two_steps_match_cellwise_rule(grid in arb_grid()) {
            let engine = TransitionEngine::default();
            let once = engine.advance(&grid).unwrap();
            let twice = engine.advance(&once).unwrap();
            for y in 0..grid.rows() {
                for x in 0..grid.cols() {
                    prop_assert_eq!(twice.is_alive(x, y), engine.next_cell_state(&once, x, y));
                }
            }
        }
    }
}
