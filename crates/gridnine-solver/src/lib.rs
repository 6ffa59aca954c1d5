//! Constraint-propagation engine for gridnine.
//!
//! The engine repeatedly sweeps the board, removing each fixed digit
//! from the candidate sets of the open cells sharing its row, column,
//! or 3×3 block, and fixing any cell whose candidates narrow to a
//! single digit. It runs to a fixpoint and never guesses: puzzles that
//! need trial-and-error come back unsolved, which is a normal outcome
//! rather than an error.
//!
//! # Examples
//!
//! ```
//! use gridnine_core::Grid;
//! use gridnine_solver::solve;
//!
//! let mut grid: Grid = "\
//! x,x,3,x,2,x,6,x,x
//! 9,x,x,3,x,5,x,x,1
//! x,x,1,8,x,6,4,x,x
//! x,x,8,1,x,2,9,x,x
//! 7,x,x,x,x,x,x,x,8
//! x,x,6,7,x,8,2,x,x
//! x,x,2,6,x,9,5,x,x
//! 8,x,x,2,x,3,x,x,9
//! x,x,5,x,1,x,3,x,x"
//!     .parse()?;
//!
//! if solve(&mut grid) {
//!     println!("{grid}");
//! }
//! # Ok::<(), gridnine_core::ParseGridError>(())
//! ```

pub use self::{
    engine::{SolveStats, reduce_pass, solve, solve_with_stats},
    house::House,
};

mod engine;
mod house;
