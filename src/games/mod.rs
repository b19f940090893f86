//! Ready-made games for the coalition solver.
//!
//! These serve as:
//!
//! 1. **Validation**: games with equilibria worked out in the literature
//!    (Ray 2007, Examples 5.1 and 5.2) check the solver end to end.
//!
//! 2. **Load**: seeded random games cover every (size, structure) key and
//!    exercise the solver for larger player counts in benchmarks and sweeps.
//!
//! ## Available Games
//!
//! - [`ray`]: the worked examples from Ray (2007), chapter 5
//! - [`random`]: seeded random worth tables

pub mod random;
pub mod ray;
