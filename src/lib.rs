//! Graph coloring (arc consistency + backtracking) and grid pathfinding (A*)

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// coloring instance, assignments and checker
pub mod color;

/// read the `colors = N` / `u,v` graph format
pub mod graph_format;

/// passability grid and cells
pub mod grid;

/// read whitespace-separated maze files
pub mod maze_format;

/// errors raised while reading problems and arguments
pub mod error;

/// helper and utility methods for executables
pub mod util;

/// search algorithms for both problems
pub mod search;
