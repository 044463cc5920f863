//! Search algorithms: constraint propagation and backtracking for the graph
//! coloring problem, best-first search for the maze problem.

/// domain store (candidate colors of each vertex)
pub mod domains;

/// arc consistency (domain narrowing by propagation)
pub mod arc_consistency;

/// backtracking search with MRV ordering and forward checking
pub mod backtracking;

/// A* reachability search on grids
pub mod astar;
