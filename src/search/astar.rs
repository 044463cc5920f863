use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use log::{debug, info, warn};

use crate::grid::{Cell, Grid};


/// Manhattan distance (admissible and consistent for unit cost 4-directional moves)
pub fn heuristic(a:Cell, b:Cell) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

/** frontier entry: estimated total cost f = g + h of a cell */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    /// estimated total cost
    f: usize,
    /// cell
    cell: Cell,
}

// reversed: the BinaryHeap pops the smallest f first (then the smallest cell)
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f)
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}


/**
Best-first search (A*) on a grid, from a start cell towards an end cell.
A cell may be pushed several times in the frontier (no decrease-key), stale
entries are skipped when popped.
*/
#[derive(Debug)]
pub struct PathSearch<'a> {
    /// grid to explore
    grid: &'a Grid,
    /// start cell
    start: Cell,
    /// goal cell
    end: Cell,
    /// discovered cells, ordered by estimated total cost
    frontier: BinaryHeap<FrontierEntry>,
    /// cost_so_far[c]: best known cost from the start to c
    cost_so_far: HashMap<Cell, usize>,
    /// came_from[c]: predecessor of c on the best known path
    came_from: HashMap<Cell, Cell>,
    /// number of cells expanded
    nb_expanded: usize,
}

impl<'a> PathSearch<'a> {

    /// creates a search (nothing explored yet)
    pub fn new(grid:&'a Grid, start:Cell, end:Cell) -> Self {
        Self {
            grid,
            start,
            end,
            frontier: BinaryHeap::new(),
            cost_so_far: HashMap::new(),
            came_from: HashMap::new(),
            nb_expanded: 0,
        }
    }

    /// best known costs from the start
    pub fn cost_so_far(&self) -> &HashMap<Cell, usize> { &self.cost_so_far }

    /// best known predecessors
    pub fn came_from(&self) -> &HashMap<Cell, Cell> { &self.came_from }

    /// number of cells expanded
    pub fn nb_expanded(&self) -> usize { self.nb_expanded }

    /// number of entries (stale or not) still in the frontier
    pub fn frontier_len(&self) -> usize { self.frontier.len() }

    /**
    explores the grid. returns true as soon as the end cell is popped from the
    frontier, false when the frontier runs out.
    */
    pub fn run(&mut self) -> bool {
        let grid = self.grid;
        if !grid.in_bounds(self.start) {
            warn!("start cell {} is outside the grid", self.start);
            return false;
        }
        self.cost_so_far.insert(self.start, 0);
        self.frontier.push(FrontierEntry { f: heuristic(self.start, self.end), cell: self.start });
        while let Some(FrontierEntry { f, cell }) = self.frontier.pop() {
            if cell == self.end {
                info!("reached {} from {} (cost {}, {} cells expanded)",
                    self.end, self.start, self.cost_so_far[&cell], self.nb_expanded
                );
                return true;
            }
            let g = self.cost_so_far[&cell];
            if f > g + heuristic(cell, self.end) { continue; } // stale
            self.nb_expanded += 1;
            for neighbor in grid.neighbors(cell) {
                let tentative = g + 1;
                let improves = match self.cost_so_far.get(&neighbor) {
                    None => true,
                    Some(old) => tentative < *old,
                };
                if improves {
                    self.came_from.insert(neighbor, cell);
                    self.cost_so_far.insert(neighbor, tentative);
                    self.frontier.push(FrontierEntry {
                        f: tentative + heuristic(neighbor, self.end),
                        cell: neighbor,
                    });
                }
            }
        }
        debug!("{} unreachable from {} ({} cells expanded)", self.end, self.start, self.nb_expanded);
        false
    }
}

/// returns true iff end can be reached from start
pub fn path_search(grid:&Grid, start:Cell, end:Cell) -> bool {
    PathSearch::new(grid, start, end).run()
}
