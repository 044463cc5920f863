use std::fmt;
use std::str::FromStr;

use bit_set::BitSet;
use nom::IResult;
use nom::character::complete::{char, digit1, space0};
use nom::combinator::{all_consuming, map_res};
use nom::sequence::{delimited, separated_pair};
use serde::Serialize;

use crate::error::InputError;
use crate::maze_format::read_from_file;

/// 4-directional moves (right, left, down, up)
const DIRECTIONS:[(isize,isize) ; 4] = [(0,1), (0,-1), (1,0), (-1,0)];

/** (row, col) coordinate of a grid cell. Ordered by row, then column. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Cell {
    /// row index
    pub row: usize,
    /// column index
    pub col: usize,
}

impl Cell {
    /// creates a cell
    pub fn new(row:usize, col:usize) -> Self { Self { row, col } }
}

/// reads a row or column index
fn read_coordinate(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads `row,col`
fn read_cell(s:&str) -> IResult<&str, (usize,usize)> {
    all_consuming(delimited(
        space0,
        separated_pair(read_coordinate, delimited(space0, char(','), space0), read_coordinate),
        space0,
    ))(s)
}

impl FromStr for Cell {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match read_cell(s) {
            Ok((_,(row,col))) => Ok(Cell::new(row, col)),
            Err(_) => Err(InputError::InvalidCell(s.to_string())),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/** rectangular grid of passable / blocked cells */
#[derive(Debug, Clone)]
pub struct Grid {
    /// number of rows
    nb_rows: usize,
    /// number of columns
    nb_cols: usize,
    /// passable[row*nb_cols+col]: true iff the cell is passable
    passable: BitSet,
}

impl Grid {

    /** builds a grid from rows of integers (0: passable, anything else: blocked).
    rows must all have the same (non-zero) length. */
    pub fn new(rows:&[Vec<i64>]) -> Result<Self, InputError> {
        let nb_cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(InputError::EmptyMaze),
        };
        let mut passable = BitSet::with_capacity(rows.len()*nb_cols);
        for (i,row) in rows.iter().enumerate() {
            if row.len() != nb_cols {
                return Err(InputError::RaggedRow { row: i, expected: nb_cols, found: row.len() });
            }
            for (j,value) in row.iter().enumerate() {
                if *value == 0 { passable.insert(i*nb_cols+j); }
            }
        }
        Ok(Self { nb_rows: rows.len(), nb_cols, passable })
    }

    /// reads a grid from a file (one whitespace-separated row per line)
    pub fn from_file(filename:&str) -> Result<Self, InputError> {
        let rows = read_from_file(filename)?;
        Self::new(&rows)
    }

    /// number of rows
    pub fn nb_rows(&self) -> usize { self.nb_rows }

    /// number of columns
    pub fn nb_cols(&self) -> usize { self.nb_cols }

    /// true iff the cell is inside the grid
    pub fn in_bounds(&self, c:Cell) -> bool { c.row < self.nb_rows && c.col < self.nb_cols }

    /// true iff the cell is inside the grid and passable
    pub fn is_passable(&self, c:Cell) -> bool {
        self.in_bounds(c) && self.passable.contains(c.row*self.nb_cols+c.col)
    }

    /// in-bounds passable cells reachable from c in one move
    pub fn neighbors(&self, c:Cell) -> impl Iterator<Item=Cell> + '_ {
        DIRECTIONS.iter().filter_map(move |(dr,dc)| {
            let n = Cell::new(c.row.checked_add_signed(*dr)?, c.col.checked_add_signed(*dc)?);
            if self.is_passable(n) { Some(n) } else { None }
        })
    }

    /// checks that a cell given by the user lies inside the grid
    pub fn check_bounds(&self, name:&'static str, c:Cell) -> Result<(), InputError> {
        if self.in_bounds(c) {
            Ok(())
        } else {
            Err(InputError::OutOfBounds {
                name, row: c.row, col: c.col, nb_rows: self.nb_rows, nb_cols: self.nb_cols
            })
        }
    }

    /// print statistics of the grid
    pub fn display_statistics(&self) {
        println!("\t{} \t rows", self.nb_rows());
        println!("\t{} \t columns", self.nb_cols());
        println!("\t{} \t passable cells", self.passable.len());
    }
}
