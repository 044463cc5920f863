use thiserror::Error;

/// Error raised while reading a problem from its text format or from the
/// command line, before any solver runs.
#[derive(Error, Debug)]
pub enum InputError {
    /// Error when reading a file.
    #[error("failed to read file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when writing a result file.
    #[error("failed to write file '{0}': {1}")]
    WriteFile(String, std::io::Error),

    /// The graph file declares no palette size.
    #[error("missing 'colors = <int>' line")]
    MissingColors,

    /// A `colors =` line whose value is not a non-negative integer.
    #[error("line {line}: invalid colors declaration '{content}'")]
    InvalidColors {
        /// line number (starting at 1)
        line: usize,
        /// offending line
        content: String,
    },

    /// A line containing a comma that is not an `u,v` pair of integers.
    #[error("line {line}: invalid edge '{content}' (expected '<int>,<int>')")]
    InvalidEdge {
        /// line number (starting at 1)
        line: usize,
        /// offending line
        content: String,
    },

    /// A maze row containing something else than integers.
    #[error("line {line}: invalid maze row '{content}'")]
    InvalidRow {
        /// line number (starting at 1)
        line: usize,
        /// offending line
        content: String,
    },

    /// Rows of the maze do not all have the same length.
    #[error("maze row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// row index (starting at 0)
        row: usize,
        /// length of the first row
        expected: usize,
        /// length of this row
        found: usize,
    },

    /// The maze contains no cell.
    #[error("maze is empty")]
    EmptyMaze,

    /// A cell given on the command line is not `row,col`.
    #[error("invalid cell '{0}' (expected '<row>,<col>')")]
    InvalidCell(String),

    /// The start or end cell lies outside the maze.
    #[error("{name} cell ({row},{col}) is outside the {nb_rows}x{nb_cols} maze")]
    OutOfBounds {
        /// "start" or "end"
        name: &'static str,
        /// row of the cell
        row: usize,
        /// column of the cell
        col: usize,
        /// number of rows of the maze
        nb_rows: usize,
        /// number of columns of the maze
        nb_cols: usize,
    },
}
