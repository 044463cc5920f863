use std::fs;
use std::rc::Rc;

use clap::ArgMatches;
use log::{LevelFilter, Log, Metadata, Record};
use serde_json::Value;

use crate::{
    color::Instance,
    error::InputError,
    grid::{Cell, Grid},
};


/// logger writing records on stderr
#[derive(Debug)]
struct StderrLogger {
    /// most verbose level displayed
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/** installs the stderr logger (info level, or debug if verbose).
does nothing if a logger is already installed. */
pub fn init_logger(verbose:bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    if log::set_boxed_logger(Box::new(StderrLogger { level })).is_ok() {
        log::set_max_level(level);
    }
}

/// reads the value of an optional file argument
fn read_optional_file(main_args:&ArgMatches, name:&str, description:&str) -> Option<String> {
    match main_args.value_of(name) {
        None => None,
        Some(e) => {
            println!("printing {} in: {}", description, e);
            Some(e.to_string())
        }
    }
}

/** reads command line input for the graph coloring solver.
returns the instance name, the instance, solution_filename, stats_filename */
pub fn read_coloring_params(main_args:&ArgMatches) -> Result<(String, Rc<Instance>, Option<String>, Option<String>), InputError> {
    let inst_filename = main_args.value_of("instance").unwrap_or_default();
    let sol_file = read_optional_file(main_args, "solution", "solutions");
    let perf_file = read_optional_file(main_args, "perf", "perfs");
    // read instance file
    let instance = Rc::new(Instance::from_file(inst_filename)?);
    instance.display_statistics();
    println!("=======================");
    Ok((inst_filename.to_string(), instance, sol_file, perf_file))
}

/** reads command line input for the maze solver.
returns the instance name, the grid, start, end, stats_filename.
fails if start or end lies outside the grid. */
pub fn read_maze_params(main_args:&ArgMatches) -> Result<(String, Grid, Cell, Cell, Option<String>), InputError> {
    let inst_filename = main_args.value_of("instance").unwrap_or_default();
    let start:Cell = main_args.value_of("start").unwrap_or_default().parse()?;
    let end:Cell = main_args.value_of("end").unwrap_or_default().parse()?;
    let perf_file = read_optional_file(main_args, "perf", "perfs");
    // read instance file
    let grid = Grid::from_file(inst_filename)?;
    grid.check_bounds("start", start)?;
    grid.check_bounds("end", end)?;
    grid.display_statistics();
    println!("\tstart: {}\tend: {}", start, end);
    println!("=======================");
    Ok((inst_filename.to_string(), grid, start, end, perf_file))
}

/// writes a json value into a file
fn write_json(filename:&str, value:&Value) -> Result<(), InputError> {
    fs::write(filename, format!("{:#}", value))
        .map_err(|e| InputError::WriteFile(filename.to_string(), e))
}

/// exports search results to files (statistics and solution, if asked for)
pub fn export_results(
    stats:&Value,
    perf_file:Option<&str>,
    solution:&Value,
    sol_file:Option<&str>,
) -> Result<(), InputError> {
    if let Some(filename) = perf_file {
        write_json(filename, stats)?;
    }
    if let Some(filename) = sol_file {
        write_json(filename, solution)?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    use std::env;

    use clap::{App, Arg};
    use serde_json::json;

    fn maze_args(args:&[&str]) -> ArgMatches<'static> {
        App::new("maze")
            .arg(Arg::with_name("instance").required(true).index(1))
            .arg(Arg::with_name("start").long("start").takes_value(true).default_value("1,1"))
            .arg(Arg::with_name("end").long("end").takes_value(true).default_value("1,8"))
            .arg(Arg::with_name("perf").short("p").long("perf").takes_value(true))
            .get_matches_from(args)
    }

    #[test]
    fn test_read_maze_params() {
        let (name, grid, start, end, perf) = read_maze_params(
            &maze_args(&["maze", "insts/mazes/maze.txt"])
        ).unwrap();
        assert_eq!(name, "insts/mazes/maze.txt");
        assert_eq!(grid.nb_rows(), 7);
        assert_eq!((start, end), (Cell::new(1,1), Cell::new(1,8)));
        assert_eq!(perf, None);
    }

    #[test]
    fn test_read_maze_params_out_of_bounds() {
        let res = read_maze_params(
            &maze_args(&["maze", "insts/mazes/open_3x3.txt", "--end", "2,3"])
        );
        assert!(matches!(res, Err(InputError::OutOfBounds { name: "end", .. })));
        let res = read_maze_params(
            &maze_args(&["maze", "insts/mazes/open_3x3.txt", "--start", "0;0"])
        );
        assert!(matches!(res, Err(InputError::InvalidCell(_))));
    }

    #[test]
    fn test_read_coloring_params() {
        let main_args = App::new("graph_coloring")
            .arg(Arg::with_name("instance").required(true).index(1))
            .arg(Arg::with_name("solution").short("s").long("solution").takes_value(true))
            .arg(Arg::with_name("perf").short("p").long("perf").takes_value(true))
            .get_matches_from(&["graph_coloring", "insts/graphs/triangle_3.txt", "-s", "sol.json"]);
        let (name, inst, sol, perf) = read_coloring_params(&main_args).unwrap();
        assert_eq!(name, "insts/graphs/triangle_3.txt");
        assert_eq!(inst.nb_vertices(), 3);
        assert_eq!(sol, Some("sol.json".to_string()));
        assert_eq!(perf, None);
    }

    #[test]
    fn test_export_results() {
        let dir = env::temp_dir();
        let perf = dir.join("csp_maze_test_perf.json");
        let sol = dir.join("csp_maze_test_sol.json");
        let stats = json!({"inst_name": "triangle", "nb_nodes": 4});
        let solution = json!({"0": 0, "1": 1});
        export_results(&stats, perf.to_str(), &solution, sol.to_str()).unwrap();
        let read_stats:Value = serde_json::from_str(&fs::read_to_string(&perf).unwrap()).unwrap();
        let read_sol:Value = serde_json::from_str(&fs::read_to_string(&sol).unwrap()).unwrap();
        assert_eq!(read_stats, stats);
        assert_eq!(read_sol, solution);
        fs::remove_file(perf).unwrap();
        fs::remove_file(sol).unwrap();
    }

    #[test]
    fn test_export_nothing() {
        assert!(export_results(&Value::Null, None, &Value::Null, None).is_ok());
    }

    #[test]
    fn test_export_unwritable() {
        let res = export_results(&Value::Null, Some("insts/no_such_dir/perf.json"), &Value::Null, None);
        assert!(matches!(res, Err(InputError::WriteFile(_, _))));
    }
}
