use std::time::Instant;

use clap::{App, load_yaml};
use serde_json::json;

use csp_maze::search::astar::PathSearch;
use csp_maze::util::{init_logger, read_maze_params, export_results};


/** tells whether the end of a maze is reachable from its start */
pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    // parse arguments
    let yaml = load_yaml!("maze.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    init_logger(main_args.is_present("verbose"));
    let (inst_filename, grid, start, end, perf_file) = read_maze_params(&main_args)?;

    // solve it
    let t_start = Instant::now();
    let mut search = PathSearch::new(&grid, start, end);
    let reachable = search.run();
    let duration = t_start.elapsed().as_secs_f32();
    println!("search took {:.3} seconds ({} cells expanded)", duration, search.nb_expanded());
    println!("{}", if reachable { "YES" } else { "NO" });
    let stats = json!({
        "inst_name": inst_filename,
        "time_searched": duration,
        "start": start,
        "end": end,
        "reachable": reachable,
        "nb_expanded": search.nb_expanded(),
        "frontier_len": search.frontier_len(),
        "cost": search.cost_so_far().get(&end).filter(|_| reachable),
    });

    // export results
    export_results(&stats, perf_file.as_deref(), &json!(null), None)?;
    Ok(())
}
