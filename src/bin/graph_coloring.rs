use std::time::Instant;

use clap::{App, load_yaml};
use serde_json::json;

use csp_maze::color::{checker, CheckerResult};
use csp_maze::search::backtracking::GraphColoringCsp;
use csp_maze::util::{init_logger, read_coloring_params, export_results};


/** solves a graph coloring instance (arc consistency, then backtracking) */
pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    // parse arguments
    let yaml = load_yaml!("graph_coloring.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    init_logger(main_args.is_present("verbose"));
    let (
        inst_filename,
        instance,
        sol_file,
        perf_file
    ) = read_coloring_params(&main_args)?;

    // solve it
    let t_start = Instant::now();
    let mut csp = GraphColoringCsp::new(instance.clone());
    let solution = csp.solve();
    let duration = t_start.elapsed().as_secs_f32();
    println!("search took {:.3} seconds ({} nodes)", duration, csp.nb_nodes());
    let nb_colors = match &solution {
        None => {
            println!("no solution");
            None
        },
        Some(assignment) => {
            for (v,c) in assignment {
                println!("\t{} -> {}", v, c);
            }
            match checker(&instance, assignment) {
                CheckerResult::Ok(k) => {
                    println!("coloring found using {} colors", k);
                    Some(k)
                },
                checker_result => {
                    println!("invalid solution (reason: {:?})", checker_result);
                    None
                }
            }
        }
    };
    let stats = json!({
        "inst_name": inst_filename,
        "time_searched": duration,
        "nb_nodes": csp.nb_nodes(),
        "solved": solution.is_some(),
        "nb_colors": nb_colors,
    });

    // export results
    export_results(&stats, perf_file.as_deref(), &json!(solution), sol_file.as_deref())?;
    Ok(())
}
