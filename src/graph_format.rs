use std::fs;

use log::debug;
use nom::IResult;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, space0};
use nom::combinator::{all_consuming, map_res};
use nom::sequence::{delimited, separated_pair, tuple};

use crate::color::VertexId;
use crate::error::InputError;


/// reads a non-negative integer
fn read_integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// recognizes the beginning of a palette declaration (`colors =`)
fn read_colors_prefix(s:&str) -> IResult<&str, ()> {
    let (remaining,_) = tuple((tag("colors"), space0, char('='), space0))(s)?;
    Ok((remaining, ()))
}

/// reads a palette declaration line (`colors = 3`)
pub fn read_colors(s:&str) -> IResult<&str, usize> {
    all_consuming(delimited(read_colors_prefix, read_integer, space0))(s)
}

/// reads an edge line (`1,2`, spaces around the comma are accepted)
pub fn read_edge(s:&str) -> IResult<&str, (VertexId,VertexId)> {
    all_consuming(delimited(
        space0,
        separated_pair(read_integer, delimited(space0, char(','), space0), read_integer),
        space0,
    ))(s)
}

/**
parses a graph coloring problem, returns (nb_colors, edges).

 - the first line starting with `colors =` gives the number of colors
 - lines starting with `#` are comments
 - every other line containing a comma is an edge
 - remaining lines are ignored
*/
pub fn read_from_str(content:&str) -> Result<(usize, Vec<(VertexId,VertexId)>), InputError> {
    let mut nb_colors:Option<usize> = None;
    let mut edges = Vec::new();
    for (i,raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.starts_with('#') { continue; }
        if read_colors_prefix(line).is_ok() {
            if nb_colors.is_none() {
                let (_,c) = read_colors(line).map_err(|_| InputError::InvalidColors {
                    line: i+1, content: line.to_string()
                })?;
                nb_colors = Some(c);
            }
        } else if line.contains(',') {
            let (_,edge) = read_edge(line).map_err(|_| InputError::InvalidEdge {
                line: i+1, content: line.to_string()
            })?;
            edges.push(edge);
        }
    }
    let nb_colors = nb_colors.ok_or(InputError::MissingColors)?;
    debug!("read graph: {} colors, {} edges", nb_colors, edges.len());
    Ok((nb_colors, edges))
}

/// reads a graph coloring problem from a file, returns (nb_colors, edges)
pub fn read_from_file(filename:&str) -> Result<(usize, Vec<(VertexId,VertexId)>), InputError> {
    let content = fs::read_to_string(filename)
        .map_err(|e| InputError::ReadFile(filename.to_string(), e))?;
    read_from_str(&content)
}
