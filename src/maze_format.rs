use std::fs;

use log::debug;
use nom::IResult;
use nom::character::complete::{char, digit1, space0, space1};
use nom::combinator::{all_consuming, map, opt, recognize};
use nom::multi::separated_list1;
use nom::sequence::{delimited, pair};

use crate::error::InputError;


/** reads a maze cell value (an optionally negative integer of any length).
values are normalized: 0 if every digit is 0 (passable), 1 otherwise (blocked). */
fn read_value(s:&str) -> IResult<&str, i64> {
    map(
        recognize(pair(opt(char('-')), digit1)),
        |t:&str| if t.trim_start_matches('-').bytes().all(|b| b == b'0') { 0 } else { 1 },
    )(s)
}

/// reads a maze row (whitespace-separated integers, normalized to 0/1)
pub fn read_row(s:&str) -> IResult<&str, Vec<i64>> {
    all_consuming(delimited(
        space0,
        separated_list1(space1, read_value),
        space0,
    ))(s)
}

/// parses a maze, one row per non-blank line
pub fn read_from_str(content:&str) -> Result<Vec<Vec<i64>>, InputError> {
    let mut rows = Vec::new();
    for (i,line) in content.lines().enumerate() {
        if line.trim().is_empty() { continue; }
        let (_,row) = read_row(line).map_err(|_| InputError::InvalidRow {
            line: i+1, content: line.to_string()
        })?;
        rows.push(row);
    }
    debug!("read maze: {} rows", rows.len());
    Ok(rows)
}

/// reads a maze from a file
pub fn read_from_file(filename:&str) -> Result<Vec<Vec<i64>>, InputError> {
    let content = fs::read_to_string(filename)
        .map_err(|e| InputError::ReadFile(filename.to_string(), e))?;
    read_from_str(&content)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_row() {
        assert_eq!(read_row("0 1 0").unwrap().1, vec![0,1,0]);
        assert_eq!(read_row("  0\t1   -3 ").unwrap().1, vec![0,1,1]);
        assert_eq!(read_row("0 99999999999999999999999 -00").unwrap().1, vec![0,1,0]);
        assert!(read_row("0 x 1").is_err());
        assert!(read_row("0,1").is_err());
    }

    #[test]
    fn test_read_maze() {
        let rows = read_from_str("0 0 1\r\n\n1 0 0\n").unwrap();
        assert_eq!(rows, vec![vec![0,0,1], vec![1,0,0]]);
    }

    #[test]
    fn test_invalid_row() {
        match read_from_str("0 0\n0 o\n") {
            Err(InputError::InvalidRow { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
