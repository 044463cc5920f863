use std::collections::{BTreeMap, BTreeSet};

use bit_set::BitSet;
use log::warn;

use crate::error::InputError;
use crate::graph_format::read_from_file;

/** Vertex Id */
pub type VertexId = usize;

/** Color (an integer in `[0, nb_colors)`) */
pub type Color = usize;

/** Assignment of a graph coloring problem (vertex -> color).
Partial during the search, complete at the solution.
*/
pub type Assignment = BTreeMap<VertexId, Color>;

/** adj_list[v]: vertices sharing an edge with v (iterated in ascending order) */
pub type AdjacencyList = BTreeMap<VertexId, BTreeSet<VertexId>>;

/** models a Graph Coloring instance (a palette size and an edge list) */
#[derive(Debug, Clone)]
pub struct Instance {
    /// number of colors available
    nb_colors: usize,
    /// edges of the graph (as read)
    edges: Vec<(VertexId,VertexId)>,
    /// adjacency list, built once
    adj_list: AdjacencyList,
}


impl Instance {

    /** constructor using a palette size and an edge list.
    The vertex set is derived from the edge endpoints. */
    pub fn new(nb_colors:usize, edges:Vec<(VertexId,VertexId)>) -> Self {
        let adj_list = build_adjacency(&edges);
        for (u,v) in &edges {
            if u == v { warn!("self loop on vertex {}: the instance has no solution", u); }
        }
        Self { nb_colors, edges, adj_list }
    }

    /// creates an instance from a `colors = N` / `u,v` file
    pub fn from_file(filename:&str) -> Result<Self, InputError> {
        let (nb_colors, edges) = read_from_file(filename)?;
        Ok(Self::new(nb_colors, edges))
    }

    /// number of colors
    pub fn nb_colors(&self) -> usize { self.nb_colors }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.adj_list.len() }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.edges.len() }

    /// edge list
    pub fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }

    /// vertices, in ascending order
    pub fn vertices(&self) -> impl Iterator<Item=VertexId> + '_ {
        self.adj_list.keys().copied()
    }

    /// true iff v is an endpoint of some edge
    pub fn contains(&self, v:VertexId) -> bool { self.adj_list.contains_key(&v) }

    /// vertices adjacent to u (u must be a vertex of the instance)
    pub fn neighbors(&self, u:VertexId) -> &BTreeSet<VertexId> { &self.adj_list[&u] }

    /// degree of u
    pub fn degree(&self, u:VertexId) -> usize { self.neighbors(u).len() }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        println!("\t{} \t colors", self.nb_colors());
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        let degrees:Vec<usize> = self.vertices().map(|v| self.degree(v)).collect();
        if let (Some(min), Some(max)) = (degrees.iter().min(), degrees.iter().max()) {
            println!("\t{} \t min degree", min);
            println!("\t{} \t max degree", max);
        }
    }
}

/** builds the adjacency list: each endpoint of an edge is registered as a
neighbor of the other one. */
pub fn build_adjacency(edges:&[(VertexId,VertexId)]) -> AdjacencyList {
    let mut res = AdjacencyList::new();
    for (u,v) in edges {
        res.entry(*u).or_default().insert(*v);
        res.entry(*v).or_default().insert(*u);
    }
    res
}

/** result of the solution checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// feasible, uses the given number of distinct colors
    Ok(usize),
    /// a vertex of the instance is not assigned
    MissingVertex(VertexId),
    /// the assignment contains a vertex that is not in the instance
    UnknownVertex(VertexId),
    /// a vertex is assigned a color outside of the palette
    ColorOutOfRange(VertexId, Color),
    /// both endpoints of an edge share the same color
    Conflict(VertexId, VertexId),
}

/**
checks that the assignment is a complete and proper coloring.
returns the number of distinct colors used if it is the case.
*/
pub fn checker(inst:&Instance, assignment:&Assignment) -> CheckerResult {
    // check that all vertices are assigned
    if let Some(v) = inst.vertices().find(|v| !assignment.contains_key(v)) {
        return CheckerResult::MissingVertex(v);
    }
    for (v,c) in assignment {
        if !inst.contains(*v) { return CheckerResult::UnknownVertex(*v); }
        if *c >= inst.nb_colors() { return CheckerResult::ColorOutOfRange(*v, *c); }
    }
    // check conflicts
    for (u,v) in inst.edges() {
        if assignment[u] == assignment[v] { return CheckerResult::Conflict(*u, *v); }
    }
    // if ok: return the number of colors
    let used:BitSet = assignment.values().copied().collect();
    CheckerResult::Ok(used.len())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_instance() {
        let inst = Instance::from_file("insts/graphs/triangle_3.txt").unwrap();
        assert_eq!(inst.nb_colors(), 3);
        assert_eq!(inst.nb_vertices(), 3);
        assert_eq!(inst.nb_edges(), 3);
        assert_eq!(inst.neighbors(0).iter().copied().collect::<Vec<_>>(), vec![1,2]);
    }

    #[test]
    fn test_build_adjacency() {
        let adj = build_adjacency(&[(4,2), (2,7), (7,4), (4,2)]);
        assert_eq!(adj.keys().copied().collect::<Vec<_>>(), vec![2,4,7]);
        assert_eq!(adj[&4].iter().copied().collect::<Vec<_>>(), vec![2,7]);
        assert_eq!(adj[&2].len(), 2);
    }

    #[test]
    fn test_vertices_from_endpoints() {
        let inst = Instance::new(2, vec![(10,3), (3,5)]);
        assert_eq!(inst.vertices().collect::<Vec<_>>(), vec![3,5,10]);
        assert_eq!(inst.degree(3), 2);
        assert_eq!(inst.neighbors(10).iter().copied().collect::<Vec<_>>(), vec![3]);
        assert!(!inst.contains(42));
    }

    #[test]
    fn test_checker() {
        let inst = Instance::new(3, vec![(0,1), (1,2), (0,2)]);
        let ok:Assignment = vec![(0,0), (1,1), (2,2)].into_iter().collect();
        assert_eq!(checker(&inst, &ok), CheckerResult::Ok(3));
        let conflict:Assignment = vec![(0,0), (1,1), (2,1)].into_iter().collect();
        assert_eq!(checker(&inst, &conflict), CheckerResult::Conflict(1,2));
        let missing:Assignment = vec![(0,0), (2,1)].into_iter().collect();
        assert_eq!(checker(&inst, &missing), CheckerResult::MissingVertex(1));
        let out_of_range:Assignment = vec![(0,0), (1,1), (2,3)].into_iter().collect();
        assert_eq!(checker(&inst, &out_of_range), CheckerResult::ColorOutOfRange(2,3));
        let unknown:Assignment = vec![(0,0), (1,1), (2,2), (5,0)].into_iter().collect();
        assert_eq!(checker(&inst, &unknown), CheckerResult::UnknownVertex(5));
    }
}
