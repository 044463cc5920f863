use std::collections::BTreeMap;

use bit_set::BitSet;

use crate::color::{Color, VertexId};


/**
Domain store: for each vertex, the colors it can still take.
A BitSet iterates in ascending order, so a domain is the ordered range
`[0, nb_colors)` minus the removed colors. Domains only shrink.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domains {
    /// domains[v]: colors still available for v
    domains: BTreeMap<VertexId, BitSet>,
}

impl Domains {

    /** derives the vertex set from the edge endpoints and gives every vertex
    the full palette `[0, nb_colors)`. */
    pub fn initialize(edges:&[(VertexId,VertexId)], nb_colors:usize) -> Self {
        let full:BitSet = (0..nb_colors).collect();
        let mut domains = BTreeMap::new();
        for (u,v) in edges {
            domains.entry(*u).or_insert_with(|| full.clone());
            domains.entry(*v).or_insert_with(|| full.clone());
        }
        Self { domains }
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.domains.len() }

    /// domain of v
    pub fn get(&self, v:VertexId) -> &BitSet { &self.domains[&v] }

    /// colors of the domain of v, in ascending order
    pub fn colors(&self, v:VertexId) -> Vec<Color> { self.get(v).iter().collect() }

    /// number of colors left for v
    pub fn size(&self, v:VertexId) -> usize { self.get(v).len() }

    /// true iff v has no color left
    pub fn is_empty(&self, v:VertexId) -> bool { self.get(v).is_empty() }

    /// removes c from the domain of v, returns true if it was present
    pub fn remove(&mut self, v:VertexId, c:Color) -> bool {
        match self.domains.get_mut(&v) {
            None => false,
            Some(d) => d.remove(c),
        }
    }
}
