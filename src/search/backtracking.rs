use std::cmp::Reverse;
use std::rc::Rc;

use log::{debug, info};

use crate::color::{Assignment, Color, Instance, VertexId};
use crate::search::arc_consistency::enforce_arc_consistency;
use crate::search::domains::Domains;


/**
Graph coloring as a constraint satisfaction problem.
Solved by a one-time arc consistency pass, followed by a depth-first backtracking
search with forward checking:
    1. choose the unassigned vertex with the fewest colors left (break ties by the largest degree, then the smallest id)
    2. try its colors in domain order, skipping the ones used by an assigned neighbor
    3. assign the color and remove it from the domains of the unassigned neighbors
    4. recurse on a copy of the assignment, restore the domains if the branch fails
*/
#[derive(Debug)]
pub struct GraphColoringCsp {
    /// instance
    inst: Rc<Instance>,
    /// domains[v]: colors still available for vertex v
    domains: Domains,
    /// number of search nodes explored
    nb_nodes: usize,
}

impl GraphColoringCsp {

    /** creates the problem, every vertex starts with the full palette */
    pub fn new(inst:Rc<Instance>) -> Self {
        let domains = Domains::initialize(inst.edges(), inst.nb_colors());
        Self { inst, domains, nb_nodes: 0 }
    }

    /// current domains
    pub fn domains(&self) -> &Domains { &self.domains }

    /// number of search nodes explored so far
    pub fn nb_nodes(&self) -> usize { self.nb_nodes }

    /// narrows the domains by arc consistency. returns false if a domain became empty.
    pub fn enforce_arc_consistency(&mut self) -> bool {
        enforce_arc_consistency(&self.inst, &mut self.domains)
    }

    /// Minimum Remaining Values: unassigned vertex with the smallest domain,
    /// ties broken by the largest degree, then by the smallest id.
    pub fn select_unassigned_vertex(&self, assignment:&Assignment) -> Option<VertexId> {
        self.inst.vertices()
            .filter(|v| !assignment.contains_key(v))
            .min_by_key(|v| (self.domains.size(*v), Reverse(self.inst.degree(*v))))
    }

    /// colors to try for v (the domain, in ascending order)
    pub fn order_domain_values(&self, v:VertexId) -> Vec<Color> {
        self.domains.colors(v)
    }

    /// true iff no assigned neighbor of v already uses c
    pub fn is_consistent(&self, v:VertexId, c:Color, assignment:&Assignment) -> bool {
        for w in self.inst.neighbors(v) {
            if *w == v { return false; } // self loop
            if assignment.get(w) == Some(&c) { return false; }
        }
        true
    }

    /// forward checking: removes c from the domains of the unassigned neighbors of v,
    /// then records v := c
    pub fn assign(&mut self, v:VertexId, c:Color, assignment:&mut Assignment) {
        for w in self.inst.neighbors(v) {
            if !assignment.contains_key(w) {
                self.domains.remove(*w, c);
            }
        }
        assignment.insert(v, c);
    }

    /**
    depth-first search from a partial assignment.
    each branch works on its own copy of the assignment; the domains are saved
    before the forward checking and restored when the branch fails.
    returns a complete assignment, or None if none extends this one.
    */
    pub fn backtrack(&mut self, assignment:&Assignment) -> Option<Assignment> {
        self.nb_nodes += 1;
        if assignment.len() == self.inst.nb_vertices() {
            return Some(assignment.clone());
        }
        let v = self.select_unassigned_vertex(assignment)?;
        for c in self.order_domain_values(v) {
            if !self.is_consistent(v, c, assignment) { continue; }
            let mut branch = assignment.clone();
            let save_point = self.domains.clone();
            self.assign(v, c, &mut branch);
            if let Some(res) = self.backtrack(&branch) {
                return Some(res);
            }
            self.domains = save_point;
        }
        None
    }

    /// runs arc consistency once, then the backtracking from an empty assignment
    pub fn solve(&mut self) -> Option<Assignment> {
        if !self.enforce_arc_consistency() {
            debug!("arc consistency found an empty domain, running the search anyway");
        }
        let res = self.backtrack(&Assignment::new());
        match &res {
            None => info!("no solution ({} nodes explored)", self.nb_nodes),
            Some(_) => info!("solution found ({} nodes explored)", self.nb_nodes),
        }
        res
    }
}
