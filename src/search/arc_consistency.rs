use std::collections::VecDeque;

use log::debug;

use crate::color::{Color, Instance, VertexId};
use crate::search::domains::Domains;


/**
Revises the domain of v1 with respect to its neighbor v2.
A color c is removed from D(v1) if every color of D(v2) is equal to c, that is,
if D(v2) = {c} or if D(v2) is empty.

returns true if D(v1) changed.
*/
pub fn revise(domains:&mut Domains, v1:VertexId, v2:VertexId) -> bool {
    let support = domains.get(v2);
    let removed:Vec<Color> = domains.get(v1).iter()
        .filter(|c| support.iter().all(|other| other == *c))
        .collect();
    for c in &removed {
        domains.remove(v1, *c);
    }
    !removed.is_empty()
}

/**
Narrows the domains until a fixpoint is reached (AC-3 style work queue).
 1. the queue initially contains every (vertex, neighbor) pair, vertices in ascending order
 2. pop a pair (v1,v2) and revise D(v1) against D(v2)
 3. if D(v1) changed: fail if it is empty, otherwise re-queue every (w,v1) with w a neighbor of v1 other than v2
 4. repeat until the queue is empty

returns false as soon as a domain becomes empty (the domains are left as they are at that point).
A new call after a failure may empty more domains: revising against an empty
domain removes every color.
*/
pub fn enforce_arc_consistency(inst:&Instance, domains:&mut Domains) -> bool {
    let mut queue:VecDeque<(VertexId,VertexId)> = VecDeque::with_capacity(2*inst.nb_edges());
    for v in inst.vertices() {
        for w in inst.neighbors(v) {
            queue.push_back((v,*w));
        }
    }
    let mut nb_revisions:usize = 0;
    while let Some((v1,v2)) = queue.pop_front() {
        nb_revisions += 1;
        if revise(domains, v1, v2) {
            if domains.is_empty(v1) {
                debug!("arc consistency: domain of {} wiped out (revised against {})", v1, v2);
                return false;
            }
            for w in inst.neighbors(v1) {
                if *w != v2 { queue.push_back((*w, v1)); }
            }
        }
    }
    debug!("arc consistency: fixpoint reached after {} revisions", nb_revisions);
    true
}


#[cfg(test)]
mod tests {
    use super::*;

    fn path_instance() -> Instance {
        Instance::new(2, vec![(0,1), (1,2)])
    }

    #[test]
    fn test_revise_singleton() {
        let inst = path_instance();
        let mut domains = Domains::initialize(inst.edges(), 3);
        domains.remove(1, 0);
        domains.remove(1, 2);
        assert!(revise(&mut domains, 0, 1));
        assert_eq!(domains.colors(0), vec![0,2]);
        // nothing more to remove
        assert!(!revise(&mut domains, 0, 1));
    }

    #[test]
    fn test_revise_keeps_supported_colors() {
        let inst = path_instance();
        let mut domains = Domains::initialize(inst.edges(), 3);
        domains.remove(1, 0);
        assert!(!revise(&mut domains, 0, 1));
        assert_eq!(domains.colors(0), vec![0,1,2]);
    }

    #[test]
    fn test_revise_against_empty_domain() {
        let inst = path_instance();
        let mut domains = Domains::initialize(inst.edges(), 2);
        domains.remove(1, 0);
        domains.remove(1, 1);
        assert!(revise(&mut domains, 0, 1));
        assert!(domains.is_empty(0));
    }

    #[test]
    fn test_full_domains_unchanged() {
        let inst = Instance::new(3, vec![(0,1), (1,2), (0,2)]);
        let mut domains = Domains::initialize(inst.edges(), inst.nb_colors());
        let before = domains.clone();
        assert!(enforce_arc_consistency(&inst, &mut domains));
        assert_eq!(domains, before);
    }

    #[test]
    fn test_propagation_along_path() {
        let inst = path_instance();
        let mut domains = Domains::initialize(inst.edges(), inst.nb_colors());
        domains.remove(0, 1);
        assert!(enforce_arc_consistency(&inst, &mut domains));
        assert_eq!(domains.colors(0), vec![0]);
        assert_eq!(domains.colors(1), vec![1]);
        assert_eq!(domains.colors(2), vec![0]);
    }

    #[test]
    fn test_idempotent() {
        let inst = Instance::new(3, vec![(0,1), (1,2), (2,3), (3,0), (1,3)]);
        let mut domains = Domains::initialize(inst.edges(), inst.nb_colors());
        domains.remove(0, 1);
        domains.remove(0, 2);
        assert!(enforce_arc_consistency(&inst, &mut domains));
        let once = domains.clone();
        assert!(enforce_arc_consistency(&inst, &mut domains));
        assert_eq!(domains, once);
    }

    #[test]
    fn test_single_edge_one_color_fails() {
        let inst = Instance::from_file("insts/graphs/single_edge_1.txt").unwrap();
        let mut domains = Domains::initialize(inst.edges(), inst.nb_colors());
        assert!(!enforce_arc_consistency(&inst, &mut domains));
        assert!(domains.is_empty(0));
    }

    #[test]
    fn test_second_call_after_failure() {
        let inst = Instance::new(1, vec![(0,1)]);
        let mut domains = Domains::initialize(inst.edges(), inst.nb_colors());
        assert!(!enforce_arc_consistency(&inst, &mut domains));
        assert!(domains.is_empty(0));
        assert_eq!(domains.colors(1), vec![0]);
        // D(1) is now revised against the empty D(0)
        assert!(!enforce_arc_consistency(&inst, &mut domains));
        assert!(domains.is_empty(1));
    }
}
