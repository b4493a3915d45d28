use crate::graph::{Location, Road, StreetMap};
use super::heuristic::Heuristic;

use std::rc::Rc;


/// Node on a search tree
/// Distinct from a location: the same location can be reached by many nodes
/// along different branches. Parent links are shared and never change after
/// creation, so the parent chain is always a valid path back to the root.
#[derive(Debug)]
pub struct Node<'g> {
    location: &'g Location,
    parent: Option<Rc<Node<'g>>>,
    road: Option<&'g Road>, // road taken from the parent, None for the root
    depth: usize,
    cost: f64, // partial path cost from the root - g(n)
    heuristic: f64, // estimated remaining cost - h(n), zero for uninformed searches
}

impl<'g> Node<'g> {

    /// Root of a new search tree
    pub fn root(location: &'g Location) -> Rc<Self> {
        Rc::new(Self {
            location,
            parent: None,
            road: None,
            depth: 0,
            cost: 0.0,
            heuristic: 0.0,
        })
    }

    pub fn location(&self) -> &'g Location {
        self.location
    }

    pub fn parent(&self) -> Option<&Rc<Node<'g>>> {
        self.parent.as_ref()
    }

    pub fn road(&self) -> Option<&'g Road> {
        self.road
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Partial path cost, g(n)
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Heuristic estimate, h(n)
    pub fn heuristic(&self) -> f64 {
        self.heuristic
    }

    /// Estimated total cost, f(n) = g(n) + h(n)
    pub fn total_cost(&self) -> f64 {
        self.cost + self.heuristic
    }

    /// Generate one child per road leaving this node's location
    /// Each call builds a fresh set of children, nothing is cached on the node
    pub fn expand(self: &Rc<Self>, map: &'g StreetMap, heuristic: Option<&dyn Heuristic>) -> Vec<Rc<Node<'g>>> {
        let mut children = Vec::with_capacity(self.location.roads().len());

        for road in self.location.roads() {
            // recorded roads always resolve, see StreetMap::record_road
            let Some(destination) = map.location_at(road.destination_index()) else {
                continue;
            };

            children.push(Rc::new(Node {
                location: destination,
                parent: Some(Rc::clone(self)),
                road: Some(road),
                depth: self.depth + 1,
                cost: self.cost + road.cost,
                heuristic: heuristic.map_or(0.0, |h| h.estimate(destination)),
            }));
        }

        children
    }

    pub fn is_goal(&self, destination: &str) -> bool {
        self.location.name() == destination
    }

    /// Roads and locations visited from the root to this node
    /// The root itself has no incoming road and is not included
    pub fn path(&self) -> Vec<(&'g Road, &'g Location)> {
        let mut path = Vec::with_capacity(self.depth);
        let mut current = Some(self);

        // Trace back from this node to the root
        while let Some(node) = current {
            if let Some(road) = node.road {
                path.push((road, node.location));
            }
            current = node.parent.as_deref();
        }

        // The path is in reverse order, so reverse it
        path.reverse();
        path
    }

    /// Root of the tree this node belongs to
    pub fn tree_root(&self) -> &Node<'g> {
        let mut current = self;
        while let Some(parent) = current.parent.as_deref() {
            current = parent;
        }
        current
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::graph::Location;

    // A -> B (2), B -> C (2), A -> C (5)
    fn create_test_map() -> StreetMap {
        let mut map = StreetMap::new();
        map.record_location(Location::new("A", Point::new(0.0, 0.0))).unwrap();
        map.record_location(Location::new("B", Point::new(1.0, 0.0))).unwrap();
        map.record_location(Location::new("C", Point::new(2.0, 0.0))).unwrap();
        map.record_road(Road::new("ab", "A", "B", 2.0)).unwrap();
        map.record_road(Road::new("bc", "B", "C", 2.0)).unwrap();
        map.record_road(Road::new("ac", "A", "C", 5.0)).unwrap();
        map
    }

    #[test]
    fn test_root() {
        let map = create_test_map();
        let root = Node::root(map.find_location("A").unwrap());
        assert_eq!(root.depth(), 0);
        assert_eq!(root.cost(), 0.0);
        assert!(root.parent().is_none());
        assert!(root.road().is_none());
        assert!(root.path().is_empty());
        assert!(root.is_goal("A"));
        assert!(!root.is_goal("C"));
    }

    #[test]
    fn test_expand() {
        let map = create_test_map();
        let root = Node::root(map.find_location("A").unwrap());
        let children = root.expand(&map, None);

        assert_eq!(children.len(), 2);
        assert_eq!(children[0].location().name(), "B");
        assert_eq!(children[0].cost(), 2.0);
        assert_eq!(children[1].location().name(), "C");
        assert_eq!(children[1].cost(), 5.0);

        for child in &children {
            assert_eq!(child.depth(), 1);
            assert_eq!(child.heuristic(), 0.0);
            assert!(Rc::ptr_eq(child.parent().unwrap(), &root));
        }
    }

    #[test]
    fn test_expand_with_heuristic() {
        let map = create_test_map();
        let root = Node::root(map.find_location("A").unwrap());
        let heuristic = |location: &Location| location.point().x * 10.0;
        let children = root.expand(&map, Some(&heuristic));

        assert_eq!(children[0].heuristic(), 10.0);
        assert_eq!(children[0].total_cost(), 12.0);
        assert_eq!(children[1].heuristic(), 20.0);
    }

    #[test]
    fn test_expand_twice_builds_equal_but_distinct_children() {
        let map = create_test_map();
        let root = Node::root(map.find_location("A").unwrap());
        let first = root.expand(&map, None);
        let second = root.expand(&map, None);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert!(!Rc::ptr_eq(a, b));
            assert_eq!(a.location(), b.location());
            assert_eq!(a.cost(), b.cost());
            assert_eq!(a.depth(), b.depth());
            assert_eq!(a.road(), b.road());
        }
    }

    #[test]
    fn test_path_reconstruction() {
        let map = create_test_map();
        let root = Node::root(map.find_location("A").unwrap());
        let b = root.expand(&map, None).remove(0);
        let c = b.expand(&map, None).remove(0);

        assert_eq!(c.depth(), 2);
        assert_eq!(c.cost(), 4.0);

        let path: Vec<_> = c.path()
            .into_iter()
            .map(|(road, location)| (road.name.as_str(), location.name()))
            .collect();
        assert_eq!(path, vec![("ab", "B"), ("bc", "C")]);
        assert_eq!(c.tree_root().location().name(), "A");
    }
}
