use crate::collections::FxHashMap;
use super::node::Node;

use std::{collections::VecDeque, rc::Rc};


/// Unsorted open list of search tree nodes
///
/// Nodes always leave from the top. Inserting at the bottom makes the frontier
/// a FIFO queue, inserting at the top makes it a LIFO stack; which one is up
/// to the caller.
#[derive(Debug, Default)]
pub struct Frontier<'g> {
    fringe: VecDeque<Rc<Node<'g>>>,
    // location name -> number of resident nodes at that location
    names: FxHashMap<&'g str, usize>,
}

impl<'g> Frontier<'g> {

    pub fn new() -> Self {
        Self {
            fringe: VecDeque::new(),
            names: FxHashMap::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fringe.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fringe.len()
    }

    /// Remove and return the node at the top
    pub fn remove_next(&mut self) -> Option<Rc<Node<'g>>> {
        let top = self.fringe.pop_front()?;
        self.forget(top.location().name());
        Some(top)
    }

    pub fn insert_top(&mut self, node: Rc<Node<'g>>) {
        self.remember(node.location().name());
        self.fringe.push_front(node);
    }

    /// Insert each node at the top in turn, the last one ends up on top
    pub fn insert_all_top<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = Rc<Node<'g>>>,
    {
        for node in nodes {
            self.insert_top(node);
        }
    }

    pub fn insert_bottom(&mut self, node: Rc<Node<'g>>) {
        self.remember(node.location().name());
        self.fringe.push_back(node);
    }

    pub fn insert_all_bottom<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = Rc<Node<'g>>>,
    {
        for node in nodes {
            self.insert_bottom(node);
        }
    }

    /// Is there a node at the named location waiting in the frontier
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    fn remember(&mut self, name: &'g str) {
        *self.names.entry(name).or_insert(0) += 1;
    }

    fn forget(&mut self, name: &str) {
        if let Some(count) = self.names.get_mut(name) {
            *count -= 1;
            if *count == 0 {
                self.names.remove(name);
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Location;

    fn names(frontier: &mut Frontier<'_>) -> Vec<String> {
        let mut names = Vec::new();
        while let Some(node) = frontier.remove_next() {
            names.push(node.location().name().to_string());
        }
        names
    }

    #[test]
    fn test_fifo() {
        let locations = [Location::named("A"), Location::named("B"), Location::named("C")];
        let mut frontier = Frontier::new();
        frontier.insert_all_bottom(locations.iter().map(Node::root));

        assert_eq!(frontier.len(), 3);
        assert_eq!(names(&mut frontier), vec!["A", "B", "C"]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_lifo() {
        let locations = [Location::named("A"), Location::named("B"), Location::named("C")];
        let mut frontier = Frontier::new();
        frontier.insert_all_top(locations.iter().map(Node::root));

        assert_eq!(names(&mut frontier), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_remove_from_empty() {
        let mut frontier = Frontier::new();
        assert!(frontier.remove_next().is_none());
    }

    #[test]
    fn test_contains_tracks_duplicates() {
        let a = Location::named("A");
        let b = Location::named("B");
        let mut frontier = Frontier::new();
        frontier.insert_bottom(Node::root(&a));
        frontier.insert_bottom(Node::root(&a));
        frontier.insert_bottom(Node::root(&b));

        assert!(frontier.contains("A"));
        assert!(frontier.contains("B"));
        assert!(!frontier.contains("C"));

        // one copy of A is still waiting
        frontier.remove_next();
        assert!(frontier.contains("A"));

        frontier.remove_next();
        assert!(!frontier.contains("A"));
        assert!(frontier.contains("B"));

        frontier.remove_next();
        assert!(!frontier.contains("B"));
        assert!(frontier.is_empty());
    }
}
