use crate::collections::FxHashMap;
use crate::errors::SearchError;
use super::node::Node;

use std::{cmp::Ordering, collections::BTreeSet, fmt, ptr, rc::Rc};
use log::debug;


/// Statistic a sorted frontier is ordered by
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortBy {
    Cost, // g(n), partial path cost
    Heuristic, // h(n), estimated remaining cost
    Total, // f(n) = g(n) + h(n)
}

impl SortBy {
    pub fn value(self, node: &Node<'_>) -> f64 {
        match self {
            SortBy::Cost => node.cost(),
            SortBy::Heuristic => node.heuristic(),
            SortBy::Total => node.total_cost(),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortBy::Cost => "g",
            SortBy::Heuristic => "h",
            SortBy::Total => "f",
        };
        f.write_str(name)
    }
}


/// Total order over search tree nodes
///
/// Lower statistic first. Ties between distinct nodes are broken by location
/// name, and nodes sharing a location are ordered by their parents, walking up
/// the tree until the ancestors differ. `Equal` for distinct nodes means both
/// chains met at a common ancestor or at two different roots.
fn compare<'g>(a: &Node<'g>, b: &Node<'g>, by: SortBy) -> Ordering {
    let (mut a, mut b) = (a, b);

    loop {
        match by.value(a).total_cmp(&by.value(b)) {
            Ordering::Equal => {}
            order => return order,
        }

        if ptr::eq(a, b) {
            return Ordering::Equal;
        }

        if a.location() != b.location() {
            return a.location().name().cmp(b.location().name());
        }

        match (a.parent(), b.parent()) {
            (Some(pa), Some(pb)) => {
                a = pa.as_ref();
                b = pb.as_ref();
            }
            (None, None) => return Ordering::Equal,
            // a root is the shorter route to its location
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
        }
    }
}


/// Entry of the ordered set - carries the statistic so `Ord` needs no outside state
#[derive(Debug)]
struct Ranked<'g> {
    node: Rc<Node<'g>>,
    by: SortBy,
}

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(&self.node, &other.node, self.by)
    }
}
impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Ranked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Ranked<'_> {}


/// Priority open list of search tree nodes
/// The node with the lowest statistic is the next to be removed
#[derive(Debug)]
pub struct SortedFrontier<'g> {
    by: SortBy,
    sorted: BTreeSet<Ranked<'g>>,
    // location name -> resident nodes at that location, oldest first
    mapped: FxHashMap<&'g str, Vec<Rc<Node<'g>>>>,
}

impl<'g> SortedFrontier<'g> {

    pub fn new(by: SortBy) -> Self {
        Self {
            by,
            sorted: BTreeSet::new(),
            mapped: FxHashMap::default(),
        }
    }

    pub fn sort_by(&self) -> SortBy {
        self.by
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Remove and return the lowest ordered node
    pub fn remove_next(&mut self) -> Option<Rc<Node<'g>>> {
        let Ranked { node, .. } = self.sorted.pop_first()?;
        self.unmap(&node);
        Some(node)
    }

    /// Add a node in its sorted position
    ///
    /// A node equivalent to one already present (same statistic, same
    /// location, same ancestors up to a shared node) is dropped. Two distinct
    /// root nodes that cannot be told apart are an `AmbiguousOrder` error.
    pub fn insert(&mut self, node: Rc<Node<'g>>) -> Result<(), SearchError> {
        let entry = self.rank(&node);

        if let Some(existing) = self.sorted.get(&entry) {
            if Rc::ptr_eq(&existing.node, &node) {
                return Ok(());
            }
            if ptr::eq(existing.node.tree_root(), node.tree_root()) {
                debug!("dropping equivalent path to {}", node.location());
                return Ok(());
            }
            return Err(SearchError::AmbiguousOrder(node.location().name().to_string()));
        }

        self.sorted.insert(entry);
        self.mapped.entry(node.location().name()).or_default().push(node);
        Ok(())
    }

    pub fn insert_all<I>(&mut self, nodes: I) -> Result<(), SearchError>
    where
        I: IntoIterator<Item = Rc<Node<'g>>>,
    {
        for node in nodes {
            self.insert(node)?;
        }
        Ok(())
    }

    /// Insert a node after removing the resident node for the same location, if any
    pub fn replace(&mut self, node: Rc<Node<'g>>) -> Result<(), SearchError> {
        if let Some(stale) = self.find(node.location().name()).cloned() {
            self.remove(&stale);
        }
        self.insert(node)
    }

    /// Remove this exact node, returns false when it is not in the frontier
    pub fn remove(&mut self, node: &Rc<Node<'g>>) -> bool {
        let entry = self.rank(node);

        match self.sorted.get(&entry) {
            Some(existing) if Rc::ptr_eq(&existing.node, node) => {}
            _ => return false,
        }

        self.sorted.remove(&entry);
        self.unmap(node);
        true
    }

    pub fn remove_all<'a, I>(&mut self, nodes: I)
    where
        'g: 'a,
        I: IntoIterator<Item = &'a Rc<Node<'g>>>,
    {
        for node in nodes {
            self.remove(node);
        }
    }

    /// Is there a node at the named location waiting in the frontier
    pub fn contains(&self, name: &str) -> bool {
        self.mapped.contains_key(name)
    }

    /// Most recently inserted node at the named location
    pub fn find(&self, name: &str) -> Option<&Rc<Node<'g>>> {
        self.mapped.get(name).and_then(|nodes| nodes.last())
    }

    fn rank(&self, node: &Rc<Node<'g>>) -> Ranked<'g> {
        Ranked {
            node: Rc::clone(node),
            by: self.by,
        }
    }

    fn unmap(&mut self, node: &Rc<Node<'g>>) {
        let name = node.location().name();
        if let Some(nodes) = self.mapped.get_mut(name) {
            nodes.retain(|resident| !Rc::ptr_eq(resident, node));
            if nodes.is_empty() {
                self.mapped.remove(name);
            }
        }
    }
}
