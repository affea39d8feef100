use crate::types::{Link, Node, Side};

struct Pending<'a, T> {
    node: &'a Node<T>,
    parent: Option<&'a Node<T>>,
    depth: usize,
}

/// Step-by-step in-order cursor that reports each node with its parent.
///
/// Pending nodes sit on an explicit stack together with their recorded
/// parents, so a fully degenerate chain costs heap, not call stack. The
/// cursor also tracks the left/right route from the root to the node it
/// last returned; [`slot_by_route`] turns that route back into the owning
/// slot once the shared borrow is over.
pub struct Walk<'a, T> {
    pending: Vec<Pending<'a, T>>,
    route: Vec<Side>,
    // Route entries belonging to the node last returned.
    current: usize,
    index: usize,
}

impl<'a, T> Walk<'a, T> {
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        let mut walk = Self {
            pending: Vec::new(),
            route: Vec::new(),
            current: 0,
            index: 0,
        };
        if let Some(root) = root {
            walk.descend(root, None, 0, None);
        }
        walk
    }

    fn descend(
        &mut self,
        node: &'a Node<T>,
        mut parent: Option<&'a Node<T>>,
        mut depth: usize,
        mut side: Option<Side>,
    ) {
        let mut curr = Some(node);
        while let Some(node) = curr {
            if let Some(side) = side {
                self.route.truncate(depth - 1);
                self.route.push(side);
            }
            self.pending.push(Pending {
                node,
                parent,
                depth,
            });
            parent = Some(node);
            curr = node.left.as_deref();
            depth += 1;
            side = Some(Side::Left);
        }
    }

    /// Next node in order with its parent, or `None` when exhausted.
    pub fn step(&mut self) -> Option<(Option<&'a Node<T>>, &'a Node<T>)> {
        let Pending {
            node,
            parent,
            depth,
        } = self.pending.pop()?;
        self.route.truncate(depth);
        self.current = depth;
        self.index += 1;
        if let Some(right) = node.right.as_deref() {
            // Writes past `depth` only; pending nodes need those entries.
            self.descend(right, Some(node), depth + 1, Some(Side::Right));
        }
        Some((parent, node))
    }

    /// Route from the root to the node last returned by [`Walk::step`].
    pub fn route(&self) -> &[Side] {
        &self.route[..self.current]
    }

    /// Number of nodes returned so far.
    pub fn visited(&self) -> usize {
        self.index
    }
}

/// In-order walk over the subtree rooted at `root`.
///
/// `visit` receives each node together with its parent (`None` for `root`)
/// and returns `true` to stop the walk. The return value reports whether the
/// walk was stopped early.
pub fn walk_in_order<'a, T, F>(root: Option<&'a Node<T>>, mut visit: F) -> bool
where
    F: FnMut(Option<&'a Node<T>>, &'a Node<T>) -> bool,
{
    let mut walk = Walk::new(root);
    while let Some((parent, node)) = walk.step() {
        if visit(parent, node) {
            return true;
        }
    }
    false
}

/// Route to the first node, in order, for which `pred` holds, together with
/// its in-order position.
pub fn find_route<T, F>(root: Option<&Node<T>>, mut pred: F) -> Option<(usize, Vec<Side>)>
where
    F: FnMut(usize, &T) -> bool,
{
    let mut walk = Walk::new(root);
    while let Some((_, node)) = walk.step() {
        let index = walk.visited() - 1;
        if pred(index, &node.value) {
            return Some((index, walk.route().to_vec()));
        }
    }
    None
}

/// Owning slot reached by following `route` from `root`.
pub fn slot_by_route<'a, T>(root: &'a mut Link<T>, route: &[Side]) -> Option<&'a mut Link<T>> {
    let mut slot = root;
    for side in route {
        let node = slot.as_mut()?;
        slot = match side {
            Side::Left => &mut node.left,
            Side::Right => &mut node.right,
        };
    }
    Some(slot)
}
