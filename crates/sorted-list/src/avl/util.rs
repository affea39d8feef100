use crate::types::{Link, Node};
use crate::util::assert_ordered;

#[inline]
fn h<T>(link: &Link<T>) -> u32 {
    link.as_ref().map_or(0, |n| n.height)
}

#[inline]
fn update<T>(node: &mut Node<T>) {
    node.height = 1 + h(&node.left).max(h(&node.right));
}

/// Balance factor, `height(left) - height(right)`, from cached heights.
#[inline]
fn bf<T>(node: &Node<T>) -> i32 {
    h(&node.left) as i32 - h(&node.right) as i32
}

fn rotate_right<T>(mut n: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut nl) = n.left.take() else {
        return n;
    };
    n.left = nl.right.take();
    update(&mut n);
    nl.right = Some(n);
    update(&mut nl);
    nl
}

fn rotate_left<T>(mut n: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut nr) = n.right.take() else {
        return n;
    };
    n.right = nr.left.take();
    update(&mut n);
    nr.left = Some(n);
    update(&mut nr);
    nr
}

fn lr_rotate<T>(mut n: Box<Node<T>>) -> Box<Node<T>> {
    if let Some(nl) = n.left.take() {
        n.left = Some(rotate_left(nl));
    }
    rotate_right(n)
}

fn rl_rotate<T>(mut n: Box<Node<T>>) -> Box<Node<T>> {
    if let Some(nr) = n.right.take() {
        n.right = Some(rotate_right(nr));
    }
    rotate_left(n)
}

/// Repairs `n` when its children are AVL trees whose heights differ by at
/// most two. Returns the new local root.
fn restore<T>(mut n: Box<Node<T>>, rotations: &mut usize) -> Box<Node<T>> {
    update(&mut n);
    let balance = bf(&n);
    if balance >= 2 {
        *rotations += 1;
        if n.left.as_deref().map_or(0, bf) >= 0 {
            rotate_right(n)
        } else {
            lr_rotate(n)
        }
    } else if balance <= -2 {
        *rotations += 1;
        if n.right.as_deref().map_or(0, bf) > 0 {
            rl_rotate(n)
        } else {
            rotate_left(n)
        }
    } else {
        n
    }
}

/// Joins `left`, `n`, `right` where `left` is taller by more than two.
///
/// `n` sinks down the right spine of `left` to the first node no more than
/// one level taller than `right`, takes that node as its left subtree, and
/// every spine node is repaired with [`restore`] on the way back up. The
/// recursion depth is bounded by the height of `left`, which is balanced.
fn graft_right<T>(
    mut left: Box<Node<T>>,
    mut n: Box<Node<T>>,
    right: Link<T>,
    rotations: &mut usize,
) -> Box<Node<T>> {
    match left.right.take() {
        Some(spine) if spine.height > h(&right) + 1 => {
            left.right = Some(graft_right(spine, n, right, rotations));
        }
        spine => {
            n.left = spine;
            n.right = right;
            update(&mut n);
            left.right = Some(n);
        }
    }
    restore(left, rotations)
}

/// Mirror of [`graft_right`] for a taller `right`.
fn graft_left<T>(
    left: Link<T>,
    mut n: Box<Node<T>>,
    mut right: Box<Node<T>>,
    rotations: &mut usize,
) -> Box<Node<T>> {
    match right.left.take() {
        Some(spine) if spine.height > h(&left) + 1 => {
            right.left = Some(graft_left(left, n, spine, rotations));
        }
        spine => {
            n.left = left;
            n.right = spine;
            update(&mut n);
            right.left = Some(n);
        }
    }
    restore(right, rotations)
}

/// Balances `node` whose two subtrees are already AVL with fresh heights.
fn balance<T>(mut node: Box<Node<T>>, rotations: &mut usize) -> Box<Node<T>> {
    let (hl, hr) = (h(&node.left), h(&node.right));
    if hl > hr + 2 {
        if let Some(left) = node.left.take() {
            let right = node.right.take();
            return graft_right(left, node, right, rotations);
        }
    } else if hr > hl + 2 {
        if let Some(right) = node.right.take() {
            let left = node.left.take();
            return graft_left(left, node, right, rotations);
        }
    }
    restore(node, rotations)
}

enum Stage {
    Left,
    Right,
}

/// Rebuilds the AVL property over the whole tree.
///
/// Post-order: both subtrees of a node are balanced before the node itself
/// is inspected. A node whose subtrees differ by exactly two levels gets one
/// of the four classic fixes (single right, left-right, right-left, single
/// left); larger gaps, as left behind by sorted insertion, are closed by
/// grafting the node down the taller side. Nodes that already satisfy the
/// property are never moved, so a balanced tree comes back unchanged.
///
/// Returns the new root and the number of rotation fixes applied.
pub fn rebalance<T>(root: Link<T>) -> (Link<T>, usize) {
    let mut rotations = 0;
    let mut stack: Vec<(Box<Node<T>>, Stage)> = Vec::new();
    let mut pending = root;
    loop {
        while let Some(mut node) = pending {
            pending = node.left.take();
            stack.push((node, Stage::Left));
        }
        // Balanced subtree produced for the frame on top of the stack.
        let mut done: Link<T> = None;
        loop {
            let Some((mut node, stage)) = stack.pop() else {
                return (done, rotations);
            };
            match stage {
                Stage::Left => {
                    node.left = done;
                    pending = node.right.take();
                    stack.push((node, Stage::Right));
                    break;
                }
                Stage::Right => {
                    node.right = done;
                    done = Some(balance(node, &mut rotations));
                }
            }
        }
    }
}

/// Levels under `root`, failing on the first node whose subtree heights
/// differ by more than one. Heights are recomputed, cached ones are ignored.
pub fn check_balance<T>(root: Option<&Node<T>>) -> Result<usize, String> {
    let mut stack: Vec<(&Node<T>, bool)> = root.map(|n| (n, false)).into_iter().collect();
    let mut heights: Vec<usize> = Vec::new();
    while let Some((node, expanded)) = stack.pop() {
        if !expanded {
            stack.push((node, true));
            if let Some(r) = node.right.as_deref() {
                stack.push((r, false));
            }
            if let Some(l) = node.left.as_deref() {
                stack.push((l, false));
            }
            continue;
        }
        let rh = match node.right {
            Some(_) => heights.pop().unwrap_or(0),
            None => 0,
        };
        let lh = match node.left {
            Some(_) => heights.pop().unwrap_or(0),
            None => 0,
        };
        let diff = lh as i64 - rh as i64;
        if !(-1..=1).contains(&diff) {
            return Err(format!("AVL balance violated: bf {diff}"));
        }
        heights.push(1 + lh.max(rh));
    }
    Ok(heights.pop().unwrap_or(0))
}

/// Checks ordering, node count and AVL balance.
pub fn assert_avl_tree<T, C>(root: Option<&Node<T>>, len: usize, comparator: &C) -> Result<(), String>
where
    C: Fn(&T, &T) -> i32,
{
    assert_ordered(root, len, comparator)?;
    check_balance(root).map(|_| ())
}
