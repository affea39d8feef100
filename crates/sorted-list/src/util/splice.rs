use crate::types::Link;

/// Unlinks the node held by `slot` and returns its value.
///
/// - no left child: the right child takes the node's place
/// - no right child: the left child takes the node's place
/// - two children: the in-order successor (leftmost node of the right
///   subtree) is spliced out of its own position and its value is moved into
///   this node, which stays linked where it is
///
/// The node physically unlinked therefore never has two children. Returns
/// `None` for an empty slot.
pub fn splice<T>(slot: &mut Link<T>) -> Option<T> {
    let node = slot.as_mut()?;
    if node.left.is_some() && node.right.is_some() {
        let successor = take_leftmost(&mut node.right)?;
        return Some(std::mem::replace(&mut node.value, successor));
    }
    let child = match node.left.take() {
        Some(left) => Some(left),
        None => node.right.take(),
    };
    let node = std::mem::replace(slot, child)?;
    Some(node.value)
}

/// Splices out the leftmost node under `slot`. It has no left child, so this
/// always hits a single-child case of [`splice`].
fn take_leftmost<T>(slot: &mut Link<T>) -> Option<T> {
    let mut slot = slot;
    while slot.as_ref()?.left.is_some() {
        slot = &mut slot.as_mut()?.left;
    }
    splice(slot)
}
