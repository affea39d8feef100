//! Tree dumps for debugging.

use std::fmt::Display;

use crate::types::Node;

/// Renders the subtree under `root` one node per line, children indented
/// under their parent and marked `←` (left) or `→` (right).
///
/// ```text
/// SortedList
/// └─ 5
///   ← 3
///   → 8
/// ```
///
/// Every line after the first is prefixed with `tab`.
pub fn print_tree<T: Display>(name: &str, root: Option<&Node<T>>, tab: &str) -> String {
    let Some(root) = root else {
        return format!("{name} ∅");
    };
    let mut out = name.to_string();
    let mut stack: Vec<(&Node<T>, String, &str)> = vec![(root, tab.to_string(), "└─")];
    while let Some((node, indent, side)) = stack.pop() {
        out.push('\n');
        out.push_str(&indent);
        out.push_str(side);
        out.push(' ');
        out.push_str(&node.value.to_string());
        let child_indent = format!("{indent}  ");
        if let Some(r) = node.right.as_deref() {
            stack.push((r, child_indent.clone(), "→"));
        }
        if let Some(l) = node.left.as_deref() {
            stack.push((l, child_indent, "←"));
        }
    }
    out
}
