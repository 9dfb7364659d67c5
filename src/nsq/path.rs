//! Declarative walks through nested property elements
//!
//! Some NSQ properties bury their data several anonymous levels deep. A path
//! of [`Step`]s describes the walk so callers never index by position.

use roxmltree::Node;
use std::fmt;

/// One step of a nested walk, applied to every node selected so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The first element child
    First,
    /// Every element child
    Each,
    /// Every element child whose `name` attribute equals the given name
    Named(&'static str),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::First => f.write_str("[0]"),
            Step::Each => f.write_str("[*]"),
            Step::Named(name) => write!(f, "[name={}]", name),
        }
    }
}

/// Recipient user IDs, starting from a task's `Recipients` property:
/// list object, its property container, the inner `Recipients` entries,
/// each recipient object, its property container, then the `ReferenceID` leaves.
pub const RECIPIENT_IDS: &[Step] = &[
    Step::First,
    Step::First,
    Step::Named("Recipients"),
    Step::Each,
    Step::First,
    Step::Named("ReferenceID"),
];

/// Source field name, starting from a field's `SourceField` property
pub const SOURCE_FIELD_NAME: &[Step] = &[Step::First, Step::First, Step::Named("Name")];

/// Element children of a node, skipping text and comments
pub fn elements<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Text content of a leaf element, empty when the element has none
pub fn leaf_text(node: Node<'_, '_>) -> String {
    node.text().unwrap_or_default().to_string()
}

/// Select every node reached by following `path` from `start`, in document order.
///
/// A `First` step must find an element child on every node it is applied to.
/// When one does not, the error holds the path followed up to that step,
/// e.g. `[0][0]`. `Each` and `Named` steps may select nothing.
pub fn select<'a, 'input>(
    start: Node<'a, 'input>,
    path: &[Step],
) -> Result<Vec<Node<'a, 'input>>, String> {
    let mut current = vec![start];
    for (depth, step) in path.iter().enumerate() {
        let mut next = Vec::new();
        for node in current {
            match *step {
                Step::First => match node.first_element_child() {
                    Some(child) => next.push(child),
                    None => return Err(describe(&path[..=depth])),
                },
                Step::Each => next.extend(elements(node)),
                Step::Named(name) => next.extend(
                    elements(node).filter(|child| child.attribute("name") == Some(name)),
                ),
            }
        }
        if next.is_empty() {
            return Ok(next);
        }
        current = next;
    }
    Ok(current)
}

/// Leaf texts of every node reached by following `path` from `start`
pub fn select_texts(start: Node<'_, '_>, path: &[Step]) -> Result<Vec<String>, String> {
    Ok(select(start, path)?.into_iter().map(leaf_text).collect())
}

/// Render a path for diagnostics, e.g. `[0][0][name=Name]`
pub fn describe(path: &[Step]) -> String {
    path.iter().map(ToString::to_string).collect()
}
