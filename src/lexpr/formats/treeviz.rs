//! Treeviz formatter
//!
//! One line per node, nesting drawn with box connectors:
//!
//!     ⧉ 1 item
//!     └─ λ apply
//!       ├─ ƒ -
//!       ├─ ◦ n
//!       └─ # 1
//!
//! The first child of an application is always its head. Applications whose head was
//! picked by the first-element convention are labelled `apply (fallback)`.
//!
//! Icons
//!     Program: ⧉
//!     Application: λ
//!     Identifier: ◦
//!     Number: #
//!     Symbol: ƒ
//!     String: "

use crate::lexpr::ast::{AtomKind, HeadKind, Node, NodeId, Program};
use crate::lexpr::formats::registry::{FormatError, Formatter};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn icon(node: &Node) -> &'static str {
    match node {
        Node::Application(_) => "λ",
        Node::Atom(atom) => match atom.kind {
            AtomKind::Identifier => "◦",
            AtomKind::Number => "#",
            AtomKind::Symbol => "ƒ",
            AtomKind::String => "\"",
        },
    }
}

fn label(node: &Node) -> String {
    match node {
        Node::Application(app) if app.head_kind == HeadKind::Fallback => {
            "apply (fallback)".to_string()
        }
        Node::Application(_) => "apply".to_string(),
        Node::Atom(atom) => truncate(&atom.text, 30),
    }
}

/// Render `program` as a tree, optionally prefixing each node with its `line:column`
pub fn to_treeviz_str(program: &Program, show_positions: bool) -> String {
    let items = program.items();
    let mut output = format!(
        "⧉ {} item{}\n",
        items.len(),
        if items.len() == 1 { "" } else { "s" }
    );

    // (node, prefix, is_last), popped in source order
    let mut stack: Vec<(NodeId, String, bool)> = items
        .iter()
        .enumerate()
        .rev()
        .map(|(i, id)| (*id, String::new(), i == items.len() - 1))
        .collect();

    while let Some((id, prefix, is_last)) = stack.pop() {
        let node = program.node(id);
        let connector = if is_last { "└─" } else { "├─" };
        let position = if show_positions {
            format!("{} ", node.range().start)
        } else {
            String::new()
        };
        output.push_str(&format!(
            "{}{}{} {} {}\n",
            position,
            prefix,
            connector,
            icon(node),
            label(node)
        ));

        if let Node::Application(app) = node {
            let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
            let children: Vec<NodeId> = std::iter::once(app.head)
                .chain(app.args.iter().copied())
                .collect();
            let last = children.len() - 1;
            for (i, child) in children.into_iter().enumerate().rev() {
                stack.push((child, child_prefix.clone(), i == last));
            }
        }
    }

    output
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        Ok(to_treeviz_str(program, false))
    }

    fn description(&self) -> &str {
        "Visual tree with one node per line and Unicode icons"
    }
}
