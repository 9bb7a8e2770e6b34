//! Canonical s-expression printer
//!
//! `Atom` prints as its literal text, strings quoted and escaped again. `Application` prints
//! as `(` head, then each argument preceded by one space, then `)`. Output depends only on
//! the AST.
//!
//! A top-level item that is a bare compound identifier (`hello world`) is a call with no
//! arguments and prints as `(hello-world)`. A single word stays bare, and compound
//! identifiers in argument position stay bare too.
//!
//! The printer walks the arena with an explicit work stack, so arbitrarily deep chains
//! print without recursion.

use crate::lexpr::ast::{Ast, Atom, AtomKind, Node, NodeId, Program};
use crate::lexpr::formats::registry::{FormatError, Formatter};
use crate::lexpr::token::escape;

enum Work {
    Node(NodeId),
    Text(&'static str),
}

fn write_atom(atom: &Atom, out: &mut String) {
    match atom.kind {
        AtomKind::String => {
            out.push('"');
            out.push_str(&escape(&atom.text));
            out.push('"');
        }
        _ => out.push_str(&atom.text),
    }
}

fn write_node(ast: &Ast, root: NodeId, out: &mut String) {
    let mut stack = vec![Work::Node(root)];
    while let Some(work) = stack.pop() {
        match work {
            Work::Text(text) => out.push_str(text),
            Work::Node(id) => match ast.get(id) {
                Node::Atom(atom) => write_atom(atom, out),
                Node::Application(app) => {
                    out.push('(');
                    stack.push(Work::Text(")"));
                    for arg in app.args.iter().rev() {
                        stack.push(Work::Node(*arg));
                        stack.push(Work::Text(" "));
                    }
                    stack.push(Work::Node(app.head));
                }
            },
        }
    }
}

/// Print one node
pub fn print_node(ast: &Ast, id: NodeId) -> String {
    let mut out = String::new();
    write_node(ast, id, &mut out);
    out
}

/// Print one top-level item
pub fn print_item(ast: &Ast, id: NodeId) -> String {
    match ast.get(id) {
        Node::Atom(atom) if atom.is_compound() => format!("({})", atom.text),
        _ => print_node(ast, id),
    }
}

/// Print a whole program, one item per line
pub fn print_program(program: &Program) -> String {
    program
        .items()
        .iter()
        .map(|id| print_item(program.ast(), *id))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formatter implementation for the canonical s-expression output
pub struct SexprFormatter;

impl Formatter for SexprFormatter {
    fn name(&self) -> &str {
        "sexpr"
    }

    fn serialize(&self, program: &Program) -> Result<String, FormatError> {
        Ok(print_program(program))
    }

    fn description(&self) -> &str {
        "Canonical prefix s-expressions, one item per line"
    }
}
