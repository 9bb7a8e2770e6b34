//! AST nodes stored in an arena
//!
//! Nodes live in a flat [`Ast`] arena and refer to each other by [`NodeId`]. The tree is
//! built bottom-up: a node can only reference ids that already exist, so every child has
//! a smaller id than its parent. Nodes are never mutated after they are pushed.
//!
//! Chaining operators build new applications out of the parts of old ones, which leaves
//! the old application unreferenced. [`Program::new`] compacts the arena down to the nodes
//! reachable from the program items.

use crate::lexpr::ast::Range;
use serde::Serialize;

/// Index of a node inside an [`Ast`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AtomKind {
    Identifier,
    Number,
    Symbol,
    String,
}

/// A leaf value
///
/// Identifiers hold the hyphen-joined merged form. Strings hold their unescaped contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Atom {
    pub kind: AtomKind,
    pub text: String,
    pub range: Range,
}

impl Atom {
    pub fn new(kind: AtomKind, text: impl Into<String>, range: Range) -> Self {
        Self {
            kind,
            text: text.into(),
            range,
        }
    }

    /// An identifier merged from two or more words
    pub fn is_compound(&self) -> bool {
        self.kind == AtomKind::Identifier && self.text.contains('-')
    }
}

/// How an application's head was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadKind {
    /// The head is a real identifier or operator
    Genuine,
    /// No identifier-class token was present; the first element became the head
    Fallback,
}

/// A head applied to a non-empty, ordered argument list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Application {
    pub head: NodeId,
    pub args: Vec<NodeId>,
    pub head_kind: HeadKind,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    Atom(Atom),
    Application(Application),
}

impl Node {
    pub fn range(&self) -> &Range {
        match self {
            Node::Atom(atom) => &atom.range,
            Node::Application(app) => &app.range,
        }
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Node::Atom(atom) => Some(atom),
            Node::Application(_) => None,
        }
    }

    pub fn as_application(&self) -> Option<&Application> {
        match self {
            Node::Application(app) => Some(app),
            Node::Atom(_) => None,
        }
    }
}

/// Arena of nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ast {
    nodes: Vec<Node>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn atom(&mut self, atom: Atom) -> NodeId {
        self.push(Node::Atom(atom))
    }

    /// Apply `head` to `args`
    ///
    /// With no arguments the head itself is returned: an application is never empty.
    pub fn apply(&mut self, head: NodeId, args: Vec<NodeId>, head_kind: HeadKind) -> NodeId {
        if args.is_empty() {
            return head;
        }
        let range = args
            .iter()
            .fold(self.get(head).range().clone(), |acc, arg| {
                acc.join(self.get(*arg).range())
            });
        self.push(Node::Application(Application {
            head,
            args,
            head_kind,
            range,
        }))
    }

    /// Copy the nodes reachable from `roots` into a fresh arena, keeping child-before-parent order
    fn compact(&self, roots: &[NodeId]) -> (Ast, Vec<NodeId>) {
        let mut reachable = vec![false; self.nodes.len()];
        let mut stack: Vec<NodeId> = roots.to_vec();
        while let Some(id) = stack.pop() {
            if reachable[id.index()] {
                continue;
            }
            reachable[id.index()] = true;
            if let Node::Application(app) = self.get(id) {
                stack.push(app.head);
                stack.extend(app.args.iter().copied());
            }
        }

        // Children always precede parents, so their new ids are known by the time we need them.
        let mut remap = vec![NodeId(0); self.nodes.len()];
        let mut out = Ast::new();
        for (id, node) in self.iter() {
            if !reachable[id.index()] {
                continue;
            }
            let copied = match node {
                Node::Atom(atom) => Node::Atom(atom.clone()),
                Node::Application(app) => Node::Application(Application {
                    head: remap[app.head.index()],
                    args: app.args.iter().map(|arg| remap[arg.index()]).collect(),
                    head_kind: app.head_kind,
                    range: app.range.clone(),
                }),
            };
            remap[id.index()] = out.push(copied);
        }

        let roots = roots.iter().map(|root| remap[root.index()]).collect();
        (out, roots)
    }
}

/// The translation result: an ordered list of top-level expressions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Program {
    ast: Ast,
    items: Vec<NodeId>,
}

impl Program {
    /// Build a program from an arena and its top-level items, dropping unreachable nodes
    pub fn new(ast: Ast, items: Vec<NodeId>) -> Self {
        let (ast, items) = ast.compact(&items);
        Self { ast, items }
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn items(&self) -> &[NodeId] {
        &self.items
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.ast.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
