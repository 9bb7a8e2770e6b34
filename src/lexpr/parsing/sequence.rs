//! Sequence builder
//!
//!     An atomic run is a maximal stretch of tokens with no Dot, Colon or Comma at its top
//!     level. Parenthesized groups inside a run have already been resolved to a single node
//!     and count as one opaque element. This module turns a run into one node.
//!
//! Head Selection
//!
//!     A single element is returned as is: a token becomes a bare atom and a group passes
//!     through unchanged. For longer runs the head is picked by what the run contains:
//!
//!         1. Symbolic identifiers win. `n - 1` is `(- n 1)`. Two symbols are ambiguous.
//!         2. Otherwise a (merged) identifier is the head, wherever it sits:
//!            `123 f` is `(f 123)`. The one exception is a trailing name after a leading
//!            group, `(f) x y`: when nothing but a colon could still extend the name, the
//!            group is the callee and the name is its argument, giving `(f x-y)`. Followed
//!            by a colon the name stays the head, so `(x) greater than: y` is
//!            `(greater-than x y)`.
//!         3. Several identifiers separated by other elements are ambiguous, unless mixfix
//!            heads are on: then `if (c) then 1 else 2` reads as `(if-then-else c 1 2)`.
//!         4. With no identifier-class element at all the first element becomes the head by
//!            convention. This is a fallback head and is recorded as such, because colon
//!            chaining splices fallback applications flat into the enclosing call.
//!
//!     Every element that is not the head becomes an argument, in source order.

use crate::lexpr::ast::{Ast, Atom, AtomKind, HeadKind, NodeId, Range};
use crate::lexpr::error::{TranslateError, TranslateResult};
use crate::lexpr::token::{Token, TokenKind};

/// One element of an atomic run
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Atom(Atom),
    /// An already-resolved parenthesized group
    Group(NodeId),
}

impl Element {
    /// Convert a literal or identifier token; delimiters have no element form
    pub fn from_token(token: Token) -> Option<Element> {
        let kind = match token.kind {
            TokenKind::Identifier => AtomKind::Identifier,
            TokenKind::Number => AtomKind::Number,
            TokenKind::SymbolicIdentifier => AtomKind::Symbol,
            TokenKind::StringLiteral => AtomKind::String,
            _ => return None,
        };
        Some(Element::Atom(Atom::new(kind, token.text, token.range)))
    }

    fn atom_kind(&self) -> Option<AtomKind> {
        match self {
            Element::Atom(atom) => Some(atom.kind),
            Element::Group(_) => None,
        }
    }

    fn is_group(&self) -> bool {
        matches!(self, Element::Group(_))
    }

    fn text(&self) -> &str {
        match self {
            Element::Atom(atom) => &atom.text,
            Element::Group(_) => "(...)",
        }
    }

    fn into_node(self, ast: &mut Ast) -> NodeId {
        match self {
            Element::Atom(atom) => ast.atom(atom),
            Element::Group(id) => id,
        }
    }
}

enum HeadChoice {
    Element(usize, HeadKind),
    Mixfix(Vec<usize>),
}

/// Builds one node out of an atomic run
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceBuilder {
    mixfix_heads: bool,
}

impl SequenceBuilder {
    pub fn new(mixfix_heads: bool) -> Self {
        Self { mixfix_heads }
    }

    /// Resolve `run` to a node; `None` for an empty run
    ///
    /// `followed_by_colon` tells whether the run is the left operand of a Colon, which
    /// keeps a trailing name as the head.
    pub fn build(
        &self,
        ast: &mut Ast,
        mut run: Vec<Element>,
        followed_by_colon: bool,
    ) -> TranslateResult<Option<NodeId>> {
        if run.len() <= 1 {
            return Ok(run.pop().map(|element| element.into_node(ast)));
        }

        match self.choose_head(&run, followed_by_colon)? {
            HeadChoice::Element(index, head_kind) => {
                let head = run.remove(index);
                tracing::trace!(head = head.text(), ?head_kind, args = run.len(), "selected head");
                let head = head.into_node(ast);
                let args = run.into_iter().map(|e| e.into_node(ast)).collect();
                Ok(Some(ast.apply(head, args, head_kind)))
            }
            HeadChoice::Mixfix(indices) => {
                let mut words: Vec<Atom> = Vec::with_capacity(indices.len());
                let mut args = Vec::with_capacity(run.len() - indices.len());
                for (i, element) in run.into_iter().enumerate() {
                    match element {
                        Element::Atom(atom) if indices.contains(&i) => words.push(atom),
                        other => args.push(other),
                    }
                }
                let head = mixfix_head(words);
                tracing::trace!(head = %head.text, args = args.len(), "joined mixfix head");
                let head = ast.atom(head);
                let args = args.into_iter().map(|e| e.into_node(ast)).collect();
                Ok(Some(ast.apply(head, args, HeadKind::Genuine)))
            }
        }
    }

    fn choose_head(&self, run: &[Element], followed_by_colon: bool) -> TranslateResult<HeadChoice> {
        let positions = |kind: AtomKind| -> Vec<usize> {
            run.iter()
                .enumerate()
                .filter(|(_, e)| e.atom_kind() == Some(kind))
                .map(|(i, _)| i)
                .collect()
        };
        let symbols = positions(AtomKind::Symbol);
        let words = positions(AtomKind::Identifier);

        match (symbols.as_slice(), words.as_slice()) {
            ([first, second, ..], _) => Err(ambiguous(run, *first, *second)),
            ([symbol], _) => Ok(HeadChoice::Element(*symbol, HeadKind::Genuine)),
            ([], []) => Ok(HeadChoice::Element(0, HeadKind::Fallback)),
            ([], [word]) => {
                let trailing_name = *word == run.len() - 1 && run[0].is_group();
                if trailing_name && !followed_by_colon {
                    Ok(HeadChoice::Element(0, HeadKind::Fallback))
                } else {
                    Ok(HeadChoice::Element(*word, HeadKind::Genuine))
                }
            }
            ([], [first, second, ..]) => {
                if self.mixfix_heads {
                    Ok(HeadChoice::Mixfix(words.clone()))
                } else {
                    Err(ambiguous(run, *first, *second))
                }
            }
        }
    }
}

fn ambiguous(run: &[Element], first: usize, second: usize) -> TranslateError {
    let position = match &run[second] {
        Element::Atom(atom) => atom.range.start,
        Element::Group(_) => Default::default(),
    };
    TranslateError::AmbiguousHead {
        first: run[first].text().to_string(),
        second: run[second].text().to_string(),
        position,
    }
}

fn mixfix_head(words: Vec<Atom>) -> Atom {
    let mut text = String::new();
    let mut range: Option<Range> = None;
    for word in words {
        if !text.is_empty() {
            text.push('-');
        }
        text.push_str(&word.text);
        range = Some(match range {
            Some(acc) => acc.join(&word.range),
            None => word.range,
        });
    }
    Atom::new(AtomKind::Identifier, text, range.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexpr::ast::{Node, Position};
    use crate::lexpr::formats::sexpr::print_node;
    use crate::lexpr::lexing::lex;

    fn run_of(source: &str) -> Vec<Element> {
        lex(source)
            .unwrap()
            .into_iter()
            .filter_map(Element::from_token)
            .collect()
    }

    fn build(source: &str) -> String {
        build_with(SequenceBuilder::new(false), source, false).unwrap()
    }

    fn build_with(
        builder: SequenceBuilder,
        source: &str,
        followed_by_colon: bool,
    ) -> TranslateResult<String> {
        let mut ast = Ast::new();
        let node = builder
            .build(&mut ast, run_of(source), followed_by_colon)?
            .unwrap();
        Ok(print_node(&ast, node))
    }

    fn group(ast: &mut Ast, name: &str) -> Element {
        Element::Group(ast.atom(crate::lexpr::testing::factories::mk_ident(name)))
    }

    #[test]
    fn test_single_token_is_bare() {
        assert_eq!(build("x"), "x");
        assert_eq!(build("42"), "42");
        assert_eq!(build("hello world"), "hello-world");
    }

    #[test]
    fn test_empty_run() {
        let mut ast = Ast::new();
        assert_eq!(SequenceBuilder::default().build(&mut ast, vec![], false), Ok(None));
    }

    #[test]
    fn test_identifier_head_anywhere() {
        assert_eq!(build("f 123"), "(f 123)");
        assert_eq!(build("123 f"), "(f 123)");
        assert_eq!(build("2 plus 3"), "(plus 2 3)");
        assert_eq!(build("plus 2 3"), "(plus 2 3)");
    }

    #[test]
    fn test_symbol_beats_identifier() {
        assert_eq!(build("n - 1"), "(- n 1)");
        assert_eq!(build("n *"), "(* n)");
    }

    #[test]
    fn test_two_symbols_are_ambiguous() {
        let err = build_with(SequenceBuilder::default(), "1 + 2 * 3", false).unwrap_err();
        assert_eq!(
            err,
            TranslateError::AmbiguousHead {
                first: "+".to_string(),
                second: "*".to_string(),
                position: Position::new(1, 7),
            }
        );
    }

    #[test]
    fn test_separated_identifiers_are_ambiguous() {
        let err = build_with(SequenceBuilder::default(), "f 1 g", false).unwrap_err();
        assert_eq!(err.kind(), "AmbiguousHead");
        assert_eq!(err.position(), Position::new(1, 5));
    }

    #[test]
    fn test_mixfix_heads() {
        let builder = SequenceBuilder::new(true);
        assert_eq!(
            build_with(builder, "if 1 then 2 else 3", false).unwrap(),
            "(if-then-else 1 2 3)"
        );
    }

    #[test]
    fn test_groups_only_fall_back_to_first() {
        let mut ast = Ast::new();
        let run = vec![group(&mut ast, "f"), group(&mut ast, "x"), group(&mut ast, "y")];
        let node = SequenceBuilder::default()
            .build(&mut ast, run, false)
            .unwrap()
            .unwrap();

        assert_eq!(print_node(&ast, node), "(f x y)");
        match ast.get(node) {
            Node::Application(app) => assert_eq!(app.head_kind, HeadKind::Fallback),
            Node::Atom(_) => panic!("expected an application"),
        }
    }

    #[test]
    fn test_trailing_name_after_group() {
        let mut ast = Ast::new();
        let mut run = vec![group(&mut ast, "f")];
        run.extend(run_of("x y"));
        let node = SequenceBuilder::default()
            .build(&mut ast, run.clone(), false)
            .unwrap()
            .unwrap();
        assert_eq!(print_node(&ast, node), "(f x-y)");

        // Before a colon the name keeps the head
        let node = SequenceBuilder::default()
            .build(&mut ast, run, true)
            .unwrap()
            .unwrap();
        assert_eq!(print_node(&ast, node), "(x-y f)");
        assert_eq!(
            ast.get(node).as_application().unwrap().head_kind,
            HeadKind::Genuine
        );
    }

    #[test]
    fn test_name_between_groups_is_head() {
        let mut ast = Ast::new();
        let mut run = vec![group(&mut ast, "x")];
        run.extend(run_of("greater than"));
        run.push(group(&mut ast, "y"));
        let node = SequenceBuilder::default()
            .build(&mut ast, run, false)
            .unwrap()
            .unwrap();
        assert_eq!(print_node(&ast, node), "(greater-than x y)");
    }
}
