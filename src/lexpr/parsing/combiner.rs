//! Precedence combiner
//!
//!     Parses the merged token stream with three operators of fixed precedence, tightest
//!     first:
//!
//!         Dot    `.`  left-associative    `A.B.C` is `(A.B).C`
//!         Colon  `:`  right-associative   `A:B:C` is `A:(B:C)`
//!         Comma  `,`  list separator
//!
//!     Between operators sit atomic runs, which the [sequence builder](super::sequence)
//!     resolves to single nodes.
//!
//! Chaining Rules
//!
//!     Dot, `L . R`: when R is an atom it becomes the function and L its only argument.
//!     When R is an application, L is inserted as its new first argument. L is always
//!     inserted whole, even when it is an application itself.
//!
//!     Colon, `L : R`: when L is an atom it becomes the function. When L is an application,
//!     R is appended after its arguments. R is spliced flat if it is a fallback application
//!     (a run of groups with no real head, like `(x) (y)`), and kept as one nested argument
//!     otherwise. This is what makes `f: (x) (y)` read as `(f x y)` while `n *: n - 1`
//!     keeps `(- n 1)` nested.
//!
//! Iteration
//!
//!     Nothing here recurses. Each open parenthesis pushes a [`Frame`] that holds the
//!     partial state of its own expression list, and the closing parenthesis folds the frame
//!     into a single node that joins the parent's current run. Colon operands wait on a
//!     per-frame stack and are folded right to left when the expression ends. Deep nesting
//!     is therefore bounded only by the configured depth limit, and long chains cost heap,
//!     not call stack.

use crate::lexpr::ast::{Ast, HeadKind, Node, NodeId, Position, Program};
use crate::lexpr::error::{Limit, Operator, ParenProblem, Side, TranslateError, TranslateResult};
use crate::lexpr::parsing::sequence::{Element, SequenceBuilder};
use crate::lexpr::parsing::ParseOptions;
use crate::lexpr::token::{Token, TokenKind};

/// Partial state of one parenthesis level (or the top level)
#[derive(Debug, Default)]
struct Frame {
    /// Position of the opening `(`; `None` for the top level
    open: Option<Position>,
    /// Completed comma-separated expressions
    items: Vec<NodeId>,
    /// Left operands of colons still waiting for their right side
    colon_lefts: Vec<NodeId>,
    /// Dot chain accumulated so far in the current expression
    dot_acc: Option<NodeId>,
    /// The atomic run being collected
    run: Vec<Element>,
    /// Most recent operator seen in this frame
    last_op: Option<(Operator, Position)>,
}

impl Frame {
    fn group(open: Position) -> Self {
        Frame {
            open: Some(open),
            ..Default::default()
        }
    }

    /// The error for an operand missing just before `current`
    fn missing_operand(&self, current: (Operator, Position)) -> TranslateError {
        let (operator, side, position) = match self.last_op {
            Some((op, pos)) => (op, Side::After, pos),
            None => (current.0, Side::Before, current.1),
        };
        TranslateError::EmptySequence {
            operator,
            side,
            position,
        }
    }
}

/// Token-stream parser producing a [`Program`]
pub struct Combiner {
    options: ParseOptions,
    builder: SequenceBuilder,
    ast: Ast,
    frames: Vec<Frame>,
}

impl Combiner {
    pub fn new(options: ParseOptions) -> Self {
        Combiner {
            builder: SequenceBuilder::new(options.mixfix_heads),
            options,
            ast: Ast::new(),
            frames: vec![Frame::default()],
        }
    }

    pub fn parse(mut self, tokens: Vec<Token>) -> TranslateResult<Program> {
        for token in tokens {
            let position = token.range.start;
            match token.kind {
                TokenKind::LParen => self.open_group(position)?,
                TokenKind::RParen => self.close_group(position)?,
                TokenKind::Dot => self.dot(position)?,
                TokenKind::Colon => self.colon(position)?,
                TokenKind::Comma => self.comma(position)?,
                _ => {
                    if let Some(element) = Element::from_token(token) {
                        self.current().run.push(element);
                    }
                }
            }
        }
        self.finish()
    }

    fn current(&mut self) -> &mut Frame {
        // The top-level frame is only popped by `finish`.
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    fn open_group(&mut self, position: Position) -> TranslateResult<()> {
        let depth = self.frames.len() - 1;
        if depth >= self.options.max_depth {
            return Err(TranslateError::LimitExceeded {
                limit: Limit::Depth {
                    max: self.options.max_depth,
                },
                position,
            });
        }
        self.frames.push(Frame::group(position));
        Ok(())
    }

    fn close_group(&mut self, position: Position) -> TranslateResult<()> {
        if self.frames.len() == 1 {
            return Err(TranslateError::UnbalancedParens {
                problem: ParenProblem::Stray,
                position,
            });
        }
        let mut frame = self.take_frame();
        let open = frame.open.unwrap_or(position);

        if let Some(value) = self.finish_expr(&mut frame, (Operator::Group, position))? {
            frame.items.push(value);
        }
        let node = match frame.items.split_first() {
            None => {
                return Err(TranslateError::EmptySequence {
                    operator: Operator::Group,
                    side: Side::Inside,
                    position: open,
                })
            }
            Some((first, [])) => *first,
            // A parenthesized list reads as a headless sequence
            Some((first, rest)) => self.ast.apply(*first, rest.to_vec(), HeadKind::Fallback),
        };
        self.current().run.push(Element::Group(node));
        Ok(())
    }

    // Operator handlers detach the innermost frame while they work on it. Errors abort the
    // whole parse, so a frame lost on the error path is never looked at again.

    fn dot(&mut self, position: Position) -> TranslateResult<()> {
        let mut frame = self.take_frame();
        let segment = self.take_segment(&mut frame, (Operator::Dot, position), false)?;
        frame.dot_acc = Some(match frame.dot_acc.take() {
            Some(left) => chain_dot(&mut self.ast, left, segment),
            None => segment,
        });
        frame.last_op = Some((Operator::Dot, position));
        self.frames.push(frame);
        Ok(())
    }

    fn colon(&mut self, position: Position) -> TranslateResult<()> {
        let mut frame = self.take_frame();
        let segment = self.take_segment(&mut frame, (Operator::Colon, position), true)?;
        let value = match frame.dot_acc.take() {
            Some(left) => chain_dot(&mut self.ast, left, segment),
            None => segment,
        };
        frame.colon_lefts.push(value);
        frame.last_op = Some((Operator::Colon, position));
        self.frames.push(frame);
        Ok(())
    }

    fn comma(&mut self, position: Position) -> TranslateResult<()> {
        let mut frame = self.take_frame();
        match self.finish_expr(&mut frame, (Operator::Comma, position))? {
            Some(value) => frame.items.push(value),
            None => return Err(frame.missing_operand((Operator::Comma, position))),
        }
        frame.last_op = Some((Operator::Comma, position));
        self.frames.push(frame);
        Ok(())
    }

    fn finish(mut self) -> TranslateResult<Program> {
        if self.frames.len() > 1 {
            let position = self.current().open.unwrap_or_default();
            return Err(TranslateError::UnbalancedParens {
                problem: ParenProblem::Unclosed,
                position,
            });
        }
        let mut frame = self.take_frame();
        // End of input only fails when an operator is left dangling, and that error
        // points at the operator itself.
        if let Some(value) = self.finish_expr(&mut frame, (Operator::Comma, Position::default()))? {
            frame.items.push(value);
        }
        tracing::debug!(items = frame.items.len(), nodes = self.ast.len(), "parsed program");
        Ok(Program::new(self.ast, frame.items))
    }

    /// Detach the innermost frame so it can be edited alongside the arena
    fn take_frame(&mut self) -> Frame {
        self.frames.pop().unwrap_or_default()
    }

    /// Resolve the current run, which must not be empty
    fn take_segment(
        &mut self,
        frame: &mut Frame,
        current: (Operator, Position),
        followed_by_colon: bool,
    ) -> TranslateResult<NodeId> {
        let run = std::mem::take(&mut frame.run);
        match self.builder.build(&mut self.ast, run, followed_by_colon)? {
            Some(node) => Ok(node),
            None => Err(frame.missing_operand(current)),
        }
    }

    /// Close the current colon expression; `None` when the frame holds nothing at all
    fn finish_expr(
        &mut self,
        frame: &mut Frame,
        current: (Operator, Position),
    ) -> TranslateResult<Option<NodeId>> {
        let run = std::mem::take(&mut frame.run);
        let segment = match self.builder.build(&mut self.ast, run, false)? {
            Some(node) => node,
            None if frame.last_op.is_none() => return Ok(None),
            None => return Err(frame.missing_operand(current)),
        };

        let mut value = match frame.dot_acc.take() {
            Some(left) => chain_dot(&mut self.ast, left, segment),
            None => segment,
        };
        while let Some(left) = frame.colon_lefts.pop() {
            value = chain_colon(&mut self.ast, left, value);
        }
        frame.last_op = None;
        Ok(Some(value))
    }
}

/// `left . right`
fn chain_dot(ast: &mut Ast, left: NodeId, right: NodeId) -> NodeId {
    match ast.get(right) {
        Node::Atom(_) => ast.apply(right, vec![left], HeadKind::Genuine),
        Node::Application(app) => {
            let head = app.head;
            let head_kind = app.head_kind;
            let mut args = Vec::with_capacity(app.args.len() + 1);
            args.push(left);
            args.extend(app.args.iter().copied());
            ast.apply(head, args, head_kind)
        }
    }
}

/// `left : right`
fn chain_colon(ast: &mut Ast, left: NodeId, right: NodeId) -> NodeId {
    let tail = flatten(ast, right);
    match ast.get(left) {
        Node::Atom(_) => ast.apply(left, tail, HeadKind::Genuine),
        Node::Application(app) => {
            let head = app.head;
            let head_kind = app.head_kind;
            let mut args = app.args.clone();
            args.extend(tail);
            ast.apply(head, args, head_kind)
        }
    }
}

/// Arguments contributed by the right operand of a colon
fn flatten(ast: &Ast, node: NodeId) -> Vec<NodeId> {
    match ast.get(node) {
        Node::Application(app) if app.head_kind == HeadKind::Fallback => {
            let mut out = Vec::with_capacity(app.args.len() + 1);
            out.push(app.head);
            out.extend(app.args.iter().copied());
            out
        }
        _ => vec![node],
    }
}
