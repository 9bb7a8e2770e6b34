//! # lexpr
//!
//! Translates Lexpr, a lightweight infix/postfix notation, into canonical prefix
//! s-expressions:
//!
//!     x. greater than: y      ->  (greater-than x y)
//!     n *: n - 1 .!           ->  (* n (! (- n 1)))
//!
//! The library entry points are [`lexpr::translate`] and [`lexpr::translate_with`]; the
//! `lexpr` binary wraps them in a command-line tool.
//!
//! ## Testing
//!
//! End-to-end expectations live as verified sample pairs under `samples/`; see the
//! [testing module](lexpr::testing).

pub mod lexpr;
