//! Transform pipeline infrastructure
//!
//! Translation is a chain of typed stages. Each stage implements [`Runnable`], and a
//! [`Transform`] strings stages together with [`Transform::then`]; the compiler checks that
//! each stage's input type is the previous stage's output type.
//!
//! ```rust,ignore
//! let translate = Transform::from_fn(Ok)
//!     .then(InputLimit::new(1024))     // String -> String
//!     .then(CoreTokenization::new())   // String -> Vec<(RawToken, Range)>
//!     .then(IdentifierMerge::new())    // -> Vec<Token>
//!     .then(Parsing::default());       // -> Program
//! ```
//!
//! The usual chains are pre-built as statics in [`standard`]. Stages fail with the same
//! [`TranslateError`] the rest of the crate uses, so a pipeline error is exactly the error
//! the failing stage reported.
//!
//! - [`stages`]: individual stages
//! - [`standard`]: `LEXING`, `TRANSLATION` and [`pipeline`](standard::pipeline)

pub mod stages;
pub mod standard;

use crate::lexpr::error::TranslateResult;

/// Anything that turns an `I` into an `O`
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> TranslateResult<O>;
}

/// A composable chain of stages from `I` to `O`
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> TranslateResult<O> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> TranslateResult<O> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Feed this transform's output into `stage`
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Chain a pre-built static transform
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    pub fn run(&self, input: I) -> TranslateResult<O> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> TranslateResult<O> {
        Transform::run(self, input)
    }
}
