//! The `Program` tree: not-yet-executed computations as data.
//!
//! A program is built purely, by composing constructors and combinators;
//! no effect runs until the tree is handed to
//! [`eval`](Program::eval) together with an environment.
//!
//! # Design
//!
//! ```text
//! Program<S, T> = Done(T)
//!               | FlatMap { current: Program<S, U>, continuation: U -> Program<S, T> }
//!               | Leaf(dyn Effect<S>)
//! ```
//!
//! The intermediate type `U` of a `FlatMap` node is existentially hidden:
//! values cross reduction steps as `Box<dyn Any>`, and each continuation
//! downcasts its input back to the concrete type the typed combinator
//! captured. The typed constructors are the only way to build leaves, which
//! is what keeps those downcasts unreachable in correct programs.
//!
//! # Performance
//!
//! Every combinator is O(1): it allocates one node and calls nothing.
//! Evaluation cost lives entirely in [`eval`](Program::eval).

use std::any::Any;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use super::error::EffectError;

/// A value passed between reduction steps, with its concrete type erased.
pub(crate) type Erased = Box<dyn Any>;

/// A deferred continuation from one reduced value to the next node.
pub(crate) type Continuation<S> = Box<dyn FnOnce(Erased) -> Result<Node<S>, EffectError>>;

/// Recovers a concrete value from an erased reduction result.
pub(crate) fn downcast<T: 'static>(
    erased: Erased,
    context: &'static str,
) -> Result<T, EffectError> {
    erased
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| EffectError::TypeMismatch { context })
}

// =============================================================================
// Effect leaves
// =============================================================================

/// One atomic, externally observable operation.
///
/// Each effect family (console, randomness, cell, repository) defines a
/// closed set of leaf variants and implements this trait once, bounded by
/// the capability trait its environment must satisfy. `handle` receives the
/// environment and performs the leaf's one real side effect.
///
/// # Contract
///
/// The returned value must have the runtime type promised by the typed
/// constructor that created the leaf; the interpreter downcasts it on the
/// way into the next continuation and surfaces a mismatch as
/// [`EffectError::TypeMismatch`].
pub trait Effect<S> {
    /// Short label for traces and `Debug` output, e.g. `"console.write_line"`.
    fn describe(&self) -> &'static str;

    /// Performs this leaf's one interaction against the environment.
    ///
    /// # Errors
    ///
    /// Whatever the underlying capability reports: stream failures, strict
    /// repository misses, invalid operation arguments.
    fn handle(self: Box<Self>, environment: &mut S) -> Result<Box<dyn Any>, EffectError>;
}

// =============================================================================
// The tree
// =============================================================================

/// The erased node shapes behind [`Program`].
pub(crate) enum Node<S> {
    Done(Erased),
    Leaf(Box<dyn Effect<S>>),
    FlatMap {
        current: Box<Node<S>>,
        continuation: Continuation<S>,
    },
}

/// An immutable description of a computation producing `T` against an
/// environment `S`.
///
/// # Type Parameters
///
/// - `S`: the environment (capability aggregate) the program needs.
/// - `T`: the type of the final value.
///
/// # Monad Laws
///
/// `Program` satisfies the monad laws under evaluation:
///
/// 1. **Left Identity**: `Program::done(a).flat_map(f)` evaluates as `f(a)`
/// 2. **Right Identity**: `p.flat_map(Program::done)` evaluates as `p`
/// 3. **Associativity**: `p.flat_map(f).flat_map(g)` evaluates as
///    `p.flat_map(|x| f(x).flat_map(g))`
///
/// # Stack Safety
///
/// Continuations may construct arbitrarily large new subtrees; a
/// continuation that re-invokes its own constructor expresses an unbounded
/// loop. [`eval`](Program::eval) reduces with an explicit trampoline, so
/// such programs run in constant native stack space.
///
/// # Examples
///
/// ```rust
/// use freeprog::program::Program;
///
/// let program: Program<(), i32> = Program::done(10)
///     .flat_map(|x| Program::done(x + 5))
///     .map(|x| x * 2);
///
/// assert_eq!(program.eval(&mut ()), Ok(30));
/// ```
pub struct Program<S, T> {
    pub(crate) node: Node<S>,
    pub(crate) result: PhantomData<fn() -> T>,
}

impl<S: 'static, T: 'static> Program<S, T> {
    pub(crate) fn from_node(node: Node<S>) -> Self {
        Self {
            node,
            result: PhantomData,
        }
    }

    /// A program that evaluates to `value` with no requirement on `S`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use freeprog::program::Program;
    ///
    /// let program: Program<(), i32> = Program::done(42);
    /// assert!(program.is_done());
    /// ```
    #[must_use]
    pub fn done(value: T) -> Self {
        Self::from_node(Node::Done(Box::new(value)))
    }

    /// Lifts one effect leaf into a program.
    ///
    /// The caller asserts that the leaf's `handle` produces a value of
    /// runtime type `T`; the built-in constructors in [`crate::dsl`] all
    /// maintain this pairing. A violation surfaces at evaluation time as
    /// [`EffectError::TypeMismatch`].
    pub fn from_effect(effect: impl Effect<S> + 'static) -> Self {
        Self::from_node(Node::Leaf(Box::new(effect)))
    }

    /// Whether this program is a terminal value with no pending work.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self.node, Node::Done(_))
    }

    /// Chains this program with a continuation that depends on its result.
    ///
    /// Construction is O(1): neither `self` is reduced nor `function`
    /// called until evaluation reaches this node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use freeprog::program::Program;
    ///
    /// let program: Program<(), i32> = Program::done(10).flat_map(|x| Program::done(x + 5));
    /// assert_eq!(program.eval(&mut ()), Ok(15));
    /// ```
    pub fn flat_map<R, F>(self, function: F) -> Program<S, R>
    where
        R: 'static,
        F: FnOnce(T) -> Program<S, R> + 'static,
    {
        self.try_flat_map(|value| Ok(function(value)))
    }

    /// Fallible [`flat_map`](Program::flat_map): an `Err` from `function`
    /// aborts the enclosing [`eval`](Program::eval).
    pub fn try_flat_map<R, F>(self, function: F) -> Program<S, R>
    where
        R: 'static,
        F: FnOnce(T) -> Result<Program<S, R>, EffectError> + 'static,
    {
        Program::from_node(Node::FlatMap {
            current: Box::new(self.node),
            continuation: Box::new(move |erased| {
                let value = downcast::<T>(erased, "flat_map continuation input")?;
                function(value).map(|program| program.node)
            }),
        })
    }

    /// Alias for [`flat_map`](Program::flat_map).
    ///
    /// This is the conventional Rust name for monadic bind.
    pub fn and_then<R, F>(self, function: F) -> Program<S, R>
    where
        R: 'static,
        F: FnOnce(T) -> Program<S, R> + 'static,
    {
        self.flat_map(function)
    }

    /// Applies a pure function to the result of this program.
    ///
    /// Behaviorally `flat_map(|x| done(f(x)))`: `self` is fully reduced
    /// before `function` is applied, and nothing runs at construction time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use freeprog::program::Program;
    ///
    /// let program: Program<(), i32> = Program::done(21).map(|x| x * 2);
    /// assert_eq!(program.eval(&mut ()), Ok(42));
    /// ```
    pub fn map<R, F>(self, function: F) -> Program<S, R>
    where
        R: 'static,
        F: FnOnce(T) -> R + 'static,
    {
        self.flat_map(|value| Program::done(function(value)))
    }

    /// Fallible [`map`](Program::map): an `Err` from `function` aborts the
    /// enclosing [`eval`](Program::eval).
    ///
    /// This is the entry point for input parsing in the demo flows.
    pub fn try_map<R, F>(self, function: F) -> Program<S, R>
    where
        R: 'static,
        F: FnOnce(T) -> Result<R, EffectError> + 'static,
    {
        self.try_flat_map(|value| function(value).map(Program::done))
    }

    /// Sequences two programs, discarding the result of the first.
    ///
    /// The first program still runs first, for its effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use freeprog::program::Program;
    ///
    /// let program: Program<(), i32> = Program::done(10).then(Program::done(20));
    /// assert_eq!(program.eval(&mut ()), Ok(20));
    /// ```
    pub fn then<R: 'static>(self, next: Program<S, R>) -> Program<S, R> {
        self.flat_map(move |_| next)
    }

    /// Combines two programs with a binary function.
    ///
    /// All of `self`'s effects are observed strictly before any of
    /// `other`'s.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use freeprog::program::Program;
    ///
    /// let left: Program<(), i32> = Program::done(10);
    /// let right: Program<(), i32> = Program::done(20);
    /// assert_eq!(left.map2(right, |a, b| a + b).eval(&mut ()), Ok(30));
    /// ```
    pub fn map2<U, R, F>(self, other: Program<S, U>, combine: F) -> Program<S, R>
    where
        U: 'static,
        R: 'static,
        F: FnOnce(T, U) -> R + 'static,
    {
        self.flat_map(move |left| other.map(move |right| combine(left, right)))
    }

    /// Combines two programs into a tuple, left effects first.
    pub fn zip<U: 'static>(self, other: Program<S, U>) -> Program<S, (T, U)> {
        self.map2(other, |left, right| (left, right))
    }
}

// =============================================================================
// Trait implementations
// =============================================================================

impl<S> Debug for Node<S> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done(_) => formatter.write_str("Done(<value>)"),
            Self::Leaf(effect) => write!(formatter, "Effect({})", effect.describe()),
            Self::FlatMap { current, .. } => {
                write!(formatter, "FlatMap({current:?}, <continuation>)")
            }
        }
    }
}

impl<S, T> Debug for Program<S, T> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.node, formatter)
    }
}
