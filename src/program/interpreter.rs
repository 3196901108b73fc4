//! The trampoline that reduces a [`Program`] against an environment.
//!
//! Reduction is one iterative loop over a work node plus an explicit
//! continuation stack. Descending into a `FlatMap` pushes its continuation;
//! producing a value (from `Done` or a dispatched leaf) pops the most
//! recent continuation and applies it. A continuation may hand back an
//! arbitrarily large new subtree (that is how the demo loops ask again
//! forever) and the loop absorbs it without growing the native stack.
//!
//! # Performance
//!
//! Auxiliary space is O(depth of left-nesting), held on the heap in a
//! `SmallVec`; short programs never leave its inline storage.

use smallvec::SmallVec;
use tracing::trace;

use super::error::EffectError;
use super::tree::{Continuation, Node, Program, downcast};

/// Continuations held inline before the stack spills to the heap.
const CONTINUATION_INLINE_CAPACITY: usize = 8;

type ContinuationStack<S> = SmallVec<[Continuation<S>; CONTINUATION_INLINE_CAPACITY]>;

impl<S: 'static, T: 'static> Program<S, T> {
    /// Reduces this program to its final value, threading `environment`
    /// through every step.
    ///
    /// The environment is the only mutable state in the system: leaves
    /// mutate it in place (console output, PRNG draw, cell write,
    /// repository change) and it lives exactly as long as the call.
    ///
    /// # Errors
    ///
    /// The first error produced by a leaf or by a fallible continuation
    /// ([`try_map`](Program::try_map) /
    /// [`try_flat_map`](Program::try_flat_map)) aborts the reduction and is
    /// returned as-is. No retry happens here; loops are explicit in the
    /// program itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use freeprog::program::Program;
    ///
    /// let program: Program<(), i32> = Program::done(2).map(|x| x + 40);
    /// assert_eq!(program.eval(&mut ()), Ok(42));
    /// ```
    pub fn eval(self, environment: &mut S) -> Result<T, EffectError> {
        let mut node = self.node;
        let mut stack: ContinuationStack<S> = SmallVec::new();

        loop {
            match node {
                Node::FlatMap {
                    current,
                    continuation,
                } => {
                    stack.push(continuation);
                    node = *current;
                }
                Node::Done(value) => match stack.pop() {
                    Some(continuation) => node = continuation(value)?,
                    None => return downcast(value, "final result"),
                },
                Node::Leaf(effect) => {
                    trace!(effect = effect.describe(), "dispatching effect leaf");
                    let value = effect.handle(environment)?;
                    match stack.pop() {
                        Some(continuation) => node = continuation(value)?,
                        None => return downcast(value, "final result"),
                    }
                }
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_monad_left_identity(value in any::<i32>()) {
            let f = |x: i32| Program::<(), i32>::done(x.wrapping_mul(2));

            let left = Program::<(), i32>::done(value).flat_map(f);
            let right = f(value);

            prop_assert_eq!(left.eval(&mut ()), right.eval(&mut ()));
        }

        #[test]
        fn prop_monad_right_identity(value in any::<i32>()) {
            let result = Program::<(), i32>::done(value).flat_map(Program::done);
            prop_assert_eq!(result.eval(&mut ()), Ok(value));
        }

        #[test]
        fn prop_monad_associativity(value in any::<i32>()) {
            fn f(x: i32) -> Program<(), i32> {
                Program::done(x.wrapping_add(10))
            }
            fn g(x: i32) -> Program<(), i32> {
                Program::done(x.wrapping_mul(2))
            }

            let left = Program::<(), i32>::done(value).flat_map(f).flat_map(g);
            let right = Program::<(), i32>::done(value).flat_map(|x| f(x).flat_map(g));

            prop_assert_eq!(left.eval(&mut ()), right.eval(&mut ()));
        }

        #[test]
        fn prop_functor_identity(value in any::<i32>()) {
            let result = Program::<(), i32>::done(value).map(|x| x);
            prop_assert_eq!(result.eval(&mut ()), Ok(value));
        }

        #[test]
        fn prop_functor_composition(value in any::<i32>()) {
            fn f(x: i32) -> i32 {
                x.wrapping_add(10)
            }
            fn g(x: i32) -> i32 {
                x.wrapping_mul(2)
            }

            let left = Program::<(), i32>::done(value).map(f).map(g);
            let right = Program::<(), i32>::done(value).map(|x| g(f(x)));

            prop_assert_eq!(left.eval(&mut ()), right.eval(&mut ()));
        }
    }
}
