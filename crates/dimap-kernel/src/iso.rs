//! Isomorphisms as explicit pairs of arrows.

use crate::value::{Func, Val, func};

/// `forward` and `backward` are mutually inverse.
///
/// The pair is not checked on construction; the law gate checks the round
/// trips extensionally.
#[derive(Clone)]
pub struct Iso<S, A> {
    pub forward: Func<S, A>,
    pub backward: Func<A, S>,
}

impl<S: Val, A: Val> Iso<S, A> {
    pub fn new(
        forward: impl Fn(S) -> A + 'static,
        backward: impl Fn(A) -> S + 'static,
    ) -> Self {
        Self {
            forward: func(forward),
            backward: func(backward),
        }
    }

    pub fn to(&self, s: S) -> A {
        (self.forward)(s)
    }

    pub fn from(&self, a: A) -> S {
        (self.backward)(a)
    }

    /// The same isomorphism read backwards.
    pub fn reversed(self) -> Iso<A, S> {
        Iso {
            forward: self.backward,
            backward: self.forward,
        }
    }

    /// Chain with an isomorphism out of `A`.
    pub fn then<T: Val>(self, next: Iso<A, T>) -> Iso<S, T> {
        let (f, g) = (self.forward, next.forward);
        let (f_back, g_back) = (self.backward, next.backward);
        Iso::new(move |s: S| g(f(s)), move |t: T| f_back(g_back(t)))
    }
}
