//! Values, shared functions, and the hidden carrier.
//!
//! Every type that flows through a brand satisfies [`Val`]: it can be cloned
//! and owns all of its data. Functions are shared behind [`Rc`] so a single
//! arrow can be captured by many closures without copying its environment.
//!
//! [`Hidden`] is the universal carrier. A quantified type variable (the `x`
//! of `∀x. p (x → a) (x → b)` or the `x` of `∃x. (p x c, q d x)`) is stored
//! instantiated at `Hidden` and restricted back to a concrete type on use.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Values that can flow through functors and profunctors.
pub trait Val: Clone + 'static {}

impl<T: Clone + 'static> Val for T {}

/// A shared function `A → B`.
pub type Func<A, B> = Rc<dyn Fn(A) -> B>;

/// Share a closure as a [`Func`].
pub fn func<A, B>(f: impl Fn(A) -> B + 'static) -> Func<A, B> {
    Rc::new(f)
}

/// The identity arrow.
pub fn identity<A: Val>() -> Func<A, A> {
    func(|a: A| a)
}

/// `g ∘ f`.
pub fn compose<A: Val, B: Val, C: Val>(g: Func<B, C>, f: Func<A, B>) -> Func<A, C> {
    func(move |a: A| g(f(a)))
}

/// The function that ignores its argument.
pub fn constant<X: Val, A: Val>(a: A) -> Func<X, A> {
    func(move |_: X| a.clone())
}

/// `((A, B) → C) → A → B → C`.
pub fn curry<A: Val, B: Val, C: Val>(f: Func<(A, B), C>) -> Func<A, Func<B, C>> {
    func(move |a: A| {
        let f = f.clone();
        func(move |b: B| f((a.clone(), b)))
    })
}

/// `(A → B → C) → (A, B) → C`.
pub fn uncurry<A: Val, B: Val, C: Val>(f: Func<A, Func<B, C>>) -> Func<(A, B), C> {
    func(move |(a, b): (A, B)| f(a)(b))
}

/// A value whose type has been forgotten.
///
/// The core only ever reveals a `Hidden` at the type it was concealed at;
/// that pairing is what the private fields of the existential wrappers
/// protect.
#[derive(Clone)]
pub struct Hidden(Rc<dyn Any>);

impl Hidden {
    #[doc(hidden)]
    pub fn conceal<T: 'static>(value: T) -> Self {
        Self(Rc::new(value))
    }

    /// Recover the concealed value.
    ///
    /// # Panics
    ///
    /// Panics when `T` is not the type the value was concealed at.
    #[doc(hidden)]
    pub fn reveal<T: Val>(self) -> T {
        match self.0.downcast::<T>() {
            Ok(value) => Rc::unwrap_or_clone(value),
            Err(_) => panic!(
                "hidden value revealed as {} but concealed at another type",
                std::any::type_name::<T>()
            ),
        }
    }

    /// Whether the concealed value has type `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.0.is::<T>()
    }
}

impl fmt::Debug for Hidden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hidden(..)")
    }
}

/// The sum of two types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Eliminate both cases into one result.
    pub fn either<T>(self, left: impl FnOnce(L) -> T, right: impl FnOnce(R) -> T) -> T {
        match self {
            Either::Left(l) => left(l),
            Either::Right(r) => right(r),
        }
    }

    pub fn map_left<L2>(self, f: impl FnOnce(L) -> L2) -> Either<L2, R> {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    pub fn map_right<R2>(self, f: impl FnOnce(R) -> R2) -> Either<L, R2> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }
}
