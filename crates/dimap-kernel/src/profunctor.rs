//! Profunctor capabilities over two-parameter brands.

use crate::value::{Either, Val};

/// Contravariant in the first parameter, covariant in the second.
///
/// Laws:
/// - `dimap(id, id, p) == p`
/// - `dimap(f ∘ g, h ∘ i, p) == dimap(g, h, dimap(f, i, p))`
pub trait Profunctor: 'static {
    type Of<A: Val, B: Val>: Val;

    fn dimap<A: Val, B: Val, C: Val, D: Val>(
        f: impl Fn(C) -> A + 'static,
        g: impl Fn(B) -> D + 'static,
        p: Self::Of<A, B>,
    ) -> Self::Of<C, D>;

    fn lmap<A: Val, B: Val, C: Val>(
        f: impl Fn(C) -> A + 'static,
        p: Self::Of<A, B>,
    ) -> Self::Of<C, B> {
        Self::dimap(f, |b: B| b, p)
    }

    fn rmap<A: Val, B: Val, D: Val>(
        g: impl Fn(B) -> D + 'static,
        p: Self::Of<A, B>,
    ) -> Self::Of<A, D> {
        Self::dimap(|a: A| a, g, p)
    }
}

/// Profunctors that thread an untouched component alongside.
pub trait Strong: Profunctor {
    fn first<A: Val, B: Val, C: Val>(p: Self::Of<A, B>) -> Self::Of<(A, C), (B, C)>;

    fn second<A: Val, B: Val, C: Val>(p: Self::Of<A, B>) -> Self::Of<(C, A), (C, B)> {
        Self::dimap(
            |(c, a): (C, A)| (a, c),
            |(b, c): (B, C)| (c, b),
            Self::first::<A, B, C>(p),
        )
    }
}

/// Profunctors that pass an untouched alternative through.
pub trait Choice: Profunctor {
    fn left<A: Val, B: Val, C: Val>(p: Self::Of<A, B>) -> Self::Of<Either<A, C>, Either<B, C>>;

    fn right<A: Val, B: Val, C: Val>(p: Self::Of<A, B>) -> Self::Of<Either<C, A>, Either<C, B>> {
        Self::dimap(
            |e: Either<C, A>| e.either(Either::Right, Either::Left),
            |e: Either<B, C>| e.either(Either::Right, Either::Left),
            Self::left::<A, B, C>(p),
        )
    }
}

/// Composable arrows: `compose(id, p) == p == compose(p, id)`, associative.
pub trait Category: Profunctor {
    fn id<A: Val>() -> Self::Of<A, A>;

    /// `g ∘ f`.
    fn compose<A: Val, B: Val, C: Val>(g: Self::Of<B, C>, f: Self::Of<A, B>) -> Self::Of<A, C>;
}
