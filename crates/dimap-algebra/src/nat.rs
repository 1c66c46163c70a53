//! Natural transformations between profunctors.

use dimap_kernel::{
    Applicative, Category, CokleisliBrand, Comonad, FnBrand, Func, KleisliBrand, Profunctor, Val,
    func,
};
use std::marker::PhantomData;

/// `P :-> Q`: one arrow `P<A, B> → Q<A, B>` for every `A`, `B`, commuting
/// with `dimap`.
///
/// The method is generic, so an implementation is parametric in `A` and `B`
/// by construction.
pub trait ProNat<P: Profunctor, Q: Profunctor> {
    fn apply<A: Val, B: Val>(&self, p: P::Of<A, B>) -> Q::Of<A, B>;
}

/// The identity transformation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Id;

impl<P: Profunctor> ProNat<P, P> for Id {
    fn apply<A: Val, B: Val>(&self, p: P::Of<A, B>) -> P::Of<A, B> {
        p
    }
}

/// `second ∘ first`, passing through `Q`.
pub struct Then<N, M, Q> {
    first: N,
    second: M,
    _via: PhantomData<fn() -> Q>,
}

impl<N, M, Q> Then<N, M, Q> {
    pub fn new(first: N, second: M) -> Self {
        Self {
            first,
            second,
            _via: PhantomData,
        }
    }
}

impl<P, Q, R, N, M> ProNat<P, R> for Then<N, M, Q>
where
    P: Profunctor,
    Q: Profunctor,
    R: Profunctor,
    N: ProNat<P, Q>,
    M: ProNat<Q, R>,
{
    fn apply<A: Val, B: Val>(&self, p: P::Of<A, B>) -> R::Of<A, B> {
        self.second.apply::<A, B>(self.first.apply::<A, B>(p))
    }
}

/// Pure functions as arrows of any category: `p ↦ lmap(p, id)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Arr;

impl<C: Category> ProNat<FnBrand, C> for Arr {
    fn apply<A: Val, B: Val>(&self, p: Func<A, B>) -> C::Of<A, B> {
        C::lmap(move |a: A| p(a), C::id::<B>())
    }
}

/// Pure functions as effectful arrows: `p ↦ pure ∘ p`.
pub struct Pure<M>(PhantomData<fn() -> M>);

impl<M> Pure<M> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<M> Default for Pure<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Applicative> ProNat<FnBrand, KleisliBrand<M>> for Pure<M> {
    fn apply<A: Val, B: Val>(&self, p: Func<A, B>) -> Func<A, M::Of<B>> {
        func(move |a: A| M::pure(p(a)))
    }
}

/// Pure functions as context-reading arrows: `p ↦ p ∘ extract`.
pub struct Extract<W>(PhantomData<fn() -> W>);

impl<W> Extract<W> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<W> Default for Extract<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Comonad> ProNat<FnBrand, CokleisliBrand<W>> for Extract<W> {
    fn apply<A: Val, B: Val>(&self, p: Func<A, B>) -> Func<W::Of<A>, B> {
        func(move |wa: W::Of<A>| p(W::extract(wa)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimap_kernel::{AnnotatedBrand, PairBrand};

    #[test]
    fn pure_then_identity() {
        let nat = Then::<_, _, KleisliBrand<PairBrand>>::new(Pure::<PairBrand>::new(), Id);
        let k: Func<u8, (u8, u8)> =
            ProNat::<FnBrand, KleisliBrand<PairBrand>>::apply(&nat, func(|n: u8| n + 1));
        assert_eq!(k(1), (2, 2));
    }

    #[test]
    fn arr_agrees_with_pure_for_kleisli() {
        let p = func(|n: u8| n * 2);
        let via_arr: Func<u8, (u8, u8)> =
            ProNat::<FnBrand, KleisliBrand<PairBrand>>::apply(&Arr, p.clone());
        let via_pure: Func<u8, (u8, u8)> =
            ProNat::<FnBrand, KleisliBrand<PairBrand>>::apply(&Pure::<PairBrand>::new(), p);
        for n in [0u8, 3, 7] {
            assert_eq!(via_arr(n), via_pure(n));
        }
    }

    #[test]
    fn arr_is_identity_for_plain_functions() {
        let f: Func<u8, u8> = ProNat::<FnBrand, FnBrand>::apply(&Arr, func(|n: u8| n + 5));
        assert_eq!(f(1), 6);
    }

    #[test]
    fn extract_reads_through_annotation() {
        let c: Func<(bool, u8), u8> = ProNat::<FnBrand, CokleisliBrand<AnnotatedBrand<bool>>>::apply(
            &Extract::<AnnotatedBrand<bool>>::new(),
            func(|n: u8| n * 3),
        );
        assert_eq!(c((true, 2)), 6);
    }
}
