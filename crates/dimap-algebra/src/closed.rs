//! Closed profunctors: arrows that can be lifted pointwise into function
//! spaces.

use dimap_kernel::{
    CokleisliBrand, CostarBrand, Distributive, FnBrand, Func, Functor, KleisliBrand, Monad,
    Profunctor, StarBrand, TaggedBrand, Val, constant, func,
};

/// `closed` sends `P<A, B>` to `P<X → A, X → B>` for any domain `X`.
///
/// Laws, for every `h: Y → X`:
/// - `rmap(· ∘ h, closed::<X>(p)) == lmap(· ∘ h, closed::<Y>(p))`
/// - `closed(dimap(f, g, p)) == dimap(f ∘ ·, g ∘ ·, closed(p))`
///
/// The method never sees a value of `X`; it can only thread one through.
pub trait Closed: Profunctor {
    fn closed<X: Val, A: Val, B: Val>(p: Self::Of<A, B>) -> Self::Of<Func<X, A>, Func<X, B>>;
}

/// `P<(A, B), C> → P<A, B → C>`.
pub fn curry_closed<P: Closed, A: Val, B: Val, C: Val>(
    p: P::Of<(A, B), C>,
) -> P::Of<A, Func<B, C>> {
    P::lmap(
        |a: A| func(move |b: B| (a.clone(), b)),
        P::closed::<B, (A, B), C>(p),
    )
}

impl Closed for FnBrand {
    fn closed<X: Val, A: Val, B: Val>(p: Func<A, B>) -> Func<Func<X, A>, Func<X, B>> {
        func(move |xa: Func<X, A>| {
            let p = p.clone();
            func(move |x: X| p(xa(x)))
        })
    }
}

impl Closed for TaggedBrand {
    fn closed<X: Val, A: Val, B: Val>(b: B) -> Func<X, B> {
        constant(b)
    }
}

impl<F: Functor> Closed for CostarBrand<F> {
    fn closed<X: Val, A: Val, B: Val>(
        p: Func<F::Of<A>, B>,
    ) -> Func<F::Of<Func<X, A>>, Func<X, B>> {
        func(move |fxa: F::Of<Func<X, A>>| {
            let p = p.clone();
            func(move |x: X| p(F::fmap(move |xa: Func<X, A>| xa(x.clone()), fxa.clone())))
        })
    }
}

impl<W: Functor> Closed for CokleisliBrand<W> {
    fn closed<X: Val, A: Val, B: Val>(
        p: Func<W::Of<A>, B>,
    ) -> Func<W::Of<Func<X, A>>, Func<X, B>> {
        CostarBrand::<W>::closed::<X, A, B>(p)
    }
}

impl<F: Distributive> Closed for StarBrand<F> {
    fn closed<X: Val, A: Val, B: Val>(
        p: Func<A, F::Of<B>>,
    ) -> Func<Func<X, A>, F::Of<Func<X, B>>> {
        func(move |xa: Func<X, A>| {
            let p = p.clone();
            F::distribute(func(move |x: X| p(xa(x))))
        })
    }
}

impl<M: Monad + Distributive> Closed for KleisliBrand<M> {
    fn closed<X: Val, A: Val, B: Val>(
        p: Func<A, M::Of<B>>,
    ) -> Func<Func<X, A>, M::Of<Func<X, B>>> {
        StarBrand::<M>::closed::<X, A, B>(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimap_kernel::{AnnotatedBrand, Observe, PairBrand, Three, Two, VecBrand};

    #[test]
    fn fn_closed_post_composes() {
        let inc = func(|n: u8| n + 1);
        let lifted = FnBrand::closed::<&'static str, u8, u8>(inc);
        let len = func(|s: &'static str| s.len() as u8);
        assert_eq!(lifted(len)("four"), 5);
    }

    #[test]
    fn tagged_closed_is_constant() {
        let lifted: Func<Two, u8> = TaggedBrand::closed::<Two, (), u8>(7);
        assert_eq!(lifted(Two::Low), 7);
        assert_eq!(lifted(Two::High), 7);
    }

    #[test]
    fn costar_closed_evaluates_pointwise() {
        let sum: Func<Vec<u8>, u8> = func(|v: Vec<u8>| v.into_iter().sum());
        let lifted = CostarBrand::<VecBrand>::closed::<u8, u8, u8>(sum);
        let fs: Vec<Func<u8, u8>> = vec![func(|x: u8| x), func(|x: u8| x * 10)];
        assert_eq!(lifted(fs)(2), 22);
    }

    #[test]
    fn cokleisli_closed_keeps_annotation() {
        let p: Func<(bool, u8), u8> = func(|(e, a): (bool, u8)| if e { a } else { 0 });
        let lifted = CokleisliBrand::<AnnotatedBrand<bool>>::closed::<u8, u8, u8>(p);
        assert_eq!(lifted((true, func(|x: u8| x + 1)))(4), 5);
        assert_eq!(lifted((false, func(|x: u8| x + 1)))(4), 0);
    }

    #[test]
    fn kleisli_pair_closed_distributes() {
        let p: Func<u8, (u8, u8)> = func(|n: u8| (n, n * 2));
        let lifted = KleisliBrand::<PairBrand>::closed::<u8, u8, u8>(p);
        let (lo, hi) = lifted(func(|x: u8| x + 1));
        assert_eq!((lo(3), hi(3)), (4, 8));
    }

    #[test]
    fn curry_closed_splits_the_pair() {
        let p: Func<(Two, Three), Three> =
            func(|(t, h): (Two, Three)| if t == Two::High { h.next() } else { h });
        let curried = curry_closed::<FnBrand, Two, Three, Three>(p.clone());
        for t in Two::ALL {
            for h in Three::ALL {
                assert_eq!(curried(t)(h), p((t, h)));
            }
        }
        assert_eq!(curried(Two::Low).observe(), serde_json::json!(["low", "mid", "high"]));
    }
}
