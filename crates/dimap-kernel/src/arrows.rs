//! The fixture profunctors.
//!
//! | Brand | `Of<A, B>` |
//! |---|---|
//! | [`FnBrand`] | `A → B` |
//! | [`TaggedBrand`] | `B` (the input is phantom) |
//! | [`StarBrand<F>`] | `A → F<B>` |
//! | [`CostarBrand<F>`] | `F<A> → B` |
//! | [`KleisliBrand<M>`] | `A → M<B>`, composable when `M` is a monad |
//! | [`CokleisliBrand<W>`] | `W<A> → B`, composable when `W` is a comonad |

use crate::functor::{Applicative, Comonad, Functor, Monad};
use crate::profunctor::{Category, Choice, Profunctor, Strong};
use crate::value::{Either, Func, Val, func};
use std::marker::PhantomData;
use std::rc::Rc;

// ─── Plain functions ────────────────────────────────────────────────────────

pub enum FnBrand {}

impl Profunctor for FnBrand {
    type Of<A: Val, B: Val> = Func<A, B>;

    fn dimap<A: Val, B: Val, C: Val, D: Val>(
        f: impl Fn(C) -> A + 'static,
        g: impl Fn(B) -> D + 'static,
        p: Func<A, B>,
    ) -> Func<C, D> {
        func(move |c: C| g(p(f(c))))
    }
}

impl Strong for FnBrand {
    fn first<A: Val, B: Val, C: Val>(p: Func<A, B>) -> Func<(A, C), (B, C)> {
        func(move |(a, c): (A, C)| (p(a), c))
    }
}

impl Choice for FnBrand {
    fn left<A: Val, B: Val, C: Val>(p: Func<A, B>) -> Func<Either<A, C>, Either<B, C>> {
        func(move |e: Either<A, C>| e.map_left(|a| p(a)))
    }
}

impl Category for FnBrand {
    fn id<A: Val>() -> Func<A, A> {
        func(|a: A| a)
    }

    fn compose<A: Val, B: Val, C: Val>(g: Func<B, C>, f: Func<A, B>) -> Func<A, C> {
        func(move |a: A| g(f(a)))
    }
}

// ─── Tagged ─────────────────────────────────────────────────────────────────

/// A constant output with a phantom input.
pub enum TaggedBrand {}

impl Profunctor for TaggedBrand {
    type Of<A: Val, B: Val> = B;

    fn dimap<A: Val, B: Val, C: Val, D: Val>(
        _f: impl Fn(C) -> A + 'static,
        g: impl Fn(B) -> D + 'static,
        p: B,
    ) -> D {
        g(p)
    }
}

impl Choice for TaggedBrand {
    fn left<A: Val, B: Val, C: Val>(p: B) -> Either<B, C> {
        Either::Left(p)
    }

    fn right<A: Val, B: Val, C: Val>(p: B) -> Either<C, B> {
        Either::Right(p)
    }
}

// ─── Star ───────────────────────────────────────────────────────────────────

pub struct StarBrand<F>(PhantomData<F>);

impl<F: Functor> Profunctor for StarBrand<F> {
    type Of<A: Val, B: Val> = Func<A, F::Of<B>>;

    fn dimap<A: Val, B: Val, C: Val, D: Val>(
        f: impl Fn(C) -> A + 'static,
        g: impl Fn(B) -> D + 'static,
        p: Func<A, F::Of<B>>,
    ) -> Func<C, F::Of<D>> {
        let g = Rc::new(g);
        func(move |c: C| {
            let g = g.clone();
            F::fmap(move |b: B| g(b), p(f(c)))
        })
    }
}

impl<F: Functor> Strong for StarBrand<F> {
    fn first<A: Val, B: Val, C: Val>(p: Func<A, F::Of<B>>) -> Func<(A, C), F::Of<(B, C)>> {
        func(move |(a, c): (A, C)| F::fmap(move |b: B| (b, c.clone()), p(a)))
    }
}

impl<F: Applicative> Choice for StarBrand<F> {
    fn left<A: Val, B: Val, C: Val>(
        p: Func<A, F::Of<B>>,
    ) -> Func<Either<A, C>, F::Of<Either<B, C>>> {
        func(move |e: Either<A, C>| match e {
            Either::Left(a) => F::fmap(Either::<B, C>::Left, p(a)),
            Either::Right(c) => F::pure(Either::<B, C>::Right(c)),
        })
    }
}

// ─── Costar ─────────────────────────────────────────────────────────────────

/// A co-algebra style arrow `F<A> → B`.
pub struct CostarBrand<F>(PhantomData<F>);

impl<F: Functor> Profunctor for CostarBrand<F> {
    type Of<A: Val, B: Val> = Func<F::Of<A>, B>;

    fn dimap<A: Val, B: Val, C: Val, D: Val>(
        f: impl Fn(C) -> A + 'static,
        g: impl Fn(B) -> D + 'static,
        p: Func<F::Of<A>, B>,
    ) -> Func<F::Of<C>, D> {
        let f = Rc::new(f);
        func(move |fc: F::Of<C>| {
            let f = f.clone();
            g(p(F::fmap(move |c: C| f(c), fc)))
        })
    }
}

// ─── Kleisli ────────────────────────────────────────────────────────────────

/// `A → M<B>`; same shape as a star, but composable once `M` is a monad.
pub struct KleisliBrand<M>(PhantomData<M>);

impl<M: Functor> Profunctor for KleisliBrand<M> {
    type Of<A: Val, B: Val> = Func<A, M::Of<B>>;

    fn dimap<A: Val, B: Val, C: Val, D: Val>(
        f: impl Fn(C) -> A + 'static,
        g: impl Fn(B) -> D + 'static,
        p: Func<A, M::Of<B>>,
    ) -> Func<C, M::Of<D>> {
        StarBrand::<M>::dimap(f, g, p)
    }
}

impl<M: Functor> Strong for KleisliBrand<M> {
    fn first<A: Val, B: Val, C: Val>(p: Func<A, M::Of<B>>) -> Func<(A, C), M::Of<(B, C)>> {
        StarBrand::<M>::first(p)
    }
}

impl<M: Monad> Choice for KleisliBrand<M> {
    fn left<A: Val, B: Val, C: Val>(
        p: Func<A, M::Of<B>>,
    ) -> Func<Either<A, C>, M::Of<Either<B, C>>> {
        StarBrand::<M>::left(p)
    }
}

impl<M: Monad> Category for KleisliBrand<M> {
    fn id<A: Val>() -> Func<A, M::Of<A>> {
        func(|a: A| M::pure(a))
    }

    fn compose<A: Val, B: Val, C: Val>(
        g: Func<B, M::Of<C>>,
        f: Func<A, M::Of<B>>,
    ) -> Func<A, M::Of<C>> {
        func(move |a: A| {
            let g = g.clone();
            M::bind(f(a), move |b: B| g(b))
        })
    }
}

// ─── Cokleisli ──────────────────────────────────────────────────────────────

/// `W<A> → B`; composable once `W` is a comonad.
pub struct CokleisliBrand<W>(PhantomData<W>);

impl<W: Functor> Profunctor for CokleisliBrand<W> {
    type Of<A: Val, B: Val> = Func<W::Of<A>, B>;

    fn dimap<A: Val, B: Val, C: Val, D: Val>(
        f: impl Fn(C) -> A + 'static,
        g: impl Fn(B) -> D + 'static,
        p: Func<W::Of<A>, B>,
    ) -> Func<W::Of<C>, D> {
        CostarBrand::<W>::dimap(f, g, p)
    }
}

impl<W: Comonad> Category for CokleisliBrand<W> {
    fn id<A: Val>() -> Func<W::Of<A>, A> {
        func(|wa: W::Of<A>| W::extract(wa))
    }

    fn compose<A: Val, B: Val, C: Val>(
        g: Func<W::Of<B>, C>,
        f: Func<W::Of<A>, B>,
    ) -> Func<W::Of<A>, C> {
        func(move |wa: W::Of<A>| {
            let f = f.clone();
            g(W::extend(wa, move |w: W::Of<A>| f(w)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functor::{AnnotatedBrand, OptionBrand, PairBrand, VecBrand};

    #[test]
    fn fn_dimap_pre_and_post_composes() {
        let p = func(|n: u8| n * 2);
        let q = FnBrand::dimap(|s: &'static str| s.len() as u8, |n: u8| n + 1, p);
        assert_eq!(q("abc"), 7);
    }

    #[test]
    fn fn_strong_and_choice() {
        let p = func(|n: u8| n + 1);
        assert_eq!(FnBrand::first::<u8, u8, bool>(p.clone())((1, true)), (2, true));
        assert_eq!(FnBrand::second::<u8, u8, bool>(p.clone())((true, 1)), (true, 2));
        let l = FnBrand::left::<u8, u8, bool>(p.clone());
        assert_eq!(l(Either::Left(1)), Either::Left(2));
        assert_eq!(l(Either::Right(false)), Either::Right(false));
        let r = FnBrand::right::<u8, u8, bool>(p);
        assert_eq!(r(Either::Right(1)), Either::Right(2));
        assert_eq!(r(Either::Left(true)), Either::Left(true));
    }

    #[test]
    fn tagged_ignores_input_side() {
        let t: u8 = 4;
        let out: u16 = TaggedBrand::dimap(|_: bool| 0u8, |b: u8| b as u16 * 3, t);
        assert_eq!(out, 12);
        assert_eq!(TaggedBrand::left::<(), u8, bool>(4), Either::Left(4));
    }

    #[test]
    fn star_maps_inside_functor() {
        let p: Func<u8, Option<u8>> = func(|n: u8| if n > 0 { Some(n) } else { None });
        let q = StarBrand::<OptionBrand>::dimap(|n: u8| n + 1, |n: u8| n * 10, p.clone());
        assert_eq!(q(0), Some(10));
        let l = StarBrand::<OptionBrand>::left::<u8, u8, bool>(p);
        assert_eq!(l(Either::Right(true)), Some(Either::Right(true)));
        assert_eq!(l(Either::Left(0)), None);
    }

    #[test]
    fn costar_folds_container() {
        let sum: Func<Vec<u8>, u8> = func(|v: Vec<u8>| v.into_iter().sum());
        let q = CostarBrand::<VecBrand>::dimap(|n: u8| n * 2, |n: u8| n + 1, sum);
        assert_eq!(q(vec![1, 2, 3]), 13);
    }

    #[test]
    fn kleisli_category_over_pair() {
        let f: Func<u8, (u8, u8)> = func(|n: u8| (n, n + 1));
        let g: Func<u8, (u8, u8)> = func(|n: u8| (n * 10, n * 100));
        let gf = KleisliBrand::<PairBrand>::compose(g.clone(), f.clone());
        assert_eq!(gf(1), (10, 200));
        let left_id = KleisliBrand::<PairBrand>::compose(KleisliBrand::<PairBrand>::id(), f.clone());
        assert_eq!(left_id(3), f(3));
    }

    #[test]
    fn cokleisli_category_over_annotated() {
        let f: Func<(u8, u8), u8> = func(|(e, a): (u8, u8)| e + a);
        let g: Func<(u8, u8), u8> = func(|(e, a): (u8, u8)| e * a);
        let gf = CokleisliBrand::<AnnotatedBrand<u8>>::compose(g, f.clone());
        assert_eq!(gf((2, 3)), 10);
        let right_id =
            CokleisliBrand::<AnnotatedBrand<u8>>::compose(f.clone(), CokleisliBrand::<AnnotatedBrand<u8>>::id());
        assert_eq!(right_id((2, 3)), 5);
    }
}
