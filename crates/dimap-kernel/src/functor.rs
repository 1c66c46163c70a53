//! Functor capabilities over one-parameter brands.
//!
//! A brand is a zero-sized type standing for a type constructor: `OptionBrand`
//! stands for `Option<_>`, and `<OptionBrand as Functor>::Of<A>` is
//! `Option<A>`. Capabilities are traits on the brand.

use crate::value::{Func, Val, func};
use std::marker::PhantomData;
use std::rc::Rc;

/// `fmap id = id`, `fmap (g ∘ f) = fmap g ∘ fmap f`.
pub trait Functor: 'static {
    type Of<A: Val>: Val;

    fn fmap<A: Val, B: Val>(f: impl Fn(A) -> B + 'static, fa: Self::Of<A>) -> Self::Of<B>;
}

pub trait Applicative: Functor {
    fn pure<A: Val>(a: A) -> Self::Of<A>;

    fn zip_with<A: Val, B: Val, C: Val>(
        f: impl Fn(A, B) -> C + 'static,
        fa: Self::Of<A>,
        fb: Self::Of<B>,
    ) -> Self::Of<C>;
}

pub trait Monad: Applicative {
    fn bind<A: Val, B: Val>(
        fa: Self::Of<A>,
        f: impl Fn(A) -> Self::Of<B> + 'static,
    ) -> Self::Of<B>;

    fn join<A: Val>(ffa: Self::Of<Self::Of<A>>) -> Self::Of<A> {
        Self::bind(ffa, |fa: Self::Of<A>| fa)
    }
}

pub trait Comonad: Functor {
    fn extract<A: Val>(wa: Self::Of<A>) -> A;

    fn extend<A: Val, B: Val>(
        wa: Self::Of<A>,
        f: impl Fn(Self::Of<A>) -> B + 'static,
    ) -> Self::Of<B>;

    fn duplicate<A: Val>(wa: Self::Of<A>) -> Self::Of<Self::Of<A>> {
        Self::extend(wa, |w: Self::Of<A>| w)
    }
}

/// Functors that commute with the reader `X → _`.
///
/// `distribute` is the reader instance of `g (f a) → f (g a)`; it is all a
/// `Closed` star or Kleisli arrow needs.
pub trait Distributive: Functor {
    fn distribute<X: Val, A: Val>(g: Func<X, Self::Of<A>>) -> Self::Of<Func<X, A>>;
}

// ─── Identity ───────────────────────────────────────────────────────────────

pub enum IdentityBrand {}

impl Functor for IdentityBrand {
    type Of<A: Val> = A;

    fn fmap<A: Val, B: Val>(f: impl Fn(A) -> B + 'static, fa: A) -> B {
        f(fa)
    }
}

impl Applicative for IdentityBrand {
    fn pure<A: Val>(a: A) -> A {
        a
    }

    fn zip_with<A: Val, B: Val, C: Val>(f: impl Fn(A, B) -> C + 'static, fa: A, fb: B) -> C {
        f(fa, fb)
    }
}

impl Monad for IdentityBrand {
    fn bind<A: Val, B: Val>(fa: A, f: impl Fn(A) -> B + 'static) -> B {
        f(fa)
    }
}

impl Comonad for IdentityBrand {
    fn extract<A: Val>(wa: A) -> A {
        wa
    }

    fn extend<A: Val, B: Val>(wa: A, f: impl Fn(A) -> B + 'static) -> B {
        f(wa)
    }
}

impl Distributive for IdentityBrand {
    fn distribute<X: Val, A: Val>(g: Func<X, A>) -> Func<X, A> {
        g
    }
}

// ─── Option ─────────────────────────────────────────────────────────────────

pub enum OptionBrand {}

impl Functor for OptionBrand {
    type Of<A: Val> = Option<A>;

    fn fmap<A: Val, B: Val>(f: impl Fn(A) -> B + 'static, fa: Option<A>) -> Option<B> {
        fa.map(f)
    }
}

impl Applicative for OptionBrand {
    fn pure<A: Val>(a: A) -> Option<A> {
        Some(a)
    }

    fn zip_with<A: Val, B: Val, C: Val>(
        f: impl Fn(A, B) -> C + 'static,
        fa: Option<A>,
        fb: Option<B>,
    ) -> Option<C> {
        Some(f(fa?, fb?))
    }
}

impl Monad for OptionBrand {
    fn bind<A: Val, B: Val>(fa: Option<A>, f: impl Fn(A) -> Option<B> + 'static) -> Option<B> {
        fa.and_then(f)
    }
}

// ─── Vec ────────────────────────────────────────────────────────────────────

/// Finite lists with the cartesian applicative.
pub enum VecBrand {}

impl Functor for VecBrand {
    type Of<A: Val> = Vec<A>;

    fn fmap<A: Val, B: Val>(f: impl Fn(A) -> B + 'static, fa: Vec<A>) -> Vec<B> {
        fa.into_iter().map(f).collect()
    }
}

impl Applicative for VecBrand {
    fn pure<A: Val>(a: A) -> Vec<A> {
        vec![a]
    }

    fn zip_with<A: Val, B: Val, C: Val>(
        f: impl Fn(A, B) -> C + 'static,
        fa: Vec<A>,
        fb: Vec<B>,
    ) -> Vec<C> {
        let mut out = Vec::with_capacity(fa.len() * fb.len());
        for a in &fa {
            for b in &fb {
                out.push(f(a.clone(), b.clone()));
            }
        }
        out
    }
}

impl Monad for VecBrand {
    fn bind<A: Val, B: Val>(fa: Vec<A>, f: impl Fn(A) -> Vec<B> + 'static) -> Vec<B> {
        fa.into_iter().flat_map(f).collect()
    }
}

// ─── Pair ───────────────────────────────────────────────────────────────────

/// `(A, A)`: the two-point representable functor.
///
/// Indexed by a single bit, so it is distributive, and its monad is the
/// diagonal one: `join ((a, b), (c, d)) = (a, d)`.
pub enum PairBrand {}

impl Functor for PairBrand {
    type Of<A: Val> = (A, A);

    fn fmap<A: Val, B: Val>(f: impl Fn(A) -> B + 'static, (x, y): (A, A)) -> (B, B) {
        (f(x), f(y))
    }
}

impl Applicative for PairBrand {
    fn pure<A: Val>(a: A) -> (A, A) {
        (a.clone(), a)
    }

    fn zip_with<A: Val, B: Val, C: Val>(
        f: impl Fn(A, B) -> C + 'static,
        (a0, a1): (A, A),
        (b0, b1): (B, B),
    ) -> (C, C) {
        (f(a0, b0), f(a1, b1))
    }
}

impl Monad for PairBrand {
    fn bind<A: Val, B: Val>((x, y): (A, A), f: impl Fn(A) -> (B, B) + 'static) -> (B, B) {
        (f(x).0, f(y).1)
    }
}

impl Distributive for PairBrand {
    fn distribute<X: Val, A: Val>(g: Func<X, (A, A)>) -> (Func<X, A>, Func<X, A>) {
        let h = g.clone();
        (func(move |x: X| g(x).0), func(move |x: X| h(x).1))
    }
}

// ─── Reader ─────────────────────────────────────────────────────────────────

/// `R → _`.
pub struct ReaderBrand<R>(PhantomData<R>);

impl<R: Val> Functor for ReaderBrand<R> {
    type Of<A: Val> = Func<R, A>;

    fn fmap<A: Val, B: Val>(f: impl Fn(A) -> B + 'static, fa: Func<R, A>) -> Func<R, B> {
        func(move |r: R| f(fa(r)))
    }
}

impl<R: Val> Applicative for ReaderBrand<R> {
    fn pure<A: Val>(a: A) -> Func<R, A> {
        func(move |_: R| a.clone())
    }

    fn zip_with<A: Val, B: Val, C: Val>(
        f: impl Fn(A, B) -> C + 'static,
        fa: Func<R, A>,
        fb: Func<R, B>,
    ) -> Func<R, C> {
        func(move |r: R| f(fa(r.clone()), fb(r)))
    }
}

impl<R: Val> Monad for ReaderBrand<R> {
    fn bind<A: Val, B: Val>(fa: Func<R, A>, f: impl Fn(A) -> Func<R, B> + 'static) -> Func<R, B> {
        func(move |r: R| f(fa(r.clone()))(r))
    }
}

impl<R: Val> Distributive for ReaderBrand<R> {
    fn distribute<X: Val, A: Val>(g: Func<X, Func<R, A>>) -> Func<R, Func<X, A>> {
        func(move |r: R| {
            let g = g.clone();
            func(move |x: X| g(x)(r.clone()))
        })
    }
}

// ─── Annotated ──────────────────────────────────────────────────────────────

/// `(E, _)`: a value carrying a read-only annotation; the environment comonad.
pub struct AnnotatedBrand<E>(PhantomData<E>);

impl<E: Val> Functor for AnnotatedBrand<E> {
    type Of<A: Val> = (E, A);

    fn fmap<A: Val, B: Val>(f: impl Fn(A) -> B + 'static, (e, a): (E, A)) -> (E, B) {
        (e, f(a))
    }
}

impl<E: Val> Comonad for AnnotatedBrand<E> {
    fn extract<A: Val>((_, a): (E, A)) -> A {
        a
    }

    fn extend<A: Val, B: Val>(wa: (E, A), f: impl Fn((E, A)) -> B + 'static) -> (E, B) {
        (wa.0.clone(), f(wa))
    }
}

// ─── Compose ────────────────────────────────────────────────────────────────

/// `F<G<_>>`.
pub struct ComposeBrand<F, G>(PhantomData<(F, G)>);

impl<F: Functor, G: Functor> Functor for ComposeBrand<F, G> {
    type Of<A: Val> = F::Of<G::Of<A>>;

    fn fmap<A: Val, B: Val>(f: impl Fn(A) -> B + 'static, fga: F::Of<G::Of<A>>) -> F::Of<G::Of<B>> {
        let f = Rc::new(f);
        F::fmap(
            move |ga: G::Of<A>| {
                let f = f.clone();
                G::fmap(move |a: A| f(a), ga)
            },
            fga,
        )
    }
}
