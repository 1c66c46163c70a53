//! Profunctor composition.
//!
//! `Procompose<P, Q, D, C>` is `∃X. (P<X, C>, Q<D, X>)`: read right to left,
//! a `Q` arrow out of `D` feeding a `P` arrow into `C`. The intermediate type
//! is erased to [`Hidden`] on construction, so the two halves only ever meet
//! each other.

use crate::closed::Closed;
use crate::nat::ProNat;
use dimap_kernel::{
    Category, Choice, CokleisliBrand, ComposeBrand, CostarBrand, Either, FnBrand, Func, Functor,
    Hidden, Iso, KleisliBrand, Profunctor, StarBrand, Strong, Val, func,
};
use std::marker::PhantomData;

pub struct Procompose<P: Profunctor, Q: Profunctor, D: Val, C: Val> {
    first: P::Of<Hidden, C>,
    second: Q::Of<D, Hidden>,
}

impl<P: Profunctor, Q: Profunctor, D: Val, C: Val> Clone for Procompose<P, Q, D, C> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
        }
    }
}

pub struct ProcomposeBrand<P, Q>(PhantomData<(P, Q)>);

impl<P: Profunctor, Q: Profunctor, D: Val, C: Val> Procompose<P, Q, D, C> {
    /// Compose through the intermediate type `X`.
    pub fn new<X: Val>(first: P::Of<X, C>, second: Q::Of<D, X>) -> Self {
        Self {
            first: P::lmap(|h: Hidden| h.reveal::<X>(), first),
            second: Q::rmap(|x: X| Hidden::conceal(x), second),
        }
    }

    pub fn promap_first<R: Profunctor, N: ProNat<P, R>>(&self, nat: &N) -> Procompose<R, Q, D, C> {
        Procompose {
            first: nat.apply::<Hidden, C>(self.first.clone()),
            second: self.second.clone(),
        }
    }

    pub fn promap_second<R: Profunctor, N: ProNat<Q, R>>(
        &self,
        nat: &N,
    ) -> Procompose<P, R, D, C> {
        Procompose {
            first: self.first.clone(),
            second: nat.apply::<D, Hidden>(self.second.clone()),
        }
    }

    /// Both halves at the hidden type.
    pub(crate) fn parts(self) -> (P::Of<Hidden, C>, Q::Of<D, Hidden>) {
        (self.first, self.second)
    }

    pub(crate) fn from_parts(first: P::Of<Hidden, C>, second: Q::Of<D, Hidden>) -> Self {
        Self { first, second }
    }
}

impl<P: Profunctor, Q: Profunctor> Profunctor for ProcomposeBrand<P, Q> {
    type Of<A: Val, B: Val> = Procompose<P, Q, A, B>;

    fn dimap<A: Val, B: Val, C: Val, D: Val>(
        f: impl Fn(C) -> A + 'static,
        g: impl Fn(B) -> D + 'static,
        p: Procompose<P, Q, A, B>,
    ) -> Procompose<P, Q, C, D> {
        Procompose {
            first: P::rmap(g, p.first),
            second: Q::lmap(f, p.second),
        }
    }
}

impl<P: Strong, Q: Strong> Strong for ProcomposeBrand<P, Q> {
    fn first<A: Val, B: Val, C: Val>(
        p: Procompose<P, Q, A, B>,
    ) -> Procompose<P, Q, (A, C), (B, C)> {
        Procompose::new::<(Hidden, C)>(
            P::first::<Hidden, B, C>(p.first),
            Q::first::<A, Hidden, C>(p.second),
        )
    }
}

impl<P: Choice, Q: Choice> Choice for ProcomposeBrand<P, Q> {
    fn left<A: Val, B: Val, C: Val>(
        p: Procompose<P, Q, A, B>,
    ) -> Procompose<P, Q, Either<A, C>, Either<B, C>> {
        Procompose::new::<Either<Hidden, C>>(
            P::left::<Hidden, B, C>(p.first),
            Q::left::<A, Hidden, C>(p.second),
        )
    }
}

impl<P: Closed, Q: Closed> Closed for ProcomposeBrand<P, Q> {
    fn closed<X: Val, A: Val, B: Val>(
        p: Procompose<P, Q, A, B>,
    ) -> Procompose<P, Q, Func<X, A>, Func<X, B>> {
        Procompose::new::<Func<X, Hidden>>(
            P::closed::<X, Hidden, B>(p.first),
            Q::closed::<X, A, Hidden>(p.second),
        )
    }
}

/// Collapse two arrows of one category into their composite.
pub fn procomposed<P: Category, D: Val, C: Val>(p: Procompose<P, P, D, C>) -> P::Of<D, C> {
    P::compose(p.first, p.second)
}

/// Plain functions are a left identity: `Procompose<(->), Q> ≅ Q`.
pub fn idl<Q: Profunctor, D: Val, C: Val>() -> Iso<Procompose<FnBrand, Q, D, C>, Q::Of<D, C>> {
    Iso::new(
        |p: Procompose<FnBrand, Q, D, C>| {
            let (xc, dx) = p.parts();
            Q::rmap(move |x: Hidden| xc(x), dx)
        },
        |q: Q::Of<D, C>| Procompose::<FnBrand, Q, D, C>::new::<C>(func(|c: C| c), q),
    )
}

/// Plain functions are a right identity: `Procompose<Q, (->)> ≅ Q`.
pub fn idr<Q: Profunctor, D: Val, C: Val>() -> Iso<Procompose<Q, FnBrand, D, C>, Q::Of<D, C>> {
    Iso::new(
        |p: Procompose<Q, FnBrand, D, C>| {
            let (xc, dx) = p.parts();
            Q::lmap(move |d: D| dx(d), xc)
        },
        |q: Q::Of<D, C>| Procompose::<Q, FnBrand, D, C>::new::<D>(q, func(|d: D| d)),
    )
}

/// The associator.
pub fn assoc<P: Profunctor, Q: Profunctor, R: Profunctor, D: Val, C: Val>() -> Iso<
    Procompose<P, ProcomposeBrand<Q, R>, D, C>,
    Procompose<ProcomposeBrand<P, Q>, R, D, C>,
> {
    Iso::new(
        |p: Procompose<P, ProcomposeBrand<Q, R>, D, C>| {
            let (xc, dx) = p.parts();
            let (yx, dy) = dx.parts();
            let pq: Procompose<P, Q, Hidden, C> = Procompose::from_parts(xc, yx);
            Procompose::from_parts(pq, dy)
        },
        |p: Procompose<ProcomposeBrand<P, Q>, R, D, C>| {
            let (yc, dy) = p.parts();
            let (xc, yx) = yc.parts();
            let qr: Procompose<Q, R, D, Hidden> = Procompose::from_parts(yx, dy);
            Procompose::from_parts(xc, qr)
        },
    )
}

/// Two stars compose to a star over the composite functor.
pub fn ups<F: Functor, G: Functor, D: Val, C: Val>() -> Iso<
    Procompose<StarBrand<F>, StarBrand<G>, D, C>,
    Func<D, G::Of<F::Of<C>>>,
> {
    Iso::new(
        |p: Procompose<StarBrand<F>, StarBrand<G>, D, C>| {
            let (xfc, dgx) = p.parts();
            func(move |d: D| {
                let xfc = xfc.clone();
                G::fmap(move |x: Hidden| xfc(x), dgx(d))
            })
        },
        |dgfc: Func<D, G::Of<F::Of<C>>>| {
            Procompose::<StarBrand<F>, StarBrand<G>, D, C>::new::<F::Of<C>>(
                func(|fc: F::Of<C>| fc),
                dgfc,
            )
        },
    )
}

/// Two costars compose to a costar over the composite functor.
pub fn downs<F: Functor, G: Functor, D: Val, C: Val>() -> Iso<
    Procompose<CostarBrand<F>, CostarBrand<G>, D, C>,
    Func<F::Of<G::Of<D>>, C>,
> {
    Iso::new(
        |p: Procompose<CostarBrand<F>, CostarBrand<G>, D, C>| {
            let (fxc, gdx) = p.parts();
            func(move |fgd: F::Of<G::Of<D>>| {
                let gdx = gdx.clone();
                fxc(F::fmap(move |gd: G::Of<D>| gdx(gd), fgd))
            })
        },
        |fgdc: Func<F::Of<G::Of<D>>, C>| {
            Procompose::<CostarBrand<F>, CostarBrand<G>, D, C>::new::<G::Of<D>>(
                fgdc,
                func(|gd: G::Of<D>| gd),
            )
        },
    )
}

/// [`ups`] for Kleisli arrows.
pub fn kleislis<F: Functor, G: Functor, D: Val, C: Val>() -> Iso<
    Procompose<KleisliBrand<F>, KleisliBrand<G>, D, C>,
    <KleisliBrand<ComposeBrand<G, F>> as Profunctor>::Of<D, C>,
> {
    let stars = ups::<F, G, D, C>();
    let (to, from) = (stars.forward, stars.backward);
    Iso::new(
        move |p: Procompose<KleisliBrand<F>, KleisliBrand<G>, D, C>| {
            let (xfc, dgx) = p.parts();
            let star: Procompose<StarBrand<F>, StarBrand<G>, D, C> =
                Procompose::from_parts(xfc, dgx);
            to(star)
        },
        move |dgfc: Func<D, G::Of<F::Of<C>>>| -> Procompose<KleisliBrand<F>, KleisliBrand<G>, D, C> {
            let (xfc, dgx) = from(dgfc).parts();
            Procompose::from_parts(xfc, dgx)
        },
    )
}

/// [`downs`] for co-Kleisli arrows.
pub fn cokleislis<F: Functor, G: Functor, D: Val, C: Val>() -> Iso<
    Procompose<CokleisliBrand<F>, CokleisliBrand<G>, D, C>,
    <CokleisliBrand<ComposeBrand<F, G>> as Profunctor>::Of<D, C>,
> {
    let costars = downs::<F, G, D, C>();
    let (to, from) = (costars.forward, costars.backward);
    Iso::new(
        move |p: Procompose<CokleisliBrand<F>, CokleisliBrand<G>, D, C>| {
            let (fxc, gdx) = p.parts();
            let costar: Procompose<CostarBrand<F>, CostarBrand<G>, D, C> =
                Procompose::from_parts(fxc, gdx);
            to(costar)
        },
        move |fgdc: Func<F::Of<G::Of<D>>, C>| -> Procompose<CokleisliBrand<F>, CokleisliBrand<G>, D, C> {
            let (fxc, gdx) = from(fgdc).parts();
            Procompose::from_parts(fxc, gdx)
        },
    )
}

/// [`procomposed`] as a transformation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Procomposed;

impl<P: Category> ProNat<ProcomposeBrand<P, P>, P> for Procomposed {
    fn apply<A: Val, B: Val>(&self, p: Procompose<P, P, A, B>) -> P::Of<A, B> {
        procomposed::<P, A, B>(p)
    }
}
