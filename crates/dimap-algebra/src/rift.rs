//! Right Kan lifts.
//!
//! `Rift<P, Q, A, B>` is `∀X. P<B, X> → Q<A, X>`: the largest `R` whose
//! composite with `P` still lands in `Q`. `Procompose<P, _>` is left adjoint
//! to `Rift<P, _>`; [`decompose_rift`] is the counit and [`rift_unit`] the
//! unit.

use crate::nat::ProNat;
use crate::procompose::{Procompose, ProcomposeBrand};
use dimap_kernel::{Category, Func, Hidden, Profunctor, Val, func};
use std::marker::PhantomData;
use std::rc::Rc;

/// A `P<B, X> → Q<A, X>` for every `X`.
pub trait RiftBody<P: Profunctor, Q: Profunctor, A: Val, B: Val> {
    fn apply<X: Val>(&self, p: P::Of<B, X>) -> Q::Of<A, X>;
}

pub struct Rift<P: Profunctor, Q: Profunctor, A: Val, B: Val> {
    run: Func<P::Of<B, Hidden>, Q::Of<A, Hidden>>,
}

impl<P: Profunctor, Q: Profunctor, A: Val, B: Val> Clone for Rift<P, Q, A, B> {
    fn clone(&self) -> Self {
        Self {
            run: self.run.clone(),
        }
    }
}

pub struct RiftBrand<P, Q>(PhantomData<(P, Q)>);

impl<P: Profunctor, Q: Profunctor, A: Val, B: Val> Rift<P, Q, A, B> {
    pub fn new(body: impl RiftBody<P, Q, A, B> + 'static) -> Self {
        Self {
            run: func(move |p: P::Of<B, Hidden>| body.apply::<Hidden>(p)),
        }
    }

    fn from_run(run: impl Fn(P::Of<B, Hidden>) -> Q::Of<A, Hidden> + 'static) -> Self {
        Self { run: func(run) }
    }

    /// Instantiate at `X`.
    pub fn run<X: Val>(&self, p: P::Of<B, X>) -> Q::Of<A, X> {
        let hidden = P::rmap(|x: X| Hidden::conceal(x), p);
        Q::rmap(|h: Hidden| h.reveal::<X>(), (self.run)(hidden))
    }

    pub fn promap<R: Profunctor, N: ProNat<Q, R> + 'static>(&self, nat: N) -> Rift<P, R, A, B> {
        let run = self.run.clone();
        Rift::from_run(move |p: P::Of<B, Hidden>| nat.apply::<A, Hidden>(run(p)))
    }

    /// The counit: feed the identity arrow.
    pub fn proextract(&self) -> Q::Of<A, B>
    where
        P: Category,
    {
        self.run::<B>(P::id::<B>())
    }

    /// The comultiplication: split the argument into two composable halves.
    pub fn produplicate(&self) -> Rift<P, RiftBrand<P, Q>, A, B>
    where
        P: Category,
    {
        let run = self.run.clone();
        Rift::from_run(move |p: P::Of<B, Hidden>| {
            let run = run.clone();
            Rift::<P, Q, A, Hidden>::from_run(move |q: P::Of<Hidden, Hidden>| {
                run(P::compose(q, p.clone()))
            })
        })
    }
}

impl<P: Profunctor, Q: Profunctor> Profunctor for RiftBrand<P, Q> {
    type Of<A: Val, B: Val> = Rift<P, Q, A, B>;

    fn dimap<A: Val, B: Val, C: Val, D: Val>(
        f: impl Fn(C) -> A + 'static,
        g: impl Fn(B) -> D + 'static,
        p: Rift<P, Q, A, B>,
    ) -> Rift<P, Q, C, D> {
        let (f, g, run) = (Rc::new(f), Rc::new(g), p.run);
        Rift::from_run(move |pd: P::Of<D, Hidden>| {
            let (f, g) = (f.clone(), g.clone());
            Q::lmap(move |c: C| f(c), run(P::lmap(move |b: B| g(b), pd)))
        })
    }
}

impl<P: Profunctor> Category for RiftBrand<P, P> {
    fn id<A: Val>() -> Rift<P, P, A, A> {
        Rift::from_run(|p: P::Of<A, Hidden>| p)
    }

    fn compose<A: Val, B: Val, C: Val>(
        g: Rift<P, P, B, C>,
        f: Rift<P, P, A, B>,
    ) -> Rift<P, P, A, C> {
        Rift::from_run(move |p: P::Of<C, Hidden>| (f.run)((g.run)(p)))
    }
}

/// The counit of `Procompose<P, _> ⊣ Rift<P, _>`: evaluate the lift at the
/// arrow it was paired with.
pub fn decompose_rift<P: Profunctor, Q: Profunctor, D: Val, C: Val>(
    p: Procompose<P, RiftBrand<P, Q>, D, C>,
) -> Q::Of<D, C> {
    let (pxc, rift) = p.parts();
    rift.run::<C>(pxc)
}

/// The unit of `Procompose<P, _> ⊣ Rift<P, _>`.
pub fn rift_unit<P: Profunctor, Q: Profunctor, A: Val, B: Val>(
    q: Q::Of<A, B>,
) -> Rift<P, ProcomposeBrand<P, Q>, A, B> {
    Rift::from_run(move |p: P::Of<B, Hidden>| {
        Procompose::<P, Q, A, Hidden>::new::<B>(p, q.clone())
    })
}

/// `(Procompose<P, Q> :-> R) → (Q :-> Rift<P, R>)`.
pub fn curry_rift<P, Q, R, A, B, N>(nat: N, q: Q::Of<A, B>) -> Rift<P, R, A, B>
where
    P: Profunctor,
    Q: Profunctor,
    R: Profunctor,
    A: Val,
    B: Val,
    N: ProNat<ProcomposeBrand<P, Q>, R> + 'static,
{
    Rift::from_run(move |p: P::Of<B, Hidden>| {
        nat.apply::<A, Hidden>(Procompose::<P, Q, A, Hidden>::new::<B>(p, q.clone()))
    })
}

/// `(Q :-> Rift<P, R>) → (Procompose<P, Q> :-> R)`.
pub fn uncurry_rift<P, Q, R, D, C, N>(nat: &N, p: Procompose<P, Q, D, C>) -> R::Of<D, C>
where
    P: Profunctor,
    Q: Profunctor,
    R: Profunctor,
    D: Val,
    C: Val,
    N: ProNat<Q, RiftBrand<P, R>>,
{
    let (pxc, qdx) = p.parts();
    nat.apply::<D, Hidden>(qdx).run::<C>(pxc)
}

/// [`decompose_rift`] as a transformation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiftCounit;

impl<P: Profunctor, Q: Profunctor> ProNat<ProcomposeBrand<P, RiftBrand<P, Q>>, Q> for RiftCounit {
    fn apply<A: Val, B: Val>(&self, p: Procompose<P, RiftBrand<P, Q>, A, B>) -> Q::Of<A, B> {
        decompose_rift::<P, Q, A, B>(p)
    }
}

/// [`rift_unit`] as a transformation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiftUnit;

impl<P: Profunctor, Q: Profunctor> ProNat<Q, RiftBrand<P, ProcomposeBrand<P, Q>>> for RiftUnit {
    fn apply<A: Val, B: Val>(&self, q: Q::Of<A, B>) -> Rift<P, ProcomposeBrand<P, Q>, A, B> {
        rift_unit::<P, Q, A, B>(q)
    }
}

/// [`Rift::proextract`] as a transformation `Rift<P, Q> :-> Q`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiftExtract;

impl<P: Category, Q: Profunctor> ProNat<RiftBrand<P, Q>, Q> for RiftExtract {
    fn apply<A: Val, B: Val>(&self, r: Rift<P, Q, A, B>) -> Q::Of<A, B> {
        r.proextract()
    }
}
