//! The cofree closed profunctor.
//!
//! `Closure<P, A, B>` holds, for every domain `X`, a `P<X → A, X → B>`. The
//! quantified value is stored once, instantiated at [`Hidden`], and
//! restricted to a concrete `X` by [`Closure::run`]. Construction goes
//! through [`ClosureFamily`], whose single generic method is not meant to
//! inspect the domain it is asked for.

use crate::closed::Closed;
use crate::nat::ProNat;
use dimap_kernel::{Category, Func, Hidden, Profunctor, Strong, Val, constant, func};
use std::marker::PhantomData;
use std::rc::Rc;

/// A `P<X → A, X → B>` for every `X`.
///
/// [`Closure::new`] calls `at` once, at [`Hidden`]. A family that branches
/// on `X` (through `TypeId`, say) sees that carrier, never the domain later
/// passed to [`Closure::run`].
pub trait ClosureFamily<P: Profunctor, A: Val, B: Val> {
    fn at<X: Val>(&self) -> P::Of<Func<X, A>, Func<X, B>>;
}

pub struct Closure<P: Profunctor, A: Val, B: Val> {
    pub(crate) inner: P::Of<Func<Hidden, A>, Func<Hidden, B>>,
}

impl<P: Profunctor, A: Val, B: Val> Clone for Closure<P, A, B> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// The brand of [`Closure<P, _, _>`].
pub struct ClosureBrand<P>(PhantomData<P>);

struct Lifted<P: Profunctor, A: Val, B: Val>(P::Of<A, B>);

impl<P: Closed, A: Val, B: Val> ClosureFamily<P, A, B> for Lifted<P, A, B> {
    fn at<X: Val>(&self) -> P::Of<Func<X, A>, Func<X, B>> {
        P::closed::<X, A, B>(self.0.clone())
    }
}

impl<P: Profunctor, A: Val, B: Val> Closure<P, A, B> {
    pub fn new(family: impl ClosureFamily<P, A, B>) -> Self {
        Self {
            inner: family.at::<Hidden>(),
        }
    }

    /// The family `X ↦ closed::<X>(p)`.
    pub fn lift(p: P::Of<A, B>) -> Self
    where
        P: Closed,
    {
        Self::new(Lifted::<P, A, B>(p))
    }

    /// The member of the family at domain `X`.
    pub fn run<X: Val>(&self) -> P::Of<Func<X, A>, Func<X, B>> {
        P::dimap(
            |xa: Func<X, A>| func(move |h: Hidden| xa(h.reveal::<X>())),
            |hb: Func<Hidden, B>| func(move |x: X| hb(Hidden::conceal(x))),
            self.inner.clone(),
        )
    }

    /// The counit: run at the unit domain and evaluate.
    pub fn extract(&self) -> P::Of<A, B> {
        P::dimap(
            |a: A| constant::<(), A>(a),
            |ub: Func<(), B>| ub(()),
            self.run::<()>(),
        )
    }

    /// The comultiplication: a family of families, indexed by the pair of
    /// both domains.
    pub fn duplicate(&self) -> Closure<ClosureBrand<P>, A, B> {
        let inner = P::dimap(
            |yxa: Func<Hidden, Func<Hidden, A>>| {
                func(move |yx: Hidden| {
                    let (y, x) = yx.reveal::<(Hidden, Hidden)>();
                    yxa(y)(x)
                })
            },
            |hb: Func<Hidden, B>| {
                func(move |y: Hidden| {
                    let hb = hb.clone();
                    func(move |x: Hidden| hb(Hidden::conceal((y.clone(), x))))
                })
            },
            self.inner.clone(),
        );
        Closure {
            inner: Closure { inner },
        }
    }

    pub fn promap<Q: Profunctor, N: ProNat<P, Q>>(&self, nat: &N) -> Closure<Q, A, B> {
        Closure {
            inner: nat.apply::<Func<Hidden, A>, Func<Hidden, B>>(self.inner.clone()),
        }
    }
}

impl<P: Profunctor> Profunctor for ClosureBrand<P> {
    type Of<A: Val, B: Val> = Closure<P, A, B>;

    fn dimap<A: Val, B: Val, C: Val, D: Val>(
        f: impl Fn(C) -> A + 'static,
        g: impl Fn(B) -> D + 'static,
        p: Closure<P, A, B>,
    ) -> Closure<P, C, D> {
        let (f, g) = (Rc::new(f), Rc::new(g));
        let inner = P::dimap(
            move |hc: Func<Hidden, C>| {
                let f = f.clone();
                func(move |h: Hidden| f(hc(h)))
            },
            move |hb: Func<Hidden, B>| {
                let g = g.clone();
                func(move |h: Hidden| g(hb(h)))
            },
            p.inner,
        );
        Closure { inner }
    }
}

impl<P: Profunctor> Closed for ClosureBrand<P> {
    fn closed<X: Val, A: Val, B: Val>(p: Closure<P, A, B>) -> Closure<P, Func<X, A>, Func<X, B>> {
        p.duplicate().run::<X>()
    }
}

impl<P: Strong> Strong for ClosureBrand<P> {
    fn first<A: Val, B: Val, C: Val>(p: Closure<P, A, B>) -> Closure<P, (A, C), (B, C)> {
        let inner = P::dimap(
            |hac: Func<Hidden, (A, C)>| -> (Func<Hidden, A>, Func<Hidden, C>) {
                let hac2 = hac.clone();
                (
                    func(move |h: Hidden| hac(h).0),
                    func(move |h: Hidden| hac2(h).1),
                )
            },
            |(hb, hc): (Func<Hidden, B>, Func<Hidden, C>)| {
                func(move |h: Hidden| (hb(h.clone()), hc(h)))
            },
            P::first::<Func<Hidden, A>, Func<Hidden, B>, Func<Hidden, C>>(p.inner),
        );
        Closure { inner }
    }
}

impl<P: Category> Category for ClosureBrand<P> {
    fn id<A: Val>() -> Closure<P, A, A> {
        Closure {
            inner: P::id::<Func<Hidden, A>>(),
        }
    }

    fn compose<A: Val, B: Val, C: Val>(
        g: Closure<P, B, C>,
        f: Closure<P, A, B>,
    ) -> Closure<P, A, C> {
        Closure {
            inner: P::compose(g.inner, f.inner),
        }
    }
}

/// `close(nat)(p) = Closure(nat(closed(p)))`.
pub fn close<P, Q, A, B, N>(nat: &N, p: P::Of<A, B>) -> Closure<Q, A, B>
where
    P: Closed,
    Q: Profunctor,
    A: Val,
    B: Val,
    N: ProNat<P, Q>,
{
    Closure {
        inner: nat.apply::<Func<Hidden, A>, Func<Hidden, B>>(P::closed::<Hidden, A, B>(p)),
    }
}

/// `unclose(nat)(p) = extract(nat(p))`; inverse to [`close`].
pub fn unclose<P, Q, A, B, N>(nat: &N, p: P::Of<A, B>) -> Q::Of<A, B>
where
    P: Profunctor,
    Q: Profunctor,
    A: Val,
    B: Val,
    N: ProNat<P, ClosureBrand<Q>>,
{
    nat.apply::<A, B>(p).extract()
}

/// [`close`] as a transformation.
pub struct Close<N>(pub N);

impl<P: Closed, Q: Profunctor, N: ProNat<P, Q>> ProNat<P, ClosureBrand<Q>> for Close<N> {
    fn apply<A: Val, B: Val>(&self, p: P::Of<A, B>) -> Closure<Q, A, B> {
        close::<P, Q, A, B, N>(&self.0, p)
    }
}

/// [`unclose`] as a transformation.
pub struct Unclose<N>(pub N);

impl<P: Profunctor, Q: Profunctor, N: ProNat<P, ClosureBrand<Q>>> ProNat<P, Q> for Unclose<N> {
    fn apply<A: Val, B: Val>(&self, p: P::Of<A, B>) -> Q::Of<A, B> {
        unclose::<P, Q, A, B, N>(&self.0, p)
    }
}

/// [`Closure::extract`] as a transformation `Closure<P> :-> P`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosureExtract;

impl<P: Profunctor> ProNat<ClosureBrand<P>, P> for ClosureExtract {
    fn apply<A: Val, B: Val>(&self, p: Closure<P, A, B>) -> P::Of<A, B> {
        p.extract()
    }
}
