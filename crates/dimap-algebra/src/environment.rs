//! The free closed profunctor.
//!
//! An `Environment<P, A, B>` is an explicit decomposition
//!
//! ```text
//! output : (Z → Y) → B
//! core   : P<X, Y>
//! input  : A → Z → X
//! ```
//!
//! with `X`, `Y`, `Z` hidden. It is left adjoint to [`Closure`]: the counit
//! runs the pieces through a closure's family, the unit wraps a plain value
//! with identity adapters.

use crate::closed::Closed;
use crate::closure::{Closure, ClosureBrand};
use crate::nat::ProNat;
use dimap_kernel::{Func, Hidden, Profunctor, Val, constant, func};
use std::marker::PhantomData;

pub struct Environment<P: Profunctor, A: Val, B: Val> {
    output: Func<Func<Hidden, Hidden>, B>,
    core: P::Of<Hidden, Hidden>,
    input: Func<A, Func<Hidden, Hidden>>,
}

impl<P: Profunctor, A: Val, B: Val> Clone for Environment<P, A, B> {
    fn clone(&self) -> Self {
        Self {
            output: self.output.clone(),
            core: self.core.clone(),
            input: self.input.clone(),
        }
    }
}

pub struct EnvironmentBrand<P>(PhantomData<P>);

impl<P: Profunctor, A: Val, B: Val> Environment<P, A, B> {
    pub fn new<X: Val, Y: Val, Z: Val>(
        output: impl Fn(Func<Z, Y>) -> B + 'static,
        core: P::Of<X, Y>,
        input: impl Fn(A) -> Func<Z, X> + 'static,
    ) -> Self {
        let core = P::dimap(
            |x: Hidden| x.reveal::<X>(),
            |y: Y| Hidden::conceal(y),
            core,
        );
        let output = func(move |zy: Func<Hidden, Hidden>| {
            output(func(move |z: Z| zy(Hidden::conceal(z)).reveal::<Y>()))
        });
        let input = func(move |a: A| {
            let zx = input(a);
            func(move |z: Hidden| Hidden::conceal(zx(z.reveal::<Z>())))
        });
        Self {
            output,
            core,
            input,
        }
    }

    pub fn promap<Q: Profunctor, N: ProNat<P, Q>>(&self, nat: &N) -> Environment<Q, A, B> {
        Environment {
            output: self.output.clone(),
            core: nat.apply::<Hidden, Hidden>(self.core.clone()),
            input: self.input.clone(),
        }
    }

    /// Read the triple back as a plain value through `closed`.
    pub fn collapse(&self) -> P::Of<A, B>
    where
        P: Closed,
    {
        let (input, output) = (self.input.clone(), self.output.clone());
        P::dimap(
            move |a: A| input(a),
            move |zy: Func<Hidden, Hidden>| output(zy),
            P::closed::<Hidden, Hidden, Hidden>(self.core.clone()),
        )
    }
}

/// Wrap a plain value with trivial adapters over the unit index.
pub fn proreturn<P: Profunctor, A: Val, B: Val>(p: P::Of<A, B>) -> Environment<P, A, B> {
    Environment::new::<A, B, ()>(
        |ub: Func<(), B>| ub(()),
        p,
        |a: A| constant::<(), A>(a),
    )
}

/// Flatten a nested environment; the outer and inner indices pair up.
pub fn projoin<P: Profunctor, A: Val, B: Val>(
    env: Environment<EnvironmentBrand<P>, A, B>,
) -> Environment<P, A, B> {
    let Environment {
        output: outer_output,
        core: nested,
        input: outer_input,
    } = env;
    let Environment {
        output: inner_output,
        core,
        input: inner_input,
    } = nested;

    let output = func(move |f: Func<Hidden, Hidden>| {
        let inner_output = inner_output.clone();
        outer_output(func(move |z: Hidden| {
            let f = f.clone();
            inner_output(func(move |w: Hidden| f(Hidden::conceal((z.clone(), w)))))
        }))
    });
    let input = func(move |a: A| {
        let (zx, inner_input) = (outer_input(a), inner_input.clone());
        func(move |zw: Hidden| {
            let (z, w) = zw.reveal::<(Hidden, Hidden)>();
            inner_input(zx(z))(w)
        })
    });
    Environment {
        output,
        core,
        input,
    }
}

impl<P: Profunctor> Profunctor for EnvironmentBrand<P> {
    type Of<A: Val, B: Val> = Environment<P, A, B>;

    fn dimap<A: Val, B: Val, C: Val, D: Val>(
        f: impl Fn(C) -> A + 'static,
        g: impl Fn(B) -> D + 'static,
        p: Environment<P, A, B>,
    ) -> Environment<P, C, D> {
        let (output, input) = (p.output, p.input);
        Environment {
            output: func(move |zy: Func<Hidden, Hidden>| g(output(zy))),
            core: p.core,
            input: func(move |c: C| input(f(c))),
        }
    }
}

impl<P: Profunctor> Closed for EnvironmentBrand<P> {
    fn closed<X: Val, A: Val, B: Val>(
        p: Environment<P, A, B>,
    ) -> Environment<P, Func<X, A>, Func<X, B>> {
        let (output, input) = (p.output, p.input);
        let output = func(move |zy: Func<Hidden, Hidden>| {
            let output = output.clone();
            func(move |x: X| {
                let zy = zy.clone();
                output(func(move |z: Hidden| zy(Hidden::conceal((z, x.clone())))))
            })
        });
        let input = func(move |xa: Func<X, A>| {
            let input = input.clone();
            func(move |zx: Hidden| {
                let (z, x) = zx.reveal::<(Hidden, X)>();
                input(xa(x))(z)
            })
        });
        Environment {
            output,
            core: p.core,
            input,
        }
    }
}

/// The counit of `Environment ⊣ Closure`.
pub fn counit<Q: Profunctor, A: Val, B: Val>(
    env: Environment<ClosureBrand<Q>, A, B>,
) -> Q::Of<A, B> {
    let (input, output) = (env.input, env.output);
    Q::dimap(
        move |a: A| input(a),
        move |zy: Func<Hidden, Hidden>| output(zy),
        env.core.inner,
    )
}

/// The unit of `Environment ⊣ Closure`.
pub fn unit<P: Profunctor, A: Val, B: Val>(
    p: P::Of<A, B>,
) -> Closure<EnvironmentBrand<P>, A, B> {
    Closure {
        inner: Environment::new::<A, B, Hidden>(
            |zy: Func<Hidden, B>| zy,
            p,
            |xa: Func<Hidden, A>| xa,
        ),
    }
}

/// `(Environment<P> :-> Q) → (P :-> Closure<Q>)`.
pub fn curry_environment<P, Q, A, B, N>(nat: &N, p: P::Of<A, B>) -> Closure<Q, A, B>
where
    P: Profunctor,
    Q: Profunctor,
    A: Val,
    B: Val,
    N: ProNat<EnvironmentBrand<P>, Q>,
{
    unit::<P, A, B>(p).promap(nat)
}

/// `(P :-> Closure<Q>) → (Environment<P> :-> Q)`.
pub fn uncurry_environment<P, Q, A, B, N>(nat: &N, env: Environment<P, A, B>) -> Q::Of<A, B>
where
    P: Profunctor,
    Q: Profunctor,
    A: Val,
    B: Val,
    N: ProNat<P, ClosureBrand<Q>>,
{
    counit::<Q, A, B>(env.promap(nat))
}

/// [`counit`] as a transformation.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentCounit;

impl<Q: Profunctor> ProNat<EnvironmentBrand<ClosureBrand<Q>>, Q> for EnvironmentCounit {
    fn apply<A: Val, B: Val>(&self, env: Environment<ClosureBrand<Q>, A, B>) -> Q::Of<A, B> {
        counit::<Q, A, B>(env)
    }
}

/// [`unit`] as a transformation.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentUnit;

impl<P: Profunctor> ProNat<P, ClosureBrand<EnvironmentBrand<P>>> for EnvironmentUnit {
    fn apply<A: Val, B: Val>(&self, p: P::Of<A, B>) -> Closure<EnvironmentBrand<P>, A, B> {
        unit::<P, A, B>(p)
    }
}

/// [`proreturn`] as a transformation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Proreturn;

impl<P: Profunctor> ProNat<P, EnvironmentBrand<P>> for Proreturn {
    fn apply<A: Val, B: Val>(&self, p: P::Of<A, B>) -> Environment<P, A, B> {
        proreturn::<P, A, B>(p)
    }
}
