//! The `Procompose<P, _> ⊣ Rift<P, _>` triangle identities and the Rift
//! comonad laws, with `P` and `Q` plain functions over two- and
//! three-element domains.

use dimap_algebra::{
    Procompose, ProcomposeBrand, Procomposed, Rift, RiftBody, RiftBrand, RiftCounit, RiftExtract,
    RiftUnit, curry_rift, decompose_rift, procomposed, rift_unit, uncurry_rift,
};
use dimap_kernel::{
    FnBrand, Func, Observe, Profunctor, Three, Two, Val, func, functions, table_function,
};
use proptest::prelude::*;

type Fns<D, C> = Procompose<FnBrand, FnBrand, D, C>;

struct Precompose<A: Val, B: Val>(Func<A, B>);

impl<A: Val, B: Val> RiftBody<FnBrand, FnBrand, A, B> for Precompose<A, B> {
    fn apply<X: Val>(&self, p: Func<B, X>) -> Func<A, X> {
        let f = self.0.clone();
        func(move |a: A| p(f(a)))
    }
}

fn three() -> impl Strategy<Value = Three> {
    prop_oneof![Just(Three::Low), Just(Three::Mid), Just(Three::High)]
}

/// Observe a lift by running it against every arrow out of `Three` into
/// `Two`.
fn runs_of(r: &Rift<FnBrand, FnBrand, Two, Three>) -> Vec<serde_json::Value> {
    functions::<Three, Two>(usize::MAX)
        .into_iter()
        .map(|p| r.run::<Two>(p).observe())
        .collect()
}

/// Observe an endo-lift by running it against every arrow out of `Three`
/// into `Two`.
fn runs_of_endo(r: &Rift<FnBrand, FnBrand, Three, Three>) -> Vec<serde_json::Value> {
    functions::<Three, Two>(usize::MAX)
        .into_iter()
        .map(|p| r.run::<Two>(p).observe())
        .collect()
}

fn lookup(table: &[Three]) -> impl Fn(Three) -> Three + 'static {
    let table = table.to_vec();
    move |t: Three| table[t as usize]
}

fn after(g: &[Three], f: &[Three]) -> impl Fn(Three) -> Three + 'static {
    let (g, f) = (lookup(g), lookup(f));
    move |t: Three| g(f(t))
}

proptest! {
    #[test]
    fn rift_identity(f in prop::collection::vec(three(), 3)) {
        let r = Rift::<FnBrand, FnBrand, Three, Three>::new(Precompose(table_function(f)));
        let q = RiftBrand::<FnBrand, FnBrand>::dimap(|a: Three| a, |b: Three| b, r.clone());
        prop_assert_eq!(runs_of_endo(&q), runs_of_endo(&r));
    }

    #[test]
    fn rift_composition(
        p in prop::collection::vec(three(), 3),
        f in prop::collection::vec(three(), 3),
        g in prop::collection::vec(three(), 3),
        h in prop::collection::vec(three(), 3),
        i in prop::collection::vec(three(), 3),
    ) {
        type R = RiftBrand<FnBrand, FnBrand>;
        let r = Rift::<FnBrand, FnBrand, Three, Three>::new(Precompose(table_function(p)));
        let lhs = R::dimap(after(&f, &g), after(&h, &i), r.clone());
        let rhs = R::dimap(lookup(&g), lookup(&h), R::dimap(lookup(&f), lookup(&i), r));
        prop_assert_eq!(runs_of_endo(&lhs), runs_of_endo(&rhs));
    }

    #[test]
    fn rift_over_composites_identity(f in prop::collection::vec(three(), 3)) {
        type Q = ProcomposeBrand<FnBrand, FnBrand>;
        let r = rift_unit::<FnBrand, FnBrand, Three, Three>(table_function(f));
        let q = RiftBrand::<FnBrand, Q>::dimap(|a: Three| a, |b: Three| b, r.clone());
        for p in functions::<Three, Two>(usize::MAX) {
            prop_assert_eq!(
                procomposed(q.run::<Two>(p.clone())).observe(),
                procomposed(r.run::<Two>(p)).observe()
            );
        }
    }

    #[test]
    fn procompose_side_triangle(f in prop::collection::vec(three(), 3), g in prop::collection::vec(three(), 2)) {
        let pc = Fns::<Two, Three>::new::<Three>(table_function(f), table_function(g));
        let lifted: Procompose<FnBrand, RiftBrand<FnBrand, ProcomposeBrand<FnBrand, FnBrand>>, Two, Three> =
            pc.promap_second(&RiftUnit);
        let restored: Fns<Two, Three> =
            decompose_rift::<FnBrand, ProcomposeBrand<FnBrand, FnBrand>, Two, Three>(lifted);
        prop_assert_eq!(procomposed(restored).observe(), procomposed(pc).observe());
    }

    #[test]
    fn rift_side_triangle(f in prop::collection::vec(three(), 2)) {
        let r = Rift::<FnBrand, FnBrand, Two, Three>::new(Precompose(table_function(f)));
        let wrapped = rift_unit::<FnBrand, RiftBrand<FnBrand, FnBrand>, Two, Three>(r.clone());
        let back: Rift<FnBrand, FnBrand, Two, Three> = wrapped.promap(RiftCounit);
        prop_assert_eq!(runs_of(&back), runs_of(&r));
    }

    #[test]
    fn rift_comonad_laws(f in prop::collection::vec(three(), 2)) {
        let r = Rift::<FnBrand, FnBrand, Two, Three>::new(Precompose(table_function(f)));
        let left = r.produplicate().proextract();
        prop_assert_eq!(runs_of(&left), runs_of(&r));
        let right: Rift<FnBrand, FnBrand, Two, Three> = r.produplicate().promap(RiftExtract);
        prop_assert_eq!(runs_of(&right), runs_of(&r));
    }

    #[test]
    fn curry_and_uncurry_are_inverse(f in prop::collection::vec(three(), 3), g in prop::collection::vec(three(), 2)) {
        let pc = Fns::<Two, Three>::new::<Three>(table_function(f), table_function(g));
        let direct = procomposed(pc.clone());
        let back: Func<Two, Three> =
            uncurry_rift::<FnBrand, FnBrand, FnBrand, Two, Three, _>(&CurryProcomposed, pc);
        prop_assert_eq!(back.observe(), direct.observe());
    }
}

#[test]
fn unit_then_counit_on_every_two_to_three_arrow() {
    for q in functions::<Two, Three>(usize::MAX) {
        for p in functions::<Three, Three>(usize::MAX) {
            let pc = Fns::<Two, Three>::new::<Three>(p, q.clone());
            let expected = procomposed(pc.clone()).observe();
            let lifted: Procompose<
                FnBrand,
                RiftBrand<FnBrand, ProcomposeBrand<FnBrand, FnBrand>>,
                Two,
                Three,
            > = pc.promap_second(&RiftUnit);
            let restored = decompose_rift::<FnBrand, ProcomposeBrand<FnBrand, FnBrand>, Two, Three>(
                lifted,
            );
            assert_eq!(procomposed(restored).observe(), expected);
        }
    }
}

/// `curry_rift(procomposed)`: a plain arrow as the lift that precomposes it.
struct CurryProcomposed;

impl dimap_algebra::ProNat<FnBrand, RiftBrand<FnBrand, FnBrand>> for CurryProcomposed {
    fn apply<A: Val, B: Val>(&self, q: Func<A, B>) -> Rift<FnBrand, FnBrand, A, B> {
        curry_rift::<FnBrand, FnBrand, FnBrand, A, B, _>(Procomposed, q)
    }
}
