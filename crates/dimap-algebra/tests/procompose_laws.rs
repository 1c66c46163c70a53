//! Generated checks of the composition isomorphisms.

use dimap_algebra::{
    Closed, Procompose, ProcomposeBrand, Procomposed, assoc, cokleislis, downs, idl, idr, kleislis,
    procomposed, ups,
};
use dimap_kernel::{
    AnnotatedBrand, CokleisliBrand, CostarBrand, FnBrand, Func, KleisliBrand, Observe,
    OptionBrand, PairBrand, Profunctor, StarBrand, Three, Two, VecBrand, func, table_function,
};
use proptest::prelude::*;

fn three() -> impl Strategy<Value = Three> {
    prop_oneof![Just(Three::Low), Just(Three::Mid), Just(Three::High)]
}

fn table(len: usize) -> impl Strategy<Value = Vec<Three>> {
    prop::collection::vec(three(), len)
}

type Fns<D, C> = Procompose<FnBrand, FnBrand, D, C>;

type FnsBrand = ProcomposeBrand<FnBrand, FnBrand>;

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
    fn idl_round_trips(q in table(2), f in table(3), g in table(2)) {
        let iso = idl::<FnBrand, Two, Three>();
        let q: Func<Two, Three> = table_function(q);
        prop_assert_eq!(iso.to(iso.from(q.clone())).observe(), q.observe());

        let pc = Fns::<Two, Three>::new::<Three>(table_function(f), table_function(g));
        let expected = procomposed(pc.clone()).observe();
        prop_assert_eq!(procomposed(iso.from(iso.to(pc))).observe(), expected);
    }

    #[test]
    fn idr_round_trips(q in table(2), f in table(3), g in table(2)) {
        let iso = idr::<FnBrand, Two, Three>();
        let q: Func<Two, Three> = table_function(q);
        prop_assert_eq!(iso.to(iso.from(q.clone())).observe(), q.observe());

        let pc = Fns::<Two, Three>::new::<Three>(table_function(f), table_function(g));
        let expected = procomposed(pc.clone()).observe();
        prop_assert_eq!(procomposed(iso.from(iso.to(pc))).observe(), expected);
    }

    #[test]
    fn procompose_identity(f in table(3), g in table(3)) {
        let pc = Fns::<Three, Three>::new::<Three>(table_function(f), table_function(g));
        let q = FnsBrand::dimap(|a: Three| a, |b: Three| b, pc.clone());
        prop_assert_eq!(procomposed(q).observe(), procomposed(pc).observe());
    }

    #[test]
    fn procompose_composition(
        p in table(3), q in table(3),
        f in table(3), g in table(3), h in table(3), i in table(3),
    ) {
        let pc = Fns::<Three, Three>::new::<Three>(table_function(p), table_function(q));
        let lhs = FnsBrand::dimap(after(&f, &g), after(&h, &i), pc.clone());
        let rhs = FnsBrand::dimap(lookup(&g), lookup(&h), FnsBrand::dimap(lookup(&f), lookup(&i), pc));
        prop_assert_eq!(procomposed(lhs).observe(), procomposed(rhs).observe());
    }

    #[test]
    fn procompose_over_kleisli_composition(
        lo in table(3), hi in table(3), q in table(3),
        f in table(3), g in table(3), h in table(3), i in table(3),
    ) {
        type K = KleisliBrand<PairBrand>;
        type KK = ProcomposeBrand<K, K>;
        let (lo, hi): (Func<Three, Three>, Func<Three, Three>) = (table_function(lo), table_function(hi));
        let q: Func<Three, Three> = table_function(q);
        let first: Func<Three, (Three, Three)> = func(move |t: Three| (lo(t), hi(t)));
        let second: Func<Three, (Three, Three)> = func(move |t: Three| (q(t), q(t).next()));
        let pc = Procompose::<K, K, Three, Three>::new::<Three>(first, second);
        let lhs = KK::dimap(after(&f, &g), after(&h, &i), pc.clone());
        let rhs = KK::dimap(lookup(&g), lookup(&h), KK::dimap(lookup(&f), lookup(&i), pc.clone()));
        prop_assert_eq!(procomposed(lhs).observe(), procomposed(rhs).observe());
        let same = KK::dimap(|a: Three| a, |b: Three| b, pc.clone());
        prop_assert_eq!(procomposed(same).observe(), procomposed(pc).observe());
    }

    #[test]
    fn procompose_closed_is_natural(f in table(3), g in table(3), h in table(2)) {
        let pc = Fns::<Three, Three>::new::<Three>(table_function(f), table_function(g));
        let h: Func<Two, Three> = table_function(h);
        let h2 = h.clone();
        let lhs = FnsBrand::rmap(
            move |xb: Func<Three, Three>| { let h = h.clone(); func(move |y: Two| xb(h(y))) },
            FnsBrand::closed::<Three, Three, Three>(pc.clone()),
        );
        let rhs = FnsBrand::lmap(
            move |xa: Func<Three, Three>| { let h = h2.clone(); func(move |y: Two| xa(h(y))) },
            FnsBrand::closed::<Two, Three, Three>(pc),
        );
        prop_assert_eq!(procomposed(lhs).observe(), procomposed(rhs).observe());
    }

    #[test]
    fn assoc_round_trips(f in table(3), g in table(3), h in table(2)) {
        type Nested = Procompose<FnBrand, ProcomposeBrand<FnBrand, FnBrand>, Two, Three>;
        type Flipped = Procompose<ProcomposeBrand<FnBrand, FnBrand>, FnBrand, Two, Three>;
        let inner = Fns::<Two, Three>::new::<Three>(table_function(g), table_function(h));
        let nested = Nested::new::<Three>(table_function(f), inner);
        let iso = assoc::<FnBrand, FnBrand, FnBrand, Two, Three>();

        let collapse_nested = |p: Nested| procomposed(p.promap_second(&Procomposed));
        let collapse_flipped = |p: Flipped| procomposed(p.promap_first(&Procomposed));

        let expected = collapse_nested(nested.clone()).observe();
        prop_assert_eq!(collapse_flipped(iso.to(nested.clone())).observe(), expected.clone());
        prop_assert_eq!(collapse_nested(iso.from(iso.to(nested))).observe(), expected);
    }

    #[test]
    fn ups_square_on_option_and_vec(
        f in prop::collection::vec(prop::option::of(three()), 3),
        lens in prop::collection::vec(0usize..3, 2),
    ) {
        let first: Func<Three, Option<Three>> = table_function(f);
        let second: Func<Two, Vec<Three>> = func(move |t: Two| {
            Three::ALL.iter().copied().take(lens[t as usize]).collect()
        });
        let pc = Procompose::<StarBrand<OptionBrand>, StarBrand<VecBrand>, Two, Three>::new::<Three>(
            first.clone(),
            second.clone(),
        );
        let iso = ups::<OptionBrand, VecBrand, Two, Three>();
        let star = iso.to(pc);
        // composing the functor actions directly
        let direct = func(move |t: Two| second(t).into_iter().map(|x| first(x)).collect::<Vec<_>>());
        prop_assert_eq!(star.observe(), direct.observe());
        prop_assert_eq!(iso.to(iso.from(star.clone())).observe(), star.observe());
    }

    #[test]
    fn downs_square_on_option_and_vec(
        f in prop::collection::vec(three(), 4),
        g in prop::collection::vec(three(), 4),
    ) {
        let first: Func<Option<Three>, Three> = table_function(f);
        let second: Func<Option<Two>, Three> = {
            let g: Func<Option<Three>, Three> = table_function(g);
            func(move |o: Option<Two>| g(o.map(|t| if t == Two::Low { Three::Low } else { Three::High })))
        };
        let pc = Procompose::<CostarBrand<OptionBrand>, CostarBrand<OptionBrand>, Two, Three>::new::<Three>(
            first.clone(),
            second.clone(),
        );
        let iso = downs::<OptionBrand, OptionBrand, Two, Three>();
        let costar = iso.to(pc);
        let direct = func(move |oo: Option<Option<Two>>| first(oo.map(|o| second(o))));
        prop_assert_eq!(costar.observe(), direct.observe());
        prop_assert_eq!(iso.to(iso.from(costar.clone())).observe(), costar.observe());
    }

    #[test]
    fn kleislis_square_on_pairs(a in table(3), b in table(3), c in table(2), d in table(2)) {
        let (a, b): (Func<Three, Three>, Func<Three, Three>) = (table_function(a), table_function(b));
        let (c, d): (Func<Two, Three>, Func<Two, Three>) = (table_function(c), table_function(d));
        let first: Func<Three, (Three, Three)> = func(move |t: Three| (a(t), b(t)));
        let second: Func<Two, Option<Three>> =
            func(move |t: Two| if c(t) == Three::Low { None } else { Some(d(t)) });
        let pc = Procompose::<KleisliBrand<PairBrand>, KleisliBrand<OptionBrand>, Two, Three>::new::<Three>(
            first.clone(),
            second.clone(),
        );
        let iso = kleislis::<PairBrand, OptionBrand, Two, Three>();
        let k = iso.to(pc);
        let direct = func(move |t: Two| second(t).map(|x| first(x)));
        prop_assert_eq!(k.observe(), direct.observe());
        prop_assert_eq!(iso.to(iso.from(k.clone())).observe(), k.observe());
    }
}

#[test]
fn cokleislis_square_on_annotations() {
    type W = AnnotatedBrand<Two>;
    let first: Func<(Two, Three), Three> =
        func(|(e, h): (Two, Three)| if e == Two::High { h.next() } else { h });
    let second: Func<(bool, Two), Three> =
        func(|(b, t): (bool, Two)| if b && t == Two::High { Three::High } else { Three::Low });
    let pc = Procompose::<CokleisliBrand<W>, CokleisliBrand<AnnotatedBrand<bool>>, Two, Three>::new::<Three>(
        first.clone(),
        second.clone(),
    );
    let iso = cokleislis::<W, AnnotatedBrand<bool>, Two, Three>();
    let k = iso.to(pc);
    for e in Two::ALL {
        for b in [false, true] {
            for t in Two::ALL {
                assert_eq!(k((e, (b, t))), first((e, second((b, t)))));
            }
        }
    }
    let back = iso.to(iso.from(k.clone()));
    assert_eq!(back((Two::High, (true, Two::High))), k((Two::High, (true, Two::High))));
}
