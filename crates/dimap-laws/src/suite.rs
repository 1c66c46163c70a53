//! The law suite.
//!
//! Each law is checked exhaustively over the `Two`/`Three` domains, with
//! every quantified variable capped at `max_samples` generated values. A
//! law stops at its first counterexample, which becomes one witness.

use crate::law::LawId;
use crate::profile::LawProfile;
use crate::witness::{LawFailure, LawReport};
use crate::world::{TallyBrand, World, WorldId};
use dimap_algebra::{
    Arr, Close, Closure, ClosureBrand, ClosureExtract, Environment, EnvironmentBrand,
    EnvironmentCounit, EnvironmentUnit, Id, ProNat, Procompose, ProcomposeBrand, Procomposed, Rift,
    RiftBrand, RiftCounit, RiftExtract, RiftUnit, Unclose, assoc, close, cokleislis, counit,
    curry_rift, decompose_rift, downs, idl, idr, kleislis, procomposed, proreturn, rift_unit,
    unclose, unit, ups,
};
use dimap_kernel::{
    AnnotatedBrand, CokleisliBrand, CostarBrand, FnBrand, Func, KleisliBrand, Observe,
    OptionBrand, PairBrand, StarBrand, Three, Two, compose, func, functions,
};
use serde_json::{Value, json};
use tracing::{debug, info, info_span, warn};

/// The first failing instance of a law.
#[derive(Debug, Clone, PartialEq)]
pub struct Counterexample {
    /// Index of the failing case, in enumeration order.
    pub case: usize,
    pub expected: Value,
    pub actual: Value,
}

type Verdict = Result<(), Counterexample>;

#[derive(Default)]
struct Cases {
    next: usize,
}

impl Cases {
    fn check(&mut self, expected: Value, actual: Value) -> Verdict {
        let case = self.next;
        self.next += 1;
        if expected == actual {
            Ok(())
        } else {
            Err(Counterexample {
                case,
                expected,
                actual,
            })
        }
    }
}

/// Run the profile's laws against `world`.
pub fn run_law_suite(world: WorldId, profile: &LawProfile) -> LawReport {
    match world {
        WorldId::Function => run_in::<FnBrand>(profile),
        WorldId::KleisliPair => run_in::<KleisliBrand<PairBrand>>(profile),
        WorldId::Tally => run_in::<TallyBrand>(profile),
    }
}

/// Run the profile's laws against the world `W`.
pub fn run_in<W: World>(profile: &LawProfile) -> LawReport {
    let world = W::ID;
    let _span = info_span!("law_suite", %world, profile = %profile.profile).entered();
    info!(
        laws = profile.laws.len(),
        max_samples = profile.max_samples,
        "running law suite"
    );

    let mut failures = Vec::new();
    for &law in &profile.laws {
        match check_law::<W>(law, profile.max_samples) {
            Ok(()) => debug!(%law, "law holds"),
            Err(cx) => {
                warn!(%law, law_ref = law.law_ref(), case = cx.case, "law violated");
                failures.push(witness(world, law, cx));
            }
        }
    }

    let laws = profile.laws.iter().map(|l| l.as_str().to_string()).collect();
    info!(failures = failures.len(), "law suite finished");
    if failures.is_empty() {
        LawReport::accepted(&profile.profile, world.as_str(), laws)
    } else {
        LawReport::rejected(&profile.profile, world.as_str(), laws, failures)
    }
}

fn witness(world: WorldId, law: LawId, cx: Counterexample) -> LawFailure {
    LawFailure::new(
        law.class(),
        law.law_ref(),
        format!("{law} does not hold: {}", law.statement()),
        Some(law.as_str().to_string()),
        Some(json!({"world": world.as_str(), "case": cx.case})),
    )
    .with_details(json!({"expected": cx.expected, "actual": cx.actual}))
}

/// Check one law in world `W`.
pub fn check_law<W: World>(law: LawId, limit: usize) -> Verdict {
    match law {
        LawId::ProfunctorIdentity => profunctor_identity::<W>(limit),
        LawId::ProfunctorComposition => profunctor_composition::<W>(limit),
        LawId::ClosedNaturality => closed_naturality::<W>(limit),
        LawId::CloseUnclose => close_unclose::<W>(limit),
        LawId::Idl => idl_round_trips::<W>(limit),
        LawId::Idr => idr_round_trips::<W>(limit),
        LawId::Assoc => assoc_round_trips::<W>(limit),
        LawId::Ups => ups_square(limit),
        LawId::Downs => downs_square(limit),
        LawId::Kleislis => kleislis_square(limit),
        LawId::Cokleislis => cokleislis_square(limit),
        LawId::EnvironmentAdjunction => environment_triangles::<W>(limit),
        LawId::ClosureComonad => closure_comonad::<W>(limit),
        LawId::RiftAdjunction => rift_triangles::<W>(limit),
        LawId::RiftComonad => rift_comonad::<W>(limit),
    }
}

fn observe2<W: World>(p: &W::Of<Two, Two>) -> Value {
    W::observe::<Two, Two>(p)
}

/// A closure observed at the two-element index.
fn observe_closure<W: World>(c: &Closure<W, Two, Two>) -> Value {
    W::observe::<Func<Two, Two>, Func<Two, Two>>(&c.run::<Two>())
}

/// A lift observed by running it against every sampled argument.
fn lift_runs<W: World>(r: &Rift<W, W, Two, Two>, limit: usize) -> Value {
    W::sample::<Two, Two>(limit)
        .into_iter()
        .map(|p| observe2::<W>(&r.run::<Two>(p)))
        .collect()
}

fn profunctor_identity<W: World>(limit: usize) -> Verdict {
    let mut cases = Cases::default();
    for p in W::sample::<Two, Three>(limit) {
        let same = W::dimap::<Two, Three, Two, Three>(|a: Two| a, |b: Three| b, p.clone());
        cases.check(
            W::observe::<Two, Three>(&p),
            W::observe::<Two, Three>(&same),
        )?;
    }
    Ok(())
}

fn profunctor_composition<W: World>(limit: usize) -> Verdict {
    let arrows = functions::<Two, Two>(limit);
    let n = arrows.len();
    let mut cases = Cases::default();
    for p in W::sample::<Two, Two>(limit) {
        for index in 0..n.pow(4) {
            let pick = |k: u32| arrows[(index / n.pow(k)) % n].clone();
            let (f, g, h, i) = (pick(0), pick(1), pick(2), pick(3));

            let (fg, hi) = (compose(f.clone(), g.clone()), compose(h.clone(), i.clone()));
            let fused = W::dimap::<Two, Two, Two, Two>(move |c| fg(c), move |b| hi(b), p.clone());
            let inner = W::dimap::<Two, Two, Two, Two>(move |c| f(c), move |b| i(b), p.clone());
            let staged = W::dimap::<Two, Two, Two, Two>(move |c| g(c), move |b| h(b), inner);
            cases.check(observe2::<W>(&fused), observe2::<W>(&staged))?;
        }
    }
    Ok(())
}

fn closed_naturality<W: World>(limit: usize) -> Verdict {
    let mut cases = Cases::default();
    for p in W::sample::<Two, Two>(limit) {
        for h in functions::<Two, Three>(limit) {
            let h2 = h.clone();
            let lhs = W::rmap::<Func<Three, Two>, Func<Three, Two>, Func<Two, Two>>(
                move |xb: Func<Three, Two>| compose(xb, h.clone()),
                W::closed::<Three, Two, Two>(p.clone()),
            );
            let rhs = W::lmap::<Func<Two, Two>, Func<Two, Two>, Func<Three, Two>>(
                move |xa: Func<Three, Two>| compose(xa, h2.clone()),
                W::closed::<Two, Two, Two>(p.clone()),
            );
            cases.check(
                W::observe::<Func<Three, Two>, Func<Two, Two>>(&lhs),
                W::observe::<Func<Three, Two>, Func<Two, Two>>(&rhs),
            )?;
        }
    }
    Ok(())
}

fn close_unclose<W: World>(limit: usize) -> Verdict {
    let mut cases = Cases::default();
    for p in W::sample::<Two, Two>(limit) {
        let back = unclose::<W, W, Two, Two, _>(&Close(Id), p.clone());
        cases.check(observe2::<W>(&p), observe2::<W>(&back))?;

        let round = close::<W, W, Two, Two, _>(&Unclose(Close(Id)), p.clone());
        let direct = Closure::<W, Two, Two>::lift(p);
        cases.check(observe_closure(&direct), observe_closure(&round))?;
    }
    close_unclose_arrows::<W>(limit, &mut cases)
}

/// The round trips for `arr: (->) :-> W`, which is not the identity.
fn close_unclose_arrows<W: World>(limit: usize, cases: &mut Cases) -> Verdict {
    for f in functions::<Two, Two>(limit) {
        let direct: W::Of<Two, Two> = ProNat::<FnBrand, W>::apply(&Arr, f.clone());
        let back = unclose::<FnBrand, W, Two, Two, _>(&Close(Arr), f.clone());
        cases.check(observe2::<W>(&direct), observe2::<W>(&back))?;

        let wrapped: Closure<W, Two, Two> =
            ProNat::<FnBrand, ClosureBrand<W>>::apply(&Close(Arr), f.clone());
        let round = close::<FnBrand, W, Two, Two, _>(&Unclose(Close(Arr)), f);
        cases.check(observe_closure(&wrapped), observe_closure(&round))?;
    }
    Ok(())
}

fn idl_round_trips<W: World>(limit: usize) -> Verdict {
    let iso = idl::<W, Two, Two>();
    let arrows = functions::<Two, Two>(limit);
    let mut cases = Cases::default();
    for q in W::sample::<Two, Two>(limit) {
        let back = iso.to(iso.from(q.clone()));
        cases.check(observe2::<W>(&q), observe2::<W>(&back))?;
        for f in &arrows {
            let pc = Procompose::<FnBrand, W, Two, Two>::new::<Two>(f.clone(), q.clone());
            let once = iso.to(pc);
            let twice = iso.to(iso.from(once.clone()));
            cases.check(observe2::<W>(&once), observe2::<W>(&twice))?;
        }
    }
    Ok(())
}

fn idr_round_trips<W: World>(limit: usize) -> Verdict {
    let iso = idr::<W, Two, Two>();
    let arrows = functions::<Two, Two>(limit);
    let mut cases = Cases::default();
    for q in W::sample::<Two, Two>(limit) {
        let back = iso.to(iso.from(q.clone()));
        cases.check(observe2::<W>(&q), observe2::<W>(&back))?;
        for f in &arrows {
            let pc = Procompose::<W, FnBrand, Two, Two>::new::<Two>(q.clone(), f.clone());
            let once = iso.to(pc);
            let twice = iso.to(iso.from(once.clone()));
            cases.check(observe2::<W>(&once), observe2::<W>(&twice))?;
        }
    }
    Ok(())
}

fn collapse_nested<W: World>(p: Procompose<W, ProcomposeBrand<W, W>, Two, Two>) -> W::Of<Two, Two> {
    let flat: Procompose<W, W, Two, Two> = p.promap_second(&Procomposed);
    procomposed::<W, Two, Two>(flat)
}

fn collapse_flipped<W: World>(p: Procompose<ProcomposeBrand<W, W>, W, Two, Two>) -> W::Of<Two, Two> {
    let flat: Procompose<W, W, Two, Two> = p.promap_first(&Procomposed);
    procomposed::<W, Two, Two>(flat)
}

fn assoc_round_trips<W: World>(limit: usize) -> Verdict {
    let iso = assoc::<W, W, W, Two, Two>();
    let samples = W::sample::<Two, Two>(limit);
    let mut cases = Cases::default();
    for f in &samples {
        for g in &samples {
            for h in &samples {
                let inner = Procompose::<W, W, Two, Two>::new::<Two>(g.clone(), h.clone());
                let nested =
                    Procompose::<W, ProcomposeBrand<W, W>, Two, Two>::new::<Two>(f.clone(), inner);
                let expected = observe2::<W>(&collapse_nested::<W>(nested.clone()));

                let flipped = iso.to(nested);
                cases.check(
                    expected.clone(),
                    observe2::<W>(&collapse_flipped::<W>(flipped.clone())),
                )?;
                cases.check(
                    expected,
                    observe2::<W>(&collapse_nested::<W>(iso.from(flipped))),
                )?;
            }
        }
    }
    Ok(())
}

fn ups_square(limit: usize) -> Verdict {
    let iso = ups::<OptionBrand, PairBrand, Two, Two>();
    let mut cases = Cases::default();
    for first in functions::<Two, Option<Two>>(limit) {
        for second in functions::<Two, (Two, Two)>(limit) {
            let pc = Procompose::<StarBrand<OptionBrand>, StarBrand<PairBrand>, Two, Two>::new::<
                Two,
            >(first.clone(), second.clone());
            let fused = iso.to(pc);
            let first = first.clone();
            let direct = func(move |d: Two| {
                let (x, y) = second(d);
                (first(x), first(y))
            });
            cases.check(direct.observe(), fused.observe())?;
            cases.check(fused.observe(), iso.to(iso.from(fused.clone())).observe())?;
        }
    }
    Ok(())
}

fn downs_square(limit: usize) -> Verdict {
    let iso = downs::<OptionBrand, OptionBrand, Two, Two>();
    let mut cases = Cases::default();
    for first in functions::<Option<Two>, Two>(limit) {
        for second in functions::<Option<Two>, Two>(limit) {
            let pc = Procompose::<CostarBrand<OptionBrand>, CostarBrand<OptionBrand>, Two, Two>::new::<
                Two,
            >(first.clone(), second.clone());
            let fused = iso.to(pc);
            let first = first.clone();
            let direct = func(move |oo: Option<Option<Two>>| first(oo.map(|o| second(o))));
            cases.check(direct.observe(), fused.observe())?;
            cases.check(fused.observe(), iso.to(iso.from(fused.clone())).observe())?;
        }
    }
    Ok(())
}

fn kleislis_square(limit: usize) -> Verdict {
    let iso = kleislis::<PairBrand, OptionBrand, Two, Two>();
    let mut cases = Cases::default();
    for first in functions::<Two, (Two, Two)>(limit) {
        for second in functions::<Two, Option<Two>>(limit) {
            let pc = Procompose::<KleisliBrand<PairBrand>, KleisliBrand<OptionBrand>, Two, Two>::new::<
                Two,
            >(first.clone(), second.clone());
            let fused = iso.to(pc);
            let first = first.clone();
            let direct = func(move |d: Two| second(d).map(|x| first(x)));
            cases.check(direct.observe(), fused.observe())?;
            cases.check(fused.observe(), iso.to(iso.from(fused.clone())).observe())?;
        }
    }
    Ok(())
}

fn cokleislis_square(limit: usize) -> Verdict {
    type Outer = AnnotatedBrand<Two>;
    type Inner = AnnotatedBrand<bool>;
    let iso = cokleislis::<Outer, Inner, Two, Two>();
    let mut cases = Cases::default();
    for first in functions::<(Two, Two), Two>(limit) {
        for second in functions::<(bool, Two), Two>(limit) {
            let pc = Procompose::<CokleisliBrand<Outer>, CokleisliBrand<Inner>, Two, Two>::new::<
                Two,
            >(first.clone(), second.clone());
            let fused = iso.to(pc);
            let first = first.clone();
            let direct = func(move |(e, bd): (Two, (bool, Two))| first((e, second(bd))));
            cases.check(direct.observe(), fused.observe())?;
            cases.check(fused.observe(), iso.to(iso.from(fused.clone())).observe())?;
        }
    }
    Ok(())
}

fn environment_triangles<W: World>(limit: usize) -> Verdict {
    let mut cases = Cases::default();
    for p in W::sample::<Two, Two>(limit) {
        let c = Closure::<W, Two, Two>::lift(p.clone());
        let there: Closure<EnvironmentBrand<ClosureBrand<W>>, Two, Two> =
            unit::<ClosureBrand<W>, Two, Two>(c.clone());
        let back: Closure<W, Two, Two> = there.promap(&EnvironmentCounit);
        cases.check(observe_closure(&c), observe_closure(&back))?;

        let env = proreturn::<W, Two, Two>(p);
        let lifted: Environment<ClosureBrand<EnvironmentBrand<W>>, Two, Two> =
            env.promap(&EnvironmentUnit);
        let restored: Environment<W, Two, Two> = counit::<EnvironmentBrand<W>, Two, Two>(lifted);
        cases.check(
            observe2::<W>(&env.collapse()),
            observe2::<W>(&restored.collapse()),
        )?;
    }
    Ok(())
}

fn closure_comonad<W: World>(limit: usize) -> Verdict {
    let mut cases = Cases::default();
    for p in W::sample::<Two, Two>(limit) {
        let c = Closure::<W, Two, Two>::lift(p);
        let expected = observe_closure(&c);
        cases.check(expected.clone(), observe_closure(&c.duplicate().extract()))?;
        let mapped: Closure<W, Two, Two> = c.duplicate().promap(&ClosureExtract);
        cases.check(expected, observe_closure(&mapped))?;
    }
    Ok(())
}

/// The lift that precomposes `q`.
fn precompose<W: World>(q: W::Of<Two, Two>) -> Rift<W, W, Two, Two> {
    curry_rift::<W, W, W, Two, Two, _>(Procomposed, q)
}

fn rift_triangles<W: World>(limit: usize) -> Verdict {
    let samples = W::sample::<Two, Two>(limit);
    let mut cases = Cases::default();
    for p in &samples {
        for q in &samples {
            let pc = Procompose::<W, W, Two, Two>::new::<Two>(p.clone(), q.clone());
            let lifted: Procompose<W, RiftBrand<W, ProcomposeBrand<W, W>>, Two, Two> =
                pc.promap_second(&RiftUnit);
            let restored: Procompose<W, W, Two, Two> =
                decompose_rift::<W, ProcomposeBrand<W, W>, Two, Two>(lifted);
            cases.check(
                observe2::<W>(&procomposed::<W, Two, Two>(pc)),
                observe2::<W>(&procomposed::<W, Two, Two>(restored)),
            )?;
        }
    }
    for q in samples {
        let r = precompose::<W>(q);
        let wrapped = rift_unit::<W, RiftBrand<W, W>, Two, Two>(r.clone());
        let back: Rift<W, W, Two, Two> = wrapped.promap(RiftCounit);
        cases.check(lift_runs(&r, limit), lift_runs(&back, limit))?;
    }
    Ok(())
}

fn rift_comonad<W: World>(limit: usize) -> Verdict {
    let mut cases = Cases::default();
    for q in W::sample::<Two, Two>(limit) {
        let r = precompose::<W>(q);
        let expected = lift_runs(&r, limit);
        cases.check(expected.clone(), lift_runs(&r.produplicate().proextract(), limit))?;
        let mapped: Rift<W, W, Two, Two> = r.produplicate().promap(RiftExtract);
        cases.check(expected, lift_runs(&mapped, limit))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: usize = 4;

    #[test]
    fn function_world_satisfies_every_law() {
        for law in LawId::ALL {
            assert_eq!(check_law::<FnBrand>(law, SMALL), Ok(()), "{law}");
        }
    }

    #[test]
    fn kleisli_pair_world_satisfies_every_law() {
        for law in LawId::ALL {
            assert_eq!(check_law::<KleisliBrand<PairBrand>>(law, SMALL), Ok(()), "{law}");
        }
    }

    #[test]
    fn tally_breaks_identity_on_the_first_case() {
        let cx = check_law::<TallyBrand>(LawId::ProfunctorIdentity, SMALL).unwrap_err();
        assert_eq!(cx.case, 0);
        assert_ne!(cx.expected, cx.actual);
    }

    #[test]
    fn tally_breaks_composition() {
        assert!(check_law::<TallyBrand>(LawId::ProfunctorComposition, SMALL).is_err());
    }

    #[test]
    fn fixed_functor_laws_hold_in_every_world() {
        for law in [LawId::Ups, LawId::Downs, LawId::Kleislis, LawId::Cokleislis] {
            assert_eq!(check_law::<TallyBrand>(law, SMALL), Ok(()), "{law}");
        }
    }

    #[test]
    fn close_unclose_arrows_hold_in_lawful_worlds() {
        assert_eq!(close_unclose_arrows::<FnBrand>(SMALL, &mut Cases::default()), Ok(()));
        assert_eq!(
            close_unclose_arrows::<KleisliBrand<PairBrand>>(SMALL, &mut Cases::default()),
            Ok(())
        );
    }

    #[test]
    fn close_unclose_arrows_see_extra_dimaps_in_tally() {
        let cx = close_unclose_arrows::<TallyBrand>(SMALL, &mut Cases::default()).unwrap_err();
        assert_eq!(cx.case, 0);
        assert_ne!(cx.expected, cx.actual);
    }

    #[test]
    fn cases_report_first_mismatch() {
        let mut cases = Cases::default();
        assert!(cases.check(json!(1), json!(1)).is_ok());
        let cx = cases.check(json!(1), json!(2)).unwrap_err();
        assert_eq!(cx.case, 1);
    }
}
