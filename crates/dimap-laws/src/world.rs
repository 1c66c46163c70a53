//! Worlds: the base profunctors a law suite is instantiated with.
//!
//! A world samples its own values over finite domains and observes them as
//! JSON, so two values are equal exactly when their observations are.
//!
//! | World | `Of<A, B>` | Expected verdict |
//! |---|---|---|
//! | `function` | `A → B` | accepted |
//! | `kleisli-pair` | `A → (B, B)` | accepted |
//! | `tally` | `A → (B, u32)`, every `dimap` bumps the count | rejected |

use crate::error::LawError;
use dimap_algebra::Closed;
use dimap_kernel::{
    Category, FnBrand, Finite, Func, KleisliBrand, Observe, PairBrand, Profunctor, Val, func,
    functions,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorldId {
    Function,
    KleisliPair,
    Tally,
}

impl WorldId {
    pub const ALL: [WorldId; 3] = [WorldId::Function, WorldId::KleisliPair, WorldId::Tally];

    pub fn as_str(self) -> &'static str {
        match self {
            WorldId::Function => "function",
            WorldId::KleisliPair => "kleisli-pair",
            WorldId::Tally => "tally",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WorldId::Function => "plain functions A -> B",
            WorldId::KleisliPair => "Kleisli arrows A -> (B, B) of the diagonal pair monad",
            WorldId::Tally => "functions that count their own adaptations (unlawful)",
        }
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorldId {
    type Err = LawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorldId::ALL
            .into_iter()
            .find(|world| world.as_str() == s)
            .ok_or_else(|| LawError::UnknownWorld(s.to_string()))
    }
}

/// A closed category with finite samples and an observation.
pub trait World: Closed + Category {
    const ID: WorldId;

    /// Up to `limit` values of `Of<A, B>`, in a fixed order.
    fn sample<A: Finite, B: Finite>(limit: usize) -> Vec<Self::Of<A, B>>;

    fn observe<A: Finite, B: Finite>(p: &Self::Of<A, B>) -> Value;
}

impl World for FnBrand {
    const ID: WorldId = WorldId::Function;

    fn sample<A: Finite, B: Finite>(limit: usize) -> Vec<Func<A, B>> {
        functions::<A, B>(limit)
    }

    fn observe<A: Finite, B: Finite>(p: &Func<A, B>) -> Value {
        p.observe()
    }
}

impl World for KleisliBrand<PairBrand> {
    const ID: WorldId = WorldId::KleisliPair;

    fn sample<A: Finite, B: Finite>(limit: usize) -> Vec<Func<A, (B, B)>> {
        functions::<A, (B, B)>(limit)
    }

    fn observe<A: Finite, B: Finite>(p: &Func<A, (B, B)>) -> Value {
        p.observe()
    }
}

/// Functions paired with a count of how often they were adapted.
///
/// `dimap` bumps the count, so `dimap(id, id)` is not the identity.
pub enum TallyBrand {}

impl Profunctor for TallyBrand {
    type Of<A: Val, B: Val> = Func<A, (B, u32)>;

    fn dimap<A: Val, B: Val, C: Val, D: Val>(
        f: impl Fn(C) -> A + 'static,
        g: impl Fn(B) -> D + 'static,
        p: Func<A, (B, u32)>,
    ) -> Func<C, (D, u32)> {
        func(move |c: C| {
            let (b, n) = p(f(c));
            (g(b), n + 1)
        })
    }
}

impl Closed for TallyBrand {
    fn closed<X: Val, A: Val, B: Val>(
        p: Func<A, (B, u32)>,
    ) -> Func<Func<X, A>, (Func<X, B>, u32)> {
        func(move |xa: Func<X, A>| {
            let p = p.clone();
            (func(move |x: X| p(xa(x)).0), 0)
        })
    }
}

impl Category for TallyBrand {
    fn id<A: Val>() -> Func<A, (A, u32)> {
        func(|a: A| (a, 0))
    }

    fn compose<A: Val, B: Val, C: Val>(
        g: Func<B, (C, u32)>,
        f: Func<A, (B, u32)>,
    ) -> Func<A, (C, u32)> {
        func(move |a: A| {
            let (b, m) = f(a);
            let (c, n) = g(b);
            (c, m + n)
        })
    }
}

impl World for TallyBrand {
    const ID: WorldId = WorldId::Tally;

    fn sample<A: Finite, B: Finite>(limit: usize) -> Vec<Func<A, (B, u32)>> {
        functions::<A, B>(limit)
            .into_iter()
            .map(|f| func(move |a: A| (f(a), 0)))
            .collect()
    }

    fn observe<A: Finite, B: Finite>(p: &Func<A, (B, u32)>) -> Value {
        p.observe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimap_kernel::{Three, Two};
    use serde_json::json;

    #[test]
    fn world_names_parse() {
        for world in WorldId::ALL {
            assert_eq!(world.as_str().parse::<WorldId>().unwrap(), world);
            assert_eq!(serde_json::to_value(world).unwrap(), world.as_str());
        }
        assert!(matches!(
            "reader".parse::<WorldId>(),
            Err(LawError::UnknownWorld(ref s)) if s == "reader"
        ));
    }

    #[test]
    fn samples_respect_the_limit() {
        assert_eq!(FnBrand::sample::<Two, Three>(usize::MAX).len(), 9);
        assert_eq!(FnBrand::sample::<Two, Three>(4).len(), 4);
        assert_eq!(KleisliBrand::<PairBrand>::sample::<Two, Two>(usize::MAX).len(), 16);
        assert_eq!(TallyBrand::sample::<Two, Two>(3).len(), 3);
    }

    #[test]
    fn tally_counts_adaptations() {
        let p = TallyBrand::id::<Two>();
        let adapted = TallyBrand::dimap(Two::flip, Two::flip, p.clone());
        assert_eq!(
            TallyBrand::observe::<Two, Two>(&adapted),
            json!([["low", 1], ["high", 1]])
        );
        assert_ne!(
            TallyBrand::observe::<Two, Two>(&adapted),
            TallyBrand::observe::<Two, Two>(&p)
        );
    }

    #[test]
    fn tally_composition_adds_counts() {
        let bump = TallyBrand::rmap(|t: Two| t, TallyBrand::id::<Two>());
        let twice = TallyBrand::compose(bump.clone(), bump);
        assert_eq!(twice(Two::High), (Two::High, 2));
    }
}
