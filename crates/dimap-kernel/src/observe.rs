//! Extensional observation over finite domains.
//!
//! Profunctor values are mostly functions, so equality is extensional: two
//! arrows are the same when they agree on every input. [`Finite`] types list
//! every inhabitant, which makes that check exhaustive, and [`Observe`]
//! renders a value (a function as its table) into JSON so observations can
//! be compared and attached to witnesses.

use crate::value::{Either, Func, Val, func};
use serde_json::{Value, json};

pub trait Observe {
    fn observe(&self) -> Value;
}

/// Types with an exhaustive, duplicate-free universe.
///
/// `universe()[i].ordinal() == i` for every index.
pub trait Finite: Val + Observe {
    fn universe() -> Vec<Self>;

    fn ordinal(&self) -> usize;

    fn cardinality() -> usize {
        Self::universe().len()
    }
}

/// The two-element domain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Two {
    Low,
    High,
}

/// The three-element domain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Three {
    Low,
    Mid,
    High,
}

impl Two {
    pub const ALL: [Two; 2] = [Two::Low, Two::High];

    pub fn label(self) -> &'static str {
        match self {
            Two::Low => "low",
            Two::High => "high",
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Two::Low => Two::High,
            Two::High => Two::Low,
        }
    }
}

impl Three {
    pub const ALL: [Three; 3] = [Three::Low, Three::Mid, Three::High];

    pub fn label(self) -> &'static str {
        match self {
            Three::Low => "low",
            Three::Mid => "mid",
            Three::High => "high",
        }
    }

    /// Cyclic successor.
    pub fn next(self) -> Self {
        match self {
            Three::Low => Three::Mid,
            Three::Mid => Three::High,
            Three::High => Three::Low,
        }
    }
}

/// Enumerate up to `limit` functions `A → B` as lookup tables.
///
/// Tables are produced in little-endian counting order over `B::universe()`,
/// so the first one is the constant function at the first element of `B`.
pub fn functions<A: Finite, B: Finite>(limit: usize) -> Vec<Func<A, B>> {
    let domain = A::universe();
    let codomain = B::universe();
    if codomain.is_empty() && !domain.is_empty() {
        return Vec::new();
    }

    let mut digits = vec![0usize; domain.len()];
    let mut out = Vec::new();
    while out.len() < limit {
        let table: Vec<B> = digits.iter().map(|&d| codomain[d].clone()).collect();
        out.push(table_function(table));

        let mut i = 0;
        loop {
            if i == digits.len() {
                return out;
            }
            digits[i] += 1;
            if digits[i] < codomain.len() {
                break;
            }
            digits[i] = 0;
            i += 1;
        }
    }
    out
}

/// The function sending the `i`-th element of `A::universe()` to `table[i]`.
pub fn table_function<A: Finite, B: Val>(table: Vec<B>) -> Func<A, B> {
    func(move |a: A| table[a.ordinal()].clone())
}

// ─── Observe ────────────────────────────────────────────────────────────────

macro_rules! observe_via_json {
    ($($t:ty),*) => {
        $(impl Observe for $t {
            fn observe(&self) -> Value {
                json!(self)
            }
        })*
    };
}

observe_via_json!((), bool, u8, u16, u32, u64, usize, i32, i64, String, &'static str);

impl Observe for Two {
    fn observe(&self) -> Value {
        json!(self.label())
    }
}

impl Observe for Three {
    fn observe(&self) -> Value {
        json!(self.label())
    }
}

impl<T: Observe> Observe for Option<T> {
    fn observe(&self) -> Value {
        match self {
            Some(t) => json!({ "some": t.observe() }),
            None => Value::Null,
        }
    }
}

impl<T: Observe> Observe for Vec<T> {
    fn observe(&self) -> Value {
        Value::Array(self.iter().map(Observe::observe).collect())
    }
}

impl<A: Observe, B: Observe> Observe for (A, B) {
    fn observe(&self) -> Value {
        json!([self.0.observe(), self.1.observe()])
    }
}

impl<L: Observe, R: Observe> Observe for Either<L, R> {
    fn observe(&self) -> Value {
        match self {
            Either::Left(l) => json!({ "left": l.observe() }),
            Either::Right(r) => json!({ "right": r.observe() }),
        }
    }
}

impl<A: Finite, B: Observe> Observe for Func<A, B> {
    fn observe(&self) -> Value {
        Value::Array(A::universe().into_iter().map(|a| (**self)(a).observe()).collect())
    }
}

// ─── Finite ─────────────────────────────────────────────────────────────────

impl Finite for () {
    fn universe() -> Vec<Self> {
        vec![()]
    }

    fn ordinal(&self) -> usize {
        0
    }
}

impl Finite for bool {
    fn universe() -> Vec<Self> {
        vec![false, true]
    }

    fn ordinal(&self) -> usize {
        usize::from(*self)
    }
}

impl Finite for Two {
    fn universe() -> Vec<Self> {
        Two::ALL.to_vec()
    }

    fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl Finite for Three {
    fn universe() -> Vec<Self> {
        Three::ALL.to_vec()
    }

    fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl<T: Finite> Finite for Option<T> {
    fn universe() -> Vec<Self> {
        std::iter::once(None)
            .chain(T::universe().into_iter().map(Some))
            .collect()
    }

    fn ordinal(&self) -> usize {
        self.as_ref().map_or(0, |t| 1 + t.ordinal())
    }

    fn cardinality() -> usize {
        1 + T::cardinality()
    }
}

impl<A: Finite, B: Finite> Finite for (A, B) {
    fn universe() -> Vec<Self> {
        let bs = B::universe();
        A::universe()
            .into_iter()
            .flat_map(|a| bs.iter().map(move |b| (a.clone(), b.clone())))
            .collect()
    }

    fn ordinal(&self) -> usize {
        self.0
            .ordinal()
            .saturating_mul(B::cardinality())
            .saturating_add(self.1.ordinal())
    }

    fn cardinality() -> usize {
        A::cardinality().saturating_mul(B::cardinality())
    }
}

impl<L: Finite, R: Finite> Finite for Either<L, R> {
    fn universe() -> Vec<Self> {
        L::universe()
            .into_iter()
            .map(Either::Left)
            .chain(R::universe().into_iter().map(Either::Right))
            .collect()
    }

    fn ordinal(&self) -> usize {
        match self {
            Either::Left(l) => l.ordinal(),
            Either::Right(r) => L::cardinality() + r.ordinal(),
        }
    }

    fn cardinality() -> usize {
        L::cardinality() + R::cardinality()
    }
}

/// A function's ordinal reads its table as little-endian digits in base
/// `|B|`, matching the order of [`functions`]. Ordinal and cardinality both
/// saturate at `usize::MAX` once the function space outgrows `usize`.
impl<A: Finite, B: Finite> Finite for Func<A, B> {
    fn universe() -> Vec<Self> {
        functions::<A, B>(usize::MAX)
    }

    fn ordinal(&self) -> usize {
        let base = B::cardinality();
        A::universe()
            .into_iter()
            .rev()
            .fold(0usize, |acc, a| {
                acc.saturating_mul(base).saturating_add((**self)(a).ordinal())
            })
    }

    fn cardinality() -> usize {
        let exponent = u32::try_from(A::cardinality()).unwrap_or(u32::MAX);
        B::cardinality().saturating_pow(exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_function_spaces_saturate() {
        type Big = Func<Func<Three, Three>, Func<Two, Three>>;
        let top: Func<Two, Three> = table_function(vec![Three::High, Three::High]);
        assert_eq!(top.ordinal(), 8);
        let f: Big = func(move |_: Func<Three, Three>| top.clone());
        assert_eq!(<Big as Finite>::cardinality(), usize::MAX);
        assert_eq!(f.ordinal(), usize::MAX);
        let low: Big = func(|_: Func<Three, Three>| table_function(vec![Three::Low, Three::Low]));
        assert_eq!(low.ordinal(), 0);
    }

    #[test]
    fn function_count_is_exponential() {
        assert_eq!(functions::<Two, Three>(usize::MAX).len(), 9);
        assert_eq!(functions::<Three, Two>(usize::MAX).len(), 8);
        assert_eq!(functions::<(), Two>(usize::MAX).len(), 2);
        assert_eq!(functions::<Three, Two>(5).len(), 5);
    }

    #[test]
    fn first_function_is_constant() {
        let fs = functions::<Three, Two>(usize::MAX);
        assert_eq!(fs[0].observe(), json!(["low", "low", "low"]));
        assert_eq!(fs[1].observe(), json!(["high", "low", "low"]));
        assert_eq!(fs[7].observe(), json!(["high", "high", "high"]));
    }

    #[test]
    fn enumerated_functions_are_distinct() {
        let tables: Vec<Value> = functions::<Two, Three>(usize::MAX)
            .iter()
            .map(Observe::observe)
            .collect();
        for (i, a) in tables.iter().enumerate() {
            for b in &tables[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn function_equality_is_extensional() {
        let f: Func<Two, Two> = func(|t: Two| t.flip().flip());
        let g: Func<Two, Two> = func(|t: Two| t);
        assert_eq!(f.observe(), g.observe());
        assert_eq!(f.ordinal(), g.ordinal());
        let h: Func<Two, Two> = func(Two::flip);
        assert_ne!(f.observe(), h.observe());
    }

    #[test]
    fn ordinals_index_universes() {
        fn check<T: Finite>() {
            for (i, t) in T::universe().iter().enumerate() {
                assert_eq!(t.ordinal(), i);
            }
            assert_eq!(T::universe().len(), T::cardinality());
        }
        check::<Two>();
        check::<Three>();
        check::<Option<Two>>();
        check::<(Three, Two)>();
        check::<Either<Two, Three>>();
        check::<Func<Two, Three>>();
        check::<Func<Three, Two>>();
    }

    #[test]
    fn universes_have_expected_sizes() {
        assert_eq!(<Option<Three>>::universe().len(), 4);
        assert_eq!(<(Two, Three)>::universe().len(), 6);
        assert_eq!(<Either<Two, Three>>::universe().len(), 5);
        assert_eq!(<Func<Two, Two>>::universe().len(), 4);
    }

    #[test]
    fn nested_function_observation() {
        let apply_low: Func<Func<Two, Three>, Three> = func(|f: Func<Two, Three>| f(Two::Low));
        let seen = apply_low.observe();
        assert_eq!(seen.as_array().map(Vec::len), Some(9));
    }
}
