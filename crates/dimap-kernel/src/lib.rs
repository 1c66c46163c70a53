//! # dimap kernel
//!
//! The base vocabulary the closed/composition algebra is written against:
//! functor and profunctor capabilities expressed as traits on zero-sized
//! *brands*, with a generic associated type standing in for the type
//! constructor.
//!
//! ## Architecture
//!
//! ```text
//! Val, Func, Hidden        ← values, shared arrows, the universal carrier
//!     │
//! Functor … Distributive   ← one-parameter brands (Option, Vec, Pair, …)
//!     │
//! Profunctor, Strong,      ← two-parameter brands
//! Choice, Category
//!     │
//! Fn, Tagged, Star,        ← fixture profunctors
//! Costar, Kleisli, Cokleisli
//!     │
//! Observe, Finite          ← extensional equality over finite domains
//! ```

pub mod arrows;
pub mod functor;
pub mod iso;
pub mod observe;
pub mod profunctor;
pub mod value;

pub use arrows::{CokleisliBrand, CostarBrand, FnBrand, KleisliBrand, StarBrand, TaggedBrand};
pub use functor::{
    AnnotatedBrand, Applicative, Comonad, ComposeBrand, Distributive, Functor, IdentityBrand,
    Monad, OptionBrand, PairBrand, ReaderBrand, VecBrand,
};
pub use iso::Iso;
pub use observe::{Finite, Observe, Three, Two, functions, table_function};
pub use profunctor::{Category, Choice, Profunctor, Strong};
pub use value::{Either, Func, Hidden, Val, compose, constant, curry, func, identity, uncurry};
