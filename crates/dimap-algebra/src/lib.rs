//! # dimap algebra
//!
//! Closed profunctors, profunctor composition, and right Kan lifts, written
//! against the capabilities of `dimap-kernel`.
//!
//! ```text
//! Closed ──► Closure (cofree, comonad) ◄── ⊣ ──► Environment (free, monad)
//!
//! Procompose ──► idl, idr, assoc, ups, downs, kleislis, cokleislis
//!     │
//!     └── ⊣ ──► Rift (comonad when P is a category)
//! ```
//!
//! Quantified type variables never appear in the public types. Universally
//! quantified fields ([`Closure`], [`Rift`]) are built from a trait with one
//! generic method and stored at the universal carrier; existentially
//! quantified ones ([`Procompose`], [`Environment`]) are erased on
//! construction through the profunctor's own `dimap`.

pub mod closed;
pub mod closure;
pub mod environment;
pub mod nat;
pub mod procompose;
pub mod rift;

pub use closed::{Closed, curry_closed};
pub use closure::{
    Close, Closure, ClosureBrand, ClosureExtract, ClosureFamily, Unclose, close, unclose,
};
pub use environment::{
    Environment, EnvironmentBrand, EnvironmentCounit, EnvironmentUnit, Proreturn, counit,
    curry_environment, projoin, proreturn, uncurry_environment, unit,
};
pub use nat::{Arr, Extract, Id, ProNat, Pure, Then};
pub use procompose::{
    Procompose, ProcomposeBrand, Procomposed, assoc, cokleislis, downs, idl, idr, kleislis,
    procomposed, ups,
};
pub use rift::{
    Rift, RiftBody, RiftBrand, RiftCounit, RiftExtract, RiftUnit, curry_rift, decompose_rift,
    rift_unit, uncurry_rift,
};
