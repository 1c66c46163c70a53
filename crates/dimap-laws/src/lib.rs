//! # dimap laws
//!
//! The law gate: given a world (a closed category with finite samples), check
//! every law of the closed/composition algebra over small finite domains and
//! report each violation as a content-addressed witness.
//!
//! ```text
//! LawProfile (TOML)  ──►  run_law_suite(world, profile)  ──►  LawReport
//!                               │                                 │
//!                       LawId × World::sample              LawFailure { witnessId, … }
//! ```
//!
//! A world that satisfies every law is *accepted*; otherwise the report is
//! *rejected* and lists one failure per broken law, sorted by
//! `(class, lawRef, tokenPath, context, witnessId)`.

pub mod error;
pub mod law;
pub mod profile;
pub mod suite;
pub mod witness;
pub mod world;

pub use error::LawError;
pub use law::{LawEntry, LawId, catalogue};
pub use profile::LawProfile;
pub use suite::{Counterexample, check_law, run_in, run_law_suite};
pub use witness::{LawFailure, LawReport, compute_witness_id, failure_class};
pub use world::{TallyBrand, World, WorldId};
