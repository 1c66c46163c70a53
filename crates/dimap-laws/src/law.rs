//! The law catalogue.
//!
//! Every law has a stable snake_case identifier (used in profiles, on the
//! command line and as the witness token path) and a `DIMAP-n.m` reference
//! (used in witness keys).

use crate::error::LawError;
use crate::witness::failure_class;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LawId {
    ProfunctorIdentity,
    ProfunctorComposition,
    ClosedNaturality,
    CloseUnclose,
    Idl,
    Idr,
    Assoc,
    Ups,
    Downs,
    Kleislis,
    Cokleislis,
    EnvironmentAdjunction,
    ClosureComonad,
    RiftAdjunction,
    RiftComonad,
}

impl LawId {
    pub const ALL: [LawId; 15] = [
        LawId::ProfunctorIdentity,
        LawId::ProfunctorComposition,
        LawId::ClosedNaturality,
        LawId::CloseUnclose,
        LawId::Idl,
        LawId::Idr,
        LawId::Assoc,
        LawId::Ups,
        LawId::Downs,
        LawId::Kleislis,
        LawId::Cokleislis,
        LawId::EnvironmentAdjunction,
        LawId::ClosureComonad,
        LawId::RiftAdjunction,
        LawId::RiftComonad,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LawId::ProfunctorIdentity => "profunctor_identity",
            LawId::ProfunctorComposition => "profunctor_composition",
            LawId::ClosedNaturality => "closed_naturality",
            LawId::CloseUnclose => "close_unclose",
            LawId::Idl => "idl",
            LawId::Idr => "idr",
            LawId::Assoc => "assoc",
            LawId::Ups => "ups",
            LawId::Downs => "downs",
            LawId::Kleislis => "kleislis",
            LawId::Cokleislis => "cokleislis",
            LawId::EnvironmentAdjunction => "environment_adjunction",
            LawId::ClosureComonad => "closure_comonad",
            LawId::RiftAdjunction => "rift_adjunction",
            LawId::RiftComonad => "rift_comonad",
        }
    }

    pub fn law_ref(self) -> &'static str {
        match self {
            LawId::ProfunctorIdentity => "DIMAP-1.1",
            LawId::ProfunctorComposition => "DIMAP-1.2",
            LawId::ClosedNaturality => "DIMAP-2.1",
            LawId::CloseUnclose => "DIMAP-2.2",
            LawId::Idl => "DIMAP-3.1",
            LawId::Idr => "DIMAP-3.2",
            LawId::Assoc => "DIMAP-3.3",
            LawId::Ups => "DIMAP-3.4",
            LawId::Downs => "DIMAP-3.5",
            LawId::Kleislis => "DIMAP-3.6",
            LawId::Cokleislis => "DIMAP-3.7",
            LawId::EnvironmentAdjunction => "DIMAP-4.1",
            LawId::ClosureComonad => "DIMAP-4.2",
            LawId::RiftAdjunction => "DIMAP-5.1",
            LawId::RiftComonad => "DIMAP-5.2",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            LawId::ProfunctorIdentity | LawId::ProfunctorComposition => {
                failure_class::PROFUNCTOR_FAILURE
            }
            LawId::ClosedNaturality | LawId::CloseUnclose => failure_class::CLOSED_FAILURE,
            LawId::Idl
            | LawId::Idr
            | LawId::Assoc
            | LawId::Ups
            | LawId::Downs
            | LawId::Kleislis
            | LawId::Cokleislis => failure_class::COMPOSITION_FAILURE,
            LawId::EnvironmentAdjunction | LawId::RiftAdjunction => {
                failure_class::ADJUNCTION_FAILURE
            }
            LawId::ClosureComonad | LawId::RiftComonad => failure_class::COMONAD_FAILURE,
        }
    }

    /// The equation being checked.
    pub fn statement(self) -> &'static str {
        match self {
            LawId::ProfunctorIdentity => "dimap(id, id, p) == p",
            LawId::ProfunctorComposition => {
                "dimap(f . g, h . i, p) == dimap(g, h, dimap(f, i, p))"
            }
            LawId::ClosedNaturality => {
                "rmap(. h, closed::<X>(p)) == lmap(. h, closed::<Y>(p)) for h: Y -> X"
            }
            LawId::CloseUnclose => "unclose(close(n)) == n and close(unclose(m)) == m",
            LawId::Idl => "idl is an isomorphism Procompose<(->), Q> ~ Q",
            LawId::Idr => "idr is an isomorphism Procompose<Q, (->)> ~ Q",
            LawId::Assoc => "assoc is an isomorphism and preserves the composite",
            LawId::Ups => "ups fuses Star<F> after Star<G> into Star<G . F>",
            LawId::Downs => "downs fuses Costar<F> after Costar<G> into Costar<F . G>",
            LawId::Kleislis => "kleislis fuses Kleisli<F> after Kleisli<G> into Kleisli<G . F>",
            LawId::Cokleislis => {
                "cokleislis fuses Cokleisli<F> after Cokleisli<G> into Cokleisli<F . G>"
            }
            LawId::EnvironmentAdjunction => {
                "counit . Environment(unit) == id and Closure(counit) . unit == id"
            }
            LawId::ClosureComonad => {
                "extract . duplicate == id and Closure(extract) . duplicate == id"
            }
            LawId::RiftAdjunction => {
                "decompose_rift . Procompose(rift_unit) == id and Rift(decompose_rift) . rift_unit == id"
            }
            LawId::RiftComonad => {
                "proextract . produplicate == id and Rift(proextract) . produplicate == id"
            }
        }
    }
}

impl fmt::Display for LawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LawId {
    type Err = LawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LawId::ALL
            .into_iter()
            .find(|law| law.as_str() == s)
            .ok_or_else(|| LawError::UnknownLaw(s.to_string()))
    }
}

/// One catalogue row, as printed by `dimap laws --json`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LawEntry {
    pub id: LawId,
    pub law_ref: &'static str,
    pub class: &'static str,
    pub statement: &'static str,
}

pub fn catalogue() -> Vec<LawEntry> {
    LawId::ALL
        .into_iter()
        .map(|id| LawEntry {
            id,
            law_ref: id.law_ref(),
            class: id.class(),
            statement: id.statement(),
        })
        .collect()
}
