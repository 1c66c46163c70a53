//! Deterministic law-failure witnesses.
//!
//! The same violation found twice, by any run on any machine, carries the
//! same witness id:
//!
//! 1. Build the key `{schema, class, lawRef, tokenPath, context}`.
//! 2. Serialize it canonically: keys sorted, no whitespace.
//! 3. `witnessId = "w1_" || base32hex_lower(SHA256(keyBytes))`, unpadded.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::cmp::Ordering;

pub const WITNESS_SCHEMA: u32 = 1;

/// Compute a witness id from the fields that identify a violation.
///
/// Messages and details are deliberately left out of the key, so rewording a
/// message never changes an id.
pub fn compute_witness_id(
    class: &str,
    law_ref: &str,
    token_path: Option<&str>,
    context: Option<&Value>,
) -> String {
    let key = witness_key(class, law_ref, token_path, context);
    let digest = Sha256::digest(canonical_json(&key).as_bytes());
    format!("w1_{}", base32hex_lower(&digest))
}

fn witness_key(
    class: &str,
    law_ref: &str,
    token_path: Option<&str>,
    context: Option<&Value>,
) -> Value {
    let mut key = Map::new();
    key.insert("schema".into(), Value::from(WITNESS_SCHEMA));
    key.insert("class".into(), Value::from(class));
    key.insert("lawRef".into(), Value::from(law_ref));
    key.insert(
        "tokenPath".into(),
        token_path.map_or(Value::Null, Value::from),
    );
    key.insert("context".into(), context.cloned().unwrap_or(Value::Null));
    Value::Object(key)
}

/// Sorted-key, whitespace-free JSON.
///
/// Only integers, strings, booleans and null appear in witness keys, so the
/// number branch never has to format a float.
pub(crate) fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(&map[key], out);
            }
            out.push('}');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

/// RFC 4648 base32hex, lowercase alphabet `0-9a-v`, no padding.
fn base32hex_lower(data: &[u8]) -> String {
    const ALPHABET: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";

    let mut out = String::with_capacity(data.len().div_ceil(5) * 8);
    let mut buffer: u32 = 0;
    let mut pending: u32 = 0;
    for &byte in data {
        buffer = (buffer << 8) | u32::from(byte);
        pending += 8;
        while pending >= 5 {
            pending -= 5;
            out.push(ALPHABET[((buffer >> pending) & 0x1f) as usize] as char);
        }
        buffer &= (1 << pending) - 1;
    }
    if pending > 0 {
        out.push(ALPHABET[((buffer << (5 - pending)) & 0x1f) as usize] as char);
    }
    out
}

/// One violated law instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LawFailure {
    pub witness_id: String,

    /// Failure classification, one of [`failure_class`].
    pub class: String,

    /// Law reference, e.g. `DIMAP-2.1`.
    pub law_ref: String,

    pub message: String,

    /// The world and the index of the first failing case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// The law identifier.
    #[serde(default)]
    pub token_path: Option<String>,

    /// Both sides of the failing equation, observed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl LawFailure {
    pub fn new(
        class: impl Into<String>,
        law_ref: impl Into<String>,
        message: impl Into<String>,
        token_path: Option<String>,
        context: Option<Value>,
    ) -> Self {
        let class = class.into();
        let law_ref = law_ref.into();
        let witness_id =
            compute_witness_id(&class, &law_ref, token_path.as_deref(), context.as_ref());
        Self {
            witness_id,
            class,
            law_ref,
            message: message.into(),
            context,
            token_path,
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// class, lawRef, tokenPath, context, witnessId
    fn sort_key(&self) -> (&str, &str, &str, String, &str) {
        (
            &self.class,
            &self.law_ref,
            self.token_path.as_deref().unwrap_or(""),
            self.context.as_ref().map(canonical_json).unwrap_or_default(),
            &self.witness_id,
        )
    }
}

impl PartialOrd for LawFailure {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LawFailure {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

/// The outcome of one law-suite run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LawReport {
    pub witness_schema: u32,
    pub profile: String,
    pub world: String,

    /// The law identifiers that were checked, in catalogue order.
    pub laws: Vec<String>,

    /// `"accepted"` or `"rejected"`.
    pub result: String,

    pub failures: Vec<LawFailure>,
}

impl LawReport {
    pub fn accepted(profile: impl Into<String>, world: impl Into<String>, laws: Vec<String>) -> Self {
        Self {
            witness_schema: WITNESS_SCHEMA,
            profile: profile.into(),
            world: world.into(),
            laws,
            result: "accepted".to_string(),
            failures: vec![],
        }
    }

    /// Failures are sorted on construction.
    pub fn rejected(
        profile: impl Into<String>,
        world: impl Into<String>,
        laws: Vec<String>,
        mut failures: Vec<LawFailure>,
    ) -> Self {
        failures.sort();
        Self {
            witness_schema: WITNESS_SCHEMA,
            profile: profile.into(),
            world: world.into(),
            laws,
            result: "rejected".to_string(),
            failures,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.result == "accepted"
    }
}

pub mod failure_class {
    pub const PROFUNCTOR_FAILURE: &str = "profunctor_failure";
    pub const CLOSED_FAILURE: &str = "closed_failure";
    pub const COMPOSITION_FAILURE: &str = "composition_failure";
    pub const ADJUNCTION_FAILURE: &str = "adjunction_failure";
    pub const COMONAD_FAILURE: &str = "comonad_failure";
}
