//! Physics formula resolver.
//!
//! Laws are registered as data: each [`LawDefinition`] names its
//! quantities (with accepted aliases), carries its teaching text, and
//! points at a pure solve function. [`resolve`] normalizes the law name
//! and parameter keys, checks required quantities, and hands the rest to
//! the law. Multi-directional laws compute whichever quantity is missing.

mod electricity;
mod mechanics;
mod optics;
mod thermo;
mod waves;

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tutorlab_core::{ErrorKind, Failure, normalize_key};

/// How a parameter participates in its law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Role {
    /// Must be supplied.
    Required,
    /// Has a default the caller may override.
    Optional(f64),
    /// Part of a multi-directional law; solved for when omitted.
    Solvable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub unit: &'static str,
    pub role: Role,
}

impl Parameter {
    fn accepts(&self, key: &str) -> bool {
        self.name == key || self.aliases.contains(&key)
    }

    /// Human-readable descriptor, e.g. `"mass (kg)"`.
    pub fn describe(&self) -> String {
        match self.role {
            Role::Optional(default) => format!("{} ({}, optional, default {default})", self.name, self.unit),
            _ => format!("{} ({})", self.name, self.unit),
        }
    }
}

fn describe_all(params: &[&Parameter]) -> String {
    params.iter().map(|p| p.describe()).collect::<Vec<_>>().join(", ")
}

pub type SolveFn = fn(&Knowns) -> Result<Solution, FormulaError>;

/// A registered physical law.
#[derive(Debug)]
pub struct LawDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub summary: &'static str,
    pub formula: &'static str,
    pub phenomena: &'static str,
    pub calculates: &'static str,
    /// Solve rule for multi-directional laws, e.g. "need 2 of 3".
    pub requirement: Option<&'static str>,
    pub parameters: &'static [Parameter],
    pub solve: SolveFn,
}

impl LawDefinition {
    pub fn parameter(&self, key: &str) -> Option<&'static Parameter> {
        self.parameters.iter().find(|p| p.accepts(key))
    }

    pub fn info(&'static self) -> LawInfo {
        LawInfo {
            law: self.name,
            summary: self.summary,
            formula: self.formula,
            phenomena: self.phenomena,
            required_parameters: self.parameters.iter().map(|p| p.describe()).collect(),
            requirement: self.requirement,
            calculates: self.calculates,
        }
    }
}

/// The registry, in presentation order.
static LAWS: [&LawDefinition; 9] = [
    &mechanics::NEWTON_SECOND_LAW,
    &mechanics::KINETIC_ENERGY,
    &mechanics::POTENTIAL_ENERGY,
    &mechanics::MOMENTUM,
    &waves::WAVE_EQUATION,
    &electricity::OHMS_LAW,
    &electricity::COULOMBS_LAW,
    &thermo::IDEAL_GAS_LAW,
    &optics::SNELLS_LAW,
];

pub fn registry() -> &'static [&'static LawDefinition] {
    &LAWS
}

/// Find a law by (normalized) name or alias.
pub fn find(law: &str) -> Option<&'static LawDefinition> {
    let key = normalize_key(law);
    LAWS.iter()
        .copied()
        .find(|l| l.name == key || l.aliases.contains(&key.as_str()))
}

pub fn names() -> Vec<&'static str> {
    LAWS.iter().map(|l| l.name).collect()
}

/// Known quantities for one resolve call, keyed by canonical name.
#[derive(Debug, Clone)]
pub struct Knowns {
    law: &'static LawDefinition,
    values: BTreeMap<&'static str, f64>,
}

impl Knowns {
    /// Map raw keys onto the law's canonical parameter names. A canonical
    /// key beats an alias for the same quantity; unknown keys are dropped.
    pub fn collect(law: &'static LawDefinition, raw: &BTreeMap<String, f64>) -> Self {
        let mut values = BTreeMap::new();
        for (raw_key, &value) in raw {
            let key = normalize_key(raw_key);
            match law.parameter(&key) {
                Some(param) if param.name == key => {
                    values.insert(param.name, value);
                }
                Some(param) => {
                    values.entry(param.name).or_insert(value);
                }
                None => tracing::debug!(law = law.name, parameter = %raw_key, "Ignoring unknown parameter"),
            }
        }
        Self { law, values }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// A supplied value, or the parameter's declared default.
    pub fn or_default(&self, name: &str) -> Option<f64> {
        self.get(name).or_else(|| match self.law.parameter(name)?.role {
            Role::Optional(default) => Some(default),
            _ => None,
        })
    }

    pub fn require(&self, name: &str) -> Result<f64, FormulaError> {
        self.or_default(name).ok_or_else(|| FormulaError::MissingParameters {
            law: self.law.name,
            missing: self.law.parameter(name).into_iter().collect(),
        })
    }

    /// Fail with every absent required parameter at once.
    fn check_required(&self) -> Result<(), FormulaError> {
        let missing: Vec<&'static Parameter> = self
            .law
            .parameters
            .iter()
            .filter(|p| p.role == Role::Required && !self.values.contains_key(p.name))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormulaError::MissingParameters {
                law: self.law.name,
                missing,
            })
        }
    }

    /// How many of the law's solvable quantities were supplied.
    pub fn solvable_known(&self) -> usize {
        self.law
            .parameters
            .iter()
            .filter(|p| p.role == Role::Solvable && self.values.contains_key(p.name))
            .count()
    }

    pub fn insufficient(&self, needed: usize) -> FormulaError {
        FormulaError::InsufficientParameters {
            law: self.law.name,
            needed,
            candidates: self
                .law
                .parameters
                .iter()
                .filter(|p| p.role == Role::Solvable)
                .collect(),
        }
    }
}

/// A numeric result: one value, or several named ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Quantity {
    Scalar(f64),
    Named(BTreeMap<&'static str, f64>),
}

impl Quantity {
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Quantity::Scalar(v) => Some(*v),
            Quantity::Named(_) => None,
        }
    }

    pub fn named(&self, name: &str) -> Option<f64> {
        match self {
            Quantity::Named(map) => map.get(name).copied(),
            Quantity::Scalar(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Units {
    Single(&'static str),
    Named(BTreeMap<&'static str, &'static str>),
}

/// A solved law: values, units, the formula used and the worked explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub result: Quantity,
    pub units: Units,
    pub formula: &'static str,
    pub explanation: String,
    pub law_summary: &'static str,
    pub phenomena: &'static str,
}

impl Solution {
    pub fn scalar(value: f64, unit: &'static str, formula: &'static str, explanation: String) -> Self {
        Self {
            result: Quantity::Scalar(value),
            units: Units::Single(unit),
            formula,
            explanation,
            law_summary: "",
            phenomena: "",
        }
    }

    /// Several results, each `(name, value, unit)`.
    pub fn named(results: &[(&'static str, f64, &'static str)], formula: &'static str, explanation: String) -> Self {
        Self {
            result: Quantity::Named(results.iter().map(|(n, v, _)| (*n, *v)).collect()),
            units: Units::Named(results.iter().map(|(n, _, u)| (*n, *u)).collect()),
            formula,
            explanation,
            law_summary: "",
            phenomena: "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LawInfo {
    pub law: &'static str,
    pub summary: &'static str,
    pub formula: &'static str,
    pub phenomena: &'static str,
    pub required_parameters: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement: Option<&'static str>,
    pub calculates: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Resolution {
    Info(LawInfo),
    Solved(Solution),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    #[error("Unknown law '{law}'. Available laws: {}", names().join(", "))]
    UnknownLaw { law: String, info_mode: bool },

    #[error("Missing required parameters: {}", describe_all(.missing))]
    MissingParameters {
        law: &'static str,
        missing: Vec<&'static Parameter>,
    },

    #[error("Need at least {needed} of: {}", describe_all(.candidates))]
    InsufficientParameters {
        law: &'static str,
        needed: usize,
        candidates: Vec<&'static Parameter>,
    },

    #[error("All of {} were supplied; omit the quantity to solve for", .supplied.join(", "))]
    Overdetermined {
        law: &'static str,
        supplied: Vec<&'static str>,
    },

    #[error("Total internal reflection occurs - no refracted ray")]
    TotalInternalReflection { critical_angle: Option<f64> },

    #[error("Calculation error: {message}")]
    Calculation { message: String },
}

impl From<FormulaError> for Failure {
    fn from(err: FormulaError) -> Self {
        let message = err.to_string();
        match err {
            FormulaError::UnknownLaw { info_mode: true, .. } => {
                let summaries: BTreeMap<&str, &str> = LAWS.iter().map(|l| (l.name, l.summary)).collect();
                Failure::new(ErrorKind::UnknownLaw, message).with_hint("available_laws", summaries)
            }
            FormulaError::UnknownLaw { .. } => {
                Failure::new(ErrorKind::UnknownLaw, message).with_hint("available_laws", names())
            }
            FormulaError::MissingParameters { missing, .. } => {
                let names: Vec<&str> = missing.iter().map(|p| p.name).collect();
                Failure::new(ErrorKind::MissingParameters, message).with_hint("missing", names)
            }
            FormulaError::InsufficientParameters { needed, candidates, .. } => {
                let names: Vec<&str> = candidates.iter().map(|p| p.name).collect();
                Failure::new(ErrorKind::InsufficientParameters, message)
                    .with_hint("required", names)
                    .with_hint("needed", needed)
            }
            FormulaError::Overdetermined { supplied, .. } => {
                Failure::new(ErrorKind::Overdetermined, message).with_hint("supplied", supplied)
            }
            FormulaError::TotalInternalReflection { critical_angle } => {
                let failure = Failure::new(ErrorKind::TotalInternalReflection, message);
                match critical_angle {
                    Some(angle) => failure.with_hint("critical_angle", angle),
                    None => failure,
                }
            }
            FormulaError::Calculation { .. } => Failure::new(ErrorKind::CalculationError, message),
        }
    }
}

/// Fail unless `value` is finite.
pub(crate) fn finite(target: &str, value: f64) -> Result<f64, FormulaError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormulaError::Calculation {
            message: format!("{target} is not a finite number (overflow or invalid input)"),
        })
    }
}

/// `numerator / denominator`, failing on a zero denominator.
pub(crate) fn quotient(target: &str, numerator: f64, denominator: f64) -> Result<f64, FormulaError> {
    if denominator == 0.0 {
        return Err(FormulaError::Calculation {
            message: format!("division by zero while computing {target}"),
        });
    }
    finite(target, numerator / denominator)
}

/// Resolve a law against the supplied quantities.
///
/// With `info_only`, or with no parameters at all, only the law's
/// description is returned.
pub fn resolve(law: &str, parameters: &BTreeMap<String, f64>, info_only: bool) -> Result<Resolution, FormulaError> {
    let info_mode = info_only || parameters.is_empty();
    let definition = find(law).ok_or_else(|| FormulaError::UnknownLaw {
        law: normalize_key(law),
        info_mode,
    })?;

    if info_mode {
        tracing::debug!(law = definition.name, "Providing law information");
        return Ok(Resolution::Info(definition.info()));
    }

    let knowns = Knowns::collect(definition, parameters);
    knowns.check_required()?;
    tracing::debug!(law = definition.name, known = ?knowns.values, "Solving law");

    let mut solution = (definition.solve)(&knowns)?;
    solution.law_summary = definition.summary;
    solution.phenomena = definition.phenomena;
    Ok(Resolution::Solved(solution))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn params(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    pub fn solve(law: &str, pairs: &[(&str, f64)]) -> Result<Solution, FormulaError> {
        match resolve(law, &params(pairs), false)? {
            Resolution::Solved(s) => Ok(s),
            Resolution::Info(_) => panic!("expected a solution for {law}"),
        }
    }

    pub fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn registry_names_are_unique_and_normalized() {
        let mut seen = names();
        for name in &seen {
            assert_eq!(normalize_key(name), *name);
        }
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), LAWS.len());
    }

    #[test]
    fn every_alias_is_normalized() {
        for law in registry() {
            for p in law.parameters {
                for alias in p.aliases {
                    assert_eq!(normalize_key(alias), *alias, "{}: alias {alias}", law.name);
                }
            }
        }
    }

    #[test]
    fn law_names_are_normalized_before_lookup() {
        assert_eq!(find("Ohms Law").unwrap().name, "ohms_law");
        assert_eq!(find("wave-equation").unwrap().name, "wave_equation");
        assert_eq!(find("FORCE").unwrap().name, "newton_second_law");
    }

    #[test]
    fn info_only_returns_metadata() {
        let res = resolve("ideal_gas_law", &params(&[("pressure", 1.0)]), true).unwrap();
        let Resolution::Info(info) = res else { panic!("expected info") };
        assert_eq!(info.formula, "PV = nRT");
        assert_eq!(info.requirement, Some("need 3 of 4"));
        assert!(info.required_parameters.iter().any(|p| p.starts_with("temperature (K)")));
    }

    #[test]
    fn no_parameters_means_info() {
        let res = resolve("momentum", &BTreeMap::new(), false).unwrap();
        assert!(matches!(res, Resolution::Info(LawInfo { law: "momentum", .. })));
    }

    #[test]
    fn unknown_law_lists_names_or_summaries() {
        let err = resolve("hookes_law", &params(&[("k", 1.0)]), false).unwrap_err();
        let failure: Failure = err.into();
        assert_eq!(failure.kind, ErrorKind::UnknownLaw);
        assert!(failure.hint("available_laws").unwrap().is_array());
        assert!(failure.message.contains("ohms_law"));

        let err = resolve("hookes_law", &BTreeMap::new(), true).unwrap_err();
        let failure: Failure = err.into();
        assert!(failure.hint("available_laws").unwrap()["snells_law"].is_string());
    }

    #[test]
    fn missing_parameters_names_exactly_the_absent_ones() {
        let err = solve("coulombs_law", &[("q1", 1e-6)]).unwrap_err();
        let failure: Failure = err.into();
        assert_eq!(failure.kind, ErrorKind::MissingParameters);
        assert_eq!(failure.hint("missing").unwrap(), &serde_json::json!(["charge2", "distance"]));
    }

    #[test]
    fn canonical_key_beats_alias() {
        let s = solve("momentum", &[("m", 1.0), ("mass", 3.0), ("v", 2.0)]).unwrap();
        assert_eq!(s.result.scalar(), Some(6.0));
    }

    #[test]
    fn unknown_parameters_are_ignored() {
        let s = solve("momentum", &[("mass", 2.0), ("velocity", 5.0), ("colour", 7.0)]).unwrap();
        assert_eq!(s.result.scalar(), Some(10.0));
    }

    #[test]
    fn solutions_carry_teaching_context() {
        let s = solve("kinetic_energy", &[("mass", 2.0), ("velocity", 3.0)]).unwrap();
        assert!(s.law_summary.starts_with("Kinetic energy"));
        assert!(!s.phenomena.is_empty());
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["result"], 9.0);
        assert_eq!(json["units"], "J (Joules)");
    }

    #[test]
    fn quotient_guards_zero() {
        assert!(matches!(quotient("x", 1.0, 0.0), Err(FormulaError::Calculation { .. })));
        assert_eq!(quotient("x", 6.0, 3.0).unwrap(), 2.0);
        assert!(finite("x", f64::INFINITY).is_err());
    }
}
