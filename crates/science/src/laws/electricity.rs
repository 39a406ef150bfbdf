//! Electricity: Ohm's law (with power) and Coulomb's law.

use super::{FormulaError, Knowns, LawDefinition, Parameter, Role, Solution, finite, quotient};

pub(super) static OHMS_LAW: LawDefinition = LawDefinition {
    name: "ohms_law",
    aliases: &["ohm"],
    summary: "Ohm's Law states that current through a conductor is directly proportional to voltage and inversely proportional to resistance.",
    formula: "V = IR, P = VI = I²R = V²/R",
    phenomena: "Fundamental principle of electrical circuits - how voltage, current, and resistance relate in all electrical devices",
    calculates: "Missing electrical parameter and power",
    requirement: Some("need 2 of 3"),
    parameters: &[
        Parameter {
            name: "voltage",
            aliases: &["v", "u"],
            unit: "V",
            role: Role::Solvable,
        },
        Parameter {
            name: "current",
            aliases: &["i"],
            unit: "A",
            role: Role::Solvable,
        },
        Parameter {
            name: "resistance",
            aliases: &["r"],
            unit: "Ω",
            role: Role::Solvable,
        },
    ],
    solve: ohm,
};

pub(super) static COULOMBS_LAW: LawDefinition = LawDefinition {
    name: "coulombs_law",
    aliases: &["coulomb", "electrostatic_force"],
    summary: "Coulomb's Law describes the electrostatic force between two point charges, proportional to their charges and inversely proportional to distance squared.",
    formula: "F = k|q₁q₂|/r²",
    phenomena: "Explains electric forces - why clothes stick after dryer, lightning, how atoms bond",
    calculates: "Electrostatic Force (N)",
    requirement: None,
    parameters: &[
        Parameter {
            name: "charge1",
            aliases: &["q1"],
            unit: "C",
            role: Role::Required,
        },
        Parameter {
            name: "charge2",
            aliases: &["q2"],
            unit: "C",
            role: Role::Required,
        },
        Parameter {
            name: "distance",
            aliases: &["r"],
            unit: "m",
            role: Role::Required,
        },
        Parameter {
            name: "coulomb_constant",
            aliases: &["k"],
            unit: "N⋅m²/C²",
            role: Role::Optional(8.99e9),
        },
    ],
    solve: coulomb,
};

const VOLTS: &str = "V (Volts)";
const AMPS: &str = "A (Amperes)";
const OHMS: &str = "Ω (Ohms)";
const WATTS: &str = "W (Watts)";

/// With all three supplied, voltage and current win.
fn ohm(k: &Knowns) -> Result<Solution, FormulaError> {
    match (k.get("voltage"), k.get("current"), k.get("resistance")) {
        (Some(v), Some(i), _) => resistance_from(v, i),
        (Some(v), None, Some(r)) => current_from(v, r),
        (None, Some(i), Some(r)) => voltage_from(i, r),
        _ => Err(k.insufficient(2)),
    }
}

fn resistance_from(v: f64, i: f64) -> Result<Solution, FormulaError> {
    let r = quotient("resistance", v, i)?;
    let p = finite("power", v * i)?;
    Ok(Solution::named(
        &[("resistance", r, OHMS), ("power", p, WATTS)],
        "R = V/I, P = VI",
        format!("R = V/I = {v}V / {i}A = {r}Ω, P = {v}V × {i}A = {p}W"),
    ))
}

fn current_from(v: f64, r: f64) -> Result<Solution, FormulaError> {
    let i = quotient("current", v, r)?;
    let p = quotient("power", v.powi(2), r)?;
    Ok(Solution::named(
        &[("current", i, AMPS), ("power", p, WATTS)],
        "I = V/R, P = V²/R",
        format!("I = {v}V / {r}Ω = {i}A, P = ({v}V)² / {r}Ω = {p}W"),
    ))
}

fn voltage_from(i: f64, r: f64) -> Result<Solution, FormulaError> {
    let v = finite("voltage", i * r)?;
    let p = finite("power", i.powi(2) * r)?;
    Ok(Solution::named(
        &[("voltage", v, VOLTS), ("power", p, WATTS)],
        "V = IR, P = I²R",
        format!("V = {i}A × {r}Ω = {v}V, P = ({i}A)² × {r}Ω = {p}W"),
    ))
}

fn coulomb(k: &Knowns) -> Result<Solution, FormulaError> {
    let q1 = k.require("charge1")?;
    let q2 = k.require("charge2")?;
    let r = k.require("distance")?;
    let coulomb_k = k.require("coulomb_constant")?;
    let force = quotient("electrostatic force", coulomb_k * (q1 * q2).abs(), r.powi(2))?;
    Ok(Solution::scalar(
        force,
        "N (Newtons)",
        "F = k|q₁q₂|/r²",
        format!("Force = {coulomb_k} × |{q1} × {q2}| C² / ({r} m)² = {force} N"),
    ))
}
