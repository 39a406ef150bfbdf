//! The wave equation, v = fλ, solvable in any direction.

use super::{FormulaError, Knowns, LawDefinition, Parameter, Role, Solution, finite, quotient};
use crate::constants::SPEED_OF_LIGHT;

pub(super) static WAVE_EQUATION: LawDefinition = LawDefinition {
    name: "wave_equation",
    aliases: &["wave_speed"],
    summary: "The wave equation relates the speed of a wave to its frequency and wavelength. For light waves, speed equals the speed of light.",
    formula: "v = fλ (or c = fλ for light)",
    phenomena: "Explains all wave phenomena - sound waves, light waves, radio waves, ocean waves",
    calculates: "Missing wave parameter",
    requirement: Some("need 2 of 3; speed defaults to the speed of light"),
    parameters: &[
        Parameter {
            name: "frequency",
            aliases: &["f"],
            unit: "Hz",
            role: Role::Solvable,
        },
        Parameter {
            name: "wavelength",
            aliases: &["lambda", "l", "λ"],
            unit: "m",
            role: Role::Solvable,
        },
        Parameter {
            name: "speed",
            aliases: &["c", "v"],
            unit: "m/s",
            role: Role::Solvable,
        },
    ],
    solve: wave,
};

fn wave(k: &Knowns) -> Result<Solution, FormulaError> {
    let speed = k.get("speed");
    match (k.get("frequency"), k.get("wavelength")) {
        (Some(f), Some(wavelength)) => speed_from(f, wavelength),
        (Some(f), None) => wavelength_from(f, speed),
        (None, Some(wavelength)) => frequency_from(wavelength, speed),
        (None, None) => Err(k.insufficient(2)),
    }
}

/// Speed given, or c with a note for the explanation.
fn speed_or_light(speed: Option<f64>) -> (f64, &'static str) {
    match speed {
        Some(v) => (v, ""),
        None => (SPEED_OF_LIGHT, " (speed of light assumed)"),
    }
}

fn speed_from(f: f64, wavelength: f64) -> Result<Solution, FormulaError> {
    let v = finite("wave speed", f * wavelength)?;
    Ok(Solution::scalar(
        v,
        "m/s",
        "v = fλ",
        format!("Wave speed = {f} Hz × {wavelength} m = {v} m/s"),
    ))
}

fn wavelength_from(f: f64, speed: Option<f64>) -> Result<Solution, FormulaError> {
    let (v, note) = speed_or_light(speed);
    let wavelength = quotient("wavelength", v, f)?;
    Ok(Solution::scalar(
        wavelength,
        "m",
        "λ = v/f",
        format!("Wavelength = {v} m/s ÷ {f} Hz = {wavelength} m{note}"),
    ))
}

fn frequency_from(wavelength: f64, speed: Option<f64>) -> Result<Solution, FormulaError> {
    let (v, note) = speed_or_light(speed);
    let f = quotient("frequency", v, wavelength)?;
    Ok(Solution::scalar(
        f,
        "Hz",
        "f = v/λ",
        format!("Frequency = {v} m/s ÷ {wavelength} m = {f} Hz{note}"),
    ))
}
