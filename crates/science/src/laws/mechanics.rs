//! Mechanics: Newton's second law, kinetic and potential energy, momentum.

use super::{FormulaError, Knowns, LawDefinition, Parameter, Role, Solution, finite};

const MASS: Parameter = Parameter {
    name: "mass",
    aliases: &["m"],
    unit: "kg",
    role: Role::Required,
};

const VELOCITY: Parameter = Parameter {
    name: "velocity",
    aliases: &["v"],
    unit: "m/s",
    role: Role::Required,
};

pub(super) static NEWTON_SECOND_LAW: LawDefinition = LawDefinition {
    name: "newton_second_law",
    aliases: &["force", "newtons_second_law"],
    summary: "Newton's Second Law states that the acceleration of an object is directly proportional to the net force acting on it and inversely proportional to its mass.",
    formula: "F = ma",
    phenomena: "Explains how forces cause motion - heavier objects need more force to accelerate, lighter objects accelerate more easily with the same force",
    calculates: "Force (N)",
    requirement: None,
    parameters: &[
        MASS,
        Parameter {
            name: "acceleration",
            aliases: &["a"],
            unit: "m/s²",
            role: Role::Required,
        },
    ],
    solve: force,
};

pub(super) static KINETIC_ENERGY: LawDefinition = LawDefinition {
    name: "kinetic_energy",
    aliases: &[],
    summary: "Kinetic energy is the energy possessed by an object due to its motion. It depends on both mass and velocity.",
    formula: "KE = ½mv²",
    phenomena: "Moving objects can do work - a moving car can push another car, a flying ball can break glass",
    calculates: "Kinetic Energy (J)",
    requirement: None,
    parameters: &[MASS, VELOCITY],
    solve: kinetic_energy,
};

pub(super) static POTENTIAL_ENERGY: LawDefinition = LawDefinition {
    name: "potential_energy",
    aliases: &["gravitational_potential_energy"],
    summary: "Gravitational potential energy is the energy stored in an object due to its position in a gravitational field.",
    formula: "PE = mgh",
    phenomena: "Objects at height can fall and do work - water behind a dam, a rock on a cliff",
    calculates: "Potential Energy (J)",
    requirement: None,
    parameters: &[
        MASS,
        Parameter {
            name: "height",
            aliases: &["h"],
            unit: "m",
            role: Role::Required,
        },
        Parameter {
            name: "gravity",
            aliases: &["g"],
            unit: "m/s²",
            role: Role::Optional(9.81),
        },
    ],
    solve: potential_energy,
};

pub(super) static MOMENTUM: LawDefinition = LawDefinition {
    name: "momentum",
    aliases: &["linear_momentum"],
    summary: "Momentum is the quantity of motion of a moving body, equal to the product of its mass and velocity.",
    formula: "p = mv",
    phenomena: "Heavy, fast-moving objects are harder to stop - why trucks take longer to brake than cars",
    calculates: "Momentum (kg⋅m/s)",
    requirement: None,
    parameters: &[MASS, VELOCITY],
    solve: momentum,
};

fn force(k: &Knowns) -> Result<Solution, FormulaError> {
    let m = k.require("mass")?;
    let a = k.require("acceleration")?;
    let f = finite("force", m * a)?;
    Ok(Solution::scalar(
        f,
        "N (Newtons)",
        "F = ma",
        format!("Force = {m} kg × {a} m/s² = {f} N"),
    ))
}

fn kinetic_energy(k: &Knowns) -> Result<Solution, FormulaError> {
    let m = k.require("mass")?;
    let v = k.require("velocity")?;
    let ke = finite("kinetic energy", 0.5 * m * v.powi(2))?;
    Ok(Solution::scalar(
        ke,
        "J (Joules)",
        "KE = ½mv²",
        format!("Kinetic Energy = ½ × {m} kg × ({v} m/s)² = {ke} J"),
    ))
}

fn potential_energy(k: &Knowns) -> Result<Solution, FormulaError> {
    let m = k.require("mass")?;
    let h = k.require("height")?;
    let g = k.require("gravity")?;
    let pe = finite("potential energy", m * g * h)?;
    Ok(Solution::scalar(
        pe,
        "J (Joules)",
        "PE = mgh",
        format!("Potential Energy = {m} kg × {g} m/s² × {h} m = {pe} J"),
    ))
}

fn momentum(k: &Knowns) -> Result<Solution, FormulaError> {
    let m = k.require("mass")?;
    let v = k.require("velocity")?;
    let p = finite("momentum", m * v)?;
    Ok(Solution::scalar(
        p,
        "kg⋅m/s",
        "p = mv",
        format!("Momentum = {m} kg × {v} m/s = {p} kg⋅m/s"),
    ))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn newton_second_law() {
        let s = solve("newton_second_law", &[("mass", 10.0), ("acceleration", 9.8)]).unwrap();
        assert!(approx(s.result.scalar().unwrap(), 98.0));
        assert_eq!(s.formula, "F = ma");
    }

    #[test]
    fn force_alias_and_symbols() {
        let s = solve("force", &[("m", 2.0), ("a", 3.0)]).unwrap();
        assert_eq!(s.result.scalar(), Some(6.0));
        assert_eq!(s.explanation, "Force = 2 kg × 3 m/s² = 6 N");
    }

    #[test]
    fn kinetic_energy_uses_square() {
        let s = solve("kinetic_energy", &[("mass", 4.0), ("velocity", -3.0)]).unwrap();
        assert_eq!(s.result.scalar(), Some(18.0));
    }

    #[test]
    fn potential_energy_defaults_gravity() {
        let s = solve("potential_energy", &[("mass", 2.0), ("height", 10.0)]).unwrap();
        assert!(approx(s.result.scalar().unwrap(), 196.2));

        let s = solve("potential_energy", &[("mass", 2.0), ("height", 10.0), ("g", 1.62)]).unwrap();
        assert!(approx(s.result.scalar().unwrap(), 32.4));
    }

    #[test]
    fn potential_energy_needs_height() {
        let err = solve("potential_energy", &[("mass", 2.0), ("gravity", 9.8)]).unwrap_err();
        let FormulaError::MissingParameters { missing, .. } = err else {
            panic!("expected missing parameters");
        };
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].name, "height");
    }

    #[test]
    fn momentum_requires_both() {
        let err = solve("momentum", &[("velocity", 3.0)]).unwrap_err();
        assert!(err.to_string().contains("mass (kg)"));
        assert!(!err.to_string().contains("velocity"));
    }

    #[test]
    fn overflow_is_reported() {
        let err = solve("momentum", &[("mass", 1e200), ("velocity", 1e200)]).unwrap_err();
        assert!(matches!(err, FormulaError::Calculation { .. }));
    }
}
