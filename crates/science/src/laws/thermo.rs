//! Thermodynamics: the ideal gas law, PV = nRT.

use super::{FormulaError, Knowns, LawDefinition, Parameter, Role, Solution, quotient};

pub(super) static IDEAL_GAS_LAW: LawDefinition = LawDefinition {
    name: "ideal_gas_law",
    aliases: &["ideal_gas", "gas_law"],
    summary: "The Ideal Gas Law relates pressure, volume, temperature, and amount of gas for an ideal gas.",
    formula: "PV = nRT",
    phenomena: "Explains gas behavior - why balloons expand when heated, how pressure cookers work, atmospheric pressure changes",
    calculates: "Missing gas parameter",
    requirement: Some("need 3 of 4"),
    parameters: &[
        Parameter {
            name: "pressure",
            aliases: &["p"],
            unit: "Pa",
            role: Role::Solvable,
        },
        Parameter {
            name: "volume",
            aliases: &["v"],
            unit: "m³",
            role: Role::Solvable,
        },
        Parameter {
            name: "moles",
            aliases: &["n"],
            unit: "mol",
            role: Role::Solvable,
        },
        Parameter {
            name: "temperature",
            aliases: &["t"],
            unit: "K",
            role: Role::Solvable,
        },
        Parameter {
            name: "gas_constant",
            aliases: &["r"],
            unit: "J/(mol⋅K)",
            role: Role::Optional(8.314),
        },
    ],
    solve: ideal_gas,
};

const QUANTITIES: [&str; 4] = ["pressure", "volume", "moles", "temperature"];

fn ideal_gas(k: &Knowns) -> Result<Solution, FormulaError> {
    match k.solvable_known() {
        0..=2 => return Err(k.insufficient(3)),
        4 => {
            return Err(FormulaError::Overdetermined {
                law: IDEAL_GAS_LAW.name,
                supplied: QUANTITIES.to_vec(),
            });
        }
        _ => {}
    }

    let r = k.require("gas_constant")?;
    match (k.get("pressure"), k.get("volume"), k.get("moles"), k.get("temperature")) {
        (None, Some(v), Some(n), Some(t)) => {
            let p = quotient("pressure", n * r * t, v)?;
            Ok(Solution::scalar(
                p,
                "Pa (Pascals)",
                "P = nRT/V",
                format!("Pressure = {n} mol × {r} J/(mol⋅K) × {t} K / {v} m³ = {p} Pa"),
            ))
        }
        (Some(p), None, Some(n), Some(t)) => {
            let v = quotient("volume", n * r * t, p)?;
            Ok(Solution::scalar(
                v,
                "m³",
                "V = nRT/P",
                format!("Volume = {n} mol × {r} J/(mol⋅K) × {t} K / {p} Pa = {v} m³"),
            ))
        }
        (Some(p), Some(v), None, Some(t)) => {
            let n = quotient("moles", p * v, r * t)?;
            Ok(Solution::scalar(
                n,
                "mol",
                "n = PV/(RT)",
                format!("Moles = {p} Pa × {v} m³ / ({r} J/(mol⋅K) × {t} K) = {n} mol"),
            ))
        }
        (Some(p), Some(v), Some(n), None) => {
            let t = quotient("temperature", p * v, n * r)?;
            Ok(Solution::scalar(
                t,
                "K (Kelvin)",
                "T = PV/(nR)",
                format!("Temperature = {p} Pa × {v} m³ / ({n} mol × {r} J/(mol⋅K)) = {t} K"),
            ))
        }
        _ => Err(k.insufficient(3)),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::{ErrorKind, Failure};
    use super::*;

    #[test]
    fn temperature_from_pressure_volume_moles() {
        let (p, v, n) = (101_325.0, 0.0224, 1.0);
        let s = solve("ideal_gas_law", &[("pressure", p), ("volume", v), ("moles", n)]).unwrap();
        assert!(approx(s.result.scalar().unwrap(), p * v / (n * 8.314)));
        assert_eq!(s.formula, "T = PV/(nR)");
    }

    #[test]
    fn pressure_from_the_rest() {
        let s = solve("ideal_gas_law", &[("n", 2.0), ("T", 300.0), ("V", 0.05)]).unwrap();
        assert!(approx(s.result.scalar().unwrap(), 2.0 * 8.314 * 300.0 / 0.05));
    }

    #[test]
    fn volume_and_moles() {
        let v = solve("ideal_gas_law", &[("p", 1000.0), ("n", 1.0), ("t", 100.0)]).unwrap();
        assert!(approx(v.result.scalar().unwrap(), 0.8314));
        let n = solve("ideal_gas_law", &[("p", 8314.0), ("v", 1.0), ("t", 1000.0)]).unwrap();
        assert!(approx(n.result.scalar().unwrap(), 1.0));
    }

    #[test]
    fn gas_constant_override() {
        let s = solve("ideal_gas_law", &[("p", 1.0), ("v", 1.0), ("n", 1.0), ("R", 1.0)]).unwrap();
        assert_eq!(s.result.scalar(), Some(1.0));
    }

    #[test]
    fn two_of_four_is_insufficient() {
        let failure: Failure = solve("ideal_gas_law", &[("pressure", 1.0), ("volume", 1.0)]).unwrap_err().into();
        assert_eq!(failure.kind, ErrorKind::InsufficientParameters);
        assert_eq!(failure.hint("needed").unwrap(), 3);
    }

    #[test]
    fn all_four_is_overdetermined() {
        let err = solve(
            "ideal_gas_law",
            &[("pressure", 1.0), ("volume", 1.0), ("moles", 1.0), ("temperature", 1.0)],
        )
        .unwrap_err();
        assert!(matches!(err, FormulaError::Overdetermined { .. }));
    }

    #[test]
    fn zero_moles_is_a_calculation_error() {
        let err = solve("ideal_gas_law", &[("pressure", 1.0), ("volume", 1.0), ("moles", 0.0)]).unwrap_err();
        assert!(matches!(err, FormulaError::Calculation { .. }));
    }
}
