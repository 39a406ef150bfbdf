//! Optics: refraction by Snell's law.

use super::{FormulaError, Knowns, LawDefinition, Parameter, Role, Solution, quotient};

pub(super) static SNELLS_LAW: LawDefinition = LawDefinition {
    name: "snells_law",
    aliases: &["snell", "refraction"],
    summary: "Snell's Law describes how light bends when passing from one medium to another with different refractive indices.",
    formula: "n₁sin(θ₁) = n₂sin(θ₂)",
    phenomena: "Explains refraction - why straws look bent in water, how lenses focus light, rainbows, fiber optics",
    calculates: "Refraction angle (degrees)",
    requirement: None,
    parameters: &[
        Parameter {
            name: "n1",
            aliases: &["index1"],
            unit: "refractive index",
            role: Role::Required,
        },
        Parameter {
            name: "n2",
            aliases: &["index2"],
            unit: "refractive index",
            role: Role::Required,
        },
        Parameter {
            name: "theta1",
            aliases: &["angle1"],
            unit: "degrees",
            role: Role::Required,
        },
    ],
    solve: refraction,
};

fn refraction(k: &Knowns) -> Result<Solution, FormulaError> {
    let n1 = k.require("n1")?;
    let n2 = k.require("n2")?;
    let theta1 = k.require("theta1")?;

    let sin_theta2 = quotient("refraction angle", n1 * theta1.to_radians().sin(), n2)?;
    if sin_theta2.abs() > 1.0 {
        let critical_angle = (n1 > n2).then(|| (n2 / n1).asin().to_degrees());
        return Err(FormulaError::TotalInternalReflection { critical_angle });
    }

    let theta2 = sin_theta2.asin().to_degrees();
    Ok(Solution::scalar(
        theta2,
        "degrees",
        "θ₂ = arcsin(n₁sin(θ₁)/n₂)",
        format!("θ₂ = arcsin({n1}×sin({theta1}°)/{n2}) = {theta2:.2}°"),
    ))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::{ErrorKind, Failure};
    use super::*;

    #[test]
    fn air_into_water_bends_toward_normal() {
        let s = solve("snells_law", &[("n1", 1.0), ("n2", 1.33), ("theta1", 30.0)]).unwrap();
        let theta2 = s.result.scalar().unwrap();
        assert!(approx(theta2, (0.5f64 / 1.33).asin().to_degrees()));
        assert!(theta2 < 30.0);
        assert!(s.explanation.ends_with(&format!("= {theta2:.2}°")));
    }

    #[test]
    fn normal_incidence_passes_straight() {
        let s = solve("snell", &[("index1", 1.5), ("index2", 1.0), ("angle1", 0.0)]).unwrap();
        assert_eq!(s.result.scalar(), Some(0.0));
    }

    #[test]
    fn glass_to_air_past_critical_angle() {
        let err = solve("snells_law", &[("n1", 1.5), ("n2", 1.0), ("theta1", 60.0)]).unwrap_err();
        let FormulaError::TotalInternalReflection { critical_angle } = err.clone() else {
            panic!("expected total internal reflection");
        };
        assert!(approx(critical_angle.unwrap(), (1.0f64 / 1.5).asin().to_degrees()));

        let failure: Failure = err.into();
        assert_eq!(failure.kind, ErrorKind::TotalInternalReflection);
        assert!(failure.hint("critical_angle").is_some());
    }

    #[test]
    fn zero_second_index_is_a_calculation_error() {
        let err = solve("snells_law", &[("n1", 1.0), ("n2", 0.0), ("theta1", 10.0)]).unwrap_err();
        assert!(matches!(err, FormulaError::Calculation { .. }));
    }
}
