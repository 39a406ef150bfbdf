//! Physical constants catalog.
//!
//! A fixed, compiled-in table of CODATA-style constants with units,
//! symbols and uncertainty metadata. Lookups are exact first; a query
//! that only matches by substring is never auto-resolved and always comes
//! back as a partial match for the caller to disambiguate.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tutorlab_core::{ErrorKind, Failure, normalize_key, normalize_opt};

/// Speed of light in vacuum, m/s (exact).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// How many example names an unknown-constant failure carries.
const EXAMPLE_NAMES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Fundamental,
    Electromagnetic,
    Atomic,
    Earth,
    Astronomical,
    Thermodynamic,
    Nuclear,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Fundamental,
        Category::Electromagnetic,
        Category::Atomic,
        Category::Earth,
        Category::Astronomical,
        Category::Thermodynamic,
        Category::Nuclear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fundamental => "fundamental",
            Category::Electromagnetic => "electromagnetic",
            Category::Atomic => "atomic",
            Category::Earth => "earth",
            Category::Astronomical => "astronomical",
            Category::Thermodynamic => "thermodynamic",
            Category::Nuclear => "nuclear",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.as_str()).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ConstantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == key)
            .ok_or(ConstantError::UnknownCategory { category: key })
    }
}

/// Uncertainty annotation of a constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Uncertainty {
    /// Exact by SI definition.
    Defined,
    /// Exact because it is computed from defined constants.
    Derived,
    /// Relative standard uncertainty, as published.
    Relative(&'static str),
    /// No single figure applies (e.g. a mean radius).
    Varies,
}

impl fmt::Display for Uncertainty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uncertainty::Defined => f.write_str("exact (defined)"),
            Uncertainty::Derived => f.write_str("exact (derived)"),
            Uncertainty::Relative(r) => f.write_str(r),
            Uncertainty::Varies => f.write_str("varies"),
        }
    }
}

impl Serialize for Uncertainty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhysicalConstant {
    #[serde(rename = "constant")]
    pub name: &'static str,
    pub value: f64,
    pub units: &'static str,
    pub symbol: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub uncertainty: Uncertainty,
}

macro_rules! constant {
    ($name:literal, $value:expr, $units:literal, $symbol:literal, $desc:literal, $cat:ident, $unc:expr) => {
        PhysicalConstant {
            name: $name,
            value: $value,
            units: $units,
            symbol: $symbol,
            description: $desc,
            category: Category::$cat,
            uncertainty: $unc,
        }
    };
}

use Uncertainty::{Defined, Derived, Relative, Varies};

static CATALOG: [PhysicalConstant; 24] = [
    // Fundamental
    constant!("speed_of_light", SPEED_OF_LIGHT, "m/s", "c", "Speed of light in vacuum", Fundamental, Defined),
    constant!("planck_constant", 6.62607015e-34, "J⋅s", "h", "Planck constant", Fundamental, Defined),
    constant!("reduced_planck_constant", 1.054571817e-34, "J⋅s", "ℏ", "Reduced Planck constant (h/2π)", Fundamental, Defined),
    constant!("elementary_charge", 1.602176634e-19, "C", "e", "Elementary charge", Fundamental, Defined),
    constant!("gravitational_constant", 6.67430e-11, "m³/(kg⋅s²)", "G", "Gravitational constant", Fundamental, Relative("2.2e-5")),
    // Electromagnetic
    constant!("vacuum_permeability", 1.25663706212e-6, "H/m", "μ₀", "Vacuum permeability", Electromagnetic, Relative("1.9e-10")),
    constant!("vacuum_permittivity", 8.8541878128e-12, "F/m", "ε₀", "Vacuum permittivity", Electromagnetic, Relative("1.3e-10")),
    constant!("coulomb_constant", 8.9875517923e9, "N⋅m²/C²", "k", "Coulomb constant (1/(4πε₀))", Electromagnetic, Derived),
    // Atomic and molecular
    constant!("avogadro_number", 6.02214076e23, "1/mol", "Nₐ", "Avogadro number", Atomic, Defined),
    constant!("boltzmann_constant", 1.380649e-23, "J/K", "k_B", "Boltzmann constant", Atomic, Defined),
    constant!("gas_constant", 8.314462618, "J/(mol⋅K)", "R", "Universal gas constant", Atomic, Derived),
    constant!("electron_mass", 9.1093837015e-31, "kg", "mₑ", "Electron rest mass", Atomic, Relative("3.0e-10")),
    constant!("proton_mass", 1.67262192369e-27, "kg", "mₚ", "Proton rest mass", Atomic, Relative("3.1e-10")),
    constant!("neutron_mass", 1.67492749804e-27, "kg", "mₙ", "Neutron rest mass", Atomic, Relative("9.5e-10")),
    constant!("atomic_mass_unit", 1.66053906660e-27, "kg", "u", "Atomic mass unit", Atomic, Relative("5.0e-10")),
    // Earth
    constant!("standard_gravity", 9.80665, "m/s²", "g", "Standard acceleration due to gravity", Earth, Defined),
    constant!("earth_mass", 5.972e24, "kg", "M⊕", "Earth mass", Earth, Relative("4.4e-4")),
    constant!("earth_radius", 6.371e6, "m", "R⊕", "Earth mean radius", Earth, Varies),
    // Astronomical
    constant!("solar_mass", 1.98847e30, "kg", "M☉", "Solar mass", Astronomical, Relative("2.0e-4")),
    constant!("astronomical_unit", 1.495978707e11, "m", "au", "Astronomical unit", Astronomical, Defined),
    // Thermodynamic
    constant!("stefan_boltzmann_constant", 5.670374419e-8, "W/(m²⋅K⁴)", "σ", "Stefan-Boltzmann constant", Thermodynamic, Derived),
    constant!("wien_displacement_constant", 2.897771955e-3, "m⋅K", "b", "Wien displacement law constant", Thermodynamic, Derived),
    // Nuclear
    constant!("fine_structure_constant", 7.2973525693e-3, "dimensionless", "α", "Fine-structure constant", Nuclear, Relative("1.5e-10")),
    constant!("rydberg_constant", 1.0973731568160e7, "1/m", "R∞", "Rydberg constant", Nuclear, Relative("1.9e-12")),
];

/// Every constant, in table order.
pub fn all() -> &'static [PhysicalConstant] {
    &CATALOG
}

/// Exact lookup by (normalized) name.
pub fn get(name: &str) -> Option<&'static PhysicalConstant> {
    let key = normalize_key(name);
    CATALOG.iter().find(|c| c.name == key)
}

pub fn in_category(category: Category) -> Vec<&'static PhysicalConstant> {
    CATALOG.iter().filter(|c| c.category == category).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstantSummary {
    pub name: &'static str,
    pub symbol: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub overview: &'static str,
    pub categories: BTreeMap<Category, Vec<ConstantSummary>>,
    pub total_constants: usize,
    pub usage: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryListing {
    pub category: Category,
    pub constants: Vec<&'static PhysicalConstant>,
    pub count: usize,
}

/// A successful catalog lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Lookup {
    Overview(Overview),
    Category(CategoryListing),
    Exact(&'static PhysicalConstant),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstantError {
    #[error("Category '{category}' not found")]
    UnknownCategory { category: String },

    #[error("Constant '{name}' not found")]
    UnknownConstant { name: String },

    #[error("{} partial match(es) for '{search_term}'. Please specify the exact constant name.", .matches.len())]
    PartialMatch {
        search_term: String,
        matches: Vec<&'static PhysicalConstant>,
    },
}

impl From<ConstantError> for Failure {
    fn from(err: ConstantError) -> Self {
        let message = err.to_string();
        match err {
            ConstantError::UnknownCategory { .. } => Failure::new(ErrorKind::UnknownCategory, message)
                .with_hint("available_categories", Category::names()),
            ConstantError::UnknownConstant { .. } => {
                let examples: Vec<&str> = CATALOG.iter().take(EXAMPLE_NAMES).map(|c| c.name).collect();
                Failure::new(ErrorKind::UnknownConstant, message)
                    .with_hint("available_constants", examples)
                    .with_hint("total_available", CATALOG.len())
                    .with_hint(
                        "suggestion",
                        "Use physics_constants_lookup() without parameters to see all categories",
                    )
            }
            ConstantError::PartialMatch { search_term, matches } => {
                Failure::new(ErrorKind::PartialMatch, message)
                    .with_hint("search_term", search_term)
                    .with_hint("partial_matches", matches)
            }
        }
    }
}

/// Look up constants by name, by category, or list the whole catalog.
///
/// A non-blank `category` takes precedence; when it is given `name` is
/// ignored.
pub fn lookup(name: Option<&str>, category: Option<&str>) -> Result<Lookup, ConstantError> {
    let name = normalize_opt(name);
    let category = normalize_opt(category);
    tracing::debug!(?name, ?category, "Constants lookup");

    match (name, category) {
        (_, Some(category)) => {
            let category: Category = category.parse()?;
            let constants = in_category(category);
            Ok(Lookup::Category(CategoryListing {
                category,
                count: constants.len(),
                constants,
            }))
        }
        (Some(name), None) => lookup_name(name),
        (None, None) => Ok(Lookup::Overview(overview())),
    }
}

fn lookup_name(key: String) -> Result<Lookup, ConstantError> {
    if let Some(constant) = CATALOG.iter().find(|c| c.name == key) {
        return Ok(Lookup::Exact(constant));
    }

    let matches: Vec<&'static PhysicalConstant> = CATALOG
        .iter()
        .filter(|c| c.name.contains(&key) || normalize_key(c.description).contains(&key))
        .collect();

    if matches.is_empty() {
        Err(ConstantError::UnknownConstant { name: key })
    } else {
        Err(ConstantError::PartialMatch {
            search_term: key,
            matches,
        })
    }
}

fn overview() -> Overview {
    let mut categories: BTreeMap<Category, Vec<ConstantSummary>> = BTreeMap::new();
    for c in CATALOG.iter() {
        categories.entry(c.category).or_default().push(ConstantSummary {
            name: c.name,
            symbol: c.symbol,
            description: c.description,
        });
    }
    Overview {
        overview: "Physics Constants Database",
        categories,
        total_constants: CATALOG.len(),
        usage: "Use constant_name for a specific constant or category for listing constants by type",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keys_are_unique_and_normalized() {
        let mut names: Vec<&str> = all().iter().map(|c| c.name).collect();
        for name in &names {
            assert_eq!(normalize_key(name), *name);
        }
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 24);
    }

    #[test]
    fn every_category_is_populated() {
        for category in Category::ALL {
            assert!(!in_category(category).is_empty(), "{category} is empty");
        }
    }

    #[test]
    fn exact_lookup() {
        let Lookup::Exact(c) = lookup(Some("speed_of_light"), None).unwrap() else {
            panic!("expected exact match");
        };
        assert_eq!(c.value, 299_792_458.0);
        assert_eq!(c.symbol, "c");
        assert_eq!(c.uncertainty, Uncertainty::Defined);
    }

    #[test]
    fn lookup_is_case_and_separator_insensitive() {
        let a = lookup(Some("Speed-Of-Light"), None).unwrap();
        let b = lookup(Some("speed_of_light"), None).unwrap();
        let c = lookup(Some("Speed of Light"), None).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn single_partial_match_still_needs_disambiguation() {
        let err = lookup(Some("rydberg"), None).unwrap_err();
        let ConstantError::PartialMatch { matches, search_term } = err else {
            panic!("expected partial match");
        };
        assert_eq!(search_term, "rydberg");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "rydberg_constant");
    }

    #[test]
    fn partial_match_searches_descriptions() {
        let err = lookup(Some("rest mass"), None).unwrap_err();
        let ConstantError::PartialMatch { matches, .. } = err else {
            panic!("expected partial match");
        };
        let names: Vec<&str> = matches.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["electron_mass", "proton_mass", "neutron_mass"]);
    }

    #[test]
    fn partial_match_is_not_fatal() {
        let failure: Failure = lookup(Some("planck"), None).unwrap_err().into();
        assert_eq!(failure.kind, ErrorKind::PartialMatch);
        assert!(!failure.is_fatal());
        assert_eq!(failure.hint("partial_matches").unwrap().as_array().unwrap().len(), 2);
    }

    #[test]
    fn unknown_constant_lists_examples_and_total() {
        let failure: Failure = lookup(Some("nonexistent_constant"), None).unwrap_err().into();
        assert_eq!(failure.kind, ErrorKind::UnknownConstant);
        let examples = failure.hint("available_constants").unwrap().as_array().unwrap();
        assert!(examples.len() <= 10);
        assert_eq!(examples.len(), 10);
        assert_eq!(failure.hint("total_available").unwrap(), all().len());
    }

    #[test]
    fn category_listing() {
        let Lookup::Category(listing) = lookup(None, Some("Earth")).unwrap() else {
            panic!("expected category listing");
        };
        assert_eq!(listing.category, Category::Earth);
        assert_eq!(listing.count, 3);
        assert!(listing.constants.iter().all(|c| c.category == Category::Earth));
    }

    #[test]
    fn unknown_category_lists_categories() {
        let failure: Failure = lookup(None, Some("chemistry")).unwrap_err().into();
        assert_eq!(failure.kind, ErrorKind::UnknownCategory);
        assert_eq!(failure.hint("available_categories").unwrap().as_array().unwrap().len(), 7);
    }

    #[test]
    fn category_takes_precedence_over_name() {
        let Lookup::Category(listing) = lookup(Some("speed_of_light"), Some("earth")).unwrap() else {
            panic!("expected category listing");
        };
        assert_eq!(listing.category, Category::Earth);
        assert!(listing.constants.iter().all(|c| c.name != "speed_of_light"));

        // A blank category falls back to the name.
        assert!(matches!(lookup(Some("electron_mass"), Some(" ")).unwrap(), Lookup::Exact(_)));
    }

    #[test]
    fn no_arguments_gives_overview() {
        let Lookup::Overview(overview) = lookup(None, None).unwrap() else {
            panic!("expected overview");
        };
        assert_eq!(overview.total_constants, 24);
        assert_eq!(overview.categories.len(), 7);
        // Blank strings count as absent.
        assert!(matches!(lookup(Some(""), Some("  ")).unwrap(), Lookup::Overview(_)));
    }

    #[test]
    fn serialized_shapes() {
        let exact = serde_json::to_value(lookup(Some("gravitational_constant"), None).unwrap()).unwrap();
        assert_eq!(exact["constant"], "gravitational_constant");
        assert_eq!(exact["uncertainty"], "2.2e-5");
        assert_eq!(exact["category"], "fundamental");

        let overview = serde_json::to_value(lookup(None, None).unwrap()).unwrap();
        assert_eq!(overview["categories"]["nuclear"][0]["symbol"], "α");
    }

    #[test]
    fn relative_uncertainty_keeps_published_figure() {
        let solar = get("solar_mass").unwrap();
        assert_eq!(solar.uncertainty.to_string(), "2.0e-4");
        let exact = serde_json::to_value(lookup(Some("electron_mass"), None).unwrap()).unwrap();
        assert_eq!(exact["uncertainty"], "3.0e-10");
    }
}
