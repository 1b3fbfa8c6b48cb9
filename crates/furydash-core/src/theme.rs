//! Brand and theme resolution
//!
//! Maps a request hostname to its brand configuration, lets a route
//! segment override the brand's country, and derives the single theme
//! class applied to the page body. Unknown hostnames and unknown route
//! segments fall back to the default brand rather than failing.

use crate::types::{Country, ThemeClass};
use serde::{Deserialize, Serialize};

/// Static per-hostname brand bundle: logo, theme class, country prefix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandConfig {
    /// Logo asset path rendered in the page header
    pub logo: String,
    /// Theme class the brand selects by default
    pub theme_class: ThemeClass,
    /// Country prefix the brand defaults to
    pub country: Country,
}

impl BrandConfig {
    fn new(logo: &str, theme_class: ThemeClass, country: Country) -> Self {
        Self {
            logo: logo.to_string(),
            theme_class,
            country,
        }
    }
}

/// Outcome of a theme resolution for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeResolution {
    /// Theme class to apply to the page body
    pub theme_class: ThemeClass,
    /// Resolved country prefix (brand default or route override)
    pub country: Country,
    /// Brand logo asset path
    pub logo: String,
}

/// Exhaustive country-to-theme mapping
pub fn theme_for_country(country: Country) -> ThemeClass {
    match country {
        Country::Chile => ThemeClass::FuryDefault,
        Country::Colombia => ThemeClass::FuryDark,
        Country::Peru => ThemeClass::FuryLight,
    }
}

/// Hostname-keyed brand registry, read-only after construction
#[derive(Debug, Clone)]
pub struct BrandRegistry {
    brands: Vec<(String, BrandConfig)>,
    default: BrandConfig,
}

impl Default for BrandRegistry {
    fn default() -> Self {
        let entries = [
            (
                "ccsqa.andesmotor.cl",
                BrandConfig::new("assets/images/logoAndes.png", ThemeClass::FuryDefault, Country::Chile),
            ),
            (
                "ccscoga.andesmotor.cl",
                BrandConfig::new("assets/images/logoDive.png", ThemeClass::FuryDark, Country::Colombia),
            ),
            (
                "ccspeqa.andesmotor.cl",
                BrandConfig::new("assets/images/logoDivePe.jpg", ThemeClass::FuryLight, Country::Peru),
            ),
        ];
        Self {
            brands: entries
                .into_iter()
                .map(|(host, brand)| (host.to_string(), brand))
                .collect(),
            default: BrandConfig::new(
                "assets/images/logoAndes.png",
                ThemeClass::FuryDefault,
                Country::Chile,
            ),
        }
    }
}

impl BrandRegistry {
    /// Look up the brand for a hostname, falling back to the default entry
    pub fn brand_for_host(&self, hostname: &str) -> &BrandConfig {
        self.brands
            .iter()
            .find(|(host, _)| host == hostname)
            .map(|(_, brand)| brand)
            .unwrap_or(&self.default)
    }

    /// The default brand entry
    pub fn default_brand(&self) -> &BrandConfig {
        &self.default
    }

    /// Resolve the theme for a request
    ///
    /// The hostname selects the brand; a route segment naming a known
    /// country overrides the brand's country prefix. The theme class is
    /// derived from the resolved country. Resolution never fails.
    pub fn resolve(&self, hostname: &str, route_segment: Option<&str>) -> ThemeResolution {
        let brand = self.brand_for_host(hostname);
        let country = route_segment
            .and_then(|segment| segment.parse::<Country>().ok())
            .unwrap_or(brand.country);

        ThemeResolution {
            theme_class: theme_for_country(country),
            country,
            logo: brand.logo.clone(),
        }
    }
}

/// Class-attribute membership on the rendered page body
///
/// Stand-in for the document body's class list. Duplicates are never
/// stored; order of first insertion is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class if not already present
    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Remove a class if present
    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Render as the value of an HTML class attribute
    pub fn as_attr(&self) -> String {
        self.classes.join(" ")
    }
}

/// Apply a resolved theme to a body class list
///
/// Removes every known theme class, then adds exactly the resolved one.
/// Reapplying the same resolution leaves the list unchanged.
pub fn apply_theme(classes: &mut ClassList, theme: ThemeClass) {
    for known in ThemeClass::ALL {
        classes.remove(known.as_str());
    }
    classes.add(theme.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_hostnames_resolve_their_brand() {
        let registry = BrandRegistry::default();

        let cl = registry.resolve("ccsqa.andesmotor.cl", None);
        assert_eq!(cl.theme_class, ThemeClass::FuryDefault);
        assert_eq!(cl.country, Country::Chile);

        let pe = registry.resolve("ccspeqa.andesmotor.cl", None);
        assert_eq!(pe.theme_class, ThemeClass::FuryLight);
        assert_eq!(pe.country, Country::Peru);
    }

    #[test]
    fn test_colombia_host_without_route_override() {
        let registry = BrandRegistry::default();
        let resolved = registry.resolve("ccscoga.andesmotor.cl", None);
        assert_eq!(resolved.theme_class, ThemeClass::FuryDark);
        assert_eq!(resolved.country, Country::Colombia);
    }

    #[test]
    fn test_unknown_hostname_falls_back_to_default() {
        let registry = BrandRegistry::default();
        for hostname in ["localhost", "example.com", "", "CCSQA.ANDESMOTOR.CL"] {
            let resolved = registry.resolve(hostname, None);
            assert_eq!(resolved.theme_class, registry.default_brand().theme_class);
            assert_eq!(resolved.country, registry.default_brand().country);
        }
    }

    #[test]
    fn test_route_segment_overrides_brand_country() {
        let registry = BrandRegistry::default();
        let resolved = registry.resolve("ccsqa.andesmotor.cl", Some("pe"));
        assert_eq!(resolved.country, Country::Peru);
        assert_eq!(resolved.theme_class, ThemeClass::FuryLight);
        // logo still comes from the hostname's brand
        assert_eq!(resolved.logo, "assets/images/logoAndes.png");
    }

    #[test]
    fn test_unknown_route_segment_keeps_brand_country() {
        let registry = BrandRegistry::default();
        let resolved = registry.resolve("ccscoga.andesmotor.cl", Some("ar"));
        assert_eq!(resolved.country, Country::Colombia);
        assert_eq!(resolved.theme_class, ThemeClass::FuryDark);
    }

    #[test]
    fn test_theme_for_country_is_exhaustive() {
        assert_eq!(theme_for_country(Country::Chile), ThemeClass::FuryDefault);
        assert_eq!(theme_for_country(Country::Colombia), ThemeClass::FuryDark);
        assert_eq!(theme_for_country(Country::Peru), ThemeClass::FuryLight);
    }

    #[test]
    fn test_apply_theme_replaces_previous_theme() {
        let mut classes = ClassList::new();
        classes.add("bg-gray-50");
        apply_theme(&mut classes, ThemeClass::FuryDefault);
        apply_theme(&mut classes, ThemeClass::FuryDark);

        assert!(classes.contains("fury-dark"));
        assert!(!classes.contains("fury-default"));
        assert!(classes.contains("bg-gray-50"));
        let theme_count = ThemeClass::ALL
            .iter()
            .filter(|t| classes.contains(t.as_str()))
            .count();
        assert_eq!(theme_count, 1);
    }

    #[test]
    fn test_apply_theme_is_idempotent() {
        let registry = BrandRegistry::default();
        let first = registry.resolve("ccscoga.andesmotor.cl", Some("co"));
        let second = registry.resolve("ccscoga.andesmotor.cl", Some("co"));
        assert_eq!(first, second);

        let mut classes = ClassList::new();
        apply_theme(&mut classes, first.theme_class);
        let snapshot = classes.clone();
        apply_theme(&mut classes, second.theme_class);
        assert_eq!(classes, snapshot);
        assert_eq!(classes.as_attr(), "fury-dark");
    }
}
