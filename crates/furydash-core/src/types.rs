//! Basic types for the core dashboard module

use serde::{Deserialize, Serialize};

/// Country enumeration
///
/// Each country has a lowercase route segment ("cl", "co", "pe") and an
/// uppercase prefix used for display and brand matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Country {
    /// Chile ("CL")
    #[serde(rename = "CL")]
    Chile,
    /// Colombia ("CO")
    #[serde(rename = "CO")]
    Colombia,
    /// Peru ("PE")
    #[serde(rename = "PE")]
    Peru,
}

impl Country {
    /// All known countries, in route declaration order
    pub const ALL: [Country; 3] = [Country::Chile, Country::Colombia, Country::Peru];

    /// Route path segment for the country page
    pub fn route_segment(&self) -> &'static str {
        match self {
            Country::Chile => "cl",
            Country::Colombia => "co",
            Country::Peru => "pe",
        }
    }

    /// Human-readable country name
    pub fn name(&self) -> &'static str {
        match self {
            Country::Chile => "Chile",
            Country::Colombia => "Colombia",
            Country::Peru => "Peru",
        }
    }
}

impl Default for Country {
    fn default() -> Self {
        Country::Chile
    }
}

impl std::str::FromStr for Country {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cl" => Ok(Country::Chile),
            "co" => Ok(Country::Colombia),
            "pe" => Ok(Country::Peru),
            _ => Err(format!("Invalid country segment: {}", s)),
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Country::Chile => write!(f, "CL"),
            Country::Colombia => write!(f, "CO"),
            Country::Peru => write!(f, "PE"),
        }
    }
}

/// Transaction status enumeration
///
/// The known statuses are Completed and Pending; the set is open, so
/// unknown values are preserved as-is rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionStatus {
    /// Transaction has settled
    Completed,
    /// Transaction is awaiting settlement
    Pending,
    /// Status outside the known set
    Other(String),
}

impl Default for TransactionStatus {
    fn default() -> Self {
        TransactionStatus::Pending
    }
}

impl From<String> for TransactionStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "completed" => TransactionStatus::Completed,
            "pending" => TransactionStatus::Pending,
            _ => TransactionStatus::Other(s),
        }
    }
}

impl From<TransactionStatus> for String {
    fn from(status: TransactionStatus) -> Self {
        status.to_string()
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Completed => write!(f, "Completed"),
            TransactionStatus::Pending => write!(f, "Pending"),
            TransactionStatus::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Theme class enumeration
///
/// A mutually-exclusive document-level style attribute selecting the
/// color palette. Exactly one theme class is present on the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeClass {
    /// Default palette
    FuryDefault,
    /// Dark palette
    FuryDark,
    /// Light palette
    FuryLight,
    /// Flat palette
    FuryFlat,
}

impl ThemeClass {
    /// All known theme classes
    pub const ALL: [ThemeClass; 4] = [
        ThemeClass::FuryDefault,
        ThemeClass::FuryDark,
        ThemeClass::FuryLight,
        ThemeClass::FuryFlat,
    ];

    /// CSS class name
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeClass::FuryDefault => "fury-default",
            ThemeClass::FuryDark => "fury-dark",
            ThemeClass::FuryLight => "fury-light",
            ThemeClass::FuryFlat => "fury-flat",
        }
    }
}

impl Default for ThemeClass {
    fn default() -> Self {
        ThemeClass::FuryDefault
    }
}

impl std::str::FromStr for ThemeClass {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fury-default" => Ok(ThemeClass::FuryDefault),
            "fury-dark" => Ok(ThemeClass::FuryDark),
            "fury-light" => Ok(ThemeClass::FuryLight),
            "fury-flat" => Ok(ThemeClass::FuryFlat),
            _ => Err(format!("Invalid theme class: {}", s)),
        }
    }
}

impl std::fmt::Display for ThemeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
