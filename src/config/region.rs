//! Selling Partner API regions and marketplaces.
//!
//! Every marketplace is served by exactly one regional endpoint. The
//! [`Marketplace`] chosen in the configuration decides which [`Region`] the
//! client talks to unless a region or endpoint override is set.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Selling Partner API region.
///
/// # Example
///
/// ```rust
/// use sp_api_shipping::Region;
///
/// assert_eq!(Region::Europe.endpoint(), "https://sellingpartnerapi-eu.amazon.com");
/// assert_eq!(
///     Region::Europe.sandbox_endpoint(),
///     "https://sandbox.sellingpartnerapi-eu.amazon.com"
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// North America (Canada, US, Mexico, Brazil).
    NorthAmerica,
    /// Europe, Middle East, Africa and India.
    Europe,
    /// Far East (Singapore, Australia, Japan).
    FarEast,
}

impl Region {
    /// Returns the production endpoint for this region.
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::NorthAmerica => "https://sellingpartnerapi-na.amazon.com",
            Self::Europe => "https://sellingpartnerapi-eu.amazon.com",
            Self::FarEast => "https://sellingpartnerapi-fe.amazon.com",
        }
    }

    /// Returns the sandbox endpoint for this region.
    #[must_use]
    pub const fn sandbox_endpoint(&self) -> &'static str {
        match self {
            Self::NorthAmerica => "https://sandbox.sellingpartnerapi-na.amazon.com",
            Self::Europe => "https://sandbox.sellingpartnerapi-eu.amazon.com",
            Self::FarEast => "https://sandbox.sellingpartnerapi-fe.amazon.com",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NorthAmerica => write!(f, "na"),
            Self::Europe => write!(f, "eu"),
            Self::FarEast => write!(f, "fe"),
        }
    }
}

/// An Amazon marketplace.
///
/// # Example
///
/// ```rust
/// use sp_api_shipping::{Marketplace, Region};
///
/// let marketplace: Marketplace = "de".parse().unwrap();
/// assert_eq!(marketplace, Marketplace::DE);
/// assert_eq!(marketplace.marketplace_id(), "A1PA6795UKMFR9");
/// assert_eq!(marketplace.region(), Region::Europe);
/// ```
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marketplace {
    /// United States.
    US,
    /// Canada.
    CA,
    /// Mexico.
    MX,
    /// Brazil.
    BR,
    /// United Kingdom.
    UK,
    /// Germany.
    DE,
    /// France.
    FR,
    /// Italy.
    IT,
    /// Spain.
    ES,
    /// Netherlands.
    NL,
    /// Sweden.
    SE,
    /// Poland.
    PL,
    /// Turkey.
    TR,
    /// Belgium.
    BE,
    /// Egypt.
    EG,
    /// Saudi Arabia.
    SA,
    /// United Arab Emirates.
    AE,
    /// India.
    IN,
    /// Japan.
    JP,
    /// Australia.
    AU,
    /// Singapore.
    SG,
}

impl Marketplace {
    /// All known marketplaces.
    pub const ALL: &'static [Self] = &[
        Self::US,
        Self::CA,
        Self::MX,
        Self::BR,
        Self::UK,
        Self::DE,
        Self::FR,
        Self::IT,
        Self::ES,
        Self::NL,
        Self::SE,
        Self::PL,
        Self::TR,
        Self::BE,
        Self::EG,
        Self::SA,
        Self::AE,
        Self::IN,
        Self::JP,
        Self::AU,
        Self::SG,
    ];

    /// Returns the obfuscated marketplace identifier used in request bodies.
    #[must_use]
    pub const fn marketplace_id(&self) -> &'static str {
        match self {
            Self::US => "ATVPDKIKX0DER",
            Self::CA => "A2EUQ1WTGCTBG2",
            Self::MX => "A1AM78C64UM0Y8",
            Self::BR => "A2Q3Y263D00KWC",
            Self::UK => "A1F83G8C2ARO7P",
            Self::DE => "A1PA6795UKMFR9",
            Self::FR => "A13V1IB3VIYZZH",
            Self::IT => "APJ6JRA9NG5V4",
            Self::ES => "A1RKKUPIHCS9HS",
            Self::NL => "A1805IZSGTT6HS",
            Self::SE => "A2NODRKZP88ZB9",
            Self::PL => "A1C3SOZRARQ6R3",
            Self::TR => "A33AVAJ2PDY3EV",
            Self::BE => "AMEN7PMS3EDWL",
            Self::EG => "ARBP9OOSHTCHU",
            Self::SA => "A17E79C6D8DWNP",
            Self::AE => "A2VIGQ35RCS4UG",
            Self::IN => "A21TJRUUN4KGV",
            Self::JP => "A1VC38T7YXB528",
            Self::AU => "A39IBJ37TRP1C6",
            Self::SG => "A19VAU5U5O7RUS",
        }
    }

    /// Returns the region whose endpoint serves this marketplace.
    #[must_use]
    pub const fn region(&self) -> Region {
        match self {
            Self::US | Self::CA | Self::MX | Self::BR => Region::NorthAmerica,
            Self::JP | Self::AU | Self::SG => Region::FarEast,
            _ => Region::Europe,
        }
    }

    /// Returns the two-letter country code of this marketplace.
    #[must_use]
    pub const fn country_code(&self) -> &'static str {
        match self {
            Self::US => "US",
            Self::CA => "CA",
            Self::MX => "MX",
            Self::BR => "BR",
            Self::UK => "UK",
            Self::DE => "DE",
            Self::FR => "FR",
            Self::IT => "IT",
            Self::ES => "ES",
            Self::NL => "NL",
            Self::SE => "SE",
            Self::PL => "PL",
            Self::TR => "TR",
            Self::BE => "BE",
            Self::EG => "EG",
            Self::SA => "SA",
            Self::AE => "AE",
            Self::IN => "IN",
            Self::JP => "JP",
            Self::AU => "AU",
            Self::SG => "SG",
        }
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.country_code())
    }
}

impl FromStr for Marketplace {
    type Err = ConfigError;

    /// Parses a country code, case-insensitively. `GB` is accepted as an
    /// alias for `UK`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        if code == "GB" {
            return Ok(Self::UK);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.country_code() == code)
            .ok_or(ConfigError::UnknownMarketplace {
                code: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_endpoints() {
        assert_eq!(
            Region::NorthAmerica.endpoint(),
            "https://sellingpartnerapi-na.amazon.com"
        );
        assert_eq!(
            Region::FarEast.sandbox_endpoint(),
            "https://sandbox.sellingpartnerapi-fe.amazon.com"
        );
    }

    #[test]
    fn test_marketplace_regions() {
        assert_eq!(Marketplace::US.region(), Region::NorthAmerica);
        assert_eq!(Marketplace::BR.region(), Region::NorthAmerica);
        assert_eq!(Marketplace::IN.region(), Region::Europe);
        assert_eq!(Marketplace::AE.region(), Region::Europe);
        assert_eq!(Marketplace::JP.region(), Region::FarEast);
        assert_eq!(Marketplace::SG.region(), Region::FarEast);
    }

    #[test]
    fn test_marketplace_from_str() {
        assert_eq!("US".parse::<Marketplace>().unwrap(), Marketplace::US);
        assert_eq!("jp".parse::<Marketplace>().unwrap(), Marketplace::JP);
        assert_eq!("GB".parse::<Marketplace>().unwrap(), Marketplace::UK);
        assert!(matches!(
            "XX".parse::<Marketplace>(),
            Err(ConfigError::UnknownMarketplace { code }) if code == "XX"
        ));
    }

    #[test]
    fn test_every_marketplace_parses_from_its_country_code() {
        for marketplace in Marketplace::ALL {
            let parsed: Marketplace = marketplace.country_code().parse().unwrap();
            assert_eq!(&parsed, marketplace);
        }
    }

    #[test]
    fn test_marketplace_ids_are_unique() {
        let mut ids: Vec<&str> = Marketplace::ALL.iter().map(Marketplace::marketplace_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Marketplace::ALL.len());
    }
}
