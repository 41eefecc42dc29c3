//! Core data types: provinces, candidate codes, suggestions, and records.

use std::fmt;

use serde::Deserialize;

use crate::config::CSV_HEADER;
use crate::error_handling::{FetchError, RowError};

/// Province names indexed by id - 1, as used by the INE.
const PROVINCE_NAMES: [&str; 52] = [
    "Araba/Álava",
    "Albacete",
    "Alicante/Alacant",
    "Almería",
    "Ávila",
    "Badajoz",
    "Balears, Illes",
    "Barcelona",
    "Burgos",
    "Cáceres",
    "Cádiz",
    "Castellón/Castelló",
    "Ciudad Real",
    "Córdoba",
    "Coruña, A",
    "Cuenca",
    "Girona",
    "Granada",
    "Guadalajara",
    "Gipuzkoa",
    "Huelva",
    "Huesca",
    "Jaén",
    "León",
    "Lleida",
    "Rioja, La",
    "Lugo",
    "Madrid",
    "Málaga",
    "Murcia",
    "Navarra",
    "Ourense",
    "Asturias",
    "Palencia",
    "Palmas, Las",
    "Pontevedra",
    "Salamanca",
    "Santa Cruz de Tenerife",
    "Cantabria",
    "Segovia",
    "Sevilla",
    "Soria",
    "Tarragona",
    "Teruel",
    "Toledo",
    "Valencia/València",
    "Valladolid",
    "Bizkaia",
    "Zamora",
    "Zaragoza",
    "Ceuta",
    "Melilla",
];

/// A validated province id.
///
/// Constructed only through [`RegionId::new`], which checks the id against the
/// configured bounds before any network activity happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(u8);

impl RegionId {
    /// Validates `id` against `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidRegion` with the rejected id and the bounds.
    pub fn new(id: i64, min: i64, max: i64) -> Result<Self, FetchError> {
        if id < min || id > max {
            return Err(FetchError::InvalidRegion { id, min, max });
        }
        // Two-digit codes only; anything wider cannot form a 5-digit postal code.
        u8::try_from(id)
            .ok()
            .filter(|v| *v <= 99)
            .map(RegionId)
            .ok_or(FetchError::InvalidRegion { id, min, max })
    }

    /// Numeric id.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Province name, when the id is one of the 52 Spanish provinces.
    pub fn name(self) -> Option<&'static str> {
        PROVINCE_NAMES.get(usize::from(self.0).checked_sub(1)?).copied()
    }

    /// Query code for one candidate suffix: 2-digit province + 3-digit key.
    pub fn candidate_code(self, key: u16) -> String {
        format!("{:02}{:03}", self.0, key)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// One element of the service's `suggestions` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Suggestion {
    /// Comma-separated label, e.g. `"01001, Vitoria-Gasteiz, Araba/Álava, País Vasco, ESP"`
    pub text: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// A normalized postal-code entry.
///
/// Field order matches [`Record::HEADER`] and the columns of the cache file.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Country code (`ESP`)
    pub country: String,
    /// Five-digit postal code
    pub postal_code: String,
    /// Locality; may be empty
    pub city: String,
    /// Province name as returned by the service
    pub province: String,
    /// Autonomous community
    pub region: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Record {
    /// Column names, in field order.
    pub const HEADER: [&'static str; 7] = CSV_HEADER;

    /// Serializes the record as a row of strings.
    ///
    /// Coordinates use the shortest representation that parses back to the
    /// same value (`42.8469215`, `-2.671688`).
    pub fn to_row(&self) -> [String; 7] {
        [
            self.country.clone(),
            self.postal_code.clone(),
            self.city.clone(),
            self.province.clone(),
            self.region.clone(),
            self.latitude.to_string(),
            self.longitude.to_string(),
        ]
    }

    /// Rebuilds a record from a stored row.
    ///
    /// # Errors
    ///
    /// Returns `RowError` when the row does not have seven fields or a
    /// coordinate is not a number.
    pub fn from_row<S: AsRef<str>>(row: &[S]) -> Result<Self, RowError> {
        let [country, postal_code, city, province, region, latitude, longitude] = row else {
            return Err(RowError::FieldCount {
                expected: Self::HEADER.len(),
                found: row.len(),
            });
        };

        Ok(Self {
            country: country.as_ref().to_string(),
            postal_code: postal_code.as_ref().to_string(),
            city: city.as_ref().to_string(),
            province: province.as_ref().to_string(),
            region: region.as_ref().to_string(),
            latitude: parse_coordinate("latitude", latitude.as_ref())?,
            longitude: parse_coordinate("longitude", longitude.as_ref())?,
        })
    }
}

fn parse_coordinate(field: &'static str, value: &str) -> Result<f64, RowError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|source| RowError::Coordinate {
            field,
            value: value.to_string(),
            source,
        })
}
