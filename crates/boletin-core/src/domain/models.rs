use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{BulletinDate, ProductFilter, ValidationError};

/// Sale-unit packaging a product row is priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Presentation {
    Kilo,
    Bolsa,
    Bulto,
    Caja,
    CajaDeMadera,
    Docena,
    Tonelada,
    Rollo,
    Atado,
    Canastilla,
    Paquete,
    Libras,
}

impl Presentation {
    pub const ALL: [Self; 12] = [
        Self::Kilo,
        Self::Bolsa,
        Self::Bulto,
        Self::Caja,
        Self::CajaDeMadera,
        Self::Docena,
        Self::Tonelada,
        Self::Rollo,
        Self::Atado,
        Self::Canastilla,
        Self::Paquete,
        Self::Libras,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kilo => "KILO",
            Self::Bolsa => "BOLSA",
            Self::Bulto => "BULTO",
            Self::Caja => "CAJA",
            Self::CajaDeMadera => "CAJA DE MADERA",
            Self::Docena => "DOCENA",
            Self::Tonelada => "TONELADA",
            Self::Rollo => "ROLLO",
            Self::Atado => "ATADO",
            Self::Canastilla => "CANASTILLA",
            Self::Paquete => "PAQUETE",
            Self::Libras => "LIBRAS",
        }
    }

    /// Case-insensitive, whitespace-tolerant lookup against the closed vocabulary.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = input
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase();

        Self::ALL
            .into_iter()
            .find(|presentation| presentation.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownPresentation {
                value: input.to_owned(),
            })
    }
}

impl Display for Presentation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Presentation {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Presentation> for String {
    fn from(value: Presentation) -> Self {
        value.as_str().to_owned()
    }
}

/// Day-over-day price trend printed in the last column of each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Variation {
    Stable,
    Down,
    Up,
}

impl Variation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "Estable",
            Self::Down => "Bajo",
            Self::Up => "Subió",
        }
    }

    /// Accepts the three keywords only. Every casing and accent spelling of
    /// "subió" (`Subio`, `SubiÓ`, `Subío`, ...) maps to [`Variation::Up`].
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let folded: String = input.trim().to_lowercase();

        match folded.as_str() {
            "estable" => Ok(Self::Stable),
            "bajo" => Ok(Self::Down),
            "subio" | "subió" | "subío" | "subíó" => Ok(Self::Up),
            _ => Err(ValidationError::UnknownVariation {
                value: input.to_owned(),
            }),
        }
    }
}

impl Display for Variation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Variation {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Variation> for String {
    fn from(value: Variation) -> Self {
        value.as_str().to_owned()
    }
}

/// One priced product line of the bulletin.
///
/// Money columns keep the publisher's grouping and decimal punctuation
/// verbatim; they are never converted to numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRow {
    pub name: String,
    pub presentation: Presentation,
    pub quantity: u32,
    pub unit_of_measure: String,
    pub price_grade_extra: String,
    pub price_grade_first: String,
    pub price_grade_unit: String,
    pub variation: Variation,
}

/// What the caller asked for: an optional date and a product allow-list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulletinRequest {
    pub target_date: Option<BulletinDate>,
    pub wanted_products: ProductFilter,
}

impl BulletinRequest {
    pub fn new(target_date: Option<BulletinDate>, wanted_products: ProductFilter) -> Self {
        Self {
            target_date,
            wanted_products,
        }
    }

    /// Builds a request from the loosely-typed inbound strings. A malformed
    /// date is treated as absent rather than rejected.
    pub fn from_raw(date_ymd: Option<&str>, product_names: Option<&str>) -> Self {
        Self {
            target_date: BulletinDate::from_ymd_lenient(date_ymd),
            wanted_products: ProductFilter::parse_csv(product_names),
        }
    }
}

/// Bytes of the bulletin that was actually found, plus where and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBulletin {
    used_date: BulletinDate,
    source_url: String,
    raw_bytes: Vec<u8>,
    attempts: u32,
}

impl ResolvedBulletin {
    pub fn new(
        used_date: BulletinDate,
        source_url: impl Into<String>,
        raw_bytes: Vec<u8>,
        attempts: u32,
    ) -> Self {
        Self {
            used_date,
            source_url: source_url.into(),
            raw_bytes,
            attempts,
        }
    }

    pub const fn used_date(&self) -> BulletinDate {
        self.used_date
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw_bytes
    }

    /// Number of fetches spent before this bulletin was found (1-based).
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }
}

/// Externally visible outcome of one `GetPrices` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletinResult {
    pub used_date: BulletinDate,
    pub source_url: String,
    pub rows: Vec<PriceRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presentation_accepts_compound_box_label() {
        assert_eq!(
            Presentation::parse("caja  de\nmadera").expect("known"),
            Presentation::CajaDeMadera
        );
        assert_eq!(Presentation::parse("Bolsa").expect("known"), Presentation::Bolsa);
        assert!(Presentation::parse("BARRIL").is_err());
    }

    #[test]
    fn variation_canonicalizes_rise_spellings() {
        for input in ["Subio", "Subió", "SubiÓ", "SUBIO", "subío", "Subíó", "SUBÍÓ"] {
            assert_eq!(Variation::parse(input).expect(input), Variation::Up, "{input}");
        }
        assert_eq!(Variation::Up.as_str(), "Subió");
    }

    #[test]
    fn variation_leaves_other_keywords_alone() {
        assert_eq!(Variation::parse("Estable").expect("known").as_str(), "Estable");
        assert_eq!(Variation::parse("Bajo").expect("known").as_str(), "Bajo");
        assert!(Variation::parse("Bajió").is_err());
        assert!(Variation::parse("Radio").is_err());
    }

    #[test]
    fn price_row_serializes_with_camel_case_keys() {
        let row = PriceRow {
            name: String::from("FRESA"),
            presentation: Presentation::Bolsa,
            quantity: 12,
            unit_of_measure: String::from("CAJA POR KILO"),
            price_grade_extra: String::from("2.500"),
            price_grade_first: String::from("2.800"),
            price_grade_unit: String::from("230"),
            variation: Variation::Up,
        };

        let value = serde_json::to_value(&row).expect("serializes");
        assert_eq!(value["unitOfMeasure"], "CAJA POR KILO");
        assert_eq!(value["priceGradeExtra"], "2.500");
        assert_eq!(value["presentation"], "BOLSA");
        assert_eq!(value["variation"], "Subió");
    }

    #[test]
    fn raw_request_drops_malformed_date() {
        let request = BulletinRequest::from_raw(Some("2024-01-01"), Some("papa, tomate"));
        assert_eq!(request.target_date, None);
        assert_eq!(request.wanted_products.len(), 2);
    }
}
