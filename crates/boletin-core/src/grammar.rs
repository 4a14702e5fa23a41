//! Row grammar for bulletin text.
//!
//! Each priced line reads, left to right:
//!
//! ```text
//! NAME  PRESENTATION  QUANTITY  UNIT OF MEASURE  $EXTRA  $FIRST  $UNIT  VARIATION
//! FRESA BOLSA         12        CAJA POR KILO    $2.500  $2.800  $230   Estable
//! ```
//!
//! The whole extracted text is scanned in one pass. Anything that does not
//! fit this shape (titles, column headers, footnotes, page breaks) is
//! skipped without error, so callers never pre-clean the text.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::{Presentation, PriceRow, Variation};

/// Upper bound on the number of words in a product name.
pub const MAX_NAME_WORDS: usize = 6;

/// One name word: starts with a capital letter (or an opening parenthesis),
/// so bare numbers such as dates or a truncated row's prices never start or
/// extend a name.
const NAME_WORD: &str = r"[\p{Lu}(][\p{Lu}0-9.,/()'&\-]*";

/// Upper-case section headings and column titles printed between rows.
/// A leading run of these is dropped from a matched name.
const LAYOUT_WORDS: &[&str] = &[
    "ABARROTES",
    "CALIDAD",
    "CANTIDAD",
    "DE",
    "EXTRA",
    "FRUTAS",
    "GRANOS",
    "HORTALIZAS",
    "IMPORTADAS",
    "IMPORTADOS",
    "LACTEOS",
    "LÁCTEOS",
    "MEDIDA",
    "NACIONALES",
    "PRECIO",
    "PRECIOS",
    "PRESENTACION",
    "PRESENTACIÓN",
    "PRIMERA",
    "PROCESADOS",
    "PRODUCTO",
    "PRODUCTOS",
    "TUBERCULOS",
    "TUBÉRCULOS",
    "UNIDAD",
    "VARIACION",
    "VARIACIÓN",
    "VERDURAS",
    "Y",
];

fn row_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let pattern = format!(
            r"(?x)
            (?:^|\s)
            (?P<name>{word}(?:\x20+{word}){{0,{more}}}?)
            \s+
            (?P<presentation>KILO|BOLSA|BULTO|CAJA(?:\s+DE\s+MADERA)?|DOCENA|TONELADA|ROLLO|ATADO|CANASTILLA|PAQUETE|LIBRAS)
            \s+
            (?P<quantity>\d+)
            \s+
            (?P<unit>\p{{L}}+(?:\s+\p{{L}}+)*?)
            \s+
            \$?\s?(?P<extra>\d[\d.,]*)
            \s+
            \$?\s?(?P<first>\d[\d.,]*)
            \s+
            \$?\s?(?P<unit_price>\d[\d.,]*)
            \s+
            (?P<variation>(?i:estable|bajo|sub[ií][oó]))
            \b",
            word = NAME_WORD,
            more = MAX_NAME_WORDS - 1,
        );
        Regex::new(&pattern).expect("row pattern is a valid regex")
    })
}

/// Scans `text` for price rows in document order.
///
/// Duplicates are kept: the same product on two pages yields two rows.
pub fn parse_rows(text: &str) -> Vec<PriceRow> {
    row_pattern()
        .captures_iter(text)
        .filter_map(|captures| row_from_captures(&captures))
        .collect()
}

fn row_from_captures(captures: &Captures<'_>) -> Option<PriceRow> {
    let field = |name: &str| captures.name(name).map(|m| m.as_str());

    let quantity: u32 = field("quantity")?.parse().ok()?;
    if quantity == 0 {
        return None;
    }

    Some(PriceRow {
        name: product_name(field("name")?),
        presentation: Presentation::parse(field("presentation")?).ok()?,
        quantity,
        unit_of_measure: collapse_whitespace(field("unit")?),
        price_grade_extra: field("extra")?.to_owned(),
        price_grade_first: field("first")?.to_owned(),
        price_grade_unit: field("unit_price")?.to_owned(),
        variation: Variation::parse(field("variation")?).ok()?,
    })
}

/// Collapses whitespace and drops leading layout words, keeping at least
/// the last word.
fn product_name(raw: &str) -> String {
    let words: Vec<&str> = raw.split_whitespace().collect();
    let layout = words
        .iter()
        .take_while(|word| LAYOUT_WORDS.contains(word))
        .count()
        .min(words.len().saturating_sub(1));
    words[layout..].join(" ")
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
