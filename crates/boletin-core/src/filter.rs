//! Product allow-list applied to parsed rows.

use crate::{normalize_product_name, PriceRow};

/// Prefix filter over normalized product names.
///
/// An empty filter keeps every row. Otherwise a row survives when its
/// normalized name starts with any wanted name, so `papa` keeps
/// `PAPA CRIOLLA` and `PAPA PASTUSA`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    wanted: Vec<String>,
}

impl ProductFilter {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut wanted: Vec<String> = Vec::new();
        for name in names {
            let normalized = normalize_product_name(name.as_ref());
            if !normalized.is_empty() && !wanted.contains(&normalized) {
                wanted.push(normalized);
            }
        }
        Self { wanted }
    }

    /// Parses the inbound comma-separated form (`"papa, tomate"`).
    pub fn parse_csv(input: Option<&str>) -> Self {
        match input {
            Some(raw) => Self::new(raw.split(',')),
            None => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.wanted.is_empty()
    }

    pub fn len(&self) -> usize {
        self.wanted.len()
    }

    pub fn wanted(&self) -> &[String] {
        &self.wanted
    }

    pub fn matches(&self, product_name: &str) -> bool {
        if self.wanted.is_empty() {
            return true;
        }
        let normalized = normalize_product_name(product_name);
        self.wanted
            .iter()
            .any(|wanted| normalized.starts_with(wanted.as_str()))
    }

    /// Keeps matching rows in document order.
    pub fn retain(&self, rows: Vec<PriceRow>) -> Vec<PriceRow> {
        if self.wanted.is_empty() {
            return rows;
        }
        rows.into_iter().filter(|row| self.matches(&row.name)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Presentation, Variation};

    fn row(name: &str) -> PriceRow {
        PriceRow {
            name: name.to_owned(),
            presentation: Presentation::Bulto,
            quantity: 50,
            unit_of_measure: String::from("KILO"),
            price_grade_extra: String::from("90.000"),
            price_grade_first: String::from("85.000"),
            price_grade_unit: String::from("1.800"),
            variation: Variation::Stable,
        }
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let filter = ProductFilter::parse_csv(None);
        let rows = filter.retain(vec![row("PAPA CRIOLLA"), row("TOMATE")]);
        assert_eq!(rows.len(), 2);
        assert!(ProductFilter::parse_csv(Some(" , ,")).is_empty());
    }

    #[test]
    fn prefix_match_keeps_document_order() {
        let filter = ProductFilter::new(["papa"]);
        let rows = filter.retain(vec![
            row("PAPA CRIOLLA"),
            row("TOMATE"),
            row("PAPA PASTUSA"),
        ]);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["PAPA CRIOLLA", "PAPA PASTUSA"]);
    }

    #[test]
    fn match_is_prefix_not_substring() {
        let filter = ProductFilter::new(["criolla"]);
        assert!(!filter.matches("PAPA CRIOLLA"));
        assert!(filter.matches("CRIOLLA SELECTA"));
    }

    #[test]
    fn match_ignores_accents_case_and_spacing() {
        let filter = ProductFilter::parse_csv(Some("limon  tahiti, ÑAME"));
        assert!(filter.matches("LIMÓN TAHITÍ"));
        assert!(filter.matches("name espino"));
        assert!(!filter.matches("LIMA"));
        assert_eq!(filter.len(), 2);
    }
}
