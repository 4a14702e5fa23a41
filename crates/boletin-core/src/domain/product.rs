use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds a product name into its comparison form.
///
/// Decomposes to NFD, drops combining marks (so `Ñ` and `á` fold to `n`
/// and `a`), lowercases, and collapses runs of whitespace to one space.
pub fn normalize_product_name(input: &str) -> String {
    let stripped: String = input
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
