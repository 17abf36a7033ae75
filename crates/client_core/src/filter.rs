//! Catalog filtering by title text and category.

use std::collections::HashSet;

use shared::domain::{CategorySelection, FilterState, Product};

/// Case-insensitive substring match on the title, AND exact category match.
pub fn matches(product: &Product, filter: &FilterState) -> bool {
    matches_category(product, &filter.category)
        && matches_text(product, &filter.search_text.to_lowercase())
}

/// Indices into `catalog` of every product matching `filter`, in catalog
/// order.
pub fn filter_indices(catalog: &[Product], filter: &FilterState) -> Vec<usize> {
    let needle = filter.search_text.to_lowercase();
    catalog
        .iter()
        .enumerate()
        .filter(|(_, product)| {
            matches_category(product, &filter.category) && matches_text(product, &needle)
        })
        .map(|(index, _)| index)
        .collect()
}

/// Distinct category labels in first-seen order.
pub fn derive_categories(catalog: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .filter(|product| seen.insert(product.category.as_str()))
        .map(|product| product.category.clone())
        .collect()
}

fn matches_text(product: &Product, lowered_needle: &str) -> bool {
    lowered_needle.is_empty() || product.title.to_lowercase().contains(lowered_needle)
}

fn matches_category(product: &Product, category: &CategorySelection) -> bool {
    match category {
        CategorySelection::Any => true,
        CategorySelection::Named(label) => product.category == *label,
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
