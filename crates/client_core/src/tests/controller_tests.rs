use super::*;
use crate::fixtures::{product, sample_catalog};
use shared::{domain::ProductId, error::ErrorCode};

fn loaded() -> CatalogViewController {
    let mut controller = CatalogViewController::default();
    controller.load_catalog(sample_catalog());
    controller
}

fn page_ids(controller: &CatalogViewController) -> Vec<i64> {
    controller
        .view()
        .products
        .iter()
        .map(|product| product.id.0)
        .collect()
}

#[test]
fn starts_loading_with_empty_single_page() {
    let controller = CatalogViewController::default();
    assert_eq!(controller.load_state(), &LoadState::Loading);
    let view = controller.view();
    assert!(view.products.is_empty());
    assert_eq!(view.window.indicator(), "Page 1 of 1");
    assert!(!view.window.has_prev);
    assert!(!view.window.has_next);
}

#[test]
fn interaction_before_load_operates_on_empty_catalog() {
    let mut controller = CatalogViewController::default();
    controller.set_search_text("phone");
    assert!(!controller.next_page());
    controller.load_catalog(sample_catalog());
    assert_eq!(controller.view().total_matches, 2);
}

#[test]
fn category_selection_narrows_to_single_page() {
    let mut controller = loaded();
    controller.set_category(CategorySelection::Named("beauty".into()));

    let view = controller.view();
    assert_eq!(view.total_matches, 3);
    assert_eq!(view.window.total_pages, 1);
    assert_eq!(view.products.len(), 3);
    assert!(!view.window.has_prev);
    assert!(!view.window.has_next);
}

#[test]
fn unfiltered_catalog_pages_by_five() {
    let mut controller = loaded();
    assert_eq!(controller.total_pages(), 3);
    assert_eq!(page_ids(&controller), vec![1, 2, 3, 4, 5]);

    assert!(controller.next_page());
    assert_eq!(controller.current_page(), 2);
    assert_eq!(page_ids(&controller), vec![6, 7, 8, 9, 10]);
}

#[test]
fn search_text_narrows_matches() {
    let mut controller = loaded();
    controller.set_search_text("phone");
    assert_eq!(controller.view().total_matches, 2);
    assert_eq!(controller.total_pages(), 1);
    assert_eq!(page_ids(&controller), vec![7, 9]);
}

#[test]
fn switching_category_from_last_page_returns_to_first() {
    let mut controller = loaded();
    assert!(controller.next_page());
    assert!(controller.next_page());
    assert_eq!(controller.current_page(), 3);

    controller.set_category(CategorySelection::Named("smartphones".into()));
    assert_eq!(controller.current_page(), 1);
    assert_eq!(controller.total_pages(), 1);
}

#[test]
fn search_change_clamps_page_without_resetting() {
    let mut controller = loaded();
    controller.next_page();
    controller.next_page();

    // "o" matches 10 titles, two pages: clamp from 3 down to 2.
    controller.set_search_text("o");
    assert_eq!(controller.view().total_matches, 10);
    assert_eq!(controller.current_page(), 2);

    // Widening the search again must not raise the page.
    controller.set_search_text("");
    assert_eq!(controller.current_page(), 2);
}

#[test]
fn navigation_is_a_no_op_at_the_edges() {
    let mut controller = loaded();
    assert!(!controller.prev_page());
    assert_eq!(controller.current_page(), 1);

    controller.next_page();
    controller.next_page();
    assert!(!controller.next_page());
    assert_eq!(controller.current_page(), 3);
}

#[test]
fn current_page_stays_in_bounds_across_operations() {
    let mut controller = loaded();
    let searches = ["", "a", "phone", "zzz", "e"];
    let categories = [
        CategorySelection::Any,
        CategorySelection::Named("furniture".into()),
        CategorySelection::Named("missing".into()),
    ];

    for (step, search) in searches.iter().cycle().take(20).enumerate() {
        match step % 4 {
            0 => controller.set_search_text(*search),
            1 => controller.set_category(categories[step % categories.len()].clone()),
            2 => {
                controller.next_page();
            }
            _ => {
                controller.prev_page();
            }
        }
        let page = controller.current_page();
        assert!(page >= 1 && page <= controller.total_pages(), "step {step}");
    }
}

#[test]
fn empty_result_renders_nothing_with_navigation_disabled() {
    let mut controller = loaded();
    controller.set_search_text("no such product");
    let view = controller.view();
    assert!(view.products.is_empty());
    assert_eq!(view.window.total_pages, 1);
    assert!(!view.window.has_prev && !view.window.has_next);
}

#[test]
fn failed_load_leaves_safe_empty_state() {
    let mut controller = CatalogViewController::default();
    let err = LoadError::new(ErrorCode::Network, "connection refused");
    controller.fail_load(err.clone());

    assert_eq!(controller.load_state(), &LoadState::Failed(err));
    assert!(controller.categories().is_empty());
    controller.set_category(CategorySelection::Named("beauty".into()));
    controller.set_search_text("x");
    assert!(!controller.next_page());
    assert!(!controller.prev_page());
    assert_eq!(controller.view().window.indicator(), "Page 1 of 1");
}

#[test]
fn load_drops_invalid_prices_and_duplicate_ids() {
    let mut controller = CatalogViewController::default();
    controller.load_catalog(vec![
        product(1, "Lamp", 10.0, "home"),
        product(2, "Broken", -1.0, "home"),
        product(3, "Nan", f64::NAN, "home"),
        product(1, "Lamp copy", 12.0, "home"),
        product(4, "Free sample", 0.0, "beauty"),
    ]);

    let ids: Vec<ProductId> = controller.catalog().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![ProductId(1), ProductId(4)]);
    assert_eq!(controller.categories(), ["home", "beauty"]);
}

#[test]
fn filtered_iterates_matches_in_catalog_order() {
    let mut controller = loaded();
    controller.set_category(CategorySelection::Named("furniture".into()));
    let titles: Vec<&str> = controller.filtered().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Annibale Colombo Bed",
            "Annibale Colombo Sofa",
            "Bedside Table African Cherry"
        ]
    );
}

#[test]
fn custom_page_size_is_respected() {
    let mut controller = CatalogViewController::new(4);
    controller.load_catalog(sample_catalog());
    assert_eq!(controller.page_size(), 4);
    assert_eq!(controller.total_pages(), 3);

    let zero = CatalogViewController::new(0);
    assert_eq!(zero.page_size(), 1);
}
