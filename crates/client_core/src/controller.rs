use std::collections::HashSet;

use shared::{
    domain::{CategorySelection, FilterState, Product},
    error::LoadError,
};
use tracing::{debug, info, warn};

use crate::{
    filter::{derive_categories, filter_indices},
    pagination::{clamp_page, paginate, total_pages, PageWindow},
    render::Renderer,
    DEFAULT_PAGE_SIZE,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(LoadError),
}

/// Everything a renderer needs for one pass.
#[derive(Debug, Clone)]
pub struct CatalogView<'a> {
    pub products: Vec<&'a Product>,
    pub window: PageWindow,
    pub total_matches: usize,
    pub filter: &'a FilterState,
    pub load_state: &'a LoadState,
}

/// Owns the catalog and the filter/page state derived from user input.
///
/// Every mutation recomputes the filtered view and re-clamps the current page,
/// so `1 <= current_page <= total_pages` holds between calls.
#[derive(Debug)]
pub struct CatalogViewController {
    catalog: Vec<Product>,
    categories: Vec<String>,
    filter: FilterState,
    filtered: Vec<usize>,
    current_page: usize,
    page_size: usize,
    load_state: LoadState,
}

impl Default for CatalogViewController {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl CatalogViewController {
    pub fn new(page_size: usize) -> Self {
        Self {
            catalog: Vec::new(),
            categories: Vec::new(),
            filter: FilterState::default(),
            filtered: Vec::new(),
            current_page: 1,
            page_size: page_size.max(1),
            load_state: LoadState::Loading,
        }
    }

    /// Installs the catalog. Products with an unusable price or a repeated id
    /// are dropped.
    pub fn load_catalog(&mut self, products: Vec<Product>) {
        let received = products.len();
        let mut seen_ids = HashSet::new();
        let catalog: Vec<Product> = products
            .into_iter()
            .filter(|product| {
                if !product.price.is_finite() || product.price < 0.0 {
                    warn!(
                        product_id = product.id.0,
                        price = product.price,
                        "dropping product with invalid price"
                    );
                    return false;
                }
                if !seen_ids.insert(product.id) {
                    warn!(product_id = product.id.0, "dropping duplicate product id");
                    return false;
                }
                true
            })
            .collect();

        self.categories = derive_categories(&catalog);
        self.catalog = catalog;
        self.load_state = LoadState::Ready;
        info!(
            received,
            products = self.catalog.len(),
            categories = self.categories.len(),
            "catalog loaded"
        );
        self.apply_filters();
    }

    /// Leaves the controller usable with an empty catalog.
    pub fn fail_load(&mut self, err: LoadError) {
        warn!(code = ?err.code, "catalog load failed: {}", err.message);
        self.catalog.clear();
        self.categories.clear();
        self.load_state = LoadState::Failed(err);
        self.apply_filters();
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filter.search_text = text.into();
        self.apply_filters();
    }

    /// Changing category always returns to the first page.
    pub fn set_category(&mut self, category: CategorySelection) {
        self.filter.category = category;
        self.current_page = 1;
        self.apply_filters();
    }

    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.page_size)
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Product> + '_ {
        self.filtered.iter().map(|&index| &self.catalog[index])
    }

    pub fn page_window(&self) -> PageWindow {
        paginate(self.filtered.len(), self.page_size, self.current_page)
    }

    pub fn view(&self) -> CatalogView<'_> {
        let window = self.page_window();
        let products = self.filtered[window.range.clone()]
            .iter()
            .map(|&index| &self.catalog[index])
            .collect();
        CatalogView {
            products,
            window,
            total_matches: self.filtered.len(),
            filter: &self.filter,
            load_state: &self.load_state,
        }
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        renderer.render(&self.view())
    }

    fn apply_filters(&mut self) {
        self.filtered = filter_indices(&self.catalog, &self.filter);
        self.current_page = clamp_page(self.current_page, self.total_pages());
        debug!(
            search = %self.filter.search_text,
            category = ?self.filter.category.label(),
            matches = self.filtered.len(),
            page = self.current_page,
            "applied filters"
        );
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
