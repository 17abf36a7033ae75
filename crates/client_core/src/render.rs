//! Display contract for a catalog page and a plain-text implementation.

use std::io::{self, Write};

use shared::domain::Product;

use crate::{controller::CatalogView, LoadState};

/// Replaces whatever it displayed before with the given view.
pub trait Renderer {
    type Error;

    fn render(&mut self, view: &CatalogView<'_>) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub title: String,
    pub description: String,
    pub price_label: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            price_label: format!("Price: {}", format_price(product.price)),
        }
    }
}

/// Shortest decimal form, e.g. `$549` or `$12.99`.
pub fn format_price(price: f64) -> String {
    format!("${price}")
}

pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, view: &CatalogView<'_>) -> io::Result<()> {
        if let LoadState::Failed(err) = view.load_state {
            writeln!(self.out, "! catalog unavailable ({err})")?;
        }

        if view.products.is_empty() {
            writeln!(self.out, "(no products match)")?;
        }

        for product in &view.products {
            let card = ProductCard::from(*product);
            writeln!(self.out, "== {}", card.title)?;
            writeln!(self.out, "   {}", card.description)?;
            writeln!(self.out, "   {}", card.price_label)?;
        }

        let nav = |enabled: bool, label: &'static str| if enabled { label } else { "-" };
        writeln!(
            self.out,
            "[{}] {} [{}]  ({} matching)",
            nav(view.window.has_prev, "prev"),
            view.window.indicator(),
            nav(view.window.has_next, "next"),
            view.total_matches,
        )?;
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
