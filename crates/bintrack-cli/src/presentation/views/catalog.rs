use std::fmt::{self, Write};

use super::preformatted;
use crate::presentation::formatters::product_detail;
use crate::presentation::presenters::catalog::{NO_BINS, NO_PRODUCTS, UNNAMED_BIN, UNNAMED_PRODUCT};
use crate::presentation::view_models::{BinListViewModel, ProductListViewModel, ViewMode};

// --------------------------------------------------------
// Bin List View
// --------------------------------------------------------

pub struct BinListView<'a> {
    data: &'a BinListViewModel,
    mode: ViewMode,
}

impl<'a> BinListView<'a> {
    pub fn new(data: &'a BinListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render(&self, w: &mut impl Write) -> fmt::Result {
        if self.data.bins.is_empty() {
            return writeln!(w, "{}", NO_BINS);
        }

        let id_width = self
            .data
            .bins
            .iter()
            .map(|b| b.id.to_string().len())
            .max()
            .unwrap_or(0)
            .max(2);

        writeln!(w, "{:>id_width$}  NAME", "ID")?;
        for bin in &self.data.bins {
            writeln!(
                w,
                "{:>id_width$}  {}",
                bin.id,
                bin.name.as_deref().unwrap_or(UNNAMED_BIN)
            )?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for BinListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Text => self.render(f),
            ViewMode::Markup => preformatted(f, |w| self.render(w)),
        }
    }
}

// --------------------------------------------------------
// Product List View
// --------------------------------------------------------

pub struct ProductListView<'a> {
    data: &'a ProductListViewModel,
    mode: ViewMode,
}

impl<'a> ProductListView<'a> {
    pub fn new(data: &'a ProductListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render(&self, w: &mut impl Write) -> fmt::Result {
        if self.data.skipped {
            return Ok(());
        }
        if self.data.products.is_empty() {
            return writeln!(w, "{}", NO_PRODUCTS);
        }

        for product in &self.data.products {
            writeln!(
                w,
                "{}",
                product.description.as_deref().unwrap_or(UNNAMED_PRODUCT)
            )?;
            writeln!(w, "  {}", product_detail(&product.upc, product.qty_per_case))?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ProductListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Text => self.render(f),
            ViewMode::Markup => preformatted(f, |w| self.render(w)),
        }
    }
}
