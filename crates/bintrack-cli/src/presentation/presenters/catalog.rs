use bintrack_types::{Bin, Product};

use crate::presentation::view_models::{
    BinEntryViewModel, BinListViewModel, CommandResultViewModel, Guidance, ProductEntryViewModel,
    ProductListViewModel, StatusBadge,
};

pub const NO_BINS: &str = "No bin locations found";
pub const NO_PRODUCTS: &str = "No products found";
pub const UNNAMED_BIN: &str = "Unnamed Bin";
pub const UNNAMED_PRODUCT: &str = "Unnamed Product";

pub fn present_bins(
    bins: &[&Bin],
    search: Option<&str>,
) -> CommandResultViewModel<BinListViewModel> {
    let entries = bins
        .iter()
        .map(|bin| BinEntryViewModel {
            id: bin.id.get(),
            name: bin.name.clone().filter(|n| !n.trim().is_empty()),
        })
        .collect::<Vec<_>>();

    let content = BinListViewModel {
        search: search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        bins: entries,
    };

    let mut result = CommandResultViewModel::new(content);
    if result.content.bins.is_empty() {
        result = result.with_badge(StatusBadge::warning(NO_BINS));
    } else {
        let label = format!("{} bin location(s)", result.content.bins.len());
        result = result.with_badge(StatusBadge::success(label));
    }
    result
}

pub fn present_products(
    query: &str,
    products: Vec<Product>,
    min_chars: usize,
) -> CommandResultViewModel<ProductListViewModel> {
    let query = query.trim().to_string();
    let skipped = query.chars().count() < min_chars;

    let content = ProductListViewModel {
        query,
        skipped,
        products: products
            .into_iter()
            .map(|p| ProductEntryViewModel {
                upc: p.upc().to_string(),
                description: p.description.clone().filter(|d| !d.trim().is_empty()),
                qty_per_case: p.qty_per_case(),
            })
            .collect(),
    };

    let mut result = CommandResultViewModel::new(content);
    if result.content.skipped {
        result = result
            .with_badge(StatusBadge::info(format!(
                "Type at least {} characters to search",
                min_chars
            )))
            .with_suggestion(
                Guidance::new("Search by description or UPC")
                    .with_command("bintrack products milk"),
            );
    } else if result.content.products.is_empty() {
        result = result.with_badge(StatusBadge::warning(NO_PRODUCTS));
    } else {
        let label = format!("{} product(s)", result.content.products.len());
        result = result.with_badge(StatusBadge::success(label));
    }
    result
}
