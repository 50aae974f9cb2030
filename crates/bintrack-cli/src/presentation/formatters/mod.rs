pub mod html;
pub mod number;
pub mod text;

pub use html::escape_html;
pub use number::{format_count, format_per_case, format_quantity};
pub use text::{NOT_APPLICABLE, NOT_SET, or_na, product_detail, truncate};
