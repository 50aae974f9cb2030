pub mod bin;
pub mod product;
pub mod record;
pub mod request;

pub use bin::*;
pub use product::*;
pub use record::*;
pub use request::*;
