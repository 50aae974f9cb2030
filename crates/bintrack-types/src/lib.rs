pub mod domain;
pub mod envelope;
pub mod error;
pub mod history;
pub mod view;

pub use domain::*;
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use history::*;
pub use view::ViewKind;
