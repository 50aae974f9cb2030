mod context;

pub mod bins;
pub mod browse;
pub mod config;
pub mod health;
pub mod history;
pub mod list;
pub mod logout;
pub mod products;
pub mod record;

pub use context::HandlerContext;
