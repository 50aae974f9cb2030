pub mod catalog;
pub mod history;
pub mod inventory;
pub mod mutation;
pub mod screen;
pub mod system;

pub use catalog::{present_bins, present_products};
pub use history::{present_history, present_history_stats};
pub use inventory::{present_cards, present_inventory, present_inventory_result, present_table};
pub use mutation::{present_delete_confirmation, present_mutation};
pub use screen::{ScreenContext, initial_focus, present_screen};
pub use system::{present_config, present_config_init, present_health, present_logout};
