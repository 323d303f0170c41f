pub mod history;
pub mod lookup;
pub mod meta;
pub mod validate;

pub use history::get_history;
pub use lookup::lookup;
pub use meta::{app_details, health_check};
pub use validate::validate;
