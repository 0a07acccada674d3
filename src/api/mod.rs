pub mod models;
mod storefront;

pub use models::*;
pub use storefront::*;
