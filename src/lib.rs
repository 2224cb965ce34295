// Library exports for integration tests and the desktop binary

pub mod config;
pub mod search;
pub mod tmdb;
pub mod trending;

#[doc(hidden)]
pub mod ui;

// Re-export AppContext at crate root for easier access
pub use ui::AppContext;
