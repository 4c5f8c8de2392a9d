pub mod app;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod state;

pub use app::build_router;
