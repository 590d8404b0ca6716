pub mod controllers;
pub mod error;
pub mod extractors;
pub mod repositories;
pub mod router;
pub mod state;
pub mod views;
