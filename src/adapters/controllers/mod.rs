pub mod index_controller;
pub mod latest_controller;
