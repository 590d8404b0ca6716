pub mod save_repository;
