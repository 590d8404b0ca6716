mod fs_save_repository;

pub use fs_save_repository::{scan_save_dir, FsSaveRepository};
