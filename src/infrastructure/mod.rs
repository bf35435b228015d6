// Infrastructure layer - Filesystem adapters and configuration
pub mod collection_lock;
pub mod config;
pub mod file_repository;
pub mod project;
