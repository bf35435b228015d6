// Application layer - Use cases and collaborator seams
pub mod collaborators;
pub mod dashboard_repository;
pub mod dashboard_service;
