// Domain layer - Dashboard entity, payloads, slugs and errors
pub mod dashboard;
pub mod error;
pub mod slug;
