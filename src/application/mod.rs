// Application layer - Console use cases and collaborator traits
pub mod banner_editor;
pub mod banner_service;
pub mod console;
pub mod console_actor;
pub mod error;
pub mod metrics_presenter;
