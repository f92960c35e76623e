// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod editor;
pub mod seed;
