// Domain layer - Plain data and state machines, no I/O
pub mod banner;
pub mod content;
pub mod metrics;
pub mod view;
