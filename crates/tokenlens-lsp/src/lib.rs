// ABOUTME: Host-facing hooks that decorate completions and hovers with design-token docs
// ABOUTME: Also loads plugin options and keeps the token config fresh when it changes on disk

pub mod completion;
pub mod details;
pub mod host;
pub mod hover;
pub mod markdown;
pub mod options;
pub mod position;
pub mod service;
pub mod watcher;

#[cfg(test)]
mod hooks_tests;

pub use host::{DocumentHost, HostDocument};
pub use options::{OPTIONS_FILE_NAME, load_options, load_options_from_dir};
pub use position::{offset_to_position, position_to_offset, span_to_range};
pub use service::TokenLens;
pub use watcher::{ConfigChange, ConfigWatcher, spawn_reloader};
