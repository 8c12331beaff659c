/// State management module
///
/// This module handles all application state, including:
/// - Static portfolio tables (data.rs) and their loading (content.rs)
/// - Layered configuration (config.rs)
/// - Project gallery carousel and image fallback cells (gallery.rs)
/// - Scroll-derived navigation state (nav.rs)
/// - The hero typewriter effect (typewriter.rs)

pub mod config;
pub mod content;
pub mod data;
pub mod gallery;
pub mod nav;
pub mod typewriter;
