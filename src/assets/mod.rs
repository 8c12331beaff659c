/// Image asset module
///
/// This module handles:
/// - Resolving image references against the asset root
/// - Decoding images off the UI thread
/// - Reporting a per-slot success or load failure

pub mod loader;

pub use loader::load_image;

/// Which image cell a load result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Profile photo in the hero
    Photo,
    /// Cover mockup of the project at this index
    Card(usize),
    /// Gallery image of a modal opening
    Gallery { session: u64, index: usize },
}
