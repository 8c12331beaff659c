/// UI module
///
/// Pure view builders: they read application state and produce
/// widgets, never mutate.
/// - `nav` - top navigation bar
/// - `sections` - hero, about, skills, experience, education, footer
/// - `projects` - project cards with device mockups
/// - `modal` - project gallery modal
/// - `widgets` - shared chips, badges and the image fallback cell
/// - `theme` - palettes and widget styles

pub mod modal;
pub mod nav;
pub mod projects;
pub mod sections;
pub mod theme;
pub mod widgets;
