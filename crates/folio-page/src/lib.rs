//! folio Page
//!
//! The portfolio page: content, viewport section tracking and HTML output.

pub mod content;
pub mod scroll;
pub mod render;

pub use content::{Contact, ContactLink, ContentBlock, ContentError, Inline, Link, LinkKind, Portfolio, Profile, Project, Tone};
pub use scroll::{active_section_index, ScrollBehavior, ScrollManager, ScrollOptions, ScrollPosition, SectionTracker, ViewportHost};
pub use render::{escape_html, PageRenderer, RenderOptions, FULLSCREEN_BUTTON_ATTR, SURFACE_ATTR};
