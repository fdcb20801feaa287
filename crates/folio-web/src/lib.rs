//! folio Web
//!
//! Browser implementations of the fullscreen and viewport hosts, and the
//! start hook that hydrates a rendered page.

#[cfg(target_arch = "wasm32")]
mod listeners;
#[cfg(target_arch = "wasm32")]
mod document;
#[cfg(target_arch = "wasm32")]
mod window;
#[cfg(target_arch = "wasm32")]
mod hydrate;

#[cfg(target_arch = "wasm32")]
pub use document::WebDocument;
#[cfg(target_arch = "wasm32")]
pub use window::WebWindow;
#[cfg(target_arch = "wasm32")]
pub use hydrate::start;
