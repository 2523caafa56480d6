//! # Loaded Module
//!
//! Declarative handling of UI regions whose content may not be available yet.
//!
//! A type implementing [`LoadedElement`](element::LoadedElement) knows how to
//! render itself and what to render in its place while it is missing. The
//! [`LoadedComponent`](component::LoadedComponent) picks one or the other from a
//! [`LoadedComponentInput`](component::LoadedComponentInput), usually obtained
//! from an `Option`.
//!
//! ## Example Usage
//!
//! ```rust
//! use crate::loaded::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Greeting {
//!     text: String,
//! }
//!
//! impl LoadedElement for Greeting {
//!     fn element(self) -> Element {
//!         rsx! { h1 { {self.text} } }
//!     }
//!
//!     fn place_holder() -> Element {
//!         rsx! { p { "Loading..." } }
//!     }
//! }
//!
//! // LoadedComponent::<Greeting> { input: maybe_greeting.into() }
//! ```

pub mod component;
mod element;

/// Prelude module that re-exports the types needed to use the framework.
pub mod prelude {
    pub use super::component::{LoadedComponent, LoadedComponentInput};
    pub use super::element::LoadedElement;
}
