use dioxus::prelude::*;

/// A UI element that may have to be displayed before its data exists.
///
/// # Examples
///
/// ```rust
/// use crate::loaded::prelude::*;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct UserBadge {
///     name: String,
/// }
///
/// impl LoadedElement for UserBadge {
///     fn element(self) -> Element {
///         rsx! { span { class: "badge", {self.name} } }
///     }
///
///     fn place_holder() -> Element {
///         rsx! { span { class: "badge", "..." } }
///     }
/// }
/// ```
pub trait LoadedElement: Clone + PartialEq + 'static {
    /// Renders the element once its data is available.
    fn element(self) -> Element;

    /// What to render while the data is not available.
    fn place_holder() -> Element;
}
