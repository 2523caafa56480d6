use dioxus::prelude::*;

use super::element::LoadedElement;

/// Represents the two states of a region during loading.
///
/// # Examples
///
/// ```rust
/// use crate::loaded::prelude::*;
///
/// let input: LoadedComponentInput<MyComponent> = maybe_data.map(MyComponent::from).into();
///
/// rsx! {
///     LoadedComponent { input }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedComponentInput<T: LoadedElement> {
    /// The data is not there, the placeholder is displayed
    Loading,
    /// The data is there and the element is displayed
    LoadedSuccess(T),
}

impl<T: LoadedElement> From<T> for LoadedComponentInput<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::LoadedSuccess(value)
    }
}

impl<T: LoadedElement> From<Option<T>> for LoadedComponentInput<T> {
    /// `None` maps to [`LoadedComponentInput::Loading`].
    #[inline(always)]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(t) => Self::LoadedSuccess(t),
            None => Self::Loading,
        }
    }
}

/// Displays either the element or its placeholder depending on `input`.
#[component]
pub fn LoadedComponent<T: LoadedElement>(input: LoadedComponentInput<T>) -> Element {
    match input {
        LoadedComponentInput::Loading => T::place_holder(),
        LoadedComponentInput::LoadedSuccess(t) => t.element(),
    }
}
