use crate::prelude::*;

use crate::catalog::CatalogSource;

/// Starts the catalog fetch when the calling component mounts and exposes its
/// state.
///
/// `make_source` is only called on the first render and the fetch is only
/// issued once: later renders just read the signal. The returned signal goes
/// from [`CatalogState::Empty`] to [`CatalogState::Loaded`] when the fetch
/// succeeds and never changes otherwise.
pub fn use_catalog_loader<S: CatalogSource>(
    make_source: impl FnOnce() -> S,
) -> ReadOnlySignal<CatalogState> {
    let mut state = use_signal(CatalogState::default);

    use_hook(move || {
        let source = make_source();
        spawn(async move {
            if let Some(catalog) = state_management::fetch_catalog(&source).await {
                let next = CatalogState::clone(&state.peek()).loaded(catalog);
                state.set(next);
            }
        });
    });

    state.into()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use dioxus::dioxus_core::NoOpMutations;

    use super::*;
    use crate::{
        catalog::fixtures, components::header::StorefrontHooks, config::StorefrontConfig,
        state_management::test_sources::StubSource, views::storefront::StorefrontScreen,
    };

    #[component]
    fn CatalogStateSpan(source: StubSource) -> Element {
        let state = use_catalog_loader(move || source);
        let ids = state
            .read()
            .catalog()
            .iter()
            .map(|p| p.id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        rsx! {
            span { "{state.read().is_loaded()}:{ids}" }
        }
    }

    #[component]
    fn LoadedScreen(source: StubSource) -> Element {
        use_context_provider(StorefrontConfig::default);
        let state = use_catalog_loader(move || source);
        let hooks = use_hook(StorefrontHooks::logging);
        rsx! {
            StorefrontScreen { catalog: state.read().catalog(), viewport_width: 375.0, hooks }
        }
    }

    /// Lets the spawned fetch run, then applies whatever it made dirty.
    ///
    /// A failed fetch dirties nothing, so the wait is bounded.
    async fn settle(dom: &mut VirtualDom) {
        let _ = tokio::time::timeout(Duration::from_millis(100), dom.wait_for_work()).await;
        dom.render_immediate(&mut NoOpMutations);
    }

    fn state_span(source: StubSource) -> VirtualDom {
        let mut dom =
            VirtualDom::new_with_props(CatalogStateSpan, CatalogStateSpanProps { source });
        dom.rebuild_in_place();
        dom
    }

    #[tokio::test]
    async fn state_is_replaced_once_the_fetch_completes() {
        let mut dom = state_span(StubSource::Products(fixtures::catalog(3)));
        assert_eq!(dioxus_ssr::render(&dom), "<span>false:</span>");

        settle(&mut dom).await;
        assert_eq!(dioxus_ssr::render(&dom), "<span>true:1,2,3</span>");
    }

    #[tokio::test]
    async fn failed_fetch_keeps_the_state_empty() {
        for source in [
            StubSource::Status(500),
            StubSource::Body("[{\"id\": 1, \"title\": 42}]"),
        ] {
            let mut dom = state_span(source);
            settle(&mut dom).await;
            assert_eq!(dioxus_ssr::render(&dom), "<span>false:</span>");

            // still nothing once the runtime had another chance to run
            settle(&mut dom).await;
            assert_eq!(dioxus_ssr::render(&dom), "<span>false:</span>");
        }
    }

    #[tokio::test]
    async fn failed_fetch_renders_the_empty_screen_silently() {
        let mut dom = VirtualDom::new_with_props(
            LoadedScreen,
            LoadedScreenProps {
                source: StubSource::Status(503),
            },
        );
        dom.rebuild_in_place();
        settle(&mut dom).await;

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Loading banner..."));
        assert!(!html.contains("product-container"));
        assert!(!html.to_lowercase().contains("error"));
        assert!(!html.contains("503"));
    }
}
