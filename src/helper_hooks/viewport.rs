use crate::prelude::*;

/// Width of the rendering viewport, in CSS pixels.
///
/// The renderer is asked once; `default_width` is returned until it answers,
/// and for good if it cannot (server side rendering, no webview).
pub fn use_viewport_width(default_width: f64) -> Memo<f64> {
    let reported_width = use_resource(|| async move {
        document::eval("return window.innerWidth;")
            .join::<f64>()
            .await
    });

    use_memo(move || match &*reported_width.read() {
        Some(Ok(width)) => *width,
        Some(Err(e)) => {
            log::warn!("could not read the viewport width, using {default_width}: {e}");
            default_width
        }
        None => default_width,
    })
}
