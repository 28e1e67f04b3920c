use dioxus::prelude::*;

/// CSS media query matching viewports narrower than `breakpoint` pixels
pub fn media_query_below(breakpoint: u32) -> String {
    format!("(max-width: {}.95px)", breakpoint.saturating_sub(1))
}

/// Whether the viewport is below `breakpoint` pixels wide
pub fn use_below_breakpoint(breakpoint: u32) -> ReadOnlySignal<bool> {
    use_media_query(media_query_below(breakpoint))
}

/// Tracks whether `query` currently matches.
///
/// In the browser this follows `matchMedia` change events until the calling
/// component unmounts. Elsewhere, or when the query cannot be evaluated, the
/// signal stays `false` (wide layout).
pub fn use_media_query(query: String) -> ReadOnlySignal<bool> {
    #[cfg(target_arch = "wasm32")]
    {
        let mut matches = use_signal({
            let query = query.clone();
            move || browser::current_match(&query)
        });
        use_hook(move || match browser::MediaQuerySubscription::new(&query, move |m| matches.set(m)) {
            Ok(subscription) => Some(std::rc::Rc::new(subscription)),
            Err(err) => {
                tracing::warn!(%query, %err, "media query unavailable, assuming wide viewport");
                None
            }
        });
        ReadOnlySignal::new(matches)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let matches = use_signal(|| false);
        use_hook(move || tracing::debug!(%query, "media queries unsupported on this target"));
        ReadOnlySignal::new(matches)
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{MediaQueryList, MediaQueryListEvent};

    use crate::error::{ShellError, ShellResult};

    fn media_query_list(query: &str) -> ShellResult<MediaQueryList> {
        let window = web_sys::window().ok_or(ShellError::WindowUnavailable)?;
        window
            .match_media(query)
            .map_err(|err| ShellError::MediaQuery(format!("{err:?}")))?
            .ok_or_else(|| ShellError::MediaQuery(format!("no media query list for {query}")))
    }

    pub fn current_match(query: &str) -> bool {
        media_query_list(query).map(|list| list.matches()).unwrap_or(false)
    }

    /// `change` listener on a `MediaQueryList`, removed on drop
    pub struct MediaQuerySubscription {
        list: MediaQueryList,
        listener: Closure<dyn FnMut(MediaQueryListEvent)>,
    }

    impl MediaQuerySubscription {
        pub fn new(query: &str, mut on_change: impl FnMut(bool) + 'static) -> ShellResult<Self> {
            let list = media_query_list(query)?;

            let listener = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
                on_change(event.matches());
            });
            list.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
                .map_err(|err| ShellError::MediaQuery(format!("{err:?}")))?;

            Ok(Self { list, listener })
        }
    }

    impl Drop for MediaQuerySubscription {
        fn drop(&mut self) {
            let _ = self
                .list
                .remove_event_listener_with_callback("change", self.listener.as_ref().unchecked_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_for_small_breakpoint() {
        assert_eq!(media_query_below(600), "(max-width: 599.95px)");
    }
}
