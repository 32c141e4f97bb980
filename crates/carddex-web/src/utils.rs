use std::sync::atomic::{AtomicUsize, Ordering};

use futures::{
    future::{abortable, AbortHandle},
    Future,
};
use futures_signals::signal::Mutable;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, History, Window};

thread_local! {
    static WINDOW: Window = web_sys::window().unwrap_throw();
    static DOCUMENT: Document = WINDOW.with(|w| w.document().unwrap_throw());
    static HISTORY: History = WINDOW.with(|w| w.history().unwrap_throw());
    static TCGDEX_HOST: std::cell::RefCell<String> =
        std::cell::RefCell::new("https://api.tcgdex.net/v2/en".to_string());
    static FAVORITES_HOST: std::cell::RefCell<String> = std::cell::RefCell::new(String::new());
}

pub struct AsyncState {
    id: usize,
    handle: AbortHandle,
}

impl AsyncState {
    fn new(handle: AbortHandle) -> Self {
        static ID: AtomicUsize = AtomicUsize::new(0);
        let id = ID.fetch_add(1, Ordering::SeqCst);

        Self { id, handle }
    }
}

/// Holds at most one running task; loading a new future aborts the previous
/// one. This is what keeps rapid repeated toggles from racing each other.
pub struct AsyncLoader {
    loading: Mutable<Option<AsyncState>>,
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading: Mutable::new(None),
        }
    }

    fn replace(&self, value: Option<AsyncState>) {
        let mut loading = self.loading.lock_mut();
        if let Some(state) = loading.as_mut() {
            state.handle.abort();
        }
        *loading = value;
    }

    pub fn load<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let (fut, handle) = abortable(fut);

        let state = AsyncState::new(handle);
        let id = state.id;

        self.replace(Some(state));

        let loading = self.loading.clone();

        spawn_local(async move {
            if fut.await.is_ok() {
                let mut loading = loading.lock_mut();

                if loading.as_ref().map(|state| state.id) == Some(id) {
                    *loading = None;
                }
            }
        });
    }
}

/// Read host overrides injected by the embedding page, if any.
pub fn initialize_urls() {
    if let Ok(val) = js_sys::eval("window.__CARDDEX_TCGDEX_HOST__") {
        if let Some(host) = val.as_string() {
            TCGDEX_HOST.with(|s| *s.borrow_mut() = host.trim_end_matches('/').to_string());
        }
    }

    let origin = window().location().origin().unwrap_throw();
    FAVORITES_HOST.with(|s| *s.borrow_mut() = origin);
}

pub fn tcgdex_host() -> String {
    TCGDEX_HOST.with(|v| v.borrow().clone())
}

pub fn favorites_host() -> String {
    FAVORITES_HOST.with(|v| v.borrow().clone())
}

pub fn window() -> Window {
    WINDOW.with(|s| s.clone())
}

pub fn document() -> Document {
    DOCUMENT.with(|d| d.clone())
}

pub fn history() -> History {
    HISTORY.with(|h| h.clone())
}
