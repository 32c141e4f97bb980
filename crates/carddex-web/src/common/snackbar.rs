use std::rc::Rc;

use dominator::{clone, events, html, Dom};
use futures_signals::signal::{Mutable, SignalExt};

thread_local! {
    static SNACKBAR: std::cell::RefCell<Rc<Snackbar>> = std::cell::RefCell::new(Snackbar::new());
}

pub fn show(message: String) {
    SNACKBAR.with(|s| s.borrow().show(message));
}

pub fn render() -> Dom {
    SNACKBAR.with(|s| Snackbar::render(s.borrow().clone()))
}

pub struct Snackbar {
    message: Mutable<Option<String>>,
}

impl Snackbar {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            message: Mutable::new(None),
        })
    }

    pub fn show(&self, message: String) {
        self.message.set(Some(message));
    }

    pub fn render(snackbar: Rc<Self>) -> Dom {
        html!("div", {
            .class("snackbar")
            .visible_signal(snackbar.message.signal_cloned().map(|message| message.is_some()))
            .child_signal(snackbar.message.signal_cloned().map(|message| message.map(|msg| html!("span", {
                .text(msg.as_str())
            }))))
            .children(&mut [
                html!("button", {
                    .text("\u{2715}")
                    .event(clone!(snackbar => move |_: events::Click| snackbar.message.set(None)))
                })
            ])
        })
    }
}
