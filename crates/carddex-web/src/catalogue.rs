use std::cell::RefCell;
use std::rc::Rc;

use dominator::{clone, events, html, with_node, Dom, EventOptions};
use futures_signals::map_ref;
use futures_signals::signal::{Mutable, SignalExt};
use futures_signals::signal_vec::{MutableVec, SignalVecExt};
use wasm_bindgen::JsValue;
use web_sys::{HtmlInputElement, HtmlSelectElement};

use carddex_lib::card::{CardSummary, Series};
use carddex_lib::filter::{paginate, series_options, CardFilter, PER_PAGE};

use crate::common::{snackbar, CardItem, Route, Spinner};
use crate::query;
use crate::utils::{history, AsyncLoader};

/// The card grid. The full list comes from TCGdex once; search, series
/// filter and paging are applied locally.
pub struct Catalogue {
    keyword: Mutable<Option<String>>,
    card_type: Option<String>,
    series: Mutable<Option<String>>,
    page: Mutable<usize>,
    total_pages: Mutable<usize>,
    all_cards: RefCell<Vec<CardSummary>>,
    series_list: MutableVec<Series>,
    cards: MutableVec<CardSummary>,
    spinner: Rc<Spinner>,
    loader: AsyncLoader,
}

impl Catalogue {
    pub fn new(
        keyword: Option<String>,
        card_type: Option<String>,
        series: Option<String>,
        page: usize,
    ) -> Rc<Self> {
        Rc::new(Self {
            keyword: Mutable::new(keyword),
            card_type,
            series: Mutable::new(series),
            page: Mutable::new(page.max(1)),
            total_pages: Mutable::new(1),
            all_cards: RefCell::new(Vec::new()),
            series_list: MutableVec::new(),
            cards: MutableVec::new(),
            spinner: Spinner::new(),
            loader: AsyncLoader::new(),
        })
    }

    fn fetch_cards(catalogue: Rc<Self>) {
        catalogue.spinner.set_active(true);
        catalogue.loader.load(clone!(catalogue => async move {
            let result = match catalogue.card_type.as_deref() {
                Some(card_type) => query::list_cards_by_type(card_type).await,
                None => query::list_cards().await,
            };

            match result {
                Ok(cards) => {
                    catalogue.series_list.lock_mut().replace_cloned(series_options(&cards));
                    *catalogue.all_cards.borrow_mut() = cards;
                    catalogue.apply_filter();
                }
                Err(err) => {
                    snackbar::show(format!("fetch cards failed: {}", err));
                }
            }

            catalogue.spinner.set_active(false);
        }));
    }

    /// Recompute the visible page from the full list and the current
    /// filter, clamping the page number, and mirror the state in the URL.
    fn apply_filter(&self) {
        let filter = CardFilter {
            keyword: self.keyword.get_cloned(),
            series: self.series.get_cloned(),
        };

        let filtered = filter.apply(&self.all_cards.borrow());
        let (visible, page) = paginate(&filtered, self.page.get(), PER_PAGE);

        self.page.set_neq(page.number);
        self.total_pages.set_neq(page.total_pages);
        self.cards.lock_mut().replace_cloned(visible);

        self.replace_state_with_url();
    }

    fn replace_state_with_url(&self) {
        let url = Route::Catalogue {
            keyword: self.keyword.get_cloned(),
            card_type: self.card_type.clone(),
            series: self.series.get_cloned(),
            page: self.page.get(),
        }
        .url();

        if let Err(e) = history().replace_state_with_url(&JsValue::null(), "", Some(&url)) {
            error!("error replace_state_with_url: {:?}", e);
        }
    }

    fn render_topbar(catalogue: Rc<Self>) -> Dom {
        html!("div", {
            .class("topbar")
            .children(&mut [
                html!("span", {
                    .class("title")
                    .text("Carddex")
                }),
                html!("input" => HtmlInputElement, {
                    .attribute("placeholder", "Search cards")
                    .attribute("type", "text")
                    .attribute("value", &catalogue.keyword.get_cloned().unwrap_or_default())
                    .with_node!(input => {
                        .event_with_options(&EventOptions::preventable(), clone!(catalogue => move |e: events::KeyDown| {
                            if e.key() == "Enter" {
                                e.prevent_default();
                                let value = input.value();
                                catalogue.keyword.set_neq((!value.is_empty()).then_some(value));
                                catalogue.page.set_neq(1);
                                catalogue.apply_filter();
                            }
                        }))
                    })
                }),
                html!("select" => HtmlSelectElement, {
                    .children(&mut [
                        html!("option", {
                            .attribute("value", "")
                            .text("All series")
                        })
                    ])
                    .children_signal_vec(catalogue.series_list.signal_vec_cloned().map(clone!(catalogue => move |series| {
                        html!("option", {
                            .attribute("value", &series.id)
                            .property("selected", catalogue.series.get_cloned().as_deref() == Some(series.id.as_str()))
                            .text(&series.name)
                        })
                    })))
                    .with_node!(select => {
                        .event(clone!(catalogue => move |_: events::Change| {
                            let value = select.value();
                            catalogue.series.set_neq((!value.is_empty()).then_some(value));
                            catalogue.page.set_neq(1);
                            catalogue.apply_filter();
                        }))
                    })
                }),
            ])
        })
    }

    fn render_main(catalogue: Rc<Self>) -> Dom {
        let page_label = map_ref! {
            let page = catalogue.page.signal(),
            let total_pages = catalogue.total_pages.signal() =>
            format!("{} / {}", page, total_pages)
        };

        html!("div", {
            .style("padding", "0.5rem")
            .children(&mut [
                html!("div", {
                    .class("card-grid")
                    .children_signal_vec(catalogue.cards.signal_vec_cloned().map(|card| CardItem::new(card).render()))
                }),
                html!("div", {
                    .class("pagination")
                    .children(&mut [
                        html!("button", {
                            .text("Previous")
                            .property_signal("disabled", catalogue.page.signal().map(|page| page <= 1))
                            .event(clone!(catalogue => move |_: events::Click| {
                                let page = catalogue.page.get();
                                if page > 1 {
                                    catalogue.page.set(page - 1);
                                    catalogue.apply_filter();
                                }
                            }))
                        }),
                        html!("span", {
                            .text_signal(page_label)
                        }),
                        html!("button", {
                            .text("Next")
                            .property_signal("disabled", map_ref! {
                                let page = catalogue.page.signal(),
                                let total_pages = catalogue.total_pages.signal() =>
                                page >= total_pages
                            })
                            .event(clone!(catalogue => move |_: events::Click| {
                                let page = catalogue.page.get();
                                if page < catalogue.total_pages.get() {
                                    catalogue.page.set(page + 1);
                                    catalogue.apply_filter();
                                }
                            }))
                        }),
                    ])
                }),
                Spinner::render(catalogue.spinner.clone()),
            ])
        })
    }

    pub fn render(catalogue: Rc<Self>) -> Dom {
        if catalogue.all_cards.borrow().is_empty() {
            Self::fetch_cards(catalogue.clone());
        }

        html!("div", {
            .children(&mut [
                Self::render_topbar(catalogue.clone()),
                html!("div", {
                    .class("topbar-spacing")
                }),
                Self::render_main(catalogue),
            ])
        })
    }
}
