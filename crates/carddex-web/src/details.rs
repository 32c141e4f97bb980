use std::rc::Rc;

use dominator::{clone, events, html, routing, svg, Dom};
use futures_signals::signal::{Mutable, SignalExt};
use wasm_bindgen::UnwrapThrowExt;

use carddex_lib::card::{image_url, CardDetail};

use crate::common::{snackbar, CardItem, Spinner};
use crate::query;
use crate::utils::{window, AsyncLoader};

pub struct Details {
    set_id: String,
    local_id: String,
    card: Mutable<Option<CardDetail>>,
    spinner: Rc<Spinner>,
    loader: AsyncLoader,
}

impl Details {
    pub fn new(set_id: String, local_id: String) -> Rc<Self> {
        Rc::new(Self {
            set_id,
            local_id,
            card: Mutable::new(None),
            spinner: Spinner::new(),
            loader: AsyncLoader::new(),
        })
    }

    fn fetch_detail(details: Rc<Self>) {
        details.spinner.set_active(true);
        details.loader.load(clone!(details => async move {
            match query::fetch_card(&details.set_id, &details.local_id).await {
                Ok(card) => {
                    details.card.set(Some(card));
                }
                Err(err) => {
                    snackbar::show(format!("fetch card failed: {}", err));
                }
            }
            details.spinner.set_active(false);
        }));
    }

    fn render_topbar() -> Dom {
        html!("div", {
            .class("topbar")
            .children(&mut [
                html!("button", {
                    .style("display", "flex")
                    .style("align-items", "center")
                    .event(|_: events::Click| {
                        let history = window().history().unwrap_throw();
                        if history.length().unwrap_throw() > 1 {
                            let _ = history.back();
                        } else {
                            routing::go_to_url("/");
                        }
                    })
                    .children(&mut [
                        svg!("svg", {
                            .attribute("xmlns", "http://www.w3.org/2000/svg")
                            .attribute("fill", "none")
                            .attribute("viewBox", "0 0 24 24")
                            .attribute("stroke", "currentColor")
                            .class("icon")
                            .children(&mut [
                                svg!("path", {
                                    .attribute("stroke-linecap", "round")
                                    .attribute("stroke-linejoin", "round")
                                    .attribute("stroke-width", "2")
                                    .attribute("d", "M15 19l-7-7 7-7")
                                })
                            ])
                        }),
                        html!("span", {
                            .text("Cards")
                        })
                    ])
                })
            ])
        })
    }

    fn render_header(card: &CardDetail) -> Dom {
        let mut info = vec![html!("h1", {
            .text(&card.name)
        })];

        if let Some(hp) = &card.hp {
            info.push(html!("span", {
                .class("hp")
                .text(&format!("HP {}", hp))
            }));
        }

        if !card.rarity.is_empty() {
            info.push(html!("span", {
                .class("rarity")
                .text(&card.rarity)
            }));
        }

        for card_type in &card.types {
            info.push(html!("span", {
                .class("type")
                .text(card_type)
            }));
        }

        if !card.series_id.is_empty() {
            info.push(html!("span", {
                .class("series")
                .text(&card.series_id)
            }));
        }

        info.push(CardItem::render_favorite_button(&card.id));

        html!("div", {
            .class("card-detail")
            .children(&mut [
                html!("img", {
                    .attr("src", &image_url(&card.image, "high"))
                }),
                html!("div", {
                    .class("card-info")
                    .children(info)
                })
            ])
        })
    }

    pub fn render(details: Rc<Self>) -> Dom {
        Self::fetch_detail(details.clone());

        html!("div", {
            .children(&mut [
                Self::render_topbar(),
                html!("div", {
                    .class("topbar-spacing")
                }),
                Spinner::render(details.spinner.clone()),
            ])
            .child_signal(details.card.signal_cloned().map(|card| {
                card.map(|card| Self::render_header(&card))
            }))
        })
    }
}
