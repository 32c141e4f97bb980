use dominator::{html, link, svg, Dom};

use carddex_lib::card::{image_url, CardSummary};

use crate::common::Route;
use crate::favorites;

/// One tile in the card grid. The favorite button sits next to the detail
/// link, not inside it, so toggling never navigates.
pub struct CardItem {
    card: CardSummary,
}

impl CardItem {
    pub fn new(card: CardSummary) -> Self {
        Self { card }
    }

    fn link(&self) -> String {
        if !self.card.set_id.is_empty() && !self.card.local_id.is_empty() {
            Route::Card {
                set_id: self.card.set_id.clone(),
                local_id: self.card.local_id.clone(),
            }
            .url()
        } else {
            Route::NotFound.url()
        }
    }

    /// The toggle handler finds these buttons by class and id attribute;
    /// the `is-fav` class is only ever set by that handler.
    pub fn render_favorite_button(id: &str) -> Dom {
        html!("button", {
            .class(favorites::BUTTON_CLASS)
            .attribute(favorites::ID_ATTRIBUTE, id)
            .attribute("title", "Toggle favorite")
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
                            .attribute("d", "M11.049 2.927c.3-.921 1.603-.921 1.902 0l1.519 4.674a1 1 0 00.95.69h4.915c.969 0 1.371 1.24.588 1.81l-3.976 2.888a1 1 0 00-.363 1.118l1.518 4.674c.3.922-.755 1.688-1.538 1.118l-3.976-2.888a1 1 0 00-1.176 0l-3.976 2.888c-.783.57-1.838-.197-1.538-1.118l1.518-4.674a1 1 0 00-.363-1.118l-3.976-2.888c-.784-.57-.38-1.81.588-1.81h4.914a1 1 0 00.951-.69l1.519-4.674z")
                        })
                    ])
                })
            ])
        })
    }

    pub fn render(&self) -> Dom {
        html!("div", {
            .class("card-tile")
            .children(&mut [
                link!(self.link(), {
                    .class("card-link")
                    .children(&mut [
                        html!("img", {
                            .attr("src", &image_url(&self.card.image, "low"))
                            .attr("loading", "lazy")
                        }),
                        html!("div", {
                            .class("title")
                            .children(&mut [
                                html!("span", {
                                    .text(&self.card.name)
                                })
                            ])
                        })
                    ])
                }),
                Self::render_favorite_button(&self.card.id),
            ])
        })
    }
}
