use dominator::{html, Dom};
use futures_signals::signal::SignalExt;

use crate::catalogue::Catalogue;
use crate::common::{snackbar, Route};
use crate::details::Details;

pub fn render() -> Dom {
    html!("div", {
        .child_signal(Route::signal().map(|route| {
            match route {
                Route::Catalogue { keyword, card_type, series, page } => Some(
                    Catalogue::render(Catalogue::new(keyword, card_type, series, page)),
                ),
                Route::Card { set_id, local_id } => Some(
                    Details::render(Details::new(set_id, local_id)),
                ),
                Route::NotFound => Some(
                    html!("div", {
                        .text("not found")
                    }),
                ),
            }
        }))
        .children(&mut [
            snackbar::render(),
        ])
    })
}
