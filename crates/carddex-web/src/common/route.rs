use futures_signals::signal::{Signal, SignalExt};
use wasm_bindgen::prelude::*;
use web_sys::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Catalogue {
        keyword: Option<String>,
        card_type: Option<String>,
        series: Option<String>,
        page: usize,
    },
    Card {
        set_id: String,
        local_id: String,
    },
    NotFound,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Route {
    pub fn signal() -> impl Signal<Item = Self> {
        dominator::routing::url()
            .signal_ref(|url| Url::new(url).unwrap_throw())
            .map(|url| {
                let pathname = url.pathname();
                let mut paths = pathname.split('/').collect::<Vec<_>>();
                paths.retain(|path| !path.is_empty());

                let params = url.search_params();

                match paths.as_slice() {
                    [] => Route::Catalogue {
                        keyword: non_empty(params.get("q")),
                        card_type: non_empty(params.get("type")),
                        series: non_empty(params.get("series")),
                        page: params
                            .get("page")
                            .and_then(|page| page.parse().ok())
                            .unwrap_or(1),
                    },
                    ["card", set_id, local_id] => Route::Card {
                        set_id: set_id.to_string(),
                        local_id: local_id.to_string(),
                    },
                    _ => Route::NotFound,
                }
            })
    }

    pub fn url(&self) -> String {
        match self {
            Route::Catalogue {
                keyword,
                card_type,
                series,
                page,
            } => {
                let mut params = vec![];

                if let Some(keyword) = keyword {
                    params.push(format!("q={}", urlencoding::encode(keyword)));
                }
                if let Some(card_type) = card_type {
                    params.push(format!("type={}", urlencoding::encode(card_type)));
                }
                if let Some(series) = series {
                    params.push(format!("series={}", urlencoding::encode(series)));
                }
                if *page > 1 {
                    params.push(format!("page={}", page));
                }

                if params.is_empty() {
                    "/".to_string()
                } else {
                    format!("/?{}", params.join("&"))
                }
            }
            Route::Card { set_id, local_id } => {
                format!(
                    "/card/{}/{}",
                    urlencoding::encode(set_id),
                    urlencoding::encode(local_id)
                )
            }
            Route::NotFound => "/notfound".to_string(),
        }
    }
}
