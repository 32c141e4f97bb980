use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;

use carddex_lib::card::{CardDetail, CardEntry, CardListEntry, CardSummary};
use carddex_lib::toggle;

use crate::utils::{favorites_host, tcgdex_host};

async fn get_json<T>(url: String) -> Result<T>
where
    T: DeserializeOwned,
{
    let res = reqwest::Client::new().get(&url).send().await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(anyhow!("tcgdex http {}: {}", status.as_u16(), body));
    }

    Ok(res.json::<T>().await?)
}

pub async fn list_cards() -> Result<Vec<CardSummary>> {
    let entries: Vec<CardListEntry> = get_json(format!("{}/cards", tcgdex_host())).await?;
    Ok(entries.into_iter().map(CardSummary::from).collect())
}

pub async fn list_cards_by_type(card_type: &str) -> Result<Vec<CardSummary>> {
    let entries: Vec<CardListEntry> = get_json(format!(
        "{}/cards?types={}",
        tcgdex_host(),
        urlencoding::encode(card_type)
    ))
    .await?;
    Ok(entries.into_iter().map(CardSummary::from).collect())
}

pub async fn fetch_card(set_id: &str, local_id: &str) -> Result<CardDetail> {
    let entry: CardEntry = get_json(format!(
        "{}/cards/{}-{}",
        tcgdex_host(),
        set_id,
        local_id
    ))
    .await?;
    Ok(entry.into())
}

/// Ask the backend to flip the favorite state of a card and report the new
/// state. `Err` only for transport failures; a body that does not parse as
/// a toggle response reads as not-favorited.
pub async fn toggle_favorite(id: &str) -> Result<bool> {
    let url = format!("{}{}", favorites_host(), toggle::toggle_url(id));

    let res = reqwest::Client::new().post(&url).send().await?;

    let status = res.status();
    debug!("toggle favorite status = {}", status.as_u16());
    if !status.is_success() {
        warn!("toggle favorite returned http {}", status.as_u16());
    }

    let body = res.text().await?;
    debug!("toggle favorite body = {}", body);

    Ok(toggle::favorited(&body))
}
