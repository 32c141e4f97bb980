use serde::{Deserialize, Deserializer};

/// Reference field from the TCGdex API. Upstream serializes these either as
/// a bare string id or as an object carrying an `id` field, depending on
/// the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdRef(pub String);

impl<'de> Deserialize<'de> for IdRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Id(String),
            Object {
                #[serde(default)]
                id: String,
            },
            Null,
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Id(id) => IdRef(id),
            Raw::Object { id } => IdRef(id),
            Raw::Null => IdRef(String::new()),
        })
    }
}

fn deserialize_hp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => format!("{:.0}", number),
    }))
}

/// Wire shape of one entry in a TCGdex card listing.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardListEntry {
    pub id: String,
    pub name: String,
    pub image: String,
    pub set: IdRef,
    pub local_id: String,
    pub serie: IdRef,
}

/// Wire shape of a single-card response.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardEntry {
    pub id: String,
    pub name: String,
    pub image: String,
    pub set: IdRef,
    pub local_id: String,
    #[serde(deserialize_with = "deserialize_hp")]
    pub hp: Option<String>,
    pub rarity: String,
    pub types: Vec<String>,
    pub serie: IdRef,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSummary {
    pub id: String,
    pub name: String,
    pub image: String,
    pub set_id: String,
    pub local_id: String,
    pub series_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDetail {
    pub id: String,
    pub name: String,
    pub image: String,
    pub set_id: String,
    pub local_id: String,
    pub hp: Option<String>,
    pub rarity: String,
    pub types: Vec<String>,
    pub series_id: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Series {
    pub id: String,
    pub name: String,
}

impl From<CardListEntry> for CardSummary {
    fn from(entry: CardListEntry) -> Self {
        let (set_id, local_id) = split_card_id(&entry.id, entry.set.0, entry.local_id);
        Self {
            id: entry.id,
            name: entry.name,
            image: entry.image,
            set_id,
            local_id,
            series_id: entry.serie.0,
        }
    }
}

impl From<CardEntry> for CardDetail {
    fn from(entry: CardEntry) -> Self {
        let (set_id, local_id) = split_card_id(&entry.id, entry.set.0, entry.local_id);
        Self {
            id: entry.id,
            name: entry.name,
            image: entry.image,
            set_id,
            local_id,
            hp: entry.hp,
            rarity: entry.rarity,
            types: entry.types,
            series_id: entry.serie.0,
        }
    }
}

/// Fill in missing set/local ids from a compound card id like `swsh3-136`.
pub fn split_card_id(id: &str, set_id: String, local_id: String) -> (String, String) {
    if !set_id.is_empty() && !local_id.is_empty() {
        return (set_id, local_id);
    }

    match id.split_once('-') {
        Some((set_part, local_part)) => (
            if set_id.is_empty() {
                set_part.to_string()
            } else {
                set_id
            },
            if local_id.is_empty() {
                local_part.to_string()
            } else {
                local_id
            },
        ),
        None => (set_id, local_id),
    }
}

/// TCGdex image fields hold a base URL without extension; append the
/// quality and format to get something renderable.
pub fn image_url(base: &str, quality: &str) -> String {
    if base.is_empty() {
        return String::new();
    }
    format!("{}/{}.webp", base.trim_end_matches('/'), quality)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_id_ref_from_string() {
        let id_ref: IdRef = serde_json::from_str(r#""swsh3""#).unwrap();
        assert_eq!(id_ref, IdRef("swsh3".to_string()));
    }

    #[test]
    fn test_id_ref_from_null() {
        let id_ref: IdRef = serde_json::from_str("null").unwrap();
        assert_eq!(id_ref, IdRef(String::new()));
    }

    #[test]
    fn test_id_ref_from_object() {
        let id_ref: IdRef = serde_json::from_str(r#"{"id": "swsh3", "name": "Darkness Ablaze"}"#)
            .unwrap();
        assert_eq!(id_ref, IdRef("swsh3".to_string()));
    }

    #[test]
    fn test_card_list_entry_mixed_refs() {
        let entry: CardListEntry = serde_json::from_str(
            r#"{
                "id": "swsh3-136",
                "name": "Furret",
                "image": "https://assets.tcgdex.net/en/swsh/swsh3/136",
                "set": {"id": "swsh3"},
                "localId": "136",
                "serie": "swsh"
            }"#,
        )
        .unwrap();

        let card = CardSummary::from(entry);
        assert_eq!(card.set_id, "swsh3");
        assert_eq!(card.local_id, "136");
        assert_eq!(card.series_id, "swsh");
    }

    #[test]
    fn test_card_list_entry_ids_from_compound_id() {
        let entry: CardListEntry =
            serde_json::from_str(r#"{"id": "base1-4", "name": "Charizard"}"#).unwrap();

        let card = CardSummary::from(entry);
        assert_eq!(card.set_id, "base1");
        assert_eq!(card.local_id, "4");
    }

    #[test]
    fn test_card_entry_numeric_hp() {
        let entry: CardEntry =
            serde_json::from_str(r#"{"id": "base1-4", "name": "Charizard", "hp": 120}"#).unwrap();
        assert_eq!(entry.hp.as_deref(), Some("120"));
    }

    #[test]
    fn test_card_entry_string_hp() {
        let entry: CardEntry =
            serde_json::from_str(r#"{"id": "base1-4", "name": "Charizard", "hp": "120"}"#)
                .unwrap();
        assert_eq!(entry.hp.as_deref(), Some("120"));
    }

    #[test]
    fn test_card_entry_missing_hp() {
        let entry: CardEntry =
            serde_json::from_str(r#"{"id": "base1-4", "name": "Charizard"}"#).unwrap();
        assert_eq!(entry.hp, None);
    }

    #[test]
    fn test_split_card_id_no_dash() {
        assert_eq!(
            split_card_id("promo", String::new(), String::new()),
            (String::new(), String::new())
        );
    }

    #[test]
    fn test_split_card_id_local_with_dash() {
        assert_eq!(
            split_card_id("swsh12.5-GG01", String::new(), String::new()),
            ("swsh12.5".to_string(), "GG01".to_string())
        );
    }

    #[test]
    fn test_image_url() {
        assert_eq!(
            image_url("https://assets.tcgdex.net/en/swsh/swsh3/136", "low"),
            "https://assets.tcgdex.net/en/swsh/swsh3/136/low.webp"
        );
        assert_eq!(image_url("", "low"), "");
    }
}
