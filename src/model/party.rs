use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Rules for the gift-swap activity shown to guests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftSwap {
    pub name: String,
    pub rules: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift_limit: Option<String>,
}

/// The display document served at `/api/config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyDetails {
    pub title: String,
    pub hosts: Vec<String>,
    pub date: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub gift_swap: GiftSwap,
}

impl Default for PartyDetails {
    fn default() -> Self {
        let date = NaiveDate::from_ymd_opt(2025, 12, 13)
            .and_then(|d| d.and_hms_opt(18, 0, 0))
            .unwrap_or_default();

        Self {
            title: "Christmas Party".into(),
            hosts: Vec::new(),
            date,
            location: None,
            gift_swap: GiftSwap {
                name: "Yankee Swap".into(),
                rules: vec![
                    "Bring one wrapped gift to put in the pile.".into(),
                    "Draw numbers to decide the order of turns.".into(),
                    "On your turn, open a new gift or steal an opened one.".into(),
                    "A gift can only be stolen twice per round.".into(),
                    "Anyone whose gift is stolen picks again.".into(),
                ],
                gift_limit: None,
            },
        }
    }
}
