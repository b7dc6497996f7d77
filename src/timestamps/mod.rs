pub mod relative;
pub mod types;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::config::TimestampConfig;
use relative::{parse_date_modified, relative_label};
use types::Card;

const INDENT: &[u8] = b"    ";

pub async fn load_cards(path: &Path) -> Result<Vec<Card>> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str::<Vec<Card>>(&json)
        .with_context(|| format!("{} is not a JSON array of objects", path.display()))
}

/// Pretty-print with a 4-space indent, replacing the whole file.
pub async fn save_cards(path: &Path, cards: &[Card]) -> Result<()> {
    let json = to_pretty_json(cards)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn to_pretty_json(cards: &[Card]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    cards.serialize(&mut ser).context("serialize cards")?;
    Ok(buf)
}

/// Recompute `timestamp` for every card that has a `dateModified`.
/// Returns the number of cards updated.
pub fn refresh_cards(cards: &mut [Card], now: DateTime<Utc>) -> Result<usize> {
    let mut updated = 0;
    for (index, card) in cards.iter_mut().enumerate() {
        let modified = card
            .date_modified()
            .with_context(|| format!("card {}", index))?;
        let Some(raw) = modified else {
            debug!(index, "no dateModified, skipped");
            continue;
        };

        let modified = parse_date_modified(raw)
            .with_context(|| format!("card {}: bad dateModified {:?}", index, raw))?;
        let label = relative_label(modified, now);
        debug!(index, %modified, label = %label, "timestamp refreshed");
        card.set_timestamp(label);
        updated += 1;
    }
    Ok(updated)
}

/// Load the featured cards, refresh their labels against the current UTC
/// time and write them back. Nothing is written if any card fails.
pub async fn update_timestamps(config: &TimestampConfig) -> Result<usize> {
    let path = config.cards_path.as_path();
    let mut cards = load_cards(path).await?;
    let now = Utc::now();

    let updated = refresh_cards(&mut cards, now)?;
    save_cards(path, &cards).await?;

    info!(total = cards.len(), updated, path = %path.display(), "Featured card timestamps refreshed");
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};
    use serde_json::json;

    fn cards(value: serde_json::Value) -> Vec<Card> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_refresh_cards_mixed() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap();
        let mut list = cards(json!([
            {"title": "a", "dateModified": "2025-03-14T11:58:30Z", "timestamp": "stale"},
            {"title": "b", "timestamp": "keep me"},
            {"title": "c", "dateModified": "2025-03-13T11:00:00"},
            {"title": "d", "dateModified": ""}
        ]));

        let updated = refresh_cards(&mut list, now).unwrap();
        assert_eq!(updated, 2);
        assert_eq!(list[0].timestamp(), Some("Updated 1m ago"));
        assert_eq!(list[1].timestamp(), Some("keep me"));
        assert_eq!(list[2].timestamp(), Some("Updated 1d ago"));
        assert_eq!(list[3].timestamp(), None);
    }

    #[test]
    fn test_refresh_cards_bad_date_names_card() {
        let now = Utc::now();
        let mut list = cards(json!([
            {"dateModified": (now - TimeDelta::seconds(5)).to_rfc3339()},
            {"dateModified": "not a date"}
        ]));
        let err = refresh_cards(&mut list, now).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("card 1"), "{}", msg);
        assert!(msg.contains("not a date"), "{}", msg);
    }

    #[test]
    fn test_pretty_json_four_space_indent() {
        let list = cards(json!([{"title": "a", "timestamp": "Updated just now"}]));
        let out = String::from_utf8(to_pretty_json(&list).unwrap()).unwrap();
        assert_eq!(
            out,
            "[\n    {\n        \"title\": \"a\",\n        \"timestamp\": \"Updated just now\"\n    }\n]"
        );
    }

    #[test]
    fn test_pretty_json_empty_array() {
        assert_eq!(to_pretty_json(&[]).unwrap(), b"[]");
    }
}
