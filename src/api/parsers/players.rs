use anyhow::anyhow;
use log::warn;
use serde_json::Value;

use crate::domain::PlayerRecord;
use crate::errors::RankingError;

/// Parse the `{ data: [ { attributes: {...} } ] }` envelope into ordered records.
/// Records keep the order of the response.
pub fn parse_players(body: &Value, base_url: &str) -> Result<Vec<PlayerRecord>, RankingError> {
    let entries = extract_entries(body).ok_or_else(|| RankingError::Malformed {
        what: "players envelope",
        source: anyhow!("response has no `data` array"),
    })?;

    let records = entries
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            let record = parse_entry(entry, base_url);
            if record.is_none() {
                warn!("Skipping malformed player entry at position {}", position);
            }
            record
        })
        .collect();

    Ok(records)
}

fn extract_entries(body: &Value) -> Option<&Vec<Value>> {
    body.get("data")?.as_array()
}

fn parse_entry(entry: &Value, base_url: &str) -> Option<PlayerRecord> {
    let attributes = entry.get("attributes")?;
    let name = attributes.get("name")?.as_str()?.to_string();

    Some(PlayerRecord {
        name,
        tournaments_played: extract_count(attributes, "tournaments"),
        points: extract_count(attributes, "points"),
        profile_image_url: extract_profile_url(attributes).map(|url| absolutize(url, base_url)),
    })
}

fn extract_count(attributes: &Value, field: &str) -> u32 {
    attributes
        .get(field)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

/// `profile.data` is null or absent for players without a picture
fn extract_profile_url(attributes: &Value) -> Option<&str> {
    attributes
        .get("profile")?
        .get("data")?
        .get("attributes")?
        .get("url")?
        .as_str()
        .filter(|url| !url.is_empty())
}

/// Uploads served by the API itself come back as paths
fn absolutize(url: &str, base_url: &str) -> String {
    if url.starts_with('/') && !base_url.is_empty() {
        format!("{}{}", base_url.trim_end_matches('/'), url)
    } else {
        url.to_string()
    }
}
