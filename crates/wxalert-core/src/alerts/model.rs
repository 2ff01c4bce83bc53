use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One element of the upstream `features` array.
///
/// Every field is tolerant: absent or non-textual values deserialize to an
/// empty string, so a record never fails on its own content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawAlertRecord {
    #[serde(default, deserialize_with = "text")]
    pub id: String,

    #[serde(default, deserialize_with = "properties_or_default")]
    pub properties: RawAlertProperties,
}

/// The `properties` group of a raw alert, named as the upstream service
/// publishes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAlertProperties {
    #[serde(default, deserialize_with = "text")]
    pub effective: String,
    #[serde(default, deserialize_with = "text")]
    pub sent: String,
    #[serde(default, deserialize_with = "text")]
    pub headline: String,
    #[serde(default, deserialize_with = "text")]
    pub description: String,
    #[serde(default, deserialize_with = "text")]
    pub event: String,
    #[serde(default, deserialize_with = "text")]
    pub area_desc: String,
    #[serde(default, deserialize_with = "text")]
    pub onset: String,
    #[serde(default, deserialize_with = "text")]
    pub expires: String,
    #[serde(default, deserialize_with = "text")]
    pub ends: String,
    #[serde(default, deserialize_with = "text")]
    pub status: String,
    #[serde(default, deserialize_with = "text")]
    pub message_type: String,
    #[serde(default, deserialize_with = "text")]
    pub category: String,
    #[serde(default, deserialize_with = "text")]
    pub severity: String,
    #[serde(default, deserialize_with = "text")]
    pub certainty: String,
    #[serde(default, deserialize_with = "text")]
    pub urgency: String,
    #[serde(default, deserialize_with = "text")]
    pub sender: String,
    #[serde(default, deserialize_with = "text")]
    pub sender_name: String,
}

/// Display-ready alert.
///
/// Timestamps stay as the raw text the service sent. `is_expanded` is the
/// only field that changes after creation, and only through
/// `alerts::toggle::toggle_expanded`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAlert {
    pub id: String,
    pub effective_date: String,
    pub sent_date: String,
    pub title: String,
    pub description: String,
    pub event: String,
    pub is_expanded: bool,
    pub area: String,
    pub onset_date: String,
    pub expire_date: String,
    pub ends: String,
    pub status: String,
    pub message_type: String,
    pub category: String,
    pub severity: String,
    pub certainty: String,
    pub urgency: String,
    pub sender: String,
    pub sender_name: String,
}

/// Strings pass through; numbers and booleans keep their JSON text;
/// anything else (null, arrays, objects) becomes empty.
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

fn properties_or_default<'de, D>(deserializer: D) -> Result<RawAlertProperties, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(v @ Value::Object(_)) => serde_json::from_value(v).map_err(D::Error::custom),
        _ => Ok(RawAlertProperties::default()),
    }
}
