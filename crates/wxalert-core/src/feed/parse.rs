use serde_json::Value;

use crate::alerts::model::RawAlertRecord;
use crate::error::{MalformedInputError, json_kind};

/// Extract raw alert records from a payload.
///
/// Accepts either the service's feature collection (`{"features": [...]}`)
/// or a bare array of features. The only checks are top-level: the payload
/// must be JSON, the features must form an array, and each feature must be
/// an object. Everything inside a feature is tolerated.
pub fn parse_features(bytes: &[u8]) -> Result<Vec<RawAlertRecord>, MalformedInputError> {
    let document: Value = serde_json::from_slice(bytes)?;
    records_from_document(document)
}

/// Same as [`parse_features`], for an already-decoded document.
pub fn records_from_document(document: Value) -> Result<Vec<RawAlertRecord>, MalformedInputError> {
    let features = match document {
        Value::Object(mut map) => map
            .remove("features")
            .ok_or(MalformedInputError::MissingFeatures)?,
        other => other,
    };

    let features = match features {
        Value::Array(features) => features,
        other => {
            return Err(MalformedInputError::FeaturesNotArray {
                found: json_kind(&other),
            });
        }
    };

    let records = features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| {
            if !feature.is_object() {
                return Err(MalformedInputError::FeatureNotObject {
                    index,
                    found: json_kind(&feature),
                });
            }
            Ok(serde_json::from_value::<RawAlertRecord>(feature)?)
        })
        .collect::<Result<Vec<RawAlertRecord>, _>>()?;

    tracing::debug!(count = records.len(), "parsed alert features");
    Ok(records)
}
