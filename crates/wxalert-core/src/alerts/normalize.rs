use crate::alerts::model::{NormalizedAlert, RawAlertRecord};

/// Maps raw upstream records into display-ready alerts.
///
/// A field-for-field mapping: output has the same length and order as
/// `raw`, nothing is dropped or merged, and every alert starts collapsed.
pub fn normalize(raw: &[RawAlertRecord]) -> Vec<NormalizedAlert> {
    let alerts: Vec<NormalizedAlert> = raw.iter().map(normalize_one).collect();
    tracing::debug!(count = alerts.len(), "normalized alert batch");
    alerts
}

fn normalize_one(record: &RawAlertRecord) -> NormalizedAlert {
    let p = &record.properties;

    NormalizedAlert {
        id: record.id.clone(),
        effective_date: p.effective.clone(),
        sent_date: p.sent.clone(),
        title: p.headline.clone(),
        description: p.description.clone(),
        event: p.event.clone(),
        is_expanded: false,
        area: p.area_desc.clone(),
        onset_date: p.onset.clone(),
        expire_date: p.expires.clone(),
        ends: p.ends.clone(),
        status: p.status.clone(),
        message_type: p.message_type.clone(),
        category: p.category.clone(),
        severity: p.severity.clone(),
        certainty: p.certainty.clone(),
        urgency: p.urgency.clone(),
        sender: p.sender.clone(),
        sender_name: p.sender_name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::model::RawAlertProperties;
    use serde_json::json;

    fn full_record() -> RawAlertRecord {
        serde_json::from_value(json!({
            "id": "urn:oid:2.49.0.1.840.0.abc",
            "properties": {
                "effective": "2024-02-04T10:00:00-08:00",
                "sent": "2024-02-04T09:58:00-08:00",
                "headline": "Flood Warning issued February 4 by NWS Los Angeles CA",
                "description": "Flooding caused by excessive rainfall is expected.",
                "event": "Flood Warning",
                "areaDesc": "Los Angeles County",
                "onset": "2024-02-04T10:00:00-08:00",
                "expires": "2024-02-05T04:00:00-08:00",
                "ends": "2024-02-05T10:00:00-08:00",
                "status": "Actual",
                "messageType": "Alert",
                "category": "Met",
                "severity": "Severe",
                "certainty": "Likely",
                "urgency": "Immediate",
                "sender": "w-nws.webmaster@noaa.gov",
                "senderName": "NWS Los Angeles/Oxnard CA"
            }
        }))
        .unwrap()
    }

    fn with_event(id: &str, event: &str) -> RawAlertRecord {
        RawAlertRecord {
            id: id.into(),
            properties: RawAlertProperties {
                event: event.into(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn maps_every_field() {
        let alerts = normalize(&[full_record()]);
        let a = &alerts[0];

        assert_eq!(a.id, "urn:oid:2.49.0.1.840.0.abc");
        assert_eq!(a.effective_date, "2024-02-04T10:00:00-08:00");
        assert_eq!(a.sent_date, "2024-02-04T09:58:00-08:00");
        assert_eq!(
            a.title,
            "Flood Warning issued February 4 by NWS Los Angeles CA"
        );
        assert_eq!(
            a.description,
            "Flooding caused by excessive rainfall is expected."
        );
        assert_eq!(a.event, "Flood Warning");
        assert_eq!(a.area, "Los Angeles County");
        assert_eq!(a.onset_date, "2024-02-04T10:00:00-08:00");
        assert_eq!(a.expire_date, "2024-02-05T04:00:00-08:00");
        assert_eq!(a.ends, "2024-02-05T10:00:00-08:00");
        assert_eq!(a.status, "Actual");
        assert_eq!(a.message_type, "Alert");
        assert_eq!(a.category, "Met");
        assert_eq!(a.severity, "Severe");
        assert_eq!(a.certainty, "Likely");
        assert_eq!(a.urgency, "Immediate");
        assert_eq!(a.sender, "w-nws.webmaster@noaa.gov");
        assert_eq!(a.sender_name, "NWS Los Angeles/Oxnard CA");
        assert!(!a.is_expanded);
    }

    #[test]
    fn empty_input_yields_empty_batch() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn preserves_count_and_order() {
        let raw = vec![
            with_event("c", "Wind Advisory"),
            with_event("a", "Flood Watch"),
            with_event("b", "Heat Advisory"),
        ];

        let ids: Vec<String> = normalize(&raw).into_iter().map(|a| a.id).collect();

        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn keeps_records_with_duplicate_ids() {
        let raw = vec![with_event("dup", "A"), with_event("dup", "B")];

        let alerts = normalize(&raw);

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].event, "A");
        assert_eq!(alerts[1].event, "B");
    }

    #[test]
    fn every_alert_starts_collapsed() {
        let raw = vec![full_record(), with_event("y", "Air Quality Alert")];

        assert!(normalize(&raw).iter().all(|a| !a.is_expanded));
    }

    #[test]
    fn missing_severity_becomes_empty_string() {
        let record: RawAlertRecord = serde_json::from_value(json!({
            "id": "no-severity",
            "properties": { "event": "Frost Advisory" }
        }))
        .unwrap();

        let alerts = normalize(&[record]);

        assert_eq!(alerts[0].severity, "");
        assert_eq!(alerts[0].event, "Frost Advisory");
    }

    #[test]
    fn deterministic_output_for_same_input() {
        let raw = vec![full_record(), with_event("z", "Flood Warning")];

        assert_eq!(normalize(&raw), normalize(&raw));
    }
}
