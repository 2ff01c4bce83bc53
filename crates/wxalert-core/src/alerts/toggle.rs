use crate::alerts::model::NormalizedAlert;

/// Returns a copy of `alerts` with `is_expanded` flipped on every alert
/// whose id is `id` (at most one in a well-formed batch). An unknown id
/// returns an unchanged copy.
pub fn toggle_expanded(alerts: &[NormalizedAlert], id: &str) -> Vec<NormalizedAlert> {
    alerts
        .iter()
        .map(|alert| {
            if alert.id == id {
                NormalizedAlert {
                    is_expanded: !alert.is_expanded,
                    ..alert.clone()
                }
            } else {
                alert.clone()
            }
        })
        .collect()
}
