use crate::constants::{FAILED_MESSAGE, NO_ALERTS_MESSAGE};
use crate::error::FetchError;
use crate::models::{AlertFeature, AlertProperties, AlertResponse, StateCode};

/// Formats a single alert as five `label: value` lines
pub fn format_alert(feature: &AlertFeature) -> String {
    let empty = AlertProperties::default();
    let props = feature.properties.as_ref().unwrap_or(&empty);

    [
        ("event", props.event.as_deref(), "Unknown Event"),
        ("area", props.area_desc.as_deref(), "Unknown Area"),
        ("severity", props.severity.as_deref(), "Unknown Severity"),
        ("status", props.status.as_deref(), "Unknown Status"),
        ("headline", props.headline.as_deref(), "Unknown Headline"),
    ]
    .into_iter()
    .map(|(label, value, fallback)| format!("{}: {}", label, value.unwrap_or(fallback)))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Turns the outcome of an alerts fetch into the text handed back to the host
pub fn format_alerts(state: &StateCode, outcome: Result<AlertResponse, FetchError>) -> String {
    let alerts = match outcome {
        Ok(alerts) => alerts,
        Err(_) => return FAILED_MESSAGE.to_string(),
    };

    if alerts.features.is_empty() {
        return NO_ALERTS_MESSAGE.to_string();
    }

    let blocks: Vec<String> = alerts.features.iter().map(format_alert).collect();
    format!("Active Alerts in {}:\n{}", state, blocks.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;

    fn response(value: serde_json::Value) -> AlertResponse {
        serde_json::from_value(value).unwrap()
    }

    fn state(code: &str) -> StateCode {
        StateCode::parse(code).unwrap()
    }

    #[test]
    fn test_format_alert_all_fields() {
        let resp = response(json!({
            "features": [{
                "properties": {
                    "event": "Flood Warning",
                    "areaDesc": "Sacramento County",
                    "severity": "Severe",
                    "status": "Actual",
                    "headline": "Flood Warning issued for Sacramento County"
                }
            }]
        }));

        assert_eq!(
            format_alert(&resp.features[0]),
            "event: Flood Warning\n\
             area: Sacramento County\n\
             severity: Severe\n\
             status: Actual\n\
             headline: Flood Warning issued for Sacramento County"
        );
    }

    #[test]
    fn test_format_alert_missing_headline() {
        let resp = response(json!({
            "features": [{
                "properties": {
                    "event": "Heat Advisory",
                    "areaDesc": "Maricopa",
                    "severity": "Moderate",
                    "status": "Actual"
                }
            }]
        }));

        let text = format_alert(&resp.features[0]);
        assert_eq!(text.lines().count(), 5);
        assert_eq!(text.lines().last(), Some("headline: Unknown Headline"));
    }

    #[test]
    fn test_format_alert_without_properties() {
        assert_eq!(
            format_alert(&AlertFeature::default()),
            "event: Unknown Event\n\
             area: Unknown Area\n\
             severity: Unknown Severity\n\
             status: Unknown Status\n\
             headline: Unknown Headline"
        );
    }

    #[test]
    fn test_format_alerts_failure() {
        let outcome = Err(FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(
            format_alerts(&state("CA"), outcome),
            "Failed to retrieve alerts. Please try again later."
        );
    }

    #[test]
    fn test_format_alerts_empty() {
        let outcome = Ok(response(json!({ "features": [] })));
        assert_eq!(
            format_alerts(&state("CA"), outcome),
            "No alerts found for the given state."
        );
    }

    #[test]
    fn test_format_alerts_single() {
        let resp = response(json!({
            "features": [{ "properties": { "event": "Wind Advisory" } }]
        }));
        let expected = format!("Active Alerts in CA:\n{}", format_alert(&resp.features[0]));

        assert_eq!(format_alerts(&state("ca"), Ok(resp)), expected);
    }

    #[test]
    fn test_format_alerts_multiple_in_order() {
        let resp = response(json!({
            "features": [
                { "properties": { "event": "First" } },
                { "properties": { "event": "Second" } }
            ]
        }));

        let text = format_alerts(&state("TX"), Ok(resp));
        let blocks: Vec<&str> = text
            .strip_prefix("Active Alerts in TX:\n")
            .unwrap()
            .split("\n\n")
            .collect();

        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("event: First\n"));
        assert!(blocks[1].starts_with("event: Second\n"));
        assert!(!text.ends_with('\n'));
    }
}
