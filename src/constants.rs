/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-app/1.0";

/// Media type requested from the alerts endpoint
pub const ACCEPT_GEO_JSON: &str = "application/geo+json";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Returned when the upstream request fails for any reason
pub const FAILED_MESSAGE: &str = "Failed to retrieve alerts. Please try again later.";

/// Returned when the upstream reports zero alerts
pub const NO_ALERTS_MESSAGE: &str = "No alerts found for the given state.";
