use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::constants::{ACCEPT_GEO_JSON, NWS_API_BASE, USER_AGENT};
use crate::error::FetchError;
use crate::formatters::format_alerts;
use crate::models::{AlertResponse, GetAlertsRequest, StateCode};

/// MCP service exposing the `get-alerts` tool
#[derive(Clone)]
pub struct Weather {
    client: Arc<Client>,
    api_base: String,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a service talking to the National Weather Service API
    pub fn new() -> Result<Self> {
        Self::with_api_base(NWS_API_BASE)
    }

    /// Creates a service talking to an arbitrary alerts API base URL
    pub fn with_api_base(api_base: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_GEO_JSON));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            tool_router: Self::tool_router(),
        })
    }

    /// Makes the HTTP GET request and deserializes the alerts payload
    async fn make_request(&self, url: &str) -> Result<AlertResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Request)?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        response
            .json::<AlertResponse>()
            .await
            .map_err(FetchError::Decode)
    }

    /// Fetches alerts for a state. Failures are logged here and handed back
    /// as a value so nothing escapes the tool call.
    async fn fetch_alerts(&self, state: &StateCode) -> Result<AlertResponse, FetchError> {
        let url = format!("{}/alerts?area={}", self.api_base, state);
        tracing::debug!("Requesting {}", url);

        self.make_request(&url)
            .await
            .inspect_err(|e| tracing::error!("Error fetching alerts for {}: {}", state, e))
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-weather-alerts".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Active weather alerts for US states, powered by the National Weather Service API."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    #[tool(name = "get-alerts", description = "Get weather alerts for a state")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting alerts for state: {}", request.state);

        let outcome = self.fetch_alerts(&request.state).await;
        let formatted = format_alerts(&request.state, outcome);

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }
}
