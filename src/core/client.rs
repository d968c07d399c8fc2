use crate::core::error::NavError;
use reqwest::Client;
use url::Url;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Thin wrapper that holds a configured HTTP client and the chart base URL.
#[derive(Clone)]
pub struct ChartClient {
    http: Client,
    base_chart: Url,
}

impl Default for ChartClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl ChartClient {
    pub fn builder() -> ChartClientBuilder {
        ChartClientBuilder::default()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base_chart(&self) -> &Url {
        &self.base_chart
    }
}

#[derive(Default)]
pub struct ChartClientBuilder {
    user_agent: Option<String>,
    base_chart: Option<Url>,
}

impl ChartClientBuilder {
    /// Override the User-Agent (helpful if the quote host throttles generic UAs).
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// For tests or advanced users: customize the chart base URL.
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    pub fn build(self) -> Result<ChartClient, NavError> {
        let base_chart = self.base_chart.unwrap_or(Url::parse(
            "https://query1.finance.yahoo.com/v8/finance/chart/",
        )?);

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .build()?;

        Ok(ChartClient { http, base_chart })
    }
}
