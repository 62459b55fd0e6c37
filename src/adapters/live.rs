//! Live adapter fetching copy from a remote content service.

use reqwest::Client;

use crate::ports::content::{ContentFuture, ContentProvider, IndustryContent};

/// Live content client calling a remote content service over HTTP.
///
/// Expects `GET {base_url}/content/{industry}` to return an
/// [`IndustryContent`] JSON body.
pub struct LiveContentProvider {
    client: Client,
    base_url: String,
}

impl LiveContentProvider {
    /// Creates a live content provider for the given service base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { client: Client::new(), base_url: base_url.into() }
    }
}

impl ContentProvider for LiveContentProvider {
    fn industry_content(&self, industry: &str) -> ContentFuture<'_> {
        let url = format!(
            "{}/content/{}",
            self.base_url.trim_end_matches('/'),
            industry.trim().to_lowercase()
        );

        Box::pin(async move {
            let response = self.client.get(&url).send().await.map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("content service request failed: {e}").into()
                },
            )?;

            let status = response.status();
            let body = response.text().await.map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("failed to read content service response: {e}").into()
                },
            )?;

            if !status.is_success() {
                return Err(
                    format!("content service error ({}): {body}", status.as_u16()).into()
                );
            }

            let content: IndustryContent = serde_json::from_str(&body).map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("failed to parse content service response: {e}").into()
                },
            )?;

            Ok(content)
        })
    }
}
