//! Disconnecting a linked PayPal account.
//!
//! The page's side channels are injected as services so the flow can run
//! in a browser, a native shell, or a test:
//! - `HttpClient` - POST to the disconnect endpoint
//! - `Notifier` - user-visible alert
//! - `PageReloader` - refresh the page once the server has unlinked the account

use std::future::Future;

use serde::Serialize;
use weft_common::{Config, WeftError};

use crate::model::DisconnectResponse;

pub const DISCONNECTED_MESSAGE: &str = "Your PayPal account has been disconnected.";
pub const FAILURE_MESSAGE: &str = "Sorry, something went wrong. Please try again.";

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Success,
    Error,
}

/// Shows alerts to the user.
pub trait Notifier {
    fn show(&self, message: &str, level: AlertLevel);
}

/// Minimal HTTP access for JSON endpoints.
pub trait HttpClient {
    /// POST with an empty body and `Accept: application/json`, returning the
    /// response body. Non-success statuses are errors.
    fn post_json(&self, url: &str) -> impl Future<Output = Result<String, WeftError>>;
}

/// Reloads the current page.
pub trait PageReloader {
    fn reload(&self);
}

/// How a disconnect attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisconnectOutcome {
    /// Server unlinked the account; the page was reloaded.
    Disconnected,
    /// Server answered `success: false`.
    Rejected,
    /// Request failed or the answer could not be decoded.
    Failed,
}

/// Ask the server to unlink the seller's PayPal account.
///
/// Success shows [`DISCONNECTED_MESSAGE`] and reloads the page; anything
/// else shows [`FAILURE_MESSAGE`]. There is no retry.
pub async fn disconnect_paypal<H, N, P>(
    http: &H,
    notifier: &N,
    page: &P,
    config: &Config,
) -> DisconnectOutcome
where
    H: HttpClient,
    N: Notifier,
    P: PageReloader,
{
    let outcome = match request_disconnect(http, config).await {
        Ok(DisconnectResponse { success: true }) => DisconnectOutcome::Disconnected,
        Ok(DisconnectResponse { success: false }) => {
            tracing::warn!("paypal disconnect rejected by server");
            DisconnectOutcome::Rejected
        }
        Err(err) => {
            tracing::error!(error = %err, "paypal disconnect request failed");
            DisconnectOutcome::Failed
        }
    };

    match outcome {
        DisconnectOutcome::Disconnected => {
            notifier.show(DISCONNECTED_MESSAGE, AlertLevel::Success);
            page.reload();
        }
        DisconnectOutcome::Rejected | DisconnectOutcome::Failed => {
            notifier.show(FAILURE_MESSAGE, AlertLevel::Error);
        }
    }
    outcome
}

async fn request_disconnect<H: HttpClient>(
    http: &H,
    config: &Config,
) -> Result<DisconnectResponse, WeftError> {
    let url = config.resolve(&config.routes.disconnect_paypal)?;
    tracing::debug!(%url, "disconnecting paypal account");
    let body = http.post_json(url.as_str()).await?;
    Ok(serde_json::from_str(&body)?)
}

/// `reqwest`-backed [`HttpClient`].
#[cfg(feature = "reqwest")]
pub struct WeftHttpClient {
    pub client: reqwest::Client,
}

#[cfg(feature = "reqwest")]
impl Default for WeftHttpClient {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(feature = "reqwest")]
impl HttpClient for WeftHttpClient {
    async fn post_json(&self, url: &str) -> Result<String, WeftError> {
        let http_err = |err: reqwest::Error| WeftError::Http {
            url: url.to_owned(),
            message: err.to_string(),
        };

        let response = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(http_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeftError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(http_err)
    }
}
