// --- File: crates/bookings_http/src/client.rs ---
//! HTTP client for the remote Booking Service.
//!
//! The service exposes a single collection:
//!
//! - `GET    /bookings?email=<email>` returns the user's bookings as a JSON array
//! - `DELETE /bookings/<id>` returns `{ "deletedCount": n, ... }`
//! - `PATCH  /bookings/<id>` takes the full updated booking and returns
//!   `{ "modifiedCount": n, ... }`
//!
//! Any non-2xx status is reported as [`RemoteError::Status`]. Affected counts
//! are not interpreted here; that is the caller's decision.

use bookings_common::{
    create_client, BookingService, Booking, BookingsError, BoxFuture, DeleteResult, UpdateResult,
};
use bookings_config::BookingServiceConfig;
use reqwest::{header, Client, Response, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when talking to the Booking Service
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The request could not be sent or the connection failed
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Booking service returned {status}: {body}")]
    StatusError { status: u16, body: String },

    /// The response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// The configured base URL cannot carry a path
    #[error("Invalid base URL: {0}")]
    UrlError(String),
}

impl From<RemoteError> for BookingsError {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::RequestError(e) => BookingsError::HttpError(e.to_string()),
            RemoteError::StatusError { status, body } => {
                BookingsError::HttpError(format!("status {}: {}", status, body))
            }
            RemoteError::DecodeError(e) => BookingsError::ParseError(e.to_string()),
            RemoteError::UrlError(url) => BookingsError::ConfigError(url),
        }
    }
}

/// Client for the remote bookings collection
#[derive(Debug, Clone)]
pub struct HttpBookingService {
    /// HTTP client used for every request
    client: Client,

    /// Service root, e.g. `https://bookings.example.com`
    base_url: Url,
}

impl HttpBookingService {
    /// Creates a client for the service rooted at `base_url`.
    pub fn new(client: Client, base_url: &str) -> Result<Self, RemoteError> {
        let base_url =
            Url::parse(base_url).map_err(|e| RemoteError::UrlError(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(RemoteError::UrlError(base_url.to_string()));
        }
        Ok(Self { client, base_url })
    }

    /// Creates a client from configuration, building its own `reqwest::Client`.
    pub fn from_config(config: &BookingServiceConfig) -> Result<Self, RemoteError> {
        let client = create_client(config.timeout_secs, config.follow_redirects)?;
        Self::new(client, &config.base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `<base>/bookings[/<id>]` with the id percent-encoded as one segment.
    fn bookings_url(&self, id: Option<&str>) -> Result<Url, RemoteError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| RemoteError::UrlError(self.base_url.to_string()))?;
            segments.pop_if_empty().push("bookings");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    pub async fn fetch_bookings(&self, email: &str) -> Result<Vec<Booking>, RemoteError> {
        let url = self.bookings_url(None)?;
        debug!(%url, email, "fetching bookings");

        let response = self
            .client
            .get(url)
            .query(&[("email", email)])
            .send()
            .await?;

        decode(response).await
    }

    pub async fn remove_booking(&self, id: &str) -> Result<DeleteResult, RemoteError> {
        let url = self.bookings_url(Some(id))?;
        debug!(%url, "deleting booking");

        let response = self.client.delete(url).send().await?;
        decode(response).await
    }

    pub async fn patch_booking(&self, id: &str, booking: &Booking) -> Result<UpdateResult, RemoteError> {
        let url = self.bookings_url(Some(id))?;
        debug!(%url, date = %booking.date, "patching booking");

        let response = self
            .client
            .patch(url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(booking)
            .send()
            .await?;

        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(RemoteError::StatusError {
            status: status.as_u16(),
            body,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

impl BookingService for HttpBookingService {
    type Error = RemoteError;

    fn list_bookings(&self, email: &str) -> BoxFuture<'_, Vec<Booking>, Self::Error> {
        let email = email.to_string();
        Box::pin(async move { self.fetch_bookings(&email).await })
    }

    fn delete_booking(&self, id: &str) -> BoxFuture<'_, DeleteResult, Self::Error> {
        let id = id.to_string();
        Box::pin(async move { self.remove_booking(&id).await })
    }

    fn update_booking(&self, id: &str, booking: &Booking) -> BoxFuture<'_, UpdateResult, Self::Error> {
        let id = id.to_string();
        let booking = booking.clone();
        Box::pin(async move { self.patch_booking(&id, &booking).await })
    }
}
