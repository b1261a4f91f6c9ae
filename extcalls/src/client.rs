use reqwest::Url;
use serde_json::{json, Map, Value};
use tracing::{debug, instrument};

use crate::clock::{Clock, SystemClock};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::transport::{HttpResponse, ReqwestTransport, Transport};
use mathfuncs::{sum, Number};

/// An untyped JSON object as returned by the remote endpoint.
pub type JsonObject = Map<String, Value>;

const RESULT_KEY: &str = "result";
const DATETIME_KEY: &str = "datetime";

/// Client for the remote data endpoint.
///
/// Each operation performs exactly one request. There is no retry, timeout
/// or caching.
#[derive(Debug, Clone)]
pub struct RemoteDataClient<T = ReqwestTransport, C = SystemClock> {
    endpoint: Url,
    transport: T,
    clock: C,
}

impl RemoteDataClient {
    /// Creates a client that talks HTTP through `reqwest` and reads the
    /// system clock.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_parts(config, ReqwestTransport::new()?, SystemClock))
    }
}

impl<T: Transport, C: Clock> RemoteDataClient<T, C> {
    pub fn with_parts(config: ClientConfig, transport: T, clock: C) -> Self {
        Self {
            endpoint: config.endpoint,
            transport,
            clock,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches the endpoint's data.
    ///
    /// Returns `Ok(None)` for any status other than `200 OK`. Transport
    /// failures and a `200` body that is not a JSON object are errors.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch(&self) -> Result<Option<JsonObject>> {
        let response = self.transport.get(&self.endpoint).await?;
        if !response.is_ok() {
            debug!(status = response.status, "fetch returned no data");
            return Ok(None);
        }
        parse_object(&response).map(Some)
    }

    /// Adds `a` and `b` and posts `{"result": <sum>}`.
    ///
    /// The response status is not checked: whatever comes back is parsed as
    /// JSON and returned unchanged. A sum that overflows to infinity is an
    /// error and nothing is sent.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn sum_and_post(&self, a: Number, b: Number) -> Result<JsonObject> {
        let result = sum(a, b).finite()?;
        let body = json!({ RESULT_KEY: result });
        let response = self.transport.post_json(&self.endpoint, &body).await?;
        parse_object(&response)
    }

    /// Posts the current time as `{"datetime": <epoch seconds>}`.
    ///
    /// The response is parsed as JSON and its `"datetime"` key is set to the
    /// timestamp that was sent, replacing any value the server returned.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn post_current_datetime(&self) -> Result<JsonObject> {
        let now = self.clock.now_timestamp();
        let body = json!({ DATETIME_KEY: now });
        let response = self.transport.post_json(&self.endpoint, &body).await?;
        let mut object = parse_object(&response)?;
        object.insert(DATETIME_KEY.to_string(), json!(now));
        Ok(object)
    }
}

fn parse_object(response: &HttpResponse) -> Result<JsonObject> {
    Ok(serde_json::from_str(&response.body)?)
}
