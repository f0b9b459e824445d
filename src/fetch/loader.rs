use crate::fetch::error::FetchError;
use crate::fetch::request::{StnDataRequest, StnDataResponse};
use log::{info, warn};
use reqwest::Client;

pub struct StnDataLoader {
    base_url: String,
    client: Client,
}

impl StnDataLoader {
    pub fn new(base_url: &str, client: Client) -> StnDataLoader {
        StnDataLoader {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/StnData", self.base_url)
    }

    /// Posts `request` and decodes the JSON reply.
    ///
    /// Service-level errors reported inside the body are not checked here.
    pub async fn download(&self, request: &StnDataRequest) -> Result<StnDataResponse, FetchError> {
        let url = self.endpoint();
        info!(
            "Requesting {} to {} for station {} from {}",
            request.sdate, request.edate, request.sid, url
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .json::<StnDataResponse>()
            .await
            .map_err(|e| FetchError::JsonParse(url.clone(), e))?;
        info!(
            "Received {} rows for station {}",
            body.data.len(),
            request.sid
        );
        Ok(body)
    }
}
