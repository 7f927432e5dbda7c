use crate::client::basic_auth_header;
use crate::envelope::{PreserveBody, ResizeBody};
use crate::error::{Result, ShrinkError};
use log::debug;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Handle to a compressed image hosted by the service.
///
/// The handle is an immutable `(key, url)` pair; every resize call issues a
/// fresh request against the same URL and yields an independent
/// [`ResizedImage`], so concurrent operations on one handle never interfere.
#[derive(Debug, Clone)]
pub struct ResultHandle {
    key: String,
    url: String,
    auth: String,
    http: reqwest::Client,
}

/// Error envelope returned by the resource URL when a resize or preserve
/// request is rejected.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: String,
    message: String,
}

impl ResultHandle {
    pub fn new(key: String, url: String, http: reqwest::Client) -> Self {
        Self {
            auth: basic_auth_header(&key),
            key,
            url,
            http,
        }
    }

    /// Location of the compressed resource.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the compressed image.
    ///
    /// No authentication header is sent: the URL itself is a pre-authorized,
    /// time-limited capability granted by the service.
    pub async fn image(&self) -> Result<reqwest::Response> {
        Ok(self.http.get(&self.url).send().await?)
    }

    /// Download the compressed image to `path`, creating or truncating the
    /// file. Returns the number of bytes written.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<u64> {
        let response = self.image().await?;
        write_response_to_file(response, path.as_ref()).await
    }

    /// Request a server-side resized rendition of the compressed image.
    ///
    /// Which width/height combinations are valid depends on `method` and is
    /// left to the service to enforce; omitted dimensions are simply not
    /// sent. The result supports saving but no further chained resizes;
    /// re-upload the image to transform it again.
    pub async fn resize(
        &self,
        method: &str,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Result<ResizedImage> {
        debug!("resize {} -> method={} w={:?} h={:?}", self.url, method, width, height);
        let response = self
            .http
            .post(&self.url)
            .header(AUTHORIZATION, &self.auth)
            .json(&ResizeBody::new(method, width, height))
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.bytes().await?;
            let envelope: ErrorEnvelope = serde_json::from_slice(&body)?;
            return Err(ShrinkError::Service {
                kind: envelope.error,
                message: envelope.message,
            });
        }
        Ok(ResizedImage { response })
    }

    /// Scale proportionally. The service expects exactly one of
    /// width/height; the result has exactly that dimension.
    pub async fn scale(&self, width: Option<u32>, height: Option<u32>) -> Result<ResizedImage> {
        self.resize("scale", width, height).await
    }

    /// Scale down proportionally to fit within both dimensions.
    pub async fn fit(&self, width: Option<u32>, height: Option<u32>) -> Result<ResizedImage> {
        self.resize("fit", width, height).await
    }

    /// Scale and crop to exactly the given dimensions; the service picks
    /// the important region automatically.
    pub async fn cover(&self, width: Option<u32>, height: Option<u32>) -> Result<ResizedImage> {
        self.resize("cover", width, height).await
    }

    /// Like `cover`, with extra handling for cut-out images on plain
    /// backgrounds.
    pub async fn thumb(&self, width: Option<u32>, height: Option<u32>) -> Result<ResizedImage> {
        self.resize("thumb", width, height).await
    }

    /// Ask the service to keep selected metadata ("copyright", "creation",
    /// "location") in the compressed output. The raw service response is
    /// returned unwrapped.
    pub async fn preserve(&self, entries: &[&str]) -> Result<reqwest::Response> {
        debug!("preserve {:?} for {}", entries, self.url);
        let response = self
            .http
            .post(&self.url)
            .header(AUTHORIZATION, &self.auth)
            .json(&PreserveBody::new(entries))
            .send()
            .await?;
        Ok(response)
    }

    /// The API key this handle authenticates with.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A resized rendition streamed back by the service.
///
/// Deliberately narrower than [`ResultHandle`]: the response body is the
/// image itself, not a hosted resource, so it can be saved or read out but
/// not resized again.
#[derive(Debug)]
pub struct ResizedImage {
    response: reqwest::Response,
}

impl ResizedImage {
    /// Stream the resized image to `path`, creating or truncating the file.
    /// Returns the number of bytes written.
    pub async fn save(self, path: impl AsRef<Path>) -> Result<u64> {
        write_response_to_file(self.response, path.as_ref()).await
    }

    /// Read the resized image into memory.
    pub async fn bytes(self) -> Result<Vec<u8>> {
        Ok(self.response.bytes().await?.to_vec())
    }
}

/// Streams a response body to a file without buffering it whole.
async fn write_response_to_file(mut response: reqwest::Response, path: &Path) -> Result<u64> {
    let mut file = tokio::fs::File::create(path).await?;
    let mut written: u64 = 0;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;
    debug!("wrote {} bytes to {:?}", written, path);
    Ok(written)
}
