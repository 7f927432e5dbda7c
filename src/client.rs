use crate::constants::{DEFAULT_SHRINK_ENDPOINT, MAX_UPLOAD_SIZE};
use crate::envelope::{ShrinkEnvelope, SourceBody};
use crate::error::{Result, ShrinkError};
use crate::result::ResultHandle;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::debug;
use reqwest::header::AUTHORIZATION;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// What gets uploaded to the shrink endpoint.
///
/// String inputs are dispatched once, up front: anything starting with
/// `http` is treated as a remote image the service fetches itself, anything
/// else as a local file path. Raw bytes can be supplied directly by library
/// callers that already hold the image in memory.
#[derive(Debug, Clone)]
pub enum UploadInput {
    LocalPath(PathBuf),
    RemoteUrl(String),
    Bytes(Vec<u8>),
}

impl UploadInput {
    /// Resolve a CLI-style string argument into an upload input.
    pub fn from_arg(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(ShrinkError::InvalidArgument(
                "\"input\" is required".to_string(),
            ));
        }
        if input.starts_with("http") {
            Ok(UploadInput::RemoteUrl(input.to_string()))
        } else {
            Ok(UploadInput::LocalPath(PathBuf::from(input)))
        }
    }
}

impl From<Vec<u8>> for UploadInput {
    fn from(bytes: Vec<u8>) -> Self {
        UploadInput::Bytes(bytes)
    }
}

/// Configuration for a [`ShrinkClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub key: String,
    pub api: String,
}

impl ClientOptions {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            api: DEFAULT_SHRINK_ENDPOINT.to_string(),
        }
    }

    /// Override the shrink endpoint, e.g. for a regional mirror or a test
    /// server.
    pub fn with_api(mut self, api: impl Into<String>) -> Self {
        self.api = api.into();
        self
    }
}

/// Client bound to one API key.
///
/// Cloning is cheap and shares the underlying connection pool; the key and
/// endpoint are immutable once captured.
#[derive(Debug, Clone)]
pub struct ShrinkClient {
    key: String,
    api: String,
    auth: String,
    http: reqwest::Client,
}

impl ShrinkClient {
    /// Create a client from options. Fails before any network activity if
    /// the key is empty.
    pub fn new(options: ClientOptions) -> Result<Self> {
        if options.key.is_empty() {
            return Err(ShrinkError::MissingKey);
        }
        Ok(Self {
            auth: basic_auth_header(&options.key),
            key: options.key,
            api: options.api,
            http: reqwest::Client::new(),
        })
    }

    /// Upload an image to the shrink endpoint and return a handle to the
    /// compressed result.
    ///
    /// Local files are sent as their raw bytes with no explicit content
    /// type (the service sniffs the format); remote URLs are sent as a
    /// JSON `{"source":{"url":...}}` body.
    pub async fn shrink(&self, input: UploadInput) -> Result<ResultHandle> {
        let request = self.http.post(&self.api).header(AUTHORIZATION, &self.auth);
        let request = match input {
            UploadInput::RemoteUrl(url) => {
                debug!("shrinking remote image: {}", url);
                request.json(&SourceBody::new(url))
            }
            UploadInput::LocalPath(path) => {
                debug!("shrinking local file: {:?}", path);
                request.body(read_upload_bytes(&path)?)
            }
            UploadInput::Bytes(bytes) => {
                debug!("shrinking {} bytes from memory", bytes.len());
                request.body(bytes)
            }
        };

        let response = request.send().await?;
        let body = response.bytes().await?;
        let envelope: ShrinkEnvelope = serde_json::from_slice(&body)?;
        match envelope {
            ShrinkEnvelope::Failure { error, message } => Err(ShrinkError::Service {
                kind: error,
                message,
            }),
            ShrinkEnvelope::Success { output } => {
                debug!("compressed output at {}", output.url);
                Ok(ResultHandle::new(
                    self.key.clone(),
                    output.url,
                    self.http.clone(),
                ))
            }
        }
    }

    /// Blocking wrapper around [`shrink`](Self::shrink) for callers without
    /// an async context.
    pub fn shrink_sync(&self, input: UploadInput) -> Result<ResultHandle> {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(self.shrink(input))
    }

    /// Build a [`ResultHandle`] directly from a known resource URL, without
    /// re-uploading. Useful when the output URL from an earlier upload was
    /// kept around.
    pub fn processor(&self, url: impl Into<String>) -> ResultHandle {
        ResultHandle::new(self.key.clone(), url.into(), self.http.clone())
    }
}

/// `Authorization` header value for the given API key.
pub fn basic_auth_header(key: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("api:{key}")))
}

/// Reads a local file for upload, checking existence and the service's size
/// cap before touching its contents.
fn read_upload_bytes(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(ShrinkError::FileNotFound(path.to_path_buf()));
    }

    let file_size = std::fs::metadata(path)?.len();
    if file_size > MAX_UPLOAD_SIZE {
        return Err(ShrinkError::FileTooLarge(file_size, MAX_UPLOAD_SIZE));
    }

    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut data = Vec::with_capacity(file_size as usize);
    reader.read_to_end(&mut data)?;
    Ok(data)
}
