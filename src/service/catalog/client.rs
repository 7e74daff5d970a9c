use std::{
    fmt,
    fs::File,
    io::{self, Read},
    time::Duration,
};

use json::JsonValue;
use reqwest::{blocking::Client, StatusCode};

/// Bound on a catalog fetch before it is aborted.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, PartialEq, Hash, Eq, Clone, Copy)]
pub enum CatalogRequest {
    Champions,
    Items,
}

impl CatalogRequest {
    fn endpoint(&self) -> &'static str {
        match self {
            CatalogRequest::Champions => "champion.json",
            CatalogRequest::Items => "item.json",
        }
    }
}

/// One-shot fetcher for the two static catalog documents. With
/// `load_local_json` it reads `data/<endpoint>` from disk instead of the
/// network, for offline runs.
pub struct CatalogClient {
    client: Client,
    base_url: String,
    load_local_json: bool,
}

impl CatalogClient {
    pub fn new(base_url: &str, timeout: Option<Duration>, load_local_json: bool) -> Result<Self, ClientInitError> {
        let client = Client::builder().timeout(timeout.unwrap_or(DEFAULT_TIMEOUT)).build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
            load_local_json,
        })
    }

    pub fn request(&self, request_type: CatalogRequest) -> Result<JsonValue, RequestError> {
        if self.load_local_json {
            let mut file = File::open(format!("data/{}", request_type.endpoint()))?;
            let mut buf = String::new();
            file.read_to_string(&mut buf)?;
            return Ok(json::parse(buf.as_str())?);
        }

        let url = format!("{}{}", self.base_url, request_type.endpoint());
        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(RequestError::InvalidResponse(request_type, response.status()));
        }

        let text = response.text()?;
        Ok(json::parse(text.as_str())?)
    }
}

#[derive(Debug)]
pub enum ClientInitError {
    ClientError(reqwest::Error),
}

impl fmt::Display for ClientInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientInitError::ClientError(err) => write!(f, "Client error: {}", err),
        }
    }
}

impl From<reqwest::Error> for ClientInitError {
    fn from(error: reqwest::Error) -> Self {
        Self::ClientError(error)
    }
}

#[derive(Debug)]
pub enum RequestError {
    ClientFailed(reqwest::Error),
    InvalidResponse(CatalogRequest, StatusCode),
    ParsingFailed(json::Error),
    LocalFileError(io::Error),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestError::ClientFailed(err) => write!(f, "Client error: {}", err),
            RequestError::InvalidResponse(req_type, status) => {
                write!(f, "The server returned HTTP {} for request {:?}", status, req_type)
            }
            RequestError::ParsingFailed(err) => write!(f, "Parsing error: {}", err),
            RequestError::LocalFileError(err) => write!(f, "Local file error: {}", err),
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(error: reqwest::Error) -> Self {
        RequestError::ClientFailed(error)
    }
}

impl From<json::Error> for RequestError {
    fn from(error: json::Error) -> Self {
        RequestError::ParsingFailed(error)
    }
}

impl From<io::Error> for RequestError {
    fn from(error: io::Error) -> Self {
        RequestError::LocalFileError(error)
    }
}
