use http::{HeaderMap, HeaderName, HeaderValue};
use std::{str::FromStr, time::Duration};
use thiserror::Error;

mod native;
pub use native::*;

const CLIENT_REDIRECTS: u32 = 2;

const USER_AGENT: &str = concat!(
    std::env!("CARGO_PKG_NAME"),
    "/",
    std::env!("CARGO_PKG_VERSION")
);

pub struct WikipediaClientConfig {
    timeout: Option<Duration>,
    // Only non defaults
    headers: HeaderMap<HeaderValue>,
    language: isolang::Language,
}

#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("{0}")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),
    #[error("{0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
    #[error("{0}")]
    HeaderMapMaxSizeReached(#[from] http::header::MaxSizeReached),
}

impl WikipediaClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_agent(self, user_agent: impl std::fmt::Display) -> Result<Self, HeaderError> {
        self.add_header(http::header::USER_AGENT, user_agent)
    }

    /// Requests wait forever when this is [`None`]
    pub fn timeout(self, timeout: Option<Duration>) -> Self {
        Self { timeout, ..self }
    }

    pub fn language(self, language: isolang::Language) -> Self {
        Self { language, ..self }
    }

    pub fn add_header(
        mut self,
        name: impl std::fmt::Display,
        value: impl std::fmt::Display,
    ) -> Result<Self, HeaderError> {
        self.headers.try_insert(
            HeaderName::from_str(name.to_string().as_str())?,
            HeaderValue::from_str(value.to_string().as_str())?,
        )?;

        Ok(self)
    }

    pub fn headers(&self) -> &HeaderMap<HeaderValue> {
        &self.headers
    }
}

impl Default for WikipediaClientConfig {
    fn default() -> Self {
        let mut headers = HeaderMap::new();

        headers.insert(
            http::header::USER_AGENT,
            HeaderValue::from_static(USER_AGENT),
        );

        Self {
            language: isolang::Language::Eng,
            timeout: None,
            headers,
        }
    }
}
