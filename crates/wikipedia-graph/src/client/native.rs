use super::WikipediaClientConfig;
use crate::page::{LanguageInvalidError, wikipedia_base_with_language};
use std::fmt::Display;
use thiserror::Error;
use ureq::Agent;
use url::{ParseError, Url};

type InnerClient = ureq::Agent;

type HttpErrorInner = ureq::Error;

/// ureq stops reading bodies at 10MB, which the longest list articles come close to
pub const PAGE_SIZE_LIMIT: u64 = 64 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Error with HTTP backend: {0}")]
    Backend(#[from] HttpErrorInner),
    #[error("Error parsing URL: {0}")]
    UrlParseError(#[from] ParseError),
    #[error("Language Invalid: {0}")]
    LanguageInvalidError(#[from] LanguageInvalidError),
}

/// A blocking client used for getting Wikipedia pages
pub struct WikipediaClient {
    client: InnerClient,
    base_url: Url,
    headers: http::HeaderMap,
}

impl WikipediaClient {
    /// Get the markup of the article at the specified pathinfo
    pub fn get<T: Display>(&self, pathinfo: T) -> Result<String, HttpError> {
        let url = self.url_from_pathinfo(pathinfo)?;

        log::info!("Loading page from url '{url}'");

        let mut request = self.client.get(url.as_str());

        for (name, value) in &self.headers {
            request = request.header(name.clone(), value.clone());
        }

        let mut response = request.call()?;

        Ok(response
            .body_mut()
            .with_config()
            .limit(PAGE_SIZE_LIMIT)
            .read_to_string()?)
    }

    pub fn from_config(config: WikipediaClientConfig) -> Result<Self, HttpError> {
        let base_url = wikipedia_base_with_language(config.language)?;

        let builder = ureq::config::Config::builder()
            .max_redirects(super::CLIENT_REDIRECTS)
            .timeout_global(config.timeout);

        let client = Agent::new_with_config(builder.build());

        Ok(Self {
            client,
            base_url,
            headers: config.headers,
        })
    }

    pub fn url_from_pathinfo<T: Display>(&self, pathinfo: T) -> Result<Url, ParseError> {
        self.base_url.join(pathinfo.to_string().as_str())
    }
}

#[cfg(test)]
mod test {
    use super::PAGE_SIZE_LIMIT;
    use crate::{WikipediaClient, WikipediaClientConfig};
    use std::time::Duration;

    #[test]
    fn default_client_config_is_valid() {
        let config = WikipediaClientConfig::default();

        WikipediaClient::from_config(config).expect("Default configuration is invalid");
    }

    #[test]
    fn timeout_config_is_valid() {
        let config = WikipediaClientConfig::new().timeout(Some(Duration::from_secs(30)));

        WikipediaClient::from_config(config).expect("Configuration with a timeout is invalid");
    }

    #[test]
    fn page_limit_is_above_ureq_default() {
        assert!(PAGE_SIZE_LIMIT > 10 * 1024 * 1024);
    }

    #[test]
    fn default_config_sends_user_agent() {
        let config = WikipediaClientConfig::default();

        let agent = config
            .headers()
            .get(http::header::USER_AGENT)
            .expect("No user agent set");

        assert!(agent.to_str().is_ok_and(|agent| agent.starts_with("wikipedia-graph/")));
    }

    #[test]
    fn user_agent_replaces_default() {
        let config = WikipediaClientConfig::default()
            .user_agent("link-crawler-test")
            .expect("User agent is invalid");

        let agents: Vec<_> = config.headers().get_all(http::header::USER_AGENT).iter().collect();

        assert_eq!(agents, ["link-crawler-test"]);
    }

    #[test]
    fn pathinfo_joins_article_path() {
        let client = WikipediaClient::from_config(WikipediaClientConfig::default())
            .expect("Default configuration is invalid");

        assert_eq!(
            client
                .url_from_pathinfo("Beautiful_Soup_(HTML_parser)")
                .expect("Failed to join pathinfo")
                .as_str(),
            "https://en.wikipedia.org/wiki/Beautiful_Soup_(HTML_parser)"
        );
    }

    mod language {
        use crate::{WikipediaClient, WikipediaClientConfig, wikipedia_base_with_language};
        use isolang::Language;

        const TEST_LANGUAGES: [(&str, &str); 20] = [
            ("ar", "Arabic"),
            ("da", "Danish"),
            ("de", "German"),
            ("el", "Greek"),
            ("en", "English"),
            ("eo", "Esperanto"),
            ("es", "Spanish"),
            ("fr", "French"),
            ("he", "Hebrew"),
            ("hi", "Hindi"),
            ("is", "Icelandic"),
            ("it", "Italian"),
            ("ko", "Korean"),
            ("la", "Latin"),
            ("nv", "Navajo"),
            ("pt", "Portuguese"),
            ("ru", "Russian"),
            ("sv", "Swedish"),
            ("to", "Tongan"),
            ("zh", "Chinese"),
        ];

        #[test]
        fn languages_are_valid() {
            for (iso, name) in TEST_LANGUAGES {
                let url = wikipedia_base_with_language(
                    Language::from_639_1(iso)
                        .unwrap_or_else(|| panic!("Iso code '{iso}' is invalid")),
                )
                .unwrap_or_else(|_| panic!("Language '{name}' has no iso 639-1 code"));

                assert!(
                    url.host_str().is_some_and(|host| {
                        host.starts_with(iso) && host.ends_with("wikipedia.org")
                    }),
                    "Url does not start with the respective iso code"
                );
            }
        }

        #[test]
        fn language_without_639_1_is_rejected() {
            // Klingon only has a 639-3 code
            let config = WikipediaClientConfig::default().language(Language::Tlh);

            assert!(WikipediaClient::from_config(config).is_err());
        }
    }
}
