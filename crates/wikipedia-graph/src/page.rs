use isolang::Language;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use thiserror::Error;
use url::Url;

#[cfg(feature = "client")]
use crate::client::{HttpError, WikipediaClient};

/// The path every article lives under, links outside of it are ignored
pub const ARTICLE_PREFIX: &str = "/wiki/";

/// Separates a namespace from a title, e.g. `Category:Dessert` or `Help:Contents`
pub const NAMESPACE_SEPARATOR: char = ':';

static ANCHORS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("Failed to compile the anchor selector"));

#[derive(Clone, Debug)]
pub struct WikipediaPage {
    // This is called 'pathinfo' it's the part of the url after /wiki/
    pathinfo: String,
    page_data: WikipediaPageData,
}

#[derive(Debug, Clone)]
enum WikipediaPageData {
    FullText(String),
    None,
}

#[derive(Error, Debug, Clone, Copy)]
#[error("Language has no valid iso 639-1 specification")]
pub struct LanguageInvalidError;

#[derive(Debug, Error)]
pub enum WikipediaUrlError {
    #[error("URL host is not the wikipedia domain")]
    InvalidHost,
    // For example: https://en.wikipedia.org/wiki/Waffle vs. https://en.wikipedia.org/Waffle
    #[error("URL path does not lead to a wiki")]
    InvalidPath,
    #[error("Invalid URL: '{0}'")]
    InvalidURL(#[from] url::ParseError),
    #[error("{0}")]
    Language(#[from] LanguageInvalidError),
}

// Some langs don't have an iso 639-1
pub fn wikipedia_base_with_language(language: Language) -> Result<Url, LanguageInvalidError> {
    let code = language.to_639_1().ok_or(LanguageInvalidError)?;

    Url::parse(format!("https://{code}.wikipedia.org{ARTICLE_PREFIX}").as_str())
        .map_err(|_| LanguageInvalidError)
}

fn verify_url(url: &Url) -> Result<(), WikipediaUrlError> {
    let host_str = url.host_str().unwrap_or("");

    if !host_str.ends_with("wikipedia.org") || !(url.scheme() == "http" || url.scheme() == "https")
    {
        return Err(WikipediaUrlError::InvalidHost);
    }

    let mut path = url.path_segments().ok_or(WikipediaUrlError::InvalidPath)?;

    if path.next().is_none_or(|segment| segment != "wiki") {
        return Err(WikipediaUrlError::InvalidPath);
    }

    Ok(())
}

impl WikipediaPage {
    pub fn set_page_text(&mut self, data: String) -> &mut Self {
        self.page_data = WikipediaPageData::FullText(data);

        self
    }

    pub fn pathinfo(&self) -> &str {
        &self.pathinfo
    }

    pub fn url_with_lang(&self, language: Language) -> Result<Url, WikipediaUrlError> {
        Ok(wikipedia_base_with_language(language)?.join(&self.pathinfo)?)
    }

    pub fn from_title(title: impl Into<String>) -> Self {
        let title: String = title.into();

        Self {
            pathinfo: title.replace(' ', "_"),
            page_data: WikipediaPageData::None,
        }
    }

    /// Accepts both `/wiki/Title` and a bare `Title`
    pub fn try_from_path(path: impl Into<String>) -> Result<Self, WikipediaUrlError> {
        let base = Url::parse("https://wikipedia.org/wiki/")?;

        let joined = base.join(path.into().as_str())?;

        verify_url(&joined)?;

        let title = joined
            .path_segments()
            .and_then(Iterator::last)
            .filter(|title| !title.is_empty())
            .ok_or(WikipediaUrlError::InvalidPath)?;

        Ok(Self::from_title(title))
    }

    pub fn try_from_url(url: &Url) -> Result<Self, WikipediaUrlError> {
        verify_url(url)?;

        let mut base = Url::parse(url.origin().ascii_serialization().as_str())?;

        base.set_path(ARTICLE_PREFIX);

        base.make_relative(url)
            .filter(|pathinfo| !pathinfo.is_empty())
            .ok_or(WikipediaUrlError::InvalidPath)
            .map(|pathinfo| Self {
                pathinfo,
                page_data: WikipediaPageData::None,
            })
    }

    cfg_if::cfg_if! {
        if #[cfg(feature = "client")] {
            pub fn load_page_text(&mut self, client: &WikipediaClient) -> Result<&mut Self, HttpError> {
                if !self.is_page_text_loaded() {
                    self.page_data = WikipediaPageData::FullText(client.get(&self.pathinfo)?);
                }

                Ok(self)
            }
        }
    }

    pub fn is_page_text_loaded(&self) -> bool {
        matches!(self.page_data, WikipediaPageData::FullText(_))
    }

    pub fn unload_body(&mut self) -> &mut Self {
        self.page_data = WikipediaPageData::None;

        self
    }

    // All the 'try_...' functions mean is that they don't make any requests
    pub fn try_get_page_text(&self) -> Option<&str> {
        match &self.page_data {
            WikipediaPageData::FullText(text) => Some(text),
            WikipediaPageData::None => None,
        }
    }

    pub fn try_get_linked_identifiers(&self) -> Option<Vec<String>> {
        self.try_get_page_text()
            .map(|text| Self::linked_identifiers_from_page_text(text, &self.pathinfo))
    }

    /// Every article linked from the markup, in document order.
    ///
    /// Links into other namespaces and links back to `own_identifier` are skipped,
    /// repeated links are kept.
    pub fn linked_identifiers_from_page_text(page_text: &str, own_identifier: &str) -> Vec<String> {
        let document = Html::parse_document(page_text);

        document
            .select(&ANCHORS)
            .filter_map(|anchor| anchor.value().attr("href"))
            .filter_map(Self::identifier_from_href)
            .filter(|identifier| *identifier != own_identifier)
            .map(str::to_string)
            .collect()
    }

    /// Strips [`ARTICLE_PREFIX`] and any fragment from an href.
    ///
    /// Returns [`None`] for links that aren't articles.
    pub fn identifier_from_href(href: &str) -> Option<&str> {
        let identifier = href.strip_prefix(ARTICLE_PREFIX)?;

        let identifier = identifier
            .split_once('#')
            .map_or(identifier, |(identifier, _fragment)| identifier);

        (!identifier.is_empty() && !identifier.contains(NAMESPACE_SEPARATOR)).then_some(identifier)
    }
}
