#![forbid(unsafe_code)]

cfg_if::cfg_if! {
    if #[cfg(feature = "client")] {
        mod client;

        pub use client::WikipediaClient;

        pub use client::WikipediaClientConfig;

        pub use client::{HeaderError, HttpError};
    }
}

mod crawl;

pub use crawl::{CrawlConfig, EdgeRecord, EdgeTable, LinkSource, crawl};

#[cfg(feature = "petgraph")]
mod graph;

#[cfg(feature = "petgraph")]
pub use graph::LinkGraph;

mod page;

pub use page::{
    ARTICLE_PREFIX, LanguageInvalidError, NAMESPACE_SEPARATOR, WikipediaPage, WikipediaUrlError,
    wikipedia_base_with_language,
};

pub use url::Url;

pub use isolang::Language;
