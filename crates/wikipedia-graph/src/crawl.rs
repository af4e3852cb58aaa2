use isolang::Language;
use itertools::Itertools;
use log::{debug, info};

#[cfg(feature = "client")]
use crate::{HttpError, WikipediaClient, WikipediaClientConfig, WikipediaPage};

/// Anything that can list the articles a page links to
pub trait LinkSource {
    type Error;

    fn linked_identifiers(&self, identifier: &str) -> Result<Vec<String>, Self::Error>;
}

#[cfg(feature = "client")]
impl LinkSource for WikipediaClient {
    type Error = HttpError;

    fn linked_identifiers(&self, identifier: &str) -> Result<Vec<String>, HttpError> {
        let mut page = WikipediaPage::from_title(identifier);

        Ok(page
            .load_page_text(self)?
            .try_get_linked_identifiers()
            .unwrap_or_default())
    }
}

/// `origin`'s page contains a link to `link`
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeRecord {
    pub origin: String,
    pub link: String,
}

impl EdgeRecord {
    pub fn new(origin: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            link: link.into(),
        }
    }
}

/// Every record found during a crawl, in crawl order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeTable {
    records: Vec<EdgeRecord>,
}

impl EdgeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record per link, all tagged with `origin`
    pub fn append_links<I>(&mut self, origin: &str, links: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.records.extend(
            links
                .into_iter()
                .map(|link| EdgeRecord::new(origin, link)),
        );
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EdgeRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.origin.as_str())
    }

    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.link.as_str())
    }

    /// Union of both columns in the order each identifier first appears
    pub fn identifiers(&self) -> Vec<&str> {
        self.records
            .iter()
            .flat_map(|record| [record.origin.as_str(), record.link.as_str()])
            .unique()
            .collect()
    }

    /// How often each distinct record occurs, sorted by link then origin
    pub fn counts(&self) -> Vec<(&EdgeRecord, usize)> {
        self.records
            .iter()
            .counts()
            .into_iter()
            .sorted_by(|(lhs, _), (rhs, _)| {
                (&lhs.link, &lhs.origin).cmp(&(&rhs.link, &rhs.origin))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a EdgeTable {
    type Item = &'a EdgeRecord;
    type IntoIter = std::slice::Iter<'a, EdgeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<EdgeRecord> for EdgeTable {
    fn from_iter<T: IntoIterator<Item = EdgeRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Collect the links on `seed`, then the links on the first `breadth` of those.
///
/// This only ever goes one level deep. Pages are fetched one after another and the
/// first failure ends the crawl.
pub fn crawl<S>(source: &S, seed: &str, breadth: usize) -> Result<EdgeTable, S::Error>
where
    S: LinkSource + ?Sized,
{
    let mut table = EdgeTable::new();

    let seed_links = source.linked_identifiers(seed)?;

    debug!("Found {} links on '{seed}'", seed_links.len());

    table.append_links(seed, seed_links.iter().map(String::as_str));

    for origin in seed_links.iter().take(breadth) {
        let links = source.linked_identifiers(origin)?;

        debug!("Found {} links on '{origin}'", links.len());

        table.append_links(origin, links);
    }

    info!("Edge table created");

    Ok(table)
}

/// The two knobs of a crawl, plus which wikipedia to crawl
#[derive(Clone, Debug)]
pub struct CrawlConfig {
    seed: String,
    breadth: usize,
    language: Language,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seed: "Beautiful_Soup_(HTML_parser)".to_string(),
            breadth: 3,
            language: Language::Eng,
        }
    }
}

impl CrawlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(self, seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into().replace(' ', "_"),
            ..self
        }
    }

    pub fn breadth(self, breadth: usize) -> Self {
        Self { breadth, ..self }
    }

    pub fn language(self, language: Language) -> Self {
        Self { language, ..self }
    }

    pub fn seed_identifier(&self) -> &str {
        &self.seed
    }

    pub fn breadth_count(&self) -> usize {
        self.breadth
    }

    #[cfg(feature = "client")]
    pub fn client_config(&self) -> WikipediaClientConfig {
        WikipediaClientConfig::default().language(self.language)
    }

    pub fn run<S>(&self, source: &S) -> Result<EdgeTable, S::Error>
    where
        S: LinkSource + ?Sized,
    {
        info!(
            "Crawling '{}' with a breadth of {}",
            self.seed, self.breadth
        );

        crawl(source, &self.seed, self.breadth)
    }
}

#[cfg(test)]
mod test {
    use super::{CrawlConfig, EdgeRecord, EdgeTable};
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_group_duplicate_records() {
        let table: EdgeTable = [
            EdgeRecord::new("A", "C"),
            EdgeRecord::new("A", "B"),
            EdgeRecord::new("A", "C"),
            EdgeRecord::new("B", "A"),
        ]
        .into_iter()
        .collect();

        let counts: Vec<_> = table
            .counts()
            .into_iter()
            .map(|(record, count)| (record.origin.as_str(), record.link.as_str(), count))
            .collect();

        assert_eq!(counts, [("B", "A", 1), ("A", "B", 1), ("A", "C", 2)]);
    }

    #[test]
    fn identifiers_are_unique_and_ordered() {
        let mut table = EdgeTable::new();

        table.append_links("A", ["B", "C"]);
        table.append_links("B", ["A", "D"]);

        assert_eq!(table.identifiers(), ["A", "B", "C", "D"]);
    }

    #[cfg(feature = "client")]
    #[test]
    fn language_reaches_the_client() {
        use crate::WikipediaClient;
        use isolang::Language;

        let config = CrawlConfig::new().language(Language::Deu);

        let client = WikipediaClient::from_config(config.client_config())
            .expect("German configuration is invalid");

        assert_eq!(
            client.url_from_pathinfo("Tag_soup").unwrap().as_str(),
            "https://de.wikipedia.org/wiki/Tag_soup"
        );
    }

    #[test]
    fn seed_titles_become_identifiers() {
        let config = CrawlConfig::new().seed("Web scraping").breadth(0);

        assert_eq!(config.seed_identifier(), "Web_scraping");
        assert_eq!(config.breadth_count(), 0);
    }
}
