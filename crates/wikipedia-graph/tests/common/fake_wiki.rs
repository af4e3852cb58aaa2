use std::{cell::RefCell, collections::HashMap, convert::Infallible};
use wikipedia_graph::LinkSource;

/// An in-memory wiki that remembers every page it was asked for
#[derive(Default)]
pub struct FakeWiki {
    pages: HashMap<String, Vec<String>>,
    requests: RefCell<Vec<String>>,
}

impl FakeWiki {
    pub fn with_page(mut self, identifier: &str, links: &[&str]) -> Self {
        self.pages.insert(
            identifier.to_string(),
            links.iter().map(ToString::to_string).collect(),
        );

        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl LinkSource for FakeWiki {
    type Error = Infallible;

    fn linked_identifiers(&self, identifier: &str) -> Result<Vec<String>, Infallible> {
        self.requests.borrow_mut().push(identifier.to_string());

        // Unknown pages behave like stubs with no links
        Ok(self.pages.get(identifier).cloned().unwrap_or_default())
    }
}
