use wikipedia_graph::WikipediaPage;

pub const BEAUTIFUL_SOUP: &str = "Beautiful_Soup_(HTML_parser)";

pub fn beautiful_soup_page() -> WikipediaPage {
    let mut page = WikipediaPage::from_title("Beautiful Soup (HTML parser)");

    // Just manually set the page text to avoid making a request and accessing potentially variable information
    let text = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/data/beautiful-soup-page.html"
    ))
    .expect("Failed to read tests/data/beautiful-soup-page.html");

    page.set_page_text(text);

    page
}

pub const LINKED_BEAUTIFUL_SOUP_PAGES: [&str; 8] = [
    "Main_Page",
    "Python_(programming_language)",
    "HTML",
    "XML",
    "Web_scraping",
    "Alice%27s_Adventures_in_Wonderland",
    "Tag_soup",
    "HTML",
];
