use log::{LevelFilter, debug, info};
use wikipedia_graph::{CrawlConfig, LinkGraph, WikipediaClient};
use wikipedia_plotly_graph::{DEFAULT_OUTPUT, render_graph};

const SEED: &str = "Beautiful_Soup_(HTML_parser)";

const BREADTH: usize = 3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = CrawlConfig::new().seed(SEED).breadth(BREADTH);

    let client = WikipediaClient::from_config(config.client_config())?;

    let table = config.run(&client)?;

    // Nothing downstream reads these, they only end up in the log
    for (record, count) in table.counts() {
        debug!("{} -> {}: {count}", record.origin, record.link);
    }

    let graph = LinkGraph::from_edge_table(&table);

    info!(
        "{} records, {} pages, {} links",
        table.len(),
        graph.node_count(),
        graph.edge_count()
    );

    render_graph(
        &graph,
        config.seed_identifier(),
        &mut fastrand::Rng::new(),
        DEFAULT_OUTPUT,
    )?;

    Ok(())
}
