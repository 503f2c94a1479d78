pub mod config;
pub mod error;
pub mod graph_store;
pub mod path_search;
pub mod query_driver;
pub mod record_parser;

pub use config::Config;
pub use error::{BaconError, Result};
pub use graph_store::{Actor, ActorId, Graph, Movie, MovieId};
pub use path_search::{BaconSearch, Hop, SearchScratch};
pub use query_driver::{QueryDriver, QueryReport, Score};
pub use record_parser::parse_dataset;
