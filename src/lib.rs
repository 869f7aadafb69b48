pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod report;
pub mod utils;

pub use config::Config;
pub use error::{Error, GraphError, ParseError, Result};
pub use graph::*;
pub use report::{render, NetworkAnswer, OutputFormat, RailwayAnswer};
pub use utils::parse::{parse_network, parse_railways};
