use crate::error::ParseError;
use crate::graph::{check_vertex_limit, RoadKind, RoadMap, Vertex, Weight, WeightedGraph};
use std::str::{FromStr, SplitAsciiWhitespace};

/// Whitespace-delimited token cursor over contest input.
pub struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokens {
            inner: input.split_ascii_whitespace(),
            position: 0,
        }
    }

    pub fn token(&mut self, expected: &'static str) -> Result<&'a str, ParseError> {
        let token = self
            .inner
            .next()
            .ok_or(ParseError::UnexpectedEof { expected })?;
        self.position += 1;
        Ok(token)
    }

    pub fn value<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ParseError> {
        let token = self.token(expected)?;
        token.parse::<T>().map_err(|_| ParseError::InvalidNumber {
            position: self.position,
            token: token.to_string(),
            expected,
        })
    }
}

/// `n m`, then `m` lines `u v w` with 32-bit weights. `n` is capped at
/// [`crate::graph::MAX_VERTICES`].
pub fn parse_network(input: &str) -> Result<WeightedGraph, ParseError> {
    let mut tokens = Tokens::new(input);
    let n: u32 = tokens.value("vertex count")?;
    check_vertex_limit(n)?;
    let m: u32 = tokens.value("edge count")?;

    let mut graph = WeightedGraph::new(n);
    for _ in 0..m {
        let u: Vertex = tokens.value("edge endpoint")?;
        let v: Vertex = tokens.value("edge endpoint")?;
        let w: i32 = tokens.value("32-bit edge weight")?;
        graph.add_edge(u, v, Weight::from(w))?;
    }
    Ok(graph)
}

/// `n`, then `n - 1` rows; row `i` holds `n - i` road symbols.
pub fn parse_railways(input: &str) -> Result<RoadMap, ParseError> {
    let mut tokens = Tokens::new(input);
    let n: u32 = tokens.value("city count")?;
    check_vertex_limit(n)?;

    let mut map = RoadMap::new(n);
    for row in 1..n {
        let symbols = tokens.token("road row")?;
        let roads = parse_row(row, symbols)?;
        map.add_row(row, &roads)?;
    }
    Ok(map)
}

pub fn parse_row(row: Vertex, symbols: &str) -> Result<Vec<RoadKind>, ParseError> {
    symbols
        .chars()
        .map(|symbol| RoadKind::from_symbol(symbol).ok_or(ParseError::InvalidRoad { row, symbol }))
        .collect()
}

/// Contest input text for a weighted graph.
pub fn format_network(graph: &WeightedGraph) -> String {
    let edges = graph.edges();
    let mut out = format!("{} {}\n", graph.vertex_count(), edges.len());
    for (u, v, w) in edges {
        out.push_str(&format!("{u} {v} {w}\n"));
    }
    out
}

/// Contest input text for a road map.
pub fn format_railways(map: &RoadMap) -> String {
    let mut out = format!("{}\n", map.city_count());
    for row in map.rows() {
        out.extend(row.iter().map(|kind| kind.symbol()));
        out.push('\n');
    }
    out
}
