use std::fmt;
use std::io::{BufRead, Write};

use log::{debug, info, warn};

use crate::error::{BaconError, Result};
use crate::graph_store::{ActorId, Graph};
use crate::path_search::{BaconSearch, Hop};

pub const NOT_FOUND_MESSAGE: &str = "Actor Could Not be Found.";

/// Outcome of one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Distance(usize),
    NoBacon,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Distance(hops) => write!(f, "Score: {}", hops),
            Score::NoBacon => write!(f, "Score: No Bacon!"),
        }
    }
}

/// Tally of a processed query stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QueryReport {
    pub answered: usize,
    pub unresolved: usize,
}

/// Answers queries against a fixed anchor actor.
pub struct QueryDriver<'g> {
    graph: &'g Graph,
    anchor: Option<ActorId>,
    list_path: bool,
    search: BaconSearch<'g>,
}

impl<'g> QueryDriver<'g> {
    pub fn new(graph: &'g Graph, anchor_name: &str, list_path: bool) -> Self {
        let anchor = graph.find_actor(anchor_name);
        if anchor.is_none() {
            warn!("anchor {:?} is not in the graph, every score will be No Bacon!", anchor_name);
        }
        Self {
            graph,
            anchor,
            list_path,
            search: BaconSearch::new(graph),
        }
    }

    fn resolve(&self, name: &str) -> Result<ActorId> {
        self.graph
            .find_actor(name)
            .ok_or_else(|| BaconError::ActorNotFound(name.to_string()))
    }

    /// Distance from the anchor to `name`. Fails only when `name` itself is
    /// unknown; a missing anchor short-circuits to `NoBacon` without searching.
    pub fn score(&mut self, name: &str) -> Result<Score> {
        let target = self.resolve(name)?;
        let Some(anchor) = self.anchor else {
            return Ok(Score::NoBacon);
        };
        Ok(self
            .search
            .shortest_distance(anchor, target)
            .map_or(Score::NoBacon, Score::Distance))
    }

    /// Connecting chain from `name` back to the anchor, `None` if unreachable.
    pub fn connection(&mut self, name: &str) -> Result<Option<Vec<Hop>>> {
        let target = self.resolve(name)?;
        Ok(match self.anchor {
            Some(anchor) => self.search.shortest_path(anchor, target),
            None => None,
        })
    }

    /// Reads one actor name per line and writes a `Score:` line for each to
    /// `out`. Unknown names, including lines that are not valid UTF-8, are
    /// reported on `err` and do not stop the stream.
    pub fn run<R, W, E>(
        &mut self,
        mut queries: R,
        out: &mut W,
        err: &mut E,
    ) -> Result<QueryReport>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut report = QueryReport::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if queries.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let raw = strip_line_ending(&buf);
            let result = match std::str::from_utf8(raw) {
                Ok(name) => self.answer(name, out),
                Err(_) => Err(BaconError::ActorNotFound(
                    String::from_utf8_lossy(raw).into_owned(),
                )),
            };
            match result {
                Ok(score) => {
                    debug!("{:?} -> {}", String::from_utf8_lossy(raw), score);
                    report.answered += 1;
                }
                Err(BaconError::ActorNotFound(missing)) => {
                    info!("no actor named {:?}", missing);
                    writeln!(err, "{}", NOT_FOUND_MESSAGE)?;
                    report.unresolved += 1;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(report)
    }

    fn answer<W: Write>(&mut self, name: &str, out: &mut W) -> Result<Score> {
        if !self.list_path {
            let score = self.score(name)?;
            writeln!(out, "{}", score)?;
            return Ok(score);
        }

        match self.connection(name)? {
            Some(hops) => {
                let score = Score::Distance(hops.len());
                writeln!(out, "{}", score)?;
                self.write_path(name, &hops, out)?;
                Ok(score)
            }
            None => {
                writeln!(out, "{}", Score::NoBacon)?;
                Ok(Score::NoBacon)
            }
        }
    }

    fn write_path<W: Write>(&self, name: &str, hops: &[Hop], out: &mut W) -> Result<()> {
        writeln!(out, "{}", name)?;
        for hop in hops {
            writeln!(out, "was in {} with", self.graph.movie(hop.movie).title)?;
            writeln!(out, "{}", self.graph.actor(hop.to).name)?;
        }
        Ok(())
    }
}

// drops a trailing "\n" or "\r\n"
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
