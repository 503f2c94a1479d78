use std::io::BufRead;

use log::{debug, info};

use crate::error::{BaconError, Result};
use crate::graph_store::{ActorId, Graph, MovieId};

const DELIMITER: char = ':';

/// One classified dataset line.
#[derive(Debug, PartialEq, Eq)]
pub enum Record<'a> {
    Blank,
    MovieHeader(&'a str),
    ActorName(&'a str),
}

/// Classifies a line with its terminator already removed. `line_no` is only
/// used for error reporting.
pub fn classify_line(line: &str, line_no: usize) -> Result<Record<'_>> {
    // empty lines and lines starting with ASCII whitespace carry no record
    if line.as_bytes().first().map_or(true, |&b| is_c_space(b)) {
        return Ok(Record::Blank);
    }
    match line.find(DELIMITER) {
        Some(pos) => title_after(&line[pos + DELIMITER.len_utf8()..])
            .map(Record::MovieHeader)
            .ok_or_else(|| BaconError::MalformedDataset {
                line: line_no,
                reason: format!("movie header {:?} has no title after '{}'", line, DELIMITER),
            }),
        None => Ok(Record::ActorName(line)),
    }
}

// same set as C isspace: space, \t, \n, \v, \f, \r
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

// the title starts one character past the delimiter (normally a single space)
fn title_after(rest: &str) -> Option<&str> {
    let mut chars = rest.chars();
    chars.next()?;
    Some(chars.as_str())
}

// movie whose cast is still being read
struct PendingMovie {
    id: MovieId,
    title: String,
    cast: Vec<ActorId>,
}

fn finalize(graph: &mut Graph, pending: PendingMovie) {
    debug!("registering movie {:?} with {} actors", pending.title, pending.cast.len());
    let id = graph.register_movie(pending.title, pending.cast);
    debug_assert_eq!(id, pending.id);
}

/// Reads the whole dataset and builds the actor/movie graph.
///
/// An actor line before the first movie header rejects the dataset; nothing
/// is returned in that case since the graph would be incomplete.
pub fn parse_dataset<R: BufRead>(reader: R) -> Result<Graph> {
    let mut graph = Graph::new();
    let mut current: Option<PendingMovie> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;

        match classify_line(&line, line_no)? {
            Record::Blank => continue,
            Record::MovieHeader(title) => {
                if let Some(done) = current.take() {
                    finalize(&mut graph, done);
                }
                current = Some(PendingMovie {
                    id: graph.next_movie_id(),
                    title: title.to_string(),
                    cast: Vec::new(),
                });
            }
            Record::ActorName(name) => {
                let movie = current.as_mut().ok_or_else(|| BaconError::MalformedDataset {
                    line: line_no,
                    reason: format!("actor {:?} listed before any movie header", name),
                })?;
                let actor = graph.find_or_create_actor(name);
                graph.add_movie_to_actor(actor, movie.id);
                if !movie.cast.contains(&actor) {
                    movie.cast.push(actor);
                }
            }
        }
    }

    if let Some(done) = current.take() {
        finalize(&mut graph, done);
    }

    info!(
        "loaded {} actors, {} movies, {} membership links",
        graph.actor_count(),
        graph.movie_count(),
        graph.link_count()
    );
    Ok(graph)
}
