use std::collections::VecDeque;

use crate::graph_store::{ActorId, Graph, MovieId};

/// One step of a connecting chain: `from` and `to` both appear in `movie`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop {
    pub from: ActorId,
    pub movie: MovieId,
    pub to: ActorId,
}

/// Per-search visited/level bookkeeping, indexed by actor.
///
/// An actor is visited once it has a level. Parents record the actor and
/// shared movie an actor was first discovered through.
#[derive(Debug, Default)]
pub struct SearchScratch {
    levels: Vec<Option<usize>>,
    parents: Vec<Option<(ActorId, MovieId)>>,
}

impl SearchScratch {
    /// Back to baseline: every actor unvisited with no level.
    pub fn reset(&mut self, actor_count: usize) {
        self.levels.clear();
        self.levels.resize(actor_count, None);
        self.parents.clear();
        self.parents.resize(actor_count, None);
    }

    pub fn is_visited(&self, actor: ActorId) -> bool {
        self.level(actor).is_some()
    }

    pub fn level(&self, actor: ActorId) -> Option<usize> {
        self.levels.get(actor.0).copied().flatten()
    }

    fn visit(&mut self, actor: ActorId, level: usize, parent: Option<(ActorId, MovieId)>) {
        self.levels[actor.0] = Some(level);
        self.parents[actor.0] = parent;
    }

    fn parent(&self, actor: ActorId) -> Option<(ActorId, MovieId)> {
        self.parents.get(actor.0).copied().flatten()
    }
}

/// Breadth-first search over the actor/movie graph. Movies are only hop
/// conduits; actors are the visited units.
pub struct BaconSearch<'g> {
    graph: &'g Graph,
    scratch: SearchScratch,
}

impl<'g> BaconSearch<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            scratch: SearchScratch::default(),
        }
    }

    /// Number of shared-movie hops between `anchor` and `target`, or `None`
    /// when no chain connects them.
    pub fn shortest_distance(&mut self, anchor: ActorId, target: ActorId) -> Option<usize> {
        self.search(anchor, target)
    }

    /// Chain of hops from `target` back to `anchor`. Empty when they are the
    /// same actor.
    pub fn shortest_path(&mut self, anchor: ActorId, target: ActorId) -> Option<Vec<Hop>> {
        let distance = self.search(anchor, target)?;
        let mut hops = Vec::with_capacity(distance);
        let mut current = target;
        while current != anchor {
            let (parent, movie) = self.scratch.parent(current)?;
            hops.push(Hop {
                from: current,
                movie,
                to: parent,
            });
            current = parent;
        }
        Some(hops)
    }

    /// Scratch state left behind by the last search.
    #[cfg(test)]
    pub(crate) fn scratch(&self) -> &SearchScratch {
        &self.scratch
    }

    fn search(&mut self, anchor: ActorId, target: ActorId) -> Option<usize> {
        if anchor == target {
            return Some(0);
        }
        let graph = self.graph;
        self.scratch.reset(graph.actor_count());

        let mut queue = VecDeque::new();
        self.scratch.visit(anchor, 0, None);
        queue.push_back((anchor, 0)); // actor, level

        while let Some((actor, level)) = queue.pop_front() {
            for &movie in &graph.actor(actor).movies {
                for &co_star in &graph.movie(movie).cast {
                    if self.scratch.is_visited(co_star) {
                        continue;
                    }
                    self.scratch.visit(co_star, level + 1, Some((actor, movie)));
                    if co_star == target {
                        return Some(level + 1); // first discovery is the shortest
                    }
                    queue.push_back((co_star, level + 1));
                }
            }
        }
        None
    }
}
