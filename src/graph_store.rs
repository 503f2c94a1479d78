use std::collections::HashMap;

/// Index of an actor inside the store's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub usize);

/// Index of a movie inside the store's arena, assigned in header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub name: String,
    pub movies: Vec<MovieId>, // appearance order from the dataset
}

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub cast: Vec<ActorId>, // no actor appears twice
}

/// Owns every actor and movie; cross references are plain indices.
///
/// The store only grows while the dataset is ingested and is read-only once
/// querying starts.
#[derive(Debug, Default)]
pub struct Graph {
    actors: Vec<Actor>,
    movies: Vec<Movie>,
    actor_index: HashMap<String, ActorId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the existing actor with this exact name, or registers a new
    /// one with no movies.
    pub fn find_or_create_actor(&mut self, name: &str) -> ActorId {
        if let Some(&id) = self.actor_index.get(name) {
            return id;
        }
        let id = ActorId(self.actors.len());
        self.actors.push(Actor {
            name: name.to_string(),
            movies: Vec::new(),
        });
        self.actor_index.insert(name.to_string(), id);
        id
    }

    pub fn find_actor(&self, name: &str) -> Option<ActorId> {
        self.actor_index.get(name).copied()
    }

    /// Id the next call to `register_movie` will hand out.
    pub fn next_movie_id(&self) -> MovieId {
        MovieId(self.movies.len())
    }

    /// Appends a finalized movie to the index.
    pub fn register_movie(&mut self, title: String, cast: Vec<ActorId>) -> MovieId {
        let id = self.next_movie_id();
        self.movies.push(Movie { title, cast });
        id
    }

    /// Records that `actor` appears in `movie` on the actor's side, skipping
    /// a movie that is already in the actor's list.
    pub fn add_movie_to_actor(&mut self, actor: ActorId, movie: MovieId) {
        let movies = &mut self.actors[actor.0].movies;
        if !movies.contains(&movie) {
            movies.push(movie);
        }
    }

    pub fn actor(&self, id: ActorId) -> &Actor {
        &self.actors[id.0]
    }

    pub fn movie(&self, id: MovieId) -> &Movie {
        &self.movies[id.0]
    }

    #[cfg(test)]
    pub(crate) fn actors(&self) -> impl Iterator<Item = (ActorId, &Actor)> {
        self.actors.iter().enumerate().map(|(i, a)| (ActorId(i), a))
    }

    #[cfg(test)]
    pub(crate) fn movies(&self) -> impl Iterator<Item = (MovieId, &Movie)> {
        self.movies.iter().enumerate().map(|(i, m)| (MovieId(i), m))
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Number of actor-movie membership pairs.
    pub fn link_count(&self) -> usize {
        self.actors.iter().map(|actor| actor.movies.len()).sum()
    }
}
