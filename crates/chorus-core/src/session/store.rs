//! Process-wide session store mapping session ids to bounded turn windows.
//!
//! Uses `DashMap` for concurrent access without a global lock. Each entry
//! is an ordered `Vec<Turn>` capped at `max_turns`; the oldest turns are
//! evicted from the front when an append pushes the window over the cap.
//!
//! Known race: a chat exchange performs two separate appends (user turn,
//! then assistant turn). Concurrent requests sharing a session id may
//! interleave between those appends. Accepted for single-process,
//! low-concurrency usage; each individual append is still atomic per key.

use dashmap::DashMap;

use chorus_types::chat::Turn;

/// Default maximum number of turns retained per session.
pub const DEFAULT_MAX_TURNS: usize = 10;

/// Bounded in-memory conversation store keyed by opaque session id.
///
/// Constructed once at process start and shared through application state;
/// all operations are infallible.
pub struct SessionStore {
    sessions: DashMap<String, Vec<Turn>>,
    max_turns: usize,
}

impl SessionStore {
    /// Create a store retaining at most `max_turns` turns per session.
    pub fn new(max_turns: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            max_turns,
        }
    }

    /// The configured per-session turn cap.
    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Current turns for `session_id`, creating an empty session for an
    /// unseen key. Returns a snapshot clone; later mutations do not affect it.
    pub fn get_or_create(&self, session_id: &str) -> Vec<Turn> {
        self.sessions
            .entry(session_id.to_string())
            .or_default()
            .value()
            .clone()
    }

    /// Current turns for `session_id` without creating an entry.
    ///
    /// Returns an empty vec for unseen keys. This is the read used by the
    /// compare path, which must leave the store untouched.
    pub fn history(&self, session_id: &str) -> Vec<Turn> {
        self.sessions
            .get(session_id)
            .map(|turns| turns.value().clone())
            .unwrap_or_default()
    }

    /// Append a turn, evicting from the front while the window exceeds the
    /// cap. Returns the resulting turn count.
    pub fn append(&self, session_id: &str, turn: Turn) -> usize {
        let mut entry = self.sessions.entry(session_id.to_string()).or_default();
        entry.push(turn);
        if entry.len() > self.max_turns {
            let excess = entry.len() - self.max_turns;
            entry.drain(..excess);
        }
        entry.len()
    }

    /// Delete a session. Returns whether an entry existed.
    pub fn delete(&self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    /// Whether the store currently holds an entry for `session_id`.
    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions.contains_key(session_id)
    }

    /// Number of sessions currently held.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TURNS)
    }
}
