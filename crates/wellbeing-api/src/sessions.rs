//! Session registry: one [`PageController`] per user session.
//!
//! Each controller sits behind its own mutex, so two actions on the same
//! session run one after the other and a chat send always lands its two
//! transcript entries together. The map lock is held only for lookups and
//! inserts, never while a controller runs.
//!
//! Sessions idle for longer than the configured timeout are dropped: a lookup
//! treats them as gone, and `create` sweeps them out before checking capacity.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;
use wellbeing_chat::PageController;
use wellbeing_core::{Result, WellbeingError};

/// A live session.
#[derive(Debug)]
pub struct SessionHandle {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    last_active: Mutex<DateTime<Utc>>,
    controller: Mutex<PageController>,
}

impl SessionHandle {
    fn new(id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            created_at: now,
            last_active: Mutex::new(now),
            controller: Mutex::new(PageController::new()),
        }
    }

    /// Run `f` with exclusive access to this session's controller.
    pub fn with_controller<R>(&self, f: impl FnOnce(&mut PageController) -> R) -> Result<R> {
        let mut controller = self
            .controller
            .lock()
            .map_err(|e| WellbeingError::Api(format!("Session lock poisoned: {}", e)))?;
        let result = f(&mut controller);
        self.touch();
        Ok(result)
    }

    /// Time of the last controller action, or creation if there was none.
    pub fn last_active(&self) -> DateTime<Utc> {
        self.last_active
            .lock()
            .map(|t| *t)
            .unwrap_or(self.created_at)
    }

    fn touch(&self) {
        if let Ok(mut t) = self.last_active.lock() {
            *t = Utc::now();
        }
    }

    fn is_expired(&self, now: DateTime<Utc>, idle_timeout: Duration) -> bool {
        now - self.last_active() > idle_timeout
    }
}

/// Bounded map of live sessions.
#[derive(Debug)]
pub struct SessionRegistry {
    max_sessions: usize,
    idle_timeout: Duration,
    sessions: Mutex<HashMap<Uuid, Arc<SessionHandle>>>,
}

impl SessionRegistry {
    pub fn new(max_sessions: usize, idle_timeout_minutes: u32) -> Self {
        Self {
            max_sessions,
            idle_timeout: Duration::minutes(i64::from(idle_timeout_minutes)),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Start a new session with a fresh controller. Idle sessions are
    /// evicted first so they never hold capacity.
    pub fn create(&self) -> Result<Arc<SessionHandle>> {
        let mut sessions = self.lock()?;
        self.evict_expired(&mut sessions);
        if sessions.len() >= self.max_sessions {
            return Err(WellbeingError::SessionLimit {
                limit: self.max_sessions,
            });
        }

        let handle = Arc::new(SessionHandle::new(Uuid::new_v4()));
        sessions.insert(handle.id, Arc::clone(&handle));
        tracing::info!(session_id = %handle.id, active = sessions.len(), "Session created");
        Ok(handle)
    }

    /// Look up a live session. An expired session is removed and reported
    /// as absent.
    pub fn get(&self, id: &Uuid) -> Result<Option<Arc<SessionHandle>>> {
        let mut sessions = self.lock()?;
        match sessions.get(id) {
            None => return Ok(None),
            Some(handle) if !handle.is_expired(Utc::now(), self.idle_timeout) => {
                return Ok(Some(Arc::clone(handle)));
            }
            Some(_) => {}
        }
        sessions.remove(id);
        tracing::info!(session_id = %id, "Session expired");
        Ok(None)
    }

    /// End a session. Returns false if it did not exist.
    pub fn remove(&self, id: &Uuid) -> Result<bool> {
        let removed = self.lock()?.remove(id).is_some();
        if removed {
            tracing::info!(session_id = %id, "Session ended");
        }
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn evict_expired(&self, sessions: &mut HashMap<Uuid, Arc<SessionHandle>>) {
        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|_, handle| !handle.is_expired(now, self.idle_timeout));
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, active = sessions.len(), "Expired sessions evicted");
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Arc<SessionHandle>>>> {
        self.sessions
            .lock()
            .map_err(|e| WellbeingError::Api(format!("Session registry lock poisoned: {}", e)))
    }
}
