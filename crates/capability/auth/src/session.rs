//! 会话内存存储
//!
//! 使用 RwLock + HashMap 提供线程安全的内存存储，token 为随机 UUID。
//! 会话超过有效期即失效；会话数达到上限时淘汰最早开启的会话。

use crate::{AuthError, User};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// 默认会话有效期（8 小时）。
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(8 * 60 * 60);
/// 默认最大会话数。
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

struct Session {
    user: User,
    issued_at: Instant,
    seq: u64,
}

#[derive(Default)]
struct Sessions {
    entries: HashMap<String, Session>,
    next_seq: u64,
}

pub struct InMemorySessionStore {
    sessions: RwLock<Sessions>,
    ttl: Duration,
    max_sessions: usize,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_SESSION_TTL, DEFAULT_MAX_SESSIONS)
    }

    /// `max_sessions` 至少为 1。
    pub fn with_limits(ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(Sessions::default()),
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    /// 为用户开启新会话，返回 token。
    ///
    /// 先清理过期会话；仍达到上限时淘汰最早的会话。
    pub fn open(&self, user: User) -> Result<String, AuthError> {
        let token = uuid::Uuid::new_v4().to_string();
        let now = Instant::now();
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        sessions
            .entries
            .retain(|_, session| !self.is_expired(session, now));
        while sessions.entries.len() >= self.max_sessions {
            let oldest = sessions
                .entries
                .iter()
                .min_by_key(|(_, session)| session.seq)
                .map(|(token, _)| token.clone());
            match oldest {
                Some(oldest) => {
                    sessions.entries.remove(&oldest);
                }
                None => break,
            }
        }
        let seq = sessions.next_seq;
        sessions.next_seq += 1;
        sessions.entries.insert(
            token.clone(),
            Session {
                user,
                issued_at: now,
                seq,
            },
        );
        Ok(token)
    }

    /// 过期会话视为不存在。
    pub fn get(&self, token: &str) -> Result<Option<User>, AuthError> {
        let now = Instant::now();
        let sessions = self.sessions.read().map_err(poisoned)?;
        Ok(sessions
            .entries
            .get(token)
            .filter(|session| !self.is_expired(session, now))
            .map(|session| session.user.clone()))
    }

    /// 移除会话，返回被移除的用户；已过期的会话同样移除但返回 `None`。
    pub fn close(&self, token: &str) -> Result<Option<User>, AuthError> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        Ok(sessions
            .entries
            .remove(token)
            .filter(|session| !self.is_expired(session, now))
            .map(|session| session.user))
    }

    /// 当前保存的会话数（含尚未清理的过期会话）。
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .map(|sessions| sessions.entries.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_expired(&self, session: &Session, now: Instant) -> bool {
        now.saturating_duration_since(session.issued_at) >= self.ttl
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> AuthError {
    AuthError::Internal("session store lock poisoned".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "user-1".to_string(),
            email: "admin@jalrakshak.com".to_string(),
            name: "Admin".to_string(),
        }
    }

    #[test]
    fn cap_evicts_oldest_first() {
        let store = InMemorySessionStore::with_limits(DEFAULT_SESSION_TTL, 2);
        let first = store.open(user()).expect("open");
        let second = store.open(user()).expect("open");
        let third = store.open(user()).expect("open");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&first).expect("get"), None);
        assert!(store.get(&second).expect("get").is_some());
        assert!(store.get(&third).expect("get").is_some());
    }

    #[test]
    fn expired_sessions_are_pruned_on_open() {
        let store = InMemorySessionStore::with_limits(Duration::ZERO, 8);
        let stale = store.open(user()).expect("open");
        assert_eq!(store.get(&stale).expect("get"), None);
        store.open(user()).expect("open");
        assert_eq!(store.len(), 1);
        assert_eq!(store.close(&stale).expect("close"), None);
    }

    #[test]
    fn zero_cap_keeps_one_session() {
        let store = InMemorySessionStore::with_limits(DEFAULT_SESSION_TTL, 0);
        let token = store.open(user()).expect("open");
        assert!(store.get(&token).expect("get").is_some());
        assert_eq!(store.len(), 1);
    }
}
