//! 会话
//!
//! `Session` 是显式传给 HTTP 客户端的上下文对象，持有 token 与当前管理员；
//! `SessionStore` 负责把它落盘，相当于浏览器的持久化存储。

use crate::error::{AppResult, SessionError};
use crate::models::AdminUser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// 会话快照，也是落盘格式
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub token: Option<String>,
    pub admin: Option<AdminUser>,
}

/// 当前会话
#[derive(Debug, Default)]
pub struct Session {
    state: RwLock<SessionState>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: SessionState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        self.write().token = Some(token.into());
    }

    pub fn clear_token(&self) {
        self.write().token = None;
    }

    pub fn admin(&self) -> Option<AdminUser> {
        self.read().admin.clone()
    }

    pub fn set_admin(&self, admin: AdminUser) {
        self.write().admin = Some(admin);
    }

    /// 清空 token 和管理员信息
    pub fn clear(&self) {
        *self.write() = SessionState::default();
    }

    /// 只看 token 是否存在，过期与否要等接口返回才知道
    pub fn is_authenticated(&self) -> bool {
        self.read().token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn snapshot(&self) -> SessionState {
        self.read().clone()
    }
}

/// 会话持久化
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取已保存的会话，文件不存在时返回空会话
    pub async fn load(&self) -> AppResult<SessionState> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(SessionState::default()),
            Err(source) => {
                return Err(SessionError::ReadFailed {
                    path: self.path.display().to_string(),
                    source,
                }
                .into())
            }
        };

        let state = serde_json::from_str(&content).map_err(|source| SessionError::Corrupted {
            path: self.path.display().to_string(),
            source,
        })?;
        debug!("已加载会话: {}", self.path.display());
        Ok(state)
    }

    pub async fn save(&self, state: &SessionState) -> AppResult<()> {
        let content = serde_json::to_string_pretty(state).map_err(|source| SessionError::Corrupted {
            path: self.path.display().to_string(),
            source,
        })?;
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|source| SessionError::WriteFailed {
                path: self.path.display().to_string(),
                source,
            })?;
        Ok(())
    }

    /// 删除会话文件，本来就不存在也算成功
    pub async fn clear(&self) -> AppResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::WriteFailed {
                path: self.path.display().to_string(),
                source,
            }
            .into()),
        }
    }
}
