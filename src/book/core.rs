//! book/core — структура AddressBook, init/open/open_ro, lock-хэндлинг.
//!
//! AddressBook — явно сконструированный объект, передаётся по ссылке
//! коллабораторам (меню, query surface); никакого ambient-синглтона.
//! Весь BookState охраняется одним coarse-grained RwLock: писатели держат
//! эксклюзив на время обновления памяти И синхронной записи снапшота,
//! читатели делят shared.

use anyhow::{anyhow, Context, Result};
use parking_lot::RwLock;
use std::path::Path;

use crate::config::{BookBuilder, RolodexConfig};
use crate::lock::{try_acquire_lock, LockGuard, LockMode};
use crate::snapshot;

use super::state::BookState;

pub struct AddressBook {
    pub(crate) state: RwLock<BookState>,
    pub(crate) cfg: RolodexConfig,
    // Advisory file lock for the process lifetime; released on Drop.
    // None for in-memory books.
    _lock: Option<LockGuard>,
}

impl AddressBook {
    /// Builder для конфигурации (стартует от ENV).
    pub fn builder() -> BookBuilder {
        BookBuilder::new()
    }

    /// Create a fresh empty snapshot at `path`. Fails if one already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(anyhow!("address book already exists at {}", path.display()));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create book dir {}", parent.display()))?;
            }
        }
        let data = serde_json::to_vec_pretty(&BookState::default()).context("serialize empty book")?;
        std::fs::write(path, data).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    /// Open a writer handle: exclusive advisory lock + hydrate from the
    /// snapshot. A missing/unreadable/malformed snapshot aborts the open
    /// (reference behavior halts startup).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let cfg = RolodexConfig::from_env().with_book_path(path.as_ref());
        Self::open_with_config(cfg)
    }

    /// Open a writer handle with an explicit config.
    pub fn open_with_config(cfg: RolodexConfig) -> Result<Self> {
        let guard = try_acquire_lock(&cfg.book_path, LockMode::Exclusive)?;
        let state = snapshot::load(&cfg.book_path)?;
        Ok(Self {
            state: RwLock::new(state),
            cfg,
            _lock: Some(guard),
        })
    }

    /// Read-only handle: shared advisory lock, same hydration rules.
    pub fn open_ro<P: AsRef<Path>>(path: P) -> Result<Self> {
        let cfg = RolodexConfig::from_env()
            .with_book_path(path.as_ref())
            .with_autosave(false);
        let guard = try_acquire_lock(&cfg.book_path, LockMode::Shared)?;
        let state = snapshot::load(&cfg.book_path)?;
        Ok(Self {
            state: RwLock::new(state),
            cfg,
            _lock: Some(guard),
        })
    }

    /// Пустая книга без файла и без lock (тесты, ephemeral использование).
    pub fn in_memory() -> Self {
        Self {
            state: RwLock::new(BookState::default()),
            cfg: RolodexConfig::default().with_autosave(false),
            _lock: None,
        }
    }

    pub fn config(&self) -> &RolodexConfig {
        &self.cfg
    }

    pub fn len(&self) -> usize {
        self.state.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().is_empty()
    }

    /// Structural clone of the current state (shared lock held briefly).
    /// Используется тестами round-trip и командой status.
    pub fn state_snapshot(&self) -> BookState {
        self.state.read().clone()
    }
}
