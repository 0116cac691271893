//! Lightweight global metrics for rolodex.
//!
//! Потокобезопасные атомарные счётчики для подсистем:
//! - Insert
//! - Snapshot (save/load)
//! - Query surface (search by name / phone)

use std::sync::atomic::{AtomicU64, Ordering};

// ----- Insert -----
static CONTACTS_INSERTED: AtomicU64 = AtomicU64::new(0);

// ----- Snapshot -----
static SNAPSHOT_SAVES_OK: AtomicU64 = AtomicU64::new(0);
static SNAPSHOT_SAVES_FAILED: AtomicU64 = AtomicU64::new(0);
static SNAPSHOT_LOADS: AtomicU64 = AtomicU64::new(0);

// ----- Query surface -----
static NAME_SEARCHES: AtomicU64 = AtomicU64::new(0);
static NAME_SEARCH_HITS: AtomicU64 = AtomicU64::new(0);
static PHONE_SEARCHES: AtomicU64 = AtomicU64::new(0);
static PHONE_SEARCH_HITS: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct MetricsSnapshot {
    pub contacts_inserted: u64,

    pub snapshot_saves_ok: u64,
    pub snapshot_saves_failed: u64,
    pub snapshot_loads: u64,

    pub name_searches: u64,
    pub name_search_hits: u64,
    pub phone_searches: u64,
    pub phone_search_hits: u64,
}

impl MetricsSnapshot {
    pub fn save_failure_ratio(&self) -> f64 {
        let total = self.snapshot_saves_ok + self.snapshot_saves_failed;
        if total == 0 {
            0.0
        } else {
            self.snapshot_saves_failed as f64 / total as f64
        }
    }

    pub fn name_hit_ratio(&self) -> f64 {
        if self.name_searches == 0 {
            0.0
        } else {
            self.name_search_hits as f64 / self.name_searches as f64
        }
    }

    pub fn phone_hit_ratio(&self) -> f64 {
        if self.phone_searches == 0 {
            0.0
        } else {
            self.phone_search_hits as f64 / self.phone_searches as f64
        }
    }
}

// ----- Recorders (Insert) -----
pub fn record_contact_inserted() {
    CONTACTS_INSERTED.fetch_add(1, Ordering::Relaxed);
}

// ----- Recorders (Snapshot) -----
pub fn record_snapshot_save_ok() {
    SNAPSHOT_SAVES_OK.fetch_add(1, Ordering::Relaxed);
}
pub fn record_snapshot_save_failed() {
    SNAPSHOT_SAVES_FAILED.fetch_add(1, Ordering::Relaxed);
}
pub fn record_snapshot_load() {
    SNAPSHOT_LOADS.fetch_add(1, Ordering::Relaxed);
}

// ----- Recorders (Query surface) -----
pub fn record_name_search(hit: bool) {
    NAME_SEARCHES.fetch_add(1, Ordering::Relaxed);
    if hit {
        NAME_SEARCH_HITS.fetch_add(1, Ordering::Relaxed);
    }
}
pub fn record_phone_search(hit: bool) {
    PHONE_SEARCHES.fetch_add(1, Ordering::Relaxed);
    if hit {
        PHONE_SEARCH_HITS.fetch_add(1, Ordering::Relaxed);
    }
}

/// Снять текущие значения всех счётчиков.
pub fn snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        contacts_inserted: CONTACTS_INSERTED.load(Ordering::Relaxed),

        snapshot_saves_ok: SNAPSHOT_SAVES_OK.load(Ordering::Relaxed),
        snapshot_saves_failed: SNAPSHOT_SAVES_FAILED.load(Ordering::Relaxed),
        snapshot_loads: SNAPSHOT_LOADS.load(Ordering::Relaxed),

        name_searches: NAME_SEARCHES.load(Ordering::Relaxed),
        name_search_hits: NAME_SEARCH_HITS.load(Ordering::Relaxed),
        phone_searches: PHONE_SEARCHES.load(Ordering::Relaxed),
        phone_search_hits: PHONE_SEARCH_HITS.load(Ordering::Relaxed),
    }
}
