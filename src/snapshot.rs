//! snapshot — persistence adapter: full JSON rewrite of the book state.
//!
//! Политика (референсное поведение, сохранено намеренно):
//! - save: truncate + полная перезапись файла; любая ошибка I/O или
//!   сериализации логируется и глотается — insert никогда не падает
//!   из-за диска, авторитетным остаётся состояние в памяти.
//! - load: читает и десериализует файл целиком, ошибки пробрасываются
//!   с контекстом (отсутствие/нечитаемость/битый JSON).
//!
//! Снапшот — полный граф (contacts + оба индекса), не лог: каждая запись
//! стоит O(total contacts). Это ограничивает систему малыми книгами
//! (тысячи контактов).

use anyhow::{Context, Result};
use log::warn;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::book::BookState;
use crate::metrics::{record_snapshot_load, record_snapshot_save_failed, record_snapshot_save_ok};

/// Best-effort save. Never propagates: a failed write costs durability,
/// not correctness of the in-memory store. Logged once, no retry.
pub fn save(state: &BookState, path: &Path, pretty: bool) {
    match try_save(state, path, pretty) {
        Ok(()) => record_snapshot_save_ok(),
        Err(e) => {
            record_snapshot_save_failed();
            warn!("failed to save snapshot {}: {:#}", path.display(), e);
        }
    }
}

fn try_save(state: &BookState, path: &Path, pretty: bool) -> Result<()> {
    let data = if pretty {
        serde_json::to_vec_pretty(state)
    } else {
        serde_json::to_vec(state)
    }
    .context("serialize snapshot")?;

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("open snapshot {}", path.display()))?;
    file.write_all(&data)
        .with_context(|| format!("write snapshot {}", path.display()))?;
    Ok(())
}

/// Load the snapshot, replacing nothing on failure: the caller decides
/// whether to abort startup or continue with an empty book.
pub fn load(path: &Path) -> Result<BookState> {
    let data = std::fs::read(path)
        .with_context(|| format!("read snapshot {}", path.display()))?;
    let state: BookState = serde_json::from_slice(&data)
        .with_context(|| format!("parse snapshot {}", path.display()))?;
    record_snapshot_load();
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn unique_path(prefix: &str) -> PathBuf {
        let pid = std::process::id();
        let t = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!("rolodex-snap-{prefix}-{pid}-{t}.json"))
    }

    #[test]
    fn load_missing_file_is_error() {
        let p = unique_path("missing");
        assert!(load(&p).is_err());
    }

    #[test]
    fn load_malformed_json_is_error() {
        let p = unique_path("malformed");
        std::fs::write(&p, b"{not json").unwrap();
        assert!(load(&p).is_err());
        let _ = std::fs::remove_file(&p);
    }

    #[test]
    fn load_empty_maps_snapshot_ok() {
        let p = unique_path("empty");
        std::fs::write(&p, br#"{"contacts": {}, "name_index": {}, "phone_index": {}}"#).unwrap();
        let state = load(&p).unwrap();
        assert!(state.contacts.is_empty());
        assert!(state.name_index.is_empty());
        assert!(state.phone_index.is_empty());
        let _ = std::fs::remove_file(&p);
    }
}
