//! File watching for live reload.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

const DEBOUNCE: Duration = Duration::from_millis(100);

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// A content file (`.yaml`/`.yml`) was created, changed or removed
    ContentChanged(PathBuf),

    /// File was created
    Created(PathBuf),

    /// File was deleted
    Deleted(PathBuf),

    /// Generic modification
    Modified(PathBuf),
}

impl WatchEvent {
    pub fn path(&self) -> &Path {
        match self {
            WatchEvent::ContentChanged(p)
            | WatchEvent::Created(p)
            | WatchEvent::Deleted(p)
            | WatchEvent::Modified(p) => p,
        }
    }
}

/// File watcher for detecting changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a new file watcher for the given paths. Paths that do not exist are skipped.
    ///
    /// Returns the watcher and a channel to receive events.
    pub fn new(
        paths: &[PathBuf],
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        for path in paths {
            if path.exists() {
                watcher
                    .watch(path, RecursiveMode::Recursive)
                    .map_err(std::io::Error::other)?;
                tracing::debug!("Watching {}", path.display());
            }
        }

        std::thread::spawn(move || {
            // A batch ends once no event has arrived for DEBOUNCE
            while let Ok(first) = sync_rx.recv() {
                let mut batch = vec![first];
                loop {
                    match sync_rx.recv_timeout(DEBOUNCE) {
                        Ok(event) => batch.push(event),
                        Err(_) => break,
                    }
                }

                for e in coalesce(&batch) {
                    if async_tx.blocking_send(e).is_err() {
                        return;
                    }
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Collapse a settled batch: at most one `ContentChanged`, then each other path once.
fn coalesce(batch: &[notify::Event]) -> Vec<WatchEvent> {
    let mut content: Option<WatchEvent> = None;
    let mut others: Vec<WatchEvent> = Vec::new();

    for event in batch {
        for path in &event.paths {
            match classify_event(path, &event.kind) {
                Some(e @ WatchEvent::ContentChanged(_)) => content = Some(e),
                Some(e) => {
                    others.retain(|o| o.path() != e.path());
                    others.push(e);
                }
                None => {}
            }
        }
    }

    content.into_iter().chain(others).collect()
}

/// Classify a notify event into a WatchEvent.
fn classify_event(path: &Path, kind: &notify::EventKind) -> Option<WatchEvent> {
    use notify::EventKind;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let is_content = ext == "yaml" || ext == "yml";

    match kind {
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) if is_content => {
            Some(WatchEvent::ContentChanged(path.to_path_buf()))
        }
        EventKind::Create(_) => Some(WatchEvent::Created(path.to_path_buf())),
        EventKind::Remove(_) => Some(WatchEvent::Deleted(path.to_path_buf())),
        EventKind::Modify(_) => Some(WatchEvent::Modified(path.to_path_buf())),
        _ => None,
    }
}
