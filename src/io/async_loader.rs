//! Asynchronous recording loading.
//!
//! Recordings are read and decoded on a background thread so a large or
//! compressed file never stalls the panel.

use eframe::egui;
use hotplate::{DynSource, RecordedSourceReader, SourceReader};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use crate::io::LoadingState;

/// Result of a completed recording load.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        source: DynSource,
        path: PathBuf,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation in progress
    None,
}

/// Manages background loading of recorded feeds.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<DynSource, String>>>,

    /// Path of the file currently being loaded
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        self.loading_state
            .lock()
            .map(|state| state.in_progress)
            .unwrap_or(false)
    }

    /// Starts loading a recording from `path` on a background thread.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        if let Ok(mut state) = self.loading_state.lock() {
            state.in_progress = true;
        }

        self.pending_load_path = Some(path.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();
        let path_string = path.to_string_lossy().into_owned();

        tracing::info!(path = %path_string, "loading recorded feed");

        thread::spawn(move || {
            let result = RecordedSourceReader::new()
                .read(&path_string)
                .map_err(|e| format!("{:#}", e));

            let _ = sender.send(result);

            if let Ok(mut state) = loading_state.lock() {
                state.in_progress = false;
            }

            ctx_handle.request_repaint();
        });
    }

    /// Returns the load result once the background thread has finished.
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };
        let Ok(result) = receiver.try_recv() else {
            return LoadResult::None;
        };

        self.loading_receiver = None;
        let path = self.pending_load_path.take().unwrap_or_default();

        match result {
            Ok(source) => LoadResult::Success { source, path },
            Err(error_msg) => LoadResult::Error(error_msg),
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_async_loader_creation() {
        let loader = AsyncLoader::new();
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut loader = AsyncLoader::new();
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }

    #[test]
    fn test_missing_file_reports_error() {
        let ctx = egui::Context::default();
        let mut loader = AsyncLoader::new();
        let path = std::env::temp_dir().join("hotplate_missing_recording.json");
        let _ = std::fs::remove_file(&path);
        loader.start_file_load(path, &ctx);

        let mut result = LoadResult::None;
        for _ in 0..200 {
            result = loader.check_completion();
            if !matches!(result, LoadResult::None) {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        match result {
            LoadResult::Error(msg) => assert!(msg.contains("Failed to open recording")),
            _ => panic!("expected a load error"),
        }
    }
}
