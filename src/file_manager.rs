//! File manager state: upload, list, delete, delete-all and search
//!
//! Every user action and every backend completion goes through a method
//! here. Methods that need the network return a [`Request`] for the
//! caller to run; `None` means nothing is sent.

use std::path::PathBuf;

use crate::backend::{SearchResult, UploadedFile};

/// Network work the owner must perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Upload(PathBuf),
    ListFiles,
    DeleteFile(String),
    DeleteAll,
    Search(String),
}

/// What confirming the dialog will do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteOne(String),
    DeleteAll,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub action: Option<PendingAction>,
}

impl ConfirmDialog {
    pub fn is_open(&self) -> bool {
        self.action.is_some()
    }

    fn open(title: &str, message: String, action: PendingAction) -> Self {
        Self {
            title: title.to_string(),
            message,
            action: Some(action),
        }
    }
}

#[derive(Debug, Default)]
pub struct FileManager {
    pub selected_file: Option<PathBuf>,
    pub uploaded: bool,
    pub files: Vec<UploadedFile>,
    pub query: String,
    pub results: Vec<SearchResult>,
    pub is_searching: bool,
    pub is_deleting_all: bool,
    pub deleting_file: Option<String>,
    pub dialog: ConfirmDialog,
    /// Modal notice waiting to be dismissed
    pub notice: Option<String>,
}

impl FileManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_file(&mut self, path: PathBuf) {
        tracing::debug!("Selected {}", path.display());
        self.selected_file = Some(path);
        self.uploaded = false;
    }

    pub fn upload(&mut self) -> Option<Request> {
        let path = self.selected_file.clone()?;
        Some(Request::Upload(path))
    }

    pub fn upload_finished(&mut self, result: Result<(), String>) -> Option<Request> {
        match result {
            Ok(()) => {
                self.uploaded = true;
                self.selected_file = None;
                Some(Request::ListFiles)
            }
            Err(e) => {
                tracing::error!("Upload error: {}", e);
                self.notice = Some(format!("Upload failed: {}", e));
                None
            }
        }
    }

    /// Listing failures are only logged; the previous list stays.
    pub fn files_loaded(&mut self, result: Result<Vec<UploadedFile>, String>) {
        match result {
            Ok(files) => self.files = files,
            Err(e) => tracing::warn!("Error fetching files: {}", e),
        }
    }

    pub fn request_delete(&mut self, filename: String) {
        let message = format!("Are you sure you want to delete {}?", filename);
        self.dialog = ConfirmDialog::open("Delete File", message, PendingAction::DeleteOne(filename));
    }

    pub fn request_delete_all(&mut self) {
        if self.files.is_empty() {
            self.notice = Some("No files to delete".to_string());
            return;
        }
        self.dialog = ConfirmDialog::open(
            "Delete All Files",
            "Are you sure you want to delete ALL files? This action cannot be undone.".to_string(),
            PendingAction::DeleteAll,
        );
    }

    pub fn confirm(&mut self) -> Option<Request> {
        let action = std::mem::take(&mut self.dialog).action?;
        match action {
            PendingAction::DeleteOne(filename) => {
                self.deleting_file = Some(filename.clone());
                Some(Request::DeleteFile(filename))
            }
            PendingAction::DeleteAll => {
                self.is_deleting_all = true;
                Some(Request::DeleteAll)
            }
        }
    }

    pub fn cancel(&mut self) {
        self.dialog = ConfirmDialog::default();
    }

    pub fn delete_finished(&mut self, filename: &str, result: Result<(), String>) -> Option<Request> {
        if self.deleting_file.as_deref() == Some(filename) {
            self.deleting_file = None;
        }
        match result {
            Ok(()) => Some(Request::ListFiles),
            Err(e) => {
                tracing::error!("Delete error: {}", e);
                self.notice = Some(format!("Failed to delete {}: {}", filename, e));
                None
            }
        }
    }

    pub fn delete_all_finished(&mut self, result: Result<(), String>) -> Option<Request> {
        self.is_deleting_all = false;
        match result {
            Ok(()) => Some(Request::ListFiles),
            Err(e) => {
                tracing::error!("Delete all error: {}", e);
                self.notice = Some(format!("Failed to delete all files: {}", e));
                None
            }
        }
    }

    pub fn query_changed(&mut self, query: String) {
        self.query = query;
    }

    pub fn search(&mut self) -> Option<Request> {
        let query = self.query.trim();
        if query.is_empty() {
            self.results.clear();
            return None;
        }
        self.is_searching = true;
        Some(Request::Search(query.to_string()))
    }

    pub fn search_finished(&mut self, result: Result<Vec<SearchResult>, String>) {
        self.is_searching = false;
        match result {
            Ok(results) => self.results = results,
            Err(e) => {
                tracing::error!("Search error: {}", e);
                self.results.clear();
                self.notice = Some(format!("Search failed: {}", e));
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn is_deleting(&self, file: &UploadedFile) -> bool {
        self.deleting_file.as_deref() == Some(file.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<UploadedFile> {
        list.iter().map(|n| UploadedFile::Name(n.to_string())).collect()
    }

    fn hit(filename: &str) -> SearchResult {
        SearchResult {
            content: "text".into(),
            filename: filename.into(),
            page_number: Some(1.into()),
            chunk_index: None,
        }
    }

    #[test]
    fn test_upload_without_selection_sends_nothing() {
        let mut fm = FileManager::new();
        assert_eq!(fm.upload(), None);
    }

    #[test]
    fn test_upload_success_refetches_and_clears_selection() {
        let mut fm = FileManager::new();
        fm.select_file(PathBuf::from("/tmp/report.pdf"));
        assert_eq!(fm.upload(), Some(Request::Upload(PathBuf::from("/tmp/report.pdf"))));

        assert_eq!(fm.upload_finished(Ok(())), Some(Request::ListFiles));
        assert!(fm.uploaded);
        assert!(fm.selected_file.is_none());

        fm.select_file(PathBuf::from("/tmp/next.pdf"));
        assert!(!fm.uploaded);
    }

    #[test]
    fn test_upload_failure_shows_detail() {
        let mut fm = FileManager::new();
        fm.select_file(PathBuf::from("a.pdf"));
        assert_eq!(fm.upload_finished(Err("too large".into())), None);
        assert_eq!(fm.notice.as_deref(), Some("Upload failed: too large"));
        assert!(fm.selected_file.is_some());
    }

    #[test]
    fn test_list_replaces_and_failure_is_silent() {
        let mut fm = FileManager::new();
        fm.files_loaded(Ok(names(&["a.pdf", "b.pdf"])));
        assert_eq!(fm.files.len(), 2);

        fm.files_loaded(Err("connection refused".into()));
        assert_eq!(fm.files.len(), 2);
        assert!(fm.notice.is_none());
    }

    #[test]
    fn test_blank_query_clears_results_without_request() {
        let mut fm = FileManager::new();
        fm.results = vec![hit("a.pdf")];
        fm.query_changed("   ".into());

        assert_eq!(fm.search(), None);
        assert!(fm.results.is_empty());
        assert!(!fm.is_searching);
    }

    #[test]
    fn test_search_trims_and_tracks_progress() {
        let mut fm = FileManager::new();
        fm.query_changed("  budget 2024 ".into());
        assert_eq!(fm.search(), Some(Request::Search("budget 2024".into())));
        assert!(fm.is_searching);

        fm.search_finished(Ok(vec![hit("a.pdf"), hit("b.pdf")]));
        assert!(!fm.is_searching);
        assert_eq!(fm.results.len(), 2);
    }

    #[test]
    fn test_search_failure_clears_results() {
        let mut fm = FileManager::new();
        fm.results = vec![hit("a.pdf")];
        fm.query_changed("x".into());
        fm.search();

        fm.search_finished(Err("index offline".into()));
        assert!(fm.results.is_empty());
        assert!(!fm.is_searching);
        assert_eq!(fm.notice.as_deref(), Some("Search failed: index offline"));
    }

    #[test]
    fn test_delete_all_on_empty_list() {
        let mut fm = FileManager::new();
        fm.request_delete_all();

        assert_eq!(fm.notice.as_deref(), Some("No files to delete"));
        assert!(!fm.dialog.is_open());
        assert_eq!(fm.confirm(), None);
    }

    #[test]
    fn test_cancel_leaves_list_untouched() {
        let mut fm = FileManager::new();
        fm.files_loaded(Ok(names(&["a.pdf", "b.pdf"])));

        fm.request_delete("a.pdf".into());
        assert!(fm.dialog.is_open());
        assert_eq!(fm.dialog.title, "Delete File");
        assert_eq!(fm.dialog.message, "Are you sure you want to delete a.pdf?");

        fm.cancel();
        assert!(!fm.dialog.is_open());
        assert_eq!(fm.files, names(&["a.pdf", "b.pdf"]));
        assert!(fm.deleting_file.is_none());
        // Nothing left to confirm after a cancel
        assert_eq!(fm.confirm(), None);
    }

    #[test]
    fn test_confirm_delete_one() {
        let mut fm = FileManager::new();
        fm.files_loaded(Ok(names(&["a.pdf (3 KB)"])));
        fm.request_delete(fm.files[0].name().to_string());

        assert_eq!(fm.confirm(), Some(Request::DeleteFile("a.pdf".into())));
        assert!(!fm.dialog.is_open());
        assert!(fm.is_deleting(&fm.files[0]));

        assert_eq!(fm.delete_finished("a.pdf", Ok(())), Some(Request::ListFiles));
        assert!(fm.deleting_file.is_none());
    }

    #[test]
    fn test_delete_failure_reports_detail_without_refetch() {
        let mut fm = FileManager::new();
        fm.files_loaded(Ok(names(&["foo.pdf"])));
        fm.request_delete("foo.pdf".into());
        fm.confirm();

        assert_eq!(fm.delete_finished("foo.pdf", Err("not found".into())), None);
        let notice = fm.notice.clone().unwrap();
        assert!(notice.contains("not found"));
        assert_eq!(notice, "Failed to delete foo.pdf: not found");
        assert!(fm.deleting_file.is_none());

        fm.dismiss_notice();
        assert!(fm.notice.is_none());
    }

    #[test]
    fn test_confirm_delete_all() {
        let mut fm = FileManager::new();
        fm.files_loaded(Ok(names(&["a.pdf"])));
        fm.request_delete_all();
        assert_eq!(fm.dialog.title, "Delete All Files");

        assert_eq!(fm.confirm(), Some(Request::DeleteAll));
        assert!(fm.is_deleting_all);

        assert_eq!(fm.delete_all_finished(Err("locked".into())), None);
        assert!(!fm.is_deleting_all);
        assert_eq!(fm.notice.as_deref(), Some("Failed to delete all files: locked"));

        fm.request_delete_all();
        fm.confirm();
        assert_eq!(fm.delete_all_finished(Ok(())), Some(Request::ListFiles));
    }
}
