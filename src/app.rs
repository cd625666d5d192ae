//! Core application state and Iced application implementation
//!
//! The window hosts two independent widgets: the file manager (upload,
//! list, delete, search) and the speech capture panel. Widget state lives
//! in [`FileManager`] and [`SpeechCapture`]; this module turns their
//! requests into backend tasks and feeds results back as messages.

use std::path::PathBuf;
use std::time::Duration;

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Element, Length, Task, Theme};

use crate::audio;
use crate::backend::{BackendClient, SearchResult, UploadedFile};
use crate::config::Config;
use crate::file_manager::{FileManager, Request};
use crate::speech::SpeechCapture;
use crate::ui::{confirm_dialog, file_list, results, search_bar, speech_panel, theme};

// ============================================================================
// Application State
// ============================================================================

pub struct Docdesk {
    backend: BackendClient,
    files: FileManager,
    speech: SpeechCapture,
    upload_extensions: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    // File manager
    PickFile,
    FilePicked(Option<PathBuf>),
    Upload,
    Uploaded(Result<(), String>),
    FilesLoaded(Result<Vec<UploadedFile>, String>),
    QueryChanged(String),
    Search,
    SearchFinished(Result<Vec<SearchResult>, String>),
    DeleteFile(String),
    DeleteAll,
    ConfirmDialog,
    CancelDialog,
    FileDeleted(String, Result<(), String>),
    AllDeleted(Result<(), String>),
    DismissNotice,

    // Speech capture
    Speak,
    Recorded(Result<Vec<u8>, String>),
    Transcribed(Result<String, String>),
}

impl Docdesk {
    /// Build the app and fetch the initial file list
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let app = Self {
            backend: BackendClient::from_config(&config),
            files: FileManager::new(),
            speech: SpeechCapture::new(config.record_duration()),
            upload_extensions: config.upload_extensions,
        };
        tracing::info!("Using document backend at {}", app.backend.base_url());
        let task = app.dispatch(Request::ListFiles);
        (app, task)
    }

    pub fn title(&self) -> String {
        String::from("Docdesk")
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickFile => {
                let extensions = self.upload_extensions.clone();
                Task::perform(pick_document(extensions), Message::FilePicked)
            }

            Message::FilePicked(path) => {
                if let Some(path) = path {
                    self.files.select_file(path);
                }
                Task::none()
            }

            Message::Upload => {
                let next = self.files.upload();
                self.run(next)
            }

            Message::Uploaded(result) => {
                let next = self.files.upload_finished(result);
                self.run(next)
            }

            Message::FilesLoaded(result) => {
                self.files.files_loaded(result);
                Task::none()
            }

            Message::QueryChanged(query) => {
                self.files.query_changed(query);
                Task::none()
            }

            Message::Search => {
                if self.files.is_searching {
                    return Task::none();
                }
                let next = self.files.search();
                self.run(next)
            }

            Message::SearchFinished(result) => {
                self.files.search_finished(result);
                Task::none()
            }

            Message::DeleteFile(filename) => {
                self.files.request_delete(filename);
                Task::none()
            }

            Message::DeleteAll => {
                self.files.request_delete_all();
                Task::none()
            }

            Message::ConfirmDialog => {
                let next = self.files.confirm();
                self.run(next)
            }

            Message::CancelDialog => {
                self.files.cancel();
                Task::none()
            }

            Message::FileDeleted(filename, result) => {
                let next = self.files.delete_finished(&filename, result);
                self.run(next)
            }

            Message::AllDeleted(result) => {
                let next = self.files.delete_all_finished(result);
                self.run(next)
            }

            Message::DismissNotice => {
                self.files.dismiss_notice();
                Task::none()
            }

            Message::Speak => match self.speech.start() {
                Some(window) => Task::perform(record(window), Message::Recorded),
                None => Task::none(),
            },

            Message::Recorded(result) => match self.speech.recorded(result) {
                Some(wav) => {
                    let backend = self.backend.clone();
                    Task::perform(
                        async move { backend.speech_to_text(wav).await.map_err(|e| e.to_string()) },
                        Message::Transcribed,
                    )
                }
                None => Task::none(),
            },

            Message::Transcribed(result) => {
                self.speech.transcribed(result);
                Task::none()
            }
        }
    }

    fn run(&self, request: Option<Request>) -> Task<Message> {
        request.map_or_else(Task::none, |request| self.dispatch(request))
    }

    /// Start the backend call for `request`
    fn dispatch(&self, request: Request) -> Task<Message> {
        let backend = self.backend.clone();
        match request {
            Request::Upload(path) => Task::perform(
                async move { backend.upload(&path).await.map(|_| ()).map_err(|e| e.to_string()) },
                Message::Uploaded,
            ),
            Request::ListFiles => Task::perform(
                async move { backend.list_files().await.map_err(|e| e.to_string()) },
                Message::FilesLoaded,
            ),
            Request::DeleteFile(filename) => Task::perform(
                async move {
                    let result = backend.delete_file(&filename).await.map_err(|e| e.to_string());
                    (filename, result)
                },
                |(filename, result)| Message::FileDeleted(filename, result),
            ),
            Request::DeleteAll => Task::perform(
                async move { backend.delete_all().await.map_err(|e| e.to_string()) },
                Message::AllDeleted,
            ),
            Request::Search(query) => Task::perform(
                async move { backend.search(&query).await.map_err(|e| e.to_string()) },
                Message::SearchFinished,
            ),
        }
    }

    // ========================================================================
    // View
    // ========================================================================

    pub fn view(&self) -> Element<'_, Message> {
        let page = column![
            section(self.view_upload()),
            section(self.view_search()),
            section(file_list::view(&self.files)),
            section(speech_panel::view(&self.speech)),
        ]
        .spacing(24)
        .padding(24)
        .max_width(900);

        let base = container(scrollable(container(page).center_x(Length::Fill)))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::window);

        if let Some(notice) = &self.files.notice {
            confirm_dialog::modal(base, confirm_dialog::notice(notice, Message::DismissNotice))
        } else if self.files.dialog.is_open() {
            confirm_dialog::modal(
                base,
                confirm_dialog::view(&self.files.dialog, Message::CancelDialog, Message::ConfirmDialog),
            )
        } else {
            base.into()
        }
    }

    fn view_upload(&self) -> Element<'_, Message> {
        let choose = row![
            button(text("Choose File").size(14))
                .padding([8, 14])
                .style(theme::primary_button)
                .on_press(Message::PickFile),
            text(format!("Accepted: {}", self.accepted_label()))
                .size(12)
                .color(theme::TEXT_MUTED),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center);

        let mut content = column![text("Upload Documents").size(20).color(theme::TEXT), choose].spacing(12);

        // Upload is only offered once a file is selected
        if let Some(path) = &self.files.selected_file {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            content = content.push(
                column![
                    text(format!("Selected File: {}", name)).size(13).color(theme::TEXT_MUTED),
                    button(text("Upload File").size(14))
                        .padding([8, 14])
                        .style(theme::primary_button)
                        .on_press(Message::Upload),
                ]
                .spacing(8),
            );
        }

        if self.files.uploaded {
            content = content.push(text("File uploaded successfully!").size(14).color(theme::SUCCESS));
        }

        content.into()
    }

    fn view_search(&self) -> Element<'_, Message> {
        let submit = (!self.files.is_searching).then_some(Message::Search);
        let mut content = column![
            text("Search Documents").size(20).color(theme::TEXT),
            search_bar::view(&self.files.query, Message::QueryChanged, submit),
        ]
        .spacing(12);

        if !self.files.results.is_empty() {
            content = content.push(Space::with_height(4));
            content = content.push(results::view(&self.files.results));
        }

        content.into()
    }

    fn accepted_label(&self) -> String {
        self.upload_extensions
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn section<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    container(content)
        .padding(20)
        .width(Length::Fill)
        .style(theme::card)
        .into()
}

async fn pick_document(extensions: Vec<String>) -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new().set_title("Choose a document");
    if !extensions.is_empty() {
        dialog = dialog.add_filter("Documents", extensions.as_slice());
    }
    dialog.pick_file().await.map(|handle| handle.path().to_path_buf())
}

/// Capture audio on a blocking thread
async fn record(window: Duration) -> Result<Vec<u8>, String> {
    tokio::task::spawn_blocking(move || audio::record_wav(window))
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| e.to_string())
}
