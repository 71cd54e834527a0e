use iced::widget::{column, container, scrollable, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use uuid::Uuid;

// Declare the application modules
mod processing;
mod service;
mod state;
mod ui;
mod upload;

use processing::script::{ProgressScript, TICK};
use state::project::{EncodedImage, ProcessingResult};
use state::wizard::{Session, Step};
use ui::form::{Field, FormState};
use upload::collector::ImageCollection;

/// Main application state: the wizard root
///
/// This is the only place cross-step state is mutated. The session record
/// and step pointer live in `session`; everything else is per-screen view
/// state that gets reset when the wizard moves on.
struct UpdateStudio {
    /// Step pointer and the accumulated project record
    session: Session,
    /// Welcome step: whether the detail form is shown instead of the intro
    show_form: bool,
    /// Detail form values and validation state
    form: FormState,
    /// Upload step: accepted images awaiting hand-off
    collection: ImageCollection,
    /// Upload step: an encode batch is in flight, inputs are locked
    encoding: bool,
    /// Upload step: blocking notice (empty continue attempt, encode failure)
    upload_notice: Option<String>,
    /// Upload step: files are hovering over the window
    drop_active: bool,
    /// Processing step: the scripted progress sequence
    script: ProgressScript,
    /// Processing step: the single outbound request has been issued
    request_in_flight: bool,
    /// Processing step: terminal failure message for this attempt
    processing_error: Option<String>,
    /// Download step: status line under the actions
    download_status: Option<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    // Welcome step
    /// User clicked "Get Started" on the intro
    ShowDetailForm,
    /// User went back from the form to the intro
    HideDetailForm,

    // Detail form
    /// User edited one form field
    FieldEdited(Field, String),
    /// User submitted the detail form
    SubmitDetails,

    // Upload step
    /// User clicked "Browse Files"
    PickImages,
    /// Files are hovering over the window
    FileHovered,
    /// Hovering files left the window
    FileHoverLeft,
    /// A file was dropped onto the window
    FileDropped(PathBuf),
    /// User removed one image from the collection
    RemoveImage(Uuid),
    /// User clicked continue on the upload screen
    ContinueToProcessing,
    /// Background encode batch finished
    EncodeFinished(Result<Vec<EncodedImage>, String>),

    // Processing step
    /// Progress timer tick
    ProgressTick,
    /// The outbound generation call finished
    GenerationFinished(Result<ProcessingResult, String>),
    /// User clicked "Try Again" after a failure
    RestartProcessing,

    // Download step
    /// User clicked the download button
    DownloadPresentation,
    /// Background download finished (None = save dialog dismissed)
    DownloadFinished(Result<Option<PathBuf>, String>),
    /// User clicked the share button
    ShareLink,
    /// User clicked "Create New Report"
    NewProject,
}

impl UpdateStudio {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        println!("🎬 Update Studio ready");

        (
            UpdateStudio {
                session: Session::new(),
                show_form: false,
                form: FormState::new(),
                collection: ImageCollection::new(),
                encoding: false,
                upload_notice: None,
                drop_active: false,
                script: ProgressScript::new(),
                request_in_flight: false,
                processing_error: None,
                download_status: None,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowDetailForm => {
                self.show_form = true;
                Task::none()
            }
            Message::HideDetailForm => {
                self.show_form = false;
                Task::none()
            }
            Message::FieldEdited(field, value) => {
                self.form.edit(field, value);
                Task::none()
            }
            Message::SubmitDetails => {
                if self.form.validate() {
                    let details = self.form.submitted_details();
                    println!("📝 Project details captured: {}", details.project_name);
                    if !self.session.submit_details(details) {
                        eprintln!("⚠️  Detail submission refused outside the welcome step");
                    }
                }
                Task::none()
            }
            Message::PickImages => {
                // Show the native file picker restricted to image types
                let files = FileDialog::new()
                    .set_title("Select Progress Photos")
                    .add_filter("Images", &["jpeg", "jpg", "png", "gif", "webp"])
                    .pick_files();

                if let Some(paths) = files {
                    self.accept_files(&paths);
                }
                Task::none()
            }
            Message::FileHovered => {
                if self.session.step() == Step::Upload {
                    self.drop_active = true;
                }
                Task::none()
            }
            Message::FileHoverLeft => {
                self.drop_active = false;
                Task::none()
            }
            Message::FileDropped(path) => {
                self.drop_active = false;
                if self.session.step() == Step::Upload && !self.encoding {
                    self.accept_files(&[path]);
                }
                Task::none()
            }
            Message::RemoveImage(id) => {
                if !self.encoding && self.collection.remove(id) {
                    println!("🗑️  Removed image ({} left)", self.collection.len());
                }
                Task::none()
            }
            Message::ContinueToProcessing => {
                if self.encoding {
                    return Task::none();
                }
                if self.collection.is_empty() {
                    self.upload_notice =
                        Some("Please upload at least one image to continue.".to_string());
                    return Task::none();
                }

                // Lock the screen and encode the whole batch in the background
                self.encoding = true;
                self.upload_notice = None;
                let batch = self.collection.handoff();

                Task::perform(upload::encode::encode_batch(batch), |result| {
                    Message::EncodeFinished(result.map_err(|error| error.to_string()))
                })
            }
            Message::EncodeFinished(Ok(images)) => {
                self.encoding = false;
                if self.session.images_ready(images) {
                    // The collector is done: release the preview handles and
                    // arm a fresh progress script for the processing stage
                    self.collection.clear();
                    self.drop_active = false;
                    self.script = ProgressScript::new();
                    self.request_in_flight = false;
                    self.processing_error = None;
                } else {
                    eprintln!("⚠️  Image hand-off refused outside the upload step");
                }
                Task::none()
            }
            Message::EncodeFinished(Err(error)) => {
                self.encoding = false;
                eprintln!("⚠️  Encoding failed: {error}");
                self.upload_notice =
                    Some("Error processing images. Please try again.".to_string());
                Task::none()
            }
            Message::ProgressTick => {
                if self.session.step() != Step::Processing || self.processing_error.is_some() {
                    return Task::none();
                }

                self.script.tick();

                // The script has landed on 100: issue the single outbound call
                if self.script.is_finished() && !self.request_in_flight {
                    self.request_in_flight = true;
                    if let Some(record) = self.session.record() {
                        let request = service::GenerateRequest::new(
                            &record.details,
                            record.images.as_deref().unwrap_or(&[]),
                        );
                        return Task::perform(service::generate(request), |result| {
                            Message::GenerationFinished(result.map_err(|error| error.to_string()))
                        });
                    }
                }
                Task::none()
            }
            Message::GenerationFinished(Ok(result)) => {
                println!("🎉 Presentation generated: {}", result.presentation_filename);
                if self.session.processing_complete(result) {
                    self.download_status = None;
                }
                Task::none()
            }
            Message::GenerationFinished(Err(error)) => {
                eprintln!("❌ Generation failed: {error}");
                self.processing_error = Some(error);
                Task::none()
            }
            Message::RestartProcessing => {
                // Full stage restart: fresh script, fresh single attempt
                println!("🔄 Restarting the processing stage");
                self.script = ProgressScript::new();
                self.request_in_flight = false;
                self.processing_error = None;
                Task::none()
            }
            Message::DownloadPresentation => {
                let Some(result) = self.session.record().and_then(|record| record.result.clone())
                else {
                    return Task::none();
                };

                if result.download_url.starts_with("http") {
                    self.download_status =
                        Some(format!("Downloading {}...", result.presentation_filename));
                    Task::perform(
                        save_presentation(result.download_url, result.presentation_filename),
                        |outcome| {
                            Message::DownloadFinished(outcome.map_err(|error| error.to_string()))
                        },
                    )
                } else if !result.download_url.is_empty() && result.download_url != "#" {
                    // A storage-location hint rather than a fetchable link
                    self.download_status = Some(result.download_url);
                    Task::none()
                } else {
                    self.download_status =
                        Some("Download URL not available. Please try again.".to_string());
                    Task::none()
                }
            }
            Message::DownloadFinished(Ok(Some(path))) => {
                println!("💾 Presentation saved to {}", path.display());
                self.download_status = Some(format!("Saved to {}", path.display()));
                Task::none()
            }
            Message::DownloadFinished(Ok(None)) => {
                // Save dialog dismissed, nothing to report
                self.download_status = None;
                Task::none()
            }
            Message::DownloadFinished(Err(error)) => {
                eprintln!("❌ Download failed: {error}");
                self.download_status = Some(format!("Download failed: {error}"));
                Task::none()
            }
            Message::ShareLink => {
                let Some(result) = self.session.record().and_then(|record| record.result.clone())
                else {
                    return Task::none();
                };

                if result.download_url.starts_with("http") {
                    self.download_status = Some("Link copied to clipboard!".to_string());
                    iced::clipboard::write(result.download_url)
                } else {
                    self.download_status = Some("No shareable link available.".to_string());
                    Task::none()
                }
            }
            Message::NewProject => {
                println!("🆕 Starting a new report");
                self.session.reset();
                self.show_form = false;
                self.form = FormState::new();
                self.collection.clear();
                self.encoding = false;
                self.upload_notice = None;
                self.drop_active = false;
                self.script = ProgressScript::new();
                self.request_in_flight = false;
                self.processing_error = None;
                self.download_status = None;
                Task::none()
            }
        }
    }

    /// Run dropped or picked paths through the acceptance rules
    fn accept_files(&mut self, paths: &[PathBuf]) {
        let mut accepted = 0;
        for path in paths {
            if self.collection.accept(path) {
                accepted += 1;
            }
        }
        if accepted > 0 {
            self.upload_notice = None;
            println!(
                "🖼️  Added {} images ({} in the collection)",
                accepted,
                self.collection.len()
            );
        }
    }

    /// Build the user interface for the current wizard step
    fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match (self.session.step(), self.session.record()) {
            (Step::Welcome, _) => {
                if self.show_form {
                    ui::form::view(&self.form)
                } else {
                    ui::welcome::view()
                }
            }
            (Step::Upload, Some(record)) => ui::upload::view(
                record,
                &self.collection,
                self.encoding,
                self.upload_notice.as_deref(),
                self.drop_active,
            ),
            (Step::Processing, Some(record)) => {
                ui::processing::view(record, &self.script, self.processing_error.as_deref())
            }
            (Step::Download, Some(record)) => {
                ui::download::view(record, self.download_status.as_deref())
            }
            // A step past welcome always has a record; fall back rather than panic
            _ => ui::welcome::view(),
        };

        let header = text("Update Studio").size(20);

        let content = column![header, body]
            .spacing(24)
            .padding(32)
            .max_width(820)
            .align_x(Alignment::Center);

        scrollable(
            container(content)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    /// Event sources for the current step: file drops while collecting
    /// images, the progress timer while the script is running
    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        if self.session.step() == Step::Upload {
            subscriptions.push(iced::event::listen_with(handle_window_event));
        }

        if self.session.step() == Step::Processing
            && self.processing_error.is_none()
            && !self.script.is_finished()
        {
            subscriptions.push(iced::time::every(TICK).map(|_| Message::ProgressTick));
        }

        Subscription::batch(subscriptions)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Translate window events into upload-step messages
fn handle_window_event(
    event: iced::Event,
    _status: iced::event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        iced::Event::Window(iced::window::Event::FileHovered(_)) => Some(Message::FileHovered),
        iced::Event::Window(iced::window::Event::FilesHoveredLeft) => Some(Message::FileHoverLeft),
        iced::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        _ => None,
    }
}

/// Ask where to save the deck, then fetch it to that path.
///
/// Returns `Ok(None)` when the user dismisses the save dialog.
async fn save_presentation(url: String, filename: String) -> Result<Option<PathBuf>, String> {
    let Some(handle) = rfd::AsyncFileDialog::new()
        .set_title("Save Presentation")
        .set_file_name(&filename)
        .save_file()
        .await
    else {
        return Ok(None);
    };
    let target = handle.path().to_path_buf();

    let response = reqwest::get(&url)
        .await
        .map_err(|error| format!("Request failed: {error}"))?;
    if !response.status().is_success() {
        return Err(format!("Server answered HTTP {}", response.status()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|error| format!("Transfer failed: {error}"))?;
    tokio::fs::write(&target, &bytes)
        .await
        .map_err(|error| format!("Could not write file: {error}"))?;

    Ok(Some(target))
}

fn main() -> iced::Result {
    iced::application("Update Studio", UpdateStudio::update, UpdateStudio::view)
        .subscription(UpdateStudio::subscription)
        .theme(UpdateStudio::theme)
        .window_size(iced::Size::new(900.0, 720.0))
        .centered()
        .run_with(UpdateStudio::new)
}
