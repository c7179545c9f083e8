use std::path::PathBuf;
use std::time::Duration;

use iced::widget::{column, scrollable, stack};
use iced::{window, Element, Event, Length, Subscription, Task, Theme};

mod config;
mod ingest;
mod notify;
mod state;
mod ui;

use config::Settings;
use ingest::loader;
use ingest::thumbnail::{self, Thumbnail, ThumbnailStrip};
use notify::Notifier;
use state::report::{self, Category, Detection, DetectionDetail, Observation};
use state::selection::{IngestSource, Selection};
use state::staged::StagedFile;
use ui::toast::Toast;

/// How long a toast stays up before its timer dismisses it
const TOAST_TTL: Duration = Duration::from_secs(4);

/// The four product screens, one nav item each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Landing,
    Upload,
    Results,
    Gallery,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Landing,
        Screen::Upload,
        Screen::Results,
        Screen::Gallery,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Landing => "Home",
            Screen::Upload => "Analyze",
            Screen::Results => "Results",
            Screen::Gallery => "Gallery",
        }
    }
}

/// Main application state
struct AstroVision {
    screen: Screen,
    /// Staged files + drag indicator for the upload screen
    selection: Selection,
    /// Pending status messages, drained into toasts each cycle
    notifier: Notifier,
    /// Preview slots kept in lockstep with the selection
    thumbnails: ThumbnailStrip,
    toasts: Vec<Toast>,
    next_toast_id: u64,
    /// Mock classification data backing the results screen
    detections: Vec<Detection>,
    details: Vec<DetectionDetail>,
    /// Mock archive backing the gallery screen
    categories: Vec<Category>,
    observations: Vec<Observation>,
    settings: Settings,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked a nav item
    Navigate(Screen),
    /// A drag entered the window
    DragEntered,
    /// The drag left without dropping
    DragLeft,
    /// A file (or folder) was dropped on the window
    FileDropped(PathBuf),
    /// User clicked the "Select images" button
    PickFiles,
    /// The picker dialog closed
    FilesPicked(Vec<PathBuf>),
    /// Background loader finished turning paths into candidates
    CandidatesLoaded {
        source: IngestSource,
        candidates: Vec<StagedFile>,
    },
    /// User removed one staged file
    RemoveFile(usize),
    /// User cleared the whole selection
    ClearFiles,
    /// User asked to analyze the staged files
    Analyze,
    /// Background thumbnail decode completed
    ThumbnailReady {
        id: u64,
        thumbnail: Option<Thumbnail>,
    },
    DismissToast(u64),
    ToastExpired(u64),
}

impl AstroVision {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        tracing::info!("AstroVision client initialized");

        (
            AstroVision {
                screen: Screen::default(),
                selection: Selection::default(),
                notifier: Notifier::default(),
                thumbnails: ThumbnailStrip::default(),
                toasts: Vec::new(),
                next_toast_id: 0,
                detections: report::detection_summary(),
                details: report::detection_details(),
                categories: report::gallery_categories(),
                observations: report::gallery_observations(),
                settings,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(screen) => {
                // Leaving the upload screen always ends any drag gesture
                self.selection.set_drag_active(false);
                self.screen = screen;
                Task::none()
            }

            Message::DragEntered => {
                if self.screen == Screen::Upload {
                    self.selection.set_drag_active(true);
                }
                Task::none()
            }

            Message::DragLeft => {
                self.selection.set_drag_active(false);
                Task::none()
            }

            Message::FileDropped(path) => {
                self.selection.set_drag_active(false);

                // The drop target only exists on the upload screen
                if self.screen != Screen::Upload {
                    return Task::none();
                }

                Task::perform(loader::load_paths(vec![path]), |candidates| {
                    Message::CandidatesLoaded {
                        source: IngestSource::Drop,
                        candidates,
                    }
                })
            }

            Message::PickFiles => {
                let start_dir = self.settings.last_pick_dir.clone();
                Task::perform(pick_images(start_dir), Message::FilesPicked)
            }

            Message::FilesPicked(paths) => {
                if paths.is_empty() {
                    return Task::none();
                }

                self.settings.remember_pick_dir(&paths[0]);
                if let Err(e) = self.settings.save() {
                    tracing::warn!("failed to save settings: {e}");
                }

                Task::perform(loader::load_paths(paths), |candidates| {
                    Message::CandidatesLoaded {
                        source: IngestSource::Picker,
                        candidates,
                    }
                })
            }

            Message::CandidatesLoaded { source, candidates } => {
                let appended = self.selection.ingest(candidates, source, &mut self.notifier);

                // One preview slot and one decode task per accepted file
                let mut tasks = Vec::new();
                let files = self.selection.files();
                for file in &files[files.len() - appended..] {
                    let id = self.thumbnails.stage();
                    tasks.push(Task::perform(
                        thumbnail::render(id, file.bytes()),
                        |(id, thumbnail)| Message::ThumbnailReady { id, thumbnail },
                    ));
                }

                debug_assert_eq!(self.selection.len(), self.thumbnails.len());

                tasks.push(self.drain_notifications());
                Task::batch(tasks)
            }

            Message::RemoveFile(index) => {
                match self.selection.remove(index) {
                    Ok(removed) => {
                        // Release the preview together with the file
                        self.thumbnails.remove(index);
                        tracing::debug!(name = %removed.name, "removed staged image");
                    }
                    Err(e) => tracing::warn!("ignoring stale removal: {e}"),
                }
                debug_assert_eq!(self.selection.len(), self.thumbnails.len());
                Task::none()
            }

            Message::ClearFiles => {
                self.selection.clear();
                self.thumbnails.clear();
                Task::none()
            }

            Message::Analyze => {
                if self.selection.analyze(&mut self.notifier).is_ok() {
                    tracing::info!(staged = self.selection.len(), "analysis requested");
                }
                self.drain_notifications()
            }

            Message::ThumbnailReady { id, thumbnail } => {
                self.thumbnails.resolve(id, thumbnail);
                Task::none()
            }

            Message::DismissToast(id) | Message::ToastExpired(id) => {
                self.toasts.retain(|toast| toast.id != id);
                Task::none()
            }
        }
    }

    /// Move queued notifications onto the screen and start their timers.
    fn drain_notifications(&mut self) -> Task<Message> {
        let mut timers = Vec::new();

        for notification in self.notifier.drain() {
            let id = self.next_toast_id;
            self.next_toast_id += 1;

            self.toasts.push(Toast { id, notification });
            timers.push(Task::perform(tokio::time::sleep(TOAST_TTL), move |_| {
                Message::ToastExpired(id)
            }));
        }

        Task::batch(timers)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let body = match self.screen {
            Screen::Landing => ui::landing::view(),
            Screen::Upload => ui::upload::view(&self.selection, &self.thumbnails),
            Screen::Results => ui::results::view(&self.detections, &self.details),
            Screen::Gallery => ui::gallery::view(&self.categories, &self.observations),
        };

        let page = column![
            ui::header::view(self.screen),
            scrollable(body).height(Length::Fill),
        ];

        if self.toasts.is_empty() {
            page.into()
        } else {
            stack![page, ui::toast::overlay(&self.toasts)].into()
        }
    }

    /// Listen for window-level drag and drop
    fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::DragEntered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::DragLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        ui::style::theme()
    }
}

fn main() -> iced::Result {
    init_tracing();

    iced::application("AstroVision", AstroVision::update, AstroVision::view)
        .subscription(AstroVision::subscription)
        .theme(AstroVision::theme)
        .window_size(iced::Size::new(1180.0, 780.0))
        .centered()
        .run_with(AstroVision::new)
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,astro_vision=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Show the native multi-file picker, filtered to the formats we stage.
async fn pick_images(start_dir: Option<PathBuf>) -> Vec<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title("Select astronomical images")
        .add_filter(
            "Images",
            &[
                "jpg", "jpeg", "png", "gif", "bmp", "tif", "tiff", "webp", "fits", "fit",
            ],
        );

    if let Some(dir) = start_dir {
        dialog = dialog.set_directory(dir);
    }

    dialog
        .pick_files()
        .await
        .map(|files| files.iter().map(|file| file.path().to_path_buf()).collect())
        .unwrap_or_default()
}
