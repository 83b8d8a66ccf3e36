use iced::widget::image::Handle;
use iced::widget::{
    button, canvas, column, container, horizontal_rule, image, row, scrollable, text, text_editor,
    text_input, Column,
};
use iced::{Alignment, Element, Length, Size, Subscription, Task, Theme};
use std::time::Duration;
use tracing::{info, warn};

mod config;
mod kv;
mod logging;
mod state;
mod ui;

use config::Config;
use kv::LogicalName;
use state::data::{display_width, CandidateImage, DisplayWidth, EditResult};
use state::library::AssetLibrary;
use state::workflow::{resolve_edit, AnalysisError, EditRequest, Phase, Session, WorkflowError};
use ui::gallery::{self, Gallery};
use ui::spinner::Spinner;

// The text editor has no IME; the keyword line lets users paste instead of type
const PROMPT_PLACEHOLDER: &str = "프롬프트 (예: 배경 톤을 약간 따뜻하게, 텍스트는 산세리프로, 제품 반사광 강조)\n\
     키워드: 축구 / 인스타 / LG (한글 입력이 안 되면 붙여넣기)";

/// Candidates loaded by an analysis run, with their previews
#[derive(Debug, Clone)]
struct Analysis {
    candidates: [CandidateImage; 3],
    gallery: Gallery,
}

/// Result of an edit run, with its preview
#[derive(Debug, Clone)]
struct RenderedEdit {
    result: EditResult,
    preview: Handle,
}

/// Main application state
struct KvEditor {
    config: Config,
    /// The key visual folder
    library: AssetLibrary,
    session: Session,
    url: String,
    prompt: text_editor::Content,
    /// Thumbnails and full views for the current candidates
    gallery: Gallery,
    result_preview: Option<Handle>,
    spinner: Spinner,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    UrlChanged(String),
    /// User clicked "Analyze"
    Analyze,
    /// Simulated analysis finished and candidates were loaded (or not)
    AnalysisComplete(Result<Analysis, AnalysisError>),
    Zoom(LogicalName),
    CloseZoom,
    Pick(LogicalName),
    PromptEdited(text_editor::Action),
    /// User clicked "Edit"
    Edit,
    EditComplete(RenderedEdit),
    /// Busy indicator animation frame
    Tick,
}

impl KvEditor {
    /// Create a new instance of the application
    fn new(config: Config) -> (Self, Task<Message>) {
        let library = AssetLibrary::new(config.image_dir.clone(), config.max_decode_px);

        info!("🎨 Key Visual Editor initialized, image folder: {}", library.directory().display());
        if !library.directory().is_dir() {
            warn!("⚠️  Image folder does not exist yet: {}", library.directory().display());
        }

        let url = config.default_url.clone();
        (
            KvEditor {
                config,
                library,
                session: Session::new(),
                url,
                prompt: text_editor::Content::new(),
                gallery: Gallery::default(),
                result_preview: None,
                spinner: Spinner::default(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::UrlChanged(url) => {
                self.url = url;
                Task::none()
            }
            Message::Analyze => {
                if let Err(err) = self.session.begin_analysis(&self.url) {
                    return rejected("analyze", err);
                }

                self.gallery = Gallery::default();
                self.result_preview = None;

                Task::perform(
                    analyze_async(self.library.clone(), self.config.latency, self.config.thumbnail_box),
                    Message::AnalysisComplete,
                )
            }
            Message::AnalysisComplete(outcome) => {
                let outcome = match outcome {
                    Ok(analysis) => {
                        self.gallery = analysis.gallery;
                        Ok(analysis.candidates)
                    }
                    Err(err) => Err(err),
                };

                if let Err(err) = self.session.complete_analysis(outcome) {
                    return rejected("analysis result", err);
                }
                info!(
                    "📦 Analysis of {} finished: {:?}",
                    self.session.source_url().unwrap_or("-"),
                    self.session.phase()
                );
                Task::none()
            }
            Message::Zoom(name) => {
                if let Err(err) = self.session.zoom(name) {
                    return rejected("zoom", err);
                }
                Task::none()
            }
            Message::CloseZoom => {
                if let Err(err) = self.session.close_zoom() {
                    return rejected("close zoom", err);
                }
                Task::none()
            }
            Message::Pick(name) => {
                if let Err(err) = self.session.pick(name) {
                    return rejected("pick", err);
                }
                self.result_preview = None;
                Task::none()
            }
            Message::PromptEdited(action) => {
                if !self.session.phase().is_busy() {
                    self.prompt.perform(action);
                }
                Task::none()
            }
            Message::Edit => match self.session.begin_edit(&self.prompt.text()) {
                Ok(request) => Task::perform(
                    edit_async(self.library.clone(), self.config.latency, request),
                    Message::EditComplete,
                ),
                Err(err) => rejected("edit", err),
            },
            Message::EditComplete(rendered) => {
                if let Err(err) = self.session.complete_edit(rendered.result) {
                    return rejected("edit result", err);
                }
                self.result_preview = Some(rendered.preview);
                Task::none()
            }
            Message::Tick => {
                self.spinner = self.spinner.advanced();
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let phase = self.session.phase();
        let busy = phase.is_busy();

        let url_input = text_input("https://...", &self.url).padding(10);
        let url_input = if busy {
            url_input
        } else {
            url_input
                .on_input(Message::UrlChanged)
                .on_submit(Message::Analyze)
        };

        let mut content: Column<Message> = column![
            text("📸 Key Visual Editor").size(40),
            text("제품 상세 페이지(PDP) URL").size(14),
            url_input,
            button(text("PDP 분석 및 핵심 KV 추출"))
                .padding(10)
                .style(button::primary)
                .on_press_maybe((!busy).then_some(Message::Analyze)),
        ]
        .spacing(20)
        .padding(40)
        .max_width(1100.0);

        match phase {
            Phase::Analyzing => content = content.push(self.busy_row("AI가 제품 PDP를 분석하고 있어요.")),
            Phase::Failed(err) => content = content.push(text(err.to_string()).style(text::danger)),
            _ => {}
        }

        if !self.session.candidates().is_empty() {
            content = content
                .push(horizontal_rule(1))
                .push(ui::product::summary_panel())
                .push(ui::grid::candidate_grid(
                    self.session.candidates(),
                    &self.gallery,
                    self.session.selection().map(|s| s.name),
                    !busy,
                ));
        }

        if let Some(zoom) = self.session.zoom_target() {
            content = content.push(horizontal_rule(1)).push(text(format!("{} 크게 보기", zoom.name)).size(26));
            if let Some(preview) = self.gallery.get(zoom.name) {
                content = content.push(self.large_view(preview.full.clone(), zoom.name));
            }
            content = content.push(
                button(text("닫기"))
                    .width(Length::Fill)
                    .style(button::secondary)
                    .on_press_maybe((!busy).then_some(Message::CloseZoom)),
            );
        }

        if let Some(selection) = self.session.selection() {
            let editor = text_editor(&self.prompt)
                .placeholder(PROMPT_PLACEHOLDER)
                .height(Length::Fixed(90.0));
            let editor = if busy {
                editor
            } else {
                editor.on_action(Message::PromptEdited)
            };

            content = content
                .push(horizontal_rule(1))
                .push(
                    container(text(format!("현재 선택된 이미지: {}", selection.name)))
                        .padding(12)
                        .width(Length::Fill)
                        .style(container::rounded_box),
                )
                .push(text("선택한 KV 편집").size(26))
                .push(editor)
                .push(
                    button(text("편집하기"))
                        .padding(10)
                        .style(button::primary)
                        .on_press_maybe((!busy).then_some(Message::Edit)),
                );

            if *phase == Phase::Editing {
                content = content.push(self.busy_row("편집 중…"));
            }
        }

        if let (Some(result), Some(preview)) = (self.session.edit_result(), &self.result_preview) {
            content = content
                .push(horizontal_rule(1))
                .push(text("편집 결과").size(26))
                .push(self.large_view(preview.clone(), result.name));
        }

        scrollable(container(content).center_x(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Full-resolution image under the tall-visual display rule
    fn large_view(&self, handle: Handle, name: LogicalName) -> Element<Message> {
        let width = match display_width(name, self.config.tall_display_width) {
            DisplayWidth::Fill => Length::Fill,
            DisplayWidth::Capped(px) => Length::Fixed(px as f32),
        };

        container(image(handle).width(width))
            .center_x(Length::Fill)
            .into()
    }

    fn busy_row<'a>(&self, caption: &'a str) -> Element<'a, Message> {
        row![
            canvas(self.spinner)
                .width(Length::Fixed(28.0))
                .height(Length::Fixed(28.0)),
            text(caption).size(16),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
    }

    /// Animate the busy indicator only while something is running
    fn subscription(&self) -> Subscription<Message> {
        if self.session.phase().is_busy() {
            iced::time::every(Duration::from_millis(60)).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    // A missing .env is the normal case
    let _ = dotenvy::dotenv();
    logging::init_logging();

    let config = Config::from_env();
    info!("⚙️  {:?}", config);

    iced::application("Key Visual Editor", KvEditor::update, KvEditor::view)
        .theme(KvEditor::theme)
        .subscription(KvEditor::subscription)
        .window_size(Size::new(1100.0, 960.0))
        .centered()
        .run_with(move || KvEditor::new(config))
}

/// Log an action the session refused; the UI normally prevents these
fn rejected(action: &str, err: WorkflowError) -> Task<Message> {
    warn!("🚫 Ignored {}: {}", action, err);
    Task::none()
}

/// Simulated PDP analysis: wait, then load the three candidates
/// Decoding and thumbnail fitting run on the blocking pool
async fn analyze_async(
    library: AssetLibrary,
    latency: Duration,
    thumbnail_box: (u32, u32),
) -> Result<Analysis, AnalysisError> {
    tokio::time::sleep(latency).await;

    tokio::task::spawn_blocking(move || -> Result<Analysis, AnalysisError> {
        let candidates = library.load_candidates()?;
        let gallery = Gallery::build(&candidates, thumbnail_box);
        Ok(Analysis { candidates, gallery })
    })
    .await
    .map_err(|e| AnalysisError::Interrupted(format!("task join error: {}", e)))?
}

/// Simulated edit: wait, then apply the keyword rules
/// Never fails; a crashed job keeps the selection as the result
async fn edit_async(library: AssetLibrary, latency: Duration, request: EditRequest) -> RenderedEdit {
    tokio::time::sleep(latency).await;

    let fallback = EditResult::from(&request.selection);

    let job = tokio::task::spawn_blocking(move || {
        let result = resolve_edit(&library, &request);
        let preview = gallery::to_handle(&result.pixels);
        RenderedEdit { result, preview }
    })
    .await;

    job.unwrap_or_else(|e| {
        warn!("⚠️  Edit task failed, keeping the selection: {}", e);
        let preview = gallery::to_handle(&fallback.pixels);
        RenderedEdit {
            result: fallback,
            preview,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::edit::EDIT_RULES;

    #[test]
    fn test_placeholder_lists_every_edit_keyword() {
        for rule in EDIT_RULES {
            assert!(PROMPT_PLACEHOLDER.contains(rule.keyword), "missing {}", rule.keyword);
        }
    }
}
