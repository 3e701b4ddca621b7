use std::collections::HashMap;
use std::sync::Arc;

use iced::widget::{button, column, container, image, row, scrollable, text, text_input, Space};
use iced::{Alignment, Background, Element, Length, Task, Theme};

use super::search_session::SearchSession;
use crate::core::interfaces::adapters::{ImageSearchProvider, LinkOpener, PreviewLoader};
use crate::core::models::{ImageResult, ImageSearchError, SearchFailureKind, ThemeMode};
use crate::global_constants;
use crate::presentation::{app_theme, render_results_grid, ResultCardMessage};

#[derive(Debug, Clone)]
pub enum OrchestratorMessage {
    QueryChanged(String),
    SubmitSearch,
    SurpriseMe,
    SearchCompleted(Result<Vec<ImageResult>, ImageSearchError>),
    PreviewLoaded(String, Result<image::Handle, String>),
    ResultCard(ResultCardMessage),
    ToggleTheme,
}

pub struct AppOrchestrator {
    search_provider: Arc<dyn ImageSearchProvider>,
    preview_loader: Arc<dyn PreviewLoader>,
    link_opener: Arc<dyn LinkOpener>,
    session: SearchSession,
    previews: HashMap<String, image::Handle>,
    theme_mode: ThemeMode,
}

impl AppOrchestrator {
    pub fn build(
        search_provider: Arc<dyn ImageSearchProvider>,
        preview_loader: Arc<dyn PreviewLoader>,
        link_opener: Arc<dyn LinkOpener>,
        theme_mode: ThemeMode,
    ) -> Self {
        Self {
            search_provider,
            preview_loader,
            link_opener,
            session: SearchSession::new(),
            previews: HashMap::new(),
            theme_mode,
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn theme(&self) -> Theme {
        app_theme::get_theme(&self.theme_mode)
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        match &message {
            OrchestratorMessage::PreviewLoaded(..) => {
                log::debug!("[ORCHESTRATOR] Received message: {}", describe_message(&message))
            }
            _ => log::info!("[ORCHESTRATOR] Received message: {}", describe_message(&message)),
        }

        match message {
            OrchestratorMessage::QueryChanged(query_text) => {
                self.session.update_query_text(query_text);
                Task::none()
            }
            OrchestratorMessage::SubmitSearch => self.handle_submit_search(),
            OrchestratorMessage::SurpriseMe => self.handle_surprise_me(),
            OrchestratorMessage::SearchCompleted(outcome) => self.handle_search_completed(outcome),
            OrchestratorMessage::PreviewLoaded(url, outcome) => {
                self.handle_preview_loaded(url, outcome);
                Task::none()
            }
            OrchestratorMessage::ResultCard(card_message) => {
                self.handle_result_card_message(card_message);
                Task::none()
            }
            OrchestratorMessage::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                log::info!("[ORCHESTRATOR] Theme switched to {}", self.theme_mode);
                Task::none()
            }
        }
    }

    fn handle_submit_search(&mut self) -> Task<OrchestratorMessage> {
        let Some(query) = self.session.begin_search() else {
            return Task::none();
        };

        let provider = self.search_provider.clone();
        Task::future(async move {
            let outcome = provider.search_photos(&query).await;
            OrchestratorMessage::SearchCompleted(outcome)
        })
    }

    fn handle_surprise_me(&mut self) -> Task<OrchestratorMessage> {
        let Some(query) = self.session.begin_random() else {
            return Task::none();
        };

        let provider = self.search_provider.clone();
        Task::future(async move {
            let outcome = provider
                .random_photo(query.as_ref())
                .await
                .map(|photo| vec![photo]);
            OrchestratorMessage::SearchCompleted(outcome)
        })
    }

    fn handle_search_completed(
        &mut self,
        outcome: Result<Vec<ImageResult>, ImageSearchError>,
    ) -> Task<OrchestratorMessage> {
        let replaces_results = self.session.is_loading() && outcome.is_ok();
        self.session.complete(outcome);

        if !replaces_results {
            return Task::none();
        }

        self.previews.clear();
        self.load_previews()
    }

    fn load_previews(&self) -> Task<OrchestratorMessage> {
        let tasks = self.session.results().iter().map(|result| {
            let loader = self.preview_loader.clone();
            let url = result.url.clone();

            Task::future(async move {
                let outcome = loader
                    .load_preview(&url)
                    .await
                    .map(|bytes| image::Handle::from_bytes(bytes))
                    .map_err(|e| e.to_string());
                OrchestratorMessage::PreviewLoaded(url, outcome)
            })
        });

        Task::batch(tasks)
    }

    fn handle_preview_loaded(&mut self, url: String, outcome: Result<image::Handle, String>) {
        let belongs_to_current_results = self
            .session
            .results()
            .iter()
            .any(|result| result.url == url);

        if !belongs_to_current_results {
            log::debug!("[ORCHESTRATOR] Dropping preview for superseded result {}", url);
            return;
        }

        match outcome {
            Ok(handle) => {
                self.previews.insert(url, handle);
            }
            Err(e) => {
                log::warn!("[ORCHESTRATOR] Failed to load preview {}: {}", url, e);
            }
        }
    }

    fn handle_result_card_message(&self, message: ResultCardMessage) {
        let url = match message {
            ResultCardMessage::Download(url)
            | ResultCardMessage::Share(url)
            | ResultCardMessage::OpenPhotographerProfile(url) => url,
        };

        if let Err(e) = self.link_opener.open_link(&url) {
            log::error!("[ORCHESTRATOR] Failed to open link {}: {}", url, e);
        }
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        let theme_label = match self.theme_mode() {
            ThemeMode::Dark => "Light mode",
            ThemeMode::Light => "Dark mode",
        };

        let header = column![
            row![
                Space::new().width(Length::Fill),
                button(text(theme_label).size(13))
                    .padding([6, 12])
                    .style(app_theme::secondary_button_style)
                    .on_press(OrchestratorMessage::ToggleTheme),
            ],
            text(global_constants::APPLICATION_TITLE).size(36),
            text(global_constants::APPLICATION_TAGLINE)
                .size(15)
                .style(app_theme::muted_text_style),
        ]
        .spacing(6)
        .width(Length::Fill)
        .align_x(Alignment::Center);

        let content = column![
            header,
            Space::new().height(Length::Fixed(24.0)),
            self.render_search_form(),
            self.render_error(),
            Space::new().height(Length::Fixed(16.0)),
            render_results_grid(self.session.results(), &self.previews)
                .map(OrchestratorMessage::ResultCard),
        ]
        .spacing(8)
        .padding(32)
        .max_width(1100.0)
        .width(Length::Fill);

        let theme = self.theme();
        container(scrollable(
            container(content)
                .width(Length::Fill)
                .align_x(Alignment::Center),
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| {
            let palette = theme.palette();
            iced::widget::container::Style {
                background: Some(Background::Color(palette.background)),
                text_color: Some(palette.text),
                ..Default::default()
            }
        })
        .into()
    }

    fn render_search_form(&self) -> Element<'_, OrchestratorMessage> {
        let is_loading = self.session.is_loading();

        let mut prompt_input = text_input(
            global_constants::PROMPT_PLACEHOLDER,
            self.session.query_text(),
        )
        .id(iced::widget::Id::new(global_constants::PROMPT_INPUT_ID))
        .on_input(OrchestratorMessage::QueryChanged)
        .padding(10)
        .size(16);

        // Typing stays enabled while a request is in flight; only Enter is muted.
        if !is_loading {
            prompt_input = prompt_input.on_submit(OrchestratorMessage::SubmitSearch);
        }

        let generate_label = if is_loading {
            "Generating..."
        } else {
            "Generate"
        };

        let generate_button = button(text(generate_label).size(15))
            .padding([10, 20])
            .style(app_theme::primary_button_style)
            .on_press_maybe(
                self.session
                    .can_submit()
                    .then_some(OrchestratorMessage::SubmitSearch),
            );

        let surprise_button = button(text("Surprise me").size(15))
            .padding([10, 20])
            .style(app_theme::secondary_button_style)
            .on_press_maybe((!is_loading).then_some(OrchestratorMessage::SurpriseMe));

        column![
            text("Search for an image").size(14),
            row![prompt_input, generate_button, surprise_button]
                .spacing(8)
                .align_y(Alignment::Center),
        ]
        .spacing(8)
        .width(Length::Fill)
        .into()
    }

    fn render_error(&self) -> Element<'_, OrchestratorMessage> {
        let Some(message) = self.session.last_error() else {
            return Space::new().height(Length::Shrink).into();
        };

        let mut lines = column![text(message).size(14).style(app_theme::error_text_style)];

        if self.session.last_failure_kind() == Some(SearchFailureKind::NoResults) {
            lines = lines.push(
                text(global_constants::USER_MESSAGE_NO_RESULTS_HINT)
                    .size(13)
                    .style(app_theme::muted_text_style),
            );
        }

        lines.spacing(2).into()
    }
}

/// Log line for a message. Result payloads are summarized so a full page of
/// URLs and attribution never lands in the log.
fn describe_message(message: &OrchestratorMessage) -> String {
    match message {
        OrchestratorMessage::SearchCompleted(Ok(results)) => {
            format!("SearchCompleted(ok, {} results)", results.len())
        }
        OrchestratorMessage::SearchCompleted(Err(error)) => {
            format!("SearchCompleted(err, {})", error)
        }
        OrchestratorMessage::PreviewLoaded(url, outcome) => {
            format!("PreviewLoaded({}, ok={})", url, outcome.is_ok())
        }
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::core::models::SearchQuery;

    struct MockSearchProvider;

    #[async_trait]
    impl ImageSearchProvider for MockSearchProvider {
        async fn search_photos(
            &self,
            _query: &SearchQuery,
        ) -> Result<Vec<ImageResult>, ImageSearchError> {
            Ok(sample_results(3))
        }

        async fn random_photo(
            &self,
            _query: Option<&SearchQuery>,
        ) -> Result<ImageResult, ImageSearchError> {
            Ok(sample_results(1).remove(0))
        }
    }

    struct MockPreviewLoader;

    #[async_trait]
    impl PreviewLoader for MockPreviewLoader {
        async fn load_preview(&self, _image_url: &str) -> anyhow::Result<Vec<u8>> {
            Ok(vec![0u8; 4])
        }
    }

    #[derive(Default)]
    struct MockLinkOpener {
        opened: Mutex<Vec<String>>,
    }

    impl LinkOpener for MockLinkOpener {
        fn open_link(&self, url: &str) -> anyhow::Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn sample_results(count: usize) -> Vec<ImageResult> {
        (0..count)
            .map(|index| {
                ImageResult::new(
                    format!("https://images.example.com/{}.jpg", index),
                    format!("Photographer {}", index),
                    format!("https://unsplash.com/@p{}", index),
                    format!("https://unsplash.com/photos/{}", index),
                )
            })
            .collect()
    }

    fn create_test_orchestrator() -> (AppOrchestrator, Arc<MockLinkOpener>) {
        let link_opener = Arc::new(MockLinkOpener::default());
        let orchestrator = AppOrchestrator::build(
            Arc::new(MockSearchProvider),
            Arc::new(MockPreviewLoader),
            link_opener.clone(),
            ThemeMode::Light,
        );
        (orchestrator, link_opener)
    }

    fn orchestrator_with_results(count: usize) -> AppOrchestrator {
        let (mut orchestrator, _) = create_test_orchestrator();
        let _ = orchestrator.update(OrchestratorMessage::QueryChanged("mountains".to_string()));
        let _ = orchestrator.update(OrchestratorMessage::SubmitSearch);
        let _ = orchestrator.update(OrchestratorMessage::SearchCompleted(Ok(sample_results(
            count,
        ))));
        orchestrator
    }

    #[test]
    fn test_build_creates_orchestrator_with_idle_state() {
        let (orchestrator, _) = create_test_orchestrator();

        assert!(!orchestrator.session().is_loading());
        assert!(orchestrator.session().results().is_empty());
        assert!(orchestrator.previews.is_empty());
        assert_eq!(orchestrator.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_query_changed_updates_session_text() {
        let (mut orchestrator, _) = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::QueryChanged("forest".to_string()));

        assert_eq!(orchestrator.session().query_text(), "forest");
    }

    #[test]
    fn test_submit_with_empty_query_stays_idle() {
        let (mut orchestrator, _) = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::SubmitSearch);

        assert!(!orchestrator.session().is_loading());
    }

    #[test]
    fn test_submit_with_query_enters_loading() {
        let (mut orchestrator, _) = create_test_orchestrator();
        let _ = orchestrator.update(OrchestratorMessage::QueryChanged("mountains".to_string()));

        let _ = orchestrator.update(OrchestratorMessage::SubmitSearch);

        assert!(orchestrator.session().is_loading());
    }

    #[test]
    fn test_typing_while_loading_updates_query_without_resubmitting() {
        let (mut orchestrator, _) = create_test_orchestrator();
        let _ = orchestrator.update(OrchestratorMessage::QueryChanged("mountains".to_string()));
        let _ = orchestrator.update(OrchestratorMessage::SubmitSearch);

        let _ = orchestrator.update(OrchestratorMessage::QueryChanged(
            "mountain lakes".to_string(),
        ));
        let _ = orchestrator.update(OrchestratorMessage::SubmitSearch);

        assert!(orchestrator.session().is_loading());
        assert_eq!(orchestrator.session().query_text(), "mountain lakes");
        assert!(!orchestrator.session().can_submit());
        assert!(orchestrator.session().results().is_empty());

        let _ = orchestrator.update(OrchestratorMessage::SearchCompleted(Ok(sample_results(2))));

        assert!(!orchestrator.session().is_loading());
        assert!(orchestrator.session().can_submit());
        assert_eq!(orchestrator.session().results().len(), 2);
    }

    #[test]
    fn test_describe_message_summarizes_search_results() {
        let results = sample_results(20);

        let summary = describe_message(&OrchestratorMessage::SearchCompleted(Ok(results.clone())));

        assert_eq!(summary, "SearchCompleted(ok, 20 results)");
        assert!(results
            .iter()
            .all(|result| !summary.contains(&result.url)
                && !summary.contains(&result.attribution.photographer)));
    }

    #[test]
    fn test_describe_message_keeps_error_text_and_small_messages() {
        let failure = OrchestratorMessage::SearchCompleted(Err(ImageSearchError::Provider(
            "Rate Limit Exceeded".to_string(),
        )));

        assert!(describe_message(&failure).contains("Rate Limit Exceeded"));
        assert_eq!(
            describe_message(&OrchestratorMessage::QueryChanged("cats".to_string())),
            "QueryChanged(\"cats\")"
        );
    }

    #[test]
    fn test_search_completed_replaces_results() {
        let orchestrator = orchestrator_with_results(3);

        assert!(!orchestrator.session().is_loading());
        assert_eq!(orchestrator.session().results().len(), 3);
        assert!(orchestrator.session().last_error().is_none());
    }

    #[test]
    fn test_failed_search_keeps_results_and_sets_error() {
        let mut orchestrator = orchestrator_with_results(2);
        let _ = orchestrator.update(OrchestratorMessage::SubmitSearch);

        let _ = orchestrator.update(OrchestratorMessage::SearchCompleted(Err(
            ImageSearchError::NoResults,
        )));

        assert!(!orchestrator.session().is_loading());
        assert_eq!(orchestrator.session().results().len(), 2);
        assert_eq!(
            orchestrator.session().last_error(),
            Some(global_constants::USER_MESSAGE_GENERATION_FAILED)
        );
    }

    #[test]
    fn test_surprise_me_enters_loading_without_query() {
        let (mut orchestrator, _) = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::SurpriseMe);

        assert!(orchestrator.session().is_loading());
    }

    #[test]
    fn test_preview_for_current_result_is_stored() {
        let mut orchestrator = orchestrator_with_results(2);
        let url = "https://images.example.com/1.jpg".to_string();

        let _ = orchestrator.update(OrchestratorMessage::PreviewLoaded(
            url.clone(),
            Ok(image::Handle::from_bytes(vec![1u8, 2, 3])),
        ));

        assert!(orchestrator.previews.contains_key(&url));
    }

    #[test]
    fn test_preview_for_superseded_result_is_dropped() {
        let mut orchestrator = orchestrator_with_results(2);

        let _ = orchestrator.update(OrchestratorMessage::PreviewLoaded(
            "https://images.example.com/old.jpg".to_string(),
            Ok(image::Handle::from_bytes(vec![1u8, 2, 3])),
        ));

        assert!(orchestrator.previews.is_empty());
    }

    #[test]
    fn test_new_results_clear_previous_previews() {
        let mut orchestrator = orchestrator_with_results(2);
        let _ = orchestrator.update(OrchestratorMessage::PreviewLoaded(
            "https://images.example.com/0.jpg".to_string(),
            Ok(image::Handle::from_bytes(vec![1u8])),
        ));

        let _ = orchestrator.update(OrchestratorMessage::SubmitSearch);
        let _ = orchestrator.update(OrchestratorMessage::SearchCompleted(Ok(sample_results(1))));

        assert!(orchestrator.previews.is_empty());
    }

    #[test]
    fn test_failed_preview_is_not_stored() {
        let mut orchestrator = orchestrator_with_results(1);

        let _ = orchestrator.update(OrchestratorMessage::PreviewLoaded(
            "https://images.example.com/0.jpg".to_string(),
            Err("timeout".to_string()),
        ));

        assert!(orchestrator.previews.is_empty());
    }

    #[test]
    fn test_download_and_share_open_expected_links() {
        let (mut orchestrator, link_opener) = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::ResultCard(
            ResultCardMessage::Download("https://images.example.com/0.jpg".to_string()),
        ));
        let _ = orchestrator.update(OrchestratorMessage::ResultCard(ResultCardMessage::Share(
            "https://unsplash.com/photos/0".to_string(),
        )));
        let _ = orchestrator.update(OrchestratorMessage::ResultCard(
            ResultCardMessage::OpenPhotographerProfile("https://unsplash.com/@p0".to_string()),
        ));

        assert_eq!(
            *link_opener.opened.lock().unwrap(),
            vec![
                "https://images.example.com/0.jpg".to_string(),
                "https://unsplash.com/photos/0".to_string(),
                "https://unsplash.com/@p0".to_string(),
            ]
        );
    }

    #[test]
    fn test_toggle_theme_switches_mode() {
        let (mut orchestrator, _) = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::ToggleTheme);
        assert_eq!(orchestrator.theme_mode(), ThemeMode::Dark);

        let _ = orchestrator.update(OrchestratorMessage::ToggleTheme);
        assert_eq!(orchestrator.theme_mode(), ThemeMode::Light);
    }
}
