use std::sync::Arc;

use iced::widget::{operation, Id};
use iced::{Element, Task, Theme};

use crate::adapters::{
    HttpPreviewLoader, SystemBrowserLinkOpener, UnsplashConfig, UnsplashImageSearchProvider,
};
use crate::core::models::UserSettings;
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::global_constants;

pub struct ImageGeneratorApp {
    orchestrator: AppOrchestrator,
}

impl ImageGeneratorApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", e);
            UserSettings::default()
        });

        let environment_key = std::env::var(global_constants::UNSPLASH_ACCESS_KEY_ENV_VAR).ok();
        let access_key = settings
            .resolve_access_key(environment_key)
            .unwrap_or_else(|| {
                log::error!(
                    "[APP] No Unsplash access key configured, set {} or add access_key to the settings file",
                    global_constants::UNSPLASH_ACCESS_KEY_ENV_VAR
                );
                String::new()
            });

        let search_provider = Arc::new(UnsplashImageSearchProvider::new(UnsplashConfig::new(
            access_key,
            settings.api_base_url.clone(),
        )));

        let orchestrator = AppOrchestrator::build(
            search_provider,
            Arc::new(HttpPreviewLoader::new()),
            Arc::new(SystemBrowserLinkOpener),
            settings.theme_mode,
        );

        let focus_prompt = operation::focus(Id::new(global_constants::PROMPT_INPUT_ID));

        (Self { orchestrator }, focus_prompt)
    }

    pub fn title(&self) -> String {
        global_constants::APPLICATION_TITLE.to_string()
    }

    pub fn theme(&self) -> Theme {
        self.orchestrator.theme()
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view()
    }
}
