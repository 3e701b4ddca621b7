pub mod app_orchestrator;
pub mod search_session;
