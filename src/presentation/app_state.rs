// Application state for HTTP handlers
use crate::application::console_actor::ConsoleHandle;

#[derive(Clone)]
pub struct AppState {
    pub console: ConsoleHandle,
    pub site_url: String,
    pub require_login: bool,
    pub login_url: String,
}
