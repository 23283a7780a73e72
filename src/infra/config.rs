/// Public endpoint serving `{"image": "<url>", ...}` payloads.
pub const FLOOF_ENDPOINT: &str = "https://randomfox.ca/floof/";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: FLOOF_ENDPOINT.to_string(),
            window_width: 520.0,
            window_height: 640.0,
        }
    }
}
