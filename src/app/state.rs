/// URI of the embedded placeholder shown before the first successful fetch.
pub const DEFAULT_IMAGE_REF: &str = "bundled://default-floof";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedState {
    pub image_ref: String,
    pub is_loading: bool,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            image_ref: DEFAULT_IMAGE_REF.to_string(),
            is_loading: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_shows_bundled_placeholder_and_is_loading() {
        let state = FeedState::default();
        assert_eq!(state.image_ref, DEFAULT_IMAGE_REF);
        assert!(state.is_loading);
    }
}
