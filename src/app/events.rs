use crate::api::error::FetchError;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Refresh,
    FloofArrived(String),
    FetchFailed(FetchError),
}
