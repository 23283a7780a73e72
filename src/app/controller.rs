use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::api::client::FloofClient;
use crate::app::events::AppEvent;
use crate::app::state::FeedState;
use crate::infra::config::AppConfig;
use crate::net;

/// Owns the feed state and runs fetches on worker threads. Outcomes come
/// back over an mpsc channel and are applied in arrival order, so when
/// requests overlap the last resolution wins.
pub struct FeedController {
    client: FloofClient,
    state: FeedState,
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl FeedController {
    pub fn new(config: &AppConfig) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            client: FloofClient::new(&config.endpoint),
            state: FeedState::default(),
            sender,
            receiver,
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Apply every outcome posted since the previous frame.
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.receiver.try_recv() {
            self.dispatch(event);
        }
    }

    pub fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::Refresh => self.begin_fetch(),
            AppEvent::FloofArrived(image) => {
                self.state.image_ref = image;
                self.state.is_loading = false;
            }
            AppEvent::FetchFailed(error) => {
                // Stale image stays up and the loading flag is left alone;
                // the failure is visible on the diagnostic channel only.
                log::error!("floof fetch failed: {error}");
            }
        }
    }

    /// One network call per invocation. The worker is detached: nothing
    /// cancels it, and if the controller is gone by the time it resolves
    /// the send simply fails.
    fn begin_fetch(&mut self) {
        self.state.is_loading = true;

        let client = self.client.clone();
        let sender = self.sender.clone();
        thread::spawn(move || {
            let outcome = net::get(client.endpoint())
                .and_then(|response| client.parse_floof(response));
            let event = match outcome {
                Ok(payload) => AppEvent::FloofArrived(payload.image),
                Err(error) => AppEvent::FetchFailed(error),
            };
            let _ = sender.send(event);
        });
    }
}
