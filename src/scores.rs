//! Final score submission
//!
//! Fire-and-forget: the match outcome is final and on screen before anything
//! is sent, and `ScoreSink::submit` returns nothing, so a failed or slow
//! request has no path back into match state.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// JSON body posted to the score endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub game_id: String,
    pub score: u32,
}

impl ScoreSubmission {
    pub fn new(game_id: impl Into<String>, score: u32) -> Self {
        Self {
            game_id: game_id.into(),
            score,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Somewhere final scores go
pub trait ScoreSink {
    /// Hand off a submission. Must not block and must not fail observably.
    fn submit(&mut self, submission: ScoreSubmission);
}

/// Logs submissions instead of sending them (native runs, submission disabled)
#[derive(Debug, Clone, Copy, Default)]
pub struct LogScoreSink;

impl ScoreSink for LogScoreSink {
    fn submit(&mut self, submission: ScoreSubmission) {
        match submission.to_json() {
            Ok(json) => log::info!("Score not sent: {}", json),
            Err(e) => log::warn!("Score not serializable: {}", e),
        }
    }
}

/// Keeps submissions in memory. Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct RecordingScoreSink {
    submitted: Rc<RefCell<Vec<ScoreSubmission>>>,
}

impl RecordingScoreSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> Vec<ScoreSubmission> {
        self.submitted.borrow().clone()
    }
}

impl ScoreSink for RecordingScoreSink {
    fn submit(&mut self, submission: ScoreSubmission) {
        self.submitted.borrow_mut().push(submission);
    }
}

#[cfg(target_arch = "wasm32")]
pub use fetch::FetchScoreSink;

#[cfg(target_arch = "wasm32")]
mod fetch {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    use super::{ScoreSink, ScoreSubmission};

    /// POSTs submissions with `fetch` on a detached future
    pub struct FetchScoreSink {
        endpoint: String,
    }

    impl FetchScoreSink {
        pub fn new(endpoint: impl Into<String>) -> Self {
            Self {
                endpoint: endpoint.into(),
            }
        }
    }

    impl ScoreSink for FetchScoreSink {
        fn submit(&mut self, submission: ScoreSubmission) {
            let body = match submission.to_json() {
                Ok(body) => body,
                Err(e) => {
                    log::warn!("Score not serializable: {}", e);
                    return;
                }
            };
            let endpoint = self.endpoint.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match post_json(&endpoint, &body).await {
                    Ok(status) => log::debug!("Score submitted ({})", status),
                    Err(e) => log::warn!("Score submission failed: {:?}", e),
                }
            });
        }
    }

    async fn post_json(url: &str, body: &str) -> Result<u16, JsValue> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&JsValue::from_str(body));

        let request = Request::new_with_str_and_init(url, &opts)?;
        request.headers().set("Content-Type", "application/json")?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await?
            .dyn_into()?;
        Ok(response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_body() {
        let body = ScoreSubmission::new("neon-pong", 3).to_json().unwrap();
        assert_eq!(body, r#"{"game_id":"neon-pong","score":3}"#);
    }

    #[test]
    fn test_recording_sink_shares_list() {
        let recorder = RecordingScoreSink::new();
        let mut sink: Box<dyn ScoreSink> = Box::new(recorder.clone());
        sink.submit(ScoreSubmission::new("neon-pong", 5));
        assert_eq!(recorder.submissions(), vec![ScoreSubmission::new("neon-pong", 5)]);
    }
}
