//! JavaScript bindings.
//!
//! The page scripts own the DOM; they call into `WebHub` for every action and
//! render the JSON snapshots it hands back. Notices queued by an action are
//! fetched with `drain_notices`.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Local;
use js_sys::Promise;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::chat::{ChatTransport, FetchTransport, quick_prompt};
use crate::config::HubConfig;
use crate::error::ChatError;
use crate::hub::AstralsHub;
use crate::leaderboard::Period;
use crate::profile::RegistrationForm;
use crate::storage::BrowserStore;

type BrowserHub = AstralsHub<BrowserStore, FetchTransport>;

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub struct WebHub {
    inner: Rc<RefCell<BrowserHub>>,
}

#[wasm_bindgen]
impl WebHub {
    /// Load persisted state. `config` is an optional partial `HubConfig` as JSON.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<WebHub, JsValue> {
        let config = match config.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            Some(json) => HubConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => HubConfig::default(),
        };
        let transport = FetchTransport::new(config.chat_endpoint.clone());
        let hub = AstralsHub::load(config, BrowserStore::open(), transport);
        Ok(WebHub { inner: Rc::new(RefCell::new(hub)) })
    }

    pub fn profile(&self) -> Result<String, JsValue> {
        to_json(self.inner.borrow().profile())
    }

    pub fn is_registered(&self) -> bool {
        self.inner.borrow().is_registered()
    }

    /// `false` when the form is incomplete; the reason is queued as a notice.
    pub fn register(&self, form: &str) -> Result<bool, JsValue> {
        let form: RegistrationForm =
            serde_json::from_str(form).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.inner.borrow_mut().register(&form).is_ok())
    }

    /// Daily login check; returns the `DailyCheck` JSON or `null`.
    pub fn daily_check_in(&self) -> Result<String, JsValue> {
        to_json(&self.inner.borrow_mut().daily_check_in())
    }

    pub fn award_xp(&self, amount: u32, reason: &str) {
        self.inner.borrow_mut().award_xp(amount, reason);
    }

    pub fn select_subject(&self, subject: &str) {
        self.inner.borrow_mut().select_subject(subject);
    }

    pub fn start_quiz(&self, subject: &str) -> Result<String, JsValue> {
        let mut hub = self.inner.borrow_mut();
        hub.start_quiz(subject);
        to_json(&hub.quiz_view())
    }

    pub fn select_answer(&self, index: usize) -> bool {
        self.inner.borrow_mut().select_answer(index).is_ok()
    }

    /// Grade the selection. Returns the step report JSON, or `null` when rejected.
    pub fn submit_answer(&self) -> Result<String, JsValue> {
        to_json(&self.inner.borrow_mut().submit_answer().ok())
    }

    pub fn skip_question(&self) -> Result<String, JsValue> {
        to_json(&self.inner.borrow_mut().skip_question().ok())
    }

    pub fn dismiss_quiz(&self) {
        self.inner.borrow_mut().dismiss_quiz();
    }

    pub fn quiz_view(&self) -> Result<String, JsValue> {
        to_json(&self.inner.borrow().quiz_view())
    }

    /// Resolves to the assistant message JSON, or `null` for blank input.
    pub fn send_message(&self, text: String) -> Promise {
        let hub = self.inner.clone();
        future_to_promise(async move {
            // The borrow must not be held across the await.
            let (request, transport, enabled) = {
                let mut h = hub.borrow_mut();
                let Some(request) = h.begin_chat(&text) else {
                    return Ok(JsValue::NULL);
                };
                (request, h.transport().clone(), h.config().chat_enabled())
            };
            let outcome = if enabled {
                transport.post_chat(&request).await
            } else {
                Err(ChatError::Transport("chat endpoint disabled".into()))
            };
            let message = hub.borrow_mut().finish_chat(&request, outcome);
            to_json(&message).map(JsValue::from)
        })
    }

    pub fn send_quick_prompt(&self, kind: &str) -> Promise {
        self.send_message(quick_prompt(kind))
    }

    pub fn chat_history(&self) -> Result<String, JsValue> {
        to_json(self.inner.borrow().chat_history())
    }

    pub fn clear_chat(&self) {
        self.inner.borrow_mut().clear_chat();
    }

    pub fn session_id(&self) -> String {
        self.inner.borrow().session_id().to_string()
    }

    pub fn mastery(&self, subject: &str) -> u32 {
        self.inner.borrow().mastery(subject)
    }

    pub fn mastery_overview(&self) -> Result<String, JsValue> {
        to_json(&self.inner.borrow().mastery_overview())
    }

    pub fn achievements(&self) -> Result<String, JsValue> {
        to_json(&self.inner.borrow().achievements())
    }

    pub fn streak_calendar(&self) -> Result<String, JsValue> {
        to_json(&self.inner.borrow().streak_calendar(Local::now().date_naive()))
    }

    pub fn leaderboard(&self, period: &str) -> Result<String, JsValue> {
        let period = Period::parse(period)
            .ok_or_else(|| JsValue::from_str(&format!("unknown leaderboard period '{period}'")))?;
        to_json(self.inner.borrow().leaderboard(period))
    }

    pub fn drain_notices(&self) -> Result<String, JsValue> {
        to_json(&self.inner.borrow_mut().drain_notices())
    }

    /// Flush everything to storage (page unload).
    pub fn save(&self) -> Result<(), JsValue> {
        self.inner
            .borrow_mut()
            .save()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
