//! Astrals Hub core crate.
//!
//! Learner profile persistence, XP/level/streak bookkeeping, the per-grade quiz
//! engine and the study-buddy chat client. Everything above the browser
//! (`web` module) is plain Rust and runs natively under `cargo test`; the page
//! scripts drive the app through the `WebHub` bindings and render the JSON
//! snapshots it returns.

use wasm_bindgen::prelude::*;

pub mod chat;
pub mod config;
pub mod error;
pub mod gamification;
pub mod hub;
pub mod leaderboard;
pub mod notice;
pub mod profile;
pub mod quiz;
pub mod storage;
pub mod subject;

#[cfg(target_arch = "wasm32")]
mod web;

pub use chat::{ChatMessage, ChatSession, ChatTransport, OfflineTransport, Role};
pub use config::HubConfig;
pub use error::{ChatError, HubError, QuizError, RegistrationError, StorageError};
pub use hub::AstralsHub;
pub use notice::{Notice, NoticeKind};
pub use profile::{Profile, QuizRecord, RegistrationForm};
pub use quiz::{QuizEngine, QuizState, QuizSummary};
pub use storage::{KeyValueStore, MemoryStore};
pub use subject::Subject;

#[cfg(target_arch = "wasm32")]
pub use web::WebHub;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    wasm_logger::init(wasm_logger::Config::default());
}
