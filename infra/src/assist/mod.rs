//! Content-assist client implementations
//!
//! `GeminiClient` talks to the Google generative-language API;
//! `MockAssist` provides canned responses for development and tests.
//! Both implement `ss_core::services::assist::ContentAssist`.

mod gemini;
mod mock;

pub use gemini::GeminiClient;
pub use mock::MockAssist;
