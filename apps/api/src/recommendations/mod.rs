// Job recommendations: prompt → one generation call → normalized batch.
// All generation calls go through llm_client; no direct Gemini calls here.

pub mod handlers;
pub mod normalizer;
pub mod prompts;
pub mod service;
