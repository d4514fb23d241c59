//! Turns an uploaded document or pasted text into a short summary and a
//! narration prompt for video generation.
//!
//! Text is extracted per format, normalized, and summarized by a hosted
//! language model. `POST /api/process` is the only business endpoint.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
