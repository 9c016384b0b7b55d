//! # ai-chat-relay
//!
//! Stateless HTTP relay between a chat client and the OpenAI
//! chat-completions API. The relay accepts `{"message": "<string>"}` on
//! `POST /api/ai-chat`, forwards the message as a single-turn completion
//! request, and answers `{"response": "<string>"}` on success or
//! `{"error": "<string>"}` with a 4xx/5xx status on failure.
//!
//! The crate also ships a small terminal client (`chat` binary) built on
//! the [`client`] module: an append-only conversation log plus an HTTP
//! caller for the relay endpoint.

pub mod client;
pub mod config;
pub mod llm;
pub mod routes;
pub mod services;
pub mod state;
