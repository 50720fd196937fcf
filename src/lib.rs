//! BIBL.IA: a Bible study session service.
//!
//! The crate is a library plus one binary. Session logic (plans, the
//! content library, memorization quizzes, topics, Q&A, guided studies)
//! lives in pure modules over the models; [`store::SessionStore`] owns the
//! mutable session and [`api`] exposes it over HTTP. The [`assist`] module
//! simulates the generation backend with canned content and artificial
//! latency.

pub mod api;
pub mod assist;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod plans;
pub mod qa;
pub mod quiz;
pub mod share;
pub mod store;
pub mod token;
pub mod topics;
