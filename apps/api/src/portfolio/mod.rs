// Portfolio API: profile, skills, projects and search over the store.

pub mod auth;
pub mod handlers;
pub mod query;
pub mod service;
