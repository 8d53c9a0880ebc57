// Eventboard Server Library
// Decision: Shared library for binaries (HTTP server, OpenAPI export)

// API routes and types (shared for OpenAPI generation)
pub mod api;

// Router assembly
pub mod app;
pub use app::build_router;

// Authentication module
pub mod auth;

// Environment configuration
pub mod config;
pub use config::{ServerConfig, StorageMode};

// Services layer
pub mod services;
pub use services::{AuthService, EventService};

// Storage layer
pub mod storage;

// OpenAPI document generation
pub mod openapi;
