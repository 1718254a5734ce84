// ABOUTME: Main library entry point for the marche-server REST backend
// ABOUTME: Exposes models, repositories, services and routes for produce and user management
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Marche Server
//!
//! A small REST backend managing a farm-produce catalogue (`Produit`) and its
//! user accounts (`Utilisateur`), persisted in MariaDB.
//!
//! ## Architecture
//!
//! The server follows a layered architecture:
//! - **Models**: validated entity records
//! - **Repositories**: persistence traits with MariaDB and in-memory backends
//! - **Services**: business-rule validation and client-view shaping
//! - **Routes**: axum handlers mapping HTTP verbs to service calls

/// Server configuration loaded from the environment
pub mod config;
/// Unified error type and HTTP error envelope
pub mod errors;
/// Logging initialization built on tracing-subscriber
pub mod logging;
/// Entity records
pub mod models;
/// Persistence abstraction and its backends
pub mod repositories;
/// Route handlers for the HTTP surface
pub mod routes;
/// Business-rule layer between routes and repositories
pub mod services;
