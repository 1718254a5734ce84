// ABOUTME: Route module organization for the marche server HTTP endpoints
// ABOUTME: Assembles the axum Router over shared server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP surface.
//!
//! Handlers are pure adapters: parse the request shape, call one service
//! method, map the outcome to a status code. Business logic lives below.

use std::sync::Arc;

use axum::Router;

use crate::repositories::Store;
use crate::services::{ProduitService, UtilisateurService};

/// Liveness endpoint
pub mod health;
/// /produits handlers
pub mod produits;
/// /utilisateurs handlers
pub mod utilisateurs;

pub use produits::ProduitRoutes;
pub use utilisateurs::UtilisateurRoutes;

/// Shared state handed to every handler
pub struct ServerResources {
    /// Produce catalogue service over the configured store
    pub produits: ProduitService<Store>,
    /// User account service over the same store
    pub utilisateurs: UtilisateurService<Store>,
}

impl ServerResources {
    /// Build both services over one shared store
    #[must_use]
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            produits: ProduitService::new(Arc::clone(&store)),
            utilisateurs: UtilisateurService::new(store),
        }
    }
}

/// Assemble the full application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(ProduitRoutes::routes(Arc::clone(&resources)))
        .merge(UtilisateurRoutes::routes(resources))
        .merge(health::routes())
}
