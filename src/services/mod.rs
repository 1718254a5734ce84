// ABOUTME: Business-rule layer sitting between route handlers and repositories
// ABOUTME: Re-exports the produce and user services with their request payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Produce catalogue operations
pub mod produits;
/// User account operations
pub mod utilisateurs;

pub use produits::{CreateProduitRequest, ProduitService, UpdateProduitRequest};
pub use utilisateurs::{
    CreateUtilisateurRequest, UpdateUtilisateurRequest, UtilisateurService,
};
