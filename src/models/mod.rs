// ABOUTME: Entity records for the marche server
// ABOUTME: Re-exports the Produit and Utilisateur models
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Farm-produce catalogue entry
pub mod produit;
/// User account record and its redacted client view
pub mod utilisateur;

pub use produit::Produit;
pub use utilisateur::{Utilisateur, UtilisateurView};
