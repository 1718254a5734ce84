// ABOUTME: Persistence abstraction for the marche server
// ABOUTME: Repository traits with MariaDB, in-memory, and dispatching Store backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Repository traits and their backends.
//!
//! Every operation is one round trip to the store. Store faults are uniformly
//! propagated as `AppError::Database`; a miss is data (`Ok(None)` /
//! `Ok(false)`), not an error, at this layer.

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::{Produit, Utilisateur};

/// Dispatching backend enum
pub mod factory;
/// MariaDB-backed repositories (sqlx, parameterized SQL)
pub mod mariadb;
/// In-process repositories used by the test suite
pub mod memory;

pub use factory::Store;
pub use mariadb::MariadbRepository;
pub use memory::MemoryRepository;

/// Persistence operations for the produce catalogue
#[async_trait]
pub trait ProduitRepository: Send + Sync {
    /// Fetch one product by id
    async fn get_produit(&self, id: i64) -> AppResult<Option<Produit>>;

    /// Fetch every product, store default order
    async fn all_produits(&self) -> AppResult<Vec<Produit>>;

    /// Fetch the products whose category matches exactly
    async fn produits_by_categorie(&self, categorie: &str) -> AppResult<Vec<Produit>>;

    /// Insert a product; the store assigns and returns the new id
    async fn create_produit(&self, produit: &Produit) -> AppResult<i64>;

    /// Replace every mutable field of a product; false when the id is absent
    async fn update_produit(
        &self,
        id: i64,
        nom: &str,
        categorie: &str,
        quantite: f64,
        unite: &str,
        prix: f64,
    ) -> AppResult<bool>;

    /// Replace only the quantity; false when the id is absent
    async fn update_quantite(&self, id: i64, quantite: f64) -> AppResult<bool>;

    /// Remove a product; false when the id is absent
    async fn delete_produit(&self, id: i64) -> AppResult<bool>;

    /// Count rows carrying this id (existence check)
    async fn count_produits_with_id(&self, id: i64) -> AppResult<i64>;
}

/// Persistence operations for user accounts
#[async_trait]
pub trait UtilisateurRepository: Send + Sync {
    /// Fetch one user by id
    async fn get_utilisateur(&self, id: &str) -> AppResult<Option<Utilisateur>>;

    /// Fetch one user by mail address
    async fn get_utilisateur_by_mail(&self, mail: &str) -> AppResult<Option<Utilisateur>>;

    /// Fetch every user
    async fn all_utilisateurs(&self) -> AppResult<Vec<Utilisateur>>;

    /// Insert a user (the caller supplies the id)
    async fn create_utilisateur(&self, utilisateur: &Utilisateur) -> AppResult<()>;

    /// Replace every mutable field of a user; false when the id is absent
    async fn update_utilisateur(
        &self,
        id: &str,
        nom: &str,
        mdp_hash: &str,
        mail: &str,
    ) -> AppResult<bool>;

    /// Replace only the password hash; false when the id is absent
    async fn update_mot_de_passe(&self, id: &str, mdp_hash: &str) -> AppResult<bool>;

    /// Remove a user; false when the id is absent
    async fn delete_utilisateur(&self, id: &str) -> AppResult<bool>;

    /// True iff a user with this mail exists and the password verifies
    /// against the stored bcrypt hash
    async fn authenticate(&self, mail: &str, mdp: &str) -> AppResult<bool>;

    /// Count rows carrying this id (existence check)
    async fn count_utilisateurs_with_id(&self, id: &str) -> AppResult<i64>;
}
