// ABOUTME: Backend factory dispatching repository calls to MariaDB or memory
// ABOUTME: Lets the route layer stay generic over the configured storage backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use async_trait::async_trait;

use super::{MariadbRepository, MemoryRepository, ProduitRepository, UtilisateurRepository};
use crate::errors::AppResult;
use crate::models::{Produit, Utilisateur};

/// Storage backend selected at startup.
///
/// The server binary builds a `Mariadb` store; the test suite builds a
/// `Memory` one. Both expose the same repository traits through match
/// dispatch.
pub enum Store {
    /// MariaDB-backed persistence
    Mariadb(MariadbRepository),
    /// In-process persistence
    Memory(MemoryRepository),
}

impl Store {
    /// Connect to MariaDB and wrap the repository
    ///
    /// # Errors
    /// Returns `AppError::Database` when the connection fails.
    pub async fn mariadb(database_url: &str) -> AppResult<Self> {
        Ok(Self::Mariadb(MariadbRepository::new(database_url).await?))
    }

    /// Fresh empty in-memory store
    #[must_use]
    pub fn memory() -> Self {
        Self::Memory(MemoryRepository::new())
    }

    /// Human-readable backend name for startup logging
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Mariadb(_) => "mariadb",
            Self::Memory(_) => "memory",
        }
    }

    /// Bootstrap the schema on backends that need it
    ///
    /// # Errors
    /// Returns `AppError::Database` on statement failure.
    pub async fn migrate(&self) -> AppResult<()> {
        match self {
            Self::Mariadb(db) => db.migrate().await,
            Self::Memory(_) => Ok(()),
        }
    }
}

#[async_trait]
impl ProduitRepository for Store {
    async fn get_produit(&self, id: i64) -> AppResult<Option<Produit>> {
        match self {
            Self::Mariadb(db) => db.get_produit(id).await,
            Self::Memory(db) => db.get_produit(id).await,
        }
    }

    async fn all_produits(&self) -> AppResult<Vec<Produit>> {
        match self {
            Self::Mariadb(db) => db.all_produits().await,
            Self::Memory(db) => db.all_produits().await,
        }
    }

    async fn produits_by_categorie(&self, categorie: &str) -> AppResult<Vec<Produit>> {
        match self {
            Self::Mariadb(db) => db.produits_by_categorie(categorie).await,
            Self::Memory(db) => db.produits_by_categorie(categorie).await,
        }
    }

    async fn create_produit(&self, produit: &Produit) -> AppResult<i64> {
        match self {
            Self::Mariadb(db) => db.create_produit(produit).await,
            Self::Memory(db) => db.create_produit(produit).await,
        }
    }

    async fn update_produit(
        &self,
        id: i64,
        nom: &str,
        categorie: &str,
        quantite: f64,
        unite: &str,
        prix: f64,
    ) -> AppResult<bool> {
        match self {
            Self::Mariadb(db) => {
                db.update_produit(id, nom, categorie, quantite, unite, prix)
                    .await
            }
            Self::Memory(db) => {
                db.update_produit(id, nom, categorie, quantite, unite, prix)
                    .await
            }
        }
    }

    async fn update_quantite(&self, id: i64, quantite: f64) -> AppResult<bool> {
        match self {
            Self::Mariadb(db) => db.update_quantite(id, quantite).await,
            Self::Memory(db) => db.update_quantite(id, quantite).await,
        }
    }

    async fn delete_produit(&self, id: i64) -> AppResult<bool> {
        match self {
            Self::Mariadb(db) => db.delete_produit(id).await,
            Self::Memory(db) => db.delete_produit(id).await,
        }
    }

    async fn count_produits_with_id(&self, id: i64) -> AppResult<i64> {
        match self {
            Self::Mariadb(db) => db.count_produits_with_id(id).await,
            Self::Memory(db) => db.count_produits_with_id(id).await,
        }
    }
}

#[async_trait]
impl UtilisateurRepository for Store {
    async fn get_utilisateur(&self, id: &str) -> AppResult<Option<Utilisateur>> {
        match self {
            Self::Mariadb(db) => db.get_utilisateur(id).await,
            Self::Memory(db) => db.get_utilisateur(id).await,
        }
    }

    async fn get_utilisateur_by_mail(&self, mail: &str) -> AppResult<Option<Utilisateur>> {
        match self {
            Self::Mariadb(db) => db.get_utilisateur_by_mail(mail).await,
            Self::Memory(db) => db.get_utilisateur_by_mail(mail).await,
        }
    }

    async fn all_utilisateurs(&self) -> AppResult<Vec<Utilisateur>> {
        match self {
            Self::Mariadb(db) => db.all_utilisateurs().await,
            Self::Memory(db) => db.all_utilisateurs().await,
        }
    }

    async fn create_utilisateur(&self, utilisateur: &Utilisateur) -> AppResult<()> {
        match self {
            Self::Mariadb(db) => db.create_utilisateur(utilisateur).await,
            Self::Memory(db) => db.create_utilisateur(utilisateur).await,
        }
    }

    async fn update_utilisateur(
        &self,
        id: &str,
        nom: &str,
        mdp_hash: &str,
        mail: &str,
    ) -> AppResult<bool> {
        match self {
            Self::Mariadb(db) => db.update_utilisateur(id, nom, mdp_hash, mail).await,
            Self::Memory(db) => db.update_utilisateur(id, nom, mdp_hash, mail).await,
        }
    }

    async fn update_mot_de_passe(&self, id: &str, mdp_hash: &str) -> AppResult<bool> {
        match self {
            Self::Mariadb(db) => db.update_mot_de_passe(id, mdp_hash).await,
            Self::Memory(db) => db.update_mot_de_passe(id, mdp_hash).await,
        }
    }

    async fn delete_utilisateur(&self, id: &str) -> AppResult<bool> {
        match self {
            Self::Mariadb(db) => db.delete_utilisateur(id).await,
            Self::Memory(db) => db.delete_utilisateur(id).await,
        }
    }

    async fn authenticate(&self, mail: &str, mdp: &str) -> AppResult<bool> {
        match self {
            Self::Mariadb(db) => db.authenticate(mail, mdp).await,
            Self::Memory(db) => db.authenticate(mail, mdp).await,
        }
    }

    async fn count_utilisateurs_with_id(&self, id: &str) -> AppResult<i64> {
        match self {
            Self::Mariadb(db) => db.count_utilisateurs_with_id(id).await,
            Self::Memory(db) => db.count_utilisateurs_with_id(id).await,
        }
    }
}
