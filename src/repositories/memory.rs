// ABOUTME: In-memory repository implementation for tests and local development
// ABOUTME: Mirrors the MariaDB backend semantics including store-assigned product ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ProduitRepository, UtilisateurRepository};
use crate::errors::AppResult;
use crate::models::{Produit, Utilisateur};

/// Repository keeping all rows in process memory.
///
/// Product ids are assigned the way an `AUTO_INCREMENT` column would:
/// one past the highest id ever assigned.
#[derive(Default)]
pub struct MemoryRepository {
    produits: RwLock<ProduitTable>,
    utilisateurs: RwLock<HashMap<String, Utilisateur>>,
}

#[derive(Default)]
struct ProduitTable {
    rows: HashMap<i64, Produit>,
    next_id: i64,
}

impl MemoryRepository {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProduitRepository for MemoryRepository {
    async fn get_produit(&self, id: i64) -> AppResult<Option<Produit>> {
        Ok(self.produits.read().await.rows.get(&id).cloned())
    }

    async fn all_produits(&self) -> AppResult<Vec<Produit>> {
        let table = self.produits.read().await;
        let mut rows: Vec<Produit> = table.rows.values().cloned().collect();
        rows.sort_by_key(Produit::id);
        Ok(rows)
    }

    async fn produits_by_categorie(&self, categorie: &str) -> AppResult<Vec<Produit>> {
        let table = self.produits.read().await;
        let mut rows: Vec<Produit> = table
            .rows
            .values()
            .filter(|p| p.categorie() == categorie)
            .cloned()
            .collect();
        rows.sort_by_key(Produit::id);
        Ok(rows)
    }

    async fn create_produit(&self, produit: &Produit) -> AppResult<i64> {
        let mut table = self.produits.write().await;
        table.next_id = table.next_id.max(table.rows.keys().copied().max().unwrap_or(0)) + 1;
        let id = table.next_id;
        let mut stored = produit.clone();
        stored.assign_id(id);
        table.rows.insert(id, stored);
        Ok(id)
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
        let mut table = self.produits.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = Produit::from_stored(
                    id,
                    nom.to_owned(),
                    categorie.to_owned(),
                    quantite,
                    unite.to_owned(),
                    prix,
                );
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_quantite(&self, id: i64, quantite: f64) -> AppResult<bool> {
        let mut table = self.produits.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                // Same leniency as the SQL UPDATE: the store accepts any number,
                // range checking belongs to the service.
                *row = Produit::from_stored(
                    id,
                    row.nom().to_owned(),
                    row.categorie().to_owned(),
                    quantite,
                    row.unite().to_owned(),
                    row.prix(),
                );
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_produit(&self, id: i64) -> AppResult<bool> {
        Ok(self.produits.write().await.rows.remove(&id).is_some())
    }

    async fn count_produits_with_id(&self, id: i64) -> AppResult<i64> {
        Ok(i64::from(self.produits.read().await.rows.contains_key(&id)))
    }
}

#[async_trait]
impl UtilisateurRepository for MemoryRepository {
    async fn get_utilisateur(&self, id: &str) -> AppResult<Option<Utilisateur>> {
        Ok(self.utilisateurs.read().await.get(id).cloned())
    }

    async fn get_utilisateur_by_mail(&self, mail: &str) -> AppResult<Option<Utilisateur>> {
        Ok(self
            .utilisateurs
            .read()
            .await
            .values()
            .find(|u| u.mail() == mail)
            .cloned())
    }

    async fn all_utilisateurs(&self) -> AppResult<Vec<Utilisateur>> {
        let mut rows: Vec<Utilisateur> = self.utilisateurs.read().await.values().cloned().collect();
        rows.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(rows)
    }

    async fn create_utilisateur(&self, utilisateur: &Utilisateur) -> AppResult<()> {
        self.utilisateurs
            .write()
            .await
            .insert(utilisateur.id().to_owned(), utilisateur.clone());
        Ok(())
    }

    async fn update_utilisateur(
        &self,
        id: &str,
        nom: &str,
        mdp_hash: &str,
        mail: &str,
    ) -> AppResult<bool> {
        let mut rows = self.utilisateurs.write().await;
        match rows.get_mut(id) {
            Some(row) => {
                *row = Utilisateur::from_stored(
                    id.to_owned(),
                    nom.to_owned(),
                    mdp_hash.to_owned(),
                    mail.to_owned(),
                );
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_mot_de_passe(&self, id: &str, mdp_hash: &str) -> AppResult<bool> {
        let mut rows = self.utilisateurs.write().await;
        match rows.get_mut(id) {
            Some(row) => {
                *row = Utilisateur::from_stored(
                    id.to_owned(),
                    row.nom().to_owned(),
                    mdp_hash.to_owned(),
                    row.mail().to_owned(),
                );
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_utilisateur(&self, id: &str) -> AppResult<bool> {
        Ok(self.utilisateurs.write().await.remove(id).is_some())
    }

    async fn authenticate(&self, mail: &str, mdp: &str) -> AppResult<bool> {
        let hash = self
            .utilisateurs
            .read()
            .await
            .values()
            .find(|u| u.mail() == mail)
            .map(|u| u.mdp_hash().to_owned());

        match hash {
            Some(hash) => Ok(bcrypt::verify(mdp, &hash)?),
            None => Ok(false),
        }
    }

    async fn count_utilisateurs_with_id(&self, id: &str) -> AppResult<i64> {
        Ok(i64::from(self.utilisateurs.read().await.contains_key(id)))
    }
}
