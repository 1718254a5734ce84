// ABOUTME: MariaDB-backed repository implementation using sqlx
// ABOUTME: Parameterized SQL statements with row-to-entity mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MariaDB persistence.
//!
//! One [`MySqlPool`] is created at construction and owned for the lifetime of
//! the repository; sqlx returns connections to the pool on every exit path.
//! All statements use `?` placeholders, never string interpolation.

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlRow};
use sqlx::Row;
use tracing::info;

use super::{ProduitRepository, UtilisateurRepository};
use crate::errors::AppResult;
use crate::models::{Produit, Utilisateur};

/// Repository backed by a MariaDB database
#[derive(Clone)]
pub struct MariadbRepository {
    pool: MySqlPool,
}

impl MariadbRepository {
    /// Connect to the database.
    ///
    /// # Errors
    /// Returns `AppError::Database` when the connection cannot be established.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let pool = MySqlPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    /// Create the `Produit` and `Utilisateur` tables if they do not exist.
    ///
    /// # Errors
    /// Returns `AppError::Database` on statement failure.
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS Produit (
                id INT AUTO_INCREMENT PRIMARY KEY,
                nom VARCHAR(255) NOT NULL,
                categorie VARCHAR(255) NOT NULL,
                quantite DOUBLE NOT NULL,
                unite VARCHAR(64) NOT NULL,
                prix DOUBLE NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_produit_categorie ON Produit(categorie)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS Utilisateur (
                id VARCHAR(64) PRIMARY KEY,
                nom VARCHAR(255) NOT NULL,
                mdp VARCHAR(255) NOT NULL,
                mail VARCHAR(255) NOT NULL UNIQUE
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        info!("database schema ready");
        Ok(())
    }
}

fn produit_from_row(row: &MySqlRow) -> Result<Produit, sqlx::Error> {
    Ok(Produit::from_stored(
        row.try_get::<i64, _>("id")?,
        row.try_get("nom")?,
        row.try_get("categorie")?,
        row.try_get("quantite")?,
        row.try_get("unite")?,
        row.try_get("prix")?,
    ))
}

fn utilisateur_from_row(row: &MySqlRow) -> Result<Utilisateur, sqlx::Error> {
    Ok(Utilisateur::from_stored(
        row.try_get("id")?,
        row.try_get("nom")?,
        row.try_get("mdp")?,
        row.try_get("mail")?,
    ))
}

#[async_trait]
impl ProduitRepository for MariadbRepository {
    async fn get_produit(&self, id: i64) -> AppResult<Option<Produit>> {
        let row = sqlx::query("SELECT id, nom, categorie, quantite, unite, prix FROM Produit WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(produit_from_row).transpose().map_err(Into::into)
    }

    async fn all_produits(&self) -> AppResult<Vec<Produit>> {
        let rows = sqlx::query("SELECT id, nom, categorie, quantite, unite, prix FROM Produit")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(produit_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    async fn produits_by_categorie(&self, categorie: &str) -> AppResult<Vec<Produit>> {
        let rows = sqlx::query(
            "SELECT id, nom, categorie, quantite, unite, prix FROM Produit WHERE categorie = ?",
        )
        .bind(categorie)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(produit_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    async fn create_produit(&self, produit: &Produit) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO Produit (nom, categorie, quantite, unite, prix) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(produit.nom())
        .bind(produit.categorie())
        .bind(produit.quantite())
        .bind(produit.unite())
        .bind(produit.prix())
        .execute(&self.pool)
        .await?;

        i64::try_from(result.last_insert_id())
            .map_err(|e| crate::errors::AppError::Internal(format!("id out of range: {e}")))
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
        let result = sqlx::query(
            "UPDATE Produit SET nom = ?, categorie = ?, quantite = ?, unite = ?, prix = ? WHERE id = ?",
        )
        .bind(nom)
        .bind(categorie)
        .bind(quantite)
        .bind(unite)
        .bind(prix)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_quantite(&self, id: i64, quantite: f64) -> AppResult<bool> {
        let result = sqlx::query("UPDATE Produit SET quantite = ? WHERE id = ?")
            .bind(quantite)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_produit(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM Produit WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_produits_with_id(&self, id: i64) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM Produit WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("total")?)
    }
}

#[async_trait]
impl UtilisateurRepository for MariadbRepository {
    async fn get_utilisateur(&self, id: &str) -> AppResult<Option<Utilisateur>> {
        let row = sqlx::query("SELECT id, nom, mdp, mail FROM Utilisateur WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref()
            .map(utilisateur_from_row)
            .transpose()
            .map_err(Into::into)
    }

    async fn get_utilisateur_by_mail(&self, mail: &str) -> AppResult<Option<Utilisateur>> {
        let row = sqlx::query("SELECT id, nom, mdp, mail FROM Utilisateur WHERE mail = ?")
            .bind(mail)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref()
            .map(utilisateur_from_row)
            .transpose()
            .map_err(Into::into)
    }

    async fn all_utilisateurs(&self) -> AppResult<Vec<Utilisateur>> {
        let rows = sqlx::query("SELECT id, nom, mdp, mail FROM Utilisateur")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(utilisateur_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    async fn create_utilisateur(&self, utilisateur: &Utilisateur) -> AppResult<()> {
        sqlx::query("INSERT INTO Utilisateur (id, nom, mdp, mail) VALUES (?, ?, ?, ?)")
            .bind(utilisateur.id())
            .bind(utilisateur.nom())
            .bind(utilisateur.mdp_hash())
            .bind(utilisateur.mail())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update_utilisateur(
        &self,
        id: &str,
        nom: &str,
        mdp_hash: &str,
        mail: &str,
    ) -> AppResult<bool> {
        let result = sqlx::query("UPDATE Utilisateur SET nom = ?, mdp = ?, mail = ? WHERE id = ?")
            .bind(nom)
            .bind(mdp_hash)
            .bind(mail)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_mot_de_passe(&self, id: &str, mdp_hash: &str) -> AppResult<bool> {
        let result = sqlx::query("UPDATE Utilisateur SET mdp = ? WHERE id = ?")
            .bind(mdp_hash)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_utilisateur(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM Utilisateur WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn authenticate(&self, mail: &str, mdp: &str) -> AppResult<bool> {
        let row = sqlx::query("SELECT mdp FROM Utilisateur WHERE mail = ?")
            .bind(mail)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let hash: String = row.try_get("mdp")?;
                Ok(bcrypt::verify(mdp, &hash)?)
            }
            None => Ok(false),
        }
    }

    async fn count_utilisateurs_with_id(&self, id: &str) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM Utilisateur WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("total")?)
    }
}
