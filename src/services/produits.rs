// ABOUTME: Produce catalogue service translating requests into validated persistence calls
// ABOUTME: Surfaces misses as 404-class errors and bad input as 400-class errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::models::Produit;
use crate::repositories::ProduitRepository;

/// Creation payload: everything but the store-assigned id
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduitRequest {
    /// Product name
    pub nom: String,
    /// Category
    pub categorie: String,
    /// Available quantity
    pub quantite: f64,
    /// Measurement unit
    pub unite: String,
    /// Unit price
    pub prix: f64,
}

/// Full-update payload; an `id`, when present, must agree with the path
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduitRequest {
    /// Optional id echo from the client
    #[serde(default)]
    pub id: Option<i64>,
    /// Product name
    pub nom: String,
    /// Category
    pub categorie: String,
    /// Available quantity
    pub quantite: f64,
    /// Measurement unit
    pub unite: String,
    /// Unit price
    pub prix: f64,
}

/// Business operations on the produce catalogue
pub struct ProduitService<R> {
    repo: Arc<R>,
}

impl<R> Clone for ProduitService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: ProduitRepository> ProduitService<R> {
    /// Wrap a repository
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Every product, store default order.
    ///
    /// # Errors
    /// Propagates store faults.
    pub async fn all_produits(&self) -> AppResult<Vec<Produit>> {
        self.repo.all_produits().await
    }

    /// Products matching the category exactly; an unknown category yields an
    /// empty list, not an error.
    ///
    /// # Errors
    /// Propagates store faults.
    pub async fn produits_by_categorie(&self, categorie: &str) -> AppResult<Vec<Produit>> {
        self.repo.produits_by_categorie(categorie).await
    }

    /// One product by id.
    ///
    /// # Errors
    /// `AppError::NotFound` when the id is absent.
    pub async fn get_produit(&self, id: i64) -> AppResult<Produit> {
        self.repo
            .get_produit(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("product {id} not found")))
    }

    /// Validate and persist a new product; the returned entity carries the
    /// store-assigned id.
    ///
    /// # Errors
    /// `AppError::InvalidInput` when a field fails validation.
    pub async fn create_produit(&self, request: CreateProduitRequest) -> AppResult<Produit> {
        let mut produit = Produit::new(
            0,
            request.nom,
            request.categorie,
            request.quantite,
            request.unite,
            request.prix,
        )?;

        let id = self.repo.create_produit(&produit).await?;
        produit.assign_id(id);
        info!(id, nom = produit.nom(), "product created");
        Ok(produit)
    }

    /// Replace every mutable field of a product.
    ///
    /// # Errors
    /// `AppError::InvalidInput` when the body id disagrees with the path id or
    /// a field fails validation; `AppError::NotFound` when no row matched.
    pub async fn update_produit(&self, id: i64, request: UpdateProduitRequest) -> AppResult<()> {
        if let Some(body_id) = request.id {
            if body_id != id {
                return Err(AppError::invalid_input(
                    "body id does not match the path id",
                ));
            }
        }

        // Run the payload through entity validation before touching the store.
        let produit = Produit::new(
            id,
            request.nom,
            request.categorie,
            request.quantite,
            request.unite,
            request.prix,
        )?;

        let updated = self
            .repo
            .update_produit(
                id,
                produit.nom(),
                produit.categorie(),
                produit.quantite(),
                produit.unite(),
                produit.prix(),
            )
            .await?;

        if updated {
            Ok(())
        } else {
            Err(AppError::not_found(format!("product {id} not found")))
        }
    }

    /// Replace the available quantity.
    ///
    /// The repository itself accepts any number; the range check lives here,
    /// on the single write path clients can reach.
    ///
    /// # Errors
    /// `AppError::InvalidInput` for negative or non-finite quantities,
    /// `AppError::NotFound` when no row matched.
    pub async fn update_quantite(&self, id: i64, quantite: f64) -> AppResult<()> {
        if !(quantite.is_finite() && quantite >= 0.0) {
            return Err(AppError::invalid_input(
                "quantity must be a finite non-negative number",
            ));
        }

        if self.repo.update_quantite(id, quantite).await? {
            Ok(())
        } else {
            Err(AppError::not_found(format!("product {id} not found")))
        }
    }

    /// Remove a product.
    ///
    /// # Errors
    /// `AppError::NotFound` when the id is absent.
    pub async fn delete_produit(&self, id: i64) -> AppResult<()> {
        if self.repo.delete_produit(id).await? {
            info!(id, "product deleted");
            Ok(())
        } else {
            Err(AppError::not_found(format!(
                "product {id} not found or already deleted"
            )))
        }
    }
}
