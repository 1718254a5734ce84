// ABOUTME: Produit entity for the farm-produce catalogue
// ABOUTME: Validates its fields at construction and mutation time
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Serialize;

use crate::errors::{AppError, AppResult};

/// A farm-produce catalogue entry.
///
/// Fields are private so the invariants (`nom`/`categorie`/`unite` non-blank,
/// `quantite >= 0`, `prix > 0`) hold for every instance, whichever layer built
/// it. Construction goes through [`Produit::new`]; mutation through the
/// validating setters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Produit {
    /// Store-assigned identifier (0 until persisted)
    id: i64,
    /// Product name
    nom: String,
    /// Category (légumes, oeufs, volailles, fromages, ...)
    categorie: String,
    /// Available quantity
    quantite: f64,
    /// Measurement unit (kilo, unité, douzaine, ...)
    unite: String,
    /// Unit price
    prix: f64,
}

impl Produit {
    /// Build a validated product.
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` when `nom`, `categorie` or `unite` is
    /// blank, `quantite` is negative or non-finite, or `prix` is not a finite
    /// strictly positive number.
    pub fn new(
        id: i64,
        nom: impl Into<String>,
        categorie: impl Into<String>,
        quantite: f64,
        unite: impl Into<String>,
        prix: f64,
    ) -> AppResult<Self> {
        let nom = nom.into();
        let categorie = categorie.into();
        let unite = unite.into();

        if nom.trim().is_empty() {
            return Err(AppError::invalid_input("product name cannot be blank"));
        }
        if categorie.trim().is_empty() {
            return Err(AppError::invalid_input("product category cannot be blank"));
        }
        if unite.trim().is_empty() {
            return Err(AppError::invalid_input("product unit cannot be blank"));
        }
        // Written so NaN fails too: NaN compares false against everything.
        if !(quantite.is_finite() && quantite >= 0.0) {
            return Err(AppError::invalid_input(
                "quantity must be a finite non-negative number",
            ));
        }
        if !(prix.is_finite() && prix > 0.0) {
            return Err(AppError::invalid_input(
                "price must be a finite strictly positive number",
            ));
        }

        Ok(Self {
            id,
            nom,
            categorie,
            quantite,
            unite,
            prix,
        })
    }

    /// Rebuild a product from a persisted row, bypassing validation.
    ///
    /// Stored rows already passed validation on their way in; a read must not
    /// surface a 400-class error.
    pub(crate) fn from_stored(
        id: i64,
        nom: String,
        categorie: String,
        quantite: f64,
        unite: String,
        prix: f64,
    ) -> Self {
        Self {
            id,
            nom,
            categorie,
            quantite,
            unite,
            prix,
        }
    }

    /// Store-assigned identifier
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Product name
    #[must_use]
    pub fn nom(&self) -> &str {
        &self.nom
    }

    /// Product category
    #[must_use]
    pub fn categorie(&self) -> &str {
        &self.categorie
    }

    /// Available quantity
    #[must_use]
    pub const fn quantite(&self) -> f64 {
        self.quantite
    }

    /// Measurement unit
    #[must_use]
    pub fn unite(&self) -> &str {
        &self.unite
    }

    /// Unit price
    #[must_use]
    pub const fn prix(&self) -> f64 {
        self.prix
    }

    /// Record the identifier the store assigned on insert
    pub(crate) fn assign_id(&mut self, id: i64) {
        self.id = id;
    }

    /// Replace the available quantity.
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` for negative quantities.
    pub fn set_quantite(&mut self, quantite: f64) -> AppResult<()> {
        if !(quantite.is_finite() && quantite >= 0.0) {
            return Err(AppError::invalid_input(
                "quantity must be a finite non-negative number",
            ));
        }
        self.quantite = quantite;
        Ok(())
    }

    /// Replace the unit price.
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` unless the price is strictly positive.
    pub fn set_prix(&mut self, prix: f64) -> AppResult<()> {
        if !(prix.is_finite() && prix > 0.0) {
            return Err(AppError::invalid_input(
                "price must be a finite strictly positive number",
            ));
        }
        self.prix = prix;
        Ok(())
    }
}
