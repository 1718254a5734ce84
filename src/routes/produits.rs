// ABOUTME: Route handlers for the /produits endpoints
// ABOUTME: Maps HTTP verbs to produce service calls and outcomes to status codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;

use super::ServerResources;
use crate::errors::AppError;
use crate::services::{CreateProduitRequest, UpdateProduitRequest};

/// Produce catalogue routes
pub struct ProduitRoutes;

impl ProduitRoutes {
    /// Create all /produits routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/produits", get(Self::handle_list))
            .route("/produits", post(Self::handle_create))
            .route("/produits/:id", get(Self::handle_get))
            .route("/produits/:id", put(Self::handle_update))
            .route("/produits/:id", delete(Self::handle_delete))
            .route("/produits/:id/quantite", put(Self::handle_update_quantite))
            .route(
                "/produits/categorie/:categorie",
                get(Self::handle_by_categorie),
            )
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let produits = resources.produits.all_produits().await?;
        Ok((StatusCode::OK, Json(produits)).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let produit = resources.produits.get_produit(id).await?;
        Ok((StatusCode::OK, Json(produit)).into_response())
    }

    async fn handle_by_categorie(
        State(resources): State<Arc<ServerResources>>,
        Path(categorie): Path<String>,
    ) -> Result<Response, AppError> {
        let produits = resources
            .produits
            .produits_by_categorie(&categorie)
            .await?;
        Ok((StatusCode::OK, Json(produits)).into_response())
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateProduitRequest>,
    ) -> Result<Response, AppError> {
        let produit = resources.produits.create_produit(request).await?;
        Ok((StatusCode::CREATED, Json(produit)).into_response())
    }

    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        Json(request): Json<UpdateProduitRequest>,
    ) -> Result<Response, AppError> {
        resources.produits.update_produit(id, request).await?;
        Ok(StatusCode::OK.into_response())
    }

    /// Body is plain text carrying the new quantity; non-numeric input is a
    /// caller error, not a store fault.
    async fn handle_update_quantite(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        body: String,
    ) -> Result<Response, AppError> {
        let quantite: f64 = body
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_input("quantity must be a number"))?;

        resources.produits.update_quantite(id, quantite).await?;
        Ok(StatusCode::OK.into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        resources.produits.delete_produit(id).await?;
        Ok((
            StatusCode::OK,
            Json(json!({ "message": "product deleted" })),
        )
            .into_response())
    }
}
