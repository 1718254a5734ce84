// ABOUTME: Route handlers for the /utilisateurs endpoints
// ABOUTME: Exposes only redacted user views and a single credential check
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
use serde::Deserialize;
use serde_json::json;

use super::ServerResources;
use crate::errors::AppError;
use crate::services::{CreateUtilisateurRequest, UpdateUtilisateurRequest};

/// Credential check payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub mail: String,
    /// Raw password
    pub mdp: String,
}

/// User account routes
pub struct UtilisateurRoutes;

impl UtilisateurRoutes {
    /// Create all /utilisateurs routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/utilisateurs", get(Self::handle_list))
            .route("/utilisateurs", post(Self::handle_create))
            .route("/utilisateurs/login", post(Self::handle_login))
            .route("/utilisateurs/:id", get(Self::handle_get))
            .route("/utilisateurs/:id", put(Self::handle_update))
            .route("/utilisateurs/:id", delete(Self::handle_delete))
            .route("/utilisateurs/:id/mdp", put(Self::handle_update_mot_de_passe))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let utilisateurs = resources.utilisateurs.all_utilisateurs_public().await?;
        Ok((StatusCode::OK, Json(utilisateurs)).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let utilisateur = resources.utilisateurs.get_utilisateur(&id).await?;
        Ok((StatusCode::OK, Json(utilisateur)).into_response())
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateUtilisateurRequest>,
    ) -> Result<Response, AppError> {
        let utilisateur = resources.utilisateurs.create_utilisateur(request).await?;
        // The entity serializer already skips the password hash.
        Ok((StatusCode::CREATED, Json(utilisateur)).into_response())
    }

    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        Json(request): Json<UpdateUtilisateurRequest>,
    ) -> Result<Response, AppError> {
        resources.utilisateurs.update_utilisateur(&id, request).await?;
        Ok(StatusCode::OK.into_response())
    }

    /// Body is plain text carrying the new password
    async fn handle_update_mot_de_passe(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        body: String,
    ) -> Result<Response, AppError> {
        resources
            .utilisateurs
            .update_mot_de_passe(&id, &body)
            .await?;
        Ok(StatusCode::OK.into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        resources.utilisateurs.delete_utilisateur(&id).await?;
        Ok((StatusCode::OK, Json(json!({ "message": "user deleted" }))).into_response())
    }

    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> Result<Response, AppError> {
        if resources
            .utilisateurs
            .authenticate(&request.mail, &request.mdp)
            .await?
        {
            Ok((StatusCode::OK, Json(json!({ "authenticated": true }))).into_response())
        } else {
            Err(AppError::auth_invalid("invalid mail or password"))
        }
    }
}
