// ABOUTME: User account service handling validation, uniqueness checks and redaction
// ABOUTME: Hashes passwords with bcrypt before anything reaches the repository
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{utilisateur::is_valid_mail, Utilisateur, UtilisateurView};
use crate::repositories::UtilisateurRepository;

/// Creation payload; a missing `id` is filled with a generated one
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUtilisateurRequest {
    /// Caller-chosen identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Display name
    pub nom: String,
    /// Raw password, hashed before storage
    pub mdp: String,
    /// Email address
    pub mail: String,
}

/// Full-update payload; an `id`, when present, must agree with the path
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUtilisateurRequest {
    /// Optional id echo from the client
    #[serde(default)]
    pub id: Option<String>,
    /// Display name
    pub nom: String,
    /// Raw password, re-hashed before storage
    pub mdp: String,
    /// Email address
    pub mail: String,
}

/// Business operations on user accounts
pub struct UtilisateurService<R> {
    repo: Arc<R>,
}

impl<R> Clone for UtilisateurService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: UtilisateurRepository> UtilisateurService<R> {
    /// Wrap a repository
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Every user, reduced to the client-safe view (password and mail
    /// withheld).
    ///
    /// # Errors
    /// Propagates store faults.
    pub async fn all_utilisateurs_public(&self) -> AppResult<Vec<UtilisateurView>> {
        let utilisateurs = self.repo.all_utilisateurs().await?;
        Ok(utilisateurs.iter().map(Utilisateur::to_view).collect())
    }

    /// One user by id, reduced to the client-safe view.
    ///
    /// # Errors
    /// `AppError::NotFound` when the id is absent.
    pub async fn get_utilisateur(&self, id: &str) -> AppResult<UtilisateurView> {
        self.repo
            .get_utilisateur(id)
            .await?
            .map(|u| u.to_view())
            .ok_or_else(|| AppError::not_found(format!("user {id} not found")))
    }

    /// Validate, check uniqueness, hash the password and persist a new user.
    ///
    /// Uniqueness is check-then-act over two round trips; the `mail UNIQUE`
    /// column backstops the mail race at the store.
    ///
    /// # Errors
    /// `AppError::InvalidInput` on blank fields, malformed mail, or a
    /// duplicate id/mail.
    pub async fn create_utilisateur(
        &self,
        request: CreateUtilisateurRequest,
    ) -> AppResult<Utilisateur> {
        let id = match request.id {
            Some(id) if id.trim().is_empty() => {
                return Err(AppError::invalid_input("user id cannot be blank"));
            }
            Some(id) => id,
            // An absent id is filled in; an explicitly blank one is a caller error.
            None => Self::generate_new_id(),
        };

        if request.mdp.trim().is_empty() {
            return Err(AppError::invalid_input("password cannot be blank"));
        }
        if !is_valid_mail(&request.mail) {
            return Err(AppError::invalid_input("mail address is not valid"));
        }

        if self
            .repo
            .get_utilisateur_by_mail(&request.mail)
            .await?
            .is_some()
        {
            return Err(AppError::invalid_input("mail address already in use"));
        }
        if self.repo.get_utilisateur(&id).await?.is_some() {
            return Err(AppError::invalid_input("user id already in use"));
        }

        let hash = bcrypt::hash(&request.mdp, bcrypt::DEFAULT_COST)?;
        let utilisateur = Utilisateur::new(id, request.nom, hash, request.mail)?;

        self.repo.create_utilisateur(&utilisateur).await?;
        info!(id = utilisateur.id(), "user created");
        Ok(utilisateur)
    }

    /// Replace every mutable field of a user.
    ///
    /// # Errors
    /// `AppError::InvalidInput` when the body id disagrees with the path id,
    /// a field fails validation, or the mail belongs to another user;
    /// `AppError::NotFound` when no row matched.
    pub async fn update_utilisateur(
        &self,
        id: &str,
        request: UpdateUtilisateurRequest,
    ) -> AppResult<()> {
        if let Some(body_id) = &request.id {
            if body_id != id {
                return Err(AppError::invalid_input(
                    "body id does not match the path id",
                ));
            }
        }

        if request.mdp.trim().is_empty() {
            return Err(AppError::invalid_input("password cannot be blank"));
        }

        // The new mail must not belong to a different user. Same
        // check-then-act caveat as creation; the UNIQUE column backstops it.
        if let Some(existing) = self.repo.get_utilisateur_by_mail(&request.mail).await? {
            if existing.id() != id {
                return Err(AppError::invalid_input("mail address already in use"));
            }
        }

        let hash = bcrypt::hash(&request.mdp, bcrypt::DEFAULT_COST)?;
        // Entity validation covers the remaining fields.
        let candidate = Utilisateur::new(id, request.nom, hash, request.mail)?;

        let updated = self
            .repo
            .update_utilisateur(id, candidate.nom(), candidate.mdp_hash(), candidate.mail())
            .await?;

        if updated {
            Ok(())
        } else {
            Err(AppError::not_found(format!("user {id} not found")))
        }
    }

    /// Replace only the password.
    ///
    /// # Errors
    /// `AppError::InvalidInput` for a blank password, `AppError::NotFound`
    /// when no row matched.
    pub async fn update_mot_de_passe(&self, id: &str, mdp: &str) -> AppResult<()> {
        if mdp.trim().is_empty() {
            return Err(AppError::invalid_input("password cannot be blank"));
        }

        let hash = bcrypt::hash(mdp, bcrypt::DEFAULT_COST)?;
        if self.repo.update_mot_de_passe(id, &hash).await? {
            info!(id, "password updated");
            Ok(())
        } else {
            Err(AppError::not_found(format!("user {id} not found")))
        }
    }

    /// Remove a user.
    ///
    /// # Errors
    /// `AppError::NotFound` when the id is absent.
    pub async fn delete_utilisateur(&self, id: &str) -> AppResult<()> {
        if self.repo.delete_utilisateur(id).await? {
            info!(id, "user deleted");
            Ok(())
        } else {
            Err(AppError::not_found(format!("user {id} not found")))
        }
    }

    /// True iff a user with this mail exists and the password verifies.
    ///
    /// # Errors
    /// Propagates store faults.
    pub async fn authenticate(&self, mail: &str, mdp: &str) -> AppResult<bool> {
        self.repo.authenticate(mail, mdp).await
    }

    /// Fresh unique user id
    #[must_use]
    pub fn generate_new_id() -> String {
        Uuid::new_v4().to_string()
    }
}
