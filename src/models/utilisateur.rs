// ABOUTME: Utilisateur entity and its redacted client view
// ABOUTME: Stores a bcrypt password hash, never the raw password
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Serialize;

use crate::errors::{AppError, AppResult};

/// A user account.
///
/// The `mdp` field always holds a bcrypt hash; raw passwords are hashed by the
/// service before an instance is built. The hash is excluded from
/// serialization so no response can leak it.
#[derive(Debug, Clone, Serialize)]
pub struct Utilisateur {
    /// Caller-supplied identifier, unique
    id: String,
    /// Display name
    nom: String,
    /// Bcrypt hash of the password
    #[serde(skip_serializing)]
    mdp: String,
    /// Email address, unique
    mail: String,
}

impl Utilisateur {
    /// Build a validated user from an already-hashed password.
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` when `id`, `nom` or the hash is blank,
    /// or when `mail` does not have a `local@domain.tld` shape.
    pub fn new(
        id: impl Into<String>,
        nom: impl Into<String>,
        mdp_hash: impl Into<String>,
        mail: impl Into<String>,
    ) -> AppResult<Self> {
        let id = id.into();
        let nom = nom.into();
        let mdp = mdp_hash.into();
        let mail = mail.into();

        if id.trim().is_empty() {
            return Err(AppError::invalid_input("user id cannot be blank"));
        }
        if nom.trim().is_empty() {
            return Err(AppError::invalid_input("user name cannot be blank"));
        }
        if mdp.trim().is_empty() {
            return Err(AppError::invalid_input("password cannot be blank"));
        }
        if !is_valid_mail(&mail) {
            return Err(AppError::invalid_input("mail address is not valid"));
        }

        Ok(Self { id, nom, mdp, mail })
    }

    /// Rebuild a user from a persisted row, bypassing validation.
    pub(crate) fn from_stored(id: String, nom: String, mdp: String, mail: String) -> Self {
        Self { id, nom, mdp, mail }
    }

    /// Unique identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    #[must_use]
    pub fn nom(&self) -> &str {
        &self.nom
    }

    /// Bcrypt hash of the password
    #[must_use]
    pub fn mdp_hash(&self) -> &str {
        &self.mdp
    }

    /// Email address
    #[must_use]
    pub fn mail(&self) -> &str {
        &self.mail
    }

    /// Redacted view carrying only what list/detail endpoints expose
    #[must_use]
    pub fn to_view(&self) -> UtilisateurView {
        UtilisateurView {
            id: self.id.clone(),
            nom: self.nom.clone(),
        }
    }
}

/// Client-safe projection of a user: password and mail withheld
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UtilisateurView {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub nom: String,
}

/// Basic `local@domain.tld` shape check.
///
/// Matches the source's intent (a sanity check, not RFC 5322): non-empty local
/// part, non-empty domain with at least one dot not at either edge.
#[must_use]
pub fn is_valid_mail(mail: &str) -> bool {
    let Some((local, domain)) = mail.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
