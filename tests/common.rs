// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory store construction, seeding helpers, and quiet logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(dead_code)]

use std::sync::{Arc, Once};

use marche_server::{
    models::{Produit, Utilisateur},
    repositories::Store,
    routes::ServerResources,
    services::{
        CreateProduitRequest, CreateUtilisateurRequest, ProduitService, UtilisateurService,
    },
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// Fresh empty in-memory store
pub fn create_test_store() -> Arc<Store> {
    init_test_logging();
    Arc::new(Store::memory())
}

/// Services and router state over one shared in-memory store
pub fn create_test_resources() -> Arc<ServerResources> {
    Arc::new(ServerResources::new(create_test_store()))
}

/// Insert a product through the service and return it with its assigned id
pub async fn seed_produit(
    service: &ProduitService<Store>,
    nom: &str,
    categorie: &str,
    quantite: f64,
    unite: &str,
    prix: f64,
) -> Produit {
    service
        .create_produit(CreateProduitRequest {
            nom: nom.into(),
            categorie: categorie.into(),
            quantite,
            unite: unite.into(),
            prix,
        })
        .await
        .expect("seeding a valid product should succeed")
}

/// Insert a user through the service (password gets hashed on the way in)
pub async fn seed_utilisateur(
    service: &UtilisateurService<Store>,
    id: &str,
    nom: &str,
    mdp: &str,
    mail: &str,
) -> Utilisateur {
    service
        .create_utilisateur(CreateUtilisateurRequest {
            id: Some(id.into()),
            nom: nom.into(),
            mdp: mdp.into(),
            mail: mail.into(),
        })
        .await
        .expect("seeding a valid user should succeed")
}
