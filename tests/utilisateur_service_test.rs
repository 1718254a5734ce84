// ABOUTME: Integration tests for the user account service
// ABOUTME: Covers uniqueness checks, credential verification, and redaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0

mod common;

use marche_server::{
    errors::AppError,
    repositories::{Store, UtilisateurRepository},
    services::{CreateUtilisateurRequest, UpdateUtilisateurRequest, UtilisateurService},
};
use std::sync::Arc;

fn create_service() -> (UtilisateurService<Store>, Arc<Store>) {
    let store = common::create_test_store();
    (UtilisateurService::new(Arc::clone(&store)), store)
}

#[tokio::test]
async fn create_then_authenticate_with_exact_credentials() {
    let (service, _store) = create_service();
    common::seed_utilisateur(&service, "u1", "Marie", "tracteur-vert", "marie@ferme.fr").await;

    assert!(service
        .authenticate("marie@ferme.fr", "tracteur-vert")
        .await
        .unwrap());
    assert!(!service
        .authenticate("marie@ferme.fr", "tracteur-bleu")
        .await
        .unwrap());
    assert!(!service
        .authenticate("inconnu@ferme.fr", "tracteur-vert")
        .await
        .unwrap());
}

#[tokio::test]
async fn password_is_stored_as_a_hash_not_plain_text() {
    let (service, store) = create_service();
    common::seed_utilisateur(&service, "u1", "Marie", "tracteur-vert", "marie@ferme.fr").await;

    let stored = store.get_utilisateur("u1").await.unwrap().unwrap();
    assert_ne!(stored.mdp_hash(), "tracteur-vert");
    assert!(stored.mdp_hash().starts_with("$2"));
}

#[tokio::test]
async fn password_change_flips_which_password_authenticates() {
    let (service, _store) = create_service();
    common::seed_utilisateur(&service, "u1", "Marie", "ancien-mdp", "marie@ferme.fr").await;

    service
        .update_mot_de_passe("u1", "nouveau-mdp")
        .await
        .unwrap();

    assert!(service
        .authenticate("marie@ferme.fr", "nouveau-mdp")
        .await
        .unwrap());
    assert!(!service
        .authenticate("marie@ferme.fr", "ancien-mdp")
        .await
        .unwrap());
}

#[tokio::test]
async fn blank_password_update_is_rejected() {
    let (service, _store) = create_service();
    common::seed_utilisateur(&service, "u1", "Marie", "mdp", "marie@ferme.fr").await;

    let result = service.update_mot_de_passe("u1", "   ").await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));

    let absent = service.update_mot_de_passe("u2", "valide").await;
    assert!(matches!(absent, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn duplicate_mail_is_rejected_even_with_valid_fields() {
    let (service, _store) = create_service();
    common::seed_utilisateur(&service, "u1", "Marie", "mdp-un", "marie@ferme.fr").await;

    let result = service
        .create_utilisateur(CreateUtilisateurRequest {
            id: Some("u2".into()),
            nom: "Paul".into(),
            mdp: "mdp-deux".into(),
            mail: "marie@ferme.fr".into(),
        })
        .await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn duplicate_id_is_rejected_even_with_valid_fields() {
    let (service, _store) = create_service();
    common::seed_utilisateur(&service, "u1", "Marie", "mdp-un", "marie@ferme.fr").await;

    let result = service
        .create_utilisateur(CreateUtilisateurRequest {
            id: Some("u1".into()),
            nom: "Paul".into(),
            mdp: "mdp-deux".into(),
            mail: "paul@ferme.fr".into(),
        })
        .await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn blank_or_malformed_fields_are_rejected() {
    let (service, _store) = create_service();

    let blank_id = service
        .create_utilisateur(CreateUtilisateurRequest {
            id: Some("  ".into()),
            nom: "Marie".into(),
            mdp: "mdp".into(),
            mail: "marie@ferme.fr".into(),
        })
        .await;
    assert!(matches!(blank_id, Err(AppError::InvalidInput(_))));

    let blank_password = service
        .create_utilisateur(CreateUtilisateurRequest {
            id: Some("u1".into()),
            nom: "Marie".into(),
            mdp: " ".into(),
            mail: "marie@ferme.fr".into(),
        })
        .await;
    assert!(matches!(blank_password, Err(AppError::InvalidInput(_))));

    let bad_mail = service
        .create_utilisateur(CreateUtilisateurRequest {
            id: Some("u1".into()),
            nom: "Marie".into(),
            mdp: "mdp".into(),
            mail: "marie-ferme.fr".into(),
        })
        .await;
    assert!(matches!(bad_mail, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn missing_id_is_filled_with_a_generated_unique_one() {
    let (service, _store) = create_service();

    let created = service
        .create_utilisateur(CreateUtilisateurRequest {
            id: None,
            nom: "Marie".into(),
            mdp: "mdp".into(),
            mail: "marie@ferme.fr".into(),
        })
        .await
        .unwrap();

    assert!(!created.id().is_empty());
    assert_ne!(
        UtilisateurService::<Store>::generate_new_id(),
        UtilisateurService::<Store>::generate_new_id()
    );
}

#[tokio::test]
async fn public_listing_withholds_password_and_mail() {
    let (service, _store) = create_service();
    common::seed_utilisateur(&service, "u1", "Marie", "mdp", "marie@ferme.fr").await;

    let views = service.all_utilisateurs_public().await.unwrap();
    assert_eq!(views.len(), 1);

    let json = serde_json::to_value(&views).unwrap();
    assert_eq!(json[0]["id"], "u1");
    assert_eq!(json[0]["nom"], "Marie");
    assert!(json[0].get("mail").is_none());
    assert!(json[0].get("mdp").is_none());
}

#[tokio::test]
async fn update_with_disagreeing_body_id_is_rejected() {
    let (service, _store) = create_service();
    common::seed_utilisateur(&service, "u1", "Marie", "mdp", "marie@ferme.fr").await;

    let result = service
        .update_utilisateur(
            "u1",
            UpdateUtilisateurRequest {
                id: Some("u2".into()),
                nom: "Marie".into(),
                mdp: "mdp".into(),
                mail: "marie@ferme.fr".into(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn update_cannot_take_another_users_mail() {
    let (service, store) = create_service();
    common::seed_utilisateur(&service, "u1", "Marie", "mdp-un", "marie@ferme.fr").await;
    common::seed_utilisateur(&service, "u2", "Paul", "mdp-deux", "paul@ferme.fr").await;

    let result = service
        .update_utilisateur(
            "u2",
            UpdateUtilisateurRequest {
                id: None,
                nom: "Paul".into(),
                mdp: "mdp-deux".into(),
                mail: "marie@ferme.fr".into(),
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));

    let untouched = store.get_utilisateur("u2").await.unwrap().unwrap();
    assert_eq!(untouched.mail(), "paul@ferme.fr");

    // Keeping one's own mail through a full update is still allowed.
    service
        .update_utilisateur(
            "u2",
            UpdateUtilisateurRequest {
                id: None,
                nom: "Paul Martin".into(),
                mdp: "mdp-trois".into(),
                mail: "paul@ferme.fr".into(),
            },
        )
        .await
        .unwrap();

    let updated = store.get_utilisateur("u2").await.unwrap().unwrap();
    assert_eq!(updated.nom(), "Paul Martin");
}

#[tokio::test]
async fn full_update_rehashes_the_password() {
    let (service, store) = create_service();
    common::seed_utilisateur(&service, "u1", "Marie", "ancien-mdp", "marie@ferme.fr").await;

    service
        .update_utilisateur(
            "u1",
            UpdateUtilisateurRequest {
                id: None,
                nom: "Marie Dupont".into(),
                mdp: "nouveau-mdp".into(),
                mail: "marie.dupont@ferme.fr".into(),
            },
        )
        .await
        .unwrap();

    let stored = store.get_utilisateur("u1").await.unwrap().unwrap();
    assert_eq!(stored.nom(), "Marie Dupont");
    assert_eq!(stored.mail(), "marie.dupont@ferme.fr");
    assert!(service
        .authenticate("marie.dupont@ferme.fr", "nouveau-mdp")
        .await
        .unwrap());
}

#[tokio::test]
async fn delete_semantics_absent_then_present() {
    let (service, store) = create_service();

    let absent = service.delete_utilisateur("u1").await;
    assert!(matches!(absent, Err(AppError::NotFound(_))));

    common::seed_utilisateur(&service, "u1", "Marie", "mdp", "marie@ferme.fr").await;
    assert_eq!(store.count_utilisateurs_with_id("u1").await.unwrap(), 1);

    service.delete_utilisateur("u1").await.unwrap();
    assert_eq!(store.count_utilisateurs_with_id("u1").await.unwrap(), 0);

    let gone = service.get_utilisateur("u1").await;
    assert!(matches!(gone, Err(AppError::NotFound(_))));
}
