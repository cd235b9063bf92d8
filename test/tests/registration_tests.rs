//! Gate registration and configuration tests.


use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use serde_json::Value;

use actix_permissions::http::error::RegistrationError;
use actix_permissions::prelude::*;
use common::{echo_route, get_as, FLEET};

#[actix_web::test]
async fn test_build_without_resolver_fails() {
    let result = PermissionGate::builder().build();
    assert!(matches!(result, Err(RegistrationError::MissingResolver)));
}

#[actix_web::test]
async fn test_gate_config_from_json() {
    let config: GateConfig =
        serde_json::from_str(r#"{"realm": "fleet", "deny_message": "Access denied"}"#).unwrap();
    assert_eq!(config.get_realm(), Some("fleet"));
    assert_eq!(config.get_deny_message(), "Access denied");

    let config: GateConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.get_realm(), None);
    assert_eq!(config.get_deny_message(), "Unauthorized");
}

#[actix_web::test]
async fn test_deny_carries_realm_and_message() {
    let gate = PermissionGate::builder()
        .resolver(StaticPermissionResolver::new(FLEET.clone()))
        .config(GateConfig::new().realm("fleet").deny_message("Access denied"))
        .build()
        .expect("gate with resolver");

    let app = test::init_service(
        App::new()
            .wrap(CredentialsTransform::new(HeaderAuthenticator::new()))
            .service(
                web::resource("/drivers")
                    .wrap(gate.require("drivers:delete"))
                    .route(web::get().to(echo_route)),
            ),
    )
    .await;

    let resp = get_as(&app, "/drivers", "dispatcher").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer realm=\"fleet\""
    );

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Access denied");
}

#[actix_web::test]
async fn test_deny_without_realm_has_no_challenge() {
    let app = common::create_test_app().await;

    let resp = get_as(&app, "/cars/create", "dispatcher").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().get(header::WWW_AUTHENTICATE).is_none());
}

#[actix_web::test]
async fn test_one_resolver_shared_by_two_gates() {
    let resolver: std::sync::Arc<dyn PermissionResolver> =
        std::sync::Arc::new(StaticPermissionResolver::new(FLEET.clone()));

    let strict = PermissionGate::builder()
        .resolver_arc(resolver.clone())
        .config(GateConfig::new().realm("strict"))
        .build()
        .expect("strict gate");
    let lenient = PermissionGate::builder()
        .resolver_arc(resolver)
        .build()
        .expect("lenient gate");

    let app = test::init_service(
        App::new()
            .service(
                web::resource("/strict")
                    .wrap(strict.require("cars:create"))
                    .route(web::get().to(echo_route)),
            )
            .service(
                web::resource("/lenient")
                    .wrap(lenient.require("cars:read"))
                    .route(web::get().to(echo_route)),
            ),
    )
    .await;

    let resp = get_as(&app, "/strict", "dispatcher").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer realm=\"strict\""
    );

    let resp = get_as(&app, "/lenient", "dispatcher").await;
    assert_eq!(resp.status(), StatusCode::OK);
}
