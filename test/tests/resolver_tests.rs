//! Resolver tests.
//!
//! Per-principal maps, failing resolvers and the resolver call count.


use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::dev::ServiceRequest;
use actix_web::http::StatusCode;
use actix_web::{test, web, App, HttpResponse};
use serde_json::Value;

use actix_permissions::prelude::*;
use common::{call_raw, echo_route, get_as};

fn per_subject_gate() -> PermissionGate {
    let resolver = InMemoryPermissionResolver::new()
        .with_subject("dispatcher", PermissionMap::new().with("cars", "create", true))
        .with_subject("mechanic", PermissionMap::new().with("cars", "create", false))
        .fallback(PermissionMap::new().with("cars", "read", true));

    PermissionGate::builder()
        .resolver(resolver)
        .build()
        .expect("gate with resolver")
}

#[actix_web::test]
async fn test_in_memory_resolver_per_subject() {
    let gate = per_subject_gate();
    let app = test::init_service(
        App::new()
            .wrap(CredentialsTransform::new(HeaderAuthenticator::new()))
            .service(
                web::resource("/cars")
                    .wrap(gate.require("cars:create"))
                    .route(web::post().to(echo_route)),
            ),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/cars")
        .insert_header(("x-user", "dispatcher"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/cars")
        .insert_header(("x-user", "mechanic"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_anonymous_request_gets_fallback_map() {
    let gate = per_subject_gate();
    let app = test::init_service(
        App::new()
            .wrap(CredentialsTransform::new(HeaderAuthenticator::new()))
            .service(
                web::resource("/cars")
                    .wrap(gate.require("cars:read"))
                    .route(web::get().to(echo_route)),
            ),
    )
    .await;

    let req = test::TestRequest::get().uri("/cars").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Known subjects do not fall back
    let resp = get_as(&app, "/cars", "mechanic").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_failing_resolver_does_not_reach_handler() {
    let handler_calls = Arc::new(AtomicUsize::new(0));

    let gate = PermissionGate::new(resolver_fn(|_credentials: Option<Credentials>| async {
        Err::<PermissionMap, _>(ResolveError::new("permission store unavailable"))
    }));

    let calls = handler_calls.clone();
    let app = test::init_service(
        App::new().service(
            web::resource("/cars")
                .wrap(gate.require("cars:read"))
                .route(web::get().to(move || {
                    let calls = calls.clone();
                    async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        HttpResponse::Ok().finish()
                    }
                })),
        ),
    )
    .await;

    let req = test::TestRequest::get().uri("/cars").to_request();
    let (status, body) = call_raw(&app, req).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(
        body["message"],
        "permission resolver failed: permission store unavailable"
    );
    assert_eq!(handler_calls.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn test_unrestricted_route_skips_resolver() {
    let resolver_calls = Arc::new(AtomicUsize::new(0));

    let calls = resolver_calls.clone();
    let gate = PermissionGate::new(resolver_fn(move |_credentials: Option<Credentials>| {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Ok::<_, ResolveError>(PermissionMap::new()) }
    }));

    let app = test::init_service(
        App::new()
            .service(
                web::resource("/open")
                    .wrap(gate.require(Vec::<&str>::new()))
                    .route(web::get().to(echo_route)),
            )
            .service(
                web::resource("/cars")
                    .wrap(gate.require("cars:read"))
                    .route(web::get().to(echo_route)),
            ),
    )
    .await;

    let req = test::TestRequest::get().uri("/open").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resolver_calls.load(Ordering::SeqCst), 0);

    let req = test::TestRequest::get().uri("/cars").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resolver_calls.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn test_resolver_sees_credentials() {
    let gate = PermissionGate::new(resolver_fn(|credentials: Option<Credentials>| async move {
        let mut map = PermissionMap::new();
        let fleet = credentials
            .as_ref()
            .and_then(|c| c.attribute("fleet"))
            .and_then(Value::as_str)
            .map(str::to_string);
        if fleet.as_deref() == Some("north") {
            map.grant("cars", "read");
        }
        Ok::<_, ResolveError>(map)
    }));

    let authenticator = |req: &ServiceRequest| -> Option<Credentials> {
        let subject = req.headers().get("x-user")?.to_str().ok()?;
        let fleet = req.headers().get("x-fleet")?.to_str().ok()?;
        Some(Credentials::new(subject).with_attribute("fleet", fleet))
    };

    let app = test::init_service(
        App::new()
            .wrap(CredentialsTransform::new(authenticator))
            .service(
                web::resource("/cars")
                    .wrap(gate.require("cars:read"))
                    .route(web::get().to(echo_route)),
            ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/cars")
        .insert_header(("x-user", "alice"))
        .insert_header(("x-fleet", "north"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/cars")
        .insert_header(("x-user", "bob"))
        .insert_header(("x-fleet", "south"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
