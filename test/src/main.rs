//! Actix Permissions Demo Application
//!
//! A small fleet API whose routes declare `resource:action` permissions.

mod handlers;

use std::io;

use actix_web::{guard, web, App, HttpServer};

use actix_permissions::prelude::*;

/// Permission maps of the demo principals.
///
/// Unknown or anonymous callers get an empty map and are denied everywhere
/// a permission is required.
fn resolver() -> InMemoryPermissionResolver {
    InMemoryPermissionResolver::new()
        .with_subject(
            "dispatcher",
            PermissionMap::new()
                .with("cars", "read", true)
                .with("cars", "create", true)
                .with("drivers", "read", true)
                .with("drivers", "delete", false),
        )
        .with_subject(
            "mechanic",
            PermissionMap::new()
                .with("cars", "read", true)
                .with("cars", "create", false),
        )
        .with_subject(
            "admin",
            PermissionMap::new()
                .with("cars", "read", true)
                .with("cars", "create", true)
                .with("drivers", "read", true)
                .with("drivers", "delete", true),
        )
}

fn print_startup_info() {
    println!("=== Actix Permissions Demo ===");
    println!();
    println!("Server: http://127.0.0.1:8080");
    println!();
    println!("Principals (sent as the x-user header):");
    println!("  admin      - cars:read, cars:create, drivers:read, drivers:delete");
    println!("  dispatcher - cars:read, cars:create, drivers:read");
    println!("  mechanic   - cars:read");
    println!();
    println!("Routes:");
    println!("  GET    /health        - no permission");
    println!("  GET    /cars          - [middleware] cars:read");
    println!("  POST   /cars          - [middleware] cars:create");
    println!("  GET    /drivers       - #[permissions(\"drivers:read\")]");
    println!("  DELETE /drivers/{{id}}  - #[permissions(DRIVERS_DELETE)]");
    println!("  GET    /assignments   - #[permissions(\"cars:read\", \"drivers:read\")]");
    println!();
    println!("Examples:");
    println!("  curl -H 'x-user: mechanic' http://127.0.0.1:8080/cars");
    println!("  curl -H 'x-user: mechanic' http://127.0.0.1:8080/assignments   # 401");
    println!("  curl -H 'x-user: admin' -X DELETE http://127.0.0.1:8080/drivers/7");
    println!();
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let gate = PermissionGate::builder()
        .resolver(resolver())
        .config(GateConfig::new().realm("fleet"))
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    print_startup_info();
    log::info!("starting demo server on 127.0.0.1:8080");

    HttpServer::new(move || {
        App::new()
            .app_data(gate.clone())
            .wrap(CredentialsTransform::new(HeaderAuthenticator::new()))
            .service(handlers::public::health)
            .service(
                web::resource("/cars")
                    .guard(guard::Get())
                    .wrap(gate.require("cars:read"))
                    .route(web::get().to(handlers::cars::list_cars)),
            )
            .service(
                web::resource("/cars")
                    .guard(guard::Post())
                    .wrap(gate.require("cars:create"))
                    .route(web::post().to(handlers::cars::create_car)),
            )
            .service(handlers::drivers::list_drivers)
            .service(handlers::drivers::delete_driver)
            .service(handlers::assignments::assignments)
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await
}
