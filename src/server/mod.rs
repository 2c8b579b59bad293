//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use crate::domain::records::UserRecordService;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{
    add_user, add_user_form, delete_user, edit_user, edit_user_form, index, list_users,
};
use crate::outbound::persistence::{ConnectionProvisioner, DieselUserStore};

pub(crate) fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .service(index)
        .service(list_users)
        .service(add_user_form)
        .service(add_user)
        .service(edit_user_form)
        .service(edit_user)
        .service(delete_user)
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// The store configuration travels by value into the provisioner here; no
/// component reads it from ambient state afterwards.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, store } = config;
    let records = UserRecordService::new(Arc::new(DieselUserStore::new(
        ConnectionProvisioner::new(store),
    )));
    let state = web::Data::new(HttpState::new(records));

    let server = HttpServer::new(move || build_app(state.clone()))
        .bind(bind_addr)?
        .run();
    Ok(server)
}
