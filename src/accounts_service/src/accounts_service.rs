use accounts_adapters::{
    config::AllowedOrigins,
    http::{
        require_bearer_token,
        routes::{delete_user, get_user, list_users, login, register, update_user},
    },
};
use accounts_application::IdentityService;
use accounts_core::{CredentialManager, TokenIssuer, TokenVerifier, UserStore};
use axum::{
    Router,
    http::{HeaderValue, Method, request},
    middleware,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP resource for user accounts
pub struct AccountsService {
    router: Router,
}

impl AccountsService {
    /// Create a new AccountsService from its collaborators
    ///
    /// # Arguments
    /// * `user_store` - Store for user records (must be Clone)
    /// * `credential_manager` - Password hasher (must be Clone)
    /// * `token_issuer` - Issues tokens on login and verifies them on `GET /`
    ///
    /// Only `GET /` sits behind the bearer-token gate.
    pub fn new<U, C, T>(user_store: U, credential_manager: C, token_issuer: T) -> Self
    where
        U: UserStore + Clone + 'static,
        C: CredentialManager + Clone + 'static,
        T: TokenIssuer + TokenVerifier + Clone + 'static,
    {
        let service = IdentityService::new(user_store, credential_manager, token_issuer.clone());
        let bearer_gate = middleware::from_fn_with_state(token_issuer, require_bearer_token::<T>);

        let router = Router::new()
            .route(
                "/",
                get(list_users::<U, C, T>)
                    .route_layer(bearer_gate)
                    .post(register::<U, C, T>),
            )
            .route("/login", post(login::<U, C, T>))
            .route(
                "/{id}",
                get(get_user::<U, C, T>)
                    .put(update_user::<U, C, T>)
                    .delete(delete_user::<U, C, T>),
            )
            .with_state(service);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AccountsService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the accounts service as a standalone server
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Accounts service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
