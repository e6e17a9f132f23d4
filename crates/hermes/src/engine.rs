//! The request pipeline: CORS, resolution, binding, invocation, dispatch.

use std::sync::Arc;
use std::time::Duration;

use hermes_authn::{Authenticator, RequestAuthGate, SessionAuthenticator, SessionStore};
use hermes_config::EngineConfig;
use hermes_core::{HermesError, Request, Response};
use hermes_cors::{negotiate, CorsPolicy};
use hermes_extract::bind;
use hermes_router::{ControllerRegistration, ResolutionOutcome, RouteTable};
use http::StatusCode;
use tracing::debug;

use crate::dispatch::{normalize_output, status_only};
use crate::registry::HandlerRegistry;

/// The dispatch engine.
///
/// Owns the route table (built once at construction and never mutated), the
/// handler registry, the CORS policy, and the authentication collaborator.
/// `Engine` is `Send + Sync`; concurrent request tasks share one instance
/// without locking.
pub struct Engine {
    table: RouteTable,
    handlers: HandlerRegistry,
    cors: CorsPolicy,
    authenticator: Arc<dyn Authenticator>,
}

impl Engine {
    /// Creates a builder.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Runs one request through the pipeline.
    ///
    /// CORS is negotiated first and may short-circuit the whole request
    /// (preflight). Resolution failures are recovered locally into 404/401
    /// responses. Handler failures are not recovered: they propagate as
    /// [`HermesError::Handler`] and the surrounding server owns the 500.
    /// Every response the engine produces, short-circuits included, carries
    /// the CORS decision's headers.
    pub async fn handle(&self, request: &Request) -> Result<Response, HermesError> {
        let decision = negotiate(&self.cors, request);
        if let Some(response) = decision.short_circuit_response() {
            debug!(status = %response.status(), "preflight short-circuit");
            return Ok(response);
        }

        let gate = RequestAuthGate::new(request, self.authenticator.as_ref());
        let outcome = self
            .table
            .resolve(request.method(), request.path(), &gate);

        let mut response = match outcome {
            ResolutionOutcome::NotFound => status_only(StatusCode::NOT_FOUND),
            ResolutionOutcome::Unauthorized => status_only(StatusCode::UNAUTHORIZED),
            ResolutionOutcome::Matched(matched) => {
                let operation_id = matched.route.operation_id();
                let args = bind(matched.route, &matched.captures, request);

                let handler = self.handlers.get(operation_id).ok_or_else(|| {
                    HermesError::handler(
                        operation_id,
                        anyhow::anyhow!("no handler registered for operation"),
                    )
                })?;

                let output = handler(args)
                    .await
                    .map_err(|source| HermesError::handler(operation_id, source))?;
                normalize_output(output)
            }
        };

        decision.apply(&mut response);
        Ok(response)
    }

    /// Returns the route table the engine resolves against.
    #[must_use]
    pub fn route_table(&self) -> &RouteTable {
        &self.table
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("routes", &self.table.len())
            .field("handlers", &self.handlers)
            .finish_non_exhaustive()
    }
}

/// Builds an [`Engine`] from controller registrations, handlers, a CORS
/// policy, and an authenticator.
///
/// Without an explicit authenticator the engine uses a session
/// authenticator over a fresh, empty store, so protected routes deny until
/// the application wires its own collaborator.
#[derive(Default)]
pub struct EngineBuilder {
    registrations: Vec<ControllerRegistration>,
    handlers: HandlerRegistry,
    cors: Option<CorsPolicy>,
    authenticator: Option<Arc<dyn Authenticator>>,
    session_lifetime: Option<Duration>,
}

impl EngineBuilder {
    /// Registers a controller and its routes.
    #[must_use]
    pub fn controller(mut self, registration: ControllerRegistration) -> Self {
        self.registrations.push(registration);
        self
    }

    /// Registers the handler for an operation.
    #[must_use]
    pub fn handler(mut self, operation_id: impl Into<String>, handler: hermes_core::BoxHandler) -> Self {
        self.handlers.insert(operation_id, handler);
        self
    }

    /// Sets the CORS policy. Defaults to [`CorsPolicy::default`].
    #[must_use]
    pub fn cors_policy(mut self, policy: CorsPolicy) -> Self {
        self.cors = Some(policy);
        self
    }

    /// Sets the authentication collaborator.
    #[must_use]
    pub fn authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    /// Applies settings from a loaded [`EngineConfig`]: the CORS policy,
    /// plus (unless an authenticator is supplied) the session cookie name
    /// and lifetime of the default authenticator.
    #[must_use]
    pub fn with_config(mut self, config: &EngineConfig) -> Self {
        self.cors = Some(config.cors.clone());
        if self.authenticator.is_none() {
            let store = Arc::new(SessionStore::new(config.session.lifetime()));
            self.authenticator = Some(Arc::new(
                SessionAuthenticator::new(store).with_cookie_name(config.session.cookie_name.clone()),
            ));
        }
        self.session_lifetime = Some(config.session.lifetime());
        self
    }

    /// Builds the route table once and assembles the engine.
    #[must_use]
    pub fn build(self) -> Engine {
        let table = RouteTable::build(&self.registrations);
        debug!(routes = table.len(), "route table built");

        let authenticator = self.authenticator.unwrap_or_else(|| {
            let lifetime = self.session_lifetime.unwrap_or(Duration::from_secs(3600));
            Arc::new(SessionAuthenticator::new(Arc::new(SessionStore::new(lifetime))))
        });

        Engine {
            table,
            handlers: self.handlers,
            cors: self.cors.unwrap_or_default(),
            authenticator,
        }
    }
}

impl std::fmt::Debug for EngineBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineBuilder")
            .field("controllers", &self.registrations.len())
            .field("handlers", &self.handlers)
            .finish_non_exhaustive()
    }
}
