//! Routing metadata: controller and route descriptors.
//!
//! The engine never introspects handler types at runtime. Instead, each
//! controller is registered once at process start as a
//! [`ControllerRegistration`], a base path plus per-operation route
//! declarations, and the table builder flattens those into immutable
//! [`RouteDescriptor`] rows.

use http::Method;
use std::fmt;

/// Opaque identity of a controller's handler type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControllerId(String);

impl ControllerId {
    /// Creates a controller identity.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ControllerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A controller: a handler-type identity plus the base path prefix shared by
/// all of its routes.
///
/// Base paths are tolerated un-normalized; leading/trailing slashes are
/// handled during segment matching, while the controller-selection phase
/// compares the raw string as a literal prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerDescriptor {
    type_id: ControllerId,
    base_path: String,
}

impl ControllerDescriptor {
    /// Creates a controller descriptor.
    #[must_use]
    pub fn new(type_id: impl Into<ControllerId>, base_path: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            base_path: base_path.into(),
        }
    }

    /// Returns the handler-type identity.
    #[must_use]
    pub fn type_id(&self) -> &ControllerId {
        &self.type_id
    }

    /// Returns the base path prefix.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}

/// Where a bound parameter's value is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamSource {
    /// The request body, parsed as JSON.
    Body,
    /// The named query-string value.
    Query,
    /// The entire decoded form-field collection.
    Form,
    /// The named route capture, and nothing else.
    RouteCapture,
    /// No explicit source: route capture by name, else null.
    Implicit,
}

/// A declared handler parameter: its name and value source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDescriptor {
    name: String,
    source: ParamSource,
}

impl ParamDescriptor {
    /// Creates a parameter descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, source: ParamSource) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameter's value source.
    #[must_use]
    pub fn source(&self) -> ParamSource {
        self.source
    }
}

/// One (operation, verb) routing row in the built table.
///
/// A registration declaring several verbs for one operation produces one
/// descriptor per verb; the resolver filters by verb per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    type_id: ControllerId,
    verb: Method,
    sub_path: String,
    requires_auth: bool,
    params: Vec<ParamDescriptor>,
    operation_id: String,
}

impl RouteDescriptor {
    pub(crate) fn new(
        type_id: ControllerId,
        verb: Method,
        sub_path: String,
        requires_auth: bool,
        params: Vec<ParamDescriptor>,
        operation_id: String,
    ) -> Self {
        Self {
            type_id,
            verb,
            sub_path,
            requires_auth,
            params,
            operation_id,
        }
    }

    /// Returns the owning controller's identity.
    #[must_use]
    pub fn type_id(&self) -> &ControllerId {
        &self.type_id
    }

    /// Returns the HTTP verb this route answers.
    #[must_use]
    pub fn verb(&self) -> &Method {
        &self.verb
    }

    /// Returns the sub-path pattern, relative to the controller base path.
    #[must_use]
    pub fn sub_path(&self) -> &str {
        &self.sub_path
    }

    /// True if the route (or its controller) carries the authorization marker.
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    /// Returns the declared parameters, in declaration order.
    #[must_use]
    pub fn params(&self) -> &[ParamDescriptor] {
        &self.params
    }

    /// Returns the identity of the handler operation to invoke.
    #[must_use]
    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }
}

/// Declares one operation of a controller: verbs, sub-path, authorization
/// marker, and ordered parameter sources.
///
/// An operation that declares no verb yields no routing row.
#[derive(Debug, Clone)]
pub struct RouteRegistration {
    operation_id: String,
    verbs: Vec<Method>,
    sub_path: String,
    requires_auth: bool,
    params: Vec<ParamDescriptor>,
}

impl RouteRegistration {
    /// Creates a route declaration for the given operation and sub-path.
    #[must_use]
    pub fn new(operation_id: impl Into<String>, sub_path: impl Into<String>) -> Self {
        Self {
            operation_id: operation_id.into(),
            verbs: Vec::new(),
            sub_path: sub_path.into(),
            requires_auth: false,
            params: Vec::new(),
        }
    }

    /// Declares an HTTP verb for this operation.
    #[must_use]
    pub fn verb(mut self, verb: Method) -> Self {
        self.verbs.push(verb);
        self
    }

    /// Marks this operation as requiring authorization.
    #[must_use]
    pub fn authorize(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Declares the next positional parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, source: ParamSource) -> Self {
        self.params.push(ParamDescriptor::new(name, source));
        self
    }

    pub(crate) fn operation_id(&self) -> &str {
        &self.operation_id
    }

    pub(crate) fn verbs(&self) -> &[Method] {
        &self.verbs
    }

    pub(crate) fn sub_path(&self) -> &str {
        &self.sub_path
    }

    pub(crate) fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    pub(crate) fn params(&self) -> &[ParamDescriptor] {
        &self.params
    }
}

/// Declares a controller: its descriptor, an optional controller-level
/// authorization marker, and its route declarations.
///
/// # Example
///
/// ```rust
/// use hermes_router::{ControllerRegistration, RouteRegistration, ParamSource};
/// use http::Method;
///
/// let users = ControllerRegistration::new("users", "/api/user")
///     .route(RouteRegistration::new("listUsers", "").verb(Method::GET))
///     .route(
///         RouteRegistration::new("getUser", "/{id}")
///             .verb(Method::GET)
///             .param("id", ParamSource::Implicit),
///     );
/// # let _ = users;
/// ```
#[derive(Debug, Clone)]
pub struct ControllerRegistration {
    descriptor: ControllerDescriptor,
    requires_auth: bool,
    routes: Vec<RouteRegistration>,
}

impl ControllerRegistration {
    /// Creates a controller declaration.
    #[must_use]
    pub fn new(type_id: impl Into<ControllerId>, base_path: impl Into<String>) -> Self {
        Self {
            descriptor: ControllerDescriptor::new(type_id, base_path),
            requires_auth: false,
            routes: Vec::new(),
        }
    }

    /// Marks every route of this controller as requiring authorization.
    #[must_use]
    pub fn authorize(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Adds a route declaration.
    #[must_use]
    pub fn route(mut self, route: RouteRegistration) -> Self {
        self.routes.push(route);
        self
    }

    /// Returns the controller descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &ControllerDescriptor {
        &self.descriptor
    }

    pub(crate) fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    pub(crate) fn routes(&self) -> &[RouteRegistration] {
        &self.routes
    }
}
