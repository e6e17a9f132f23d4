//! Route table construction.
//!
//! [`RouteTable::build`] flattens controller registrations into immutable
//! routing rows. It is a pure function of the registrations and performs no
//! I/O, so it can run once at process start and be shared across requests;
//! rebuilding it per request is the dominant cost of resolution and caching
//! it is a behavior-neutral optimization.

use crate::descriptor::{ControllerDescriptor, ControllerId, ControllerRegistration, RouteDescriptor};

/// The immutable set of controllers and routing rows the resolver works on.
///
/// Controllers and routes keep their registration order; the resolver's
/// sorts are stable, so registration order is the tie-break among patterns
/// of equal length.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    controllers: Vec<ControllerDescriptor>,
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    /// Builds the table from controller registrations.
    ///
    /// Each declared (operation, verb) pair becomes one routing row; an
    /// operation with no declared verb produces none. A route requires
    /// authorization if the operation or its controller carries the marker.
    #[must_use]
    pub fn build(registrations: &[ControllerRegistration]) -> Self {
        let mut controllers = Vec::with_capacity(registrations.len());
        let mut routes = Vec::new();

        for registration in registrations {
            let descriptor = registration.descriptor().clone();

            for route in registration.routes() {
                let requires_auth = route.requires_auth() || registration.requires_auth();
                for verb in route.verbs() {
                    routes.push(RouteDescriptor::new(
                        descriptor.type_id().clone(),
                        verb.clone(),
                        route.sub_path().to_string(),
                        requires_auth,
                        route.params().to_vec(),
                        route.operation_id().to_string(),
                    ));
                }
            }

            controllers.push(descriptor);
        }

        Self {
            controllers,
            routes,
        }
    }

    /// Returns the registered controllers, in registration order.
    #[must_use]
    pub fn controllers(&self) -> &[ControllerDescriptor] {
        &self.controllers
    }

    /// Returns the routing rows belonging to one controller.
    pub fn routes_for<'a>(
        &'a self,
        type_id: &ControllerId,
    ) -> impl Iterator<Item = &'a RouteDescriptor> + 'a {
        let type_id = type_id.clone();
        self.routes.iter().filter(move |r| *r.type_id() == type_id)
    }

    /// Returns the number of routing rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no routes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
