//! Two-phase route resolution.
//!
//! Resolution selects the controller first (longest base-path prefix), then
//! the route (verb filter, then longest sub-path pattern that matches
//! segment-for-segment). Protected routes consult the [`AuthGate`] before a
//! match is returned, so a denied request never reaches parameter binding
//! or the handler.

use http::Method;
use tracing::{debug, trace};

use crate::captures::Captures;
use crate::descriptor::{ControllerDescriptor, RouteDescriptor};
use crate::table::RouteTable;

/// The authorization seam consulted for routes that require it.
///
/// Callers bind the gate to the inbound request before resolving; the
/// resolver only asks yes or no. Closures implement the trait directly:
///
/// ```rust
/// use hermes_router::AuthGate;
///
/// fn deny_all() -> impl AuthGate {
///     || false
/// }
/// # let _ = deny_all();
/// ```
pub trait AuthGate {
    /// Returns true if the current request is authorized.
    fn check(&self) -> bool;
}

impl<F: Fn() -> bool> AuthGate for F {
    fn check(&self) -> bool {
        self()
    }
}

/// A successful resolution: the controller, the route, and the values
/// captured from `{param}` segments of the combined pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRoute<'a> {
    /// The controller that owned the matched base path.
    pub controller: &'a ControllerDescriptor,
    /// The routing row that matched.
    pub route: &'a RouteDescriptor,
    /// Values bound to `{param}` segments.
    pub captures: Captures,
}

/// The outcome of one resolution call. Exactly one variant per call; there
/// are no partial results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome<'a> {
    /// A route matched (and passed its authorization gate, if any).
    Matched(MatchedRoute<'a>),
    /// A route matched but the authorization gate denied the request.
    Unauthorized,
    /// No controller or no route pattern matched.
    NotFound,
}

impl RouteTable {
    /// Resolves a (verb, path) pair against the table.
    ///
    /// Phase A picks the controller: candidates sorted by descending
    /// base-path length (stable, so registration order breaks ties), first
    /// whose base path is a case-sensitive literal prefix of `path` wins.
    ///
    /// Phase B picks the route: the controller's rows filtered by verb
    /// (case-insensitive), sorted by descending sub-path length (stable;
    /// registration order is the documented tie-break among equal-length
    /// patterns), first whose combined pattern matches every segment wins.
    ///
    /// The gate is consulted only when the accepted route requires
    /// authorization.
    #[must_use]
    pub fn resolve<'a>(
        &'a self,
        verb: &Method,
        path: &str,
        gate: &dyn AuthGate,
    ) -> ResolutionOutcome<'a> {
        let Some(controller) = self.match_controller(path) else {
            debug!(path, "no controller prefix matched");
            return ResolutionOutcome::NotFound;
        };

        debug!(
            path,
            controller = %controller.type_id(),
            base_path = controller.base_path(),
            "controller matched"
        );

        let mut candidates: Vec<&RouteDescriptor> = self
            .routes_for(controller.type_id())
            .filter(|r| r.verb().as_str().eq_ignore_ascii_case(verb.as_str()))
            .collect();
        candidates.sort_by(|a, b| b.sub_path().len().cmp(&a.sub_path().len()));

        for route in candidates {
            let pattern = format!("{}{}", controller.base_path(), route.sub_path());
            let Some(captures) = match_segments(&pattern, path) else {
                trace!(%pattern, path, "candidate rejected");
                continue;
            };

            if route.requires_auth() && !gate.check() {
                debug!(
                    operation = route.operation_id(),
                    "authorization gate denied request"
                );
                return ResolutionOutcome::Unauthorized;
            }

            debug!(
                operation = route.operation_id(),
                %pattern, "route matched"
            );
            return ResolutionOutcome::Matched(MatchedRoute {
                controller,
                route,
                captures,
            });
        }

        debug!(path, %verb, "no route pattern matched");
        ResolutionOutcome::NotFound
    }

    fn match_controller(&self, path: &str) -> Option<&ControllerDescriptor> {
        let mut candidates: Vec<&ControllerDescriptor> = self.controllers().iter().collect();
        candidates.sort_by(|a, b| b.base_path().len().cmp(&a.base_path().len()));

        candidates
            .into_iter()
            .find(|c| path.starts_with(c.base_path()))
    }
}

/// Matches a combined pattern against a request path, segment by segment.
///
/// Both sides are split on `/` after stripping leading/trailing slashes.
/// Segment counts must be equal. A `{name}` pattern segment captures the
/// request segment's literal value; any other segment must equal the
/// request segment case-insensitively.
fn match_segments(pattern: &str, path: &str) -> Option<Captures> {
    let pattern_segments: Vec<&str> = split_segments(pattern);
    let request_segments: Vec<&str> = split_segments(path);

    if pattern_segments.len() != request_segments.len() {
        return None;
    }

    let mut captures = Captures::new();

    for (pattern_seg, request_seg) in pattern_segments.iter().zip(&request_segments) {
        if let Some(name) = capture_name(pattern_seg) {
            captures.push(name, *request_seg);
        } else if !pattern_seg.eq_ignore_ascii_case(request_seg) {
            return None;
        }
    }

    Some(captures)
}

fn split_segments(path: &str) -> Vec<&str> {
    path.trim_matches('/').split('/').collect()
}

fn capture_name(segment: &str) -> Option<&str> {
    if segment.len() >= 2 && segment.starts_with('{') && segment.ends_with('}') {
        Some(&segment[1..segment.len() - 1])
    } else {
        None
    }
}
