//! Route path constants and the navigation matcher.
//!
//! The table below is the single source of truth for the URL surface: it is
//! built once, immutable, and consulted in order with first-match-wins
//! semantics. Matching is plain segment comparison, no regex. `{id}` marks
//! the only dynamic segment; its value is percent-decoded and forwarded to
//! the view uninterpreted.

use std::collections::HashMap;

use percent_encoding::percent_decode_str;

pub const HEALTH: &str = "/health";
pub const TODO_LIST: &str = "/";
pub const TODO_DETAIL: &str = "/todo/{id}";
pub const TODO_EDIT: &str = "/todo/{id}/edit";

/// One entry of the navigation table.
#[derive(Debug, Clone, Copy)]
pub struct RouteDef {
    pub pattern: &'static str,
    pub name: &'static str,
}

pub const ROUTE_TABLE: &[RouteDef] = &[
    RouteDef { pattern: TODO_LIST, name: "list" },
    RouteDef { pattern: TODO_DETAIL, name: "detail" },
    RouteDef { pattern: TODO_EDIT, name: "edit" },
];

/// The view a path resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Detail { id: String },
    Edit { id: String },
    NotFound,
}

impl Route {
    /// View identifier as reported in responses.
    pub fn view(&self) -> &'static str {
        match self {
            Route::List => "list",
            Route::Detail { .. } => "detail",
            Route::Edit { .. } => "edit",
            Route::NotFound => "not_found",
        }
    }
}

/// Resolve a URL path against the route table.
///
/// Pure and synchronous: the same path always resolves to the same route.
/// Paths that match no entry resolve to [`Route::NotFound`].
pub fn resolve(path: &str) -> Route {
    for def in ROUTE_TABLE {
        if let Some(mut params) = match_pattern(def.pattern, path) {
            return match def.name {
                "list" => Route::List,
                "detail" => Route::Detail {
                    id: params.remove("id").unwrap_or_default(),
                },
                "edit" => Route::Edit {
                    id: params.remove("id").unwrap_or_default(),
                },
                _ => Route::NotFound,
            };
        }
    }
    Route::NotFound
}

/// Match a path against one pattern, returning captured parameters.
///
/// Segment counts must agree exactly, so `/todo/abc/` (three segments, the
/// last empty) does not match `/todo/{id}`. An empty segment in a parameter
/// position is a valid capture: `/todo/` yields `id == ""`.
fn match_pattern<'p>(pattern: &'p str, path: &str) -> Option<HashMap<&'p str, String>> {
    let pattern_segments = segments(pattern);
    let path_segments = segments(path);
    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (pat, seg) in pattern_segments.iter().zip(&path_segments) {
        match pat.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
            Some(name) => {
                let decoded = percent_decode_str(seg).decode_utf8_lossy().into_owned();
                params.insert(name, decoded);
            }
            None if pat != seg => return None,
            None => {}
        }
    }
    Some(params)
}

fn segments(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}
