//! Template substitution and its inverse.

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use tracing::{debug, trace};

use crate::domain::RouteError;
use crate::domain::routes::{PathParam, PathParams, RoutePattern, Segment};

/// Characters escaped in a substituted value. `:` and `@` stay literal so GAV
/// coordinates and entity paths read the same as in shared links.
const PATH_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode `value` so it occupies exactly one path segment.
pub fn encode_path_value(value: &str) -> String {
    utf8_percent_encode(value, PATH_VALUE).to_string()
}

/// Instantiate `pattern` with `params`.
///
/// Values are percent-encoded so they always occupy exactly one segment.
/// An absent optional placeholder is dropped together with its separator;
/// it may not be followed by a present one.
pub fn generate_path(pattern: RoutePattern, params: &PathParams) -> Result<String, RouteError> {
    let template = pattern.template();
    let mut path = String::with_capacity(template.len());
    let mut skipped: Option<PathParam> = None;

    for segment in pattern.segments() {
        match segment {
            Segment::Literal(literal) => {
                path.push('/');
                path.push_str(literal);
            }
            Segment::Placeholder { param, optional } => {
                match params.get(param).filter(|value| !value.is_empty()) {
                    Some(value) => {
                        if let Some(missing) = skipped {
                            return Err(RouteError::invalid_argument(format!(
                                "'{}' cannot be set without '{}' in route template '{}'",
                                param, missing, template
                            )));
                        }
                        path.push('/');
                        path.push_str(&encode_path_value(value));
                    }
                    None if optional => {
                        if skipped.is_none() {
                            skipped = Some(param);
                        }
                    }
                    None => return Err(RouteError::MissingParameter { param, template }),
                }
            }
        }
    }

    if pattern.has_trailing_slash() || path.is_empty() {
        path.push('/');
    }

    debug!(route = %pattern, %path, "generated route path");
    Ok(path)
}

/// Match `path` against a single template, decoding captured values.
///
/// Returns `Ok(None)` when the path has a different shape. A single trailing
/// slash is accepted whether or not the template has one.
pub fn match_path(pattern: RoutePattern, path: &str) -> Result<Option<PathParams>, RouteError> {
    let Some(body) = path.strip_prefix('/') else {
        return Ok(None);
    };
    let body = body.strip_suffix('/').unwrap_or(body);
    let parts: Vec<&str> = if body.is_empty() { Vec::new() } else { body.split('/').collect() };

    let segments = pattern.segments();
    if parts.len() > segments.len() {
        return Ok(None);
    }

    let mut params = PathParams::new();
    for (index, segment) in segments.into_iter().enumerate() {
        let part = parts.get(index).copied();
        match (segment, part) {
            (Segment::Literal(literal), Some(part)) if literal == part => {}
            (Segment::Literal(_), _) => return Ok(None),
            (Segment::Placeholder { param, .. }, Some(part)) if !part.is_empty() => {
                let value = percent_decode_str(part)
                    .decode_utf8()
                    .map_err(|_| RouteError::InvalidEncoding { segment: part.to_string() })?;
                params.set(param, value.into_owned());
            }
            (Segment::Placeholder { optional: true, .. }, None) => {}
            (Segment::Placeholder { .. }, _) => return Ok(None),
        }
    }

    trace!(route = %pattern, path, "matched route path");
    Ok(Some(params))
}

/// Find the route a concrete path belongs to.
///
/// When several templates accept the path, the one with more literal
/// segments wins, so `/view/archive/...` resolves to the archive routes.
pub fn match_route(path: &str) -> Result<Option<(RoutePattern, PathParams)>, RouteError> {
    let mut candidates = RoutePattern::ALL;
    candidates.sort_by_key(|pattern| std::cmp::Reverse(pattern.specificity()));

    for pattern in candidates {
        if let Some(params) = match_path(pattern, path)? {
            return Ok(Some((pattern, params)));
        }
    }
    Ok(None)
}
