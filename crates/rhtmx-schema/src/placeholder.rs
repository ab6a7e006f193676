//! Placeholder extraction and pattern compilation
//!
//! A mask is made of literal text and `{name}` placeholders, where `name`
//! is one or more of `[A-Za-z0-9-_]`. Compiling a mask replaces every
//! placeholder with a named capture matching one path component and
//! collects the metadata of each placeholder along the way.
//!
//! ```
//! use rhtmx_schema::placeholder::compile;
//! use std::collections::BTreeMap;
//!
//! let compiled = compile("/users/{id}", &BTreeMap::new()).unwrap();
//! assert_eq!(compiled.pattern, "^/users/(?P<id>[^/]+)/?$");
//! assert!(compiled.parameters.contains_key("id"));
//! ```

use crate::descriptor::{DeclaredParameter, ParameterType};
use crate::endpoint::ParameterMeta;
use crate::error::{Result, SchemaCompilationError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([a-zA-Z0-9\-_]+)\}").expect("placeholder grammar is a valid regex")
});

/// A piece of a mask, in mask order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskSegment<'a> {
    /// Text copied into the pattern as-is
    Literal(&'a str),
    /// Placeholder name, without braces
    Placeholder(&'a str),
}

/// Result of compiling one mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledMask {
    pub pattern: String,
    pub parameters: BTreeMap<String, ParameterMeta>,
}

/// Splits a mask into literal and placeholder segments
///
/// Fails when a literal segment still contains `{` or `}`, i.e. the mask has
/// unbalanced braces or a placeholder name with illegal characters.
///
/// # Examples
///
/// ```
/// use rhtmx_schema::placeholder::{parse_mask, MaskSegment};
///
/// let segments = parse_mask("/users/{id}/posts").unwrap();
/// assert_eq!(segments, vec![
///     MaskSegment::Literal("/users/"),
///     MaskSegment::Placeholder("id"),
///     MaskSegment::Literal("/posts"),
/// ]);
///
/// assert!(parse_mask("/users/{user id}").is_err());
/// ```
pub fn parse_mask(mask: &str) -> Result<Vec<MaskSegment<'_>>> {
    let init: (Vec<MaskSegment<'_>>, usize) = (Vec::new(), 0);
    let (mut segments, tail) =
        PLACEHOLDER_REGEX
            .find_iter(mask)
            .try_fold(init, |(mut segments, last), token| {
                push_literal(&mut segments, mask, &mask[last..token.start()])?;
                // Every match is `{name}`, so the name sits between the braces
                let name = &mask[token.start() + 1..token.end() - 1];
                segments.push(MaskSegment::Placeholder(name));
                Ok::<_, SchemaCompilationError>((segments, token.end()))
            })?;

    push_literal(&mut segments, mask, &mask[tail..])?;
    Ok(segments)
}

fn push_literal<'a>(
    segments: &mut Vec<MaskSegment<'a>>,
    mask: &str,
    literal: &'a str,
) -> Result<()> {
    if let Some(brace) = literal.chars().find(|&c| matches!(c, '{' | '}')) {
        return Err(SchemaCompilationError::MalformedPlaceholder {
            mask: mask.to_string(),
            detail: format!(
                "stray `{}` in `{}` (placeholders are `{{name}}` with name in [A-Za-z0-9-_])",
                brace, literal
            ),
        });
    }

    if !literal.is_empty() {
        segments.push(MaskSegment::Literal(literal));
    }
    Ok(())
}

/// Named capture matching one non-empty path component
pub fn capture_fragment(group: &str) -> String {
    format!("(?P<{}>[^/]+)", group)
}

/// Whether `name` can be used as a capture group name as-is
pub fn is_capture_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Capture group name for a placeholder
///
/// Valid names are used unchanged. Otherwise `-` becomes `_`, a leading
/// digit gets a `_` prefix, and a numeric suffix is added until the result
/// is not in `taken`.
///
/// # Examples
///
/// ```
/// use rhtmx_schema::placeholder::capture_group_name;
/// use std::collections::BTreeSet;
///
/// let taken = BTreeSet::from(["user_id".to_string()]);
/// assert_eq!(capture_group_name("id", &taken), "id");
/// assert_eq!(capture_group_name("1", &taken), "_1");
/// assert_eq!(capture_group_name("user-id", &taken), "user_id_1");
/// ```
pub fn capture_group_name(name: &str, taken: &BTreeSet<String>) -> String {
    if is_capture_name(name) {
        return name.to_string();
    }

    let sanitized: String = name
        .chars()
        .map(|c| if c == '-' { '_' } else { c })
        .collect();
    let base = if is_capture_name(&sanitized) {
        sanitized
    } else {
        format!("_{}", sanitized)
    };

    std::iter::once(base.clone())
        .chain((1..).map(|n| format!("{}_{}", base, n)))
        .find(|group| !taken.contains(group))
        .unwrap_or(base)
}

/// Anchors a pattern body: match from the start, allow one trailing `/`,
/// then require end of input
pub fn anchor(body: &str) -> String {
    format!("^{}/?$", body)
}

/// Compiles a mask, typing undeclared placeholders as [`ParameterType::Scalar`]
pub fn compile(
    mask: &str,
    declared: &BTreeMap<String, DeclaredParameter>,
) -> Result<CompiledMask> {
    compile_with_default(mask, declared, ParameterType::default())
}

/// Compiles a mask into its pattern and per-placeholder metadata
///
/// Placeholders found in `declared` take type and description from there;
/// the rest get `default_type` and no description. Declarations without a
/// placeholder are ignored. A name used twice keeps both captures in the
/// pattern and a single metadata entry, from its last occurrence.
///
/// Names that are not valid capture group names get a substitute group,
/// recorded in [`ParameterMeta::group`], so the pattern stays a valid
/// regular expression.
pub fn compile_with_default(
    mask: &str,
    declared: &BTreeMap<String, DeclaredParameter>,
    default_type: ParameterType,
) -> Result<CompiledMask> {
    let segments = parse_mask(mask)?;

    // Substitute groups must not shadow names that are used as-is
    let taken: BTreeSet<String> = segments
        .iter()
        .filter_map(|segment| match segment {
            MaskSegment::Placeholder(name) if is_capture_name(name) => Some(name.to_string()),
            _ => None,
        })
        .collect();

    let (body, parameters, _) = segments.into_iter().fold(
        (String::with_capacity(mask.len() * 2), BTreeMap::<String, ParameterMeta>::new(), taken),
        |(mut body, mut parameters, mut taken), segment| {
            match segment {
                MaskSegment::Literal(text) => body.push_str(text),
                MaskSegment::Placeholder(name) => {
                    let group = match parameters.get(name) {
                        Some(ParameterMeta { group, .. }) => group.clone(),
                        None => capture_group_name(name, &taken),
                    };
                    taken.insert(group.clone());

                    let meta = ParameterMeta::new(name, group, declared.get(name), default_type);
                    body.push_str(&meta.pattern);
                    parameters.insert(name.to_string(), meta);
                }
            }
            (body, parameters, taken)
        },
    );

    Ok(CompiledMask {
        pattern: anchor(&body),
        parameters,
    })
}
