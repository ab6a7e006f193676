//! Matching concrete paths against a compiled endpoint
//!
//! A [`PatternMatcher`] checks one path against one mask and extracts the
//! placeholder values by name. It is not a router: there is no lookup
//! across endpoints.
//!
//! Captures are positional internally, so placeholder names that are not
//! valid regex group names (`user-id`) and names used twice in one mask
//! both work. For a repeated name the last occurrence's value wins, the same
//! way its metadata does.

use crate::endpoint::EndpointRecord;
use crate::error::{Result, SchemaCompilationError};
use crate::placeholder::{anchor, parse_mask, MaskSegment};
use regex::Regex;
use std::collections::HashMap;

/// Matcher for a single mask
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    names: Vec<String>,
    regex: Regex,
}

impl PatternMatcher {
    /// Builds a matcher for a mask
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_schema::PatternMatcher;
    ///
    /// let matcher = PatternMatcher::new("/users/{user-id}").unwrap();
    /// let params = matcher.captures("/users/42").unwrap();
    /// assert_eq!(params.get("user-id"), Some(&"42".to_string()));
    /// assert!(matcher.captures("/users/42/posts").is_none());
    /// ```
    pub fn new(mask: &str) -> Result<Self> {
        let (body, names) = parse_mask(mask)?.into_iter().fold(
            (String::with_capacity(mask.len() * 2), Vec::new()),
            |(mut body, mut names), segment| {
                match segment {
                    MaskSegment::Literal(text) => body.push_str(text),
                    MaskSegment::Placeholder(name) => {
                        body.push_str("([^/]+)");
                        names.push(name.to_string());
                    }
                }
                (body, names)
            },
        );

        let regex =
            Regex::new(&anchor(&body)).map_err(|source| SchemaCompilationError::InvalidPattern {
                mask: mask.to_string(),
                source,
            })?;

        Ok(Self { names, regex })
    }

    /// Builds a matcher for a compiled endpoint's mask
    pub fn for_endpoint(endpoint: &EndpointRecord) -> Result<Self> {
        Self::new(&endpoint.mask)
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Placeholder values keyed by name, or `None` if the path doesn't match
    pub fn captures(&self, path: &str) -> Option<HashMap<String, String>> {
        let caps = self.regex.captures(path)?;

        let params = self
            .names
            .iter()
            .zip(caps.iter().skip(1))
            .filter_map(|(name, value)| value.map(|v| (name.clone(), v.as_str().to_string())))
            .collect();

        Some(params)
    }
}
