//! # RHTMX Schema
//!
//! Compiles controller descriptors into a flat endpoint routing schema.
//!
//! A controller sits inside zero or more groups and owns a list of handler
//! methods. For every method with a path this crate produces one
//! [`EndpointRecord`] holding:
//! - a normalized mask (`/api/v1/users/{id}`)
//! - a dotted id (`api.v1.users.detail`) when the method has one
//! - an anchored pattern with one named capture per placeholder
//! - type/description metadata per placeholder
//!
//! ## Mask Normalization
//!
//! Group paths, the controller path and the method path are joined with `/`:
//! - Doubled slashes collapse: `api//users` → `/api/users`
//! - Empty segments vanish: `["", "users"]` → `/users`
//! - No trailing slash: `users/` → `/users`
//! - Nothing at all gives the root: `/`
//!
//! ## Example
//!
//! ```
//! use rhtmx_schema::{
//!     assemble, ControllerDescriptor, DeclaredParameter, MethodDescriptor, ParameterType,
//!     PatternMatcher,
//! };
//!
//! let users = ControllerDescriptor::new("app::UsersController")
//!     .with_group("api", "api")
//!     .with_path("users")
//!     .with_id("users")
//!     .with_method(
//!         MethodDescriptor::new("detail")
//!             .with_path("{id}")
//!             .with_id("detail")
//!             .with_http_method("GET")
//!             .with_parameter("id", DeclaredParameter::new(ParameterType::Int)),
//!     );
//!
//! let endpoints = assemble(&[users]).unwrap();
//! let endpoint = &endpoints[0];
//! assert_eq!(endpoint.mask, "/api/users/{id}");
//! assert_eq!(endpoint.id.as_deref(), Some("api.users.detail"));
//! assert_eq!(endpoint.pattern, "^/api/users/(?P<id>[^/]+)/?$");
//! assert_eq!(endpoint.parameters["id"].ty, ParameterType::Int);
//!
//! let matcher = PatternMatcher::for_endpoint(endpoint).unwrap();
//! let params = matcher.captures("/api/users/42").unwrap();
//! assert_eq!(params.get("id"), Some(&"42".to_string()));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod assembler;
pub mod config;
pub mod descriptor;
pub mod endpoint;
mod error;
pub mod id;
pub mod matcher;
pub mod path;
pub mod placeholder;
pub mod serializator;

// ============================================================================
// Re-exports
// ============================================================================

pub use assembler::{assemble, EndpointAssembler};
pub use config::{ErrorPolicy, OutputFormat, SchemaConfig};
pub use descriptor::{
    ControllerDescriptor, DeclaredParameter, DescriptorFile, HandlerArgument, MethodDescriptor,
    ParameterType,
};
pub use endpoint::{EndpointRecord, Group, Handler, ParameterMeta};
pub use error::{Result, SchemaCompilationError};
pub use id::compose_id;
pub use matcher::PatternMatcher;
pub use path::{compose_mask, normalize_mask};
pub use placeholder::{compile, CompiledMask};
pub use serializator::{
    text_serializator, JsonSerializator, SchemaSerializator, Serializator, TomlSerializator,
};
