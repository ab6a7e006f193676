//! Endpoint assembly
//!
//! Walks every (controller, method) pair in input order and turns each
//! routable method into an [`EndpointRecord`]. Methods without a path are
//! skipped; nothing is sorted or deduplicated.

use crate::config::{CompileConfig, ErrorPolicy};
use crate::descriptor::{ControllerDescriptor, MethodDescriptor, ParameterType};
use crate::endpoint::{EndpointRecord, Group, Handler};
use crate::error::Result;
use crate::id::compose_id;
use crate::path::compose_mask;
use crate::placeholder::compile_with_default;

/// Compiles controller descriptors into endpoint records
///
/// # Examples
///
/// ```
/// use rhtmx_schema::{ControllerDescriptor, EndpointAssembler, MethodDescriptor};
///
/// let users = ControllerDescriptor::new("app::UsersController")
///     .with_group("api", "api")
///     .with_path("users")
///     .with_id("users")
///     .with_method(MethodDescriptor::new("detail").with_path("{id}").with_id("detail"));
///
/// let endpoints = EndpointAssembler::new().assemble(&[users]).unwrap();
/// assert_eq!(endpoints[0].mask, "/api/users/{id}");
/// assert_eq!(endpoints[0].id.as_deref(), Some("api.users.detail"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EndpointAssembler {
    on_error: ErrorPolicy,
    default_parameter_type: ParameterType,
}

impl EndpointAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &CompileConfig) -> Self {
        Self {
            on_error: config.on_error,
            default_parameter_type: config.default_parameter_type,
        }
    }

    pub fn on_error(mut self, policy: ErrorPolicy) -> Self {
        self.on_error = policy;
        self
    }

    pub fn default_parameter_type(mut self, ty: ParameterType) -> Self {
        self.default_parameter_type = ty;
        self
    }

    /// Compiles every routable method of every controller, in input order
    ///
    /// With [`ErrorPolicy::Abort`] the first malformed mask fails the whole
    /// pass. With [`ErrorPolicy::Skip`] that endpoint is left out instead.
    pub fn assemble(&self, controllers: &[ControllerDescriptor]) -> Result<Vec<EndpointRecord>> {
        let mut endpoints = Vec::new();
        let mut skipped = 0usize;

        for controller in controllers {
            for method in &controller.methods {
                match self.assemble_endpoint(controller, method) {
                    Ok(Some(endpoint)) => {
                        tracing::debug!("Compiled {} -> {}", endpoint.mask, endpoint.pattern);
                        endpoints.push(endpoint);
                    }
                    Ok(None) => {
                        tracing::debug!(
                            "Skipping {}::{}: no path",
                            controller.class,
                            method.name
                        );
                    }
                    Err(err) if self.on_error == ErrorPolicy::Skip => {
                        tracing::warn!(
                            "Dropping {}::{} from schema: {}",
                            controller.class,
                            method.name,
                            err
                        );
                        skipped += 1;
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        tracing::info!(
            endpoints = endpoints.len(),
            controllers = controllers.len(),
            skipped,
            "Compiled endpoint schema"
        );

        Ok(endpoints)
    }

    /// Compiles a single method; `Ok(None)` when it has no path
    pub fn assemble_endpoint(
        &self,
        controller: &ControllerDescriptor,
        method: &MethodDescriptor,
    ) -> Result<Option<EndpointRecord>> {
        if !method.is_routable() {
            return Ok(None);
        }

        let mask = compose_mask(controller.group_paths.as_slice(), &controller.path, &method.path);
        let id = compose_id(controller.group_ids.as_slice(), &controller.id, &method.id);
        let compiled = compile_with_default(&mask, &method.parameters, self.default_parameter_type)?;

        Ok(Some(EndpointRecord {
            handler: Handler {
                class: controller.class.clone(),
                method: method.name.clone(),
                arguments: method.arguments.clone(),
            },
            group: Group {
                ids: controller.group_ids.clone(),
                paths: controller.group_paths.clone(),
            },
            id,
            tags: controller.tags.clone(),
            http_methods: method.methods.clone(),
            mask,
            parameters: compiled.parameters,
            pattern: compiled.pattern,
        }))
    }
}

/// Compiles descriptors with the default options (abort on error, scalar
/// placeholders)
pub fn assemble(controllers: &[ControllerDescriptor]) -> Result<Vec<EndpointRecord>> {
    EndpointAssembler::new().assemble(controllers)
}
