//! Controller and method descriptors
//!
//! These are the input side of schema compilation: a read-only object graph
//! produced by whatever discovers controllers and reads their route
//! annotations. Compilation never mutates them.
//!
//! Descriptors can also be read from a JSON or TOML file, which is how the
//! CLI receives the output of an annotation scanner.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::Path;

/// Type of a path parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    /// Untyped value; the default for placeholders without a declaration
    #[default]
    Scalar,
    String,
    Int,
    Float,
    Bool,
    #[serde(rename = "datetime")]
    DateTime,
    Object,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::DateTime => "datetime",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parameter declared on a method, e.g. by a `@RequestParameter` annotation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeclaredParameter {
    #[serde(rename = "type", default)]
    pub ty: ParameterType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DeclaredParameter {
    pub fn new(ty: ParameterType) -> Self {
        Self {
            ty,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One argument of the handler method, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerArgument {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl HandlerArgument {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A single routable (or not yet routable) method of a controller
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Handler method name
    pub name: String,

    /// Own path segment; empty means the method is not routable
    #[serde(default)]
    pub path: String,

    /// Own id segment; empty means the endpoint gets no id
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub arguments: Vec<HandlerArgument>,

    /// HTTP verbs, e.g. `GET`, `POST`
    #[serde(default)]
    pub methods: BTreeSet<String>,

    #[serde(default)]
    pub parameters: BTreeMap<String, DeclaredParameter>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_argument(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.arguments.push(HandlerArgument::new(name, ty));
        self
    }

    pub fn with_http_method(mut self, verb: impl Into<String>) -> Self {
        self.methods.insert(verb.into());
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, parameter: DeclaredParameter) -> Self {
        self.parameters.insert(name.into(), parameter);
        self
    }

    /// Methods without a path are skipped during compilation
    pub fn is_routable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// A controller together with the groups it is nested in
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ControllerDescriptor {
    /// Fully qualified handler type, e.g. `app::controllers::UsersController`
    pub class: String,

    /// Path segments of enclosing groups, outermost first
    #[serde(default)]
    pub group_paths: Vec<String>,

    /// Id segments of enclosing groups, outermost first
    #[serde(default)]
    pub group_ids: Vec<String>,

    #[serde(default)]
    pub path: String,

    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub tags: BTreeSet<String>,

    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl ControllerDescriptor {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            ..Self::default()
        }
    }

    pub fn with_group(mut self, path: impl Into<String>, id: impl Into<String>) -> Self {
        self.group_paths.push(path.into());
        self.group_ids.push(id.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }
}

/// File layout for descriptor documents: `[[controllers]]` in TOML,
/// `{"controllers": [...]}` in JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescriptorFile {
    #[serde(default)]
    pub controllers: Vec<ControllerDescriptor>,
}

impl DescriptorFile {
    /// Load descriptors from a `.json` or `.toml` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read descriptor file: {:?}", path))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse descriptor file: {:?}", path)),
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("Failed to parse descriptor file: {:?}", path)),
            _ => bail!(
                "Unsupported descriptor file {:?}: expected a .json or .toml extension",
                path
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parameter_type_names() {
        assert_eq!(ParameterType::default(), ParameterType::Scalar);
        assert_eq!(ParameterType::DateTime.to_string(), "datetime");
        assert_eq!(
            serde_json::to_string(&ParameterType::Int).unwrap(),
            "\"int\""
        );
        let ty: ParameterType = serde_json::from_str("\"datetime\"").unwrap();
        assert_eq!(ty, ParameterType::DateTime);
    }

    #[test]
    fn test_method_routable() {
        assert!(!MethodDescriptor::new("draft").is_routable());
        assert!(MethodDescriptor::new("ping").with_path("ping").is_routable());
    }

    #[test]
    fn test_load_toml_descriptors() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[[controllers]]
class = "app::UsersController"
group_paths = ["api"]
group_ids = ["api"]
path = "users"
id = "users"
tags = ["users"]

[[controllers.methods]]
name = "detail"
path = "{{id}}"
id = "detail"
methods = ["GET"]
arguments = [{{ name = "id", type = "i64" }}]

[controllers.methods.parameters.id]
type = "int"
description = "User id"
"#
        )
        .unwrap();

        let descriptors = DescriptorFile::load(file.path()).unwrap();
        assert_eq!(descriptors.controllers.len(), 1);

        let controller = &descriptors.controllers[0];
        assert_eq!(controller.group_paths, vec!["api"]);

        let method = &controller.methods[0];
        assert_eq!(method.path, "{id}");
        assert_eq!(method.arguments, vec![HandlerArgument::new("id", "i64")]);
        assert_eq!(
            method.parameters.get("id"),
            Some(&DeclaredParameter::new(ParameterType::Int).with_description("User id"))
        );
    }

    #[test]
    fn test_load_json_descriptors() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"controllers": [{{"class": "app::PingController", "methods": [{{"name": "ping", "path": "ping"}}]}}]}}"#
        )
        .unwrap();

        let descriptors = DescriptorFile::load(file.path()).unwrap();
        assert_eq!(descriptors.controllers[0].methods[0].path, "ping");
        assert!(descriptors.controllers[0].tags.is_empty());
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        assert!(DescriptorFile::load(file.path()).is_err());
    }
}
