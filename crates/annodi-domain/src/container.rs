//! Declarative service records
//!
//! Services handed to the hosting container are described as plain data:
//! identifier, implementing type, optional factory with arguments, recorded
//! setup calls and autowiring eligibility. Other services are referenced
//! symbolically via [`Argument::Ref`]; the extension's builder resolves
//! references in an explicit second pass instead of deferred lookups.

use serde::{Deserialize, Serialize};

/// A constructor, factory or setup-call argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Argument {
    /// Literal string value
    Str(String),
    /// Literal boolean value
    Bool(bool),
    /// Symbolic reference to another service by id
    Ref(String),
}

impl Argument {
    /// Create a string argument
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Create a symbolic service reference
    pub fn reference(id: impl Into<String>) -> Self {
        Self::Ref(id.into())
    }

    /// The referenced service id, when this is a reference
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Self::Ref(id) => Some(id),
            _ => None,
        }
    }
}

/// A method call re-applied every time the service is constructed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupCall {
    /// Method invoked on the constructed service
    pub method: String,
    /// Arguments passed to the method
    pub arguments: Vec<Argument>,
}

/// Factory used to construct the service instead of its bare type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factory {
    /// Concrete type constructed by the factory
    pub type_name: String,
    /// Constructor arguments, possibly symbolic references
    pub arguments: Vec<Argument>,
}

/// Declarative description of one service registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    /// Unique service identifier within the container
    pub id: String,
    /// Type the service is exposed under
    pub service_type: String,
    /// Optional factory constructing the service
    pub factory: Option<Factory>,
    /// Setup calls recorded against the service, in registration order
    pub setup: Vec<SetupCall>,
    /// Whether the container may inject this service by type
    pub autowired: bool,
}

impl ServiceDefinition {
    /// Create a definition for `service_type`, autowired by default
    pub fn new(id: impl Into<String>, service_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            service_type: service_type.into(),
            factory: None,
            setup: Vec::new(),
            autowired: true,
        }
    }

    /// Set the factory type and its arguments
    pub fn with_factory(mut self, type_name: impl Into<String>, arguments: Vec<Argument>) -> Self {
        self.factory = Some(Factory {
            type_name: type_name.into(),
            arguments,
        });
        self
    }

    /// Set autowiring eligibility
    pub fn with_autowired(mut self, autowired: bool) -> Self {
        self.autowired = autowired;
        self
    }

    /// Record a setup call; calls are kept in insertion order
    pub fn add_setup(&mut self, method: impl Into<String>, arguments: Vec<Argument>) {
        self.setup.push(SetupCall {
            method: method.into(),
            arguments,
        });
    }

    /// All symbolic references held by this definition
    pub fn references(&self) -> impl Iterator<Item = &str> {
        let factory_args = self.factory.iter().flat_map(|f| f.arguments.iter());
        let setup_args = self.setup.iter().flat_map(|call| call.arguments.iter());
        factory_args
            .chain(setup_args)
            .filter_map(Argument::as_reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_calls_keep_insertion_order() {
        let mut definition = ServiceDefinition::new("svc", "SomeType");
        definition.add_setup("first", vec![Argument::str("a")]);
        definition.add_setup("second", vec![]);
        let methods: Vec<&str> = definition.setup.iter().map(|c| c.method.as_str()).collect();
        assert_eq!(methods, vec!["first", "second"]);
    }

    #[test]
    fn references_cover_factory_and_setup() {
        let mut definition = ServiceDefinition::new("svc", "SomeType").with_factory(
            "SomeFactory",
            vec![Argument::reference("dep.a"), Argument::Bool(true)],
        );
        definition.add_setup("wire", vec![Argument::reference("dep.b")]);
        let refs: Vec<&str> = definition.references().collect();
        assert_eq!(refs, vec!["dep.a", "dep.b"]);
    }

    #[test]
    fn new_definition_is_autowired_without_factory() {
        let definition = ServiceDefinition::new("svc", "SomeType");
        assert!(definition.autowired);
        assert!(definition.factory.is_none());
        assert!(definition.setup.is_empty());
    }
}
