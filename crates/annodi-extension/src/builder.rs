//! Container builder
//!
//! Collects declarative [`ServiceDefinition`] records in registration
//! order, then resolves every symbolic [`Argument::Ref`] in an explicit
//! second pass. Services may therefore reference each other freely while
//! records are being collected; dangling references fail at [`build`],
//! not at some later lookup.
//!
//! [`Argument::Ref`]: annodi_domain::container::Argument::Ref
//! [`build`]: ContainerBuilder::build

use indexmap::IndexMap;

use annodi_domain::container::ServiceDefinition;
use annodi_domain::error::{Error, Result};

/// Collects service records before reference resolution
#[derive(Debug, Default)]
pub struct ContainerBuilder {
    definitions: IndexMap<String, ServiceDefinition>,
}

impl ContainerBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service record
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateService`] when a record with the same id
    /// is already registered.
    pub fn add_definition(&mut self, definition: ServiceDefinition) -> Result<()> {
        if self.definitions.contains_key(&definition.id) {
            return Err(Error::duplicate_service(&definition.id));
        }
        self.definitions.insert(definition.id.clone(), definition);
        Ok(())
    }

    /// Whether a record with the given id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&ServiceDefinition> {
        self.definitions.get(id)
    }

    /// Registered service ids, in registration order
    pub fn service_ids(&self) -> Vec<&str> {
        self.definitions.keys().map(String::as_str).collect()
    }

    /// Number of registered records
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether no record has been registered yet
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Resolve all symbolic references and seal the container
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedReference`] for the first reference that
    /// names no registered service.
    pub fn build(self) -> Result<Container> {
        for definition in self.definitions.values() {
            for reference in definition.references() {
                if !self.definitions.contains_key(reference) {
                    return Err(Error::unresolved_reference(reference, &definition.id));
                }
            }
        }
        Ok(Container {
            definitions: self.definitions,
        })
    }
}

/// Sealed set of service records with all references verified
#[derive(Debug)]
pub struct Container {
    definitions: IndexMap<String, ServiceDefinition>,
}

impl Container {
    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&ServiceDefinition> {
        self.definitions.get(id)
    }

    /// Service ids, in registration order
    pub fn service_ids(&self) -> Vec<&str> {
        self.definitions.keys().map(String::as_str).collect()
    }

    /// Iterate the records in registration order
    pub fn iter(&self) -> impl Iterator<Item = &ServiceDefinition> {
        self.definitions.values()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the container holds no records
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annodi_domain::container::Argument;

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut builder = ContainerBuilder::new();
        builder
            .add_definition(ServiceDefinition::new("svc", "TypeA"))
            .unwrap();
        let err = builder
            .add_definition(ServiceDefinition::new("svc", "TypeB"))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateService { .. }));
        // first registration is untouched
        assert_eq!(builder.get("svc").unwrap().service_type, "TypeA");
    }

    #[test]
    fn forward_references_resolve_in_second_pass() {
        let mut builder = ContainerBuilder::new();
        builder
            .add_definition(
                ServiceDefinition::new("front", "TypeA")
                    .with_factory("FactoryA", vec![Argument::reference("back")]),
            )
            .unwrap();
        // "back" is registered after the record referencing it
        builder
            .add_definition(ServiceDefinition::new("back", "TypeB"))
            .unwrap();
        let container = builder.build().unwrap();
        assert_eq!(container.service_ids(), vec!["front", "back"]);
    }

    #[test]
    fn dangling_reference_fails_build() {
        let mut builder = ContainerBuilder::new();
        builder
            .add_definition(
                ServiceDefinition::new("front", "TypeA")
                    .with_factory("FactoryA", vec![Argument::reference("missing")]),
            )
            .unwrap();
        let err = builder.build().unwrap_err();
        match err {
            Error::UnresolvedReference { reference, service } => {
                assert_eq!(reference, "missing");
                assert_eq!(service, "front");
            }
            other => panic!("expected UnresolvedReference, got {other:?}"),
        }
    }

    #[test]
    fn ids_keep_registration_order() {
        let mut builder = ContainerBuilder::new();
        for id in ["b", "a", "c"] {
            builder
                .add_definition(ServiceDefinition::new(id, "Type"))
                .unwrap();
        }
        assert_eq!(builder.service_ids(), vec!["b", "a", "c"]);
    }
}
