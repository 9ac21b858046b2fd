//! The catalog context a resolver delegates parameter schema lookups to.

use crate::catalog::identity::CatalogKind;
use crate::resources::ResourceLoader;
use std::io;

/// Host runtime catalog that knows the parameter schemas of its components,
/// data formats, languages and so on.
///
/// `Ok(None)` means the catalog has no schema for the name; `Err` is a lookup
/// failure. Implementations also expose the resource resolver the runtime
/// itself loads classpath resources through.
pub trait CatalogContext: Send + Sync {
    fn parameter_json_schema(&self, kind: CatalogKind, name: &str) -> io::Result<Option<String>>;

    fn class_resolver(&self) -> &dyn ResourceLoader;

    fn component_parameter_json_schema(&self, name: &str) -> io::Result<Option<String>> {
        self.parameter_json_schema(CatalogKind::Component, name)
    }

    fn data_format_parameter_json_schema(&self, name: &str) -> io::Result<Option<String>> {
        self.parameter_json_schema(CatalogKind::DataFormat, name)
    }

    fn language_parameter_json_schema(&self, name: &str) -> io::Result<Option<String>> {
        self.parameter_json_schema(CatalogKind::Language, name)
    }

    fn transformer_parameter_json_schema(&self, name: &str) -> io::Result<Option<String>> {
        self.parameter_json_schema(CatalogKind::Transformer, name)
    }

    fn dev_console_parameter_json_schema(&self, name: &str) -> io::Result<Option<String>> {
        self.parameter_json_schema(CatalogKind::DevConsole, name)
    }

    fn pojo_bean_parameter_json_schema(&self, name: &str) -> io::Result<Option<String>> {
        self.parameter_json_schema(CatalogKind::PojoBean, name)
    }

    fn eip_parameter_json_schema(&self, name: &str) -> io::Result<Option<String>> {
        self.parameter_json_schema(CatalogKind::Eip, name)
    }
}
