// ABOUTME: Capability trait through which the locator queries the host's type system
// ABOUTME: Hosts without type information simply pass no oracle

use tokenlens_types::{ScopeRules, VariantDescription};

use crate::tree::NodeId;

/// Opaque handle to a type owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeHandle(pub u64);

/// Type queries the locator needs from the host.
pub trait TypeOracle {
    /// Resolve the type of the expression at `node`
    fn resolve_type_at(&self, node: NodeId) -> Option<TypeHandle>;

    /// Display name of a type, e.g. `TamaguiComponent<ViewProps>`
    fn type_name(&self, ty: TypeHandle) -> String;

    fn has_property(&self, ty: TypeHandle, name: &str) -> bool;

    /// Type of the property `name` on `ty`
    fn property_type(&self, ty: TypeHandle, name: &str) -> Option<TypeHandle>;

    /// Whether `ty` is a string literal type
    fn is_string_literal(&self, _ty: TypeHandle) -> bool {
        false
    }

    /// Variant props described by a variants type
    fn describe_variants(&self, _variants: TypeHandle) -> Vec<VariantDescription> {
        Vec::new()
    }
}

/// A type is themed when its name matches a component type pattern or it
/// exposes one of the marker properties.
pub fn is_themed_type(oracle: &dyn TypeOracle, ty: TypeHandle, rules: &ScopeRules) -> bool {
    rules.is_component_type_name(&oracle.type_name(ty))
        || rules
            .marker_properties
            .iter()
            .any(|marker| oracle.has_property(ty, marker))
}
