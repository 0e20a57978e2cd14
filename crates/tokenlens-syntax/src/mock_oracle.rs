// ABOUTME: Table-driven TypeOracle for tests
// ABOUTME: Types are registered by name and attached to nodes by hand

use std::collections::{HashMap, HashSet};

use tokenlens_types::VariantDescription;

use crate::oracle::{TypeHandle, TypeOracle};
use crate::tree::NodeId;

#[derive(Debug, Default)]
pub struct MockOracle {
    next: u64,
    names: HashMap<TypeHandle, String>,
    node_types: HashMap<NodeId, TypeHandle>,
    properties: HashMap<(TypeHandle, String), TypeHandle>,
    string_literals: HashSet<TypeHandle>,
    variants: HashMap<TypeHandle, Vec<VariantDescription>>,
}

impl MockOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, name: &str) -> TypeHandle {
        self.next += 1;
        let ty = TypeHandle(self.next);
        self.names.insert(ty, name.to_string());
        ty
    }

    pub fn assign(&mut self, node: NodeId, ty: TypeHandle) -> &mut Self {
        self.node_types.insert(node, ty);
        self
    }

    pub fn add_property(&mut self, ty: TypeHandle, name: &str, property: TypeHandle) -> &mut Self {
        self.properties.insert((ty, name.to_string()), property);
        self
    }

    pub fn mark_string_literal(&mut self, ty: TypeHandle) -> &mut Self {
        self.string_literals.insert(ty);
        self
    }

    pub fn set_variants(&mut self, ty: TypeHandle, variants: &[(&str, &[&str])]) -> &mut Self {
        self.variants.insert(
            ty,
            variants
                .iter()
                .map(|(name, values)| VariantDescription {
                    name: name.to_string(),
                    values: values.iter().map(|value| value.to_string()).collect(),
                })
                .collect(),
        );
        self
    }
}

impl TypeOracle for MockOracle {
    fn resolve_type_at(&self, node: NodeId) -> Option<TypeHandle> {
        self.node_types.get(&node).copied()
    }

    fn type_name(&self, ty: TypeHandle) -> String {
        self.names.get(&ty).cloned().unwrap_or_default()
    }

    fn has_property(&self, ty: TypeHandle, name: &str) -> bool {
        self.properties.contains_key(&(ty, name.to_string()))
    }

    fn property_type(&self, ty: TypeHandle, name: &str) -> Option<TypeHandle> {
        self.properties.get(&(ty, name.to_string())).copied()
    }

    fn is_string_literal(&self, ty: TypeHandle) -> bool {
        self.string_literals.contains(&ty)
    }

    fn describe_variants(&self, variants: TypeHandle) -> Vec<VariantDescription> {
        self.variants.get(&variants).cloned().unwrap_or_default()
    }
}
