use crate::identity;
use crate::operation::Fragment;
use crate::operation::FragmentTable;
use crate::operation::Operation;
use crate::ReferencedTypeSet;
use std::collections::HashSet;

/// Everything produced by one compile call.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledDocument {
    pub(crate) fragments: FragmentTable,
    pub(crate) operations: Vec<Operation>,
    pub(crate) referenced_types: ReferencedTypeSet,
}
impl CompiledDocument {
    pub fn fragment(&self, name: &str) -> Option<&Fragment> {
        self.fragments.named(name)
    }

    pub fn fragments(&self) -> &FragmentTable {
        &self.fragments
    }

    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.name() == name)
    }

    /// Operations in document order.
    pub fn operations(&self) -> &[Operation] {
        self.operations.as_slice()
    }

    pub fn referenced_types(&self) -> &ReferencedTypeSet {
        &self.referenced_types
    }

    /// Fragments that no operation in this document reaches, directly or
    /// through other fragments.
    pub fn unused_fragments(&self) -> Vec<&Fragment> {
        let used: HashSet<_> = self.operations.iter()
            .flat_map(|op| identity::fragment_closure(op.fragment_spreads(), &self.fragments))
            .collect();

        self.fragments.iter()
            .filter(|(id, _)| !used.contains(id))
            .map(|(_, fragment)| fragment)
            .collect()
    }
}
