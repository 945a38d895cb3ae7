use crate::operation::Fragment;
use crate::InternalInvariantError;
use std::collections::HashMap;

/// Stable index of a [`Fragment`] within a [`FragmentTable`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FragmentId(u32);
impl FragmentId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Append-only storage for the fragments compiled by one compile call.
///
/// Fragments are pushed once their own selection set has finished
/// compiling, so every [`FragmentId`] a fragment refers to is smaller than
/// its own.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentTable {
    fragments: Vec<Fragment>,
    ids_by_name: HashMap<String, FragmentId>,
}
impl FragmentTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: FragmentId) -> Option<&Fragment> {
        self.fragments.get(id.index())
    }

    pub fn id_for(&self, name: &str) -> Option<FragmentId> {
        self.ids_by_name.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Fragments in the order they finished compiling.
    pub fn iter(&self) -> impl Iterator<Item = (FragmentId, &Fragment)> {
        self.fragments.iter()
            .enumerate()
            .map(|(idx, fragment)| (FragmentId(idx as u32), fragment))
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn named(&self, name: &str) -> Option<&Fragment> {
        self.id_for(name).and_then(|id| self.get(id))
    }

    pub(crate) fn push(&mut self, fragment: Fragment) -> FragmentId {
        let id = FragmentId(self.fragments.len() as u32);
        self.ids_by_name.insert(fragment.name.clone(), id);
        self.fragments.push(fragment);
        id
    }

    pub(crate) fn resolve(&self, id: FragmentId) -> Result<&Fragment, InternalInvariantError> {
        self.get(id).ok_or(InternalInvariantError::FragmentMissingFromTable {
            fragment_index: id.index(),
        })
    }
}
impl std::ops::Index<FragmentId> for FragmentTable {
    type Output = Fragment;

    fn index(&self, id: FragmentId) -> &Self::Output {
        &self.fragments[id.index()]
    }
}
