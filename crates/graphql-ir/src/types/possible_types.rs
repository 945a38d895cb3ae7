use fixedbitset::FixedBitSet;

/// Dense index of an object type within a [`Schema`](crate::schema::Schema).
///
/// Ids are assigned in schema definition order and are only meaningful for
/// the schema that produced them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ObjectTypeId(u32);
impl ObjectTypeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
impl std::convert::From<usize> for ObjectTypeId {
    fn from(value: usize) -> Self {
        Self(value as u32)
    }
}
impl std::convert::From<ObjectTypeId> for usize {
    fn from(value: ObjectTypeId) -> Self {
        value.index()
    }
}

/// The set of concrete object types a selection could resolve to at runtime.
///
/// Stored as a bitset over the schema's [`ObjectTypeId`]s. Every
/// `PossibleTypes` derived from the same schema has the same capacity, so
/// equality is plain set equality.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PossibleTypes {
    bits: FixedBitSet,
}
impl PossibleTypes {
    pub fn empty(num_object_types: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(num_object_types),
        }
    }

    pub fn from_ids(
        num_object_types: usize,
        ids: impl IntoIterator<Item = ObjectTypeId>,
    ) -> Self {
        let mut possible_types = Self::empty(num_object_types);
        for id in ids {
            possible_types.insert(id);
        }
        possible_types
    }

    /// The number of object types this set ranges over, i.e. the schema's
    /// object type count.
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    pub fn contains(&self, id: ObjectTypeId) -> bool {
        self.bits.contains(id.index())
    }

    pub fn difference(&self, other: &Self) -> Self {
        let mut bits = self.bits.clone();
        bits.difference_with(&other.bits);
        Self { bits }
    }

    /// The lowest-indexed type in this set, if any.
    pub fn first(&self) -> Option<ObjectTypeId> {
        self.bits.ones().next().map(ObjectTypeId::from)
    }

    pub fn insert(&mut self, id: ObjectTypeId) {
        self.bits.grow(id.index() + 1);
        self.bits.insert(id.index());
    }

    pub fn intersection(&self, other: &Self) -> Self {
        let mut bits = self.bits.clone();
        bits.intersect_with(&other.bits);
        Self { bits }
    }

    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.bits.is_disjoint(&other.bits)
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.bits.is_subset(&other.bits)
    }

    pub fn iter(&self) -> impl Iterator<Item = ObjectTypeId> + '_ {
        self.bits.ones().map(ObjectTypeId::from)
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    pub fn remove(&mut self, id: ObjectTypeId) {
        if id.index() < self.bits.len() {
            self.bits.set(id.index(), false);
        }
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut bits = self.bits.clone();
        bits.union_with(&other.bits);
        Self { bits }
    }
}
