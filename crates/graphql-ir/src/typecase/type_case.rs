use crate::operation::wrap_in_boolean_conditions;
use crate::operation::BooleanCondition;
use crate::operation::FragmentId;
use crate::typecase::Variant;
use crate::types::PossibleTypes;

/// Addresses either the default variant or an entry in the variant arena.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum VariantSlot {
    Default,
    Named(usize),
}

/// The partition of one selection set's possible types into variants.
///
/// Named variants are pairwise disjoint. The default variant always spans
/// every possible type; types that no named variant claims form the
/// [`remainder()`](TypeCase::remainder).
#[derive(Clone, Debug, PartialEq)]
pub struct TypeCase {
    default: Variant,
    // Named variants in creation order. A split shrinks the original entry
    // in place and appends the split-off part.
    variants: Vec<Variant>,
}
impl TypeCase {
    pub(crate) fn new(parent_type: &str, possible_types: PossibleTypes) -> Self {
        Self {
            default: Variant::new(parent_type, possible_types),
            variants: vec![],
        }
    }

    pub fn default_variant(&self) -> &Variant {
        &self.default
    }

    /// The named variants, followed by the remainder if there is one. Every
    /// possible type appears in exactly one of these.
    pub fn exhaustive_variants(&self) -> Vec<Variant> {
        let mut exhaustive = self.variants.clone();
        exhaustive.extend(self.remainder());
        exhaustive
    }

    /// The types of the default variant that no named variant claims,
    /// carrying the default variant's selections.
    pub fn remainder(&self) -> Option<Variant> {
        let claimed = self.variants.iter().fold(
            PossibleTypes::empty(self.default.possible_types.capacity()),
            |claimed, variant| claimed.union(&variant.possible_types),
        );
        let unclaimed = self.default.possible_types.difference(&claimed);
        if unclaimed.is_empty() {
            None
        } else {
            Some(self.default.split_off(unclaimed))
        }
    }

    /// Named variants in the order they were created.
    pub fn variants(&self) -> &[Variant] {
        self.variants.as_slice()
    }

    /// Refine the partition so that `possible_types` is exactly covered by
    /// the returned slots, splitting any variant that only partially
    /// overlaps it.
    ///
    /// When `possible_types` spans the whole default variant, the default
    /// is returned along with every named variant, so that the remainder and
    /// all named variants see the same selections.
    pub(crate) fn disjoint_variants_for(&mut self, possible_types: &PossibleTypes) -> Vec<VariantSlot> {
        let types = possible_types.intersection(&self.default.possible_types);
        let matches_default = self.default.possible_types.is_subset(&types);

        let mut slots = vec![];
        if matches_default {
            slots.push(VariantSlot::Default);
        }

        let mut unclaimed = types.clone();
        for idx in 0..self.variants.len() {
            let overlap = self.variants[idx].possible_types.intersection(&types);
            if overlap.is_empty() {
                continue;
            }
            unclaimed = unclaimed.difference(&overlap);

            if overlap == self.variants[idx].possible_types {
                slots.push(VariantSlot::Named(idx));
                continue;
            }

            log::trace!(
                "Splitting {} of {} types off variant {idx}",
                overlap.len(),
                self.variants[idx].possible_types.len(),
            );
            let original = &mut self.variants[idx];
            original.possible_types = original.possible_types.difference(&overlap);
            let split = original.split_off(overlap);
            self.variants.push(split);
            slots.push(VariantSlot::Named(self.variants.len() - 1));
        }

        if !matches_default && !unclaimed.is_empty() {
            log::trace!("Splitting {} types off the default variant", unclaimed.len());
            self.variants.push(self.default.split_off(unclaimed));
            slots.push(VariantSlot::Named(self.variants.len() - 1));
        }

        slots
    }

    /// Fold a nested type case into this one. Each of the nested case's
    /// exhaustive variants lands on the named variants that cover its
    /// types, re-wrapped in `conditions` when the nested selections were
    /// conditional. The nested default's selections also land on this
    /// default when the nested case spans all of its types.
    pub(crate) fn merge(&mut self, other: TypeCase, conditions: &[BooleanCondition]) {
        for nested in other.exhaustive_variants() {
            if nested.selections.is_empty() && nested.fragment_spreads.is_empty() {
                continue;
            }

            for slot in self.disjoint_variants_for(&nested.possible_types) {
                if slot == VariantSlot::Default {
                    continue;
                }
                self.append_to(slot, &nested, conditions);
            }
        }

        // After the named variants so that splits above don't copy these
        // selections a second time.
        if self.default.possible_types.is_subset(&other.default.possible_types) {
            self.append_to(VariantSlot::Default, &other.default, conditions);
        }
    }

    /// True when every type in `possible_types` already sits in a variant
    /// that conforms to `fragment_id`.
    pub(crate) fn conforms_to(&self, possible_types: &PossibleTypes, fragment_id: FragmentId) -> bool {
        // A spread only reaches the default when it spans every type, and
        // then it reaches every named variant as well.
        if self.default.fragment_spreads.contains(&fragment_id) {
            return true;
        }
        let conforming = self.variants.iter()
            .filter(|variant| variant.fragment_spreads.contains(&fragment_id))
            .fold(
                PossibleTypes::empty(self.default.possible_types.capacity()),
                |conforming, variant| conforming.union(&variant.possible_types),
            );
        possible_types.is_subset(&conforming)
    }

    fn append_to(&mut self, slot: VariantSlot, nested: &Variant, conditions: &[BooleanCondition]) {
        let target = self.variant_mut(slot);
        if !nested.selections.is_empty() {
            target.selections.extend(wrap_in_boolean_conditions(
                nested.selections.clone(),
                conditions,
                nested.parent_type.as_str(),
                &target.possible_types,
            ));
        }
        for fragment_id in &nested.fragment_spreads {
            target.add_fragment_spread(*fragment_id);
        }
    }

    pub(crate) fn variant_mut(&mut self, slot: VariantSlot) -> &mut Variant {
        match slot {
            VariantSlot::Default => &mut self.default,
            VariantSlot::Named(idx) => &mut self.variants[idx],
        }
    }
}
