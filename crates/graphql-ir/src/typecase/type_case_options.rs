/// Knobs shared by the [`TypeCasePartitioner`](crate::typecase::TypeCasePartitioner)
/// and the [`FieldMerger`](crate::merge::FieldMerger).
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeCaseOptions {
    /// Inline the fields of spread fragments into each variant. When
    /// disabled, spreads stay opaque: they are kept as selections on every
    /// variant they touch and the field merger does not look through them.
    pub merge_in_fragment_spreads: bool,
}
impl Default for TypeCaseOptions {
    fn default() -> Self {
        Self {
            merge_in_fragment_spreads: true,
        }
    }
}
