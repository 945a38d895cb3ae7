use crate::operation::FragmentId;
use crate::operation::FragmentTable;
use crate::operation::Operation;
use sha2::Digest;
use sha2::Sha256;

/// The persisted-query identity of an [`Operation`].
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationIdentity {
    pub canonical_source: String,
    pub id: String,
}

/// Compute the identity of `operation`.
///
/// The canonical source is the operation's printed definition followed by the
/// printed definition of every fragment it transitively spreads, ordered by
/// first reference and separated by newlines. The id is the hex-encoded
/// SHA-256 of that text. Because both halves are built from re-printed ASTs
/// and reference order, neither source formatting nor the order fragments
/// are declared in affects the result.
pub fn identify(operation: &Operation, fragments: &FragmentTable) -> OperationIdentity {
    let mut canonical_source = operation.source().to_string();
    for fragment_id in fragment_closure(operation.fragment_spreads(), fragments) {
        if let Some(fragment) = fragments.get(fragment_id) {
            canonical_source.push('\n');
            canonical_source.push_str(fragment.source());
        }
    }

    let id = hex::encode(Sha256::digest(canonical_source.as_bytes()));
    OperationIdentity {
        canonical_source,
        id,
    }
}

/// Depth-first, first-reference-ordered transitive closure of the fragments
/// reachable from `roots`.
pub fn fragment_closure(roots: &[FragmentId], fragments: &FragmentTable) -> Vec<FragmentId> {
    fn visit(id: FragmentId, fragments: &FragmentTable, closure: &mut Vec<FragmentId>) {
        if closure.contains(&id) {
            return;
        }
        closure.push(id);
        if let Some(fragment) = fragments.get(id) {
            for nested_id in fragment.fragment_spreads() {
                visit(*nested_id, fragments, closure);
            }
        }
    }

    let mut closure = vec![];
    for root in roots {
        visit(*root, fragments, &mut closure);
    }
    closure
}
