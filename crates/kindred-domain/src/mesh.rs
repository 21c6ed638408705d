//! Mesh building - every deduction for a set of authors

use crate::{deduce, DeducedRelationship, Person, PersonId, ReferencePerson};

/// Deduce relationships across every unordered pair of authors
///
/// Pairs are visited as `(i, j)` with `i < j` in input order, one deduction
/// per pair, and results keep that lexicographic order. Pairs with no
/// inference are skipped. Fewer than two authors yields an empty mesh.
///
/// # Examples
///
/// ```
/// use kindred_domain::{build_mesh, Person, PersonId, ReferencePerson, RelationKind};
///
/// let jean = ReferencePerson::new(PersonId::new(), "Jean", "Dupont");
/// let authors = vec![
///     Person::new(PersonId::new(), "Marie", "Dupont", RelationKind::Child, jean.id),
///     Person::new(PersonId::new(), "Luc", "Dupont", RelationKind::Child, jean.id),
/// ];
///
/// let mesh = build_mesh(&authors, &jean);
/// assert_eq!(mesh.len(), 1);
/// assert_eq!(mesh[0].kind.as_str(), "sibling");
/// ```
pub fn build_mesh(authors: &[Person], reference: &ReferencePerson) -> Vec<DeducedRelationship> {
    let mut mesh = Vec::new();

    for (i, a) in authors.iter().enumerate() {
        for b in &authors[i + 1..] {
            if let Some(deduced) = deduce(a, b, reference) {
                mesh.push(deduced);
            }
        }
    }

    mesh
}

/// Find the deduced relationship joining two people, in either order
///
/// Used to correlate a selected graph edge with the deduction behind it.
pub fn find_deduced(mesh: &[DeducedRelationship], x: PersonId, y: PersonId) -> Option<&DeducedRelationship> {
    mesh.iter().find(|deduced| deduced.connects(x, y))
}

/// Number of pairs evaluated for `n` authors
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}
