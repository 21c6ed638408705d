//! Surname grouping - authors who share a family name

use crate::Person;
use std::collections::BTreeMap;

/// Authors grouped by normalized surname; every group holds two or more
pub type SurnameGroups = BTreeMap<String, Vec<Person>>;

/// Normalize a surname for grouping: trim, then uppercase
pub fn normalize_surname(last_name: &str) -> String {
    last_name.trim().to_uppercase()
}

/// Partition authors by normalized surname, keeping groups of two or more
///
/// Blank surnames are left out entirely. Members keep their input order.
///
/// # Examples
///
/// ```
/// use kindred_domain::{group_by_surname, Person, PersonId, RelationKind};
///
/// let deceased = PersonId::new();
/// let authors = vec![
///     Person::new(PersonId::new(), "Marie", "Dupont", RelationKind::Child, deceased),
///     Person::new(PersonId::new(), "Luc", " dupont ", RelationKind::Friend, deceased),
///     Person::new(PersonId::new(), "Ana", "Martin", RelationKind::Spouse, deceased),
/// ];
///
/// let groups = group_by_surname(&authors);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups["DUPONT"].len(), 2);
/// ```
pub fn group_by_surname(authors: &[Person]) -> SurnameGroups {
    let mut groups: SurnameGroups = BTreeMap::new();

    for author in authors {
        let key = normalize_surname(&author.last_name);
        if key.is_empty() {
            continue;
        }
        groups.entry(key).or_default().push(author.clone());
    }

    groups.retain(|_, members| members.len() >= 2);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PersonId, RelationKind};

    fn author(first: &str, last: &str) -> Person {
        Person::new(PersonId::new(), first, last, RelationKind::Friend, PersonId::from_value(1))
    }

    #[test]
    fn test_groups_example() {
        let authors = vec![author("Marie", "Dupont"), author("Luc", "Dupont"), author("Ana", "Martin")];

        let groups = group_by_surname(&authors);
        assert_eq!(groups.len(), 1);
        let dupont = &groups["DUPONT"];
        assert_eq!(dupont.len(), 2);
        assert_eq!(dupont[0].first_name, "Marie");
        assert_eq!(dupont[1].first_name, "Luc");
    }

    #[test]
    fn test_normalization() {
        assert_eq!(normalize_surname("  de la Tour "), "DE LA TOUR");
        assert_eq!(normalize_surname("   "), "");
    }

    #[test]
    fn test_blank_surnames_excluded() {
        let authors = vec![author("Ana", ""), author("Leo", "  "), author("Zoe", "\t")];
        assert!(group_by_surname(&authors).is_empty());
    }

    #[test]
    fn test_case_and_whitespace_merge() {
        let authors = vec![author("Marie", "dupont"), author("Ana", "Martin"), author("Luc", " DUPONT")];

        let groups = group_by_surname(&authors);
        let names: Vec<&str> = groups["DUPONT"].iter().map(|p| p.first_name.as_str()).collect();
        assert_eq!(names, vec!["Marie", "Luc"]);
    }

    #[test]
    fn test_singletons_dropped() {
        let authors = vec![author("Marie", "Dupont"), author("Ana", "Martin")];
        assert!(group_by_surname(&authors).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::{PersonId, RelationKind};
    use proptest::prelude::*;

    proptest! {
        /// Property: groups are non-blank, have 2+ members, and keep input order
        #[test]
        fn test_group_invariants(surnames in prop::collection::vec("[ ]{0,1}[abAB]{0,2}[ ]{0,1}", 0..12)) {
            let authors: Vec<Person> = surnames
                .iter()
                .enumerate()
                .map(|(i, last)| {
                    Person::new(PersonId::from_value(i as u128 + 1), format!("P{}", i), last.clone(), RelationKind::Other, PersonId::from_value(0))
                })
                .collect();

            let groups = group_by_surname(&authors);
            for (key, members) in &groups {
                prop_assert!(!key.is_empty());
                prop_assert!(members.len() >= 2);
                prop_assert!(members.iter().all(|m| &normalize_surname(&m.last_name) == key));
                prop_assert!(members.windows(2).all(|w| w[0].id < w[1].id));
            }
        }
    }
}
