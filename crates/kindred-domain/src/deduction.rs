//! Pairwise deduction - inferring how two authors relate to each other
//!
//! Two authors who each declared a relation to the same reference person can
//! often be placed relative to one another: two children of the deceased are
//! probably siblings, a spouse and a child probably parent and child. The
//! rules live in an ordered table and the first matching rule wins, so order
//! encodes precedence.

use crate::{Person, ReferencePerson, RelationKind};
use serde::{Deserialize, Serialize};

/// Tag of a deduced relationship between two authors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeducedKind {
    /// Both are children of the reference person
    Sibling,
    /// One is the reference person's spouse, the other their child
    ParentChild,
    /// Both are parents of the reference person
    Spouse,
    /// Both are siblings of the reference person; the data cannot tell
    /// siblings from in-laws, so the tag stays ambiguous
    InLawOrSibling,
    /// Both are grandchildren, or both grandparents
    Family,
    /// No typed match, but the surnames are identical
    PotentialFamily,
}

impl DeducedKind {
    /// The snake_case tag
    pub fn as_str(&self) -> &'static str {
        match self {
            DeducedKind::Sibling => "sibling",
            DeducedKind::ParentChild => "parent_child",
            DeducedKind::Spouse => "spouse",
            DeducedKind::InLawOrSibling => "in_law_or_sibling",
            DeducedKind::Family => "family",
            DeducedKind::PotentialFamily => "potential_family",
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            DeducedKind::Sibling => "Sibling",
            DeducedKind::ParentChild => "Parent / Child",
            DeducedKind::Spouse => "Spouse",
            DeducedKind::InLawOrSibling => "Sibling or In-law",
            DeducedKind::Family => "Family",
            DeducedKind::PotentialFamily => "Potential family",
        }
    }
}

impl std::fmt::Display for DeducedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relationship inferred between two authors
///
/// Ephemeral: recomputed on every call, never stored. Deserializing
/// enforces the same confidence range as [`DeducedRelationship::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDeduction")]
pub struct DeducedRelationship {
    /// First author, as passed to the deducer
    pub a: Person,

    /// Second author, as passed to the deducer
    pub b: Person,

    /// Deduced tag
    pub kind: DeducedKind,

    /// Display label
    pub label: String,

    /// Sentence naming both authors and the reference person
    pub explanation: String,

    /// Fixed heuristic score in (0.0, 1.0]
    pub confidence: f64,
}

impl DeducedRelationship {
    /// Create a new deduced relationship
    ///
    /// # Panics
    /// Panics if confidence is outside (0, 1]
    pub fn new(a: Person, b: Person, kind: DeducedKind, explanation: String, confidence: f64) -> Self {
        assert!(
            confidence > 0.0 && confidence <= 1.0,
            "Confidence must be in (0, 1]"
        );

        Self {
            a,
            b,
            kind,
            label: kind.label().to_string(),
            explanation,
            confidence,
        }
    }

    /// Whether this relationship joins the two given people, in either order
    pub fn connects(&self, x: crate::PersonId, y: crate::PersonId) -> bool {
        (self.a.id == x && self.b.id == y) || (self.a.id == y && self.b.id == x)
    }
}

/// Unchecked wire form of [`DeducedRelationship`]
#[derive(Deserialize)]
struct RawDeduction {
    a: Person,
    b: Person,
    kind: DeducedKind,
    label: String,
    explanation: String,
    confidence: f64,
}

impl TryFrom<RawDeduction> for DeducedRelationship {
    type Error = String;

    fn try_from(raw: RawDeduction) -> Result<Self, Self::Error> {
        if !(raw.confidence > 0.0 && raw.confidence <= 1.0) {
            return Err(format!("Confidence must be in (0, 1], got {}", raw.confidence));
        }

        Ok(Self {
            a: raw.a,
            b: raw.b,
            kind: raw.kind,
            label: raw.label,
            explanation: raw.explanation,
            confidence: raw.confidence,
        })
    }
}

/// One row of the deduction table
pub struct Rule {
    /// Short name of the pattern, for listings
    pub name: &'static str,

    /// Tag produced when the rule matches
    pub kind: DeducedKind,

    /// Fixed confidence of the rule
    pub confidence: f64,

    matches: fn(&Person, &Person) -> bool,
    explain: fn(&Person, &Person, &ReferencePerson) -> String,
}

impl Rule {
    /// Whether the ordered pair (a, b) fits this rule's pattern
    pub fn matches(&self, a: &Person, b: &Person) -> bool {
        (self.matches)(a, b)
    }

    /// Build the deduced relationship for a matching pair
    pub fn apply(&self, a: &Person, b: &Person, reference: &ReferencePerson) -> DeducedRelationship {
        let explanation = (self.explain)(a, b, reference);
        DeducedRelationship::new(a.clone(), b.clone(), self.kind, explanation, self.confidence)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("confidence", &self.confidence)
            .finish()
    }
}

/// The deduction table, in precedence order
///
/// Patterns are on the ordered pair (a, b): the spouse/child rule appears
/// twice because the explanation depends on which author holds which role.
/// The surname rule comes last so that any typed match takes priority.
pub static RULES: [Rule; 7] = [
    Rule {
        name: "child & child",
        kind: DeducedKind::Sibling,
        confidence: 0.95,
        matches: both_children,
        explain: explain_siblings,
    },
    Rule {
        name: "spouse & child",
        kind: DeducedKind::ParentChild,
        confidence: 0.90,
        matches: spouse_then_child,
        explain: explain_spouse_then_child,
    },
    Rule {
        name: "child & spouse",
        kind: DeducedKind::ParentChild,
        confidence: 0.90,
        matches: child_then_spouse,
        explain: explain_child_then_spouse,
    },
    Rule {
        name: "parent & parent",
        kind: DeducedKind::Spouse,
        confidence: 0.85,
        matches: both_parents,
        explain: explain_spouses,
    },
    Rule {
        name: "sibling & sibling",
        kind: DeducedKind::InLawOrSibling,
        confidence: 0.80,
        matches: both_siblings,
        explain: explain_siblings_or_in_laws,
    },
    Rule {
        name: "grandchild & grandchild / grandparent & grandparent",
        kind: DeducedKind::Family,
        confidence: 0.70,
        matches: same_grand_generation,
        explain: explain_family,
    },
    Rule {
        name: "same surname",
        kind: DeducedKind::PotentialFamily,
        confidence: 0.60,
        matches: same_surname,
        explain: explain_surname,
    },
];

/// Infer the relationship between two authors of the same reference person
///
/// Rules are tried top to bottom and the first match wins. Returns `None`
/// when no rule applies. Callers must not pass the same person twice.
///
/// # Examples
///
/// ```
/// use kindred_domain::{deduce, DeducedKind, Person, PersonId, ReferencePerson, RelationKind};
///
/// let jean = ReferencePerson::new(PersonId::new(), "Jean", "Dupont");
/// let marie = Person::new(PersonId::new(), "Marie", "Dupont", RelationKind::Child, jean.id);
/// let luc = Person::new(PersonId::new(), "Luc", "Dupont", RelationKind::Child, jean.id);
///
/// let deduced = deduce(&marie, &luc, &jean).unwrap();
/// assert_eq!(deduced.kind, DeducedKind::Sibling);
/// assert_eq!(deduced.confidence, 0.95);
/// ```
pub fn deduce(a: &Person, b: &Person, reference: &ReferencePerson) -> Option<DeducedRelationship> {
    RULES
        .iter()
        .find(|rule| rule.matches(a, b))
        .map(|rule| rule.apply(a, b, reference))
}

fn both_children(a: &Person, b: &Person) -> bool {
    a.relation == RelationKind::Child && b.relation == RelationKind::Child
}

fn spouse_then_child(a: &Person, b: &Person) -> bool {
    a.relation == RelationKind::Spouse && b.relation == RelationKind::Child
}

fn child_then_spouse(a: &Person, b: &Person) -> bool {
    a.relation == RelationKind::Child && b.relation == RelationKind::Spouse
}

fn both_parents(a: &Person, b: &Person) -> bool {
    a.relation == RelationKind::Parent && b.relation == RelationKind::Parent
}

fn both_siblings(a: &Person, b: &Person) -> bool {
    a.relation == RelationKind::Sibling && b.relation == RelationKind::Sibling
}

fn same_grand_generation(a: &Person, b: &Person) -> bool {
    matches!(
        (a.relation, b.relation),
        (RelationKind::Grandchild, RelationKind::Grandchild)
            | (RelationKind::Grandparent, RelationKind::Grandparent)
    )
}

// Case-sensitive on the stored value; the surname grouper normalizes separately.
fn same_surname(a: &Person, b: &Person) -> bool {
    !a.last_name.is_empty() && a.last_name == b.last_name
}

fn explain_siblings(a: &Person, b: &Person, r: &ReferencePerson) -> String {
    format!(
        "{} and {} are both children of {}, therefore likely siblings",
        a.first_name, b.first_name, r.first_name
    )
}

fn explain_spouse_then_child(a: &Person, b: &Person, r: &ReferencePerson) -> String {
    format!(
        "{} is the spouse of {} and {} is a child of {}, therefore {} is likely a parent of {}",
        a.first_name, r.first_name, b.first_name, r.first_name, a.first_name, b.first_name
    )
}

fn explain_child_then_spouse(a: &Person, b: &Person, r: &ReferencePerson) -> String {
    format!(
        "{} is a child of {} and {} is the spouse of {}, therefore {} is likely a parent of {}",
        a.first_name, r.first_name, b.first_name, r.first_name, b.first_name, a.first_name
    )
}

fn explain_spouses(a: &Person, b: &Person, r: &ReferencePerson) -> String {
    format!(
        "{} and {} are both parents of {}, therefore likely spouses",
        a.first_name, b.first_name, r.first_name
    )
}

fn explain_siblings_or_in_laws(a: &Person, b: &Person, r: &ReferencePerson) -> String {
    format!(
        "{} and {} are both siblings of {}, therefore likely siblings or in-laws",
        a.first_name, b.first_name, r.first_name
    )
}

fn explain_family(a: &Person, b: &Person, r: &ReferencePerson) -> String {
    let generation = if a.relation == RelationKind::Grandchild {
        "grandchildren"
    } else {
        "grandparents"
    };
    format!(
        "{} and {} are both {} of {}, therefore likely family",
        a.first_name, b.first_name, generation, r.first_name
    )
}

fn explain_surname(a: &Person, b: &Person, r: &ReferencePerson) -> String {
    format!(
        "{} and {} share the surname {} and both knew {}, therefore potentially family",
        a.first_name, b.first_name, a.last_name, r.first_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PersonId;

    fn reference() -> ReferencePerson {
        ReferencePerson::new(PersonId::new(), "Jean", "Dupont")
    }

    fn author(first: &str, last: &str, relation: RelationKind, r: &ReferencePerson) -> Person {
        Person::new(PersonId::new(), first, last, relation, r.id)
    }

    #[test]
    fn test_children_are_siblings() {
        let r = reference();
        let marie = author("Marie", "Dupont", RelationKind::Child, &r);
        let luc = author("Luc", "Dupont", RelationKind::Child, &r);

        let deduced = deduce(&marie, &luc, &r).unwrap();
        assert_eq!(deduced.kind, DeducedKind::Sibling);
        assert_eq!(deduced.label, "Sibling");
        assert_eq!(deduced.confidence, 0.95);
        assert_eq!(
            deduced.explanation,
            "Marie and Luc are both children of Jean, therefore likely siblings"
        );
    }

    #[test]
    fn test_typed_rule_beats_surname() {
        // Same surname and both children: rule 1 must win over rule 7
        let r = reference();
        let a = author("Marie", "Dupont", RelationKind::Child, &r);
        let b = author("Luc", "Dupont", RelationKind::Child, &r);

        assert_eq!(deduce(&a, &b, &r).unwrap().kind, DeducedKind::Sibling);
    }

    #[test]
    fn test_spouse_then_child() {
        let r = reference();
        let ana = author("Ana", "Martin", RelationKind::Spouse, &r);
        let leo = author("Leo", "Dupont", RelationKind::Child, &r);

        let deduced = deduce(&ana, &leo, &r).unwrap();
        assert_eq!(deduced.kind, DeducedKind::ParentChild);
        assert_eq!(deduced.confidence, 0.90);
        assert_eq!(deduced.a.id, ana.id);
        assert_eq!(
            deduced.explanation,
            "Ana is the spouse of Jean and Leo is a child of Jean, therefore Ana is likely a parent of Leo"
        );
    }

    #[test]
    fn test_child_then_spouse_swaps_roles() {
        let r = reference();
        let leo = author("Leo", "Dupont", RelationKind::Child, &r);
        let ana = author("Ana", "Martin", RelationKind::Spouse, &r);

        let deduced = deduce(&leo, &ana, &r).unwrap();
        assert_eq!(deduced.kind, DeducedKind::ParentChild);
        assert_eq!(deduced.confidence, 0.90);
        assert_eq!(deduced.a.id, leo.id);
        assert_eq!(
            deduced.explanation,
            "Leo is a child of Jean and Ana is the spouse of Jean, therefore Ana is likely a parent of Leo"
        );
    }

    #[test]
    fn test_parents_are_spouses() {
        let r = reference();
        let a = author("Paul", "Dupont", RelationKind::Parent, &r);
        let b = author("Rose", "Leroy", RelationKind::Parent, &r);

        let deduced = deduce(&a, &b, &r).unwrap();
        assert_eq!(deduced.kind, DeducedKind::Spouse);
        assert_eq!(deduced.confidence, 0.85);
        assert_eq!(
            deduced.explanation,
            "Paul and Rose are both parents of Jean, therefore likely spouses"
        );
    }

    #[test]
    fn test_siblings_stay_ambiguous() {
        let r = reference();
        let a = author("Anne", "Dupont", RelationKind::Sibling, &r);
        let b = author("Marc", "Petit", RelationKind::Sibling, &r);

        let deduced = deduce(&a, &b, &r).unwrap();
        assert_eq!(deduced.kind, DeducedKind::InLawOrSibling);
        assert_eq!(deduced.kind.as_str(), "in_law_or_sibling");
        assert_eq!(deduced.confidence, 0.80);
        assert_eq!(
            deduced.explanation,
            "Anne and Marc are both siblings of Jean, therefore likely siblings or in-laws"
        );
    }

    #[test]
    fn test_grand_generations_are_family() {
        let r = reference();
        let a = author("Zoe", "Blanc", RelationKind::Grandchild, &r);
        let b = author("Tom", "Noir", RelationKind::Grandchild, &r);
        let deduced = deduce(&a, &b, &r).unwrap();
        assert_eq!(deduced.kind, DeducedKind::Family);
        assert_eq!(deduced.confidence, 0.70);
        assert!(deduced.explanation.contains("grandchildren"));

        let c = author("Odile", "Blanc", RelationKind::Grandparent, &r);
        let d = author("Henri", "Noir", RelationKind::Grandparent, &r);
        let deduced = deduce(&c, &d, &r).unwrap();
        assert_eq!(deduced.kind, DeducedKind::Family);
        assert!(deduced.explanation.contains("grandparents"));
    }

    #[test]
    fn test_mixed_grand_generations_do_not_match() {
        let r = reference();
        let a = author("Zoe", "Blanc", RelationKind::Grandchild, &r);
        let b = author("Henri", "Noir", RelationKind::Grandparent, &r);

        assert!(deduce(&a, &b, &r).is_none());
    }

    #[test]
    fn test_surname_fallback() {
        let r = reference();
        let a = author("Ana", "Martin", RelationKind::Friend, &r);
        let b = author("Leo", "Martin", RelationKind::Colleague, &r);

        let deduced = deduce(&a, &b, &r).unwrap();
        assert_eq!(deduced.kind, DeducedKind::PotentialFamily);
        assert_eq!(deduced.confidence, 0.60);
        assert!(deduced.explanation.contains("Martin"));
        assert!(deduced.explanation.contains("Jean"));
    }

    #[test]
    fn test_surname_fallback_is_case_sensitive() {
        let r = reference();
        let a = author("Ana", "Martin", RelationKind::Friend, &r);
        let b = author("Leo", "MARTIN", RelationKind::Friend, &r);

        assert!(deduce(&a, &b, &r).is_none());
    }

    #[test]
    fn test_empty_surnames_never_match() {
        let r = reference();
        let a = author("Ana", "", RelationKind::Friend, &r);
        let b = author("Leo", "", RelationKind::Neighbor, &r);

        assert!(deduce(&a, &b, &r).is_none());
    }

    #[test]
    fn test_no_inference() {
        let r = reference();
        let a = author("Ana", "Martin", RelationKind::Spouse, &r);
        let b = author("Leo", "Rossi", RelationKind::Friend, &r);

        assert!(deduce(&a, &b, &r).is_none());
    }

    #[test]
    fn test_connects_either_order() {
        let r = reference();
        let a = author("Marie", "Dupont", RelationKind::Child, &r);
        let b = author("Luc", "Dupont", RelationKind::Child, &r);
        let deduced = deduce(&a, &b, &r).unwrap();

        assert!(deduced.connects(a.id, b.id));
        assert!(deduced.connects(b.id, a.id));
        assert!(!deduced.connects(a.id, r.id));
    }

    #[test]
    fn test_rule_table_order() {
        let kinds: Vec<DeducedKind> = RULES.iter().map(|rule| rule.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DeducedKind::Sibling,
                DeducedKind::ParentChild,
                DeducedKind::ParentChild,
                DeducedKind::Spouse,
                DeducedKind::InLawOrSibling,
                DeducedKind::Family,
                DeducedKind::PotentialFamily,
            ]
        );
        assert!(RULES.iter().all(|rule| rule.confidence > 0.0 && rule.confidence <= 1.0));
    }

    #[test]
    #[should_panic]
    fn test_zero_confidence_rejected() {
        let r = reference();
        let a = author("Ana", "Martin", RelationKind::Friend, &r);
        let b = author("Leo", "Martin", RelationKind::Friend, &r);
        DeducedRelationship::new(a, b, DeducedKind::PotentialFamily, String::new(), 0.0);
    }

    #[test]
    fn test_deserialize_checks_confidence() {
        let r = reference();
        let a = author("Marie", "Dupont", RelationKind::Child, &r);
        let b = author("Luc", "Dupont", RelationKind::Child, &r);
        let deduced = deduce(&a, &b, &r).unwrap();

        let json = serde_json::to_value(&deduced).unwrap();
        let back: DeducedRelationship = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back, deduced);

        for bad in [0.0, -0.5, 1.5] {
            let mut tampered = json.clone();
            tampered["confidence"] = serde_json::json!(bad);
            assert!(serde_json::from_value::<DeducedRelationship>(tampered).is_err());
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::PersonId;
    use proptest::prelude::*;

    fn any_relation() -> impl Strategy<Value = RelationKind> {
        proptest::sample::select(RelationKind::ALL.to_vec())
    }

    fn symmetric(kind: DeducedKind) -> bool {
        kind != DeducedKind::ParentChild
    }

    proptest! {
        /// Property: every deduction carries a confidence in (0, 1]
        #[test]
        fn test_confidence_in_range(
            rel_a in any_relation(),
            rel_b in any_relation(),
            last_a in "[A-Za-z]{0,3}",
            last_b in "[A-Za-z]{0,3}",
        ) {
            let r = ReferencePerson::new(PersonId::new(), "Jean", "Dupont");
            let a = Person::new(PersonId::new(), "A", last_a, rel_a, r.id);
            let b = Person::new(PersonId::new(), "B", last_b, rel_b, r.id);

            if let Some(deduced) = deduce(&a, &b, &r) {
                prop_assert!(deduced.confidence > 0.0 && deduced.confidence <= 1.0);
            }
        }

        /// Property: swapping the pair never changes whether or what is deduced
        #[test]
        fn test_swap_keeps_tag(
            rel_a in any_relation(),
            rel_b in any_relation(),
            last_a in "[A-Z]{0,2}",
            last_b in "[A-Z]{0,2}",
        ) {
            let r = ReferencePerson::new(PersonId::new(), "Jean", "Dupont");
            let a = Person::new(PersonId::new(), "A", last_a, rel_a, r.id);
            let b = Person::new(PersonId::new(), "B", last_b, rel_b, r.id);

            let forward = deduce(&a, &b, &r);
            let backward = deduce(&b, &a, &r);
            prop_assert_eq!(forward.as_ref().map(|d| d.kind), backward.as_ref().map(|d| d.kind));

            if let (Some(f), Some(bk)) = (forward, backward) {
                prop_assert_eq!(f.confidence, bk.confidence);
                if symmetric(f.kind) {
                    let swapped = f.explanation.replacen("A and B", "B and A", 1);
                    prop_assert_eq!(swapped, bk.explanation);
                }
            }
        }

        /// Property: differing surnames and no typed pattern means no inference
        #[test]
        fn test_unrelated_pairs_yield_nothing(
            rel_a in prop_oneof![Just(RelationKind::Friend), Just(RelationKind::Colleague), Just(RelationKind::Neighbor), Just(RelationKind::Other)],
            rel_b in any_relation(),
        ) {
            let r = ReferencePerson::new(PersonId::new(), "Jean", "Dupont");
            let a = Person::new(PersonId::new(), "A", "Martin", rel_a, r.id);
            let b = Person::new(PersonId::new(), "B", "Rossi", rel_b, r.id);

            prop_assert!(deduce(&a, &b, &r).is_none());
        }
    }
}
