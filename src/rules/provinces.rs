//! Province element coverage.
//!
//! Five provinces must jointly provide air, earth, fire, water, and void.
//! A province printed with several elements counts as any one of them, so
//! the solver enumerates every assignment of elements to provinces and
//! accepts the deck if any assignment covers all five. Seekers may cover
//! four elements as long as at least two provinces carry one of their
//! role's elements.
//!
//! Partial assignments are persistent vectors: branching clones a
//! partial assignment in O(1) and nothing is mutated in place.

use im::Vector;
use smallvec::SmallVec;

use crate::cards::{Element, TraitId};
use crate::deck::DeckEntry;

/// The role facts the seeker exception depends on.
#[derive(Clone, Copy, Debug)]
pub struct RoleContext<'a> {
    pub is_seeker: bool,
    /// Traits of the deck's role.
    pub role_elements: &'a [TraitId],
}

impl RoleContext<'_> {
    /// A deck without a role.
    pub const NONE: RoleContext<'static> = RoleContext {
        is_seeker: false,
        role_elements: &[],
    };

    fn grants(&self, element: Element) -> bool {
        self.role_elements.iter().any(|t| t.as_str() == element.as_str())
    }
}

/// Every way of choosing one element per province.
///
/// Single-element provinces seed the first assignment; each
/// multi-element province multiplies the assignments by its candidate
/// count. Provinces with no element contribute nothing. Copies are
/// expanded by quantity.
#[must_use]
pub fn element_permutations(provinces: &[DeckEntry]) -> Vec<Vector<Element>> {
    let copies = provinces
        .iter()
        .flat_map(|e| std::iter::repeat(&e.card.elements).take(e.quantity as usize));

    let mut seed = Vector::new();
    let mut choices: SmallVec<[&[Element]; 5]> = SmallVec::new();
    for elements in copies {
        match elements.as_slice() {
            [] => {}
            [single] => seed.push_back(*single),
            many => choices.push(many),
        }
    }

    choices.into_iter().fold(vec![seed], |permutations, candidates| {
        permutations
            .iter()
            .flat_map(|partial| {
                candidates.iter().map(move |element| {
                    let mut next = partial.clone();
                    next.push_back(*element);
                    next
                })
            })
            .collect()
    })
}

/// Number of distinct elements in an assignment.
fn distinct_elements(permutation: &Vector<Element>) -> usize {
    Element::ALL
        .iter()
        .filter(|element| permutation.contains(element))
        .count()
}

/// Does a single assignment satisfy the coverage rule?
#[must_use]
pub fn is_legal_assignment(permutation: &Vector<Element>, role: RoleContext<'_>) -> bool {
    match distinct_elements(permutation) {
        5 => true,
        4 if role.is_seeker => permutation.iter().filter(|e| role.grants(**e)).count() >= 2,
        _ => false,
    }
}

/// Can the provinces be assigned elements covering the five elements
/// (or four, for a seeker)?
#[must_use]
pub fn covers_elements(provinces: &[DeckEntry], role: RoleContext<'_>) -> bool {
    element_permutations(provinces)
        .iter()
        .any(|permutation| is_legal_assignment(permutation, role))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::{Card, CardType, Side};

    use crate::cards::Element::*;

    fn province(id: &str, elements: &[Element]) -> DeckEntry {
        let card = Card::new(id, id, Side::Province, CardType::Province, "neutral")
            .with_elements(elements.iter().copied());
        DeckEntry::new(Arc::new(card), 1)
    }

    fn provinces(sets: &[&[Element]]) -> Vec<DeckEntry> {
        sets.iter()
            .enumerate()
            .map(|(i, elements)| province(&format!("p{i}"), elements))
            .collect()
    }

    #[test]
    fn test_single_element_provinces_one_permutation() {
        let deck = provinces(&[&[Air], &[Earth], &[Fire], &[Water], &[Void]]);
        let permutations = element_permutations(&deck);

        assert_eq!(permutations.len(), 1);
        assert_eq!(permutations[0].len(), 5);
        assert!(covers_elements(&deck, RoleContext::NONE));
    }

    #[test]
    fn test_multi_element_branching() {
        let deck = provinces(&[&[Air], &[Earth], &[Fire], &[Air, Water], &[Water, Void, Fire]]);
        let permutations = element_permutations(&deck);

        assert_eq!(permutations.len(), 6);
        assert!(permutations.iter().all(|p| p.len() == 5));
        assert!(covers_elements(&deck, RoleContext::NONE));
    }

    #[test]
    fn test_five_element_province_fills_gap() {
        let deck = provinces(&[&[Air], &[Earth], &[Fire], &[Water], &Element::ALL]);
        assert!(covers_elements(&deck, RoleContext::NONE));
    }

    #[test]
    fn test_four_elements_fail_without_seeker() {
        let deck = provinces(&[&[Air], &[Air], &[Fire], &[Water], &[Void]]);
        assert!(!covers_elements(&deck, RoleContext::NONE));
    }

    #[test]
    fn test_seeker_exception() {
        let deck = provinces(&[&[Air], &[Air], &[Fire], &[Water], &[Void]]);
        let traits = vec![TraitId::new("seeker"), TraitId::new("air")];
        let seeker = RoleContext { is_seeker: true, role_elements: &traits };

        assert!(covers_elements(&deck, seeker));
    }

    #[test]
    fn test_seeker_needs_two_role_elements() {
        // Duplicate is fire, but the seeker's element is air.
        let deck = provinces(&[&[Air], &[Fire], &[Fire], &[Water], &[Void]]);
        let traits = vec![TraitId::new("seeker"), TraitId::new("air")];
        let seeker = RoleContext { is_seeker: true, role_elements: &traits };

        assert!(!covers_elements(&deck, seeker));
    }

    #[test]
    fn test_seeker_with_three_elements_fails() {
        let deck = provinces(&[&[Air], &[Air], &[Air], &[Water], &[Void]]);
        let traits = vec![TraitId::new("seeker"), TraitId::new("air")];
        let seeker = RoleContext { is_seeker: true, role_elements: &traits };

        assert!(!covers_elements(&deck, seeker));
    }

    #[test]
    fn test_province_without_elements() {
        let deck = provinces(&[&[Air], &[Earth], &[Fire], &[Water], &[]]);
        let permutations = element_permutations(&deck);

        assert_eq!(permutations.len(), 1);
        assert_eq!(permutations[0].len(), 4);
        assert!(!covers_elements(&deck, RoleContext::NONE));
    }

    #[test]
    fn test_quantity_expands_copies() {
        let mut deck = provinces(&[&[Air], &[Earth], &[Fire], &[Water, Void]]);
        deck[3].quantity = 2;

        let permutations = element_permutations(&deck);
        assert_eq!(permutations.len(), 4);
        assert!(covers_elements(&deck, RoleContext::NONE));
    }
}
