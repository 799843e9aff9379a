//! The forensic profile index: people keyed by full name, their DNA
//! profiles, and the pair of reference sequences used to flag profiles of
//! interest.
//!
//! # Examples
//!
//! ```
//! use forensic::index::ProfileIndex;
//! use forensic::profile::{Marker, Profile};
//!
//! let mut index = ProfileIndex::new();
//! index.insert("Smith, John", Profile::new(vec![Marker::new("AGAT", 3)]));
//! index.insert("Doe, Jane", Profile::new(vec![Marker::new("AATG", 5)]));
//!
//! // "AGAT" occurs three times in the combined sequence, so John Smith's
//! // profile matches; Jane Doe's does not.
//! index.set_reference_sequences("AGATAGATAGAT", "TTTT");
//! index.flag_profiles_of_interest();
//!
//! assert_eq!(index.matching_profile_count(true), 1);
//! assert_eq!(index.names_by_interest(false), vec!["Doe, Jane"]);
//!
//! // Prune everyone who didn't match.
//! index.cleanup();
//! assert_eq!(index.names(), vec!["Smith, John"]);
//! ```

use crate::profile::Profile;
use crate::tree::Tree;

/// An index of DNA profiles keyed by full name (`"Last, First"`).
///
/// Names are kept in a Binary Search Tree ordered lexicographically, so the
/// index supports sorted listing alongside the keyed operations. The two
/// reference sequences are stored once via
/// [`set_reference_sequences`](ProfileIndex::set_reference_sequences) and
/// consulted only by
/// [`flag_profiles_of_interest`](ProfileIndex::flag_profiles_of_interest).
#[derive(Debug, Clone)]
pub struct ProfileIndex {
    people: Tree<String, Profile>,
    sequences: Option<(String, String)>,
}

impl Default for ProfileIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileIndex {
    /// Generates a new, empty index with no reference sequences.
    pub fn new() -> Self {
        Self {
            people: Tree::new(),
            sequences: None,
        }
    }

    /// How many people the index holds.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the index holds no people.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Files a person's profile under their full name.
    ///
    /// If the name is already present the index is left unchanged and the
    /// given profile is dropped: the first insertion wins.
    pub fn insert(&mut self, name: impl Into<String>, profile: Profile) {
        self.people.insert(name.into(), profile);
    }

    /// Looks up a person's profile by full name.
    pub fn find(&self, name: &str) -> Option<&Profile> {
        self.people.find(name)
    }

    /// Removes a person from the index by full name and returns their
    /// profile. If no such person exists, nothing happens.
    pub fn remove(&mut self, name: &str) -> Option<Profile> {
        self.people.remove(name)
    }

    /// Stores the two reference sequences that profiles will be compared
    /// against. Expected to be called once, after loading and before
    /// flagging.
    pub fn set_reference_sequences(
        &mut self,
        first: impl Into<String>,
        second: impl Into<String>,
    ) {
        self.sequences = Some((first.into(), second.into()));
    }

    /// The stored reference sequences, if they have been set.
    pub fn reference_sequences(&self) -> Option<(&str, &str)> {
        self.sequences
            .as_ref()
            .map(|(first, second)| (first.as_str(), second.as_str()))
    }

    /// Compares every profile against the concatenation of the two
    /// reference sequences and flags the ones that match as of interest.
    ///
    /// A profile matches when at least half of its markers (rounding up)
    /// occur in the combined sequence exactly as many times as measured;
    /// see [`Profile::mark_if_matches`]. Profiles are visited in-order,
    /// though each verdict depends only on the profile itself.
    ///
    /// # Panics
    ///
    /// Panics if called before
    /// [`set_reference_sequences`](ProfileIndex::set_reference_sequences).
    pub fn flag_profiles_of_interest(&mut self) {
        let (first, second) = self
            .sequences
            .as_ref()
            .expect("reference sequences must be set before flagging profiles");
        let combined = format!("{}{}", first, second);

        self.people
            .for_each_mut(|_, profile| profile.mark_if_matches(&combined));
    }

    /// How many profiles have the given "of interest" status.
    pub fn matching_profile_count(&self, of_interest: bool) -> usize {
        self.people
            .iter()
            .filter(|(_, profile)| profile.is_of_interest() == of_interest)
            .count()
    }

    /// The names whose profiles have the given "of interest" status, in
    /// level-order (breadth-first from the tree root, each level left to
    /// right). Empty when the index is empty or nothing matches.
    pub fn names_by_interest(&self, of_interest: bool) -> Vec<&str> {
        self.people
            .level_order()
            .filter(|(_, profile)| profile.is_of_interest() == of_interest)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// All names currently in the index, in ascending order.
    pub fn names(&self) -> Vec<&str> {
        self.people.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Removes every person whose profile is not of interest.
    ///
    /// The list of names to remove is computed once up front (in
    /// level-order), then each is removed by name; keyed removal finds the
    /// right node regardless of how earlier removals reshaped the tree.
    pub fn cleanup(&mut self) {
        let unmarked: Vec<String> = self
            .names_by_interest(false)
            .into_iter()
            .map(String::from)
            .collect();
        for name in &unmarked {
            self.people.remove(name.as_str());
        }
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::Name;

    fn build(people: Vec<(Name, Profile)>) -> ProfileIndex {
        let mut index = ProfileIndex::new();
        for (Name(name), profile) in people {
            index.insert(name, profile);
        }
        index.set_reference_sequences("AGATAGATAGATAATGAATG", "TATCGATATCTA");
        index.flag_profiles_of_interest();
        index
    }

    quickcheck::quickcheck! {
        fn counts_partition_after_flagging(people: Vec<(Name, Profile)>) -> bool {
            let index = build(people);
            index.matching_profile_count(true) + index.matching_profile_count(false)
                == index.len()
        }
    }

    quickcheck::quickcheck! {
        fn extraction_length_matches_count(people: Vec<(Name, Profile)>) -> bool {
            let index = build(people);
            index.names_by_interest(false).len() == index.matching_profile_count(false)
                && index.names_by_interest(true).len() == index.matching_profile_count(true)
        }
    }

    quickcheck::quickcheck! {
        fn cleanup_removes_exactly_the_unflagged(people: Vec<(Name, Profile)>) -> bool {
            let mut index = build(people);
            let mut flagged: Vec<String> = index
                .names_by_interest(true)
                .into_iter()
                .map(String::from)
                .collect();
            flagged.sort();

            index.cleanup();
            index.matching_profile_count(false) == 0 && index.names() == flagged
        }
    }
}
