//! DNA profile value types and the reference-sequence matching rule.
//!
//! A [`Marker`] records how many times one short tandem repeat (STR) occurs
//! in a person's DNA. A [`Profile`] is the set of markers measured for one
//! person together with a flag recording whether the profile has been
//! judged "of interest" against a reference sequence.
//!
//! # Examples
//!
//! ```
//! use forensic::profile::{Marker, Profile};
//!
//! let mut profile = Profile::new(vec![Marker::new("AGAT", 3)]);
//! assert!(!profile.is_of_interest());
//!
//! // "AGAT" occurs exactly three times, so the profile's only marker
//! // matches and the profile is flagged.
//! profile.mark_if_matches("AGATAGATAGAT");
//! assert!(profile.is_of_interest());
//! ```

/// A short tandem repeat (STR) measurement: a repeated DNA fragment and the
/// number of times it occurs in the profiled person's DNA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    name: String,
    occurrences: usize,
}

impl Marker {
    /// Creates a marker for the given STR fragment and occurrence count.
    pub fn new(name: impl Into<String>, occurrences: usize) -> Self {
        Self {
            name: name.into(),
            occurrences,
        }
    }

    /// The STR fragment, e.g. `"AGAT"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How many times the fragment occurs in the profiled DNA.
    pub fn occurrences(&self) -> usize {
        self.occurrences
    }

    /// Whether the fragment occurs in `sequence` exactly as many times as
    /// this marker measured.
    fn matches(&self, sequence: &str) -> bool {
        occurrences_of(sequence, &self.name) == self.occurrences
    }
}

/// The markers measured for one person plus their "of interest" status.
///
/// New profiles start out not of interest; [`Profile::mark_if_matches`]
/// raises the flag when enough markers match a reference sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    markers: Vec<Marker>,
    of_interest: bool,
}

impl Profile {
    /// Creates a profile from its measured markers.
    pub fn new(markers: Vec<Marker>) -> Self {
        Self {
            markers,
            of_interest: false,
        }
    }

    /// The measured markers, in the order they were supplied.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Whether this profile has been flagged of interest.
    pub fn is_of_interest(&self) -> bool {
        self.of_interest
    }

    /// Flags this profile as of interest if at least half of its markers
    /// (rounding up) occur in `sequence` exactly as many times as measured.
    ///
    /// A profile with no markers is never flagged. The flag is only ever
    /// raised here, never cleared, so re-evaluating against the same
    /// sequence leaves it unchanged.
    pub fn mark_if_matches(&mut self, sequence: &str) {
        if self.markers.is_empty() {
            return;
        }

        let matches = self
            .markers
            .iter()
            .filter(|marker| marker.matches(sequence))
            .count();
        if matches >= (self.markers.len() + 1) / 2 {
            self.of_interest = true;
        }
    }
}

/// Counts non-overlapping occurrences of `pattern` in `sequence`, scanning
/// left to right and resuming each search just past the previous match.
///
/// An empty pattern is defined to occur zero times.
fn occurrences_of(sequence: &str, pattern: &str) -> usize {
    if pattern.is_empty() {
        return 0;
    }
    sequence.match_indices(pattern).count()
}
