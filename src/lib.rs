//! This crate is an in-memory store of forensic DNA profiles indexed by
//! person name.
//!
//! ## The matching workflow
//!
//! A [`profile::Profile`] records, for one person, a set of short tandem
//! repeat (STR) markers: each [`profile::Marker`] pairs a repeated DNA
//! fragment with the number of times it occurs in that person's DNA. An
//! external loader is responsible for parsing whatever record format the
//! profiles arrive in; this crate starts where the loader ends, with
//! well-formed `(name, profile)` pairs.
//!
//! Profiles are filed in an [`index::ProfileIndex`] under the person's full
//! name (`"Last, First"`). Once two reference sequences are supplied, the
//! index can flag every profile whose markers sufficiently match the
//! combined sequence as "of interest", count entries by that flag, list the
//! names on either side of it, and prune the entries that did not match.
//!
//! ## Binary Search Tree
//!
//! The index is backed by [`tree::Tree`], a Binary Search Tree (BST). A BST
//! stores each record in a `Node` that may have up to two children, and
//! maintains two invariants:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less
//!    than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    greater than its own key.
//!
//! Keeping keys ordered this way means a lookup only walks one root-to-leaf
//! path, and visiting the left subtree, then the node, then the right
//! subtree yields the keys in sorted order. The tree also supports
//! breadth-first (level-order) traversal, which the index uses when listing
//! names by flag.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod index;
pub mod profile;
pub mod tree;

#[cfg(test)]
pub(crate) mod test;
