//! Provides a counting Trie for keys composed of sequences of atoms.
//!
//! Every node records how many inserted keys pass through it (the "pass
//! count"). The root counts every inserted key, so after inserting N keys
//! `trie.count() == N`. Keys are counted once per insertion, so inserting
//! the same key twice doubles the counts along its path.
//!
//! A trie is built in two phases. A [`TrieBuilder`] accepts keys, and
//! [`TrieBuilder::build`] turns it into a read-only [`Trie`] which can then
//! be shared freely between scoring threads.
//!
//! Atoms must support the TrieAtom trait. As with any trie, the choice of
//! atom decides the granularity of the statistics:
//!  - chars
//!  - grapheme clusters
//!
//! Example 1
//! ```
//! use affixing::trie::TrieBuilder;
//!
//! let mut builder = TrieBuilder::new();
//! builder.insert("cat".chars());
//! builder.insert("cats".chars());
//! let trie = builder.build();
//!
//! assert_eq!(trie.count(), 2);
//! assert_eq!(trie.pass_count("cat".chars()), Some(2));
//! assert_eq!(trie.pass_count("cats".chars()), Some(1));
//! assert_eq!(trie.pass_count("dog".chars()), None);
//! ```
//!
//! Example 2
//! ```
//! use affixing::trie::Trie;
//! use unicode_segmentation::UnicodeSegmentation;
//!
//! let words = ["a̐é", "a̐ö̲"];
//! let trie: Trie<&str> = words.iter().map(|w| w.graphemes(true)).collect();
//!
//! assert_eq!(trie.count(), 2);
//! assert_eq!(trie.branching(["a̐"]), Some(2));
//! ```

use crate::iterator::PathCount;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Atoms which we wish to store in a Trie must implement
/// TrieAtom.
pub trait TrieAtom: Copy + Default + PartialEq + Ord {}

// Blanket implementation which satisfies the compiler
impl<A> TrieAtom for A where A: Copy + Default + PartialEq + Ord {}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub(crate) struct Node<A> {
    pub(crate) children: Vec<Node<A>>,
    pub(crate) atom: A,
    pub(crate) count: usize,
}

impl<A: TrieAtom> Node<A> {
    fn new(atom: A) -> Self {
        Self {
            atom,
            ..Default::default()
        }
    }

    #[inline]
    pub(crate) fn child(&self, atom: A) -> Option<&Node<A>> {
        self.children.iter().find(|x| x.atom == atom)
    }

    /// Largest pass count among the children, 0 for a leaf.
    #[inline]
    pub(crate) fn max_child_count(&self) -> usize {
        self.children.iter().map(|x| x.count).max().unwrap_or(0)
    }
}

/// Accumulates keys into a trie. Call [`TrieBuilder::build`] once every key
/// has been inserted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrieBuilder<A> {
    head: Node<A>,
}

impl<A: TrieAtom> TrieBuilder<A> {
    /// Create a new, empty TrieBuilder.
    pub fn new() -> Self {
        Self {
            head: Node::default(),
        }
    }

    /// Insert the key, creating nodes as needed. The root and every node
    /// along the key's path have their pass count incremented by one. An
    /// empty key only increments the root.
    pub fn insert<K: IntoIterator<Item = A>>(&mut self, key: K) {
        let mut node = &mut self.head;
        node.count += 1;
        for atom in key {
            let node_index = match node.children.iter().position(|x| x.atom == atom) {
                Some(i) => i,
                None => {
                    node.children.push(Node::new(atom));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[node_index];
            node.count += 1;
        }
    }

    /// How many keys have been inserted so far?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.head.count
    }

    /// Freeze the builder into a read-only Trie.
    pub fn build(self) -> Trie<A> {
        Trie { head: self.head }
    }
}

/// A read-only counting trie, produced by [`TrieBuilder::build`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Trie<A> {
    pub(crate) head: Node<A>,
}

impl<A: TrieAtom> Trie<A> {
    /// How many keys were inserted? This is the root's pass count.
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.head.count
    }

    /// Is the Trie empty? A trie holding only empty keys has no nodes
    /// below the root and is considered empty.
    pub fn is_empty(&self) -> bool {
        self.head.children.is_empty()
    }

    /// Does the Trie contain a path for the supplied prefix?
    pub fn contains_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> bool {
        self.find(prefix).is_some()
    }

    /// Pass count of the node reached by the prefix. The empty prefix
    /// yields the root's count.
    pub fn pass_count<P: IntoIterator<Item = A>>(&self, prefix: P) -> Option<usize> {
        self.find(prefix).map(|n| n.count)
    }

    /// Number of distinct atoms which follow the prefix.
    pub fn branching<P: IntoIterator<Item = A>>(&self, prefix: P) -> Option<usize> {
        self.find(prefix).map(|n| n.children.len())
    }

    /// Create an iterator over every node of the Trie, root excluded.
    pub fn iter(&self) -> impl Iterator<Item = PathCount<A>> + '_ {
        self.into_iter()
    }

    /// Create an iterator over every node, ordered by key.
    pub fn iter_sorted(&self) -> impl Iterator<Item = PathCount<A>> + '_ {
        let mut v = self.into_iter().collect::<Vec<PathCount<A>>>();
        v.sort_by(|a, b| a.key.cmp(&b.key));
        v.into_iter()
    }

    fn find<P: IntoIterator<Item = A>>(&self, prefix: P) -> Option<&Node<A>> {
        let mut node = &self.head;
        for atom in prefix {
            node = node.child(atom)?;
        }
        Some(node)
    }
}

impl<A: TrieAtom, K: IntoIterator<Item = A>> FromIterator<K> for Trie<A> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut builder = TrieBuilder::new();
        for key in keys {
            builder.insert(key);
        }
        builder.build()
    }
}
