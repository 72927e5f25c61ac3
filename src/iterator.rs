//! Provides Trie iterators.
//!
//! Iteration is depth first, in insertion order of children, and visits
//! every node below the root exactly once.
//!
//! ```
//! use affixing::trie::Trie;
//!
//! let trie: Trie<char> = ["ab", "ac"].iter().map(|w| w.chars()).collect();
//! let keys = trie
//!     .iter()
//!     .map(|entry| entry.key.into_iter().collect::<String>())
//!     .collect::<Vec<_>>();
//! assert_eq!(keys, ["a", "ab", "ac"]);
//! ```
use crate::trie::{Node, Trie, TrieAtom};

/// Iterator Item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathCount<A> {
    /// Atoms spelling the path from the root to this node.
    pub key: Vec<A>,
    /// Pass count of the node.
    pub count: usize,
    /// Number of children of the node.
    pub branching: usize,
}

/// Iterator over a Trie.
#[derive(Debug)]
pub struct TrieRefIter<'a, A> {
    // (node, depth of its parent)
    stack: Vec<(&'a Node<A>, usize)>,
    key: Vec<A>,
}

impl<'a, A: TrieAtom> Iterator for TrieRefIter<'a, A> {
    type Item = PathCount<A>;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        self.key.truncate(depth);
        self.key.push(node.atom);
        self.stack
            .extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        Some(PathCount {
            key: self.key.clone(),
            count: node.count,
            branching: node.children.len(),
        })
    }
}

// Iterator
impl<'a, A: TrieAtom> IntoIterator for &'a Trie<A> {
    type Item = PathCount<A>;
    type IntoIter = TrieRefIter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        TrieRefIter {
            stack: self.head.children.iter().rev().map(|n| (n, 0)).collect(),
            key: vec![],
        }
    }
}
