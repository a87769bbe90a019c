use crate::error::{Error, Result};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

/// Occurrence counts for each distinct byte in a buffer.
///
/// Absent bytes have no entry (never a zero count). Iteration order is
/// ascending byte value, which fixes the leaf insertion order used by
/// the tree builder's tie-break.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, u64>,
}

impl FrequencyTable {
    /// Count byte occurrences over `input`
    pub fn build(input: &[u8]) -> Result<Self> {
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }
        let mut counts = BTreeMap::new();
        for &byte in input {
            *counts.entry(byte).or_insert(0u64) += 1;
        }
        Ok(Self { counts })
    }

    /// Rebuild a table from persisted `(byte, count)` entries
    pub fn from_entries<I: IntoIterator<Item = (u8, u64)>>(entries: I) -> Result<Self> {
        let counts: BTreeMap<u8, u64> = entries.into_iter().filter(|&(_, c)| c > 0).collect();
        if counts.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(Self { counts })
    }

    pub fn get(&self, byte: u8) -> Option<u64> {
        self.counts.get(&byte).copied()
    }

    /// Number of distinct bytes
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts (equals the input length)
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in ascending byte order
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&b, &c)| (b, c))
    }
}

/// Index of a node within the tree's arena
pub type NodeId = usize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A symbol-carrying leaf
    Leaf(u8),
    /// An internal node owning two children by arena index
    Internal { left: NodeId, right: NodeId },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub freq: u64,
    pub kind: NodeKind,
}

/// A Huffman tree stored as an arena of index-addressed nodes.
///
/// Built by repeatedly merging the two lowest-frequency nodes. Equal
/// frequencies resolve by insertion order (leaves in ascending byte
/// order, then internal nodes in creation order), so the same frequency
/// table always yields the same tree shape — the decoder relies on this
/// to rebuild the encoder's tree from the persisted table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    pub fn build(table: &FrequencyTable) -> Result<Self> {
        if table.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut nodes = Vec::with_capacity(table.len() * 2 - 1);
        let mut heap: BinaryHeap<Reverse<(u64, u32, NodeId)>> =
            BinaryHeap::with_capacity(table.len());
        let mut seq = 0u32;

        for (byte, freq) in table.iter() {
            let id = nodes.len();
            nodes.push(Node { freq, kind: NodeKind::Leaf(byte) });
            heap.push(Reverse((freq, seq, id)));
            seq += 1;
        }

        // First pop becomes the left child, second the right
        while heap.len() > 1 {
            let Reverse((left_freq, _, left)) = heap.pop().unwrap();
            let Reverse((right_freq, _, right)) = heap.pop().unwrap();

            let freq = left_freq + right_freq;
            let id = nodes.len();
            nodes.push(Node { freq, kind: NodeKind::Internal { left, right } });
            heap.push(Reverse((freq, seq, id)));
            seq += 1;
        }

        let Reverse((_, _, root)) = heap.pop().unwrap();
        Ok(Self { nodes, root })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Frequency of the root node (equals the input length)
    pub fn root_frequency(&self) -> u64 {
        self.nodes[self.root].freq
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| matches!(n.kind, NodeKind::Leaf(_))).count()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Degenerate single-symbol tree: the root is itself a leaf
    pub fn is_single_leaf(&self) -> bool {
        matches!(self.nodes[self.root].kind, NodeKind::Leaf(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_table_counts() {
        let table = FrequencyTable::build(b"abracadabra").unwrap();
        assert_eq!(table.get(b'a'), Some(5));
        assert_eq!(table.get(b'b'), Some(2));
        assert_eq!(table.get(b'r'), Some(2));
        assert_eq!(table.get(b'c'), Some(1));
        assert_eq!(table.get(b'd'), Some(1));
        assert_eq!(table.get(b'z'), None);
        assert_eq!(table.len(), 5);
        assert_eq!(table.total(), 11);
    }

    #[test]
    fn test_frequency_table_empty_input() {
        assert!(matches!(FrequencyTable::build(b""), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_single_leaf_tree() {
        let table = FrequencyTable::build(b"aaaa").unwrap();
        let tree = HuffmanTree::build(&table).unwrap();
        assert!(tree.is_single_leaf());
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.root_frequency(), 4);
    }

    #[test]
    fn test_internal_node_count() {
        // N distinct leaves => exactly N-1 internal nodes
        let table = FrequencyTable::build(b"aabbbccccdddddeee").unwrap();
        let tree = HuffmanTree::build(&table).unwrap();
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.node_count(), 7);
        assert_eq!(tree.root_frequency(), 17);
    }

    #[test]
    fn test_children_frequencies_sum() {
        let table = FrequencyTable::build(b"hello world").unwrap();
        let tree = HuffmanTree::build(&table).unwrap();
        for node in (0..tree.node_count()).map(|id| tree.node(id)) {
            if let NodeKind::Internal { left, right } = node.kind {
                assert_eq!(node.freq, tree.node(left).freq + tree.node(right).freq);
            }
        }
    }

    #[test]
    fn test_deterministic_ties() {
        // All frequencies equal: shape must still be reproducible
        let input = b"abcdefgh";
        let t1 = HuffmanTree::build(&FrequencyTable::build(input).unwrap()).unwrap();
        let t2 = HuffmanTree::build(&FrequencyTable::build(input).unwrap()).unwrap();
        assert_eq!(t1, t2);
    }

    #[test]
    fn test_rebuild_from_entries_matches() {
        let table = FrequencyTable::build(b"mississippi").unwrap();
        let rebuilt = FrequencyTable::from_entries(table.iter()).unwrap();
        assert_eq!(table, rebuilt);
        assert_eq!(
            HuffmanTree::build(&table).unwrap(),
            HuffmanTree::build(&rebuilt).unwrap()
        );
    }
}
