use super::tree::{HuffmanTree, NodeId, NodeKind};
use std::collections::BTreeMap;
use std::fmt;

/// A variable-length prefix code: the root-to-leaf path through the tree
/// (left = 0, right = 1).
///
/// Depth can reach `leaf_count - 1` bits for pathological frequency
/// distributions, so the bits are kept as a sequence rather than packed
/// into a fixed-width integer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Code {
    bits: Vec<u8>,
}

impl Code {
    fn from_path(path: &[u8]) -> Self {
        Self { bits: path.to_vec() }
    }

    /// Code length in bits (always >= 1)
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bits from most significant to least, as booleans
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().map(|&b| b != 0)
    }

    /// Whether `self` is a prefix of `other`
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.len() >= self.bits.len() && other.bits[..self.bits.len()] == self.bits[..]
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// Mapping from byte value to its prefix-free code.
///
/// Prefix-freeness is structural: codes are leaf paths, and no leaf lies
/// on the path to another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    /// Assign codes by pre-order traversal of the tree
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();

        // A lone-leaf root has no branch to traverse; its one symbol
        // still needs a non-empty code.
        if let NodeKind::Leaf(byte) = tree.node(tree.root()).kind {
            codes.insert(byte, Code::from_path(&[0]));
            return Self { codes };
        }

        let mut path = Vec::new();
        assign(tree, tree.root(), &mut path, &mut codes);
        Self { codes }
    }

    pub fn get(&self, byte: u8) -> Option<&Code> {
        self.codes.get(&byte)
    }

    /// Number of coded symbols
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in ascending byte order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes.iter().map(|(&b, c)| (b, c))
    }
}

fn assign(tree: &HuffmanTree, id: NodeId, path: &mut Vec<u8>, codes: &mut BTreeMap<u8, Code>) {
    match tree.node(id).kind {
        NodeKind::Leaf(byte) => {
            codes.insert(byte, Code::from_path(path));
        }
        NodeKind::Internal { left, right } => {
            path.push(0);
            assign(tree, left, path, codes);
            path.pop();

            path.push(1);
            assign(tree, right, path, codes);
            path.pop();
        }
    }
}
