pub mod codes;
pub mod decoder;
pub mod encoder;
pub mod tree;

pub use codes::{Code, CodeTable};
pub use decoder::decode;
pub use encoder::{encode, HuffmanEncoded};
pub use tree::{FrequencyTable, HuffmanTree, Node, NodeId, NodeKind};
