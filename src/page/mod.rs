//! Page module for admin tables and node bodies.

pub mod content;
pub mod node;
pub mod tables;

pub use content::{absolutize_src, extract_node_content};
pub use node::{ContentTypes, NodeRow};
pub use tables::{parse_content_types, parse_node_rows};
