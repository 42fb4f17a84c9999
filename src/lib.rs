//! An ordered map and an ordered set implemented with an arena-allocated red-black tree.
//!
//! The tree keeps its nodes in a typed arena and links them with arena indices, so child
//! links are exclusively owned by the tree while parent back-links stay non-owning. The
//! parent links drive in-order traversal and the cursor-based range queries
//! (`lower_bound`, `upper_bound`, and `find`).

pub mod arena;
mod entry;
pub mod red_black_tree;
