//! A sideways drawing of a tree for debugging. The right subtree is drawn above its parent and the
//! left subtree below, so reading the keys top to bottom gives them in descending order.

use std::fmt;

use crate::node::Node;
use crate::Tree;

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write_node(f, root, &mut String::new(), true),
            None => Ok(()),
        }
    }
}

fn write_node<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &mut String,
    is_left: bool,
) -> fmt::Result {
    let prefix_len = prefix.len();

    if let Some(right) = node.right() {
        prefix.push_str(if is_left { "│   " } else { "    " });
        write_node(f, right, prefix, false)?;
        prefix.truncate(prefix_len);
    }

    writeln!(
        f,
        "{}{}{}",
        prefix,
        if is_left { "└── " } else { "┌── " },
        node.key()
    )?;

    if let Some(left) = node.left() {
        prefix.push_str(if is_left { "    " } else { "│   " });
        write_node(f, left, prefix, true)?;
        prefix.truncate(prefix_len);
    }

    Ok(())
}
