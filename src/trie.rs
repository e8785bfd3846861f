//! Letter-indexed prefix tree used to prune the board search.
//!
//! Each node owns up to 26 children, one slot per letter a-z, plus a flag
//! marking that the path from the root spells a complete dictionary word.
//! The tree is built once and is read-only afterwards; there is no removal.

const ALPHABET_SIZE: usize = 26;

pub struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    terminal: bool,
}

impl TrieNode {
    pub fn new() -> Self {
        Self {
            children: std::array::from_fn(|_| None),
            terminal: false,
        }
    }

    /// Inserts a lowercase ASCII word, creating missing nodes along the way.
    /// Inserting the same word twice has no additional effect.
    ///
    /// Callers must only pass words containing bytes in `a..=z`; the
    /// dictionary filter guarantees this.
    pub fn insert(&mut self, word: &str) {
        let mut cur = self;
        for &letter in word.as_bytes() {
            let slot = (letter - b'a') as usize;
            cur = cur.children[slot].get_or_insert_with(|| Box::new(TrieNode::new()));
        }
        cur.terminal = true;
    }

    /// O(1) child lookup by letter. Returns `None` for any byte outside
    /// `a..=z`, so board cells holding unexpected characters simply prune.
    pub fn get_child(&self, letter: u8) -> Option<&TrieNode> {
        if !letter.is_ascii_lowercase() {
            return None;
        }
        self.children[(letter - b'a') as usize].as_deref()
    }

    /// Whether the path from the root to this node spells a complete word.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Whether any of the 26 child slots is occupied. A terminal node with
    /// no children is a dead subtree for any further search.
    pub fn has_children(&self) -> bool {
        self.children.iter().any(|c| c.is_some())
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk<'a>(root: &'a TrieNode, word: &str) -> Option<&'a TrieNode> {
        let mut cur = root;
        for &b in word.as_bytes() {
            cur = cur.get_child(b)?;
        }
        Some(cur)
    }

    #[test]
    fn test_insert_then_walk_reaches_terminal() {
        let mut root = TrieNode::new();
        root.insert("cat");
        root.insert("cattle");

        let node = walk(&root, "cat").expect("path for inserted word");
        assert!(node.is_terminal());
        assert!(node.has_children()); // "cattle" continues below it

        let node = walk(&root, "cattle").expect("path for inserted word");
        assert!(node.is_terminal());
        assert!(!node.has_children());
    }

    #[test]
    fn test_prefix_of_word_is_not_terminal() {
        let mut root = TrieNode::new();
        root.insert("mouse");

        let node = walk(&root, "mou").expect("prefix path exists");
        assert!(!node.is_terminal());
        assert!(node.has_children());
    }

    #[test]
    fn test_non_inserted_word_dead_ends() {
        let mut root = TrieNode::new();
        root.insert("dog");

        assert!(walk(&root, "dot").is_none());
        assert!(walk(&root, "cat").is_none());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut root = TrieNode::new();
        root.insert("moose");
        root.insert("moose");

        let node = walk(&root, "moose").unwrap();
        assert!(node.is_terminal());
        assert!(!node.has_children());
    }

    #[test]
    fn test_empty_root_has_no_children() {
        let root = TrieNode::new();
        assert!(!root.has_children());
        assert!(!root.is_terminal());
    }

    #[test]
    fn test_get_child_rejects_non_lowercase() {
        let mut root = TrieNode::new();
        root.insert("abc");
        assert!(root.get_child(b'A').is_none());
        assert!(root.get_child(b'1').is_none());
        assert!(root.get_child(b' ').is_none());
        assert!(root.get_child(b'a').is_some());
    }
}
