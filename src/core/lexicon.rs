//! Dictionary prefix tree
//!
//! The Lexicon stores every dictionary word in an arena of letter nodes addressed by
//! [`NodeId`]. It is built once and only read afterwards.

use super::Letter;

/// Stable index of a node inside a [`Lexicon`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node, present in every lexicon
    pub const ROOT: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One letter position reachable from the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode {
    letter: Option<Letter>,
    depth: usize,
    is_word_end: bool,
    children: Vec<(Letter, NodeId)>,
}

impl TrieNode {
    const fn new(letter: Option<Letter>, depth: usize) -> Self {
        Self {
            letter,
            depth,
            is_word_end: false,
            children: Vec::new(),
        }
    }

    /// The letter on the edge into this node, `None` for the root
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<Letter> {
        self.letter
    }

    /// 1-based position of this letter within a word (root = 0)
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    #[must_use]
    pub const fn is_word_end(&self) -> bool {
        self.is_word_end
    }

    /// Children in insertion order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[(Letter, NodeId)] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Prefix tree over the dictionary
///
/// # Examples
/// ```
/// use ghost_solver::core::{Letter, Lexicon};
///
/// let lexicon = Lexicon::from_words(["bat", "bath", "bathe"]);
/// let node = lexicon.walk("bath").unwrap();
/// assert!(lexicon.node(node).is_word_end());
/// assert_eq!(lexicon.node(node).depth(), 4);
///
/// let t = lexicon.walk("bat").unwrap();
/// let h = Letter::from_char('h').unwrap();
/// assert_eq!(lexicon.child(t, h), Some(node));
/// ```
#[derive(Debug, Clone)]
pub struct Lexicon {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Create a lexicon holding only the root
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new(None, 0)],
            word_count: 0,
        }
    }

    /// Build a lexicon from a word list, skipping words that cannot be inserted
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        let mut skipped = 0usize;

        for word in words {
            if !lexicon.insert(word.as_ref()) {
                skipped += 1;
            }
        }

        log::info!(
            "built lexicon: {} words, {} nodes, {} entries skipped",
            lexicon.word_count,
            lexicon.nodes.len(),
            skipped
        );
        lexicon
    }

    /// Insert a word, returning whether it was accepted
    ///
    /// The word is lowercased first. Empty words and words with characters outside
    /// `a`-`z` are skipped. Inserting the same word twice changes nothing.
    pub fn insert(&mut self, word: &str) -> bool {
        let normalized = word.trim().to_lowercase();
        if normalized.is_empty() {
            return false;
        }

        let Some(letters) = normalized
            .bytes()
            .map(Letter::from_byte)
            .collect::<Option<Vec<_>>>()
        else {
            log::trace!("skipping non-alphabetic entry {normalized:?}");
            return false;
        };

        let mut current = NodeId::ROOT;
        for (position, &letter) in letters.iter().enumerate() {
            current = match self.child(current, letter) {
                Some(existing) => existing,
                None => self.push_child(current, letter, position + 1),
            };
        }

        let node = &mut self.nodes[current.0];
        if !node.is_word_end {
            node.is_word_end = true;
            self.word_count += 1;
        }
        true
    }

    fn push_child(&mut self, parent: NodeId, letter: Letter, depth: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::new(Some(letter), depth));
        self.nodes[parent.0].children.push((letter, id));
        id
    }

    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Access a node by id
    ///
    /// # Panics
    /// Panics if `id` did not come from this lexicon.
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    /// Child of `id` reached through `letter`, if any
    #[must_use]
    pub fn child(&self, id: NodeId, letter: Letter) -> Option<NodeId> {
        self.nodes[id.0]
            .children
            .iter()
            .find(|(l, _)| *l == letter)
            .map(|&(_, child)| child)
    }

    /// Follow a whole prefix from the root
    ///
    /// Returns `None` if the prefix leaves the tree or holds a non-letter.
    #[must_use]
    pub fn walk(&self, prefix: &str) -> Option<NodeId> {
        prefix.bytes().try_fold(NodeId::ROOT, |node, b| {
            self.child(node, Letter::from_byte(b)?)
        })
    }

    /// All word-end nodes at or below `id` deeper than `min_length`
    ///
    /// Every branch is explored completely, so a branch holding several completions
    /// at different depths reports all of them. Returns an empty vector when nothing
    /// qualifies.
    #[must_use]
    pub fn collect_word_ends(&self, id: NodeId, min_length: usize) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            let node = &self.nodes[current.0];
            if node.is_word_end && node.depth > min_length {
                found.push(current);
            }
            // Reverse so siblings are visited in insertion order
            stack.extend(node.children.iter().rev().map(|&(_, child)| child));
        }

        found
    }

    /// True when the root has no children, i.e. no game can be played
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.nodes[0].has_children()
    }

    /// Number of distinct words stored
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes including the root
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over every node id, root first
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }
}
