use lazy_static::lazy_static;

use super::tokens::{TokenKind, KEYWORDS};

lazy_static! {
    pub static ref KEYWORD_TRIE: KeywordTrie = KeywordTrie::new(&KEYWORDS);
}

#[derive(Debug, Default)]
struct Node {
    edges: Vec<(u8, usize)>,
    accept: Option<TokenKind>,
}

/// Byte trie over the keyword spellings. Keywords with a common prefix
/// (`in`/`impl`/`if`, `else`/`enum`, `true`/`trait`) share the path for it.
#[derive(Debug)]
pub struct KeywordTrie {
    nodes: Vec<Node>,
}

impl KeywordTrie {
    pub fn new(keywords: &[(&str, TokenKind)]) -> Self {
        let mut trie = KeywordTrie {
            nodes: vec![Node::default()],
        };

        for (spelling, kind) in keywords {
            let mut state = 0;
            for byte in spelling.bytes() {
                state = match trie.step(state, byte) {
                    Some(next) => next,
                    None => {
                        trie.nodes.push(Node::default());
                        let next = trie.nodes.len() - 1;
                        trie.nodes[state].edges.push((byte, next));
                        next
                    }
                };
            }
            trie.nodes[state].accept = Some(*kind);
        }

        trie
    }

    fn step(&self, state: usize, byte: u8) -> Option<usize> {
        self.nodes[state]
            .edges
            .iter()
            .find(|(edge, _)| *edge == byte)
            .map(|(_, next)| *next)
    }

    /// Classifies a complete identifier run. Only a walk that consumes every
    /// byte and stops on an accepting node is a keyword, so `forest` never
    /// yields `for`.
    pub fn lookup(&self, word: &str) -> Option<TokenKind> {
        let mut state = 0;
        for byte in word.bytes() {
            state = self.step(state, byte)?;
        }
        self.nodes[state].accept
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_is_found() {
        for (spelling, kind) in KEYWORDS {
            assert_eq!(KEYWORD_TRIE.lookup(spelling), Some(kind), "{spelling}");
        }
    }

    #[test]
    fn test_prefixes_and_extensions_are_not_keywords() {
        for word in ["f", "fo", "forest", "lets", "i", "im", "impls", "t", "tru", "", "Fn", "LET"] {
            assert_eq!(KEYWORD_TRIE.lookup(word), None, "{word}");
        }
    }

    #[test]
    fn test_shared_prefixes_collapse() {
        let total_bytes: usize = KEYWORDS.iter().map(|(spelling, _)| spelling.len()).sum();
        assert!(KEYWORD_TRIE.node_count() < total_bytes + 1);
    }

    #[test]
    fn test_keyword_that_is_a_prefix_of_another() {
        let trie = KeywordTrie::new(&[("in", TokenKind::In), ("int", TokenKind::Identifier)]);
        assert_eq!(trie.lookup("in"), Some(TokenKind::In));
        assert_eq!(trie.lookup("int"), Some(TokenKind::Identifier));
        assert_eq!(trie.lookup("i"), None);
    }
}
