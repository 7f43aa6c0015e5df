//! Static Huffman tree.
//!
//! Nodes are kept in an arena and refer to their children by index.  The merge
//! loop only moves indices through the sorted list, a node is never copied or
//! re-linked once it has a parent.  Leaves are created first, in the order the
//! frequency map yields them, so leaf `i` is the `i`th symbol of the map.

use std::hash::Hash;
use std::fmt::Debug;
use crate::tools::freq_map::FrequencyMap;
use crate::tools::sorted_list::SortedList;
use crate::Error;

#[derive(Debug,Clone,PartialEq)]
pub enum Kind<S> {
    Leaf(S),
    /// indices of the left (bit 0) and right (bit 1) sons
    Internal {
        left: usize,
        right: usize
    }
}

#[derive(Debug,Clone)]
pub struct Node<S> {
    /// frequency of the symbol, or sum of the sons' frequencies
    pub freq: usize,
    /// concatenation of all symbols below this node, only used for display
    pub value: Vec<S>,
    pub kind: Kind<S>
}

impl <S> Node<S> {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind,Kind::Leaf(_))
    }
}

pub struct HuffmanTree<S> {
    nodes: Vec<Node<S>>,
    root: usize
}

impl <S: Eq + Hash + Clone + Debug> HuffmanTree<S> {
    /// Build the tree from the frequency map.  Returns `None` if the map is empty.
    /// Errors can only come from a broken sorted list and indicate a bug.
    pub fn build(freq: &FrequencyMap<S>) -> Result<Option<Self>,Error> {
        if freq.is_empty() {
            log::debug!("no symbols, no tree");
            return Ok(None);
        }
        let mut nodes: Vec<Node<S>> = Vec::with_capacity(2*freq.len() - 1);
        let mut queue: SortedList<usize,usize> = SortedList::new();
        for (sym,count) in freq.iter() {
            queue.insert(count,nodes.len());
            nodes.push(Node {
                freq: count,
                value: vec![sym.clone()],
                kind: Kind::Leaf(sym.clone())
            });
        }
        // each pass replaces two entries with one
        while queue.len() > 1 {
            let left = queue.remove_first()?;
            let right = queue.remove_first()?;
            let weight = nodes[left].freq + nodes[right].freq;
            let value = [nodes[left].value.as_slice(),nodes[right].value.as_slice()].concat();
            log::trace!("merge {} and {} into {} ({})",left,right,nodes.len(),weight);
            queue.insert(weight,nodes.len());
            nodes.push(Node {
                freq: weight,
                value,
                kind: Kind::Internal { left, right }
            });
        }
        let root = queue.remove_first()?;
        let tree = Self { nodes, root };
        log::debug!("tree has {} leaves, weight {}, depth {}",tree.leaf_count(),tree.weight(),tree.depth());
        log::trace!("\n{}",tree.render());
        Ok(Some(tree))
    }
}

impl <S: Debug> HuffmanTree<S> {
    pub fn root(&self) -> usize {
        self.root
    }
    pub fn node(&self,index: usize) -> Option<&Node<S>> {
        self.nodes.get(index)
    }
    /// frequency of the root, equals the number of symbols coded
    pub fn weight(&self) -> usize {
        self.nodes[self.root].freq
    }
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }
    /// length of the longest path from root to leaf, 0 for a lone leaf
    pub fn depth(&self) -> usize {
        let mut ans = 0;
        let mut stack = vec![(self.root,0)];
        while let Some((i,d)) = stack.pop() {
            match &self.nodes[i].kind {
                Kind::Leaf(_) => ans = ans.max(d),
                Kind::Internal { left, right } => {
                    stack.push((*right,d+1));
                    stack.push((*left,d+1));
                }
            }
        }
        ans
    }
    /// Indented dump of the tree, one node per line, left son first.
    pub fn render(&self) -> String {
        let mut ans = String::new();
        let mut stack = vec![(self.root,0,"root")];
        while let Some((i,d,label)) = stack.pop() {
            let node = &self.nodes[i];
            let indent = "  ".repeat(d);
            match &node.kind {
                Kind::Leaf(sym) => {
                    ans += &format!("{}{}-> Leaf {:?} [freq: {}]\n",indent,label,sym,node.freq);
                },
                Kind::Internal { left, right } => {
                    ans += &format!("{}{}-> {:?} [freq: {}]\n",indent,label,node.value,node.freq);
                    stack.push((*right,d+1,"R"));
                    stack.push((*left,d+1,"L"));
                }
            }
        }
        ans
    }
}

#[cfg(test)]
fn tree_of(s: &str) -> HuffmanTree<char> {
    let input: Vec<char> = s.chars().collect();
    HuffmanTree::build(&FrequencyMap::compute(&input)).expect("build failed").expect("no tree")
}

#[test]
fn empty_map_gives_no_tree() {
    let freq: FrequencyMap<char> = FrequencyMap::new();
    assert!(HuffmanTree::build(&freq).expect("build failed").is_none());
}

#[test]
fn lone_leaf() {
    let tree = tree_of("aaaa");
    let root = tree.node(tree.root()).unwrap();
    assert_eq!(root.kind,Kind::Leaf('a'));
    assert_eq!(tree.weight(),4);
    assert_eq!(tree.depth(),0);
}

#[test]
fn two_leaves_merge_directly() {
    let tree = tree_of("aabb");
    let root = tree.node(tree.root()).unwrap();
    assert_eq!(root.freq,4);
    assert_eq!(root.value,vec!['a','b']);
    match root.kind {
        Kind::Internal { left, right } => {
            assert_eq!(tree.node(left).unwrap().kind,Kind::Leaf('a'));
            assert_eq!(tree.node(right).unwrap().kind,Kind::Leaf('b'));
        },
        _ => panic!("root should be internal")
    }
}

#[test]
fn merge_order() {
    // a:1 b:1 c:2 d:4
    // (a,b)=2 goes after c, so c is merged first on the left
    let tree = tree_of("abccdddd");
    assert_eq!(tree.weight(),8);
    assert_eq!(tree.leaf_count(),4);
    assert_eq!(tree.depth(),3);
    let root = tree.node(tree.root()).unwrap();
    assert_eq!(root.value,vec!['d','c','a','b']);
    let expected = "\
root-> ['d', 'c', 'a', 'b'] [freq: 8]
  L-> Leaf 'd' [freq: 4]
  R-> ['c', 'a', 'b'] [freq: 4]
    L-> Leaf 'c' [freq: 2]
    R-> ['a', 'b'] [freq: 2]
      L-> Leaf 'a' [freq: 1]
      R-> Leaf 'b' [freq: 1]
";
    assert_eq!(tree.render(),expected);
}
