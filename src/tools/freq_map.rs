//! Symbol frequency map.
//!
//! Keys are kept in the order of first occurrence.  That order is the
//! tie-break order when equal frequencies are loaded into the sorted list,
//! so iteration must never depend on hashing.

use std::collections::HashMap;
use std::hash::Hash;

pub struct FrequencyMap<S: Eq + Hash + Clone> {
    /// (symbol,count) in order of first occurrence
    entries: Vec<(S,usize)>,
    /// map from symbol to its slot in `entries`
    slot: HashMap<S,usize>
}

impl <S: Eq + Hash + Clone> FrequencyMap<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            slot: HashMap::new()
        }
    }
    /// Count every symbol in `input`.
    pub fn compute(input: &[S]) -> Self {
        let mut ans = Self::new();
        for sym in input {
            ans.add(sym,1);
        }
        ans
    }
    /// add `count` occurrences of `sym`, creating the entry if needed
    fn add(&mut self,sym: &S,count: usize) {
        match self.slot.get(sym) {
            Some(i) => self.entries[*i].1 += count,
            None => {
                self.slot.insert(sym.clone(),self.entries.len());
                self.entries.push((sym.clone(),count));
            }
        }
    }
    /// Fold the counts of `other` into this map.  Symbols new to this map
    /// are appended in the order `other` first saw them, so counting
    /// consecutive partitions and merging them left to right gives the same
    /// map as counting the whole input.
    pub fn merge(&mut self,other: &Self) {
        for (sym,count) in other.iter() {
            self.add(sym,count);
        }
    }
    pub fn get(&self,sym: &S) -> Option<usize> {
        self.slot.get(sym).map(|i| self.entries[*i].1)
    }
    /// number of distinct symbols
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// sum of all counts, equals the length of the counted input
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_,c)| c).sum()
    }
    /// iterate (symbol,count) in order of first occurrence
    pub fn iter(&self) -> impl Iterator<Item=(&S,usize)> {
        self.entries.iter().map(|(s,c)| (s,*c))
    }
}

impl <S: Eq + Hash + Clone> Default for FrequencyMap<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn counts_and_order() {
    let input: Vec<char> = "abracadabra".chars().collect();
    let freq = FrequencyMap::compute(&input);
    let order: Vec<(char,usize)> = freq.iter().map(|(s,c)| (*s,c)).collect();
    assert_eq!(order,vec![('a',5),('b',2),('r',2),('c',1),('d',1)]);
    assert_eq!(freq.get(&'r'),Some(2));
    assert_eq!(freq.get(&'z'),None);
    assert_eq!(freq.total(),input.len());
}

#[test]
fn empty_input() {
    let freq: FrequencyMap<u8> = FrequencyMap::compute(&[]);
    assert!(freq.is_empty());
    assert_eq!(freq.total(),0);
}

#[test]
fn merge_partitions() {
    let input = "mississippi river".as_bytes();
    let whole = FrequencyMap::compute(input);
    let mut left = FrequencyMap::compute(&input[0..6]);
    let right = FrequencyMap::compute(&input[6..]);
    left.merge(&right);
    let a: Vec<(u8,usize)> = whole.iter().map(|(s,c)| (*s,c)).collect();
    let b: Vec<(u8,usize)> = left.iter().map(|(s,c)| (*s,c)).collect();
    assert_eq!(a,b);
}
