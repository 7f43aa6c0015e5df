//! Sorted list used as a simple priority queue.
//!
//! Entries are kept in ascending order of an integer key.  Insertion is a
//! linear scan from the front, the new entry goes in front of the first
//! entry with a strictly greater key, so entries with equal keys come out
//! in the order they went in.  Removal is always by position.
use num_traits::PrimInt;
use crate::Error;

pub struct SortedList<K: PrimInt,T> {
    entries: Vec<(K,T)>
}

impl <K: PrimInt,T> SortedList<K,T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new()
        }
    }
    /// Insert `item` with sorting `key`, returns the position it landed in.
    pub fn insert(&mut self,key: K,item: T) -> usize {
        let mut pos = 0;
        while pos < self.entries.len() && self.entries[pos].0 <= key {
            pos += 1;
        }
        self.entries.insert(pos,(key,item));
        pos
    }
    /// remove and return the entry with the lowest key
    pub fn remove_first(&mut self) -> Result<T,Error> {
        self.remove_at(0)
    }
    /// remove and return the entry at `index`
    pub fn remove_at(&mut self,index: usize) -> Result<T,Error> {
        if index >= self.entries.len() {
            return Err(Error::UnderflowViolation);
        }
        Ok(self.entries.remove(index).1)
    }
    pub fn get(&self,index: usize) -> Option<&T> {
        self.entries.get(index).map(|(_,item)| item)
    }
    pub fn key_at(&self,index: usize) -> Option<K> {
        self.entries.get(index).map(|(key,_)| *key)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// iterate (key,item) in ascending key order, reverse for descending
    pub fn iter(&self) -> impl DoubleEndedIterator<Item=(K,&T)> {
        self.entries.iter().map(|(key,item)| (*key,item))
    }
}

impl <K: PrimInt,T> Default for SortedList<K,T> {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn ascending_with_fifo_ties() {
    let mut list: SortedList<usize,&str> = SortedList::new();
    list.insert(3,"c1");
    list.insert(1,"a");
    list.insert(3,"c2");
    list.insert(2,"b");
    assert_eq!(list.insert(3,"c3"),4);
    assert_eq!(list.insert(0,"z"),0);
    let order: Vec<&str> = list.iter().map(|(_,s)| *s).collect();
    assert_eq!(order,vec!["z","a","b","c1","c2","c3"]);
    assert_eq!(list.key_at(3),Some(3));
}

#[test]
fn positional_access() {
    let mut list: SortedList<u32,char> = SortedList::new();
    for (k,c) in [(5,'e'),(2,'b'),(4,'d')] {
        list.insert(k,c);
    }
    assert_eq!(list.get(1),Some(&'d'));
    assert_eq!(list.get(3),None);
    assert_eq!(list.remove_at(1),Ok('d'));
    assert_eq!(list.remove_first(),Ok('b'));
    assert_eq!(list.len(),1);
    assert_eq!(list.remove_at(1),Err(Error::UnderflowViolation));
}

#[test]
fn underflow() {
    let mut list: SortedList<u8,()> = SortedList::new();
    assert!(list.is_empty());
    assert_eq!(list.remove_first(),Err(Error::UnderflowViolation));
}
