//! Static Huffman Coding
//!
//! Builds the prefix code for a symbol stream and uses it to encode and decode.
//! The encoded stream is a `String` of `'0'` and `'1'` characters, one per bit.
//!
//! * The frequency map is built from the whole input before any coding starts
//! * Equal frequencies are resolved by order of first occurrence, so the same
//!   input always produces the same code table
//! * An input with a single distinct symbol codes that symbol as `"0"`

use std::collections::HashMap;
use std::hash::Hash;
use std::fmt::Debug;
use crate::tools::freq_map::FrequencyMap;
use crate::tools::huff_tree::{HuffmanTree,Kind};
use crate::{Error,Options};

/// Map from symbols to codes, with the reverse map needed for decoding.
/// Iteration yields symbols in tree order, left branches first.
pub struct CodeTable<S: Eq + Hash + Clone> {
    entries: Vec<(S,String)>,
    by_symbol: HashMap<S,usize>,
    by_code: HashMap<String,usize>,
    max_len: usize
}

impl <S: Eq + Hash + Clone> CodeTable<S> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_symbol: HashMap::new(),
            by_code: HashMap::new(),
            max_len: 0
        }
    }
    fn insert(&mut self,sym: S,code: String) {
        self.max_len = self.max_len.max(code.len());
        self.by_symbol.insert(sym.clone(),self.entries.len());
        self.by_code.insert(code.clone(),self.entries.len());
        self.entries.push((sym,code));
    }
    /// code for `sym`
    pub fn get(&self,sym: &S) -> Option<&str> {
        self.by_symbol.get(sym).map(|i| self.entries[*i].1.as_str())
    }
    /// symbol whose code is exactly `code`
    pub fn symbol(&self,code: &str) -> Option<&S> {
        self.by_code.get(code).map(|i| &self.entries[*i].0)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// length of the longest code, 0 if the table is empty
    pub fn max_code_len(&self) -> usize {
        self.max_len
    }
    pub fn iter(&self) -> impl Iterator<Item=(&S,&str)> {
        self.entries.iter().map(|(s,c)| (s,c.as_str()))
    }
}

/// Result of the encoding pipeline
pub struct Encoding<S: Eq + Hash + Clone> {
    pub freq: FrequencyMap<S>,
    pub table: CodeTable<S>,
    pub stream: String
}

/// Walk the tree and assign each leaf the path leading to it,
/// `'0'` for a left branch and `'1'` for a right branch.
pub fn build_codes<S: Eq + Hash + Clone + Debug>(tree: Option<&HuffmanTree<S>>) -> CodeTable<S> {
    let mut table = CodeTable::new();
    let tree = match tree {
        Some(t) => t,
        None => return table
    };
    let mut stack: Vec<(usize,String)> = vec![(tree.root(),String::new())];
    while let Some((i,path)) = stack.pop() {
        let node = match tree.node(i) {
            Some(n) => n,
            None => continue
        };
        match &node.kind {
            Kind::Leaf(sym) => {
                // a lone leaf has an empty path, it still needs one bit
                let code = match path.is_empty() {
                    true => "0".to_string(),
                    false => path
                };
                log::trace!("{:?} -> {}",sym,code);
                table.insert(sym.clone(),code);
            },
            Kind::Internal { left, right } => {
                stack.push((*right,[path.as_str(),"1"].concat()));
                stack.push((*left,[path.as_str(),"0"].concat()));
            }
        }
    }
    table
}

/// Concatenate the codes of `input` in order.
pub fn encode<S: Eq + Hash + Clone + Debug>(table: &CodeTable<S>,input: &[S]) -> Result<String,Error> {
    let mut ans = String::new();
    for sym in input {
        match table.get(sym) {
            Some(code) => ans += code,
            None => {
                log::error!("no code for {:?}",sym);
                return Err(Error::LookupMiss(format!("{:?}",sym)));
            }
        }
    }
    Ok(ans)
}

/// Grow a candidate code one bit at a time until it matches the table,
/// then emit the symbol and start over.  Because the code is prefix-free the
/// first match is the only one possible.
pub fn decode<S: Eq + Hash + Clone>(stream: &str,table: &CodeTable<S>) -> Result<Vec<S>,Error> {
    let mut ans = Vec::new();
    let mut candidate = String::new();
    let mut start = 0;
    for (pos,bit) in stream.chars().enumerate() {
        if bit != '0' && bit != '1' {
            return Err(Error::InvalidBit { position: pos, found: bit });
        }
        candidate.push(bit);
        if let Some(sym) = table.symbol(&candidate) {
            ans.push(sym.clone());
            candidate.clear();
            start = pos + 1;
        } else if candidate.len() >= table.max_code_len() {
            // no code is this long, nothing further can match
            return Err(Error::DecodeExhaustion { position: start, pending: candidate });
        }
    }
    if !candidate.is_empty() {
        return Err(Error::DecodeExhaustion { position: start, pending: candidate });
    }
    Ok(ans)
}

/// Main encoding function, runs the whole pipeline on `input`.
/// Empty input is an error, the caller decides how to report it.
pub fn compress<S: Eq + Hash + Clone + Debug>(input: &[S],opt: &Options) -> Result<Encoding<S>,Error> {
    if input.is_empty() {
        log::warn!("empty input, nothing to encode");
        return Err(Error::EmptyInput);
    }
    if input.len() > opt.max_symbols {
        return Err(Error::InputTooLarge(input.len()));
    }
    let freq = FrequencyMap::compute(input);
    log::debug!("{} symbols, {} distinct",freq.total(),freq.len());
    let tree = HuffmanTree::build(&freq)?;
    let table = build_codes(tree.as_ref());
    log::debug!("code table has {} entries, longest code {} bits",table.len(),table.max_code_len());
    let stream = encode(&table,input)?;
    log::debug!("encoded {} symbols into {} bits",input.len(),stream.len());
    if opt.verify {
        let check = decode(&stream,&table)?;
        if check != input {
            log::error!("round trip produced {} symbols, expected {}",check.len(),input.len());
            return Err(Error::RoundTripMismatch);
        }
    }
    Ok(Encoding { freq, table, stream })
}

// *************** TESTS *****************

#[cfg(test)]
fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[cfg(test)]
fn table_vec(table: &CodeTable<char>) -> Vec<(char,String)> {
    table.iter().map(|(s,c)| (*s,c.to_string())).collect()
}

#[test]
fn single_symbol() {
    let input = chars("aaaa");
    let enc = compress(&input,&crate::STD_OPTIONS).expect("compression failed");
    assert_eq!(enc.freq.get(&'a'),Some(4));
    assert_eq!(table_vec(&enc.table),vec![('a',"0".to_string())]);
    assert_eq!(enc.stream,"0000");
    assert_eq!(decode("0000",&enc.table).expect("decode failed"),input);
}

#[test]
fn two_symbols() {
    let input = chars("aabb");
    let enc = compress(&input,&crate::STD_OPTIONS).expect("compression failed");
    assert_eq!(enc.freq.get(&'a'),Some(2));
    assert_eq!(enc.freq.get(&'b'),Some(2));
    // `a` is seen first, so it is removed first and becomes the left son
    assert_eq!(table_vec(&enc.table),vec![('a',"0".to_string()),('b',"1".to_string())]);
    assert_eq!(enc.stream,"0011");
    assert_eq!(decode(&enc.stream,&enc.table).expect("decode failed"),input);
}

#[test]
fn compression_works() {
    let input = chars("abracadabra");
    let enc = compress(&input,&crate::STD_OPTIONS).expect("compression failed");
    let expected = vec![
        ('a',"0".to_string()),
        ('c',"100".to_string()),
        ('d',"101".to_string()),
        ('b',"110".to_string()),
        ('r',"111".to_string())
    ];
    assert_eq!(table_vec(&enc.table),expected);
    assert_eq!(enc.stream,"01101110100010101101110");
    assert_eq!(enc.table.max_code_len(),3);
}

#[test]
fn invertibility() {
    let test_data = chars("I am Sam. Sam I am. I do not like this Sam I am.\n");
    let enc = compress(&test_data,&crate::STD_OPTIONS).expect("compression failed");
    let dec = decode(&enc.stream,&enc.table).expect("decode failed");
    assert_eq!(test_data,dec);
    assert!(enc.stream.len() < 8*test_data.len());
}

#[test]
fn deterministic_tables() {
    let input = chars("the quick brown fox jumps over the lazy dog");
    let freq = FrequencyMap::compute(&input);
    let t1 = HuffmanTree::build(&freq).expect("build failed");
    let t2 = HuffmanTree::build(&freq).expect("build failed");
    let c1 = build_codes(t1.as_ref());
    let c2 = build_codes(t2.as_ref());
    assert_eq!(table_vec(&c1),table_vec(&c2));
}

#[test]
fn prefix_free() {
    let input = chars("she sells sea shells by the sea shore");
    let enc = compress(&input,&crate::STD_OPTIONS).expect("compression failed");
    for (a,ca) in enc.table.iter() {
        for (b,cb) in enc.table.iter() {
            if a != b {
                assert!(!cb.starts_with(ca),"{} is a prefix of {}",ca,cb);
            }
        }
    }
}

#[test]
fn no_tree_no_codes() {
    let table: CodeTable<char> = build_codes(None);
    assert!(table.is_empty());
    assert_eq!(decode("",&table),Ok(vec![]));
    assert!(matches!(decode("0",&table),Err(Error::DecodeExhaustion { .. })));
}

#[test]
fn empty_input() {
    let input: Vec<char> = Vec::new();
    assert_eq!(compress(&input,&crate::STD_OPTIONS).err(),Some(Error::EmptyInput));
}

#[test]
fn input_too_large() {
    let mut opt = crate::STD_OPTIONS;
    opt.max_symbols = 3;
    assert_eq!(compress(&chars("abcd"),&opt).err(),Some(Error::InputTooLarge(4)));
}

#[test]
fn lookup_miss() {
    let enc = compress(&chars("abba"),&crate::STD_OPTIONS).expect("compression failed");
    assert_eq!(encode(&enc.table,&chars("abc")),Err(Error::LookupMiss("'c'".to_string())));
}

#[test]
fn truncated_stream() {
    let enc = compress(&chars("abracadabra"),&crate::STD_OPTIONS).expect("compression failed");
    // `b` is 110, drop its last bit
    let err = decode("011",&enc.table);
    assert_eq!(err,Err(Error::DecodeExhaustion { position: 1, pending: "11".to_string() }));
}

#[test]
fn mismatched_table() {
    // with a single symbol only "0" is a code, so "1" can never match
    let enc = compress(&chars("zz"),&crate::STD_OPTIONS).expect("compression failed");
    let err = decode("001",&enc.table);
    assert_eq!(err,Err(Error::DecodeExhaustion { position: 2, pending: "1".to_string() }));
}

#[test]
fn invalid_bit() {
    let enc = compress(&chars("aabb"),&crate::STD_OPTIONS).expect("compression failed");
    assert_eq!(decode("01x",&enc.table),Err(Error::InvalidBit { position: 2, found: 'x' }));
}

#[test]
fn byte_symbols() {
    let test_data = "12345123456789123456789\n".as_bytes();
    let enc = compress(test_data,&crate::STD_OPTIONS).expect("compression failed");
    assert_eq!(enc.freq.total(),test_data.len());
    assert_eq!(decode(&enc.stream,&enc.table).expect("decode failed"),test_data.to_vec());
}
