//! Results table and space savings.
//!
//! Sizes compare the UTF-8 length of the original text with the number of
//! bytes the bit stream would occupy if it were packed.

use std::io::Write;
use std::hash::Hash;
use std::fmt::Display;
use crate::tools::freq_map::FrequencyMap;
use crate::tools::sorted_list::SortedList;
use crate::huffman::{CodeTable,Encoding};
use crate::DYNERR;

#[derive(Debug,Clone,PartialEq)]
pub struct Stats {
    pub original_bytes: usize,
    pub encoded_bits: usize,
    /// bits rounded up to whole bytes
    pub encoded_bytes: usize,
    /// percentage of the original size that is saved, can be negative
    pub savings: f64
}

impl Stats {
    pub fn new(original_bytes: usize,encoded_bits: usize) -> Self {
        let encoded_bytes = (encoded_bits + 7) / 8;
        let savings = match original_bytes {
            0 => 0.0,
            n => 100.0 - 100.0 * encoded_bytes as f64 / n as f64
        };
        Self {
            original_bytes,
            encoded_bits,
            encoded_bytes,
            savings
        }
    }
}

/// Format a percentage with up to two decimals, dropping trailing zeros.
pub fn format_savings(pct: f64) -> String {
    let s = format!("{:.2}",pct);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" => "0".to_string(),
        _ => s.to_string()
    }
}

/// Rows of (symbol,frequency,code) in decreasing order of frequency.
/// Symbols with equal frequency are listed last-seen first.
pub fn table_rows<S: Eq + Hash + Clone>(freq: &FrequencyMap<S>,table: &CodeTable<S>) -> Vec<(S,usize,String)> {
    let mut sorted: SortedList<usize,&S> = SortedList::new();
    for (sym,count) in freq.iter() {
        sorted.insert(count,sym);
    }
    sorted.iter().rev().map(|(count,sym)| {
        let code = table.get(sym).unwrap_or("").to_string();
        ((*sym).clone(),count,code)
    }).collect()
}

/// Print the frequency table, the strings, and the size comparison.
pub fn write_report<W: Write,S: Eq + Hash + Clone + Display>(out: &mut W,original: &[S],enc: &Encoding<S>,decoded: &[S],stats: &Stats) -> Result<(),DYNERR> {
    let join = |v: &[S]| v.iter().map(|s| s.to_string()).collect::<String>();
    writeln!(out,"Symbol\tFrequency   Code")?;
    writeln!(out,"------\t---------   ----")?;
    for (sym,count,code) in table_rows(&enc.freq,&enc.table) {
        writeln!(out,"{}\t{}\t    {}",sym,count,code)?;
    }
    writeln!(out)?;
    writeln!(out,"Original String:\n{}",join(original))?;
    writeln!(out,"Encoded String:\n{}",enc.stream)?;
    writeln!(out,"Decoded String:\n{}\n",join(decoded))?;
    writeln!(out,"The original string requires {} bytes.",stats.original_bytes)?;
    writeln!(out,"The encoded string requires {} bytes.",stats.encoded_bytes)?;
    writeln!(out,"Difference in space required is {}%.",format_savings(stats.savings))?;
    Ok(())
}

#[test]
fn savings() {
    let stats = Stats::new(11,23);
    assert_eq!(stats.encoded_bytes,3);
    assert_eq!(format_savings(stats.savings),"72.73");
    assert_eq!(format_savings(Stats::new(4,4).savings),"75");
    assert_eq!(format_savings(Stats::new(2,16).savings),"0");
    assert_eq!(format_savings(Stats::new(1,9).savings),"-100");
    assert_eq!(format_savings(12.5),"12.5");
}

#[test]
fn rows_by_decreasing_frequency() {
    let input: Vec<char> = "abracadabra".chars().collect();
    let enc = crate::huffman::compress(&input,&crate::STD_OPTIONS).expect("compression failed");
    let rows = table_rows(&enc.freq,&enc.table);
    let expected = vec![
        ('a',5,"0".to_string()),
        ('r',2,"111".to_string()),
        ('b',2,"110".to_string()),
        ('d',1,"101".to_string()),
        ('c',1,"100".to_string())
    ];
    assert_eq!(rows,expected);
}

#[test]
fn report_text() {
    let input: Vec<char> = "aabb".chars().collect();
    let enc = crate::huffman::compress(&input,&crate::STD_OPTIONS).expect("compression failed");
    let stats = Stats::new(4,enc.stream.len());
    let mut out: Vec<u8> = Vec::new();
    write_report(&mut out,&input,&enc,&input,&stats).expect("report failed");
    let expected = "\
Symbol\tFrequency   Code
------\t---------   ----
b\t2\t    1
a\t2\t    0

Original String:
aabb
Encoded String:
0011
Decoded String:
aabb

The original string requires 4 bytes.
The encoded string requires 1 bytes.
Difference in space required is 75%.
";
    assert_eq!(String::from_utf8(out).unwrap(),expected);
}
