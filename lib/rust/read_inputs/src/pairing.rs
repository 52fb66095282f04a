//! Matching forward and reverse files into pairs.

use crate::find::InputSpec;
use crate::role::ReadRole;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Forward and reverse files pair up when they sit in the same directory and
/// their names differ only in the mate token.
type PairKey = (PathBuf, String);

fn pair_key(input: &InputSpec) -> Option<PairKey> {
    if !matches!(input.role(), ReadRole::Forward | ReadRole::Reverse) {
        return None;
    }
    let path = input.path();
    let name = path.file_name()?.to_string_lossy();
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    Some((dir.to_path_buf(), ReadRole::pair_name(&name)?))
}

/// Pass forward and reverse files whose mate is missing as single-end reads.
///
/// MEGAHIT pairs the `-1` and `-2` files by position, so an unmatched mate
/// would shift every later pair. Order is preserved.
pub fn demote_orphan_mates(inputs: Vec<InputSpec>) -> Vec<InputSpec> {
    let mut mates: HashMap<PairKey, [bool; 2]> = HashMap::new();
    for input in &inputs {
        if let Some(key) = pair_key(input) {
            let seen = mates.entry(key).or_default();
            seen[(input.role() == ReadRole::Reverse) as usize] = true;
        }
    }

    inputs
        .into_iter()
        .map(|input| match pair_key(&input) {
            Some(key) if mates.get(&key) != Some(&[true, true]) => {
                log::warn!(
                    "no mate found for {} read file {}, passing it as single-end reads",
                    input.role(),
                    input.path().display()
                );
                input.as_single()
            }
            _ => input,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn roles(inputs: &[InputSpec]) -> Vec<(&str, ReadRole)> {
        inputs
            .iter()
            .map(|i| (i.path().to_str().unwrap(), i.role()))
            .collect()
    }

    #[test]
    fn test_pairs_kept() {
        let inputs = vec![
            InputSpec::new("reads/a_r1_001.fastq"),
            InputSpec::new("reads/a_r2_001.fastq"),
            InputSpec::new("reads/b.r1.fq.gz"),
            InputSpec::new("reads/b.r2.fq.gz"),
            InputSpec::new("reads/c.paired.fq"),
            InputSpec::new("reads/d.fq"),
        ];
        assert_eq!(demote_orphan_mates(inputs.clone()), inputs);
    }

    #[test]
    fn test_orphans_demoted() {
        let inputs = vec![
            InputSpec::new("reads/a_r1_001.fastq"),
            InputSpec::new("reads/a_r2_001.fastq"),
            InputSpec::new("reads/b_r1_001.fastq"),
            InputSpec::new("reads/c.r2.fq"),
        ];
        assert_eq!(
            roles(&demote_orphan_mates(inputs)),
            vec![
                ("reads/a_r1_001.fastq", ReadRole::Forward),
                ("reads/a_r2_001.fastq", ReadRole::Reverse),
                ("reads/b_r1_001.fastq", ReadRole::Single),
                ("reads/c.r2.fq", ReadRole::Single),
            ]
        );
    }

    #[test]
    fn test_mates_must_share_directory_and_separator() {
        let inputs = vec![
            InputSpec::new("run1/a_r1_.fq"),
            InputSpec::new("run2/a_r2_.fq"),
            InputSpec::new("run3/b_r1_.fq"),
            InputSpec::new("run3/b.r2.fq"),
        ];
        let demoted = demote_orphan_mates(inputs);
        assert!(demoted.iter().all(|i| i.role() == ReadRole::Single));
    }

    #[test]
    fn test_single_mate_query() {
        let inputs = vec![InputSpec::new("sample_r2_001.fastq")];
        assert_eq!(
            roles(&demote_orphan_mates(inputs)),
            vec![("sample_r2_001.fastq", ReadRole::Single)]
        );
    }
}
