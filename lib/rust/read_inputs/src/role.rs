//! Read-pair roles and the file name conventions that imply them.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::path::Path;

lazy_static! {
    static ref MATE_REGEX: Regex = Regex::new(r"_r([12])_|\.r([12])\.").unwrap();
    static ref INTERLEAVED_REGEX: Regex = Regex::new(r"_paired_|\.paired\.").unwrap();
}

/// How a read file takes part in the assembly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReadRole {
    /// First mate of a paired-end library (`_r1_`, `.r1.`)
    Forward,
    /// Second mate of a paired-end library (`_r2_`, `.r2.`)
    Reverse,
    /// Both mates in one file (`_paired_`, `.paired.`)
    Interleaved,
    /// Unpaired reads, and anything we could not recognise
    Single,
}

impl ReadRole {
    /// All roles, in the order their files are passed to the assembler.
    pub const ALL: [ReadRole; 4] = [
        ReadRole::Forward,
        ReadRole::Reverse,
        ReadRole::Interleaved,
        ReadRole::Single,
    ];

    /// Infer the role from a file name. Only the final path component is
    /// inspected, so directory names never influence the result. The
    /// extension is kept, so `sample.r1.fq` carries the `.r1.` token.
    ///
    /// Mate tokens take priority over the interleaved token, and when more
    /// than one mate token is present the left-most one decides. Names that
    /// match nothing are `Single`; this never fails.
    pub fn from_file_name(name: &str) -> ReadRole {
        let base = Path::new(name)
            .file_name()
            .map_or_else(|| name.into(), |n| n.to_string_lossy());

        if let Some(cap) = MATE_REGEX.captures(&base) {
            let mate = cap.get(1).or_else(|| cap.get(2)).map(|m| m.as_str());
            return match mate {
                Some("1") => ReadRole::Forward,
                _ => ReadRole::Reverse,
            };
        }

        if INTERLEAVED_REGEX.is_match(&base) {
            return ReadRole::Interleaved;
        }

        ReadRole::Single
    }

    /// Infer the role of the file at `path`, without touching the filesystem.
    pub fn from_path(path: impl AsRef<Path>) -> ReadRole {
        match path.as_ref().file_name() {
            Some(name) => ReadRole::from_file_name(&name.to_string_lossy()),
            None => ReadRole::Single,
        }
    }

    /// The file name with its deciding mate token masked, e.g.
    /// `sample_r1_001.fq` becomes `sample_r?_001.fq`. Both files of a pair
    /// share this name. `None` when the name has no mate token.
    pub fn pair_name(file_name: &str) -> Option<String> {
        let token = MATE_REGEX.find(file_name)?;
        let (open, close) = token.as_str().split_at(1);
        Some(format!(
            "{}{open}r?{}{}",
            &file_name[..token.start()],
            &close[close.len() - 1..],
            &file_name[token.end()..]
        ))
    }

    /// The MEGAHIT flag that introduces a file of this role.
    pub fn megahit_flag(self) -> &'static str {
        match self {
            ReadRole::Forward => "-1",
            ReadRole::Reverse => "-2",
            ReadRole::Interleaved => "--12",
            ReadRole::Single => "-r",
        }
    }
}

impl fmt::Display for ReadRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReadRole::Forward => "forward",
            ReadRole::Reverse => "reverse",
            ReadRole::Interleaved => "interleaved",
            ReadRole::Single => "single",
        };
        f.pad(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mates() {
        assert_eq!(
            ReadRole::from_file_name("sample_r1_001.fastq"),
            ReadRole::Forward
        );
        assert_eq!(
            ReadRole::from_file_name("sample_r2_001.fastq.gz"),
            ReadRole::Reverse
        );
        assert_eq!(
            ReadRole::from_file_name("sample.r1.fq"),
            ReadRole::Forward
        );
        assert_eq!(
            ReadRole::from_file_name("sample.r2.fa.gz"),
            ReadRole::Reverse
        );
    }

    #[test]
    fn test_interleaved() {
        assert_eq!(
            ReadRole::from_file_name("sample_paired_001.fastq"),
            ReadRole::Interleaved
        );
        assert_eq!(
            ReadRole::from_file_name("sample.paired.fq.gz"),
            ReadRole::Interleaved
        );
    }

    #[test]
    fn test_mate_beats_interleaved() {
        assert_eq!(
            ReadRole::from_file_name("sample_paired_r2_001.fastq"),
            ReadRole::Reverse
        );
        assert_eq!(
            ReadRole::from_file_name("sample_r1_paired_.fastq"),
            ReadRole::Forward
        );
    }

    #[test]
    fn test_leftmost_mate_token_wins() {
        assert_eq!(
            ReadRole::from_file_name("lib_r2_of_r1_.fastq"),
            ReadRole::Reverse
        );
        assert_eq!(
            ReadRole::from_file_name("lib.r1._r2_.fastq"),
            ReadRole::Forward
        );
    }

    #[test]
    fn test_single_fallback() {
        for name in [
            "ERR1711926.fastq.gz",
            // Upper case and mixed separators are not mate tokens.
            "sample_R1_001.fastq",
            "sample_r1.fastq",
            "sample.r1_001.fastq",
            "sample_r3_001.fastq",
            "sample_paired.fastq",
            "pairedend.fq",
            "",
        ] {
            assert_eq!(ReadRole::from_file_name(name), ReadRole::Single, "{name}");
        }
    }

    #[test]
    fn test_directory_names_ignored() {
        assert_eq!(
            ReadRole::from_path("runs/batch_r1_/sample.fastq"),
            ReadRole::Single
        );
        assert_eq!(
            ReadRole::from_path("runs/x.paired.y/sample_r2_001.fastq"),
            ReadRole::Reverse
        );
        assert_eq!(
            ReadRole::from_file_name("lane_paired_/reads.fq"),
            ReadRole::Single
        );
    }

    #[test]
    fn test_flags() {
        let flags: Vec<_> = ReadRole::ALL.iter().map(|r| r.megahit_flag()).collect();
        assert_eq!(flags, vec!["-1", "-2", "--12", "-r"]);
    }

    #[test]
    fn test_pair_name() {
        assert_eq!(
            ReadRole::pair_name("sample_r1_001.fastq").as_deref(),
            Some("sample_r?_001.fastq")
        );
        assert_eq!(
            ReadRole::pair_name("sample_r2_001.fastq"),
            ReadRole::pair_name("sample_r1_001.fastq")
        );
        assert_eq!(
            ReadRole::pair_name("lib.r2.fq.gz").as_deref(),
            Some("lib.r?.fq.gz")
        );
        assert_ne!(
            ReadRole::pair_name("lib.r1.fq"),
            ReadRole::pair_name("lib_r2_fq")
        );
        assert_eq!(ReadRole::pair_name("lib.paired.fq"), None);
        assert_eq!(ReadRole::pair_name("ERR1711926.fastq.gz"), None);
    }

    proptest! {
        #[test]
        fn prop_test_mate_tokens(
            prefix in "[a-zA-Z0-9]{0,12}",
            suffix in "[a-zA-Z0-9]{0,12}",
            mate in 1u8..=2,
            dot in any::<bool>(),
        ) {
            let sep = if dot { "." } else { "_" };
            let name = format!("{prefix}{sep}r{mate}{sep}{suffix}.fastq");
            let expected = if mate == 1 { ReadRole::Forward } else { ReadRole::Reverse };
            prop_assert_eq!(ReadRole::from_file_name(&name), expected);
        }

        #[test]
        fn prop_test_interleaved_token(
            prefix in "[a-zA-Z0-9]{0,12}",
            suffix in "[a-zA-Z0-9]{0,12}",
            dot in any::<bool>(),
        ) {
            let sep = if dot { "." } else { "_" };
            let name = format!("{prefix}{sep}paired{sep}{suffix}.fq.gz");
            prop_assert_eq!(ReadRole::from_file_name(&name), ReadRole::Interleaved);
        }

        #[test]
        fn prop_test_untagged_names_are_single(name in "[a-zA-Z0-9]{0,24}(\\.fastq)?(\\.gz)?") {
            prop_assert_eq!(ReadRole::from_file_name(&name), ReadRole::Single);
        }

        #[test]
        fn prop_test_never_panics(name in "\\PC*") {
            let _ = ReadRole::from_file_name(&name);
        }
    }
}
