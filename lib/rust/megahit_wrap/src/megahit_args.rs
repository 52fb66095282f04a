use clap::Parser;
use itertools::Itertools;

/// Minimum multiplicity used when `--min-count` is not given.
pub const DEFAULT_MIN_COUNT: u32 = 2;
/// Smallest k used when `--k-min` is not given.
pub const DEFAULT_K_MIN: u32 = 21;
/// Largest k used when `--k-max` is not given.
pub const DEFAULT_K_MAX: u32 = 99;
/// k increment used when `--k-step` is not given.
pub const DEFAULT_K_STEP: u32 = 20;

#[derive(Parser, Debug, Clone, Default)]
pub struct MegahitArgs {
    /// Minimum multiplicity for filtering (k_min+1)-mers. [default: 2]
    #[clap(long, value_name = "INT")]
    pub min_count: Option<u32>,

    /// Minimum kmer size (<= 255), must be odd number. [default: 21]
    #[clap(long, value_name = "INT")]
    pub k_min: Option<u32>,

    /// Maximum kmer size (<= 255), must be odd number. [default: 99]
    #[clap(long, value_name = "INT")]
    pub k_max: Option<u32>,

    /// Increment of kmer size of each iteration (<= 28), must be even
    /// number. [default: 20]
    #[clap(long, value_name = "INT")]
    pub k_step: Option<u32>,

    /// Comma-separated list of kmer sizes. All must be odd, in the range
    /// 15-255, increment <= 28. Overrides --k-min, --k-max and --k-step.
    #[clap(long, value_name = "INT,INT,...", value_delimiter = ',')]
    pub k_list: Option<Vec<u32>>,

    /// Minimum length of contigs to output.
    #[clap(long, value_name = "INT")]
    pub min_contig_len: Option<u32>,

    /// Max memory in byte to be used in SdBG construction. If set
    /// between 0-1, fraction of the machine's total memory.
    #[clap(short = 'm', long, value_name = "FLOAT")]
    pub memory: Option<f64>,

    /// Number of CPU threads MEGAHIT may use.
    #[clap(short = 't', long, value_name = "INT")]
    pub num_cpu_threads: Option<usize>,
}

/// How the k-mer sizes of the iterations are chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KmerSizes {
    /// Iterate from `k_min` to `k_max` in steps of `k_step`.
    Range { k_min: u32, k_max: u32, k_step: u32 },
    /// Use exactly these sizes.
    List(Vec<u32>),
}

/// The tuning parameters passed through to MEGAHIT, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    pub min_count: u32,
    pub kmers: KmerSizes,
    pub min_contig_len: Option<u32>,
    pub memory: Option<f64>,
    pub num_cpu_threads: Option<usize>,
}

impl Default for Tuning {
    fn default() -> Self {
        MegahitArgs::default().resolve()
    }
}

impl MegahitArgs {
    /// Apply the defaults. An explicit k-list takes precedence over the
    /// min/max/step triple, which is then dropped.
    pub fn resolve(&self) -> Tuning {
        let kmers = match &self.k_list {
            Some(list) if !list.is_empty() => {
                if self.k_min.is_some() || self.k_max.is_some() || self.k_step.is_some() {
                    log::warn!("--k-list overrides --k-min, --k-max and --k-step");
                }
                KmerSizes::List(list.clone())
            }
            _ => KmerSizes::Range {
                k_min: self.k_min.unwrap_or(DEFAULT_K_MIN),
                k_max: self.k_max.unwrap_or(DEFAULT_K_MAX),
                k_step: self.k_step.unwrap_or(DEFAULT_K_STEP),
            },
        };

        Tuning {
            min_count: self.min_count.unwrap_or(DEFAULT_MIN_COUNT),
            kmers,
            min_contig_len: self.min_contig_len,
            memory: self.memory,
            num_cpu_threads: self.num_cpu_threads,
        }
    }
}

impl Tuning {
    /// Convert this struct into a vector of command line arguments.
    pub(crate) fn get_args(&self) -> Vec<String> {
        let kmers = match &self.kmers {
            KmerSizes::Range {
                k_min,
                k_max,
                k_step,
            } => vec![
                arg("--k-min", k_min),
                arg("--k-max", k_max),
                arg("--k-step", k_step),
            ],
            KmerSizes::List(list) => vec![arg("--k-list", list.iter().join(","))],
        };

        std::iter::once(arg("--min-count", self.min_count))
            .chain(kmers)
            .chain([
                optional_arg(&self.min_contig_len, "--min-contig-len"),
                optional_arg(&self.memory, "-m"),
                optional_arg(&self.num_cpu_threads, "-t"),
            ]
            .into_iter()
            .flatten())
            .flatten()
            .collect()
    }
}

fn arg<T: std::fmt::Display>(flag: &str, value: T) -> [String; 2] {
    [flag.to_string(), value.to_string()]
}

fn optional_arg<T: std::fmt::Display>(value: &Option<T>, flag: &str) -> Option<[String; 2]> {
    value.as_ref().map(|x| arg(flag, x))
}
