//! Synthetic `<station>;<value>` input files.

use std::io::{self, BufWriter, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Station names with their mean temperature.
pub const STATIONS: &[(&str, f64)] = &[
    ("Abha", 18.0),
    ("Abidjan", 26.0),
    ("Accra", 26.4),
    ("Addis Ababa", 16.0),
    ("Adelaide", 17.3),
    ("Alexandria", 20.0),
    ("Amsterdam", 10.2),
    ("Anchorage", 2.8),
    ("Baghdad", 22.8),
    ("Bangkok", 28.6),
    ("Bergen", 7.7),
    ("Bulawayo", 18.9),
    ("Cairo", 21.4),
    ("Chișinău", 10.2),
    ("Dakar", 24.0),
    ("Dikson", -11.1),
    ("Hamburg", 9.7),
    ("İzmir", 17.9),
    ("Jakarta", 26.7),
    ("Kraków", 8.3),
    ("Lhasa", 7.6),
    ("Lima", 19.7),
    ("Malé", 28.0),
    ("Nouakchott", 25.7),
    ("Oslo", 5.7),
    ("Palermo", 18.5),
    ("Reykjavík", 4.3),
    ("São Paulo", 19.7),
    ("Ségou", 28.0),
    ("Tromsø", 2.9),
    ("Vladivostok", 4.9),
    ("Yakutsk", -8.8),
    ("Zürich", 9.3),
    ("Łódź", 8.0),
];

const STD_DEV: f64 = 10.0;
const LIMIT: f64 = 99.9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Writes `rows` lines drawn from [`STATIONS`]. Same seed, same bytes.
pub fn write_measurements<W: Write>(
    out: W,
    rows: usize,
    seed: u64,
    line_ending: LineEnding,
) -> io::Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dists = STATIONS
        .iter()
        .map(|&(_, mean)| Normal::new(mean, STD_DEV).map_err(io::Error::other))
        .collect::<io::Result<Vec<_>>>()?;

    let mut out = BufWriter::new(out);
    let eol = line_ending.as_str();
    for _ in 0..rows {
        let idx = rng.random_range(0..STATIONS.len());
        let value = dists[idx].sample(&mut rng).clamp(-LIMIT, LIMIT);
        let tenths = (value * 10.0).round() as i64;
        let sign = if tenths < 0 { "-" } else { "" };
        let abs = tenths.unsigned_abs();
        write!(out, "{};{sign}{}.{}{eol}", STATIONS[idx].0, abs / 10, abs % 10)?;
    }
    out.flush()
}
