use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Small deterministic PRNG (splitmix64), enough for demo noise.
struct SplitMix {
    state: u64,
}

impl SplitMix {
    fn new(seed: u64) -> Self {
        SplitMix { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in [-1, 1).
    fn jitter(&mut self) -> f64 {
        ((self.next_u64() >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
    }
}

/// Throughput (Mpps) against batch size for one packet size; saturates
/// at the link's packet rate.
fn write_series(path: &Path, packet_bytes: u32, rng: &mut SplitMix) -> Result<usize> {
    let mut out = BufWriter::new(File::create(path).with_context(|| format!("creating {}", path.display()))?);
    writeln!(out, "# batch Mpps  ({packet_bytes}B packets)")?;

    // 10 Gbit/s line rate including 20 bytes of preamble and gap.
    let line_rate = 10e9 / ((packet_bytes + 20) as f64 * 8.0) / 1e6;
    let mut rows = 0;
    for batch in (1..=256).filter(|b: &u32| b.is_power_of_two()) {
        let offered = 1.2 * (batch as f64).sqrt();
        let mpps = offered.min(line_rate) * (1.0 + 0.02 * rng.jitter());
        writeln!(out, "{batch} {mpps:.4}")?;
        rows += 1;
    }
    out.flush()?;
    Ok(rows)
}

/// A pps log with `trials` measurements per configuration, interleaved
/// with the chatter a benchmark run prints.
fn write_pps_log(path: &Path, rates_mpps: &[f64], trials: usize, rng: &mut SplitMix) -> Result<usize> {
    let mut out = BufWriter::new(File::create(path).with_context(|| format!("creating {}", path.display()))?);
    let mut rows = 0;
    for (cfg, &rate) in rates_mpps.iter().enumerate() {
        writeln!(out, "=== configuration {} ===", cfg + 1)?;
        for t in 0..trials {
            let pps = rate * 1e6 * (1.0 + 0.01 * rng.jitter());
            writeln!(out, "trial {t}: rx {} pps", c_style_exp(pps))?;
            rows += 1;
        }
    }
    out.flush()?;
    Ok(rows)
}

/// `1.234e+06` rather than Rust's `1.234e6`.
fn c_style_exp(v: f64) -> String {
    let s = format!("{v:.3e}");
    match s.split_once('e').map(|(m, e)| (m, e.parse::<i32>())) {
        Some((mantissa, Ok(exp))) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.abs())
        }
        _ => s.clone(),
    }
}

fn main() -> Result<()> {
    let mut rng = SplitMix::new(42);

    for bytes in [64, 512, 1500] {
        let path = format!("sample_rate_{bytes}B.dat");
        let rows = write_series(Path::new(&path), bytes, &mut rng)?;
        println!("Wrote {rows} samples to {path}");
    }

    let path = "sample_pps.log";
    let rows = write_pps_log(Path::new(path), &[1.0, 4.5, 9.8, 14.2], 10, &mut rng)?;
    println!("Wrote {rows} measurements to {path}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponent_has_sign_and_two_digits() {
        assert_eq!(c_style_exp(1_234_000.0), "1.234e+06");
        assert_eq!(c_style_exp(0.5), "5.000e-01");
        assert_eq!(c_style_exp(14_200_000.0), "1.420e+07");
    }
}
