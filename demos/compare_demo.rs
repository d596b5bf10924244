/// Demonstrates encoding one bit sequence with every scheme.
///
/// Prints the level sequence and a terminal plot for each scheme, then
/// repeats NRZ-L with seeded Gaussian noise on top.
use linecode::noise::{NoiseAugmenter, NoiseConfig};
use linecode::render::{RenderOptions, render_ascii};
use linecode::{BitSequence, Result, compare_all, encode, Scheme};

fn main() -> Result<()> {
    println!("=== Line Code Comparison Demo ===\n");

    let bits: BitSequence = "1011000010".parse()?;
    let options = RenderOptions {
        show_labels: true,
        ..Default::default()
    };

    for signal in compare_all(&bits) {
        println!("{} ({} samples): {:?}", signal.scheme(), signal.len(), signal.levels());
        println!("{}", render_ascii(&signal.to_waveform(), &bits, &options));
    }

    println!("NRZ-L with noise (std dev 0.2, seed 42):");
    let signal = encode(&bits, Scheme::NrzL);
    let mut noise = NoiseAugmenter::new(NoiseConfig {
        std_dev: 0.2,
        seed: Some(42),
    })?;
    let noisy = noise.apply(&signal);
    for (time, level) in noisy.points() {
        println!("   t={time:>2}  {level:+.3}");
    }

    Ok(())
}
