//! Randomness sources for sampling.
//!
//! Mechanisms take any [`ThreadRandGen`] so that callers can choose where their
//! randomness comes from. [`GeneratorOpenSSL`] draws from the OpenSSL CSPRNG and
//! is the generator intended for real releases.
use openssl::rand::rand_bytes;
use rug::rand::ThreadRandGen;

/// A stateless generator backed by `openssl::rand::rand_bytes`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratorOpenSSL {}

impl ThreadRandGen for GeneratorOpenSSL {
    fn gen(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        // The trait offers no way to report failure; an unavailable CSPRNG must
        // not silently degrade into a predictable stream.
        rand_bytes(&mut buf).expect("OpenSSL random source unavailable");
        u32::from_le_bytes(buf)
    }
}

/// Draw a uniform sample from `[0, 1)` with 53 bits of randomness.
///
/// Consumes two words from `rng`.
pub fn sample_uniform<R: ThreadRandGen + ?Sized>(rng: &mut R) -> f64 {
    let high = u64::from(rng.gen() >> 5);
    let low = u64::from(rng.gen() >> 6);
    ((high << 26) | low) as f64 / (1u64 << 53) as f64
}

/// Deterministic splitmix generator for reproducible tests.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct SeededGenerator {
    state: u64,
}

#[cfg(test)]
impl SeededGenerator {
    pub(crate) fn new(seed: u64) -> SeededGenerator {
        SeededGenerator { state: seed }
    }
}

#[cfg(test)]
impl ThreadRandGen for SeededGenerator {
    fn gen(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        (z ^ (z >> 31)) as u32
    }
}
