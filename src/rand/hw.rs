//! Hardware-entropy generator.
//!
//! Not a CSPRNG: the cycle counter is mixed into a 64-bit state on every draw
//! and the output passes through the SplitMix64 finalizer.

use rand_core::{RngCore, impls};
use zeroize::Zeroize;

const GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

#[cfg(target_arch = "x86_64")]
pub fn source_name() -> &'static str {
    "rdtsc"
}

#[cfg(target_arch = "aarch64")]
pub fn source_name() -> &'static str {
    "cycle counter"
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub fn source_name() -> &'static str {
    "system clock"
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn entropy() -> u64 {
    unsafe { core::arch::x86_64::_rdtsc() }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn entropy() -> u64 {
    let cnt: u64;
    unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt) }
    cnt
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn entropy() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

pub struct HwRand {
    state: u64,
}

impl HwRand {
    pub fn new() -> Self {
        Self { state: entropy() }
    }
}

impl Default for HwRand {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for HwRand {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        // Weyl step keeps the state moving even if the counter stalls
        self.state = self.state.wrapping_add(GAMMA).rotate_left(17) ^ entropy();

        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl Drop for HwRand {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_outputs_differ() {
        let mut rng = HwRand::new();
        let a = rng.next_u64();
        let b = rng.next_u64();
        let c = rng.next_u64();
        assert!(a != b || b != c);
    }

    #[test]
    fn fill_bytes_writes_whole_buffer() {
        let mut rng = HwRand::new();
        let mut buf = [0u8; 64];
        rng.fill_bytes(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }
}
