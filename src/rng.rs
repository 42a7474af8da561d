// rng.rs - Randomness sources
//
// Scene generation never calls a global RNG directly. Everything that
// samples takes a `&mut impl RandomSource`, so tests can feed a fixed
// sequence and the browser build can feed Math.random.

/// Uniform real in [0, 1)
pub trait RandomSource {
    fn next_f32(&mut self) -> f32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_f32(&mut self) -> f32 {
        (**self).next_f32()
    }
}

/// xorshift32, 24 bits of mantissa per sample.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub const DEFAULT_SEED: u32 = 0xDEADBEEF;

    /// Zero is a fixed point of xorshift, so it is swapped for the default.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { Self::DEFAULT_SEED } else { seed };
        Self { state }
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl RandomSource for Xorshift32 {
    #[inline(always)]
    fn next_f32(&mut self) -> f32 {
        let s = &mut self.state;
        *s ^= *s << 13;
        *s ^= *s >> 17;
        *s ^= *s << 5;
        (*s >> 8) as f32 * (1.0 / 16777216.0)
    }
}

/// Browser PRNG (`Math.random`)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformRandom;

#[cfg(target_arch = "wasm32")]
impl RandomSource for PlatformRandom {
    #[inline]
    fn next_f32(&mut self) -> f32 {
        // f64 -> f32 can round 0.999... up to 1.0
        (js_sys::Math::random() as f32).min(ONE_BELOW)
    }
}

/// Thread-local PRNG from `rand`
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformRandom;

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for PlatformRandom {
    #[inline]
    fn next_f32(&mut self) -> f32 {
        use rand::Rng;
        rand::thread_rng().r#gen::<f32>().min(ONE_BELOW)
    }
}

const ONE_BELOW: f32 = 1.0 - f32::EPSILON / 2.0;
