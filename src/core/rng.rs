//! String-keyed deterministic random stream for level layout.
//!
//! The key is folded into a 32-bit FNV-1a hash over its UTF-16 code units, and
//! each draw advances the state with a 13/17/5 xorshift. The same key always
//! yields the same stream, and generators never share state.

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;
const TWO_POW_32: f64 = 4_294_967_296.0;

#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn from_key(key: &str) -> SeededRng {
        let state = key
            .encode_utf16()
            .fold(FNV_OFFSET_BASIS, |h, unit| (h ^ unit as u32).wrapping_mul(FNV_PRIME));
        SeededRng { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut h = self.state;
        h ^= h << 13;
        h ^= h >> 17;
        h ^= h << 5;
        self.state = h;
        h
    }

    /// Next value in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / TWO_POW_32
    }

    /// Uniform integer in [0, n), drawn as `floor(next_f64() * n)`
    pub fn next_below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64).floor() as usize
    }
}
