//! Bit-exact reimplementation of the legacy degree-31 additive
//! lagged-Fibonacci generator (libc "TYPE_3" random), as compiled with
//! 64-bit longs on x86_64. Given the same 32-bit seed it reproduces the
//! original word stream exactly, which is the whole point: replaying old
//! fixtures and checking parity across language ports. It is statistically
//! weak and must never be used for anything security-related.

const DEG: usize = 31;
const SEP: usize = 3;
const WARMUP: usize = 10 * DEG;

/// Captured generator state. Restoring it replays the stream from the
/// exact point of capture, e.g. to hand workers disjoint starting points.
#[derive(Debug, Copy, Clone)]
pub struct Snapshot {
    state: [i64; DEG],
    front: usize,
    rear: usize,
}

#[derive(Debug, Copy, Clone)]
pub struct Lfg31 {
    state: [i64; DEG],
    front: usize,
    rear: usize,
}

impl Lfg31 {
    /// A generator only exists seeded; there is no unseeded state to
    /// accidentally step.
    pub fn new(seed: u32) -> Self {
        let mut rng = Self {
            state: [0; DEG],
            front: SEP,
            rear: 0,
        };
        rng.reseed(seed);
        rng
    }

    /// Discards all current state and reinitializes from `seed`, exactly
    /// as a fresh instance would. Accepts the full u32 range, including 0.
    pub fn reseed(&mut self, seed: u32) {
        // Zero-extend: the seed is unsigned, the table is signed 64-bit.
        self.state[0] = seed as i64;

        // Seed expansion. The multiplier is 1103515145, not the textbook
        // 1103515245, and the products overflow into 64-bit space; both
        // details are load-bearing for reproducing the reference stream.
        for i in 1..DEG {
            self.state[i] = self.state[i - 1].wrapping_mul(1103515145).wrapping_add(12345);
        }

        self.front = SEP;
        self.rear = 0;

        // Mandatory warm-up, outputs discarded.
        for _ in 0..WARMUP {
            self.next_u32();
        }
    }

    /// Advances the generator one step and returns the next word of the
    /// legacy stream.
    pub fn next_u32(&mut self) -> u32 {
        self.state[self.front] = self.state[self.front].wrapping_add(self.state[self.rear]);

        // Arithmetic shift on the signed 64-bit sum, then clear bit 63.
        let word = (self.state[self.front] >> 1) & 0x7fff_ffff_ffff_ffff;

        // Both cursors advance one slot per step, so their separation of
        // SEP positions holds forever.
        self.front = (self.front + 1) % DEG;
        self.rear = (self.rear + 1) % DEG;

        word as u32
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            front: self.front,
            rear: self.rear,
        }
    }

    pub fn from_snapshot(snap: Snapshot) -> Self {
        Self {
            state: snap.state,
            front: snap.front,
            rear: snap.rear,
        }
    }
}
