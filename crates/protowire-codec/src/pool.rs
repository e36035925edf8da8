//! A bounded free-list of reusable `Decoder`s (spec.md §4.5 "decoder
//! pool"). Mirrors the capacity-checked free-list `ancvm_binary`'s VM uses
//! for stack frames, generalized to hand out `Decoder` values instead.
//!
//! Not `Sync`: the pool and every decoder it hands out are meant for
//! single-threaded use, per spec.md §5.

use crate::decoder::Decoder;
use protowire_types::limits::DECODER_POOL_CAPACITY;

pub struct DecoderPool<'a> {
    free: Vec<Decoder<'a>>,
}

impl<'a> DecoderPool<'a> {
    pub fn new() -> Self {
        Self { free: Vec::new() }
    }

    /// Hands out an idle decoder if one is free, or a freshly constructed
    /// unbound one otherwise. Either way the returned decoder starts in
    /// the `Unbound` state.
    pub fn alloc(&mut self) -> Decoder<'a> {
        self.free.pop().unwrap_or_else(Decoder::new)
    }

    /// Returns a decoder to the pool for reuse, resetting it to `Unbound`
    /// first so no borrowed byte view outlives this call. Once the pool
    /// holds `DECODER_POOL_CAPACITY` idle decoders, further returns are
    /// simply dropped instead of grown without bound (spec.md §8 "pool
    /// identity": `min(n, 100)` after `n` alloc/free cycles, capped at 100
    /// from then on).
    pub fn free(&mut self, mut decoder: Decoder<'a>) {
        decoder.unbind();
        if self.free.len() < DECODER_POOL_CAPACITY {
            self.free.push(decoder);
        }
    }

    pub fn idle_count(&self) -> usize {
        self.free.len()
    }
}

impl<'a> Default for DecoderPool<'a> {
    fn default() -> Self {
        Self::new()
    }
}
