/// Builds a seed byte by byte from samples in `[0, 1)`.
fn seed_from_samples(mut sample: impl FnMut() -> f64) -> u64 {
    u64::from_be_bytes(core::array::from_fn(|_| (256. * sample()) as u8))
}

/// Seed for the secret patterns taken from JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    seed_from_samples(js_sys::Math::random)
}
