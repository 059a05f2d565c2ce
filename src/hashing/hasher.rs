use xxhash_rust::xxh3::xxh3_64_with_seed;

const PRIMARY_SEED: u64 = 0x9E37_79B9_7F4A_7C15;
const SECONDARY_SEED: u64 = 0xC2B2_AE3D_27D4_EB4F;

/// The result of hashing one piece of content.
///
/// `hex` is the fixed-width (16 chars) lowercase rendering of `value` and is
/// used both as the item id and as the displayed hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    pub value: u64,
    pub hex: String,
}

impl Digest {
    /// The first-choice bucket for this digest.
    pub fn bucket(&self, node_count: usize) -> usize {
        (self.value % node_count as u64) as usize
    }
}

pub fn hash(content: &str) -> Digest {
    let value = xxh3_64_with_seed(content.as_bytes(), PRIMARY_SEED);
    Digest {
        value,
        hex: format!("{:016x}", value),
    }
}

/// Independent hash used only to derive the double hashing step.
pub fn hash2(content: &str) -> u64 {
    xxh3_64_with_seed(content.as_bytes(), SECONDARY_SEED)
}

/// Computes the double hashing step for `content` over `node_count` buckets.
///
/// The step always lies in `[1, node_count - 1]` and is coprime with
/// `node_count`, so `original + i * step` visits every bucket exactly once
/// within `node_count` probes.
pub fn step_size(content: &str, node_count: usize) -> usize {
    if node_count <= 2 {
        return 1;
    }

    let range = (node_count - 1) as u64;
    let mut step = 1 + (hash2(content) % range) as usize;

    while gcd(step, node_count) != 1 {
        step = if step + 1 >= node_count { 1 } else { step + 1 };
    }

    step
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
