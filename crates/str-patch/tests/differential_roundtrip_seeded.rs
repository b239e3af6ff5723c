use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use str_patch::diff::{dst, src, str as str_diff};
use str_patch::{diff, patch, try_diff, DiffOptions};

const ALPHABET: &[char] = &['a', 'b', 'c', 'd', ' ', '\n', 'é', '😀'];

fn random_string(rng: &mut Xoshiro256StarStar, min: usize, max: usize) -> String {
    let len = rng.gen_range(min..=max);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

/// Applies `edits` random insertions, deletions and replacements to `base`.
fn mutate(rng: &mut Xoshiro256StarStar, base: &str, edits: usize) -> String {
    let mut chars: Vec<char> = base.chars().collect();
    for _ in 0..edits {
        let pos = rng.gen_range(0..=chars.len());
        match rng.gen_range(0..3) {
            0 => {
                let ins = random_string(rng, 1, 8);
                chars.splice(pos..pos, ins.chars());
            }
            1 => {
                let end = (pos + rng.gen_range(1..8)).min(chars.len());
                chars.drain(pos..end);
            }
            _ => {
                let end = (pos + rng.gen_range(1..4)).min(chars.len());
                let rep = random_string(rng, 1, 4);
                chars.splice(pos..end, rep.chars());
            }
        }
    }
    chars.into_iter().collect()
}

#[test]
fn differential_roundtrip_seeded_small_strings() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0x5151_7777);
    for case in 0..500 {
        let a = random_string(&mut rng, 0, 24);
        let b = random_string(&mut rng, 0, 24);
        let ops = str_diff::diff(&a, &b);
        assert_eq!(src(&ops), a, "src mismatch at case {case}");
        assert_eq!(dst(&ops), b, "dst mismatch at case {case}");
        assert_eq!(patch(&a, &diff(&a, &b)), b, "patch mismatch at case {case}");
    }
}

#[test]
fn differential_roundtrip_seeded_related_strings() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0x00c0_ffee);
    for case in 0..200 {
        let a = random_string(&mut rng, 0, 200);
        let edits = rng.gen_range(0..12);
        let b = mutate(&mut rng, &a, edits);
        assert_eq!(patch(&a, &diff(&a, &b)), b, "patch mismatch at case {case}");
        assert_eq!(patch(&b, &diff(&b, &a)), a, "reverse mismatch at case {case}");
    }
}

#[test]
fn differential_roundtrip_seeded_large_inputs_within_budget() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0x0123_4567_89ab_cdef);
    let started = Instant::now();
    for case in 0..4 {
        let a = random_string(&mut rng, 4096, 8192);
        let b = mutate(&mut rng, &a, 64);
        let p = diff(&a, &b);
        assert_eq!(patch(&a, &p), b, "large patch mismatch at case {case}");
    }
    assert!(
        started.elapsed() < Duration::from_secs(30),
        "large diffs took {:?}",
        started.elapsed()
    );
}

#[test]
fn differential_roundtrip_seeded_under_deadline() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0x0000_1001);
    let opts = DiffOptions::default().with_timeout(Duration::from_millis(1));
    for case in 0..20 {
        let a = random_string(&mut rng, 500, 2000);
        let b = random_string(&mut rng, 500, 2000);
        let p = try_diff(&a, &b, &opts).expect("no size cap configured");
        assert_eq!(patch(&a, &p), b, "deadline patch mismatch at case {case}");
    }
}
