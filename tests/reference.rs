//! Randomized cross-checks of every operator against num-bigint.

use darkint::BigInt;
use num_bigint::BigInt as RefInt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_decimal(rng: &mut StdRng, digits: usize) -> String {
    let mut out = String::with_capacity(digits + 1);
    if rng.gen_bool(0.5) {
        out.push('-');
    }
    out.push(char::from(b'0' + rng.gen_range(1..=9)));
    for _ in 1..digits {
        out.push(char::from(b'0' + rng.gen_range(0..=9)));
    }
    out
}

fn check_pair(a_text: &str, b_text: &str) {
    let a: BigInt = a_text.parse().unwrap();
    let b: BigInt = b_text.parse().unwrap();
    let ra: RefInt = a_text.parse().unwrap();
    let rb: RefInt = b_text.parse().unwrap();

    assert_eq!((&a + &b).to_string(), (&ra + &rb).to_string());
    assert_eq!((&a - &b).to_string(), (&ra - &rb).to_string());
    assert_eq!((&a * &b).to_string(), (&ra * &rb).to_string());
    // num-bigint division truncates with a dividend-signed remainder,
    // the same convention as this crate and the primitive integers.
    assert_eq!((&a / &b).to_string(), (&ra / &rb).to_string());
    assert_eq!((&a % &b).to_string(), (&ra % &rb).to_string());
    assert_eq!(a.cmp(&b), ra.cmp(&rb));
}

#[test]
fn race_small_and_medium() {
    let mut rng = StdRng::seed_from_u64(0x00c0ffee);
    for &(la, lb) in &[(1, 1), (9, 9), (10, 9), (18, 19), (40, 25), (180, 90), (400, 400)] {
        for _ in 0..8 {
            let a = random_decimal(&mut rng, la);
            let b = random_decimal(&mut rng, lb);
            check_pair(&a, &b);
        }
    }
}

#[test]
fn race_across_multiplication_cutoff() {
    // 900 decimal digits make 100 limbs; equal lengths just below and
    // just above the crossover exercise both multiplication paths.
    let mut rng = StdRng::seed_from_u64(0xdecade);
    for &digits in &[891, 900, 909, 1800] {
        for _ in 0..2 {
            let a = random_decimal(&mut rng, digits);
            let b = random_decimal(&mut rng, digits);
            check_pair(&a, &b);
        }
    }
}

#[test]
fn race_long_division() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for &(la, lb) in &[(2000, 7), (2000, 40), (2000, 1000), (1000, 999)] {
        let a = random_decimal(&mut rng, la);
        let b = random_decimal(&mut rng, lb);
        check_pair(&a, &b);
    }
}
