use coltrans::cipher::{decode, encode};
use coltrans::key::{derive_column_order, Key};
use coltrans::search::permutations::factorial;
use coltrans::search::{BruteForce, KeyLengthRange};
use proptest::prelude::*;

// --- STRATEGIES ---

// Ranks may repeat or go negative; any non-empty list is a valid key.
prop_compose! {
    fn arb_key()(ranks in proptest::collection::vec(-20i64..20, 1..9)) -> Key {
        Key::new(ranks).unwrap()
    }
}

// A shuffled `1..=n`, the shape brute force enumerates.
fn arb_permutation_key() -> impl Strategy<Value = Vec<i64>> {
    (1usize..=5).prop_flat_map(|n| Just((1..=n as i64).collect::<Vec<_>>()).prop_shuffle())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_round_trip(text in "[A-Za-z0-9.,!?]{0,80}", key in arb_key()) {
        let enc = encode(&text, &key);
        prop_assert_eq!(decode(&enc.cipher_text, &key), text);
    }

    #[test]
    fn test_cipher_is_rearrangement(text in "[a-z]{0,60}", key in arb_key()) {
        let mut plain: Vec<char> = text.chars().collect();
        let mut cipher: Vec<char> = encode(&text, &key).cipher_text.chars().collect();
        plain.sort_unstable();
        cipher.sort_unstable();
        prop_assert_eq!(plain, cipher);
    }

    #[test]
    fn test_column_order_is_permutation(ranks in proptest::collection::vec(any::<i64>(), 1..16)) {
        let order = derive_column_order(&ranks).unwrap();
        let mut seen = order.as_slice().to_vec();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..ranks.len()).collect::<Vec<_>>());

        // Reading in order never steps to a strictly smaller rank.
        for pair in order.as_slice().windows(2) {
            prop_assert!(ranks[pair[0]] <= ranks[pair[1]]);
        }
    }

    #[test]
    fn test_whitespace_is_ignored(words in proptest::collection::vec("[A-Z]{1,8}", 1..6), key in arb_key()) {
        let spaced = words.join(" ");
        let joined = words.concat();
        prop_assert_eq!(
            encode(&spaced, &key).cipher_text,
            encode(&joined, &key).cipher_text
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_brute_force_recovers_key(text in "[A-Z]{1,30}", ranks in arb_permutation_key()) {
        let n = ranks.len();
        let key = Key::new(ranks.clone()).unwrap();
        let cipher = encode(&text, &key).cipher_text;

        let results = BruteForce::new(9, 7)
            .run(&cipher, KeyLengthRange::single(n).unwrap())
            .unwrap();

        prop_assert_eq!(results.len(), factorial(n).unwrap());
        let hit = results.iter().find(|c| c.key == ranks);
        prop_assert!(hit.is_some(), "true key {:?} missing", ranks);
        prop_assert_eq!(&hit.unwrap().decoded, &text);
    }
}
