//! Show scoring tests.

use cribrs::score::{fifteens, flush, nobs, pairs, runs};
use cribrs::{Card, Rank, ScoreBreakdown, Suit, score_breakdown, score_hand};

fn card(token: &str) -> Card {
    token.parse().unwrap()
}

fn cards(tokens: &[&str]) -> Vec<Card> {
    tokens.iter().map(|t| card(t)).collect()
}

#[test]
fn fifteens_counts_every_combination() {
    assert_eq!(fifteens(&cards(&["5H", "10S"])), 2);
    assert_eq!(fifteens(&cards(&["5H", "5S", "5D"])), 2);
    assert_eq!(fifteens(&cards(&["AH", "4S", "10D", "JC"])), 4);
    assert_eq!(fifteens(&cards(&["2H", "3S", "6D"])), 0);
    assert_eq!(fifteens(&cards(&["5H", "10S", "JD", "QC"])), 6);
    assert_eq!(fifteens(&cards(&["5H", "5S", "5D", "5C", "JC"])), 16);
    assert_eq!(fifteens(&[]), 0);
}

#[test]
fn pairs_score_each_unordered_pair() {
    assert_eq!(pairs(&cards(&["5H", "5S"])), 2);
    assert_eq!(pairs(&cards(&["5H", "5S", "5D"])), 6);
    assert_eq!(pairs(&cards(&["5H", "5S", "5D", "5C"])), 12);
    assert_eq!(pairs(&cards(&["5H", "5S", "JD", "JC"])), 4);
    assert_eq!(pairs(&cards(&["2H", "3S", "4D", "5C"])), 0);
    assert_eq!(pairs(&[]), 0);
}

#[test]
fn pairs_distinguish_ten_from_face_cards() {
    assert_eq!(pairs(&cards(&["10H", "JS", "QD", "KC"])), 0);
}

#[test]
fn runs_multiply_by_duplicate_ranks() {
    assert_eq!(runs(&cards(&["AH", "2S", "3D"])), 3);
    assert_eq!(runs(&cards(&["2H", "3S", "4D", "5C"])), 4);
    assert_eq!(runs(&cards(&["3H", "3S", "4D", "5C"])), 6);
    assert_eq!(runs(&cards(&["3H", "3S", "4D", "4C", "5H"])), 12);
    assert_eq!(runs(&cards(&["3H", "3S", "3D", "4C", "5H"])), 9);
    assert_eq!(runs(&cards(&["2H", "3S", "4D", "4C", "5H"])), 8);
    assert_eq!(runs(&cards(&["AH", "3S", "5D", "7C"])), 0);
    assert_eq!(runs(&cards(&["5H", "6S", "7D", "8C", "9H"])), 5);
    assert_eq!(runs(&cards(&["2H", "3S", "4D", "5C", "6H"])), 5);
    assert_eq!(runs(&[]), 0);
}

#[test]
fn runs_do_not_wrap_around() {
    assert_eq!(runs(&cards(&["QH", "KS", "AD"])), 0);
    assert_eq!(runs(&cards(&["10H", "JS", "QD", "KC"])), 4);
}

#[test]
fn runs_pick_lowest_of_equal_length() {
    // 1-2-3 and 5-6-7 with a pair of sixes: the lower run is scored
    let hand = cards(&["AH", "2S", "3D", "5C", "6H", "6S", "7D"]);
    assert_eq!(runs(&hand), 3);
}

#[test]
fn runs_prefer_longer_later_run() {
    let hand = cards(&["AH", "2S", "3D", "6C", "7H", "8S", "9D"]);
    assert_eq!(runs(&hand), 4);
}

#[test]
fn flush_rules_for_hand_and_crib() {
    let hand = cards(&["2H", "5H", "9H", "KH"]);

    assert_eq!(flush(&hand, card("AH"), false), 5);
    assert_eq!(flush(&hand, card("AS"), false), 4);
    assert_eq!(flush(&hand, card("AH"), true), 5);
    assert_eq!(flush(&hand, card("AS"), true), 0);

    let broken = cards(&["2H", "5H", "9H", "KS"]);
    assert_eq!(flush(&broken, card("AH"), false), 0);

    let short = cards(&["2H", "5H"]);
    assert_eq!(flush(&short, card("AH"), false), 0);
    assert_eq!(flush(&[], card("AH"), false), 0);
}

#[test]
fn nobs_needs_jack_of_starter_suit() {
    let starter = card("AH");
    assert_eq!(nobs(&cards(&["JH", "5S", "9D", "KC"]), starter), 1);
    assert_eq!(nobs(&cards(&["JS", "5S", "9D", "KC"]), starter), 0);
    assert_eq!(nobs(&cards(&["10H", "5S", "9D", "KC"]), starter), 0);
    assert_eq!(nobs(&cards(&["JH"]), starter), 1);
    assert_eq!(nobs(&[], starter), 0);
}

#[test]
fn starter_jack_is_not_nobs() {
    assert_eq!(nobs(&cards(&["2H", "5S", "9D", "KC"]), card("JH")), 0);
}

#[test]
fn twenty_nine_hand() {
    let hand = cards(&["5H", "5S", "5D", "JC"]);
    let starter = card("5C");

    let breakdown = score_breakdown(&hand, starter, false);
    assert_eq!(
        breakdown,
        ScoreBreakdown {
            fifteens: 16,
            pairs: 12,
            runs: 0,
            flush: 0,
            nobs: 1,
        }
    );
    assert_eq!(score_hand(&hand, starter, false), 29);
}

#[test]
fn complete_hands() {
    assert_eq!(
        score_hand(&cards(&["5H", "6S", "7D", "8C"]), card("9C"), false),
        9
    );
    assert_eq!(
        score_hand(&cards(&["AH", "AS", "2D", "2C"]), card("3C"), false),
        16
    );
    assert_eq!(
        score_hand(&cards(&["5H", "5S", "10D", "10C"]), card("JC"), false),
        16
    );
    assert_eq!(
        score_hand(&cards(&["2H", "4H", "6H", "8H"]), card("QS"), false),
        4
    );
    assert_eq!(
        score_hand(&cards(&["2H", "4H", "6H", "8H"]), card("QS"), true),
        0
    );
    assert_eq!(
        score_hand(&cards(&["3H", "4S", "5D", "6C"]), card("6H"), false),
        16
    );
}

#[test]
fn breakdown_sums_to_total() {
    let hands = [
        (["5H", "5S", "5D", "JC"], "5C"),
        (["AH", "AS", "2D", "2C"], "3C"),
        (["2H", "5H", "9H", "JH"], "KH"),
        (["3H", "4S", "5D", "6C"], "6H"),
        (["7H", "8S", "9D", "KC"], "JD"),
    ];

    for (hand, starter) in hands {
        let hand = cards(&hand);
        let starter = card(starter);
        for is_crib in [false, true] {
            let mut combined = hand.clone();
            combined.push(starter);
            let expected = fifteens(&combined)
                + pairs(&combined)
                + runs(&combined)
                + flush(&hand, starter, is_crib)
                + nobs(&hand, starter);
            assert_eq!(score_hand(&hand, starter, is_crib), expected);
            assert_eq!(score_breakdown(&hand, starter, is_crib).total(), expected);
        }
    }
}

#[test]
fn two_card_hands_score_without_flush() {
    let thrown = [
        Card::new(Rank::Jack, Suit::Hearts),
        Card::new(Rank::Five, Suit::Hearts),
    ];
    let breakdown = score_breakdown(&thrown, card("5S"), false);
    assert_eq!(breakdown.flush, 0);
    assert_eq!(breakdown.nobs, 0);
    assert_eq!(breakdown.fifteens, 4);
    assert_eq!(breakdown.pairs, 2);
    assert_eq!(breakdown.total(), 6);

    assert_eq!(score_hand(&thrown, card("AH"), false), 2 + 1);
}

#[test]
fn empty_hand_scores_nothing() {
    assert_eq!(score_hand(&[], card("5H"), false), 0);
    assert_eq!(score_breakdown(&[], card("JH"), true), ScoreBreakdown::default());
}

#[test]
fn scoring_is_repeatable() {
    let hand = cards(&["4H", "5S", "6D", "6C"]);
    let starter = card("5D");
    let first = score_hand(&hand, starter, false);
    for _ in 0..10 {
        assert_eq!(score_hand(&hand, starter, false), first);
    }
}
