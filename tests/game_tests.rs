// End-to-end tests: parse a multi-line game, compare the hands, and
// check the reported outcomes through the public API only.

use std::cmp::Ordering;

use showdown::{Category, Game, GameError, Hand, HandError, Tally, Winner};

// First five lines of the classic two-player game file format.
const GAME: &str = "\
8C TS KC 9H 4S 7D 2S 5D 3S AC
5C AD 5D AC 9C 7C 5H 8D TD KS
3H 7H 6S KC JS QH TD JC 2D 8S
TH 8H 5C QS TC 9H 4D JC KS JS
7C 5H KC QH JD AS KH 4C AD 4S";

#[test]
fn plays_a_whole_game() {
    let game = Game::from_content(GAME).unwrap();
    assert_eq!(game.len(), 5);

    let showdowns = game.play();
    let winners: Vec<Winner> = showdowns.iter().map(|s| s.winner).collect();
    assert_eq!(
        winners,
        vec![
            Winner::PlayerTwo, // ace high beats king high
            Winner::PlayerOne, // two pair beats king high
            Winner::PlayerOne, // king high beats queen high
            Winner::PlayerTwo, // pair of jacks beats pair of tens
            Winner::PlayerTwo, // two pair beats king high
        ]
    );

    let tally = Tally::of(&showdowns);
    assert_eq!(tally.player_one, 2);
    assert_eq!(tally.player_two, 3);
    assert_eq!(tally.ties, 0);
}

#[test]
fn showdowns_serialize_to_json() {
    let game = Game::from_content("TS JS QS KS AS TD JD QD KD AD").unwrap();
    let showdowns = game.play();
    let json = serde_json::to_string(&showdowns).unwrap();
    assert!(json.contains("\"winner\":\"Tie\""));
    assert!(json.contains("\"rank\":900"));

    let round_trip: Vec<showdown::Showdown> = serde_json::from_str(&json).unwrap();
    assert_eq!(round_trip, showdowns);
}

#[test]
fn file_errors_surface_as_io() {
    let err = Game::from_path("/path/to/missing/file").unwrap_err();
    assert!(matches!(err, GameError::Io(_)));
}

#[test]
fn hand_construction_round_trip() {
    let codes = ["5H", "5C", "6S", "7S", "KD"];
    let from_list = Hand::from_codes(&codes).unwrap();
    let from_string: Hand = codes.join(" ").parse().unwrap();
    assert_eq!(from_list.category(), from_string.category());
    assert_eq!(from_list.cmp(&from_string), Ordering::Equal);
}

#[test]
fn invalid_hands_are_rejected_before_play() {
    let err = Game::from_content("7D 2S 5D AC KD 2C 3C 4C 5C 6C 7C").unwrap_err();
    assert!(matches!(err, GameError::MalformedLine { .. }));

    let err = Game::from_content("7D 2S 5D AC 1X 2C 3C 4C 5C 6C").unwrap_err();
    match err {
        GameError::Hand { line_no, source } => {
            assert_eq!(line_no, 1);
            assert!(matches!(source, HandError::Card(_)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn comparison_is_a_total_order_across_categories() {
    // One representative hand per category, listed weakest first.
    let ladder: Vec<Hand> = [
        "2C 5D 9H JS KC", // high card
        "5H 5C 6S 7S KD", // one pair
        "9C 9D 4S 4H AC", // two pair
        "QC QD QS 2H 7C", // three of a kind
        "5C 6S 7D 8H 9C", // straight
        "2H 6H 9H JH KH", // flush
        "AC AD AS KH KS", // full house
        "9S 9C 9H 9D AC", // four of a kind
        "4H 5H 6H 7H 8H", // straight flush
        "TS JS QS KS AS", // royal flush
    ]
    .iter()
    .map(|s| s.parse().unwrap())
    .collect();

    let categories: Vec<Category> = ladder.iter().map(Hand::category).collect();
    assert_eq!(
        categories,
        vec![
            Category::HighCard,
            Category::OnePair,
            Category::TwoPair,
            Category::ThreeOfAKind,
            Category::Straight,
            Category::Flush,
            Category::FullHouse,
            Category::FourOfAKind,
            Category::StraightFlush,
            Category::RoyalFlush,
        ]
    );

    for (i, weaker) in ladder.iter().enumerate() {
        for stronger in &ladder[i + 1..] {
            assert!(weaker < stronger, "{weaker} should lose to {stronger}");
            assert!(stronger > weaker);
        }
    }
}
