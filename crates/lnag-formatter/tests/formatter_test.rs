use lnag_core::{DimensionResult, UnitResult};
use lnag_formatter::{approx_count, format_dimension_result, format_unit_result, humanize_ratio};
use lnag_types::{Concept, Dimension};
use proptest::prelude::*;

fn concept(name: &str, dimension: Dimension, value: f64) -> Concept {
    Concept::new(name, "Test").with_value(dimension, value)
}

fn proper(name: &str, dimension: Dimension, value: f64) -> Concept {
    concept(name, dimension, value).proper()
}

fn unit_sentence(target: &Concept, dimension: Dimension, ratio: f64, input: f64, unit: &str) -> String {
    let result = UnitResult { concept: target, ratio, dimension, score: 0.0 };
    format_unit_result(&result, input, unit)
}

fn pair_sentence(unit_item: &Concept, target_item: &Concept, dimension: Dimension, count: f64, ratio: f64) -> String {
    let result = DimensionResult { unit_item, target_item, count, ratio, dimension, score: 0.0 };
    format_dimension_result(&result)
}

#[test]
fn unit_sentences_for_measures() {
    let field = concept("Soccer Field", Dimension::Length, 100.0);
    let tower = concept("Eiffel Tower", Dimension::Height, 330.0);
    let elephant = concept("African Elephant", Dimension::Weight, 5000.0);
    let whale = concept("Blue Whale", Dimension::Weight, 150_000.0);

    assert_eq!(
        unit_sentence(&field, Dimension::Length, 5.0, 500.0, "m"),
        "500 m is about the length of 5 Soccer Fields."
    );
    assert_eq!(
        unit_sentence(&tower, Dimension::Height, 1.0, 330.0, "m"),
        "330 m is about the height of 1 Eiffel Tower."
    );
    assert_eq!(
        unit_sentence(&elephant, Dimension::Weight, 10.0, 50_000.0, "kg"),
        "50,000 kg is about the weight of 10 African Elephants."
    );
    assert_eq!(
        unit_sentence(&whale, Dimension::Weight, 0.5, 75_000.0, "kg"),
        "75,000 kg is about half the weight of a Blue Whale."
    );
}

#[test]
fn unit_sentences_hedge_non_integer_counts() {
    let field = concept("Soccer Field", Dimension::Length, 100.0);

    assert_eq!(
        unit_sentence(&field, Dimension::Length, 5.2, 520.0, "m"),
        "520 m is the length of more than 5 Soccer Fields."
    );
    assert_eq!(
        unit_sentence(&field, Dimension::Length, 5.5, 550.0, "m"),
        "550 m is about the length of 5 and a half Soccer Fields."
    );
    assert_eq!(
        unit_sentence(&field, Dimension::Length, 5.8, 580.0, "m"),
        "580 m is the length of almost 6 Soccer Fields."
    );
}

#[test]
fn unit_sentences_for_proper_nouns() {
    let tower = proper("Eiffel Tower", Dimension::Height, 330.0);

    assert_eq!(
        unit_sentence(&tower, Dimension::Height, 5.0, 1650.0, "m"),
        "1,650 m is about 5x the height of the Eiffel Tower."
    );
    assert_eq!(
        unit_sentence(&tower, Dimension::Height, 1.0, 330.0, "m"),
        "330 m is about the height of the Eiffel Tower."
    );
    assert_eq!(
        unit_sentence(&tower, Dimension::Height, 0.5, 165.0, "m"),
        "165 m is about half the height of the Eiffel Tower."
    );
    assert_eq!(
        unit_sentence(&tower, Dimension::Height, 2.5, 825.0, "m"),
        "825 m is about 2 and a half times the height of the Eiffel Tower."
    );
}

#[test]
fn unit_sentences_for_durations() {
    let song = concept("Average song length (pop, 2020s)", Dimension::Duration, 190.0);
    let marathon = concept("men's Marathon world record", Dimension::Duration, 7084.0);
    let sleep = concept("Average night of sleep", Dimension::Duration, 28_800.0);

    assert_eq!(
        unit_sentence(&song, Dimension::Duration, 2.0, 380.0, "sec"),
        "380 sec is about as long as 2 Average song length (pop, 2020s)s."
    );
    assert_eq!(
        unit_sentence(&marathon, Dimension::Duration, 1.0, 7084.0, "sec"),
        "7,084 sec is about as long as 1 men's Marathon world record."
    );
    assert_eq!(
        unit_sentence(&sleep, Dimension::Duration, 0.5, 14_400.0, "sec"),
        "14,400 sec is about half as long as an Average night of sleep."
    );
    assert_eq!(
        unit_sentence(&song, Dimension::Duration, 2.3, 437.0, "sec"),
        "437 sec is as long as more than 2 Average song length (pop, 2020s)s."
    );
}

#[test]
fn unit_sentences_for_proper_durations() {
    let apollo = proper("Apollo 11 total mission", Dimension::Duration, 691_200.0);

    assert_eq!(
        unit_sentence(&apollo, Dimension::Duration, 2.0, 1_382_400.0, "sec"),
        "1,382,400 sec is about 2x as long as the Apollo 11 total mission."
    );
    assert_eq!(
        unit_sentence(&apollo, Dimension::Duration, 1.0, 691_200.0, "sec"),
        "691,200 sec is about as long as the Apollo 11 total mission."
    );
    assert_eq!(
        unit_sentence(&apollo, Dimension::Duration, 0.5, 345_600.0, "sec"),
        "345,600 sec is about half as long as the Apollo 11 total mission."
    );
}

#[test]
fn unit_sentences_for_distances() {
    let mars = concept("Mars", Dimension::Distance, 227_900_000_000.0);
    let sun = proper("Sun", Dimension::Distance, 149_597_870_000.0);

    assert_eq!(
        unit_sentence(&mars, Dimension::Distance, 5.0, 1_140_000_000.0, "km"),
        "1,140,000,000 km is about 5x the distance to Mars."
    );
    assert_eq!(
        unit_sentence(&mars, Dimension::Distance, 1.0, 227_900.0, "km"),
        "227,900 km is about the distance to Mars."
    );
    assert_eq!(
        unit_sentence(&mars, Dimension::Distance, 0.5, 113_950.0, "km"),
        "113,950 km is about half the distance to Mars."
    );
    assert_eq!(
        unit_sentence(&sun, Dimension::Distance, 5.0, 748_000_000.0, "km"),
        "748,000,000 km is about 5x the distance to the Sun."
    );
    assert_eq!(
        unit_sentence(&sun, Dimension::Distance, 0.5, 74_800_000.0, "km"),
        "74,800,000 km is about half the distance to the Sun."
    );
}

#[test]
fn pair_sentences_for_weight() {
    let watermelon = concept("Watermelon", Dimension::Weight, 5.0);
    let elephant = concept("African Elephant", Dimension::Weight, 5000.0);
    let liberty = proper("Statue of Liberty", Dimension::Weight, 204_000.0);

    assert_eq!(
        pair_sentence(&watermelon, &elephant, Dimension::Weight, 2000.0, 2.0),
        "2,000 Watermelons would weigh about as much as 2 African Elephants."
    );
    assert_eq!(
        pair_sentence(&watermelon, &elephant, Dimension::Weight, 2200.0, 2.2),
        "2,200 Watermelons would weigh as much as more than 2 African Elephants."
    );
    assert_eq!(
        pair_sentence(&watermelon, &elephant, Dimension::Weight, 2800.0, 2.8),
        "2,800 Watermelons would weigh as much as almost 3 African Elephants."
    );
    assert_eq!(
        pair_sentence(&watermelon, &elephant, Dimension::Weight, 1000.0, 1.0),
        "1,000 Watermelons would weigh about as much as an African Elephant."
    );
    assert_eq!(
        pair_sentence(&watermelon, &liberty, Dimension::Weight, 50_000.0, 2.0),
        "50,000 Watermelons would weigh about 2x as much as the Statue of Liberty."
    );
    assert_eq!(
        pair_sentence(&watermelon, &liberty, Dimension::Weight, 40_800.0, 1.0),
        "40,800 Watermelons would weigh about as much as the Statue of Liberty."
    );
}

#[test]
fn pair_sentences_for_measures() {
    let human = concept("Human", Dimension::Height, 1.7);
    let tower = concept("Eiffel Tower", Dimension::Height, 330.0);
    let landmark = proper("Eiffel Tower", Dimension::Height, 330.0);
    let car = concept("Car", Dimension::Length, 4.5);
    let field = concept("Soccer Field", Dimension::Length, 100.0);

    assert_eq!(
        pair_sentence(&human, &tower, Dimension::Height, 100.0, 0.5),
        "100 Humans stacked would be about half the height of an Eiffel Tower."
    );
    assert_eq!(
        pair_sentence(&human, &landmark, Dimension::Height, 100.0, 0.5),
        "100 Humans stacked would be about half the height of the Eiffel Tower."
    );
    assert_eq!(
        pair_sentence(&car, &field, Dimension::Length, 100.0, 4.5),
        "100 Cars lined up would stretch about 4 and a half times the length of a Soccer Field."
    );
}

#[test]
fn pair_sentences_for_durations() {
    let blink = concept("Eye blink", Dimension::Duration, 0.15);
    let song = concept("Average song length (pop, 2020s)", Dimension::Duration, 190.0);
    let marathon = concept("men's Marathon world record", Dimension::Duration, 7084.0);
    let apollo = proper("Apollo 11 total mission", Dimension::Duration, 691_200.0);

    assert_eq!(
        pair_sentence(&blink, &song, Dimension::Duration, 1000.0, 0.5),
        "1,000 Eye blinks would last about half as long as an Average song length (pop, 2020s)."
    );
    assert_eq!(
        pair_sentence(&song, &marathon, Dimension::Duration, 100.0, 2.0),
        "100 Average song length (pop, 2020s)s would last about as long as 2 men's Marathon world records."
    );
    assert_eq!(
        pair_sentence(&blink, &apollo, Dimension::Duration, 10_000_000.0, 2.0),
        "10,000,000 Eye blinks would last about 2x as long as the Apollo 11 total mission."
    );
}

#[test]
fn pair_sentences_for_distances() {
    let earth = concept("Earth", Dimension::Distance, 149_597_870_000.0);
    let neptune = concept("Neptune", Dimension::Distance, 4_495_000_000_000.0);
    let mars = concept("Mars", Dimension::Distance, 227_900_000_000.0);
    let sun = proper("Sun", Dimension::Distance, 149_597_870_000.0);

    assert_eq!(
        pair_sentence(&earth, &neptune, Dimension::Distance, 100.0, 3.0),
        "100x the distance to Earth would span about 3x the distance to Neptune."
    );
    assert_eq!(
        pair_sentence(&mars, &sun, Dimension::Distance, 50.0, 1.0),
        "50x the distance to Mars would span about the distance to the Sun."
    );
}

proptest! {
    #[test]
    fn sentences_never_double_hedge(ratio in 1.1f64..1000.0, count in 1.0f64..1e6) {
        let field = concept("Soccer Field", Dimension::Length, 100.0);
        let car = concept("Car", Dimension::Length, 4.5);

        let unit = unit_sentence(&field, Dimension::Length, ratio, ratio * 100.0, "m");
        let pair = pair_sentence(&car, &field, Dimension::Length, count, ratio);
        for sentence in [unit, pair] {
            prop_assert!(!sentence.contains("about more than"));
            prop_assert!(!sentence.contains("about almost"));
            prop_assert!(sentence.ends_with('.'));
        }
    }

    #[test]
    fn ratio_and_count_wording_agree_on_hedging(ratio in 1.1f64..1000.0) {
        let multiplier = humanize_ratio(ratio);
        let amount = approx_count(ratio);
        prop_assert_eq!(multiplier.starts_with("more than"), amount.starts_with("more than"));
        prop_assert_eq!(multiplier.starts_with("almost"), amount.starts_with("almost"));
    }
}
