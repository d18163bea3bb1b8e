use jiff::civil::date;
use seasoncal::{
    DayMonth, DayOfYear, Error, MONTH_LENGTHS, Season, classify, days_in_month, month_name,
};

#[test]
fn day_of_year_matches_a_real_non_leap_year() {
    // 2025 is not a leap year so jiff's ordinal is the expected count
    let mut day = date(2025, 1, 1);
    loop {
        let c = day.classify().unwrap();
        assert_eq!(
            i16::try_from(c.day_of_year.get()).unwrap(),
            day.day_of_year(),
            "mismatch for {day}"
        );
        if day == date(2025, 12, 31) {
            break;
        }
        day = day.tomorrow().unwrap();
    }
}

#[test]
fn every_valid_pair_counts_days_inclusively() {
    let mut expected = 0u16;
    for month in 1..=12 {
        for day in 1..=i32::from(MONTH_LENGTHS[month as usize - 1]) {
            expected += 1;
            let c = classify(day, month).unwrap();
            assert_eq!(c.day_of_year.get(), expected, "day {day} month {month}");
            assert_eq!(c.season, Season::of(c.day_of_year));
            assert_eq!(DayOfYear::new(expected).unwrap().month_day(), (month as u8, day as u8));
        }
    }
    assert_eq!(expected, 365);
}

#[test]
fn seasons_change_exactly_three_times() {
    let mut changes = Vec::new();
    let mut previous = Season::Summer;
    for d in 1..=365 {
        let season = Season::of(DayOfYear::new(d).unwrap());
        if season != previous {
            changes.push((d, season));
            previous = season;
        }
    }
    assert_eq!(
        changes,
        [
            (80, Season::Autumn),
            (172, Season::Winter),
            (263, Season::Spring)
        ]
    );
}

#[test]
fn invalid_input_is_rejected_everywhere() {
    for month in [i32::MIN, -1, 0, 13, i32::MAX] {
        assert_eq!(classify(1, month), Err(Error::InvalidMonth { month }));
        assert_eq!(month_name(month), "");
        assert_eq!(days_in_month(month), None);
    }
    for month in 1..=12 {
        let max_day = days_in_month(month).unwrap();
        for day in [i32::MIN, 0, i32::from(max_day) + 1, i32::MAX] {
            assert_eq!(
                classify(day, month),
                Err(Error::InvalidDay {
                    day,
                    month,
                    max_day
                })
            );
        }
    }
}

#[test]
fn leap_day_is_not_part_of_the_table() {
    assert!(date(2024, 2, 29).classify().is_err());
    assert_eq!(
        date(2024, 3, 1).classify().unwrap(),
        date(2025, 3, 1).classify().unwrap()
    );
}
