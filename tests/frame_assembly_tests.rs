use chrono::NaiveDate;
use epicurve_rs::core::{DEFAULT_FRAME_LABEL_FORMAT, FrameSequence, frame_label};
use epicurve_rs::figure::{Coord, Trace};

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 3, n).expect("valid date")
}

#[test]
fn one_frame_per_distinct_date_in_ascending_order() {
    let dates = vec![day(5), day(1), day(3)];
    let sequence = FrameSequence::assemble(&dates, DEFAULT_FRAME_LABEL_FORMAT, 100, 100, |_, _| {
        Vec::new()
    });

    assert_eq!(sequence.len(), 3);
    let names: Vec<&str> = sequence.frames.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["01 Mar 2020", "03 Mar 2020", "05 Mar 2020"]);
}

#[test]
fn labels_are_unique_even_across_year_boundaries() {
    let dates = vec![
        NaiveDate::from_ymd_opt(2019, 12, 31).expect("valid date"),
        NaiveDate::from_ymd_opt(2020, 12, 31).expect("valid date"),
    ];
    let sequence = FrameSequence::assemble(&dates, DEFAULT_FRAME_LABEL_FORMAT, 100, 100, |_, _| {
        Vec::new()
    });

    assert_eq!(sequence.frames[0].name, "31 Dec 2019");
    assert_eq!(sequence.frames[1].name, "31 Dec 2020");
}

#[test]
fn steps_pair_one_to_one_with_frames() {
    let dates: Vec<NaiveDate> = (1..=4).map(day).collect();
    let sequence = FrameSequence::assemble(&dates, DEFAULT_FRAME_LABEL_FORMAT, 150, 80, |_, _| {
        Vec::new()
    });

    assert_eq!(sequence.steps.len(), sequence.frames.len());
    for (step, frame) in sequence.steps.iter().zip(&sequence.frames) {
        assert_eq!(step.label, frame.name);
        assert_eq!(step.target, frame.name);
        assert_eq!(step.frame_duration_ms, 150);
        assert_eq!(step.transition_ms, 80);
    }
}

#[test]
fn builder_sees_every_date_with_its_label() {
    let dates = vec![day(2), day(1)];
    let mut seen = Vec::new();
    let sequence = FrameSequence::assemble(
        &dates,
        DEFAULT_FRAME_LABEL_FORMAT,
        100,
        100,
        |date, label| {
            seen.push((date, label.to_owned()));
            vec![Trace::scatter().with_x(vec![Coord::from(0i64)])]
        },
    );

    assert_eq!(
        seen,
        vec![
            (day(1), frame_label(day(1), DEFAULT_FRAME_LABEL_FORMAT)),
            (day(2), frame_label(day(2), DEFAULT_FRAME_LABEL_FORMAT)),
        ]
    );
    assert!(sequence.frames.iter().all(|frame| frame.data.len() == 1));
}

#[test]
fn slider_starts_on_the_last_frame() {
    let dates: Vec<NaiveDate> = (1..=5).map(day).collect();
    let sequence = FrameSequence::assemble(&dates, DEFAULT_FRAME_LABEL_FORMAT, 100, 100, |_, _| {
        Vec::new()
    });

    let slider = sequence.slider(Some("Date: "), 300);
    assert_eq!(slider.active, 4);
    assert_eq!(slider.transition_ms, 300);
    assert_eq!(slider.current_value_prefix.as_deref(), Some("Date: "));
    assert_eq!(slider.steps.len(), 5);
}

#[test]
fn empty_date_set_produces_an_empty_sequence() {
    let sequence = FrameSequence::assemble(&[], DEFAULT_FRAME_LABEL_FORMAT, 100, 100, |_, _| {
        Vec::new()
    });
    assert!(sequence.is_empty());
    assert_eq!(sequence.slider(None, 300).active, 0);
}
