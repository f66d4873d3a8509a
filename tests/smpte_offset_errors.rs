use pretty_assertions::assert_eq;
use smf_reader::prelude::*;

/// Helper to create raw SMPTE offset data bytes
fn create_smpte_bytes(
    fps_bits: u8,
    hour: u8,
    minute: u8,
    second: u8,
    frame: u8,
    subframe: u8,
) -> Vec<u8> {
    vec![
        (fps_bits << 5) | (hour & 0x1F),
        minute,
        second,
        frame,
        subframe,
    ]
}

#[test]
fn invalid_length() {
    for len in [0, 3, 4, 6] {
        let data = vec![0; len];
        assert_eq!(SmpteOffset::parse(&data), Err(SmpteError::Length(len)));
    }
}

#[test]
fn invalid_frame_type() {
    // bit 7 set pushes the frame type past the four defined rates
    for fps_bits in [4, 5, 7] {
        let data = create_smpte_bytes(fps_bits, 12, 30, 15, 10, 50);
        assert_eq!(SmpteOffset::parse(&data), Err(SmpteError::TrackFrame(fps_bits)));
    }
}

#[test]
fn invalid_fields() {
    let data = create_smpte_bytes(0, 24, 0, 0, 0, 0);
    assert_eq!(SmpteOffset::parse(&data), Err(SmpteError::HourOffset(24)));

    let data = create_smpte_bytes(0, 12, 60, 30, 15, 50);
    assert_eq!(SmpteOffset::parse(&data), Err(SmpteError::MinuteOffset(60)));

    let data = create_smpte_bytes(1, 12, 30, 255, 15, 50);
    assert_eq!(SmpteOffset::parse(&data), Err(SmpteError::SecondOffset(255)));

    let data = create_smpte_bytes(2, 12, 30, 45, 15, 100);
    assert_eq!(SmpteOffset::parse(&data), Err(SmpteError::Subframe(100)));
}

#[test]
fn first_error_wins() {
    let data = create_smpte_bytes(0, 25, 61, 30, 15, 50);
    assert_eq!(SmpteOffset::parse(&data), Err(SmpteError::HourOffset(25)));

    let data = create_smpte_bytes(1, 23, 60, 60, 15, 50);
    assert_eq!(SmpteOffset::parse(&data), Err(SmpteError::MinuteOffset(60)));
}

#[test]
fn hour_bits_do_not_leak_into_fps() {
    let rates = [
        SmpteFps::TwentyFour,
        SmpteFps::TwentyFive,
        SmpteFps::TwentyNine,
        SmpteFps::Thirty,
    ];
    for (fps_bits, fps) in rates.into_iter().enumerate() {
        for hour in 0..=23 {
            let data = create_smpte_bytes(fps_bits as u8, hour, 30, 45, 15, 50);
            let offset = SmpteOffset::parse(&data).unwrap();
            assert_eq!(offset.fps, fps);
            assert_eq!(offset.hour, hour);
        }
    }
}

#[test]
fn frame_is_not_range_checked() {
    let data = create_smpte_bytes(0, 12, 30, 45, 30, 50);
    assert_eq!(SmpteOffset::parse(&data).unwrap().frame, 30);
}
