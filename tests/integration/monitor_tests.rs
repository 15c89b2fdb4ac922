//! End-to-end monitor scenarios against mock adapters.

use parmon::app::events::{InputEvent, MonitorEvent};
use parmon::app::service::MonitorService;
use parmon::config::MonitorConfig;
use parmon::pins::PinDir;

use super::mock_hw::{DisplayOp, MockDisplay, MockPort, MockTone, RecordingSink};

const BASE: u16 = 0x378;
const DATA: u16 = 0x378;
const STATUS: u16 = 0x379;
const CONTROL: u16 = 0x37a;

fn service() -> MonitorService {
    MonitorService::new(&MonitorConfig::default(), BASE)
}

fn service_at(start_pin: u8) -> MonitorService {
    let config = MonitorConfig {
        start_pin,
        ..MonitorConfig::default()
    };
    MonitorService::new(&config, BASE)
}

fn started(svc: &mut MonitorService, d: &mut MockDisplay, sink: &mut RecordingSink) {
    svc.start(d, sink);
    d.clear_ops();
}

// ── First frame ───────────────────────────────────────────────

#[test]
fn first_frame_renders_every_status_line() {
    let mut svc = service();
    let (mut hw, mut d, mut tone, mut sink) = (
        MockPort::new(),
        MockDisplay::new(),
        MockTone::new(),
        RecordingSink::new(),
    );
    started(&mut svc, &mut d, &mut sink);

    svc.tick(&mut hw, &mut d, &mut tone, 0);
    assert_eq!(d.status_lines().len(), 25);
}

#[test]
fn all_zero_stub_renders_clr_on_signal_pins_and_gnd_on_grounds() {
    let mut svc = service();
    let (mut hw, mut d, mut tone, mut sink) = (
        MockPort::new(),
        MockDisplay::new(),
        MockTone::new(),
        RecordingSink::new(),
    );
    started(&mut svc, &mut d, &mut sink);
    svc.tick(&mut hw, &mut d, &mut tone, 0);

    for pin in svc.pins().iter() {
        let line = d.text_at(pin.col, pin.row).expect("line drawn");
        let expected = if pin.dir == PinDir::Ground { "gnd" } else { "clr" };
        assert!(line.contains(expected), "pin {}: {line}", pin.id);
    }
}

// ── Differential rendering ────────────────────────────────────

#[test]
fn unchanged_frame_emits_no_status_lines() {
    let mut svc = service();
    let (mut hw, mut d, mut tone, mut sink) = (
        MockPort::new(),
        MockDisplay::new(),
        MockTone::new(),
        RecordingSink::new(),
    );
    started(&mut svc, &mut d, &mut sink);
    svc.tick(&mut hw, &mut d, &mut tone, 0);

    d.clear_ops();
    svc.tick(&mut hw, &mut d, &mut tone, 0);
    assert!(d.status_lines().is_empty());
    // The scope strips still shift every frame.
    assert!(d.ops.iter().any(|op| matches!(op, DisplayOp::Text { col: 8, .. })));
}

#[test]
fn changed_input_redraws_exactly_that_line() {
    let mut svc = service();
    let (mut hw, mut d, mut tone, mut sink) = (
        MockPort::new(),
        MockDisplay::new(),
        MockTone::new(),
        RecordingSink::new(),
    );
    started(&mut svc, &mut d, &mut sink);
    svc.tick(&mut hw, &mut d, &mut tone, 0);

    hw.set(STATUS, 0x40); // pin 10 (-ack)
    d.clear_ops();
    svc.tick(&mut hw, &mut d, &mut tone, 0);

    let lines = d.status_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(d.text_at(5, 16), Some("10   SET   0379 !40  -ack"));
}

// ── Toggling outputs ──────────────────────────────────────────

#[test]
fn toggle_pin_1_sets_only_pin_1() {
    let mut svc = service();
    let (mut hw, mut d, mut tone, mut sink) = (
        MockPort::new(),
        MockDisplay::new(),
        MockTone::new(),
        RecordingSink::new(),
    );
    started(&mut svc, &mut d, &mut sink);
    svc.tick(&mut hw, &mut d, &mut tone, 0);

    svc.handle_event(InputEvent::Toggle, &mut hw, &mut sink);
    assert_eq!(hw.writes, vec![(CONTROL, 0x01)]);

    d.clear_ops();
    svc.tick(&mut hw, &mut d, &mut tone, 0);

    let set_lines: Vec<&str> = svc
        .pins()
        .iter()
        .filter_map(|p| d.text_at(p.col, p.row))
        .filter(|line| line.contains("SET"))
        .collect();
    assert_eq!(set_lines, vec![" 1   SET   037a !01  -strobe"]);
}

#[test]
fn toggle_twice_restores_the_register_byte() {
    let mut svc = service();
    let (mut hw, mut sink) = (MockPort::new(), RecordingSink::new());
    hw.set(CONTROL, 0xaa);

    svc.handle_event(InputEvent::Toggle, &mut hw, &mut sink);
    assert_eq!(hw.get(CONTROL), 0xab);
    svc.handle_event(InputEvent::Toggle, &mut hw, &mut sink);
    assert_eq!(hw.get(CONTROL), 0xaa);
}

#[test]
fn toggle_on_an_input_pin_is_a_noop() {
    let mut svc = service_at(10);
    let (mut hw, mut sink) = (MockPort::new(), RecordingSink::new());
    hw.set(STATUS, 0x55);

    svc.handle_event(InputEvent::Toggle, &mut hw, &mut sink);
    assert!(hw.writes.is_empty());
    assert_eq!(hw.get(STATUS), 0x55);
    assert!(
        !sink
            .events
            .iter()
            .any(|e| matches!(e, MonitorEvent::OutputToggled { .. }))
    );
}

// ── Cursor navigation ─────────────────────────────────────────

#[test]
fn three_down_then_one_up_lands_on_pin_3() {
    let mut svc = service();
    let (mut hw, mut sink) = (MockPort::new(), RecordingSink::new());

    for _ in 0..3 {
        svc.handle_event(InputEvent::MoveDown, &mut hw, &mut sink);
    }
    assert_eq!(svc.cursor_pin(), 4);
    svc.handle_event(InputEvent::MoveUp, &mut hw, &mut sink);
    assert_eq!(svc.cursor_pin(), 3);

    assert_eq!(
        sink.events.first(),
        Some(&MonitorEvent::CursorMoved { from: 1, to: 2 })
    );
}

#[test]
fn cursor_move_forces_a_full_redraw() {
    let mut svc = service();
    let (mut hw, mut d, mut tone, mut sink) = (
        MockPort::new(),
        MockDisplay::new(),
        MockTone::new(),
        RecordingSink::new(),
    );
    started(&mut svc, &mut d, &mut sink);
    svc.tick(&mut hw, &mut d, &mut tone, 0);

    svc.handle_event(InputEvent::MoveDown, &mut hw, &mut sink);
    d.clear_ops();
    svc.tick(&mut hw, &mut d, &mut tone, 0);
    assert_eq!(d.status_lines().len(), 25);
}

#[test]
fn terminal_cursor_tracks_the_edited_line() {
    let mut svc = service();
    let (mut hw, mut d, mut tone, mut sink) = (
        MockPort::new(),
        MockDisplay::new(),
        MockTone::new(),
        RecordingSink::new(),
    );
    started(&mut svc, &mut d, &mut sink);
    svc.tick(&mut hw, &mut d, &mut tone, 0);
    // Pin 1's line is at (5, 7); the hardware cursor parks one column left.
    assert_eq!(d.ops.first(), Some(&DisplayOp::Cursor { col: 4, row: 7 }));
}

// ── Tone feedback ─────────────────────────────────────────────

#[test]
fn tone_follows_the_input_pin_under_the_cursor() {
    let mut svc = service_at(10);
    let (mut hw, mut d, mut tone, mut sink) = (
        MockPort::new(),
        MockDisplay::new(),
        MockTone::new(),
        RecordingSink::new(),
    );
    started(&mut svc, &mut d, &mut sink);

    hw.set(STATUS, 0x40);
    svc.tick(&mut hw, &mut d, &mut tone, 0);
    assert!(tone.on);
    assert_eq!(tone.freq, Some(3000));

    hw.set(STATUS, 0x00);
    svc.tick(&mut hw, &mut d, &mut tone, 0);
    assert!(!tone.on);
    assert_eq!(tone.transitions, vec![true, false]);
}

#[test]
fn tone_stays_off_while_cursor_is_on_an_output() {
    let mut svc = service();
    let (mut hw, mut d, mut tone, mut sink) = (
        MockPort::new(),
        MockDisplay::new(),
        MockTone::new(),
        RecordingSink::new(),
    );
    started(&mut svc, &mut d, &mut sink);

    hw.set(STATUS, 0xff); // inputs all set, but the cursor sits on pin 1
    svc.tick(&mut hw, &mut d, &mut tone, 0);
    assert!(!tone.on);
    assert!(tone.transitions.is_empty());
}

// ── Scope panel ───────────────────────────────────────────────

#[test]
fn scope_legends_appear_on_the_first_frame() {
    let mut svc = service();
    let (mut hw, mut d, mut tone, mut sink) = (
        MockPort::new(),
        MockDisplay::new(),
        MockTone::new(),
        RecordingSink::new(),
    );
    started(&mut svc, &mut d, &mut sink);
    svc.tick(&mut hw, &mut d, &mut tone, 0);

    assert_eq!(d.text_at(3, 21), Some(" 10 ["));
    assert_eq!(d.text_at(3, 22), Some(" 11 ["));
    assert_eq!(d.text_at(3, 25), Some(" 15 ["));

    d.clear_ops();
    svc.tick(&mut hw, &mut d, &mut tone, 0);
    assert_eq!(d.text_at(3, 21), None);
}

#[test]
fn seconds_strip_marks_wall_clock_changes() {
    let mut svc = service();
    let (mut hw, mut d, mut tone, mut sink) = (
        MockPort::new(),
        MockDisplay::new(),
        MockTone::new(),
        RecordingSink::new(),
    );
    started(&mut svc, &mut d, &mut sink);

    svc.tick(&mut hw, &mut d, &mut tone, 5);
    svc.tick(&mut hw, &mut d, &mut tone, 5);
    let row = d.text_at(8, 20).expect("seconds strip drawn");
    assert!(row.starts_with(' '));

    svc.tick(&mut hw, &mut d, &mut tone, 6);
    let row = d.text_at(8, 20).expect("seconds strip drawn");
    assert!(row.starts_with('.'));
}

#[test]
fn input_traces_record_levels_newest_first() {
    let mut svc = service();
    let (mut hw, mut d, mut tone, mut sink) = (
        MockPort::new(),
        MockDisplay::new(),
        MockTone::new(),
        RecordingSink::new(),
    );
    started(&mut svc, &mut d, &mut sink);

    hw.set(STATUS, 0x40); // pin 10 set
    svc.tick(&mut hw, &mut d, &mut tone, 0);
    hw.set(STATUS, 0x00);
    svc.tick(&mut hw, &mut d, &mut tone, 0);

    let row = d.text_at(8, 21).expect("trace drawn");
    let mut glyphs = row.chars();
    assert_eq!(glyphs.next(), Some('_'));
    assert_eq!(glyphs.next(), Some('\u{2580}'));
}

// ── Lifecycle ─────────────────────────────────────────────────

#[test]
fn started_event_carries_the_port_base() {
    let mut svc = service();
    let (mut d, mut sink) = (MockDisplay::new(), RecordingSink::new());
    svc.start(&mut d, &mut sink);
    assert_eq!(
        sink.events.first(),
        Some(&MonitorEvent::Started { port_base: BASE })
    );
    assert!(d.ops.contains(&DisplayOp::Clear));
}

#[test]
fn quit_then_shutdown_leaves_the_tone_off() {
    let mut svc = service_at(10);
    let (mut hw, mut d, mut tone, mut sink) = (
        MockPort::new(),
        MockDisplay::new(),
        MockTone::new(),
        RecordingSink::new(),
    );
    started(&mut svc, &mut d, &mut sink);

    hw.set(STATUS, 0x40);
    svc.tick(&mut hw, &mut d, &mut tone, 0);
    assert!(tone.on);

    svc.handle_event(InputEvent::Quit, &mut hw, &mut sink);
    assert!(!svc.is_running());

    svc.shutdown(&mut d, &mut tone, &mut sink);
    assert!(!tone.on);
    assert_eq!(sink.events.last(), Some(&MonitorEvent::Stopped));
    assert!(d.ops.contains(&DisplayOp::Cursor { col: 1, row: 25 }));
}

#[test]
fn header_is_drawn_once_at_start() {
    let mut svc = service();
    let (mut d, mut sink) = (MockDisplay::new(), RecordingSink::new());
    svc.start(&mut d, &mut sink);
    assert_eq!(d.text_at(1, 3), Some("0378 = port base"));
    assert!(d.text_at(1, 5).is_some_and(|t| t.contains("PIN STATE")));
}

#[test]
fn ground_lines_stay_gnd_even_with_all_bits_high() {
    let mut svc = service();
    let (mut hw, mut d, mut tone, mut sink) = (
        MockPort::new(),
        MockDisplay::new(),
        MockTone::new(),
        RecordingSink::new(),
    );
    hw.set(DATA, 0xff);
    hw.set(STATUS, 0xff);
    hw.set(CONTROL, 0xff);
    started(&mut svc, &mut d, &mut sink);
    svc.tick(&mut hw, &mut d, &mut tone, 0);

    for pin in svc.pins().iter().filter(|p| p.dir == PinDir::Ground) {
        let line = d.text_at(pin.col, pin.row).expect("line drawn");
        assert!(line.contains("gnd"), "pin {}: {line}", pin.id);
    }
}
