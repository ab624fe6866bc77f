#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use waymark::{
    Guide, GuideState, ManualClock, OverlayAction, OverlayContent, OverlayHost, Rect,
    ScrollAnchor, Step, StepPhase,
};
use web_time::Duration;

const TAGS: [&str; 4] = ["a", "b", "c", "d"];

#[derive(Debug, Arbitrary)]
enum Op {
    Start(Vec<(u8, bool, bool)>),
    Advance,
    End,
    Update(u8, bool),
    Tick(u16),
    Action(u8),
    Initialize(Vec<u8>),
}

#[derive(Default)]
struct Counter {
    open: i32,
}

impl OverlayHost for Counter {
    type Surface = ();

    fn open_surface(&mut self) -> Option<()> {
        self.open += 1;
        Some(())
    }

    fn render(&mut self, _surface: &mut (), _content: &OverlayContent) {}

    fn close_surface(&mut self, _surface: ()) {
        self.open -= 1;
    }
}

fn tag(n: u8) -> &'static str {
    TAGS[usize::from(n) % TAGS.len()]
}

fn rect(known: bool) -> Rect {
    if known {
        Rect::new(8.0, 8.0, 32.0, 16.0)
    } else {
        Rect::ZERO
    }
}

fuzz_target!(|ops: Vec<Op>| {
    if ops.len() > 256 {
        return;
    }
    let clock = ManualClock::new();
    let mut guide = Guide::with_clock(Counter::default(), clock.clone());
    guide.set_scroll_proxy(|_: &ScrollAnchor| {});

    for op in ops {
        match op {
            Op::Start(entries) => {
                let steps = entries.into_iter().take(16).map(|(t, known, anchored)| {
                    let step = Step::new(tag(t), "m").target(rect(known));
                    if anchored { step.scroll_to("x") } else { step }
                });
                guide.start(steps, None);
            }
            Op::Advance => guide.advance(),
            Op::End => guide.end(),
            Op::Update(t, known) => guide.update_rect(tag(t), rect(known)),
            Op::Tick(ms) => {
                clock.advance(Duration::from_millis(u64::from(ms)));
                guide.tick();
            }
            Op::Action(n) => guide.handle_action(match n % 3 {
                0 => OverlayAction::Next,
                1 => OverlayAction::Skip,
                _ => OverlayAction::DimTap,
            }),
            Op::Initialize(tags) => guide.initialize_tags(tags.into_iter().take(8).map(tag)),
        }

        let open = guide.host().open;
        assert!((0..=1).contains(&open), "surfaces open: {open}");
        match guide.run_state() {
            GuideState::Idle => assert!(!guide.is_overlay_visible()),
            GuideState::Active { index, phase } => {
                assert!(index < guide.steps().len(), "index out of range");
                if phase == StepPhase::Presented {
                    assert!(guide.steps()[index].has_geometry(), "presented without geometry");
                }
            }
        }
    }

    guide.end();
    assert_eq!(guide.run_state(), GuideState::Idle);
    assert_eq!(guide.host().open, 0);
});
