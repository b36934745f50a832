// File: crates/chart-core/tests/present.rs
// Purpose: Host embedding (600x600, centered) and the presenter seam.

use mood_chart::draw::DrawCommand;
use mood_chart::geometry::Point;
use mood_chart::{Dataset, DrawList, Gregorian, HostFrame, Presenter};

#[derive(Default)]
struct Recorder {
    frames: Vec<DrawList>,
}

impl Presenter for Recorder {
    fn present(&mut self, view: &DrawList) -> anyhow::Result<()> {
        self.frames.push(view.clone());
        Ok(())
    }
}

fn chart() -> DrawList {
    let ds = Dataset::sample(&Gregorian).expect("sample dataset");
    mood_chart::render(&ds).expect("render")
}

#[test]
fn embed_centers_chart_in_host() {
    let host = HostFrame::default();
    let view = chart();
    let hosted = host.embed(&view);
    assert_eq!((hosted.width, hosted.height), (600, 600));
    assert_eq!(host.origin_for(view.width, view.height), (50.0, 100.0));

    assert_eq!(hosted.commands[0], DrawCommand::Clear(host.background));
    match &hosted.commands[1] {
        DrawCommand::Rect { origin, width, height, .. } => {
            assert_eq!(*origin, Point::new(50.0, 100.0));
            assert_eq!((*width, *height), (500.0, 400.0));
        }
        other => panic!("expected view background rect, got {other:?}"),
    }
    assert_eq!(hosted.commands.len(), view.commands.len() + 1);
}

#[test]
fn presenter_receives_hosted_frame() {
    let mut rec = Recorder::default();
    HostFrame::default().present_in(&mut rec, &chart()).expect("present");
    assert_eq!(rec.frames.len(), 1);
    assert_eq!(rec.frames[0].width, 600);
}
