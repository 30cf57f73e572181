//! Benchmark for one full frame over a populated widget tree.
//!
//! Run with: cargo bench --package trellis_ui --bench frame_benchmark

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trellis_ui::{
    generate_buttons, wrap, Button, ButtonStyle, Color, FrameArray, InputBox, InputEvent,
    InputManager, Key, MouseButton, Orientation, Page, Point, Scrollbar, Size, Surface,
    TextStyle, UIRenderer, Widget, WidgetResult,
};

fn build_page() -> Page<'static, InputManager> {
    let mut page = Page::new(Point::new(8, 8));

    let style = ButtonStyle::new(Size::new(96, 24));
    let buttons: Vec<Button<InputManager>> =
        generate_buttons(Point::ZERO, &style, vec![None; 20], 4, Orientation::Vertical);
    for button in buttons {
        page.push_owned(button);
    }

    page.push_owned(InputBox::new(
        Point::new(120, 0),
        Size::new(200, 24),
        TextStyle::default(),
    ));
    if let Ok(bar) = Scrollbar::vertical(Point::new(340, 0), Size::new(12, 400), 40) {
        page.push_owned(bar);
    }

    let frames: Vec<Surface> = (0..8u8)
        .map(|shade| {
            let mut surface = Surface::new(Size::new(32, 32));
            surface.fill(Color::rgb(shade * 30, shade * 30, shade * 30));
            surface
        })
        .collect();
    if let Ok(anim) = FrameArray::new(frames, 2, 0) {
        page.push_owned(wrap(Point::new(120, 40), anim));
    }

    page
}

fn benchmark_steady_frame(c: &mut Criterion) {
    let mut page = build_page();
    let mut input = InputManager::with_text_keys();
    let mut renderer = UIRenderer::new();
    let mut tick = 0i32;

    c.bench_function("frame_25_widgets_idle_pointer", |b| {
        b.iter(|| {
            tick = (tick + 1) % 64;
            input.frame([InputEvent::Motion {
                to: Point::new(200 + tick, 300),
            }]);

            {
                let mut result = WidgetResult::default();
                page.process(Point::ZERO, &input, &mut result);
                black_box(&result);
            }

            renderer.begin_frame();
            page.present(&mut renderer, Point::ZERO);
            black_box(renderer.command_count())
        });
    });
}

fn benchmark_interactive_frame(c: &mut Criterion) {
    let mut page = build_page();
    let mut input = InputManager::with_text_keys();
    let mut renderer = UIRenderer::new();
    let mut down = false;

    // Focus the input box so key events reach it.
    input.frame([
        InputEvent::Motion { to: Point::new(140, 12) },
        InputEvent::ButtonDown {
            button: MouseButton::Left,
            at: Point::new(140, 12),
        },
    ]);
    {
        let mut result = WidgetResult::default();
        page.process(Point::ZERO, &input, &mut result);
    }
    input.frame([InputEvent::ButtonUp { button: MouseButton::Left }]);

    c.bench_function("frame_25_widgets_typing", |b| {
        b.iter(|| {
            down = !down;
            let key = if down { Key::Char('x') } else { Key::Backspace };
            input.frame([InputEvent::KeyDown(key)]);

            {
                let mut result = WidgetResult::default();
                page.process(Point::ZERO, &input, &mut result);
                black_box(&result);
            }

            renderer.begin_frame();
            page.present(&mut renderer, Point::ZERO);
            black_box(renderer.command_count());

            input.frame([InputEvent::KeyUp(key)]);
        });
    });
}

criterion_group!(benches, benchmark_steady_frame, benchmark_interactive_frame);
criterion_main!(benches);
