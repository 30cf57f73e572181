//! Integration test for the per-frame cycle: events, process, present.

use trellis_ui::{
    generate_buttons, BranchPage, Button, ButtonResult, ButtonStyle, InputBox, InputEvent,
    InputManager, Key, Member, MouseButton, Orientation, Page, PageResult, Point, RenderCommand,
    Scrollbar, Size, TextStyle, UIRenderer, Widget, WidgetResult,
};

fn run(input: &mut InputManager, events: impl IntoIterator<Item = InputEvent>) {
    assert_eq!(input.frame(events), 0, "every event should be tracked");
}

fn click_at(input: &mut InputManager, at: Point) {
    run(
        input,
        [
            InputEvent::Motion { to: at },
            InputEvent::ButtonDown {
                button: MouseButton::Left,
                at,
            },
        ],
    );
}

fn release_left(input: &mut InputManager) {
    run(input, [InputEvent::ButtonUp { button: MouseButton::Left }]);
}

fn with_results<R>(
    page: &mut Page<'_, InputManager>,
    input: &InputManager,
    f: impl FnOnce(&PageResult<'_>) -> R,
) -> R {
    let mut result = WidgetResult::default();
    page.process(Point::ZERO, input, &mut result);
    f(result.as_page().expect("a page reports a page result"))
}

#[test]
fn test_page_of_button_and_input_box() {
    let mut input = InputManager::with_text_keys();
    let mut input_box: InputBox<InputManager> =
        InputBox::new(Point::new(0, 100), Size::new(120, 24), TextStyle::default());
    let box_id = input_box.id();
    let button: Button<InputManager> =
        Button::new(Point::ZERO, ButtonStyle::new(Size::new(50, 20)));
    let button_id = button.id();

    {
        let mut page = Page::new(Point::new(10, 10));
        page.push_owned(button);
        page.push_borrowed(&mut input_box);

        // Button spans (10, 10)..(60, 30) on screen.
        click_at(&mut input, Point::new(20, 20));
        let outcome = with_results(&mut page, &input, |r| {
            assert_eq!(r.len(), 2);
            r.get(button_id).and_then(WidgetResult::as_button).copied()
        });
        assert_eq!(outcome, Some(ButtonResult { pressed: true, released: false }));

        release_left(&mut input);
        let outcome = with_results(&mut page, &input, |r| {
            r.get(button_id).and_then(WidgetResult::as_button).copied()
        });
        assert_eq!(outcome, Some(ButtonResult { pressed: false, released: true }));

        // Focus the box, then type "ok" and submit.
        click_at(&mut input, Point::new(20, 115));
        with_results(&mut page, &input, |_| ());
        release_left(&mut input);
        with_results(&mut page, &input, |_| ());

        for c in ['o', 'k'] {
            run(&mut input, [InputEvent::KeyDown(Key::Char(c))]);
            with_results(&mut page, &input, |_| ());
            run(&mut input, [InputEvent::KeyUp(Key::Char(c))]);
            with_results(&mut page, &input, |_| ());
        }
        run(&mut input, [InputEvent::KeyDown(Key::Enter)]);
        let typed = with_results(&mut page, &input, |r| {
            r.get(box_id)
                .and_then(WidgetResult::as_input_box)
                .map(|b| (b.text.to_owned(), b.submitted))
        });
        assert_eq!(typed, Some(("ok".to_owned(), true)));

        let mut renderer = UIRenderer::new();
        page.present(&mut renderer, Point::ZERO);
        let text = renderer.commands().iter().find_map(|c| match c {
            RenderCommand::Text { text, origin, .. } => Some((text.clone(), *origin)),
            _ => None,
        });
        // Page (10, 10) + box (0, 100) + default text offset (2, 4).
        assert_eq!(text, Some(("ok".to_owned(), Point::new(12, 114))));
    }

    assert_eq!(input_box.text(), "ok");
    assert!(input_box.is_focused());
}

#[test]
fn test_branch_switch_by_mouse() {
    let mut input = InputManager::with_text_keys();
    let style = ButtonStyle::new(Size::new(50, 20));
    let mut buttons: Vec<Button<InputManager>> =
        generate_buttons(Point::ZERO, &style, vec![None; 2], 10, Orientation::Horizontal);
    let second = buttons.pop().expect("two buttons");
    let first = buttons.pop().expect("two buttons");
    let (a, b) = (first.id(), second.id());

    let mut branches = BranchPage::from_lists(
        Point::ZERO,
        vec![Member::owned(first), Member::owned(second)],
        vec![
            Member::owned(Page::new(Point::new(0, 30))),
            Member::owned(Page::new(Point::new(0, 30))),
        ],
        None,
    )
    .expect("valid branches");
    assert_eq!(branches.active(), a);

    // Press the second tab: nothing switches until release.
    click_at(&mut input, Point::new(70, 5));
    {
        let mut result = WidgetResult::default();
        branches.process(Point::ZERO, &input, &mut result);
        assert_eq!(result.as_branch_page().map(|r| r.active), Some(a));
    }

    release_left(&mut input);
    {
        let mut result = WidgetResult::default();
        branches.process(Point::ZERO, &input, &mut result);
        assert_eq!(result.as_branch_page().map(|r| r.active), Some(b));
    }

    // Erasing the active tab falls back to the remaining one.
    let (erased, _) = branches.erase_branch(b).expect("not the last").expect("present");
    assert_eq!(erased.id(), b);
    assert_eq!(branches.active(), a);
    assert!(branches.erase_branch(a).is_err());
}

#[test]
fn test_scrollbar_drag_stays_in_range() {
    let mut input = InputManager::with_text_keys();
    let mut bar: Scrollbar<InputManager> =
        Scrollbar::vertical(Point::new(200, 0), Size::new(10, 110), 10).expect("handle fits");

    run(&mut input, [InputEvent::Motion { to: Point::new(205, 5) }]);
    run(
        &mut input,
        [InputEvent::ButtonDown {
            button: MouseButton::Left,
            at: Point::new(205, 5),
        }],
    );

    let mut seen = Vec::new();
    for y in [55, 500, -400, 30] {
        run(&mut input, [InputEvent::Motion { to: Point::new(205, y) }]);
        let mut result = WidgetResult::default();
        bar.process(Point::ZERO, &input, &mut result);
        seen.push(result.as_scrollbar().map(|r| r.percentage).unwrap_or(-1.0));
    }

    assert!(seen.iter().all(|p| (0.0..=1.0).contains(p)));
    assert!((seen[0] - 0.5).abs() < 1e-9);
    assert!((seen[1] - 1.0).abs() < 1e-9);
    assert!(seen[2].abs() < 1e-9);
}

#[test]
fn test_scrollbar_grab_and_move_in_one_frame() {
    let mut input = InputManager::with_text_keys();
    let mut bar: Scrollbar<InputManager> =
        Scrollbar::vertical(Point::ZERO, Size::new(10, 110), 10).expect("handle fits");
    run(&mut input, [InputEvent::Motion { to: Point::new(5, 5) }]);

    let mut step = |input: &InputManager| {
        let mut result = WidgetResult::default();
        bar.process(Point::ZERO, input, &mut result);
        result.as_scrollbar().map(|r| r.percentage).unwrap_or(-1.0)
    };

    // Press on the handle and move before the frame is processed.
    run(
        &mut input,
        [
            InputEvent::ButtonDown {
                button: MouseButton::Left,
                at: Point::new(5, 5),
            },
            InputEvent::Motion { to: Point::new(5, 25) },
        ],
    );
    assert!((step(&input) - 0.2).abs() < 1e-9);

    // The press point is now above the handle; the drag still continues.
    run(&mut input, [InputEvent::Motion { to: Point::new(5, 45) }]);
    assert!((step(&input) - 0.4).abs() < 1e-9);

    release_left(&mut input);
    run(&mut input, [InputEvent::Motion { to: Point::new(5, 90) }]);
    assert!((step(&input) - 0.4).abs() < 1e-9);
    assert!(!bar.handle().is_front());
}

#[test]
fn test_two_keys_one_edge() {
    let mut input = InputManager::with_text_keys();
    run(
        &mut input,
        [
            InputEvent::KeyDown(Key::Char('a')),
            InputEvent::KeyDown(Key::Char('b')),
        ],
    );

    let clicks = [Key::Char('a'), Key::Char('b')]
        .into_iter()
        .filter(|&k| input.keys().is_click(k) == Ok(true))
        .count();
    assert_eq!(clicks, 1);
    assert!(input.keys().current().is_some());
}

#[test]
fn test_untracked_events_are_skipped() {
    let mut input = InputManager::new([Key::Enter]);
    let skipped = input.frame([
        InputEvent::KeyDown(Key::Char('z')),
        InputEvent::KeyDown(Key::Enter),
    ]);

    assert_eq!(skipped, 1);
    assert_eq!(input.keys().is_click(Key::Enter), Ok(true));
    assert!(input.keys().is_click(Key::Char('z')).is_err());
    assert!(!input.keys().is_click_unchecked(Key::Char('z')));
}
