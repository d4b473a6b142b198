//! End-to-end navigation on a 10x5 grid with a single "Go" button.

use tgrid_runtime::{Action, Mode, Page, ProgramConfig, ProgramSimulator, Step, Token};
use tgrid_widgets::{Cursor, Direction, WidgetRegistry};

fn go_sim() -> ProgramSimulator {
    let mut page = Page::new(1, "Main", WidgetRegistry::new(10, 5));
    page.add_button("Go", 2, 2, Action::Noop)
        .expect("Go fits inside the border");
    ProgramSimulator::new(ProgramConfig::new(10, 5), vec![page]).expect("valid config")
}

#[test]
fn navigate_to_go_and_activate() {
    let mut sim = go_sim();
    assert_eq!(sim.cursor(), Cursor::new(1, 1));

    sim.send(Token::Move(Direction::Right));
    sim.send(Token::Move(Direction::Right));
    assert_eq!(sim.cursor(), Cursor::new(3, 1));

    sim.send(Token::Move(Direction::Down));
    assert_eq!(sim.cursor(), Cursor::new(3, 2));

    let registry = sim
        .dispatcher()
        .current_registry()
        .expect("page 1 exists");
    let go = registry.hit_test(3, 2).expect("Go under cursor");
    assert_eq!(registry.button(go).map(|b| b.label.as_str()), Some("Go"));

    assert_eq!(sim.send(Token::Activate), Step::Activated(go));
    assert_eq!(sim.logs(), vec!["Selected: Go"]);
    assert_eq!(sim.mode(), Mode::Navigate(1));
}

#[test]
fn rendered_frame_shows_cursor_over_button() {
    let mut sim = go_sim();
    sim.press_keys("dds");
    let frame = sim.render().expect("frame");
    assert_eq!(
        frame.to_plain_lines(),
        vec![
            "+--------+",
            "|        |",
            "| GX     |",
            "|        |",
            "+--------+",
        ]
    );
}

#[test]
fn cursor_cannot_leave_interior() {
    let mut sim = go_sim();
    sim.press_keys("wwwwaaaa");
    assert_eq!(sim.cursor(), Cursor::new(1, 1));
    sim.press_keys("ssssssdddddddddddd");
    assert_eq!(sim.cursor(), Cursor::new(8, 3));
}

#[test]
fn quit_token_stops_the_program() {
    let mut sim = go_sim();
    assert!(sim.is_running());
    assert_eq!(sim.send(Token::Quit), Step::Quit);
    assert!(!sim.is_running());
}
