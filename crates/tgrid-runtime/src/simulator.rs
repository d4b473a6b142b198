#![forbid(unsafe_code)]

//! Deterministic program simulator for testing.
//!
//! `ProgramSimulator` drives the dispatcher and compositor without a
//! terminal or output sink. Tokens and lines are injected directly, and
//! every frame that would have been presented is captured as a [`Canvas`].
//!
//! # Example
//!
//! ```
//! use tgrid_runtime::action::Action;
//! use tgrid_runtime::config::ProgramConfig;
//! use tgrid_runtime::page::Page;
//! use tgrid_runtime::simulator::ProgramSimulator;
//! use tgrid_widgets::WidgetRegistry;
//!
//! let mut page = Page::new(1, "Main", WidgetRegistry::new(10, 5));
//! page.add_button("Go", 2, 2, Action::Noop).unwrap();
//! let mut sim = ProgramSimulator::new(ProgramConfig::new(10, 5), vec![page]).unwrap();
//! sim.press_keys("ddse");
//! assert_eq!(sim.dispatcher().log().latest(), Some("Selected: Go"));
//! ```

use std::io;

use tgrid_render::canvas::Canvas;
use tgrid_widgets::{Compositor, Cursor, Theme};

use crate::config::{ConfigError, ProgramConfig};
use crate::dispatch::{Dispatcher, Mode, Step};
use crate::input::InputSource;
use crate::page::Page;
use crate::program::{advance, build_dispatcher, render};
use crate::token::{Keymap, Token};

/// Headless driver for the dispatcher.
#[derive(Debug)]
pub struct ProgramSimulator {
    config: ProgramConfig,
    dispatcher: Dispatcher,
    compositor: Compositor,
    keymap: Keymap,
    frames: Vec<Canvas>,
    steps: Vec<Step>,
}

impl ProgramSimulator {
    /// Build a simulator with a monochrome theme.
    pub fn new(config: ProgramConfig, pages: Vec<Page>) -> Result<Self, ConfigError> {
        let dispatcher = build_dispatcher(&config, pages)?;
        Ok(Self {
            config,
            dispatcher,
            compositor: Compositor::new(Theme::monochrome()),
            keymap: Keymap::default(),
            frames: Vec::new(),
            steps: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.compositor = Compositor::new(theme);
        self
    }

    #[must_use]
    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher {
        &mut self.dispatcher
    }

    #[inline]
    pub fn cursor(&self) -> Cursor {
        self.dispatcher.cursor()
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.dispatcher.mode()
    }

    /// Whether the simulated program is still running.
    pub fn is_running(&self) -> bool {
        !self.dispatcher.is_quit()
    }

    /// Log contents, oldest first.
    pub fn logs(&self) -> Vec<&str> {
        self.dispatcher.log().iter().collect()
    }

    /// Send one token.
    pub fn send(&mut self, token: Token) -> Step {
        let step = self.dispatcher.handle(token);
        self.steps.push(step.clone());
        step
    }

    /// Send one text-entry line.
    pub fn send_line(&mut self, line: &str) -> Step {
        let step = self.dispatcher.handle_line(line);
        self.steps.push(step.clone());
        step
    }

    /// Type characters through the simulator's keymap.
    pub fn press_keys(&mut self, keys: &str) -> Vec<Step> {
        keys.chars()
            .map(|ch| {
                let token = self.keymap.translate_char(ch);
                self.send(token)
            })
            .collect()
    }

    /// Render the current state without recording it.
    pub fn render(&self) -> Option<Canvas> {
        render(&self.compositor, &self.dispatcher)
    }

    /// Render the current state and record the frame.
    pub fn capture_frame(&mut self) -> Option<&Canvas> {
        let canvas = self.render()?;
        self.frames.push(canvas);
        self.frames.last()
    }

    /// Drive the same loop as [`Program::run`](crate::program::Program::run)
    /// from `input`, capturing every frame. Returns the number of frames.
    pub fn run<I: InputSource + ?Sized>(&mut self, input: &mut I) -> io::Result<usize> {
        let start = self.frames.len();
        loop {
            self.capture_frame();
            if self.dispatcher.is_quit() {
                break;
            }
            if let Some(step) = advance(&mut self.dispatcher, input, &self.config)? {
                self.steps.push(step);
            }
        }
        Ok(self.frames.len() - start)
    }

    pub fn frames(&self) -> &[Canvas] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Canvas> {
        self.frames.last()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Every step applied so far.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn clear_frames(&mut self) {
        self.frames.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::input::ScriptedInput;
    use tgrid_widgets::WidgetRegistry;

    fn sim() -> ProgramSimulator {
        let mut page = Page::new(1, "Main", WidgetRegistry::new(12, 5));
        page.add_button("Input", 1, 2, Action::TextEntry).unwrap();
        ProgramSimulator::new(ProgramConfig::new(12, 5), vec![page]).unwrap()
    }

    #[test]
    fn capture_records_frames() {
        let mut s = sim();
        assert_eq!(s.frame_count(), 0);
        s.capture_frame();
        s.press_keys("d");
        s.capture_frame();
        assert_eq!(s.frame_count(), 2);
        assert_eq!(
            s.last_frame().unwrap().to_plain_lines()[1],
            "| Xnput    |"
        );
        s.clear_frames();
        assert!(s.last_frame().is_none());
    }

    #[test]
    fn run_with_scripted_text_entry() {
        let mut s = sim();
        let mut input = ScriptedInput::from_keys("dee").line("hi there").token(Token::Quit);
        // initial, d, e, line, e, then end of lines quits
        let frames = s.run(&mut input).unwrap();
        assert!(!s.is_running());
        assert_eq!(
            s.logs(),
            vec![
                "Selected: Input",
                "Processed: hi there",
                "Selected: Input",
            ]
        );
        assert_eq!(frames, s.frame_count());
        assert_eq!(frames, 6);
        // The quit token was never read: end of lines closed the source first.
        assert_eq!(input.remaining_tokens(), 1);
    }

    #[test]
    fn text_entry_frame_shows_prompt() {
        let mut page = Page::new(1, "Main", WidgetRegistry::new(20, 5));
        page.add_label("Choose an option:", 1, 1).unwrap();
        page.add_button("Input", 2, 1, Action::TextEntry).unwrap();
        let mut s = ProgramSimulator::new(ProgramConfig::new(20, 5), vec![page]).unwrap();

        s.press_keys("s");
        let navigating = s.render().unwrap().to_plain_lines();
        assert_eq!(navigating[1], "|Choose an option: |");

        s.press_keys("e");
        assert_eq!(s.mode(), Mode::TextEntry { return_page: 1 });
        assert_eq!(s.dispatcher().prompt().map(|p| p.text.as_str()), Some("Input:"));
        let typing = s.render().unwrap().to_plain_lines();
        assert_eq!(typing[1], "|Input:            |");
        assert_eq!(typing[2], navigating[2]);

        s.send_line("done");
        assert_eq!(s.dispatcher().prompt(), None);
        assert_eq!(s.render().unwrap().to_plain_lines(), navigating);
    }

    #[test]
    fn cleared_prompt_leaves_frame_unchanged() {
        let mut page = Page::new(1, "Main", WidgetRegistry::new(12, 5));
        page.add_button("Input", 1, 2, Action::TextEntry).unwrap();
        page.clear_prompt();
        let mut s = ProgramSimulator::new(ProgramConfig::new(12, 5), vec![page]).unwrap();
        s.press_keys("d");
        let before = s.render().unwrap();
        s.press_keys("e");
        assert!(matches!(s.mode(), Mode::TextEntry { .. }));
        assert_eq!(s.render().unwrap(), before);
    }

    #[test]
    fn steps_are_recorded() {
        let mut s = sim();
        s.press_keys("z");
        assert!(matches!(s.steps(), [Step::Rejected(_)]));
        assert_eq!(s.logs(), vec!["Invalid input!"]);
    }
}
