#![forbid(unsafe_code)]

//! The demo's pages.
//!
//! Page 1 is a main menu; page 2 holds the options screen with a one-shot
//! button and a toggled hint. Both pages get the echo log panel from the
//! program configuration. Text entry started from the main menu shows its
//! prompt over the "Choose an option:" line.

use tgrid_runtime::{Action, Page};
use tgrid_widgets::{PlacementError, WidgetRegistry};

pub const MAIN_PAGE: u8 = 1;
pub const OPTIONS_PAGE: u8 = 2;

/// Key reminder along the bottom of the main menu.
pub const KEY_HINT: &str = "WASD move, E press, Q quit";

/// Log contents before the first frame.
pub const STARTUP_LOG: [&str; 3] = ["Welcome to the UI!", "Initializing...", "Ready."];

/// Build the main menu for a `width` x `height` grid.
pub fn main_page(width: u16, height: u16) -> Result<Page, PlacementError> {
    let mut page = Page::new(MAIN_PAGE, "Main menu", WidgetRegistry::new(width, height));
    page.add_label("Welcome!", 1, 2)?;
    page.add_label("Choose an option:", 2, 2)?;
    page.add_button("Start", 4, 2, Action::log("Starting game..."))?;
    page.add_button("Options", 5, 2, Action::SwitchPage(OPTIONS_PAGE))?;
    page.add_button("Input", 6, 2, Action::TextEntry)?;
    page.add_button("Exit", 7, 2, Action::Quit)?;
    page.add_label(KEY_HINT, 8, 2)?;
    page.set_prompt("Input:", 2, 2)?;
    Ok(page)
}

/// Build the options page for a `width` x `height` grid.
pub fn options_page(width: u16, height: u16) -> Result<Page, PlacementError> {
    let mut page = Page::new(OPTIONS_PAGE, "Options", WidgetRegistry::new(width, height));
    page.add_label("Options", 1, 2)?;
    page.add_button("Back", 3, 2, Action::SwitchPage(MAIN_PAGE))?;
    page.add_button("Ping", 4, 2, Action::log("Pong!").once())?;
    let hint = page.add_button("Tip: e on Back", 7, 2, Action::log("Go back first."))?;
    page.registry_mut().hide(hint);
    page.add_button("Hint", 5, 2, Action::Toggle(hint))?;
    Ok(page)
}

/// Every demo page for a `width` x `height` grid.
pub fn build_pages(width: u16, height: u16) -> Result<Vec<Page>, PlacementError> {
    Ok(vec![main_page(width, height)?, options_page(width, height)?])
}
