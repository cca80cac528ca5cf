// ABOUTME: Clock application for MobileOS.
// ABOUTME: Shows the time as a digital readout, an analog face, and the date.

mod logging;
mod ticker;
mod view;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use mos_clockface::{config, ClockFrame, ClockState, FaceLayout, LocalClock};
use tracing::info;
use tracing::level_filters::LevelFilter;

use crate::ticker::Ticker;

slint::include_modules!();

fn main() -> anyhow::Result<()> {
    logging::init(LevelFilter::INFO);

    info!("starting clock");

    let config = config::load_or_default(&config::config_path())?;
    let formatter = config.formatter()?;
    let layout = FaceLayout::square(config.face_size);

    let window = ClockWindow::new().context("failed to create clock window")?;
    window.set_design_size(config.face_size);

    let state = Rc::new(RefCell::new(ClockState::new(LocalClock)));
    let now = state.borrow().current();
    view::apply(&window, &ClockFrame::render(&now, &layout, &formatter));

    let weak = window.as_weak();
    state.borrow_mut().subscribe(move |time| {
        if let Some(w) = weak.upgrade() {
            view::apply(&w, &ClockFrame::render(time, &layout, &formatter));
        }
    });

    window.show().context("failed to show clock window")?;

    let tick_state = Rc::clone(&state);
    let ticker = Rc::new(Ticker::start(config.tick_interval(), move || {
        tick_state.borrow_mut().refresh();
    }));

    let closing = Rc::clone(&ticker);
    window.window().on_close_requested(move || {
        info!("clock window closing");
        closing.stop();
        slint::CloseRequestResponse::HideWindow
    });

    info!(interval_ms = ticker.interval().as_millis() as u64, "clock running");
    slint::run_event_loop().context("event loop failed")?;

    ticker.stop();
    window.hide().context("failed to hide clock window")?;
    info!(ticking = ticker.is_running(), "clock stopped");

    Ok(())
}
