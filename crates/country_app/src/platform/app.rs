use crossterm::event::{self, Event};
use country_core::{update, AppState, Msg};
use lookup_logging::{lookup_debug, lookup_info};

use super::effects::EffectRunner;
use super::ui;
use super::ui::input::InputAction;

pub fn run_app(runner: &EffectRunner) -> anyhow::Result<()> {
    let (mut terminal, guard) = ui::terminal_guard::setup_terminal()?;
    let mut state = AppState::new();
    let mut view = state.view();
    let mut needs_draw = true;

    loop {
        if needs_draw {
            terminal.draw(|frame| ui::render::draw(frame, &view))?;
            needs_draw = false;
        }

        let mut inbox = Vec::new();
        if event::poll(ui::constants::TICK)? {
            let action = match event::read()? {
                Event::Key(key) => ui::input::handle_key(state.query(), key),
                Event::Paste(text) => ui::input::handle_paste(state.query(), &text),
                Event::Resize(..) => {
                    needs_draw = true;
                    InputAction::None
                }
                _ => InputAction::None,
            };
            match action {
                InputAction::Quit => break,
                InputAction::Search => inbox.push(Msg::SearchSubmitted),
                InputAction::Edit(text) => inbox.push(Msg::InputChanged(text)),
                InputAction::None => {}
            }
        }
        inbox.extend(runner.drain());
        inbox.push(Msg::Tick);

        for msg in inbox {
            lookup_debug!("dispatch {:?}", msg);
            let (next, effects) = update(state, msg);
            state = next;
            runner.enqueue(effects);
        }
        if state.consume_dirty() {
            view = state.view();
            needs_draw = true;
        }
    }

    drop(guard);
    lookup_info!("Exiting country_finder");
    Ok(())
}
