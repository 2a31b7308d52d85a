//! Terminal portfolio viewer (default binary).
//!
//! Mouse capture is enabled: drag with the left button to swipe, scroll to
//! move through long sections, click the arrow buttons to jump.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::{info, warn};

use tui_folio::app::{App, Effect};
use tui_folio::chat::{ChatRuntime, HttpChatClient};
use tui_folio::config::AppConfig;
use tui_folio::logging;
use tui_folio::term::{FrameBuffer, PortfolioContent, TerminalRenderer, Viewport};
use tui_folio::types::TICK_MS;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config.log)?;

    let content = match &config.content_path {
        Some(path) => PortfolioContent::load(path)?,
        None => PortfolioContent::default(),
    };
    let chat = config.chat.clone().and_then(|chat_config| {
        let started = HttpChatClient::new(chat_config)
            .and_then(|client| ChatRuntime::start(Arc::new(client)));
        match started {
            Ok(runtime) => Some(runtime),
            Err(e) => {
                warn!(error = %e, "chat unavailable");
                None
            }
        }
    });

    let mut term = TerminalRenderer::new();
    term.enter()?;
    info!("viewer started");

    let result = run(&mut term, &config, content, chat);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("viewer stopped");
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &AppConfig,
    content: PortfolioContent,
    mut chat: Option<ChatRuntime>,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut app = App::new(content, config.cell_metrics, Viewport::new(w, h))
        .with_chat_enabled(chat.is_some());
    let mut fb = FrameBuffer::new(w, h);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        app.render_into(&mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            let effect = match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse);
                    Effect::None
                }
                Event::Resize(w, h) => {
                    app.resize(w, h);
                    term.invalidate();
                    Effect::None
                }
                _ => Effect::None,
            };
            match effect {
                Effect::Quit => return Ok(()),
                Effect::SendChat(request) => {
                    if let Some(runtime) = &chat {
                        runtime.dispatch(request);
                    }
                }
                Effect::None => {}
            }
        }

        if let Some(runtime) = chat.as_mut() {
            while let Some(reply) = runtime.try_recv() {
                app.on_chat_reply(reply);
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick(TICK_MS);
        }
    }
}
