use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};
use weather_dashboard_core::{Config, Session, SessionEvent, provider::provider_from_config};

use super::{EventHandler, TermEvent, Tui, ui};

pub struct App {
    session: Session,
    should_quit: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self { session, should_quit: false }
    }

    fn on_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('l') if ctrl => {
                self.session.locate();
            }
            KeyCode::F(2) => {
                self.session.locate();
            }
            KeyCode::Char('u') if ctrl => self.session.input_mut().clear(),
            KeyCode::Enter => {
                self.session.submit();
            }
            KeyCode::Backspace => self.session.input_mut().backspace(),
            KeyCode::Char(c) if !ctrl => self.session.input_mut().insert(c),
            _ => {}
        }
    }

    /// `None` means the terminal event stream has ended.
    fn on_terminal_event(&mut self, event: Option<TermEvent>) {
        match event {
            Some(TermEvent::Key(key)) => self.on_key(key),
            Some(TermEvent::Resize) => {}
            None => {
                warn!("terminal input closed, leaving dashboard");
                self.should_quit = true;
            }
        }
    }
}

pub async fn run(config: &Config) -> Result<()> {
    let provider = provider_from_config(config)?;
    let geolocator = config.geolocator()?;
    let (session, session_events) = Session::new(provider, geolocator, config.default_query()?);
    let mut app = App::new(session);

    super::install_panic_hook();
    let mut terminal = super::init()?;
    let mut events = EventHandler::new();

    info!("dashboard started");
    app.session.start();

    let result = event_loop(&mut terminal, &mut app, &mut events, session_events).await;
    super::restore()?;
    result
}

async fn event_loop(
    terminal: &mut Tui,
    app: &mut App,
    events: &mut EventHandler,
    mut session_events: UnboundedReceiver<SessionEvent>,
) -> Result<()> {
    loop {
        let view = app.session.view();
        terminal.draw(|frame| ui::draw(frame, &view))?;

        tokio::select! {
            event = events.next() => app.on_terminal_event(event),
            Some(event) = session_events.recv() => app.session.handle(event),
        }

        if app.should_quit {
            break;
        }
    }

    info!("dashboard closed");
    Ok(())
}
