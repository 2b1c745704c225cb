mod app;
mod assistant;
mod config;
mod content;
mod event;
mod nav;
mod ui;

use std::io;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use app::App;
use event::{AppEvent, EventPump};
use nav::RegionId;
use nav::router::{self, InputOwner};
use ui::components::app_grid::AppGrid;
use ui::components::assistant_panel::AssistantPanel;
use ui::components::content_row::ContentRow;
use ui::components::hero::Hero;
use ui::components::nav_bar::NavBar;
use ui::layout::HomeLayout;

#[derive(Parser)]
#[command(
    name = "lounge",
    version,
    about = "TV-style media launcher for the terminal"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Seconds between carousel slides")]
    autoplay_secs: Option<u64>,

    #[arg(long, help = "Disable carousel autoplay")]
    no_autoplay: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app = App::new();

    if let Some(secs) = cli.autoplay_secs {
        app.config.autoplay_secs = secs;
        app.autoplay = nav::autoplay::AutoplayTimer::new(app.config.autoplay_interval());
    }
    if cli.no_autoplay {
        app.config.autoplay_enabled = false;
        app.autoplay.cancel();
    }
    if let Some(theme_name) = cli.theme {
        if let Some(theme) = ui::theme::Theme::load(&theme_name) {
            let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));
            app.theme = theme;
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventPump::new(app.config.tick_rate());

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventPump,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => app.on_tick(Instant::now()),
            AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if let Some(event) = router::map_key(&key) {
        app.handle_nav(event);
        return;
    }

    // Unmapped keys: overlay gets its reset binding, the home screen its
    // quit key.
    match app.router.owner() {
        InputOwner::Overlay => {
            if key.code == KeyCode::Char('r') {
                app.overlay.reset();
            }
        }
        InputOwner::Sections => {
            if key.code == KeyCode::Char('q') {
                app.should_quit = true;
            }
        }
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = HomeLayout::new(area);

    frame.render_widget(
        NavBar {
            tabs: &app.catalog.nav_tabs,
            active_tab: app.active_tab,
            cursor: app.regions.get(RegionId::NavBar).cursor(),
            focused: app.regions.get(RegionId::NavBar).is_focused(),
            theme: app.theme,
        },
        layout.nav_bar,
    );

    frame.render_widget(
        Hero {
            slides: &app.catalog.hero_slides,
            cursor: app.regions.get(RegionId::Hero).cursor(),
            focused: app.regions.get(RegionId::Hero).is_focused(),
            theme: app.theme,
        },
        layout.hero,
    );

    frame.render_widget(
        AppGrid {
            apps: &app.catalog.apps,
            cursor: app.regions.get(RegionId::AppGrid).cursor(),
            focused: app.regions.get(RegionId::AppGrid).is_focused(),
            theme: app.theme,
        },
        layout.app_grid,
    );

    frame.render_widget(
        ContentRow {
            title: &app.catalog.recommended_title,
            items: &app.catalog.recommended,
            cursor: app.regions.get(RegionId::ContentRow).cursor(),
            focused: app.regions.get(RegionId::ContentRow).is_focused(),
            theme: app.theme,
        },
        layout.content_row,
    );

    let footer_text = match &app.footer_notice {
        Some(notice) => format!(" {notice}"),
        None => " [\u{2191}\u{2193}] Sections  [\u{2190}\u{2192}] Browse  [Enter] Select  [q] Quit".to_string(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            footer_text,
            Style::default().fg(colors.text_dim()),
        ))),
        layout.footer,
    );

    if app.overlay.is_open() {
        frame.render_widget(
            AssistantPanel {
                overlay: &app.overlay,
                theme: app.theme,
            },
            area,
        );
    }
}
