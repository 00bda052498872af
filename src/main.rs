//! Dashgrid - A terminal dashboard with hierarchically generated controls.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dashgrid::app::App;
use dashgrid::config::{DashConfig, GridConfig};
use dashgrid::export::format_forest;
use dashgrid::pages::hierarchy::{self, DISPLAY_AREA};
use dashgrid::pages::raster::RasterSource;
use dashgrid::pages::Page;
use dashgrid::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "dashgrid")]
#[command(about = "A terminal dashboard with hierarchically generated controls", long_about = None)]
struct Args {
    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Page shown at startup
    #[arg(long, value_enum, default_value_t = Page::Plots)]
    page: Page,

    /// Grid units spanned by the first row
    #[arg(long, default_value_t = 12)]
    total_width: u16,

    /// Width of every button below the first row
    #[arg(long, default_value_t = 2)]
    deep_width: u16,

    /// NetCDF file shown on the raster page
    #[arg(long, requires = "variable")]
    raster: Option<PathBuf>,

    /// Variable to read from the raster file
    #[arg(long, requires = "raster")]
    variable: Option<String>,

    /// Click these comma-separated ids on the hierarchy page and print the outline
    #[arg(long, value_delimiter = ',')]
    replay: Option<Vec<String>>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Dashgrid");
    }

    let config = DashConfig {
        grid: GridConfig {
            total_width: args.total_width,
            deep_width: args.deep_width,
        },
        ..DashConfig::default()
    };

    if let Some(ids) = &args.replay {
        let ids: Vec<&str> = ids.iter().map(|s| s.trim()).filter(|s| !s.is_empty()).collect();
        match hierarchy::replay(&ids, config.grid) {
            Ok(forest) => {
                print!("{}", format_forest(&forest, Some(DISPLAY_AREA)));
                return Ok(());
            },
            Err(e) => {
                tracing::error!("replay failed: {}", e);
                eprintln!("Error: {}", e);
                std::process::exit(1);
            },
        }
    }

    // Validate path if provided
    if let Some(ref path) = args.raster {
        if !path.exists() {
            eprintln!("Error: Path not found: {}", path.display());
            std::process::exit(1);
        }
    }

    let raster = args
        .raster
        .clone()
        .zip(args.variable.clone())
        .map(|(path, variable)| RasterSource { path, variable });
    let app = App::new(config, args.page, raster)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("Dashgrid exited");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Keys shared by every page
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Esc) => return Ok(()),
            (_, KeyCode::Tab) => {
                app.next_page();
                continue;
            },
            (_, KeyCode::BackTab) => {
                app.prev_page();
                continue;
            },
            _ => {},
        }

        // Text entry takes every other key on the callbacks page
        if app.page == Page::Callbacks {
            match key.code {
                KeyCode::Up | KeyCode::Down => app.toggle_focus(),
                KeyCode::Backspace => app.backspace(),
                KeyCode::Char(c) => app.type_char(c),
                _ => {},
            }
            continue;
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
            _ => handle_page_key(&mut app, key.code),
        }
    }
}

fn handle_page_key(app: &mut App, code: KeyCode) {
    match (app.page, code) {
        (Page::Plots, KeyCode::Up | KeyCode::Char('k')) => app.dropdown_step(-1),
        (Page::Plots, KeyCode::Down | KeyCode::Char('j')) => app.dropdown_step(1),
        (Page::Plots | Page::Raster, KeyCode::Char('c')) => app.cycle_palette(),

        (Page::Interactive, KeyCode::Left | KeyCode::Char('h')) => app.hover_move(-1),
        (Page::Interactive, KeyCode::Right | KeyCode::Char('l')) => app.hover_move(1),
        (Page::Interactive, KeyCode::Char('t')) => app.hover_switch_trace(),
        (Page::Interactive, KeyCode::Enter) => app.click_point(),
        (Page::Interactive, KeyCode::Char('s')) => app.select_visible(),
        (Page::Interactive, KeyCode::Char('+') | KeyCode::Char('=')) => app.zoom_in(),
        (Page::Interactive, KeyCode::Char('-')) => app.zoom_out(),
        (Page::Interactive, KeyCode::Char('[')) => app.pan(-1.0),
        (Page::Interactive, KeyCode::Char(']')) => app.pan(1.0),
        (Page::Interactive, KeyCode::Char('0')) => app.reset_zoom(),

        (Page::Dynamic, KeyCode::Char('a') | KeyCode::Enter) => app.add_column(),

        (Page::Hierarchy, KeyCode::Char('a')) => app.add_level(),
        (Page::Hierarchy, KeyCode::Enter) => app.click_selected(),
        (Page::Hierarchy, KeyCode::Up | KeyCode::Char('k')) => app.cursor_row(-1),
        (Page::Hierarchy, KeyCode::Down | KeyCode::Char('j')) => app.cursor_row(1),
        (Page::Hierarchy, KeyCode::Left | KeyCode::Char('h')) => app.cursor_col(-1),
        (Page::Hierarchy, KeyCode::Right | KeyCode::Char('l')) => app.cursor_col(1),
        (Page::Hierarchy, KeyCode::Char('y')) => app.copy_outline(),

        _ => {},
    }
}
