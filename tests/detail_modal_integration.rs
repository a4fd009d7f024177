use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

use podcatalog::core::raw_msg::RawMsg;
use podcatalog::core::state::AppState;
use podcatalog::infrastructure::catalog_source::embedded_catalog;
use podcatalog::infrastructure::config::Config;
use podcatalog::presentation::components::preview::{PodcastPreview, PreviewAttribute};
use podcatalog::presentation::components::{Components, DetailModalComponent};
use podcatalog::{translate_raw_to_domain, update};

fn create_state() -> Result<AppState> {
    let mut state = AppState::new(Arc::new(embedded_catalog()?), Config::embedded()?)?;
    state.system.viewport = Rect::new(0, 0, 100, 40);
    Ok(state)
}

fn send(state: &mut AppState, raw: RawMsg) {
    for msg in translate_raw_to_domain(raw, state) {
        update(msg, state);
    }
}

fn render(state: &AppState, width: u16, height: u16) -> Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    let mut components = Components::new();
    terminal.draw(|frame| components.render(frame, state))?;
    let buffer = terminal.backend().buffer();
    Ok(buffer
        .content()
        .chunks(usize::from(buffer.area.width))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n"))
}

fn key(code: KeyCode) -> RawMsg {
    RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click(column: u16, row: u16) -> RawMsg {
    RawMsg::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_enter_opens_detail_of_selected_preview() -> Result<()> {
    let mut state = create_state()?;

    send(&mut state, key(KeyCode::Char('j')));
    send(&mut state, key(KeyCode::Enter));

    let detail = state
        .controller
        .modal()
        .detail()
        .ok_or_else(|| color_eyre::eyre::eyre!("modal should be visible"))?;
    assert_eq!(detail.id, "10716");
    assert_eq!(detail.title, "Something True");
    assert_eq!(detail.image_alt, "Something True");
    assert_eq!(
        detail.genre_tags,
        vec!["History".to_string(), "Investigative Journalism".to_string()]
    );
    assert_eq!(detail.updated, "November 3, 2022");
    let seasons: Vec<(&str, &str)> = detail
        .seasons
        .iter()
        .map(|s| (s.title.as_str(), s.episodes.as_str()))
        .collect();
    assert_eq!(
        seasons,
        vec![
            ("Season 1: The Great Stink", "9 episodes"),
            ("Season 2: Frozen Ambitions", "8 episodes"),
            ("Season 3: Fever Dreams", "10 episodes"),
        ]
    );
    Ok(())
}

#[test]
fn test_every_close_trigger_hides_the_modal() -> Result<()> {
    let mut state = create_state()?;
    let triggers = [
        key(KeyCode::Esc),
        key(KeyCode::Char('x')),
        key(KeyCode::Backspace),
        // backdrop
        click(2, 2),
        // "[x] close" on the modal's top border
        click(80, 4),
    ];

    for trigger in triggers {
        send(&mut state, key(KeyCode::Enter));
        assert!(state.controller.modal().is_visible());

        send(&mut state, trigger.clone());
        assert!(
            !state.controller.modal().is_visible(),
            "{trigger:?} should close the modal"
        );
    }
    Ok(())
}

#[test]
fn test_click_inside_modal_keeps_it_open() -> Result<()> {
    let mut state = create_state()?;
    send(&mut state, key(KeyCode::Enter));

    send(&mut state, click(50, 20));

    assert!(state.controller.modal().is_visible());
    Ok(())
}

#[test]
fn test_mouse_click_on_card_opens_detail() -> Result<()> {
    let mut state = create_state()?;

    // second card: rows 9..15 below the 3-row header
    send(&mut state, click(20, 11));

    assert_eq!(state.controller.selected(), Some(1));
    assert_eq!(
        state.controller.modal().detail().map(|d| d.id.as_str()),
        Some("10716")
    );
    Ok(())
}

#[test]
fn test_modal_swallows_list_keys() -> Result<()> {
    let mut state = create_state()?;
    send(&mut state, key(KeyCode::Enter));

    send(&mut state, key(KeyCode::Char('f')));
    send(&mut state, key(KeyCode::Char('s')));

    assert_eq!(state.controller.previews().len(), 12);
    assert!(state.controller.modal().is_visible());
    Ok(())
}

#[test]
fn test_click_sends_exactly_one_notification() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut preview = PodcastPreview::new().with_attribute(PreviewAttribute::Id, "abc123");
    preview.register_select_handler(tx);

    assert!(preview.click());

    let received = rx.try_recv().map(|selected| selected.id).ok();
    assert_eq!(received, Some("abc123".to_string()));
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_unknown_id_leaves_modal_hidden() -> Result<()> {
    let mut state = create_state()?;

    state.controller.open_detail("abc123")?;

    assert!(!state.controller.modal().is_visible());
    Ok(())
}

#[test]
fn test_scrolling_stops_at_the_last_season() -> Result<()> {
    let mut state = create_state()?;
    state.system.viewport = Rect::new(0, 0, 60, 14);
    send(&mut state, key(KeyCode::Enter));

    for _ in 0..200 {
        send(&mut state, key(KeyCode::Char('j')));
    }

    let max = state
        .controller
        .modal()
        .detail()
        .map(|detail| DetailModalComponent::max_scroll(detail, state.system.viewport))
        .ok_or_else(|| color_eyre::eyre::eyre!("modal should be visible"))?;
    assert_eq!(state.controller.modal().scroll(), max);
    assert!(render(&state, 60, 14)?.contains("44 episodes"));

    for _ in 0..max {
        send(&mut state, key(KeyCode::Char('k')));
    }
    assert_eq!(state.controller.modal().scroll(), 0);
    Ok(())
}

#[test]
fn test_short_terminal_still_shows_the_selected_card() -> Result<()> {
    let mut state = create_state()?;
    state.system.viewport = Rect::new(0, 0, 80, 9);
    send(&mut state, key(KeyCode::Char('j')));

    let screen = render(&state, 80, 9)?;

    assert_eq!(state.controller.selected(), Some(1));
    assert!(screen.contains("Something True"));
    assert!(screen.contains("Seasons:"));
    assert!(!screen.contains("No podcasts match"));

    // the clipped card takes clicks like a whole one
    send(&mut state, click(20, 4));
    assert_eq!(
        state.controller.modal().detail().map(|d| d.id.as_str()),
        Some("10716")
    );
    Ok(())
}
