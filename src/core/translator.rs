use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use crate::{
    core::{
        msg::{catalog::CatalogMsg, detail::DetailMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    presentation::{
        components::{DetailModalComponent, PreviewListComponent, ScreenLayout},
        config::keybindings::Action,
    },
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::error("Terminal", error))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    if state.controller.modal().is_visible() {
        translate_modal_keys(key, state)
    } else {
        translate_list_keys(key, state)
    }
}

/// Key bindings while the detail modal is shown
fn translate_modal_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.code == KeyCode::Esc {
        return vec![Msg::Detail(DetailMsg::Close)];
    }

    match state.keybindings().action_for(&key) {
        Some(Action::CloseDetail) => vec![Msg::Detail(DetailMsg::Close)],
        Some(Action::ScrollUp) => vec![Msg::Detail(DetailMsg::ScrollUp)],
        Some(Action::ScrollDown) => vec![Msg::Detail(DetailMsg::ScrollDown)],
        Some(Action::Quit) => vec![Msg::System(SystemMsg::Quit)],
        Some(Action::Suspend) => vec![Msg::System(SystemMsg::Suspend)],
        // The list underneath is inert while the modal is open
        Some(_) | None => vec![],
    }
}

/// Key bindings for the preview list
fn translate_list_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let Some(action) = state.keybindings().action_for(&key) else {
        return vec![]; // No matching keybinding found
    };

    let msg = match action {
        Action::Quit => Msg::System(SystemMsg::Quit),
        Action::Suspend => Msg::System(SystemMsg::Suspend),
        Action::ScrollUp => Msg::Catalog(CatalogMsg::SelectPrevious),
        Action::ScrollDown => Msg::Catalog(CatalogMsg::SelectNext),
        Action::ScrollToTop => Msg::Catalog(CatalogMsg::SelectFirst),
        Action::ScrollToBottom => Msg::Catalog(CatalogMsg::SelectLast),
        Action::NextGenre => Msg::Catalog(CatalogMsg::NextGenre),
        Action::PreviousGenre => Msg::Catalog(CatalogMsg::PreviousGenre),
        Action::NextSortOrder => Msg::Catalog(CatalogMsg::NextSortOrder),
        Action::OpenDetail => Msg::Catalog(CatalogMsg::ActivateSelected),
        Action::CloseDetail => return vec![],
    };
    vec![msg]
}

fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    if state.controller.modal().is_visible() {
        translate_modal_mouse(mouse, state)
    } else {
        translate_list_mouse(mouse, state)
    }
}

fn translate_modal_mouse(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let position = Position::new(mouse.column, mouse.row);
            let content = DetailModalComponent::content_area(state.system.viewport);
            let close_button = DetailModalComponent::close_button_area(content);

            if close_button.contains(position) || !content.contains(position) {
                vec![Msg::Detail(DetailMsg::Close)]
            } else {
                vec![]
            }
        }
        MouseEventKind::ScrollUp => vec![Msg::Detail(DetailMsg::ScrollUp)],
        MouseEventKind::ScrollDown => vec![Msg::Detail(DetailMsg::ScrollDown)],
        _ => vec![],
    }
}

fn translate_list_mouse(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let layout = ScreenLayout::new(state.system.viewport);
            let controller = &state.controller;
            PreviewListComponent::hit_test(
                layout.list,
                controller.selected(),
                controller.previews().len(),
                mouse.column,
                mouse.row,
            )
            .map(|index| vec![Msg::Catalog(CatalogMsg::ClickPreview(index))])
            .unwrap_or_default()
        }
        MouseEventKind::ScrollUp => vec![Msg::Catalog(CatalogMsg::SelectPrevious)],
        MouseEventKind::ScrollDown => vec![Msg::Catalog(CatalogMsg::SelectNext)],
        _ => vec![],
    }
}
