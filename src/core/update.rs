use crate::{
    core::{
        cmd::Cmd,
        controller::CatalogController,
        msg::{catalog::CatalogMsg, detail::DetailMsg, system::SystemMsg, Msg},
        state::AppState,
    },
    domain::catalog::CatalogError,
    presentation::components::DetailModalComponent,
};

/// Elm-like update function
/// Applies `msg` to `state` and returns the commands it produced
pub fn update(msg: Msg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => state.system.update(system_msg),

        Msg::Catalog(catalog_msg) => {
            let result = update_catalog(catalog_msg, &mut state.controller);
            report(state, "Catalog", result)
        }

        Msg::Detail(detail_msg) => {
            update_detail(detail_msg, state);
            vec![]
        }
    }
}

/// Apply a catalog message; returns an optional status line `(label, message)`.
fn update_catalog(
    msg: CatalogMsg,
    controller: &mut CatalogController,
) -> Result<Option<(&'static str, String)>, CatalogError> {
    match msg {
        CatalogMsg::NextGenre => {
            controller.cycle_genre_filter(true)?;
            Ok(Some(filter_status(controller)))
        }
        CatalogMsg::PreviousGenre => {
            controller.cycle_genre_filter(false)?;
            Ok(Some(filter_status(controller)))
        }
        CatalogMsg::NextSortOrder => {
            controller.cycle_sort_order()?;
            Ok(Some(sort_status(controller)))
        }

        CatalogMsg::SelectNext => {
            controller.select_next();
            Ok(None)
        }
        CatalogMsg::SelectPrevious => {
            controller.select_previous();
            Ok(None)
        }
        CatalogMsg::SelectFirst => {
            controller.select_first();
            Ok(None)
        }
        CatalogMsg::SelectLast => {
            controller.select_last();
            Ok(None)
        }

        CatalogMsg::ActivateSelected => {
            controller.activate_selected()?;
            Ok(None)
        }
        CatalogMsg::ClickPreview(index) => {
            controller.click_preview(index)?;
            Ok(None)
        }
    }
}

fn update_detail(msg: DetailMsg, state: &mut AppState) {
    let max_scroll = state
        .controller
        .modal()
        .detail()
        .map(|detail| DetailModalComponent::max_scroll(detail, state.system.viewport))
        .unwrap_or_default();
    let controller = &mut state.controller;
    match msg {
        DetailMsg::Close => controller.close_detail(),
        DetailMsg::ScrollUp => controller.scroll_detail(true, max_scroll),
        DetailMsg::ScrollDown => controller.scroll_detail(false, max_scroll),
    }
}

fn count_text(controller: &CatalogController) -> String {
    match controller.previews().len() {
        1 => "1 podcast".to_string(),
        n => format!("{n} podcasts"),
    }
}

fn filter_status(controller: &CatalogController) -> (&'static str, String) {
    (
        "Filter",
        format!(
            "{} ({})",
            controller.genre_filter_label(),
            count_text(controller)
        ),
    )
}

fn sort_status(controller: &CatalogController) -> (&'static str, String) {
    ("Sort", controller.sort_order().label().to_string())
}

fn report(
    state: &mut AppState,
    label: &str,
    result: Result<Option<(&'static str, String)>, CatalogError>,
) -> Vec<Cmd> {
    match result {
        Ok(Some((status_label, message))) => state
            .system
            .update(SystemMsg::status(status_label, message)),
        Ok(None) => vec![],
        Err(e) => state.system.update(SystemMsg::error(label, e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use color_eyre::eyre::Result;
    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;

    use super::*;
    use crate::{
        core::cmd::TuiCommand,
        domain::{
            catalog::{
                fixtures::{genres, podcast},
                Catalog, PodcastSeasons, Season,
            },
            view::{GenreFilter, SortOrder},
        },
        infrastructure::config::Config,
    };

    fn create_test_state() -> Result<AppState> {
        let catalog = Catalog::new(
            vec![
                podcast("a", &[1, 3], "2023-01-01"),
                podcast("b", &[3], "2024-01-01"),
                podcast("c", &[9], "2022-01-01"),
            ],
            genres(),
            vec![PodcastSeasons {
                id: "b".to_string(),
                season_details: (1..=30)
                    .map(|n| Season {
                        title: format!("Season {n}"),
                        episodes: n,
                    })
                    .collect(),
            }],
        )?;
        Ok(AppState::new(Arc::new(catalog), Config::embedded()?)?)
    }

    #[test]
    fn test_system_messages_are_delegated() -> Result<()> {
        let mut state = create_test_state()?;

        let cmds = update(Msg::System(SystemMsg::Suspend), &mut state);
        assert_eq!(cmds, vec![Cmd::Tui(TuiCommand::Suspend)]);

        update(Msg::System(SystemMsg::Quit), &mut state);
        assert!(state.system.should_quit);
        Ok(())
    }

    #[test]
    fn test_genre_filter_reports_count() -> Result<()> {
        let mut state = create_test_state()?;

        for _ in 0..3 {
            update(Msg::Catalog(CatalogMsg::NextGenre), &mut state);
        }

        assert_eq!(state.controller.genre_filter(), GenreFilter::Genre(3));
        assert_eq!(state.controller.previews().len(), 2);
        assert_eq!(
            state.system.status_text(),
            Some("[Filter] History (2 podcasts)")
        );
        Ok(())
    }

    #[test]
    fn test_next_genre_and_sort() -> Result<()> {
        let mut state = create_test_state()?;

        update(Msg::Catalog(CatalogMsg::NextGenre), &mut state);
        assert_eq!(
            state.system.status_text(),
            Some("[Filter] Personal Growth (1 podcast)")
        );

        update(Msg::Catalog(CatalogMsg::NextSortOrder), &mut state);
        assert_eq!(state.controller.sort_order(), SortOrder::Oldest);
        assert_eq!(state.system.status_text(), Some("[Sort] Oldest"));
        Ok(())
    }

    #[test]
    fn test_selection_messages() -> Result<()> {
        let mut state = create_test_state()?;

        update(Msg::Catalog(CatalogMsg::SelectLast), &mut state);
        assert_eq!(state.controller.selected(), Some(2));

        update(Msg::Catalog(CatalogMsg::SelectPrevious), &mut state);
        assert_eq!(state.controller.selected(), Some(1));
        Ok(())
    }

    #[test]
    fn test_open_scroll_and_close_detail() -> Result<()> {
        let mut state = create_test_state()?;
        state.system.viewport = Rect::new(0, 0, 100, 40);

        // most recent first: b is the first preview
        update(Msg::Catalog(CatalogMsg::ActivateSelected), &mut state);
        assert_eq!(
            state.controller.modal().detail().map(|d| d.seasons.len()),
            Some(30)
        );

        update(Msg::Detail(DetailMsg::ScrollDown), &mut state);
        update(Msg::Detail(DetailMsg::ScrollDown), &mut state);
        update(Msg::Detail(DetailMsg::ScrollUp), &mut state);
        assert_eq!(state.controller.modal().scroll(), 1);

        update(Msg::Detail(DetailMsg::Close), &mut state);
        assert!(!state.controller.modal().is_visible());
        Ok(())
    }

    #[test]
    fn test_scroll_down_stops_at_last_season() -> Result<()> {
        let mut state = create_test_state()?;
        state.system.viewport = Rect::new(0, 0, 100, 40);
        update(Msg::Catalog(CatalogMsg::ActivateSelected), &mut state);

        for _ in 0..200 {
            update(Msg::Detail(DetailMsg::ScrollDown), &mut state);
        }

        // 37 body rows in a 30-row modal body
        assert_eq!(state.controller.modal().scroll(), 7);

        update(Msg::Detail(DetailMsg::ScrollUp), &mut state);
        assert_eq!(state.controller.modal().scroll(), 6);
        Ok(())
    }

    #[test]
    fn test_scroll_without_viewport_stays_put() -> Result<()> {
        let mut state = create_test_state()?;
        update(Msg::Catalog(CatalogMsg::ActivateSelected), &mut state);

        update(Msg::Detail(DetailMsg::ScrollDown), &mut state);

        assert_eq!(state.controller.modal().scroll(), 0);
        Ok(())
    }

    #[test]
    fn test_previous_genre_wraps_to_last() -> Result<()> {
        let mut state = create_test_state()?;

        update(Msg::Catalog(CatalogMsg::PreviousGenre), &mut state);

        assert_eq!(state.controller.genre_filter(), GenreFilter::Genre(9));
        assert_eq!(
            state.system.status_text(),
            Some("[Filter] Kids and Family (1 podcast)")
        );
        Ok(())
    }

    #[test]
    fn test_click_outside_previews_is_silent() -> Result<()> {
        let mut state = create_test_state()?;

        let cmds = update(Msg::Catalog(CatalogMsg::ClickPreview(99)), &mut state);

        assert!(cmds.is_empty());
        assert!(!state.controller.modal().is_visible());
        assert_eq!(state.system.status, None);
        Ok(())
    }
}
