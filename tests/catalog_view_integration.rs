use std::sync::Arc;

use color_eyre::eyre::Result;
use pretty_assertions::assert_eq;
use rstest::rstest;

use podcatalog::core::controller::CatalogController;
use podcatalog::domain::catalog::{Catalog, Podcast};
use podcatalog::domain::view::{compute_view, GenreFilter, SortOrder};
use podcatalog::infrastructure::catalog_source::embedded_catalog;
use podcatalog::presentation::components::preview::PreviewAttribute;

fn ids(view: &[&Podcast]) -> Vec<String> {
    view.iter().map(|p| p.id.clone()).collect()
}

fn is_subsequence(view: &[&Podcast], podcasts: &[Podcast]) -> bool {
    let mut remaining = podcasts.iter();
    view.iter()
        .all(|wanted| remaining.any(|p| p.id == wanted.id))
}

#[test]
fn test_most_recent_order_of_builtin_catalog() -> Result<()> {
    let catalog = embedded_catalog()?;

    let view = compute_view(catalog.podcasts(), &GenreFilter::All, SortOrder::MostRecent);

    assert_eq!(
        ids(&view),
        vec![
            "5675", "10716", "9916", "5629", "9177", "8514", "6465", "5278", "10539", "8860",
            "6756", "7230"
        ]
    );
    Ok(())
}

#[rstest]
#[case(SortOrder::MostRecent)]
#[case(SortOrder::Oldest)]
#[case(SortOrder::Unsorted)]
fn test_every_view_is_sorted_subsequence(#[case] order: SortOrder) -> Result<()> {
    let catalog = embedded_catalog()?;
    let filters = std::iter::once(GenreFilter::All)
        .chain(catalog.genres().iter().map(|g| GenreFilter::Genre(g.id)));

    for filter in filters {
        let view = compute_view(catalog.podcasts(), &filter, order);

        assert!(view.iter().all(|p| filter.matches(p)));
        match order {
            SortOrder::MostRecent => {
                assert!(view.windows(2).all(|w| w[0].updated >= w[1].updated));
            }
            SortOrder::Oldest => {
                assert!(view.windows(2).all(|w| w[0].updated <= w[1].updated));
            }
            SortOrder::Unsorted => assert!(is_subsequence(&view, catalog.podcasts())),
        }

        // idempotent
        assert_eq!(ids(&view), ids(&compute_view(catalog.podcasts(), &filter, order)));
    }
    Ok(())
}

#[test]
fn test_all_filter_preserves_every_podcast() -> Result<()> {
    let catalog = embedded_catalog()?;

    let mut view = ids(&compute_view(
        catalog.podcasts(),
        &GenreFilter::All,
        SortOrder::Oldest,
    ));
    let mut all: Vec<String> = catalog.podcasts().iter().map(|p| p.id.clone()).collect();
    view.sort();
    all.sort();

    assert_eq!(view, all);
    Ok(())
}

#[test]
fn test_genre_names_follow_podcast_order() -> Result<()> {
    let catalog = embedded_catalog()?;

    // "Bedtime Stories for Curious Kids" lists Kids and Family before Fiction
    let podcast = catalog
        .podcast("9177")
        .ok_or_else(|| color_eyre::eyre::eyre!("missing podcast"))?;

    assert_eq!(catalog.genre_text(&podcast.genres)?, "Kids and Family, Fiction");
    Ok(())
}

#[test]
fn test_controller_renders_previews_for_the_view() -> Result<()> {
    let catalog = Arc::new(embedded_catalog()?);
    let mut controller =
        CatalogController::new(Arc::clone(&catalog), GenreFilter::All, SortOrder::MostRecent)?;
    assert_eq!(controller.previews().len(), 12);

    controller.set_genre_filter(GenreFilter::Genre(3))?;
    let rendered: Vec<&str> = controller
        .previews()
        .iter()
        .filter_map(|p| p.attribute(PreviewAttribute::Id))
        .collect();
    assert_eq!(rendered, vec!["10716", "10539"]);

    let first = &controller.previews()[0];
    assert_eq!(first.fields().title, "Something True");
    assert_eq!(first.fields().genres, "History, Investigative Journalism");
    assert_eq!(first.fields().seasons, "3");
    assert_eq!(first.fields().updated, "November 3, 2022");
    Ok(())
}

#[test]
fn test_rejects_fixture_with_unknown_genre() {
    let result = Catalog::from_json(
        r#"{
            "podcasts": [{ "id": "x", "title": "X", "description": "", "image": "",
                           "genres": [42], "seasons": 0, "updated": "2022-01-01T00:00:00Z" }],
            "genres": []
        }"#,
    );

    assert!(result.is_err());
}
