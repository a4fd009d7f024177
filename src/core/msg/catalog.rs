use serde::{Deserialize, Serialize};

/// Messages handled by the catalog controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogMsg {
    // Selection controls
    NextGenre,
    PreviousGenre,
    NextSortOrder,

    // List navigation
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,

    // Preview activation
    ActivateSelected,
    ClickPreview(usize),
}
