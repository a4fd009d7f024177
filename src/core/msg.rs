use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod detail;
pub mod system;

use catalog::CatalogMsg;
use detail::DetailMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    System(SystemMsg),
    Catalog(CatalogMsg),
    Detail(DetailMsg),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_ne!(
            Msg::Detail(DetailMsg::Close),
            Msg::Detail(DetailMsg::ScrollUp)
        );
    }

    #[test]
    fn test_msg_serialization() -> Result<(), serde_json::Error> {
        let msg = Msg::Catalog(CatalogMsg::ClickPreview(3));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
