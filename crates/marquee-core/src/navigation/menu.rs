use serde::{Deserialize, Serialize};

use super::route::{NavigationError, Route};
use crate::account::Account;
use crate::session::Session;

/// Identifier of a navbar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuItemId {
    Home,
    Tv,
    Movies,
    MyList,
}

impl MenuItemId {
    pub const ALL: [MenuItemId; 4] = [Self::Home, Self::Tv, Self::Movies, Self::MyList];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Tv => "tv",
            Self::Movies => "movies",
            Self::MyList => "my-list",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Tv => "TV",
            Self::Movies => "Movies",
            Self::MyList => "My List",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.as_str() == id)
    }

    /// Resolves this entry's destination for the given identity.
    pub fn route(
        &self,
        session: Option<&Session>,
        active_account: Option<&Account>,
    ) -> Result<Route, NavigationError> {
        match self {
            Self::Home => Ok(Route::Browse),
            Self::Tv => Ok(Route::Tv),
            Self::Movies => Ok(Route::Movies),
            Self::MyList => Route::my_list(session, active_account),
        }
    }
}

/// One rendered navbar entry.
///
/// `target` carries the build error for entries that cannot be followed
/// yet, so a front end can show them disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub title: String,
    pub target: Result<Route, NavigationError>,
}

impl MenuItem {
    pub fn is_enabled(&self) -> bool {
        self.target.is_ok()
    }

    pub fn path(&self) -> Option<String> {
        self.target.as_ref().ok().map(Route::path)
    }
}

/// Builds the navbar entries in display order.
pub fn menu_items(session: Option<&Session>, active_account: Option<&Account>) -> Vec<MenuItem> {
    MenuItemId::ALL
        .into_iter()
        .map(|id| MenuItem {
            id,
            title: id.title().to_string(),
            target: id.route(session, active_account),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order_and_titles() {
        let items = menu_items(None, None);
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Home", "TV", "Movies", "My List"]);
    }

    #[test]
    fn test_menu_with_active_account() {
        let session = Session::new("u1");
        let account = Account::new("a1", "Kids");
        let items = menu_items(Some(&session), Some(&account));

        let paths: Vec<_> = items.iter().filter_map(MenuItem::path).collect();
        assert_eq!(paths, vec!["/browse", "/tv", "/movies", "/my-list/u1/a1"]);
    }

    #[test]
    fn test_my_list_disabled_without_active_account() {
        let session = Session::new("u1");
        let items = menu_items(Some(&session), None);

        let my_list = items.iter().find(|i| i.id == MenuItemId::MyList).unwrap();
        assert!(!my_list.is_enabled());
        assert_eq!(my_list.target, Err(NavigationError::MissingActiveAccount));

        // Nothing rendered may carry a placeholder segment
        assert!(items
            .iter()
            .filter_map(MenuItem::path)
            .all(|p| !p.contains("undefined")));
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!(MenuItemId::parse("my-list"), Some(MenuItemId::MyList));
        assert_eq!(MenuItemId::parse("tv"), Some(MenuItemId::Tv));
        assert_eq!(MenuItemId::parse("kids"), None);
    }
}
