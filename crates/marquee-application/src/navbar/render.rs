use marquee_core::account::Account;
use marquee_core::navbar::NavbarState;
use marquee_core::navigation::{MenuItem, menu_items};
use serde::Serialize;

use crate::store::StoreSnapshot;

/// What the navbar shows right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum NavbarRender {
    /// Full-page loader; nothing else is drawn.
    Loader,
    Header(HeaderModel),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderModel {
    pub menu: Vec<MenuItem>,
    /// Name of the active account, shown next to the avatar.
    pub profile_name: Option<String>,
    pub profile_avatar_url: Option<String>,
    /// Solid background once the page is scrolled.
    pub opaque_background: bool,
    pub search_visible: bool,
    pub search_query: String,
    pub details_popup_visible: bool,
    pub account_popup: Option<AccountPopupModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPopupModel {
    pub accounts: Vec<Account>,
    pub active_account_id: Option<String>,
}

impl NavbarRender {
    pub(crate) fn build(state: &NavbarState, store: &StoreSnapshot) -> Self {
        if state.is_loading() {
            return Self::Loader;
        }

        let active = store.active_account.as_ref();
        let account_popup = state.account_popup_visible.then(|| AccountPopupModel {
            accounts: store.accounts.clone(),
            active_account_id: active.map(|a| a.id.clone()),
        });

        Self::Header(HeaderModel {
            menu: menu_items(store.session.as_ref(), active),
            profile_name: active.map(|a| a.name.clone()),
            profile_avatar_url: active.and_then(|a| a.avatar_url.clone()),
            opaque_background: state.scrolled,
            search_visible: state.search_visible,
            search_query: state.search_query.clone(),
            details_popup_visible: store.details_popup_visible,
            account_popup,
        })
    }

    pub fn header(&self) -> Option<&HeaderModel> {
        match self {
            Self::Loader => None,
            Self::Header(header) => Some(header),
        }
    }
}
