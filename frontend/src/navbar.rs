use codecure_shared::model::{Id, User};
use dioxus::prelude::*;
use dioxus_router::{use_router, Link};

use crate::{api::ApiClient, pages::use_api};

/// Who is signed in, as far as this tab knows.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Account {
    pub id: Id,
    pub name: String,
}

impl From<&User> for Account {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
        }
    }
}

impl Account {
    /// Picks up the session a previous page load left in the token store.
    pub fn restore(api: &ApiClient) -> Option<Self> {
        api.session_user().as_ref().map(Self::from)
    }

    pub fn init(cx: &ScopeState, api: &ApiClient) {
        use_shared_state_provider(cx, || Self::restore(api));
    }

    pub fn use_state(cx: &ScopeState) -> &UseSharedState<Option<Account>> {
        use_shared_state::<Option<Account>>(cx).expect("account state is provided by App")
    }

    /// Ends the session on the backend and forgets it locally.
    pub async fn sign_out(api: ApiClient, state: UseSharedState<Option<Account>>) {
        if let Err(e) = api.logout().await {
            log::warn!("logout failed, token dropped anyway: {}", e);
        }
        *state.write() = None;
    }
}

pub fn Navbar(cx: Scope) -> Element {
    let account = Account::use_state(cx);
    let api = use_api(cx);
    let router = use_router(cx);

    let signed_in = account.read().is_some();
    let status = match account.read().as_ref() {
        Some(account) => format!("Signed in as {}", account.name),
        None => "Not signed in".to_string(),
    };

    cx.render(rsx! {
        header {
            class: "brand",
            span { class: "brand-gpt", "GPT" }
            span { class: "brand-name", "CodeCure" }
        }
        nav {
            class: "tabs",
            Link { to: "/", "Home" }
            Link { to: "/gpt", "Gpt" }
            Link { to: "/new/post", "New" }
            Link { to: "/user", "Profile" }
        }
        div {
            class: "account",
            span { "{status}" }
            span {
                hidden: signed_in,
                Link { to: "/signin", "Sign in" }
                Link { to: "/signup", "Sign up" }
            }
            button {
                hidden: !signed_in,
                onclick: move |_| {
                    let api = api.clone();
                    let account = account.clone();
                    let router = router.clone();
                    async move {
                        Account::sign_out(api, account).await;
                        router.push_route("/signin", None, None);
                    }
                },
                "Log out"
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::session::{MemoryStore, TokenStore};

    fn client(tokens: MemoryStore) -> ApiClient {
        ApiClient::new("http://localhost:3000", Arc::new(tokens))
    }

    fn hanako() -> User {
        User {
            id: 12,
            name: "hanako".into(),
            email: "hanako@example.com".into(),
        }
    }

    #[test]
    fn test_restore() {
        let tokens = MemoryStore::with_token("jwt-token");
        tokens.store_user(&hanako());
        assert_eq!(
            Account::restore(&client(tokens)),
            Some(Account {
                id: 12,
                name: "hanako".into(),
            })
        );
    }

    #[test]
    fn test_restore_without_session() {
        assert_eq!(Account::restore(&client(MemoryStore::default())), None);

        // a token from before users were stored is not enough to know who is signed in
        assert_eq!(Account::restore(&client(MemoryStore::with_token("t"))), None);

        let stale = MemoryStore::default();
        stale.store_user(&hanako());
        assert_eq!(Account::restore(&client(stale)), None);
    }
}
