use dioxus::prelude::*;
use dioxus_router::{use_route, use_router};

use crate::{
    api::users::{GetUserError, Profile},
    navbar::Account,
};

pub struct SampleTile {
    pub title: &'static str,
    pub date: &'static str,
}

const fn tile(date: &'static str) -> SampleTile {
    SampleTile {
        title: "Title",
        date,
    }
}

/// Placeholder tiles until the profile lists the user's own posts.
pub const SAMPLE_TILES: [SampleTile; 8] = [
    tile("Updated today"),
    tile("Updated yesterday"),
    tile("Updated 2 days ago"),
    tile("Updated today"),
    tile("Updated yesterday"),
    tile("Updated 2 days ago"),
    tile("Updated today"),
    tile("Updated 2 days ago"),
];

pub const SIGN_IN_PROMPT: &str = "Sign in to see your profile";

#[derive(Default, Debug, PartialEq, Eq)]
pub struct Sidebar {
    pub name: String,
    pub email: String,
    pub status: String,
}

impl Sidebar {
    /// `None` while the fetch is running, `Some(None)` when there is no user to fetch.
    pub fn new(state: Option<&Option<Result<Profile, GetUserError>>>) -> Self {
        match state {
            None => Self::with_status("Loading..."),
            Some(None) => Self::with_status(SIGN_IN_PROMPT),
            Some(Some(Err(e))) => Self::with_status(&e.to_string()),
            Some(Some(Ok(profile))) => Self {
                name: profile.user.name.clone(),
                email: profile.user.email.clone(),
                status: String::new(),
            },
        }
    }

    fn with_status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            ..Default::default()
        }
    }
}

pub fn UserPage(cx: Scope) -> Element {
    let api = super::use_api(cx);
    let router = use_router(cx);
    let account = Account::use_state(cx);
    let user_id = super::post::parse_id(use_route(cx).segment("id"))
        .or_else(|| account.read().as_ref().map(|account| account.id));

    let profile = use_future(cx, &(user_id,), |(user_id,)| {
        let api = api.clone();
        async move {
            match user_id {
                Some(id) => Some(api.get_user(id).await),
                None => None,
            }
        }
    });

    let sidebar = Sidebar::new(profile.value());

    cx.render(rsx! {
        div {
            class: "user-page",
            aside {
                class: "user-sidebar",
                h2 { class: "user-name", "{sidebar.name}" }
                p { class: "user-email", "{sidebar.email}" }
                p { class: "user-status", hidden: sidebar.status.is_empty(), "{sidebar.status}" }
                hr {}
                ul {
                    class: "user-menu",
                    li { class: "user-menu-item", "Settings" }
                    li {
                        class: "user-menu-item",
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
            }
            div {
                class: "tile-grid",
                SAMPLE_TILES.iter().enumerate().map(|(i, tile)| rsx! {
                    div {
                        key: "{i}",
                        class: "tile",
                        h3 { "{tile.title}" }
                        p { "{tile.date}" }
                    }
                })
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use codecure_shared::model::User;

    use super::*;

    #[test]
    fn test_sidebar() {
        assert_eq!(Sidebar::new(None).status, "Loading...");
        assert_eq!(Sidebar::new(Some(&None)).status, SIGN_IN_PROMPT);

        let failed = Sidebar::new(Some(&Some(Err(GetUserError::Other))));
        assert_eq!(failed.status, crate::api::OTHER_MESSAGE);
        assert!(failed.name.is_empty());

        let loaded = Sidebar::new(Some(&Some(Ok(Profile {
            user: User {
                id: 1,
                name: "hanako".into(),
                email: "hanako@example.com".into(),
            },
            posts: vec![],
        }))));
        assert_eq!(
            loaded,
            Sidebar {
                name: "hanako".into(),
                email: "hanako@example.com".into(),
                status: String::new(),
            }
        );
    }

    #[test]
    fn test_sample_tiles() {
        assert_eq!(SAMPLE_TILES.len(), 8);
        assert!(SAMPLE_TILES.iter().all(|tile| tile.title == "Title"));
        assert_eq!(
            SAMPLE_TILES
                .iter()
                .filter(|tile| tile.date == "Updated today")
                .count(),
            3
        );
    }
}
