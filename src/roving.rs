//! Roving keyboard focus across the social links.
//!
//! ArrowDown/ArrowUp move focus through the collection with wrap-around;
//! Enter/Space activate the focused link. Navigation is a pure function of
//! (collection length, current index, key), and the collection is re-read
//! from the page on every keypress so links added or removed between events
//! are handled.

#[cfg(test)]
#[path = "roving_test.rs"]
mod roving_test;

/// Keys with roving-focus meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Enter,
    Space,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::Down),
            "ArrowUp" => Some(Self::Up),
            "Enter" => Some(Self::Enter),
            " " => Some(Self::Space),
            _ => None,
        }
    }
}

/// True for keys that activate a control (Enter, Space).
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(NavKey::parse(key), Some(NavKey::Enter | NavKey::Space))
}

/// What a handled key should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RovingAction {
    /// Move focus to the element at this index.
    Focus(usize),
    /// Trigger the current element's default action.
    Activate,
}

/// Index after `index`, wrapping to 0. `None` for an empty collection.
#[must_use]
pub fn next_index(len: usize, index: usize) -> Option<usize> {
    (len > 0).then(|| (index + 1) % len)
}

/// Index before `index`, wrapping to the last. `None` for an empty collection.
#[must_use]
pub fn previous_index(len: usize, index: usize) -> Option<usize> {
    (len > 0).then(|| (index % len + len - 1) % len)
}

/// Resolve a key press on element `index` of a collection of `len`.
#[must_use]
pub fn resolve(len: usize, index: usize, key: NavKey) -> Option<RovingAction> {
    match key {
        NavKey::Down => next_index(len, index).map(RovingAction::Focus),
        NavKey::Up => previous_index(len, index).map(RovingAction::Focus),
        NavKey::Enter | NavKey::Space => Some(RovingAction::Activate),
    }
}

/// Wire arrow-key focus movement and Enter/Space activation on each link.
#[cfg(feature = "hydrate")]
pub fn install(ctx: &crate::controller::PageContext) -> Result<(), crate::error::PageError> {
    use crate::consts::SOCIAL_LINK_SELECTOR;

    let links = crate::dom::query_all::<web_sys::HtmlElement>(&ctx.document, SOCIAL_LINK_SELECTOR)?;
    for (wired_index, link) in links.iter().enumerate() {
        let document = ctx.document.clone();
        let this = link.clone();
        crate::dom::listen(link, "keydown", move |ev: web_sys::KeyboardEvent| {
            let Some(key) = NavKey::parse(&ev.key()) else {
                return;
            };
            ev.prevent_default();
            let current = match crate::dom::query_all::<web_sys::HtmlElement>(&document, SOCIAL_LINK_SELECTOR) {
                Ok(current) => current,
                Err(err) => {
                    log::warn!("roving focus: {err}");
                    return;
                }
            };
            let index = current.iter().position(|el| *el == this).unwrap_or(wired_index);
            match resolve(current.len(), index, key) {
                Some(RovingAction::Focus(next)) => {
                    if let Err(err) = current[next].focus() {
                        log::warn!("roving focus: focus failed: {err:?}");
                    }
                }
                Some(RovingAction::Activate) => this.click(),
                None => {}
            }
        })?;
    }
    Ok(())
}
