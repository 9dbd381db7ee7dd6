//! In-memory state of a review list (the feed, the own reviews
//! or the saved cafés) and its display projection.
//!
//! Remote calls are not issued here. Every fetch is announced with
//! [`Feed::load`] or one of the mutation hooks, which hands out a
//! [`FetchTicket`]. The result is then passed back with
//! [`Feed::apply`] and silently dropped if the ticket has been
//! superseded or cancelled in the meantime.

use crate::{
    entities::*,
    gateways::storage::{KeyValueStore, StorageError},
    saved::SavedCafes,
    util::{filter, sort},
};
use std::fmt;

pub trait FeedItem {
    fn id(&self) -> &Id;
    fn cafe_name(&self) -> &str;
    fn created_at(&self) -> Option<Timestamp>;
}

impl FeedItem for Review {
    fn id(&self) -> &Id {
        &self.id
    }
    fn cafe_name(&self) -> &str {
        &self.cafe_name
    }
    fn created_at(&self) -> Option<Timestamp> {
        Some(self.created_at)
    }
}

impl FeedItem for SavedCafe {
    fn id(&self) -> &Id {
        &self.id
    }
    fn cafe_name(&self) -> &str {
        &self.cafe_name
    }
    fn created_at(&self) -> Option<Timestamp> {
        None
    }
}

impl<T> FeedItem for &T
where
    T: FeedItem + ?Sized,
{
    fn id(&self) -> &Id {
        (**self).id()
    }
    fn cafe_name(&self) -> &str {
        (**self).cafe_name()
    }
    fn created_at(&self) -> Option<Timestamp> {
        (**self).created_at()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// What to render for the current projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Idle,
    Loading,
    Failed,
    /// Nothing has been posted yet.
    NoItems,
    /// Items exist but none matches the search term.
    NoMatches,
    Items(usize),
}

#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug)]
pub struct Feed<T> {
    items: Vec<T>,
    // Submitted locally but not yet confirmed by a fetch
    optimistic: Vec<T>,
    state: LoadState,
    state_before_fetch: LoadState,
    search: String,
    generation: u64,
    pending: Option<FetchTicket>,
}

impl<T> Default for Feed<T> {
    fn default() -> Self {
        Self {
            items: vec![],
            optimistic: vec![],
            state: LoadState::Idle,
            state_before_fetch: LoadState::Idle,
            search: String::new(),
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Feed<T>
where
    T: FeedItem,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Start a (re-)fetch that supersedes all pending fetches.
    pub fn load(&mut self) -> FetchTicket {
        if self.state != LoadState::Loading {
            self.state_before_fetch = self.state;
        }
        self.generation += 1;
        let ticket = FetchTicket(self.generation);
        self.pending = Some(ticket);
        self.state = LoadState::Loading;
        ticket
    }

    /// Manual retry, only after the previous fetch has completed.
    pub fn refetch(&mut self) -> Option<FetchTicket> {
        match self.state {
            LoadState::Ready | LoadState::Failed => Some(self.load()),
            LoadState::Idle | LoadState::Loading => None,
        }
    }

    /// Apply the outcome of a fetch.
    ///
    /// Returns `false` if the result has been dropped, because
    /// the ticket is outdated.
    pub fn apply<E>(&mut self, ticket: FetchTicket, result: Result<Vec<T>, E>) -> bool
    where
        E: fmt::Display,
    {
        if self.pending != Some(ticket) {
            log::debug!("Dropping outdated fetch result {ticket:?}");
            return false;
        }
        self.pending = None;
        match result {
            Ok(items) => {
                // The fetched items are authoritative
                self.optimistic.clear();
                self.items = items;
                self.state = LoadState::Ready;
            }
            Err(err) => {
                log::warn!("Failed to fetch items: {err}");
                self.state = LoadState::Failed;
            }
        }
        true
    }

    /// Forget about all pending fetches, e.g. when the view is closed.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.generation += 1;
            self.state = self.state_before_fetch;
        }
    }

    pub fn is_pending(&self, ticket: FetchTicket) -> bool {
        self.pending == Some(ticket)
    }

    /// Show a newly submitted item immediately and reconcile
    /// it with the next fetch.
    pub fn submit(&mut self, item: T) -> FetchTicket {
        self.optimistic.insert(0, item);
        self.load()
    }

    /// Edits are never patched locally.
    pub fn edited(&mut self) -> FetchTicket {
        self.load()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_optimistic(&self, id: &Id) -> bool {
        self.optimistic.iter().any(|item| item.id() == id)
    }

    /// All items, unfiltered and in fetch order.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.optimistic.iter().chain(self.items.iter())
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items().find(|item| item.id().as_str() == id)
    }

    /// Items matching the search term, newest first.
    pub fn visible(&self) -> Vec<&T> {
        let mut visible: Vec<_> = self
            .items()
            .filter(filter::by_cafe_name(&self.search))
            .collect();
        sort::newest_first(&mut visible);
        visible
    }

    pub fn status(&self) -> FeedStatus {
        match self.state {
            LoadState::Idle => FeedStatus::Idle,
            LoadState::Loading => FeedStatus::Loading,
            LoadState::Failed => FeedStatus::Failed,
            LoadState::Ready => {
                if self.items().next().is_none() {
                    return FeedStatus::NoItems;
                }
                match self.visible().len() {
                    0 => FeedStatus::NoMatches,
                    n => FeedStatus::Items(n),
                }
            }
        }
    }
}

impl Feed<Review> {
    /// Toggle the locally saved state of a review in this feed.
    ///
    /// The feed itself is left untouched. Returns `None` if the
    /// review is not part of the feed.
    pub fn toggle_save<S>(
        &self,
        saved: &SavedCafes<S>,
        id: &str,
    ) -> Result<Option<Toggled>, StorageError>
    where
        S: KeyValueStore,
    {
        let Some(review) = self.find(id) else {
            return Ok(None);
        };
        saved.toggle(review).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateways::storage::MemoryStorage;
    use brewly_entities::builders::*;

    fn review(id: &str, name: &str, millis: i64) -> Review {
        Review::build()
            .id(id)
            .cafe_name(name)
            .created_at(Timestamp::from_millis(millis))
            .finish()
    }

    fn fetched() -> Vec<Review> {
        vec![
            review("1", "Blue Bottle", 1_000),
            review("2", "Kaffeine Fitzrovia", 3_000),
            review("3", "Monmouth", 2_000),
        ]
    }

    fn ids(items: Vec<&Review>) -> Vec<&str> {
        items.into_iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn load_and_apply() {
        let mut feed = Feed::new();
        assert_eq!(FeedStatus::Idle, feed.status());
        let ticket = feed.load();
        assert_eq!(FeedStatus::Loading, feed.status());
        assert!(feed.apply(ticket, Ok::<_, String>(fetched())));
        assert_eq!(LoadState::Ready, feed.state());
        assert_eq!(FeedStatus::Items(3), feed.status());
        assert_eq!(vec!["2", "3", "1"], ids(feed.visible()));
    }

    #[test]
    fn failed_fetch_differs_from_empty_feed() {
        let mut feed = Feed::<Review>::new();
        let ticket = feed.load();
        feed.apply(ticket, Err("offline"));
        assert_eq!(FeedStatus::Failed, feed.status());

        let ticket = feed.refetch().unwrap();
        feed.apply(ticket, Ok::<_, String>(vec![]));
        assert_eq!(FeedStatus::NoItems, feed.status());
    }

    #[test]
    fn refetch_only_after_completion() {
        let mut feed = Feed::<Review>::new();
        assert!(feed.refetch().is_none());
        let _ = feed.load();
        assert!(feed.refetch().is_none());
    }

    #[test]
    fn search_cafe_names() {
        let mut feed = Feed::new();
        let ticket = feed.load();
        feed.apply(ticket, Ok::<_, String>(fetched()));
        feed.set_search("kaff");
        assert_eq!(vec!["2"], ids(feed.visible()));
        feed.set_search("zzz");
        assert_eq!(FeedStatus::NoMatches, feed.status());
        feed.set_search(" ");
        assert_eq!(3, feed.visible().len());
    }

    #[test]
    fn drop_superseded_results() {
        let mut feed = Feed::new();
        let first = feed.load();
        let second = feed.load();
        assert!(!feed.apply(first, Ok::<_, String>(fetched())));
        assert_eq!(LoadState::Loading, feed.state());
        assert!(feed.apply(second, Ok::<_, String>(vec![review("9", "Monmouth", 1)])));
        assert_eq!(vec!["9"], ids(feed.visible()));
    }

    #[test]
    fn drop_results_after_cancel() {
        let mut feed = Feed::new();
        let ticket = feed.load();
        feed.apply(ticket, Ok::<_, String>(fetched()));
        let ticket = feed.refetch().unwrap();
        feed.cancel();
        assert_eq!(LoadState::Ready, feed.state());
        assert!(!feed.is_pending(ticket));
        assert!(!feed.apply(ticket, Ok::<_, String>(vec![])));
        assert_eq!(3, feed.visible().len());
    }

    #[test]
    fn submit_is_optimistic_until_reconciled() {
        let mut feed = Feed::new();
        let ticket = feed.load();
        feed.apply(ticket, Ok::<_, String>(fetched()));

        let ticket = feed.submit(review("new", "Prufrock", 5_000));
        assert!(feed.is_optimistic(&Id::from("new")));
        assert_eq!("new", feed.visible()[0].id.as_str());
        assert_eq!(LoadState::Loading, feed.state());

        // The fetched version wins over the optimistic one
        let mut refetched = fetched();
        refetched.insert(0, review("new", "Prufrock Coffee", 5_001));
        feed.apply(ticket, Ok::<_, String>(refetched));
        assert!(!feed.is_optimistic(&Id::from("new")));
        assert_eq!(4, feed.items().count());
        assert_eq!("Prufrock Coffee", feed.visible()[0].cafe_name);
    }

    #[test]
    fn optimistic_item_survives_failed_refetch() {
        let mut feed = Feed::new();
        let ticket = feed.load();
        feed.apply(ticket, Ok::<_, String>(fetched()));
        let ticket = feed.submit(review("new", "Prufrock", 5_000));
        feed.apply(ticket, Err("timeout"));
        assert_eq!(FeedStatus::Failed, feed.status());
        assert!(feed.find("new").is_some());
    }

    #[test]
    fn edit_triggers_refetch() {
        let mut feed = Feed::new();
        let ticket = feed.load();
        feed.apply(ticket, Ok::<_, String>(fetched()));
        let ticket = feed.edited();
        assert!(feed.is_pending(ticket));
        assert_eq!(LoadState::Loading, feed.state());
    }

    #[test]
    fn toggle_save_does_not_refetch() {
        let mut feed = Feed::new();
        let ticket = feed.load();
        feed.apply(ticket, Ok::<_, String>(fetched()));
        let saved = SavedCafes::new(MemoryStorage::default());

        let toggled = feed.toggle_save(&saved, "2").unwrap();
        assert_eq!(Some(Toggled::Added), toggled);
        assert!(saved.is_saved("2"));
        assert_eq!(LoadState::Ready, feed.state());

        assert_eq!(None, feed.toggle_save(&saved, "unknown").unwrap());
        assert_eq!(
            Some(Toggled::Removed),
            feed.toggle_save(&saved, "2").unwrap()
        );
    }

    #[test]
    fn saved_cafes_keep_fetch_order() {
        let mut feed = Feed::new();
        let ticket = feed.load();
        let saved: Vec<_> = fetched().iter().map(SavedCafe::from).collect();
        feed.apply(ticket, Ok::<_, String>(saved));
        let ids: Vec<_> = feed.visible().into_iter().map(|s| s.id.as_str()).collect();
        assert_eq!(vec!["1", "2", "3"], ids);
    }
}
