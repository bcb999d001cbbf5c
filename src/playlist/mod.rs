//! Playback selector over the union of the three media lists: the remote
//! feed, user-submitted URLs, and local library files.

use crate::library::LocalMedia;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Remote(String),
    User(String),
    Local(LocalMedia),
}

impl Entry {
    /// The location handed to the player: a URL for remote/user entries, a
    /// session file path for local ones.
    pub fn location(&self) -> String {
        match self {
            Entry::Remote(url) | Entry::User(url) => url.clone(),
            Entry::Local(media) => media.path.display().to_string(),
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Entry::Remote(url) | Entry::User(url) => url,
            Entry::Local(media) => &media.name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Playlist {
    entries: Vec<Entry>,
    current: Option<usize>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection with the union remote → user → local, in that
    /// fixed order. The current selection is reset.
    pub fn rebuild(&mut self, remote: Vec<String>, user: Vec<String>, local: Vec<LocalMedia>) {
        self.entries = remote
            .into_iter()
            .map(Entry::Remote)
            .chain(user.into_iter().map(Entry::User))
            .chain(local.into_iter().map(Entry::Local))
            .collect();
        self.current = None;
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_entry(&self) -> Option<&Entry> {
        self.current.and_then(|i| self.entries.get(i))
    }

    /// Explicit selection, e.g. activating a row in the media list.
    pub fn set_current(&mut self, index: usize) {
        if index < self.entries.len() {
            self.current = Some(index);
        }
    }

    /// Pick a uniformly random index, never the current one — unless the
    /// collection has a single element, whose repeat is unavoidable.
    pub fn pick_next<R: Rng>(&mut self, rng: &mut R) -> Option<&Entry> {
        if self.entries.is_empty() {
            return None;
        }
        if self.entries.len() == 1 {
            self.current = Some(0);
            return self.entries.first();
        }

        let next = match self.current {
            Some(exclude) => {
                // Draw from len-1 slots and skip over the excluded index.
                let drawn = rng.random_range(0..self.entries.len() - 1);
                if drawn >= exclude { drawn + 1 } else { drawn }
            }
            None => rng.random_range(0..self.entries.len()),
        };
        self.current = Some(next);
        self.entries.get(next)
    }

    /// On playback failure: step to the next index deterministically so a
    /// broken item cannot be drawn again immediately.
    pub fn advance_on_error(&mut self) -> Option<&Entry> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match self.current {
            Some(i) => (i + 1) % self.entries.len(),
            None => 0,
        };
        self.current = Some(next);
        self.entries.get(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn local(id: i64, name: &str) -> LocalMedia {
        LocalMedia {
            id,
            name: name.to_string(),
            path: PathBuf::from(format!("/tmp/{id}.mp4")),
        }
    }

    fn sample() -> Playlist {
        let mut p = Playlist::new();
        p.rebuild(
            vec!["https://r/1.mp4".into(), "https://r/2.mp4".into()],
            vec!["https://u/1.mp4".into()],
            vec![local(7, "clip.mp4")],
        );
        p
    }

    #[test]
    fn union_order_is_remote_then_user_then_local() {
        let p = sample();
        assert_eq!(p.len(), 4);
        assert!(matches!(p.entries()[0], Entry::Remote(_)));
        assert!(matches!(p.entries()[1], Entry::Remote(_)));
        assert!(matches!(p.entries()[2], Entry::User(_)));
        assert!(matches!(p.entries()[3], Entry::Local(_)));
    }

    #[test]
    fn pick_next_never_repeats_current() {
        let mut p = sample();
        let mut rng = rand::rng();
        p.pick_next(&mut rng);
        for _ in 0..200 {
            let before = p.current_index().unwrap();
            p.pick_next(&mut rng);
            assert_ne!(p.current_index().unwrap(), before);
        }
    }

    #[test]
    fn single_entry_always_repeats() {
        let mut p = Playlist::new();
        p.rebuild(vec!["https://only.mp4".into()], vec![], vec![]);
        let mut rng = rand::rng();
        for _ in 0..5 {
            p.pick_next(&mut rng);
            assert_eq!(p.current_index(), Some(0));
        }
    }

    #[test]
    fn empty_playlist_yields_nothing() {
        let mut p = Playlist::new();
        let mut rng = rand::rng();
        assert!(p.pick_next(&mut rng).is_none());
        assert!(p.advance_on_error().is_none());
    }

    #[test]
    fn error_advance_wraps_deterministically() {
        let mut p = sample();
        let mut rng = rand::rng();
        p.pick_next(&mut rng);

        let start = p.current_index().unwrap();
        for step in 1..=p.len() {
            p.advance_on_error();
            assert_eq!(p.current_index().unwrap(), (start + step) % p.len());
        }
    }

    #[test]
    fn rebuild_resets_selection() {
        let mut p = sample();
        let mut rng = rand::rng();
        p.pick_next(&mut rng);
        assert!(p.current_index().is_some());

        p.rebuild(vec!["https://r/9.mp4".into()], vec![], vec![]);
        assert!(p.current_index().is_none());
        assert_eq!(p.len(), 1);
    }
}
