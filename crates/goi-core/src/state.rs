use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use goi_types::{Definition, InputMode, Language, MatchedAs};
use indexmap::IndexMap;
use tokio::sync::RwLock;

/// Cached result of a resolved lookup for one (word, language) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEntry {
    /// Empty when neither the word nor any variant had an entry.
    pub definitions: Vec<Definition>,
    pub matched: MatchedAs,
}

/// Per-(word, language) lookup lifecycle. `Idle` is represented by absence
/// from the map; `Resolved` is terminal until explicitly invalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordState {
    Loading,
    Resolved(LookupEntry),
}

/// What the caller should do after asking to start a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTicket {
    /// The word was idle; it is now marked loading and a fetch must follow.
    Fetch,
    /// A fetch is already in flight; do nothing.
    InFlight,
    /// A resolved entry exists; no network activity needed.
    Cached,
}

struct SessionInner {
    dictionary: HashSet<String>,
    word_counts: IndexMap<String, u64>,
    lookups: HashMap<(String, Language), WordState>,
    expanded: HashSet<String>,
    extracting: bool,
    pasted_text: String,
    selected_file: Option<PathBuf>,
    input_mode: Option<InputMode>,
    language: Language,
}

impl Default for SessionInner {
    fn default() -> Self {
        Self {
            dictionary: HashSet::new(),
            word_counts: IndexMap::new(),
            lookups: HashMap::new(),
            expanded: HashSet::new(),
            extracting: false,
            pasted_text: String::new(),
            selected_file: None,
            input_mode: None,
            language: Language::Ja,
        }
    }
}

/// Shared session store. All mutation goes through typed methods holding
/// the write lock for the whole transition, so readers never observe a
/// word both loading and resolved, or a lost loading flag.
#[derive(Default)]
pub struct SessionState {
    inner: RwLock<SessionInner>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    // --- dictionary -------------------------------------------------------

    /// Replace the vocabulary wholesale. Past word counts are kept; they
    /// reflect the dictionary snapshot their extraction ran against.
    pub async fn replace_dictionary(&self, words: Vec<String>) {
        let mut inner = self.inner.write().await;
        inner.dictionary = words.into_iter().collect();
    }

    /// Snapshot of the current dictionary for an extraction run.
    pub async fn dictionary(&self) -> HashSet<String> {
        self.inner.read().await.dictionary.clone()
    }

    pub async fn dictionary_is_empty(&self) -> bool {
        self.inner.read().await.dictionary.is_empty()
    }

    // --- word counts ------------------------------------------------------

    /// Replace the tally from a fresh extraction. No incremental merge.
    pub async fn replace_word_counts(&self, counts: IndexMap<String, u64>) {
        let mut inner = self.inner.write().await;
        inner.word_counts = counts;
    }

    pub async fn clear_word_counts(&self) {
        let mut inner = self.inner.write().await;
        inner.word_counts.clear();
    }

    pub async fn word_counts(&self) -> IndexMap<String, u64> {
        self.inner.read().await.word_counts.clone()
    }

    // --- lookup state machine ---------------------------------------------

    /// Atomic Idle -> Loading transition. Re-entrant calls while a fetch is
    /// in flight get `InFlight`; a resolved pair gets `Cached`. Only one
    /// caller per (word, language) ever receives `Fetch`.
    pub async fn begin_lookup(&self, word: &str, language: Language) -> LookupTicket {
        let mut inner = self.inner.write().await;
        let key = (word.to_string(), language);
        match inner.lookups.get(&key) {
            Some(WordState::Loading) => LookupTicket::InFlight,
            Some(WordState::Resolved(_)) => LookupTicket::Cached,
            None => {
                inner.lookups.insert(key, WordState::Loading);
                LookupTicket::Fetch
            }
        }
    }

    /// Loading -> Resolved. Clears the loading flag and stores the entry in
    /// one step. A finish with no matching in-flight lookup is dropped so a
    /// resolved entry is never overwritten behind a reader's back.
    pub async fn finish_lookup(
        &self,
        word: &str,
        language: Language,
        definitions: Vec<Definition>,
        matched: MatchedAs,
    ) {
        let mut inner = self.inner.write().await;
        let key = (word.to_string(), language);
        match inner.lookups.get(&key) {
            Some(WordState::Loading) => {
                inner.lookups.insert(
                    key,
                    WordState::Resolved(LookupEntry {
                        definitions,
                        matched,
                    }),
                );
            }
            other => {
                tracing::warn!(word, lang = language.code(), ?other, "finish without loading");
            }
        }
    }

    /// Explicit cache invalidation: the pair returns to Idle and the next
    /// expansion will fetch again.
    pub async fn invalidate_lookup(&self, word: &str, language: Language) {
        let mut inner = self.inner.write().await;
        inner.lookups.remove(&(word.to_string(), language));
    }

    pub async fn lookup_entry(&self, word: &str, language: Language) -> Option<LookupEntry> {
        let inner = self.inner.read().await;
        match inner.lookups.get(&(word.to_string(), language)) {
            Some(WordState::Resolved(entry)) => Some(entry.clone()),
            _ => None,
        }
    }

    pub async fn is_loading(&self, word: &str, language: Language) -> bool {
        let inner = self.inner.read().await;
        matches!(
            inner.lookups.get(&(word.to_string(), language)),
            Some(WordState::Loading)
        )
    }

    // --- expansion --------------------------------------------------------

    /// Flip a word's definition panel. Returns true when the panel is now
    /// open. Orthogonal to lookup state: closing and reopening never
    /// re-fetches a cached pair.
    pub async fn toggle_expansion(&self, word: &str) -> bool {
        let mut inner = self.inner.write().await;
        if inner.expanded.remove(word) {
            false
        } else {
            inner.expanded.insert(word.to_string());
            true
        }
    }

    pub async fn close_expansion(&self, word: &str) {
        let mut inner = self.inner.write().await;
        inner.expanded.remove(word);
    }

    pub async fn is_expanded(&self, word: &str) -> bool {
        self.inner.read().await.expanded.contains(word)
    }

    /// Words whose definition panels are currently open.
    pub async fn expanded_words(&self) -> Vec<String> {
        self.inner.read().await.expanded.iter().cloned().collect()
    }

    // --- input selection --------------------------------------------------

    /// Store pasted text; the input mode follows it.
    pub async fn set_pasted_text(&self, text: String) {
        let mut inner = self.inner.write().await;
        inner.pasted_text = text;
        inner.input_mode = Some(InputMode::PastedText);
    }

    pub async fn pasted_text(&self) -> String {
        self.inner.read().await.pasted_text.clone()
    }

    /// Store the selected file; the input mode follows it.
    pub async fn set_selected_file(&self, path: PathBuf) {
        let mut inner = self.inner.write().await;
        inner.selected_file = Some(path);
        inner.input_mode = Some(InputMode::PdfFile);
    }

    pub async fn selected_file(&self) -> Option<PathBuf> {
        self.inner.read().await.selected_file.clone()
    }

    pub async fn set_input_mode(&self, mode: InputMode) {
        let mut inner = self.inner.write().await;
        inner.input_mode = Some(mode);
    }

    /// The mode the next extraction should read from, derived from the most
    /// recent input action unless explicitly overridden.
    pub async fn input_mode(&self) -> Option<InputMode> {
        self.inner.read().await.input_mode
    }

    // --- language toggle --------------------------------------------------

    /// Switch the session's lookup language. Cached entries for the other
    /// language stay; the next expansion of a word fetches for the new
    /// language only if that pair is still idle.
    pub async fn set_language(&self, language: Language) {
        let mut inner = self.inner.write().await;
        inner.language = language;
    }

    pub async fn language(&self) -> Language {
        self.inner.read().await.language
    }

    // --- extraction flag --------------------------------------------------

    pub async fn set_extracting(&self, value: bool) {
        let mut inner = self.inner.write().await;
        inner.extracting = value;
    }

    pub async fn is_extracting(&self) -> bool {
        self.inner.read().await.extracting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn begin_lookup_is_reentrant_safe() {
        let state = SessionState::new();

        assert_eq!(state.begin_lookup("word", Language::Ja).await, LookupTicket::Fetch);
        // A second request before the first resolves must not fetch again.
        assert_eq!(
            state.begin_lookup("word", Language::Ja).await,
            LookupTicket::InFlight
        );
        assert!(state.is_loading("word", Language::Ja).await);
    }

    #[tokio::test]
    async fn resolved_pair_is_cached_until_invalidated() {
        let state = SessionState::new();

        state.begin_lookup("word", Language::Ja).await;
        state
            .finish_lookup(
                "word",
                Language::Ja,
                vec![Definition::Sense("def".into())],
                MatchedAs::Original,
            )
            .await;

        assert!(!state.is_loading("word", Language::Ja).await);
        assert_eq!(
            state.begin_lookup("word", Language::Ja).await,
            LookupTicket::Cached
        );

        state.invalidate_lookup("word", Language::Ja).await;
        assert_eq!(state.begin_lookup("word", Language::Ja).await, LookupTicket::Fetch);
    }

    #[tokio::test]
    async fn languages_are_cached_independently() {
        let state = SessionState::new();

        state.begin_lookup("word", Language::Ja).await;
        state
            .finish_lookup("word", Language::Ja, vec![], MatchedAs::Nothing)
            .await;

        // The other language still needs its own fetch.
        assert_eq!(state.begin_lookup("word", Language::En).await, LookupTicket::Fetch);
        assert!(state.lookup_entry("word", Language::En).await.is_none());
        assert!(state.lookup_entry("word", Language::Ja).await.is_some());
    }

    #[tokio::test]
    async fn finish_without_loading_is_dropped() {
        let state = SessionState::new();

        state.begin_lookup("word", Language::Ja).await;
        state
            .finish_lookup(
                "word",
                Language::Ja,
                vec![Definition::Sense("first".into())],
                MatchedAs::Original,
            )
            .await;
        // A stray second finish must not clobber the cached entry.
        state
            .finish_lookup(
                "word",
                Language::Ja,
                vec![Definition::Sense("second".into())],
                MatchedAs::Original,
            )
            .await;

        let entry = state.lookup_entry("word", Language::Ja).await.unwrap();
        assert_eq!(entry.definitions, vec![Definition::Sense("first".into())]);
    }

    #[tokio::test]
    async fn expansion_toggles_without_touching_cache() {
        let state = SessionState::new();

        state.begin_lookup("word", Language::Ja).await;
        state
            .finish_lookup(
                "word",
                Language::Ja,
                vec![Definition::Sense("def".into())],
                MatchedAs::Original,
            )
            .await;

        assert!(state.toggle_expansion("word").await);
        assert!(state.is_expanded("word").await);
        assert!(!state.toggle_expansion("word").await);
        assert!(!state.is_expanded("word").await);

        assert!(state.lookup_entry("word", Language::Ja).await.is_some());
    }

    #[tokio::test]
    async fn input_mode_follows_latest_input_action() {
        let state = SessionState::new();
        assert_eq!(state.input_mode().await, None);

        state.set_pasted_text("some text".into()).await;
        assert_eq!(state.input_mode().await, Some(InputMode::PastedText));

        state.set_selected_file("notes.pdf".into()).await;
        assert_eq!(state.input_mode().await, Some(InputMode::PdfFile));

        state.set_input_mode(InputMode::PastedText).await;
        assert_eq!(state.input_mode().await, Some(InputMode::PastedText));
        assert_eq!(state.pasted_text().await, "some text");
    }

    #[tokio::test]
    async fn word_counts_replace_wholesale() {
        let state = SessionState::new();

        let mut first = IndexMap::new();
        first.insert("alpha".to_string(), 3u64);
        state.replace_word_counts(first).await;

        let mut second = IndexMap::new();
        second.insert("beta".to_string(), 1u64);
        state.replace_word_counts(second).await;

        let counts = state.word_counts().await;
        assert_eq!(counts.get("beta"), Some(&1));
        assert!(!counts.contains_key("alpha"));
    }
}
