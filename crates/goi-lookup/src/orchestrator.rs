use std::collections::HashMap;
use std::sync::Arc;

use goi_core::state::{LookupTicket, SessionState};
use goi_core::variants::VariantGenerator;
use goi_types::{Definition, Language, Lookup, MatchedAs};

use crate::provider::DefinitionProvider;

/// Drives the lookup protocol for one word: literal query first, then each
/// morphological variant in order, first non-empty result wins. Writes the
/// outcome (and which query matched) into the session cache.
pub struct LookupOrchestrator {
    providers: HashMap<Language, Arc<dyn DefinitionProvider>>,
    variants: VariantGenerator,
    state: Arc<SessionState>,
}

impl LookupOrchestrator {
    pub fn new(state: Arc<SessionState>) -> Self {
        Self {
            providers: HashMap::new(),
            variants: VariantGenerator::new(),
            state,
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn DefinitionProvider>) -> Self {
        self.providers.insert(provider.language(), provider);
        self
    }

    /// Resolve definitions for a word, unless a fetch is already in flight
    /// or the pair is cached. Returns the ticket `begin_lookup` issued, so
    /// callers can tell whether any network work happened.
    ///
    /// Every failure along the way is absorbed here: the word always leaves
    /// the loading state, resolved either to definitions or to an empty
    /// entry displayed as "No results found."
    pub async fn resolve(&self, word: &str, language: Language) -> LookupTicket {
        let ticket = self.state.begin_lookup(word, language).await;
        if ticket != LookupTicket::Fetch {
            tracing::debug!(word, lang = language.code(), ?ticket, "lookup skipped");
            return ticket;
        }

        let (definitions, matched) = self.attempt_chain(word, language).await;
        self.state
            .finish_lookup(word, language, definitions, matched)
            .await;
        LookupTicket::Fetch
    }

    async fn attempt_chain(&self, word: &str, language: Language) -> (Vec<Definition>, MatchedAs) {
        let Some(provider) = self.providers.get(&language) else {
            tracing::error!(lang = language.code(), "no provider registered");
            return (Vec::new(), MatchedAs::Nothing);
        };

        let literal = word.to_lowercase();
        if let Some(definitions) = self.attempt(provider.as_ref(), &literal).await {
            return (definitions, MatchedAs::Original);
        }

        for variant in self.variants.generate(&literal) {
            if variant == literal {
                continue;
            }
            if let Some(definitions) = self.attempt(provider.as_ref(), &variant).await {
                tracing::debug!(word, variant, "variant lookup matched");
                return (definitions, MatchedAs::Variant(variant));
            }
        }

        (Vec::new(), MatchedAs::Nothing)
    }

    /// One fetch attempt. Transport and parse errors degrade to "nothing
    /// found" so the fallback chain keeps going.
    async fn attempt(
        &self,
        provider: &dyn DefinitionProvider,
        query: &str,
    ) -> Option<Vec<Definition>> {
        match provider.fetch(query).await {
            Ok(Lookup::Found(definitions)) if !definitions.is_empty() => Some(definitions),
            Ok(Lookup::Found(_)) | Ok(Lookup::NotFound) => None,
            Err(e) => {
                tracing::warn!(query, error = %e, "lookup fetch failed");
                None
            }
        }
    }
}
