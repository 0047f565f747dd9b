/// Heuristic English morphology: produces dictionary-form candidates for a
/// word whose literal lookup found nothing.
pub struct VariantGenerator;

impl VariantGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate fallback candidates for a word.
    ///
    /// The lowercased input is always the first element. Every applicable
    /// suffix rule contributes its candidates; the rules overlap on purpose
    /// ("cities" matches ies, es, and s), so the list is deduplicated while
    /// keeping first-seen order.
    pub fn generate(&self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();

        let mut candidates = vec![word.clone()];
        candidates.extend(self.plural_forms(&word));
        candidates.extend(self.past_forms(&word));
        candidates.extend(self.progressive_forms(&word));
        candidates.extend(self.comparative_forms(&word));

        let mut seen = std::collections::HashSet::new();
        candidates.retain(|c| seen.insert(c.clone()));
        candidates
    }

    /// Plural nouns: cities -> city, wolves -> wolf/wolfe, boxes -> box, cats -> cat.
    fn plural_forms(&self, word: &str) -> Vec<String> {
        let mut forms = Vec::new();

        if let Some(stem) = word.strip_suffix("ies") {
            forms.push(format!("{stem}y"));
        }
        if let Some(stem) = word.strip_suffix("ves") {
            forms.push(format!("{stem}f"));
            forms.push(format!("{stem}fe"));
        }
        if let Some(stem) = word.strip_suffix("es") {
            forms.push(stem.to_string());
        }
        if let Some(stem) = word.strip_suffix("s") {
            forms.push(stem.to_string());
        }

        forms
    }

    /// Past tense: tried -> try, jumped -> jump, loved -> love.
    fn past_forms(&self, word: &str) -> Vec<String> {
        let mut forms = Vec::new();

        if let Some(stem) = word.strip_suffix("ied") {
            forms.push(format!("{stem}y"));
        }
        if let Some(stem) = word.strip_suffix("ed") {
            forms.push(stem.to_string());
        }
        if word.ends_with("ed") {
            forms.push(word[..word.len() - 1].to_string());
        }

        forms
    }

    /// Progressive: running -> runn/runne, making -> mak/make.
    fn progressive_forms(&self, word: &str) -> Vec<String> {
        let mut forms = Vec::new();

        if let Some(stem) = word.strip_suffix("ing") {
            forms.push(stem.to_string());
            forms.push(format!("{stem}e"));
        }

        forms
    }

    /// Comparatives and superlatives: happier -> happy, fastest -> fast.
    fn comparative_forms(&self, word: &str) -> Vec<String> {
        let mut forms = Vec::new();

        if let Some(stem) = word.strip_suffix("ier") {
            forms.push(format!("{stem}y"));
        }
        if let Some(stem) = word.strip_suffix("iest") {
            forms.push(format!("{stem}y"));
        }
        if let Some(stem) = word.strip_suffix("er") {
            forms.push(stem.to_string());
        }
        if let Some(stem) = word.strip_suffix("est") {
            forms.push(stem.to_string());
        }

        forms
    }
}

impl Default for VariantGenerator {
    fn default() -> Self {
        Self::new()
    }
}
