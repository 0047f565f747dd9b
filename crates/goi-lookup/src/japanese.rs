use async_trait::async_trait;
use goi_config::lookup::LookupConfig;
use goi_types::{Definition, Language, Lookup};
use reqwest::Url;

use crate::provider::{DefinitionProvider, LookupError};

/// English -> Japanese lookup against the excelapi enja endpoint, fetched
/// through a CORS relay. The endpoint returns raw, often messy text.
#[derive(Clone)]
pub struct JapaneseProvider {
    client: reqwest::Client,
    relay_url: String,
    enja_url: String,
}

impl JapaneseProvider {
    pub fn new(client: reqwest::Client, config: &LookupConfig) -> Self {
        Self {
            client,
            relay_url: config.relay_url.clone(),
            enja_url: config.enja_url.clone(),
        }
    }

    fn request_url(&self, query: &str) -> Result<Url, LookupError> {
        let mut inner = Url::parse(&self.enja_url)
            .map_err(|e| LookupError::BadUrl(format!("{}: {e}", self.enja_url)))?;
        inner.query_pairs_mut().append_pair("word", query);

        let mut outer = Url::parse(&self.relay_url)
            .map_err(|e| LookupError::BadUrl(format!("{}: {e}", self.relay_url)))?;
        outer.query_pairs_mut().append_pair("url", inner.as_str());
        Ok(outer)
    }
}

#[async_trait]
impl DefinitionProvider for JapaneseProvider {
    async fn fetch(&self, query: &str) -> Result<Lookup, LookupError> {
        let url = self.request_url(query)?;
        tracing::debug!(query, "fetching enja definitions");

        let response = self
            .client
            .get(url)
            .header("Accept", "text/plain")
            .header("User-Agent", "Mozilla/5.0")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let raw = response.text().await?;
        let senses = parse_senses(&raw);
        if senses.is_empty() {
            Ok(Lookup::NotFound)
        } else {
            Ok(Lookup::Found(
                senses.into_iter().map(Definition::Sense).collect(),
            ))
        }
    }

    fn language(&self) -> Language {
        Language::Ja
    }
}

/// Cleanup for the raw endpoint text: strip a leading BOM, fold the
/// ideographic space to ASCII, straighten curly quotes, drop control
/// characters. Everything else (katakana, fullwidth Latin) passes through
/// untouched.
fn clean_raw(raw: &str) -> String {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let text: String = text
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| match c {
            '\u{3000}' => ' ',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201c}' | '\u{201d}' => '"',
            c => c,
        })
        .collect();
    text.trim().to_string()
}

/// Split the cleaned text into senses: `/` separates entries, `,` and `;`
/// separate sub-senses. A non-empty text that splits into nothing is kept
/// whole as a single sense.
fn parse_senses(raw: &str) -> Vec<String> {
    let cleaned = clean_raw(raw);
    if cleaned.is_empty() {
        return Vec::new();
    }

    let mut senses: Vec<String> = cleaned
        .split('/')
        .flat_map(|segment| segment.split([',', ';']))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if senses.is_empty() {
        senses.push(cleaned);
    }
    senses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_slash_comma_and_semicolon() {
        let senses = parse_senses("犬/dog, hound; mutt");
        assert_eq!(senses, vec!["犬", "dog", "hound", "mutt"]);
    }

    #[test]
    fn strips_bom_and_folds_fullwidth_space() {
        let senses = parse_senses("\u{feff}猫\u{3000}cat");
        assert_eq!(senses, vec!["猫 cat"]);
    }

    #[test]
    fn normalizes_curly_quotes_and_controls() {
        let senses = parse_senses("\u{201c}quoted\u{201d}\x07 / it\u{2019}s");
        assert_eq!(senses, vec!["\"quoted\"", "it's"]);
    }

    #[test]
    fn control_chars_are_stripped_not_spaced() {
        // "do\x08g" must join back to "dog", not split to "do g".
        let senses = parse_senses("do\x08g/ho\u{0}und");
        assert_eq!(senses, vec!["dog", "hound"]);
    }

    #[test]
    fn only_the_ideographic_space_is_folded() {
        // Halfwidth katakana and fullwidth Latin survive as sent; a wider
        // compatibility fold would rewrite what the endpoint said.
        let senses = parse_senses("ｶﾀｶﾅ\u{3000}ｆｕｌｌ");
        assert_eq!(senses, vec!["ｶﾀｶﾅ ｆｕｌｌ"]);
    }

    #[test]
    fn blank_response_yields_no_senses() {
        assert!(parse_senses("").is_empty());
        assert!(parse_senses("   \u{3000}  ").is_empty());
    }

    #[test]
    fn separator_only_text_falls_back_to_whole_text() {
        // Splitting "/;," leaves nothing, but the cleaned text is non-empty.
        let senses = parse_senses("/;,");
        assert_eq!(senses, vec!["/;,"]);
    }

    #[test]
    fn drops_empty_segments() {
        let senses = parse_senses("one//two,,three");
        assert_eq!(senses, vec!["one", "two", "three"]);
    }

    #[test]
    fn relay_wraps_the_inner_url() {
        let config = LookupConfig {
            relay_url: "https://relay.example/raw".into(),
            enja_url: "https://dict.example/enja".into(),
            ..LookupConfig::default()
        };
        let provider = JapaneseProvider::new(reqwest::Client::new(), &config);
        let url = provider.request_url("boxes").unwrap();
        assert_eq!(url.as_str().split('?').next().unwrap(), "https://relay.example/raw");
        assert!(url.as_str().contains("boxes"));
    }
}
