use async_trait::async_trait;
use goi_config::lookup::LookupConfig;
use goi_types::{Definition, Language, Lookup};
use indexmap::IndexMap;
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::provider::{DefinitionProvider, LookupError};

/// English definitions from dictionaryapi.dev. The endpoint answers with a
/// JSON array of entries and uses HTTP 404 for unknown words.
#[derive(Clone)]
pub struct EnglishProvider {
    client: reqwest::Client,
    base_url: String,
}

impl EnglishProvider {
    pub fn new(client: reqwest::Client, config: &LookupConfig) -> Self {
        Self {
            client,
            base_url: config.en_url.clone(),
        }
    }

    fn request_url(&self, query: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| LookupError::BadUrl(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| LookupError::BadUrl(self.base_url.clone()))?
            .push(query);
        Ok(url)
    }
}

#[async_trait]
impl DefinitionProvider for EnglishProvider {
    async fn fetch(&self, query: &str) -> Result<Lookup, LookupError> {
        let url = self.request_url(query)?;
        tracing::debug!(query, "fetching english definitions");

        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Lookup::NotFound);
        }
        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let body: serde_json::Value = response.json().await?;
        if !body.is_array() {
            return Ok(Lookup::NotFound);
        }

        let entries: Vec<Entry> = serde_json::from_value(body)?;
        let definitions = group_definitions(entries);
        if definitions.is_empty() {
            Ok(Lookup::NotFound)
        } else {
            Ok(Lookup::Found(definitions))
        }
    }

    fn language(&self) -> Language {
        Language::En
    }
}

#[derive(Deserialize)]
struct Entry {
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Deserialize)]
struct Meaning {
    #[serde(rename = "partOfSpeech")]
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<SenseBody>,
}

#[derive(Deserialize)]
struct SenseBody {
    definition: String,
    example: Option<String>,
}

/// Flatten entries into display order: one part-of-speech header per POS in
/// first-seen order, followed by its senses (merged across entries).
fn group_definitions(entries: Vec<Entry>) -> Vec<Definition> {
    let mut by_pos: IndexMap<String, Vec<SenseBody>> = IndexMap::new();
    for entry in entries {
        for meaning in entry.meanings {
            by_pos
                .entry(meaning.part_of_speech)
                .or_default()
                .extend(meaning.definitions);
        }
    }

    let mut out = Vec::new();
    for (pos, senses) in by_pos {
        out.push(Definition::PartOfSpeech(pos));
        for body in senses {
            out.push(match body.example {
                Some(example) => Definition::SenseWithExample {
                    sense: body.definition,
                    example,
                },
                None => Definition::Sense(body.definition),
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(json: &str) -> Vec<Entry> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn groups_by_part_of_speech_in_first_seen_order() {
        let parsed = entries(
            r#"[
                {"meanings": [
                    {"partOfSpeech": "noun", "definitions": [{"definition": "a container"}]},
                    {"partOfSpeech": "verb", "definitions": [{"definition": "to fight"}]}
                ]},
                {"meanings": [
                    {"partOfSpeech": "noun", "definitions": [{"definition": "a compartment"}]}
                ]}
            ]"#,
        );

        let defs = group_definitions(parsed);
        assert_eq!(
            defs,
            vec![
                Definition::PartOfSpeech("noun".into()),
                Definition::Sense("a container".into()),
                Definition::Sense("a compartment".into()),
                Definition::PartOfSpeech("verb".into()),
                Definition::Sense("to fight".into()),
            ]
        );
    }

    #[test]
    fn keeps_examples_with_their_sense() {
        let parsed = entries(
            r#"[{"meanings": [{"partOfSpeech": "verb", "definitions": [
                {"definition": "to move fast", "example": "he ran home"}
            ]}]}]"#,
        );

        let defs = group_definitions(parsed);
        assert_eq!(
            defs[1],
            Definition::SenseWithExample {
                sense: "to move fast".into(),
                example: "he ran home".into(),
            }
        );
        assert_eq!(format!("{}", defs[1]), "to move fast\n   e.g., \"he ran home\"");
        assert_eq!(format!("{}", defs[0]), "**verb**");
    }

    #[test]
    fn empty_entries_produce_nothing() {
        assert!(group_definitions(entries("[]")).is_empty());
        assert!(group_definitions(entries(r#"[{"meanings": []}]"#)).is_empty());
    }

    /// One-shot HTTP stub answering every request with a canned response.
    async fn serve_once(response: &'static str) -> std::net::SocketAddr {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            stream.write_all(response.as_bytes()).await.unwrap();
        });
        addr
    }

    fn provider_for(addr: std::net::SocketAddr) -> EnglishProvider {
        let config = LookupConfig {
            en_url: format!("http://{addr}/api/v2/entries/en"),
            ..LookupConfig::default()
        };
        EnglishProvider::new(reqwest::Client::new(), &config)
    }

    #[tokio::test]
    async fn http_404_maps_to_not_found() {
        // The endpoint's "unknown word" answer; callers then run variant
        // fallback, same as a Japanese empty response.
        let addr = serve_once(
            "HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        )
        .await;

        let result = provider_for(addr).fetch("qwertyuiop").await.unwrap();
        assert_eq!(result, Lookup::NotFound);
    }

    #[tokio::test]
    async fn non_array_body_maps_to_not_found() {
        let addr = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 33\r\nconnection: close\r\n\r\n{\"title\": \"No Definitions Found\"}",
        )
        .await;

        let result = provider_for(addr).fetch("qwertyuiop").await.unwrap();
        assert_eq!(result, Lookup::NotFound);
    }

    #[tokio::test]
    async fn server_error_is_a_status_error() {
        let addr = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        )
        .await;

        let err = provider_for(addr).fetch("qwertyuiop").await.unwrap_err();
        assert!(matches!(err, LookupError::Status(500)));
    }

    #[test]
    fn query_lands_in_the_url_path() {
        let config = LookupConfig {
            en_url: "https://dict.example/api/v2/entries/en".into(),
            ..LookupConfig::default()
        };
        let provider = EnglishProvider::new(reqwest::Client::new(), &config);
        let url = provider.request_url("lexicon").unwrap();
        assert_eq!(url.as_str(), "https://dict.example/api/v2/entries/en/lexicon");
    }
}
