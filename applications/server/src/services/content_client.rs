/// Content API client - verse text and translations
use crate::error::{Result, ServerError};
use noor_core::SurahNumber;
use regex::Regex;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{collections::HashMap, sync::OnceLock};
use tracing::{debug, warn};
use url::Url;

/// Verse as served to the reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterVerse {
    pub id: u64,
    pub verse_key: String,
    pub arabic: String,
    pub translation: String,
}

#[derive(Debug, Deserialize)]
struct UthmaniResponse {
    verses: Vec<UthmaniVerse>,
}

#[derive(Debug, Deserialize)]
struct UthmaniVerse {
    id: u64,
    verse_key: String,
    text_uthmani: String,
}

#[derive(Debug, Deserialize)]
struct TranslationResponse {
    translations: Vec<TranslationRecord>,
}

#[derive(Debug, Deserialize)]
struct TranslationRecord {
    #[serde(default)]
    verse_key: Option<String>,
    text: String,
}

#[derive(Debug, Clone)]
pub struct ContentClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ContentClient {
    pub fn new(client: reqwest::Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ServerError::Config(format!("Invalid content API base: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(ServerError::Config(format!(
                "Content API base cannot carry paths: {base_url}"
            )));
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Arabic text of a surah merged with one optional translation
    ///
    /// Both upstream calls run concurrently. Verses without a matching
    /// translation get an empty string.
    pub async fn chapter_verses(
        &self,
        surah: SurahNumber,
        translation_id: Option<&str>,
    ) -> Result<Vec<ChapterVerse>> {
        if let Some(id) = translation_id {
            if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ServerError::BadRequest(format!(
                    "Invalid translation id: {id}"
                )));
            }
        }

        let verses = self.fetch_verses(surah);
        let translations = async {
            match translation_id {
                Some(id) => self.fetch_translation(id, surah).await.map(Some),
                None => Ok(None),
            }
        };

        let (verses, translations) = tokio::try_join!(verses, translations)?;
        Ok(merge_translations(verses, translations))
    }

    async fn fetch_verses(&self, surah: SurahNumber) -> Result<Vec<UthmaniVerse>> {
        let url = self.endpoint(&["quran", "verses", "uthmani"], surah)?;
        let response: UthmaniResponse = self.fetch_json(url).await?;
        Ok(response.verses)
    }

    async fn fetch_translation(
        &self,
        translation_id: &str,
        surah: SurahNumber,
    ) -> Result<Vec<TranslationRecord>> {
        let url = self.endpoint(&["quran", "translations", translation_id], surah)?;
        let response: TranslationResponse = self.fetch_json(url).await?;
        Ok(response.translations)
    }

    fn endpoint(&self, segments: &[&str], surah: SurahNumber) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ServerError::Internal("Content API base cannot carry paths".into()))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut()
            .append_pair("chapter_number", &surah.to_string());
        Ok(url)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(url = %url, "Fetching from content API");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Content API unreachable");
            ServerError::Upstream(format!("Could not reach the content API: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Content API returned an error");
            return Err(ServerError::Upstream(format!(
                "Content API returned status {}",
                status.as_u16()
            )));
        }

        response.json::<T>().await.map_err(|e| {
            warn!(url = %url, error = %e, "Malformed content API response");
            ServerError::Upstream(format!("Malformed content API response: {e}"))
        })
    }
}

/// Match translations to verses by verse key, or by position when the
/// upstream records carry no key
fn merge_translations(
    verses: Vec<UthmaniVerse>,
    translations: Option<Vec<TranslationRecord>>,
) -> Vec<ChapterVerse> {
    let translations = translations.unwrap_or_default();
    let keyed = translations.iter().all(|t| t.verse_key.is_some());

    let by_key: HashMap<&str, &str> = if keyed {
        translations
            .iter()
            .filter_map(|t| Some((t.verse_key.as_deref()?, t.text.as_str())))
            .collect()
    } else {
        HashMap::new()
    };

    verses
        .into_iter()
        .enumerate()
        .map(|(index, verse)| {
            let text = if keyed {
                by_key.get(verse.verse_key.as_str()).copied()
            } else {
                translations.get(index).map(|t| t.text.as_str())
            };

            ChapterVerse {
                translation: text.map(strip_html).unwrap_or_default(),
                id: verse.id,
                verse_key: verse.verse_key,
                arabic: verse.text_uthmani,
            }
        })
        .collect()
}

const HTML_TAG_PATTERN: &str = r"<[^>]*>";

fn html_tag() -> &'static Regex {
    static HTML_TAG: OnceLock<Regex> = OnceLock::new();
    HTML_TAG.get_or_init(|| {
        Regex::new(HTML_TAG_PATTERN).expect("HTML tag pattern is a valid regex")
    })
}

/// Remove HTML markup (footnote anchors and the like) from translation text
pub fn strip_html(text: &str) -> String {
    html_tag().replace_all(text, "").into_owned()
}
