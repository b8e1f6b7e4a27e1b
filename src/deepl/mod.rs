//! DeepL API protocol layer: request transport, response decoding and the
//! typed shapes of every supported call.

mod client;
mod error;
mod options;
mod response;
pub mod status;
mod transport;
mod types;

pub use client::{DeepLClient, Endpoint, FREE_API_BASE, PRO_API_BASE, Plan};
pub use error::{ApiError, DecodeError};
pub use options::{Formality, LanguageType, SplitSentences, TagHandling, TranslateOptions};
pub use response::{decode, parse_body, validate_status};
pub use transport::{
    AUTH_KEY_FIELD, ApiRequest, AuthPlacement, Credential, HttpTransport, RawResponse, Transport,
};
pub use types::{
    GlossaryLanguagePair, GlossaryLanguagePairs, Language, Translation, TranslationList, Usage,
    format_glossary_pairs, format_languages,
};
