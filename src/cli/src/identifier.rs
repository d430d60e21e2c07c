//! Classification of the `app view` argument as an application ID or a name.

use std::sync::OnceLock;

use regex::Regex;

/// Separator placed between positional arguments to form a multi-word name.
pub const WORD_SEPARATOR: &str = "%20";

/// Canonical version-4 UUID text, case-insensitive.
const UUID_V4_PATTERN: &str =
    "^[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-4[a-fA-F0-9]{3}-[89aAbB][a-fA-F0-9]{3}-[a-fA-F0-9]{12}$";

fn uuid_v4_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(UUID_V4_PATTERN).expect("UUID pattern is valid"))
}

/// The joined positional arguments and whether they look like an ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Arguments joined with `%20`
    pub token: String,
    pub is_id: bool,
}

impl Selector {
    /// The human-readable name, with separators turned back into spaces.
    pub fn name(&self) -> String {
        self.token.replace(WORD_SEPARATOR, " ")
    }
}

/// Whether `token` is shaped like a version-4 UUID.
///
/// Purely lexical: the ID is not checked for existence.
pub fn is_uuid_v4(token: &str) -> bool {
    uuid_v4_regex().is_match(token)
}

/// Join `args` into a single token and classify it.
pub fn classify(args: &[String]) -> Selector {
    let token = args.join(WORD_SEPARATOR);
    let is_id = is_uuid_v4(&token);
    Selector { token, is_id }
}
