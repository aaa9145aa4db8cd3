//! Country name → ISO3 resolution.
//!
//! Lookups go curated table first, then codes, then the ISO 3166-1 reference
//! list by canonical form, then fuzzy similarity. A name nothing matches
//! resolves to no code; a code is never invented.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use strsim::jaro_winkler;

use super::reference::COUNTRIES;

/// Minimum Jaro-Winkler similarity for a fuzzy match
pub const FUZZY_THRESHOLD: f64 = 0.92;

/// Names the sources use that the reference list does not carry verbatim.
const CURATED: &[(&str, &str)] = &[
    ("bolivia", "BOL"),
    ("burma", "MMR"),
    ("cape verde", "CPV"),
    ("congo (brazzaville)", "COG"),
    ("congo (kinshasa)", "COD"),
    ("congo dr", "COD"),
    ("congo rep", "COG"),
    ("congo-brazzaville", "COG"),
    ("congo-kinshasa", "COD"),
    ("congo, dem. rep.", "COD"),
    ("congo, dr", "COD"),
    ("congo, the democratic republic of the", "COD"),
    ("czech republic", "CZE"),
    ("dem. rep. congo", "COD"),
    ("democratic republic of congo", "COD"),
    ("democratic republic of the congo", "COD"),
    ("dpr korea", "PRK"),
    ("dprk", "PRK"),
    ("dr congo", "COD"),
    ("drc", "COD"),
    ("east timor", "TLS"),
    ("gaza", "PSE"),
    ("hong kong", "HKG"),
    ("iran", "IRN"),
    ("ivory coast", "CIV"),
    ("lao pdr", "LAO"),
    ("laos", "LAO"),
    ("macedonia", "MKD"),
    ("micronesia", "FSM"),
    ("moldova", "MDA"),
    ("north korea", "PRK"),
    ("occupied palestinian territory", "PSE"),
    ("palestine", "PSE"),
    ("republic of congo", "COG"),
    ("republic of korea", "KOR"),
    ("republic of the congo", "COG"),
    ("russia", "RUS"),
    ("south korea", "KOR"),
    ("st. kitts and nevis", "KNA"),
    ("st. lucia", "LCA"),
    ("st. vincent and the grenadines", "VCT"),
    ("swaziland", "SWZ"),
    ("syria", "SYR"),
    ("taiwan", "TWN"),
    ("tanzania", "TZA"),
    ("turkey", "TUR"),
    ("uk", "GBR"),
    ("united states", "USA"),
    ("us", "USA"),
    ("usa", "USA"),
    ("vatican", "VAT"),
    ("venezuela", "VEN"),
    ("vietnam", "VNM"),
    ("west bank", "PSE"),
];

/// Curated names by canonical form, so spacing and punctuation variants match.
static CURATED_INDEX: Lazy<HashMap<String, &'static str>> =
    Lazy::new(|| CURATED.iter().map(|(name, code)| (canonical(name), *code)).collect());

/// Canonical name → alpha-3, over every reference name in both word orders.
static CANONICAL_INDEX: Lazy<BTreeMap<String, &'static str>> = Lazy::new(|| {
    let mut index = BTreeMap::new();
    for country in COUNTRIES {
        for name in country.names() {
            index.entry(canonical(name)).or_insert(country.alpha3);
            index.entry(canonical(&reorder(name))).or_insert(country.alpha3);
        }
    }
    index
});

static ALPHA3_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| COUNTRIES.iter().map(|c| (c.alpha3, c.alpha3)).collect());

static ALPHA2_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| COUNTRIES.iter().map(|c| (c.alpha2, c.alpha3)).collect());

/// How a name was resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Curated(&'static str),
    Reference(&'static str),
    Fuzzy { code: &'static str, score: f64 },
    Unresolved,
}

impl Resolution {
    /// The ISO3 code, or "" when unresolved.
    pub fn code(&self) -> &'static str {
        match self {
            Resolution::Curated(code) | Resolution::Reference(code) => *code,
            Resolution::Fuzzy { code, .. } => *code,
            Resolution::Unresolved => "",
        }
    }

    /// Resolved without falling back to similarity.
    pub fn is_exact(&self) -> bool {
        matches!(self, Resolution::Curated(_) | Resolution::Reference(_))
    }
}

/// Resolve one country name.
pub fn resolve(name: &str) -> Resolution {
    let key = canonical(name);
    if key.is_empty() {
        return Resolution::Unresolved;
    }
    if let Some(code) = CURATED_INDEX.get(&key) {
        return Resolution::Curated(*code);
    }

    if let Some(code) = lookup_code(name) {
        return Resolution::Reference(code);
    }

    let reference = CANONICAL_INDEX
        .get(&key)
        .or_else(|| CANONICAL_INDEX.get(&canonical(&reorder(name))));
    if let Some(code) = reference {
        return Resolution::Reference(*code);
    }

    fuzzy(&key)
}

/// An alpha-3 or alpha-2 code given in place of a name.
fn lookup_code(raw: &str) -> Option<&'static str> {
    let upper = raw.trim().to_uppercase();
    if !upper.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    match upper.len() {
        3 => ALPHA3_INDEX.get(upper.as_str()).copied(),
        2 => ALPHA2_INDEX.get(upper.as_str()).copied(),
        _ => None,
    }
}

fn fuzzy(key: &str) -> Resolution {
    let mut best: Option<(&'static str, f64)> = None;
    for (candidate, code) in CANONICAL_INDEX.iter() {
        // "congo xy" is a qualified name, not a misspelling of "congo"
        if is_word_prefix(candidate, key) {
            continue;
        }
        let score = jaro_winkler(key, candidate);
        // Strictly greater keeps the first candidate in key order on ties
        if score >= FUZZY_THRESHOLD && best.map_or(true, |(_, s)| score > s) {
            best = Some((*code, score));
        }
    }
    match best {
        Some((code, score)) => Resolution::Fuzzy { code, score },
        None => Resolution::Unresolved,
    }
}

/// Whether `short` is `long` with trailing words removed.
fn is_word_prefix(short: &str, long: &str) -> bool {
    long.len() > short.len() && long.starts_with(short) && long.as_bytes()[short.len()] == b' '
}

/// Whether `code` is an assigned ISO 3166-1 alpha-3 code.
pub fn is_valid_alpha3(code: &str) -> bool {
    ALPHA3_INDEX.contains_key(code.trim().to_uppercase().as_str())
}

/// Lowercase, ASCII-folded, punctuation-free, with a standalone "the" dropped.
pub fn canonical(name: &str) -> String {
    let folded: String = name
        .to_lowercase()
        .chars()
        .map(fold_diacritic)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    folded
        .split_whitespace()
        .filter(|word| *word != "the")
        .collect::<Vec<_>>()
        .join(" ")
}

/// "Korea, Republic of" → "Republic of Korea". Names without a comma are
/// returned unchanged.
fn reorder(name: &str) -> String {
    match name.rsplit_once(',') {
        Some((head, tail)) if !tail.trim().is_empty() => format!("{} {}", tail.trim(), head.trim()),
        _ => name.to_string(),
    }
}

fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'ç' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'š' => 's',
        'ž' => 'z',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_names() {
        assert_eq!(resolve("DR Congo"), Resolution::Curated("COD"));
        assert_eq!(resolve("  ivory   coast "), Resolution::Curated("CIV"));
        assert_eq!(resolve("Turkey").code(), "TUR");
    }

    #[test]
    fn test_congo_variants_resolve_to_the_right_congo() {
        for name in ["Congo DR", "Congo (Kinshasa)", "Congo, Dem. Rep.", "Dem. Rep. Congo", "DR Congo"] {
            assert_eq!(resolve(name), Resolution::Curated("COD"), "{}", name);
        }
        for name in ["Congo (Brazzaville)", "Congo, Rep.", "Republic of the Congo"] {
            assert_eq!(resolve(name).code(), "COG", "{}", name);
        }
        assert_eq!(resolve("Congo").code(), "COG");
    }

    #[test]
    fn test_fuzzy_match_skips_names_with_extra_words() {
        assert_ne!(resolve("Congo XY").code(), "COG");
        assert!(is_word_prefix("congo", "congo xy"));
        assert!(!is_word_prefix("congo", "congolese"));
        assert!(!is_word_prefix("congo", "congo"));
    }

    #[test]
    fn test_reference_names_and_codes() {
        assert_eq!(resolve("Kenya"), Resolution::Reference("KEN"));
        assert_eq!(resolve("Republic of Kenya"), Resolution::Reference("KEN"));
        assert_eq!(resolve("Côte d'Ivoire").code(), "CIV");
        assert_eq!(resolve("Cote d'Ivoire").code(), "CIV");
        assert_eq!(resolve("Korea, Republic of"), Resolution::Reference("KOR"));
        assert_eq!(resolve("Bolivia (Plurinational State of)").code(), "BOL");
        assert_eq!(resolve("ken"), Resolution::Reference("KEN"));
        assert_eq!(resolve("PH"), Resolution::Reference("PHL"));
    }

    #[test]
    fn test_fuzzy_match_above_threshold() {
        let resolution = resolve("Philipines");
        assert_eq!(resolution.code(), "PHL");
        assert!(!resolution.is_exact());
    }

    #[test]
    fn test_unknown_names_stay_unresolved() {
        assert_eq!(resolve("Atlantis"), Resolution::Unresolved);
        assert_eq!(resolve("Atlantis").code(), "");
        assert_eq!(resolve("   "), Resolution::Unresolved);
    }

    #[test]
    fn test_canonical_form() {
        assert_eq!(canonical("The  Gambia"), "gambia");
        assert_eq!(canonical("Türkiye"), "turkiye");
        assert_eq!(reorder("Korea, Republic of"), "Republic of Korea");
        assert!(is_valid_alpha3("ken"));
        assert!(!is_valid_alpha3("XXX"));
    }
}
