use std::sync::LazyLock;

use regex::Regex;

/// TRGS 510 storage class codes, least to most specific. Classification
/// scans this in reverse so composite codes win over their short prefixes
/// ("10-13" before "13" before "1").
pub const STORAGE_CLASSES: &[&str] = &[
    "1", "2A", "2B", "3", "4.1A", "4.1B", "4.2", "4.3", "5.1A", "5.1B", "5.1C",
    "5.2", "6.1A", "6.1B", "6.1C", "6.1D", "6.2", "7", "8A", "8B", "10", "11",
    "12", "13", "10-13",
];

/// Keyword line with the product name on the following line.
pub static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)((handels?)?name|produktidentifikator)(\s*)\n(.*)").unwrap());

pub static SIGNAL_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)(signalwort|signalwörter)\r?\n?(.*)").unwrap());

pub static STORAGE_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)lagerklasse(.*)").unwrap());

/// H/P statement token, up to three chained with `+` or a space for
/// combination statements like "P305 + P351 + P338".
pub static STATEMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)(\s?\+?\s?E?U?[HP][0-9]{3}[a-zA-Z]{0,2}){1,3}").unwrap());

pub static GHS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)ghs\s?-?[0-9]{2}").unwrap());

pub static WGK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)(wassergefährdungsklasse|wgk)\s+?(\d)").unwrap());
