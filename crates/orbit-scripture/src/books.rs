use std::collections::HashMap;
use std::sync::OnceLock;

/// Recognized book-name spellings, normalized to lowercase with internal
/// whitespace removed, mapped to the USFM code used by the scripture
/// content provider.
///
/// Multiple aliases per book are deliberate: admins type "matt", "mt", and
/// "matthew" interchangeably. Lookup is exact; there is no fuzzy matching.
const BOOK_ALIASES: &[(&str, &str)] = &[
    // Old Testament.
    ("genesis", "GEN"),
    ("gen", "GEN"),
    ("exodus", "EXO"),
    ("exo", "EXO"),
    ("ex", "EXO"),
    ("leviticus", "LEV"),
    ("lev", "LEV"),
    ("numbers", "NUM"),
    ("num", "NUM"),
    ("deuteronomy", "DEU"),
    ("deut", "DEU"),
    ("deu", "DEU"),
    ("joshua", "JOS"),
    ("josh", "JOS"),
    ("jos", "JOS"),
    ("judges", "JDG"),
    ("judg", "JDG"),
    ("jdg", "JDG"),
    ("ruth", "RUT"),
    ("1samuel", "1SA"),
    ("1sam", "1SA"),
    ("1sa", "1SA"),
    ("2samuel", "2SA"),
    ("2sam", "2SA"),
    ("2sa", "2SA"),
    ("1kings", "1KI"),
    ("1ki", "1KI"),
    ("2kings", "2KI"),
    ("2ki", "2KI"),
    ("1chronicles", "1CH"),
    ("1chron", "1CH"),
    ("1ch", "1CH"),
    ("2chronicles", "2CH"),
    ("2chron", "2CH"),
    ("2ch", "2CH"),
    ("ezra", "EZR"),
    ("ezr", "EZR"),
    ("nehemiah", "NEH"),
    ("neh", "NEH"),
    ("esther", "EST"),
    ("est", "EST"),
    ("job", "JOB"),
    ("psalms", "PSA"),
    ("psalm", "PSA"),
    ("psa", "PSA"),
    ("ps", "PSA"),
    ("proverbs", "PRO"),
    ("prov", "PRO"),
    ("pro", "PRO"),
    ("ecclesiastes", "ECC"),
    ("eccl", "ECC"),
    ("ecc", "ECC"),
    ("songofsolomon", "SNG"),
    ("song", "SNG"),
    ("sng", "SNG"),
    ("isaiah", "ISA"),
    ("isa", "ISA"),
    ("jeremiah", "JER"),
    ("jer", "JER"),
    ("lamentations", "LAM"),
    ("lam", "LAM"),
    ("ezekiel", "EZK"),
    ("ezek", "EZK"),
    ("ezk", "EZK"),
    ("daniel", "DAN"),
    ("dan", "DAN"),
    ("hosea", "HOS"),
    ("hos", "HOS"),
    ("joel", "JOL"),
    ("jol", "JOL"),
    ("amos", "AMO"),
    ("amo", "AMO"),
    ("obadiah", "OBA"),
    ("obad", "OBA"),
    ("oba", "OBA"),
    ("jonah", "JON"),
    ("jon", "JON"),
    ("micah", "MIC"),
    ("mic", "MIC"),
    ("nahum", "NAM"),
    ("nah", "NAM"),
    ("nam", "NAM"),
    ("habakkuk", "HAB"),
    ("hab", "HAB"),
    ("zephaniah", "ZEP"),
    ("zeph", "ZEP"),
    ("zep", "ZEP"),
    ("haggai", "HAG"),
    ("hag", "HAG"),
    ("zechariah", "ZEC"),
    ("zech", "ZEC"),
    ("zec", "ZEC"),
    ("malachi", "MAL"),
    ("mal", "MAL"),
    // New Testament.
    ("matthew", "MAT"),
    ("matt", "MAT"),
    ("mat", "MAT"),
    ("mt", "MAT"),
    ("mark", "MRK"),
    ("mrk", "MRK"),
    ("mk", "MRK"),
    ("luke", "LUK"),
    ("luk", "LUK"),
    ("lk", "LUK"),
    ("john", "JHN"),
    ("jhn", "JHN"),
    ("jn", "JHN"),
    ("acts", "ACT"),
    ("act", "ACT"),
    ("romans", "ROM"),
    ("rom", "ROM"),
    ("1corinthians", "1CO"),
    ("1cor", "1CO"),
    ("1co", "1CO"),
    ("2corinthians", "2CO"),
    ("2cor", "2CO"),
    ("2co", "2CO"),
    ("galatians", "GAL"),
    ("gal", "GAL"),
    ("ephesians", "EPH"),
    ("eph", "EPH"),
    ("philippians", "PHP"),
    ("phil", "PHP"),
    ("php", "PHP"),
    ("colossians", "COL"),
    ("col", "COL"),
    ("1thessalonians", "1TH"),
    ("1thess", "1TH"),
    ("1th", "1TH"),
    ("2thessalonians", "2TH"),
    ("2thess", "2TH"),
    ("2th", "2TH"),
    ("1timothy", "1TI"),
    ("1tim", "1TI"),
    ("1ti", "1TI"),
    ("2timothy", "2TI"),
    ("2tim", "2TI"),
    ("2ti", "2TI"),
    ("titus", "TIT"),
    ("tit", "TIT"),
    ("philemon", "PHM"),
    ("phlm", "PHM"),
    ("phm", "PHM"),
    ("hebrews", "HEB"),
    ("heb", "HEB"),
    ("james", "JAS"),
    ("jas", "JAS"),
    ("1peter", "1PE"),
    ("1pet", "1PE"),
    ("1pe", "1PE"),
    ("2peter", "2PE"),
    ("2pet", "2PE"),
    ("2pe", "2PE"),
    ("1john", "1JN"),
    ("1jn", "1JN"),
    ("2john", "2JN"),
    ("2jn", "2JN"),
    ("3john", "3JN"),
    ("3jn", "3JN"),
    ("jude", "JUD"),
    ("jud", "JUD"),
    ("revelation", "REV"),
    ("rev", "REV"),
];

/// Canonical English display name for each USFM code, one entry per book of
/// the Protestant canon. Every code reachable through [`BOOK_ALIASES`] has an
/// entry here (enforced by test).
const BOOK_NAMES: &[(&str, &str)] = &[
    ("GEN", "Genesis"),
    ("EXO", "Exodus"),
    ("LEV", "Leviticus"),
    ("NUM", "Numbers"),
    ("DEU", "Deuteronomy"),
    ("JOS", "Joshua"),
    ("JDG", "Judges"),
    ("RUT", "Ruth"),
    ("1SA", "1 Samuel"),
    ("2SA", "2 Samuel"),
    ("1KI", "1 Kings"),
    ("2KI", "2 Kings"),
    ("1CH", "1 Chronicles"),
    ("2CH", "2 Chronicles"),
    ("EZR", "Ezra"),
    ("NEH", "Nehemiah"),
    ("EST", "Esther"),
    ("JOB", "Job"),
    ("PSA", "Psalms"),
    ("PRO", "Proverbs"),
    ("ECC", "Ecclesiastes"),
    ("SNG", "Song of Solomon"),
    ("ISA", "Isaiah"),
    ("JER", "Jeremiah"),
    ("LAM", "Lamentations"),
    ("EZK", "Ezekiel"),
    ("DAN", "Daniel"),
    ("HOS", "Hosea"),
    ("JOL", "Joel"),
    ("AMO", "Amos"),
    ("OBA", "Obadiah"),
    ("JON", "Jonah"),
    ("MIC", "Micah"),
    ("NAM", "Nahum"),
    ("HAB", "Habakkuk"),
    ("ZEP", "Zephaniah"),
    ("HAG", "Haggai"),
    ("ZEC", "Zechariah"),
    ("MAL", "Malachi"),
    ("MAT", "Matthew"),
    ("MRK", "Mark"),
    ("LUK", "Luke"),
    ("JHN", "John"),
    ("ACT", "Acts"),
    ("ROM", "Romans"),
    ("1CO", "1 Corinthians"),
    ("2CO", "2 Corinthians"),
    ("GAL", "Galatians"),
    ("EPH", "Ephesians"),
    ("PHP", "Philippians"),
    ("COL", "Colossians"),
    ("1TH", "1 Thessalonians"),
    ("2TH", "2 Thessalonians"),
    ("1TI", "1 Timothy"),
    ("2TI", "2 Timothy"),
    ("TIT", "Titus"),
    ("PHM", "Philemon"),
    ("HEB", "Hebrews"),
    ("JAS", "James"),
    ("1PE", "1 Peter"),
    ("2PE", "2 Peter"),
    ("1JN", "1 John"),
    ("2JN", "2 John"),
    ("3JN", "3 John"),
    ("JUD", "Jude"),
    ("REV", "Revelation"),
];

fn alias_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| BOOK_ALIASES.iter().copied().collect())
}

fn name_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| BOOK_NAMES.iter().copied().collect())
}

/// Resolve a normalized alias (lowercase, internal whitespace removed) to its
/// USFM code. Callers are responsible for the normalization; see
/// [`crate::ScriptureRef::parse`].
pub fn book_code(alias: &str) -> Option<&'static str> {
    alias_table().get(alias).copied()
}

/// Canonical English display name for a USFM code.
pub fn book_display_name(code: &str) -> Option<&'static str> {
    name_table().get(code).copied()
}
