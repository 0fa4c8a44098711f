//! Static table from region name to informational page.

use std::collections::HashMap;

use crate::boundary::Boundaries;

/// Tourist information pages, keyed by ASCII-simplified voivodeship name.
///
/// Keys are matched exactly against the dataset names. Datasets that spell
/// regions with diacritics ("Śląskie") will not match these keys.
const BUILTIN_LINKS: &[(&str, &str)] = &[
    (
        "Slaskie",
        "https://slaskie.travel/article/1020330/wybrane-atrakcje-wojewodztwa-slaskiego-top-20",
    ),
    ("Malopolskie", "https://visitmalopolska.pl/en_GB"),
    (
        "Pomorskie",
        "https://odkryjpomorze.pl/artykul/pomorskie-atrakcje-turystyczne",
    ),
    (
        "Lodzkie",
        "https://www.lodzkie.pl/turystyka/turystyka-w-lodzkiem/odkrywaj-lodzki/przyrodniczo",
    ),
    (
        "Swietokrzyskie",
        "https://swietokrzyskie.pl/atrakcje-turystyczne-w-wojewodztwie-swietokrzyskim/",
    ),
    ("Dolnoslaskie", "https://dolnyslask.travel/"),
    (
        "Warminsko-Mazurskie",
        "https://www.polska.travel/warminsko-mazurskie/",
    ),
    (
        "Zachodniopomorskie",
        "https://www.polska.travel/zachodniopomorskie/",
    ),
    ("Mazowieckie", "https://mazowsze.travel/"),
    (
        "Podkarpackie",
        "https://podkarpackie.travel/podkarpackie--turystyczne-top-10",
    ),
    ("Lubelskie", "https://www.polska.travel/lubelskie/"),
    ("Lubuskie", "https://atrakcjelubuskie.pl/"),
    ("Opolskie", "https://www.visitopolskie.pl/"),
    (
        "Podlaskie",
        "https://visit.podlaskie.eu/turystyka/top-10-w-podlaskiem/",
    ),
    (
        "Wielkopolskie",
        "https://polskapogodzinach.pl/wielkopolska-atrakcje-turystyczne/",
    ),
    (
        "Kujawsko-Pomorskie",
        "https://kujawsko-pomorskie.travel/pl/content/mapa-atrakcji-turystycznych",
    ),
];

/// Read-only lookup from region identifier to URL.
///
/// Built once at startup and never mutated. A missing key is an expected
/// outcome, not an error.
#[derive(Debug, Clone, Default)]
pub struct RegionLinks {
    links: HashMap<String, String>,
}

impl RegionLinks {
    /// The compiled-in table of sixteen voivodeship links.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_LINKS.iter().copied())
    }

    /// Build a table from `(identifier, url)` pairs. Later pairs win.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            links: pairs
                .into_iter()
                .map(|(region, url)| (region.into(), url.into()))
                .collect(),
        }
    }

    /// Look up the URL for `identifier`, unchanged as configured.
    pub fn lookup(&self, identifier: &str) -> Option<&str> {
        self.links.get(identifier).map(String::as_str)
    }

    /// Iterate over `(identifier, url)` entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.links
            .iter()
            .map(|(region, url)| (region.as_str(), url.as_str()))
    }

    /// Table keys that no feature in `boundaries` is named after, sorted.
    ///
    /// Clicks can never reach these entries.
    pub fn unlinked_keys(&self, boundaries: &Boundaries) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .links
            .keys()
            .map(String::as_str)
            .filter(|key| !boundaries.contains(key))
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Number of configured links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
