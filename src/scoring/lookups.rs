// Static display lookups: country, language, creator tier.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub dial_code: &'static str,
    /// Majority religion, a cosmetic placeholder shown next to the flag.
    pub religion: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const UNKNOWN_COUNTRY: CountryInfo = CountryInfo {
    code: "",
    name: "Unknown",
    dial_code: "",
    religion: "Unknown",
};

const UNKNOWN_LANGUAGE: LanguageInfo = LanguageInfo {
    code: "",
    name: "Unknown",
    description: "Language not specified",
};

const COUNTRIES: &[CountryInfo] = &[
    CountryInfo { code: "US", name: "United States", dial_code: "+1", religion: "Christianity" },
    CountryInfo { code: "GB", name: "United Kingdom", dial_code: "+44", religion: "Christianity" },
    CountryInfo { code: "CA", name: "Canada", dial_code: "+1", religion: "Christianity" },
    CountryInfo { code: "AU", name: "Australia", dial_code: "+61", religion: "Christianity" },
    CountryInfo { code: "DE", name: "Germany", dial_code: "+49", religion: "Christianity" },
    CountryInfo { code: "FR", name: "France", dial_code: "+33", religion: "Christianity" },
    CountryInfo { code: "ES", name: "Spain", dial_code: "+34", religion: "Christianity" },
    CountryInfo { code: "IT", name: "Italy", dial_code: "+39", religion: "Christianity" },
    CountryInfo { code: "BR", name: "Brazil", dial_code: "+55", religion: "Christianity" },
    CountryInfo { code: "MX", name: "Mexico", dial_code: "+52", religion: "Christianity" },
    CountryInfo { code: "IN", name: "India", dial_code: "+91", religion: "Hinduism" },
    CountryInfo { code: "PK", name: "Pakistan", dial_code: "+92", religion: "Islam" },
    CountryInfo { code: "BD", name: "Bangladesh", dial_code: "+880", religion: "Islam" },
    CountryInfo { code: "ID", name: "Indonesia", dial_code: "+62", religion: "Islam" },
    CountryInfo { code: "PH", name: "Philippines", dial_code: "+63", religion: "Christianity" },
    CountryInfo { code: "JP", name: "Japan", dial_code: "+81", religion: "Shinto" },
    CountryInfo { code: "KR", name: "South Korea", dial_code: "+82", religion: "None" },
    CountryInfo { code: "RU", name: "Russia", dial_code: "+7", religion: "Christianity" },
    CountryInfo { code: "TR", name: "Turkey", dial_code: "+90", religion: "Islam" },
    CountryInfo { code: "SA", name: "Saudi Arabia", dial_code: "+966", religion: "Islam" },
    CountryInfo { code: "AE", name: "United Arab Emirates", dial_code: "+971", religion: "Islam" },
    CountryInfo { code: "EG", name: "Egypt", dial_code: "+20", religion: "Islam" },
    CountryInfo { code: "NG", name: "Nigeria", dial_code: "+234", religion: "Christianity" },
    CountryInfo { code: "ZA", name: "South Africa", dial_code: "+27", religion: "Christianity" },
    CountryInfo { code: "VN", name: "Vietnam", dial_code: "+84", religion: "Buddhism" },
    CountryInfo { code: "TH", name: "Thailand", dial_code: "+66", religion: "Buddhism" },
];

const LANGUAGES: &[LanguageInfo] = &[
    LanguageInfo { code: "en", name: "English", description: "Largest advertiser market on YouTube" },
    LanguageInfo { code: "es", name: "Spanish", description: "Second-largest audience across the Americas and Spain" },
    LanguageInfo { code: "pt", name: "Portuguese", description: "Driven mostly by Brazilian viewers" },
    LanguageInfo { code: "hi", name: "Hindi", description: "Huge audience, lower average ad rates" },
    LanguageInfo { code: "ar", name: "Arabic", description: "Spread across the Middle East and North Africa" },
    LanguageInfo { code: "fr", name: "French", description: "France, Canada and West Africa" },
    LanguageInfo { code: "de", name: "German", description: "High ad rates in a mid-sized market" },
    LanguageInfo { code: "ja", name: "Japanese", description: "Strong domestic advertiser base" },
    LanguageInfo { code: "ko", name: "Korean", description: "Strong domestic advertiser base" },
    LanguageInfo { code: "ru", name: "Russian", description: "Large audience, volatile ad market" },
    LanguageInfo { code: "id", name: "Indonesian", description: "Fast-growing audience, lower ad rates" },
    LanguageInfo { code: "tr", name: "Turkish", description: "Large audience, lower ad rates" },
    LanguageInfo { code: "it", name: "Italian", description: "Mid-sized European market" },
    LanguageInfo { code: "ur", name: "Urdu", description: "Pakistan and northern India" },
    LanguageInfo { code: "bn", name: "Bengali", description: "Bangladesh and eastern India" },
];

/// Look up a country by ISO 3166-1 alpha-2 code, any case.
pub fn country(code: Option<&str>) -> CountryInfo {
    code.and_then(|c| COUNTRIES.iter().find(|info| info.code.eq_ignore_ascii_case(c.trim())))
        .copied()
        .unwrap_or(UNKNOWN_COUNTRY)
}

/// Look up a language by code. Regional suffixes (`en-US`) fall back to the base language.
pub fn language(code: Option<&str>) -> LanguageInfo {
    code.map(|c| c.trim().split(['-', '_']).next().unwrap_or(""))
        .and_then(|base| LANGUAGES.iter().find(|info| info.code.eq_ignore_ascii_case(base)))
        .copied()
        .unwrap_or(UNKNOWN_LANGUAGE)
}

/// Creator tier by subscriber count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CreatorTier {
    New,
    Graphite,
    Opal,
    Bronze,
    Silver,
    Gold,
    Diamond,
    #[serde(rename = "Red Diamond")]
    RedDiamond,
}

impl CreatorTier {
    pub fn from_subscribers(subscribers: u64) -> Self {
        match subscribers {
            s if s >= 100_000_000 => CreatorTier::RedDiamond,
            s if s >= 10_000_000 => CreatorTier::Diamond,
            s if s >= 1_000_000 => CreatorTier::Gold,
            s if s >= 100_000 => CreatorTier::Silver,
            s if s >= 10_000 => CreatorTier::Bronze,
            s if s >= 1_000 => CreatorTier::Opal,
            s if s >= 100 => CreatorTier::Graphite,
            _ => CreatorTier::New,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CreatorTier::New => "New",
            CreatorTier::Graphite => "Graphite",
            CreatorTier::Opal => "Opal",
            CreatorTier::Bronze => "Bronze",
            CreatorTier::Silver => "Silver",
            CreatorTier::Gold => "Gold",
            CreatorTier::Diamond => "Diamond",
            CreatorTier::RedDiamond => "Red Diamond",
        }
    }
}

impl std::fmt::Display for CreatorTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
