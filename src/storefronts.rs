//! Static table of iTunes Store storefronts.
//!
//! A storefront is a regional catalog identified by a two-letter code. The
//! table is display data, not logic: the lookup API takes the code as its
//! `country` parameter and the name/flag are only ever printed.

/// One regional storefront.
#[derive(Debug, Clone, Copy)]
pub struct Storefront {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

/// Storefront codes queried when `--storefront` is not given.
pub const DEFAULT_STOREFRONTS: [&str; 3] = ["US", "JP", "FR"];

pub const STOREFRONTS: &[Storefront] = &[
    Storefront { code: "AU", name: "Australia", flag: "🇦🇺" },
    Storefront { code: "AT", name: "Austria", flag: "🇦🇹" },
    Storefront { code: "BE", name: "Belgium", flag: "🇧🇪" },
    Storefront { code: "BR", name: "Brazil", flag: "🇧🇷" },
    Storefront { code: "CA", name: "Canada", flag: "🇨🇦" },
    Storefront { code: "CL", name: "Chile", flag: "🇨🇱" },
    Storefront { code: "CN", name: "China", flag: "🇨🇳" },
    Storefront { code: "DK", name: "Denmark", flag: "🇩🇰" },
    Storefront { code: "FI", name: "Finland", flag: "🇫🇮" },
    Storefront { code: "FR", name: "France", flag: "🇫🇷" },
    Storefront { code: "DE", name: "Germany", flag: "🇩🇪" },
    Storefront { code: "GR", name: "Greece", flag: "🇬🇷" },
    Storefront { code: "HK", name: "Hong Kong", flag: "🇭🇰" },
    Storefront { code: "IN", name: "India", flag: "🇮🇳" },
    Storefront { code: "ID", name: "Indonesia", flag: "🇮🇩" },
    Storefront { code: "IE", name: "Ireland", flag: "🇮🇪" },
    Storefront { code: "IT", name: "Italy", flag: "🇮🇹" },
    Storefront { code: "JP", name: "Japan", flag: "🇯🇵" },
    Storefront { code: "MX", name: "Mexico", flag: "🇲🇽" },
    Storefront { code: "NL", name: "Netherlands", flag: "🇳🇱" },
    Storefront { code: "NZ", name: "New Zealand", flag: "🇳🇿" },
    Storefront { code: "NO", name: "Norway", flag: "🇳🇴" },
    Storefront { code: "PL", name: "Poland", flag: "🇵🇱" },
    Storefront { code: "PT", name: "Portugal", flag: "🇵🇹" },
    Storefront { code: "RU", name: "Russia", flag: "🇷🇺" },
    Storefront { code: "SG", name: "Singapore", flag: "🇸🇬" },
    Storefront { code: "ZA", name: "South Africa", flag: "🇿🇦" },
    Storefront { code: "KR", name: "South Korea", flag: "🇰🇷" },
    Storefront { code: "ES", name: "Spain", flag: "🇪🇸" },
    Storefront { code: "SE", name: "Sweden", flag: "🇸🇪" },
    Storefront { code: "CH", name: "Switzerland", flag: "🇨🇭" },
    Storefront { code: "TW", name: "Taiwan", flag: "🇹🇼" },
    Storefront { code: "TH", name: "Thailand", flag: "🇹🇭" },
    Storefront { code: "TR", name: "Turkey", flag: "🇹🇷" },
    Storefront { code: "GB", name: "United Kingdom", flag: "🇬🇧" },
    Storefront { code: "US", name: "United States", flag: "🇺🇸" },
];

/// Finds a storefront by its two-letter code, case-insensitively.
pub fn find(code: &str) -> Option<&'static Storefront> {
    STOREFRONTS.iter().find(|s| s.code.eq_ignore_ascii_case(code))
}
