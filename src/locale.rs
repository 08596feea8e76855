/// Report language. English is the primary locale and the fallback for anything unknown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Language {
    #[default]
    En,
    Tr,
}

/// Message templates for one language. Placeholders are `{name}` and are filled in by
/// the reporter; the `$` and unit suffixes live in the templates themselves.
#[derive(Debug)]
pub(crate) struct Messages {
    pub title: &'static str,
    pub count: &'static str,
    pub avg_price: &'static str,
    pub median_price: &'static str,
    pub avg_size: &'static str,
    pub avg_psf: &'static str,
    pub by_beds: &'static str,
    pub by_beds_line: &'static str,
    pub top_title: &'static str,
    pub top_line: &'static str,
}

static ENGLISH: Messages = Messages {
    title: "Rental market summary",
    count: "Listings analyzed: {count}",
    avg_price: "Average monthly rent: ${value}",
    median_price: "Median monthly rent: ${value}",
    avg_size: "Average size: {value} sqft",
    avg_psf: "Average price per sqft: ${value}",
    by_beds: "Average price by bedroom count:",
    by_beds_line: "  {bedrooms} BR: ${price}",
    top_title: "Top listings by price:",
    top_line: "  ID {id}: ${price} | {bedrooms} BR / {bathrooms} BA | {size} sqft | ${psf}/sqft",
};

static TURKISH: Messages = Messages {
    title: "Kira piyasası özeti",
    count: "İncelenen ilan sayısı: {count}",
    avg_price: "Ortalama aylık kira: ${value}",
    median_price: "Medyan aylık kira: ${value}",
    avg_size: "Ortalama büyüklük: {value} ft²",
    avg_psf: "Metrekare başına ortalama fiyat: ${value}",
    by_beds: "Oda sayısına göre ortalama kira:",
    by_beds_line: "  {bedrooms} oda: ${price}",
    top_title: "Fiyata göre en pahalı ilanlar:",
    top_line: "  ID {id}: ${price} | {bedrooms} oda / {bathrooms} banyo | {size} ft² | ${psf}/ft²",
};

impl Language {
    /// Never fails: unrecognized codes get English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "tr" => Language::Tr,
            _ => Language::En,
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Language::En => &ENGLISH,
            Language::Tr => &TURKISH,
        }
    }
}
