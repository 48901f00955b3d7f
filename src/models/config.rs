use clap::ValueEnum;

/// Rule set mapping a raw directory name to its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NamingPolicy {
    /// Separators to spaces, title case; all-digit names become `Directory {n}`
    Generic,
    /// All-digit names become Persian ordinals; other names keep their case
    #[value(name = "ordinal")]
    LocalizedOrdinal,
}

/// Comparator used to sequence qualifying directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderingPolicy {
    /// Plain ascending sort over the raw directory name
    Lexicographic,
    /// All-digit names first by numeric value, then the rest lexicographically
    NumericFirst,
}

/// Language of the generated page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    English,
    Persian,
}

/// Per-locale strings baked into the page shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageText {
    pub lang: &'static str,
    pub dir: &'static str,
    pub title: &'static str,
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub empty_message: &'static str,
    pub footer: &'static str,
    pub badge: &'static str,
}

const ENGLISH_TEXT: PageText = PageText {
    lang: "en",
    dir: "ltr",
    title: "Directory Browser",
    heading: "📚 Directory Browser",
    subtitle: "Select a directory to view its contents",
    empty_message: "No directories with index.html found",
    footer: "GitHub Pages Directory Browser",
    badge: "Auto-generated",
};

const PERSIAN_TEXT: PageText = PageText {
    lang: "fa",
    dir: "rtl",
    title: "مرورگر پوشه‌ها",
    heading: "📚 مرورگر پوشه‌ها",
    subtitle: "برای دیدن محتوا یک پوشه را انتخاب کنید",
    empty_message: "هیچ پوشه‌ای با فایل index.html پیدا نشد",
    footer: "مرورگر پوشه‌های GitHub Pages",
    badge: "تولید خودکار",
};

impl Locale {
    pub fn text(self) -> PageText {
        match self {
            Locale::English => ENGLISH_TEXT,
            Locale::Persian => PERSIAN_TEXT,
        }
    }
}

/// Full configuration for one generator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    pub naming: NamingPolicy,
    pub ordering: OrderingPolicy,
    pub locale: Locale,
}

impl IndexConfig {
    /// Generic naming, lexicographic ordering, English page
    pub fn english() -> Self {
        Self {
            naming: NamingPolicy::Generic,
            ordering: OrderingPolicy::Lexicographic,
            locale: Locale::English,
        }
    }

    /// Persian ordinals, numeric-first ordering, right-to-left Persian page
    pub fn persian() -> Self {
        Self {
            naming: NamingPolicy::LocalizedOrdinal,
            ordering: OrderingPolicy::NumericFirst,
            locale: Locale::Persian,
        }
    }

    /// Preset for the given page language
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::English => Self::english(),
            Locale::Persian => Self::persian(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::english()
    }
}
