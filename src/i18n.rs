use crate::controller::Summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Fa,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fa => "fa",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fa => "فارسی",
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            Language::En => Language::Fa,
            Language::Fa => Language::En,
        }
    }
}

fn get_string(lang: Language, key: &str) -> &'static str {
    match lang {
        Language::En => en(key),
        Language::Fa => {
            let val = fa(key);
            if val.is_empty() { en(key) } else { val }
        }
    }
}

pub fn t(lang: Language, key: &str, vars: &[(&str, &str)]) -> String {
    let mut s = get_string(lang, key).to_string();
    for (k, v) in vars {
        s = s.replace(&format!("{{{{{}}}}}", k), v);
    }
    s
}

pub fn ts(lang: Language, key: &str) -> String {
    get_string(lang, key).to_string()
}

/// Renders the controller summary, pluralized by the total count.
pub fn summary_text(lang: Language, summary: &Summary) -> String {
    match summary {
        Summary::NotSearched => ts(lang, "summary_not_searched"),
        Summary::Searching => ts(lang, "summary_searching"),
        Summary::Error => ts(lang, "summary_error"),
        Summary::Empty => ts(lang, "summary_empty"),
        Summary::Showing { shown, total } => {
            let key = if *total == 1 {
                "summary_showing_one"
            } else {
                "summary_showing_many"
            };
            t(
                lang,
                key,
                &[("shown", &shown.to_string()), ("total", &total.to_string())],
            )
        }
    }
}

fn en(key: &str) -> &'static str {
    match key {
        "app_title" => "Deep Search",
        "search_button" => "Start searching",
        "search_button_loading" => "Searching...",
        "reset_button" => "Reset",
        "results_heading" => "Search results",
        "summary_not_searched" => "Search to get started.",
        "summary_searching" => "Searching the documents...",
        "summary_error" => "Could not fetch results.",
        "summary_empty" => "No documents matched your search.",
        "summary_showing_one" => "Showing {{shown}} of {{total}} result",
        "summary_showing_many" => "Showing {{shown}} of {{total}} results",
        "empty_title" => "No results found",
        "empty_hint" => "Add detail or try synonyms to improve your odds.",
        "result_badge" => "Document {{id}}",
        "result_title" => "Semantic match",
        "metadata_toggle" => "More information",
        "confidence" => "Confidence {{pct}}%",
        "updated_at" => "Updated at {{time}}",
        _ => "",
    }
}

fn fa(key: &str) -> &'static str {
    match key {
        "search_button" => "شروع جست‌وجو",
        "search_button_loading" => "در حال جست‌وجو...",
        "reset_button" => "بازنشانی",
        "results_heading" => "نتایج جست‌وجو",
        "summary_not_searched" => "برای شروع، عبارت مورد نظر خود را جست‌وجو کنید.",
        "summary_searching" => "در حال جست‌وجوی دقیق در میان مستندات...",
        "summary_error" => "امکان دریافت نتایج وجود نداشت.",
        "summary_empty" => "هیچ مدرکی مطابق جست‌وجوی شما یافت نشد.",
        "summary_showing_one" => "نمایش {{shown}} از {{total}} نتیجه مرتبط",
        "summary_showing_many" => "نمایش {{shown}} از {{total}} نتایج مرتبط",
        "empty_title" => "نتیجه‌ای یافت نشد",
        "empty_hint" => "با افزودن جزئیات یا استفاده از عبارت‌های مترادف شانس خود را افزایش دهید.",
        "result_badge" => "سند شماره {{id}}",
        "result_title" => "انطباق هوشمند",
        "metadata_toggle" => "اطلاعات تکمیلی",
        "confidence" => "اعتماد {{pct}}%",
        "updated_at" => "بروزرسانی در {{time}}",
        _ => "",
    }
}
