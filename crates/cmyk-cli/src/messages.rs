//! User-facing text in English and Russian

use clap::ValueEnum;
use cmyk_core::InputMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Lang {
    #[default]
    En,
    Ru,
}

/// Message catalog for one language
pub struct Messages {
    pub preview: &'static str,
    pub cmyk_output: &'static str,
    pub color_spaces: &'static str,
    pub invalid_hex: &'static str,
    pub invalid_rgb: &'static str,
    pub loading_icc: &'static str,
    pub loading_badge: &'static str,
    pub error_badge: &'static str,
    pub icc_note: &'static str,
    pub icc_disabled: &'static str,
    pub icc_ready: &'static str,
    pub prompt_help: &'static str,
    all_match: fn(usize) -> String,
    unique_results: fn(usize, usize) -> String,
    profile_descriptions: [(&'static str, &'static str); 4],
}

impl Messages {
    pub fn get(lang: Lang) -> &'static Messages {
        match lang {
            Lang::En => &EN,
            Lang::Ru => &RU,
        }
    }

    pub fn invalid_input(&self, mode: InputMode) -> &'static str {
        match mode {
            InputMode::Hex => self.invalid_hex,
            InputMode::Rgb => self.invalid_rgb,
        }
    }

    pub fn all_match(&self, total: usize) -> String {
        (self.all_match)(total)
    }

    pub fn unique_results(&self, unique: usize, total: usize) -> String {
        (self.unique_results)(unique, total)
    }

    /// Localized description of a default profile
    pub fn profile_description(&self, key: &str) -> Option<&'static str> {
        self.profile_descriptions
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, desc)| *desc)
    }
}

fn en_all_match(n: usize) -> String {
    format!("All {n} libraries produce identical results")
}

fn en_unique_results(u: usize, n: usize) -> String {
    format!("{u} unique results among {n} libraries")
}

fn ru_all_match(n: usize) -> String {
    format!("Все {n} библиотек дают одинаковый результат")
}

fn ru_unique_results(u: usize, n: usize) -> String {
    format!("{u} уникальных результатов из {n} библиотек")
}

static EN: Messages = Messages {
    preview: "PREVIEW",
    cmyk_output: "CMYK OUTPUT",
    color_spaces: "Color Spaces",
    invalid_hex: "Invalid HEX // Expected: #RRGGBB or RRGGBB",
    invalid_rgb: "Invalid RGB // Expected: R, G, B (0-255)",
    loading_icc: "Loading ICC profiles...",
    loading_badge: "loading...",
    error_badge: "error",
    icc_note: "ICC Profiles use industry-standard profiles for professional print workflows",
    icc_disabled: "ICC profiles disabled",
    icc_ready: "ICC profiles ready",
    prompt_help: "Enter a color, :hex or :rgb to switch mode, :quit to exit",
    all_match: en_all_match,
    unique_results: en_unique_results,
    profile_descriptions: [
        ("generic", "Generic device profile (baseline)"),
        ("fogra39", "European coated paper (ISO 12647-2)"),
        ("gracol", "North American commercial printing"),
        ("swop", "North American web offset printing"),
    ],
};

static RU: Messages = Messages {
    preview: "ПРЕДПРОСМОТР",
    cmyk_output: "CMYK РЕЗУЛЬТАТ",
    color_spaces: "Цветовые пространства",
    invalid_hex: "Неверный HEX // Ожидается: #RRGGBB или RRGGBB",
    invalid_rgb: "Неверный RGB // Ожидается: R, G, B (0-255)",
    loading_icc: "Загрузка ICC профилей...",
    loading_badge: "загрузка...",
    error_badge: "ошибка",
    icc_note: "ICC профили используют отраслевые стандарты для профессиональной печати",
    icc_disabled: "ICC профили отключены",
    icc_ready: "ICC профили загружены",
    prompt_help: "Введите цвет, :hex или :rgb для смены режима, :quit для выхода",
    all_match: ru_all_match,
    unique_results: ru_unique_results,
    profile_descriptions: [
        ("generic", "Базовый профиль устройства"),
        ("fogra39", "Европейская мелованная бумага (ISO 12647-2)"),
        ("gracol", "Коммерческая печать (Сев. Америка)"),
        ("swop", "Рулонная офсетная печать (Сев. Америка)"),
    ],
};
